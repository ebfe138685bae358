use crate::models::{NotificationMessage, ToastLevel};
use chrono::Utc;
use tauri::Emitter;
use uuid::Uuid;

pub const TOAST_EVENT: &str = "app://toast";

pub trait ToastSink: Send + Sync {
    fn push(&self, level: ToastLevel, message: &str);
}

pub struct WebviewToasts<R: tauri::Runtime> {
    app: tauri::AppHandle<R>,
}

impl<R: tauri::Runtime> WebviewToasts<R> {
    pub fn new(app: tauri::AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: tauri::Runtime> ToastSink for WebviewToasts<R> {
    fn push(&self, level: ToastLevel, message: &str) {
        let envelope = NotificationMessage {
            id: Uuid::new_v4().to_string(),
            level,
            message: message.to_string(),
            timestamp: Utc::now(),
        };
        if let Err(error) = self.app.emit(TOAST_EVENT, envelope) {
            tracing::warn!(error = %error, level = level.as_str(), "failed to emit toast");
        }
    }
}
