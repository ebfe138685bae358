use crate::models::CountdownUpdate;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tauri::Emitter;
use tokio::task::JoinHandle;
use tokio::time::Duration;

pub const COUNTDOWN_EVENT: &str = "leads://countdown";

pub fn remaining_label(
    created: DateTime<Utc>,
    now: DateTime<Utc>,
    window: chrono::Duration,
) -> Option<String> {
    let elapsed = now.signed_duration_since(created);
    if elapsed >= window {
        return None;
    }

    let remaining = window - elapsed;
    let hours = remaining.num_hours();
    let minutes = remaining.num_minutes() % 60;
    Some(format!("{}h {:02}m", hours, minutes))
}

pub trait CountdownSink: Send + Sync {
    fn tick(&self, lead_name: &str, label: &str);
    fn expired(&self, lead_name: &str);
}

pub struct WebviewCountdown<R: tauri::Runtime> {
    app: tauri::AppHandle<R>,
}

impl<R: tauri::Runtime> WebviewCountdown<R> {
    pub fn new(app: tauri::AppHandle<R>) -> Self {
        Self { app }
    }

    fn emit(&self, lead_name: &str, label: Option<String>) {
        let update = CountdownUpdate {
            lead_name: lead_name.to_string(),
            label,
        };
        if let Err(error) = self.app.emit(COUNTDOWN_EVENT, update) {
            tracing::warn!(error = %error, "failed to emit countdown update");
        }
    }
}

impl<R: tauri::Runtime> CountdownSink for WebviewCountdown<R> {
    fn tick(&self, lead_name: &str, label: &str) {
        self.emit(lead_name, Some(label.to_string()));
    }

    fn expired(&self, lead_name: &str) {
        self.emit(lead_name, None);
    }
}

struct TickerHandle {
    created_time: DateTime<Utc>,
    task: JoinHandle<()>,
}

pub struct CountdownRegistry {
    sink: Arc<dyn CountdownSink>,
    window: chrono::Duration,
    tick_period: Duration,
    tickers: Mutex<HashMap<String, TickerHandle>>,
}

impl CountdownRegistry {
    pub fn new(sink: Arc<dyn CountdownSink>, window: chrono::Duration, tick_period: Duration) -> Self {
        Self {
            sink,
            window,
            tick_period,
            tickers: Mutex::new(HashMap::new()),
        }
    }

    pub fn start(&self, lead_name: &str, created_time: DateTime<Utc>) {
        let mut tickers = self.tickers.lock().expect("ticker map lock");
        if let Some(existing) = tickers.get(lead_name) {
            // Re-attach with an unchanged timestamp while the ticker is live
            // recomputes to the same schedule; leave it running.
            if existing.created_time == created_time && !existing.task.is_finished() {
                return;
            }
        }
        if let Some(previous) = tickers.remove(lead_name) {
            previous.task.abort();
        }

        let sink = self.sink.clone();
        let window = self.window;
        let period = self.tick_period;
        let name = lead_name.to_string();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                match remaining_label(created_time, Utc::now(), window) {
                    Some(label) => sink.tick(&name, &label),
                    None => {
                        sink.expired(&name);
                        break;
                    }
                }
            }
        });

        tickers.insert(lead_name.to_string(), TickerHandle { created_time, task });
    }

    pub fn stop(&self, lead_name: &str) -> bool {
        let mut tickers = self.tickers.lock().expect("ticker map lock");
        match tickers.remove(lead_name) {
            Some(handle) => {
                handle.task.abort();
                true
            }
            None => false,
        }
    }
}

impl Drop for CountdownRegistry {
    fn drop(&mut self) {
        let tickers = self.tickers.lock().expect("ticker map lock");
        for handle in tickers.values() {
            handle.task.abort();
        }
    }
}
