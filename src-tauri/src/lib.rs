mod actions;
mod config;
mod countdown;
mod errors;
mod fixtures;
mod leads;
mod links;
mod models;
mod notify;
mod share;
mod store;

use crate::countdown::{CountdownSink, WebviewCountdown};
use crate::leads::LeadsCore;
use crate::models::{
    AcceptedResponse, AppSettings, BookOpdPayload, BookSvfPayload, BooleanResponse, ContactKind,
    FollowUpPayload, Lead, LeadCounts, LeadListResponse, ScheduleVcPayload, ShareResponse,
    UpdateLeadPayload, XrayRequestPayload,
};
use crate::notify::{ToastSink, WebviewToasts};
use crate::share::{PlatformShare, ShareDelivery};
use std::path::Path;
use std::sync::Arc;
use tauri::Manager;
use tauri_plugin_shell::ShellExt;
use tracing_appender::non_blocking::WorkerGuard;

static LOG_GUARD: std::sync::OnceLock<WorkerGuard> = std::sync::OnceLock::new();

#[derive(Clone)]
struct AppState {
    core: Arc<LeadsCore>,
}

#[tauri::command]
async fn fetch_leads(state: tauri::State<'_, AppState>) -> Result<AcceptedResponse, String> {
    state.core.fetch_leads().await;
    Ok(AcceptedResponse { accepted: true })
}

#[tauri::command]
fn list_leads(state: tauri::State<'_, AppState>) -> Result<LeadListResponse, String> {
    Ok(state.core.list_leads())
}

#[tauri::command]
fn set_search_term(state: tauri::State<'_, AppState>, term: String) -> Result<BooleanResponse, String> {
    state.core.set_search_term(&term);
    Ok(BooleanResponse { success: true })
}

#[tauri::command]
fn get_lead(state: tauri::State<'_, AppState>, lead_name: String) -> Result<Option<Lead>, String> {
    Ok(state.core.get_lead(&lead_name))
}

#[tauri::command]
fn lead_counts(state: tauri::State<'_, AppState>) -> Result<LeadCounts, String> {
    Ok(state.core.lead_counts())
}

#[tauri::command]
fn share_lead(state: tauri::State<'_, AppState>, lead_name: String) -> Result<ShareResponse, String> {
    state.core.share_lead(&lead_name).map_err(to_client_error)
}

#[tauri::command]
fn contact_link(
    state: tauri::State<'_, AppState>,
    lead_name: String,
    kind: ContactKind,
) -> Result<String, String> {
    state.core.contact_link(&lead_name, kind).map_err(to_client_error)
}

#[tauri::command]
fn open_contact(
    app: tauri::AppHandle,
    state: tauri::State<'_, AppState>,
    lead_name: String,
    kind: ContactKind,
) -> Result<BooleanResponse, String> {
    let url = state.core.contact_link(&lead_name, kind).map_err(to_client_error)?;
    app.shell().open(url, None).map_err(to_client_error)?;
    Ok(BooleanResponse { success: true })
}

#[tauri::command]
async fn countdown_start(
    state: tauri::State<'_, AppState>,
    lead_name: String,
) -> Result<BooleanResponse, String> {
    state.core.countdown_start(&lead_name).map_err(to_client_error)?;
    Ok(BooleanResponse { success: true })
}

#[tauri::command]
fn countdown_stop(
    state: tauri::State<'_, AppState>,
    lead_name: String,
) -> Result<BooleanResponse, String> {
    Ok(BooleanResponse {
        success: state.core.countdown_stop(&lead_name),
    })
}

#[tauri::command]
fn log_follow_up(
    state: tauri::State<'_, AppState>,
    payload: FollowUpPayload,
) -> Result<AcceptedResponse, String> {
    state.core.log_follow_up(payload).map_err(to_client_error)
}

#[tauri::command]
fn book_opd(
    state: tauri::State<'_, AppState>,
    payload: BookOpdPayload,
) -> Result<AcceptedResponse, String> {
    state.core.book_opd(payload).map_err(to_client_error)
}

#[tauri::command]
fn book_svf(
    state: tauri::State<'_, AppState>,
    payload: BookSvfPayload,
) -> Result<AcceptedResponse, String> {
    state.core.book_svf(payload).map_err(to_client_error)
}

#[tauri::command]
fn schedule_vc(
    state: tauri::State<'_, AppState>,
    payload: ScheduleVcPayload,
) -> Result<AcceptedResponse, String> {
    state.core.schedule_vc(payload).map_err(to_client_error)
}

#[tauri::command]
fn request_xray(
    state: tauri::State<'_, AppState>,
    payload: XrayRequestPayload,
) -> Result<AcceptedResponse, String> {
    state.core.request_xray(payload).map_err(to_client_error)
}

#[tauri::command]
fn update_lead(
    state: tauri::State<'_, AppState>,
    payload: UpdateLeadPayload,
) -> Result<AcceptedResponse, String> {
    state.core.update_lead(payload).map_err(to_client_error)
}

#[tauri::command]
fn get_settings(state: tauri::State<'_, AppState>) -> Result<AppSettings, String> {
    Ok(state.core.settings())
}

pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .plugin(tauri_plugin_clipboard_manager::init())
        .setup(|app| {
            let app_data_dir = app.path().app_data_dir().map_err(|error| error.to_string())?;
            std::fs::create_dir_all(&app_data_dir).map_err(|error| error.to_string())?;
            init_tracing(&app_data_dir).map_err(|error| error.to_string())?;

            let config_dir = app.path().app_config_dir().map_err(|error| error.to_string())?;
            let settings = config::load_settings(&config_dir);

            let handle = app.handle().clone();
            let toasts: Arc<dyn ToastSink> = Arc::new(WebviewToasts::new(handle.clone()));
            let share: Arc<dyn ShareDelivery> = Arc::new(PlatformShare::new(handle.clone()));
            let countdown_sink: Arc<dyn CountdownSink> = Arc::new(WebviewCountdown::new(handle));
            let core = LeadsCore::new(settings, toasts, share, countdown_sink);

            tauri::async_runtime::spawn({
                let core = core.clone();
                async move {
                    core.fetch_leads().await;
                }
            });

            app.manage(AppState { core });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            fetch_leads,
            list_leads,
            set_search_term,
            get_lead,
            lead_counts,
            share_lead,
            contact_link,
            open_contact,
            countdown_start,
            countdown_stop,
            log_follow_up,
            book_opd,
            book_svf,
            schedule_vc,
            request_xray,
            update_lead,
            get_settings
        ])
        .run(tauri::generate_context!())
        .expect("failed to run tauri app");
}

fn init_tracing(app_data_dir: &Path) -> Result<(), String> {
    let log_dir = app_data_dir.join("logs");
    std::fs::create_dir_all(&log_dir).map_err(|error| error.to_string())?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "leads.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = LOG_GUARD.set(guard);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .json()
        .with_writer(non_blocking)
        .try_init()
        .map_err(|error| error.to_string())
}

fn to_client_error(error: impl std::fmt::Display) -> String {
    error.to_string()
}
