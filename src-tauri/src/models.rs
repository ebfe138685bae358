use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactKind {
    Call,
    Whatsapp,
    Whatsform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShareOutcome {
    Shared,
    Copied,
    Failed,
}

// ─── Lead Records ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub old_status: String,
    pub new_status: String,
    pub from_date: DateTime<Utc>,
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub name: String,
    pub patient_full_name: String,
    pub title: String,
    pub mobile: String,
    pub whatsapp_no: String,
    pub age: u32,
    pub gender: String,
    pub city: String,
    pub camp: String,
    pub team: String,
    pub priority: Priority,
    pub language: String,
    pub case_type: String,
    pub pain_complain: String,
    pub pain_since: String,
    pub pain_since_years: u32,
    pub pain_increase_while: String,
    pub pain_location: String,
    pub xray_assessment: String,
    pub xray_request_status: Option<String>,
    pub mode_of_request: Option<String>,
    pub xray_request_date_time: Option<DateTime<Utc>>,
    pub journey_stage: String,
    pub knee_lead_status: String,
    pub current_bottleneck: Option<String>,
    pub status_change_log: Vec<StatusChange>,
    pub major_events: BTreeMap<String, bool>,
    pub created_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSummary {
    pub name: String,
    pub patient_full_name: String,
    pub title: String,
    pub mobile: String,
    pub whatsapp_no: String,
    pub age: u32,
    pub gender: String,
    pub city: String,
    pub team: String,
    pub priority: Priority,
    pub case_type: String,
    pub xray_assessment: String,
    pub knee_lead_status: String,
    pub current_bottleneck: Option<String>,
    pub pain_complain: String,
    pub created_time: DateTime<Utc>,
    pub countdown: Option<String>,
}

impl LeadSummary {
    pub fn from_lead(lead: &Lead, countdown: Option<String>) -> Self {
        Self {
            name: lead.name.clone(),
            patient_full_name: lead.patient_full_name.clone(),
            title: lead.title.clone(),
            mobile: lead.mobile.clone(),
            whatsapp_no: lead.whatsapp_no.clone(),
            age: lead.age,
            gender: lead.gender.clone(),
            city: lead.city.clone(),
            team: lead.team.clone(),
            priority: lead.priority,
            case_type: lead.case_type.clone(),
            xray_assessment: lead.xray_assessment.clone(),
            knee_lead_status: lead.knee_lead_status.clone(),
            current_bottleneck: lead.current_bottleneck.clone(),
            pain_complain: lead.pain_complain.clone(),
            created_time: lead.created_time,
            countdown,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadListResponse {
    pub loading: bool,
    pub leads: Vec<LeadSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadCounts {
    pub total: usize,
    pub by_status: BTreeMap<String, usize>,
}

// ─── Events & Notifications ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationMessage {
    pub id: String,
    pub level: ToastLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownUpdate {
    pub lead_name: String,
    pub label: Option<String>,
}

// ─── Command Payloads ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpPayload {
    pub lead_name: String,
    pub subject: String,
    pub description: Option<String>,
    pub follow_up_date: String,
    pub status: Option<String>,
    pub follow_up_by: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookOpdPayload {
    pub lead_name: String,
    pub opd_date: String,
    pub preferred_time: Option<String>,
    pub center: Option<String>,
    pub doctor: Option<String>,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSvfPayload {
    pub lead_name: String,
    pub procedure_date: String,
    pub body_parts: Vec<String>,
    pub center: Option<String>,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleVcPayload {
    pub lead_name: String,
    pub vc_date: String,
    pub time_slot: Option<String>,
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XrayRequestPayload {
    pub lead_name: String,
    pub mode_of_request: String,
    pub template: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeadPayload {
    pub lead_name: String,
    pub patient_full_name: String,
    pub mobile: String,
    pub whatsapp_no: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub camp: Option<String>,
    pub team: Option<String>,
    pub priority: Option<Priority>,
    pub language: Option<String>,
    pub pain_complain: Option<String>,
    pub pain_since: Option<String>,
    pub pain_since_years: Option<u32>,
    pub pain_increase_while: Option<String>,
    pub pain_location: Option<String>,
}

// ─── Responses & Settings ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedResponse {
    pub accepted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    pub outcome: ShareOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub countdown_window_hours: u64,
    pub fetch_delay_ms: u64,
    pub operator_name: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            countdown_window_hours: 4,
            fetch_delay_ms: 1500,
            operator_name: "Dr. Rajesh Kumar".to_string(),
        }
    }
}
