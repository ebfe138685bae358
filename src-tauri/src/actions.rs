use crate::errors::{AppError, AppResult};
use crate::models::{
    BookOpdPayload, BookSvfPayload, FollowUpPayload, ScheduleVcPayload, UpdateLeadPayload,
    XrayRequestPayload,
};

// Modal saves are record-only: each endpoint presence-validates, logs the
// submission, and acknowledges. The lead collection is never mutated after
// load.

fn require(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

pub fn log_follow_up(payload: &FollowUpPayload) -> AppResult<()> {
    require("subject", &payload.subject)?;
    require("follow-up date", &payload.follow_up_date)?;
    tracing::info!(
        lead = %payload.lead_name,
        subject = %payload.subject,
        follow_up_date = %payload.follow_up_date,
        "follow-up recorded"
    );
    Ok(())
}

pub fn book_opd(payload: &BookOpdPayload) -> AppResult<()> {
    require("OPD date", &payload.opd_date)?;
    tracing::info!(
        lead = %payload.lead_name,
        opd_date = %payload.opd_date,
        center = payload.center.as_deref().unwrap_or("-"),
        "OPD booking recorded"
    );
    Ok(())
}

pub fn book_svf(payload: &BookSvfPayload) -> AppResult<()> {
    require("procedure date", &payload.procedure_date)?;
    if payload.body_parts.is_empty() {
        return Err(AppError::Validation("at least one body part is required".to_string()));
    }
    tracing::info!(
        lead = %payload.lead_name,
        procedure_date = %payload.procedure_date,
        body_parts = %payload.body_parts.join(","),
        "SVF booking recorded"
    );
    Ok(())
}

pub fn schedule_vc(payload: &ScheduleVcPayload) -> AppResult<()> {
    require("VC date", &payload.vc_date)?;
    tracing::info!(
        lead = %payload.lead_name,
        vc_date = %payload.vc_date,
        time_slot = payload.time_slot.as_deref().unwrap_or("-"),
        "video consultation recorded"
    );
    Ok(())
}

pub fn request_xray(payload: &XrayRequestPayload) -> AppResult<()> {
    require("request mode", &payload.mode_of_request)?;
    tracing::info!(
        lead = %payload.lead_name,
        mode = %payload.mode_of_request,
        "X-ray request recorded"
    );
    Ok(())
}

pub fn update_lead(payload: &UpdateLeadPayload) -> AppResult<()> {
    require("patient name", &payload.patient_full_name)?;
    require("mobile", &payload.mobile)?;
    tracing::info!(
        lead = %payload.lead_name,
        patient = %payload.patient_full_name,
        "lead edit recorded"
    );
    Ok(())
}
