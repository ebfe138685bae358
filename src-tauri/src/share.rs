use crate::errors::{AppError, AppResult};
use crate::models::{Lead, ShareOutcome, ToastLevel};
use crate::notify::ToastSink;
use tauri_plugin_clipboard_manager::ClipboardExt;

pub const SHARE_TITLE: &str = "KneeXpert Lead";

pub fn share_text(lead: &Lead) -> String {
    format!(
        "Lead: {}\nStatus: {}\nCase: {}",
        lead.patient_full_name, lead.knee_lead_status, lead.case_type
    )
}

pub trait ShareDelivery: Send + Sync {
    // Ok(false) means the platform has no native share surface.
    fn native_share(&self, title: &str, text: &str) -> AppResult<bool>;
    fn copy_text(&self, text: &str) -> AppResult<()>;
}

pub fn share_lead(lead: &Lead, delivery: &dyn ShareDelivery, toasts: &dyn ToastSink) -> ShareOutcome {
    let text = share_text(lead);

    match delivery.native_share(SHARE_TITLE, &text) {
        Ok(true) => return ShareOutcome::Shared,
        Ok(false) => {}
        Err(error) => {
            tracing::warn!(error = %error, lead = %lead.name, "native share failed");
            toasts.push(ToastLevel::Error, "Could not share lead details.");
            return ShareOutcome::Failed;
        }
    }

    match delivery.copy_text(&text) {
        Ok(()) => {
            toasts.push(ToastLevel::Success, "Lead details copied to clipboard!");
            ShareOutcome::Copied
        }
        Err(error) => {
            tracing::warn!(error = %error, lead = %lead.name, "clipboard write failed");
            toasts.push(ToastLevel::Error, "Could not copy lead details to clipboard.");
            ShareOutcome::Failed
        }
    }
}

pub struct PlatformShare<R: tauri::Runtime> {
    app: tauri::AppHandle<R>,
}

impl<R: tauri::Runtime> PlatformShare<R> {
    pub fn new(app: tauri::AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: tauri::Runtime> ShareDelivery for PlatformShare<R> {
    fn native_share(&self, _title: &str, _text: &str) -> AppResult<bool> {
        // No system share sheet on desktop targets.
        Ok(false)
    }

    fn copy_text(&self, text: &str) -> AppResult<()> {
        self.app
            .clipboard()
            .write_text(text.to_string())
            .map_err(|error| AppError::Share(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{share_lead, share_text, ShareDelivery};
    use crate::errors::{AppError, AppResult};
    use crate::models::{Lead, Priority, ShareOutcome, ToastLevel};
    use crate::notify::testing::RecordingToasts;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    struct FakeDelivery {
        native_supported: bool,
        fail_clipboard: bool,
        copied: Mutex<Vec<String>>,
    }

    impl FakeDelivery {
        fn new(native_supported: bool, fail_clipboard: bool) -> Self {
            Self {
                native_supported,
                fail_clipboard,
                copied: Mutex::new(Vec::new()),
            }
        }
    }

    impl ShareDelivery for FakeDelivery {
        fn native_share(&self, _title: &str, _text: &str) -> AppResult<bool> {
            Ok(self.native_supported)
        }

        fn copy_text(&self, text: &str) -> AppResult<()> {
            if self.fail_clipboard {
                return Err(AppError::Share("write denied".to_string()));
            }
            self.copied.lock().expect("copied lock").push(text.to_string());
            Ok(())
        }
    }

    fn sample_lead() -> Lead {
        Lead {
            name: "L-1".to_string(),
            patient_full_name: "Ramesh Gupta".to_string(),
            title: "Bilateral knee pain".to_string(),
            mobile: "+919812045671".to_string(),
            whatsapp_no: "+919812045671".to_string(),
            age: 61,
            gender: "Male".to_string(),
            city: "Lucknow".to_string(),
            camp: "Online".to_string(),
            team: "Team North".to_string(),
            priority: Priority::High,
            language: "Hindi".to_string(),
            case_type: "Knee OA Grade 3".to_string(),
            pain_complain: "Severe pain.".to_string(),
            pain_since: "Years".to_string(),
            pain_since_years: 4,
            pain_increase_while: "Climbing stairs".to_string(),
            pain_location: "Both knees".to_string(),
            xray_assessment: "Pending".to_string(),
            xray_request_status: None,
            mode_of_request: None,
            xray_request_date_time: None,
            journey_stage: "Assessment".to_string(),
            knee_lead_status: "Open".to_string(),
            current_bottleneck: None,
            status_change_log: Vec::new(),
            major_events: BTreeMap::new(),
            created_time: Utc::now(),
        }
    }

    #[test]
    fn share_text_is_three_fixed_lines() {
        let text = share_text(&sample_lead());
        assert_eq!(text, "Lead: Ramesh Gupta\nStatus: Open\nCase: Knee OA Grade 3");
    }

    #[test]
    fn native_share_short_circuits() {
        let delivery = FakeDelivery::new(true, false);
        let toasts = RecordingToasts::default();
        let outcome = share_lead(&sample_lead(), &delivery, &toasts);
        assert_eq!(outcome, ShareOutcome::Shared);
        assert!(delivery.copied.lock().expect("copied lock").is_empty());
        assert!(toasts.messages.lock().expect("toast record lock").is_empty());
    }

    #[test]
    fn fallback_copies_exact_text_and_toasts_once() {
        let delivery = FakeDelivery::new(false, false);
        let toasts = RecordingToasts::default();
        let outcome = share_lead(&sample_lead(), &delivery, &toasts);
        assert_eq!(outcome, ShareOutcome::Copied);

        let copied = delivery.copied.lock().expect("copied lock");
        assert_eq!(copied.len(), 1);
        assert_eq!(copied[0], "Lead: Ramesh Gupta\nStatus: Open\nCase: Knee OA Grade 3");

        let messages = toasts.messages.lock().expect("toast record lock");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, ToastLevel::Success);
        assert_eq!(messages[0].1, "Lead details copied to clipboard!");
    }

    #[test]
    fn clipboard_rejection_surfaces_an_error_toast() {
        let delivery = FakeDelivery::new(false, true);
        let toasts = RecordingToasts::default();
        let outcome = share_lead(&sample_lead(), &delivery, &toasts);
        assert_eq!(outcome, ShareOutcome::Failed);

        let messages = toasts.messages.lock().expect("toast record lock");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, ToastLevel::Error);
    }
}
