use crate::actions;
use crate::countdown::{self, CountdownRegistry, CountdownSink};
use crate::errors::{AppError, AppResult};
use crate::links;
use crate::models::{
    AcceptedResponse, AppSettings, BookOpdPayload, BookSvfPayload, ContactKind, FollowUpPayload,
    Lead, LeadCounts, LeadListResponse, LeadSummary, ScheduleVcPayload, ShareResponse,
    UpdateLeadPayload, XrayRequestPayload,
};
use crate::notify::ToastSink;
use crate::share::{self, ShareDelivery};
use crate::store::LeadStore;
use chrono::Utc;
use std::sync::Arc;
use tokio::time::Duration;

const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

pub struct LeadsCore {
    store: LeadStore,
    settings: AppSettings,
    toasts: Arc<dyn ToastSink>,
    share: Arc<dyn ShareDelivery>,
    countdowns: CountdownRegistry,
}

impl LeadsCore {
    pub fn new(
        settings: AppSettings,
        toasts: Arc<dyn ToastSink>,
        share: Arc<dyn ShareDelivery>,
        countdown_sink: Arc<dyn CountdownSink>,
    ) -> Arc<Self> {
        let store = LeadStore::new(Duration::from_millis(settings.fetch_delay_ms));
        let countdowns = CountdownRegistry::new(
            countdown_sink,
            chrono::Duration::hours(settings.countdown_window_hours as i64),
            COUNTDOWN_TICK,
        );

        Arc::new(Self {
            store,
            settings,
            toasts,
            share,
            countdowns,
        })
    }

    fn window(&self) -> chrono::Duration {
        chrono::Duration::hours(self.settings.countdown_window_hours as i64)
    }

    fn ensure_lead(&self, name: &str) -> AppResult<Lead> {
        self.store
            .get(name)
            .ok_or_else(|| AppError::NotFound(format!("No lead named {}", name)))
    }

    pub async fn fetch_leads(&self) {
        self.store.fetch_leads().await;
    }

    pub fn list_leads(&self) -> LeadListResponse {
        let now = Utc::now();
        let window = self.window();
        let leads = self
            .store
            .filtered_leads()
            .iter()
            .map(|lead| {
                let label = countdown::remaining_label(lead.created_time, now, window);
                LeadSummary::from_lead(lead, label)
            })
            .collect();

        LeadListResponse {
            loading: self.store.is_loading(),
            leads,
        }
    }

    pub fn set_search_term(&self, term: &str) {
        self.store.set_search_term(term);
    }

    pub fn get_lead(&self, name: &str) -> Option<Lead> {
        self.store.get(name)
    }

    pub fn lead_counts(&self) -> LeadCounts {
        self.store.counts()
    }

    pub fn settings(&self) -> AppSettings {
        self.settings.clone()
    }

    pub fn share_lead(&self, name: &str) -> AppResult<ShareResponse> {
        let lead = self.ensure_lead(name)?;
        let outcome = share::share_lead(&lead, self.share.as_ref(), self.toasts.as_ref());
        Ok(ShareResponse { outcome })
    }

    pub fn contact_link(&self, name: &str, kind: ContactKind) -> AppResult<String> {
        let lead = self.ensure_lead(name)?;
        Ok(links::contact_link(&lead, kind))
    }

    pub fn countdown_start(&self, name: &str) -> AppResult<()> {
        let lead = self.ensure_lead(name)?;
        self.countdowns.start(&lead.name, lead.created_time);
        Ok(())
    }

    pub fn countdown_stop(&self, name: &str) -> bool {
        self.countdowns.stop(name)
    }

    pub fn log_follow_up(&self, payload: FollowUpPayload) -> AppResult<AcceptedResponse> {
        self.ensure_lead(&payload.lead_name)?;
        actions::log_follow_up(&payload)?;
        Ok(AcceptedResponse { accepted: true })
    }

    pub fn book_opd(&self, payload: BookOpdPayload) -> AppResult<AcceptedResponse> {
        self.ensure_lead(&payload.lead_name)?;
        actions::book_opd(&payload)?;
        Ok(AcceptedResponse { accepted: true })
    }

    pub fn book_svf(&self, payload: BookSvfPayload) -> AppResult<AcceptedResponse> {
        self.ensure_lead(&payload.lead_name)?;
        actions::book_svf(&payload)?;
        Ok(AcceptedResponse { accepted: true })
    }

    pub fn schedule_vc(&self, payload: ScheduleVcPayload) -> AppResult<AcceptedResponse> {
        self.ensure_lead(&payload.lead_name)?;
        actions::schedule_vc(&payload)?;
        Ok(AcceptedResponse { accepted: true })
    }

    pub fn request_xray(&self, payload: XrayRequestPayload) -> AppResult<AcceptedResponse> {
        self.ensure_lead(&payload.lead_name)?;
        actions::request_xray(&payload)?;
        Ok(AcceptedResponse { accepted: true })
    }

    pub fn update_lead(&self, payload: UpdateLeadPayload) -> AppResult<AcceptedResponse> {
        self.ensure_lead(&payload.lead_name)?;
        actions::update_lead(&payload)?;
        Ok(AcceptedResponse { accepted: true })
    }
}

#[cfg(test)]
mod tests {
    use super::LeadsCore;
    use crate::countdown::CountdownSink;
    use crate::errors::{AppError, AppResult};
    use crate::fixtures;
    use crate::models::AppSettings;
    use crate::notify::testing::RecordingToasts;
    use crate::share::ShareDelivery;
    use std::sync::Arc;

    struct NullShare;

    impl ShareDelivery for NullShare {
        fn native_share(&self, _title: &str, _text: &str) -> AppResult<bool> {
            Ok(false)
        }

        fn copy_text(&self, _text: &str) -> AppResult<()> {
            Ok(())
        }
    }

    struct NullCountdown;

    impl CountdownSink for NullCountdown {
        fn tick(&self, _lead_name: &str, _label: &str) {}

        fn expired(&self, _lead_name: &str) {}
    }

    fn core() -> Arc<LeadsCore> {
        let settings = AppSettings {
            fetch_delay_ms: 0,
            ..AppSettings::default()
        };
        LeadsCore::new(
            settings,
            Arc::new(RecordingToasts::default()),
            Arc::new(NullShare),
            Arc::new(NullCountdown),
        )
    }

    #[tokio::test]
    async fn list_reflects_the_loaded_fixture_set() {
        let core = core();
        assert!(core.list_leads().loading);

        core.fetch_leads().await;

        let listed = core.list_leads();
        assert!(!listed.loading);
        assert_eq!(listed.leads.len(), fixtures::mock_leads().len());
    }

    #[tokio::test]
    async fn unknown_lead_is_reported_as_not_found() {
        let core = core();
        core.fetch_leads().await;
        assert!(matches!(core.share_lead("L-missing"), Err(AppError::NotFound(_))));
        assert!(matches!(core.countdown_start("L-missing"), Err(AppError::NotFound(_))));
    }
}
