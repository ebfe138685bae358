use crate::fixtures;
use crate::models::{Lead, LeadCounts};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use tokio::time::Duration;

#[derive(Clone)]
pub struct LeadStore {
    leads: Arc<RwLock<Vec<Lead>>>,
    loading: Arc<AtomicBool>,
    search_term: Arc<RwLock<String>>,
    fetch_delay: Duration,
}

impl LeadStore {
    pub fn new(fetch_delay: Duration) -> Self {
        Self {
            leads: Arc::new(RwLock::new(Vec::new())),
            loading: Arc::new(AtomicBool::new(true)),
            search_term: Arc::new(RwLock::new(String::new())),
            fetch_delay,
        }
    }

    pub async fn fetch_leads(&self) {
        tokio::time::sleep(self.fetch_delay).await;
        let fresh = fixtures::mock_leads();
        let count = fresh.len();
        self.replace_all(fresh);
        self.loading.store(false, Ordering::SeqCst);
        tracing::info!(count, "lead collection loaded");
    }

    fn replace_all(&self, fresh: Vec<Lead>) {
        let mut leads = self.leads.write().expect("lead store write lock");
        *leads = fresh;
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub fn set_search_term(&self, term: &str) {
        let mut current = self.search_term.write().expect("search term write lock");
        *current = term.to_string();
    }

    pub fn search_term(&self) -> String {
        self.search_term.read().expect("search term read lock").clone()
    }

    pub fn filtered_leads(&self) -> Vec<Lead> {
        let term = self.search_term();
        let leads = self.leads.read().expect("lead store read lock");
        if term.is_empty() {
            return leads.clone();
        }

        let needle = term.to_lowercase();
        leads
            .iter()
            .filter(|lead| {
                lead.patient_full_name.to_lowercase().contains(&needle)
                    || lead.mobile.contains(&term)
            })
            .cloned()
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<Lead> {
        let leads = self.leads.read().expect("lead store read lock");
        leads.iter().find(|lead| lead.name == name).cloned()
    }

    pub fn counts(&self) -> LeadCounts {
        let leads = self.leads.read().expect("lead store read lock");
        let mut by_status = BTreeMap::new();
        for lead in leads.iter() {
            *by_status.entry(lead.knee_lead_status.clone()).or_insert(0usize) += 1;
        }
        LeadCounts {
            total: leads.len(),
            by_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LeadStore;
    use crate::fixtures;
    use crate::models::{Lead, Priority};
    use chrono::Utc;
    use std::collections::BTreeMap;
    use tokio::time::Duration;

    fn lead(name: &str, full_name: &str, mobile: &str) -> Lead {
        Lead {
            name: name.to_string(),
            patient_full_name: full_name.to_string(),
            title: "Knee pain".to_string(),
            mobile: mobile.to_string(),
            whatsapp_no: mobile.to_string(),
            age: 60,
            gender: "Male".to_string(),
            city: "Lucknow".to_string(),
            camp: "Online".to_string(),
            team: "Team North".to_string(),
            priority: Priority::Medium,
            language: "Hindi".to_string(),
            case_type: "Knee OA Grade 2".to_string(),
            pain_complain: "Pain while walking.".to_string(),
            pain_since: "Years".to_string(),
            pain_since_years: 2,
            pain_increase_while: "Walking".to_string(),
            pain_location: "Right knee".to_string(),
            xray_assessment: "Pending".to_string(),
            xray_request_status: None,
            mode_of_request: None,
            xray_request_date_time: None,
            journey_stage: "Intake".to_string(),
            knee_lead_status: "Open".to_string(),
            current_bottleneck: None,
            status_change_log: Vec::new(),
            major_events: BTreeMap::new(),
            created_time: Utc::now(),
        }
    }

    fn seeded_store() -> LeadStore {
        let store = LeadStore::new(Duration::from_millis(0));
        store.replace_all(vec![
            lead("L-1", "Ramesh Gupta", "+919812045671"),
            lead("L-2", "Sunita Devi", "+919934120087"),
            lead("L-3", "Ram Prasad", "+917745098812"),
        ]);
        store
    }

    #[test]
    fn empty_term_returns_everything_in_order() {
        let store = seeded_store();
        let names = store
            .filtered_leads()
            .iter()
            .map(|lead| lead.name.clone())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["L-1", "L-2", "L-3"]);
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let store = seeded_store();
        store.set_search_term("rAm");
        let names = store
            .filtered_leads()
            .iter()
            .map(|lead| lead.name.clone())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["L-1", "L-3"]);
    }

    #[test]
    fn mobile_match_is_plain_substring() {
        let store = seeded_store();
        store.set_search_term("9934");
        let matches = store.filtered_leads();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "L-2");
    }

    #[test]
    fn filtering_is_idempotent() {
        let store = seeded_store();
        store.set_search_term("ram");
        let first = store.filtered_leads();
        let second = store.filtered_leads();
        assert_eq!(first, second);
    }

    #[test]
    fn lookup_by_name() {
        let store = seeded_store();
        assert_eq!(store.get("L-2").map(|lead| lead.patient_full_name), Some("Sunita Devi".to_string()));
        assert!(store.get("L-9").is_none());
    }

    #[test]
    fn counts_group_by_status() {
        let store = seeded_store();
        let counts = store.counts();
        assert_eq!(counts.total, 3);
        assert_eq!(counts.by_status.get("Open"), Some(&3));
    }

    #[tokio::test(start_paused = true)]
    async fn load_replaces_collection_and_clears_flag() {
        let store = LeadStore::new(Duration::from_millis(1500));
        assert!(store.is_loading());
        assert!(store.filtered_leads().is_empty());

        store.fetch_leads().await;

        assert!(!store.is_loading());
        assert_eq!(store.filtered_leads(), fixtures::mock_leads());
    }
}
