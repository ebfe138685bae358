use crate::models::Lead;
use once_cell::sync::Lazy;

const LEADS_JSON: &str = include_str!("../fixtures/leads.json");

static LEADS: Lazy<Vec<Lead>> = Lazy::new(|| {
    serde_json::from_str(LEADS_JSON).expect("valid lead fixtures")
});

pub fn mock_leads() -> Vec<Lead> {
    LEADS.clone()
}
