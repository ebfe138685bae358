use crate::models::{ContactKind, Lead};

pub const WHATSFORM_URL: &str = "https://whatsform.com/";

pub fn tel_link(mobile: &str) -> String {
    format!("tel:{}", mobile)
}

pub fn whatsapp_link(whatsapp_no: &str) -> String {
    format!("https://wa.me/{}", whatsapp_no.replace('+', ""))
}

pub fn contact_link(lead: &Lead, kind: ContactKind) -> String {
    match kind {
        ContactKind::Call => tel_link(&lead.mobile),
        ContactKind::Whatsapp => whatsapp_link(&lead.whatsapp_no),
        ContactKind::Whatsform => WHATSFORM_URL.to_string(),
    }
}
