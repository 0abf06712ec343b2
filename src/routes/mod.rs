mod health_check;
mod leads;

pub use health_check::check_health;
pub use leads::{create_lead, list_leads};
