mod lead_email;
mod lead_name;
mod new_lead;

pub use lead_email::LeadEmail;
pub use lead_name::LeadName;
pub use new_lead::NewLead;
