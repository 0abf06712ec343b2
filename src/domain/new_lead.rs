use crate::domain::lead_email::LeadEmail;
use crate::domain::lead_name::LeadName;

pub struct NewLead {
    pub name: LeadName,
    pub email: LeadEmail,
}
