use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::domain::NewLead;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Process-lifetime holder of every captured lead and the next-id counter.
///
/// Id assignment and append happen under a single lock, so ids are unique and
/// strictly increasing in creation order even when requests land in parallel.
#[derive(Debug, Default)]
pub struct LeadStore {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    leads: Vec<Lead>,
    next_id: u64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            leads: Vec::new(),
            next_id: 1,
        }
    }
}

impl LeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, new_lead: NewLead) -> Lead {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        let lead = Lead {
            id: inner.next_id,
            name: new_lead.name.as_ref().to_owned(),
            email: new_lead.email.as_ref().to_owned(),
        };
        inner.next_id += 1;
        inner.leads.push(lead.clone());

        lead
    }

    pub fn list_all(&self) -> Vec<Lead> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .leads
            .clone()
    }
}
