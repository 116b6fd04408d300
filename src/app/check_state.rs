//! Check lifecycle state machine
//!
//! `Idle -> Checking -> Succeeded | Failed`, and from any settled state back
//! to `Checking` on the next submit. Responses are matched by request id so
//! a late answer for an older request can never overwrite a newer one.

use crate::check::Verdict;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CheckStatus {
    #[default]
    Idle,
    Checking {
        flower: String,
        request_id: u64,
    },
    Succeeded(Verdict),
    Failed(String),
}

#[derive(Debug, Default)]
pub struct CheckState {
    pub status: CheckStatus,
    request_id: u64,
}

impl CheckState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a check for `flower`.
    ///
    /// Returns the new request id, or None when the trimmed name is empty or
    /// another check is still in flight.
    pub fn begin(&mut self, flower: &str) -> Option<u64> {
        let flower = flower.trim();
        if flower.is_empty() || self.is_loading() {
            return None;
        }

        self.request_id = self.request_id.wrapping_add(1);
        self.status = CheckStatus::Checking {
            flower: flower.to_string(),
            request_id: self.request_id,
        };
        Some(self.request_id)
    }

    /// Returns false for stale or unexpected responses
    pub fn succeed(&mut self, request_id: u64, verdict: Verdict) -> bool {
        if !self.is_current(request_id) {
            return false;
        }
        self.status = CheckStatus::Succeeded(verdict);
        true
    }

    /// Returns false for stale or unexpected responses
    pub fn fail(&mut self, request_id: u64, message: String) -> bool {
        if !self.is_current(request_id) {
            return false;
        }
        self.status = CheckStatus::Failed(message);
        true
    }

    /// Fail whatever is in flight, regardless of its id
    pub fn fail_in_flight(&mut self, message: String) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.status = CheckStatus::Failed(message);
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, CheckStatus::Checking { .. })
    }

    pub fn in_flight_flower(&self) -> Option<&str> {
        match &self.status {
            CheckStatus::Checking { flower, .. } => Some(flower),
            _ => None,
        }
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        match &self.status {
            CheckStatus::Succeeded(verdict) => Some(verdict),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            CheckStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    fn is_current(&self, request_id: u64) -> bool {
        matches!(
            &self.status,
            CheckStatus::Checking { request_id: id, .. } if *id == request_id
        )
    }
}
