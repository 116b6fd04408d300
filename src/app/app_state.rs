use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::check_state::CheckState;
use crate::check::{CheckRequest, CheckResponse, GENERIC_NETWORK_ERROR, QueryError, Verdict};
use crate::input::InputState;
use crate::notification::{Notice, NotificationState};
use crate::recent::RecentChecksCache;
use crate::suggestions::SuggestionState;

/// Owns every piece of UI state. Each user or network event goes through one
/// of the transition methods below; render code only reads.
pub struct App {
    pub input: InputState,
    pub check: CheckState,
    pub recent: RecentChecksCache,
    pub suggestions: SuggestionState,
    pub notification: NotificationState,
    pub should_quit: bool,
    request_tx: Option<Sender<CheckRequest>>,
    response_rx: Option<Receiver<CheckResponse>>,
    dirty: bool,
}

impl App {
    pub fn new(recent: RecentChecksCache) -> Self {
        Self {
            input: InputState::new(),
            check: CheckState::new(),
            recent,
            suggestions: SuggestionState::new(),
            notification: NotificationState::new(),
            should_quit: false,
            request_tx: None,
            response_rx: None,
            dirty: true,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<CheckRequest>,
        response_rx: Receiver<CheckResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn query(&self) -> &str {
        self.input.text()
    }

    pub fn should_render(&self) -> bool {
        self.dirty || self.notification.current().is_some()
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Check `name`. Blank names are a no-op; submits while another check
    /// is in flight are ignored.
    ///
    /// Returns true if a request was issued.
    pub fn submit(&mut self, name: &str) -> bool {
        if name.trim().is_empty() {
            return false;
        }

        if let Some(flower) = self.check.in_flight_flower() {
            let notice = Notice::AlreadyChecking(flower.to_string());
            self.notification.raise(notice);
            self.mark_dirty();
            return false;
        }

        let Some(request_id) = self.check.begin(name) else {
            return false;
        };

        self.recent.reset_cycling();
        self.suggestions.clear_selection();
        self.mark_dirty();

        let request = CheckRequest::Check {
            flower: name.trim().to_string(),
            request_id,
        };

        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(request).is_ok());

        if !sent {
            log::error!("Check worker unavailable, request {} dropped", request_id);
            self.check
                .fail(request_id, GENERIC_NETWORK_ERROR.to_string());
            return false;
        }

        #[cfg(debug_assertions)]
        log::debug!("Submitted request {} for {:?}", request_id, name.trim());

        true
    }

    /// Check whatever is in the input field, or the selected pill if any
    pub fn submit_input(&mut self) -> bool {
        if let Some(name) = self.suggestions.selected() {
            return self.pick(name);
        }
        let name = self.query().to_string();
        self.submit(&name)
    }

    /// Fill the input with `name` and check it
    pub fn pick(&mut self, name: &str) -> bool {
        if self.check.is_loading() {
            return self.submit(name);
        }
        self.input.set_text(name);
        self.suggestions.update(name);
        self.submit(name)
    }

    /// Only the in-flight request's verdict is accepted; the resolved flower
    /// name is recorded in the recent list.
    pub fn query_succeeded(&mut self, request_id: u64, verdict: Verdict) {
        let flower = verdict.flower.clone();
        if self.check.succeed(request_id, verdict) {
            self.recent.record(&flower);
            self.mark_dirty();
        }
    }

    /// Failed checks never touch the recent list
    pub fn query_failed(&mut self, request_id: u64, error: &QueryError) {
        if self.check.fail(request_id, error.user_message()) {
            self.mark_dirty();
        }
    }

    /// Drain the worker's response channel without blocking
    pub fn poll_check_response(&mut self) {
        loop {
            let Some(rx) = &self.response_rx else {
                return;
            };

            match rx.try_recv() {
                Ok(CheckResponse::Verdict {
                    request_id,
                    verdict,
                }) => self.query_succeeded(request_id, verdict),
                Ok(CheckResponse::Failed { request_id, error }) => {
                    self.query_failed(request_id, &error)
                }
                Ok(CheckResponse::WorkerCrashed(message)) => {
                    self.check.fail_in_flight(GENERIC_NETWORK_ERROR.to_string());
                    self.notification.raise(Notice::WorkerStopped(message));
                    self.response_rx = None;
                    self.request_tx = None;
                    self.mark_dirty();
                }
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    if self.check.fail_in_flight(GENERIC_NETWORK_ERROR.to_string()) {
                        self.mark_dirty();
                    }
                    self.response_rx = None;
                    return;
                }
            }
        }
    }

    /// Fill the input with the next older recent check
    pub fn recall_previous(&mut self) {
        if let Some(entry) = self.recent.cycle_previous() {
            self.replace_query_with(&entry);
        }
    }

    /// Fill the input with the next newer recent check, clearing it past the newest
    pub fn recall_next(&mut self) {
        match self.recent.cycle_next() {
            Some(entry) => self.replace_query_with(&entry),
            None => self.replace_query_with(""),
        }
    }

    /// Called after the user edits the input text
    pub fn on_input_changed(&mut self) {
        self.recent.reset_cycling();
        self.suggestions.update(self.input.text());
        self.mark_dirty();
    }

    fn replace_query_with(&mut self, text: &str) {
        self.input.set_text(text);
        self.suggestions.update(text);
        self.mark_dirty();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
