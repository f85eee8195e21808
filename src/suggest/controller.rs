//! Suggestion controller
//!
//! Turns a rapid stream of keystrokes into debounced lookups, and exposes the derived
//! suggestion and detail state to whatever view hosts it. Provider calls happen on the
//! lookup worker; this side only sends requests and applies responses, dropping any
//! response that a newer request of the same kind has superseded.

use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Instant;

use tokio::sync::mpsc::UnboundedSender;

use super::debouncer::{DEFAULT_DEBOUNCE_MS, Debouncer};
use super::sequence::RequestSequence;
use crate::config::SearchConfig;
use crate::food::{FoodDetail, Suggestion};
use crate::provider::ProviderError;

/// Default minimum committed term length before a lookup is issued
pub const DEFAULT_MIN_TERM_LEN: usize = 3;

/// Request messages sent to the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerRequest {
    /// Look up suggestions for a committed term
    Search { term: String, request_id: u64 },
    /// Fetch the detail record for a selected suggestion
    Detail { name: String, request_id: u64 },
}

/// Response messages received from the lookup worker
#[derive(Debug)]
pub enum WorkerResponse {
    Suggestions {
        request_id: u64,
        result: Result<Vec<Suggestion>, ProviderError>,
    },
    Detail {
        request_id: u64,
        result: Result<FoodDetail, ProviderError>,
    },
}

/// Outcome of the latest applied lookup
#[derive(Debug, Clone, PartialEq)]
enum LookupState {
    /// No committed term has produced a result
    Idle,
    Found(Vec<Suggestion>),
    /// The provider failed; shown as an empty list
    Failed,
}

/// What the detail popup should show
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailView<'a> {
    pub open: bool,
    pub loading: bool,
    pub detail: Option<&'a FoodDetail>,
}

/// Manual-entry notification registered by the host
pub type ManualEntryHook = Box<dyn FnMut()>;

pub struct SuggestionController {
    min_term_len: usize,
    /// Text shown in the input, updated on every keystroke
    display_text: String,
    /// Last term that went through the debouncer
    committed_term: String,
    debouncer: Debouncer<String>,
    lookup_seq: RequestSequence,
    detail_seq: RequestSequence,
    lookup: LookupState,
    lookup_in_flight: bool,
    detail_open: bool,
    detail_in_flight: bool,
    detail: Option<FoodDetail>,
    request_tx: Option<UnboundedSender<WorkerRequest>>,
    response_rx: Option<Receiver<WorkerResponse>>,
    manual_entry: Option<ManualEntryHook>,
}

impl std::fmt::Debug for SuggestionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionController")
            .field("display_text", &self.display_text)
            .field("committed_term", &self.committed_term)
            .field("lookup", &self.lookup)
            .field("lookup_in_flight", &self.lookup_in_flight)
            .field("detail_open", &self.detail_open)
            .field("detail_in_flight", &self.detail_in_flight)
            .finish_non_exhaustive()
    }
}

impl Default for SuggestionController {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_TERM_LEN)
    }
}

impl SuggestionController {
    /// Create a controller with no worker attached
    ///
    /// Until `set_channels` is called every commit and selection degrades to an
    /// empty result.
    pub fn new(debounce_ms: u64, min_term_len: usize) -> Self {
        Self {
            min_term_len,
            display_text: String::new(),
            committed_term: String::new(),
            debouncer: Debouncer::new(debounce_ms),
            lookup_seq: RequestSequence::new(),
            detail_seq: RequestSequence::new(),
            lookup: LookupState::Idle,
            lookup_in_flight: false,
            detail_open: false,
            detail_in_flight: false,
            detail: None,
            request_tx: None,
            response_rx: None,
            manual_entry: None,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.debounce_ms, config.min_term_len)
    }

    /// Register the notification fired by `add_manually`
    pub fn with_manual_entry(mut self, hook: impl FnMut() + 'static) -> Self {
        self.manual_entry = Some(Box::new(hook));
        self
    }

    /// Set the channel handles for communication with the lookup worker
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<WorkerRequest>,
        response_rx: Receiver<WorkerResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn min_term_len(&self) -> usize {
        self.min_term_len
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn committed_term(&self) -> &str {
        &self.committed_term
    }

    // ----------------------------------------------------------------------
    // Input
    // ----------------------------------------------------------------------

    /// Record a keystroke and schedule a debounced commit
    pub fn on_input(&mut self, raw_text: &str) {
        self.on_input_at(raw_text, Instant::now());
    }

    pub fn on_input_at(&mut self, raw_text: &str, now: Instant) {
        self.display_text.clear();
        self.display_text.push_str(raw_text);
        self.debouncer.schedule_at(raw_text.to_string(), now);
    }

    /// Reset the input and drop any pending or in-flight lookup
    ///
    /// Never issues a lookup, whatever the minimum term length.
    pub fn on_clear(&mut self) {
        self.display_text.clear();
        self.committed_term.clear();
        if self.debouncer.cancel() {
            log::debug!("Dropped pending commit on clear");
        }
        self.reset_lookup();
    }

    /// Fire the pending commit if its quiet period has elapsed
    ///
    /// Returns true if a commit happened.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        match self.debouncer.take_ready_at(now) {
            Some(term) => {
                self.commit(term);
                true
            }
            None => false,
        }
    }

    /// Commit the pending text immediately, skipping the rest of the quiet period
    pub fn flush_pending(&mut self) -> bool {
        match self.debouncer.flush() {
            Some(term) => {
                self.commit(term);
                true
            }
            None => false,
        }
    }

    pub fn has_pending_commit(&self) -> bool {
        self.debouncer.has_pending()
    }

    fn commit(&mut self, term: String) {
        self.committed_term = term;

        if !self.meets_min_len(&self.committed_term) {
            // Below the guard: no lookup, and any outstanding one is now stale
            self.reset_lookup();
            return;
        }

        let request_id = self.lookup_seq.issue();
        let request = WorkerRequest::Search {
            term: self.committed_term.clone(),
            request_id,
        };

        if self.send(request) {
            log::debug!(
                "Committed lookup {} for {:?}",
                request_id,
                self.committed_term
            );
            self.lookup_in_flight = true;
        } else {
            log::warn!("Lookup worker unavailable, dropping {:?}", self.committed_term);
            self.lookup = LookupState::Failed;
            self.lookup_in_flight = false;
        }
    }

    fn reset_lookup(&mut self) {
        self.lookup_seq.invalidate();
        self.lookup = LookupState::Idle;
        self.lookup_in_flight = false;
    }

    fn meets_min_len(&self, term: &str) -> bool {
        term.chars().count() >= self.min_term_len
    }

    // ----------------------------------------------------------------------
    // Selection
    // ----------------------------------------------------------------------

    /// Request the detail record for `name` and open the detail view
    pub fn on_select(&mut self, name: &str) {
        let request_id = self.detail_seq.issue();
        self.detail_open = true;
        self.detail = None;

        let request = WorkerRequest::Detail {
            name: name.to_string(),
            request_id,
        };
        if self.send(request) {
            log::debug!("Requested detail {} for {:?}", request_id, name);
            self.detail_in_flight = true;
        } else {
            log::warn!("Lookup worker unavailable, no detail for {:?}", name);
            self.detail_in_flight = false;
        }
    }

    /// Close the detail view
    ///
    /// An in-flight detail request keeps running, but its result is not surfaced.
    pub fn on_detail_close(&mut self) {
        self.detail_open = false;
        self.detail = None;
    }

    /// Fire the manual-entry notification when the no-results state is showing
    pub fn add_manually(&mut self) -> bool {
        if !self.no_results() {
            return false;
        }
        if let Some(hook) = self.manual_entry.as_mut() {
            hook();
        }
        true
    }

    fn send(&self, request: WorkerRequest) -> bool {
        self.request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(request).is_ok())
    }

    // ----------------------------------------------------------------------
    // Responses
    // ----------------------------------------------------------------------

    /// Apply every response waiting on the channel without blocking
    ///
    /// Returns true if any response changed visible state.
    pub fn poll_responses(&mut self) -> bool {
        let mut changed = false;

        loop {
            let received = match self.response_rx.as_ref() {
                Some(rx) => rx.try_recv(),
                None => return changed,
            };

            match received {
                Ok(response) => changed |= self.apply_response(response),
                Err(TryRecvError::Empty) => return changed,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Lookup worker disconnected");
                    self.response_rx = None;
                    self.request_tx = None;
                    let was_loading = self.lookup_in_flight || self.detail_in_flight;
                    self.lookup_in_flight = false;
                    self.detail_in_flight = false;
                    return changed || was_loading;
                }
            }
        }
    }

    fn apply_response(&mut self, response: WorkerResponse) -> bool {
        match response {
            WorkerResponse::Suggestions { request_id, result } => {
                if !self.lookup_seq.is_latest(request_id) {
                    log::debug!("Dropping stale lookup response {}", request_id);
                    return false;
                }
                self.lookup_in_flight = false;
                self.lookup = match result {
                    Ok(items) => LookupState::Found(items),
                    Err(e) => {
                        log::warn!("Lookup for {:?} failed: {}", self.committed_term, e);
                        LookupState::Failed
                    }
                };
                true
            }
            WorkerResponse::Detail { request_id, result } => {
                if !self.detail_seq.is_latest(request_id) {
                    log::debug!("Dropping stale detail response {}", request_id);
                    return false;
                }
                self.detail_in_flight = false;
                if !self.detail_open {
                    log::debug!("Detail view closed, discarding response {}", request_id);
                    return true;
                }
                self.detail = match result {
                    Ok(detail) => Some(detail),
                    Err(e) => {
                        log::warn!("Detail fetch failed: {}", e);
                        None
                    }
                };
                true
            }
        }
    }

    // ----------------------------------------------------------------------
    // Derived state
    // ----------------------------------------------------------------------

    /// Latest lookup result, or None while no committed term has produced one
    pub fn suggestions(&self) -> Option<&[Suggestion]> {
        match &self.lookup {
            LookupState::Idle => None,
            LookupState::Found(items) => Some(items.as_slice()),
            LookupState::Failed => Some(&[][..]),
        }
    }

    /// True when a completed lookup for a long-enough term returned nothing
    pub fn no_results(&self) -> bool {
        !self.lookup_in_flight
            && matches!(&self.lookup, LookupState::Found(items) if items.is_empty())
            && self.meets_min_len(&self.committed_term)
    }

    pub fn is_lookup_in_flight(&self) -> bool {
        self.lookup_in_flight
    }

    pub fn is_detail_in_flight(&self) -> bool {
        self.detail_in_flight
    }

    pub fn detail_view(&self) -> DetailView<'_> {
        DetailView {
            open: self.detail_open,
            loading: self.detail_open && self.detail_in_flight,
            detail: if self.detail_open {
                self.detail.as_ref()
            } else {
                None
            },
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
