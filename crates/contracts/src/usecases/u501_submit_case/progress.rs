use crate::domain::a002_verdict::VerdictResponse;

use super::error::SubmitError;

/// Delay before the progress text switches from "uploading" to "analyzing".
///
/// A fixed UX cue; it does not track the actual transfer.
pub const ANALYZING_DELAY_MS: u32 = 1_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Uploading,
    Analyzing,
}

impl SubmitPhase {
    pub fn is_busy(&self) -> bool {
        !matches!(self, SubmitPhase::Idle)
    }

    pub fn message_key(&self) -> Option<&'static str> {
        match self {
            SubmitPhase::Idle => None,
            SubmitPhase::Uploading => Some("uploading"),
            SubmitPhase::Analyzing => Some("analyzing"),
        }
    }
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Verdict(VerdictResponse),
    Failed(SubmitError),
    Cancelled,
}

/// Identifies one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

/// Single-flight bookkeeping for the case form.
///
/// Only the ticket handed out by the latest `begin()` may change state. A
/// ticket that was cancelled is forgotten, so its late result is discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionTracker {
    next_id: u64,
    current: Option<SubmissionTicket>,
    phase: SubmitPhase,
}

impl SubmissionTracker {
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.current.is_some()
    }

    /// Starts a submission. Refused while another one is in flight.
    pub fn begin(&mut self) -> Option<SubmissionTicket> {
        if self.current.is_some() {
            return None;
        }
        self.next_id += 1;
        let ticket = SubmissionTicket(self.next_id);
        self.current = Some(ticket);
        self.phase = SubmitPhase::Uploading;
        Some(ticket)
    }

    /// Timer callback: moves to `Analyzing` if `ticket` is still uploading.
    pub fn mark_analyzing(&mut self, ticket: SubmissionTicket) -> bool {
        if self.current == Some(ticket) && self.phase == SubmitPhase::Uploading {
            self.phase = SubmitPhase::Analyzing;
            true
        } else {
            false
        }
    }

    /// User abort: back to idle at once. Returns the abandoned ticket.
    pub fn cancel(&mut self) -> Option<SubmissionTicket> {
        let abandoned = self.current.take();
        self.phase = SubmitPhase::Idle;
        abandoned
    }

    /// Settles `ticket`. Stale tickets yield `None` and leave state untouched.
    pub fn finish(
        &mut self,
        ticket: SubmissionTicket,
        outcome: SubmitOutcome,
    ) -> Option<SubmitOutcome> {
        if self.current != Some(ticket) {
            log::debug!("dropping result of stale submission {:?}", ticket);
            return None;
        }
        self.current = None;
        self.phase = SubmitPhase::Idle;
        Some(outcome)
    }
}
