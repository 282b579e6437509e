use contracts::domain::a002_verdict::VerdictResponse;
use leptos::prelude::*;

/// Which screen the app shows: the case form, or a received verdict.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub verdict: RwSignal<Option<VerdictResponse>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            verdict: RwSignal::new(None),
        }
    }

    pub fn show_verdict(&self, verdict: VerdictResponse) {
        log::info!("showing verdict, winner: {}", verdict.winner);
        self.verdict.set(Some(verdict));
    }

    /// Back to an empty form.
    pub fn new_case(&self) {
        self.verdict.set(None);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
