use super::api::FetchTransport;
use crate::shared::api_utils::api_base;
use crate::shared::file_upload::BrowserFile;
use crate::shared::i18n::{use_i18n, I18nContext};
use crate::shared::notify::{use_notifier, Notifier};
use contracts::domain::a001_case::{CaseDraft, CaseField, Currency, FormErrors};
use contracts::domain::a002_verdict::VerdictResponse;
use contracts::shared::file_staging::StagingSlot;
use contracts::usecases::u501_submit_case::{
    evidence_slot, letter_slot, submit_case, CancelToken, CaseAttachments, CasePayload,
    SubmissionTracker, SubmitError, SubmitOutcome, SubmitPhase, ANALYZING_DELAY_MS,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::AbortController;

type Slot = RwSignal<StagingSlot<BrowserFile>, LocalStorage>;

/// Handles of the request currently on the wire.
struct InFlight {
    controller: AbortController,
    token: CancelToken,
}

/// ViewModel for the case submission form
#[derive(Clone, Copy)]
pub struct CaseFormVm {
    pub draft: RwSignal<CaseDraft>,
    pub errors: RwSignal<FormErrors>,
    pub tracker: RwSignal<SubmissionTracker>,

    pub plaintiff_letter: Slot,
    pub defendant_letter: Slot,
    pub plaintiff_evidence: Slot,
    pub defendant_evidence: Slot,

    in_flight: StoredValue<Option<InFlight>, LocalStorage>,
    i18n: I18nContext,
    notifier: Notifier,
}

impl CaseFormVm {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(CaseDraft::default()),
            errors: RwSignal::new(FormErrors::default()),
            tracker: RwSignal::new(SubmissionTracker::default()),
            plaintiff_letter: RwSignal::new_local(StagingSlot::new(letter_slot())),
            defendant_letter: RwSignal::new_local(StagingSlot::new(letter_slot())),
            plaintiff_evidence: RwSignal::new_local(StagingSlot::new(evidence_slot())),
            defendant_evidence: RwSignal::new_local(StagingSlot::new(evidence_slot())),
            in_flight: StoredValue::new_local(None),
            i18n: use_i18n(),
            notifier: use_notifier(),
        }
    }

    // ============================================================================
    // Field bindings
    // ============================================================================

    pub fn text(&self, field: CaseField) -> Signal<String> {
        let draft = self.draft;
        Signal::derive(move || {
            draft.with(|d| match field {
                CaseField::PlaintiffName => d.plaintiff_name.clone(),
                CaseField::DefendantName => d.defendant_name.clone(),
                CaseField::ClaimAmount => d.claim_amount.clone(),
                CaseField::ClaimReason => d.claim_reason.clone(),
                CaseField::ClaimCurrency => d
                    .claim_currency
                    .map(|c| c.code().to_string())
                    .unwrap_or_default(),
            })
        })
    }

    /// Writes a field and drops its validation message.
    pub fn on_input(&self, field: CaseField) -> Callback<String> {
        let draft = self.draft;
        let errors = self.errors;
        Callback::new(move |value: String| {
            draft.update(|d| d.set_text(field, value));
            if errors.with_untracked(|e| e.get(field).is_some()) {
                errors.update(|e| {
                    e.clear(field);
                });
            }
        })
    }

    /// Localized validation message for a field.
    pub fn error_for(&self, field: CaseField) -> Signal<Option<String>> {
        let errors = self.errors;
        let i18n = self.i18n;
        Signal::derive(move || errors.with(|e| e.get(field)).map(|key| i18n.t(key)))
    }

    pub fn currency_options(&self) -> Signal<Vec<(String, String)>> {
        Signal::derive(|| {
            Currency::all()
                .iter()
                .map(|c| (c.code().to_string(), c.label()))
                .collect()
        })
    }

    pub fn phase(&self) -> Signal<SubmitPhase> {
        let tracker = self.tracker;
        Signal::derive(move || tracker.with(|t| t.phase()))
    }

    pub fn is_busy(&self) -> Signal<bool> {
        let tracker = self.tracker;
        Signal::derive(move || tracker.with(|t| t.is_busy()))
    }

    // ============================================================================
    // Commands
    // ============================================================================

    /// Validates, uploads and reports the verdict through `on_verdict`.
    ///
    /// Does nothing while a submission is already running.
    pub fn submit(&self, on_verdict: Callback<VerdictResponse>) {
        if self.tracker.with_untracked(|t| t.is_busy()) {
            return;
        }

        let input = match self.draft.with_untracked(|d| d.validate()) {
            Ok(input) => input,
            Err(errors) => {
                log::debug!("case form has {} invalid field(s)", errors.len());
                self.errors.set(errors);
                return;
            }
        };
        self.errors.set(FormErrors::default());

        let attachments = CaseAttachments {
            plaintiff_letter: first_file(self.plaintiff_letter),
            defendant_letter: first_file(self.defendant_letter),
            plaintiff_evidence: self.plaintiff_evidence.with_untracked(|s| s.cloned_files()),
            defendant_evidence: self.defendant_evidence.with_untracked(|s| s.cloned_files()),
        };
        let payload = match CasePayload::build(&input, attachments) {
            Ok(payload) => payload,
            Err(e) => {
                self.report_failure(&e);
                return;
            }
        };

        let controller = match AbortController::new() {
            Ok(controller) => controller,
            Err(e) => {
                log::error!("AbortController unavailable: {:?}", e);
                self.report_failure(&SubmitError::Network(format!("{e:?}")));
                return;
            }
        };

        let Some(ticket) = self.tracker.try_update(|t| t.begin()).flatten() else {
            return;
        };

        let token = CancelToken::new();
        let transport = FetchTransport::new(controller.signal());
        self.in_flight.set_value(Some(InFlight {
            controller,
            token: token.clone(),
        }));

        let tracker = self.tracker;
        spawn_local(async move {
            TimeoutFuture::new(ANALYZING_DELAY_MS).await;
            let _ = tracker.try_update(|t| t.mark_analyzing(ticket));
        });

        let vm = *self;
        spawn_local(async move {
            let outcome = submit_case(&transport, &api_base(), payload, &token).await;

            // a stale ticket means the user cancelled and may have started over
            let Some(outcome) = vm.tracker.try_update(|t| t.finish(ticket, outcome)).flatten()
            else {
                return;
            };
            let _ = vm.in_flight.try_update_value(|f| f.take());

            match outcome {
                SubmitOutcome::Verdict(verdict) => on_verdict.run(verdict),
                SubmitOutcome::Failed(e) => vm.report_failure(&e),
                SubmitOutcome::Cancelled => {}
            }
        });
    }

    /// Aborts the running request and returns the form to idle at once.
    pub fn cancel(&self) {
        if let Some(flight) = self.in_flight.try_update_value(|f| f.take()).flatten() {
            flight.token.cancel();
            flight.controller.abort();
        }
        if let Some(ticket) = self.tracker.try_update(|t| t.cancel()).flatten() {
            log::info!("submission {:?} cancelled", ticket);
        }
    }

    fn report_failure(&self, error: &SubmitError) {
        let message = error.user_message(self.i18n.language.get_untracked());
        if message.is_empty() {
            return;
        }
        self.notifier
            .error(self.i18n.t_untracked("errorTitle"), message);
    }
}

fn first_file(slot: Slot) -> Option<BrowserFile> {
    slot.with_untracked(|s| s.cloned_files().into_iter().next())
}
