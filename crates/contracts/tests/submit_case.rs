//! End-to-end scenarios for the case form flow against an in-memory service.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use contracts::domain::a001_case::{CaseDraft, CaseField, Currency};
use contracts::domain::a002_verdict::{SectionKind, VerdictResponse};
use contracts::shared::i18n::Language;
use contracts::usecases::u501_submit_case::{
    submit_case, CancelToken, CaseAttachments, CasePayload, CaseTransport, RawResponse,
    SubmissionTracker, SubmitError, SubmitOutcome, SubmitPhase,
};
use tokio::sync::oneshot;

const BASE_URL: &str = "http://mock.local";

#[derive(Debug, Clone, PartialEq)]
struct MemFile(&'static str);

/// Records requests and replies with a prepared response.
struct MockServer {
    reply: RefCell<Option<oneshot::Receiver<Result<RawResponse, SubmitError>>>>,
    calls: Cell<usize>,
    last_url: RefCell<Option<String>>,
    last_payload: RefCell<Option<CasePayload<MemFile>>>,
}

impl MockServer {
    fn new() -> (Self, oneshot::Sender<Result<RawResponse, SubmitError>>) {
        let (tx, rx) = oneshot::channel();
        let server = Self {
            reply: RefCell::new(Some(rx)),
            calls: Cell::new(0),
            last_url: RefCell::new(None),
            last_payload: RefCell::new(None),
        };
        (server, tx)
    }

    fn answering(status: u16, body: &str) -> Self {
        let (server, tx) = Self::new();
        let _ = tx.send(Ok(RawResponse {
            status,
            body: body.to_string(),
        }));
        server
    }
}

#[async_trait(?Send)]
impl CaseTransport<MemFile> for MockServer {
    async fn post_multipart(
        &self,
        url: &str,
        payload: CasePayload<MemFile>,
    ) -> Result<RawResponse, SubmitError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_url.borrow_mut() = Some(url.to_string());
        *self.last_payload.borrow_mut() = Some(payload);

        let rx = self.reply.borrow_mut().take();
        match rx {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(SubmitError::Network("connection dropped".into()))),
            None => Err(SubmitError::Network("no reply prepared".into())),
        }
    }
}

/// What the user sees once the flow settles.
#[derive(Default)]
struct FormState {
    draft: CaseDraft,
    tracker: SubmissionTracker,
    verdict: Option<VerdictResponse>,
    notifications: Vec<String>,
}

impl FormState {
    fn filled(amount: &str) -> Self {
        let mut state = Self::default();
        state.draft.set_text(CaseField::PlaintiffName, "Alice".into());
        state.draft.set_text(CaseField::DefendantName, "Bob".into());
        state.draft.set_text(CaseField::ClaimAmount, amount.into());
        state.draft.claim_currency = Some(Currency::Usd);
        state.draft.set_text(CaseField::ClaimReason, "breach of contract".into());
        state
    }

    fn apply(&mut self, settled: Option<SubmitOutcome>) {
        match settled {
            Some(SubmitOutcome::Verdict(verdict)) => self.verdict = Some(verdict),
            Some(SubmitOutcome::Failed(e)) => self.notifications.push(e.user_message(Language::En)),
            Some(SubmitOutcome::Cancelled) | None => {}
        }
    }
}

const ALICE_WINS: &str = r#"{"response":{"decision":"The claim is accepted.","winner":"Alice","loser":"Bob","reasoning":"A signed contract was breached.","summary":"Unpaid services."}}"#;

#[tokio::test(flavor = "current_thread")]
async fn submission_succeeds_and_winner_is_alice() {
    let server = MockServer::answering(200, ALICE_WINS);
    let mut state = FormState::filled("100");

    let input = state.draft.validate().expect("form is valid");
    let payload = CasePayload::build(&input, CaseAttachments::<MemFile>::default()).unwrap();
    let ticket = state.tracker.begin().unwrap();
    let outcome = submit_case(&server, BASE_URL, payload, &CancelToken::new()).await;
    let settled = state.tracker.finish(ticket, outcome);
    state.apply(settled);

    assert_eq!(server.calls.get(), 1);
    assert_eq!(server.last_url.borrow().as_deref(), Some("http://mock.local/ask/gemini"));

    let sent = server.last_payload.borrow();
    let body: serde_json::Value = serde_json::from_str(&sent.as_ref().unwrap().body).unwrap();
    assert_eq!(body["plaintiff"], "Alice");
    assert_eq!(body["claim_amount"], 100.0);
    assert_eq!(body["claim_currency"], "USD");
    assert!(sent.as_ref().unwrap().files.is_empty());

    let verdict = state.verdict.as_ref().expect("verdict shown");
    assert_eq!(verdict.section(SectionKind::Winner).text, "Alice");
    assert!(state.notifications.is_empty());
    assert_eq!(state.tracker.phase(), SubmitPhase::Idle);
}

#[tokio::test(flavor = "current_thread")]
async fn negative_amount_never_reaches_the_server() {
    let server = MockServer::answering(200, ALICE_WINS);
    let state = FormState::filled("-5");

    match state.draft.validate() {
        Ok(_) => panic!("negative amount must not validate"),
        Err(errors) => {
            assert!(!errors.is_empty());
            assert!(errors.to_map().contains_key("claimAmount"));
        }
    }

    assert_eq!(server.calls.get(), 0);
    assert!(!state.tracker.is_busy());
}

#[tokio::test(flavor = "current_thread")]
async fn cancel_before_response_is_silent() {
    let (server, reply) = MockServer::new();
    let mut state = FormState::filled("100");
    let token = CancelToken::new();

    let input = state.draft.validate().unwrap();
    let payload = CasePayload::build(&input, CaseAttachments::<MemFile>::default()).unwrap();
    let ticket = state.tracker.begin().unwrap();

    let request = submit_case(&server, BASE_URL, payload, &token);
    let user = async {
        // user clicks cancel while the request is pending
        token.cancel();
        let abandoned = state.tracker.cancel();
        // the server answers anyway, too late
        let _ = reply.send(Ok(RawResponse {
            status: 200,
            body: ALICE_WINS.to_string(),
        }));
        abandoned
    };
    let (outcome, abandoned) = tokio::join!(request, user);

    assert_eq!(abandoned, Some(ticket));
    assert_eq!(outcome, SubmitOutcome::Cancelled);

    let settled = state.tracker.finish(ticket, outcome);
    state.apply(settled);

    assert_eq!(state.tracker.phase(), SubmitPhase::Idle);
    assert!(!state.tracker.is_busy());
    assert!(state.verdict.is_none());
    assert!(state.notifications.is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn api_error_is_notified_and_form_stays_usable() {
    let server = MockServer::answering(500, r#"{"error":"Failed to generate response"}"#);
    let mut state = FormState::filled("250.50");

    let input = state.draft.validate().unwrap();
    let payload = CasePayload::build(&input, CaseAttachments::<MemFile>::default()).unwrap();
    let ticket = state.tracker.begin().unwrap();
    let outcome = submit_case(&server, BASE_URL, payload, &CancelToken::new()).await;
    let settled = state.tracker.finish(ticket, outcome);
    state.apply(settled);

    assert!(state.verdict.is_none());
    assert_eq!(state.notifications, vec!["Failed to generate response".to_string()]);
    assert!(state.tracker.begin().is_some(), "retry allowed immediately");
}

#[tokio::test(flavor = "current_thread")]
async fn network_failure_uses_generic_message() {
    let (server, reply) = MockServer::new();
    drop(reply);
    let mut state = FormState::filled("10");

    let input = state.draft.validate().unwrap();
    let attachments = CaseAttachments {
        plaintiff_letter: Some(MemFile("claim.pdf")),
        plaintiff_evidence: vec![MemFile("receipt.png")],
        ..CaseAttachments::default()
    };
    let payload = CasePayload::build(&input, attachments).unwrap();
    let ticket = state.tracker.begin().unwrap();
    let outcome = submit_case(&server, BASE_URL, payload, &CancelToken::new()).await;
    let settled = state.tracker.finish(ticket, outcome);
    state.apply(settled);

    let sent = server.last_payload.borrow();
    let names: Vec<_> = sent.as_ref().unwrap().files.iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["plaintiff_letter", "image1"]);
    assert_eq!(
        state.notifications,
        vec!["Could not reach the server. Check your connection and try again.".to_string()]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn cancelled_token_skips_the_request() {
    let server = MockServer::answering(200, ALICE_WINS);
    let token = CancelToken::new();
    token.cancel();

    let input = FormState::filled("1").draft.validate().unwrap();
    let payload = CasePayload::build(&input, CaseAttachments::<MemFile>::default()).unwrap();
    let outcome = submit_case(&server, BASE_URL, payload, &token).await;

    assert_eq!(outcome, SubmitOutcome::Cancelled);
    assert_eq!(server.calls.get(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn aborted_transport_settles_as_cancelled_without_notification() {
    let (server, reply) = MockServer::new();
    let _ = reply.send(Err(SubmitError::Cancelled));
    let mut state = FormState::filled("250");

    let input = state.draft.validate().unwrap();
    let payload = CasePayload::build(&input, CaseAttachments::<MemFile>::default()).unwrap();
    let ticket = state.tracker.begin().unwrap();
    let outcome = submit_case(&server, BASE_URL, payload, &CancelToken::new()).await;

    assert_eq!(outcome, SubmitOutcome::Cancelled);
    let settled = state.tracker.finish(ticket, outcome);
    state.apply(settled);
    assert!(state.notifications.is_empty());
    assert!(state.verdict.is_none());
    assert_eq!(state.tracker.phase(), SubmitPhase::Idle);
}
