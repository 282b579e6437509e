use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use super::error::SubmitError;
use super::progress::SubmitOutcome;
use super::request::{endpoint_url, CasePayload};
use super::response::{interpret_response, RawResponse};
use crate::usecases::common::UseCaseMetadata;

pub struct SubmitCase;

impl UseCaseMetadata for SubmitCase {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "submit_case"
    }

    fn description() -> &'static str {
        "Send case details and documents to the opinion service and return the verdict"
    }
}

/// Shared abort flag, checked before the request and after it settles.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Sends a multipart payload and returns status + body text.
///
/// Implementations map a user abort to `SubmitError::Cancelled` and any
/// transport failure to `SubmitError::Network`.
#[async_trait(?Send)]
pub trait CaseTransport<F> {
    async fn post_multipart(
        &self,
        url: &str,
        payload: CasePayload<F>,
    ) -> Result<RawResponse, SubmitError>;
}

/// Posts the case to `{base_url}/ask/gemini` and interprets the reply.
///
/// Once `cancel` is set the outcome is `Cancelled` whatever the transport
/// returned, so a late response never surfaces.
pub async fn submit_case<F, T>(
    transport: &T,
    base_url: &str,
    payload: CasePayload<F>,
    cancel: &CancelToken,
) -> SubmitOutcome
where
    T: CaseTransport<F> + ?Sized,
{
    if cancel.is_cancelled() {
        return SubmitOutcome::Cancelled;
    }

    log::debug!("[{}] {}", SubmitCase::full_name(), SubmitCase::description());
    let url = endpoint_url(base_url);
    log::info!(
        "[{}] POST {} with {} file part(s)",
        SubmitCase::full_name(),
        url,
        payload.files.len()
    );

    let result = transport.post_multipart(&url, payload).await;

    if cancel.is_cancelled() {
        log::debug!("[{}] cancelled by user", SubmitCase::full_name());
        return SubmitOutcome::Cancelled;
    }

    match result.and_then(|raw| interpret_response(&raw)) {
        Ok(verdict) => {
            log::info!("[{}] verdict received", SubmitCase::full_name());
            SubmitOutcome::Verdict(verdict)
        }
        Err(e) if e.is_cancelled() => SubmitOutcome::Cancelled,
        Err(e) => {
            log::warn!("[{}] failed: {}", SubmitCase::full_name(), e);
            SubmitOutcome::Failed(e)
        }
    }
}
