use crate::shared::file_upload::BrowserFile;
use async_trait::async_trait;
use contracts::shared::file_staging::StagedFile;
use contracts::usecases::u501_submit_case::request::part;
use contracts::usecases::u501_submit_case::{CasePayload, CaseTransport, RawResponse, SubmitError};
use gloo_net::http::Request;
use web_sys::{AbortSignal, FormData};

/// `fetch` transport for the opinion endpoint.
///
/// The abort signal belongs to the caller's `AbortController`; aborting it
/// surfaces here as `SubmitError::Cancelled`.
pub struct FetchTransport {
    abort: AbortSignal,
}

impl FetchTransport {
    pub fn new(abort: AbortSignal) -> Self {
        Self { abort }
    }
}

#[async_trait(?Send)]
impl CaseTransport<BrowserFile> for FetchTransport {
    async fn post_multipart(
        &self,
        url: &str,
        payload: CasePayload<BrowserFile>,
    ) -> Result<RawResponse, SubmitError> {
        let form = build_form_data(payload).map_err(SubmitError::Encode)?;

        // no explicit Content-Type: the browser adds the multipart boundary
        let request = Request::post(url)
            .abort_signal(Some(&self.abort))
            .body(form)
            .map_err(|e| SubmitError::Encode(e.to_string()))?;

        let response = request.send().await.map_err(map_fetch_error)?;
        let status = response.status();
        let body = response.text().await.map_err(map_fetch_error)?;

        log::debug!("opinion service answered {} ({} bytes)", status, body.len());
        Ok(RawResponse { status, body })
    }
}

fn build_form_data(payload: CasePayload<BrowserFile>) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("{e:?}"))?;

    for file_part in &payload.files {
        form.append_with_blob_and_filename(
            file_part.name,
            &file_part.file.file,
            &file_part.file.name(),
        )
        .map_err(|e| format!("Failed to append {}: {:?}", file_part.name, e))?;
    }

    form.append_with_str(part::BODY, &payload.body)
        .map_err(|e| format!("Failed to append body: {:?}", e))?;

    Ok(form)
}

fn map_fetch_error(err: gloo_net::Error) -> SubmitError {
    match err {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => SubmitError::Cancelled,
        other => SubmitError::Network(other.to_string()),
    }
}
