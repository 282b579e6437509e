use serde::{Deserialize, Serialize};

use super::error::SubmitError;
use crate::domain::a001_case::{CaseInput, Currency};

/// Path of the opinion endpoint, appended to the configured base URL.
pub const ASK_PATH: &str = "/ask/gemini";

/// Multipart part names understood by the service.
pub mod part {
    pub const PLAINTIFF_LETTER: &str = "plaintiff_letter";
    pub const DEFENDANT_LETTER: &str = "defendant_letter";
    pub const PLAINTIFF_EVIDENCE: &str = "image1";
    pub const DEFENDANT_EVIDENCE: &str = "image2";
    pub const BODY: &str = "body";
}

/// JSON carried in the `body` part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseBody {
    pub plaintiff: String,
    pub defendant: String,
    pub claim_amount: f64,
    pub claim_currency: Currency,
    pub claim_reason: String,
}

impl From<&CaseInput> for CaseBody {
    fn from(input: &CaseInput) -> Self {
        Self {
            plaintiff: input.plaintiff_name.clone(),
            defendant: input.defendant_name.clone(),
            claim_amount: input.claim_amount,
            claim_currency: input.claim_currency,
            claim_reason: input.claim_reason.clone(),
        }
    }
}

/// Files staged for the four upload slots.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseAttachments<F> {
    pub plaintiff_letter: Option<F>,
    pub defendant_letter: Option<F>,
    pub plaintiff_evidence: Vec<F>,
    pub defendant_evidence: Vec<F>,
}

impl<F> Default for CaseAttachments<F> {
    fn default() -> Self {
        Self {
            plaintiff_letter: None,
            defendant_letter: None,
            plaintiff_evidence: Vec::new(),
            defendant_evidence: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilePart<F> {
    pub name: &'static str,
    pub file: F,
}

/// Transport-neutral multipart request: file parts in wire order plus the JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct CasePayload<F> {
    pub files: Vec<FilePart<F>>,
    pub body: String,
}

impl<F> CasePayload<F> {
    pub fn build(input: &CaseInput, attachments: CaseAttachments<F>) -> Result<Self, SubmitError> {
        let body = serde_json::to_string(&CaseBody::from(input))
            .map_err(|e| SubmitError::Encode(e.to_string()))?;

        let CaseAttachments {
            plaintiff_letter,
            defendant_letter,
            plaintiff_evidence,
            defendant_evidence,
        } = attachments;

        let mut files = Vec::new();
        if let Some(file) = plaintiff_letter {
            files.push(FilePart { name: part::PLAINTIFF_LETTER, file });
        }
        if let Some(file) = defendant_letter {
            files.push(FilePart { name: part::DEFENDANT_LETTER, file });
        }
        files.extend(
            plaintiff_evidence
                .into_iter()
                .map(|file| FilePart { name: part::PLAINTIFF_EVIDENCE, file }),
        );
        files.extend(
            defendant_evidence
                .into_iter()
                .map(|file| FilePart { name: part::DEFENDANT_EVIDENCE, file }),
        );

        Ok(Self { files, body })
    }
}

/// `{base}/ask/gemini`, tolerating a trailing slash on the base.
pub fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), ASK_PATH)
}
