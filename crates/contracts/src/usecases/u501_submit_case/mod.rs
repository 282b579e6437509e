pub mod error;
pub mod progress;
pub mod request;
pub mod response;
pub mod slots;
pub mod submit;

pub use error::SubmitError;
pub use progress::{SubmissionTicket, SubmissionTracker, SubmitOutcome, SubmitPhase, ANALYZING_DELAY_MS};
pub use request::{CaseAttachments, CaseBody, CasePayload, FilePart, ASK_PATH};
pub use response::{interpret_response, ApiErrorResponse, ApiResponse, RawResponse};
pub use slots::{evidence_slot, letter_slot, EVIDENCE_MODE};
pub use submit::{submit_case, CancelToken, CaseTransport, SubmitCase};
