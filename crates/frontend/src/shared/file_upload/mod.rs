pub mod browser_file;
pub mod object_url;
pub mod zone;

pub use browser_file::{files_from_list, BrowserFile};
pub use object_url::ObjectUrl;
pub use zone::FileUploadZone;
