use web_sys::{Blob, Url};

/// Owned `blob:` URL; revoked when dropped.
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    pub fn for_blob(blob: &Blob) -> Result<Self, String> {
        let url = Url::create_object_url_with_blob(blob).map_err(|e| format!("{e:?}"))?;
        Ok(Self { url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.url) {
            log::warn!("failed to revoke {}: {:?}", self.url, e);
        }
    }
}
