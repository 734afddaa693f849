//! Object URLs for local file previews.
//!
//! A preview URL pins the file in browser memory until it is revoked.
//! [`PreviewUrl`] owns the URL and revokes it exactly once when dropped, so a
//! replaced file or an unmounted form can never leak one.

use crate::shared::http::ApiError;

pub trait ObjectUrls: Clone {
    type Blob: Clone;

    fn create(&self, blob: &Self::Blob) -> Result<String, ApiError>;
    fn revoke(&self, url: &str);
}

/// `URL.createObjectURL` / `URL.revokeObjectURL`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserObjectUrls;

impl ObjectUrls for BrowserObjectUrls {
    type Blob = web_sys::File;

    fn create(&self, blob: &web_sys::File) -> Result<String, ApiError> {
        web_sys::Url::create_object_url_with_blob(blob)
            .map_err(|e| ApiError::Browser(format!("Failed to create object URL: {:?}", e)))
    }

    fn revoke(&self, url: &str) {
        if let Err(e) = web_sys::Url::revoke_object_url(url) {
            log::warn!("Failed to revoke object URL {}: {:?}", url, e);
        }
    }
}

pub struct PreviewUrl<U: ObjectUrls> {
    url: String,
    urls: U,
}

impl<U: ObjectUrls> PreviewUrl<U> {
    pub fn acquire(urls: U, blob: &U::Blob) -> Result<Self, ApiError> {
        let url = urls.create(blob)?;
        Ok(Self { url, urls })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl<U: ObjectUrls> Drop for PreviewUrl<U> {
    fn drop(&mut self) {
        self.urls.revoke(&self.url);
    }
}

/// A picked file plus its preview.
pub struct FileSelection<U: ObjectUrls> {
    pub blob: U::Blob,
    pub filename: String,
    preview: PreviewUrl<U>,
}

impl<U: ObjectUrls> FileSelection<U> {
    pub fn new(urls: U, blob: U::Blob, filename: impl Into<String>) -> Result<Self, ApiError> {
        let preview = PreviewUrl::acquire(urls, &blob)?;
        Ok(Self {
            blob,
            filename: filename.into(),
            preview,
        })
    }

    pub fn preview_url(&self) -> &str {
        self.preview.as_str()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Counts create/revoke calls; blobs are plain strings.
    #[derive(Clone, Default)]
    pub struct CountingUrls {
        pub log: Rc<RefCell<UrlLog>>,
    }

    #[derive(Default, Debug)]
    pub struct UrlLog {
        pub created: Vec<String>,
        pub revoked: Vec<String>,
    }

    impl ObjectUrls for CountingUrls {
        type Blob = String;

        fn create(&self, blob: &String) -> Result<String, ApiError> {
            let mut log = self.log.borrow_mut();
            let url = format!("blob:test/{}/{}", log.created.len(), blob);
            log.created.push(url.clone());
            Ok(url)
        }

        fn revoke(&self, url: &str) {
            self.log.borrow_mut().revoked.push(url.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::CountingUrls;
    use super::*;

    #[test]
    fn drop_revokes_exactly_once() {
        let urls = CountingUrls::default();
        {
            let preview = PreviewUrl::acquire(urls.clone(), &"a.png".to_string()).unwrap();
            assert!(preview.as_str().starts_with("blob:"));
        }
        let log = urls.log.borrow();
        assert_eq!(log.created.len(), 1);
        assert_eq!(log.revoked, log.created);
    }

    #[test]
    fn replacing_a_selection_revokes_the_old_url() {
        let urls = CountingUrls::default();
        let mut slot = Some(FileSelection::new(urls.clone(), "one.png".to_string(), "one.png").unwrap());
        let first_url = slot.as_ref().unwrap().preview_url().to_string();

        slot = Some(FileSelection::new(urls.clone(), "two.png".to_string(), "two.png").unwrap());
        assert_eq!(urls.log.borrow().revoked, vec![first_url]);

        drop(slot);
        let log = urls.log.borrow();
        assert_eq!(log.created.len(), log.revoked.len());
    }
}
