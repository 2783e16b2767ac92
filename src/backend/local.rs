use crate::backend::Backend;
use crate::directory::local::{uri_to_path, LocalDirectory};
use crate::directory::Directory;
use crate::error::ScanResult;

pub struct LocalBackend;

impl LocalBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for LocalBackend {
    fn scheme(&self) -> &'static str {
        "file"
    }

    fn directory_for_uri(&self, uri: &str) -> ScanResult<Box<dyn Directory>> {
        let path = uri_to_path(uri)?;
        Ok(Box::new(LocalDirectory::new(path)))
    }
}
