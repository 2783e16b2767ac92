pub mod local;

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::directory::Directory;
use crate::error::{ErrorKind, ScanError, ScanResult};

/// Trait that all backends must implement.
/// A backend resolves directory URIs of one scheme (e.g., "file://").
pub trait Backend: Send + Sync {
    fn scheme(&self) -> &'static str;

    fn directory_for_uri(&self, uri: &str) -> ScanResult<Box<dyn Directory>>;
}

/// Global registry for backends.
pub struct BackendRegistry {
    backends: HashMap<String, Arc<dyn Backend>>,
}

impl BackendRegistry {
    fn new() -> Self {
        Self {
            backends: HashMap::new(),
        }
    }

    pub fn register(&mut self, backend: Arc<dyn Backend>) {
        self.backends.insert(backend.scheme().to_string(), backend);
    }

    pub fn get_backend(&self, scheme: &str) -> Option<Arc<dyn Backend>> {
        self.backends.get(scheme).cloned()
    }
}

static REGISTRY: Lazy<RwLock<BackendRegistry>> = Lazy::new(|| RwLock::new(BackendRegistry::new()));

pub fn register_backend(backend: Arc<dyn Backend>) {
    let mut registry = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    tracing::debug!(scheme = backend.scheme(), "registering backend");
    registry.register(backend);
}

pub fn get_backend_for_scheme(scheme: &str) -> Option<Arc<dyn Backend>> {
    let registry = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    registry.get_backend(scheme)
}

/// Resolves a directory URI through the registered backends.
/// URIs without a scheme are treated as local paths.
pub fn get_directory_for_uri(uri: &str) -> ScanResult<Box<dyn Directory>> {
    let scheme = match uri.split_once("://") {
        Some((scheme, _)) => scheme,
        None => "file",
    };

    match get_backend_for_scheme(scheme) {
        Some(backend) => backend.directory_for_uri(uri),
        None => Err(ScanError::new(
            ErrorKind::NotSupported,
            format!("No backend found for scheme: {}", scheme),
        )),
    }
}
