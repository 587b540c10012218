//! Process-wide client slot.
//!
//! Binaries that want a single shared client call [`init`] once at startup
//! and [`client`] wherever a call is made. Library code and tests should
//! prefer passing an [`ApiClient`] explicitly.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::client::ApiClient;

static SLOT: RwLock<Option<Arc<ApiClient>>> = RwLock::new(None);

#[derive(Debug, thiserror::Error)]
pub enum GlobalError {
    #[error("the global API client is already initialised")]
    AlreadyInitialised,

    #[error("the global API client has not been initialised")]
    Uninitialised,
}

/// Install `client` as the global client.
///
/// Fails with [`GlobalError::AlreadyInitialised`] if a client is installed;
/// call [`reset`] first to replace it.
pub fn init(client: ApiClient) -> Result<Arc<ApiClient>, GlobalError> {
    let mut slot = SLOT.write().unwrap_or_else(PoisonError::into_inner);
    if slot.is_some() {
        return Err(GlobalError::AlreadyInitialised);
    }
    let client = Arc::new(client);
    debug!(url = %client.url(""), "global API client installed");
    *slot = Some(Arc::clone(&client));
    Ok(client)
}

/// The installed global client.
pub fn client() -> Result<Arc<ApiClient>, GlobalError> {
    SLOT.read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or(GlobalError::Uninitialised)
}

/// Remove the global client. Handles already obtained from [`client`] keep
/// working.
pub fn reset() {
    SLOT.write().unwrap_or_else(PoisonError::into_inner).take();
}
