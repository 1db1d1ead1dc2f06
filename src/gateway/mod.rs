//! Remote store gateway — the consumed CRUD contract.
//!
//! The core never talks to the network directly; it holds an
//! `Arc<dyn VehicleGateway>`. Implementations handle the actual transport
//! (HTTP, test mocks, etc.). The feature-gated [`http::HttpGateway`] covers
//! the reference REST service.

pub mod wire;

#[cfg(feature = "http")]
pub mod http;

use async_trait::async_trait;

use crate::types::{RecordFields, VehicleId, VehicleRecord};

#[cfg(feature = "http")]
pub use http::HttpGateway;
pub use wire::{UpdateResponse, WireFields, WireVehicle, UPDATE_SUCCESS_MARKER};

// ============================================================================
// VehicleGateway
// ============================================================================

/// Async CRUD contract of the remote vehicle store.
///
/// Create returns the persisted record with its server-assigned id and is
/// trusted as-is. Update success is signalled by an explicit marker in the
/// response body — decoded into [`UpdateOutcome`] at this boundary, so the
/// coordinator never sees raw response text. That asymmetry mirrors the
/// existing service and must be preserved.
#[async_trait]
pub trait VehicleGateway: Send + Sync {
    /// Fetch the full catalog.
    async fn list(&self) -> Result<Vec<VehicleRecord>, GatewayError>;

    /// Persist a new record; the returned record carries the assigned id.
    async fn create(&self, fields: &RecordFields) -> Result<VehicleRecord, GatewayError>;

    /// Overwrite the record with this id. `Ok(Unconfirmed)` means the call
    /// settled without a transport error but the server did not mark the
    /// write as applied.
    async fn update(
        &self,
        id: VehicleId,
        fields: &RecordFields,
    ) -> Result<UpdateOutcome, GatewayError>;

    /// Delete the record with this id.
    async fn delete(&self, id: VehicleId) -> Result<(), GatewayError>;
}

/// Whether an update response carried the explicit success marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The server confirmed the write was applied.
    Applied,
    /// The request was accepted but the success marker was absent — treated
    /// as a failure for cache-update purposes.
    Unconfirmed,
}

// ============================================================================
// GatewayError
// ============================================================================

/// Transport/server-level failure (wraps arbitrary error text from the
/// gateway implementation).
#[derive(Debug, Clone)]
pub struct GatewayError {
    pub message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for GatewayError {}
