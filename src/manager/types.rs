//! Coordinator-specific types: options, change events, and submit outcomes.

use std::sync::Arc;

use crate::gateway::VehicleGateway;
use crate::types::{VehicleId, VehicleRecord};

// ============================================================================
// Change Events
// ============================================================================

/// Emitted after each confirmed cache mutation so that subscribers know the
/// visible sequence changed. Failed operations emit nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// The cache was replaced by a full server listing.
    Loaded { count: usize },
    /// A newly persisted record was appended.
    Created { id: VehicleId },
    /// An existing record was overwritten in place.
    Updated { id: VehicleId },
    /// A record was removed.
    Deleted { id: VehicleId },
}

/// Callback type for change events.
pub type ChangeCallback = dyn Fn(&ChangeEvent) + Send + Sync;

// ============================================================================
// Submit Outcome
// ============================================================================

/// What a successful `submit()` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new record was persisted; carries the server-assigned id.
    Created(VehicleRecord),
    /// The record with this id was overwritten.
    Updated(VehicleId),
}

// ============================================================================
// VehicleManager Options
// ============================================================================

/// Configuration for [`VehicleManager`](super::VehicleManager).
pub struct VehicleManagerOptions {
    pub gateway: Arc<dyn VehicleGateway>,
    /// Called after each confirmed cache mutation.
    pub on_change: Option<Arc<ChangeCallback>>,
}

impl VehicleManagerOptions {
    pub fn new(gateway: Arc<dyn VehicleGateway>) -> Self {
        Self {
            gateway,
            on_change: None,
        }
    }
}
