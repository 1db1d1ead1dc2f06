use serde::{Deserialize, Serialize};

/// Server-assigned record identifier. Two records are the same entity iff
/// their ids match.
pub type VehicleId = i64;

/// A persisted vehicle record — the shape mirrored from the remote store.
///
/// The id is assigned by the server, so a `VehicleRecord` only exists once
/// the record has been persisted. Unsaved drafts are [`RecordFields`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: VehicleId,
    pub name: String,
    pub brand: String,
    pub model: String,
}

impl VehicleRecord {
    /// The draft field trio of this record (owned copies).
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            name: self.name.clone(),
            brand: self.brand.clone(),
            model: self.model.clone(),
        }
    }
}

/// The three user-editable fields of a vehicle, without an identity.
///
/// Produced by a validated edit session and sent to the gateway on
/// create/update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFields {
    pub name: String,
    pub brand: String,
    pub model: String,
}

impl RecordFields {
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            model: model.into(),
        }
    }
}
