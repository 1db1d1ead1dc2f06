//! EditSession — at most one record being composed.
//!
//! Holds owned copies of the three field values, never references into the
//! cache, so in-progress edits cannot leak into cached records before the
//! gateway confirms them. Transitions are driven only by the coordinator and
//! explicit user intent.

use crate::error::{ValidationError, ValidationErrors};
use crate::types::{RecordFields, VehicleId, VehicleRecord};

/// What the session is currently composing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Nothing in progress; fields are empty.
    #[default]
    Idle,
    /// Composing a new record.
    Creating,
    /// Editing the existing record with this id.
    Editing(VehicleId),
}

/// One of the three editable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Brand,
    Model,
}

impl Field {
    /// Field name as it appears in validation errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Brand => "brand",
            Self::Model => "model",
        }
    }
}

/// The in-progress create/edit state.
///
/// Starting a new session while one is active silently discards the previous
/// uncommitted fields — last-writer-wins at the intent level.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    mode: EditMode,
    name: String,
    brand: String,
    model: String,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start composing a new record; clears all fields.
    pub fn begin_create(&mut self) {
        self.mode = EditMode::Creating;
        self.name.clear();
        self.brand.clear();
        self.model.clear();
    }

    /// Start editing `record`; fields are copied by value.
    pub fn begin_edit(&mut self, record: &VehicleRecord) {
        self.mode = EditMode::Editing(record.id);
        self.name = record.name.clone();
        self.brand = record.brand.clone();
        self.model = record.model.clone();
    }

    /// Update one field in place. Always legal; validation happens at submit.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Brand => self.brand = value,
            Field::Model => self.model = value,
        }
    }

    /// Reset to `Idle` with empty fields — after a settled submit and on
    /// explicit cancel.
    pub fn clear(&mut self) {
        self.mode = EditMode::Idle;
        self.name.clear();
        self.brand.clear();
        self.model.clear();
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Brand => &self.brand,
            Field::Model => &self.model,
        }
    }

    /// The current (unvalidated, untrimmed) field values.
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            name: self.name.clone(),
            brand: self.brand.clone(),
            model: self.model.clone(),
        }
    }

    /// The single business rule: every field must be non-empty after
    /// trimming. On success returns the trimmed fields ready for the gateway.
    pub fn validate(&self) -> Result<RecordFields, ValidationErrors> {
        let mut errors = Vec::new();
        for field in [Field::Name, Field::Brand, Field::Model] {
            if self.field(field).trim().is_empty() {
                errors.push(ValidationError::empty(field.as_str()));
            }
        }
        if errors.is_empty() {
            Ok(RecordFields {
                name: self.name.trim().to_string(),
                brand: self.brand.trim().to_string(),
                model: self.model.trim().to_string(),
            })
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
