use std::fmt;

use thiserror::Error;

use crate::gateway::GatewayError;
use crate::types::VehicleId;

// ---------------------------------------------------------------------------
// ValidationError / ValidationErrors
// ---------------------------------------------------------------------------

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field name: `"name"`, `"brand"`, or `"model"`.
    pub field: String,
}

impl ValidationError {
    pub fn empty(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"Required field "{}" is empty"#, self.field)
    }
}

impl std::error::Error for ValidationError {}

/// A collection of one or more `ValidationError`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed:")?;
        for e in &self.0 {
            write!(f, "\n  - {e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ---------------------------------------------------------------------------
// ManagerError
// ---------------------------------------------------------------------------

/// Every failure a coordinator operation can surface.
///
/// All variants are terminal to the operation that produced them — nothing is
/// retried automatically; the user may re-trigger the same action.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// `refresh()` failed; the cache was left with its previous contents.
    #[error("Failed to load vehicle list: {0}")]
    Load(#[source] GatewayError),

    /// A required field was empty; no gateway call was made.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Create or update failed at the transport level; cache untouched.
    #[error("Failed to save vehicle: {0}")]
    Save(#[source] GatewayError),

    /// The update response settled without the explicit success marker.
    /// The cache entry for `id` was left unchanged.
    #[error("Update for vehicle {id} was not confirmed by the server")]
    SaveUnconfirmed { id: VehicleId },

    /// Delete failed; cache untouched.
    #[error("Failed to delete vehicle {id}: {source}")]
    Delete {
        id: VehicleId,
        #[source]
        source: GatewayError,
    },

    /// The record being edited was removed from the cache before submit.
    #[error("Vehicle {id} no longer exists; edit discarded")]
    StaleEdit { id: VehicleId },
}

impl ManagerError {
    /// The presentation-boundary category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Load(_) => ErrorCategory::Load,
            Self::Validation(_) => ErrorCategory::Validation,
            Self::Save(_) | Self::SaveUnconfirmed { .. } => ErrorCategory::Save,
            Self::Delete { .. } => ErrorCategory::Delete,
            Self::StaleEdit { .. } => ErrorCategory::StaleEdit,
        }
    }
}

/// User-visible error taxonomy. The presentation layer maps each category to
/// its own message; an unconfirmed update is a save failure here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Load,
    Validation,
    Save,
    Delete,
    StaleEdit,
}

/// Convenience alias — the default error type is `ManagerError`.
pub type Result<T, E = ManagerError> = std::result::Result<T, E>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let e = ValidationError::empty("brand");
        assert_eq!(e.to_string(), r#"Required field "brand" is empty"#);
    }

    #[test]
    fn validation_errors_display_lists_every_field() {
        let errs = ValidationErrors(vec![
            ValidationError::empty("name"),
            ValidationError::empty("model"),
        ]);
        let msg = errs.to_string();
        assert!(msg.contains("Validation failed:"), "header missing: {msg}");
        assert!(msg.contains("name"), "field 'name' missing: {msg}");
        assert!(msg.contains("model"), "field 'model' missing: {msg}");
    }

    #[test]
    fn save_unconfirmed_display_names_the_id() {
        let e = ManagerError::SaveUnconfirmed { id: 42 };
        let msg = e.to_string();
        assert!(msg.contains("42"), "id missing: {msg}");
        assert!(msg.contains("not confirmed"), "marker wording missing: {msg}");
    }

    #[test]
    fn categories_collapse_unconfirmed_into_save() {
        let transport = ManagerError::Save(GatewayError::new("boom"));
        let marker = ManagerError::SaveUnconfirmed { id: 1 };
        assert_eq!(transport.category(), ErrorCategory::Save);
        assert_eq!(marker.category(), ErrorCategory::Save);
    }

    #[test]
    fn stale_edit_has_its_own_category() {
        let e = ManagerError::StaleEdit { id: 9 };
        assert_eq!(e.category(), ErrorCategory::StaleEdit);
    }
}
