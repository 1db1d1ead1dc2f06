//! Wire types for the reference vehicle service.
//!
//! The service predates this client and speaks Portuguese field names
//! (`nome`/`marca`/`modelo`); serde renames keep the Rust model in English.
//! Update success is a textual marker inside a `messages` array — decoding it
//! lives here, as a tagged `UpdateOutcome`, and nowhere else.

use serde::{Deserialize, Serialize};

use crate::types::{RecordFields, VehicleId, VehicleRecord};

use super::UpdateOutcome;

/// Marker the service embeds in an update response when the write was
/// actually applied. Transport success alone does not imply it.
pub const UPDATE_SUCCESS_MARKER: &str = "CARRO_ATUALIZADO_COM_SUCESSO";

/// A vehicle record as the service serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireVehicle {
    pub id: VehicleId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "modelo")]
    pub model: String,
}

impl From<WireVehicle> for VehicleRecord {
    fn from(wire: WireVehicle) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            brand: wire.brand,
            model: wire.model,
        }
    }
}

/// Request body for create and update calls.
#[derive(Debug, Clone, Serialize)]
pub struct WireFields {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "modelo")]
    pub model: String,
}

impl From<&RecordFields> for WireFields {
    fn from(fields: &RecordFields) -> Self {
        Self {
            name: fields.name.clone(),
            brand: fields.brand.clone(),
            model: fields.model.clone(),
        }
    }
}

/// Response body of an update call. Anything beyond `messages` is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateResponse {
    #[serde(default)]
    pub messages: Vec<String>,
}

impl UpdateResponse {
    /// Decode the success marker into a tagged outcome.
    pub fn outcome(&self) -> UpdateOutcome {
        if self.messages.iter().any(|m| m == UPDATE_SUCCESS_MARKER) {
            UpdateOutcome::Applied
        } else {
            UpdateOutcome::Unconfirmed
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_vehicle_decodes_portuguese_field_names() {
        let body = json!({ "id": 7, "nome": "Fusca", "marca": "VW", "modelo": "1300" });
        let wire: WireVehicle = serde_json::from_value(body).unwrap();
        let record: VehicleRecord = wire.into();
        assert_eq!(record.id, 7);
        assert_eq!(record.name, "Fusca");
        assert_eq!(record.brand, "VW");
        assert_eq!(record.model, "1300");
    }

    #[test]
    fn wire_fields_encode_portuguese_field_names() {
        let fields = RecordFields::new("Fusca", "VW", "1300");
        let body = serde_json::to_value(WireFields::from(&fields)).unwrap();
        assert_eq!(
            body,
            json!({ "nome": "Fusca", "marca": "VW", "modelo": "1300" })
        );
    }

    #[test]
    fn update_response_with_marker_is_applied() {
        let body = json!({ "messages": ["CARRO_ATUALIZADO_COM_SUCESSO"] });
        let response: UpdateResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.outcome(), UpdateOutcome::Applied);
    }

    #[test]
    fn update_response_without_marker_is_unconfirmed() {
        let body = json!({ "messages": ["CARRO_RECEBIDO"] });
        let response: UpdateResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.outcome(), UpdateOutcome::Unconfirmed);
    }

    #[test]
    fn update_response_missing_messages_is_unconfirmed() {
        let response: UpdateResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.outcome(), UpdateOutcome::Unconfirmed);
    }

    #[test]
    fn marker_must_match_exactly_not_as_substring_holder() {
        let body = json!({ "messages": ["PRE_CARRO_ATUALIZADO_COM_SUCESSO_POST"] });
        let response: UpdateResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.outcome(), UpdateOutcome::Unconfirmed);
    }
}
