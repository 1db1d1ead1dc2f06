//! HTTP implementation of [`VehicleGateway`] over the reference REST service.
//!
//! Routes: `GET base`, `POST base`, `PUT base/{id}`, `DELETE base/{id}`.
//! Every transport failure and non-2xx status maps to a [`GatewayError`];
//! timeouts are whatever the underlying client is configured with.

use async_trait::async_trait;

use crate::types::{RecordFields, VehicleId, VehicleRecord};

use super::wire::{UpdateResponse, WireFields, WireVehicle};
use super::{GatewayError, UpdateOutcome, VehicleGateway};

/// Gateway backed by `reqwest` against a base resource URL, e.g.
/// `http://10.0.2.2:8080/carro`.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Use a pre-configured client (timeouts, proxies, headers).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn record_url(&self, id: VehicleId) -> String {
        format!("{}/{id}", self.base_url)
    }
}

#[async_trait]
impl VehicleGateway for HttpGateway {
    async fn list(&self) -> Result<Vec<VehicleRecord>, GatewayError> {
        let records: Vec<WireVehicle> = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| GatewayError::new(e.to_string()))?
            .json()
            .await
            .map_err(|e| GatewayError::new(e.to_string()))?;
        Ok(records.into_iter().map(VehicleRecord::from).collect())
    }

    async fn create(&self, fields: &RecordFields) -> Result<VehicleRecord, GatewayError> {
        let record: WireVehicle = self
            .client
            .post(&self.base_url)
            .json(&WireFields::from(fields))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| GatewayError::new(e.to_string()))?
            .json()
            .await
            .map_err(|e| GatewayError::new(e.to_string()))?;
        Ok(record.into())
    }

    async fn update(
        &self,
        id: VehicleId,
        fields: &RecordFields,
    ) -> Result<UpdateOutcome, GatewayError> {
        let response: UpdateResponse = self
            .client
            .put(self.record_url(id))
            .json(&WireFields::from(fields))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| GatewayError::new(e.to_string()))?
            .json()
            .await
            .map_err(|e| GatewayError::new(e.to_string()))?;
        Ok(response.outcome())
    }

    async fn delete(&self, id: VehicleId) -> Result<(), GatewayError> {
        self.client
            .delete(self.record_url(id))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| GatewayError::new(e.to_string()))?;
        Ok(())
    }
}
