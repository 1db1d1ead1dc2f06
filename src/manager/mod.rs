//! VehicleManager — the operation coordinator.
//!
//! The only writer of the collection cache and the edit session. Each
//! user-initiated action issues at most one gateway call; local state is
//! mutated only after that call settles. Locks are never held across an
//! `.await`, so a manager shared via `Arc` allows two operations in flight at
//! once — their cache mutations apply independently, in completion order,
//! degrading to the cache's defensive no-ops when a target is already gone.

pub mod types;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::CollectionCache;
use crate::error::{ManagerError, Result};
use crate::filter;
use crate::gateway::{UpdateOutcome, VehicleGateway};
use crate::session::{EditMode, EditSession, Field};
use crate::types::{RecordFields, VehicleId, VehicleRecord};

pub use types::{ChangeCallback, ChangeEvent, SubmitOutcome, VehicleManagerOptions};

// ============================================================================
// VehicleManager
// ============================================================================

pub struct VehicleManager {
    gateway: Arc<dyn VehicleGateway>,
    cache: Mutex<CollectionCache>,
    session: Mutex<EditSession>,
    on_change: Option<Arc<ChangeCallback>>,
}

impl VehicleManager {
    pub fn new(options: VehicleManagerOptions) -> Self {
        Self {
            gateway: options.gateway,
            cache: Mutex::new(CollectionCache::new()),
            session: Mutex::new(EditSession::new()),
            on_change: options.on_change,
        }
    }

    // -----------------------------------------------------------------------
    // Remote operations
    // -----------------------------------------------------------------------

    /// Fetch the full catalog and replace the cache with it.
    ///
    /// On failure the cache keeps its previous contents — stale-but-present
    /// data is preferred over an empty view. Returns the record count.
    pub async fn refresh(&self) -> Result<usize> {
        let records = self.gateway.list().await.map_err(ManagerError::Load)?;
        let count = {
            let mut cache = self.cache.lock();
            cache.load(records);
            cache.len()
        };
        tracing::debug!(count, "catalog refreshed");
        self.fire_change(&ChangeEvent::Loaded { count });
        Ok(count)
    }

    /// Submit the current edit session.
    ///
    /// Validation runs first; on failure no gateway call is made and the
    /// session keeps its typed values. Once a gateway call settles — success
    /// or failure — the session resets to `Idle` with cleared fields.
    pub async fn submit(&self) -> Result<SubmitOutcome> {
        let (mode, fields) = {
            let session = self.session.lock();
            let fields = session.validate()?;
            (session.mode(), fields)
        };

        match mode {
            EditMode::Editing(id) => self.submit_update(id, fields).await,
            // An untouched form is a create attempt.
            EditMode::Idle | EditMode::Creating => self.submit_create(fields).await,
        }
    }

    /// Delete the record with this id.
    ///
    /// Confirmation is the caller's responsibility — this method assumes
    /// consent was already obtained. Removing an id the cache no longer holds
    /// is a no-op once the gateway succeeds.
    pub async fn delete(&self, id: VehicleId) -> Result<()> {
        self.gateway
            .delete(id)
            .await
            .map_err(|source| ManagerError::Delete { id, source })?;
        let removed = self.cache.lock().remove(id);
        tracing::debug!(id, removed, "vehicle deleted");
        if removed {
            self.fire_change(&ChangeEvent::Deleted { id });
        }
        Ok(())
    }

    async fn submit_create(&self, fields: RecordFields) -> Result<SubmitOutcome> {
        let result = self.gateway.create(&fields).await;
        // The call settled; a failed submit does not re-offer typed values.
        self.session.lock().clear();
        match result {
            Ok(record) => {
                let id = record.id;
                self.cache.lock().insert(record.clone());
                tracing::debug!(id, "vehicle created");
                self.fire_change(&ChangeEvent::Created { id });
                Ok(SubmitOutcome::Created(record))
            }
            Err(e) => Err(ManagerError::Save(e)),
        }
    }

    async fn submit_update(&self, id: VehicleId, fields: RecordFields) -> Result<SubmitOutcome> {
        // The edit target may have been deleted by a concurrent action since
        // editing began; fail before touching the gateway.
        if !self.cache.lock().contains(id) {
            self.session.lock().clear();
            return Err(ManagerError::StaleEdit { id });
        }

        let result = self.gateway.update(id, &fields).await;
        self.session.lock().clear();
        match result {
            Ok(UpdateOutcome::Applied) => {
                self.cache.lock().replace(id, &fields);
                tracing::debug!(id, "vehicle updated");
                self.fire_change(&ChangeEvent::Updated { id });
                Ok(SubmitOutcome::Updated(id))
            }
            // Settled without a transport error, but the server never marked
            // the write as applied — the cache entry stays untouched.
            Ok(UpdateOutcome::Unconfirmed) => Err(ManagerError::SaveUnconfirmed { id }),
            Err(e) => Err(ManagerError::Save(e)),
        }
    }

    // -----------------------------------------------------------------------
    // Edit session
    // -----------------------------------------------------------------------

    /// Start composing a new record, discarding any active session.
    pub fn begin_create(&self) {
        self.session.lock().begin_create();
    }

    /// Start editing the cached record with this id, copying its fields into
    /// the session. Returns `false` (session untouched) if the id is absent.
    pub fn begin_edit(&self, id: VehicleId) -> bool {
        let cache = self.cache.lock();
        match cache.get(id) {
            Some(record) => {
                self.session.lock().begin_edit(record);
                true
            }
            None => false,
        }
    }

    /// Route one field's input into the session.
    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        self.session.lock().set_field(field, value);
    }

    /// Explicit cancel — back to `Idle`, fields cleared.
    pub fn cancel(&self) {
        self.session.lock().clear();
    }

    pub fn mode(&self) -> EditMode {
        self.session.lock().mode()
    }

    /// Current (unvalidated) session field values.
    pub fn session_fields(&self) -> RecordFields {
        self.session.lock().fields()
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    /// Snapshot of the full cached sequence.
    pub fn records(&self) -> Vec<VehicleRecord> {
        self.cache.lock().records().to_vec()
    }

    /// Snapshot of the records whose name matches `query` (case-insensitive
    /// substring), original order preserved.
    pub fn visible(&self, query: &str) -> Vec<VehicleRecord> {
        let cache = self.cache.lock();
        filter::visible(cache.records(), query)
            .into_iter()
            .cloned()
            .collect()
    }

    // -----------------------------------------------------------------------
    // Callbacks
    // -----------------------------------------------------------------------

    fn fire_change(&self, event: &ChangeEvent) {
        if let Some(ref on_change) = self.on_change {
            // Swallow callback panics — a listener must not break the operation.
            let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                on_change(event);
            }));
        }
    }
}
