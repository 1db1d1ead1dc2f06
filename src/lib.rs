//! frota — client-side manager for a small vehicle catalog.
//!
//! Mirrors a remote CRUD service into an in-memory [`cache::CollectionCache`],
//! drives a single edit session, and keeps a live search filter consistent
//! with the cache. All remote I/O goes through the [`gateway::VehicleGateway`]
//! trait; [`manager::VehicleManager`] is the only writer of local state.

pub mod error;
pub mod types;

pub mod cache;
pub mod filter;
pub mod gateway;
pub mod manager;
pub mod session;
