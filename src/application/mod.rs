//! Application integration lifecycle management for Beacon.
//!
//! This module tracks registered application/repository integrations and
//! resolves, on each status-check event, which lifecycle state the
//! application transitions into. The decision combines a remotely-reported
//! repository status classification with the outcome of resolving the
//! application's deployment configuration, evaluated against a fixed,
//! ordered guard table. Lifecycle hooks (transition logging, inactive
//! notification, deployment record management) fire exactly once per
//! state-changing transition. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
