//! Beacon: application integration status engine.
//!
//! This crate tracks the operational status of registered
//! application/repository integrations. On each status-check event it
//! classifies a remotely-reported repository status together with the
//! outcome of resolving the application's deployment configuration, and
//! drives the application through a guarded lifecycle state machine.
//!
//! # Architecture
//!
//! Beacon follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, doubles)
//!
//! # Modules
//!
//! - [`application`]: Application lifecycle tracking, repository status
//!   classification, and the status transition engine

pub mod application;
