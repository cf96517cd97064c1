//! Purchase-flow coordination for a native game shell.
//!
//! This library bridges a game runtime to the platform purchase ledger. Its
//! core is the [`application::coordinator::PurchaseCoordinator`], which
//! serializes purchase attempts behind a single-flight gate, reconciles
//! asynchronous billing replies, and notifies the native layer exactly once
//! per completed transaction. Billing, the native bridge, the UI host, and
//! preference storage are ports; adapters live under `infrastructure`.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
