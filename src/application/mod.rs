//! Application layer containing the purchase-flow orchestration.
//!
//! This module defines the `PurchaseCoordinator`, the single-flight
//! `TransactionGate` it admits purchases through, the result router that
//! turns billing replies into native notifications or user messages, and
//! the `AppShell` lifecycle facade.

pub mod coordinator;
pub mod gate;
pub mod host;
pub mod router;
pub mod shell;
