pub mod billing;
pub mod consent;
pub mod outcome;
pub mod ports;
