use crate::error::StoreError;
use std::fmt;

/// Response codes delivered by the billing data source.
///
/// The raw code space is the platform's; unknown values are preserved in
/// [`ResponseCode::Unrecognized`] so they can still be classified (always as
/// a failure) instead of being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Ok,
    UserCanceled,
    BillingUnavailable,
    ItemUnavailable,
    DeveloperError,
    Error,
    ItemAlreadyOwned,
    ItemNotOwned,
    NoRestore,
    RestoreCompleted,
    Unrecognized(i32),
}

impl ResponseCode {
    pub fn from_raw(code: i32) -> Self {
        match code {
            0 => Self::Ok,
            1 => Self::UserCanceled,
            3 => Self::BillingUnavailable,
            4 => Self::ItemUnavailable,
            5 => Self::DeveloperError,
            6 => Self::Error,
            7 => Self::ItemAlreadyOwned,
            8 => Self::ItemNotOwned,
            9 => Self::NoRestore,
            10 => Self::RestoreCompleted,
            other => Self::Unrecognized(other),
        }
    }

    pub fn raw(&self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::UserCanceled => 1,
            Self::BillingUnavailable => 3,
            Self::ItemUnavailable => 4,
            Self::DeveloperError => 5,
            Self::Error => 6,
            Self::ItemAlreadyOwned => 7,
            Self::ItemNotOwned => 8,
            Self::NoRestore => 9,
            Self::RestoreCompleted => 10,
            Self::Unrecognized(other) => *other,
        }
    }
}

/// One callback invocation from the billing data source: a raw result code
/// and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingReply {
    pub code: i32,
    pub message: String,
}

impl BillingReply {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn response(&self) -> ResponseCode {
        ResponseCode::from_raw(self.code)
    }
}

/// Opaque identifier of a purchasable product (SKU), supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreId(String);

impl StoreId {
    pub fn new(value: impl Into<String>) -> Result<Self, StoreError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(StoreError::ValidationError(
                "Store id must not be empty".to_string(),
            ))
        } else {
            Ok(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
