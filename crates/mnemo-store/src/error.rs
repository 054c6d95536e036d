use thiserror::Error;

/// Centralized error type for mnemo-store.
///
/// Variants follow the three failure surfaces of the store: opening (and
/// upgrading) the database, read transactions, and write transactions.
#[derive(Debug, Error, Clone)]
pub enum StoreError {
    #[error("store open failed: {0}")]
    Open(String),
    #[error("store read failed: {0}")]
    Read(String),
    #[error("store write failed: {0}")]
    Write(String),
}

impl StoreError {
    /// Creates an open error from any displayable engine error.
    pub fn open<E: std::fmt::Display>(err: E) -> Self {
        Self::Open(err.to_string())
    }

    /// Creates a read error from any displayable engine error.
    pub fn read<E: std::fmt::Display>(err: E) -> Self {
        Self::Read(err.to_string())
    }

    /// Creates a write error from any displayable engine error.
    pub fn write<E: std::fmt::Display>(err: E) -> Self {
        Self::Write(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
