use async_trait::async_trait;
use model::Error;
use model::record::ExponentRecord;
use std::fmt::{Display, Formatter};

/// Durable storage for calculation results.
///
/// There is only a write path. A put replaces any record already stored
/// under the same `ID`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn put_record(&self, record: ExponentRecord) -> Result<(), StoreError>;
}

/// Errors arising from writing records.
#[derive(Debug)]
pub struct StoreError {
    pub record_id: String,

    pub operation: StoreOperation,
    pub reason: StoreErrorReason,
}

#[derive(Debug)]
pub enum StoreErrorReason {
    // The record couldn't be converted into the backend's format
    BadRecord(String),
    // An error from the underlying store
    BackendFailure(Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    PutRecord,
}

impl StoreError {
    pub fn new(record_id: String, operation: StoreOperation, reason: StoreErrorReason) -> Self {
        StoreError {
            record_id,
            operation,
            reason,
        }
    }
}

impl Display for StoreOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreOperation::PutRecord => f.write_str("put record"),
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            StoreErrorReason::BadRecord(reason) => write!(
                f,
                "failed to {} {}: invalid record: {}",
                self.operation, self.record_id, reason
            ),
            StoreErrorReason::BackendFailure(err) => write!(
                f,
                "failed to {} {}: {}",
                self.operation, self.record_id, err
            ),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.reason {
            StoreErrorReason::BadRecord(_) => None,
            StoreErrorReason::BackendFailure(err) => Some(err.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_record_and_backend_error() {
        let err: StoreError = StoreError::new(
            "1024.0".to_string(),
            StoreOperation::PutRecord,
            StoreErrorReason::BackendFailure("throttled".into()),
        );

        assert_eq!("failed to put record 1024.0: throttled", err.to_string());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn display_bad_record() {
        let err: StoreError = StoreError::new(
            "1.0".to_string(),
            StoreOperation::PutRecord,
            StoreErrorReason::BadRecord("not a map".to_string()),
        );

        assert_eq!("failed to put record 1.0: invalid record: not a map", err.to_string());
    }
}
