//! Operation Context
//!
//! Contains metadata about the current operation for tracing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for an operation, used for tracing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperationContext {
    /// Correlation ID for request tracing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<Uuid>,
}

impl OperationContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create context with correlation ID
    pub fn with_correlation_id(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = Some(correlation_id);
        self
    }

    /// Generate a new correlation ID if not present
    pub fn ensure_correlation_id(&mut self) -> Uuid {
        *self.correlation_id.get_or_insert_with(Uuid::new_v4)
    }
}
