//! Domain service for recording targets.

use crate::models::{NewTarget, Target};

/// Domain service trait for targets.
///
/// Appending has no failure case: any field values are accepted.
#[async_trait::async_trait]
pub trait TargetService: Send + Sync {
    /// Appends a target and returns it with its assigned id.
    async fn add_target(&self, candidate: NewTarget) -> Target;

    /// Lists every target in the order it was recorded.
    async fn list_targets(&self) -> Vec<Target>;
}
