//! Record-store implementation of the `TargetService` trait.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::models::{NewTarget, Target};
use crate::services::target_service::TargetService;
use crate::store::RecordStore;

pub struct StoreTargetService {
    store: Arc<RecordStore>,
}

impl StoreTargetService {
    #[must_use]
    pub const fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TargetService for StoreTargetService {
    async fn add_target(&self, candidate: NewTarget) -> Target {
        let target = self.store.append_target(candidate);

        metrics::counter!("targets_created_total").increment(1);
        info!(target_id = target.id, kind = %target.kind, "Target recorded");

        target
    }

    async fn list_targets(&self) -> Vec<Target> {
        self.store.list_targets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_and_list() {
        let service = StoreTargetService::new(Arc::new(RecordStore::new()));

        let first = service
            .add_target(NewTarget::new("ip", "10.0.0.1", "scan target"))
            .await;
        let second = service
            .add_target(NewTarget::new("domain", "example.com", ""))
            .await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(service.list_targets().await, vec![first, second]);
    }

    #[tokio::test]
    async fn test_concurrent_adds_get_distinct_ids() {
        let service = Arc::new(StoreTargetService::new(Arc::new(RecordStore::new())));

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let service = Arc::clone(&service);
                tokio::spawn(async move {
                    service
                        .add_target(NewTarget::new("url", format!("https://{i}.test"), ""))
                        .await
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=50).collect::<Vec<i64>>());
    }
}
