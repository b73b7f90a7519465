//! In-memory container backend
//!
//! Default implementation used when no engine is reachable, by the demo
//! binary and by tests. Removal follows the engine's conflict rules: an
//! image used by a container, a running container and a mounted volume
//! cannot be removed.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::traits::ContainerBackend;
use crate::types::{
    ContainerState, ContainerSummary, ImageSummary, ResourceKind, VolumeSummary,
};

#[derive(Debug, Default)]
struct Store {
    images: Vec<ImageSummary>,
    containers: Vec<ContainerSummary>,
    volumes: Vec<VolumeSummary>,
}

/// In-memory backend
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    store: Arc<RwLock<Store>>,
    latency: Duration,
    /// When set, every call fails with this message
    failure: Arc<RwLock<Option<String>>>,
}

impl InMemoryBackend {
    /// Create an empty backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-populated with a small, consistent data set
    #[must_use]
    pub fn with_sample_data() -> Self {
        let now = Utc::now();
        let nginx = sample_image("nginx:1.27", 4, 192_000_000);
        let postgres = sample_image("postgres:16", 12, 438_000_000);
        let redis = sample_image("redis:7-alpine", 20, 41_000_000);
        let busybox = sample_image("busybox:latest", 60, 4_300_000);

        let containers = vec![
            sample_container("web", "nginx:1.27", ContainerState::Running, &["static"]),
            sample_container("db", "postgres:16", ContainerState::Running, &["pgdata"]),
            sample_container("cache", "redis:7-alpine", ContainerState::Exited, &[]),
        ];

        let volumes = [("pgdata", 3), ("static", 6), ("scratch", 9)]
            .into_iter()
            .map(|(name, age_days)| VolumeSummary {
                name: name.to_string(),
                driver: "local".to_string(),
                mountpoint: format!("/var/lib/docker/volumes/{name}/_data"),
                created: Some(now - ChronoDuration::days(age_days)),
            })
            .collect();

        Self {
            store: Arc::new(RwLock::new(Store {
                images: vec![nginx, postgres, redis, busybox],
                containers,
                volumes,
            })),
            ..Self::default()
        }
    }

    /// Delay every call by `latency`, to make the status overlay visible
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make every subsequent call fail with `message` (or succeed again with `None`)
    pub async fn set_failure(&self, message: Option<String>) {
        *self.failure.write().await = message;
    }

    /// Add an image to the store
    pub async fn insert_image(&self, image: ImageSummary) {
        self.store.write().await.images.push(image);
    }

    pub async fn insert_container(&self, container: ContainerSummary) {
        self.store.write().await.containers.push(container);
    }

    pub async fn insert_volume(&self, volume: VolumeSummary) {
        self.store.write().await.volumes.push(volume);
    }

    /// Apply the configured latency, then the injected failure if any
    async fn enter(&self) -> CoreResult<()> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if let Some(ref msg) = *self.failure.read().await {
            return Err(CoreError::Backend(msg.clone()));
        }
        Ok(())
    }

    fn not_found(kind: ResourceKind, id: &str) -> CoreError {
        CoreError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    async fn set_container_state(
        &self,
        id: &str,
        state: ContainerState,
        status: &str,
    ) -> CoreResult<()> {
        self.enter().await?;
        let mut store = self.store.write().await;
        let container = store
            .containers
            .iter_mut()
            .find(|c| c.matches_reference(id))
            .ok_or_else(|| Self::not_found(ResourceKind::Container, id))?;
        container.state = state;
        container.status = status.to_string();
        log::debug!("container {} is now {}", container.display_name(), state.as_str());
        Ok(())
    }
}

#[async_trait]
impl ContainerBackend for InMemoryBackend {
    async fn list_images(&self) -> CoreResult<Vec<ImageSummary>> {
        self.enter().await?;
        Ok(self.store.read().await.images.clone())
    }

    async fn list_containers(&self) -> CoreResult<Vec<ContainerSummary>> {
        self.enter().await?;
        Ok(self.store.read().await.containers.clone())
    }

    async fn list_volumes(&self) -> CoreResult<Vec<VolumeSummary>> {
        self.enter().await?;
        Ok(self.store.read().await.volumes.clone())
    }

    async fn inspect(&self, kind: ResourceKind, id: &str) -> CoreResult<serde_json::Value> {
        self.enter().await?;
        let store = self.store.read().await;
        let value = match kind {
            ResourceKind::Image => store
                .images
                .iter()
                .find(|i| i.matches_reference(id))
                .map(serde_json::to_value),
            ResourceKind::Container => store
                .containers
                .iter()
                .find(|c| c.matches_reference(id))
                .map(serde_json::to_value),
            ResourceKind::Volume => store
                .volumes
                .iter()
                .find(|v| v.name == id)
                .map(serde_json::to_value),
        };
        let value = value.ok_or_else(|| Self::not_found(kind, id))??;
        Ok(value)
    }

    async fn remove(&self, kind: ResourceKind, id: &str) -> CoreResult<()> {
        self.enter().await?;
        let mut store = self.store.write().await;
        match kind {
            ResourceKind::Image => {
                let index = store
                    .images
                    .iter()
                    .position(|i| i.matches_reference(id))
                    .ok_or_else(|| Self::not_found(kind, id))?;
                let image = &store.images[index];
                if let Some(user) = store
                    .containers
                    .iter()
                    .find(|c| image.matches_reference(&c.image))
                {
                    return Err(CoreError::Conflict {
                        kind,
                        id: id.to_string(),
                        reason: format!("used by container {}", user.display_name()),
                    });
                }
                store.images.remove(index);
            }
            ResourceKind::Container => {
                let index = store
                    .containers
                    .iter()
                    .position(|c| c.matches_reference(id))
                    .ok_or_else(|| Self::not_found(kind, id))?;
                if store.containers[index].state.is_running() {
                    return Err(CoreError::Conflict {
                        kind,
                        id: id.to_string(),
                        reason: "stop the container before removing it".to_string(),
                    });
                }
                store.containers.remove(index);
            }
            ResourceKind::Volume => {
                let index = store
                    .volumes
                    .iter()
                    .position(|v| v.name == id)
                    .ok_or_else(|| Self::not_found(kind, id))?;
                if let Some(user) = store
                    .containers
                    .iter()
                    .find(|c| c.mounts.iter().any(|m| m == id))
                {
                    return Err(CoreError::Conflict {
                        kind,
                        id: id.to_string(),
                        reason: format!("mounted by container {}", user.display_name()),
                    });
                }
                store.volumes.remove(index);
            }
        }
        log::info!("removed {kind} {id}");
        Ok(())
    }

    async fn start_container(&self, id: &str) -> CoreResult<()> {
        self.set_container_state(id, ContainerState::Running, "Up Less than a second")
            .await
    }

    async fn stop_container(&self, id: &str) -> CoreResult<()> {
        self.set_container_state(id, ContainerState::Exited, "Exited (0) Less than a second ago")
            .await
    }
}

fn random_hex() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

fn sample_image(tag: &str, age_days: i64, size: u64) -> ImageSummary {
    ImageSummary {
        id: format!("sha256:{}", random_hex()),
        repo_tags: vec![tag.to_string()],
        created: Utc::now() - ChronoDuration::days(age_days),
        size,
    }
}

fn sample_container(
    name: &str,
    image: &str,
    state: ContainerState,
    mounts: &[&str],
) -> ContainerSummary {
    let status = if state.is_running() {
        "Up 2 hours"
    } else {
        "Exited (0) 3 hours ago"
    };
    ContainerSummary {
        id: random_hex(),
        names: vec![format!("/{name}")],
        image: image.to_string(),
        state,
        status: status.to_string(),
        created: Utc::now() - ChronoDuration::hours(5),
        mounts: mounts.iter().map(ToString::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Listing;

    #[tokio::test]
    async fn sample_data_is_consistent() {
        let backend = InMemoryBackend::with_sample_data();
        assert_eq!(backend.list_images().await.unwrap().len(), 4);
        assert_eq!(backend.list_containers().await.unwrap().len(), 3);
        assert_eq!(backend.list_volumes().await.unwrap().len(), 3);

        let listing = backend.list(ResourceKind::Volume).await.unwrap();
        assert!(matches!(listing, Listing::Volumes(ref v) if v.len() == 3));
    }

    #[tokio::test]
    async fn image_used_by_container_cannot_be_removed() {
        let backend = InMemoryBackend::with_sample_data();
        let err = backend
            .remove(ResourceKind::Image, "nginx:1.27")
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Conflict { .. }));

        // busybox is not used by any container
        backend
            .remove(ResourceKind::Image, "busybox:latest")
            .await
            .unwrap();
        assert_eq!(backend.list_images().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn running_container_must_be_stopped_first() {
        let backend = InMemoryBackend::with_sample_data();
        assert!(backend.remove(ResourceKind::Container, "web").await.is_err());

        backend.stop_container("web").await.unwrap();
        backend.remove(ResourceKind::Container, "web").await.unwrap();

        let names: Vec<String> = backend
            .list_containers()
            .await
            .unwrap()
            .iter()
            .map(|c| c.display_name().to_string())
            .collect();
        assert_eq!(names, vec!["db", "cache"]);
    }

    #[tokio::test]
    async fn mounted_volume_cannot_be_removed() {
        let backend = InMemoryBackend::with_sample_data();
        let err = backend.remove(ResourceKind::Volume, "pgdata").await.unwrap_err();
        assert!(err.to_string().contains("mounted by container db"));
        backend.remove(ResourceKind::Volume, "scratch").await.unwrap();
    }

    #[tokio::test]
    async fn inserted_records_follow_conflict_rules() {
        let backend = InMemoryBackend::new();
        backend.insert_image(sample_image("myapp:dev", 1, 1_000)).await;
        backend
            .insert_volume(VolumeSummary {
                name: "uploads".to_string(),
                driver: "local".to_string(),
                mountpoint: "/data/uploads".to_string(),
                created: None,
            })
            .await;
        backend
            .insert_container(sample_container(
                "app",
                "myapp:dev",
                ContainerState::Exited,
                &["uploads"],
            ))
            .await;

        let err = backend.remove(ResourceKind::Volume, "uploads").await.unwrap_err();
        assert!(err.to_string().contains("mounted by container app"));
        let err = backend.remove(ResourceKind::Image, "myapp:dev").await.unwrap_err();
        assert!(matches!(err, CoreError::Conflict { .. }));

        backend.remove(ResourceKind::Container, "app").await.unwrap();
        backend.remove(ResourceKind::Volume, "uploads").await.unwrap();
        backend.remove(ResourceKind::Image, "myapp:dev").await.unwrap();
        assert!(backend.list_images().await.unwrap().is_empty());
        assert!(backend.list_volumes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_resources_report_not_found() {
        let backend = InMemoryBackend::new();
        let err = backend.inspect(ResourceKind::Volume, "nope").await.unwrap_err();
        assert_eq!(
            err,
            CoreError::NotFound {
                kind: ResourceKind::Volume,
                id: "nope".to_string()
            }
        );
        assert!(backend.start_container("nope").await.is_err());
    }

    #[tokio::test]
    async fn inspect_returns_serialized_record() {
        let backend = InMemoryBackend::with_sample_data();
        let value = backend.inspect(ResourceKind::Container, "db").await.unwrap();
        assert_eq!(value["Image"], "postgres:16");
        assert_eq!(value["State"], "running");
    }

    #[tokio::test]
    async fn injected_failure_applies_to_every_call() {
        let backend = InMemoryBackend::with_sample_data();
        backend.set_failure(Some("daemon unreachable".to_string())).await;
        let err = backend.list_volumes().await.unwrap_err();
        assert_eq!(err, CoreError::Backend("daemon unreachable".to_string()));

        backend.set_failure(None).await;
        assert!(backend.list_volumes().await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn latency_delays_calls() {
        let backend = InMemoryBackend::new().with_latency(Duration::from_secs(2));
        let started = tokio::time::Instant::now();
        backend.list_images().await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(2));
    }
}
