//! Container engine abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{ContainerSummary, ImageSummary, Listing, ResourceKind, VolumeSummary};

/// Container Backend Trait
///
/// The UI never calls this from a key handler. Calls are issued by the
/// worker on behalf of panel refreshes and overlay actions.
///
/// Implementations:
/// - `InMemoryBackend` (sample data, demos and tests)
#[async_trait]
pub trait ContainerBackend: Send + Sync {
    /// List all images
    async fn list_images(&self) -> CoreResult<Vec<ImageSummary>>;

    /// List all containers, running or not
    async fn list_containers(&self) -> CoreResult<Vec<ContainerSummary>>;

    /// List all volumes
    async fn list_volumes(&self) -> CoreResult<Vec<VolumeSummary>>;

    /// Full description of a single resource
    ///
    /// # Arguments
    /// * `kind` - Resource kind
    /// * `id` - Resource ID (volume name for volumes)
    async fn inspect(&self, kind: ResourceKind, id: &str) -> CoreResult<serde_json::Value>;

    /// Remove a resource
    ///
    /// # Arguments
    /// * `kind` - Resource kind
    /// * `id` - Resource ID (volume name for volumes)
    async fn remove(&self, kind: ResourceKind, id: &str) -> CoreResult<()>;

    /// Start a stopped container
    async fn start_container(&self, id: &str) -> CoreResult<()>;

    /// Stop a running container
    async fn stop_container(&self, id: &str) -> CoreResult<()>;

    /// List one resource kind
    async fn list(&self, kind: ResourceKind) -> CoreResult<Listing> {
        Ok(match kind {
            ResourceKind::Image => Listing::Images(self.list_images().await?),
            ResourceKind::Container => Listing::Containers(self.list_containers().await?),
            ResourceKind::Volume => Listing::Volumes(self.list_volumes().await?),
        })
    }
}
