//! docui Core Library
//!
//! Provides the backend side of the docui terminal dashboard:
//! - Resource records (images, containers, volumes)
//! - The `ContainerBackend` contract the UI calls from its worker
//! - An in-memory backend used for demos and tests
//!
//! The library knows nothing about terminals. The UI crate owns panels,
//! focus and overlays and only talks to this crate through `ContainerBackend`.

pub mod error;
pub mod in_memory;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use in_memory::InMemoryBackend;
pub use traits::ContainerBackend;
pub use types::{
    ContainerState, ContainerSummary, ImageSummary, Listing, ResourceKind, VolumeSummary,
};
