//! Type definitions

mod container;
mod image;
mod resource;
mod volume;

pub use container::{ContainerState, ContainerSummary};
pub use image::ImageSummary;
pub use resource::{Listing, ResourceKind};
pub use volume::VolumeSummary;
