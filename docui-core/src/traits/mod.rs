//! Backend abstraction trait definition

mod container_backend;

pub use container_backend::ContainerBackend;
