//! Server module for building the GrubDash HTTP server
//!
//! `ServerBuilder` assembles a `ServerHost` (config, stores, registry) and
//! exposes it over REST.

pub mod builder;
pub mod entity_registry;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use exposure::RestExposure;
pub use host::ServerHost;
