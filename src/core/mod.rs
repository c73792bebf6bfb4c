//! Core module containing fundamental traits and types for the API

pub mod context;
pub mod entity;
pub mod error;
pub mod id;
pub mod store;
pub mod validation;

pub use context::{Payload, RequestContext};
pub use entity::Entity;
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use id::next_id;
pub use store::CollectionStore;
pub use validation::{Chain, DataBody, DataEnvelope};
