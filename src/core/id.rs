//! Identifier generation

use uuid::Uuid;

/// Generate a fresh entity id.
///
/// Ids are 128 random bits rendered as 32 lowercase hex characters.
pub fn next_id() -> String {
    Uuid::new_v4().simple().to_string()
}
