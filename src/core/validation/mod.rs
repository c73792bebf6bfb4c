//! Request validation
//!
//! Bodies are normalized once by the [`DataEnvelope`] extractor, then an
//! ordered [`Chain`] of steps checks them before the terminal handler runs.

pub mod chain;
pub mod extractor;
pub mod validators;

pub use chain::{Chain, Step};
pub use extractor::{DataBody, DataEnvelope};
pub use validators::{body_has, exists, id_matches, is_truthy, positive_integer, truthy_field};
