//! Storage implementations for entity collections

pub mod in_memory;

pub use in_memory::InMemoryCollection;
