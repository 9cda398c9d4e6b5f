//! Storage module
//!
//! In-memory ownership of events and RSVPs, plus the demo rows a fresh
//! store can be seeded with.

pub mod memory;
pub mod seed;

pub use memory::EventStore;
