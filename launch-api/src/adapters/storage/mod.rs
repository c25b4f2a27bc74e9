//! Object storage adapters

pub mod memory;
pub mod r2;
pub mod sigv4;

pub use memory::{MemoryObjectStore, StoredObject};
pub use r2::R2ObjectStore;
pub use sigv4::SigV4Signer;
