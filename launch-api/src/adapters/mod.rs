//! Adapters layer - Infrastructure implementations
//!
//! Implementations of the port traits defined in the core layer, connecting
//! the upload pipeline to object storage and the Solana network.

pub mod solana;
pub mod storage;

pub use solana::{DbcPoolBuilder, LightRpcClient, PoolTransaction};
pub use storage::{MemoryObjectStore, R2ObjectStore};
