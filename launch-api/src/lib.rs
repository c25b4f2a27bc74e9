//! Token launch API
//!
//! Accepts a token launch request, stores the token image and metadata in
//! object storage, and returns an unsigned bonding-curve pool transaction
//! for the creator to sign. Also hosts the explore feed cache re-sort.

pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod explore;
pub mod pipeline;

// Re-export commonly used types
pub use config::LaunchConfig;
pub use core::{
    ObjectStore, PoolTransactionBuilder, UnsignedTransaction, UploadError, UploadRequest,
    UploadResponse,
};
pub use pipeline::{PipelineSettings, UploadPipeline};
