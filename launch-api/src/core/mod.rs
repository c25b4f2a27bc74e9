//! Core types and ports shared by the pipeline, adapters and API

pub mod error;
pub mod traits;
pub mod types;

pub use error::*;
pub use traits::*;
pub use types::*;
