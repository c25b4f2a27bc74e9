//! The pool-creation request pipeline

pub mod stage;
pub mod upload;

pub use stage::{PipelineStage, StageTrail};
pub use upload::{PipelineOutcome, PipelineSettings, UploadPipeline, METADATA_CONTENT_TYPE};
