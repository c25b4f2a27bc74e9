use std::fmt;
use tracing::{debug, warn};

/// States of one upload request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Validating,
    UploadingImage,
    UploadingMetadata,
    BuildingTransaction,
    Responding,
    Failed,
}

impl PipelineStage {
    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineStage::Responding | PipelineStage::Failed)
    }

    /// The stage that follows on success
    pub fn next(self) -> Option<PipelineStage> {
        match self {
            PipelineStage::Validating => Some(PipelineStage::UploadingImage),
            PipelineStage::UploadingImage => Some(PipelineStage::UploadingMetadata),
            PipelineStage::UploadingMetadata => Some(PipelineStage::BuildingTransaction),
            PipelineStage::BuildingTransaction => Some(PipelineStage::Responding),
            PipelineStage::Responding | PipelineStage::Failed => None,
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Validating => "validating",
            PipelineStage::UploadingImage => "uploading_image",
            PipelineStage::UploadingMetadata => "uploading_metadata",
            PipelineStage::BuildingTransaction => "building_transaction",
            PipelineStage::Responding => "responding",
            PipelineStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Ordered record of the stages a request passed through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageTrail {
    stages: Vec<PipelineStage>,
}

impl StageTrail {
    pub fn start() -> Self {
        Self {
            stages: vec![PipelineStage::Validating],
        }
    }

    pub fn current(&self) -> PipelineStage {
        self.stages
            .last()
            .copied()
            .unwrap_or(PipelineStage::Validating)
    }

    /// Move to the next stage on success
    pub fn advance(&mut self) {
        if let Some(next) = self.current().next() {
            debug!("Upload pipeline: {} -> {}", self.current(), next);
            self.stages.push(next);
        }
    }

    /// Enter `Failed` from the current stage
    pub fn fail(&mut self) {
        if !self.current().is_terminal() {
            warn!("Upload pipeline failed during {}", self.current());
            self.stages.push(PipelineStage::Failed);
        }
    }

    /// The last non-terminal stage reached
    pub fn last_active(&self) -> PipelineStage {
        self.stages
            .iter()
            .rev()
            .find(|stage| !stage.is_terminal())
            .copied()
            .unwrap_or(PipelineStage::Validating)
    }

    pub fn stages(&self) -> &[PipelineStage] {
        &self.stages
    }
}
