//! Centralized error types for the launch API

use thiserror::Error;

/// Object-storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage request failed: {0}")]
    Request(String),

    #[error("Storage returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid object key: {0}")]
    InvalidKey(String),

    #[error("Request signing failed: {0}")]
    Signing(String),
}

/// Errors raised while building the pool transaction
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("Invalid {field} address: {value}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Pool config account {0} not found")]
    ConfigNotFound(String),

    #[error(transparent)]
    Sdk(#[from] launch_sdk::SdkError),

    #[error("Transaction fee payer required")]
    MissingFeePayer,

    #[error("Transaction recentBlockhash required")]
    MissingBlockhash,

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Configuration errors, raised once at startup
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Load(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ConfigError {
    fn from(err: validator::ValidationErrors) -> Self {
        ConfigError::Invalid(err.to_string())
    }
}

/// Terminal failure of an upload request.
///
/// Every variant is a final HTTP answer; nothing is retried.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Missing required fields in request")]
    MissingFields,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Failed to upload image")]
    ImageUpload(#[source] ImageUploadFailure),

    #[error("Failed to upload metadata")]
    MetadataUpload(#[source] StorageError),

    #[error("{0}")]
    Chain(#[from] ChainError),

    #[error("{0}")]
    Internal(String),
}

/// Why the image step failed
#[derive(Error, Debug)]
pub enum ImageUploadFailure {
    #[error("token logo is not a base64 data URI")]
    MalformedDataUri,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Broad failure category used for logging and status mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    BadRequest,
    UpstreamStorageFailure,
    UpstreamChainFailure,
    InternalUnknown,
}

impl UploadError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            UploadError::MethodNotAllowed
            | UploadError::MissingFields
            | UploadError::InvalidBody(_)
            | UploadError::ImageUpload(ImageUploadFailure::MalformedDataUri) => {
                ErrorCategory::BadRequest
            }
            UploadError::ImageUpload(ImageUploadFailure::Storage(_))
            | UploadError::MetadataUpload(_) => ErrorCategory::UpstreamStorageFailure,
            UploadError::Chain(_) => ErrorCategory::UpstreamChainFailure,
            UploadError::Internal(_) => ErrorCategory::InternalUnknown,
        }
    }

    /// HTTP status code for this failure
    pub fn status_code(&self) -> u16 {
        match self {
            UploadError::MethodNotAllowed => 405,
            UploadError::MissingFields
            | UploadError::InvalidBody(_)
            | UploadError::ImageUpload(_)
            | UploadError::MetadataUpload(_) => 400,
            UploadError::Chain(_) | UploadError::Internal(_) => 500,
        }
    }

    /// Message returned to the caller in the `error` field
    pub fn public_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            message
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;
pub type ChainResult<T> = Result<T, ChainError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
