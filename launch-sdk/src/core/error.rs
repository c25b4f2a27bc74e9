use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid account data for {account}: {reason}")]
    InvalidAccountData { account: String, reason: String },

    #[error("Account {address} is owned by {owner}, expected {expected}")]
    WrongOwner {
        address: String,
        owner: String,
        expected: String,
    },
}

pub type SdkResult<T> = Result<T, SdkError>;
