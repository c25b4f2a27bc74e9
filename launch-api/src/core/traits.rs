//! Core trait abstractions (Ports in Hexagonal Architecture)

use async_trait::async_trait;
use solana_sdk::hash::Hash;

use super::error::{ChainResult, StorageResult};
use super::types::CreatePoolParams;

/// Object storage port - a single overwriting `put`
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `key`, replacing any existing object
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> StorageResult<()>;
}

/// An SDK-built transaction that still lacks signatures
pub trait UnsignedTransaction: Send + Sync + std::fmt::Debug {
    /// Set the fee payer from a base58 wallet address
    fn set_fee_payer(&mut self, wallet: &str) -> ChainResult<()>;

    fn set_recent_blockhash(&mut self, blockhash: Hash);

    fn fee_payer(&self) -> Option<String>;

    fn recent_blockhash(&self) -> Option<Hash>;

    /// Wire bytes with empty signature slots; signing happens client-side
    fn serialize_unsigned(&self) -> ChainResult<Vec<u8>>;
}

/// Chain port - the pool-creation SDK and the blockhash source
#[async_trait]
pub trait PoolTransactionBuilder: Send + Sync {
    /// Build the unsigned pool-creation transaction
    async fn create_pool(
        &self,
        params: &CreatePoolParams,
    ) -> ChainResult<Box<dyn UnsignedTransaction>>;

    /// Fetch the latest network blockhash
    async fn latest_blockhash(&self) -> ChainResult<Hash>;
}
