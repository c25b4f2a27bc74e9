//! Pool-creation transactions for the dynamic bonding curve

use super::rpc_client::LightRpcClient;
use crate::core::{
    ChainError, ChainResult, CreatePoolParams, PoolTransactionBuilder, UnsignedTransaction,
};
use async_trait::async_trait;
use launch_sdk::{
    CreatePoolAccounts, InitializePoolParameters, PoolConfigAccount, PoolInstructionBuilder,
};
use solana_sdk::{
    hash::Hash, instruction::Instruction, message::Message, pubkey::Pubkey,
    transaction::Transaction,
};
use std::str::FromStr;
use tracing::{debug, info};

/// An unsigned transaction that compiles its message on serialization,
/// so fee payer and blockhash can be filled in after construction.
#[derive(Debug, Clone)]
pub struct PoolTransaction {
    instructions: Vec<Instruction>,
    fee_payer: Option<Pubkey>,
    recent_blockhash: Option<Hash>,
}

impl PoolTransaction {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self {
            instructions,
            fee_payer: None,
            recent_blockhash: None,
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Compile into a legacy transaction with empty signature slots
    pub fn compile(&self) -> ChainResult<Transaction> {
        let fee_payer = self.fee_payer.ok_or(ChainError::MissingFeePayer)?;
        let blockhash = self.recent_blockhash.ok_or(ChainError::MissingBlockhash)?;
        let message = Message::new_with_blockhash(&self.instructions, Some(&fee_payer), &blockhash);
        Ok(Transaction::new_unsigned(message))
    }
}

impl UnsignedTransaction for PoolTransaction {
    fn set_fee_payer(&mut self, wallet: &str) -> ChainResult<()> {
        self.fee_payer = Some(parse_address("fee payer", wallet)?);
        Ok(())
    }

    fn set_recent_blockhash(&mut self, blockhash: Hash) {
        self.recent_blockhash = Some(blockhash);
    }

    fn fee_payer(&self) -> Option<String> {
        self.fee_payer.map(|key| key.to_string())
    }

    fn recent_blockhash(&self) -> Option<Hash> {
        self.recent_blockhash
    }

    fn serialize_unsigned(&self) -> ChainResult<Vec<u8>> {
        let transaction = self.compile()?;
        bincode::serialize(&transaction).map_err(|e| ChainError::Serialization(e.to_string()))
    }
}

/// Builds `initialize_virtual_pool_with_spl_token` transactions
pub struct DbcPoolBuilder {
    rpc: LightRpcClient,
    program_id: Pubkey,
    instructions: PoolInstructionBuilder,
}

impl DbcPoolBuilder {
    pub fn new(rpc: LightRpcClient) -> Self {
        Self::with_program_id(rpc, launch_sdk::program_id())
    }

    pub fn with_program_id(rpc: LightRpcClient, program_id: Pubkey) -> Self {
        Self {
            rpc,
            program_id,
            instructions: PoolInstructionBuilder::new(program_id),
        }
    }

    /// Fetch and decode the pool configuration account
    pub async fn fetch_pool_config(&self, config: &Pubkey) -> ChainResult<PoolConfigAccount> {
        let account = self
            .rpc
            .get_account(config)
            .await?
            .ok_or_else(|| ChainError::ConfigNotFound(config.to_string()))?;

        Ok(PoolConfigAccount::try_from_account(
            config,
            &account.owner,
            &self.program_id,
            &account.data,
        )?)
    }
}

#[async_trait]
impl PoolTransactionBuilder for DbcPoolBuilder {
    async fn create_pool(
        &self,
        params: &CreatePoolParams,
    ) -> ChainResult<Box<dyn UnsignedTransaction>> {
        let config = parse_address("config", &params.config)?;
        let base_mint = parse_address("mint", &params.base_mint)?;
        let payer = parse_address("payer", &params.payer)?;
        let creator = parse_address("pool creator", &params.pool_creator)?;

        let pool_config = self.fetch_pool_config(&config).await?;
        debug!("Pool config {} quotes in {}", config, pool_config.quote_mint);

        let accounts = CreatePoolAccounts {
            config,
            base_mint,
            quote_mint: pool_config.quote_mint,
            creator,
            payer,
        };
        let instruction = self.instructions.initialize_virtual_pool_with_spl_token(
            accounts,
            InitializePoolParameters {
                name: params.name.clone(),
                symbol: params.symbol.clone(),
                uri: params.uri.clone(),
            },
        )?;

        info!(
            "Built pool creation for mint {} (pool {})",
            base_mint,
            self.instructions.pool_address(&accounts)
        );

        Ok(Box::new(PoolTransaction::new(vec![instruction])))
    }

    async fn latest_blockhash(&self) -> ChainResult<Hash> {
        self.rpc.get_latest_blockhash().await
    }
}

fn parse_address(field: &'static str, value: &str) -> ChainResult<Pubkey> {
    Pubkey::from_str(value).map_err(|_| ChainError::InvalidAddress {
        field,
        value: value.to_string(),
    })
}
