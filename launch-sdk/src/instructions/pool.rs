use crate::prelude::*;

use crate::{
    core::{SdkError, SdkResult, MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH},
    impl_instruction,
    instructions::DbcInstructionBuilder,
    protocol::PdaBuilder,
};

const INITIALIZE_VIRTUAL_POOL_WITH_SPL_TOKEN_DISCRIMINATOR: [u8; 8] =
    [140, 85, 215, 176, 102, 54, 104, 79];

/// Token metadata written by the program when the pool is created
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct InitializePoolParameters {
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

impl_instruction!(
    InitializePoolParameters,
    INITIALIZE_VIRTUAL_POOL_WITH_SPL_TOKEN_DISCRIMINATOR
);

impl InitializePoolParameters {
    /// Check the Metaplex length limits before the program rejects them
    pub fn validate(&self) -> SdkResult<()> {
        if self.name.is_empty() || self.name.len() > MAX_NAME_LENGTH {
            return Err(SdkError::InvalidParameters(format!(
                "name must be 1-{} bytes, got {}",
                MAX_NAME_LENGTH,
                self.name.len()
            )));
        }
        if self.symbol.is_empty() || self.symbol.len() > MAX_SYMBOL_LENGTH {
            return Err(SdkError::InvalidParameters(format!(
                "symbol must be 1-{} bytes, got {}",
                MAX_SYMBOL_LENGTH,
                self.symbol.len()
            )));
        }
        if self.uri.len() > MAX_URI_LENGTH {
            return Err(SdkError::InvalidParameters(format!(
                "uri must be at most {} bytes, got {}",
                MAX_URI_LENGTH,
                self.uri.len()
            )));
        }
        Ok(())
    }
}

/// Addresses supplied by the caller for pool creation
#[derive(Debug, Clone, Copy)]
pub struct CreatePoolAccounts {
    pub config: Pubkey,
    pub base_mint: Pubkey,
    pub quote_mint: Pubkey,
    pub creator: Pubkey,
    pub payer: Pubkey,
}

/// Pool instruction builder
pub struct PoolInstructionBuilder {
    pda: PdaBuilder,
}

impl PoolInstructionBuilder {
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            pda: PdaBuilder::new(program_id),
        }
    }

    /// Virtual pool address for a config/base/quote triple
    pub fn pool_address(&self, accounts: &CreatePoolAccounts) -> Pubkey {
        self.pda
            .pool(&accounts.config, &accounts.base_mint, &accounts.quote_mint)
            .0
    }

    /// Build `initialize_virtual_pool_with_spl_token`.
    ///
    /// The base mint must sign: the mint account is created by this
    /// instruction, so the holder of the mint keypair co-signs client-side.
    pub fn initialize_virtual_pool_with_spl_token(
        &self,
        accounts: CreatePoolAccounts,
        params: InitializePoolParameters,
    ) -> SdkResult<Instruction> {
        params.validate()?;

        let (pool_authority, _) = self.pda.pool_authority();
        let pool = self.pool_address(&accounts);
        let (base_vault, _) = self.pda.token_vault(&accounts.base_mint, &pool);
        let (quote_vault, _) = self.pda.token_vault(&accounts.quote_mint, &pool);
        let (mint_metadata, _) = self.pda.mint_metadata(&accounts.base_mint);
        let (event_authority, _) = self.pda.event_authority();

        DbcInstructionBuilder::new(self.pda.program_id)
            .account(accounts.config, false)
            .account(pool_authority, false)
            .signer(accounts.creator, false)
            .signer(accounts.base_mint, true) // created by the program
            .account(accounts.quote_mint, false)
            .account(pool, true)
            .account(base_vault, true)
            .account(quote_vault, true)
            .account(mint_metadata, true)
            .account(crate::core::token_metadata_program_id(), false)
            .signer(accounts.payer, true)
            .account(spl_token::id(), false) // quote token program
            .account(spl_token::id(), false)
            .account(solana_sdk::system_program::id(), false)
            .account(event_authority, false)
            .account(self.pda.program_id, false)
            .build(&params)
    }
}

impl Default for PoolInstructionBuilder {
    fn default() -> Self {
        Self::new(crate::core::program_id())
    }
}
