use solana_sdk::pubkey::Pubkey;

use crate::core::constants::*;

/// PDA builder for every address the pool-creation instruction touches
#[derive(Debug, Clone)]
pub struct PdaBuilder {
    pub program_id: Pubkey,
}

impl PdaBuilder {
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    pub fn pool_authority(&self) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[seeds::POOL_AUTHORITY], &self.program_id)
    }

    pub fn event_authority(&self) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[seeds::EVENT_AUTHORITY], &self.program_id)
    }

    /// Virtual pool address. The larger of the two mints goes first.
    pub fn pool(&self, config: &Pubkey, base_mint: &Pubkey, quote_mint: &Pubkey) -> (Pubkey, u8) {
        let (first, second) = if base_mint > quote_mint {
            (base_mint, quote_mint)
        } else {
            (quote_mint, base_mint)
        };
        Pubkey::find_program_address(
            &[seeds::POOL, config.as_ref(), first.as_ref(), second.as_ref()],
            &self.program_id,
        )
    }

    pub fn token_vault(&self, mint: &Pubkey, pool: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[seeds::TOKEN_VAULT, mint.as_ref(), pool.as_ref()],
            &self.program_id,
        )
    }

    /// Metaplex metadata account for a mint
    pub fn mint_metadata(&self, mint: &Pubkey) -> (Pubkey, u8) {
        let metadata_program = token_metadata_program_id();
        Pubkey::find_program_address(
            &[seeds::METADATA, metadata_program.as_ref(), mint.as_ref()],
            &metadata_program,
        )
    }
}

impl Default for PdaBuilder {
    fn default() -> Self {
        Self::new(program_id())
    }
}
