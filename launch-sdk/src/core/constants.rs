use solana_sdk::pubkey::Pubkey;

/// Program ID of the dynamic bonding curve
pub const DBC_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("dbcij3LWUppWqq96dh6gJWwBifmcGfLSB5D4DuSMaqN");

/// Get the program ID as a Pubkey
pub fn program_id() -> Pubkey {
    DBC_PROGRAM_ID
}

/// Metaplex token-metadata program
pub fn token_metadata_program_id() -> Pubkey {
    Pubkey::new_from_array(mpl_token_metadata::ID.to_bytes())
}

/// Seeds for common PDAs
pub mod seeds {
    pub const POOL: &[u8] = b"pool";
    pub const POOL_AUTHORITY: &[u8] = b"pool_authority";
    pub const TOKEN_VAULT: &[u8] = b"token_vault";
    pub const EVENT_AUTHORITY: &[u8] = b"__event_authority";
    pub const METADATA: &[u8] = b"metadata";
}

/// Metaplex limits enforced on-chain for token metadata
pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_URI_LENGTH: usize = 200;
