//! Read-only view of the on-chain pool configuration account

use solana_sdk::pubkey::Pubkey;

use crate::core::{SdkError, SdkResult};

/// Anchor account discriminator for `PoolConfig`
pub const POOL_CONFIG_DISCRIMINATOR: [u8; 8] = [26, 108, 14, 123, 116, 230, 129, 43];

const QUOTE_MINT_OFFSET: usize = 8;
const FEE_CLAIMER_OFFSET: usize = QUOTE_MINT_OFFSET + 32;
const LEFTOVER_RECEIVER_OFFSET: usize = FEE_CLAIMER_OFFSET + 32;
const MIN_LEN: usize = LEFTOVER_RECEIVER_OFFSET + 32;

/// The leading fields of a pool config, which is all pool creation needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfigAccount {
    pub quote_mint: Pubkey,
    pub fee_claimer: Pubkey,
    pub leftover_receiver: Pubkey,
}

impl PoolConfigAccount {
    /// Decode from raw account data
    pub fn try_from_bytes(data: &[u8]) -> SdkResult<Self> {
        if data.len() < MIN_LEN {
            return Err(SdkError::InvalidAccountData {
                account: "PoolConfig".to_string(),
                reason: format!("expected at least {} bytes, got {}", MIN_LEN, data.len()),
            });
        }
        if data[..8] != POOL_CONFIG_DISCRIMINATOR {
            return Err(SdkError::InvalidAccountData {
                account: "PoolConfig".to_string(),
                reason: "discriminator mismatch".to_string(),
            });
        }

        Ok(Self {
            quote_mint: read_pubkey(data, QUOTE_MINT_OFFSET),
            fee_claimer: read_pubkey(data, FEE_CLAIMER_OFFSET),
            leftover_receiver: read_pubkey(data, LEFTOVER_RECEIVER_OFFSET),
        })
    }

    /// Decode and check the owning program
    pub fn try_from_account(
        address: &Pubkey,
        owner: &Pubkey,
        program_id: &Pubkey,
        data: &[u8],
    ) -> SdkResult<Self> {
        if owner != program_id {
            return Err(SdkError::WrongOwner {
                address: address.to_string(),
                owner: owner.to_string(),
                expected: program_id.to_string(),
            });
        }
        Self::try_from_bytes(data)
    }
}

fn read_pubkey(data: &[u8], offset: usize) -> Pubkey {
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&data[offset..offset + 32]);
    Pubkey::new_from_array(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(config: &PoolConfigAccount) -> Vec<u8> {
        let mut data = POOL_CONFIG_DISCRIMINATOR.to_vec();
        data.extend_from_slice(config.quote_mint.as_ref());
        data.extend_from_slice(config.fee_claimer.as_ref());
        data.extend_from_slice(config.leftover_receiver.as_ref());
        // trailing fee/curve fields are ignored
        data.extend_from_slice(&[0u8; 64]);
        data
    }

    #[test]
    fn test_decode_leading_fields() {
        let config = PoolConfigAccount {
            quote_mint: Pubkey::new_unique(),
            fee_claimer: Pubkey::new_unique(),
            leftover_receiver: Pubkey::new_unique(),
        };

        assert_eq!(PoolConfigAccount::try_from_bytes(&encode(&config)).unwrap(), config);
    }

    #[test]
    fn test_rejects_foreign_discriminator() {
        let mut data = vec![0u8; MIN_LEN];
        data[0] = 1;

        assert!(PoolConfigAccount::try_from_bytes(&data).is_err());
    }

    #[test]
    fn test_rejects_wrong_owner() {
        let data = encode(&PoolConfigAccount {
            quote_mint: Pubkey::new_unique(),
            fee_claimer: Pubkey::new_unique(),
            leftover_receiver: Pubkey::new_unique(),
        });

        let result = PoolConfigAccount::try_from_account(
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            &crate::core::program_id(),
            &data,
        );

        assert!(matches!(result, Err(SdkError::WrongOwner { .. })));
    }
}
