use crate::prelude::*;
use solana_sdk::instruction::AccountMeta;

use crate::core::{SdkError, SdkResult};

/// Params struct of a program instruction, serialized after its
/// 8-byte anchor discriminator
pub trait InstructionBuilder: BorshSerialize {
    const DISCRIMINATOR: [u8; 8];

    fn build_data(&self) -> SdkResult<Vec<u8>> {
        let body = self
            .try_to_vec()
            .map_err(|e| SdkError::SerializationError(e.to_string()))?;
        Ok([Self::DISCRIMINATOR.as_slice(), body.as_slice()].concat())
    }
}

/// Collects account metas in program order
pub struct DbcInstructionBuilder {
    program_id: Pubkey,
    accounts: Vec<AccountMeta>,
}

impl DbcInstructionBuilder {
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            accounts: Vec::with_capacity(16),
        }
    }

    /// Account that must sign
    pub fn signer(mut self, pubkey: Pubkey, writable: bool) -> Self {
        self.accounts.push(AccountMeta {
            pubkey,
            is_signer: true,
            is_writable: writable,
        });
        self
    }

    pub fn account(mut self, pubkey: Pubkey, writable: bool) -> Self {
        self.accounts.push(AccountMeta {
            pubkey,
            is_signer: false,
            is_writable: writable,
        });
        self
    }

    /// Finish with the serialized params as instruction data
    pub fn build<P: InstructionBuilder>(self, params: &P) -> SdkResult<Instruction> {
        Ok(Instruction {
            program_id: self.program_id,
            accounts: self.accounts,
            data: params.build_data()?,
        })
    }
}

/// Macro for implementing InstructionBuilder for a params struct
#[macro_export]
macro_rules! impl_instruction {
    ($name:ident, $discriminator:expr) => {
        impl $crate::instructions::InstructionBuilder for $name {
            const DISCRIMINATOR: [u8; 8] = $discriminator;
        }
    };
}
