//! Pool creation instruction tests against a full legacy message

use anyhow::Result;
use launch_sdk::{
    CreatePoolAccounts, InitializePoolParameters, PdaBuilder, PoolInstructionBuilder,
};
use solana_sdk::{hash::Hash, message::Message, pubkey::Pubkey, transaction::Transaction};

#[test]
fn test_message_marks_wallet_as_fee_payer() -> Result<()> {
    let wallet = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let accounts = CreatePoolAccounts {
        config: Pubkey::new_unique(),
        base_mint: mint,
        quote_mint: spl_token::native_mint::id(),
        creator: wallet,
        payer: wallet,
    };
    let ix = PoolInstructionBuilder::default().initialize_virtual_pool_with_spl_token(
        accounts,
        InitializePoolParameters {
            name: "Foo".to_string(),
            symbol: "FOO".to_string(),
            uri: "https://bucket.r2.dev/metadata/x.json".to_string(),
        },
    )?;

    let message = Message::new_with_blockhash(&[ix], Some(&wallet), &Hash::new_unique());
    let tx = Transaction::new_unsigned(message);

    // wallet and mint both sign; creator/payer collapse into one key
    assert_eq!(tx.message.header.num_required_signatures, 2);
    assert_eq!(tx.message.account_keys[0], wallet);
    assert!(tx.message.account_keys.contains(&mint));
    assert_eq!(tx.signatures.len(), 2);
    Ok(())
}

#[test]
fn test_pool_pda_matches_builder() {
    let pda = PdaBuilder::default();
    let accounts = CreatePoolAccounts {
        config: Pubkey::new_unique(),
        base_mint: Pubkey::new_unique(),
        quote_mint: Pubkey::new_unique(),
        creator: Pubkey::new_unique(),
        payer: Pubkey::new_unique(),
    };

    assert_eq!(
        PoolInstructionBuilder::default().pool_address(&accounts),
        pda.pool(&accounts.config, &accounts.base_mint, &accounts.quote_mint).0
    );
}
