//! 程序地址常量

use solana_sdk::{instruction::AccountMeta, pubkey, pubkey::Pubkey};

/// SPL Token Program
pub const TOKEN_PROGRAM: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// Associated Token Program
pub const ASSOCIATED_TOKEN_PROGRAM: Pubkey =
    pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

pub const SYSTEM_PROGRAM: Pubkey = pubkey!("11111111111111111111111111111111");

// META

pub const TOKEN_PROGRAM_META: AccountMeta =
    AccountMeta { pubkey: TOKEN_PROGRAM, is_signer: false, is_writable: false };

pub const ASSOCIATED_TOKEN_PROGRAM_META: AccountMeta =
    AccountMeta { pubkey: ASSOCIATED_TOKEN_PROGRAM, is_signer: false, is_writable: false };

pub const SYSTEM_PROGRAM_META: AccountMeta =
    AccountMeta { pubkey: SYSTEM_PROGRAM, is_signer: false, is_writable: false };
