use crate::{
    common::{
        SwapRpcClient,
        asset::Asset,
        error::{SwapError, SwapResult},
        fast_fn::{PdaCacheKey, get_associated_token_address_with_program_id_fast, get_cached_pda},
    },
    constants::TOKEN_PROGRAM,
};
use anyhow::anyhow;
use sha2::{Digest, Sha256};
use solana_sdk::pubkey::Pubkey;
use std::collections::HashMap;
use once_cell::sync::Lazy;

/// Constants used as seeds for deriving PDAs (Program Derived Addresses)
pub mod seeds {
    /// Seed for the liquidity pool PDA
    pub const LIQUIDITY_POOL_SEED: &[u8] = b"liquidity_pool";
}

/// Anchor 指令 discriminator: sha256("global:swap")[..8]
pub static SWAP_DISCRIMINATOR: Lazy<[u8; 8]> = Lazy::new(|| sighash("global", "swap"));

pub fn sighash(namespace: &str, name: &str) -> [u8; 8] {
    let preimage = format!("{}:{}", namespace, name);
    let digest = Sha256::digest(preimage.as_bytes());
    let mut out = [0u8; 8];
    out.copy_from_slice(&digest[..8]);
    out
}

pub fn get_pool_pda(program_id: &Pubkey) -> Option<Pubkey> {
    get_cached_pda(PdaCacheKey::LiquidityPool(*program_id), || {
        let seeds: &[&[u8]; 1] = &[seeds::LIQUIDITY_POOL_SEED];
        let pda: Option<(Pubkey, u8)> = Pubkey::try_find_program_address(seeds, program_id);
        pda.map(|pubkey| pubkey.0)
    })
}

/// Canonical token account of `owner` for `mint`.
///
/// Program-owned addresses (PDAs) are off the ed25519 curve; they are only
/// accepted as owner when `allow_owner_off_curve` is set.
pub fn get_associated_token_address(
    mint: &Pubkey,
    owner: &Pubkey,
    allow_owner_off_curve: bool,
) -> SwapResult<Pubkey> {
    if !allow_owner_off_curve && !owner.is_on_curve() {
        return Err(SwapError::OwnerOffCurve(*owner));
    }
    Ok(get_associated_token_address_with_program_id_fast(owner, mint, &TOKEN_PROGRAM))
}

/// The token accounts a swap touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapAccounts {
    pub pool: Pubkey,
    pub receive_mint: Pubkey,
    pub pool_receive_token_account: Pubkey,
    pub payer_receive_token_account: Pubkey,
    pub pay_mint: Pubkey,
    pub pool_pay_token_account: Pubkey,
    pub payer_pay_token_account: Pubkey,
    pub payer: Pubkey,
}

impl SwapAccounts {
    pub fn derive(
        program_id: &Pubkey,
        payer: &Pubkey,
        pay_mint: &Pubkey,
        receive_mint: &Pubkey,
    ) -> SwapResult<Self> {
        if pay_mint == receive_mint {
            return Err(SwapError::InvalidAssetPair);
        }
        let pool = get_pool_pda(program_id).ok_or(SwapError::PoolAddressNotFound(*program_id))?;
        Ok(Self {
            pool,
            receive_mint: *receive_mint,
            pool_receive_token_account: get_associated_token_address(receive_mint, &pool, true)?,
            payer_receive_token_account: get_associated_token_address(receive_mint, payer, true)?,
            pay_mint: *pay_mint,
            pool_pay_token_account: get_associated_token_address(pay_mint, &pool, true)?,
            payer_pay_token_account: get_associated_token_address(pay_mint, payer, false)?,
            payer: *payer,
        })
    }
}

/// Reserve snapshot keyed by mint, in smallest units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolReserves {
    reserves: HashMap<Pubkey, u64>,
}

impl PoolReserves {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, mint: Pubkey, amount: u64) {
        self.reserves.insert(mint, amount);
    }

    /// Unknown mints read as an empty reserve.
    pub fn get(&self, mint: &Pubkey) -> u64 {
        self.reserves.get(mint).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.reserves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reserves.is_empty()
    }
}

impl FromIterator<(Pubkey, u64)> for PoolReserves {
    fn from_iter<I: IntoIterator<Item = (Pubkey, u64)>>(iter: I) -> Self {
        Self { reserves: iter.into_iter().collect() }
    }
}

/// 并发读取所有资产在池中的储备
pub async fn fetch_pool_reserves<R: SwapRpcClient + ?Sized>(
    rpc: &R,
    assets: &[Asset],
) -> Result<PoolReserves, anyhow::Error> {
    let balances = futures::future::join_all(
        assets.iter().map(|asset| rpc.get_token_account_balance(&asset.pool_token_account)),
    )
    .await;

    let mut reserves = PoolReserves::new();
    for (asset, balance) in assets.iter().zip(balances) {
        let amount = balance.map_err(|e| {
            anyhow!("Failed to get {} reserve ({}): {}", asset.symbol, asset.pool_token_account, e)
        })?;
        reserves.set(asset.mint, amount);
    }
    Ok(reserves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::{Keypair, Signer};

    #[test]
    fn test_swap_discriminator() {
        assert_eq!(*SWAP_DISCRIMINATOR, [248, 198, 158, 145, 225, 117, 135, 200]);
    }

    #[test]
    fn test_pool_pda_matches_manual_derivation() {
        let program_id = Pubkey::new_unique();
        let (expected, _) = Pubkey::find_program_address(&[b"liquidity_pool"], &program_id);
        assert_eq!(get_pool_pda(&program_id), Some(expected));
        assert_eq!(get_pool_pda(&program_id), Some(expected));
    }

    #[test]
    fn test_ata_off_curve_owner_rules() {
        let program_id = Pubkey::new_unique();
        let pool = get_pool_pda(&program_id).unwrap();
        let mint = Pubkey::new_unique();

        assert!(get_associated_token_address(&mint, &pool, true).is_ok());
        assert!(matches!(
            get_associated_token_address(&mint, &pool, false),
            Err(SwapError::OwnerOffCurve(owner)) if owner == pool
        ));

        let wallet = Keypair::new().pubkey();
        assert_eq!(
            get_associated_token_address(&mint, &wallet, false).unwrap(),
            get_associated_token_address(&mint, &wallet, true).unwrap()
        );
    }

    #[test]
    fn test_swap_accounts_reject_same_mint() {
        let mint = Pubkey::new_unique();
        let payer = Keypair::new().pubkey();
        assert!(matches!(
            SwapAccounts::derive(&Pubkey::new_unique(), &payer, &mint, &mint),
            Err(SwapError::InvalidAssetPair)
        ));
    }
}
