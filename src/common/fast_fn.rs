//! PDA / ATA 地址缓存
//!
//! Derivations are pure, so memoizing them never changes a result. The caches
//! only save the repeated `find_program_address` bump search.

use crate::constants::ASSOCIATED_TOKEN_PROGRAM;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use solana_sdk::pubkey::Pubkey;

const MAX_PDA_CACHE_SIZE: usize = 10_000;
const MAX_ATA_CACHE_SIZE: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PdaCacheKey {
    /// Pool PDA keyed by program id
    LiquidityPool(Pubkey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct AtaCacheKey {
    owner: Pubkey,
    mint: Pubkey,
    token_program: Pubkey,
}

static PDA_CACHE: Lazy<DashMap<PdaCacheKey, Pubkey>> =
    Lazy::new(|| DashMap::with_capacity(MAX_PDA_CACHE_SIZE));

static ATA_CACHE: Lazy<DashMap<AtaCacheKey, Pubkey>> =
    Lazy::new(|| DashMap::with_capacity(MAX_ATA_CACHE_SIZE));

/// Returns the cached PDA for `key`, computing and storing it on a miss.
pub fn get_cached_pda<F>(key: PdaCacheKey, compute: F) -> Option<Pubkey>
where
    F: FnOnce() -> Option<Pubkey>,
{
    if let Some(pda) = PDA_CACHE.get(&key) {
        return Some(*pda);
    }
    let pda = compute()?;
    if PDA_CACHE.len() < MAX_PDA_CACHE_SIZE {
        PDA_CACHE.insert(key, pda);
    }
    Some(pda)
}

/// Canonical associated token account address, memoized.
///
/// Seeds are `[owner, token_program, mint]` under the associated token program.
pub fn get_associated_token_address_with_program_id_fast(
    owner: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Pubkey {
    let key = AtaCacheKey { owner: *owner, mint: *mint, token_program: *token_program };
    if let Some(ata) = ATA_CACHE.get(&key) {
        return *ata;
    }
    let (ata, _) = Pubkey::find_program_address(
        &[owner.as_ref(), token_program.as_ref(), mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM,
    );
    if ATA_CACHE.len() < MAX_ATA_CACHE_SIZE {
        ATA_CACHE.insert(key, ata);
    }
    ata
}

/// 清除所有地址缓存
pub fn clear_pda_cache() {
    PDA_CACHE.clear();
    ATA_CACHE.clear();
}

pub fn pda_cache_len() -> usize {
    PDA_CACHE.len() + ATA_CACHE.len()
}
