//! Swap 会话状态
//!
//! 持有 (from, to, input_amount, quote) 以及池储备快照。所有修改都会立即用
//! 当前储备重新报价，报价失败时缓存的报价归零。

use crate::{
    common::{
        asset::{Asset, AssetCatalog},
        error::{SwapError, SwapResult},
    },
    instruction::utils::liquidity_pool::PoolReserves,
    utils::{
        calc::constant_product::{compute_output, flip},
        quote::SwapQuote,
        token::parse_ui_amount,
    },
};
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SwapSession {
    catalog: AssetCatalog,
    from: Asset,
    to: Asset,
    /// Smallest units of `from`
    input_amount: u64,
    quote: SwapQuote,
    reserves: PoolReserves,
}

impl SwapSession {
    /// Starts with the first two catalog assets selected.
    pub fn new(catalog: AssetCatalog) -> Self {
        let from = catalog.assets()[0].clone();
        let to = catalog.assets()[1].clone();
        let quote = SwapQuote::zero(to.decimals);
        Self { catalog, from, to, input_amount: 0, quote, reserves: PoolReserves::new() }
    }

    pub fn from_assets(assets: Vec<Asset>) -> SwapResult<Self> {
        Ok(Self::new(AssetCatalog::new(assets)?))
    }

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    pub fn from(&self) -> &Asset {
        &self.from
    }

    pub fn to(&self) -> &Asset {
        &self.to
    }

    pub fn input_amount(&self) -> u64 {
        self.input_amount
    }

    /// Last computed quote; zero when the current state cannot be quoted.
    pub fn quote(&self) -> SwapQuote {
        self.quote
    }

    pub fn reserves(&self) -> &PoolReserves {
        &self.reserves
    }

    /// Computes the quote for the current state without touching the cache.
    pub fn try_quote(&self) -> SwapResult<SwapQuote> {
        compute_output(
            self.reserves.get(&self.from.mint),
            self.reserves.get(&self.to.mint),
            self.input_amount,
            self.to.decimals,
        )
    }

    /// Assets selectable as the pay side (everything but the receive asset).
    pub fn from_choices(&self) -> Vec<&Asset> {
        self.catalog.assets().iter().filter(|a| a.mint != self.to.mint).collect()
    }

    /// Assets selectable as the receive side (everything but the pay asset).
    pub fn to_choices(&self) -> Vec<&Asset> {
        self.catalog.assets().iter().filter(|a| a.mint != self.from.mint).collect()
    }

    pub fn select_from(&mut self, mint: &Pubkey) -> SwapResult<()> {
        let asset = self.lookup(mint)?;
        if asset.mint == self.to.mint {
            return Err(SwapError::InvalidAssetPair);
        }
        self.from = asset;
        self.refresh_quote();
        Ok(())
    }

    pub fn select_to(&mut self, mint: &Pubkey) -> SwapResult<()> {
        let asset = self.lookup(mint)?;
        if asset.mint == self.from.mint {
            return Err(SwapError::InvalidAssetPair);
        }
        self.to = asset;
        self.refresh_quote();
        Ok(())
    }

    pub fn set_input_amount(&mut self, amount: u64) {
        self.input_amount = amount;
        self.refresh_quote();
    }

    /// Sets the input from a human amount such as `"1.5"` of the pay asset.
    pub fn set_input_ui_amount(&mut self, amount: &str) -> SwapResult<()> {
        let raw = parse_ui_amount(amount, self.from.decimals)?;
        self.set_input_amount(raw);
        Ok(())
    }

    pub fn update_reserves(&mut self, reserves: PoolReserves) {
        self.reserves = reserves;
        self.refresh_quote();
    }

    /// Reverses the pair. The previous receive amount becomes the new input and
    /// the quote is recomputed from the current reserves.
    pub fn flip(&mut self) -> SwapResult<()> {
        let flipped = flip(self.input_amount, self.quote.amount_out, &self.from, &self.to)?;
        self.input_amount = flipped.input_amount;
        self.from = flipped.from;
        self.to = flipped.to;
        self.refresh_quote();
        Ok(())
    }

    fn lookup(&self, mint: &Pubkey) -> SwapResult<Asset> {
        self.catalog.get(mint).cloned().ok_or(SwapError::UnknownAsset(*mint))
    }

    fn refresh_quote(&mut self) {
        self.quote = match self.try_quote() {
            Ok(quote) => quote,
            Err(e) => {
                debug!(from = %self.from.symbol, to = %self.to.symbol, "quote unavailable: {}", e);
                SwapQuote::zero(self.to.decimals)
            }
        };
    }
}
