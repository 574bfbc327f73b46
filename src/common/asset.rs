//! 资产描述与资产目录
//!
//! The catalog is supplied by an external collaborator at session start. Pubkeys
//! are carried as base58 strings in JSON so catalogs can be written by hand.

use crate::common::error::{SwapError, SwapResult};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::collections::HashSet;
use std::path::Path;

/// A tradable token held by the pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub uri: String,
    /// Number of fractional digits one smallest unit represents
    pub decimals: u8,
    /// Caller balance in human units (informational)
    #[serde(default)]
    pub balance: f64,
    #[serde(with = "pubkey_string")]
    pub mint: Pubkey,
    /// The pool's reserve account for this asset
    #[serde(with = "pubkey_string")]
    pub pool_token_account: Pubkey,
}

impl Asset {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
        mint: Pubkey,
        pool_token_account: Pubkey,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            uri: String::new(),
            decimals,
            balance: 0.0,
            mint,
            pool_token_account,
        }
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }
}

/// Ordered asset list. Always holds at least two assets with distinct mints.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetCatalog {
    assets: Vec<Asset>,
}

impl AssetCatalog {
    pub fn new(assets: Vec<Asset>) -> SwapResult<Self> {
        if assets.len() < 2 {
            return Err(SwapError::InsufficientAssets(assets.len()));
        }
        let mut seen = HashSet::with_capacity(assets.len());
        for asset in &assets {
            if !seen.insert(asset.mint) {
                return Err(SwapError::InvalidAssetPair);
            }
        }
        Ok(Self { assets })
    }

    /// 从 JSON 数组加载资产目录
    pub fn from_json_str(json: &str) -> SwapResult<Self> {
        let assets: Vec<Asset> =
            serde_json::from_str(json).map_err(|e| SwapError::Catalog(e.to_string()))?;
        Self::new(assets)
    }

    pub fn from_path(path: impl AsRef<Path>) -> SwapResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| SwapError::Catalog(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn get(&self, mint: &Pubkey) -> Option<&Asset> {
        self.assets.iter().find(|a| &a.mint == mint)
    }

    pub fn get_by_symbol(&self, symbol: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.symbol == symbol)
    }
}

pub(crate) mod pubkey_string {
    use serde::{Deserialize, Deserializer, Serializer};
    use solana_sdk::pubkey::Pubkey;
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&pubkey.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(&s).map_err(serde::de::Error::custom)
    }
}
