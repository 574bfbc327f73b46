//! 签名者抽象
//!
//! The wallet is an external collaborator: it exposes a public identity, which
//! may be absent (wallet not connected), and a message signing capability.

use anyhow::{Result, anyhow};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
use std::sync::Arc;

pub trait SwapSigner: Send + Sync {
    /// Public identity of the actor, `None` when no wallet is connected.
    fn identity(&self) -> Option<Pubkey>;

    /// Signs serialized transaction message bytes.
    fn sign(&self, message: &[u8]) -> Result<Signature>;
}

impl SwapSigner for Keypair {
    fn identity(&self) -> Option<Pubkey> {
        Some(Signer::pubkey(self))
    }

    fn sign(&self, message: &[u8]) -> Result<Signature> {
        Ok(self.try_sign_message(message)?)
    }
}

impl<T: SwapSigner + ?Sized> SwapSigner for Arc<T> {
    fn identity(&self) -> Option<Pubkey> {
        (**self).identity()
    }

    fn sign(&self, message: &[u8]) -> Result<Signature> {
        (**self).sign(message)
    }
}

impl<T: SwapSigner> SwapSigner for Option<T> {
    fn identity(&self) -> Option<Pubkey> {
        self.as_ref().and_then(|s| s.identity())
    }

    fn sign(&self, message: &[u8]) -> Result<Signature> {
        match self {
            Some(signer) => signer.sign(message),
            None => Err(anyhow!("no signer connected")),
        }
    }
}

/// Signer with no identity, e.g. before a wallet connects.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisconnectedSigner;

impl SwapSigner for DisconnectedSigner {
    fn identity(&self) -> Option<Pubkey> {
        None
    }

    fn sign(&self, _message: &[u8]) -> Result<Signature> {
        Err(anyhow!("no signer connected"))
    }
}
