//! Swap 会话与报价测试
//!
//! 不需要网络连接：储备通过 MockSwapRpc 预置
//!
//! 运行测试:
//!     cargo test --test swap_session_tests -- --nocapture

use liquidity_pool_swap::{
    SwapError, SwapSession, compute_output,
    common::AssetCatalog,
    instruction::utils::liquidity_pool::PoolReserves,
};
use solana_sdk::pubkey::Pubkey;

mod test_helpers;
use test_helpers::{seed_reserves, test_assets, test_catalog, test_env};

fn session_with_reserves(reserves: &[u64]) -> SwapSession {
    let catalog = test_catalog();
    let mut session = SwapSession::new(catalog.clone());
    session.update_reserves(
        catalog.assets().iter().zip(reserves).map(|(a, r)| (a.mint, *r)).collect::<PoolReserves>(),
    );
    session
}

#[test]
fn test_session_starts_with_first_two_assets() {
    let assets = test_assets();
    let session = SwapSession::from_assets(assets.clone()).unwrap();
    assert_eq!(session.from(), &assets[0]);
    assert_eq!(session.to(), &assets[1]);
    assert_eq!(session.input_amount(), 0);
    assert!(session.quote().is_zero());
    assert_eq!(session.quote().output_decimals, assets[1].decimals);
}

#[test]
fn test_session_requires_two_assets() {
    let mut assets = test_assets();
    assets.truncate(1);
    assert!(matches!(SwapSession::from_assets(assets), Err(SwapError::InsufficientAssets(1))));
}

#[test]
fn test_reference_quote_through_session() {
    let mut assets = test_assets();
    // receive side with 2 decimals
    assets.swap(1, 2);
    let catalog = AssetCatalog::new(assets.clone()).unwrap();
    let mut session = SwapSession::new(catalog);
    let reserves: PoolReserves = [(assets[0].mint, 1000), (assets[1].mint, 500)].into_iter().collect();
    session.update_reserves(reserves);
    session.set_input_amount(100);

    let quote = session.quote();
    assert_eq!(quote.amount_out, 45);
    assert_eq!(quote.ui_amount_out_string(), "0.45");
    assert!((quote.ui_amount_out() - 0.45).abs() < 1e-12);
}

#[test]
fn test_quote_recomputed_on_every_change() {
    let mut session = session_with_reserves(&[1_000_000_000, 5_000_000_000_000, 10_000]);
    session.set_input_amount(1_000_000);
    let first = session.quote();
    assert_eq!(first, compute_output(1_000_000_000, 5_000_000_000_000, 1_000_000, 9).unwrap());

    session.set_input_amount(2_000_000);
    assert!(session.quote().amount_out > first.amount_out);

    let pts = session.catalog().assets()[2].mint;
    session.select_to(&pts).unwrap();
    assert_eq!(session.quote(), compute_output(1_000_000_000, 10_000, 2_000_000, 2).unwrap());
}

#[test]
fn test_quote_is_idempotent() {
    let mut session = session_with_reserves(&[777, 333, 1]);
    session.set_input_amount(55);
    let q1 = session.try_quote().unwrap();
    let q2 = session.try_quote().unwrap();
    assert_eq!(q1, q2);
    assert_eq!(session.quote(), q1);
}

#[test]
fn test_missing_reserves_yield_zero_quote() {
    let mut session = SwapSession::new(test_catalog());
    session.set_input_amount(1_000);
    assert!(session.quote().is_zero());
    assert!(matches!(session.try_quote(), Err(SwapError::InvalidReserveState)));
}

#[test]
fn test_choices_exclude_opposite_selection() {
    let session = SwapSession::new(test_catalog());
    let to = session.to().mint;
    let from = session.from().mint;
    assert!(session.from_choices().iter().all(|a| a.mint != to));
    assert!(session.to_choices().iter().all(|a| a.mint != from));
    assert_eq!(session.from_choices().len(), 2);
    assert_eq!(session.to_choices().len(), 2);
}

#[test]
fn test_selecting_opposite_asset_is_rejected() {
    let mut session = session_with_reserves(&[10, 20, 30]);
    let from = session.from().clone();
    let to = session.to().clone();

    assert!(matches!(session.select_from(&to.mint), Err(SwapError::InvalidAssetPair)));
    assert!(matches!(session.select_to(&from.mint), Err(SwapError::InvalidAssetPair)));
    // selection unchanged
    assert_eq!(session.from(), &from);
    assert_eq!(session.to(), &to);

    let unknown = Pubkey::new_unique();
    assert!(matches!(session.select_from(&unknown), Err(SwapError::UnknownAsset(k)) if k == unknown));
}

#[test]
fn test_choice_driven_selection_never_hits_invalid_pair() {
    let mut session = session_with_reserves(&[10, 20, 30]);
    for _ in 0..3 {
        let pick = session.from_choices().last().map(|a| a.mint).unwrap();
        session.select_from(&pick).unwrap();
        let pick = session.to_choices().first().map(|a| a.mint).unwrap();
        session.select_to(&pick).unwrap();
        assert_ne!(session.from().mint, session.to().mint);
    }
}

#[test]
fn test_flip_uses_fresh_quote() {
    let mut session = session_with_reserves(&[2_000_000_000, 10_000_000_000_000, 0]);
    session.set_input_amount(5_000_000);
    let before = session.quote();
    let (from, to) = (session.from().clone(), session.to().clone());

    session.flip().unwrap();
    assert_eq!(session.from(), &to);
    assert_eq!(session.to(), &from);
    assert_eq!(session.input_amount(), before.amount_out);
    assert_eq!(
        session.quote(),
        compute_output(10_000_000_000_000, 2_000_000_000, before.amount_out, from.decimals).unwrap()
    );

    session.flip().unwrap();
    assert_eq!(session.from(), &from);
    assert_eq!(session.to(), &to);
}

#[test]
fn test_flip_then_reserve_update_requotes() {
    let mut session = session_with_reserves(&[1_000, 1_000, 0]);
    session.set_input_amount(100);
    session.flip().unwrap();
    let stale = session.quote();

    let reserves: PoolReserves = session
        .catalog()
        .assets()
        .iter()
        .map(|a| (a.mint, 4_000))
        .collect();
    session.update_reserves(reserves);
    assert_ne!(session.quote(), stale);
    assert_eq!(session.quote(), compute_output(4_000, 4_000, session.input_amount(), 6).unwrap());
}

#[test]
fn test_set_input_ui_amount_uses_pay_decimals() {
    let mut session = session_with_reserves(&[1_000_000_000, 1_000_000_000_000, 0]);
    session.set_input_ui_amount("1.5").unwrap();
    assert_eq!(session.input_amount(), 1_500_000);
    assert!(matches!(
        session.set_input_ui_amount("1.1234567"),
        Err(SwapError::InvalidAmount(_))
    ));
    assert_eq!(session.input_amount(), 1_500_000);
}

#[tokio::test]
async fn test_refresh_reserves_from_rpc() {
    let env = test_env();
    let catalog = test_catalog();
    seed_reserves(&env.rpc, &catalog, &[1_000, 500, 42]);

    let mut session = env.client.new_session(catalog.clone());
    session.set_input_amount(100);
    env.client.refresh_reserves(&mut session).await.unwrap();

    assert_eq!(session.reserves().get(&catalog.assets()[0].mint), 1_000);
    assert_eq!(session.reserves().get(&catalog.assets()[2].mint), 42);
    assert_eq!(session.quote(), compute_output(1_000, 500, 100, 9).unwrap());
}

#[tokio::test]
async fn test_refresh_reserves_missing_account() {
    let env = test_env();
    let catalog = test_catalog();
    seed_reserves(&env.rpc, &catalog, &[1_000, 500]);

    let mut session = env.client.new_session(catalog);
    let err = env.client.refresh_reserves(&mut session).await.unwrap_err();
    assert!(matches!(err, SwapError::Rpc { .. }));
    assert!(session.reserves().is_empty());
}
