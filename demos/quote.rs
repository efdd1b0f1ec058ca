//! Bonding curve quoting example.
//!
//! Builds the reference curve, quotes a few buys and sells, and shows the
//! buy/sell asymmetry.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=debug cargo run --example quote
//! ```

use tokenforge_curve::config::{CurveConfig, SellPricing};
use tokenforge_curve::curve::BondingCurve;
use tokenforge_curve::domain::TradeRequest;
use tokenforge_curve::session::MockWalletSession;
use tokenforge_curve::traits::{FromConfig, IdentityProvider, TradeQuoter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Bonding curve: price(k) = 0.001 · 1.0001^(100000 + k) ===\n");

    // ── 1. Sign in ──────────────────────────────────────────────────────
    let mut session = MockWalletSession::new();
    session.connect("0x742d35Cc6634C0532925a3b8D4C0532925a3b8D4")?;
    if let Some(identity) = session.current_identity() {
        println!("Connected wallet: {identity}");
    }

    // ── 2. Build the curve ──────────────────────────────────────────────
    let config = CurveConfig::reference();
    let curve = BondingCurve::from_config(&config)?;
    println!("Spot price:       {:.6} currency/token", curve.spot_price());
    println!("Unit ceiling:     {}", config.max_units_per_call());

    // ── 3. Quote buys ───────────────────────────────────────────────────
    println!("\n--- Buys ---");
    for currency in [1.0, 22.02, 100.0, 1_000.0, 1e9] {
        let estimate = curve.quote(&TradeRequest::buy(currency)?)?;
        println!("  {estimate}");
        if let Some(avg) = estimate.average_unit_price() {
            println!("    average paid: {avg:.6} currency/token");
        }
        if estimate.ceiling_reached() {
            println!("    stopped at the unit ceiling");
        }
    }

    // ── 4. Quote sells under both policies ──────────────────────────────
    println!("\n--- Sells ---");
    let steps = BondingCurve::from_config(&config.with_sell_pricing(SellPricing::UnitSteps))?;
    for tokens in [1.0, 100.0, 100.5] {
        let request = TradeRequest::sell(tokens)?;
        println!("  continuous: {}", curve.quote(&request)?);
        println!("  unit steps: {}", steps.quote(&request)?);
    }

    // ── 5. Buy/sell asymmetry ───────────────────────────────────────────
    let proceeds = curve.sell(100.0)?.amount_out();
    let back = curve.buy(proceeds)?.amount_out();
    println!("\nSell 100 tokens -> {proceeds} currency -> buys back {back} tokens");

    session.disconnect();
    Ok(())
}
