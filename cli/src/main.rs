pub mod cli;
mod config;
mod sample;
mod ticker;

use std::thread::sleep;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use cli::*;
use common::logger::{TraceId, child_span, init_logger, root_span};
use config::AppConfig;
use market::Market;

const RULE: &str = "------------------------------------";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = apply_cli(AppConfig::from_env(), &cli);

    init_logger("gbce", cfg.log_format());
    tracing::info!(?cfg, "starting GBCE ticker");

    let stocks = match &cfg.catalog {
        Some(path) => sample::load_catalog(path)?,
        None => sample::sample_stocks(),
    };

    let mut gbce = Market::with_config(cfg.market_config());

    // ---- Open the market ----
    println!("{RULE}");
    println!("Global Beverage Corporation Exchange");
    println!("{RULE}");

    {
        let trace_id = TraceId::new();
        let _root = root_span("listing", &trace_id).entered();

        for stock in stocks {
            let symbol = stock.symbol.clone();
            gbce.add_stock(stock)
                .with_context(|| format!("listing {symbol}"))?;

            println!("Welcome {symbol} to the GBCE");
            sleep(cfg.pause());
        }
    }

    // ---- Trade ----
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let symbols: Vec<String> = gbce.stocks().iter().map(|s| s.symbol.clone()).collect();

    for trade_no in 0..cfg.trades {
        let trace_id = TraceId::new();
        let _root = root_span("trade", &trace_id).entered();

        let Some(ticket) = ticker::random_ticket(&mut rng, &symbols) else {
            tracing::warn!("no stocks listed, nothing to trade");
            break;
        };

        let recorded = gbce
            .add_trade(ticket)
            .with_context(|| format!("recording trade #{trade_no}"))?;

        let index = {
            let _child = child_span("all_share_index").entered();
            gbce.all_share_index()
        };

        println!("{}", ticker::format_line(&recorded, index));

        if cfg.pause_ms > 0 {
            sleep(cfg.pause() + ticker::jitter(&mut rng));
        }
    }

    // ---- Close the market ----
    println!("{RULE}");
    tracing::info!(trades = gbce.trade_count(), "market closed");

    Ok(())
}
