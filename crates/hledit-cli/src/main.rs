//! hledit CLI - recategorise postings in a plaintext ledger
//!
//! This is the command-line interface for hledit. Every edit rewrites a
//! single line of the stored ledger text and leaves the rest untouched.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use hledit_core::VERSION;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::errors::exit_code_for;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        eprintln!("Error: {}", e);
        std::process::exit(exit_code_for(&e));
    }
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--log-level`.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "hledit_core={},{}={}",
            level,
            env!("CARGO_CRATE_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Load(args)) => commands::handle_load(ctx, args),
        Some(Commands::Export(args)) => commands::handle_export(ctx, args),
        Some(Commands::List(args)) => commands::handle_list(ctx, args),
        Some(Commands::Show(args)) => commands::handle_show(ctx, args),
        Some(Commands::SetAccount(args)) => commands::handle_set_account(ctx, args),
        Some(Commands::Edit(args)) => commands::handle_edit(ctx, args),
        Some(Commands::Categorize(args)) => commands::handle_categorize(ctx, args),
        Some(Commands::Options(args)) => commands::handle_options(ctx, args),
        Some(Commands::Prefs(args)) => commands::handle_prefs(ctx, args),
        Some(Commands::Completions(args)) => commands::handle_completions(args.shell),
        None => {
            println!("hledit v{}", VERSION);
            println!("Run `hledit --help` for usage.");
            Ok(())
        }
    }
}
