#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use hcloud_ssh_sync::{
    cli::Cli, marker::EditMode, run_sync, HcloudClient, Marker, SyncOptions, SyncOutcome,
};
use std::time::Duration;
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(cli.debug, cli.trace);

    let client = HcloudClient::new(&cli.endpoint, cli.timeout.map(Duration::from_secs))
        .context("Failed to create Hetzner Cloud client")?;
    debug!("Using Hetzner Cloud endpoint {}", client.endpoint());

    let options = build_sync_options(cli);
    let outcome = run_sync(&options, &client)?;

    report(&outcome);
    Ok(())
}

/// Initialize tracing with the specified debug/trace flags
fn initialize_tracing(debug: bool, trace: bool) {
    let log_level = if trace {
        Level::TRACE
    } else if debug {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::builder().with_default_directive(log_level.into()).from_env_lossy())
        .init();
}

fn build_sync_options(cli: Cli) -> SyncOptions {
    SyncOptions {
        config_file: cli.config_file,
        ssh_config_file: cli.ssh_config_file,
        marker: Marker::new(cli.marker),
        print_only: cli.print_only,
        backup: cli.backup,
    }
}

fn report(outcome: &SyncOutcome) {
    let action = match outcome.mode {
        EditMode::Inserted => "Added new config to",
        EditMode::Replaced => "Replaced config in",
    };

    if outcome.persisted {
        if let Some(ref backup) = outcome.backup {
            println!("Backup created: {}", backup.display());
        }
        println!("{action} {}", outcome.path.display());
    } else {
        // Keep stdout to the file content alone so it can be redirected
        info!("{action} {} (print only)", outcome.path.display());
        print!("{}", outcome.content);
    }
}
