//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Cli, Commands, ListTarget};
use clap::{CommandFactory, Parser};
use r53q_core::{ConfigResolver, CoreError, ZoneService};
use r53q_provider::{create_provider, ProviderError};

/// Parse the process arguments, run the command and report failures.
pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    let resolver = ConfigResolver::from_process();
    let mut stdout = io::stdout();

    match execute(cli, &resolver, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if is_expected(&e) {
                tracing::debug!("command failed: {e:?}");
            } else {
                tracing::info!("command failed: {e:?}");
            }
            eprintln!("r53q: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Whether a failure comes from local setup or user input rather than from
/// Route 53 or the network.
///
/// Picks the diagnostic log level; the one-line message on stderr is the same
/// either way.
fn is_expected(error: &anyhow::Error) -> bool {
    if let Some(e) = error.downcast_ref::<CoreError>() {
        e.is_expected()
    } else if let Some(e) = error.downcast_ref::<ProviderError>() {
        e.is_expected()
    } else {
        false
    }
}

/// Run one parsed invocation, writing its output to `out`.
pub async fn execute(cli: Cli, resolver: &ConfigResolver, out: &mut impl Write) -> Result<()> {
    if cli.options.version {
        return commands::version::execute(resolver, out);
    }

    let Some(command) = cli.command else {
        write!(out, "{}", help(None))?;
        return Ok(());
    };

    match command {
        Commands::List { target: None } => {
            write!(out, "{}", help(Some("list")))?;
            Ok(())
        }
        Commands::List {
            target: Some(ListTarget::Zones),
        } => commands::list::zones(&connect(resolver)?, out).await,
        Commands::List {
            target: Some(ListTarget::Records { identifier }),
        } => commands::list::records(&connect(resolver)?, &identifier, out).await,
        Commands::Zone { identifier, mode } => {
            let count_only = args::is_count_mode(mode.as_deref());
            commands::zone::execute(&connect(resolver)?, &identifier, count_only, out).await
        }
    }
}

/// Help text for the top level or for one subcommand.
fn help(subcommand: Option<&str>) -> String {
    let mut command = Cli::command();
    command.build();
    if let Some(sub) = subcommand.and_then(|name| command.find_subcommand_mut(name)) {
        return sub.render_help().to_string();
    }
    command.render_help().to_string()
}

/// Resolve usable credentials and build the zone service over them.
fn connect(resolver: &ConfigResolver) -> Result<ZoneService> {
    let resolved = resolver
        .resolve()
        .and_then(r53q_core::ResolvedConfig::require_usable)
        .context("loading config")?;
    tracing::debug!("using config from {}", resolved.origin());

    let provider =
        create_provider(resolved.config.credentials()).context("creating Route 53 client")?;
    Ok(ZoneService::new(provider))
}
