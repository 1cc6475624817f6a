//! # CLI Layer
//!
//! The only place that touches the terminal. Handlers call [`GlyphApi`],
//! then hand the returned `CmdResult` to the `print` functions.

mod print;

use crate::args::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use glyphspec::api::{ConfigAction, GlyphApi};
use glyphspec::error::{GlyphError, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use print::{print_config, print_messages, print_schema, print_spec, print_types};

const HOME_ENV: &str = "GLYPHSPEC_HOME";

struct AppContext {
    api: GlyphApi,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let ctx = init_context()?;

    match cli.command {
        Commands::Types => handle_types(&ctx),
        Commands::Describe { glyph } => handle_describe(&ctx, &glyph),
        Commands::Spec {
            glyph,
            assignments,
            compact,
        } => handle_spec(&ctx, &glyph, &assignments, compact),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn init_context() -> Result<AppContext> {
    let config_dir = match std::env::var_os(HOME_ENV) {
        Some(home) => PathBuf::from(home),
        None => ProjectDirs::from("com", "glyphspec", "glyphspec")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| {
                GlyphError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Could not determine config dir",
                ))
            })?,
    };
    tracing::debug!(config_dir = %config_dir.display(), "using config directory");

    Ok(AppContext {
        api: GlyphApi::new(config_dir),
    })
}

fn handle_types(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_types()?;
    print_types(&result.glyph_types);
    print_messages(&result.messages);
    Ok(())
}

fn handle_describe(ctx: &AppContext, glyph: &str) -> Result<()> {
    let result = ctx.api.describe(glyph)?;
    if let Some(glyph_type) = result.glyph_types.first() {
        print_schema(*glyph_type, &result.schema_rows);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_spec(ctx: &AppContext, glyph: &str, assignments: &[String], compact: bool) -> Result<()> {
    let result = ctx.api.build_spec(glyph, assignments)?;
    let pretty = !compact && result.config.as_ref().map_or(true, |config| config.pretty);
    if let Some(spec) = &result.spec {
        print_spec(spec, pretty)?;
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
