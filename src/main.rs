mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("teraview=info".parse().into_diagnostic()?),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Commands::Render {
            template,
            raw,
            data,
            view_path,
            controller,
            action,
            config,
        } => commands::render::run(template, raw, data, view_path, controller, action, config),
        Commands::Resolve {
            template,
            controller,
            action,
            naming,
            delimiter,
        } => commands::resolve::run(template, controller, action, naming, delimiter),
        Commands::Exists {
            template,
            view_path,
            controller,
            action,
            config,
        } => commands::exists::run(template, view_path, controller, action, config),
        Commands::List { view_path, config } => commands::list::run(view_path, config),
    }
}
