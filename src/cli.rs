use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "teraview",
    about = "Render and inspect Tera view templates addressed by controller/action rules",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a view template to stdout
    Render {
        /// Template rule (empty for the controller/action default)
        #[arg(default_value = "")]
        template: String,

        /// Treat TEMPLATE as literal template source instead of a file rule
        #[arg(long)]
        raw: bool,

        /// Set view variables (can be repeated: -d key=value)
        #[arg(short, long = "data", value_name = "KEY=VALUE")]
        data: Vec<String>,

        /// View root directory (default: derived from the app layout)
        #[arg(long)]
        view_path: Option<PathBuf>,

        /// Controller name for the resolution rule
        #[arg(long, default_value = "index")]
        controller: String,

        /// Action name for the resolution rule
        #[arg(long, default_value = "index")]
        action: String,

        /// TOML file with view config overrides
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the relative file name a template rule resolves to
    Resolve {
        /// Template rule (empty for the controller/action default)
        #[arg(default_value = "")]
        template: String,

        /// Controller name for the resolution rule
        #[arg(long, default_value = "index")]
        controller: String,

        /// Action name for the resolution rule
        #[arg(long, default_value = "index")]
        action: String,

        /// Naming rule for the default template name: snake, original, or as_is
        #[arg(long)]
        naming: Option<String>,

        /// Segment delimiter
        #[arg(long)]
        delimiter: Option<String>,
    },

    /// Check whether a template rule resolves to an existing file
    Exists {
        /// Template rule (empty for the controller/action default)
        #[arg(default_value = "")]
        template: String,

        /// View root directory (default: derived from the app layout)
        #[arg(long)]
        view_path: Option<PathBuf>,

        /// Controller name for the resolution rule
        #[arg(long, default_value = "index")]
        controller: String,

        /// Action name for the resolution rule
        #[arg(long, default_value = "index")]
        action: String,

        /// TOML file with view config overrides
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the view templates under the view root
    List {
        /// View root directory (default: derived from the app layout)
        #[arg(long)]
        view_path: Option<PathBuf>,

        /// TOML file with view config overrides
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
