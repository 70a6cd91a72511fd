use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ViewError {
    #[error("template not found: {path}")]
    #[diagnostic(help(
        "The identifier resolved to this file under the view root; `teraview list` shows what is there"
    ))]
    TemplateNotFound { path: PathBuf },

    #[error("unknown view option '{name}'")]
    OptionNotFound { name: String },

    #[error("failed to load view templates under {root}")]
    #[diagnostic(help("Every *.twig file under the view root is parsed; check their Tera syntax"))]
    Engine {
        root: PathBuf,
        #[source]
        source: tera::Error,
    },

    #[error("failed to render template '{template}'")]
    #[diagnostic(help("Check the template syntax and the supplied variables"))]
    Render {
        template: String,
        #[source]
        source: tera::Error,
    },

    #[error("failed to parse view config")]
    #[diagnostic(help("Check the TOML syntax in the config file"))]
    ConfigParse {
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ViewError>;
