use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tera::Value;

use crate::error::{Result, ViewError};

/// Strategy for deriving the default template name from the current action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingRule {
    /// Snake-case the action name (`readInfo` becomes `read_info`).
    #[default]
    Snake,
    /// Use the action in its original routed case.
    Original,
    /// Use the action exactly as the framework stores it.
    AsIs,
}

/// View-layer configuration.
///
/// The typed fields cover everything the adapter itself interprets. Anything
/// else handed to [`ViewConfig::apply`] lands in the `engine` escape hatch,
/// where it stays readable through [`ViewConfig::option`] and is consulted by
/// the engine builder for the options it recognizes (currently `autoescape`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Compiled-template cache directory. Seeded from the app runtime path at
    /// handler construction when unset. Stored for the option surface; Tera
    /// itself compiles in memory.
    pub cache_dir: Option<PathBuf>,

    /// Pick up template file changes between renders.
    pub auto_reload: bool,

    pub debug: bool,

    /// Explicit view root. When unset, the handler derives one from the app
    /// layout on first fetch.
    pub view_path: Option<PathBuf>,

    /// Directory name probed when deriving the view root.
    pub view_dir_name: String,

    /// Separator inserted between resolved name segments.
    pub delimiter: String,

    /// Default-template naming rule.
    pub naming: NamingRule,

    /// Engine-specific options with no typed field.
    #[serde(flatten)]
    pub engine: BTreeMap<String, Value>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            cache_dir: None,
            auto_reload: true,
            debug: true,
            view_path: None,
            view_dir_name: default_view_dir_name(),
            delimiter: default_delimiter(),
            naming: NamingRule::default(),
            engine: BTreeMap::new(),
        }
    }
}

fn default_view_dir_name() -> String {
    "view".to_string()
}

fn default_delimiter() -> String {
    "/".to_string()
}

/// A partial configuration: every field optional, unknown keys collected into
/// the escape hatch. Deserializable so the CLI can read overrides from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigPatch {
    pub cache_dir: Option<PathBuf>,
    pub auto_reload: Option<bool>,
    pub debug: Option<bool>,
    pub view_path: Option<PathBuf>,
    pub view_dir_name: Option<String>,
    pub delimiter: Option<String>,
    pub naming: Option<NamingRule>,
    #[serde(flatten)]
    pub engine: BTreeMap<String, Value>,
}

impl ViewConfig {
    /// Merge a patch into the current configuration. The patch wins on
    /// conflict; unrecognized keys overwrite (or join) the escape hatch.
    pub fn apply(&mut self, patch: ConfigPatch) {
        if let Some(v) = patch.cache_dir {
            self.cache_dir = Some(v);
        }
        if let Some(v) = patch.auto_reload {
            self.auto_reload = v;
        }
        if let Some(v) = patch.debug {
            self.debug = v;
        }
        if let Some(v) = patch.view_path {
            self.view_path = Some(v);
        }
        if let Some(v) = patch.view_dir_name {
            self.view_dir_name = v;
        }
        if let Some(v) = patch.delimiter {
            self.delimiter = v;
        }
        if let Some(v) = patch.naming {
            self.naming = v;
        }
        self.engine.extend(patch.engine);
    }

    /// Look up an option by name, typed fields first, then the escape hatch.
    ///
    /// Unset `Option` fields count as absent: `view_path` only exists once
    /// configured or derived.
    pub fn option(&self, name: &str) -> Result<Value> {
        let value = match name {
            "cache_dir" => path_value(self.cache_dir.as_deref()),
            "auto_reload" => Some(Value::Bool(self.auto_reload)),
            "debug" => Some(Value::Bool(self.debug)),
            "view_path" => path_value(self.view_path.as_deref()),
            "view_dir_name" => Some(Value::String(self.view_dir_name.clone())),
            "delimiter" => Some(Value::String(self.delimiter.clone())),
            "naming" => serde_json::to_value(self.naming).ok(),
            _ => self.engine.get(name).cloned(),
        };

        value.ok_or_else(|| ViewError::OptionNotFound {
            name: name.to_string(),
        })
    }

    /// Effective autoescape toggle from the escape hatch. Defaults on, as
    /// the Twig family does.
    pub fn autoescape(&self) -> bool {
        match self.engine.get("autoescape") {
            Some(Value::Bool(b)) => *b,
            _ => true,
        }
    }
}

fn path_value(path: Option<&Path>) -> Option<Value> {
    path.map(|p| Value::String(p.display().to_string()))
}

/// Load a config patch from a TOML file.
pub fn load_patch(path: &Path) -> Result<ConfigPatch> {
    let content = std::fs::read_to_string(path).map_err(|e| ViewError::Io {
        context: format!("reading {}", path.display()),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| ViewError::ConfigParse { source: e })
}
