//! The framework-facing view handler.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use tera::Value;
use tracing::{debug, info};

use crate::config::{ConfigPatch, ViewConfig};
use crate::context::{AppContext, RequestContext};
use crate::engine::{build_context, build_engine, ensure_loaded, render_str};
use crate::error::{Result, ViewError};
use crate::resolve::resolved_file_name;

/// View variables keyed by name. Sorted iteration keeps the render log's key
/// list deterministic.
pub type ViewData = BTreeMap<String, Value>;

/// Adapter between the framework's view contract and the Tera engine.
///
/// One instance lives as long as the owning application. Rendering is
/// synchronous and blocking; mutation (`configure`, the first fetch's
/// view-root derivation) takes `&mut self`, so a host that shares a handler
/// across threads must serialize access itself.
pub struct ViewHandler {
    app: AppContext,
    config: ViewConfig,
}

impl ViewHandler {
    /// Handler with default configuration.
    pub fn new(app: AppContext) -> Self {
        Self::with_config(app, ViewConfig::default())
    }

    /// Handler with explicit configuration. An unset cache directory is
    /// seeded from the app's runtime path.
    pub fn with_config(app: AppContext, mut config: ViewConfig) -> Self {
        if config.cache_dir.is_none() {
            config.cache_dir = Some(app.runtime_path.join("temp"));
        }
        Self { app, config }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Merge configuration overrides; the patch wins on conflict.
    pub fn configure(&mut self, patch: ConfigPatch) {
        self.config.apply(patch);
    }

    /// Current value of a configuration option.
    pub fn option(&self, name: &str) -> Result<Value> {
        self.config.option(name)
    }

    /// Whether a template file exists for the identifier.
    ///
    /// Identifiers carrying an extension are checked verbatim; anything else
    /// goes through name resolution first. Absence is a plain `false`, never
    /// an error. This path recomputes a derived view root rather than
    /// storing it.
    pub fn exists(&self, request: &RequestContext, template: &str) -> bool {
        let name = resolved_file_name(&self.config, request, template);
        self.view_root().join(name).is_file()
    }

    /// Render a view template into `out`.
    ///
    /// The first call without an explicit `view_path` derives one from the
    /// app layout and stores it, so later calls and `option("view_path")`
    /// see the derived directory. The render is buffered: `out` receives
    /// bytes only once the whole template rendered, so every failure
    /// ([`ViewError::TemplateNotFound`], [`ViewError::Render`]) leaves the
    /// sink untouched.
    pub fn fetch(
        &mut self,
        request: &RequestContext,
        template: &str,
        data: &ViewData,
        mut out: impl Write,
    ) -> Result<()> {
        let root = self.ensure_view_root();
        let name = resolved_file_name(&self.config, request, template);

        let file = root.join(&name);
        if !file.is_file() {
            return Err(ViewError::TemplateNotFound { path: file });
        }

        let mut tera = build_engine(&root, &self.config)?;
        ensure_loaded(&mut tera, &root, &file, &name)?;

        let vars: Vec<&str> = data.keys().map(String::as_str).collect();
        info!(template = %name, vars = ?vars, "rendering view template");

        let rendered = tera
            .render(&name, &build_context(data))
            .map_err(|e| ViewError::Render {
                template: name.clone(),
                source: e,
            })?;

        out.write_all(rendered.as_bytes())
            .map_err(|e| ViewError::Io {
                context: format!("writing rendered template '{name}'"),
                source: e,
            })
    }

    /// Render literal template content into `out`.
    ///
    /// No filesystem lookup and no name resolution take place; the content is
    /// compiled once and discarded.
    pub fn display(&self, content: &str, data: &ViewData, mut out: impl Write) -> Result<()> {
        let rendered = render_str(content, data, &self.config)?;
        out.write_all(rendered.as_bytes())
            .map_err(|e| ViewError::Io {
                context: "writing rendered content".to_string(),
                source: e,
            })
    }

    /// Effective view root: the configured path, or the one the app layout
    /// implies. Does not store the derived value.
    pub fn view_root(&self) -> PathBuf {
        self.config
            .view_path
            .clone()
            .unwrap_or_else(|| self.derive_view_root())
    }

    /// Effective view root, deriving and storing it when unset.
    fn ensure_view_root(&mut self) -> PathBuf {
        if let Some(path) = &self.config.view_path {
            return path.clone();
        }

        let derived = self.derive_view_root();
        debug!(path = %derived.display(), "derived view root");
        self.config.view_path = Some(derived.clone());
        derived
    }

    /// `app_path/view_dir_name` when that directory exists, otherwise
    /// `root_path/view_dir_name`, with the sub-application name appended in
    /// multi-app layouts.
    fn derive_view_root(&self) -> PathBuf {
        let in_app = self.app.app_path.join(&self.config.view_dir_name);
        if in_app.is_dir() {
            return in_app;
        }

        let mut root = self.app.root_path.join(&self.config.view_dir_name);
        if let Some(name) = &self.app.http_name {
            root = root.join(name);
        }
        root
    }
}
