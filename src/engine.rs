//! Per-call construction of the underlying Tera engine.

use std::collections::BTreeMap;
use std::path::Path;

use tera::{Context, Tera, Value};

use crate::config::ViewConfig;
use crate::error::{Result, ViewError};
use crate::resolve::TEMPLATE_EXT;

/// Suffixes escaped when autoescape is on. HTML is what these views emit.
const AUTOESCAPE_SUFFIXES: &[&str] = &[".twig", ".html"];

/// Build a fresh engine over every template under the view root.
///
/// Loading the whole tree keeps `{% include %}` and `{% extends %}` across
/// files working. Nothing is cached between calls, so edited templates are
/// picked up on the next render.
pub fn build_engine(view_root: &Path, config: &ViewConfig) -> Result<Tera> {
    let pattern = format!("{}/**/*.{}", view_root.display(), TEMPLATE_EXT);
    let mut tera = Tera::new(&pattern).map_err(|e| ViewError::Engine {
        root: view_root.to_path_buf(),
        source: e,
    })?;

    if config.autoescape() {
        tera.autoescape_on(AUTOESCAPE_SUFFIXES.to_vec());
    } else {
        tera.autoescape_on(Vec::new());
    }

    Ok(tera)
}

/// Register a template the glob loader did not pick up.
///
/// Verbatim identifiers may address any file under the view root, not only
/// `.twig` ones; a file with another extension is loaded individually under
/// its resolved name.
pub fn ensure_loaded(tera: &mut Tera, view_root: &Path, file: &Path, name: &str) -> Result<()> {
    if tera.get_template_names().any(|known| known == name) {
        return Ok(());
    }

    tera.add_template_file(file, Some(name))
        .map_err(|e| ViewError::Engine {
            root: view_root.to_path_buf(),
            source: e,
        })
}

/// Build a Tera context from the supplied view variables.
pub fn build_context(data: &BTreeMap<String, Value>) -> Context {
    let mut context = Context::new();
    for (key, value) in data {
        context.insert(key, value);
    }
    context
}

/// One-off render of literal template source, outside any view root.
pub fn render_str(
    content: &str,
    data: &BTreeMap<String, Value>,
    config: &ViewConfig,
) -> Result<String> {
    Tera::one_off(content, &build_context(data), config.autoescape()).map_err(|e| {
        ViewError::Render {
            template: "<inline>".to_string(),
            source: e,
        }
    })
}
