use std::path::PathBuf;

/// Routing facts for the request being rendered.
///
/// The hosting framework fills this in per dispatch; tests and the CLI build
/// it directly. `controller` may carry a dot-separated namespace
/// (`blog.Article`).
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub controller: String,
    /// Action name as the framework stores it.
    pub action: String,
    /// Action exactly as routed, before any case normalization.
    pub action_raw: String,
}

impl RequestContext {
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        let action = action.into();
        Self {
            controller: controller.into(),
            action_raw: action.clone(),
            action,
        }
    }

    /// Set the original-case action for frameworks that normalize `action`
    /// separately.
    pub fn with_raw_action(mut self, raw: impl Into<String>) -> Self {
        self.action_raw = raw.into();
        self
    }
}

/// Application layout facts the view layer needs.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Runtime scratch directory; seeds the template cache location.
    pub runtime_path: PathBuf,
    /// Project root.
    pub root_path: PathBuf,
    /// Application source directory, probed first when deriving a view root.
    pub app_path: PathBuf,
    /// Sub-application name in multi-app layouts. Appended to the fallback
    /// view root when set.
    pub http_name: Option<String>,
}

impl AppContext {
    /// Conventional single-application layout rooted at `root`: code under
    /// `root/app`, scratch space under `root/runtime`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            runtime_path: root.join("runtime"),
            app_path: root.join("app"),
            root_path: root,
            http_name: None,
        }
    }
}
