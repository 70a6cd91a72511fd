//! Tera-backed view rendering for controller/action-routed applications.
//!
//! `teraview` sits between a web framework's view contract and the [`tera`]
//! engine: callers ask for a logical template, often the empty rule meaning
//! "the template for the current controller and action", and the handler
//! resolves it to a `.twig` file under the view root, checks that it exists,
//! and renders it with a per-call engine.
//!
//! ```no_run
//! use teraview::{AppContext, RequestContext, ViewData, ViewHandler};
//!
//! let mut view = ViewHandler::new(AppContext::from_root("/srv/myapp"));
//! let request = RequestContext::new("blog.Article", "readInfo");
//!
//! let mut data = ViewData::new();
//! data.insert("title".into(), "hello".into());
//!
//! // Renders <view root>/blog.article/read_info.twig to stdout.
//! view.fetch(&request, "", &data, std::io::stdout())?;
//! # Ok::<(), teraview::ViewError>(())
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod handler;
pub mod resolve;

pub use config::{ConfigPatch, NamingRule, ViewConfig};
pub use context::{AppContext, RequestContext};
pub use error::{Result, ViewError};
pub use handler::{ViewData, ViewHandler};
pub use resolve::TEMPLATE_EXT;
