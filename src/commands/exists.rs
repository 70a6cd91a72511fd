use std::path::PathBuf;

use console::style;
use miette::Result;
use teraview::resolve::resolved_file_name;
use teraview::RequestContext;

pub fn run(
    template: String,
    view_path: Option<PathBuf>,
    controller: String,
    action: String,
    config: Option<PathBuf>,
) -> Result<()> {
    let handler = super::build_handler(view_path, config)?;
    let request = RequestContext::new(controller, action);

    let name = resolved_file_name(handler.config(), &request, &template);
    let path = handler.view_root().join(&name);

    if handler.exists(&request, &template) {
        println!("{} {}", style("✓").green().bold(), path.display());
    } else {
        println!("{} {}", style("✗").red().bold(), path.display());
        std::process::exit(1);
    }

    Ok(())
}
