use std::path::PathBuf;

use console::style;
use miette::Result;
use teraview::TEMPLATE_EXT;
use walkdir::WalkDir;

pub fn run(view_path: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let handler = super::build_handler(view_path, config)?;
    let root = handler.view_root();

    if !root.is_dir() {
        println!(
            "No view directory at {}. Point '{}' at one.",
            style(root.display()).cyan(),
            style("--view-path").cyan()
        );
        return Ok(());
    }

    let mut names: Vec<PathBuf> = WalkDir::new(&root)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == TEMPLATE_EXT))
        .filter_map(|e| e.path().strip_prefix(&root).ok().map(|p| p.to_path_buf()))
        .collect();
    names.sort();

    if names.is_empty() {
        println!(
            "No .{} templates under {}.",
            TEMPLATE_EXT,
            style(root.display()).cyan()
        );
        return Ok(());
    }

    println!(
        "{} ({} template{})\n",
        style(root.display()).bold(),
        names.len(),
        if names.len() == 1 { "" } else { "s" }
    );

    for name in &names {
        println!("  {}", name.display());
    }

    Ok(())
}
