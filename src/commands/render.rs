use std::path::PathBuf;

use miette::Result;
use tera::Value;
use teraview::{RequestContext, ViewData};

pub fn run(
    template: String,
    raw: bool,
    data: Vec<String>,
    view_path: Option<PathBuf>,
    controller: String,
    action: String,
    config: Option<PathBuf>,
) -> Result<()> {
    let data = parse_data(data);
    let mut handler = super::build_handler(view_path, config)?;

    let stdout = std::io::stdout();
    if raw {
        handler.display(&template, &data, stdout.lock())?;
    } else {
        let request = RequestContext::new(controller, action);
        handler.fetch(&request, &template, &data, stdout.lock())?;
    }

    Ok(())
}

/// Split `key=value` pairs into view variables. Values that read as JSON
/// (`true`, `3`, `[1,2]`) keep their type; anything else stays a string.
fn parse_data(pairs: Vec<String>) -> ViewData {
    pairs
        .into_iter()
        .filter_map(|kv| {
            let mut parts = kv.splitn(2, '=');
            let key = parts.next()?.to_string();
            let value = parts.next()?;
            let value =
                serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
            Some((key, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_data_splits_on_first_equals() {
        let data = parse_data(vec!["title=a=b".to_string()]);
        assert_eq!(data["title"], Value::String("a=b".to_string()));
    }

    #[test]
    fn parse_data_coerces_json_values() {
        let data = parse_data(vec![
            "published=true".to_string(),
            "count=3".to_string(),
            "name=World".to_string(),
        ]);
        assert_eq!(data["published"], Value::Bool(true));
        assert_eq!(data["count"], Value::Number(3.into()));
        assert_eq!(data["name"], Value::String("World".to_string()));
    }

    #[test]
    fn parse_data_skips_pairs_without_equals() {
        let data = parse_data(vec!["orphan".to_string(), "ok=1".to_string()]);
        assert_eq!(data.len(), 1);
        assert!(data.contains_key("ok"));
    }
}
