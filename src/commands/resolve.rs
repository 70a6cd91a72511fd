use miette::Result;
use teraview::resolve::resolved_file_name;
use teraview::{NamingRule, RequestContext, ViewConfig};

pub fn run(
    template: String,
    controller: String,
    action: String,
    naming: Option<String>,
    delimiter: Option<String>,
) -> Result<()> {
    let mut config = ViewConfig::default();
    if let Some(naming) = naming {
        config.naming = parse_naming(&naming)?;
    }
    if let Some(delimiter) = delimiter {
        config.delimiter = delimiter;
    }

    let request = RequestContext::new(controller, action);
    println!("{}", resolved_file_name(&config, &request, &template));

    Ok(())
}

fn parse_naming(value: &str) -> Result<NamingRule> {
    match value {
        "snake" => Ok(NamingRule::Snake),
        "original" => Ok(NamingRule::Original),
        "as_is" => Ok(NamingRule::AsIs),
        other => Err(miette::miette!(
            "unknown naming rule '{other}' (expected snake, original, or as_is)"
        )),
    }
}
