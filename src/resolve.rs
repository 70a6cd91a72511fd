//! Logical template identifiers to view-root-relative file names.
//!
//! An identifier is either an explicit path (`/a/b`, used as typed), a
//! partial rule (`detail`, prefixed with the current controller), or empty
//! (synthesized from controller and action per the configured naming rule).
//! Resolution is pure string manipulation; the filesystem is never touched
//! here.

use std::path::Path;

use tracing::debug;

use crate::config::{NamingRule, ViewConfig};
use crate::context::RequestContext;

/// Fixed extension for view template files.
pub const TEMPLATE_EXT: &str = "twig";

/// Resolved file name for an identifier: verbatim when it already carries an
/// extension, rule-resolved otherwise.
pub fn resolved_file_name(
    config: &ViewConfig,
    request: &RequestContext,
    template: &str,
) -> String {
    if Path::new(template).extension().is_some() {
        template.to_string()
    } else {
        resolve_template_name(config, request, template)
    }
}

/// Apply the naming rule to an extension-less identifier.
///
/// Empty controller names skip the prefixing step entirely: the identifier is
/// used as typed, still suffixed with the fixed extension.
pub fn resolve_template_name(
    config: &ViewConfig,
    request: &RequestContext,
    template: &str,
) -> String {
    let (app, template) = split_app_qualifier(template);
    if let Some(app) = app {
        // Parsed but not consumed: cross-app view roots are not wired up.
        debug!(app, template, "ignoring cross-app qualifier in template rule");
    }

    let depr = config.delimiter.as_str();

    let name = if let Some(rest) = template.strip_prefix('/') {
        rest.replace(['/', ':'], depr)
    } else {
        let mut name = template.replace(['/', ':'], depr);
        let controller = snake_controller(&request.controller);

        if !controller.is_empty() {
            if name.is_empty() {
                let action = default_action_name(config.naming, request);
                name = format!("{controller}{depr}{action}");
            } else if !name.contains(depr) {
                name = format!("{controller}{depr}{name}");
            }
        }

        name
    };

    format!("{}.{TEMPLATE_EXT}", name.trim_start_matches('/'))
}

fn default_action_name(rule: NamingRule, request: &RequestContext) -> String {
    match rule {
        NamingRule::Snake => snake_case(&request.action),
        NamingRule::Original => request.action_raw.clone(),
        NamingRule::AsIs => request.action.clone(),
    }
}

/// Split a cross-app qualifier off a template rule.
///
/// Two spellings are recognized: `app@rule` and the leading-marker form
/// `@app:rule`. A bare leading `@` without a closing `:` is left alone.
fn split_app_qualifier(template: &str) -> (Option<&str>, &str) {
    if let Some(rest) = template.strip_prefix('@') {
        return match rest.split_once(':') {
            Some((app, bare)) => (Some(app), bare),
            None => (None, template),
        };
    }

    match template.split_once('@') {
        Some((app, bare)) if !app.is_empty() => (Some(app), bare),
        _ => (None, template),
    }
}

/// Snake-case a controller name segment by segment, preserving namespace dots
/// (`blog.Article` becomes `blog.article`, `AdminPanel.UserList` becomes
/// `admin_panel.user_list`).
pub fn snake_controller(controller: &str) -> String {
    controller
        .split('.')
        .map(snake_case)
        .collect::<Vec<_>>()
        .join(".")
}

/// Snake casing with the semantics of the framework's string helper:
/// whitespace dropped, `_` inserted before each uppercase letter that has a
/// predecessor, everything lowercased.
pub fn snake_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    let mut chars = value.chars().filter(|c| !c.is_whitespace()).peekable();

    while let Some(c) = chars.next() {
        for low in c.to_lowercase() {
            out.push(low);
        }
        if chars.peek().is_some_and(|next| next.is_uppercase()) {
            out.push('_');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ViewConfig {
        ViewConfig::default()
    }

    fn config_with_delimiter(depr: &str) -> ViewConfig {
        ViewConfig {
            delimiter: depr.to_string(),
            ..ViewConfig::default()
        }
    }

    fn request(controller: &str, action: &str) -> RequestContext {
        RequestContext::new(controller, action)
    }

    // ── snake_case ──────────────────────────────────────────────────────

    #[test]
    fn snake_case_camel() {
        assert_eq!(snake_case("readInfo"), "read_info");
    }

    #[test]
    fn snake_case_pascal() {
        assert_eq!(snake_case("BlogTest"), "blog_test");
    }

    #[test]
    fn snake_case_lowercase_passthrough() {
        assert_eq!(snake_case("view"), "view");
        assert_eq!(snake_case("read_info"), "read_info");
    }

    #[test]
    fn snake_case_drops_whitespace() {
        assert_eq!(snake_case("Read Info"), "read_info");
    }

    #[test]
    fn snake_case_consecutive_uppercase() {
        assert_eq!(snake_case("HTTPServer"), "h_t_t_p_server");
    }

    // ── snake_controller ────────────────────────────────────────────────

    #[test]
    fn controller_without_namespace() {
        assert_eq!(snake_controller("Index"), "index");
        assert_eq!(snake_controller("UserProfile"), "user_profile");
    }

    #[test]
    fn controller_preserves_namespace_dots() {
        assert_eq!(snake_controller("Blog.article"), "blog.article");
        assert_eq!(snake_controller("blog.Article"), "blog.article");
        assert_eq!(snake_controller("AdminPanel.UserList"), "admin_panel.user_list");
    }

    #[test]
    fn empty_controller_stays_empty() {
        assert_eq!(snake_controller(""), "");
    }

    // ── split_app_qualifier ─────────────────────────────────────────────

    #[test]
    fn split_inline_qualifier() {
        assert_eq!(split_app_qualifier("admin@home"), (Some("admin"), "home"));
    }

    #[test]
    fn split_leading_qualifier() {
        assert_eq!(split_app_qualifier("@admin:home"), (Some("admin"), "home"));
    }

    #[test]
    fn split_without_qualifier() {
        assert_eq!(split_app_qualifier("home"), (None, "home"));
    }

    #[test]
    fn split_leaves_bare_at_prefix_alone() {
        assert_eq!(split_app_qualifier("@admin"), (None, "@admin"));
    }

    // ── resolve_template_name ───────────────────────────────────────────

    #[test]
    fn empty_id_synthesizes_from_controller_and_action() {
        let name = resolve_template_name(&config(), &request("Blog.article", "view"), "");
        assert_eq!(name, "blog.article/view.twig");
    }

    #[test]
    fn empty_id_with_snake_rule_snakes_the_action() {
        let name = resolve_template_name(&config(), &request("index", "readInfo"), "");
        assert_eq!(name, "index/read_info.twig");
    }

    #[test]
    fn empty_id_with_original_rule_uses_raw_action() {
        let cfg = ViewConfig {
            naming: NamingRule::Original,
            ..ViewConfig::default()
        };
        let req = request("index", "readinfo").with_raw_action("ReadInfo");
        assert_eq!(resolve_template_name(&cfg, &req, ""), "index/ReadInfo.twig");
    }

    #[test]
    fn empty_id_with_as_is_rule_uses_stored_action() {
        let cfg = ViewConfig {
            naming: NamingRule::AsIs,
            ..ViewConfig::default()
        };
        let req = request("index", "readInfo").with_raw_action("READINFO");
        assert_eq!(resolve_template_name(&cfg, &req, ""), "index/readInfo.twig");
    }

    #[test]
    fn id_without_delimiter_gets_controller_prefix() {
        let name = resolve_template_name(&config(), &request("User", "index"), "detail");
        assert_eq!(name, "user/detail.twig");
    }

    #[test]
    fn id_with_delimiter_passes_through_unprefixed() {
        let name = resolve_template_name(&config(), &request("User", "index"), "shared/detail");
        assert_eq!(name, "shared/detail.twig");
    }

    #[test]
    fn colons_normalize_to_the_delimiter() {
        let name = resolve_template_name(&config(), &request("User", "index"), "shared:detail");
        assert_eq!(name, "shared/detail.twig");
    }

    #[test]
    fn custom_delimiter_joins_segments() {
        let cfg = config_with_delimiter("_");
        assert_eq!(
            resolve_template_name(&cfg, &request("Blog.article", "view"), ""),
            "blog.article_view.twig"
        );
        assert_eq!(
            resolve_template_name(&cfg, &request("User", "index"), "detail"),
            "user_detail.twig"
        );
        // Normalized separators count as the delimiter being present.
        assert_eq!(
            resolve_template_name(&cfg, &request("User", "index"), "shared/detail"),
            "shared_detail.twig"
        );
    }

    #[test]
    fn absolute_id_ignores_request_context() {
        let name = resolve_template_name(&config(), &request("Blog.article", "view"), "/a/b");
        assert_eq!(name, "a/b.twig");

        let cfg = config_with_delimiter(".");
        let name = resolve_template_name(&cfg, &request("Blog.article", "view"), "/a/b");
        assert_eq!(name, "a.b.twig");
    }

    #[test]
    fn empty_controller_skips_prefixing() {
        assert_eq!(
            resolve_template_name(&config(), &request("", "view"), "detail"),
            "detail.twig"
        );
        // Degenerate on purpose: nothing to synthesize a name from.
        assert_eq!(resolve_template_name(&config(), &request("", "view"), ""), ".twig");
    }

    #[test]
    fn leading_qualifier_resolves_like_a_plain_rule() {
        let name = resolve_template_name(&config(), &request("index", "index"), "@admin:home");
        assert_eq!(name, "index/home.twig");
    }

    #[test]
    fn inline_qualifier_resolves_like_a_plain_rule() {
        let name = resolve_template_name(&config(), &request("index", "index"), "admin@home");
        assert_eq!(name, "index/home.twig");
    }

    #[test]
    fn doubled_leading_slash_is_stripped() {
        let name = resolve_template_name(&config(), &request("index", "index"), "//a");
        assert_eq!(name, "a.twig");
    }

    // ── resolved_file_name ──────────────────────────────────────────────

    #[test]
    fn identifier_with_extension_is_verbatim() {
        let name = resolved_file_name(&config(), &request("User", "index"), "custom.twig");
        assert_eq!(name, "custom.twig");
    }

    #[test]
    fn identifier_without_extension_is_resolved() {
        let name = resolved_file_name(&config(), &request("User", "index"), "detail");
        assert_eq!(name, "user/detail.twig");
    }

    #[test]
    fn dotted_rule_counts_as_extension() {
        // The trailing dot segment reads as an extension, so the identifier
        // is used as typed.
        let name = resolved_file_name(&config(), &request("User", "index"), "blog.article");
        assert_eq!(name, "blog.article");
    }
}
