use gtk::gdk::Display;
use gtk::gio::File;
use gtk::{CssProvider, STYLE_PROVIDER_PRIORITY_USER};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use pblite::FontSpec;

/// CSS class carried by the main window; font rules are scoped to it.
pub const WINDOW_CLASS: &str = "pblite";

/// Path of the optional user stylesheet layered over the bundled one.
pub fn user_stylesheet_path() -> Option<PathBuf> {
    dirs::config_dir().map(|path| path.join("pblite").join("style.css"))
}

/// Loads the user stylesheet, if present, at user priority.
///
/// Returns the provider so the caller can remove it again.
pub fn load_user_css_if_exists(display: &Display) -> Option<CssProvider> {
    let path = user_stylesheet_path()?;

    if !path.exists() {
        debug!("No user stylesheet at {}", path.display());
        return None;
    }

    let provider = CssProvider::new();
    provider.load_from_file(&File::for_path(&path));

    gtk::style_context_add_provider_for_display(display, &provider, STYLE_PROVIDER_PRIORITY_USER);
    debug!("Loaded user stylesheet from {}", path.display());

    Some(provider)
}

const URL_MARKER: &str = "url(\"";

/// Turns every absolute-path `url("...")` target in `css` into a `file://`
/// URI.
///
/// GTK resolves bare paths against the provider's file, and stylesheets
/// loaded from memory have none. Targets with a scheme or a relative path
/// are left unchanged.
pub fn file_uris(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut rest = css;

    while let Some(start) = rest.find(URL_MARKER) {
        let (head, tail) = rest.split_at(start + URL_MARKER.len());
        out.push_str(head);

        let Some(end) = tail.find('"') else {
            rest = tail;
            break;
        };
        let target = &tail[..end];

        if Path::new(target).is_absolute() {
            match glib::filename_to_uri(target, None) {
                Ok(uri) => out.push_str(&uri),
                Err(e) => {
                    warn!("Cannot turn {target} into a file URI: {e}");
                    out.push_str(target);
                }
            }
        } else {
            out.push_str(target);
        }
        rest = &tail[end..];
    }

    out.push_str(rest);
    out
}

/// CSS rule applying `font` to the main window.
pub fn font_rule(font: &FontSpec) -> String {
    format!(
        "window.{WINDOW_CLASS} {{ font-family: \"{}\"; font-size: {}pt; font-weight: {}; }}",
        font.family.replace('"', "\\\""),
        font.point_size,
        font.weight
    )
}

/// Bundled stylesheet followed by the window font rule.
pub fn compose(css: &str, font: &FontSpec) -> String {
    format!("{css}\n{}\n", font_rule(font))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_becomes_file_uri() {
        let css = r#"headerbar { background-image: url("/opt/pblite/res/img/logo.svg"); }"#;
        assert_eq!(
            file_uris(css),
            r#"headerbar { background-image: url("file:///opt/pblite/res/img/logo.svg"); }"#
        );
    }

    #[test]
    fn file_uri_escapes_spaces() {
        let out = file_uris(r#"a { background-image: url("/opt/my res/x.png"); }"#);
        assert!(out.contains(r#"url("file:///opt/my%20res/x.png")"#));
    }

    #[test]
    fn file_uris_converts_every_url() {
        let css = "a { background-image: url(\"/r/a.png\"); }\nb { background-image: url(\"/r/b.png\"); }";
        let out = file_uris(css);
        assert_eq!(out.matches("url(\"file:///r/").count(), 2);
    }

    #[test]
    fn file_uris_leaves_relative_and_schemed_urls() {
        let css = r#"a { background-image: url("img/a.png"); } b { background-image: url("resource:///org/pblite/b.png"); }"#;
        assert_eq!(file_uris(css), css);
    }

    #[test]
    fn file_uris_keeps_unterminated_url() {
        let css = r#"a { background-image: url("/r/a.png"#;
        assert_eq!(file_uris(css), css);
    }

    #[test]
    fn font_rule_uses_all_fields() {
        let rule = font_rule(&FontSpec::default());
        assert_eq!(
            rule,
            "window.pblite { font-family: \"Open Sans\"; font-size: 8pt; font-weight: 400; }"
        );
    }

    #[test]
    fn font_rule_escapes_quotes() {
        let font = FontSpec {
            family: "Bad\"Font".into(),
            ..FontSpec::default()
        };
        assert!(font_rule(&font).contains("\"Bad\\\"Font\""));
    }

    #[test]
    fn compose_places_font_rule_last() {
        let out = compose("label { color: red; }", &FontSpec::default());
        assert!(out.starts_with("label { color: red; }\n"));
        assert!(out.trim_end().ends_with("font-weight: 400; }"));
    }
}
