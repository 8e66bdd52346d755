//! HTML Document Composition
//!
//! Builds the full HTML document around the rendered markup: the collected
//! critical CSS, the client bundle reference, and the hydration payload
//! assigned to `window.__PRELOADED_STATE__`.

use crate::server::error::{ServerError, ServerResult};
use crate::store::Snapshot;

/// Well-known global the browser bootstrap reads the snapshot from
pub const PRELOADED_STATE_GLOBAL: &str = "__PRELOADED_STATE__";

/// Compose the response document for a rendered page
pub fn compose(markup: &str, css: &str, snapshot: &Snapshot, bundle_path: &str) -> ServerResult<String> {
    let state_json = serde_json::to_string(snapshot)
        .map_err(|e| ServerError::Render(format!("state snapshot serialization failed: {}", e)))?;
    let state_json = escape_inline_json(&state_json);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Movie searcher</title>
<link rel="stylesheet" href="/styles/main.css">
<style id="ssr-styles">{css}</style>
</head>
<body>
<div id="root">{markup}</div>
<script>window.{global} = {state_json}</script>
<script type="module" src="{bundle_path}" async></script>
</body>
</html>
"#,
        global = PRELOADED_STATE_GLOBAL,
    ))
}

/// Escape `<` so the payload cannot terminate its enclosing script tag.
///
/// JSON parsers treat `\u003c` identically to a literal `<`, so the
/// escaped text round-trips to the same value.
pub fn escape_inline_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Movie;
    use crate::store::SearchStatus;

    fn snapshot() -> Snapshot {
        Snapshot {
            query: "alien".to_string(),
            status: SearchStatus::Ready,
            results: vec![Movie {
                id: 1,
                title: "Alien".to_string(),
                year: 1979,
                genres: vec!["Horror".to_string()],
                overview: "A crew encounters a deadly creature".to_string(),
                poster: None,
                rating: 8.5,
            }],
            selected: None,
        }
    }

    #[test]
    fn test_escape_replaces_angle_brackets() {
        let escaped = escape_inline_json(r#"{"overview":"a </script> attack"}"#);
        assert!(!escaped.contains('<'));
        assert!(escaped.contains("\\u003c/script>"));
    }

    #[test]
    fn test_escaped_json_round_trips() {
        let json = serde_json::to_string(&"</script>").unwrap();
        let value: String = serde_json::from_str(&escape_inline_json(&json)).unwrap();
        assert_eq!(value, "</script>");
    }

    #[test]
    fn test_compose_embeds_all_sections() {
        let doc = compose(
            "<p>hello</p>",
            ".nav {}",
            &snapshot(),
            "/pkg/cinescope_ui.js",
        )
        .unwrap();

        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"<div id="root"><p>hello</p></div>"#));
        assert!(doc.contains(r#"<style id="ssr-styles">.nav {}</style>"#));
        assert!(doc.contains("window.__PRELOADED_STATE__ = "));
        assert!(doc.contains(r#"src="/pkg/cinescope_ui.js""#));
    }

    #[test]
    fn test_composed_state_parses_back_to_snapshot() {
        let snapshot = snapshot();
        let doc = compose("", "", &snapshot, "/pkg/app.js").unwrap();

        let marker = "window.__PRELOADED_STATE__ = ";
        let start = doc.find(marker).unwrap() + marker.len();
        let end = doc[start..].find("</script>").unwrap() + start;

        let parsed: Snapshot = serde_json::from_str(&doc[start..end]).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
