//! HTML shell that boots the prebuilt FastUI front-end

/// Version of the `@pydantic/fastui-prebuilt` bundle loaded from the CDN.
pub const PREBUILT_VERSION: &str = "0.0.23";

/// Render the landing document. The page carries no data of its own; the
/// bundle fetches `/api{path}` for whatever path the browser is on.
pub fn prebuilt_html(title: &str) -> String {
    let cdn = format!(
        "https://cdn.jsdelivr.net/npm/@pydantic/fastui-prebuilt@{}/dist/assets",
        PREBUILT_VERSION
    );
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
    <script type="module" crossorigin src="{cdn}/index.js"></script>
    <link rel="stylesheet" crossorigin href="{cdn}/index.css">
  </head>
  <body>
    <div id="root"></div>
  </body>
</html>
"#,
        title = escape(title),
        cdn = cdn,
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_loads_bundle() {
        let html = prebuilt_html("FastUI Demo");
        assert!(html.contains("<title>FastUI Demo</title>"));
        assert!(html.contains("fastui-prebuilt@0.0.23/dist/assets/index.js"));
        assert!(html.contains(r#"<div id="root"></div>"#));
    }

    #[test]
    fn title_is_escaped() {
        let html = prebuilt_html("<Users & Co>");
        assert!(html.contains("<title>&lt;Users &amp; Co&gt;</title>"));
    }
}
