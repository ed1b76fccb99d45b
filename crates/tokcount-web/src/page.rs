//! Single-page UI with metadata injected into the head

use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;
use tokcount_config::PageMeta;
use tokcount_core::Palette;

const TEMPLATE: &str = include_str!("page.html");

/// Values the page is rendered from
pub struct PageContext<'a> {
    pub meta: &'a PageMeta,
    pub models: &'a [String],
    pub selected_model: &'a str,
    pub example_text: &'a str,
    pub encoding: &'a str,
    pub palette: &'a Palette,
}

pub fn render_page(ctx: &PageContext<'_>) -> String {
    fill_template(TEMPLATE, |key| {
        let value = match key {
            "title" => encode_double_quoted_attribute(&ctx.meta.title).into_owned(),
            "description" => encode_double_quoted_attribute(&ctx.meta.description).into_owned(),
            "url" => encode_double_quoted_attribute(&ctx.meta.url).into_owned(),
            "image_url" => encode_double_quoted_attribute(&ctx.meta.image_url).into_owned(),
            "site_name" => encode_double_quoted_attribute(&ctx.meta.site_name).into_owned(),
            "twitter_handle" => {
                encode_double_quoted_attribute(&ctx.meta.twitter_handle).into_owned()
            }
            "encoding" => encode_text(ctx.encoding).into_owned(),
            "example_text" => encode_text(ctx.example_text).into_owned(),
            "example_json" => script_string(ctx.example_text),
            "model_options" => model_options(ctx.models, ctx.selected_model),
            "palette_css" => palette_css(ctx.palette),
            _ => return None,
        };
        Some(value)
    })
}

/// Single pass over `{{key}}` placeholders so substituted values are never rescanned
fn fill_template(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                match lookup(key) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push_str("{{");
                        out.push_str(key);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn model_options(models: &[String], selected: &str) -> String {
    let mut html = String::new();
    for model in models {
        let selected_attr = if model == selected { " selected" } else { "" };
        let model = encode_double_quoted_attribute(model);
        let _ = writeln!(
            html,
            "    <option value=\"{}\"{}>{}</option>",
            model, selected_attr, model
        );
    }
    html
}

fn palette_css(palette: &Palette) -> String {
    palette
        .colors()
        .iter()
        .map(|color| format!("  .tok-{} {{ background: {}; }}\n", color.name(), color.hex()))
        .collect()
}

/// JSON string literal that is safe to embed inside a `<script>` element
fn script_string(text: &str) -> String {
    serde_json::Value::String(text.to_string())
        .to_string()
        .replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(meta: &PageMeta, example: &str) -> String {
        let models = vec!["gpt-3.5-turbo".to_string(), "gpt-4".to_string()];
        render_page(&PageContext {
            meta,
            models: &models,
            selected_model: "gpt-4",
            example_text: example,
            encoding: "cl100k_base",
            palette: &Palette::default(),
        })
    }

    #[test]
    fn test_metadata_is_injected() {
        let meta = PageMeta::default();
        let html = render(&meta, "hello");

        assert!(html.contains("<title>TokenCounter | Tokenize and estimate your LLM costs</title>"));
        assert!(html.contains(r#"<meta property="og:url" content="https://www.tokencounter.io">"#));
        assert!(html.contains(r#"<meta property="og:image" content="/ogg.png">"#));
        assert!(html.contains(r#"<meta name="twitter:creator" content="@thecalebf">"#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_metadata_is_escaped() {
        let meta = PageMeta {
            title: "A \"quoted\" <title>".to_string(),
            ..PageMeta::default()
        };
        let html = render(&meta, "x");

        assert!(!html.contains("<title>A \"quoted\" <title>"));
        assert!(html.contains("&quot;quoted&quot;"));
        assert!(html.contains("&lt;title&gt;"));
    }

    #[test]
    fn test_model_options_mark_selection() {
        let html = render(&PageMeta::default(), "x");
        assert!(html.contains(r#"<option value="gpt-4" selected>gpt-4</option>"#));
        assert!(html.contains(r#"<option value="gpt-3.5-turbo">gpt-3.5-turbo</option>"#));
    }

    #[test]
    fn test_example_text_embedding() {
        let html = render(&PageMeta::default(), "a < b </script> \"q\"");
        assert!(html.contains("<textarea id=\"input\">\na &lt; b &lt;/script&gt; \"q\"</textarea>"));
        assert!(html.contains(r#"const exampleText = "a < b <\/script> \"q\"";"#));
    }

    #[test]
    fn test_example_text_keeps_leading_newline() {
        // The parser eats one newline after <textarea>, so the template supplies it
        let html = render(&PageMeta::default(), "\nsecond line");
        assert!(html.contains("<textarea id=\"input\">\n\nsecond line</textarea>"));
    }

    #[test]
    fn test_script_drops_stale_responses() {
        let html = render(&PageMeta::default(), "x");
        // Once before and once after the body is parsed
        assert_eq!(html.matches("seq !== latest").count(), 2);
    }

    #[test]
    fn test_palette_css() {
        let html = render(&PageMeta::default(), "x");
        assert!(html.contains(".tok-blue { background: #bfdbfe; }"));
        assert!(html.contains(".tok-pink"));
    }

    #[test]
    fn test_fill_template_single_pass() {
        let out = fill_template("{{a}} {{b}} {{missing}} {{open", |key| match key {
            "a" => Some("{{b}}".to_string()),
            "b" => Some("B".to_string()),
            _ => None,
        });
        assert_eq!(out, "{{b}} B {{missing}} {{open");
    }
}
