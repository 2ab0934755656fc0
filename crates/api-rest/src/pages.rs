//! HTML pages for the browser form.
//!
//! Pages are small enough to build with `format!`. Every piece of user text passes through
//! [`escape_html`] before it is embedded.

use precis_charts::ChartKind;

const STYLE: &str = "body{font-family:sans-serif;max-width:960px;margin:2em auto;padding:0 1em}\
textarea{width:100%;min-height:16em}pre{white-space:pre-wrap;background:#f6f6f6;padding:1em}\
img{max-width:100%;display:block;margin:1em 0}.notice{color:#8a4b00}";

/// Escapes the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape_html(title),
    )
}

/// The input form.
pub fn index_page(default_sentences: usize) -> String {
    layout(
        "Text Summariser",
        &format!(
            "<h1>Text Summariser</h1>\n\
             <form action=\"/summarize\" method=\"post\">\n\
             <label for=\"text\">Text</label>\n\
             <textarea id=\"text\" name=\"text\" required></textarea>\n\
             <label for=\"sentences\">Sentences</label>\n\
             <input id=\"sentences\" name=\"sentences\" type=\"number\" min=\"1\" value=\"{default_sentences}\">\n\
             <button type=\"submit\">Summarise</button>\n\
             </form>"
        ),
    )
}

/// Chart images to embed on the result page.
pub struct ChartLinks {
    pub urls: Vec<(ChartKind, String)>,
}

/// The result page: original text, summary and either the charts or a notice.
pub fn result_page(text: &str, summary: &str, charts: Option<&ChartLinks>) -> String {
    let summary_html = if summary.is_empty() {
        "<p class=\"notice\">There was not enough text to summarise.</p>".to_string()
    } else {
        format!("<p>{}</p>", escape_html(summary))
    };

    let charts_html = match charts {
        Some(links) => links
            .urls
            .iter()
            .map(|(kind, url)| {
                format!(
                    "<img src=\"{}\" alt=\"{}\">",
                    escape_html(url),
                    escape_html(kind.title())
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        None => "<p class=\"notice\">No charts: the summary has no words to chart.</p>".to_string(),
    };

    layout(
        "Summary",
        &format!(
            "<h1>Summary</h1>\n{summary_html}\n\
             <h2>Charts</h2>\n{charts_html}\n\
             <h2>Original text</h2>\n<pre>{}</pre>\n\
             <p><a href=\"/\">Summarise another text</a></p>",
            escape_html(text)
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_index_page_has_text_field() {
        let page = index_page(3);

        assert!(page.contains("name=\"text\""));
        assert!(page.contains("action=\"/summarize\""));
        assert!(page.contains("value=\"3\""));
    }

    #[test]
    fn test_result_page_escapes_user_text() {
        let page = result_page("<script>x</script>", "<b>bold</b>", None);

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn test_result_page_embeds_charts() {
        let links = ChartLinks {
            urls: vec![(ChartKind::WordCloud, "/static/charts/abc/wordcloud.png".into())],
        };
        let page = result_page("text", "summary", Some(&links));

        assert!(page.contains("<img src=\"/static/charts/abc/wordcloud.png\" alt=\"Word Cloud\">"));
    }

    #[test]
    fn test_result_page_empty_summary_notice() {
        let page = result_page("", "", None);

        assert!(page.contains("not enough text"));
        assert!(page.contains("No charts"));
    }
}
