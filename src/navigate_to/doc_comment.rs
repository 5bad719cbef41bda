//! Documentation comment summaries.
//!
//! Symbols carry their documentation as raw comment text. Detail panes only
//! show the summary: the `<summary>` element of an XML doc comment, or the
//! first paragraph of any other comment style.

use regex::Regex;
use std::sync::LazyLock;

static SUMMARY_ELEMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<summary(?:\s[^>]*)?>(.*?)(?:</summary>|\z)").unwrap());
static XML_DOC_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^<(?:summary|remarks|returns|param|typeparam|exception|example|value|inheritdoc)\b",
    )
    .unwrap()
});
static SEE_PAIRED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)<(?:see|seealso)\s+(?:cref|langword|href)="(?:[A-Z]:)?([^"]*)"\s*>(.*?)</(?:see|seealso)\s*>"#,
    )
    .unwrap()
});
static CREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(?:see|seealso)\s+(?:cref|langword|href)="(?:[A-Z]:)?([^"]*)"\s*/>"#).unwrap()
});
static PARAMREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<(?:paramref|typeparamref)\s+name="([^"]*)"\s*/>"#).unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?[A-Za-z][^>]*>").unwrap());
static HTML_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"</?(?:p|b|i|u|em|strong|code|tt|pre|a|br|hr|ul|ol|li|dl|dt|dd|small|sub|sup|span|div)\b[^>]*>",
    )
    .unwrap()
});
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Raw documentation attached to a symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationComment {
    raw: String,
}

impl DocumentationComment {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Summary section text, or `None` if the comment has no usable summary.
    pub fn summary_text(&self) -> Option<String> {
        let body = strip_comment_markers(&self.raw);

        let summary = match SUMMARY_ELEMENT_RE.captures(&body) {
            Some(caps) => xml_inner_text(caps.get(1).map_or("", |m| m.as_str())),
            // XML documentation without a <summary> element has no summary
            None if XML_DOC_START_RE.is_match(body.trim_start()) => return None,
            None => html_inner_text(&first_paragraph(&body)),
        };

        let summary = WHITESPACE_RE.replace_all(summary.trim(), " ").into_owned();
        if summary.is_empty() {
            None
        } else {
            Some(summary)
        }
    }
}

/// Remove `///`, `/** */`, leading `*` and `#` markers line by line.
fn strip_comment_markers(raw: &str) -> String {
    raw.lines()
        .map(|line| {
            let mut line = line.trim();
            for prefix in ["/**", "/*!", "/*", "///", "//!", "//", "#"] {
                if let Some(rest) = line.strip_prefix(prefix) {
                    line = rest;
                    break;
                }
            }
            if let Some(rest) = line.strip_suffix("*/") {
                line = rest;
            }
            let line = line.trim();
            line.strip_prefix('*').map_or(line, str::trim)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn first_paragraph(body: &str) -> String {
    body.lines()
        .skip_while(|line| line.trim().is_empty())
        .take_while(|line| !line.trim().is_empty() && !line.trim_start().starts_with('@'))
        .collect::<Vec<_>>()
        .join(" ")
}

fn xml_inner_text(fragment: &str) -> String {
    // Paired <see> keeps its text, or the target when the text is empty
    let text = SEE_PAIRED_RE.replace_all(fragment, |caps: &regex::Captures| {
        let inner = caps[2].trim();
        if inner.is_empty() {
            caps[1].to_string()
        } else {
            inner.to_string()
        }
    });
    let text = CREF_RE.replace_all(&text, "$1");
    let text = PARAMREF_RE.replace_all(&text, "$1");
    let text = TAG_RE.replace_all(&text, "");
    decode_entities(&text)
}

/// Only known HTML markup is stripped so generics like `Vec<T>` survive.
fn html_inner_text(paragraph: &str) -> String {
    decode_entities(&HTML_TAG_RE.replace_all(paragraph, ""))
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
