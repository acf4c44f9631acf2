use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Remove every `/* ... */` block comment.
///
/// An unterminated comment is left in place; the block parser will treat
/// whatever follows it as ordinary text.
pub fn strip_comments(css: &str) -> String {
    let stripped = COMMENT_RE.replace_all(css, "");
    if stripped.contains("/*") {
        warn!("unterminated block comment left in input");
    }
    stripped.into_owned()
}
