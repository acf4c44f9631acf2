use crate::parser::braces::{find_matching_brace, find_statement_end};
use log::{debug, trace, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static MEDIA_HEADER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^@media\b").unwrap());

/// Media queries nested deeper than this are kept as opaque `Raw` blocks.
pub const MAX_NESTING_DEPTH: usize = 32;

/// One top-level structural unit of a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `selector { body }`, body left as raw declaration text.
    Rule { selector: String, body: String },
    /// `@media ... { children }`
    Media { header: String, children: Vec<Block> },
    /// Any other at-rule, verbatim. Statement at-rules (`@import ...;`) have
    /// no braces.
    Raw { text: String },
}

impl Block {
    /// True for a block-less at-rule such as `@import` or `@charset`.
    pub fn is_statement(&self) -> bool {
        matches!(self, Block::Raw { text } if !text.contains('{'))
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Rule { selector, body } => write!(f, "{} {{ {} }}", selector, body),
            Block::Media { header, children } => {
                write!(f, "{} {{", header)?;
                for child in children {
                    write!(f, " {}", child)?;
                }
                write!(f, " }}")
            }
            Block::Raw { text } => f.write_str(text),
        }
    }
}

/// Split stylesheet text into rules, media blocks and opaque at-rules.
///
/// Parsing stops quietly at the first block that has no `{` or is never
/// closed; everything parsed before that point is returned.
pub fn parse_blocks(css: &str) -> Vec<Block> {
    let blocks = parse_at_depth(css, 0);
    debug!("parsed {} top-level blocks", blocks.len());
    blocks
}

fn parse_at_depth(css: &str, depth: usize) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut pos = 0;

    loop {
        // skip whitespace between blocks
        let rest = &css[pos..];
        let trimmed = rest.trim_start();
        if trimmed.is_empty() {
            break;
        }
        pos += rest.len() - trimmed.len();

        // 1) block-less at-rules end at their own top-level `;`
        if trimmed.starts_with('@') {
            if let Some(semi) = find_statement_end(trimmed).map(|offset| pos + offset) {
                let text = css[pos..=semi].to_string();
                trace!("statement at-rule: {}", text);
                blocks.push(Block::Raw { text });
                pos = semi + 1;
                continue;
            }
        }

        // 2) everything else needs a closed `{ ... }`
        let Some(brace) = trimmed.find('{').map(|offset| pos + offset) else {
            trace!("no block after {:?}, stopping", trimmed);
            break;
        };
        let Some(close) = find_matching_brace(css, brace) else {
            warn!("unterminated block at byte {}, ignoring the rest", pos);
            break;
        };

        // 3) classify by header: media recurses, other at-rules stay opaque
        let header = css[pos..brace].trim();
        if header.starts_with('@') {
            if !MEDIA_HEADER_RE.is_match(header) {
                blocks.push(Block::Raw {
                    text: css[pos..=close].to_string(),
                });
            } else if depth + 1 >= MAX_NESTING_DEPTH {
                warn!("media nesting deeper than {}, kept verbatim", MAX_NESTING_DEPTH);
                blocks.push(Block::Raw {
                    text: css[pos..=close].to_string(),
                });
            } else {
                blocks.push(Block::Media {
                    header: header.to_string(),
                    children: parse_at_depth(&css[brace + 1..close], depth + 1),
                });
            }
        } else {
            blocks.push(Block::Rule {
                selector: header.to_string(),
                body: css[brace + 1..close].trim().to_string(),
            });
        }

        pos = close + 1;
    }

    blocks
}
