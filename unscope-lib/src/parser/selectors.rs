use once_cell::sync::Lazy;
use regex::Regex;

/// A run of `:name` / `::name` segments, each with an optional single-level
/// argument list, anchored at the end of the selector.
static TRAILING_PSEUDO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:::?[a-zA-Z-]+(?:\([^)]*\))?)+$").unwrap());

/// One selector split into the part that gets rewritten and the trailing
/// pseudo-class/pseudo-element chain that gets nested with `&`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorParts {
    pub base: String,
    /// Empty when the selector has no trailing pseudo run.
    pub pseudo: String,
}

impl SelectorParts {
    fn whole(selector: &str) -> Self {
        SelectorParts {
            base: selector.to_string(),
            pseudo: String::new(),
        }
    }
}

/// Split `a, b:not(c, d), e` on top-level commas.
///
/// Commas inside parentheses are kept. Each selector is trimmed; empty
/// selectors are dropped.
pub fn split_selector_list(selector_text: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut buffer = String::new();
    let mut depth = 0usize;

    for ch in selector_text.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                push_trimmed(&mut parts, &buffer);
                buffer.clear();
                continue;
            }
            _ => {}
        }
        buffer.push(ch);
    }
    push_trimmed(&mut parts, &buffer);
    parts
}

fn push_trimmed(parts: &mut Vec<String>, selector: &str) {
    let trimmed = selector.trim();
    if !trimmed.is_empty() {
        parts.push(trimmed.to_string());
    }
}

/// Separate `.foo:hover::before` into `.foo` and `:hover::before`.
///
/// The run is only split off when something is left in front of it and
/// that something does not end in whitespace or a combinator: `:root` and
/// `.list > :first-child` are returned whole.
pub fn extract_trailing_pseudo(selector: &str) -> SelectorParts {
    let selector = selector.trim();
    let Some(run) = TRAILING_PSEUDO_RE.find(selector) else {
        return SelectorParts::whole(selector);
    };

    let base = &selector[..run.start()];
    let detached = match base.chars().last() {
        None => true,
        Some(ch) => ch.is_whitespace() || matches!(ch, '>' | '+' | '~' | ','),
    };
    if detached {
        return SelectorParts::whole(selector);
    }

    SelectorParts {
        base: base.to_string(),
        pseudo: run.as_str().to_string(),
    }
}
