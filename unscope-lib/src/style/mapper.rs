use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Vendor prefix every scoped class starts with.
pub const SCOPED_PREFIX: &str = "vtex";

/// Opening of the scope-escape marker understood by CSS-modules tooling.
pub const GLOBAL_OPEN: &str = ":global(";

/// `.vtex-<app>[-<digit>]-x-<suffix>`, optionally already wrapped in
/// `:global(`.
static SCOPED_CLASS_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"(?P<wrap>{}\s*)?(?P<class>\.{}-[a-z0-9-]+-(?:[0-9]-)?x-(?P<suffix>[a-zA-Z0-9_-]+))",
        regex::escape(GLOBAL_OPEN),
        SCOPED_PREFIX
    );
    Regex::new(&pattern).unwrap()
});

/// How scoped class names are rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorMapper {
    /// `.vtex-store-4-x-title` becomes `.title`.
    Clean,
    /// `.vtex-store-4-x-title` becomes `:global(.vtex-store-4-x-title)`.
    Global,
}

impl SelectorMapper {
    /// Rewrite every scoped class in `text`. Text without scoped classes is
    /// returned unchanged.
    ///
    /// Classes already inside `:global(...)` are left alone by `Global`, so
    /// mapping twice gives the same result as mapping once.
    pub fn map(&self, text: &str) -> String {
        SCOPED_CLASS_RE
            .replace_all(text, |caps: &Captures| {
                let wrap = caps.name("wrap").map_or("", |m| m.as_str());
                match self {
                    SelectorMapper::Clean => format!("{}.{}", wrap, &caps["suffix"]),
                    SelectorMapper::Global if !wrap.is_empty() => caps[0].to_string(),
                    SelectorMapper::Global => format!("{}{})", GLOBAL_OPEN, &caps["class"]),
                }
            })
            .into_owned()
    }

    pub fn name(&self) -> &'static str {
        match self {
            SelectorMapper::Clean => "clean",
            SelectorMapper::Global => "global",
        }
    }
}

/// True when `text` mentions at least one scoped class.
pub fn has_scoped_class(text: &str) -> bool {
    SCOPED_CLASS_RE.is_match(text)
}
