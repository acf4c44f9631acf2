use crate::style::mapper::SelectorMapper;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static PSEUDO_ELEMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"::(?:file-selector-button|placeholder|selection|backdrop|before|after|marker|part\([^)]*\)|slotted\([^)]*\))",
    )
    .unwrap()
});

static VENDOR_PSEUDO_ELEMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"::-(?:webkit|moz|ms|o)-[a-z-]+").unwrap());

// Longer names come before their prefixes: `:focus-within` before `:focus`.
static PSEUDO_CLASS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r":(?:focus-within|focus-visible|placeholder-shown|first-child|last-child|nth-child\([^)]*\)|placeholder|disabled|checked|visited|active|before|after|hover|focus|link)",
    )
    .unwrap()
});

/// A media block with at most one level of nested braces.
static MEDIA_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@media[^{]+\{(?:[^{}]|\{[^{}]*\})*\}").unwrap());

static SELECTOR_HEAD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^{}]+)\{").unwrap());

/// Rewrite scoped classes in place without parsing the stylesheet.
///
/// With `keep_pseudos_and_media` off, a fixed vocabulary of pseudo-classes
/// and pseudo-elements is removed wherever it appears, along with vendor
/// pseudo-elements and whole `@media` blocks. Media blocks nested more than
/// one level deep are only partially removed.
pub fn process_flat(css: &str, mapper: SelectorMapper, keep_pseudos_and_media: bool) -> String {
    let mapped = mapper.map(css);

    if keep_pseudos_and_media {
        SELECTOR_HEAD_RE
            .replace_all(&mapped, |caps: &regex::Captures| format!("{}{{", mapper.map(&caps[1])))
            .into_owned()
    } else {
        let out = PSEUDO_ELEMENT_RE.replace_all(&mapped, "");
        let out = VENDOR_PSEUDO_ELEMENT_RE.replace_all(&out, "");
        let out = PSEUDO_CLASS_RE.replace_all(&out, "");
        let media_count = MEDIA_BLOCK_RE.find_iter(&out).count();
        let out = MEDIA_BLOCK_RE.replace_all(&out, "");
        debug!("{} flat pass removed {} media blocks", mapper.name(), media_count);
        out.into_owned()
    }
}
