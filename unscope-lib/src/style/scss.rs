//! Regroups parsed rules into nested SCSS.
//!
//! Rules are bucketed by their rewritten base selector. Declarations of a
//! selector with a trailing pseudo chain go into a `&<pseudo>` group inside
//! the same bucket, so `.btn` and `.btn:hover` render as one block. Media
//! blocks are rendered recursively and emitted after the root buckets.

use crate::parser::blocks::Block;
use crate::parser::selectors::{extract_trailing_pseudo, split_selector_list};
use crate::style::mapper::SelectorMapper;
use indexmap::IndexMap;
use log::{debug, trace};

/// Declarations collected for one base selector.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Bucket {
    /// Bodies of rules that target the base selector itself.
    pub own_declarations: Vec<String>,
    /// Bodies keyed by pseudo chain, in first-seen order.
    pub pseudo_groups: IndexMap<String, Vec<String>>,
}

/// Buckets of one nesting scope, in first-seen order of their base selector.
#[derive(Debug, Default, Clone)]
pub struct BucketMap {
    buckets: IndexMap<String, Bucket>,
}

impl BucketMap {
    pub fn add(&mut self, base: String, pseudo: &str, declarations: &str) {
        let bucket = self.buckets.entry(base).or_default();
        if pseudo.is_empty() {
            bucket.own_declarations.push(declarations.to_string());
        } else {
            bucket
                .pseudo_groups
                .entry(pseudo.to_string())
                .or_default()
                .push(declarations.to_string());
        }
    }

    pub fn get(&self, base: &str) -> Option<&Bucket> {
        self.buckets.get(base)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Bucket)> {
        self.buckets.iter()
    }

    fn render_into(&self, out: &mut String) {
        for (base, bucket) in &self.buckets {
            out.push_str(base);
            out.push_str(" {\n");
            push_lines(out, &bucket.own_declarations.join("\n"), "  ");

            for (pseudo, declarations) in &bucket.pseudo_groups {
                let merged = declarations.join("\n");
                if merged.trim().is_empty() {
                    continue;
                }
                out.push_str("  &");
                out.push_str(pseudo);
                out.push_str(" {\n");
                push_lines(out, &merged, "    ");
                out.push_str("  }\n");
            }
            out.push_str("}\n\n");
        }
    }
}

/// Emit each non-blank line of `text`, trimmed and prefixed with `indent`.
fn push_lines(out: &mut String, text: &str, indent: &str) {
    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        out.push_str(indent);
        out.push_str(line);
        out.push('\n');
    }
}

/// Bucket the rules of one scope. Media and raw blocks are not visited.
pub fn bucket_rules(blocks: &[Block], mapper: SelectorMapper) -> BucketMap {
    let mut buckets = BucketMap::default();
    for block in blocks {
        let Block::Rule { selector, body } = block else {
            continue;
        };
        for single in split_selector_list(selector) {
            let parts = extract_trailing_pseudo(&single);
            let base = mapper.map(&parts.base);
            trace!("{:?} -> {:?} + {:?}", single, base, parts.pseudo);
            buckets.add(base, &parts.pseudo, body);
        }
    }
    buckets
}

/// Output that follows the root buckets, in source order.
enum Deferred<'a> {
    Media { header: &'a str, scss: String },
    Raw(&'a str),
}

/// Render `blocks` as nested SCSS using `mapper` on every base selector.
///
/// Statement at-rules are hoisted to the top of their scope, other raw
/// at-rules are copied verbatim after the root buckets together with the
/// media blocks.
pub fn process_blocks_to_scss(blocks: &[Block], mapper: SelectorMapper) -> String {
    // 1) rules of this scope go into buckets
    let buckets = bucket_rules(blocks, mapper);

    // 2) media and raw at-rules wait until the buckets are out
    let mut statements = Vec::new();
    let mut deferred = Vec::new();

    for block in blocks {
        match block {
            Block::Rule { .. } => {}
            Block::Media { header, children } => deferred.push(Deferred::Media {
                header,
                scss: process_blocks_to_scss(children, mapper),
            }),
            Block::Raw { text } if block.is_statement() => statements.push(text.trim()),
            Block::Raw { text } => deferred.push(Deferred::Raw(text)),
        }
    }
    debug!(
        "{} scss scope: {} buckets, {} deferred blocks",
        mapper.name(),
        buckets.len(),
        deferred.len()
    );

    // 3) render: statements, buckets, then deferred blocks
    let mut out = String::new();
    for statement in &statements {
        out.push_str(statement);
        out.push('\n');
    }
    out.push('\n');

    buckets.render_into(&mut out);

    for item in deferred {
        match item {
            Deferred::Media { header, scss } => {
                let inner = scss.trim();
                if inner.is_empty() {
                    continue;
                }
                out.push_str(header);
                out.push_str(" {\n");
                for line in inner.lines() {
                    if !line.trim().is_empty() {
                        out.push_str("  ");
                        out.push_str(line);
                    }
                    out.push('\n');
                }
                out.push_str("}\n\n");
            }
            Deferred::Raw(text) => {
                out.push_str(text.trim());
                out.push_str("\n\n");
            }
        }
    }

    let mut rendered = out.trim().to_string();
    rendered.push('\n');
    rendered
}
