use crate::parser::blocks::parse_blocks;
use crate::parser::comments::strip_comments;
use crate::style::flat::process_flat;
use crate::style::mapper::{has_scoped_class, SelectorMapper};
use crate::style::scss::process_blocks_to_scss;
use log::{debug, log_enabled, Level};
use rayon::prelude::*;

/// Selects the rendering path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Render nested SCSS instead of rewriting the flat text.
    pub nested: bool,
    /// Flat mode only: keep pseudo selectors and media blocks.
    pub keep_pseudos_and_media: bool,
}

/// The two renderings of one stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub clean: String,
    pub global: String,
}

impl Conversion {
    pub fn get(&self, mapper: SelectorMapper) -> &str {
        match mapper {
            SelectorMapper::Clean => &self.clean,
            SelectorMapper::Global => &self.global,
        }
    }
}

/// Convert one stylesheet into its clean and global forms.
pub fn convert(input: &str, options: &ConvertOptions) -> Conversion {
    let css = strip_comments(input);
    if log_enabled!(Level::Debug) && !has_scoped_class(&css) {
        debug!("no scoped classes in input, only restructuring");
    }

    if options.nested {
        let blocks = parse_blocks(&css);
        return Conversion {
            clean: process_blocks_to_scss(&blocks, SelectorMapper::Clean),
            global: process_blocks_to_scss(&blocks, SelectorMapper::Global),
        };
    }

    debug!("flat conversion, keep pseudos and media: {}", options.keep_pseudos_and_media);
    Conversion {
        clean: process_flat(&css, SelectorMapper::Clean, options.keep_pseudos_and_media),
        global: process_flat(&css, SelectorMapper::Global, options.keep_pseudos_and_media),
    }
}

/// Convert independent stylesheets in parallel. Results keep input order.
pub fn convert_many<S>(inputs: &[S], options: &ConvertOptions) -> Vec<Conversion>
where
    S: AsRef<str> + Sync,
{
    inputs
        .par_iter()
        .map(|input| convert(input.as_ref(), options))
        .collect()
}
