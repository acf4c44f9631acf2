//! Rewrites stylesheets written against VTEX-style scoped class names
//! (`.vtex-store-4-x-productTitle`) into a readable "clean" form and a
//! CSS-modules-safe "global" form, optionally regrouped as nested SCSS.

pub mod convert;
pub mod error;
pub mod host;
pub mod parser;
pub mod style;

pub use convert::{convert, convert_many, Conversion, ConvertOptions};
pub use error::{HostError, Result};
pub use host::ConversionHost;
pub use style::mapper::SelectorMapper;
