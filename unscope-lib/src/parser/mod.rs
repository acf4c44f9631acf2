pub mod blocks;
pub mod braces;
pub mod comments;
pub mod selectors;
