use pretty_assertions::assert_eq;
use unscope_lib::parser::blocks::{parse_blocks, Block};
use unscope_lib::{convert, ConvertOptions};

const STORE_CSS: &str = r#"
/* product page */
.vtex-store-components-3-x-productNameContainer,
.vtex-store-components-3-x-productBrand {
  font-size: 1.25rem;
  color: #333;
}

.vtex-store-components-3-x-productNameContainer:hover {
  color: #000;
}

.vtex-flex-layout-0-x-flexRow--home .vtex-store-components-3-x-productBrand::after {
  content: "{new}";
}

@media (min-width: 1026px) {
  .vtex-store-components-3-x-productNameContainer {
    font-size: 2rem;
  }
}

@font-face {
  font-family: "Store";
  src: url(store.woff2);
}
"#;

fn nested() -> ConvertOptions {
    ConvertOptions {
        nested: true,
        ..Default::default()
    }
}

#[test]
fn test_nested_clean_output() {
    let expected = r#".productNameContainer {
  font-size: 1.25rem;
  color: #333;
  &:hover {
    color: #000;
  }
}

.productBrand {
  font-size: 1.25rem;
  color: #333;
}

.flexRow--home .productBrand {
  &::after {
    content: "{new}";
  }
}

@media (min-width: 1026px) {
  .productNameContainer {
    font-size: 2rem;
  }
}

@font-face {
  font-family: "Store";
  src: url(store.woff2);
}
"#;
    assert_eq!(convert(STORE_CSS, &nested()).clean, expected);
}

#[test]
fn test_nested_global_output() {
    let global = convert(STORE_CSS, &nested()).global;
    assert!(global.starts_with(
        ":global(.vtex-store-components-3-x-productNameContainer) {\n  font-size: 1.25rem;"
    ));
    assert!(global.contains(
        ":global(.vtex-flex-layout-0-x-flexRow--home) :global(.vtex-store-components-3-x-productBrand) {\n  &::after {"
    ));
    assert!(global.contains(
        "@media (min-width: 1026px) {\n  :global(.vtex-store-components-3-x-productNameContainer) {\n    font-size: 2rem;"
    ));
}

#[test]
fn test_media_rules_are_not_duplicated_at_root() {
    let clean = convert(STORE_CSS, &nested()).clean;
    assert_eq!(clean.matches("font-size: 2rem;").count(), 1);
    let media_at = clean.find("@media").unwrap();
    assert!(clean.find("font-size: 2rem;").unwrap() > media_at);
}

#[test]
fn test_every_declaration_survives_parsing() {
    fn count(blocks: &[Block]) -> usize {
        blocks
            .iter()
            .map(|block| match block {
                Block::Rule { body, .. } => body.matches(';').count(),
                Block::Media { children, .. } => count(children),
                Block::Raw { text } => text.matches(';').count(),
            })
            .sum()
    }
    let stripped = unscope_lib::parser::comments::strip_comments(STORE_CSS);
    assert_eq!(count(&parse_blocks(&stripped)), stripped.matches(';').count());
}

#[test]
fn test_flat_output_strips_pseudos_and_media() {
    let out = convert(STORE_CSS, &ConvertOptions::default());
    let expected_clean = r#"

.productNameContainer,
.productBrand {
  font-size: 1.25rem;
  color: #333;
}

.productNameContainer {
  color: #000;
}

.flexRow--home .productBrand {
  content: "{new}";
}



@font-face {
  font-family: "Store";
  src: url(store.woff2);
}
"#;
    assert_eq!(out.clean, expected_clean);
    assert!(out.global.contains(":global(.vtex-store-components-3-x-productNameContainer) {\n  color: #000;"));
    assert!(!out.global.contains("@media"));
}

#[test]
fn test_flat_keep_mode() {
    let options = ConvertOptions {
        nested: false,
        keep_pseudos_and_media: true,
    };
    let out = convert(STORE_CSS, &options);
    assert!(out.clean.contains(".productNameContainer:hover {"));
    assert!(out.clean.contains("@media (min-width: 1026px) {\n  .productNameContainer {"));
    assert!(out.global.contains(":global(.vtex-store-components-3-x-productBrand)::after {"));
    assert!(!out.global.contains(":global(:global("));
}
