//! Tests for the markup serializer

use rstoc::builder::OutlineBuilder;
use rstoc::markup::to_markup;
use rstoc::util::testing;

const SAMPLE_LINES: [&str; 5] = [
    "lang:en",
    "  * 001 - Home",
    "    * 100 - Using Kinovea",
    "      * 101 - Playback",
    "    * 200 - Export",
];

#[test]
fn given_sample_outline_when_serialized_then_nested_markup_matches() {
    testing::init_test_setup();
    // Arrange
    let outline = OutlineBuilder::build_from_lines(SAMPLE_LINES).unwrap();

    // Act
    let markup = to_markup(&outline);

    // Assert
    let expected = r#"<?xml version="1.0" encoding="utf-8"?>
<toc lang="en">
  <book id="001" title="Home">
    <book id="100" title="Using Kinovea">
      <page id="101" title="Playback" />
    </book>
    <page id="200" title="Export" />
  </book>
</toc>
"#;
    assert_eq!(markup, expected);
}

#[test]
fn given_empty_outline_when_serialized_then_toc_wrapper_only() {
    // Arrange
    let outline = OutlineBuilder::build_from_lines([]).unwrap();

    // Act
    let markup = to_markup(&outline);

    // Assert
    let expected = r#"<?xml version="1.0" encoding="utf-8"?>
<toc lang="en">
</toc>
"#;
    assert_eq!(markup, expected);
}

#[test]
fn given_flat_outline_when_serialized_then_all_topics_self_close() {
    // Arrange
    let outline =
        OutlineBuilder::build_from_lines(["  * 001 - Home", "  * 002 - Export"]).unwrap();

    // Act
    let markup = to_markup(&outline);

    // Assert
    assert!(markup.contains(r#"  <page id="001" title="Home" />"#));
    assert!(markup.contains(r#"  <page id="002" title="Export" />"#));
    assert!(!markup.contains("<book"));
}

#[test]
fn given_reserved_characters_in_titles_when_serialized_then_escaped() {
    // Arrange
    let lines = [
        "  * 001 - Tips & Tricks",
        "  * 002 - The \"Export\" dialog",
        "  * 003 - a < b",
    ];
    let outline = OutlineBuilder::build_from_lines(lines).unwrap();

    // Act
    let markup = to_markup(&outline);

    // Assert
    assert!(markup.contains(r#"title="Tips &amp; Tricks""#));
    assert!(markup.contains(r#"title="The &quot;Export&quot; dialog""#));
    assert!(markup.contains(r#"title="a &lt; b""#));
}

#[test]
fn given_fallback_language_when_serialized_then_toc_carries_it() {
    // Arrange
    let outline =
        OutlineBuilder::build_from_lines_with_lang(["  * 001 - Accueil"], "fr").unwrap();

    // Act
    let markup = to_markup(&outline);

    // Assert
    assert!(markup.contains(r#"<toc lang="fr">"#));
}

#[test]
fn given_built_outline_when_serialized_twice_then_byte_identical() {
    // Arrange
    let outline = OutlineBuilder::build_from_lines(SAMPLE_LINES).unwrap();

    // Act
    let first = to_markup(&outline);
    let second = to_markup(&outline);

    // Assert
    assert_eq!(first, second);
}
