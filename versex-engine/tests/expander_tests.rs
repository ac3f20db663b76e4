//! Document-level expansion tests

use versex_core::{BookNameIndex, BookRecord, Translation};
use versex_engine::{
    expand, Diagnostic, ExpandOptions, InsertionMode, ScanScope, TextExpander,
};

const FIXTURE: &str = r#"{
    "books": [
        { "book": "Genesis", "chapters": [
            { "chapter": 1, "verses": [
                { "verse": 1, "text": "In the beginning" },
                { "verse": 2, "text": "And the earth was without form" }
            ]}
        ]},
        { "book": "John", "chapters": [
            { "chapter": 3, "verses": [
                { "verse": 16, "text": "For God so loved the world" }
            ]},
            { "chapter": 1, "verses": [
                { "verse": 1, "text": "one" },
                { "verse": 2, "text": "two" },
                { "verse": 3, "text": "three" },
                { "verse": 4, "text": "four" },
                { "verse": 5, "text": "five" }
            ]}
        ]},
        { "book": "Romans", "chapters": [
            { "chapter": 3, "verses": [
                { "verse": 23, "text": "for all have sinned..." },
                { "verse": 24, "text": "being justified freely" }
            ]},
            { "chapter": 6, "verses": [
                { "verse": 23, "text": "23 for the wages of sin..." }
            ]}
        ]}
    ]
}"#;

fn translation() -> Translation {
    Translation::from_json_str(FIXTURE).unwrap()
}

fn run(text: &str, options: ExpandOptions) -> versex_engine::Expansion {
    expand(text, &translation(), options).unwrap()
}

fn after_line() -> ExpandOptions {
    ExpandOptions::builder()
        .mode(InsertionMode::AfterLine)
        .build()
        .unwrap()
}

/// True when every char of `needle` appears in `haystack` in order
fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut rest = haystack.chars();
    needle.chars().all(|c| rest.any(|h| h == c))
}

#[test]
fn test_comma_list_gets_one_span_per_segment() {
    let expansion = run("Romans 3:23, 6:23", ExpandOptions::default());
    assert_eq!(
        expansion.text,
        "Romans 3:23 `for all have sinned...` , 6:23 `for the wages of sin...`"
    );
    assert_eq!(expansion.stats.citations, 1);
    assert_eq!(expansion.stats.references, 2);
    assert_eq!(expansion.stats.expanded, 2);
}

#[test]
fn test_inline_spacing_respects_whitespace() {
    let expansion = run("Read John 3:16 now", ExpandOptions::default());
    assert_eq!(
        expansion.text,
        "Read John 3:16 `For God so loved the world` now"
    );
}

#[test]
fn test_chapter_only_text_is_unchanged() {
    let text = "Read Romans 3 today.";
    let expansion = run(text, ExpandOptions::default());
    assert_eq!(expansion.text, text);
    assert!(expansion.diagnostics.is_empty());
}

#[test]
fn test_verse_limit() {
    let limited = ExpandOptions::builder().limit(Some(1)).build().unwrap();
    let expansion = run("John 1:1-5", limited);
    assert_eq!(expansion.text, "John 1:1-5");
    assert_eq!(expansion.stats.over_limit, 1);
    assert!(expansion.diagnostics.is_empty());

    let expected = "John 1:1-5 `one two three four five`";
    let exact = ExpandOptions::builder().limit(Some(5)).build().unwrap();
    assert_eq!(run("John 1:1-5", exact).text, expected);
    assert_eq!(run("John 1:1-5", ExpandOptions::default()).text, expected);
}

#[test]
fn test_verse_limit_applies_to_ranges_with_missing_chapters() {
    let gapped = Translation::from_json_str(
        r#"{ "books": [ { "book": "Mark", "chapters": [
            { "chapter": 1, "verses": [
                { "verse": 1, "text": "a" }, { "verse": 2, "text": "b" } ]},
            { "chapter": 2, "verses": [
                { "verse": 1, "text": "c" }, { "verse": 2, "text": "d" } ]},
            { "chapter": 4, "verses": [
                { "verse": 1, "text": "e" }, { "verse": 2, "text": "f" } ]}
        ]}]}"#,
    )
    .unwrap();
    let limited = || ExpandOptions::builder().limit(Some(1)).build().unwrap();

    for text in ["Mark 1:1-4:1", "Mark 1:1-99:1"] {
        let expansion = expand(text, &gapped, limited()).unwrap();
        assert_eq!(expansion.text, text);
        assert_eq!(expansion.stats.over_limit, 1);
        assert_eq!(expansion.stats.expanded, 0);
        assert!(expansion.diagnostics.is_empty());
    }

    let unlimited = expand("Mark 1:1-4:1", &gapped, ExpandOptions::default()).unwrap();
    assert_eq!(unlimited.text, "Mark 1:1-4:1 `a b c d e`");
}

#[test]
fn test_non_book_word_is_left_alone() {
    let expansion = run("See you May 3:30.", ExpandOptions::default());
    assert_eq!(expansion.text, "See you May 3:30.");
    assert_eq!(expansion.stats.citations, 0);
}

#[test]
fn test_after_line_keeps_source_order() {
    let text = "John 3:16 and Genesis 1:1 here.\nNext paragraph.";
    let expansion = run(text, after_line());
    assert_eq!(
        expansion.text,
        "John 3:16 and Genesis 1:1 here.\n\
         `For God so loved the world`\n\
         `In the beginning`\n\
         \n\
         Next paragraph."
    );
}

#[test]
fn test_after_line_with_echo() {
    let options = ExpandOptions::builder()
        .mode(InsertionMode::AfterLine)
        .echo_citation(true)
        .build()
        .unwrap();
    let expansion = run("Jn 3:16 says it", options);
    assert_eq!(
        expansion.text,
        "Jn 3:16 says it\nJohn 3:16 `For God so loved the world`\n"
    );
}

#[test]
fn test_after_line_keeps_single_blank_line() {
    let expansion = run("John 3:16\n\nNext", after_line());
    assert_eq!(
        expansion.text,
        "John 3:16\n`For God so loved the world`\n\nNext"
    );
}

#[test]
fn test_unrelated_text_is_preserved() {
    let text = "Começa aqui: John 3:16, Genesis 1:1-2 — e Romans 3:23-24; fim.";
    for options in [ExpandOptions::default(), after_line()] {
        let expansion = run(text, options);
        assert!(expansion.text.len() > text.len());
        assert!(is_subsequence(text, &expansion.text));
    }
}

#[test]
fn test_unresolvable_reference_is_reported() {
    let expansion = run("John 99:1 and John 3:16", ExpandOptions::default());
    assert_eq!(
        expansion.text,
        "John 99:1 and John 3:16 `For God so loved the world`"
    );
    assert_eq!(
        expansion.diagnostics,
        vec![Diagnostic::UnresolvableReference {
            reference: "John 99:1".to_string(),
            citation: "99:1".to_string(),
            start: 5,
            end: 9,
        }]
    );
    assert_eq!(expansion.stats.unresolved, 1);
}

#[test]
fn test_repeated_reference_is_expanded_once() {
    let expansion = run("John 3:16 then again John 3:16.", ExpandOptions::default());
    assert_eq!(
        expansion.text,
        "John 3:16 `For God so loved the world` then again John 3:16."
    );
    assert_eq!(expansion.stats.duplicates, 1);
}

#[test]
fn test_verse_numbers_and_delimiter() {
    let options = ExpandOptions::builder()
        .verse_numbers(true)
        .delimiter("\"")
        .build()
        .unwrap();
    let expansion = run("Genesis 1:1-2", options);
    assert_eq!(
        expansion.text,
        "Genesis 1:1-2 \"In the beginning 2 And the earth was without form\""
    );
}

#[test]
fn test_line_scope_matches_document_scope() {
    let text = "A John 3:16\nB";
    let lines = ExpandOptions::builder()
        .mode(InsertionMode::AfterLine)
        .scope(ScanScope::Lines)
        .build()
        .unwrap();

    let per_line = run(text, lines);
    let document = run(text, after_line());
    assert_eq!(per_line.text, "A John 3:16\n`For God so loved the world`\n\nB");
    assert_eq!(per_line.text, document.text);
}

#[test]
fn test_line_scope_shifts_diagnostics_and_dedups_per_line() {
    let options = ExpandOptions::builder()
        .scope(ScanScope::Lines)
        .build()
        .unwrap();
    let expansion = run("John 3:16\n\nJohn 99:1 John 3:16", options);

    assert_eq!(
        expansion.text,
        "John 3:16 `For God so loved the world`\n\n\
         John 99:1 John 3:16 `For God so loved the world`"
    );
    assert_eq!(expansion.diagnostics.len(), 1);
    assert_eq!(expansion.diagnostics[0].span(), 16..20);
    assert_eq!(expansion.stats.expanded, 2);
}

#[test]
fn test_custom_index() {
    let index = BookNameIndex::from_records(&[BookRecord {
        book: "Romans".to_string(),
        names: vec!["Rmn".to_string()],
    }])
    .unwrap();
    let translation = translation();
    let expander = TextExpander::new(&index, &translation, ExpandOptions::default());

    let expansion = expander.expand("Rmn 3:24 but not John 3:16").unwrap();
    assert_eq!(
        expansion.text,
        "Rmn 3:24 `being justified freely` but not John 3:16"
    );
}

#[test]
fn test_empty_input() {
    let expansion = run("", ExpandOptions::default());
    assert_eq!(expansion.text, "");
    assert_eq!(expansion.stats.citations, 0);
}
