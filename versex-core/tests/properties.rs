//! Property tests for the scanner and parser

use proptest::prelude::*;
use versex_core::{BookNameIndex, ReferenceParser, ReferenceScanner};

fn canonical_names() -> Vec<String> {
    BookNameIndex::builtin()
        .unwrap()
        .books()
        .iter()
        .map(|b| b.to_string())
        .collect()
}

proptest! {
    #[test]
    fn single_reference_round_trips(book_idx in 0usize..66, chapter in 1u32..200, verse in 1u32..200) {
        let index = BookNameIndex::builtin().unwrap();
        let book = &canonical_names()[book_idx];
        let text = format!("{book} {chapter}:{verse}");

        let citations = ReferenceScanner::new(&index).scan(&text);
        prop_assert_eq!(citations.len(), 1);
        prop_assert_eq!(&citations[0].text, &text);
        prop_assert_eq!(citations[0].span(), 0..text.len());

        let segments = ReferenceParser::new(&index).expand_citation(&citations[0]);
        prop_assert_eq!(segments.len(), 1);
        let reference = &segments[0].reference;
        prop_assert_eq!(reference.book.as_str(), book.as_str());
        prop_assert_eq!(reference.start_chapter, chapter);
        prop_assert_eq!(reference.end_chapter, chapter);
        prop_assert_eq!(reference.start_verse, Some(verse));
        prop_assert_eq!(reference.end_verse, Some(verse));
    }

    #[test]
    fn comma_list_carries_chapter(
        chapter in 1u32..150,
        v1 in 1u32..100,
        v2 in 1u32..100,
        chapter2 in 1u32..150,
        v3 in 1u32..100,
    ) {
        let index = BookNameIndex::builtin().unwrap();
        let text = format!("Romans {chapter}:{v1}, {v2}, {chapter2}:{v3}");

        let citations = ReferenceScanner::new(&index).scan(&text);
        prop_assert_eq!(citations.len(), 1);

        let segments = ReferenceParser::new(&index).expand_citation(&citations[0]);
        let tuples: Vec<_> = segments
            .iter()
            .map(|s| {
                let r = &s.reference;
                (r.start_chapter, r.start_verse, r.end_chapter, r.end_verse)
            })
            .collect();
        prop_assert_eq!(
            tuples,
            vec![
                (chapter, Some(v1), chapter, Some(v1)),
                (chapter, Some(v2), chapter, Some(v2)),
                (chapter2, Some(v3), chapter2, Some(v3)),
            ]
        );
    }

    #[test]
    fn scan_output_is_ordered_and_faithful(text in "[a-zA-Z0-9 :,\\-\n]{0,80}") {
        let index = BookNameIndex::builtin().unwrap();
        let citations = ReferenceScanner::new(&index).scan(&text);

        let mut last_end = 0;
        for citation in &citations {
            prop_assert!(citation.start >= last_end);
            prop_assert!(citation.start < citation.end);
            prop_assert_eq!(&text[citation.span()], citation.text.as_str());
            last_end = citation.end;
        }
    }

    #[test]
    fn scan_never_panics_on_unicode(text in "\\PC{0,64}") {
        let index = BookNameIndex::builtin().unwrap();
        let _ = ReferenceScanner::new(&index).scan(&text);
    }
}
