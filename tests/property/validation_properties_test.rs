//! Property-based tests for payload validation.
//!
//! These tests generate arbitrary payloads and check that the validator
//! flags exactly the fields that break a rule, and nothing else.

use linkshelf::services::validator::{validate_bookmark, MAX_TAGS, MAX_TITLE_LEN};
use linkshelf::types::bookmark::{BookmarkField, BookmarkInput};
use proptest::prelude::*;

/// Strategy for generating valid URL strings.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net"), Just(".io")],
        proptest::option::of("/[a-z0-9]{1,10}"),
    )
        .prop_map(|(scheme, host, tld, path)| {
            format!("{}://{}{}{}", scheme, host, tld, path.unwrap_or_default())
        })
}

fn arb_title() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{0,40}"
}

fn arb_tag() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,11}"
}

fn flagged(input: &BookmarkInput) -> Vec<BookmarkField> {
    validate_bookmark(input).into_iter().map(|e| e.field).collect()
}

// **Property 1: Well-formed payloads pass**
//
// *For any* valid URL, non-empty title and up to five lowercase tags, the
// validator SHALL report no errors.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn well_formed_payload_has_no_errors(
        url in arb_url(),
        title in arb_title(),
        description in "[a-z ]{0,100}",
        tags in proptest::collection::vec(arb_tag(), 0..=MAX_TAGS),
    ) {
        let input = BookmarkInput::new(url, title)
            .with_description(description)
            .with_tags(tags);
        let errors = validate_bookmark(&input);
        prop_assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }
}

// **Property 2: Missing required fields are always flagged**
//
// *For any* payload lacking a url or a title (absent, empty or whitespace),
// the validator SHALL report that field.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn missing_url_or_title_is_flagged(
        url in proptest::option::of(prop_oneof![Just(String::new()), "[ \t]{1,4}"]),
        title in arb_title(),
        drop_title in any::<bool>(),
    ) {
        let input = BookmarkInput {
            url,
            title: if drop_title { None } else { Some(title) },
            ..BookmarkInput::default()
        };
        let fields = flagged(&input);
        prop_assert_eq!(fields[0], BookmarkField::Url);
        prop_assert_eq!(fields.contains(&BookmarkField::Title), drop_title);
    }
}

// **Property 3: Tag rules**
//
// *For any* tag list longer than five, or containing an entry with an
// uppercase letter, the validator SHALL flag the tags field and only it.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn too_many_tags_are_flagged(
        url in arb_url(),
        tags in proptest::collection::vec(arb_tag(), (MAX_TAGS + 1)..12),
    ) {
        let input = BookmarkInput::new(url, "Title").with_tags(tags);
        prop_assert_eq!(flagged(&input), vec![BookmarkField::Tags]);
    }

    #[test]
    fn uppercase_tag_is_flagged(
        url in arb_url(),
        mut tags in proptest::collection::vec(arb_tag(), 0..MAX_TAGS),
        bad in "[a-z]{0,4}[A-Z][a-zA-Z]{0,4}",
        at in any::<prop::sample::Index>(),
    ) {
        let index = at.index(tags.len() + 1);
        tags.insert(index, bad);
        let input = BookmarkInput::new(url, "Title").with_tags(tags);
        prop_assert_eq!(flagged(&input), vec![BookmarkField::Tags]);
    }
}

// **Property 4: Title length bound**
//
// *For any* title longer than the limit, the validator SHALL flag the title.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn overlong_title_is_flagged(
        url in arb_url(),
        extra in 1usize..50,
    ) {
        let title = "t".repeat(MAX_TITLE_LEN + extra);
        let input = BookmarkInput::new(url, title);
        prop_assert_eq!(flagged(&input), vec![BookmarkField::Title]);
    }
}
