//! Property tests for the text normalizer's character-set contract.

use jobs_transform::{strip_special_characters, title_case};
use proptest::prelude::*;

fn is_retained(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, ' ' | ',' | '-')
}

proptest! {
    #[test]
    fn output_contains_only_retained_characters(input in ".*") {
        let out = strip_special_characters(&input);
        prop_assert!(out.chars().all(is_retained));
    }

    #[test]
    fn output_is_a_subsequence_of_the_input(input in ".*") {
        let out = strip_special_characters(&input);
        let mut source = input.chars();
        for ch in out.chars() {
            prop_assert!(source.any(|c| c == ch), "character {ch:?} out of order");
        }
    }

    #[test]
    fn retained_characters_survive_unchanged(input in "[a-zA-Z0-9, -]*") {
        prop_assert_eq!(strip_special_characters(&input), input);
    }

    #[test]
    fn title_case_never_produces_empty_words(input in "[a-z A-Z]*") {
        let out = title_case(&input);
        for word in out.split(' ') {
            prop_assert!(!word.is_empty() || out.is_empty());
        }
    }
}
