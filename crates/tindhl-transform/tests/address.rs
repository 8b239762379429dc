//! Tests for street line splitting.

use proptest::prelude::*;
use tindhl_model::NumberPosition;
use tindhl_transform::split_street;

fn split(street: &str, position: NumberPosition) -> (String, String) {
    let split = split_street(street, position);
    (split.street, split.house_number)
}

#[test]
fn end_split_takes_last_token() {
    assert_eq!(
        split("Main 42", NumberPosition::End),
        ("Main".to_string(), "42".to_string())
    );
    assert_eq!(
        split("Am Alten Markt 12a", NumberPosition::End),
        ("Am Alten Markt".to_string(), "12a".to_string())
    );
}

#[test]
fn front_split_takes_first_token() {
    assert_eq!(
        split("42 Main", NumberPosition::Front),
        ("Main".to_string(), "42".to_string())
    );
    assert_eq!(
        split("1600 Pennsylvania Avenue NW", NumberPosition::Front),
        ("Pennsylvania Avenue NW".to_string(), "1600".to_string())
    );
}

#[test]
fn line_without_space_fills_both_fields() {
    for position in [NumberPosition::End, NumberPosition::Front] {
        assert_eq!(
            split("Einzelwort", position),
            ("Einzelwort".to_string(), "Einzelwort".to_string())
        );
    }
}

#[test]
fn separate_letter_suffix_is_taken_alone() {
    // "12 a" is two tokens; only the letter becomes the house number.
    assert_eq!(
        split("Lindenweg 12 a", NumberPosition::End),
        ("Lindenweg 12".to_string(), "a".to_string())
    );
}

#[test]
fn wrong_convention_is_not_corrected() {
    assert_eq!(
        split("5 Main Street", NumberPosition::End),
        ("5 Main".to_string(), "Street".to_string())
    );
}

#[test]
fn double_space_leaves_empty_token() {
    assert_eq!(
        split("Main  42", NumberPosition::End),
        ("Main ".to_string(), "42".to_string())
    );
    assert_eq!(
        split("42  Main", NumberPosition::Front),
        (" Main".to_string(), "42".to_string())
    );
}

fn token() -> impl Strategy<Value = String> {
    "[A-Za-z0-9äöüß./-]{1,10}"
}

proptest! {
    #[test]
    fn end_isolates_exactly_last_token(tokens in prop::collection::vec(token(), 2..6)) {
        let line = tokens.join(" ");
        let (street, number) = split(&line, NumberPosition::End);
        prop_assert_eq!(&number, tokens.last().unwrap());
        prop_assert_eq!(street, tokens[..tokens.len() - 1].join(" "));
    }

    #[test]
    fn front_isolates_exactly_first_token(tokens in prop::collection::vec(token(), 2..6)) {
        let line = tokens.join(" ");
        let (street, number) = split(&line, NumberPosition::Front);
        prop_assert_eq!(&number, &tokens[0]);
        prop_assert_eq!(street, tokens[1..].join(" "));
    }

    #[test]
    fn single_token_is_returned_twice(word in token()) {
        for position in [NumberPosition::End, NumberPosition::Front, NumberPosition::Unknown] {
            let (street, number) = split(&word, position);
            prop_assert_eq!(&street, &word);
            prop_assert_eq!(&number, &word);
        }
    }

    #[test]
    fn rejoining_restores_line(tokens in prop::collection::vec(token(), 2..6)) {
        let line = tokens.join(" ");
        let (street, number) = split(&line, NumberPosition::End);
        prop_assert_eq!(format!("{street} {number}"), line.clone());
        let (street, number) = split(&line, NumberPosition::Front);
        prop_assert_eq!(format!("{number} {street}"), line);
    }
}
