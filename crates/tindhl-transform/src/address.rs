//! Street line splitting.
//!
//! Shop exports carry the whole address line in one field, while the carrier
//! import wants street name and house number separately. The split is purely
//! positional: exactly one space-delimited token is taken from the end the
//! destination country puts its house numbers at. Nothing checks that the
//! token looks like a number.

use tindhl_model::NumberPosition;

/// Street line split into its two label fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitStreet {
    pub street: String,
    pub house_number: String,
}

/// Returns true if the line has no space to split on.
///
/// Such lines end up in full in both the street and the house number field.
pub fn is_unsplittable(street: &str) -> bool {
    !street.contains(' ')
}

/// Split a street line into street name and house number.
///
/// - [`NumberPosition::End`] and [`NumberPosition::Unknown`]: the last token is
///   the house number and `" " + number` is removed from the end.
/// - [`NumberPosition::Front`]: the first token is the house number and
///   `number + " "` is removed from the start.
///
/// A line without a space is returned unchanged in both fields.
///
/// # Examples
///
/// ```
/// use tindhl_model::NumberPosition;
/// use tindhl_transform::split_street;
///
/// let split = split_street("Hauptstrasse 5", NumberPosition::End);
/// assert_eq!(split.street, "Hauptstrasse");
/// assert_eq!(split.house_number, "5");
///
/// let split = split_street("5 Main Street", NumberPosition::Front);
/// assert_eq!(split.street, "Main Street");
/// assert_eq!(split.house_number, "5");
/// ```
pub fn split_street(street: &str, position: NumberPosition) -> SplitStreet {
    let (name, number) = match position {
        NumberPosition::Front => split_front(street),
        NumberPosition::End | NumberPosition::Unknown => split_end(street),
    };
    SplitStreet {
        street: name.to_string(),
        house_number: number.to_string(),
    }
}

fn split_end(street: &str) -> (&str, &str) {
    let number = street.rsplit(' ').next().unwrap_or(street);
    let name = street
        .strip_suffix(number)
        .and_then(|rest| rest.strip_suffix(' '))
        .unwrap_or(street);
    (name, number)
}

fn split_front(street: &str) -> (&str, &str) {
    let number = street.split(' ').next().unwrap_or(street);
    let name = street
        .strip_prefix(number)
        .and_then(|rest| rest.strip_prefix(' '))
        .unwrap_or(street);
    (name, number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_space_yields_empty_number() {
        let split = split_street("Main 42 ", NumberPosition::End);
        assert_eq!(split.house_number, "");
        assert_eq!(split.street, "Main 42");
    }

    #[test]
    fn empty_line_stays_empty() {
        let split = split_street("", NumberPosition::End);
        assert_eq!(split, SplitStreet::default());
        let split = split_street("", NumberPosition::Front);
        assert_eq!(split, SplitStreet::default());
    }

    #[test]
    fn unknown_position_splits_like_end() {
        assert_eq!(
            split_street("Rue de la Paix 12", NumberPosition::Unknown),
            split_street("Rue de la Paix 12", NumberPosition::End)
        );
    }

    #[test]
    fn unsplittable_line_is_flagged() {
        assert!(is_unsplittable("Einzelwort"));
        assert!(is_unsplittable(""));
        assert!(!is_unsplittable("Main Main"));
    }
}
