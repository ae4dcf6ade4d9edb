//! Parser for the `add` command.

use super::cli_syntax::{
    Prefix, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_HIRE, PREFIX_NAME, PREFIX_NRIC, PREFIX_PHONE,
    PREFIX_TAG,
};
use super::tokenizer::{tokenize, ArgumentMultimap};
use crate::domain::{Address, Email, Hire, Name, Nric, Phone, Tag, TagSet};
use crate::error::{ParseError, ParseResult};
use crate::models::{Attendance, Person};

pub const ADD_USAGE: &str = "add: Adds a person to the staff book. Parameters: \
    /name NAME /nric NRIC /phone PHONE /email EMAIL /address ADDRESS /hire YYYY-MM-DD [/tag TAG]...\n\
    Example: add /name Alex Yeo /nric S1234567A /phone 98765432 /email alex@example.com \
    /address 21 Lower Kent Ridge Rd /hire 2023-01-01 /tag manager";

const REQUIRED: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_NRIC,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_HIRE,
];

const ALL: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_NRIC,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_HIRE,
    PREFIX_TAG,
];

/// Parse the arguments of an `add` command into a new person.
///
/// # Errors
///
/// - `InvalidCommandFormat` if a required field is missing or there is text before the first prefix
/// - `DuplicatePrefixes` if a single-valued field is given twice
/// - `InvalidValue` with the field's constraint message if a value is malformed
pub fn parse_add(args: &str) -> ParseResult<Person> {
    let map = tokenize(args, ALL);

    if !REQUIRED.iter().all(|p| map.value(*p).is_some()) || !map.preamble().is_empty() {
        return Err(ParseError::InvalidCommandFormat(ADD_USAGE.to_string()));
    }

    let duplicated = map.duplicated(REQUIRED);
    if !duplicated.is_empty() {
        return Err(ParseError::DuplicatePrefixes(
            duplicated.iter().map(|p| p.to_string()).collect(),
        ));
    }

    let name = Name::new(required(&map, PREFIX_NAME))?;
    let nric = Nric::new(required(&map, PREFIX_NRIC))?;
    let phone = Phone::new(required(&map, PREFIX_PHONE))?;
    let email = Email::new(required(&map, PREFIX_EMAIL))?;
    let address = Address::new(required(&map, PREFIX_ADDRESS))?;
    let hire = Hire::new(required(&map, PREFIX_HIRE))?;
    let tags = map
        .all_values(PREFIX_TAG)
        .iter()
        .map(|raw| Tag::new(raw.as_str()))
        .collect::<Result<TagSet, _>>()?;

    Ok(Person::new(
        name,
        nric,
        phone,
        email,
        address,
        hire,
        tags,
        Vec::new(),
        Attendance::default(),
    ))
}

// Presence was checked up front.
fn required(map: &ArgumentMultimap, prefix: Prefix) -> &str {
    map.value(prefix).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldKind;

    const VALID: &str = " /name Alex Yeo /nric S1234567A /phone 98765432 \
        /email alex@example.com /address 21 Lower Kent Ridge Rd /hire 2023-01-01";

    #[test]
    fn test_parse_add_valid() {
        let person = parse_add(VALID).unwrap();
        assert_eq!(person.name().as_str(), "Alex Yeo");
        assert_eq!(person.address().as_str(), "21 Lower Kent Ridge Rd");
        assert_eq!(person.hire().as_str(), "2023-01-01");
        assert!(person.tags().is_empty());
    }

    #[test]
    fn test_parse_add_with_tags() {
        let person = parse_add(&format!("{} /tag manager /tag remote /tag manager", VALID)).unwrap();
        assert_eq!(person.tags().len(), 2);
    }

    #[test]
    fn test_parse_add_fields_in_any_order() {
        let args = "/hire 2023-01-01 /phone 98765432 /name Alex Yeo /address Kent Ridge \
            /email alex@example.com /nric S1234567A";
        assert!(parse_add(args).is_ok());
    }

    #[test]
    fn test_parse_add_missing_prefix() {
        let args = VALID.replace("/hire 2023-01-01", "");
        assert_eq!(
            parse_add(&args),
            Err(ParseError::InvalidCommandFormat(ADD_USAGE.to_string()))
        );
    }

    #[test]
    fn test_parse_add_non_empty_preamble() {
        let args = format!("hello {}", VALID);
        assert!(matches!(
            parse_add(&args),
            Err(ParseError::InvalidCommandFormat(_))
        ));
    }

    #[test]
    fn test_parse_add_duplicate_prefix() {
        let args = format!("{} /phone 91234567", VALID);
        assert_eq!(
            parse_add(&args),
            Err(ParseError::DuplicatePrefixes(vec!["/phone".to_string()]))
        );
    }

    #[test]
    fn test_parse_add_invalid_value_surfaces_constraint_message() {
        let args = VALID.replace("S1234567A", "123");
        let err = parse_add(&args).unwrap_err();
        assert_eq!(err.to_string(), Nric::MESSAGE_CONSTRAINTS);
        match err {
            ParseError::InvalidValue(e) => assert_eq!(e.kind(), FieldKind::Nric),
            other => panic!("Expected InvalidValue, got: {:?}", other),
        }
    }

    #[test]
    fn test_parse_add_invalid_tag() {
        let args = format!("{} /tag #vip", VALID);
        match parse_add(&args).unwrap_err() {
            ParseError::InvalidValue(e) => assert_eq!(e.kind(), FieldKind::Tag),
            other => panic!("Expected InvalidValue, got: {:?}", other),
        }
    }
}
