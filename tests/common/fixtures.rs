//! Test fixtures and sample data.
//!
//! This module provides reusable persons and persisted records for tests.

use chrono::NaiveDate;
use staffbook::storage::{JsonLeave, JsonTag};
use staffbook::{
    Address, Attendance, Email, Hire, JsonPerson, Leave, Name, Nric, Person, Phone, Tag, TagSet,
};

/// The persisted record used throughout the examples: Alex Yeo, one tag,
/// no leaves, no stored attendance.
pub fn alex_record() -> JsonPerson {
    JsonPerson {
        name: Some("Alex Yeo".to_string()),
        nric: Some("S1234567A".to_string()),
        phone: Some("98765432".to_string()),
        email: Some("alex@example.com".to_string()),
        address: Some("21 Lower Kent Ridge Rd".to_string()),
        hire: Some("2023-01-01".to_string()),
        tags: vec![JsonTag::new("manager")],
        leaves: Vec::new(),
        attendance: None,
    }
}

/// A record with every optional part filled in.
#[allow(dead_code)]
pub fn bernice_record() -> JsonPerson {
    JsonPerson {
        name: Some("Bernice Yu".to_string()),
        nric: Some("T0234567Z".to_string()),
        phone: Some("99272758".to_string()),
        email: Some("berniceyu@example.com".to_string()),
        address: Some("Blk 30 Lorong 3 Serangoon Gardens, #07-18".to_string()),
        hire: Some("2021-07-15".to_string()),
        tags: vec![JsonTag::new("engineer"), JsonTag::new("part-time")],
        leaves: vec![JsonLeave {
            start: Some("2024-03-01".to_string()),
            end: Some("2024-03-05".to_string()),
        }],
        attendance: Some(staffbook::storage::JsonAttendance {
            present: vec!["2024-02-28".to_string(), "2024-02-29".to_string()],
        }),
    }
}

/// A fully populated person built directly from value objects.
#[allow(dead_code)]
pub fn sample_person(name: &str) -> Person {
    Person::new(
        Name::new(name).unwrap(),
        Nric::new("G1234567X").unwrap(),
        Phone::new("87654321").unwrap(),
        Email::new("staff.member@example.org").unwrap(),
        Address::new("10 Anson Road, #12-01").unwrap(),
        Hire::new("2020-02-29").unwrap(),
        TagSet::new([Tag::new("finance").unwrap(), Tag::new("O'Neil's team").unwrap()]),
        vec![
            Leave::parse("2024-06-10", "2024-06-14").unwrap(),
            Leave::parse("2024-01-02", "2024-01-02").unwrap(),
        ],
        Attendance::new(vec![
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
        ]),
    )
}
