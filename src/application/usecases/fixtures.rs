use chrono::NaiveDate;

use crate::domain::models::User;

pub fn john_doe() -> User {
    User {
        id: None,
        email: "john.doe@mail.com".to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        birth_date: date(1990, 5, 15),
        address: Some("123 Main St".to_string()),
        phone_number: Some("123-456-7890".to_string()),
    }
}

pub fn mike_smith() -> User {
    User {
        id: None,
        email: "mike.smith@mail.com".to_string(),
        first_name: "Mike".to_string(),
        last_name: "Smith".to_string(),
        birth_date: date(1985, 8, 20),
        address: Some("456 Oak St".to_string()),
        phone_number: Some("987-654-3210".to_string()),
    }
}

pub fn frank_jones() -> User {
    User {
        id: None,
        email: "frank.jones@mail.com".to_string(),
        first_name: "Frank".to_string(),
        last_name: "Jones".to_string(),
        birth_date: date(1978, 3, 10),
        address: Some("789 Elm St".to_string()),
        phone_number: Some("555-123-4567".to_string()),
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
