//! Display formatting shared by the pages.

use chrono::{DateTime, Utc};

use crate::models::{teacher::Teacher, user::User};

/// `yoga session` -> `Yoga Session`.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `February 15, 2026`.
pub fn long_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn attendees(count: usize) -> String {
    format!("{count} attendees")
}

/// `Margot DELAHAYE`.
pub fn display_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name, last_name.to_uppercase())
}

pub fn teacher_name(teacher: &Teacher) -> String {
    display_name(&teacher.first_name, &teacher.last_name)
}

pub fn user_name(user: &User) -> String {
    display_name(&user.first_name, &user.last_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn titles_capitalize_each_word() {
        assert_eq!(title_case("yoga session"), "Yoga Session");
        assert_eq!(title_case("ADVANCED yoga"), "Advanced Yoga");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn dates_use_the_long_form() {
        let date = Utc.with_ymd_and_hms(2026, 2, 15, 0, 0, 0).unwrap();
        assert_eq!(long_date(&date), "February 15, 2026");
        let date = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(long_date(&date), "January 1, 2026");
    }

    #[test]
    fn names_upper_case_the_last_name() {
        assert_eq!(display_name("Margot", "Delahaye"), "Margot DELAHAYE");
        assert_eq!(display_name("Hélène", "Thiercé"), "Hélène THIERCÉ");
        assert_eq!(attendees(3), "3 attendees");
    }
}
