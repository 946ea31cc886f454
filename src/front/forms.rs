//! Form fields and the validation state machine behind submit buttons.
//!
//! Each field is in one of three states: pristine and invalid, touched and
//! invalid, or valid. A form may be submitted only when every field is valid.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::date_format;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Longest accepted session description, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 2000;

/// A rule a field value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// The value must not be empty.
    Required,
    /// A non-empty value must look like an email address.
    Email,
    /// The value may hold at most this many characters.
    MaxLength(usize),
    /// A non-empty value must be a `YYYY-MM-DD` day or an RFC 3339 timestamp.
    Date,
    /// A non-empty value must parse as an integer id.
    Integer,
}

/// Which rule a value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Required,
    Email,
    MaxLength,
    Date,
    Integer,
}

impl Validator {
    fn check(self, value: &str) -> Option<ErrorKind> {
        match self {
            Validator::Required if value.is_empty() => Some(ErrorKind::Required),
            Validator::Email if !value.is_empty() && !EMAIL_PATTERN.is_match(value) => Some(ErrorKind::Email),
            Validator::MaxLength(max) if value.chars().count() > max => Some(ErrorKind::MaxLength),
            Validator::Date if !value.is_empty() && date_format::parse_flexible(value).is_none() => {
                Some(ErrorKind::Date)
            }
            Validator::Integer if !value.is_empty() && value.trim().parse::<i64>().is_err() => {
                Some(ErrorKind::Integer)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    PristineInvalid,
    TouchedInvalid,
    Valid,
}

/// One input of a form.
#[derive(Debug, Clone)]
pub struct Field {
    name: &'static str,
    value: String,
    validators: Vec<Validator>,
    touched: bool,
}

impl Field {
    pub fn new(name: &'static str, validators: &[Validator]) -> Self {
        Self {
            name,
            value: String::new(),
            validators: validators.to_vec(),
            touched: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Focus alone changes nothing; leaving the field marks it touched.
    pub fn focus(&mut self) {}

    pub fn blur(&mut self) {
        self.touched = true;
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn errors(&self) -> Vec<ErrorKind> {
        self.validators
            .iter()
            .filter_map(|validator| validator.check(&self.value))
            .collect()
    }

    pub fn has_error(&self, kind: ErrorKind) -> bool {
        self.errors().contains(&kind)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn state(&self) -> FieldState {
        match (self.is_valid(), self.touched) {
            (true, _) => FieldState::Valid,
            (false, false) => FieldState::PristineInvalid,
            (false, true) => FieldState::TouchedInvalid,
        }
    }

    /// Whether the field's container renders in its error style.
    pub fn container_invalid(&self) -> bool {
        self.state() == FieldState::TouchedInvalid
    }
}

/// True when every field passes its validators.
pub fn is_valid(fields: &[Field]) -> bool {
    fields.iter().all(Field::is_valid)
}

/// An ordered set of named fields.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|field| field.name == name)
    }

    /// The value of `name`, or `""` for an unknown field.
    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(Field::value).unwrap_or_default()
    }

    /// Sets the value of `name`. Returns `false` for an unknown field.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                field.set_value(value);
                true
            }
            None => false,
        }
    }

    /// Focuses then leaves `name` without typing.
    pub fn touch(&mut self, name: &str) {
        if let Some(field) = self.field_mut(name) {
            field.focus();
            field.blur();
        }
    }

    pub fn is_valid(&self) -> bool {
        is_valid(&self.fields)
    }

    /// Submit controls are enabled exactly when the form is valid.
    pub fn submit_enabled(&self) -> bool {
        self.is_valid()
    }
}

/// What happened when a form was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was invalid; no request was sent.
    Blocked,
    /// The request was sent and failed; the page shows its error.
    Failed,
    /// The request succeeded and the user was navigated on.
    Succeeded,
}

pub fn login_form() -> Form {
    Form::new(vec![
        Field::new("email", &[Validator::Required, Validator::Email]),
        Field::new("password", &[Validator::Required]),
    ])
}

pub fn register_form() -> Form {
    Form::new(vec![
        Field::new("email", &[Validator::Required, Validator::Email]),
        Field::new("firstName", &[Validator::Required]),
        Field::new("lastName", &[Validator::Required]),
        Field::new("password", &[Validator::Required]),
    ])
}

pub fn session_form() -> Form {
    Form::new(vec![
        Field::new("name", &[Validator::Required]),
        Field::new("date", &[Validator::Required, Validator::Date]),
        Field::new("teacher_id", &[Validator::Required, Validator::Integer]),
        Field::new(
            "description",
            &[Validator::Required, Validator::MaxLength(DESCRIPTION_MAX_CHARS)],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_disabled_iff_some_required_field_is_empty() {
        let names = ["email", "firstName", "lastName", "password"];
        let values = ["new@test.com", "Jane", "Smith", "secret1"];
        for mask in 0u8..16 {
            let mut form = register_form();
            for (i, (name, value)) in names.iter().zip(values).enumerate() {
                if mask & (1 << i) != 0 {
                    form.set(name, value);
                }
            }
            assert_eq!(form.submit_enabled(), mask == 0b1111, "mask {mask:04b}");
        }
    }

    #[test]
    fn blurring_an_empty_field_moves_it_to_touched_invalid() {
        let mut form = login_form();
        let email = form.field("email").unwrap();
        assert_eq!(email.state(), FieldState::PristineInvalid);
        assert!(!email.container_invalid());

        form.touch("email");
        let email = form.field("email").unwrap();
        assert_eq!(email.state(), FieldState::TouchedInvalid);
        assert!(email.container_invalid());
        assert!(email.has_error(ErrorKind::Required));

        form.set("email", "yoga@studio.com");
        assert_eq!(form.field("email").unwrap().state(), FieldState::Valid);
    }

    #[test]
    fn register_email_must_be_well_formed() {
        let mut form = register_form();
        form.set("email", "not-an-email");
        let email = form.field("email").unwrap();
        assert!(email.has_error(ErrorKind::Email));
        assert!(!email.has_error(ErrorKind::Required));

        form.set("email", "jane@test.com");
        assert!(form.field("email").unwrap().is_valid());
    }

    #[test]
    fn login_email_must_be_well_formed() {
        let mut form = login_form();
        form.set("email", "not-an-email");
        form.set("password", "x");
        assert!(form.field("email").unwrap().has_error(ErrorKind::Email));
        assert!(!form.submit_enabled());

        form.set("email", "yoga@studio.com");
        assert!(form.submit_enabled());
    }

    #[test]
    fn session_date_and_teacher_must_convert() {
        let mut form = session_form();
        form.set("name", "Yoga");
        form.set("date", "15/03/2026");
        form.set("teacher_id", "1");
        form.set("description", "Flow");
        assert!(form.field("date").unwrap().has_error(ErrorKind::Date));
        assert!(!form.submit_enabled());

        form.set("date", "2026-03-15");
        form.set("teacher_id", "abc");
        assert!(form.field("teacher_id").unwrap().has_error(ErrorKind::Integer));
        assert!(!form.submit_enabled());

        form.set("teacher_id", "2");
        assert!(form.submit_enabled());
    }

    #[test]
    fn session_description_is_capped() {
        let mut form = session_form();
        form.set("name", "Yoga");
        form.set("date", "2026-03-15");
        form.set("teacher_id", "1");
        form.set("description", "é".repeat(DESCRIPTION_MAX_CHARS));
        assert!(form.is_valid());

        form.set("description", "é".repeat(DESCRIPTION_MAX_CHARS + 1));
        assert!(form.field("description").unwrap().has_error(ErrorKind::MaxLength));
        assert!(!form.submit_enabled());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut form = login_form();
        assert!(!form.set("nope", "x"));
        assert_eq!(form.value("nope"), "");
    }
}
