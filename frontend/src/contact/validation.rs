use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// DOM id and form key of the field.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn from_id(id: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.id() == id)
    }

    pub fn spec(self) -> &'static FieldSpec {
        match self {
            Field::Name => &FIELD_SPECS[0],
            Field::Email => &FIELD_SPECS[1],
            Field::Message => &FIELD_SPECS[2],
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    PlainText,
    Email,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub min_length: usize,
    pub kind: FieldKind,
    pub message: &'static str,
}

pub static FIELD_SPECS: [FieldSpec; 3] = [
    FieldSpec {
        field: Field::Name,
        min_length: 2,
        kind: FieldKind::PlainText,
        message: "Name must be at least 2 characters long",
    },
    FieldSpec {
        field: Field::Email,
        min_length: 1,
        kind: FieldKind::Email,
        message: "Please enter a valid email address",
    },
    FieldSpec {
        field: Field::Message,
        min_length: 10,
        kind: FieldKind::PlainText,
        message: "Message must be at least 10 characters long",
    },
];

impl FieldSpec {
    fn check(&self, value: &str) -> Option<&'static str> {
        // UTF-16 code units, the unit browsers report as an input's length
        let long_enough = value.encode_utf16().count() >= self.min_length;
        let well_formed = match self.kind {
            FieldKind::PlainText => true,
            FieldKind::Email => EMAIL_RE.is_match(value),
        };
        if long_enough && well_formed {
            None
        } else {
            Some(self.message)
        }
    }
}

/// Trimmed values of one submission attempt. A field the user never filled
/// in is held as the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormRecord {
    name: String,
    email: String,
    message: String,
}

impl FormRecord {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<Field, &'static str>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<Field, &'static str> {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn into_errors(self) -> BTreeMap<Field, &'static str> {
        self.errors
    }
}

/// Check a single raw value the way [`validate`] checks that field.
pub fn validate_field(field: Field, raw_value: &str) -> Option<&'static str> {
    field.spec().check(raw_value.trim())
}

/// Apply every field rule to the record. All failing fields are reported.
pub fn validate(record: &FormRecord) -> ValidationResult {
    let errors = Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, record.get(field)).map(|msg| (field, msg)))
        .collect();
    ValidationResult { errors }
}
