//! Sign-up Form Rules
//!
//! Per-field rules checked in order (first failure wins), then a
//! cross-field password check once every field passes.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

pub const DEFAULT_EMAIL: &str = "@naver.com";
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@naver\.com$";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Email,
    FirstName,
    LastName,
    Username,
    Password,
    PasswordConfirm,
}

impl Field {
    /// Form order, also the focus order for errors
    pub const ALL: [Field; 6] = [
        Field::Email,
        Field::FirstName,
        Field::LastName,
        Field::Username,
        Field::Password,
        Field::PasswordConfirm,
    ];

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Username => "Username",
            Field::Password => "Password",
            Field::PasswordConfirm => "Confirm Password",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password | Field::PasswordConfirm => "password",
            _ => "text",
        }
    }

    fn rules(&self) -> &'static [Rule] {
        match self {
            Field::Email => &[
                Rule::Required("Email is required"),
                Rule::EmailPattern("Only naver.com"),
            ],
            Field::FirstName => &[Rule::Required("Write here"), Rule::Forbid("jin", "Not allowed")],
            Field::Username => &[Rule::Required("Write here"), Rule::MinLength(5, "Too short")],
            Field::LastName | Field::Password | Field::PasswordConfirm => {
                &[Rule::Required("Write here")]
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    Required(&'static str),
    EmailPattern(&'static str),
    MinLength(usize, &'static str),
    Forbid(&'static str, &'static str),
}

impl Rule {
    fn check(&self, value: &str) -> Result<(), &'static str> {
        let ok = match self {
            Rule::Required(_) => !value.is_empty(),
            Rule::EmailPattern(_) => email_re().is_match(value),
            Rule::MinLength(min, _) => value.chars().count() >= *min,
            Rule::Forbid(needle, _) => !value.contains(needle),
        };
        if ok {
            Ok(())
        } else {
            Err(self.message())
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Rule::Required(msg)
            | Rule::EmailPattern(msg)
            | Rule::MinLength(_, msg)
            | Rule::Forbid(_, msg) => msg,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub password_confirm: String,
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self {
            email: DEFAULT_EMAIL.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            username: String::new(),
            password: String::new(),
            password_confirm: String::new(),
        }
    }
}

impl SignUpForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Username => &self.username,
            Field::Password => &self.password,
            Field::PasswordConfirm => &self.password_confirm,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Username => self.username = value,
            Field::Password => self.password = value,
            Field::PasswordConfirm => self.password_confirm = value,
        }
    }
}

pub type FieldErrors = BTreeMap<Field, &'static str>;

/// First failing rule for a single field
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    field.rules().iter().find_map(|rule| rule.check(value).err())
}

/// Errors for every field; the password match is only checked when all
/// field rules pass
pub fn validate(form: &SignUpForm) -> FieldErrors {
    let mut errors: FieldErrors = Field::ALL
        .iter()
        .filter_map(|field| validate_field(*field, form.value(*field)).map(|msg| (*field, msg)))
        .collect();

    if errors.is_empty() && form.password != form.password_confirm {
        errors.insert(Field::PasswordConfirm, "Password are not the same");
    }
    errors
}

/// Field to focus after a failed submit
pub fn first_error(errors: &FieldErrors) -> Option<Field> {
    errors.keys().next().copied()
}
