use regex::Regex;
use std::collections::BTreeMap;

use crate::utils::AppError;

pub const NAME_MAX_CHARS: usize = 100;
pub const PASSWORD_MIN_CHARS: usize = 6;

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid");
}

/// Acumula erros por campo, no formato devolvido em `data`
#[derive(Debug, Default)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check_name(&mut self, name: &str) {
        if name.trim().is_empty() {
            self.add("name", "name must not be blank");
        } else if name.chars().count() > NAME_MAX_CHARS {
            self.add("name", "name must be between 1 and 100 characters");
        }
    }

    pub fn check_email(&mut self, email: &str) {
        if email.trim().is_empty() {
            self.add("email", "email must not be blank");
        } else if !is_valid_email(email) {
            self.add("email", "invalid email format");
        }
    }

    pub fn check_password(&mut self, password: &str) {
        if password.chars().count() < PASSWORD_MIN_CHARS {
            self.add("password", "password must be at least 6 characters");
        }
    }

    fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn into_result(self) -> Result<(), AppError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.0))
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    if !EMAIL_RE.is_match(email) {
        return false;
    }

    // Nenhum label do domínio pode ser vazio (`a@.b.c`, `a@b..c`)
    match email.rsplit_once('@') {
        Some((_, domain)) => domain.split('.').all(|label| !label.is_empty()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_syntax() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("missing@tld"));
    }

    #[test]
    fn test_email_rejects_empty_domain_labels() {
        assert!(!is_valid_email("a@.b.c"));
        assert!(!is_valid_email("a@b..c"));
        assert!(!is_valid_email("a@b.c."));
        assert!(is_valid_email("a@b.c.d"));

        let mut errors = FieldErrors::new();
        errors.check_email("a@b..c");
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_name_bounds_count_characters() {
        let mut errors = FieldErrors::new();
        errors.check_name(&"é".repeat(100));
        assert!(errors.into_result().is_ok());

        let mut errors = FieldErrors::new();
        errors.check_name(&"a".repeat(101));
        assert!(errors.into_result().is_err());

        let mut errors = FieldErrors::new();
        errors.check_name("   ");
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_collects_every_field() {
        let mut errors = FieldErrors::new();
        errors.check_name("");
        errors.check_email("nope");
        errors.check_password("123");

        match errors.into_result() {
            Err(AppError::Validation(map)) => {
                assert_eq!(map.len(), 3);
                assert_eq!(map["password"], "password must be at least 6 characters");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
