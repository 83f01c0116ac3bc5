//! Signup password rules.

use crate::domain::AppError;

pub const MIN_PASSWORD_LEN: usize = 8;
const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Check a candidate password, reporting the first rule it breaks.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    let rules: [(bool, &str); 5] = [
        (
            password.chars().count() >= MIN_PASSWORD_LEN,
            "Password must be at least 8 characters long.",
        ),
        (
            password.chars().any(|c| c.is_ascii_uppercase()),
            "Password must contain at least one uppercase letter.",
        ),
        (
            password.chars().any(|c| c.is_ascii_lowercase()),
            "Password must contain at least one lowercase letter.",
        ),
        (password.chars().any(|c| c.is_ascii_digit()), "Password must contain at least one digit."),
        (
            password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
            "Password must contain at least one special character.",
        ),
    ];

    match rules.iter().find(|(satisfied, _)| !satisfied) {
        Some((_, message)) => Err(AppError::PasswordPolicy((*message).to_string())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(password: &str) -> String {
        match validate_password(password) {
            Err(AppError::PasswordPolicy(message)) => message,
            other => panic!("expected policy violation, got {:?}", other),
        }
    }

    #[test]
    fn accepts_strong_password() {
        assert!(validate_password("Lotus#Pose9").is_ok());
    }

    #[test]
    fn length_is_checked_first() {
        assert_eq!(violation("aB1!"), "Password must be at least 8 characters long.");
    }

    #[test]
    fn reports_each_missing_class() {
        assert_eq!(violation("lotus#pose9"), "Password must contain at least one uppercase letter.");
        assert_eq!(violation("LOTUS#POSE9"), "Password must contain at least one lowercase letter.");
        assert_eq!(violation("Lotus#Poses"), "Password must contain at least one digit.");
        assert_eq!(violation("LotusPose99"), "Password must contain at least one special character.");
    }

    #[test]
    fn all_listed_special_characters_count() {
        for special in SPECIAL_CHARACTERS.chars() {
            let password = format!("Lotus9{special}x");
            assert!(validate_password(&password).is_ok(), "{password}");
        }
    }
}
