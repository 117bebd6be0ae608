use super::entity::{LoginForm, RegistrationForm};
use crate::domain::{DomainError, DomainResult};

pub const REGISTRATION_INPUT_ERROR: &str = "Please check your inputs";
pub const LOGIN_INPUT_ERROR: &str = "Please fill all fields";

/// Validates a sign-up form before any backend call
pub fn validate_registration(form: &RegistrationForm) -> DomainResult<()> {
    let filled = [&form.name, &form.email, &form.password, &form.confirm_password]
        .iter()
        .all(|field| !field.trim().is_empty());

    if !filled || form.confirm_password != form.password {
        return Err(DomainError::InvalidInput(REGISTRATION_INPUT_ERROR.to_string()));
    }
    Ok(())
}

/// Validates a sign-in form before any backend call
pub fn validate_login(form: &LoginForm) -> DomainResult<()> {
    if form.email.trim().is_empty() || form.password.trim().is_empty() {
        return Err(DomainError::InvalidInput(LOGIN_INPUT_ERROR.to_string()));
    }
    Ok(())
}

/// Rules enforced here:
///
/// 1. Every sign-up field is required
/// 2. Password confirmation must equal the password
/// 3. Sign-in needs both email and password
/// 4. Email format and password strength are left to the auth service
