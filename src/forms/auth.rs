//! Login and Signup Forms

use super::{is_valid_email, FieldErrors, Form};
use crate::models::{LoginRequest, SignupRequest};

/// Selectable account roles (value, label)
pub const ROLES: &[(&str, &str)] = &[("user", "User"), ("admin", "Admin")];

fn check_email(email: &str, errors: &mut FieldErrors) {
    if email.trim().is_empty() {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(email.trim()) {
        errors.insert("email", "Please enter a valid email address");
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl Form for LoginForm {
    type Payload = LoginRequest;

    fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        check_email(&self.email, &mut errors);
        if self.password.is_empty() {
            errors.insert("password", "Password is required");
        }
        errors.into_result(|| LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// One of `ROLES`, empty until chosen
    pub role: String,
}

fn has_mixed_case_and_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

impl Form for SignupForm {
    type Payload = SignupRequest;

    fn validate(&self) -> Result<SignupRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert("name", "Full name is required");
        }
        check_email(&self.email, &mut errors);

        if self.password.is_empty() {
            errors.insert("password", "Password is required");
        } else if self.password.chars().count() < 8 {
            errors.insert("password", "Password must be at least 8 characters");
        } else if !has_mixed_case_and_digit(&self.password) {
            errors.insert("password", "Password must contain uppercase, lowercase, and number");
        }

        if self.confirm_password.is_empty() {
            errors.insert("confirm_password", "Please confirm your password");
        } else if self.password != self.confirm_password {
            errors.insert("confirm_password", "Passwords do not match");
        }

        if !ROLES.iter().any(|(value, _)| *value == self.role) {
            errors.insert("role", "Please select a role");
        }

        errors.into_result(|| SignupRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role.clone(),
        })
    }
}

/// Password meter shown while typing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Empty,
    Weak,
    Fair,
    Strong,
}

impl PasswordStrength {
    pub fn of(password: &str) -> Self {
        let len = password.chars().count();
        if len == 0 {
            PasswordStrength::Empty
        } else if len < 6 {
            PasswordStrength::Weak
        } else if len < 8 || !has_mixed_case_and_digit(password) {
            PasswordStrength::Fair
        } else {
            PasswordStrength::Strong
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Empty => "",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Fair => "Fair",
            PasswordStrength::Strong => "Strong",
        }
    }

    /// Filled bars out of three
    pub fn bars(&self) -> usize {
        match self {
            PasswordStrength::Empty => 0,
            PasswordStrength::Weak => 1,
            PasswordStrength::Fair => 2,
            PasswordStrength::Strong => 3,
        }
    }
}
