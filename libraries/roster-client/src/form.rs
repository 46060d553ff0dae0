//! Client-side form validation for user submissions.
//!
//! Mirrors the rules the presentation layer enforces before calling the API;
//! the server only re-checks that `email` is present.

use chrono::{NaiveDate, Utc};
use roster_core::{CreateUser, Role};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Form payload validated before submission.
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    pub name: String,

    #[validate(email(message = "Invalid email address."))]
    pub email: String,

    /// Restricted to `admin` / `user` by the type itself
    pub role: Role,

    #[validate(custom(function = "validate_date_of_birth"))]
    pub date_of_birth: String,
}

impl UserForm {
    /// Convert a validated form into a create payload.
    pub fn into_create(self) -> CreateUser {
        CreateUser {
            name: Some(self.name),
            email: Some(self.email),
            role: Some(self.role),
            date_of_birth: Some(self.date_of_birth),
            ..CreateUser::default()
        }
    }
}

/// Validate a date of birth: exact `YYYY-MM-DD`, not later than today.
pub fn validate_date_of_birth(value: &str) -> Result<(), ValidationError> {
    let parsed = NaiveDate::parse_from_str(value, "%Y-%m-%d");

    // Re-format to reject unpadded inputs like "1990-1-1"
    let date = match parsed {
        Ok(date) if date.format("%Y-%m-%d").to_string() == value => date,
        _ => {
            let mut error = ValidationError::new("date_of_birth");
            error.message = Some("Date of birth is required.".into());
            return Err(error);
        }
    };

    if date > Utc::now().date_naive() {
        let mut error = ValidationError::new("date_of_birth");
        error.message = Some("Date of birth cannot be in the future.".into());
        return Err(error);
    }

    Ok(())
}
