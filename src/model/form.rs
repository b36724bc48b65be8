//! Validation rules for the login and shipping query forms.
//!
//! Both forms are validated in the browser before anything is written or sent. A form either
//! converts into the value it submits ([`SessionMarker`] or [`CostRequestDto`]) or into a set
//! of per-field messages shown inline under the inputs.

use crate::model::{session::SessionMarker, shipping::CostRequestDto};

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Weight pre-filled in the shipping form, in grams
pub const DEFAULT_WEIGHT_GRAMS: u32 = 1000;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginFormErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginFormErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl LoginForm {
    /// Validates the form and returns the session marker to write on success
    ///
    /// The password is only checked for length; it is never sent anywhere.
    pub fn validate(&self) -> Result<SessionMarker, LoginFormErrors> {
        let mut errors = LoginFormErrors::default();

        if !is_valid_email(&self.email) {
            errors.email = Some("Email must be valid.");
        }

        if self.password.chars().count() < PASSWORD_MIN_LENGTH {
            errors.password = Some("Password must be at least 6 characters.");
        }

        if errors.is_empty() {
            Ok(SessionMarker::new(self.email.clone()))
        } else {
            Err(errors)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShippingForm {
    pub origin: String,
    pub destination: String,
    /// Raw contents of the weight input
    pub weight: String,
    pub courier: String,
}

impl Default for ShippingForm {
    fn default() -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            weight: DEFAULT_WEIGHT_GRAMS.to_string(),
            courier: String::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShippingFormErrors {
    pub origin: Option<&'static str>,
    pub destination: Option<&'static str>,
    pub weight: Option<&'static str>,
    pub courier: Option<&'static str>,
}

impl ShippingFormErrors {
    pub fn is_empty(&self) -> bool {
        self.origin.is_none()
            && self.destination.is_none()
            && self.weight.is_none()
            && self.courier.is_none()
    }
}

impl ShippingForm {
    /// Validates the form and returns the request body for `POST /api/check-costs`
    pub fn validate(&self) -> Result<CostRequestDto, ShippingFormErrors> {
        let mut errors = ShippingFormErrors::default();

        if self.origin.is_empty() {
            errors.origin = Some("Origin city must be selected");
        }
        if self.destination.is_empty() {
            errors.destination = Some("Destination city must be selected");
        }
        if self.courier.is_empty() {
            errors.courier = Some("Courier must be selected");
        }

        let weight = match parse_weight(&self.weight) {
            Ok(weight) => Some(weight),
            Err(message) => {
                errors.weight = Some(message);
                None
            }
        };

        match weight {
            Some(weight) if errors.is_empty() => Ok(CostRequestDto {
                origin: self.origin.clone(),
                destination: self.destination.clone(),
                weight,
                courier: self.courier.clone(),
            }),
            _ => Err(errors),
        }
    }
}

fn parse_weight(input: &str) -> Result<u32, &'static str> {
    let weight = input
        .trim()
        .parse::<i64>()
        .map_err(|_| "Weight must be a number")?;

    if weight < 1 {
        return Err("Weight must be at least 1 gram");
    }

    u32::try_from(weight).map_err(|_| "Weight is too large")
}

/// Basic email format validation
fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > EMAIL_MAX_LENGTH {
        return false;
    }

    // Must contain exactly one @
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }

    if local.is_empty() || local.len() > 64 || local.chars().any(char::is_whitespace) {
        return false;
    }

    if domain.is_empty() || !domain.contains('.') {
        return false;
    }

    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }

    // Domain shouldn't start or end with dot or hyphen, nor contain empty labels
    if domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) || domain.contains("..") {
        return false;
    }

    true
}
