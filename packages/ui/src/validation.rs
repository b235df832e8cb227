//! Client-side form validation. Every rule is checked and all failures are
//! reported together, in a fixed order.

use std::sync::LazyLock;

use api::NewPost;
use regex::Regex;

pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_CONTENT_CHARS: usize = 1000;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-\(\)]+$").expect("valid phone regex"));

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

pub fn validate_post_form(post: &NewPost) -> ValidationResult {
    let title = post.title.trim();
    let content = post.content.trim();
    let mut errors = Vec::new();

    if title.is_empty() {
        errors.push("Title is required".to_string());
    }
    if content.is_empty() {
        errors.push("Content is required".to_string());
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        errors.push(format!("Title must be less than {MAX_TITLE_CHARS} characters"));
    }
    if content.chars().count() > MAX_CONTENT_CHARS {
        errors.push(format!("Content must be less than {MAX_CONTENT_CHARS} characters"));
    }

    ValidationResult::from_errors(errors)
}

/// Fields that are `None` are not validated. The phone number is optional even
/// when present: a blank value passes.
pub fn validate_user_form(
    name: Option<&str>,
    email: Option<&str>,
    phone: Option<&str>,
) -> ValidationResult {
    let mut errors = Vec::new();

    if let Some(name) = name {
        if name.trim().is_empty() {
            errors.push("Name is required".to_string());
        }
    }
    if let Some(email) = email {
        if !EMAIL_RE.is_match(email) {
            errors.push("Please enter a valid email address".to_string());
        }
    }
    if let Some(phone) = phone {
        if !phone.trim().is_empty() && !PHONE_RE.is_match(phone) {
            errors.push("Please enter a valid phone number".to_string());
        }
    }

    ValidationResult::from_errors(errors)
}
