// ABOUTME: Credential format rules applied at registration and password change.
// ABOUTME: Emails must be firstname.lastname@university.com; passwords are letters then digits.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]+\.[A-Za-z]+@university\.com$").expect("email pattern is valid")
});

// Uppercase first, at least five letters total, then at least three digits.
static PASSWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z]{4,}[0-9]{3,}$").expect("password pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_password(password: &str) -> bool {
    PASSWORD_RE.is_match(password)
}
