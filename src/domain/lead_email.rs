use std::fmt::Display;

use validator::validate_email;

#[derive(Debug, Clone)]
pub struct LeadEmail(String);

impl LeadEmail {
    pub fn parse(s: String) -> Result<Self, String> {
        match validate_email(&s) {
            true => Ok(Self(s)),
            false => Err(format!("{} is not a valid email address", s)),
        }
    }
}

impl Display for LeadEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for LeadEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
