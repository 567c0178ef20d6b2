//! Lead payload validation

use blomso_domain::{LeadType, NewLead};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

/// Messages returned to the caller, one per failing rule
pub mod messages {
    /// Body parsed as JSON but is null or a scalar
    pub const NOT_AN_OBJECT: &str = "Request body must be a JSON object.";
    /// `type` is missing or not one of the two values
    pub const INVALID_TYPE: &str = "type must be \"investor\" or \"operator\".";
    /// `name` is missing, not a string, or blank
    pub const NAME_REQUIRED: &str = "name is required.";
    /// `email` is missing, not a string, or malformed
    pub const INVALID_EMAIL: &str = "A valid email is required.";
    /// `company` is missing, not a string, or blank
    pub const COMPANY_REQUIRED: &str = "company is required.";
    /// `message` is present but not a string
    pub const INVALID_MESSAGE: &str = "message must be a string if provided.";
}

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Trims whitespace plus the byte-order mark, which browsers also strip.
fn trim(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Validate a parsed request body
///
/// Returns the normalised lead (trimmed fields, lowercased email) or every
/// rule that failed, in a fixed order. Arrays carry no named fields, so
/// every field rule runs against them and fails.
pub fn validate_lead(body: &Value) -> Result<NewLead, Vec<String>> {
    let empty = Map::new();
    let fields = match body {
        Value::Object(fields) => fields,
        Value::Array(_) => &empty,
        _ => return Err(vec![messages::NOT_AN_OBJECT.to_string()]),
    };

    let mut errors = Vec::new();

    let lead_type = str_field(fields, "type").and_then(LeadType::parse);
    if lead_type.is_none() {
        errors.push(messages::INVALID_TYPE.to_string());
    }

    let name = non_blank(fields, "name");
    if name.is_none() {
        errors.push(messages::NAME_REQUIRED.to_string());
    }

    // The pattern is checked against the raw value, before trimming.
    let email = str_field(fields, "email").filter(|email| EMAIL_RE.is_match(email));
    if email.is_none() {
        errors.push(messages::INVALID_EMAIL.to_string());
    }

    let company = non_blank(fields, "company");
    if company.is_none() {
        errors.push(messages::COMPANY_REQUIRED.to_string());
    }

    // Present-but-null counts as "provided and not a string".
    let message = match fields.get("message") {
        None => None,
        Some(Value::String(message)) => Some(trim(message).to_string()),
        Some(_) => {
            errors.push(messages::INVALID_MESSAGE.to_string());
            None
        }
    };

    match (lead_type, name, email, company) {
        (Some(lead_type), Some(name), Some(email), Some(company)) if errors.is_empty() => {
            Ok(NewLead {
                lead_type,
                name,
                email: trim(email).to_lowercase(),
                company,
                message,
            })
        }
        _ => Err(errors),
    }
}

fn str_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}

fn non_blank(fields: &Map<String, Value>, key: &str) -> Option<String> {
    str_field(fields, key)
        .map(trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
