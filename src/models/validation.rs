// src/models/validation.rs
// DOCUMENTATION: Custom field validators and violation reporting
// PURPOSE: Shared validation helpers for destination and hotel payloads

use std::sync::OnceLock;

use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::errors::{CatalogError, FieldViolation};

static IMAGE_EXTENSION_RE: OnceLock<Regex> = OnceLock::new();
static UNSPLASH_RE: OnceLock<Regex> = OnceLock::new();
static PICSUM_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn image_extension_re() -> &'static Regex {
    IMAGE_EXTENSION_RE.get_or_init(|| {
        Regex::new(r"(?i)^https?://.+\.(jpg|jpeg|png|gif|webp)(\?.*)?$").unwrap()
    })
}

fn unsplash_re() -> &'static Regex {
    UNSPLASH_RE.get_or_init(|| Regex::new(r"^https?://images\.unsplash\.com/photo-").unwrap())
}

fn picsum_re() -> &'static Regex {
    PICSUM_RE.get_or_init(|| Regex::new(r"^https?://picsum\.photos/\d+/\d+").unwrap())
}

fn phone_re() -> &'static Regex {
    PHONE_RE.get_or_init(|| Regex::new(r"^\+?[1-9][\d\s()-]{0,20}$").unwrap())
}

/// Accepts http(s) URLs ending in a known image extension (an optional query
/// string may follow), plus Unsplash photo and Picsum URLs which serve images
/// without an extension.
pub fn validate_image_url(url: &str) -> Result<(), ValidationError> {
    if image_extension_re().is_match(url)
        || unsplash_re().is_match(url)
        || picsum_re().is_match(url)
    {
        return Ok(());
    }
    let mut error = ValidationError::new("image_url");
    error.message = Some("Please provide a valid image URL".into());
    Err(error)
}

/// International phone number: optional leading `+`, a non-zero first digit,
/// then up to 20 digits, spaces, parentheses or dashes.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone_re().is_match(phone) {
        return Ok(());
    }
    let mut error = ValidationError::new("phone");
    error.message = Some("Please provide a valid phone number".into());
    Err(error)
}

/// Website URLs must carry an explicit http or https scheme.
pub fn validate_website(url: &str) -> Result<(), ValidationError> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(remainder) if !remainder.is_empty() => Ok(()),
        _ => {
            let mut error = ValidationError::new("website");
            error.message = Some("Please provide a valid website URL".into());
            Err(error)
        }
    }
}

/// Uppercase the first character and lowercase the rest. Idempotent, so
/// re-saving an already canonical value never changes it.
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Trim an optional free-text field, dropping it entirely when only
/// whitespace remains.
pub fn normalize_optional(value: &mut Option<String>) {
    if let Some(raw) = value.take() {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            *value = Some(trimmed.to_string());
        }
    }
}

/// Run derive-based validation and convert the failures into the API error
/// shape. All violations are reported, not just the first one found.
pub fn validate_request<T: Validate>(value: &T) -> Result<(), CatalogError> {
    value
        .validate()
        .map_err(|errors| CatalogError::Validation(collect_violations(&errors)))
}

/// Flatten nested validation errors into `FieldViolation`s with camelCase
/// dotted paths. List entries keep their index, e.g. `images.0.url`.
pub fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut out = Vec::new();
    flatten(errors, None, &mut out);
    // HashMap iteration order is unstable, sort for a deterministic report
    out.sort_by(|a, b| a.field.cmp(&b.field).then(a.message.cmp(&b.message)));
    out
}

fn flatten(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, camel_case(field)),
            None => camel_case(field),
        };
        match kind {
            ValidationErrorsKind::Field(failures) => {
                for failure in failures {
                    out.push(FieldViolation::new(path.clone(), describe(failure)));
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten(nested, Some(&path), out),
            ValidationErrorsKind::List(entries) => {
                for (index, nested) in entries {
                    let indexed = format!("{}.{}", path, index);
                    flatten(nested, Some(&indexed), out);
                }
            }
        }
    }
}

fn describe(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => match error.code.as_ref() {
            "email" => "Please provide a valid email address".to_string(),
            "length" => "Value length is out of range".to_string(),
            "range" => "Value is out of range".to_string(),
            code => format!("Failed {} validation", code),
        },
    }
}

/// Rust field names are snake_case but the API reports camelCase, matching
/// the stored document fields.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("paris"), "Paris");
        assert_eq!(capitalize_first("FRANCE"), "France");
        assert_eq!(capitalize_first("new york"), "New york");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_capitalize_first_is_idempotent() {
        let once = capitalize_first("tokyo");
        let twice = capitalize_first(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_optional() {
        let mut present = Some("  spring  ".to_string());
        normalize_optional(&mut present);
        assert_eq!(present, Some("spring".to_string()));

        let mut blank = Some("   ".to_string());
        normalize_optional(&mut blank);
        assert_eq!(blank, None);

        let mut absent: Option<String> = None;
        normalize_optional(&mut absent);
        assert_eq!(absent, None);
    }

    #[test]
    fn test_image_url_extensions() {
        assert!(validate_image_url("https://example.com/photo.jpg").is_ok());
        assert!(validate_image_url("http://example.com/a/b/c.webp").is_ok());
        assert!(validate_image_url("https://example.com/photo.PNG").is_ok());
        assert!(validate_image_url("https://example.com/photo.jpeg?w=800&q=75").is_ok());
        assert!(validate_image_url("https://example.com/photo.bmp").is_err());
        assert!(validate_image_url("ftp://example.com/photo.jpg").is_err());
        assert!(validate_image_url("not a url").is_err());
    }

    #[test]
    fn test_image_url_hosted_providers() {
        assert!(validate_image_url(
            "https://images.unsplash.com/photo-1502602898657-3e91760cbb34"
        )
        .is_ok());
        assert!(validate_image_url("https://picsum.photos/800/600").is_ok());
        assert!(validate_image_url("https://images.unsplash.com/other-123").is_err());
        assert!(validate_image_url("https://picsum.photos/800").is_err());
    }

    #[test]
    fn test_phone_numbers() {
        assert!(validate_phone("+33 1 40 20 50 50").is_ok());
        assert!(validate_phone("971-4-301-7777").is_ok());
        assert!(validate_phone("+81 (3) 6270 2888").is_ok());
        assert!(validate_phone("0123456").is_err());
        assert!(validate_phone("+0 123").is_err());
        assert!(validate_phone("phone").is_err());
    }

    #[test]
    fn test_website_urls() {
        assert!(validate_website("https://www.ritzparis.com").is_ok());
        assert!(validate_website("http://example.com").is_ok());
        assert!(validate_website("www.example.com").is_err());
        assert!(validate_website("https://").is_err());
    }

    #[derive(Validate)]
    struct Inner {
        #[validate(length(min = 1, message = "required"))]
        title: String,
    }

    #[derive(Validate)]
    struct Outer {
        #[validate(length(min = 3, message = "too short"))]
        display_name: String,
        #[validate]
        profile: Inner,
        #[validate]
        entries: Vec<Inner>,
    }

    #[test]
    fn test_collect_violations_flattens_paths() {
        let outer = Outer {
            display_name: "ab".to_string(),
            profile: Inner {
                title: String::new(),
            },
            entries: vec![
                Inner {
                    title: "ok".to_string(),
                },
                Inner {
                    title: String::new(),
                },
            ],
        };

        let errors = outer.validate().unwrap_err();
        let violations = collect_violations(&errors);
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();

        assert_eq!(fields, vec!["displayName", "entries.1.title", "profile.title"]);
        assert_eq!(violations[0].message, "too short");
    }

    #[test]
    fn test_validate_request_maps_to_catalog_error() {
        let outer = Outer {
            display_name: "x".to_string(),
            profile: Inner {
                title: "t".to_string(),
            },
            entries: vec![],
        };

        match validate_request(&outer) {
            Err(CatalogError::Validation(violations)) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "displayName");
            }
            other => panic!("expected validation error, got {:?}", other.err()),
        }
    }
}
