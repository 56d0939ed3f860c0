use serde::{Deserialize, Deserializer, Serialize};

/// Form field names, used as keys of field-level feedback.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Project,
    Message,
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactField::Name => write!(f, "name"),
            ContactField::Email => write!(f, "email"),
            ContactField::Project => write!(f, "project"),
            ContactField::Message => write!(f, "message"),
        }
    }
}

/// Raw contact form fields exactly as the visitor typed them.
///
/// Absent and `null` fields deserialize to empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactFormInput {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub project: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub message: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ContactFormInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        project: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            project: project.into(),
            message: message.into(),
        }
    }
}

/// Form fields after trimming, with the email lower-cased.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SanitizedContactInput {
    pub name: String,
    pub email: String,
    pub project: String,
    pub message: String,
}

/// Normalize raw input. Idempotent and infallible.
pub fn sanitize(input: &ContactFormInput) -> SanitizedContactInput {
    SanitizedContactInput {
        name: input.name.trim().to_string(),
        email: input.email.trim().to_lowercase(),
        project: input.project.trim().to_string(),
        message: input.message.trim().to_string(),
    }
}

impl From<SanitizedContactInput> for ContactFormInput {
    fn from(value: SanitizedContactInput) -> Self {
        Self {
            name: value.name,
            email: value.email,
            project: value.project,
            message: value.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_every_field_and_lowercases_email() {
        let raw = ContactFormInput::new(
            "  John Doe ",
            "\tJohn@Example.COM  ",
            " Portfolio site\n",
            "   Hello there   ",
        );

        let clean = sanitize(&raw);

        assert_eq!(clean.name, "John Doe");
        assert_eq!(clean.email, "john@example.com");
        assert_eq!(clean.project, "Portfolio site");
        assert_eq!(clean.message, "Hello there");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let samples = [
            ContactFormInput::new(" a ", " B@C.D ", " p ", " m "),
            ContactFormInput::new("", "", "", ""),
            ContactFormInput::new("Ünïcode  ", "  ÄDA@Example.org", "x", "  multi\nline  "),
        ];

        for raw in samples {
            let once = sanitize(&raw);
            let twice = sanitize(&ContactFormInput::from(once.clone()));
            assert_eq!(once, twice);
            assert_eq!(once.email, once.email.to_lowercase());
        }
    }

    #[test]
    fn absent_fields_deserialize_as_empty() {
        let raw: ContactFormInput = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(raw.name, "Ada");
        assert_eq!(raw.email, "");
        assert_eq!(raw.project, "");
        assert_eq!(raw.message, "");
    }

    #[test]
    fn null_fields_deserialize_as_empty() {
        let raw: ContactFormInput =
            serde_json::from_str(r#"{"name":null,"email":"a@b.io","project":null}"#).unwrap();
        assert_eq!(raw.name, "");
        assert_eq!(raw.email, "a@b.io");
        assert_eq!(raw.project, "");
        assert_eq!(raw.message, "");
    }

    #[test]
    fn non_string_fields_are_rejected() {
        assert!(serde_json::from_str::<ContactFormInput>(r#"{"name":42}"#).is_err());
    }

    #[test]
    fn interior_whitespace_is_preserved() {
        let clean = sanitize(&ContactFormInput::new("Ada  Lovelace", "a@b.io", "p", "line one\n\nline two"));
        assert_eq!(clean.name, "Ada  Lovelace");
        assert_eq!(clean.message, "line one\n\nline two");
    }
}
