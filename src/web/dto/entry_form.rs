//! Entry creation and editing form.

use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationErrors};

use crate::domain::entities::{EntrySubmission, MAX_TITLE_BYTES, is_storable_title};

const REQUIRED: &str = "This field is required.";
const UNSTORABLE_TITLE: &str =
    "Titles cannot start with a dot or contain slashes or control characters.";
const TITLE_TOO_LONG: &str = "Titles can be at most 252 bytes long.";

/// Raw fields of the entry form as posted by the browser.
///
/// Missing fields deserialize to their defaults so that an incomplete post is
/// reported as field errors rather than rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EntryForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "This field is required."))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "This field is required."))]
    pub content: String,

    /// Hidden field set by the edit page; bypasses the duplicate-title check.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub edit: bool,

    /// Renders the title input read-only. Never read from the request.
    #[serde(skip)]
    pub title_locked: bool,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl EntryForm {
    /// A form pre-filled with an existing entry for the edit page.
    ///
    /// The title is locked and the edit flag is forced on.
    pub fn prefilled(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            edit: true,
            title_locked: true,
        }
    }

    /// Strips surrounding whitespace from both fields and converts CRLF line
    /// endings in the content to LF.
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.content = self.content.trim().replace("\r\n", "\n");
        self
    }

    /// Validates the form and produces a submission.
    ///
    /// The returned form (on either side) is the normalized one, so it can be
    /// redisplayed as the user will see it stored.
    ///
    /// # Errors
    ///
    /// Returns the normalized form together with its field errors, title
    /// errors first.
    pub fn into_submission(self) -> Result<EntrySubmission, (Self, Vec<FieldError>)> {
        let form = self.normalized();

        let mut errors = match form.validate() {
            Ok(()) => Vec::new(),
            Err(e) => collect_field_errors(&e),
        };

        if !form.title.is_empty() && !is_storable_title(&form.title) {
            let message = if form.title.len() > MAX_TITLE_BYTES {
                TITLE_TOO_LONG
            } else {
                UNSTORABLE_TITLE
            };
            errors.push(FieldError {
                field: "title".to_string(),
                message: message.to_string(),
            });
        }

        if !errors.is_empty() {
            errors.sort_by_key(|e| field_rank(&e.field));
            return Err((form, errors));
        }

        Ok(EntrySubmission::new(form.title, form.content, form.edit))
    }
}

impl From<EntrySubmission> for EntryForm {
    fn from(submission: EntrySubmission) -> Self {
        Self {
            title: submission.title,
            content: submission.content,
            edit: submission.edit,
            title_locked: false,
        }
    }
}

/// Flattens validator errors into a list of field errors.
fn collect_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| FieldError {
                field: field.to_string(),
                message: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| REQUIRED.to_string()),
            })
        })
        .collect()
}

fn field_rank(field: &str) -> u8 {
    match field {
        "title" => 0,
        "content" => 1,
        _ => 2,
    }
}

/// Parses a checkbox-style flag: absent, empty, `false` and `0` are false,
/// any other value is true.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(match value {
        None => false,
        Some(v) => {
            let v = v.trim();
            !(v.is_empty() || v.eq_ignore_ascii_case("false") || v == "0")
        }
    })
}
