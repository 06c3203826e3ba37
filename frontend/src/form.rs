use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::config::{BORDER_ERROR, BORDER_NEUTRAL, BORDER_SUCCESS};

// Browser whitespace: Unicode White_Space without U+0085, plus U+FEFF.
const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^{}@]+", WHITESPACE_CLASS);
    Regex::new(&format!(r"^{p}@{p}\.{p}$", p = part)).expect("email pattern is valid")
});

fn is_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// Declared order; also the order errors are searched when scrolling.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn error_id(self) -> &'static str {
        match self {
            Field::Name => "name-error",
            Field::Email => "email-error",
            Field::Subject => "subject-error",
            Field::Message => "message-error",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Subject must be at least 5 characters long")]
    SubjectTooShort,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

fn trimmed_len(value: &str) -> usize {
    value.trim_matches(is_whitespace).chars().count()
}

pub fn validate(field: Field, value: &str) -> Result<(), ValidationError> {
    let ok = match field {
        Field::Name => trimmed_len(value) >= 2,
        // Untrimmed on purpose: surrounding whitespace fails the pattern.
        Field::Email => EMAIL_PATTERN.is_match(value),
        Field::Subject => trimmed_len(value) >= 5,
        Field::Message => trimmed_len(value) >= 10,
    };
    if ok {
        return Ok(());
    }
    Err(match field {
        Field::Name => ValidationError::NameTooShort,
        Field::Email => ValidationError::InvalidEmail,
        Field::Subject => ValidationError::SubjectTooShort,
        Field::Message => ValidationError::MessageTooShort,
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Untouched,
    Valid,
    Invalid(ValidationError),
}

impl FieldStatus {
    /// Empty unless the field is invalid.
    pub fn error_text(&self) -> String {
        match self {
            FieldStatus::Invalid(err) => err.to_string(),
            _ => String::new(),
        }
    }

    pub fn border_color(&self) -> &'static str {
        match self {
            FieldStatus::Untouched => BORDER_NEUTRAL,
            FieldStatus::Valid => BORDER_SUCCESS,
            FieldStatus::Invalid(_) => BORDER_ERROR,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldStatus::Invalid(_))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub status: FieldStatus,
}

/// The four values of a form that passed validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl SubmissionRecord {
    pub fn success_message(&self) -> String {
        format!(
            "Thank you, {}! Your message has been sent successfully. We'll get back to you soon.",
            self.name
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent(SubmissionRecord),
    Rejected { first_invalid: Field },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuccessBanner {
    pub text: String,
    pub visible: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: [FieldState; 4],
    success: SuccessBanner,
}

impl ContactForm {
    pub fn field(&self, field: Field) -> &FieldState {
        &self.fields[field.index()]
    }

    pub fn value(&self, field: Field) -> &str {
        &self.field(field).value
    }

    #[cfg(test)]
    pub fn status(&self, field: Field) -> FieldStatus {
        self.field(field).status
    }

    pub fn success(&self) -> &SuccessBanner {
        &self.success
    }

    /// A keystroke edit. Showing an error resets the field to neutral;
    /// a field already marked valid keeps its status.
    pub fn input(&mut self, field: Field, value: String) {
        let state = &mut self.fields[field.index()];
        state.value = value;
        if state.status.is_invalid() {
            state.status = FieldStatus::Untouched;
        }
    }

    /// Loss of focus: re-evaluate the field.
    pub fn blur(&mut self, field: Field) -> bool {
        let state = &mut self.fields[field.index()];
        state.status = match validate(field, &state.value) {
            Ok(()) => FieldStatus::Valid,
            Err(err) => FieldStatus::Invalid(err),
        };
        !state.status.is_invalid()
    }

    /// Programmatic fill from a product button. No input event is involved,
    /// so the field status is left alone.
    pub fn prefill_subject(&mut self, product: &str) {
        self.fields[Field::Subject.index()].value = format!("Interested in {}", product);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        // Every field is evaluated so all errors show at once.
        let results: Vec<bool> = Field::ALL.iter().map(|&f| self.blur(f)).collect();
        if let Some(pos) = results.iter().position(|ok| !ok) {
            return SubmitOutcome::Rejected {
                first_invalid: Field::ALL[pos],
            };
        }

        let record = SubmissionRecord {
            name: self.value(Field::Name).to_string(),
            email: self.value(Field::Email).to_string(),
            subject: self.value(Field::Subject).to_string(),
            message: self.value(Field::Message).to_string(),
        };
        self.fields = Default::default();
        self.success = SuccessBanner {
            text: record.success_message(),
            visible: true,
        };
        SubmitOutcome::Sent(record)
    }

    /// Hides the banner; the text stays so the fade-out has something to show.
    pub fn hide_success(&mut self) {
        self.success.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.input(Field::Name, name.into());
        form.input(Field::Email, email.into());
        form.input(Field::Subject, subject.into());
        form.input(Field::Message, message.into());
        form
    }

    #[test]
    fn index_follows_declared_order() {
        for (pos, field) in Field::ALL.into_iter().enumerate() {
            assert_eq!(field.index(), pos);
        }
    }

    #[test]
    fn length_rules_accept_boundary_and_reject_one_below() {
        assert_eq!(validate(Field::Name, "Al"), Ok(()));
        assert_eq!(validate(Field::Name, "A"), Err(ValidationError::NameTooShort));
        assert_eq!(validate(Field::Subject, "Hello"), Ok(()));
        assert_eq!(validate(Field::Subject, "Hell"), Err(ValidationError::SubjectTooShort));
        assert_eq!(validate(Field::Message, "0123456789"), Ok(()));
        assert_eq!(validate(Field::Message, "012345678"), Err(ValidationError::MessageTooShort));
    }

    #[test]
    fn length_rules_count_after_trimming() {
        assert_eq!(validate(Field::Name, "  A  "), Err(ValidationError::NameTooShort));
        assert_eq!(validate(Field::Subject, "   Hi there   "), Ok(()));
        assert_eq!(validate(Field::Message, "     ").unwrap_err().to_string(),
            "Message must be at least 10 characters long");
    }

    #[test]
    fn error_texts_are_exact() {
        assert_eq!(ValidationError::NameTooShort.to_string(), "Name must be at least 2 characters long");
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Please enter a valid email address");
        assert_eq!(ValidationError::SubjectTooShort.to_string(), "Subject must be at least 5 characters long");
        assert_eq!(ValidationError::MessageTooShort.to_string(), "Message must be at least 10 characters long");
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert_eq!(validate(Field::Name, "\u{feff}A\u{feff}"), Err(ValidationError::NameTooShort));
        assert_eq!(validate(Field::Email, "a\u{feff}@b.co"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate(Field::Email, "a@b\u{a0}.co"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn next_line_is_not_whitespace() {
        assert_eq!(validate(Field::Name, "\u{85}A\u{85}"), Ok(()));
        assert_eq!(validate(Field::Email, "a\u{85}@b.co"), Ok(()));
    }

    #[test]
    fn email_pattern() {
        assert!(validate(Field::Email, "a@b.co").is_ok());
        assert!(validate(Field::Email, "first.last@mail.example.org").is_ok());
        for bad in ["a@b", "a.com", "a @b.com", "@b.com", "a@@b.com", "", " a@b.co"] {
            assert_eq!(validate(Field::Email, bad), Err(ValidationError::InvalidEmail), "{:?}", bad);
        }
    }

    #[test]
    fn error_text_present_iff_border_is_error() {
        let mut form = filled("A", "a@b.co", "", "");
        form.blur(Field::Name);
        form.blur(Field::Email);
        for field in Field::ALL {
            let status = form.status(field);
            assert_eq!(!status.error_text().is_empty(), status.border_color() == BORDER_ERROR);
        }
        assert_eq!(form.status(Field::Email).border_color(), BORDER_SUCCESS);
        assert_eq!(form.status(Field::Subject).border_color(), BORDER_NEUTRAL);
    }

    #[test]
    fn typing_clears_a_showing_error_only() {
        let mut form = filled("A", "a@b.co", "", "");
        form.blur(Field::Name);
        form.blur(Field::Email);

        form.input(Field::Name, "Al".into());
        assert_eq!(form.status(Field::Name), FieldStatus::Untouched);

        form.input(Field::Email, "a@b.com".into());
        assert_eq!(form.status(Field::Email), FieldStatus::Valid);
    }

    #[test]
    fn valid_submit_sends_and_resets() {
        let mut form = filled("Ada", "ada@example.com", "Pricing question", "Tell me more please");

        let outcome = form.submit();

        let record = SubmissionRecord {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Pricing question".into(),
            message: "Tell me more please".into(),
        };
        assert_eq!(outcome, SubmitOutcome::Sent(record));
        assert!(form.success().visible);
        assert!(form.success().text.contains("Ada"));
        assert_eq!(
            form.success().text,
            "Thank you, Ada! Your message has been sent successfully. We'll get back to you soon."
        );
        for field in Field::ALL {
            assert_eq!(form.field(field), &FieldState::default());
            assert!(form.status(field).error_text().is_empty());
        }
    }

    #[test]
    fn invalid_submit_marks_each_field_and_sends_nothing() {
        let mut form = filled("Ada", "not-an-email", "Hi", "Long enough message");

        let outcome = form.submit();

        assert_eq!(outcome, SubmitOutcome::Rejected { first_invalid: Field::Email });
        assert!(!form.success().visible);
        assert!(form.success().text.is_empty());
        assert_eq!(form.status(Field::Name).error_text(), "");
        assert_eq!(form.status(Field::Email).error_text(), "Please enter a valid email address");
        assert_eq!(form.status(Field::Subject).error_text(), "Subject must be at least 5 characters long");
        assert_eq!(form.status(Field::Message).error_text(), "");
        assert_eq!(form.value(Field::Name), "Ada");
    }

    #[test]
    fn empty_submit_points_at_name_first() {
        let mut form = ContactForm::default();
        assert_eq!(form.submit(), SubmitOutcome::Rejected { first_invalid: Field::Name });
        assert!(Field::ALL.iter().all(|&f| form.status(f).is_invalid()));
    }

    #[test]
    fn product_prefill_sets_subject() {
        let mut form = ContactForm::default();
        form.prefill_subject("Pro Plan");
        assert_eq!(form.value(Field::Subject), "Interested in Pro Plan");
        assert_eq!(form.status(Field::Subject), FieldStatus::Untouched);
    }

    #[test]
    fn hiding_success_is_idempotent() {
        let mut form = filled("Ada", "ada@example.com", "Pricing question", "Tell me more please");
        form.submit();
        form.hide_success();
        form.hide_success();
        assert!(!form.success().visible);
    }
}
