use thiserror::Error;

/// Raised when the page cannot be wired up because something it binds to
/// is not there. This is the only fatal condition in the app.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("no global `window` available")]
    NoWindow,
    #[error("window has no `document`")]
    NoDocument,
    #[error("required view target `{0}` is absent")]
    MissingTarget(String),
    #[error("view target `{target}` is not a <{expected}>")]
    WrongElementType {
        target: String,
        expected: &'static str,
    },
    #[error("browser rejected `{call}`: {detail}")]
    Browser { call: &'static str, detail: String },
}

impl ConfigurationError {
    pub fn missing(target: impl Into<String>) -> Self {
        Self::MissingTarget(target.into())
    }

    pub fn browser(call: &'static str, value: wasm_bindgen::JsValue) -> Self {
        Self::Browser {
            call,
            detail: value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        }
    }
}
