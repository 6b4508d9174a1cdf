//! Render configuration.

use serde::{Deserialize, Serialize};

use crate::error::{UiError, UiResult};

/// Settings shared by every render call.
///
/// `class_prefix` targets prefixed framework builds (for example `bulma-`): it is prepended to
/// the base class and every modifier token, but never to caller-supplied extra classes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct RenderConfig {
    /// Prefix prepended to framework-owned class tokens.
    pub class_prefix: String,
}

impl RenderConfig {
    /// Creates a config with the given class prefix.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidClassPrefix`] when the prefix contains anything other than
    /// ASCII letters, digits, `-`, or `_`.
    pub fn with_class_prefix(prefix: impl Into<String>) -> UiResult<Self> {
        let config = Self {
            class_prefix: prefix.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML config document.
    ///
    /// ```toml
    /// class-prefix = "bulma-"
    /// ```
    pub fn from_toml_str(text: &str) -> UiResult<Self> {
        let config: Self = toml::from_str(text).map_err(|err| UiError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the prefix can be embedded in class tokens.
    pub fn validate(&self) -> UiResult<()> {
        let valid = self
            .class_prefix
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
        if valid {
            Ok(())
        } else {
            Err(UiError::InvalidClassPrefix(self.class_prefix.clone()))
        }
    }

    /// Appends a framework token to `tokens`, prefixing each space-separated word.
    pub(crate) fn push_framework_token(&self, tokens: &mut Vec<String>, token: &str) {
        tokens.extend(
            token
                .split_ascii_whitespace()
                .map(|word| format!("{}{word}", self.class_prefix)),
        );
    }
}
