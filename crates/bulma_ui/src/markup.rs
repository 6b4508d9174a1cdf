//! Markup fragments and HTML escaping.

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

/// An owned HTML fragment that is trusted to be well formed.
///
/// Renderers return `Markup`, and components accept it as children. Use [`Markup::text`] for
/// caller-supplied text so it is escaped before it lands in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    /// Returns an empty fragment.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Wraps HTML the caller already trusts.
    pub fn raw(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Escapes text content and wraps it as a fragment.
    pub fn text(text: &str) -> Self {
        Self(escape_text(text).into_owned())
    }

    /// Appends another fragment.
    pub fn push(&mut self, other: &Markup) {
        self.0.push_str(&other.0);
    }

    /// Returns `true` when the fragment has no content.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the fragment text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the fragment and returns its text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Markup {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Markup> for String {
    fn from(markup: Markup) -> Self {
        markup.0
    }
}

impl Extend<Markup> for Markup {
    fn extend<I: IntoIterator<Item = Markup>>(&mut self, iter: I) {
        for fragment in iter {
            self.0.push_str(&fragment.0);
        }
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut markup = Markup::empty();
        markup.extend(iter);
        markup
    }
}

/// Escapes a value for use inside a double-quoted attribute.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    escape_with(value, |ch| match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    })
}

/// Escapes text content placed between tags.
pub fn escape_text(value: &str) -> Cow<'_, str> {
    escape_with(value, |ch| match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    })
}

fn escape_with(value: &str, entity: impl Fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    let Some(first) = value.find(|ch| entity(ch).is_some()) else {
        return Cow::Borrowed(value);
    };

    let mut out = String::with_capacity(value.len() + 8);
    out.push_str(&value[..first]);
    for ch in value[first..].chars() {
        match entity(ch) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
    Cow::Owned(out)
}
