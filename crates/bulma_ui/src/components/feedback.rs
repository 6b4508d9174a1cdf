use super::*;
use crate::render::CommonProps;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Colored message block, rendered as `<article class="message">`.
pub struct MessageProps {
    /// Shared id, classes, attributes, and children.
    #[serde(flatten)]
    pub common: CommonProps,
    /// Color modifier.
    pub color: Option<Color>,
    /// Size modifier.
    pub size: Option<Size>,
}

declare_component!(
    MessageProps,
    "article",
    "message",
    [
        |props| props.color.map(Color::token),
        |props| props.size.map(Size::token),
    ]
);

impl MessageProps {
    /// Sets the color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the size.
    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
/// Alert banner, rendered as `<div class="notification">`.
pub struct NotificationProps {
    /// Shared id, classes, attributes, and children.
    #[serde(flatten)]
    pub common: CommonProps,
    /// Color modifier.
    pub color: Option<Color>,
    /// Adds `is-light`.
    pub is_light: bool,
}

declare_component!(
    NotificationProps,
    "div",
    "notification",
    [
        |props| props.color.map(Color::token),
        |props| props.is_light.then_some("is-light"),
    ]
);

impl NotificationProps {
    /// Sets the color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Uses the light color variant.
    pub fn light(mut self, is_light: bool) -> Self {
        self.is_light = is_light;
        self
    }
}
