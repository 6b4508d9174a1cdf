use super::*;
use crate::render::CommonProps;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Spacing block, rendered as `<div class="block">`.
pub struct BlockProps {
    /// Shared id, classes, attributes, and children.
    #[serde(flatten)]
    pub common: CommonProps,
}

declare_component!(BlockProps, "div", "block", []);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
/// White box with shadow, rendered as `<div class="box">`.
pub struct BoxProps {
    /// Shared id, classes, attributes, and children.
    #[serde(flatten)]
    pub common: CommonProps,
    /// Adds `is-shadowless`.
    pub is_shadowless: bool,
}

declare_component!(
    BoxProps,
    "div",
    "box",
    [|props| props.is_shadowless.then_some("is-shadowless")]
);

impl BoxProps {
    /// Removes the box shadow.
    pub fn shadowless(mut self, is_shadowless: bool) -> Self {
        self.is_shadowless = is_shadowless;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Typography wrapper for raw HTML, rendered as `<div class="content">`.
pub struct ContentProps {
    /// Shared id, classes, attributes, and children.
    #[serde(flatten)]
    pub common: CommonProps,
    /// Size modifier.
    pub size: Option<Size>,
}

declare_component!(
    ContentProps,
    "div",
    "content",
    [|props| props.size.map(Size::token)]
);

impl ContentProps {
    /// Sets the size.
    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Close button, rendered as `<button class="delete">`.
pub struct DeleteProps {
    /// Shared id, classes, attributes, and children.
    #[serde(flatten)]
    pub common: CommonProps,
    /// Size modifier.
    pub size: Option<Size>,
}

declare_component!(
    DeleteProps,
    "button",
    "delete",
    [|props| props.size.map(Size::token)]
);

impl DeleteProps {
    /// Sets the size.
    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Icon container, rendered as `<span class="icon">`.
pub struct IconProps {
    /// Shared id, classes, attributes, and children.
    #[serde(flatten)]
    pub common: CommonProps,
    /// Text color, emitted as `has-text-*`.
    pub color: Option<Color>,
    /// Size modifier.
    pub size: Option<Size>,
}

declare_component!(
    IconProps,
    "span",
    "icon",
    [
        |props| props.color.map(Color::text_token),
        |props| props.size.map(Size::token),
    ]
);

impl IconProps {
    /// Sets the text color.
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
#[serde(default)]
/// Icon plus text pairing, rendered as `<span class="icon-text">`.
pub struct IconTextProps {
    /// Shared id, classes, attributes, and children.
    #[serde(flatten)]
    pub common: CommonProps,
    /// Text color, emitted as `has-text-*`.
    pub color: Option<Color>,
    /// Size modifier.
    pub size: Option<Size>,
}

declare_component!(
    IconTextProps,
    "span",
    "icon-text",
    [
        |props| props.color.map(Color::text_token),
        |props| props.size.map(Size::token),
    ]
);

impl IconTextProps {
    /// Sets the text color.
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
/// Small label, rendered as `<span class="tag">`.
pub struct TagProps {
    /// Shared id, classes, attributes, and children.
    #[serde(flatten)]
    pub common: CommonProps,
    /// Color modifier.
    pub color: Option<Color>,
    /// Size modifier.
    pub size: Option<Size>,
    /// Adds `is-light`.
    pub is_light: bool,
    /// Adds `is-rounded`.
    pub is_rounded: bool,
    /// Adds `is-delete`.
    pub is_delete: bool,
}

declare_component!(
    TagProps,
    "span",
    "tag",
    [
        |props| props.color.map(Color::token),
        |props| props.size.map(Size::token),
        |props| props.is_light.then_some("is-light"),
        |props| props.is_rounded.then_some("is-rounded"),
        |props| props.is_delete.then_some("is-delete"),
    ]
);

impl TagProps {
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

    /// Uses the light color variant.
    pub fn light(mut self, is_light: bool) -> Self {
        self.is_light = is_light;
        self
    }

    /// Rounds the tag ends.
    pub fn rounded(mut self, is_rounded: bool) -> Self {
        self.is_rounded = is_rounded;
        self
    }

    /// Renders the tag as a delete cross.
    pub fn delete(mut self, is_delete: bool) -> Self {
        self.is_delete = is_delete;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
/// Action button, rendered as `<button class="button">`.
pub struct ButtonProps {
    /// Shared id, classes, attributes, and children.
    #[serde(flatten)]
    pub common: CommonProps,
    /// Color modifier.
    pub color: Option<Color>,
    /// Size modifier.
    pub size: Option<Size>,
    /// Adds `is-light`.
    pub is_light: bool,
    /// Adds `is-outlined`.
    pub is_outlined: bool,
    /// Adds `is-inverted`.
    pub is_inverted: bool,
    /// Adds `is-rounded`.
    pub is_rounded: bool,
    /// Adds `is-fullwidth`.
    pub is_fullwidth: bool,
    /// Adds `is-loading`.
    pub is_loading: bool,
    /// Adds `is-static`.
    pub is_static: bool,
}

declare_component!(
    ButtonProps,
    "button",
    "button",
    [
        |props| props.color.map(Color::token),
        |props| props.size.map(Size::token),
        |props| props.is_light.then_some("is-light"),
        |props| props.is_outlined.then_some("is-outlined"),
        |props| props.is_inverted.then_some("is-inverted"),
        |props| props.is_rounded.then_some("is-rounded"),
        |props| props.is_fullwidth.then_some("is-fullwidth"),
        |props| props.is_loading.then_some("is-loading"),
        |props| props.is_static.then_some("is-static"),
    ]
);

impl ButtonProps {
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

    /// Uses the light color variant.
    pub fn light(mut self, is_light: bool) -> Self {
        self.is_light = is_light;
        self
    }

    /// Draws only the outline.
    pub fn outlined(mut self, is_outlined: bool) -> Self {
        self.is_outlined = is_outlined;
        self
    }

    /// Swaps foreground and background colors.
    pub fn inverted(mut self, is_inverted: bool) -> Self {
        self.is_inverted = is_inverted;
        self
    }

    /// Rounds the button ends.
    pub fn rounded(mut self, is_rounded: bool) -> Self {
        self.is_rounded = is_rounded;
        self
    }

    /// Stretches the button over the full width.
    pub fn fullwidth(mut self, is_fullwidth: bool) -> Self {
        self.is_fullwidth = is_fullwidth;
        self
    }

    /// Shows the loading spinner.
    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    /// Makes the button non-interactive.
    pub fn r#static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
/// Page title, rendered as `<h1 class="title">`.
pub struct TitleProps {
    /// Shared id, classes, attributes, and children.
    #[serde(flatten)]
    pub common: CommonProps,
    /// Heading scale.
    pub level: Option<HeadingLevel>,
    /// Adds `is-spaced`, keeping the normal gap to a following subtitle.
    pub is_spaced: bool,
}

declare_component!(
    TitleProps,
    "h1",
    "title",
    [
        |props| props.level.map(HeadingLevel::token),
        |props| props.is_spaced.then_some("is-spaced"),
    ]
);

impl TitleProps {
    /// Sets the heading scale.
    pub fn level(mut self, level: HeadingLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Keeps the normal gap to a following subtitle.
    pub fn spaced(mut self, is_spaced: bool) -> Self {
        self.is_spaced = is_spaced;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Page subtitle, rendered as `<h2 class="subtitle">`.
pub struct SubtitleProps {
    /// Shared id, classes, attributes, and children.
    #[serde(flatten)]
    pub common: CommonProps,
    /// Heading scale.
    pub level: Option<HeadingLevel>,
}

declare_component!(
    SubtitleProps,
    "h2",
    "subtitle",
    [|props| props.level.map(HeadingLevel::token)]
);

impl SubtitleProps {
    /// Sets the heading scale.
    pub fn level(mut self, level: HeadingLevel) -> Self {
        self.level = Some(level);
        self
    }
}
