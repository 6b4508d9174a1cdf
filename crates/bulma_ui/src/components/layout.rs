use super::*;
use crate::render::CommonProps;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Centered content column, rendered as `<div class="container">`.
pub struct ContainerProps {
    /// Shared id, classes, attributes, and children.
    #[serde(flatten)]
    pub common: CommonProps,
    /// Width behavior across breakpoints.
    pub width: Option<ContainerWidth>,
}

declare_component!(
    ContainerProps,
    "div",
    "container",
    [|props| props.width.map(ContainerWidth::token)]
);

impl ContainerProps {
    /// Sets the width behavior.
    pub fn width(mut self, width: ContainerWidth) -> Self {
        self.width = Some(width);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Page footer, rendered as `<footer class="footer">`.
pub struct FooterProps {
    /// Shared id, classes, attributes, and children.
    #[serde(flatten)]
    pub common: CommonProps,
}

declare_component!(FooterProps, "footer", "footer", []);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Page section, rendered as `<section class="section">`.
pub struct SectionProps {
    /// Shared id, classes, attributes, and children.
    #[serde(flatten)]
    pub common: CommonProps,
    /// Vertical spacing.
    pub size: Option<SectionSize>,
}

declare_component!(
    SectionProps,
    "section",
    "section",
    [|props| props.size.map(SectionSize::token)]
);

impl SectionProps {
    /// Sets the vertical spacing.
    pub fn size(mut self, size: SectionSize) -> Self {
        self.size = Some(size);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Full-width banner, rendered as `<section class="hero">`.
pub struct HeroProps {
    /// Shared id, classes, attributes, and children.
    #[serde(flatten)]
    pub common: CommonProps,
    /// Color modifier.
    pub color: Option<Color>,
    /// Height modifier.
    pub size: Option<HeroSize>,
}

declare_component!(
    HeroProps,
    "section",
    "hero",
    [
        |props| props.color.map(Color::token),
        |props| props.size.map(HeroSize::token),
    ]
);

impl HeroProps {
    /// Sets the color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the height.
    pub fn size(mut self, size: HeroSize) -> Self {
        self.size = Some(size);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
/// Horizontal level bar, rendered as `<nav class="level">`.
pub struct LevelProps {
    /// Shared id, classes, attributes, and children.
    #[serde(flatten)]
    pub common: CommonProps,
    /// Adds `is-mobile`, keeping the bar horizontal on small screens.
    pub is_mobile: bool,
}

declare_component!(
    LevelProps,
    "nav",
    "level",
    [|props| props.is_mobile.then_some("is-mobile")]
);

impl LevelProps {
    /// Keeps the bar horizontal on mobile.
    pub fn mobile(mut self, is_mobile: bool) -> Self {
        self.is_mobile = is_mobile;
        self
    }
}
