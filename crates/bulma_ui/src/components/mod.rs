//! Bulma component declarations and their shared modifier tokens.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{UiError, UiResult};

// Implements `Component` for a props struct with a `common` field. Must stay above the
// submodule declarations so they see it.
macro_rules! declare_component {
    ($props:ty, $tag:literal, $base:literal, [$($modifier:expr),* $(,)?]) => {
        impl $crate::render::Component for $props {
            const SPEC: $crate::render::ComponentSpec =
                $crate::render::ComponentSpec::new($tag, $base);
            const MODIFIERS: &'static [$crate::render::Modifier<Self>] = &[$($modifier),*];

            fn common(&self) -> &$crate::render::CommonProps {
                &self.common
            }

            fn common_mut(&mut self) -> &mut $crate::render::CommonProps {
                &mut self.common
            }
        }
    };
}

mod elements;
mod feedback;
mod layout;
mod navigation;

pub use elements::{
    BlockProps, BoxProps, ButtonProps, ContentProps, DeleteProps, IconProps, IconTextProps,
    SubtitleProps, TagProps, TitleProps,
};
pub use feedback::{MessageProps, NotificationProps};
pub use layout::{ContainerProps, FooterProps, HeroProps, LevelProps, SectionProps};
pub use navigation::{BreadcrumbProps, MenuProps, TabsProps};

/// A closed set of modifier values that map to class tokens.
pub trait Token: Copy + 'static {
    /// Token family name used in error messages.
    const KIND: &'static str;
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Bare value name, for example `medium`.
    fn name(self) -> &'static str;

    /// Class token, for example `is-medium`.
    fn token(self) -> &'static str;
}

/// Parses either the bare name (`medium`) or the class token (`is-medium`).
pub fn parse_token<T: Token>(value: &str) -> UiResult<T> {
    let value = value.trim();
    T::ALL
        .iter()
        .copied()
        .find(|candidate| candidate.name() == value || candidate.token() == value)
        .ok_or_else(|| UiError::UnknownToken {
            kind: T::KIND,
            value: value.to_string(),
        })
}

macro_rules! token_from_str {
    ($($token:ty),* $(,)?) => {
        $(
            impl FromStr for $token {
                type Err = UiError;

                fn from_str(value: &str) -> UiResult<Self> {
                    parse_token(value)
                }
            }
        )*
    };
}

token_from_str!(
    Size,
    Color,
    Alignment,
    BreadcrumbSeparator,
    TabsStyle,
    ContainerWidth,
    SectionSize,
    HeroSize,
    HeadingLevel,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Shared size modifier.
pub enum Size {
    /// `is-small`.
    Small,
    /// `is-normal`.
    Normal,
    /// `is-medium`.
    Medium,
    /// `is-large`.
    Large,
}

impl Token for Size {
    const KIND: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Small, Self::Normal, Self::Medium, Self::Large];

    fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Small => "is-small",
            Self::Normal => "is-normal",
            Self::Medium => "is-medium",
            Self::Large => "is-large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Shared color modifier.
pub enum Color {
    /// White.
    White,
    /// Black.
    Black,
    /// Light.
    Light,
    /// Dark.
    Dark,
    /// Primary brand color.
    Primary,
    /// Link color.
    Link,
    /// Informational.
    Info,
    /// Success.
    Success,
    /// Warning.
    Warning,
    /// Danger.
    Danger,
}

impl Token for Color {
    const KIND: &'static str = "color";
    const ALL: &'static [Self] = &[
        Self::White,
        Self::Black,
        Self::Light,
        Self::Dark,
        Self::Primary,
        Self::Link,
        Self::Info,
        Self::Success,
        Self::Warning,
        Self::Danger,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Primary => "primary",
            Self::Link => "link",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::White => "is-white",
            Self::Black => "is-black",
            Self::Light => "is-light",
            Self::Dark => "is-dark",
            Self::Primary => "is-primary",
            Self::Link => "is-link",
            Self::Info => "is-info",
            Self::Success => "is-success",
            Self::Warning => "is-warning",
            Self::Danger => "is-danger",
        }
    }
}

impl Color {
    /// Text-color helper token, for example `has-text-primary`.
    pub fn text_token(self) -> &'static str {
        match self {
            Self::White => "has-text-white",
            Self::Black => "has-text-black",
            Self::Light => "has-text-light",
            Self::Dark => "has-text-dark",
            Self::Primary => "has-text-primary",
            Self::Link => "has-text-link",
            Self::Info => "has-text-info",
            Self::Success => "has-text-success",
            Self::Warning => "has-text-warning",
            Self::Danger => "has-text-danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Horizontal alignment modifier.
pub enum Alignment {
    /// `is-centered`.
    Centered,
    /// `is-right`.
    Right,
}

impl Token for Alignment {
    const KIND: &'static str = "alignment";
    const ALL: &'static [Self] = &[Self::Centered, Self::Right];

    fn name(self) -> &'static str {
        match self {
            Self::Centered => "centered",
            Self::Right => "right",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Centered => "is-centered",
            Self::Right => "is-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Breadcrumb separator style.
pub enum BreadcrumbSeparator {
    /// Arrow separators.
    Arrow,
    /// Bullet separators.
    Bullet,
    /// Dot separators.
    Dot,
    /// "Succeeds" separators.
    Succeeds,
}

impl Token for BreadcrumbSeparator {
    const KIND: &'static str = "breadcrumb separator";
    const ALL: &'static [Self] = &[Self::Arrow, Self::Bullet, Self::Dot, Self::Succeeds];

    fn name(self) -> &'static str {
        match self {
            Self::Arrow => "arrow",
            Self::Bullet => "bullet",
            Self::Dot => "dot",
            Self::Succeeds => "succeeds",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Arrow => "has-arrow-separator",
            Self::Bullet => "has-bullet-separator",
            Self::Dot => "has-dot-separator",
            Self::Succeeds => "has-succeeds-separator",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Tabs visual style.
pub enum TabsStyle {
    /// Classic boxed tabs.
    Boxed,
    /// Mutually exclusive toggle buttons.
    Toggle,
    /// Toggle buttons with rounded ends.
    ToggleRounded,
}

impl Token for TabsStyle {
    const KIND: &'static str = "tabs style";
    const ALL: &'static [Self] = &[Self::Boxed, Self::Toggle, Self::ToggleRounded];

    fn name(self) -> &'static str {
        match self {
            Self::Boxed => "boxed",
            Self::Toggle => "toggle",
            Self::ToggleRounded => "toggle-rounded",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Boxed => "is-boxed",
            Self::Toggle => "is-toggle",
            // Rounded toggles need both classes.
            Self::ToggleRounded => "is-toggle is-toggle-rounded",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Container width behavior.
pub enum ContainerWidth {
    /// Full width with side margins at every breakpoint.
    #[serde(rename = "fluid")]
    Fluid,
    /// Full width until the widescreen breakpoint.
    #[serde(rename = "widescreen")]
    Widescreen,
    /// Full width until the fullhd breakpoint.
    #[serde(rename = "fullhd")]
    FullHd,
    /// Capped at the desktop width.
    #[serde(rename = "max-desktop")]
    MaxDesktop,
    /// Capped at the widescreen width.
    #[serde(rename = "max-widescreen")]
    MaxWidescreen,
}

impl Token for ContainerWidth {
    const KIND: &'static str = "container width";
    const ALL: &'static [Self] = &[
        Self::Fluid,
        Self::Widescreen,
        Self::FullHd,
        Self::MaxDesktop,
        Self::MaxWidescreen,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Fluid => "fluid",
            Self::Widescreen => "widescreen",
            Self::FullHd => "fullhd",
            Self::MaxDesktop => "max-desktop",
            Self::MaxWidescreen => "max-widescreen",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Fluid => "is-fluid",
            Self::Widescreen => "is-widescreen",
            Self::FullHd => "is-fullhd",
            Self::MaxDesktop => "is-max-desktop",
            Self::MaxWidescreen => "is-max-widescreen",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Section spacing.
pub enum SectionSize {
    /// `is-medium`.
    Medium,
    /// `is-large`.
    Large,
}

impl Token for SectionSize {
    const KIND: &'static str = "section size";
    const ALL: &'static [Self] = &[Self::Medium, Self::Large];

    fn name(self) -> &'static str {
        match self {
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Medium => "is-medium",
            Self::Large => "is-large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Hero height.
pub enum HeroSize {
    /// `is-small`.
    #[serde(rename = "small")]
    Small,
    /// `is-medium`.
    #[serde(rename = "medium")]
    Medium,
    /// `is-large`.
    #[serde(rename = "large")]
    Large,
    /// Half the viewport height.
    #[serde(rename = "halfheight")]
    HalfHeight,
    /// Full viewport height.
    #[serde(rename = "fullheight")]
    FullHeight,
}

impl Token for HeroSize {
    const KIND: &'static str = "hero size";
    const ALL: &'static [Self] = &[
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::HalfHeight,
        Self::FullHeight,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::HalfHeight => "halfheight",
            Self::FullHeight => "fullheight",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Small => "is-small",
            Self::Medium => "is-medium",
            Self::Large => "is-large",
            Self::HalfHeight => "is-halfheight",
            Self::FullHeight => "is-fullheight",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Heading scale, `is-1` (largest) through `is-6`.
pub enum HeadingLevel {
    /// `is-1`.
    #[serde(rename = "1")]
    One,
    /// `is-2`.
    #[serde(rename = "2")]
    Two,
    /// `is-3`.
    #[serde(rename = "3")]
    Three,
    /// `is-4`.
    #[serde(rename = "4")]
    Four,
    /// `is-5`.
    #[serde(rename = "5")]
    Five,
    /// `is-6`.
    #[serde(rename = "6")]
    Six,
}

impl Token for HeadingLevel {
    const KIND: &'static str = "heading level";
    const ALL: &'static [Self] = &[
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::One => "is-1",
            Self::Two => "is-2",
            Self::Three => "is-3",
            Self::Four => "is-4",
            Self::Five => "is-5",
            Self::Six => "is-6",
        }
    }
}
