use super::*;
use crate::render::CommonProps;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
/// Breadcrumb trail, rendered as `<nav class="breadcrumb">`.
pub struct BreadcrumbProps {
    /// Shared id, classes, attributes, and children.
    #[serde(flatten)]
    pub common: CommonProps,
    /// Adds `is-centered`.
    pub is_centered: bool,
    /// Adds `is-right`.
    pub is_right: bool,
    /// Size modifier.
    pub size: Option<Size>,
    /// Separator style.
    pub separator: Option<BreadcrumbSeparator>,
    /// Adds `is-active`.
    pub is_active: bool,
}

declare_component!(
    BreadcrumbProps,
    "nav",
    "breadcrumb",
    [
        |props| props.is_centered.then_some("is-centered"),
        |props| props.is_right.then_some("is-right"),
        |props| props.size.map(Size::token),
        |props| props.separator.map(BreadcrumbSeparator::token),
        |props| props.is_active.then_some("is-active"),
    ]
);

impl BreadcrumbProps {
    /// Sets the alignment, clearing the other alignment flag.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.is_centered = alignment == Alignment::Centered;
        self.is_right = alignment == Alignment::Right;
        self
    }

    /// Sets the size.
    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the separator style.
    pub fn separator(mut self, separator: BreadcrumbSeparator) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Marks the breadcrumb active.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
/// Vertical navigation menu, rendered as `<aside class="menu">`.
pub struct MenuProps {
    /// Shared id, classes, attributes, and children.
    #[serde(flatten)]
    pub common: CommonProps,
    /// Size modifier.
    pub size: Option<Size>,
    /// Adds `is-active`.
    pub is_active: bool,
    /// Adds `is-selected`.
    pub is_selected: bool,
}

declare_component!(
    MenuProps,
    "aside",
    "menu",
    [
        |props| props.size.map(Size::token),
        |props| props.is_active.then_some("is-active"),
        |props| props.is_selected.then_some("is-selected"),
    ]
);

impl MenuProps {
    /// Sets the size.
    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Marks the menu active.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Marks the menu selected.
    pub fn selected(mut self, is_selected: bool) -> Self {
        self.is_selected = is_selected;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
/// Horizontal tabs, rendered as `<div class="tabs">`.
pub struct TabsProps {
    /// Shared id, classes, attributes, and children.
    #[serde(flatten)]
    pub common: CommonProps,
    /// Size modifier.
    pub size: Option<Size>,
    /// Alignment modifier.
    pub alignment: Option<Alignment>,
    /// Boxed or toggle style.
    pub style: Option<TabsStyle>,
    /// Adds `is-fullwidth`.
    pub is_fullwidth: bool,
}

declare_component!(
    TabsProps,
    "div",
    "tabs",
    [
        |props| props.size.map(Size::token),
        |props| props.alignment.map(Alignment::token),
        |props| props.style.map(TabsStyle::token),
        |props| props.is_fullwidth.then_some("is-fullwidth"),
    ]
);

impl TabsProps {
    /// Sets the size.
    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the alignment.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Sets the visual style.
    pub fn style(mut self, style: TabsStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Stretches tabs over the full width.
    pub fn fullwidth(mut self, is_fullwidth: bool) -> Self {
        self.is_fullwidth = is_fullwidth;
        self
    }
}
