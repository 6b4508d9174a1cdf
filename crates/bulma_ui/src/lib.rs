//! Typed HTML fragment renderers for Bulma-style CSS components.
//!
//! Every component is a props record plus a static declaration: the root tag, the base class,
//! and an ordered table of modifier tokens. Rendering is pure string building. The `class`
//! attribute is always the base class, then modifier tokens in declared order, then the
//! caller's extra classes; `id` comes before `class` and caller attributes follow it in
//! insertion order.
//!
//! ```
//! use bulma_ui::prelude::*;
//!
//! let crumb = BreadcrumbProps::default()
//!     .size(Size::Small)
//!     .with_id("crumb1")
//!     .with_class("custom-foo");
//! assert_eq!(
//!     crumb.render().as_str(),
//!     r#"<nav id="crumb1" class="breadcrumb is-small custom-foo"></nav>"#
//! );
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod attributes;
mod components;
mod config;
mod document;
mod error;
mod markup;
mod render;

pub use attributes::{is_valid_attribute_name, Attributes};
pub use components::{
    parse_token, Alignment, BlockProps, BoxProps, BreadcrumbProps, BreadcrumbSeparator,
    ButtonProps, Color, ContainerProps, ContainerWidth, ContentProps, DeleteProps, FooterProps,
    HeadingLevel, HeroProps, HeroSize, IconProps, IconTextProps, LevelProps, MenuProps,
    MessageProps, NotificationProps, SectionProps, SectionSize, Size, SubtitleProps, TabsProps,
    TabsStyle, TagProps, TitleProps, Token,
};
pub use config::RenderConfig;
pub use document::{parse_document, render_document, ComponentNode, Element, Node};
pub use error::{UiError, UiResult};
pub use markup::{escape_attribute, escape_text, Markup};
pub use render::{render, render_with, CommonProps, Component, ComponentSpec, Modifier};

/// Convenience imports for code building pages from components.
pub mod prelude {
    pub use crate::{
        Alignment, Attributes, BlockProps, BoxProps, BreadcrumbProps, BreadcrumbSeparator,
        ButtonProps, Color, CommonProps, Component, ComponentNode, ContainerProps,
        ContainerWidth, ContentProps, DeleteProps, Element, FooterProps, HeadingLevel, HeroProps,
        HeroSize, IconProps, IconTextProps, LevelProps, Markup, MenuProps, MessageProps, Node,
        NotificationProps, RenderConfig, SectionProps, SectionSize, Size, SubtitleProps,
        TabsProps, TabsStyle, TagProps, TitleProps, Token,
    };
}
