//! The shared rendering engine.
//!
//! Every component is a [`Component`] implementation: a fixed [`ComponentSpec`] (root tag plus
//! base class) and a static modifier table evaluated in declared order. The engine turns a
//! property record into one root element:
//!
//! 1. `class` is the base class, then each modifier token the table yields, then the caller's
//!    extra classes in the order given.
//! 2. `id` is written first when non-empty (falling back to an `id` attribute), then `class`,
//!    then the caller's attributes in insertion order.
//! 3. Children follow the opening tag unless the tag is a void element.

use serde::{Deserialize, Serialize};

use crate::attributes::{is_valid_attribute_name, Attributes};
use crate::config::RenderConfig;
use crate::markup::{escape_attribute, Markup};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Fixed identity of a component type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSpec {
    /// Root element tag name.
    pub tag: &'static str,
    /// Class naming the component; always the first class token.
    pub base_class: &'static str,
}

impl ComponentSpec {
    /// Creates a spec for `tag` with `base_class`.
    pub const fn new(tag: &'static str, base_class: &'static str) -> Self {
        Self { tag, base_class }
    }

    /// Returns `true` when the root tag is an HTML void element.
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag)
    }
}

/// One modifier table entry: yields a class token when the modifier is set.
pub type Modifier<P> = fn(&P) -> Option<&'static str>;

/// Fields shared by every property record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonProps {
    /// Root element id; omitted from markup when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Extra classes appended after every modifier token.
    #[serde(rename = "class", skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    /// Extra attributes written after `class`.
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    /// Content placed inside the root element.
    #[serde(skip)]
    pub children: Markup,
}

/// A renderable component declaration.
pub trait Component: Sized + 'static {
    /// Root tag and base class.
    const SPEC: ComponentSpec;
    /// Modifier table, evaluated in order.
    const MODIFIERS: &'static [Modifier<Self>];

    /// Shared fields of the record.
    fn common(&self) -> &CommonProps;

    /// Mutable access to the shared fields of the record.
    fn common_mut(&mut self) -> &mut CommonProps;

    /// Sets the root element id.
    fn with_id(mut self, id: impl Into<String>) -> Self {
        self.common_mut().id = Some(id.into());
        self
    }

    /// Appends an extra class.
    fn with_class(mut self, class: impl Into<String>) -> Self {
        self.common_mut().classes.push(class.into());
        self
    }

    /// Adds an extra attribute.
    ///
    /// An `id` attribute is used as the element id only when the id field is unset or empty.
    /// A `class` attribute is always dropped; use [`Component::with_class`].
    fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.common_mut().attributes.insert(name, value);
        self
    }

    /// Appends child markup.
    fn with_children(mut self, children: Markup) -> Self {
        self.common_mut().children.push(&children);
        self
    }

    /// Renders with the default configuration.
    fn render(&self) -> Markup {
        render(self)
    }

    /// Renders with `config`.
    fn render_with(&self, config: &RenderConfig) -> Markup {
        render_with(self, config)
    }

    /// Returns the composed `class` attribute value, unescaped.
    fn class_list(&self) -> String {
        class_tokens(self, &RenderConfig::default()).join(" ")
    }
}

/// Renders `props` with the default configuration.
pub fn render<C: Component>(props: &C) -> Markup {
    render_with(props, &RenderConfig::default())
}

/// Renders `props` with `config`.
pub fn render_with<C: Component>(props: &C, config: &RenderConfig) -> Markup {
    let tokens = class_tokens(props, config);
    render_element(C::SPEC, &tokens, props.common())
}

fn class_tokens<C: Component>(props: &C, config: &RenderConfig) -> Vec<String> {
    let common = props.common();
    let mut tokens = Vec::with_capacity(1 + C::MODIFIERS.len() + common.classes.len());
    config.push_framework_token(&mut tokens, C::SPEC.base_class);
    for token in C::MODIFIERS.iter().filter_map(|modifier| modifier(props)) {
        config.push_framework_token(&mut tokens, token);
    }
    tokens.extend(
        common
            .classes
            .iter()
            .flat_map(|class| class.split_ascii_whitespace())
            .map(str::to_string),
    );
    tokens
}

fn render_element(spec: ComponentSpec, tokens: &[String], common: &CommonProps) -> Markup {
    let mut html = String::with_capacity(64 + common.children.as_str().len());
    html.push('<');
    html.push_str(spec.tag);

    let id = common
        .id
        .as_deref()
        .filter(|id| !id.is_empty())
        .or_else(|| common.attributes.get("id").filter(|id| !id.is_empty()));
    if let Some(id) = id {
        push_attribute(&mut html, "id", id);
    }
    if !tokens.is_empty() {
        push_attribute(&mut html, "class", &tokens.join(" "));
    }
    for (name, value) in common.attributes.iter() {
        if name == "id" && id == Some(value) {
            continue;
        }
        if name.eq_ignore_ascii_case("id") || name.eq_ignore_ascii_case("class") {
            tracing::warn!(
                tag = spec.tag,
                attribute = name,
                "skipping reserved attribute; use the dedicated field"
            );
            continue;
        }
        if !is_valid_attribute_name(name) {
            tracing::warn!(tag = spec.tag, attribute = name, "skipping invalid attribute name");
            continue;
        }
        push_attribute(&mut html, name, value);
    }
    html.push('>');

    if spec.is_void() {
        if !common.children.is_empty() {
            tracing::warn!(tag = spec.tag, "dropping children of void element");
        }
    } else {
        html.push_str(common.children.as_str());
        html.push_str("</");
        html.push_str(spec.tag);
        html.push('>');
    }

    tracing::trace!(tag = spec.tag, classes = tokens.len(), "rendered component");
    Markup::raw(html)
}

fn push_attribute(html: &mut String, name: &str, value: &str) {
    html.push(' ');
    html.push_str(name);
    html.push_str("=\"");
    html.push_str(&escape_attribute(value));
    html.push('"');
}
