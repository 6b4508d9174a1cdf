//! Serializable component trees.
//!
//! A document is a list of [`Node`]s. Component nodes are tagged by a `component` key holding
//! the kebab-case component name; their props sit next to the tag and nested nodes go under
//! `children`:
//!
//! ```json
//! [
//!   {
//!     "component": "breadcrumb",
//!     "id": "crumbs",
//!     "size": "small",
//!     "children": ["Home"]
//!   }
//! ]
//! ```
//!
//! Text nodes are plain JSON strings and are escaped when rendered.
//!
//! Props are flattened next to the tag, so keys that name no prop are ignored rather than
//! rejected: a misspelled `"is-shadowles": true` leaves the modifier unset. Values of known
//! keys are still checked, and an unknown token value is a [`UiError::Document`].

use serde::{Deserialize, Serialize};

use crate::components::{
    BlockProps, BoxProps, BreadcrumbProps, ButtonProps, ContainerProps, ContentProps,
    DeleteProps, FooterProps, HeroProps, IconProps, IconTextProps, LevelProps, MenuProps,
    MessageProps, NotificationProps, SectionProps, SubtitleProps, TabsProps, TagProps,
    TitleProps,
};
use crate::config::RenderConfig;
use crate::error::{UiError, UiResult};
use crate::markup::Markup;
use crate::render::Component;

/// One node of a component tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Text content, escaped on render.
    Text(String),
    /// A component with its props and nested nodes.
    Component(Box<ComponentNode>),
}

impl Node {
    /// Creates a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Renders the node and its descendants.
    pub fn render_with(&self, config: &RenderConfig) -> Markup {
        match self {
            Self::Text(text) => Markup::text(text),
            Self::Component(component) => component.render_with(config),
        }
    }

    fn count(&self) -> usize {
        match self {
            Self::Text(_) => 1,
            Self::Component(component) => {
                1 + component.children().iter().map(Node::count).sum::<usize>()
            }
        }
    }
}

impl From<ComponentNode> for Node {
    fn from(component: ComponentNode) -> Self {
        Self::Component(Box::new(component))
    }
}

/// A component props record together with nested nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element<P> {
    /// Component props.
    #[serde(flatten)]
    pub props: P,
    /// Nested nodes, rendered after any children already set on the props.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl<P: Component + Clone> Element<P> {
    /// Wraps `props` with no nested nodes.
    pub fn new(props: P) -> Self {
        Self {
            props,
            children: Vec::new(),
        }
    }

    /// Appends a nested node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Renders the element and its nested nodes.
    pub fn render_with(&self, config: &RenderConfig) -> Markup {
        if self.children.is_empty() {
            return self.props.render_with(config);
        }

        let nested: Markup = self
            .children
            .iter()
            .map(|node| node.render_with(config))
            .collect();
        let mut props = self.props.clone();
        props.common_mut().children.push(&nested);
        props.render_with(config)
    }
}

/// Every component a document can name, tagged by `component`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "component", rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum ComponentNode {
    Block(Element<BlockProps>),
    #[serde(rename = "box")]
    BoxElement(Element<BoxProps>),
    Breadcrumb(Element<BreadcrumbProps>),
    Button(Element<ButtonProps>),
    Container(Element<ContainerProps>),
    Content(Element<ContentProps>),
    Delete(Element<DeleteProps>),
    Footer(Element<FooterProps>),
    Hero(Element<HeroProps>),
    Icon(Element<IconProps>),
    IconText(Element<IconTextProps>),
    Level(Element<LevelProps>),
    Menu(Element<MenuProps>),
    Message(Element<MessageProps>),
    Notification(Element<NotificationProps>),
    Section(Element<SectionProps>),
    Subtitle(Element<SubtitleProps>),
    Tabs(Element<TabsProps>),
    Tag(Element<TagProps>),
    Title(Element<TitleProps>),
}

macro_rules! each_component_node {
    ($node:expr, $element:ident => $body:expr) => {
        match $node {
            ComponentNode::Block($element) => $body,
            ComponentNode::BoxElement($element) => $body,
            ComponentNode::Breadcrumb($element) => $body,
            ComponentNode::Button($element) => $body,
            ComponentNode::Container($element) => $body,
            ComponentNode::Content($element) => $body,
            ComponentNode::Delete($element) => $body,
            ComponentNode::Footer($element) => $body,
            ComponentNode::Hero($element) => $body,
            ComponentNode::Icon($element) => $body,
            ComponentNode::IconText($element) => $body,
            ComponentNode::Level($element) => $body,
            ComponentNode::Menu($element) => $body,
            ComponentNode::Message($element) => $body,
            ComponentNode::Notification($element) => $body,
            ComponentNode::Section($element) => $body,
            ComponentNode::Subtitle($element) => $body,
            ComponentNode::Tabs($element) => $body,
            ComponentNode::Tag($element) => $body,
            ComponentNode::Title($element) => $body,
        }
    };
}

impl ComponentNode {
    /// Renders the component and its nested nodes.
    pub fn render_with(&self, config: &RenderConfig) -> Markup {
        each_component_node!(self, element => element.render_with(config))
    }

    /// Nested nodes of the component.
    pub fn children(&self) -> &[Node] {
        each_component_node!(self, element => &element.children)
    }
}

/// Parses a JSON document holding either one node or an array of nodes.
pub fn parse_document(text: &str) -> UiResult<Vec<Node>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Document {
        Many(Vec<Node>),
        One(Node),
    }

    let document: Document =
        serde_json::from_str(text).map_err(|err| UiError::Document(err.to_string()))?;
    let nodes = match document {
        Document::Many(nodes) => nodes,
        Document::One(node) => vec![node],
    };
    tracing::debug!(
        roots = nodes.len(),
        nodes = nodes.iter().map(Node::count).sum::<usize>(),
        "parsed component document"
    );
    Ok(nodes)
}

/// Renders `nodes` in order as one fragment.
pub fn render_document(nodes: &[Node], config: &RenderConfig) -> Markup {
    nodes.iter().map(|node| node.render_with(config)).collect()
}
