use bulma_ui::prelude::*;
use bulma_ui::{parse_document, render_document, UiError};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn json_document_renders_nested_components() {
    let text = json!([
        {
            "component": "section",
            "size": "medium",
            "children": [
                {
                    "component": "container",
                    "children": [
                        {"component": "title", "level": "1", "is-spaced": true, "children": ["Docs"]},
                        {"component": "subtitle", "level": "3", "children": ["Components & more"]},
                        {
                            "component": "breadcrumb",
                            "id": "crumbs",
                            "is-centered": true,
                            "separator": "succeeds",
                            "class": ["mt-2"],
                            "attributes": {"aria-label": "breadcrumbs", "data-role": "navi"}
                        }
                    ]
                }
            ]
        },
        {"component": "footer", "children": ["fin"]}
    ])
    .to_string();

    let nodes = parse_document(&text).expect("document");
    assert_eq!(
        render_document(&nodes, &RenderConfig::default()).as_str(),
        concat!(
            r#"<section class="section is-medium"><div class="container">"#,
            r#"<h1 class="title is-1 is-spaced">Docs</h1>"#,
            r#"<h2 class="subtitle is-3">Components &amp; more</h2>"#,
            r#"<nav id="crumbs" class="breadcrumb is-centered has-succeeds-separator mt-2" aria-label="breadcrumbs" data-role="navi"></nav>"#,
            r#"</div></section>"#,
            r#"<footer class="footer">fin</footer>"#,
        )
    );
}

#[test]
fn every_component_name_is_accepted() {
    let names = [
        ("block", r#"<div class="block"></div>"#),
        ("box", r#"<div class="box"></div>"#),
        ("breadcrumb", r#"<nav class="breadcrumb"></nav>"#),
        ("button", r#"<button class="button"></button>"#),
        ("container", r#"<div class="container"></div>"#),
        ("content", r#"<div class="content"></div>"#),
        ("delete", r#"<button class="delete"></button>"#),
        ("footer", r#"<footer class="footer"></footer>"#),
        ("hero", r#"<section class="hero"></section>"#),
        ("icon", r#"<span class="icon"></span>"#),
        ("icon-text", r#"<span class="icon-text"></span>"#),
        ("level", r#"<nav class="level"></nav>"#),
        ("menu", r#"<aside class="menu"></aside>"#),
        ("message", r#"<article class="message"></article>"#),
        ("notification", r#"<div class="notification"></div>"#),
        ("section", r#"<section class="section"></section>"#),
        ("subtitle", r#"<h2 class="subtitle"></h2>"#),
        ("tabs", r#"<div class="tabs"></div>"#),
        ("tag", r#"<span class="tag"></span>"#),
        ("title", r#"<h1 class="title"></h1>"#),
    ];

    for (name, expected) in names {
        let nodes = parse_document(&json!({ "component": name }).to_string())
            .unwrap_or_else(|err| panic!("{name}: {err}"));
        assert_eq!(
            render_document(&nodes, &RenderConfig::default()).as_str(),
            expected,
            "{name}"
        );
    }
}

#[test]
fn prefixed_config_applies_across_the_tree() {
    let config = RenderConfig::with_class_prefix("bulma-").expect("config");
    let nodes = parse_document(
        r#"{"component": "notification", "color": "warning", "is-light": true,
            "children": [{"component": "delete", "class": ["js-close"]}, "Careful"]}"#,
    )
    .expect("document");
    assert_eq!(
        render_document(&nodes, &config).as_str(),
        concat!(
            r#"<div class="bulma-notification bulma-is-warning bulma-is-light">"#,
            r#"<button class="bulma-delete js-close"></button>Careful</div>"#,
        )
    );
}

#[test]
fn documents_serialize_back_to_equivalent_trees() {
    let node: Node = ComponentNode::Tag(
        Element::new(TagProps::default().color(Color::Primary).rounded(true)).child(Node::text("new")),
    )
    .into();
    let text = serde_json::to_string(&vec![node.clone()]).expect("serialize");
    let parsed = parse_document(&text).expect("document");
    assert_eq!(parsed, vec![node]);
}

#[test]
fn invalid_token_values_are_document_errors() {
    let err = parse_document(r#"{"component": "button", "size": "gigantic"}"#)
        .expect_err("invalid size");
    assert!(matches!(err, UiError::Document(_)));
}

#[test]
fn unknown_keys_are_ignored() {
    let nodes = parse_document(r#"{"component": "box", "is-shadowles": true}"#).expect("document");
    assert_eq!(
        render_document(&nodes, &RenderConfig::default()).as_str(),
        r#"<div class="box"></div>"#
    );
}
