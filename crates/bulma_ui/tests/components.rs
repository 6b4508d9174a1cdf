use bulma_ui::prelude::*;
use bulma_ui::ComponentSpec;
use pretty_assertions::assert_eq;

fn html<C: Component>(props: &C) -> String {
    props.render().into_string()
}

#[test]
fn default_records_render_bare_root_elements() {
    let cases = [
        (html(&BlockProps::default()), r#"<div class="block"></div>"#),
        (html(&BoxProps::default()), r#"<div class="box"></div>"#),
        (html(&BreadcrumbProps::default()), r#"<nav class="breadcrumb"></nav>"#),
        (html(&ButtonProps::default()), r#"<button class="button"></button>"#),
        (html(&ContainerProps::default()), r#"<div class="container"></div>"#),
        (html(&ContentProps::default()), r#"<div class="content"></div>"#),
        (html(&DeleteProps::default()), r#"<button class="delete"></button>"#),
        (html(&FooterProps::default()), r#"<footer class="footer"></footer>"#),
        (html(&HeroProps::default()), r#"<section class="hero"></section>"#),
        (html(&IconProps::default()), r#"<span class="icon"></span>"#),
        (html(&IconTextProps::default()), r#"<span class="icon-text"></span>"#),
        (html(&LevelProps::default()), r#"<nav class="level"></nav>"#),
        (html(&MenuProps::default()), r#"<aside class="menu"></aside>"#),
        (html(&MessageProps::default()), r#"<article class="message"></article>"#),
        (html(&NotificationProps::default()), r#"<div class="notification"></div>"#),
        (html(&SectionProps::default()), r#"<section class="section"></section>"#),
        (html(&SubtitleProps::default()), r#"<h2 class="subtitle"></h2>"#),
        (html(&TabsProps::default()), r#"<div class="tabs"></div>"#),
        (html(&TagProps::default()), r#"<span class="tag"></span>"#),
        (html(&TitleProps::default()), r#"<h1 class="title"></h1>"#),
    ];

    for (actual, expected) in cases {
        assert_eq!(actual, expected);
    }
}

#[test]
fn id_precedes_class() {
    let crumb = BreadcrumbProps::default()
        .size(Size::Small)
        .with_id("crumb1")
        .with_class("custom-foo");
    assert_eq!(
        html(&crumb),
        r#"<nav id="crumb1" class="breadcrumb is-small custom-foo"></nav>"#
    );
}

#[test]
fn alignment_and_active_tokens_keep_declared_order() {
    let crumb = BreadcrumbProps {
        is_active: true,
        is_right: true,
        is_centered: true,
        ..Default::default()
    };
    assert_eq!(
        html(&crumb),
        r#"<nav class="breadcrumb is-centered is-right is-active"></nav>"#
    );
}

#[test]
fn extra_classes_follow_every_modifier_token() {
    let crumb = BreadcrumbProps {
        common: CommonProps {
            classes: vec!["foo".to_string(), "bar".to_string()],
            ..Default::default()
        },
        is_centered: true,
        is_right: true,
        size: Some(Size::Medium),
        separator: Some(BreadcrumbSeparator::Dot),
        is_active: true,
    };
    assert_eq!(
        html(&crumb),
        r#"<nav class="breadcrumb is-centered is-right is-medium has-dot-separator is-active foo bar"></nav>"#
    );
}

#[test]
fn attributes_follow_class_in_insertion_order() {
    let crumb = BreadcrumbProps::default()
        .with_id("crumb1")
        .with_attr("data-role", "navi")
        .with_attr("aria-label", "breadcrumbs");
    assert_eq!(
        html(&crumb),
        r#"<nav id="crumb1" class="breadcrumb" data-role="navi" aria-label="breadcrumbs"></nav>"#
    );
}

#[test]
fn rendering_is_idempotent() {
    let tabs = TabsProps::default()
        .size(Size::Medium)
        .alignment(Alignment::Right)
        .style(TabsStyle::Boxed)
        .fullwidth(true)
        .with_id("tabs")
        .with_class("x")
        .with_attr("data-tab", "1")
        .with_children(Markup::raw("<ul><li class=\"is-active\"><a>One</a></li></ul>"));
    let first = tabs.render();
    let second = tabs.render();
    assert_eq!(first, second);
    assert_eq!(
        first.as_str(),
        r#"<div id="tabs" class="tabs is-medium is-right is-boxed is-fullwidth x" data-tab="1"><ul><li class="is-active"><a>One</a></li></ul></div>"#
    );
}

#[test]
fn empty_inputs_leave_no_stray_whitespace() {
    let message = MessageProps {
        common: CommonProps {
            id: Some(String::new()),
            classes: Vec::new(),
            attributes: Attributes::new(),
            children: Markup::empty(),
        },
        ..Default::default()
    };
    let rendered = html(&message);
    assert_eq!(rendered, r#"<article class="message"></article>"#);
    assert!(!rendered.contains("  "));
    assert!(!rendered.contains("\" >"));
}

#[test]
fn caller_values_are_escaped() {
    let delete = DeleteProps::default()
        .with_id("x\"y")
        .with_attr("aria-label", "close <dialog> & \"exit\"");
    assert_eq!(
        html(&delete),
        r#"<button id="x&quot;y" class="delete" aria-label="close &lt;dialog&gt; &amp; &quot;exit&quot;"></button>"#
    );
}

#[test]
fn class_prefix_applies_to_framework_tokens() {
    let config = RenderConfig::from_toml_str(r#"class-prefix = "bulma-""#).expect("config");
    let tabs = TabsProps::default()
        .style(TabsStyle::ToggleRounded)
        .with_class("app-tabs");
    assert_eq!(
        tabs.render_with(&config).as_str(),
        r#"<div class="bulma-tabs bulma-is-toggle bulma-is-toggle-rounded app-tabs"></div>"#
    );
}

#[test]
fn components_compose_through_children() {
    let icon = IconProps::default()
        .size(Size::Small)
        .with_children(Markup::raw(r#"<i class="fas fa-check"></i>"#));
    let icon_text = IconTextProps::default()
        .color(Color::Success)
        .with_children(icon.render())
        .with_children(Markup::raw("<span>"))
        .with_children(Markup::text("Done & dusted"))
        .with_children(Markup::raw("</span>"));
    assert_eq!(
        html(&icon_text),
        concat!(
            r#"<span class="icon-text has-text-success">"#,
            r#"<span class="icon is-small"><i class="fas fa-check"></i></span>"#,
            "<span>Done &amp; dusted</span>",
            "</span>"
        )
    );
}

#[test]
fn props_round_trip_through_the_free_render_function() {
    let level = LevelProps::default().mobile(true);
    assert_eq!(bulma_ui::render(&level), level.render());
    assert_eq!(LevelProps::SPEC, ComponentSpec::new("nav", "level"));
}

// Each record below sets every modifier in reverse table order; the output must still follow
// the table.

#[test]
fn box_shadowless_modifier() {
    let boxed = BoxProps::default().shadowless(true);
    assert_eq!(html(&boxed), r#"<div class="box is-shadowless"></div>"#);
}

#[test]
fn content_size_modifier() {
    let content = ContentProps::default().size(Size::Medium);
    assert_eq!(html(&content), r#"<div class="content is-medium"></div>"#);
}

#[test]
fn delete_size_modifier() {
    let delete = DeleteProps::default().size(Size::Small);
    assert_eq!(html(&delete), r#"<button class="delete is-small"></button>"#);
}

#[test]
fn icon_modifiers_in_reverse_order() {
    let icon = IconProps::default().size(Size::Normal).color(Color::Danger);
    assert_eq!(html(&icon), r#"<span class="icon has-text-danger is-normal"></span>"#);
}

#[test]
fn icon_text_modifiers_in_reverse_order() {
    let icon_text = IconTextProps::default().size(Size::Small).color(Color::Info);
    assert_eq!(
        html(&icon_text),
        r#"<span class="icon-text has-text-info is-small"></span>"#
    );
}

#[test]
fn tag_modifiers_in_reverse_order() {
    let tag = TagProps::default()
        .delete(true)
        .rounded(true)
        .light(true)
        .size(Size::Large)
        .color(Color::Link);
    assert_eq!(
        html(&tag),
        r#"<span class="tag is-link is-large is-light is-rounded is-delete"></span>"#
    );
}

#[test]
fn button_modifiers_in_reverse_order() {
    let button = ButtonProps::default()
        .r#static(true)
        .loading(true)
        .fullwidth(true)
        .rounded(true)
        .inverted(true)
        .outlined(true)
        .light(true)
        .size(Size::Medium)
        .color(Color::Success);
    assert_eq!(
        html(&button),
        r#"<button class="button is-success is-medium is-light is-outlined is-inverted is-rounded is-fullwidth is-loading is-static"></button>"#
    );
}

#[test]
fn title_and_subtitle_modifiers_in_reverse_order() {
    let title = TitleProps::default().spaced(true).level(HeadingLevel::Three);
    let subtitle = SubtitleProps::default().level(HeadingLevel::Five);
    assert_eq!(html(&title), r#"<h1 class="title is-3 is-spaced"></h1>"#);
    assert_eq!(html(&subtitle), r#"<h2 class="subtitle is-5"></h2>"#);
}

#[test]
fn breadcrumb_modifiers_in_reverse_order() {
    let crumb = BreadcrumbProps::default()
        .active(true)
        .separator(BreadcrumbSeparator::Arrow)
        .size(Size::Large)
        .alignment(Alignment::Right);
    assert_eq!(
        html(&crumb),
        r#"<nav class="breadcrumb is-right is-large has-arrow-separator is-active"></nav>"#
    );
}

#[test]
fn menu_modifiers_in_reverse_order() {
    let menu = MenuProps::default().selected(true).active(true).size(Size::Small);
    assert_eq!(
        html(&menu),
        r#"<aside class="menu is-small is-active is-selected"></aside>"#
    );
}

#[test]
fn plain_toggle_tabs_emit_a_single_toggle_class() {
    let tabs = TabsProps::default().style(TabsStyle::Toggle);
    assert_eq!(html(&tabs), r#"<div class="tabs is-toggle"></div>"#);
}

#[test]
fn tabs_modifiers_in_reverse_order() {
    let tabs = TabsProps::default()
        .fullwidth(true)
        .style(TabsStyle::Boxed)
        .alignment(Alignment::Centered)
        .size(Size::Large);
    assert_eq!(
        html(&tabs),
        r#"<div class="tabs is-large is-centered is-boxed is-fullwidth"></div>"#
    );
}

#[test]
fn message_modifiers_in_reverse_order() {
    let message = MessageProps::default().size(Size::Small).color(Color::Warning);
    assert_eq!(
        html(&message),
        r#"<article class="message is-warning is-small"></article>"#
    );
}

#[test]
fn notification_modifiers_in_reverse_order() {
    let notification = NotificationProps::default().light(true).color(Color::Primary);
    assert_eq!(
        html(&notification),
        r#"<div class="notification is-primary is-light"></div>"#
    );
}

#[test]
fn container_width_modifier() {
    let container = ContainerProps::default().width(ContainerWidth::MaxDesktop);
    assert_eq!(html(&container), r#"<div class="container is-max-desktop"></div>"#);
}

#[test]
fn section_size_modifier() {
    let section = SectionProps::default().size(SectionSize::Large);
    assert_eq!(html(&section), r#"<section class="section is-large"></section>"#);
}

#[test]
fn hero_modifiers_in_reverse_order() {
    let hero = HeroProps::default().size(HeroSize::FullHeight).color(Color::Dark);
    assert_eq!(
        html(&hero),
        r#"<section class="hero is-dark is-fullheight"></section>"#
    );
}

#[test]
fn level_mobile_modifier() {
    let level = LevelProps::default().mobile(true);
    assert_eq!(html(&level), r#"<nav class="level is-mobile"></nav>"#);
}
