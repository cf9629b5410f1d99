//! End-to-end tests: JSON props through resolution and HTML rendering.

use tomato_box::{
    render, BoxProps, HtmlHost, PseudoMode, RenderError, ResolverConfig, Scalar, StyleResolver,
};

fn nested_pseudo_button() -> BoxProps {
    BoxProps::from_json(
        r##"{
            "component": "button",
            "children": "Focus me!",
            "width": 200,
            "sx": {
                "p": 3,
                "backgroundColor": "#fff",
                "border": "2px solid #007bff",
                "borderRadius": 8,
                "cursor": "pointer",
                "fontSize": 16,
                "fontWeight": "bold",
                "color": "#007bff",
                "&:hover": {
                    "backgroundColor": "#007bff",
                    "color": "white",
                    "&:focus": {
                        "outline": "none"
                    }
                },
                "&:active": { "transform": "scale(0.95)" },
                "&:disabled": {
                    "backgroundColor": "#f8f9fa",
                    "cursor": "not-allowed"
                }
            }
        }"##,
    )
    .unwrap()
}

#[test]
fn test_hello_box() {
    let props = BoxProps::from_json(
        r#"{
            "width": 100,
            "height": 100,
            "backgroundColor": "pink",
            "color": "white",
            "display": "flex",
            "alignItems": "center",
            "sx": { "justifyContent": "center" },
            "children": "Hello Box"
        }"#,
    )
    .unwrap();

    let element = StyleResolver::new().resolve(&props);
    assert_eq!(
        element.style_attribute(),
        "box-sizing: border-box; justify-content: center; width: 100px; height: 100px; \
         background-color: pink; color: white; display: flex; align-items: center"
    );
    assert!(element.attributes.is_empty());
    assert!(element.rules.is_empty());

    let mut host = HtmlHost::new().unwrap();
    let html = render(&StyleResolver::new(), &props, &mut host).unwrap();
    assert!(html.starts_with(r#"<div class="tomato-box" style="box-sizing: border-box;"#));
    assert!(html.ends_with(">Hello Box</div>"));
    assert!(host.stylesheet().is_empty());
}

#[test]
fn test_nested_pseudo_selectors() {
    let props = nested_pseudo_button();
    let element = StyleResolver::new().resolve(&props);

    assert_eq!(element.element.as_str(), "button");
    assert_eq!(element.style.get("padding"), Some(&Scalar::from(3)));
    assert_eq!(element.style.get("width"), Some(&Scalar::from(200)));

    let selectors: Vec<&str> = element.rules.iter().map(|r| r.selector.as_str()).collect();
    assert_eq!(selectors, vec!["&:hover", "&:active", "&:disabled"]);

    let scope = element.scope_class.clone().unwrap();
    let sheet = element.stylesheet().unwrap();
    assert_eq!(
        sheet,
        format!(
            ".{s}:hover {{ background-color: #007bff; color: white; }}\n\
             .{s}:hover:focus {{ outline: none; }}\n\
             .{s}:active {{ transform: scale(0.95); }}\n\
             .{s}:disabled {{ background-color: #f8f9fa; cursor: not-allowed; }}\n",
            s = scope
        )
    );
    assert_eq!(element.class_names, vec!["tomato-box".to_string(), scope]);
}

#[test]
fn test_units_in_style_attribute() {
    let element = StyleResolver::new().resolve(&nested_pseudo_button());
    let style = element.style_attribute();
    assert!(style.contains("padding: 3px"));
    assert!(style.contains("border-radius: 8px"));
    assert!(style.contains("font-size: 16px"));
    assert!(style.contains("font-weight: bold"));
    assert!(style.contains("width: 200px"));
}

#[test]
fn test_inline_mode_matches_inline_only_box() {
    let resolver =
        StyleResolver::with_config(ResolverConfig::new().pseudo_mode(PseudoMode::Inline));
    let element = resolver.resolve(&nested_pseudo_button());

    assert!(element.rules.is_empty());
    assert_eq!(element.class_attribute(), "tomato-box");
    assert_eq!(element.style.get("color"), Some(&Scalar::from("#007bff")));
}

#[test]
fn test_render_tree_with_stylesheet() {
    let props = BoxProps::from_json(
        r#"{
            "component": "ul",
            "children": [
                { "component": "li", "sx": { "&:nth-child(even)": { "bgcolor": "gray" } }, "children": "one" },
                { "component": "li", "sx": { "&:nth-child(even)": { "bgcolor": "gray" } }, "children": "two" }
            ]
        }"#,
    )
    .unwrap();

    let mut host = HtmlHost::new().unwrap();
    let html = render(&StyleResolver::new(), &props, &mut host).unwrap();

    assert_eq!(html.matches("<li class=\"tomato-box css-").count(), 2);
    assert!(html.contains(">one</li>"));
    assert!(html.contains(">two</li>"));
    assert_eq!(host.stylesheet().lines().count(), 1);
    assert!(host
        .stylesheet()
        .contains(":nth-child(even) { background-color: gray; }"));
}

#[test]
fn test_forwarded_attributes_render() {
    let props = BoxProps::from_json(
        r#"{
            "id": "card",
            "aria-label": "Card",
            "data-index": 3,
            "outline": "none",
            "tabIndex": 0,
            "children": "x"
        }"#,
    )
    .unwrap();

    let mut host = HtmlHost::new().unwrap();
    let html = render(&StyleResolver::new(), &props, &mut host).unwrap();
    assert!(html.contains(r#" id="card""#));
    assert!(html.contains(r#" aria-label="Card""#));
    assert!(html.contains(r#" data-index="3""#));
    assert!(html.contains(r#" outline="none""#));
    assert!(html.contains(r#" tabIndex="0""#));
}

#[test]
fn test_invalid_element_kind_is_a_host_error() {
    let props = BoxProps::new().component("bad tag");
    let element = StyleResolver::new().resolve(&props);
    assert_eq!(element.element.as_str(), "bad tag");

    let mut host = HtmlHost::new().unwrap();
    let err = render(&StyleResolver::new(), &props, &mut host).unwrap_err();
    assert!(matches!(err, RenderError::InvalidElement { ref kind } if kind == "bad tag"));
}

#[test]
fn test_malformed_json_is_rejected() {
    assert!(BoxProps::from_json(r#"{ "sx": 5 }"#).is_err());
    assert!(BoxProps::from_json("not json").is_err());
}

#[test]
fn test_stray_json_values_degrade_silently() {
    let props = BoxProps::from_json(
        r#"{
            "sx": { "p": 2, "flexWrap": true, "m": [1, 2] },
            "style": { "color": null, "width": 10 },
            "children": ["a", null, 5, false]
        }"#,
    )
    .unwrap();

    let element = StyleResolver::new().resolve(&props);
    assert_eq!(
        element.style_attribute(),
        "box-sizing: border-box; padding: 2px; width: 10px"
    );

    let mut host = HtmlHost::new().unwrap();
    let html = render(&StyleResolver::new(), &props, &mut host).unwrap();
    assert!(html.ends_with(">a5</div>"));
}

#[test]
fn test_injected_css_stays_out_of_the_stylesheet() {
    let props = BoxProps::from_json(
        r#"{
            "sx": {
                "&:hover": {
                    "color": "red } body { display: none } </style><script>alert(1)</script>",
                    "cursor": "pointer"
                }
            }
        }"#,
    )
    .unwrap();

    let element = StyleResolver::new().resolve(&props);
    let scope = element.scope_class.clone().unwrap();
    assert_eq!(
        element.stylesheet().unwrap(),
        format!(".{}:hover {{ cursor: pointer; }}\n", scope)
    );
}

#[test]
fn test_direct_shorthand_overrides_nested_sx_longhands() {
    let props = BoxProps::from_json(
        r#"{
            "sx": { "border": "1px solid red", "borderTopColor": "green" },
            "border": "2px solid blue"
        }"#,
    )
    .unwrap();

    let element = StyleResolver::new().resolve(&props);
    assert_eq!(
        element.style_attribute(),
        "box-sizing: border-box; border: 2px solid blue"
    );
}
