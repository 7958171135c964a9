//! Flattening scenarios: tags, repeats and groups resolved into node trees.

use scope_core::{
    Entry, Expr, Node, RenderContext, Result, Tag, exprs, flatten, group, repeat, tag,
};

#[derive(Debug, Default, PartialEq)]
struct Mock {
    name: String,
}

impl Tag for Mock {
    fn render(&self, node: &Node, cx: &mut RenderContext<'_>) -> Result<()> {
        cx.write(&self.name);
        cx.indented(|cx| cx.dispatch_all(node.children()))
    }
}

fn mock(name: &str) -> scope_core::Pending {
    tag(Mock {
        name: name.to_string(),
    })
}

fn node(name: &str) -> Node {
    Node::new(Mock {
        name: name.to_string(),
    })
}

fn flat(expr: impl Into<Expr>) -> Node {
    match flatten(&expr.into()).unwrap() {
        Entry::Node(node) => node,
        Entry::Text(text) => panic!("Expected node, got text {text:?}"),
    }
}

fn names(node: &Node) -> Vec<&str> {
    node.children()
        .iter()
        .map(|entry| match entry {
            Entry::Node(child) => child.downcast::<Mock>().map(|m| m.name.as_str()).unwrap_or("?"),
            Entry::Text(text) => text.as_str(),
        })
        .collect()
}

#[test]
fn test_single_tag() {
    let node_ = flat(mock("element"));
    assert_eq!(node_, node("element"));
    assert!(!node_.children_defined());
}

#[test]
fn test_tag_with_children() {
    let template = mock("parent").children([mock("child-1"), mock("child-2")]);
    let expected = node("parent").with_children([node("child-1"), node("child-2")]);
    assert_eq!(flat(template), expected);
}

#[test]
fn test_bare_tags() {
    let template = tag(Mock::default()).children([tag(Mock::default()), tag(Mock::default())]);
    let expected = Node::new(Mock::default())
        .with_children([Node::new(Mock::default()), Node::new(Mock::default())]);
    assert_eq!(flat(template), expected);
}

#[test]
fn test_repeat() {
    let template = mock("parent").children([repeat(1..4, |n| mock(&format!("child-{n}")))]);
    assert_eq!(
        flat(template),
        node("parent").with_children([node("child-1"), node("child-2"), node("child-3")])
    );
}

#[test]
fn test_nested_repeat() {
    let template = mock("parent").children([repeat(0..2, |n| {
        let n = *n;
        repeat(0..3, move |m| mock(&format!("child-{}", n * 3 + m + 1)))
    })]);
    assert_eq!(
        names(&flat(template)),
        ["child-1", "child-2", "child-3", "child-4", "child-5", "child-6"]
    );
}

#[test]
fn test_empty_repeat() {
    let template = mock("parent").children([repeat(Vec::<u32>::new(), |_| mock("x"))]);
    let flat = flat(template);
    assert!(flat.children().is_empty());
    assert!(flat.children_defined());
}

#[test]
fn test_empty_repeat_keeps_sibling_order() {
    let template = mock("parent").children(exprs![
        mock("a"),
        repeat(Vec::<u32>::new(), |_| mock("x")),
        mock("b"),
    ]);
    assert_eq!(names(&flat(template)), ["a", "b"]);
}

#[test]
fn test_group() {
    let template = mock("parent").children([group([mock("a"), mock("b")])]);
    assert_eq!(names(&flat(template)), ["a", "b"]);
}

#[test]
fn test_consecutive_groups() {
    let template = mock("parent").children([
        group([mock("a"), mock("b")]),
        group([mock("c"), mock("d")]),
    ]);
    assert_eq!(names(&flat(template)), ["a", "b", "c", "d"]);
}

#[test]
fn test_nested_groups() {
    let template = mock("parent").children(exprs![
        group(exprs![mock("a"), group([mock("b")])]),
        mock("c"),
    ]);
    let expected = flat(mock("parent").children([mock("a"), mock("b"), mock("c")]));
    assert_eq!(flat(template), expected);
}

#[test]
fn test_group_inside_child_tag() {
    let template = mock("parent").children([mock("child").children([group([mock("a"), mock("b")])])]);
    let expected =
        node("parent").with_children([node("child").with_children([node("a"), node("b")])]);
    assert_eq!(flat(template), expected);
}

#[test]
fn test_empty_groups() {
    let template = mock("parent").children([group(exprs![])]);
    let flat_ = flat(template);
    assert!(flat_.children().is_empty());
    assert!(flat_.children_defined());

    let template = mock("parent").children([group([group(exprs![])])]);
    assert!(flat(template).children().is_empty());
}

#[test]
fn test_repeat_of_groups_and_text() {
    let template = mock("parent").children([repeat(["x", "y"], |s| {
        group(exprs![format!("{s}:"), mock(s)])
    })]);
    assert_eq!(names(&flat(template)), ["x:", "x", "y:", "y"]);
}

#[test]
fn test_children_defined_distinction() {
    let never = flat(mock("p"));
    let empty = flat(mock("p").children(exprs![]));
    assert!(never.children().is_empty() && empty.children().is_empty());
    assert!(!never.children_defined());
    assert!(empty.children_defined());
    assert_ne!(never, empty);
}

#[test]
fn test_flatten_twice_is_equal() {
    let template: Expr = mock("parent")
        .children(exprs![
            "text",
            repeat(1..=3, |i| mock(&i.to_string()).children(exprs![])),
            group([mock("g")]),
        ])
        .into();
    assert_eq!(flatten(&template).unwrap(), flatten(&template).unwrap());
}

#[test]
fn test_literal_root() {
    assert_eq!(flatten(&"x".into()).unwrap(), Entry::Text("x".to_string()));
}
