//! Rendering scenarios over full templates.

use scope_core::{
    Expr, Node, RenderContext, RenderOptions, Result, Tag, blank_line, exprs, flatten, group,
    indent, render, render_default, repeat, tag,
};

#[derive(Debug, PartialEq)]
struct Item {
    name: String,
}

impl Tag for Item {
    fn render(&self, node: &Node, cx: &mut RenderContext<'_>) -> Result<()> {
        cx.write(&self.name);
        cx.indented(|cx| cx.dispatch_all(node.children()))
    }
}

fn item(name: &str) -> scope_core::Pending {
    tag(Item {
        name: name.to_string(),
    })
}

#[test]
fn test_parent_with_children() {
    let template = item("p").children([item("c1"), item("c2")]);
    assert_eq!(render_default(&template).unwrap(), "p\n    c1\n    c2\n");
}

#[test]
fn test_parent_with_repeat() {
    let template = item("p").children([repeat([1, 2, 3], |i| item(&format!("c{i}")))]);
    assert_eq!(render_default(&template).unwrap(), "p\n    c1\n    c2\n    c3\n");
}

#[test]
fn test_nested_groups_render_like_flat_children() {
    let grouped = item("p").children(exprs![
        group(exprs![item("a"), group([item("b")])]),
        item("c"),
    ]);
    let flat = item("p").children([item("a"), item("b"), item("c")]);
    assert_eq!(
        render_default(&grouped).unwrap(),
        render_default(&flat).unwrap()
    );
}

#[test]
fn test_nested_indent_scopes() {
    for depth in 0..5 {
        let mut template: Expr = "x".into();
        for _ in 0..depth {
            template = indent().children([template]).into();
        }
        let wrapped = item("root").children([template]);
        let out = render_default(&wrapped).unwrap();
        let expected = format!("root\n{}x\n", " ".repeat(4 * (depth + 1)));
        assert_eq!(out, expected);
    }
}

#[test]
fn test_indent_with_custom_char_and_width() {
    let options = RenderOptions::builder()
        .indent_char('.')
        .indent_width(3)
        .build()
        .unwrap();
    let template = indent().children([indent().children(["x"])]);
    assert_eq!(render(&template, &options).unwrap(), "......x\n");
}

#[test]
fn test_wide_indentation_width() {
    let options = RenderOptions::spaces(20).unwrap();
    let template = indent().children(["x"]);
    assert_eq!(
        render(&template, &options).unwrap(),
        format!("{}x\n", " ".repeat(20))
    );
}

#[test]
fn test_blank_lines_are_not_indented() {
    let template = item("p").children(exprs![item("a"), blank_line(), item("b")]);
    assert_eq!(render_default(&template).unwrap(), "p\n    a\n\n    b\n");
}

#[test]
fn test_literal_children() {
    let template = item("fn main() {").children(exprs![
        "let x = 1;",
        repeat(["a", "b"], |s| format!("println!(\"{s}\");")),
    ]);
    assert_eq!(render_default(&template).unwrap(), "fn main() {\n    let x = 1;\n    println!(\"a\");\n    println!(\"b\");\n");
}

#[test]
fn test_render_flattened_node() {
    let template: Expr = item("p")
        .children([repeat(1..=2, |i| item(&i.to_string()))])
        .into();
    let entry = flatten(&template).unwrap();
    assert_eq!(render_default(&entry).unwrap(), "p\n    1\n    2\n");
}

#[test]
fn test_options_from_toml() {
    let options: RenderOptions = "indent_char = \"\\t\"\nindent_width = 1".parse().unwrap();
    let template = item("p").children([item("c")]);
    assert_eq!(render(&template, &options).unwrap(), "p\n\tc\n");
}

#[test]
fn test_shared_tree_across_threads() {
    let template: Expr = item("p")
        .children([repeat(0..3, |i| item(&format!("c{i}")))])
        .into();
    let options = RenderOptions::default();

    let outputs: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| render(&template, &options).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for out in outputs {
        assert_eq!(out, "p\n    c0\n    c1\n    c2\n");
    }
}
