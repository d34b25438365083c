#![allow(dead_code)]

use nginxconf_rs::{Block, Directive, GroupedNode, TokenKind, group, parse_str, tokenize};

/// Render a tree back to source text, one directive per line.
pub fn render(block: &Block) -> String {
    let mut out = String::new();
    render_into(&mut out, block, 0);
    out
}

fn render_into(out: &mut String, block: &Block, depth: usize) {
    for d in block {
        render_directive(out, d, depth);
    }
}

fn render_directive(out: &mut String, d: &Directive, depth: usize) {
    out.push_str(&"\t".repeat(depth));
    out.push_str(&d.name);
    for arg in &d.args {
        out.push(' ');
        out.push_str(arg);
    }
    match &d.body {
        None => out.push_str(";\n"),
        Some(body) => {
            out.push_str(" {\n");
            render_into(out, body, depth + 1);
            out.push_str(&"\t".repeat(depth));
            out.push_str("}\n");
        }
    }
}

pub fn assert_parses_to(input: &str, expected: &Block) {
    let parsed = parse_str(input).unwrap_or_else(|e| {
        panic!("failed to parse: {e}\n--- input ---\n{input}")
    });
    assert_eq!(&parsed, expected, "tree mismatch\n--- input ---\n{input}");
}

/// Number of `;` leaves plus groups at the top level of `input`.
pub fn top_level_terminators(input: &str) -> usize {
    let nodes = group(&tokenize(input)).expect("group failed");
    nodes
        .iter()
        .filter(|n| match n {
            GroupedNode::Leaf(t) => t.kind == TokenKind::Semicolon,
            GroupedNode::Group { .. } => true,
        })
        .count()
}
