//! Resolution of an [`Expr`] tree into a [`Node`] tree.
//!
//! Runs in two phases per node: its child expressions are first expanded
//! into a flat list (groups and repeats spliced in place, in source order),
//! then each entry of that list is flattened recursively. Flattening never
//! mutates the expression, so the same tree can be flattened any number of
//! times with equal results.

use tracing::trace;

use crate::{
    error::{Error, Result},
    expr::{Expr, Pending},
    node::{Children, Entry, Node},
};

/// Expand `expr` into the literal and tag expressions it contributes to a
/// parent's children list.
///
/// Literals and tags contribute themselves (unflattened); groups and repeats
/// contribute the concatenated expansion of their contents.
pub fn expand(expr: &Expr) -> Vec<Expr> {
    let mut out = Vec::new();
    expand_into(expr, &mut out);
    out
}

fn expand_into(expr: &Expr, out: &mut Vec<Expr>) {
    match expr {
        Expr::Literal(_) | Expr::Pending(_) => out.push(expr.clone()),
        Expr::Group(items) => {
            for item in items.iter() {
                expand_into(item, out);
            }
        }
        Expr::Repeat(repeat) => {
            for item in repeat.generate() {
                expand_into(&item, out);
            }
        }
    }
}

/// Flatten a literal or tag expression.
///
/// Groups and repeats have no node of their own and fail with
/// [`Error::TransparentRoot`]; they may only appear in a children list.
pub fn flatten(expr: &Expr) -> Result<Entry> {
    match expr {
        Expr::Literal(text) => Ok(Entry::Text(text.clone())),
        Expr::Pending(pending) => flatten_pending(pending).map(Entry::Node),
        Expr::Group(_) | Expr::Repeat(_) => Err(Box::new(Error::TransparentRoot {
            kind: expr.kind(),
        })),
    }
}

/// Flatten a tag expression into its node.
pub fn flatten_pending(pending: &Pending) -> Result<Node> {
    let children = match pending.child_exprs() {
        None => Children::Undefined,
        Some(exprs) => {
            let expanded: Vec<Expr> = exprs.iter().flat_map(expand).collect();
            trace!(
                tag = pending.tag().name(),
                declared = exprs.len(),
                expanded = expanded.len(),
                "expanded children"
            );
            let entries = expanded
                .iter()
                .map(flatten)
                .collect::<Result<Vec<_>>>()?;
            Children::Defined(entries)
        }
    };

    Ok(Node::from_shared(pending.shared_tag(), children))
}
