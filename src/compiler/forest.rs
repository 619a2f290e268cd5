use ahash::AHashMap;
use itertools::Itertools;
use std::fmt;

use super::links::{Link, ShortId};
use crate::error::CompileError;

/// One rooted execution chain. Children are kept in link-insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    pub id: ShortId,
    pub children: Vec<Tree>,
}

/// All execution chains of one compile pass, roots in short id order.
///
/// The forest is recomputed from scratch on every compile and never mutated
/// incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    pub trees: Vec<Tree>,
}

impl Forest {
    pub fn roots(&self) -> impl Iterator<Item = ShortId> + '_ {
        self.trees.iter().map(|t| t.id)
    }
}

/// Builds the execution forest from an ordered link list.
///
/// Each link is a `parent -> child` edge. A node is a root iff it never
/// appears in child position. A node claimed by two different parents aborts
/// with [`CompileError::MultipleParents`]; nodes unreachable from any root
/// (cycle members, given the single-parent rule) abort with
/// [`CompileError::CyclicGraph`].
pub fn build_forest(links: &[Link]) -> Result<Forest, CompileError> {
    let mut children: AHashMap<ShortId, Vec<ShortId>> = AHashMap::new();
    let mut parent_of: AHashMap<ShortId, ShortId> = AHashMap::new();

    for link in links {
        match parent_of.get(&link.child) {
            Some(&existing) if existing != link.parent => {
                return Err(CompileError::MultipleParents {
                    child: link.child.to_string(),
                    first_parent: existing.to_string(),
                    second_parent: link.parent.to_string(),
                });
            }
            // The same edge repeated is a no-op, not a second parent.
            Some(_) => continue,
            None => {
                parent_of.insert(link.child, link.parent);
            }
        }
        children.entry(link.parent).or_default().push(link.child);
        children.entry(link.child).or_default();
    }

    let roots: Vec<ShortId> = children
        .keys()
        .filter(|id| !parent_of.contains_key(id))
        .copied()
        .sorted()
        .collect();

    let mut placed = 0usize;
    let trees = roots
        .iter()
        .map(|&root| grow(root, &children, &mut placed))
        .collect();

    if placed != children.len() {
        let stranded: Vec<String> = children
            .keys()
            .filter(|id| !is_reachable(**id, &parent_of, &roots))
            .map(ShortId::to_string)
            .sorted()
            .collect();
        return Err(CompileError::CyclicGraph { nodes: stranded });
    }

    Ok(Forest { trees })
}

/// Recursively materializes the subtree under `id`.
///
/// Safe against infinite descent: after the multiple-parents check, any node
/// reachable from a root has a unique parent chain, so no node is visited
/// twice.
fn grow(id: ShortId, children: &AHashMap<ShortId, Vec<ShortId>>, placed: &mut usize) -> Tree {
    *placed += 1;
    let sub = children
        .get(&id)
        .map(|kids| kids.iter().map(|&c| grow(c, children, placed)).collect())
        .unwrap_or_default();
    Tree { id, children: sub }
}

/// Whether `id` reaches a root by walking parent pointers.
fn is_reachable(
    id: ShortId,
    parent_of: &AHashMap<ShortId, ShortId>,
    roots: &[ShortId],
) -> bool {
    let mut current = id;
    let mut hops = 0usize;
    loop {
        if roots.contains(&current) {
            return true;
        }
        match parent_of.get(&current) {
            Some(&parent) => current = parent,
            None => return true,
        }
        hops += 1;
        if hops > parent_of.len() {
            return false;
        }
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn indent(tree: &Tree, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            writeln!(f, "{}{}", "  ".repeat(depth), tree.id)?;
            for child in &tree.children {
                indent(child, depth + 1, f)?;
            }
            Ok(())
        }
        indent(self, 0, f)
    }
}

impl fmt::Display for Forest {
    /// Deterministic, human-readable listing: roots in short id order,
    /// children in link-insertion order, one node per line, two-space
    /// indentation per depth level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tree in &self.trees {
            write!(f, "{}", tree)?;
        }
        Ok(())
    }
}
