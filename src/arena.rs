use generational_arena::{Arena, Index};
use termtree::Tree;
use tracing::instrument;

use crate::parser::TopicRecord;

/// Language tag an outline carries before any `lang:` header is seen.
pub const DEFAULT_LANG: &str = "en";

/// Tree node holding one topic.
#[derive(Debug)]
pub struct OutlineNode {
    /// Topic payload exactly as parsed, recorded depth included
    pub record: TopicRecord,
    /// Index of the parent node, None only for the virtual root
    pub parent: Option<Index>,
    /// Indices of child nodes in document order
    pub children: Vec<Index>,
}

/// Arena-based topic tree for one document.
///
/// All nodes live in one generational arena and refer to each other by
/// index, so parent links cannot form ownership cycles. A virtual root at
/// depth 0 anchors all top-level topics, so construction never has to
/// special-case the first record. The root carries an empty id and title
/// and is excluded from trace output and markup.
#[derive(Debug)]
pub struct Outline {
    /// Arena storage for all nodes, root included
    arena: Arena<OutlineNode>,
    /// Index of the virtual root
    root: Index,
    /// Language tag emitted on the outermost markup element
    lang: String,
}

impl Outline {
    pub(crate) fn new(lang: impl Into<String>) -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(OutlineNode {
            record: TopicRecord {
                id: String::new(),
                title: String::new(),
                depth: 0,
            },
            parent: None,
            children: Vec::new(),
        });
        Self {
            arena,
            root,
            lang: lang.into(),
        }
    }

    /// Insert a record as the last child of `parent`. Nodes are never
    /// created detached; linking happens in the same step.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn attach(&mut self, record: TopicRecord, parent: Index) -> Index {
        let node_idx = self.arena.insert(OutlineNode {
            record,
            parent: Some(parent),
            children: Vec::new(),
        });

        if let Some(parent_node) = self.arena.get_mut(parent) {
            parent_node.children.push(node_idx);
        }

        node_idx
    }

    pub(crate) fn set_lang(&mut self, lang: impl Into<String>) {
        self.lang = lang.into();
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn node(&self, idx: Index) -> Option<&OutlineNode> {
        self.arena.get(idx)
    }

    /// Parent index of a node, None for the virtual root.
    pub fn parent(&self, idx: Index) -> Option<Index> {
        self.node(idx).and_then(|node| node.parent)
    }

    /// Number of topics, virtual root excluded.
    pub fn len(&self) -> usize {
        self.arena.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> PreOrderIter {
        PreOrderIter::new(self)
    }

    /// Topic ids in document order, one entry per topic.
    ///
    /// Flat diagnostic view backing the `trace` subcommand; the virtual
    /// root is not listed.
    #[instrument(level = "debug", skip(self))]
    pub fn trace(&self) -> Vec<String> {
        self.iter()
            .filter(|(idx, _)| *idx != self.root)
            .map(|(_, node)| node.record.id.clone())
            .collect()
    }

    /// Length of the longest topic chain.
    ///
    /// Measures structure, not recorded depths: an over-indented record
    /// still adds only one level here.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.subtree_height(self.root)
    }

    fn subtree_height(&self, node_idx: Index) -> usize {
        if let Some(node) = self.node(node_idx) {
            node.children
                .iter()
                .map(|&child| 1 + self.subtree_height(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Render the outline for terminal display.
    pub fn to_display_tree(&self) -> Tree<String> {
        let leaves: Vec<Tree<String>> = if let Some(root) = self.node(self.root) {
            root.children
                .iter()
                .map(|&child| self.display_subtree(child))
                .collect()
        } else {
            Vec::new()
        };

        Tree::new(format!("toc ({})", self.lang)).with_leaves(leaves)
    }

    fn display_subtree(&self, node_idx: Index) -> Tree<String> {
        if let Some(node) = self.node(node_idx) {
            let leaves: Vec<Tree<String>> = node
                .children
                .iter()
                .map(|&child| self.display_subtree(child))
                .collect();
            Tree::new(format!("{}  {}", node.record.id, node.record.title)).with_leaves(leaves)
        } else {
            Tree::new(String::new())
        }
    }
}

/// Depth-first iterator visiting nodes in document order, root first.
pub struct PreOrderIter<'a> {
    outline: &'a Outline,
    stack: Vec<Index>,
}

impl<'a> PreOrderIter<'a> {
    fn new(outline: &'a Outline) -> Self {
        Self {
            outline,
            stack: vec![outline.root],
        }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = (Index, &'a OutlineNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.outline.node(current_idx) {
                // Reversed so the leftmost child is popped first
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
