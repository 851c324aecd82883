//! Syntax tree and source-location types.
//!
//! The parser produces an untyped, labeled tree: each [`SyntaxNode`] owns an ordered list of
//! children and carries a human-readable label chosen by the grammar rule that built it. The tree
//! mirrors the derivation; it is never flattened or rewritten after construction.

use std::fmt;

/// Source location span (byte offsets into the BOM-stripped source).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// 1-based line/column of a character.
///
/// Columns count characters (Unicode scalar values), not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, col: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Options for [`SyntaxNode::dump_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpOptions {
    /// Spaces per depth level.
    pub indent_width: usize,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}

/// A labeled syntax-tree node that exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub label: String,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Create a leaf node.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Create a node with the given children, in order.
    pub fn with_children(label: impl Into<String>, children: Vec<SyntaxNode>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    /// Attach `child` as the last child.
    pub fn push(&mut self, child: SyntaxNode) {
        self.children.push(child);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&SyntaxNode> {
        self.children.get(index)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Pre-order traversal yielding `(depth, node)` pairs; `self` is at depth 0.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![(0, self)] }
    }

    /// Render the tree with the default two-space indentation.
    pub fn dump(&self) -> String {
        self.dump_with(DumpOptions::default())
    }

    /// Render the tree: one line per node, pre-order, indented by depth.
    pub fn dump_with(&self, options: DumpOptions) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_dump(&mut out, options);
        out
    }

    /// Stream the dump into any formatter sink.
    pub fn write_dump<W: fmt::Write>(&self, out: &mut W, options: DumpOptions) -> fmt::Result {
        for (depth, node) in self.walk() {
            writeln!(out, "{:indent$}{}", "", node.label, indent = depth * options.indent_width)?;
        }
        Ok(())
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_dump(f, DumpOptions::default())
    }
}

/// Pre-order iterator returned by [`SyntaxNode::walk`].
pub struct Walk<'a> {
    stack: Vec<(usize, &'a SyntaxNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a SyntaxNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}
