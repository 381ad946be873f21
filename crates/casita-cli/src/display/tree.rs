//! Box-drawing tree rendering.
//!
//! Connectors follow the usual convention: `├── ` for a non-last sibling,
//! `└── ` for the last one. The continuation prefix for a child's own
//! descendants is decided per level from that child's position among its
//! siblings, so nesting composes correctly at any depth.

/// A label with ordered children. Depth is unbounded here even though the
/// status view only ever nests home -> room -> device.
pub struct TreeNode {
    pub label: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    pub fn leaf(label: impl Into<String>) -> Self {
        Self::new(label, Vec::new())
    }
}

/// A rooted tree. The root label renders bare, without a connector.
pub struct Tree {
    pub root: TreeNode,
}

impl Tree {
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.root.label);
        out.push('\n');
        render_children(&mut out, &self.root.children, "");
        out
    }
}

fn render_children(out: &mut String, children: &[TreeNode], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let connector = if last { "\u{2514}\u{2500}\u{2500} " } else { "\u{251c}\u{2500}\u{2500} " };

        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&child.label);
        out.push('\n');

        if !child.children.is_empty() {
            let continuation = if last { "    " } else { "\u{2502}   " };
            let child_prefix = format!("{prefix}{continuation}");
            render_children(out, &child.children, &child_prefix);
        }
    }
}
