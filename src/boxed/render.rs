use std::fmt::{self, Write};

use super::{Node, Tree};

const LEFT_BRANCH: &str = "└── ";
const RIGHT_BRANCH: &str = "┌── ";
const CONTINUED: &str = "│   ";
const BLANK: &str = "    ";

impl<K: fmt::Display> Tree<K> {
    /// Draws the tree sideways, one node per line. Each node's right subtree is drawn above it
    /// and its left subtree below it. An empty tree draws as an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::boxed::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.render(), "│   ┌── 3\n└── 2\n    └── 1\n");
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<K: fmt::Display> fmt::Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.as_deref() {
            Some(root) => root.render(f, "", true),
            None => Ok(()),
        }
    }
}

impl<K: fmt::Display> Node<K> {
    /// Writes this subtree below `prefix`. `is_left` tells whether this node hangs off its
    /// parent's left side; the root counts as a left child.
    fn render<W: Write>(&self, out: &mut W, prefix: &str, is_left: bool) -> fmt::Result {
        if let Some(right) = self.right.as_deref() {
            let extended = [prefix, if is_left { CONTINUED } else { BLANK }].concat();
            right.render(out, &extended, false)?;
        }

        let branch = if is_left { LEFT_BRANCH } else { RIGHT_BRANCH };
        writeln!(out, "{}{}{}", prefix, branch, self.key)?;

        if let Some(left) = self.left.as_deref() {
            let extended = [prefix, if is_left { BLANK } else { CONTINUED }].concat();
            left.render(out, &extended, true)?;
        }
        Ok(())
    }
}
