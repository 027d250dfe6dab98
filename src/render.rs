//! ASCII-art rendering of the shape of an [`AvlTree`].
//!
//! The canvas of a tree of height `h` has `2h - 1` rows and `2^(h + 2) + 1` columns. Each
//! level of the tree occupies every other row, and the rows in between hold the `/` and `\`
//! connectors to the children. The horizontal distance between a node and its children halves
//! at every level.
//!
//! # Examples
//! ```
//! use label_tree::AvlTree;
//!
//! let tree: AvlTree = vec!["Alice", "Bob", "Charlie"].into_iter().collect();
//! let canvas = tree.render().unwrap();
//!
//! assert_eq!(canvas.height(), 3);
//! assert_eq!(canvas.width(), 17);
//! assert_eq!(canvas.to_string().lines().next().map(str::trim), Some("Bob"));
//! ```

use crate::avl_tree::{AvlTree, Node};
use crate::error::{Error, Result};
use std::fmt;

/// Layout options for a [`Canvas`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Labels longer than this many characters are truncated.
    pub label_width: usize,
    /// Trees taller than this are refused. The canvas width doubles with every level, so a
    /// tree of height 16 already needs a grid of 31 rows by 262145 columns.
    pub max_height: usize,
}

impl RenderConfig {
    pub fn with_label_width(mut self, label_width: usize) -> Self {
        self.label_width = label_width;
        self
    }

    pub fn with_max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            label_width: 7,
            max_height: 16,
        }
    }
}

/// A two-dimensional grid of characters depicting a tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    cells: Vec<Vec<char>>,
}

impl Canvas {
    /// Draws the subtree rooted at `root`.
    pub fn new(root: &Node, config: &RenderConfig) -> Self {
        let height = 2 * root.height() - 1;
        let width = (1 << (root.height() + 2)) + 1;
        let mut canvas = Canvas {
            cells: vec![vec![' '; width]; height],
        };

        let col = (width / 2) as isize - 4;
        let shift = (width / 4) as isize;
        canvas.draw(root, 0, col, shift, config);
        canvas
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Returns the rows of the canvas, padded with spaces to the full width.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.iter().map(|row| row.iter().collect())
    }

    fn draw(&mut self, node: &Node, row: usize, col: isize, shift: isize, config: &RenderConfig) {
        for (offset, ch) in node.key().chars().take(config.label_width).enumerate() {
            self.put(row, col + offset as isize, ch);
        }

        if let Some(left) = node.left() {
            self.put(row + 1, col - shift / 2, '/');
            self.draw(left, row + 2, col - shift, shift / 2, config);
        }
        if let Some(right) = node.right() {
            self.put(row + 1, col + shift / 2 + 2, '\\');
            self.draw(right, row + 2, col + shift, shift / 2, config);
        }
    }

    // Cells outside of the canvas are dropped.
    fn put(&mut self, row: usize, col: isize, ch: char) {
        if col < 0 {
            return;
        }
        if let Some(cell) = self.cells.get_mut(row).and_then(|cells| cells.get_mut(col as usize)) {
            *cell = ch;
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl AvlTree {
    /// Renders the tree with the default [`RenderConfig`]. Fails with [`Error::EmptyTree`] if
    /// the tree holds no keys, and with [`Error::TooTall`] if the tree is taller than 16 levels,
    /// which can happen with as few as 2583 keys.
    pub fn render(&self) -> Result<Canvas> {
        self.render_with(&RenderConfig::default())
    }

    /// Renders the tree with the given layout options.
    pub fn render_with(&self, config: &RenderConfig) -> Result<Canvas> {
        let root = self.root().ok_or(Error::EmptyTree)?;
        if root.height() > config.max_height {
            return Err(Error::TooTall {
                height: root.height(),
                max_height: config.max_height,
            });
        }
        Ok(Canvas::new(root, config))
    }
}
