use std::fmt;

use crate::types::bookmark::Bookmark;

/// The rendered representation of one bookmark, tagged with the record's `id`
/// for later lookup. The id-to-node mapping is 1:1 and is the only index the
/// client maintains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewNode {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub tags: String,
}

impl ViewNode {
    fn from_bookmark(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id,
            title: bookmark.title.clone(),
            url: bookmark.url.clone(),
            tags: bookmark.tags.clone(),
        }
    }
}

impl fmt::Display for ViewNode {
    /// Console rendering of one node: title heading, the URL as the link
    /// target, the tags as plain text, and the delete control label.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  {}", self.title)?;
        writeln!(f, "  -> {}", self.url)?;
        writeln!(f, "  tags: {}", self.tags)?;
        write!(f, "  [delete {}]", self.id)
    }
}

/// Trait defining the view management interface.
pub trait ViewManagerTrait {
    fn render_front(&mut self, bookmark: &Bookmark);
    fn render_all(&mut self, bookmarks: &[Bookmark]);
    fn remove(&mut self, id: i64) -> bool;
    fn clear(&mut self);
    fn get_node(&self, id: i64) -> Option<&ViewNode>;
    fn nodes(&self) -> &[ViewNode];
    fn order(&self) -> Vec<i64>;
    fn node_count(&self) -> usize;
}

/// In-memory view of rendered bookmarks, front-to-back.
pub struct ViewManager {
    nodes: Vec<ViewNode>,
}

impl ViewManager {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn find_node_index(&self, id: i64) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    /// Render the whole view as display text, one node per block.
    pub fn render_text(&self) -> String {
        if self.nodes.is_empty() {
            return "  (no bookmarks)".to_string();
        }
        self.nodes
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for ViewManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewManagerTrait for ViewManager {
    /// Build a view node for the record and insert it at the front.
    fn render_front(&mut self, bookmark: &Bookmark) {
        self.nodes.insert(0, ViewNode::from_bookmark(bookmark));
    }

    /// Clear the view and render each record via `render_front`, in the order
    /// received. Each insertion is a front-insertion, so the final order is
    /// the reverse of the order received.
    fn render_all(&mut self, bookmarks: &[Bookmark]) {
        self.nodes.clear();
        for bookmark in bookmarks {
            self.render_front(bookmark);
        }
    }

    /// Remove exactly the one node whose key matches `id`. Fails closed: if
    /// no node matches (e.g. a racing delete already removed it), this is a
    /// no-op and returns false.
    fn remove(&mut self, id: i64) -> bool {
        match self.find_node_index(id) {
            Some(idx) => {
                self.nodes.remove(idx);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn get_node(&self, id: i64) -> Option<&ViewNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    fn nodes(&self) -> &[ViewNode] {
        &self.nodes
    }

    /// Node keys front-to-back.
    fn order(&self) -> Vec<i64> {
        self.nodes.iter().map(|n| n.id).collect()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
