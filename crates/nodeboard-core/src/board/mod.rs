use serde::{Deserialize, Serialize};

use crate::composables::{Coordinate, Positioned};

/// A titled piece of text positioned on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub id: String,
    pub title: String,
    pub coordinates: Coordinate,
}

impl Positioned for TextNode {
    fn coordinates(&self) -> Coordinate {
        self.coordinates
    }
}

/// Owns the text nodes on the canvas and their lifecycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    nodes: Vec<TextNode>,
    next_id: u64,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[TextNode] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut TextNode> {
        self.nodes.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a node at the given position and return a reference to it.
    /// Ids are sequential and never reused within a board.
    pub fn add_node(&mut self, title: impl Into<String>, coordinates: Coordinate) -> &TextNode {
        self.next_id += 1;
        self.nodes.push(TextNode {
            id: format!("node-{}", self.next_id),
            title: title.into(),
            coordinates,
        });
        // Just pushed, so the list is non-empty.
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn remove_node(&mut self, id: &str) -> Option<TextNode> {
        let index = self.nodes.iter().position(|node| node.id == id)?;
        Some(self.nodes.remove(index))
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut TextNode> {
        self.nodes.iter_mut().find(|node| node.id == id)
    }

    /// The nearest node within `radius` pixels of `position`, if any.
    pub fn node_at(&self, position: Coordinate, radius: f32) -> Option<&TextNode> {
        let distance_squared = |node: &TextNode| {
            let dx = node.coordinates.x - position.x;
            let dy = node.coordinates.y - position.y;
            dx * dx + dy * dy
        };

        self.nodes
            .iter()
            .filter(|node| distance_squared(node) <= radius * radius)
            .min_by(|a, b| distance_squared(a).total_cmp(&distance_squared(b)))
    }
}
