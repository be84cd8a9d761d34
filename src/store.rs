use crate::model::{now_ms, sanitize_text, Node, NodeId};
use std::collections::{HashMap, HashSet};

/// Canonical node collection. All mutations go through the operations below,
/// which keep `parent` pointers and `children` arrays mutually consistent and
/// treat invalid targets as silent no-ops.
pub struct TreeStore {
    nodes: HashMap<NodeId, Node>,
    root: Option<NodeId>,
    selected: Option<NodeId>,
    next_id: u64,
}

impl Default for TreeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeStore {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            root: None,
            selected: None,
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }

    fn alloc_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Creates a node and selects it. On an empty tree the parent argument is
    /// ignored and the new node becomes the root; otherwise `parent` must
    /// reference an existing node or the call is a no-op.
    pub fn create_node(&mut self, parent: Option<NodeId>, text: &str) -> Option<NodeId> {
        if self.nodes.is_empty() {
            let id = self.alloc_id();
            self.nodes.insert(id, Node::new(text, None));
            self.root = Some(id);
            self.selected = Some(id);
            return Some(id);
        }

        let parent_id = parent?;
        if !self.nodes.contains_key(&parent_id) {
            return None;
        }

        let id = self.alloc_id();
        self.nodes.insert(id, Node::new(text, Some(parent_id)));
        if let Some(parent_node) = self.nodes.get_mut(&parent_id) {
            parent_node.children.push(id);
        }
        self.selected = Some(id);
        Some(id)
    }

    /// Updates a node's text. Structure fields (`parent`, `children`) change
    /// only through `create_node`/`delete_node`.
    pub fn update_text(&mut self, id: NodeId, text: &str) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.text = sanitize_text(text);
            node.modified_ms = now_ms();
        }
    }

    pub fn set_collapsed(&mut self, id: NodeId, collapsed: bool) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.collapsed = collapsed;
            node.modified_ms = now_ms();
        }
    }

    /// Removes `id` and its entire subtree. Deleting the root or a missing id
    /// is a no-op. Clears the selection when the deleted set contained it.
    pub fn delete_node(&mut self, id: NodeId) {
        if Some(id) == self.root || !self.nodes.contains_key(&id) {
            return;
        }

        let doomed = self.subtree(id);
        let doomed_set: HashSet<NodeId> = doomed.iter().copied().collect();

        if let Some(parent_id) = self.parent_of(id) {
            if let Some(parent_node) = self.nodes.get_mut(&parent_id) {
                parent_node.children.retain(|c| *c != id);
            }
        }

        for victim in &doomed {
            self.nodes.remove(victim);
        }

        if let Some(sel) = self.selected {
            if doomed_set.contains(&sel) {
                self.selected = None;
            }
        }
    }

    /// Sets the selection. Clearing is always allowed; selecting an id that
    /// does not exist is ignored.
    pub fn select(&mut self, id: Option<NodeId>) {
        match id {
            None => self.selected = None,
            Some(id) if self.nodes.contains_key(&id) => self.selected = Some(id),
            Some(_) => {}
        }
    }

    /// Collects `id` plus every descendant, using an explicit work stack so
    /// arbitrarily deep trees cannot overflow the call stack.
    pub fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut members = Vec::new();
        if !self.nodes.contains_key(&id) {
            return members;
        }

        let mut stack = vec![id];
        let mut seen = HashSet::new();
        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                log::warn!("cycle detected while collecting subtree of {id}");
                continue;
            }
            members.push(current);
            if let Some(node) = self.nodes.get(&current) {
                for child in node.children.iter().rev() {
                    stack.push(*child);
                }
            }
        }
        members
    }

    /// Serializable form: `(id, node)` pairs in depth-first order from the
    /// root, so saving the same tree twice yields identical output. Positions
    /// are never part of this; they are recomputed on load.
    pub fn snapshot(&self) -> Vec<(NodeId, Node)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        if let Some(root_id) = self.root {
            for id in self.subtree(root_id) {
                if let Some(node) = self.nodes.get(&id) {
                    out.push((id, node.clone()));
                }
            }
        }
        out
    }

    /// Rebuilds a store from a snapshot. The parentless entry becomes the
    /// root, the id counter continues past the highest id seen, and the
    /// selection starts empty. Nothing else is derived.
    pub fn from_snapshot(entries: Vec<(NodeId, Node)>) -> Self {
        let mut store = Self::new();
        for (id, node) in entries {
            if node.parent.is_none() && store.root.is_none() {
                store.root = Some(id);
            }
            store.next_id = store.next_id.max(id.0 + 1);
            store.nodes.insert(id, node);
        }
        store
    }
}
