use crate::model::NodeId;
use crate::store::TreeStore;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Shared sizing rule for both layouts.
pub const MIN_NODE_WIDTH: f64 = 100.0;
pub const WIDTH_PER_CHAR: f64 = 8.0;
pub const NODE_HEIGHT: f64 = 40.0;

/// Canvas anchor. The viewport decides what ends up on screen, so the layouts
/// are free to center on the origin.
pub const CENTER_X: f64 = 0.0;
pub const CENTER_Y: f64 = 0.0;

/// Center layout: distance from a parent to its tier-1 children, the extra
/// distance added per tier beyond that, and the vertical gap between stacked
/// siblings.
pub const BASE_DISTANCE: f64 = 220.0;
pub const TIER_INCREMENT: f64 = 160.0;
pub const SIBLING_SPACING: f64 = 70.0;

/// Top layout: y of the root row, vertical gap between rows, and the minimum
/// horizontal gap between nodes in a row.
pub const BASE_Y: f64 = 0.0;
pub const TIER_VERTICAL_SPACING: f64 = 110.0;
pub const MIN_SPACING: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    Center,
    Top,
}

impl LayoutMode {
    pub fn toggled(self) -> Self {
        match self {
            LayoutMode::Center => LayoutMode::Top,
            LayoutMode::Top => LayoutMode::Center,
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutMode::Center => write!(f, "center"),
            LayoutMode::Top => write!(f, "top"),
        }
    }
}

impl std::str::FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "center" => Ok(LayoutMode::Center),
            "top" => Ok(LayoutMode::Top),
            other => Err(format!("unknown layout mode: {other}")),
        }
    }
}

/// Derived placement of one node: center coordinates plus size. Never stored
/// on the node; always recomputed from tree structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn sign(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Width/height for a label. Width grows with the display width of the
/// widest line, with a floor; height is fixed.
pub fn node_size(text: &str) -> (f64, f64) {
    let widest = text.lines().map(|l| l.width()).max().unwrap_or(0);
    let width = MIN_NODE_WIDTH.max(WIDTH_PER_CHAR * widest as f64);
    (width, NODE_HEIGHT)
}

/// Computes a position for every node reachable from the root. Pure and
/// deterministic: identical input yields identical output, which is what
/// allows positions to be a throwaway view instead of stored state.
pub fn compute(store: &TreeStore, mode: LayoutMode) -> HashMap<NodeId, Position> {
    match mode {
        LayoutMode::Center => center_layout(store),
        LayoutMode::Top => top_layout(store),
    }
}

fn position_for(store: &TreeStore, id: NodeId, x: f64, y: f64) -> Option<Position> {
    let node = store.get(id)?;
    let (width, height) = node_size(&node.text);
    Some(Position {
        x,
        y,
        width,
        height,
    })
}

/// Bilateral mind-map. Tier-1 children alternate sides by index; deeper
/// tiers inherit their parent's side so branches never cross the centerline.
fn center_layout(store: &TreeStore) -> HashMap<NodeId, Position> {
    let mut out = HashMap::new();
    let Some(root_id) = store.root() else {
        return out;
    };
    let Some(root_pos) = position_for(store, root_id, CENTER_X, CENTER_Y) else {
        log::warn!("root {root_id} missing from node map");
        return out;
    };
    out.insert(root_id, root_pos);

    let mut visited = HashSet::new();
    visited.insert(root_id);
    place_branch(store, &mut out, &mut visited, root_id, 1, None);
    out
}

fn place_branch(
    store: &TreeStore,
    out: &mut HashMap<NodeId, Position>,
    visited: &mut HashSet<NodeId>,
    parent_id: NodeId,
    tier: usize,
    inherited: Option<Side>,
) {
    let (parent_x, parent_y) = match out.get(&parent_id) {
        Some(p) => (p.x, p.y),
        None => return,
    };
    let children = store.children_of(parent_id).to_vec();
    let count = children.len();

    for (index, child_id) in children.iter().enumerate() {
        if store.get(*child_id).is_none() {
            log::warn!("dangling child {child_id} under {parent_id}, skipping");
            continue;
        }
        if !visited.insert(*child_id) {
            log::warn!("node {child_id} reached twice during layout, skipping");
            continue;
        }

        // Alternate only at tier 1; inherit below it.
        let side = inherited.unwrap_or(if index % 2 == 0 {
            Side::Left
        } else {
            Side::Right
        });

        let reach = BASE_DISTANCE + (tier as f64 - 1.0) * TIER_INCREMENT;
        let x = parent_x + side.sign() * reach;
        let y = parent_y + index as f64 * SIBLING_SPACING
            - (count as f64 - 1.0) * SIBLING_SPACING / 2.0;

        if let Some(pos) = position_for(store, *child_id, x, y) {
            out.insert(*child_id, pos);
        }
        place_branch(store, out, visited, *child_id, tier + 1, Some(side));
    }
}

/// Tiered hierarchical tree. Rows are discovered breadth-first in `children`
/// order and each row is centered on the anchor x.
fn top_layout(store: &TreeStore) -> HashMap<NodeId, Position> {
    let mut out = HashMap::new();
    let Some(root_id) = store.root() else {
        return out;
    };
    if store.get(root_id).is_none() {
        log::warn!("root {root_id} missing from node map");
        return out;
    }

    // Depth pass: row membership in discovery order.
    let mut rows: Vec<Vec<NodeId>> = vec![vec![root_id]];
    let mut visited = HashSet::new();
    visited.insert(root_id);
    let mut queue = VecDeque::new();
    queue.push_back((root_id, 0usize));

    while let Some((id, depth)) = queue.pop_front() {
        for child_id in store.children_of(id) {
            if store.get(*child_id).is_none() {
                log::warn!("dangling child {child_id} under {id}, skipping");
                continue;
            }
            if !visited.insert(*child_id) {
                log::warn!("node {child_id} reached twice during layout, skipping");
                continue;
            }
            if rows.len() <= depth + 1 {
                rows.push(Vec::new());
            }
            rows[depth + 1].push(*child_id);
            queue.push_back((*child_id, depth + 1));
        }
    }

    // Placement pass: center each row around the anchor.
    for (depth, row) in rows.iter().enumerate() {
        let y = BASE_Y + depth as f64 * TIER_VERTICAL_SPACING;
        let widths: Vec<f64> = row
            .iter()
            .map(|id| {
                store
                    .get(*id)
                    .map(|n| node_size(&n.text).0)
                    .unwrap_or(MIN_NODE_WIDTH)
            })
            .collect();
        let total: f64 =
            widths.iter().sum::<f64>() + (row.len().saturating_sub(1)) as f64 * MIN_SPACING;

        let mut cursor = CENTER_X - total / 2.0;
        for (id, width) in row.iter().zip(widths.iter()) {
            if let Some(pos) = position_for(store, *id, cursor + width / 2.0, y) {
                out.insert(*id, pos);
            }
            cursor += width + MIN_SPACING;
        }
    }

    out
}
