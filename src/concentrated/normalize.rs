//! Extraction of concentrated positions from pool-state snapshots whose
//! shape has drifted across API versions.
//!
//! A snapshot is held in an arena ([`Snapshot`]) so that shapes plain JSON
//! cannot express, such as cycles and maps keyed by tuples, are still
//! representable. The visitor walks it depth-first, recording the shallowest
//! depth each [`NodeId`] was expanded at, under a depth cap, so every input
//! terminates.
//!
//! Recognised encodings:
//!
//! - records with named tick fields (`tick_lower`/`tickLower`/`lower`/...),
//! - lists `[lower, upper]` or `[lower, upper, liquidity]` at the root, as
//!   list items or as entry values (not as plain record fields),
//! - tuple-keyed entries: map keys `[lower, upper]`, record keys such as
//!   `"100:200"` or `"100,200"`, `{key: [lower, upper], val: ..}` records and
//!   `[[lower, upper], liquidity]` pairs.
//!
//! Positions are de-duplicated by `"tickLower:tickUpper"`; a later
//! occurrence replaces an earlier one but keeps its place in the output.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde_json::{Number, Value};

use super::tick::{MAX_TICK, MIN_TICK};
use crate::model::decimal::coerce_decimal;
use crate::model::ConcentratedPosition;

pub type NodeId = usize;

const MAX_DEPTH: usize = 64;

const LOWER_KEYS: &[&str] = &[
    "tick_lower",
    "tickLower",
    "lower",
    "tickLowerIndex",
    "tick_lower_index",
    "lower_tick",
    "lowerTick",
];
const UPPER_KEYS: &[&str] = &[
    "tick_upper",
    "tickUpper",
    "upper",
    "tickUpperIndex",
    "tick_upper_index",
    "upper_tick",
    "upperTick",
];
const LIQUIDITY_KEYS: &[&str] = &["liquidity", "liq", "amount"];
const ENTRY_KEY_FIELDS: &[&str] = &["key", "k"];
const ENTRY_VALUE_FIELDS: &[&str] = &["val", "value", "v"];

#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotNode {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    List(Vec<NodeId>),
    /// String-keyed fields, in source order.
    Record(Vec<(String, NodeId)>),
    /// Entries whose keys are arbitrary nodes.
    Map(Vec<(NodeId, NodeId)>),
}

impl SnapshotNode {
    /// Integral values are stored as integers so they print without a
    /// fraction. Non-finite values become `Null`.
    pub fn number(value: f64) -> Self {
        if value.fract() == 0.0 && value.abs() < 9.007_199_254_740_992e15 {
            return SnapshotNode::Number(Number::from(value as i64));
        }
        Number::from_f64(value).map_or(SnapshotNode::Null, SnapshotNode::Number)
    }

    pub fn text(value: impl Into<String>) -> Self {
        SnapshotNode::Text(value.into())
    }
}

/// Arena of snapshot nodes with a designated root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    nodes: Vec<SnapshotNode>,
    root: Option<NodeId>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(value: &Value) -> Self {
        let mut snapshot = Self::new();
        let root = snapshot.push_json(value);
        snapshot.root = Some(root);
        snapshot
    }

    fn push_json(&mut self, value: &Value) -> NodeId {
        let node = match value {
            Value::Null => SnapshotNode::Null,
            Value::Bool(b) => SnapshotNode::Bool(*b),
            // Whole floats such as `500.0` are stored like `500`, so the
            // same position prints the same liquidity whatever its encoding.
            Value::Number(n) if n.is_f64() => n
                .as_f64()
                .map_or(SnapshotNode::Null, SnapshotNode::number),
            Value::Number(n) => SnapshotNode::Number(n.clone()),
            Value::String(s) => SnapshotNode::Text(s.clone()),
            Value::Array(items) => {
                let ids = items.iter().map(|v| self.push_json(v)).collect();
                SnapshotNode::List(ids)
            }
            Value::Object(fields) => {
                let ids = fields
                    .iter()
                    .map(|(k, v)| (k.clone(), self.push_json(v)))
                    .collect();
                SnapshotNode::Record(ids)
            }
        };
        self.push(node)
    }

    pub fn push(&mut self, node: SnapshotNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&SnapshotNode> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a field to a record. Returns false if `parent` is not a record.
    pub fn link_field(&mut self, parent: NodeId, key: &str, child: NodeId) -> bool {
        match self.nodes.get_mut(parent) {
            Some(SnapshotNode::Record(fields)) => {
                fields.push((key.to_string(), child));
                true
            }
            _ => false,
        }
    }

    /// Append an item to a list. Returns false if `parent` is not a list.
    pub fn link_item(&mut self, parent: NodeId, child: NodeId) -> bool {
        match self.nodes.get_mut(parent) {
            Some(SnapshotNode::List(items)) => {
                items.push(child);
                true
            }
            _ => false,
        }
    }

    /// Add an entry to a map. Returns false if `parent` is not a map.
    pub fn link_entry(&mut self, parent: NodeId, key: NodeId, value: NodeId) -> bool {
        match self.nodes.get_mut(parent) {
            Some(SnapshotNode::Map(entries)) => {
                entries.push((key, value));
                true
            }
            _ => false,
        }
    }
}

/// Where a node sits in its parent. Bare `[lower, upper]` lists are only
/// read as positions in the slots that hold collections of positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Root,
    ListItem,
    EntryValue,
    Field,
}

impl Slot {
    fn holds_bare_lists(self) -> bool {
        self != Slot::Field
    }
}

/// Every position found anywhere in `snapshot`. Never fails; unrecognised
/// or malformed data is skipped.
pub fn normalize_positions(snapshot: &Snapshot) -> Vec<ConcentratedPosition> {
    let mut found = Positions::default();
    let Some(root) = snapshot.root() else {
        return Vec::new();
    };

    // Shallowest depth each node was expanded at. A node first reached near
    // the depth cap is expanded again when a shorter path turns up, so the
    // cap never hides a subtree that is reachable within it.
    let mut shallowest: HashMap<NodeId, usize> = HashMap::new();
    let mut stack = vec![(root, 0usize, Slot::Root)];
    while let Some((id, depth, slot)) = stack.pop() {
        if depth > MAX_DEPTH {
            continue;
        }
        match shallowest.entry(id) {
            Entry::Occupied(mut seen) => {
                if *seen.get() <= depth {
                    continue;
                }
                seen.insert(depth);
            }
            Entry::Vacant(vacant) => {
                vacant.insert(depth);
            }
        }
        let children = match snapshot.get(id) {
            Some(SnapshotNode::Record(fields)) => visit_record(snapshot, fields, &mut found),
            Some(SnapshotNode::List(items)) => visit_list(snapshot, items, slot, &mut found),
            Some(SnapshotNode::Map(entries)) => visit_map(snapshot, entries, &mut found),
            _ => Vec::new(),
        };
        // Reversed so the stack pops children in source order.
        stack.extend(
            children
                .into_iter()
                .rev()
                .map(|(child, slot)| (child, depth + 1, slot)),
        );
    }

    found.into_vec()
}

pub fn normalize_positions_json(value: &Value) -> Vec<ConcentratedPosition> {
    normalize_positions(&Snapshot::from_json(value))
}

/// Decode `json` and normalize it; undecodable text yields no positions.
pub fn normalize_positions_str(json: &str) -> Vec<ConcentratedPosition> {
    match serde_json::from_str::<Value>(json) {
        Ok(value) => normalize_positions_json(&value),
        Err(_) => Vec::new(),
    }
}

// ── Shape visitors ───────────────────────────────────────────────────

fn visit_record(
    snapshot: &Snapshot,
    fields: &[(String, NodeId)],
    found: &mut Positions,
) -> Vec<(NodeId, Slot)> {
    if let (Some(lower), Some(upper)) = (field(fields, LOWER_KEYS), field(fields, UPPER_KEYS)) {
        if let (Some(lower), Some(upper)) = (tick_of(snapshot, lower), tick_of(snapshot, upper)) {
            let liquidity = field(fields, LIQUIDITY_KEYS)
                .map(|id| liquidity_of(snapshot, id))
                .unwrap_or_else(|| "0".to_string());
            found.insert(lower, upper, liquidity);
        }
        // A position record is a leaf: its other fields are metadata.
        return Vec::new();
    }

    if let (Some(key), Some(value)) = (
        field(fields, ENTRY_KEY_FIELDS),
        field(fields, ENTRY_VALUE_FIELDS),
    ) {
        if let Some((lower, upper)) = tuple_of(snapshot, key) {
            found.insert(lower, upper, liquidity_of(snapshot, value));
            return vec![(value, Slot::EntryValue)];
        }
    }

    for (key, value) in fields {
        if let Some((lower, upper)) = tuple_from_text(key) {
            found.insert(lower, upper, liquidity_of(snapshot, *value));
        }
    }

    fields.iter().map(|(_, id)| (*id, Slot::Field)).collect()
}

fn visit_list(
    snapshot: &Snapshot,
    items: &[NodeId],
    slot: Slot,
    found: &mut Positions,
) -> Vec<(NodeId, Slot)> {
    if slot.holds_bare_lists() {
        if let [key, value] = items {
            if let Some((lower, upper)) = pair_of(snapshot, *key) {
                if pair_of(snapshot, *value).is_none() {
                    found.insert(lower, upper, liquidity_of(snapshot, *value));
                    return vec![(*value, Slot::EntryValue)];
                }
            }
        }

        if matches!(items.len(), 2 | 3) {
            if let (Some(lower), Some(upper)) =
                (tick_of(snapshot, items[0]), tick_of(snapshot, items[1]))
            {
                let liquidity = items
                    .get(2)
                    .map(|id| liquidity_of(snapshot, *id))
                    .unwrap_or_else(|| "0".to_string());
                found.insert(lower, upper, liquidity);
                return Vec::new();
            }
        }
    }

    items.iter().map(|id| (*id, Slot::ListItem)).collect()
}

fn visit_map(
    snapshot: &Snapshot,
    entries: &[(NodeId, NodeId)],
    found: &mut Positions,
) -> Vec<(NodeId, Slot)> {
    for (key, value) in entries {
        if let Some((lower, upper)) = tuple_of(snapshot, *key) {
            found.insert(lower, upper, liquidity_of(snapshot, *value));
        }
    }
    // Keys are never descended into: a tuple key would otherwise be read
    // again as a bare `[lower, upper]` position.
    entries
        .iter()
        .map(|(_, value)| (*value, Slot::EntryValue))
        .collect()
}

// ── Scalar readers ───────────────────────────────────────────────────

fn field(fields: &[(String, NodeId)], names: &[&str]) -> Option<NodeId> {
    names
        .iter()
        .find_map(|name| fields.iter().find(|(k, _)| k == name).map(|(_, id)| *id))
}

fn tick_of(snapshot: &Snapshot, id: NodeId) -> Option<i32> {
    let raw = match snapshot.get(id)? {
        SnapshotNode::Number(n) => n.as_f64()?,
        SnapshotNode::Text(s) if !s.trim().is_empty() => coerce_decimal(s),
        _ => return None,
    };
    tick_from_f64(raw)
}

fn tick_from_f64(raw: f64) -> Option<i32> {
    let in_domain = raw.is_finite()
        && raw.fract() == 0.0
        && raw >= f64::from(MIN_TICK)
        && raw <= f64::from(MAX_TICK);
    in_domain.then_some(raw as i32)
}

/// A bare `[lower, upper]` list.
fn pair_of(snapshot: &Snapshot, id: NodeId) -> Option<(i32, i32)> {
    match snapshot.get(id)? {
        SnapshotNode::List(items) if items.len() == 2 => {
            Some((tick_of(snapshot, items[0])?, tick_of(snapshot, items[1])?))
        }
        _ => None,
    }
}

/// A tuple key: a `[lower, upper]` list or a `"lower:upper"` style string.
fn tuple_of(snapshot: &Snapshot, id: NodeId) -> Option<(i32, i32)> {
    match snapshot.get(id)? {
        SnapshotNode::Text(s) => tuple_from_text(s),
        _ => pair_of(snapshot, id),
    }
}

fn tuple_from_text(text: &str) -> Option<(i32, i32)> {
    let text = text.trim();
    let inner = text
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .or_else(|| text.strip_prefix('(').and_then(|t| t.strip_suffix(')')))
        .unwrap_or(text);
    let (lower, upper) = inner.split_once([':', ','])?;
    let (lower, upper) = (lower.trim(), upper.trim());
    if lower.is_empty() || upper.is_empty() {
        return None;
    }
    Some((
        tick_from_f64(coerce_decimal(lower))?,
        tick_from_f64(coerce_decimal(upper))?,
    ))
}

fn scalar_text(snapshot: &Snapshot, id: NodeId) -> Option<String> {
    match snapshot.get(id)? {
        SnapshotNode::Number(n) => Some(n.to_string()),
        SnapshotNode::Text(s) => Some(s.clone()),
        _ => None,
    }
}

/// Liquidity as a string: a scalar as is, or the liquidity field of a
/// record. Anything else is `"0"`.
fn liquidity_of(snapshot: &Snapshot, id: NodeId) -> String {
    if let Some(text) = scalar_text(snapshot, id) {
        return text;
    }
    match snapshot.get(id) {
        Some(SnapshotNode::Record(fields)) => field(fields, LIQUIDITY_KEYS)
            .and_then(|liq| scalar_text(snapshot, liq))
            .unwrap_or_else(|| "0".to_string()),
        _ => "0".to_string(),
    }
}

// ── Collector ────────────────────────────────────────────────────────

#[derive(Default)]
struct Positions {
    list: Vec<ConcentratedPosition>,
    by_key: HashMap<String, usize>,
}

impl Positions {
    fn insert(&mut self, tick_lower: i32, tick_upper: i32, liquidity: String) {
        if tick_lower >= tick_upper {
            return;
        }
        let position = ConcentratedPosition::new(tick_lower, tick_upper, liquidity);
        match self.by_key.entry(position.key()) {
            Entry::Occupied(slot) => self.list[*slot.get()] = position,
            Entry::Vacant(slot) => {
                slot.insert(self.list.len());
                self.list.push(position);
            }
        }
    }

    fn into_vec(self) -> Vec<ConcentratedPosition> {
        self.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_text_forms() {
        assert_eq!(tuple_from_text("100:200"), Some((100, 200)));
        assert_eq!(tuple_from_text("-60,60"), Some((-60, 60)));
        assert_eq!(tuple_from_text("[10, 20]"), Some((10, 20)));
        assert_eq!(tuple_from_text("(10,20)"), Some((10, 20)));
        assert_eq!(tuple_from_text("liquidity"), None);
        assert_eq!(tuple_from_text("1.5:2"), None);
        assert_eq!(tuple_from_text(":2"), None);
    }

    #[test]
    fn ticks_outside_domain_are_rejected() {
        assert_eq!(tick_from_f64(887_272.0), Some(MAX_TICK));
        assert_eq!(tick_from_f64(887_273.0), None);
        assert_eq!(tick_from_f64(f64::NAN), None);
    }

    #[test]
    fn integral_numbers_print_without_fraction() {
        let mut snapshot = Snapshot::new();
        let id = snapshot.push(SnapshotNode::number(500.0));
        assert_eq!(scalar_text(&snapshot, id).as_deref(), Some("500"));
    }

    #[test]
    fn linking_checks_container_kind() {
        let mut snapshot = Snapshot::new();
        let list = snapshot.push(SnapshotNode::List(Vec::new()));
        let leaf = snapshot.push(SnapshotNode::Null);
        assert!(snapshot.link_item(list, leaf));
        assert!(!snapshot.link_field(list, "x", leaf));
        assert!(!snapshot.link_entry(leaf, leaf, leaf));
    }
}
