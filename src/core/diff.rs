//! Keyed list diff between two order snapshots.
//!
//! Items are matched by `id`; matched items whose fields differ produce an
//! update. Survivors that lie on the longest common subsequence of the old
//! and new id order stay in place, every other survivor moves exactly once.
//!
//! The script is ordered so it can be replayed front to back:
//! removals (back to front), moves, insertions (front to back), updates.
//! Each position refers to the list after all earlier edits were applied.

use crate::domain::model::{Order, OrderId};
use crate::domain::ports::ListUpdateCallback;
use crate::utils::error::{OrderError, Result};
use crate::utils::validation::validate_unique_ids;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Edit {
    Remove { position: usize, id: OrderId },
    Move { from: usize, to: usize, id: OrderId },
    Insert { position: usize, id: OrderId },
    Update { position: usize, id: OrderId },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub removed: usize,
    pub moved: usize,
    pub inserted: usize,
    pub updated: usize,
}

impl fmt::Display for DiffStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "removed={} moved={} inserted={} updated={}",
            self.removed, self.moved, self.inserted, self.updated
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditScript {
    edits: Vec<Edit>,
}

impl EditScript {
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn stats(&self) -> DiffStats {
        self.edits
            .iter()
            .fold(DiffStats::default(), |mut stats, edit| {
                match edit {
                    Edit::Remove { .. } => stats.removed += 1,
                    Edit::Move { .. } => stats.moved += 1,
                    Edit::Insert { .. } => stats.inserted += 1,
                    Edit::Update { .. } => stats.updated += 1,
                }
                stats
            })
    }

    pub fn dispatch_updates_to<C: ListUpdateCallback + ?Sized>(&self, callback: &mut C) {
        for edit in &self.edits {
            match *edit {
                Edit::Remove { position, .. } => callback.on_removed(position),
                Edit::Move { from, to, .. } => callback.on_moved(from, to),
                Edit::Insert { position, .. } => callback.on_inserted(position),
                Edit::Update { position, .. } => callback.on_changed(position),
            }
        }
    }

    /// Replays the script over `old`, taking inserted and updated values
    /// from `new`. `old` must be the list the script was computed from.
    pub fn apply(&self, old: &[Order], new: &[Order]) -> Result<Vec<Order>> {
        let new_by_id: HashMap<OrderId, &Order> =
            new.iter().map(|order| (order.id, order)).collect();
        let lookup = |id: OrderId| {
            new_by_id
                .get(&id)
                .map(|order| (*order).clone())
                .ok_or(OrderError::NotFound { id })
        };
        let out_of_range = |position: usize, len: usize| OrderError::ValidationError {
            message: format!("edit position {} outside list of {}", position, len),
        };

        let mut items = old.to_vec();
        for edit in &self.edits {
            match *edit {
                Edit::Remove { position, .. } => {
                    if position >= items.len() {
                        return Err(out_of_range(position, items.len()));
                    }
                    items.remove(position);
                }
                Edit::Move { from, to, .. } => {
                    if from >= items.len() || to >= items.len() {
                        return Err(out_of_range(from.max(to), items.len()));
                    }
                    let item = items.remove(from);
                    items.insert(to, item);
                }
                Edit::Insert { position, id } => {
                    if position > items.len() {
                        return Err(out_of_range(position, items.len()));
                    }
                    items.insert(position, lookup(id)?);
                }
                Edit::Update { position, id } => {
                    let len = items.len();
                    let slot = items
                        .get_mut(position)
                        .ok_or_else(|| out_of_range(position, len))?;
                    *slot = lookup(id)?;
                }
            }
        }
        Ok(items)
    }
}

/// Like [`diff`], but rejects inputs with duplicate ids.
pub fn try_diff(old: &[Order], new: &[Order]) -> Result<EditScript> {
    validate_unique_ids("old", old)?;
    validate_unique_ids("new", new)?;
    Ok(diff(old, new))
}

/// Computes the edit script turning `old` into `new`.
///
/// Both lists are expected to hold unique ids.
pub fn diff(old: &[Order], new: &[Order]) -> EditScript {
    let new_ids: HashSet<OrderId> = new.iter().map(|order| order.id).collect();
    let old_by_id: HashMap<OrderId, &Order> = old.iter().map(|order| (order.id, order)).collect();
    let mut edits = Vec::new();

    for (position, order) in old.iter().enumerate().rev() {
        if !new_ids.contains(&order.id) {
            edits.push(Edit::Remove {
                position,
                id: order.id,
            });
        }
    }

    let mut working: Vec<OrderId> = old
        .iter()
        .map(|order| order.id)
        .filter(|id| new_ids.contains(id))
        .collect();
    let target: Vec<OrderId> = new
        .iter()
        .map(|order| order.id)
        .filter(|id| old_by_id.contains_key(id))
        .collect();
    let target_rank: HashMap<OrderId, usize> =
        target.iter().enumerate().map(|(rank, id)| (*id, rank)).collect();
    let ranks: Vec<usize> = working.iter().map(|id| target_rank[id]).collect();
    let stable: HashSet<OrderId> = longest_increasing_subsequence(&ranks)
        .into_iter()
        .map(|index| working[index])
        .collect();

    // 非穩定項目依目標順序逐一放到前一個目標項目之後
    for (rank, id) in target.iter().enumerate() {
        if stable.contains(id) {
            continue;
        }
        let Some(from) = working.iter().position(|current| current == id) else {
            continue;
        };
        working.remove(from);
        let to = match rank.checked_sub(1) {
            Some(previous) => working
                .iter()
                .position(|current| *current == target[previous])
                .map_or(0, |index| index + 1),
            None => 0,
        };
        working.insert(to, *id);
        if from != to {
            edits.push(Edit::Move { from, to, id: *id });
        }
    }

    for (position, order) in new.iter().enumerate() {
        if !old_by_id.contains_key(&order.id) {
            edits.push(Edit::Insert {
                position,
                id: order.id,
            });
        }
    }

    for (position, order) in new.iter().enumerate() {
        if let Some(previous) = old_by_id.get(&order.id) {
            if *previous != order {
                edits.push(Edit::Update {
                    position,
                    id: order.id,
                });
            }
        }
    }

    EditScript { edits }
}

/// Indices of one longest strictly increasing subsequence of `values`.
///
/// Patience sorting with back links; ties resolve to the earliest tails so
/// the result is deterministic.
fn longest_increasing_subsequence(values: &[usize]) -> Vec<usize> {
    let mut tails: Vec<usize> = Vec::new();
    let mut previous: Vec<Option<usize>> = vec![None; values.len()];

    for (index, &value) in values.iter().enumerate() {
        let slot = tails.partition_point(|&tail| values[tail] < value);
        if slot > 0 {
            previous[index] = Some(tails[slot - 1]);
        }
        if slot == tails.len() {
            tails.push(index);
        } else {
            tails[slot] = index;
        }
    }

    let mut sequence = Vec::with_capacity(tails.len());
    let mut cursor = tails.last().copied();
    while let Some(index) = cursor {
        sequence.push(index);
        cursor = previous[index];
    }
    sequence.reverse();
    sequence
}
