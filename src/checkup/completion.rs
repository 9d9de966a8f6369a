//! Generic catalog completion.
//!
//! Cooking, crafting, fishing, basic shipping and the museum all ask the
//! same question: given a catalog and what the save owns, how many entries
//! are done, which tiers are met, and what is left? Some collections have
//! two signals (a recipe can be *known* without having been *cooked*), the
//! rest have one.

use std::collections::BTreeMap;

use crate::data::CatalogEntry;
use crate::shared::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalKind {
    Achievement,
    Milestone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    Count(u64),
    /// Every catalog entry.
    All,
}

/// One goal over the completed count. Tiers are independent of each other.
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub threshold: Threshold,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: GoalKind,
}

impl Tier {
    pub const fn achievement(threshold: Threshold, name: &'static str, description: &'static str) -> Self {
        Self {
            threshold,
            name,
            description,
            kind: GoalKind::Achievement,
        }
    }

    pub const fn milestone(threshold: Threshold, name: &'static str) -> Self {
        Self {
            threshold,
            name,
            description: "",
            kind: GoalKind::Milestone,
        }
    }
}

/// What the save owns for one collection.
#[derive(Debug, Clone, Copy)]
pub enum Ownership<'a, K> {
    /// Owned with quantity > 0 means done.
    Single(&'a BTreeMap<K, u64>),
    /// `known` (any quantity) vs `done` (quantity > 0).
    Split {
        known: &'a BTreeMap<K, u64>,
        done: &'a BTreeMap<K, u64>,
    },
}

/// Catalog entries still to do, sorted by display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outstanding {
    /// Known but not done; with a single signal, simply not done.
    pub known: Vec<&'static str>,
    /// Not known at all. `None` for single-signal collections.
    pub unknown: Option<Vec<&'static str>>,
}

impl Outstanding {
    /// Converts to report lists, dropping empty partitions.
    pub fn into_lists(self, known_heading: &str, unknown_heading: &str) -> Vec<OutstandingList> {
        let mut lists = Vec::new();
        if !self.known.is_empty() {
            lists.push(named_list(known_heading, self.known));
        }
        if let Some(unknown) = self.unknown.filter(|u| !u.is_empty()) {
            lists.push(named_list(unknown_heading, unknown));
        }
        lists
    }
}

fn named_list(heading: &str, names: Vec<&'static str>) -> OutstandingList {
    OutstandingList::sorted(heading, names.into_iter().map(OutstandingItem::named).collect())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub total: usize,
    pub known_count: usize,
    pub completed_count: usize,
    /// One entry per tier, in tier order.
    pub tiers: Vec<Entry>,
    /// `None` once everything is completed.
    pub outstanding: Option<Outstanding>,
}

impl Completion {
    pub fn is_complete(&self) -> bool {
        self.completed_count >= self.total
    }
}

/// Evaluates `ownership` against `catalog`. Owned ids that are not in the
/// catalog are ignored.
pub fn evaluate<K: Ord>(
    catalog: &[CatalogEntry<K>],
    ownership: Ownership<'_, K>,
    tiers: &[Tier],
) -> Completion {
    let (known_map, done_map, split) = match ownership {
        Ownership::Single(owned) => (owned, owned, false),
        Ownership::Split { known, done } => (known, done, true),
    };

    let mut known_count = 0;
    let mut completed_count = 0;
    let mut need_known = Vec::new();
    let mut need_unknown = Vec::new();

    for entry in catalog {
        let known = known_map.contains_key(&entry.id);
        let done = done_map.get(&entry.id).copied().unwrap_or(0) > 0;
        if known {
            known_count += 1;
        }
        if done {
            completed_count += 1;
        } else if known || !split {
            need_known.push(entry.name);
        } else {
            need_unknown.push(entry.name);
        }
    }

    let total = catalog.len();
    let tiers = tiers
        .iter()
        .map(|tier| tier_entry(tier, completed_count as u64, total as u64))
        .collect();

    let outstanding = (completed_count < total).then(|| {
        need_known.sort_unstable();
        need_unknown.sort_unstable();
        Outstanding {
            known: need_known,
            unknown: split.then_some(need_unknown),
        }
    });

    Completion {
        total,
        known_count,
        completed_count,
        tiers,
        outstanding,
    }
}

/// Builds the entry for one tier given the completed count.
pub fn tier_entry(tier: &Tier, have: u64, total: u64) -> Entry {
    let target = match tier.threshold {
        Threshold::Count(n) => n,
        Threshold::All => total,
    };
    let progress = Progress::threshold(tier.name, tier.description, have, target, Unit::Count);
    match tier.kind {
        GoalKind::Achievement => Entry::Achievement(progress),
        GoalKind::Milestone => Entry::Milestone(progress),
    }
}
