//! Static reference catalogs.
//!
//! Every table here is immutable game-design data: item ids to display
//! names, tier thresholds, bundle layouts, mail flags. Nothing in this
//! module evaluates a save; the `checkup` evaluators read these tables.

pub mod community;
pub mod cooking;
pub mod crafting;
pub mod fish;
pub mod monsters;
pub mod museum;
pub mod names;
pub mod shipping;
pub mod stardrops;

/// Numeric object id used by the save for items, fish, minerals, etc.
pub type ItemId = u32;

/// One catalog row. Identity is `id`; `name` is for display and sorting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry<K: 'static> {
    pub id: K,
    pub name: &'static str,
}

/// A named category with a quantity goal, e.g. an eradication goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryGoal {
    pub category: &'static str,
    pub goal: u64,
    /// Members shown to the player for this category.
    pub representatives: &'static [&'static str],
}

/// Reverse lookup by display name.
pub fn id_of_name<K: Copy>(catalog: &[CatalogEntry<K>], name: &str) -> Option<K> {
    catalog.iter().find(|e| e.name == name).map(|e| e.id)
}
