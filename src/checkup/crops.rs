//! Crop shipping: Monoculture (300 of any one crop) and Polyculture (15 of
//! every polyculture crop).
//!
//! Monoculture also counts a handful of crops that Polyculture does not,
//! so the max is tracked across both tables in a single pass.

use std::collections::BTreeMap;

use crate::data::shipping::{MONOCULTURE_EXTRAS, POLYCULTURE_CROPS};
use crate::data::{CatalogEntry, ItemId};
use crate::save::SaveDocument;
use crate::shared::*;

pub const MONOCULTURE_TARGET: u64 = 300;
pub const POLYCULTURE_QUOTA: u64 = 15;

/// Stands in for the crop name when nothing has been shipped.
pub const NO_CROP_YET: &str = "of any crop";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropShipping {
    pub max_shipped: u64,
    pub max_shipped_name: &'static str,
    /// Polyculture crops at or above the quota.
    pub completed: usize,
    pub total: usize,
    pub monoculture: Progress,
    pub polyculture: Progress,
    /// Polyculture crops below quota with the amount still to ship, by name.
    pub needed: Vec<(&'static str, u64)>,
}

pub fn evaluate(
    shipped: &BTreeMap<ItemId, u64>,
    poly: &[CatalogEntry<ItemId>],
    mono_extras: &[CatalogEntry<ItemId>],
) -> CropShipping {
    let mut max_shipped = 0;
    let mut max_shipped_name = NO_CROP_YET;
    let mut completed = 0;
    let mut needed = Vec::new();

    for (entry, counts_for_poly) in poly
        .iter()
        .map(|e| (e, true))
        .chain(mono_extras.iter().map(|e| (e, false)))
    {
        let n = shipped.get(&entry.id).copied().unwrap_or(0);
        if n > max_shipped {
            max_shipped = n;
            max_shipped_name = entry.name;
        }
        if !counts_for_poly {
            continue;
        }
        if n >= POLYCULTURE_QUOTA {
            completed += 1;
        } else {
            needed.push((entry.name, POLYCULTURE_QUOTA - n));
        }
    }
    needed.sort_by(|a, b| a.0.cmp(b.0));

    let mono_achieved = max_shipped >= MONOCULTURE_TARGET;
    let monoculture = Progress::with_need(
        "Monoculture",
        "ship 300 of one crop",
        (!mono_achieved).then(|| Need::MoreOf {
            amount: MONOCULTURE_TARGET - max_shipped,
            subject: max_shipped_name.to_string(),
        }),
    );
    let total = poly.len();
    let polyculture = Progress::with_need(
        "Polyculture",
        "ship 15 of each crop",
        (completed < total).then(|| Need::more((total - completed) as u64, Unit::Crops)),
    );

    CropShipping {
        max_shipped,
        max_shipped_name,
        completed,
        total,
        monoculture,
        polyculture,
        needed,
    }
}

pub fn section(doc: &SaveDocument) -> Section {
    let crops = evaluate(&doc.player.basic_shipped, POLYCULTURE_CROPS, MONOCULTURE_EXTRAS);
    let farmer = &doc.player.name;

    let mut section = Section::new(SectionId::CropShipping);
    section.summary.push(if crops.max_shipped > 0 {
        format!(
            "{} has shipped {} the most ({}).",
            farmer, crops.max_shipped_name, crops.max_shipped
        )
    } else {
        format!("{} has not shipped any crops yet.", farmer)
    });
    section.summary.push(format!(
        "{} has shipped 15 or more of each of {} different crop(s); there are {} total crops.",
        farmer, crops.completed, crops.total
    ));
    section.entries.push(Entry::Achievement(crops.monoculture));
    section.entries.push(Entry::Achievement(crops.polyculture));
    if !crops.needed.is_empty() {
        let items = crops
            .needed
            .iter()
            .map(|(name, n)| OutstandingItem::needing(*name, Need::more(*n, Unit::Count)))
            .collect();
        section
            .outstanding
            .push(OutstandingList::sorted("Left to ship", items));
    }
    section
}
