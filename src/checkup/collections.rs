//! Collection sections: cooking, crafting, fishing, basic shipping and the
//! museum. Each one extracts an ownership record from the save and hands
//! it to the generic completion evaluator.

use std::collections::BTreeMap;

use crate::data::cooking::COOKING_RECIPES;
use crate::data::crafting::CRAFTING_RECIPES;
use crate::data::fish::{CLAM, FISH};
use crate::data::museum::{ARTIFACTS, MINERALS};
use crate::data::names::{COOKING_NAME_FIXES, CRAFTING_NAME_FIXES};
use crate::data::shipping::BASIC_SHIPPABLES;
use crate::data::{id_of_name, CatalogEntry, ItemId};
use crate::save::SaveDocument;
use crate::shared::*;

use super::completion::{self, Ownership, Threshold, Tier};

pub const COOKING_TIERS: &[Tier] = &[
    Tier::achievement(Threshold::Count(10), "Cook", "cook 10 different recipes"),
    Tier::achievement(Threshold::Count(25), "Sous Chef", "cook 25 different recipes"),
    Tier::achievement(Threshold::All, "Gourmet Chef", "cook every recipe"),
];

pub const CRAFTING_TIERS: &[Tier] = &[
    Tier::achievement(Threshold::Count(15), "D.I.Y.", "craft 15 different items"),
    Tier::achievement(Threshold::Count(30), "Artisan", "craft 30 different items"),
    Tier::achievement(Threshold::All, "Craft Master", "craft every item"),
];

pub const FISHING_TIERS: &[Tier] = &[
    Tier::achievement(Threshold::Count(10), "Fisherman", "catch 10 different fish"),
    Tier::achievement(Threshold::Count(24), "Ol' Mariner", "catch 24 different fish"),
    Tier::achievement(Threshold::All, "Master Angler", "catch every fish"),
];

pub const MOTHER_CATCH_TOTAL: u64 = 100;

pub const SHIPPING_TIERS: &[Tier] = &[Tier::achievement(
    Threshold::All,
    "Full Shipment",
    "ship every item",
)];

pub const MUSEUM_TIERS: &[Tier] = &[
    Tier::achievement(Threshold::Count(40), "Treasure Trove", "donate 40 items"),
    Tier::achievement(Threshold::All, "A Complete Collection", "donate every item"),
];

// ─── Cooking ────────────────────────────────────────────────────────────

/// Known cooking recipes keyed by dish id. The save keys them by name.
fn known_cooking(doc: &SaveDocument) -> BTreeMap<ItemId, u64> {
    doc.player
        .cooking_recipes
        .iter()
        .filter_map(|(name, n)| {
            id_of_name(COOKING_RECIPES, COOKING_NAME_FIXES.canonical(name)).map(|id| (id, *n))
        })
        .collect()
}

pub fn cooking(doc: &SaveDocument) -> Section {
    let known = known_cooking(doc);
    let c = completion::evaluate(
        COOKING_RECIPES,
        Ownership::Split {
            known: &known,
            done: &doc.player.recipes_cooked,
        },
        COOKING_TIERS,
    );

    let mut section = Section::new(SectionId::Cooking);
    section.summary.push(format!(
        "{} knows {} recipe(s) and has cooked {} of them; there are {} total recipes.",
        doc.player.name, c.known_count, c.completed_count, c.total
    ));
    section.entries = c.tiers;
    if let Some(out) = c.outstanding {
        section.outstanding = out.into_lists("Known Recipes", "Unknown Recipes");
    }
    section
}

// ─── Crafting ───────────────────────────────────────────────────────────

fn known_crafting(doc: &SaveDocument) -> BTreeMap<&'static str, u64> {
    doc.player
        .crafting_recipes
        .iter()
        .filter_map(|(name, n)| {
            id_of_name(CRAFTING_RECIPES, CRAFTING_NAME_FIXES.canonical(name)).map(|id| (id, *n))
        })
        .collect()
}

pub fn crafting(doc: &SaveDocument) -> Section {
    // One record carries both signals: present = known, count > 0 = crafted.
    let known = known_crafting(doc);
    let c = completion::evaluate(
        CRAFTING_RECIPES,
        Ownership::Split {
            known: &known,
            done: &known,
        },
        CRAFTING_TIERS,
    );

    let mut section = Section::new(SectionId::Crafting);
    section.summary.push(format!(
        "{} knows {} recipe(s) and has crafted {} of them; there are {} total recipes.",
        doc.player.name, c.known_count, c.completed_count, c.total
    ));
    section.entries = c.tiers;
    if let Some(out) = c.outstanding {
        section.outstanding = out.into_lists("Known Recipes", "Unknown Recipes");
    }
    section
}

// ─── Fishing ────────────────────────────────────────────────────────────

/// Total fish caught across every kind, Clam excluded.
pub fn total_fish_caught(doc: &SaveDocument) -> u64 {
    doc.player
        .fish_caught
        .iter()
        .filter(|(id, _)| **id != CLAM)
        .map(|(_, n)| *n)
        .fold(0, u64::saturating_add)
}

pub fn fishing(doc: &SaveDocument) -> Section {
    let c = completion::evaluate(FISH, Ownership::Single(&doc.player.fish_caught), FISHING_TIERS);
    let caught = total_fish_caught(doc);

    let mut section = Section::new(SectionId::Fishing);
    section.summary.push(format!(
        "{} has caught {} total fish of {} different type(s); there are {} total types.",
        doc.player.name, caught, c.completed_count, c.total
    ));
    section.entries.push(Entry::Achievement(Progress::threshold(
        "Mother Catch",
        "catch 100 fish",
        caught,
        MOTHER_CATCH_TOTAL,
        Unit::Count,
    )));
    section.entries.extend(c.tiers);
    if let Some(out) = c.outstanding {
        section.outstanding = out.into_lists("Left to catch", "");
    }
    section
}

// ─── Basic shipping ─────────────────────────────────────────────────────

pub fn basic_shipping(doc: &SaveDocument) -> Section {
    let c = completion::evaluate(
        BASIC_SHIPPABLES,
        Ownership::Single(&doc.player.basic_shipped),
        SHIPPING_TIERS,
    );

    let mut section = Section::new(SectionId::BasicShipping);
    section.summary.push(format!(
        "{} has shipped {} basic item(s); there are {} total items.",
        doc.player.name, c.completed_count, c.total
    ));
    section.entries = c.tiers;
    if let Some(out) = c.outstanding {
        section.outstanding = out.into_lists("Left to ship", "");
    }
    section
}

// ─── Museum ─────────────────────────────────────────────────────────────

fn museum_catalog() -> Vec<CatalogEntry<ItemId>> {
    ARTIFACTS.iter().chain(MINERALS).copied().collect()
}

fn donated_record(doc: &SaveDocument) -> BTreeMap<ItemId, u64> {
    doc.museum_pieces.iter().map(|id| (*id, 1)).collect()
}

/// Items in `catalog` missing a find and/or a donation.
fn museum_gaps(
    catalog: &[CatalogEntry<ItemId>],
    found: &BTreeMap<ItemId, u64>,
    donated: &BTreeMap<ItemId, u64>,
) -> Vec<OutstandingItem> {
    catalog
        .iter()
        .filter_map(|entry| {
            let is_found = found.get(&entry.id).copied().unwrap_or(0) > 0;
            let is_donated = donated.contains_key(&entry.id);
            let missing = match (is_found, is_donated) {
                (true, true) => return None,
                (false, false) => "not found or donated",
                (false, true) => "not found",
                (true, false) => "not donated",
            };
            Some(OutstandingItem::needing(entry.name, Need::step(missing)))
        })
        .collect()
}

pub fn museum(doc: &SaveDocument) -> Section {
    let donated = donated_record(doc);
    let all = museum_catalog();
    let donations = completion::evaluate(&all, Ownership::Single(&donated), MUSEUM_TIERS);

    let artifacts_found = completion::evaluate(
        ARTIFACTS,
        Ownership::Single(&doc.player.archaeology_found),
        &[Tier::milestone(Threshold::All, "All artifacts found")],
    );
    let minerals_found = completion::evaluate(
        MINERALS,
        Ownership::Single(&doc.player.minerals_found),
        &[Tier::milestone(Threshold::All, "All minerals found")],
    );
    let artifacts_donated = completion::evaluate(ARTIFACTS, Ownership::Single(&donated), &[]);
    let minerals_donated = completion::evaluate(MINERALS, Ownership::Single(&donated), &[]);

    let mut section = Section::new(SectionId::Museum);
    section.summary.push(format!(
        "{} has found {} artifact(s) and has donated {}; there are {} total artifacts.",
        doc.player.name,
        artifacts_found.completed_count,
        artifacts_donated.completed_count,
        artifacts_found.total
    ));
    section.summary.push(format!(
        "{} has found {} mineral(s) and has donated {}; there are {} total minerals.",
        doc.player.name,
        minerals_found.completed_count,
        minerals_donated.completed_count,
        minerals_found.total
    ));
    section.entries.extend(donations.tiers);
    section.entries.extend(artifacts_found.tiers);
    section.entries.extend(minerals_found.tiers);

    // A donated item is not always marked found, so both signals are checked.
    let artifact_gaps = museum_gaps(ARTIFACTS, &doc.player.archaeology_found, &donated);
    if !artifact_gaps.is_empty() {
        section
            .outstanding
            .push(OutstandingList::sorted("Artifacts", artifact_gaps));
    }
    let mineral_gaps = museum_gaps(MINERALS, &doc.player.minerals_found, &donated);
    if !mineral_gaps.is_empty() {
        section
            .outstanding
            .push(OutstandingList::sorted("Minerals", mineral_gaps));
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> SaveDocument {
        let mut doc = SaveDocument::default();
        doc.player.name = "Ada".into();
        doc
    }

    #[test]
    fn test_cooking_normalizes_known_names() {
        let mut doc = doc();
        doc.player.cooking_recipes.insert("Cookies".into(), 0);
        doc.player.cooking_recipes.insert("Fried Egg".into(), 0);
        doc.player.cooking_recipes.insert("Mystery Stew".into(), 0);
        doc.player.recipes_cooked.insert(194, 2); // Fried Egg
        let section = cooking(&doc);

        assert_eq!(
            section.summary[0],
            "Ada knows 2 recipe(s) and has cooked 1 of them; there are 71 total recipes."
        );
        let known = section.outstanding_list("Known Recipes").unwrap();
        assert_eq!(known.items.len(), 1);
        assert_eq!(known.items[0].name, "Cookie");
        let unknown = section.outstanding_list("Unknown Recipes").unwrap();
        assert_eq!(unknown.items.len(), 69);
        assert_eq!(
            section.goal("Cook").unwrap().need,
            Some(Need::more(9, Unit::Count))
        );
    }

    #[test]
    fn test_crafting_known_with_zero_count_is_not_crafted() {
        let mut doc = doc();
        doc.player.crafting_recipes.insert("Chest".into(), 3);
        doc.player.crafting_recipes.insert("Oil Of Garlic".into(), 0);
        let section = crafting(&doc);

        let known = section.outstanding_list("Known Recipes").unwrap();
        assert_eq!(known.items[0].name, "Oil of Garlic");
        assert_eq!(
            section.goal("D.I.Y.").unwrap().need,
            Some(Need::more(14, Unit::Count))
        );
    }

    #[test]
    fn test_fishing_excludes_clam_from_total() {
        let mut doc = doc();
        doc.player.fish_caught.insert(CLAM, 500);
        doc.player.fish_caught.insert(128, 60); // Pufferfish
        doc.player.fish_caught.insert(129, 30); // Anchovy
        let section = fishing(&doc);

        let mother = section.goal("Mother Catch").unwrap();
        assert!(!mother.achieved);
        assert_eq!(mother.need, Some(Need::more(10, Unit::Count)));
        let list = section.outstanding_list("Left to catch").unwrap();
        assert_eq!(list.items.len(), FISH.len() - 2);
    }

    #[test]
    fn test_huge_fish_counts_saturate() {
        let doc = SaveDocument::from_json_str(
            r#"{"player":{"fishCaught":{"128":"1e19","129":"1e19"}}}"#,
        )
        .unwrap();
        assert_eq!(total_fish_caught(&doc), u64::MAX);
        let section = fishing(&doc);
        assert!(section.goal("Mother Catch").unwrap().achieved);
    }

    #[test]
    fn test_basic_shipping_full_shipment() {
        let mut doc = doc();
        for entry in BASIC_SHIPPABLES {
            doc.player.basic_shipped.insert(entry.id, 1);
        }
        let section = basic_shipping(&doc);
        assert!(section.goal("Full Shipment").unwrap().achieved);
        assert!(section.outstanding.is_empty());
    }

    #[test]
    fn test_museum_treasure_trove_boundary() {
        let mut doc = doc();
        for entry in museum_catalog().iter().take(39) {
            doc.museum_pieces.insert(entry.id);
        }
        let section = museum(&doc);
        assert_eq!(
            section.goal("Treasure Trove").unwrap().need,
            Some(Need::more(1, Unit::Count))
        );

        let extra = museum_catalog()[39].id;
        doc.museum_pieces.insert(extra);
        let section = museum(&doc);
        assert!(section.goal("Treasure Trove").unwrap().achieved);
        let complete = section.goal("A Complete Collection").unwrap();
        assert_eq!(
            complete.need,
            Some(Need::more((ARTIFACTS.len() + MINERALS.len() - 40) as u64, Unit::Count))
        );
    }

    #[test]
    fn test_museum_gaps_describe_what_is_missing() {
        let mut doc = doc();
        let scroll = ARTIFACTS[0].id;
        doc.museum_pieces.insert(scroll);
        let section = museum(&doc);
        let artifacts = section.outstanding_list("Artifacts").unwrap();
        let item = artifacts
            .items
            .iter()
            .find(|i| i.name == ARTIFACTS[0].name)
            .unwrap();
        assert_eq!(item.need, Some(Need::step("not found")));
        assert_eq!(artifacts.items.len(), ARTIFACTS.len());
    }
}
