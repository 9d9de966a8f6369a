//! Property tests over the evaluators: partition identity, monotonicity,
//! idempotence and the candle table.

use proptest::prelude::*;
use std::collections::BTreeMap;
use stardew_checkup::checkup::aggregation;
use stardew_checkup::checkup::collections::COOKING_TIERS;
use stardew_checkup::checkup::completion::{self, Ownership};
use stardew_checkup::checkup::crops;
use stardew_checkup::checkup::grandpa::{self, candles_for, MAX_CANDLES, MAX_POINTS};
use stardew_checkup::data::cooking::COOKING_RECIPES;
use stardew_checkup::data::fish::FISH;
use stardew_checkup::data::monsters::{ERADICATION_GOALS, MONSTER_CATEGORIES};
use stardew_checkup::data::shipping::{MONOCULTURE_EXTRAS, POLYCULTURE_CROPS};
use stardew_checkup::data::ItemId;
use stardew_checkup::report;
use stardew_checkup::save::SaveDocument;
use stardew_checkup::settings::CheckupSettings;
use stardew_checkup::shared::*;

/// Mostly ids from `ids`, with some ids no catalog uses.
fn owned_map(ids: Vec<ItemId>) -> impl Strategy<Value = BTreeMap<ItemId, u64>> {
    let id = prop_oneof![
        4 => prop::sample::select(ids),
        1 => 50_000_u32..60_000,
    ];
    prop::collection::btree_map(id, 0_u64..4, 0..80)
}

fn fish_ids() -> Vec<ItemId> {
    FISH.iter().map(|f| f.id).collect()
}

fn cooking_ids() -> Vec<ItemId> {
    COOKING_RECIPES.iter().map(|r| r.id).collect()
}

fn monster_names() -> Vec<String> {
    MONSTER_CATEGORIES
        .iter()
        .map(|(name, _)| name.to_string())
        .chain(["Haunted Skull".to_string(), "Pepper Rex".to_string()])
        .collect()
}

fn achieved_names(entries: &[Entry]) -> Vec<String> {
    entries
        .iter()
        .filter_map(Entry::progress)
        .filter(|p| p.achieved)
        .map(|p| p.name.clone())
        .collect()
}

/// A save with the fields grandpa scores on filled at random.
fn scored_save() -> impl Strategy<Value = SaveDocument> {
    (
        0_u64..2_000_000,
        prop::collection::vec(0_u64..=10, 5),
        prop::collection::btree_set(prop::sample::select(vec![5_u32, 26, 34, 99]), 0..4),
        prop::collection::vec(0_u64..2_600, 0..15),
        any::<bool>(),
        any::<bool>(),
        0_u64..=3,
        prop::option::of(Just("Leah".to_string())),
    )
        .prop_map(
            |(money, levels, achievements, hearts, rusty, skull, upgrades, spouse)| {
                let mut doc = SaveDocument::default();
                doc.player.name = "Ada".into();
                doc.player.total_money_earned = money;
                doc.player.farming_level = levels[0];
                doc.player.mining_level = levels[1];
                doc.player.combat_level = levels[2];
                doc.player.foraging_level = levels[3];
                doc.player.fishing_level = levels[4];
                doc.player.achievements = achievements;
                for (i, points) in hearts.into_iter().enumerate() {
                    doc.player.friendships.insert(format!("Villager {}", i), points);
                }
                doc.player.has_rusty_key = rusty;
                doc.player.has_skull_key = skull;
                doc.player.house_upgrade_level = upgrades;
                doc.player.spouse = spouse;
                doc
            },
        )
}

proptest! {
    #[test]
    fn property_completion_partitions_catalog(
        known in owned_map(cooking_ids()),
        done in owned_map(cooking_ids()),
    ) {
        let c = completion::evaluate(
            COOKING_RECIPES,
            Ownership::Split { known: &known, done: &done },
            COOKING_TIERS,
        );
        let left = c
            .outstanding
            .as_ref()
            .map_or(0, |o| o.known.len() + o.unknown.as_ref().map_or(0, Vec::len));
        prop_assert_eq!(c.completed_count + left, c.total);
        prop_assert_eq!(c.total, COOKING_RECIPES.len());
        prop_assert!(c.known_count <= c.total);
        prop_assert_eq!(c.outstanding.is_none(), c.is_complete());
    }

    #[test]
    fn property_more_ownership_never_loses_progress(
        base in owned_map(fish_ids()),
        extra in owned_map(fish_ids()),
    ) {
        let mut grown = base.clone();
        for (id, n) in extra {
            *grown.entry(id).or_insert(0) += n;
        }
        let before = completion::evaluate(FISH, Ownership::Single(&base), COOKING_TIERS);
        let after = completion::evaluate(FISH, Ownership::Single(&grown), COOKING_TIERS);

        prop_assert!(after.completed_count >= before.completed_count);
        let kept = achieved_names(&after.tiers);
        for name in achieved_names(&before.tiers) {
            prop_assert!(kept.contains(&name));
        }
    }

    #[test]
    fn property_aggregation_partitions_goals(
        kills in prop::collection::btree_map(prop::sample::select(monster_names()), 0_u64..400, 0..20),
    ) {
        let a = aggregation::evaluate(&kills, MONSTER_CATEGORIES, ERADICATION_GOALS);
        prop_assert_eq!(a.completed + a.needed.len(), a.total);
        prop_assert_eq!(a.per_category.len(), ERADICATION_GOALS.len());
        for need in &a.needed {
            prop_assert!(need.remaining > 0);
        }
    }

    #[test]
    fn property_crop_partition_and_best_crop(
        shipped in owned_map(
            POLYCULTURE_CROPS.iter().chain(MONOCULTURE_EXTRAS).map(|c| c.id).collect()
        ),
    ) {
        let shipped: BTreeMap<ItemId, u64> = shipped.into_iter().map(|(id, n)| (id, n * 110)).collect();
        let c = crops::evaluate(&shipped, POLYCULTURE_CROPS, MONOCULTURE_EXTRAS);
        prop_assert_eq!(c.completed + c.needed.len(), c.total);
        for crop in POLYCULTURE_CROPS.iter().chain(MONOCULTURE_EXTRAS) {
            prop_assert!(shipped.get(&crop.id).copied().unwrap_or(0) <= c.max_shipped);
        }
        prop_assert_eq!(c.monoculture.achieved, c.max_shipped >= crops::MONOCULTURE_TARGET);
    }

    #[test]
    fn property_grandpa_score_is_bounded_and_consistent(doc in scored_save()) {
        let eval = grandpa::evaluate(&doc);
        prop_assert!(eval.points <= MAX_POINTS);
        prop_assert_eq!(eval.candles, candles_for(eval.points));
        let summed: u32 = eval.awards.iter().filter(|a| a.achieved).map(|a| a.points).sum();
        prop_assert_eq!(summed, eval.points);
        for award in eval.awards.iter().filter(|a| a.achieved) {
            prop_assert!(award.need.is_none());
        }
    }

    #[test]
    fn property_assembly_is_idempotent(doc in scored_save()) {
        let settings = CheckupSettings::default();
        prop_assert_eq!(report::assemble(&doc, &settings), report::assemble(&doc, &settings));
    }

    #[test]
    fn property_candles_step_at_four_point_boundaries(points in 0_u32..=MAX_POINTS) {
        let candles = candles_for(points);
        prop_assert!((1..=MAX_CANDLES).contains(&candles));
        prop_assert!(candles_for(points + 1) >= candles);
        prop_assert_eq!(candles, (points / 4 + 1).min(MAX_CANDLES));
    }
}
