//! Grandpa's evaluation: an additive score over nine categories, mapped to
//! one to four candles.
//!
//! Every scoring condition is a [`PointAward`]; the score is the sum of the
//! points of the awards that are met. Graduated categories (earnings, skill
//! levels, friendships) list one award per tier with `cumulative` set on the
//! upper tiers.

use crate::data::community::{COMMUNITY_CENTER_CEREMONY, ROOMS};
use crate::save::SaveDocument;
use crate::shared::*;

use super::community::CommunityProgress;

pub const MAX_POINTS: u32 = 21;
pub const MAX_CANDLES: u32 = 4;
pub const FOUR_CANDLE_POINTS: u32 = 12;

/// Lifetime earnings tiers: (threshold, points, label).
const EARNINGS_TIERS: [(u64, u32, &str); 6] = [
    (50_000, 1, "50,000g"),
    (100_000, 1, "100,000g"),
    (200_000, 1, "200,000g"),
    (300_000, 1, "300,000g"),
    (500_000, 1, "500,000g"),
    (1_000_000, 2, "1,000,000g"),
];

/// Achievement ids that score a point each.
pub const SCORED_ACHIEVEMENTS: [(u32, &str); 3] = [
    (5, "A Complete Collection"),
    (26, "Master Angler"),
    (34, "Full Shipment"),
];

/// Friendship points for "~8 hearts".
pub const GOOD_FRIEND_POINTS: u64 = 1_975;
pub const PET_FRIENDSHIP: u64 = 999;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrandpaEvaluation {
    pub points: u32,
    pub candles: u32,
    pub awards: Vec<PointAward>,
    /// One line per category, describing where the farmer stands.
    pub notes: Vec<String>,
}

pub fn candles_for(points: u32) -> u32 {
    match points {
        0..=3 => 1,
        4..=7 => 2,
        8..=11 => 3,
        _ => MAX_CANDLES,
    }
}

fn award(points: u32, cumulative: bool, description: String, need: Option<Need>) -> PointAward {
    PointAward {
        points,
        cumulative,
        description,
        achieved: need.is_none(),
        need,
    }
}

fn flag_award(points: u32, description: String, achieved: bool, need: Option<Need>) -> PointAward {
    PointAward {
        points,
        cumulative: false,
        description,
        achieved,
        need: if achieved { None } else { need },
    }
}

pub fn evaluate(doc: &SaveDocument) -> GrandpaEvaluation {
    let farmer = &doc.player.name;
    let mut awards = Vec::new();
    let mut notes = Vec::new();

    // ─── Earnings ───
    let money = doc.player.total_money_earned;
    notes.push(format!("{} has earned a total of {}g.", farmer, with_commas(money)));
    for (i, (threshold, points, label)) in EARNINGS_TIERS.iter().enumerate() {
        awards.push(award(
            *points,
            i > 0,
            format!("having at least {} earnings", label),
            (money < *threshold).then(|| Need::more(threshold - money, Unit::Gold)),
        ));
    }

    // ─── Achievements ───
    let owned = SCORED_ACHIEVEMENTS
        .iter()
        .filter(|(id, _)| doc.player.achievements.contains(id))
        .count();
    notes.push(format!(
        "{} has earned {} of the {} relevant achievements.",
        farmer,
        owned,
        SCORED_ACHIEVEMENTS.len()
    ));
    for (id, name) in SCORED_ACHIEVEMENTS {
        awards.push(flag_award(
            1,
            format!("having \"{}\" Achievement", name),
            doc.player.achievements.contains(&id),
            None,
        ));
    }

    // ─── Community Center ───
    // Only the Community Center re-opening scores the bonus; the Joja
    // warehouse ceremony does not.
    let community = CommunityProgress::from_save(doc);
    let reopening = doc.has_seen_event(COMMUNITY_CENTER_CEREMONY);
    let every_cc_mail = ROOMS.iter().all(|room| doc.has_mail(room.mail_flag));
    let cc_complete = reopening || community.all_rooms_done() || every_cc_mail;
    notes.push(if cc_complete {
        format!(
            "{} has completed the Community Center restoration {}.",
            farmer,
            if reopening {
                "and attended the re-opening ceremony"
            } else {
                "but has not yet attended the re-opening ceremony"
            }
        )
    } else {
        format!("{} has not completed the Community Center restoration.", farmer)
    });
    awards.push(flag_award(1, "completing Community Center".into(), cc_complete, None));
    awards.push(flag_award(
        2,
        "attending the Community Center re-opening".into(),
        reopening,
        None,
    ));

    // ─── Skills ───
    let levels = doc.total_skill_levels();
    notes.push(format!("{} has {} total skill levels.", farmer, levels));
    for (i, target) in [30_u64, 50].into_iter().enumerate() {
        awards.push(award(
            1,
            i > 0,
            format!("having {} total skill levels", target),
            (levels < target).then(|| Need::more(target - levels, Unit::Levels)),
        ));
    }

    // ─── Friendship ───
    let good_friends = doc
        .player
        .friendships
        .values()
        .filter(|points| **points >= GOOD_FRIEND_POINTS)
        .count() as u64;
    notes.push(format!(
        "{} has {} relationship(s) of 1975+ friendship points (~8 hearts).",
        farmer, good_friends
    ));
    for (i, target) in [5_u64, 10].into_iter().enumerate() {
        awards.push(award(
            1,
            i > 0,
            format!("having ~8 hearts with {} people", target),
            (good_friends < target).then(|| Need::more(target - good_friends, Unit::People)),
        ));
    }

    // ─── Pet ───
    // With more than one pet, the best friend counts.
    let pet_love = doc.pets().map(|p| p.friendship_toward_farmer).max();
    let pet_need = match pet_love {
        None => {
            notes.push(format!("{} does not have a pet.", farmer));
            Some(Need::AllOf(vec![
                Need::step("a pet"),
                Need::more(PET_FRIENDSHIP, Unit::FriendshipPoints),
            ]))
        }
        Some(love) => {
            notes.push(format!("{} has a pet with {} friendship points.", farmer, love));
            (love < PET_FRIENDSHIP).then(|| Need::more(PET_FRIENDSHIP - love, Unit::FriendshipPoints))
        }
    };
    awards.push(award(
        1,
        false,
        "having a pet with at least 999 friendship points".into(),
        pet_need,
    ));

    // ─── Marriage & house ───
    let married = doc.is_married();
    let upgrades = doc.player.house_upgrade_level;
    notes.push(format!(
        "{} {} married and has upgraded the farmhouse {} time(s).",
        farmer,
        if married { "is" } else { "is not" },
        upgrades
    ));
    let mut home_need = Vec::new();
    if !married {
        home_need.push(Need::step("a spouse"));
    }
    if upgrades < 2 {
        home_need.push(Need::more(2 - upgrades, Unit::Upgrades));
    }
    awards.push(award(
        1,
        false,
        "being married with at least 2 house upgrades".into(),
        (!home_need.is_empty()).then_some(Need::AllOf(home_need)),
    ));

    // ─── Keys ───
    let rusty = doc.player.has_rusty_key;
    let skull = doc.player.has_skull_key;
    notes.push(match (rusty, skull) {
        (true, true) => format!("{} has acquired the Rusty Key and Skull Key.", farmer),
        (true, false) => format!("{} has acquired the Rusty Key.", farmer),
        (false, true) => format!("{} has acquired the Skull Key.", farmer),
        (false, false) => format!(
            "{} has not acquired either the Rusty Key or Skull Key.",
            farmer
        ),
    });
    awards.push(flag_award(
        1,
        "having the Rusty Key".into(),
        rusty,
        Some(Need::step("acquired after 60 museum donations")),
    ));
    awards.push(flag_award(
        1,
        "having the Skull Key".into(),
        skull,
        Some(Need::step("acquired on level 120 of the mines")),
    ));

    let points = awards
        .iter()
        .filter(|a| a.achieved)
        .map(|a| a.points)
        .sum();

    GrandpaEvaluation {
        points,
        candles: candles_for(points),
        awards,
        notes,
    }
}

pub fn four_candles(points: u32) -> Progress {
    Progress::threshold(
        "Four candle evaluation",
        "",
        u64::from(points),
        u64::from(FOUR_CANDLE_POINTS),
        Unit::Points,
    )
}

pub fn section(doc: &SaveDocument) -> Section {
    let eval = evaluate(doc);
    let farmer = &doc.player.name;

    let mut section = Section::new(SectionId::GrandpaEvaluation);
    section.summary.push(format!(
        "{} has earned a total of {} point(s); the maximum possible is {} points.",
        farmer, eval.points, MAX_POINTS
    ));
    section.summary.push(format!(
        "The next evaluation will light {} candle(s).",
        eval.candles
    ));
    section.summary.extend(eval.notes);
    section.entries.push(Entry::Milestone(four_candles(eval.points)));
    section
        .entries
        .extend(eval.awards.into_iter().map(Entry::Points));
    section
}
