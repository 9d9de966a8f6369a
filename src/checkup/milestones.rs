//! Single-threshold sections: money, skills, quests, social, family and
//! stardrops. Each compares one or two numbers from the save against fixed
//! targets.

use crate::data::stardrops::STARDROPS;
use crate::save::{SaveDocument, SKILL_NAMES};
use crate::shared::*;

/// Experience needed for level 10 in a skill.
pub const MAX_SKILL_XP: u64 = 15_000;

/// Friendship points for 5 and 10 hearts.
pub const FIVE_HEARTS: u64 = 1_250;
pub const TEN_HEARTS: u64 = 2_500;

pub const MAX_HOUSE_UPGRADES: u64 = 3;

// ─── Money ──────────────────────────────────────────────────────────────

const MONEY_GOALS: [(u64, &str, &str); 5] = [
    (15_000, "Greenhorn", "earn 15,000g"),
    (50_000, "Cowpoke", "earn 50,000g"),
    (250_000, "Homesteader", "earn 250,000g"),
    (1_000_000, "Millionaire", "earn 1,000,000g"),
    (10_000_000, "Legend", "earn 10,000,000g"),
];

pub fn money(doc: &SaveDocument) -> Section {
    let earned = doc.player.total_money_earned;
    let mut section = Section::new(SectionId::Money);
    section.summary.push(format!(
        "{} has earned a total of {}g.",
        doc.player.name,
        with_commas(earned)
    ));
    for (target, name, description) in MONEY_GOALS {
        section.entries.push(Entry::Achievement(Progress::threshold(
            name,
            description,
            earned,
            target,
            Unit::Gold,
        )));
    }
    section
}

// ─── Skills ─────────────────────────────────────────────────────────────

pub fn skills(doc: &SaveDocument) -> Section {
    let xp = doc.skill_experience();
    let mastered = xp.iter().filter(|x| **x >= MAX_SKILL_XP).count() as u64;

    let mut section = Section::new(SectionId::Skills);
    section.summary.push(format!(
        "{} has reached level 10 in {} skill(s).",
        doc.player.name, mastered
    ));
    section.entries.push(Entry::Achievement(Progress::threshold(
        "Singular Talent",
        "level 10 in a skill",
        mastered,
        1,
        Unit::Count,
    )));
    section.entries.push(Entry::Achievement(Progress::threshold(
        "Master of the Five Ways",
        "level 10 in every skill",
        mastered,
        SKILL_NAMES.len() as u64,
        Unit::Count,
    )));

    let left: Vec<_> = SKILL_NAMES
        .iter()
        .zip(xp)
        .filter(|(_, x)| *x < MAX_SKILL_XP)
        .map(|(name, x)| OutstandingItem::needing(*name, Need::more(MAX_SKILL_XP - x, Unit::Experience)))
        .collect();
    if !left.is_empty() {
        section.outstanding.push(OutstandingList::sorted("Skills left", left));
    }
    section
}

// ─── Quests ─────────────────────────────────────────────────────────────

pub fn quests(doc: &SaveDocument) -> Section {
    let done = doc.stats.quests_completed;
    let mut section = Section::new(SectionId::Quests);
    section.summary.push(format!(
        "{} has completed {} \"Help Wanted\" quest(s).",
        doc.player.name, done
    ));
    section.entries.push(Entry::Achievement(Progress::threshold(
        "Gofer",
        "complete 10 quests",
        done,
        10,
        Unit::Count,
    )));
    section.entries.push(Entry::Achievement(Progress::threshold(
        "A Big Help",
        "complete 40 quests",
        done,
        40,
        Unit::Count,
    )));
    section
}

// ─── Social ─────────────────────────────────────────────────────────────

const FIVE_HEART_GOALS: [(u64, &str, &str); 4] = [
    (1, "A New Friend", "5 hearts with 1 person"),
    (4, "Cliques", "5 hearts with 4 people"),
    (10, "Networking", "5 hearts with 10 people"),
    (20, "Popular", "5 hearts with 20 people"),
];

const TEN_HEART_GOALS: [(u64, &str, &str); 2] = [
    (1, "Best Friends", "10 hearts with 1 person"),
    (8, "The Beloved Farmer", "10 hearts with 8 people"),
];

fn friends_at(doc: &SaveDocument, points: u64) -> u64 {
    doc.player
        .friendships
        .values()
        .filter(|p| **p >= points)
        .count() as u64
}

pub fn social(doc: &SaveDocument) -> Section {
    let five = friends_at(doc, FIVE_HEARTS);
    let ten = friends_at(doc, TEN_HEARTS);

    let mut section = Section::new(SectionId::Social);
    section.summary.push(format!(
        "{} has {} relationship(s) of 5+ hearts.",
        doc.player.name, five
    ));
    section.summary.push(format!(
        "{} has {} relationship(s) of 10+ hearts.",
        doc.player.name, ten
    ));
    for (target, name, description) in FIVE_HEART_GOALS {
        section.entries.push(Entry::Achievement(Progress::threshold(
            name,
            description,
            five,
            target,
            Unit::People,
        )));
    }
    for (target, name, description) in TEN_HEART_GOALS {
        section.entries.push(Entry::Achievement(Progress::threshold(
            name,
            description,
            ten,
            target,
            Unit::People,
        )));
    }
    section
}

// ─── Family ─────────────────────────────────────────────────────────────

pub fn family(doc: &SaveDocument) -> Section {
    let spouse = doc.spouse_name();
    let children: Vec<&str> = doc.children().map(|c| c.name.as_str()).collect();
    let upgrades = doc.player.house_upgrade_level;

    let mut section = Section::new(SectionId::Family);
    section.summary.push(match (spouse, doc.countdown_to_wedding) {
        (None, _) => "Spouse: (None)".to_string(),
        (Some(name), 0) => format!("Spouse: {}", name),
        (Some(name), days) => format!("Spouse: {} (wedding in {} day(s))", name, days),
    });
    section.summary.push(if children.is_empty() {
        "Children: (None)".to_string()
    } else {
        format!("Children: {}", children.join(", "))
    });
    section.summary.push(format!(
        "Farmhouse has been upgraded {} time(s); {} upgrades are possible.",
        upgrades, MAX_HOUSE_UPGRADES
    ));

    let mut needs = Vec::new();
    if spouse.is_none() {
        needs.push(Need::step("spouse"));
    }
    if children.len() < 2 {
        needs.push(Need::more(2 - children.len() as u64, Unit::Children));
    }
    section.entries.push(Entry::Achievement(Progress::with_need(
        "Full House",
        "Married + 2 kids",
        (!needs.is_empty()).then_some(Need::AllOf(needs)),
    )));
    section.entries.push(Entry::Achievement(Progress::threshold(
        "Moving Up",
        "1 upgrade",
        upgrades,
        1,
        Unit::Count,
    )));
    section.entries.push(Entry::Achievement(Progress::threshold(
        "Living Large",
        "2 upgrades",
        upgrades,
        2,
        Unit::Count,
    )));
    section.entries.push(Entry::Milestone(Progress::threshold(
        "House fully upgraded",
        "",
        upgrades,
        MAX_HOUSE_UPGRADES,
        Unit::Count,
    )));
    section
}

// ─── Stardrops ──────────────────────────────────────────────────────────

pub fn stardrops(doc: &SaveDocument) -> Section {
    let missing: Vec<&str> = STARDROPS
        .iter()
        .filter(|drop| !doc.has_mail(drop.id))
        .map(|drop| drop.name)
        .collect();
    let received = (STARDROPS.len() - missing.len()) as u64;

    let mut section = Section::new(SectionId::Stardrops);
    section.summary.push(format!(
        "{} has received {} of the {} stardrops.",
        doc.player.name,
        received,
        STARDROPS.len()
    ));
    section.entries.push(Entry::Achievement(Progress::threshold(
        "Mystery Of The Stardrops",
        "find every stardrop",
        received,
        STARDROPS.len() as u64,
        Unit::Count,
    )));
    if !missing.is_empty() {
        let items = missing.into_iter().map(OutstandingItem::named).collect();
        section
            .outstanding
            .push(OutstandingList::sorted("Stardrops left", items));
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::{CharacterKind, CharacterRecord};

    fn doc() -> SaveDocument {
        let mut doc = SaveDocument::default();
        doc.player.name = "Ada".into();
        doc
    }

    #[test]
    fn test_money_goals() {
        let mut doc = doc();
        doc.player.total_money_earned = 60_000;
        let section = money(&doc);
        assert!(section.goal("Greenhorn").unwrap().achieved);
        assert!(section.goal("Cowpoke").unwrap().achieved);
        assert_eq!(
            section.goal("Homesteader").unwrap().need,
            Some(Need::more(190_000, Unit::Gold))
        );
        assert_eq!(section.summary[0], "Ada has earned a total of 60,000g.");
    }

    #[test]
    fn test_skills_ignore_luck_slot() {
        let mut doc = doc();
        doc.player.experience_points = vec![15_000, 20_000, 1_000, 0, 14_999, 99_999];
        let section = skills(&doc);
        assert!(section.goal("Singular Talent").unwrap().achieved);
        assert_eq!(
            section.goal("Master of the Five Ways").unwrap().need,
            Some(Need::more(3, Unit::Count))
        );
        let left = section.outstanding_list("Skills left").unwrap();
        let names: Vec<_> = left.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Combat", "Foraging", "Mining"]);
        assert_eq!(left.items[0].need, Some(Need::more(1, Unit::Experience)));
    }

    #[test]
    fn test_quests() {
        let mut doc = doc();
        doc.stats.quests_completed = 12;
        let section = quests(&doc);
        assert!(section.goal("Gofer").unwrap().achieved);
        assert_eq!(
            section.goal("A Big Help").unwrap().need,
            Some(Need::more(28, Unit::Count))
        );
    }

    #[test]
    fn test_social_heart_thresholds() {
        let mut doc = doc();
        doc.player.friendships.insert("Abigail".into(), 2_500);
        doc.player.friendships.insert("Sebastian".into(), 1_250);
        doc.player.friendships.insert("Sam".into(), 1_249);
        let section = social(&doc);
        assert!(section.goal("A New Friend").unwrap().achieved);
        assert!(section.goal("Best Friends").unwrap().achieved);
        assert_eq!(
            section.goal("Cliques").unwrap().need,
            Some(Need::more(2, Unit::People))
        );
        assert_eq!(
            section.goal("The Beloved Farmer").unwrap().need,
            Some(Need::more(7, Unit::People))
        );
    }

    #[test]
    fn test_full_house_needs() {
        let mut doc = doc();
        let section = family(&doc);
        assert_eq!(
            section.goal("Full House").unwrap().need.as_ref().unwrap().to_string(),
            "spouse and 2 children"
        );

        doc.player.spouse = Some("Pennyengaged".into());
        doc.countdown_to_wedding = 2;
        doc.characters.push(CharacterRecord {
            kind: CharacterKind::Child,
            name: "Pip".into(),
            friendship_toward_farmer: 0,
        });
        let section = family(&doc);
        assert_eq!(section.summary[0], "Spouse: Penny (wedding in 2 day(s))");
        assert_eq!(section.summary[1], "Children: Pip");
        assert_eq!(
            section.goal("Full House").unwrap().need.as_ref().unwrap().to_string(),
            "1 child"
        );
    }

    #[test]
    fn test_house_upgrades() {
        let mut doc = doc();
        doc.player.house_upgrade_level = 2;
        let section = family(&doc);
        assert!(section.goal("Living Large").unwrap().achieved);
        assert_eq!(
            section.goal("House fully upgraded").unwrap().need,
            Some(Need::more(1, Unit::Count))
        );
    }

    #[test]
    fn test_stardrops_list_missing_hints() {
        let mut doc = doc();
        for drop in STARDROPS.iter().skip(1) {
            doc.player.mail_received.insert(drop.id.to_string());
        }
        let section = stardrops(&doc);
        let left = section.outstanding_list("Stardrops left").unwrap();
        assert_eq!(left.items.len(), 1);
        assert_eq!(left.items[0].name, STARDROPS[0].name);
        assert!(!section.goal("Mystery Of The Stardrops").unwrap().achieved);
    }
}
