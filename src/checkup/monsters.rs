//! Monster hunting: mine depth and the Adventurer's Guild eradication goals.

use crate::data::monsters::{ERADICATION_GOALS, MINE_BOTTOM, MONSTER_CATEGORIES};
use crate::save::SaveDocument;
use crate::shared::*;

use super::aggregation;

pub fn section(doc: &SaveDocument) -> Section {
    let farmer = &doc.player.name;
    let depth = doc.player.deepest_mine_level;
    let mut section = Section::new(SectionId::Monsters);

    section.summary.push(if depth == 0 {
        format!("{} has not yet explored the mines.", farmer)
    } else if depth > MINE_BOTTOM {
        format!(
            "{} has reached level {} of the mines and level {} of the Skull Cavern.",
            farmer,
            MINE_BOTTOM,
            depth - MINE_BOTTOM
        )
    } else {
        format!(
            "{} has reached level {} of the mines but has not yet explored the Skull Cavern.",
            farmer, depth
        )
    });
    section.entries.push(Entry::Achievement(Progress::threshold(
        "The Bottom",
        "reach mine level 120",
        depth,
        MINE_BOTTOM,
        Unit::Count,
    )));

    let kills = aggregation::evaluate(
        &doc.stats.specific_monsters_killed,
        MONSTER_CATEGORIES,
        ERADICATION_GOALS,
    );
    section.summary.push(format!(
        "{} has completed {} of the {} Monster Eradication goals.",
        farmer, kills.completed, kills.total
    ));
    section.entries.push(Entry::Achievement(Progress::threshold(
        "Protector of the Valley",
        "all monster goals",
        kills.completed as u64,
        kills.total as u64,
        Unit::Count,
    )));

    if !kills.needed.is_empty() {
        let items = kills
            .needed
            .iter()
            .map(|need| OutstandingItem {
                name: need.category.to_string(),
                need: Some(Need::more(need.remaining, Unit::Kills)),
                children: need
                    .representatives
                    .iter()
                    .map(|m| OutstandingItem::named(*m))
                    .collect(),
            })
            .collect();
        section
            .outstanding
            .push(OutstandingList::sorted("Goals left", items));
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
    fn test_mine_depth_splits_skull_cavern() {
        let mut doc = doc();
        doc.player.deepest_mine_level = 145;
        let section = section(&doc);
        assert_eq!(
            section.summary[0],
            "Ada has reached level 120 of the mines and level 25 of the Skull Cavern."
        );
        assert!(section.goal("The Bottom").unwrap().achieved);
    }

    #[test]
    fn test_unexplored_mines() {
        let section = section(&doc());
        assert_eq!(section.summary[0], "Ada has not yet explored the mines.");
        assert_eq!(
            section.goal("The Bottom").unwrap().need,
            Some(Need::more(120, Unit::Count))
        );
    }

    #[test]
    fn test_unreleased_monsters_count_toward_goals() {
        let mut doc = doc();
        let kills = &mut doc.stats.specific_monsters_killed;
        kills.insert("Skeleton".into(), 40);
        kills.insert("Skeleton Mage".into(), 10);
        kills.insert("Fly".into(), 125);
        let section = section(&doc);

        let left = section.outstanding_list("Goals left").unwrap();
        assert!(left.items.iter().all(|i| i.name != "Skeletons"));
        assert!(left.items.iter().all(|i| i.name != "Cave Insects"));
        assert_eq!(left.items.len(), ERADICATION_GOALS.len() - 2);
        assert_eq!(
            section.goal("Protector of the Valley").unwrap().need,
            Some(Need::more(5, Unit::Count))
        );
    }

    #[test]
    fn test_goal_lists_representatives_not_raw_names() {
        let section = section(&doc());
        let left = section.outstanding_list("Goals left").unwrap();
        let void = left.items.iter().find(|i| i.name == "Void Spirits").unwrap();
        let names: Vec<_> = void.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Shadow Brute", "Shadow Shaman"]);
        assert_eq!(void.need, Some(Need::more(150, Unit::Kills)));
    }
}
