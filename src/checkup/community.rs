//! Community Center / Joja progress.
//!
//! The save never says which path a farmer is on; it only has room flags,
//! a membership mail flag, Joja project mail flags and a ceremony event.
//! [`CommunityProgress::from_save`] reads those once into a
//! [`CommunityState`], and both this section and Grandpa's evaluation work
//! from the result.

use crate::data::community::{
    BULLETIN_BOARD, COMMUNITY_CENTER_CEREMONY, JOJA_CEREMONY, JOJA_MEMBER_FLAG,
    JOJA_PROJECT_COUNT, ROOMS,
};
use crate::save::SaveDocument;
use crate::shared::*;

pub const ROOM_COUNT: u32 = ROOMS.len() as u32;

pub const LOCAL_LEGEND: &str = "Local Legend";
pub const JOJA_MEMBER_OF_THE_YEAR: &str = "Joja Co. Member Of The Year";

pub const HYBRID_WARNING: &str =
    "Some have reported that the Joja achievement will not trigger in a hybrid situation like this.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunityState {
    /// No rooms restored, not a Joja member.
    NeitherStarted,
    /// Some but not all rooms restored, not a Joja member.
    CommunityCenterInProgress,
    /// Every room restored without Joja.
    CommunityCenterDone { ceremony: bool },
    /// Joja member who never restored a room.
    JojaPure,
    /// Joja member after restoring at least one room.
    JojaHybrid,
}

impl CommunityState {
    pub fn is_joja(self) -> bool {
        matches!(self, CommunityState::JojaPure | CommunityState::JojaHybrid)
    }
}

/// Everything the Community Center section needs, derived once from the save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityProgress {
    pub state: CommunityState,
    /// Per room, restored through bundles.
    pub rooms_done: [bool; ROOMS.len()],
    pub rooms_complete: u32,
    /// Per room, replaced by a purchased Joja project.
    pub projects_done: [bool; ROOMS.len()],
    pub projects_purchased: u32,
    /// Projects still on the form: all five for a pure Joja save, fewer
    /// after restoring rooms first.
    pub projects_total: u32,
    /// Ceremony for the path the farmer is on.
    pub ceremony_seen: bool,
}

impl CommunityProgress {
    pub fn from_save(doc: &SaveDocument) -> Self {
        let areas = &doc.community_center.areas_complete;
        let mut rooms_done = [false; ROOMS.len()];
        let mut projects_done = [false; ROOMS.len()];
        for (i, room) in ROOMS.iter().enumerate() {
            rooms_done[i] = areas.get(i).copied().unwrap_or(false);
            projects_done[i] = room
                .joja
                .as_ref()
                .is_some_and(|project| doc.has_mail(project.mail_flag));
        }
        let rooms_complete = rooms_done.iter().filter(|d| **d).count() as u32;
        let projects_purchased = projects_done.iter().filter(|d| **d).count() as u32;
        let joja = doc.has_mail(JOJA_MEMBER_FLAG);

        let state = match (joja, rooms_complete) {
            (false, 0) => CommunityState::NeitherStarted,
            (false, n) if n < ROOM_COUNT => CommunityState::CommunityCenterInProgress,
            (false, _) => CommunityState::CommunityCenterDone {
                ceremony: doc.has_seen_event(COMMUNITY_CENTER_CEREMONY),
            },
            (true, 0) => CommunityState::JojaPure,
            (true, _) => CommunityState::JojaHybrid,
        };

        let projects_total = if state == CommunityState::JojaHybrid {
            // The Bulletin Board has no Joja project, so restoring it did
            // not take anything off the form.
            let bulletin = u32::from(rooms_done[BULLETIN_BOARD]);
            (JOJA_PROJECT_COUNT + bulletin).saturating_sub(rooms_complete)
        } else {
            JOJA_PROJECT_COUNT
        };

        let ceremony_event = if joja {
            JOJA_CEREMONY
        } else {
            COMMUNITY_CENTER_CEREMONY
        };

        Self {
            state,
            rooms_done,
            rooms_complete,
            projects_done,
            projects_purchased,
            projects_total,
            ceremony_seen: doc.has_seen_event(ceremony_event),
        }
    }

    /// Every room is taken care of, by bundles or by the Joja form.
    pub fn all_rooms_done(&self) -> bool {
        if self.state.is_joja() {
            self.projects_purchased >= self.projects_total
        } else {
            self.rooms_complete >= ROOM_COUNT
        }
    }
}

pub fn local_legend(progress: &CommunityProgress) -> Progress {
    const DESCRIPTION: &str = "restore the Pelican Town Community Center";
    if progress.state.is_joja() {
        return Progress::impossible(LOCAL_LEGEND, DESCRIPTION);
    }
    let need = if progress.rooms_complete < ROOM_COUNT {
        Some(Need::AllOf(vec![
            Need::more(u64::from(ROOM_COUNT - progress.rooms_complete), Unit::Rooms),
            Need::step("the ceremony"),
        ]))
    } else if !progress.ceremony_seen {
        Some(Need::step("to attend the ceremony"))
    } else {
        None
    };
    Progress::with_need(LOCAL_LEGEND, DESCRIPTION, need)
}

pub fn joja_member_of_the_year(progress: &CommunityProgress) -> Progress {
    const DESCRIPTION: &str = "become a Joja member and purchase all community development perks";
    match progress.state {
        CommunityState::CommunityCenterDone { .. } => {
            Progress::impossible(JOJA_MEMBER_OF_THE_YEAR, DESCRIPTION)
        }
        CommunityState::NeitherStarted | CommunityState::CommunityCenterInProgress => {
            Progress::with_need(
                JOJA_MEMBER_OF_THE_YEAR,
                DESCRIPTION,
                Some(Need::step(
                    "to become a Joja member and purchase all community development perks",
                )),
            )
        }
        CommunityState::JojaPure | CommunityState::JojaHybrid => {
            let need = if progress.projects_purchased < progress.projects_total {
                Some(Need::AllOf(vec![
                    Need::more(
                        u64::from(progress.projects_total - progress.projects_purchased),
                        Unit::Projects,
                    ),
                    Need::step("the ceremony"),
                ]))
            } else if !progress.ceremony_seen {
                Some(Need::step("to attend the ceremony"))
            } else {
                None
            };
            Progress::with_need(JOJA_MEMBER_OF_THE_YEAR, DESCRIPTION, need)
        }
    }
}

/// Gold amount of a Vault bundle name such as "2,500g".
fn gold_amount(name: &str) -> Option<u64> {
    let digits = name.strip_suffix('g')?.replace(',', "");
    digits.parse().ok()
}

/// Bundle display order: gold bundles by amount first, then by name.
fn bundle_order(a: &OutstandingItem, b: &OutstandingItem) -> std::cmp::Ordering {
    let key = |item: &OutstandingItem| {
        let name = item.name.strip_suffix(" Bundle").unwrap_or(&item.name);
        (gold_amount(name).unwrap_or(u64::MAX), item.name.clone())
    };
    key(a).cmp(&key(b))
}

/// Items still to place per bundle, for one unrestored room.
fn room_item(doc: &SaveDocument, room: usize) -> OutstandingItem {
    let def = &ROOMS[room];
    let mut bundles: Vec<OutstandingItem> = def
        .bundles
        .iter()
        .filter_map(|bundle| {
            // A bundle the save has no record of has nothing placed.
            let placed = doc
                .community_center
                .bundles
                .get(&bundle.id)
                .map_or(0, |slots| slots.iter().filter(|s| **s).count() as u32);
            (placed < bundle.slots).then(|| {
                OutstandingItem::needing(
                    format!("{} Bundle", bundle.name),
                    Need::more(u64::from(bundle.slots - placed), Unit::Items),
                )
            })
        })
        .collect();
    bundles.sort_by(bundle_order);
    OutstandingItem {
        name: def.name.to_string(),
        need: None,
        children: bundles,
    }
}

fn outstanding(doc: &SaveDocument, progress: &CommunityProgress) -> Vec<OutstandingItem> {
    if progress.ceremony_seen {
        return Vec::new();
    }
    let mut items = Vec::new();
    if progress.state.is_joja() {
        for (i, room) in ROOMS.iter().enumerate() {
            let Some(project) = &room.joja else { continue };
            if !progress.rooms_done[i] && !progress.projects_done[i] {
                items.push(OutstandingItem::named(format!(
                    "Purchase {} project for {}",
                    project.name, project.price
                )));
            }
        }
        items.push(OutstandingItem::named(
            "Attend the completion ceremony at the Joja Warehouse",
        ));
    } else {
        for i in 0..ROOMS.len() {
            if !progress.rooms_done[i] {
                items.push(room_item(doc, i));
            }
        }
        items.push(OutstandingItem::named(
            "Attend the re-opening ceremony at the Community Center",
        ));
    }
    items
}

pub fn section(doc: &SaveDocument) -> Section {
    let progress = CommunityProgress::from_save(doc);
    let farmer = &doc.player.name;
    let mut section = Section::new(SectionId::CommunityCenter);

    match progress.state {
        CommunityState::JojaHybrid => {
            section.summary.push(format!(
                "{} completed {} Community Center room(s) and then became a Joja member.",
                farmer, progress.rooms_complete
            ));
            section.summary.push(format!(
                "{} has since completed {} of the remaining {} projects on the Community Development Form.",
                farmer, progress.projects_purchased, progress.projects_total
            ));
        }
        CommunityState::JojaPure => section.summary.push(format!(
            "{} is a Joja member and has completed {} of the {} projects on the Community Development Form.",
            farmer, progress.projects_purchased, progress.projects_total
        )),
        _ => section.summary.push(format!(
            "{} is not a Joja member and has completed {} of the {} Community Center rooms.",
            farmer, progress.rooms_complete, ROOM_COUNT
        )),
    }
    section.summary.push(format!(
        "{} {} attended the completion ceremony.",
        farmer,
        if progress.ceremony_seen { "has" } else { "has not" }
    ));

    if progress.state.is_joja() {
        section.entries.push(Entry::Achievement(local_legend(&progress)));
        if progress.state == CommunityState::JojaHybrid {
            section.entries.push(Entry::Warning(HYBRID_WARNING.to_string()));
        }
        section
            .entries
            .push(Entry::Achievement(joja_member_of_the_year(&progress)));
    } else {
        section
            .entries
            .push(Entry::Achievement(joja_member_of_the_year(&progress)));
        section.entries.push(Entry::Achievement(local_legend(&progress)));
    }

    let left = outstanding(doc, &progress);
    if !left.is_empty() {
        section
            .outstanding
            .push(OutstandingList::sorted("Left to do", left));
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> SaveDocument {
        let mut doc = SaveDocument::default();
        doc.player.name = "Ada".into();
        doc.community_center.areas_complete = vec![false; ROOMS.len()];
        doc
    }

    fn complete_rooms(doc: &mut SaveDocument, rooms: &[usize]) {
        for &room in rooms {
            doc.community_center.areas_complete[room] = true;
        }
    }

    fn join_joja(doc: &mut SaveDocument) {
        doc.player.mail_received.insert(JOJA_MEMBER_FLAG.to_string());
    }

    #[test]
    fn test_neither_started() {
        let doc = doc();
        let progress = CommunityProgress::from_save(&doc);
        assert_eq!(progress.state, CommunityState::NeitherStarted);
        let joja = joja_member_of_the_year(&progress);
        assert!(!joja.impossible);
        let legend = local_legend(&progress);
        assert_eq!(
            legend.need.unwrap().to_string(),
            "6 more room(s) and the ceremony"
        );
    }

    #[test]
    fn test_in_progress_keeps_joja_possible() {
        let mut doc = doc();
        complete_rooms(&mut doc, &[0, 2]);
        let progress = CommunityProgress::from_save(&doc);
        assert_eq!(progress.state, CommunityState::CommunityCenterInProgress);
        assert!(!joja_member_of_the_year(&progress).impossible);
    }

    #[test]
    fn test_joja_membership_makes_local_legend_impossible() {
        for rooms in [&[][..], &[0, 1][..]] {
            let mut doc = doc();
            complete_rooms(&mut doc, rooms);
            join_joja(&mut doc);
            let progress = CommunityProgress::from_save(&doc);
            let legend = local_legend(&progress);
            assert!(legend.impossible);
            assert!(!legend.achieved);
        }
    }

    #[test]
    fn test_all_rooms_without_joja_makes_joja_impossible() {
        let mut doc = doc();
        complete_rooms(&mut doc, &[0, 1, 2, 3, 4, 5]);
        let progress = CommunityProgress::from_save(&doc);
        assert_eq!(
            progress.state,
            CommunityState::CommunityCenterDone { ceremony: false }
        );
        assert!(joja_member_of_the_year(&progress).impossible);
        assert_eq!(
            local_legend(&progress).need,
            Some(Need::step("to attend the ceremony"))
        );
    }

    #[test]
    fn test_ceremony_completes_local_legend() {
        let mut doc = doc();
        complete_rooms(&mut doc, &[0, 1, 2, 3, 4, 5]);
        doc.player
            .events_seen
            .insert(COMMUNITY_CENTER_CEREMONY.to_string());
        let section = section(&doc);
        assert!(section.goal(LOCAL_LEGEND).unwrap().achieved);
        assert!(section.outstanding.is_empty());
    }

    #[test]
    fn test_hybrid_project_count_with_bulletin_board() {
        let mut doc = doc();
        complete_rooms(&mut doc, &[0, BULLETIN_BOARD]);
        join_joja(&mut doc);
        let progress = CommunityProgress::from_save(&doc);
        assert_eq!(progress.state, CommunityState::JojaHybrid);
        assert_eq!(progress.projects_total, 4);
    }

    #[test]
    fn test_hybrid_emits_warning() {
        let mut doc = doc();
        complete_rooms(&mut doc, &[1]);
        join_joja(&mut doc);
        let section = section(&doc);
        assert!(section
            .entries
            .iter()
            .any(|e| *e == Entry::Warning(HYBRID_WARNING.to_string())));
        // Crafts Room was restored, so its Bridge project is not listed.
        let left = section.outstanding_list("Left to do").unwrap();
        assert!(left.items.iter().all(|i| !i.name.contains("Bridge")));
        assert_eq!(left.items.len(), 4 + 1);
    }

    #[test]
    fn test_joja_pure_progress() {
        let mut doc = doc();
        join_joja(&mut doc);
        doc.player.mail_received.insert("jojaPantry".into());
        doc.player.mail_received.insert("jojaVault".into());
        let progress = CommunityProgress::from_save(&doc);
        assert_eq!(progress.state, CommunityState::JojaPure);
        assert_eq!(progress.projects_purchased, 2);
        assert_eq!(
            joja_member_of_the_year(&progress).need.unwrap().to_string(),
            "3 more project(s) and the ceremony"
        );

        let section = section(&doc);
        let names: Vec<_> = section.outstanding[0]
            .items
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Attend the completion ceremony at the Joja Warehouse",
                "Purchase Bridge project for 25,000g",
                "Purchase Minecarts project for 15,000g",
                "Purchase Panning project for 20,000g",
            ]
        );
    }

    #[test]
    fn test_joja_complete_with_ceremony() {
        let mut doc = doc();
        join_joja(&mut doc);
        for room in ROOMS.iter() {
            if let Some(project) = &room.joja {
                doc.player.mail_received.insert(project.mail_flag.to_string());
            }
        }
        doc.player.events_seen.insert(JOJA_CEREMONY.to_string());
        let progress = CommunityProgress::from_save(&doc);
        assert!(progress.all_rooms_done());
        assert!(joja_member_of_the_year(&progress).achieved);
    }

    #[test]
    fn test_missing_bundle_record_counts_as_empty() {
        let mut doc = doc();
        complete_rooms(&mut doc, &[0, 1, 2, 3, 5]);
        doc.community_center.bundles.insert(23, vec![true]);
        let section = section(&doc);
        let left = section.outstanding_list("Left to do").unwrap();
        let vault = left.items.iter().find(|i| i.name == "Vault").unwrap();
        let bundles: Vec<_> = vault
            .children
            .iter()
            .map(|b| (b.name.as_str(), b.need.as_ref().unwrap().to_string()))
            .collect();
        assert_eq!(
            bundles,
            vec![
                ("5,000g Bundle", "1 more item(s)".to_string()),
                ("10,000g Bundle", "1 more item(s)".to_string()),
                ("25,000g Bundle", "1 more item(s)".to_string()),
            ]
        );
    }

    #[test]
    fn test_bundles_sort_by_gold_amount_then_name() {
        let section = section(&doc());
        let left = section.outstanding_list("Left to do").unwrap();
        let names = |room: &str| -> Vec<String> {
            let item = left.items.iter().find(|i| i.name == room).unwrap();
            item.children.iter().map(|b| b.name.clone()).collect()
        };
        assert_eq!(
            names("Vault"),
            vec!["2,500g Bundle", "5,000g Bundle", "10,000g Bundle", "25,000g Bundle"]
        );
        assert_eq!(
            names("Boiler Room"),
            vec!["Adventurer's Bundle", "Blacksmith's Bundle", "Geologist's Bundle"]
        );
    }

    #[test]
    fn test_gold_amount() {
        assert_eq!(gold_amount("25,000g"), Some(25_000));
        assert_eq!(gold_amount("Dye"), None);
        assert_eq!(gold_amount("g"), None);
    }
}
