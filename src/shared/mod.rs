//! Shared result types, resources and events for the checkup.
//!
//! This is the type contract. The evaluators produce these records, the
//! plugins move them around, and whatever presents a report only reads them.
//! Nothing here carries markup; rendering is the host's business.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::save::SaveDocument;

// ═══════════════════════════════════════════════════════════════════════
// NEEDS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    /// Plain count: recipes, fish, goals.
    Count,
    /// Items still to place, e.g. in a bundle.
    Items,
    Gold,
    Experience,
    Levels,
    People,
    FriendshipPoints,
    Points,
    Kills,
    Rooms,
    Projects,
    Upgrades,
    Children,
    /// Number of distinct crops still short of their quota.
    Crops,
}

/// What remains before a goal is met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Need {
    More { amount: u64, unit: Unit },
    /// `amount` more of one named thing ("250 more Parsnip").
    MoreOf { amount: u64, subject: String },
    /// Several conditions that must all hold.
    AllOf(Vec<Need>),
    /// A single action with no amount attached.
    Step(String),
}

impl Need {
    pub fn more(amount: u64, unit: Unit) -> Self {
        Need::More { amount, unit }
    }

    pub fn step(text: impl Into<String>) -> Self {
        Need::Step(text.into())
    }
}

/// Formats a whole number with thousands separators: `1234567` → `1,234,567`.
pub fn with_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Need {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Need::More { amount, unit } => match unit {
                Unit::Count => write!(f, "{} more", amount),
                Unit::Items => write!(f, "{} more item(s)", amount),
                Unit::Gold => write!(f, "{}g more", with_commas(*amount)),
                Unit::Experience => write!(f, "{} more xp", amount),
                Unit::Levels => write!(f, "{} more level(s)", amount),
                Unit::People => write!(f, "{} more", amount),
                Unit::FriendshipPoints => write!(f, "{} friendship points", amount),
                Unit::Points => write!(f, "{} more point(s)", amount),
                Unit::Kills => write!(f, "kill {} more", amount),
                Unit::Rooms => write!(f, "{} more room(s)", amount),
                Unit::Projects => write!(f, "{} more project(s)", amount),
                Unit::Upgrades => write!(f, "{} more upgrade(s)", amount),
                Unit::Children if *amount == 1 => write!(f, "1 child"),
                Unit::Children => write!(f, "{} children", amount),
                Unit::Crops => write!(f, "more of {} crops", amount),
            },
            Need::MoreOf { amount, subject } => write!(f, "{} more {}", amount, subject),
            Need::AllOf(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, " and ")?;
                    }
                    write!(f, "{}", part)?;
                }
                Ok(())
            }
            Need::Step(text) => f.write_str(text),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// RESULT RECORDS
// ═══════════════════════════════════════════════════════════════════════

/// Progress toward one achievement or milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub name: String,
    pub description: String,
    pub achieved: bool,
    /// The save has made a choice that rules this goal out for good.
    pub impossible: bool,
    /// `None` when achieved or impossible.
    pub need: Option<Need>,
}

impl Progress {
    /// Count-against-threshold goal with a `threshold - have` deficiency.
    pub fn threshold(name: &str, description: &str, have: u64, target: u64, unit: Unit) -> Self {
        let achieved = have >= target;
        Self {
            name: name.to_string(),
            description: description.to_string(),
            achieved,
            impossible: false,
            need: (!achieved).then(|| Need::more(target - have, unit)),
        }
    }

    /// Goal whose remaining work is described by `need`; achieved when `need` is `None`.
    pub fn with_need(name: &str, description: &str, need: Option<Need>) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            achieved: need.is_none(),
            impossible: false,
            need,
        }
    }

    pub fn impossible(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            achieved: false,
            impossible: true,
            need: None,
        }
    }
}

/// One scored contribution to Grandpa's evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointAward {
    pub points: u32,
    /// Stacks on top of a lower tier of the same category.
    pub cumulative: bool,
    pub description: String,
    pub achieved: bool,
    pub need: Option<Need>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entry {
    Achievement(Progress),
    /// Progress goal with no in-game achievement attached.
    Milestone(Progress),
    Points(PointAward),
    Warning(String),
}

impl Entry {
    pub fn progress(&self) -> Option<&Progress> {
        match self {
            Entry::Achievement(p) | Entry::Milestone(p) => Some(p),
            _ => None,
        }
    }
}

/// One row of a "what's left" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutstandingItem {
    pub name: String,
    pub need: Option<Need>,
    pub children: Vec<OutstandingItem>,
}

impl OutstandingItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            need: None,
            children: Vec::new(),
        }
    }

    pub fn needing(name: impl Into<String>, need: Need) -> Self {
        Self {
            name: name.into(),
            need: Some(need),
            children: Vec::new(),
        }
    }
}

/// Sorted by item name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutstandingList {
    pub heading: String,
    pub items: Vec<OutstandingItem>,
}

impl OutstandingList {
    /// Builds a list, sorting the items by name.
    pub fn sorted(heading: &str, mut items: Vec<OutstandingItem>) -> Self {
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            heading: heading.to_string(),
            items,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// REPORT
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionId {
    Summary,
    Money,
    Skills,
    Quests,
    Monsters,
    Stardrops,
    Family,
    Social,
    Cooking,
    Crafting,
    Fishing,
    BasicShipping,
    CropShipping,
    Museum,
    CommunityCenter,
    GrandpaEvaluation,
}

impl SectionId {
    pub const ALL: [SectionId; 16] = [
        SectionId::Summary,
        SectionId::Money,
        SectionId::Skills,
        SectionId::Quests,
        SectionId::Monsters,
        SectionId::Stardrops,
        SectionId::Family,
        SectionId::Social,
        SectionId::Cooking,
        SectionId::Crafting,
        SectionId::Fishing,
        SectionId::BasicShipping,
        SectionId::CropShipping,
        SectionId::Museum,
        SectionId::CommunityCenter,
        SectionId::GrandpaEvaluation,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionId::Summary => "Summary",
            SectionId::Money => "Money",
            SectionId::Skills => "Skills",
            SectionId::Quests => "Quests",
            SectionId::Monsters => "Monster Hunting",
            SectionId::Stardrops => "Stardrops",
            SectionId::Family => "Home and Family",
            SectionId::Social => "Social",
            SectionId::Cooking => "Cooking",
            SectionId::Crafting => "Crafting",
            SectionId::Fishing => "Fishing",
            SectionId::BasicShipping => "Basic Shipping",
            SectionId::CropShipping => "Crop Shipping",
            SectionId::Museum => "Museum Collection",
            SectionId::CommunityCenter => "Community Center / Joja Community Development",
            SectionId::GrandpaEvaluation => "Grandpa's Evaluation",
        }
    }
}

/// One category of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub summary: Vec<String>,
    pub entries: Vec<Entry>,
    /// Empty when nothing is left, or when outstanding lists are turned off.
    pub outstanding: Vec<OutstandingList>,
}

impl Section {
    pub fn new(id: SectionId) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            summary: Vec::new(),
            entries: Vec::new(),
            outstanding: Vec::new(),
        }
    }

    /// Looks up an achievement or milestone by name.
    pub fn goal(&self, name: &str) -> Option<&Progress> {
        self.entries
            .iter()
            .filter_map(Entry::progress)
            .find(|p| p.name == name)
    }

    pub fn outstanding_list(&self, heading: &str) -> Option<&OutstandingList> {
        self.outstanding.iter().find(|l| l.heading == heading)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionReport {
    pub sections: Vec<Section>,
}

impl CompletionReport {
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Every warning entry across all sections, in report order.
    pub fn warnings(&self) -> Vec<String> {
        self.sections
            .iter()
            .flat_map(|s| s.entries.iter())
            .filter_map(|e| match e {
                Entry::Warning(w) => Some(w.clone()),
                _ => None,
            })
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// RESOURCES
// ═══════════════════════════════════════════════════════════════════════

/// The save currently under evaluation. Replaced wholesale on each load.
#[derive(Resource, Debug, Clone, Default)]
pub struct LoadedSave {
    pub path: Option<PathBuf>,
    pub document: Option<SaveDocument>,
}

/// The most recent report built by the checkup.
#[derive(Resource, Debug, Clone, Default)]
pub struct LatestReport {
    pub report: Option<CompletionReport>,
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS
// ═══════════════════════════════════════════════════════════════════════

/// Ask the save plugin to read a save document from disk.
#[derive(Event, Debug, Clone)]
pub struct LoadSaveRequestEvent {
    pub path: PathBuf,
}

/// Sent by SavePlugin after a load attempt.
#[derive(Event, Debug, Clone)]
pub struct SaveLoadedEvent {
    pub path: PathBuf,
    pub success: bool,
    pub error_message: Option<String>,
}

/// Ask the checkup to (re)build the report for the loaded save.
#[derive(Event, Debug, Clone, Default)]
pub struct EvaluateSaveEvent;

/// Sent by CheckupPlugin once a report is stored in [`LatestReport`].
#[derive(Event, Debug, Clone)]
pub struct ReportReadyEvent {
    pub sections: usize,
    pub grandpa_points: u32,
    pub candles: u32,
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_commas() {
        assert_eq!(with_commas(0), "0");
        assert_eq!(with_commas(999), "999");
        assert_eq!(with_commas(15_000), "15,000");
        assert_eq!(with_commas(1_234_567), "1,234,567");
    }

    #[test]
    fn test_need_display() {
        assert_eq!(Need::more(35_000, Unit::Gold).to_string(), "35,000g more");
        assert_eq!(Need::more(1, Unit::Children).to_string(), "1 child");
        let pet = Need::AllOf(vec![
            Need::step("a pet"),
            Need::more(999, Unit::FriendshipPoints),
        ]);
        assert_eq!(pet.to_string(), "a pet and 999 friendship points");
        let crop = Need::MoreOf {
            amount: 250,
            subject: "Parsnip".into(),
        };
        assert_eq!(crop.to_string(), "250 more Parsnip");
    }

    #[test]
    fn test_threshold_progress() {
        let met = Progress::threshold("Gofer", "complete 10 quests", 12, 10, Unit::Count);
        assert!(met.achieved);
        assert_eq!(met.need, None);

        let short = Progress::threshold("Gofer", "complete 10 quests", 7, 10, Unit::Count);
        assert!(!short.achieved);
        assert!(!short.impossible);
        assert_eq!(short.need, Some(Need::more(3, Unit::Count)));
    }

    #[test]
    fn test_outstanding_list_sorts_case_sensitively() {
        let list = OutstandingList::sorted(
            "Left",
            vec![
                OutstandingItem::named("beet"),
                OutstandingItem::named("Yam"),
                OutstandingItem::named("Amaranth"),
            ],
        );
        let names: Vec<_> = list.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Amaranth", "Yam", "beet"]);
    }
}
