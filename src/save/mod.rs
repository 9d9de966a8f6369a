//! Save document model and loader.
//!
//! The checkup never reads a save directly. This module turns a JSON
//! rendition of the game's save into a [`SaveDocument`] and the evaluators
//! work from that. Structural failure (unreadable file, not JSON at all) is
//! the only fatal error in the whole crate; individual fields are coerced by
//! [`lenient`] and default to zero/empty when absent.

pub mod lenient;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::ItemId;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// ERRORS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("could not read save file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("save file is not a usable document: {0}")]
    Parse(#[from] serde_json::Error),
}

// ═══════════════════════════════════════════════════════════════════════
// DOCUMENT
// ═══════════════════════════════════════════════════════════════════════

pub const FARM_TYPES: [&str; 5] = ["Standard", "Riverland", "Forest", "Hill-top", "Wilderness"];

/// Number of skills that count toward goals; the save has a sixth (luck) slot.
pub const SKILL_COUNT: usize = 5;

/// Skill names in the save's experience-point order.
pub const SKILL_NAMES: [&str; SKILL_COUNT] = ["Farming", "Fishing", "Foraging", "Mining", "Combat"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SaveDocument {
    pub player: PlayerRecord,
    /// Index into [`FARM_TYPES`].
    #[serde(deserialize_with = "lenient::number")]
    pub which_farm: u64,
    pub current_season: String,
    #[serde(deserialize_with = "lenient::number")]
    pub day_of_month: u64,
    #[serde(deserialize_with = "lenient::number")]
    pub year: u64,
    /// Days until the wedding; 0 when no wedding is pending.
    #[serde(deserialize_with = "lenient::number")]
    pub countdown_to_wedding: u64,
    pub stats: StatsRecord,
    pub community_center: CommunityCenterRecord,
    /// Item ids on display in the museum.
    #[serde(deserialize_with = "lenient::ids")]
    pub museum_pieces: BTreeSet<ItemId>,
    pub characters: Vec<CharacterRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerRecord {
    pub name: String,
    pub farm_name: String,
    #[serde(deserialize_with = "lenient::number")]
    pub total_money_earned: u64,
    #[serde(deserialize_with = "lenient::number")]
    pub milliseconds_played: u64,
    /// Farming, Fishing, Foraging, Mining, Combat, Luck.
    #[serde(deserialize_with = "lenient::numbers")]
    pub experience_points: Vec<u64>,
    #[serde(deserialize_with = "lenient::number")]
    pub farming_level: u64,
    #[serde(deserialize_with = "lenient::number")]
    pub mining_level: u64,
    #[serde(deserialize_with = "lenient::number")]
    pub combat_level: u64,
    #[serde(deserialize_with = "lenient::number")]
    pub foraging_level: u64,
    #[serde(deserialize_with = "lenient::number")]
    pub fishing_level: u64,
    #[serde(deserialize_with = "lenient::number")]
    pub luck_level: u64,
    #[serde(deserialize_with = "lenient::text")]
    pub spouse: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub house_upgrade_level: u64,
    /// Known cooking recipes by (save-spelled) name.
    #[serde(deserialize_with = "lenient::counts")]
    pub cooking_recipes: BTreeMap<String, u64>,
    /// Times each dish has been cooked, by dish id.
    #[serde(deserialize_with = "lenient::counts")]
    pub recipes_cooked: BTreeMap<ItemId, u64>,
    /// Known crafting recipes by name, with times crafted.
    #[serde(deserialize_with = "lenient::counts")]
    pub crafting_recipes: BTreeMap<String, u64>,
    #[serde(deserialize_with = "lenient::counts")]
    pub fish_caught: BTreeMap<ItemId, u64>,
    #[serde(deserialize_with = "lenient::counts")]
    pub minerals_found: BTreeMap<ItemId, u64>,
    #[serde(deserialize_with = "lenient::counts")]
    pub archaeology_found: BTreeMap<ItemId, u64>,
    #[serde(deserialize_with = "lenient::counts")]
    pub basic_shipped: BTreeMap<ItemId, u64>,
    /// Friendship points by NPC name.
    #[serde(deserialize_with = "lenient::counts")]
    pub friendships: BTreeMap<String, u64>,
    #[serde(deserialize_with = "lenient::ids")]
    pub mail_received: BTreeSet<String>,
    #[serde(deserialize_with = "lenient::ids")]
    pub events_seen: BTreeSet<String>,
    #[serde(deserialize_with = "lenient::ids")]
    pub achievements: BTreeSet<u32>,
    #[serde(deserialize_with = "lenient::number")]
    pub deepest_mine_level: u64,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_rusty_key: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_skull_key: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsRecord {
    #[serde(deserialize_with = "lenient::number")]
    pub quests_completed: u64,
    #[serde(deserialize_with = "lenient::counts")]
    pub specific_monsters_killed: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommunityCenterRecord {
    /// One flag per room, in the room order of `data::community::ROOMS`.
    #[serde(deserialize_with = "lenient::flags")]
    pub areas_complete: Vec<bool>,
    /// Bundle id → per-slot "item placed" flags.
    #[serde(deserialize_with = "lenient::slot_flags")]
    pub bundles: BTreeMap<u32, Vec<bool>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterKind {
    Child,
    Cat,
    Dog,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CharacterRecord {
    #[serde(rename = "type")]
    pub kind: CharacterKind,
    pub name: String,
    #[serde(deserialize_with = "lenient::number")]
    pub friendship_toward_farmer: u64,
}

impl SaveDocument {
    pub fn from_json_str(json: &str) -> Result<Self, SaveError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SaveError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SaveError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn farm_type(&self) -> &'static str {
        usize::try_from(self.which_farm)
            .ok()
            .and_then(|i| FARM_TYPES.get(i).copied())
            .unwrap_or("Unknown")
    }

    pub fn has_mail(&self, flag: &str) -> bool {
        self.player.mail_received.contains(flag)
    }

    pub fn has_seen_event(&self, event: &str) -> bool {
        self.player.events_seen.contains(event)
    }

    pub fn is_married(&self) -> bool {
        self.player.spouse.is_some()
    }

    /// Spouse name for display. While the wedding countdown runs the save
    /// stores the fiancé(e) as "<Name>engaged"; the marker is dropped.
    pub fn spouse_name(&self) -> Option<&str> {
        let spouse = self.player.spouse.as_deref()?;
        if self.countdown_to_wedding > 0 {
            Some(spouse.strip_suffix("engaged").unwrap_or(spouse).trim_end())
        } else {
            Some(spouse)
        }
    }

    /// Experience for the five real skills; missing slots read as 0.
    pub fn skill_experience(&self) -> [u64; SKILL_COUNT] {
        let mut xp = [0; SKILL_COUNT];
        for (slot, value) in xp.iter_mut().zip(&self.player.experience_points) {
            *slot = *value;
        }
        xp
    }

    /// Sum of the five skill levels; luck is not counted.
    pub fn total_skill_levels(&self) -> u64 {
        let p = &self.player;
        [
            p.farming_level,
            p.mining_level,
            p.combat_level,
            p.foraging_level,
            p.fishing_level,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }

    pub fn children(&self) -> impl Iterator<Item = &CharacterRecord> {
        self.characters
            .iter()
            .filter(|c| c.kind == CharacterKind::Child)
    }

    pub fn pets(&self) -> impl Iterator<Item = &CharacterRecord> {
        self.characters
            .iter()
            .filter(|c| matches!(c.kind, CharacterKind::Cat | CharacterKind::Dog))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN
// ═══════════════════════════════════════════════════════════════════════

pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LoadedSave>()
            .add_event::<LoadSaveRequestEvent>()
            .add_event::<SaveLoadedEvent>()
            .add_systems(Update, handle_load_request);
    }
}

/// Reads each requested save. A failed load leaves the previous document in place.
fn handle_load_request(
    mut requests: EventReader<LoadSaveRequestEvent>,
    mut complete_events: EventWriter<SaveLoadedEvent>,
    mut loaded: ResMut<LoadedSave>,
) {
    for ev in requests.read() {
        info!("[Save] Loading {}...", ev.path.display());

        match SaveDocument::load(&ev.path) {
            Ok(document) => {
                info!(
                    "[Save] Loaded {} of {} Farm.",
                    document.player.name, document.player.farm_name
                );
                loaded.path = Some(ev.path.clone());
                loaded.document = Some(document);
                complete_events.send(SaveLoadedEvent {
                    path: ev.path.clone(),
                    success: true,
                    error_message: None,
                });
            }
            Err(e) => {
                warn!("[Save] Load of {} FAILED: {}", ev.path.display(), e);
                complete_events.send(SaveLoadedEvent {
                    path: ev.path.clone(),
                    success: false,
                    error_message: Some(e.to_string()),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_all_defaults() {
        let doc = SaveDocument::from_json_str("{}").unwrap();
        assert_eq!(doc.player.total_money_earned, 0);
        assert!(doc.player.spouse.is_none());
        assert!(doc.player.mail_received.is_empty());
        assert_eq!(doc.skill_experience(), [0; SKILL_COUNT]);
        assert_eq!(doc.farm_type(), "Standard");
    }

    #[test]
    fn test_player_fields_are_coerced() {
        let doc = SaveDocument::from_json_str(
            r#"{
                "whichFarm": "3",
                "player": {
                    "name": "Ada",
                    "totalMoneyEarned": "123456",
                    "experiencePoints": [15000, "200", null, 0, 16000, 9999],
                    "fishCaught": {"128": [3, 24], "372": [10, 2]},
                    "friendships": {"Abigail": [2500, 0], "Sam": "1250"},
                    "hasRustyKey": "true",
                    "hasSkullKey": "no",
                    "achievements": [5, "34"]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(doc.farm_type(), "Hill-top");
        assert_eq!(doc.player.total_money_earned, 123_456);
        assert_eq!(doc.skill_experience(), [15000, 200, 0, 0, 16000]);
        assert_eq!(doc.player.fish_caught[&128], 3);
        assert_eq!(doc.player.friendships["Abigail"], 2500);
        assert_eq!(doc.player.friendships["Sam"], 1250);
        assert!(doc.player.has_rusty_key);
        assert!(!doc.player.has_skull_key);
        assert!(doc.player.achievements.contains(&34));
    }

    #[test]
    fn test_engaged_marker_is_stripped_during_countdown() {
        let mut doc = SaveDocument::default();
        doc.player.spouse = Some("Leahengaged".into());
        doc.countdown_to_wedding = 3;
        assert_eq!(doc.spouse_name(), Some("Leah"));

        doc.countdown_to_wedding = 0;
        doc.player.spouse = Some("Leah".into());
        assert_eq!(doc.spouse_name(), Some("Leah"));
    }

    #[test]
    fn test_characters_are_tagged_by_kind() {
        let doc = SaveDocument::from_json_str(
            r#"{"characters": [
                {"type": "Child", "name": "Pip"},
                {"type": "Dog", "name": "Rex", "friendshipTowardFarmer": "1000"},
                {"type": "Horse", "name": "Bean"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(doc.children().count(), 1);
        assert_eq!(doc.pets().map(|p| p.friendship_toward_farmer).max(), Some(1000));
        assert_eq!(doc.characters[2].kind, CharacterKind::Other);
    }

    #[test]
    fn test_total_skill_levels_ignores_luck() {
        let mut doc = SaveDocument::default();
        doc.player.farming_level = 10;
        doc.player.fishing_level = 10;
        doc.player.luck_level = 10;
        assert_eq!(doc.total_skill_levels(), 20);
    }

    #[test]
    fn test_total_skill_levels_saturates() {
        let doc = SaveDocument::from_json_str(
            r#"{"player":{"farmingLevel":"1e19","miningLevel":"1e19","combatLevel":3}}"#,
        )
        .unwrap();
        assert_eq!(doc.total_skill_levels(), u64::MAX);
    }

    #[test]
    fn test_malformed_document_is_a_parse_error() {
        let err = SaveDocument::from_json_str("<SaveGame>").unwrap_err();
        assert!(matches!(err, SaveError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("stardew-checkup-no-such-save.json");
        let err = SaveDocument::load(&path).unwrap_err();
        assert!(matches!(err, SaveError::Io { .. }));
    }
}
