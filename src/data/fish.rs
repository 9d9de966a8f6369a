//! Everything that counts toward the fishing collection.
//!
//! Clam (372) shows up in the caught-fish record but is a beach forageable,
//! so it is neither listed here nor counted toward the total catch.

use super::{CatalogEntry, ItemId};

/// Item id the game records as "caught" but excludes from every fishing goal.
pub const CLAM: ItemId = 372;

pub const FISH: &[CatalogEntry<ItemId>] = &[
    // ── Algae & seaweed ──────────────────────────────────────────────────
    CatalogEntry { id: 152, name: "Seaweed" },
    CatalogEntry { id: 153, name: "Green Algae" },
    CatalogEntry { id: 157, name: "White Algae" },
    // ── Fish ─────────────────────────────────────────────────────────────
    CatalogEntry { id: 128, name: "Pufferfish" },
    CatalogEntry { id: 129, name: "Anchovy" },
    CatalogEntry { id: 130, name: "Tuna" },
    CatalogEntry { id: 131, name: "Sardine" },
    CatalogEntry { id: 132, name: "Bream" },
    CatalogEntry { id: 136, name: "Largemouth Bass" },
    CatalogEntry { id: 137, name: "Smallmouth Bass" },
    CatalogEntry { id: 138, name: "Rainbow Trout" },
    CatalogEntry { id: 139, name: "Salmon" },
    CatalogEntry { id: 140, name: "Walleye" },
    CatalogEntry { id: 141, name: "Perch" },
    CatalogEntry { id: 142, name: "Carp" },
    CatalogEntry { id: 143, name: "Catfish" },
    CatalogEntry { id: 144, name: "Pike" },
    CatalogEntry { id: 145, name: "Sunfish" },
    CatalogEntry { id: 146, name: "Red Mullet" },
    CatalogEntry { id: 147, name: "Herring" },
    CatalogEntry { id: 148, name: "Eel" },
    CatalogEntry { id: 149, name: "Octopus" },
    CatalogEntry { id: 150, name: "Red Snapper" },
    CatalogEntry { id: 151, name: "Squid" },
    CatalogEntry { id: 154, name: "Sea Cucumber" },
    CatalogEntry { id: 155, name: "Super Cucumber" },
    CatalogEntry { id: 156, name: "Ghostfish" },
    CatalogEntry { id: 158, name: "Stonefish" },
    CatalogEntry { id: 159, name: "Crimsonfish" },
    CatalogEntry { id: 160, name: "Angler" },
    CatalogEntry { id: 161, name: "Ice Pip" },
    CatalogEntry { id: 162, name: "Lava Eel" },
    CatalogEntry { id: 163, name: "Legend" },
    CatalogEntry { id: 164, name: "Sandfish" },
    CatalogEntry { id: 165, name: "Scorpion Carp" },
    CatalogEntry { id: 682, name: "Mutant Carp" },
    CatalogEntry { id: 698, name: "Sturgeon" },
    CatalogEntry { id: 699, name: "Tiger Trout" },
    CatalogEntry { id: 700, name: "Bullhead" },
    CatalogEntry { id: 701, name: "Tilapia" },
    CatalogEntry { id: 702, name: "Chub" },
    CatalogEntry { id: 704, name: "Dorado" },
    CatalogEntry { id: 705, name: "Albacore" },
    CatalogEntry { id: 706, name: "Shad" },
    CatalogEntry { id: 707, name: "Lingcod" },
    CatalogEntry { id: 708, name: "Halibut" },
    CatalogEntry { id: 715, name: "Lobster" },
    CatalogEntry { id: 716, name: "Crayfish" },
    CatalogEntry { id: 717, name: "Crab" },
    CatalogEntry { id: 718, name: "Cockle" },
    CatalogEntry { id: 719, name: "Mussel" },
    CatalogEntry { id: 720, name: "Shrimp" },
    CatalogEntry { id: 721, name: "Snail" },
    CatalogEntry { id: 722, name: "Periwinkle" },
    CatalogEntry { id: 723, name: "Oyster" },
    CatalogEntry { id: 734, name: "Woodskip" },
    CatalogEntry { id: 775, name: "Glacierfish" },
    CatalogEntry { id: 795, name: "Void Salmon" },
    CatalogEntry { id: 796, name: "Slimejack" },
];
