//! Crafting recipes in the order of the in-game crafting page.
//!
//! Crafting progress is stored by recipe name only, so the canonical name is
//! also the catalog id.

use super::CatalogEntry;

pub const CRAFTING_RECIPES: &[CatalogEntry<&str>] = &[
    CatalogEntry { id: "Cherry Bomb", name: "Cherry Bomb" },
    CatalogEntry { id: "Bomb", name: "Bomb" },
    CatalogEntry { id: "Mega Bomb", name: "Mega Bomb" },
    CatalogEntry { id: "Gate", name: "Gate" },
    CatalogEntry { id: "Wood Fence", name: "Wood Fence" },
    CatalogEntry { id: "Stone Fence", name: "Stone Fence" },
    CatalogEntry { id: "Iron Fence", name: "Iron Fence" },
    CatalogEntry { id: "Hardwood Fence", name: "Hardwood Fence" },
    CatalogEntry { id: "Sprinkler", name: "Sprinkler" },
    CatalogEntry { id: "Quality Sprinkler", name: "Quality Sprinkler" },
    CatalogEntry { id: "Iridium Sprinkler", name: "Iridium Sprinkler" },
    CatalogEntry { id: "Mayonnaise Machine", name: "Mayonnaise Machine" },
    CatalogEntry { id: "Bee House", name: "Bee House" },
    CatalogEntry { id: "Preserves Jar", name: "Preserves Jar" },
    CatalogEntry { id: "Cheese Press", name: "Cheese Press" },
    CatalogEntry { id: "Loom", name: "Loom" },
    CatalogEntry { id: "Keg", name: "Keg" },
    CatalogEntry { id: "Oil Maker", name: "Oil Maker" },
    CatalogEntry { id: "Cask", name: "Cask" },
    CatalogEntry { id: "Basic Fertilizer", name: "Basic Fertilizer" },
    CatalogEntry { id: "Quality Fertilizer", name: "Quality Fertilizer" },
    CatalogEntry { id: "Speed-Gro", name: "Speed-Gro" },
    CatalogEntry { id: "Deluxe Speed-Gro", name: "Deluxe Speed-Gro" },
    CatalogEntry { id: "Basic Retaining Soil", name: "Basic Retaining Soil" },
    CatalogEntry { id: "Quality Retaining Soil", name: "Quality Retaining Soil" },
    CatalogEntry { id: "Wild Seeds (Sp)", name: "Wild Seeds (Sp)" },
    CatalogEntry { id: "Wild Seeds (Su)", name: "Wild Seeds (Su)" },
    CatalogEntry { id: "Wild Seeds (Fa)", name: "Wild Seeds (Fa)" },
    CatalogEntry { id: "Wild Seeds (Wi)", name: "Wild Seeds (Wi)" },
    CatalogEntry { id: "Ancient Seeds", name: "Ancient Seeds" },
    CatalogEntry { id: "Wood Floor", name: "Wood Floor" },
    CatalogEntry { id: "Straw Floor", name: "Straw Floor" },
    CatalogEntry { id: "Weathered Floor", name: "Weathered Floor" },
    CatalogEntry { id: "Crystal Floor", name: "Crystal Floor" },
    CatalogEntry { id: "Stone Floor", name: "Stone Floor" },
    CatalogEntry { id: "Wood Path", name: "Wood Path" },
    CatalogEntry { id: "Gravel Path", name: "Gravel Path" },
    CatalogEntry { id: "Cobblestone Path", name: "Cobblestone Path" },
    CatalogEntry { id: "Stepping Stone Path", name: "Stepping Stone Path" },
    CatalogEntry { id: "Crystal Path", name: "Crystal Path" },
    CatalogEntry { id: "Spinner", name: "Spinner" },
    CatalogEntry { id: "Trap Bobber", name: "Trap Bobber" },
    CatalogEntry { id: "Cork Bobber", name: "Cork Bobber" },
    CatalogEntry { id: "Treasure Hunter", name: "Treasure Hunter" },
    CatalogEntry { id: "Dressed Spinner", name: "Dressed Spinner" },
    CatalogEntry { id: "Barbed Hook", name: "Barbed Hook" },
    CatalogEntry { id: "Magnet", name: "Magnet" },
    CatalogEntry { id: "Bait", name: "Bait" },
    CatalogEntry { id: "Wild Bait", name: "Wild Bait" },
    CatalogEntry { id: "Crab Pot", name: "Crab Pot" },
    CatalogEntry { id: "Sturdy Ring", name: "Sturdy Ring" },
    CatalogEntry { id: "Warrior Ring", name: "Warrior Ring" },
    CatalogEntry { id: "Ring of Yoba", name: "Ring of Yoba" },
    CatalogEntry { id: "Iridium Band", name: "Iridium Band" },
    CatalogEntry { id: "Field Snack", name: "Field Snack" },
    CatalogEntry { id: "Life Elixir", name: "Life Elixir" },
    CatalogEntry { id: "Oil of Garlic", name: "Oil of Garlic" },
    CatalogEntry { id: "Torch", name: "Torch" },
    CatalogEntry { id: "Campfire", name: "Campfire" },
    CatalogEntry { id: "Wooden Brazier", name: "Wooden Brazier" },
    CatalogEntry { id: "Stone Brazier", name: "Stone Brazier" },
    CatalogEntry { id: "Gold Brazier", name: "Gold Brazier" },
    CatalogEntry { id: "Carved Brazier", name: "Carved Brazier" },
    CatalogEntry { id: "Stump Brazier", name: "Stump Brazier" },
    CatalogEntry { id: "Barrel Brazier", name: "Barrel Brazier" },
    CatalogEntry { id: "Skull Brazier", name: "Skull Brazier" },
    CatalogEntry { id: "Marble Brazier", name: "Marble Brazier" },
    CatalogEntry { id: "Wood Lamp-post", name: "Wood Lamp-post" },
    CatalogEntry { id: "Iron Lamp-post", name: "Iron Lamp-post" },
    CatalogEntry { id: "Jack-O-Lantern", name: "Jack-O-Lantern" },
    CatalogEntry { id: "Chest", name: "Chest" },
    CatalogEntry { id: "Furnace", name: "Furnace" },
    CatalogEntry { id: "Scarecrow", name: "Scarecrow" },
    CatalogEntry { id: "Seed Maker", name: "Seed Maker" },
    CatalogEntry { id: "Staircase", name: "Staircase" },
    CatalogEntry { id: "Explosive Ammo", name: "Explosive Ammo" },
    CatalogEntry { id: "Transmute (Fe)", name: "Transmute (Fe)" },
    CatalogEntry { id: "Transmute (Au)", name: "Transmute (Au)" },
    CatalogEntry { id: "Crystalarium", name: "Crystalarium" },
    CatalogEntry { id: "Charcoal Kiln", name: "Charcoal Kiln" },
    CatalogEntry { id: "Lightning Rod", name: "Lightning Rod" },
    CatalogEntry { id: "Recycling Machine", name: "Recycling Machine" },
    CatalogEntry { id: "Tapper", name: "Tapper" },
    CatalogEntry { id: "Worm Bin", name: "Worm Bin" },
    CatalogEntry { id: "Slime Egg-Press", name: "Slime Egg-Press" },
    CatalogEntry { id: "Slime Incubator", name: "Slime Incubator" },
    CatalogEntry { id: "Warp Totem: Beach", name: "Warp Totem: Beach" },
    CatalogEntry { id: "Warp Totem: Mountains", name: "Warp Totem: Mountains" },
    CatalogEntry { id: "Warp Totem: Farm", name: "Warp Totem: Farm" },
    CatalogEntry { id: "Rain Totem", name: "Rain Totem" },
    CatalogEntry { id: "Tub o' Flowers", name: "Tub o' Flowers" },
    CatalogEntry { id: "Wicked Statue", name: "Wicked Statue" },
    CatalogEntry { id: "Flute Block", name: "Flute Block" },
    CatalogEntry { id: "Drum Block", name: "Drum Block" },
];
