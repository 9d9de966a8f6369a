use super::{CatalogEntry, ItemId};

/// Artifacts the museum accepts.
pub const ARTIFACTS: &[CatalogEntry<ItemId>] = &[
    CatalogEntry { id: 96, name: "Dwarf Scroll I" },
    CatalogEntry { id: 97, name: "Dwarf Scroll II" },
    CatalogEntry { id: 98, name: "Dwarf Scroll III" },
    CatalogEntry { id: 99, name: "Dwarf Scroll IV" },
    CatalogEntry { id: 100, name: "Chipped Amphora" },
    CatalogEntry { id: 101, name: "Arrowhead" },
    CatalogEntry { id: 103, name: "Ancient Doll" },
    CatalogEntry { id: 104, name: "Elvish Jewelry" },
    CatalogEntry { id: 105, name: "Chewing Stick" },
    CatalogEntry { id: 106, name: "Ornamental Fan" },
    CatalogEntry { id: 107, name: "Dinosaur Egg" },
    CatalogEntry { id: 108, name: "Rare Disc" },
    CatalogEntry { id: 109, name: "Ancient Sword" },
    CatalogEntry { id: 110, name: "Rusty Spoon" },
    CatalogEntry { id: 111, name: "Rusty Spur" },
    CatalogEntry { id: 112, name: "Rusty Cog" },
    CatalogEntry { id: 113, name: "Chicken Statue" },
    CatalogEntry { id: 114, name: "Ancient Seed" },
    CatalogEntry { id: 115, name: "Prehistoric Tool" },
    CatalogEntry { id: 116, name: "Dried Starfish" },
    CatalogEntry { id: 117, name: "Anchor" },
    CatalogEntry { id: 118, name: "Glass Shards" },
    CatalogEntry { id: 119, name: "Bone Flute" },
    CatalogEntry { id: 120, name: "Prehistoric Handaxe" },
    CatalogEntry { id: 121, name: "Dwarvish Helm" },
    CatalogEntry { id: 122, name: "Dwarf Gadget" },
    CatalogEntry { id: 123, name: "Ancient Drum" },
    CatalogEntry { id: 124, name: "Golden Mask" },
    CatalogEntry { id: 125, name: "Golden Relic" },
    CatalogEntry { id: 126, name: "Strange Doll (green)" },
    CatalogEntry { id: 127, name: "Strange Doll (yellow)" },
    CatalogEntry { id: 579, name: "Prehistoric Scapula" },
    CatalogEntry { id: 580, name: "Prehistoric Tibia" },
    CatalogEntry { id: 581, name: "Prehistoric Skull" },
    CatalogEntry { id: 582, name: "Skeletal Hand" },
    CatalogEntry { id: 583, name: "Prehistoric Rib" },
    CatalogEntry { id: 584, name: "Prehistoric Vertebra" },
    CatalogEntry { id: 585, name: "Skeletal Tail" },
    CatalogEntry { id: 586, name: "Nautilus Fossil" },
    CatalogEntry { id: 587, name: "Amphibian Fossil" },
    CatalogEntry { id: 588, name: "Palm Fossil" },
    CatalogEntry { id: 589, name: "Trilobite" },
];

/// Minerals the museum accepts.
pub const MINERALS: &[CatalogEntry<ItemId>] = &[
    CatalogEntry { id: 60, name: "Emerald" },
    CatalogEntry { id: 62, name: "Aquamarine" },
    CatalogEntry { id: 64, name: "Ruby" },
    CatalogEntry { id: 66, name: "Amethyst" },
    CatalogEntry { id: 68, name: "Topaz" },
    CatalogEntry { id: 70, name: "Jade" },
    CatalogEntry { id: 72, name: "Diamond" },
    CatalogEntry { id: 74, name: "Prismatic Shard" },
    CatalogEntry { id: 80, name: "Quartz" },
    CatalogEntry { id: 82, name: "Fire Quartz" },
    CatalogEntry { id: 84, name: "Frozen Tear" },
    CatalogEntry { id: 86, name: "Earth Crystal" },
    CatalogEntry { id: 538, name: "Alamite" },
    CatalogEntry { id: 539, name: "Bixite" },
    CatalogEntry { id: 540, name: "Baryte" },
    CatalogEntry { id: 541, name: "Aerinite" },
    CatalogEntry { id: 542, name: "Calcite" },
    CatalogEntry { id: 543, name: "Dolomite" },
    CatalogEntry { id: 544, name: "Esperite" },
    CatalogEntry { id: 545, name: "Fluorapatite" },
    CatalogEntry { id: 546, name: "Geminite" },
    CatalogEntry { id: 547, name: "Helvite" },
    CatalogEntry { id: 548, name: "Jamborite" },
    CatalogEntry { id: 549, name: "Jagoite" },
    CatalogEntry { id: 550, name: "Kyanite" },
    CatalogEntry { id: 551, name: "Lunarite" },
    CatalogEntry { id: 552, name: "Malachite" },
    CatalogEntry { id: 553, name: "Neptunite" },
    CatalogEntry { id: 554, name: "Lemon Stone" },
    CatalogEntry { id: 555, name: "Nekoite" },
    CatalogEntry { id: 556, name: "Orpiment" },
    CatalogEntry { id: 557, name: "Petrified Slime" },
    CatalogEntry { id: 558, name: "Thunder Egg" },
    CatalogEntry { id: 559, name: "Pyrite" },
    CatalogEntry { id: 560, name: "Ocean Stone" },
    CatalogEntry { id: 561, name: "Ghost Crystal" },
    CatalogEntry { id: 562, name: "Tigerseye" },
    CatalogEntry { id: 563, name: "Jasper" },
    CatalogEntry { id: 564, name: "Opal" },
    CatalogEntry { id: 565, name: "Fire Opal" },
    CatalogEntry { id: 566, name: "Celestine" },
    CatalogEntry { id: 567, name: "Marble" },
    CatalogEntry { id: 568, name: "Sandstone" },
    CatalogEntry { id: 569, name: "Granite" },
    CatalogEntry { id: 570, name: "Basalt" },
    CatalogEntry { id: 571, name: "Limestone" },
    CatalogEntry { id: 572, name: "Soapstone" },
    CatalogEntry { id: 573, name: "Hematite" },
    CatalogEntry { id: 574, name: "Mudstone" },
    CatalogEntry { id: 575, name: "Obsidian" },
    CatalogEntry { id: 576, name: "Slate" },
    CatalogEntry { id: 577, name: "Fairy Stone" },
    CatalogEntry { id: 578, name: "Star Shards" },
];
