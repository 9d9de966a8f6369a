//! Shipping collections: the basic-shipping page plus the two crop
//! shipping tables (polyculture and the extra monoculture candidates).

use super::{CatalogEntry, ItemId};

/// Items on the basic shipping collection page.
pub const BASIC_SHIPPABLES: &[CatalogEntry<ItemId>] = &[
    CatalogEntry { id: 16, name: "Wild Horseradish" },
    CatalogEntry { id: 18, name: "Daffodil" },
    CatalogEntry { id: 20, name: "Leek" },
    CatalogEntry { id: 22, name: "Dandelion" },
    CatalogEntry { id: 24, name: "Parsnip" },
    CatalogEntry { id: 78, name: "Cave Carrot" },
    CatalogEntry { id: 88, name: "Coconut" },
    CatalogEntry { id: 90, name: "Cactus Fruit" },
    CatalogEntry { id: 92, name: "Sap" },
    CatalogEntry { id: 174, name: "Large Egg (White)" },
    CatalogEntry { id: 176, name: "Egg (White)" },
    CatalogEntry { id: 180, name: "Egg (Brown)" },
    CatalogEntry { id: 182, name: "Large Egg (Brown)" },
    CatalogEntry { id: 184, name: "Milk" },
    CatalogEntry { id: 186, name: "Large Milk" },
    CatalogEntry { id: 188, name: "Green Bean" },
    CatalogEntry { id: 190, name: "Cauliflower" },
    CatalogEntry { id: 192, name: "Potato" },
    CatalogEntry { id: 248, name: "Garlic" },
    CatalogEntry { id: 250, name: "Kale" },
    CatalogEntry { id: 252, name: "Rhubarb" },
    CatalogEntry { id: 254, name: "Melon" },
    CatalogEntry { id: 256, name: "Tomato" },
    CatalogEntry { id: 257, name: "Morel" },
    CatalogEntry { id: 258, name: "Blueberry" },
    CatalogEntry { id: 259, name: "Fiddlehead Fern" },
    CatalogEntry { id: 260, name: "Hot Pepper" },
    CatalogEntry { id: 262, name: "Wheat" },
    CatalogEntry { id: 264, name: "Radish" },
    CatalogEntry { id: 266, name: "Red Cabbage" },
    CatalogEntry { id: 268, name: "Starfruit" },
    CatalogEntry { id: 270, name: "Corn" },
    CatalogEntry { id: 272, name: "Eggplant" },
    CatalogEntry { id: 274, name: "Artichoke" },
    CatalogEntry { id: 276, name: "Pumpkin" },
    CatalogEntry { id: 278, name: "Bok Choy" },
    CatalogEntry { id: 280, name: "Yam" },
    CatalogEntry { id: 281, name: "Chanterelle" },
    CatalogEntry { id: 282, name: "Cranberries" },
    CatalogEntry { id: 283, name: "Holly" },
    CatalogEntry { id: 284, name: "Beet" },
    CatalogEntry { id: 296, name: "Salmonberry" },
    CatalogEntry { id: 300, name: "Amaranth" },
    CatalogEntry { id: 303, name: "Pale Ale" },
    CatalogEntry { id: 304, name: "Hops" },
    CatalogEntry { id: 305, name: "Void Egg" },
    CatalogEntry { id: 306, name: "Mayonnaise" },
    CatalogEntry { id: 307, name: "Duck Mayonnaise" },
    CatalogEntry { id: 308, name: "Void Mayonnaise" },
    CatalogEntry { id: 330, name: "Clay" },
    CatalogEntry { id: 334, name: "Copper Bar" },
    CatalogEntry { id: 335, name: "Iron Bar" },
    CatalogEntry { id: 336, name: "Gold Bar" },
    CatalogEntry { id: 337, name: "Iridium Bar" },
    CatalogEntry { id: 338, name: "Refined Quartz" },
    CatalogEntry { id: 340, name: "Honey" },
    CatalogEntry { id: 342, name: "Pickles" },
    CatalogEntry { id: 344, name: "Jelly" },
    CatalogEntry { id: 346, name: "Beer" },
    CatalogEntry { id: 348, name: "Wine" },
    CatalogEntry { id: 350, name: "Juice" },
    CatalogEntry { id: 372, name: "Clam" },
    CatalogEntry { id: 376, name: "Poppy" },
    CatalogEntry { id: 378, name: "Copper Ore" },
    CatalogEntry { id: 380, name: "Iron Ore" },
    CatalogEntry { id: 382, name: "Coal" },
    CatalogEntry { id: 384, name: "Gold Ore" },
    CatalogEntry { id: 386, name: "Iridium Ore" },
    CatalogEntry { id: 388, name: "Wood" },
    CatalogEntry { id: 390, name: "Stone" },
    CatalogEntry { id: 392, name: "Nautilus Shell" },
    CatalogEntry { id: 393, name: "Coral" },
    CatalogEntry { id: 394, name: "Rainbow Shell" },
    CatalogEntry { id: 396, name: "Spice Berry" },
    CatalogEntry { id: 397, name: "Sea Urchin" },
    CatalogEntry { id: 398, name: "Grape" },
    CatalogEntry { id: 399, name: "Spring Onion" },
    CatalogEntry { id: 400, name: "Strawberry" },
    CatalogEntry { id: 402, name: "Sweet Pea" },
    CatalogEntry { id: 404, name: "Common Mushroom" },
    CatalogEntry { id: 406, name: "Wild Plum" },
    CatalogEntry { id: 408, name: "Hazelnut" },
    CatalogEntry { id: 410, name: "Blackberry" },
    CatalogEntry { id: 412, name: "Winter Root" },
    CatalogEntry { id: 414, name: "Crystal Fruit" },
    CatalogEntry { id: 416, name: "Snow Yam" },
    CatalogEntry { id: 417, name: "Sweet Gem Berry" },
    CatalogEntry { id: 418, name: "Crocus" },
    CatalogEntry { id: 420, name: "Red Mushroom" },
    CatalogEntry { id: 421, name: "Sunflower" },
    CatalogEntry { id: 422, name: "Purple Mushroom" },
    CatalogEntry { id: 424, name: "Cheese" },
    CatalogEntry { id: 426, name: "Goat Cheese" },
    CatalogEntry { id: 428, name: "Cloth" },
    CatalogEntry { id: 430, name: "Truffle" },
    CatalogEntry { id: 432, name: "Truffle Oil" },
    CatalogEntry { id: 433, name: "Coffee Bean" },
    CatalogEntry { id: 436, name: "Goat Milk" },
    CatalogEntry { id: 438, name: "Large Goat Milk" },
    CatalogEntry { id: 440, name: "Wool" },
    CatalogEntry { id: 442, name: "Duck Egg" },
    CatalogEntry { id: 444, name: "Duck Feather" },
    CatalogEntry { id: 446, name: "Rabbit's Foot" },
    CatalogEntry { id: 454, name: "Ancient Fruit" },
    CatalogEntry { id: 459, name: "Mead" },
    CatalogEntry { id: 591, name: "Tulip" },
    CatalogEntry { id: 593, name: "Summer Spangle" },
    CatalogEntry { id: 595, name: "Fairy Rose" },
    CatalogEntry { id: 597, name: "Blue Jazz" },
    CatalogEntry { id: 613, name: "Apple" },
    CatalogEntry { id: 634, name: "Apricot" },
    CatalogEntry { id: 635, name: "Orange" },
    CatalogEntry { id: 636, name: "Peach" },
    CatalogEntry { id: 637, name: "Pomegranate" },
    CatalogEntry { id: 638, name: "Cherry" },
    CatalogEntry { id: 684, name: "Bug Meat" },
    CatalogEntry { id: 709, name: "Hardwood" },
    CatalogEntry { id: 724, name: "Maple Syrup" },
    CatalogEntry { id: 725, name: "Oak Resin" },
    CatalogEntry { id: 726, name: "Pine Tar" },
    CatalogEntry { id: 766, name: "Slime" },
    CatalogEntry { id: 767, name: "Bat Wing" },
    CatalogEntry { id: 768, name: "Solar Essence" },
    CatalogEntry { id: 769, name: "Void Essence" },
    CatalogEntry { id: 771, name: "Fiber" },
    CatalogEntry { id: 787, name: "Battery Pack" },
];

/// Crops that must each be shipped 15 times for Polyculture.
pub const POLYCULTURE_CROPS: &[CatalogEntry<ItemId>] = &[
    // Vegetables (all but Fiddlehead Fern)
    CatalogEntry { id: 24, name: "Parsnip" },
    CatalogEntry { id: 188, name: "Green Bean" },
    CatalogEntry { id: 190, name: "Cauliflower" },
    CatalogEntry { id: 192, name: "Potato" },
    CatalogEntry { id: 248, name: "Garlic" },
    CatalogEntry { id: 250, name: "Kale" },
    CatalogEntry { id: 256, name: "Tomato" },
    CatalogEntry { id: 262, name: "Wheat" },
    CatalogEntry { id: 264, name: "Radish" },
    CatalogEntry { id: 266, name: "Red Cabbage" },
    CatalogEntry { id: 270, name: "Corn" },
    CatalogEntry { id: 272, name: "Eggplant" },
    CatalogEntry { id: 274, name: "Artichoke" },
    CatalogEntry { id: 276, name: "Pumpkin" },
    CatalogEntry { id: 278, name: "Bok Choy" },
    CatalogEntry { id: 280, name: "Yam" },
    CatalogEntry { id: 284, name: "Beet" },
    CatalogEntry { id: 300, name: "Amaranth" },
    CatalogEntry { id: 304, name: "Hops" },
    // Fruit (all but Ancient Fruit, tree fruit and forageables)
    CatalogEntry { id: 252, name: "Rhubarb" },
    CatalogEntry { id: 254, name: "Melon" },
    CatalogEntry { id: 258, name: "Blueberry" },
    CatalogEntry { id: 260, name: "Hot Pepper" },
    CatalogEntry { id: 268, name: "Starfruit" },
    CatalogEntry { id: 282, name: "Cranberries" },
    CatalogEntry { id: 398, name: "Grape" },
    CatalogEntry { id: 400, name: "Strawberry" },
    // Other
    CatalogEntry { id: 433, name: "Coffee Bean" },
];

/// Crops that count for Monoculture but not for Polyculture.
pub const MONOCULTURE_EXTRAS: &[CatalogEntry<ItemId>] = &[
    CatalogEntry { id: 454, name: "Ancient Fruit" },
    CatalogEntry { id: 591, name: "Tulip" },
    CatalogEntry { id: 593, name: "Summer Spangle" },
    CatalogEntry { id: 595, name: "Fairy Rose" },
    CatalogEntry { id: 597, name: "Blue Jazz" },
];
