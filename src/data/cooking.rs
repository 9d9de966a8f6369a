//! Cooking recipes, keyed by the id of the dish they produce.
//!
//! The save lists *known* cooking recipes by name and *cooked* recipes by
//! dish id, so lookups by name go through [`super::names::COOKING_NAME_FIXES`]
//! first.

use super::{CatalogEntry, ItemId};

pub const COOKING_RECIPES: &[CatalogEntry<ItemId>] = &[
    CatalogEntry { id: 194, name: "Fried Egg" },
    CatalogEntry { id: 195, name: "Omelet" },
    CatalogEntry { id: 196, name: "Salad" },
    CatalogEntry { id: 197, name: "Cheese Cauliflower" },
    CatalogEntry { id: 198, name: "Baked Fish" },
    CatalogEntry { id: 199, name: "Parsnip Soup" },
    CatalogEntry { id: 200, name: "Vegetable Medley" },
    CatalogEntry { id: 201, name: "Complete Breakfast" },
    CatalogEntry { id: 202, name: "Fried Calamari" },
    CatalogEntry { id: 203, name: "Strange Bun" },
    CatalogEntry { id: 204, name: "Lucky Lunch" },
    CatalogEntry { id: 205, name: "Fried Mushroom" },
    CatalogEntry { id: 206, name: "Pizza" },
    CatalogEntry { id: 207, name: "Bean Hotpot" },
    CatalogEntry { id: 208, name: "Glazed Yams" },
    CatalogEntry { id: 209, name: "Carp Surprise" },
    CatalogEntry { id: 210, name: "Hashbrowns" },
    CatalogEntry { id: 211, name: "Pancakes" },
    CatalogEntry { id: 212, name: "Salmon Dinner" },
    CatalogEntry { id: 213, name: "Fish Taco" },
    CatalogEntry { id: 214, name: "Crispy Bass" },
    CatalogEntry { id: 215, name: "Pepper Poppers" },
    CatalogEntry { id: 216, name: "Bread" },
    CatalogEntry { id: 218, name: "Tom Kha Soup" },
    CatalogEntry { id: 219, name: "Trout Soup" },
    CatalogEntry { id: 220, name: "Chocolate Cake" },
    CatalogEntry { id: 221, name: "Pink Cake" },
    CatalogEntry { id: 222, name: "Rhubarb Pie" },
    CatalogEntry { id: 223, name: "Cookie" },
    CatalogEntry { id: 224, name: "Spaghetti" },
    CatalogEntry { id: 225, name: "Fried Eel" },
    CatalogEntry { id: 226, name: "Spicy Eel" },
    CatalogEntry { id: 227, name: "Sashimi" },
    CatalogEntry { id: 228, name: "Maki Roll" },
    CatalogEntry { id: 229, name: "Tortilla" },
    CatalogEntry { id: 230, name: "Red Plate" },
    CatalogEntry { id: 231, name: "Eggplant Parmesan" },
    CatalogEntry { id: 232, name: "Rice Pudding" },
    CatalogEntry { id: 233, name: "Ice Cream" },
    CatalogEntry { id: 234, name: "Blueberry Tart" },
    CatalogEntry { id: 235, name: "Autumn's Bounty" },
    CatalogEntry { id: 236, name: "Pumpkin Soup" },
    CatalogEntry { id: 237, name: "Super Meal" },
    CatalogEntry { id: 238, name: "Cranberry Sauce" },
    CatalogEntry { id: 239, name: "Stuffing" },
    CatalogEntry { id: 240, name: "Farmer's Lunch" },
    CatalogEntry { id: 241, name: "Survival Burger" },
    CatalogEntry { id: 242, name: "Dish O' The Sea" },
    CatalogEntry { id: 243, name: "Miner's Treat" },
    CatalogEntry { id: 244, name: "Roots Platter" },
    CatalogEntry { id: 456, name: "Algae Soup" },
    CatalogEntry { id: 457, name: "Pale Broth" },
    CatalogEntry { id: 604, name: "Plum Pudding" },
    CatalogEntry { id: 605, name: "Artichoke Dip" },
    CatalogEntry { id: 606, name: "Stir Fry" },
    CatalogEntry { id: 607, name: "Roasted Hazelnuts" },
    CatalogEntry { id: 608, name: "Pumpkin Pie" },
    CatalogEntry { id: 609, name: "Radish Salad" },
    CatalogEntry { id: 610, name: "Fruit Salad" },
    CatalogEntry { id: 611, name: "Blackberry Cobbler" },
    CatalogEntry { id: 612, name: "Cranberry Candy" },
    CatalogEntry { id: 618, name: "Bruschetta" },
    CatalogEntry { id: 648, name: "Coleslaw" },
    CatalogEntry { id: 649, name: "Fiddlehead Risotto" },
    CatalogEntry { id: 651, name: "Poppyseed Muffin" },
    CatalogEntry { id: 727, name: "Chowder" },
    CatalogEntry { id: 728, name: "Fish Stew" },
    CatalogEntry { id: 729, name: "Escargot" },
    CatalogEntry { id: 730, name: "Lobster Bisque" },
    CatalogEntry { id: 731, name: "Maple Bar" },
    CatalogEntry { id: 732, name: "Crab Cakes" },
];
