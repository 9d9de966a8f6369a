//! Adventurer's Guild monster eradication goals.
//!
//! The game counts a few monsters that never spawn in the released content;
//! they map to a category so their kills are summed, but they are not shown
//! as representatives.

use super::CategoryGoal;

pub const ERADICATION_GOALS: &[CategoryGoal] = &[
    CategoryGoal {
        category: "Slimes",
        goal: 1_000,
        representatives: &["Green Slime", "Frost Jelly", "Sludge"],
    },
    CategoryGoal {
        category: "Void Spirits",
        goal: 150,
        representatives: &["Shadow Brute", "Shadow Shaman"],
    },
    CategoryGoal {
        category: "Bats",
        goal: 200,
        representatives: &["Bat", "Frost Bat", "Lava Bat"],
    },
    CategoryGoal {
        category: "Skeletons",
        goal: 50,
        representatives: &["Skeleton"],
    },
    CategoryGoal {
        category: "Cave Insects",
        goal: 125,
        representatives: &["Bug", "Cave Fly", "Grub"],
    },
    CategoryGoal {
        category: "Duggies",
        goal: 30,
        representatives: &["Duggy"],
    },
    CategoryGoal {
        category: "Dust Sprites",
        goal: 500,
        representatives: &["Dust Spirit"],
    },
];

/// Save-file monster name → eradication category.
pub const MONSTER_CATEGORIES: &[(&str, &str)] = &[
    ("Green Slime", "Slimes"),
    ("Frost Jelly", "Slimes"),
    ("Sludge", "Slimes"),
    ("Shadow Brute", "Void Spirits"),
    ("Shadow Shaman", "Void Spirits"),
    ("Shadow Guy", "Void Spirits"), // unreleased
    ("Bat", "Bats"),
    ("Frost Bat", "Bats"),
    ("Lava Bat", "Bats"),
    ("Skeleton", "Skeletons"),
    ("Skeleton Mage", "Skeletons"), // unreleased
    ("Bug", "Cave Insects"),
    ("Fly", "Cave Insects"), // shown as "Cave Fly"
    ("Grub", "Cave Insects"),
    ("Duggy", "Duggies"),
    ("Dust Spirit", "Dust Sprites"),
];

/// Deepest level of the regular mines; anything deeper is the Skull Cavern.
pub const MINE_BOTTOM: u64 = 120;
