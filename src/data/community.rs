//! Community Center rooms, their bundles, and the Joja equivalents.
//!
//! Room order matches the `areasComplete` flags in the save. Each room that
//! Joja can replace has a development project; the Bulletin Board has none.

/// A bundle and the number of item slots it needs.
pub struct BundleDef {
    pub id: u32,
    pub name: &'static str,
    pub slots: u32,
}

/// A Joja Community Development project.
pub struct JojaProject {
    pub name: &'static str,
    pub price: &'static str,
    /// Mail flag the save receives once the project is purchased.
    pub mail_flag: &'static str,
}

pub struct RoomDef {
    pub name: &'static str,
    /// Mail flag set when the room is restored through bundles.
    pub mail_flag: &'static str,
    pub joja: Option<JojaProject>,
    pub bundles: &'static [BundleDef],
}

pub const JOJA_MEMBER_FLAG: &str = "JojaMember";

/// Re-opening ceremony at the Community Center.
pub const COMMUNITY_CENTER_CEREMONY: &str = "191393";

/// Completion ceremony at the Joja warehouse.
pub const JOJA_CEREMONY: &str = "502261";

/// Projects on the Community Development Form for a save that never
/// restored a room.
pub const JOJA_PROJECT_COUNT: u32 = 5;

/// Index of the Bulletin Board in [`ROOMS`].
pub const BULLETIN_BOARD: usize = 5;

pub const ROOMS: [RoomDef; 6] = [
    RoomDef {
        name: "Pantry",
        mail_flag: "ccPantry",
        joja: Some(JojaProject {
            name: "Greenhouse",
            price: "35,000g",
            mail_flag: "jojaPantry",
        }),
        bundles: &[
            BundleDef { id: 0, name: "Spring Crops", slots: 4 },
            BundleDef { id: 1, name: "Summer Crops", slots: 4 },
            BundleDef { id: 2, name: "Fall Crops", slots: 4 },
            BundleDef { id: 3, name: "Quality Crops", slots: 3 },
            BundleDef { id: 4, name: "Animal", slots: 5 },
            BundleDef { id: 5, name: "Artisan", slots: 6 },
        ],
    },
    RoomDef {
        name: "Crafts Room",
        mail_flag: "ccCraftsRoom",
        joja: Some(JojaProject {
            name: "Bridge",
            price: "25,000g",
            mail_flag: "jojaCraftsRoom",
        }),
        bundles: &[
            BundleDef { id: 13, name: "Spring Foraging", slots: 4 },
            BundleDef { id: 14, name: "Summer Foraging", slots: 3 },
            BundleDef { id: 15, name: "Fall Foraging", slots: 4 },
            BundleDef { id: 16, name: "Winter Foraging", slots: 4 },
            BundleDef { id: 17, name: "Construction", slots: 4 },
            BundleDef { id: 19, name: "Exotic Foraging", slots: 5 },
        ],
    },
    RoomDef {
        name: "Fish Tank",
        mail_flag: "ccFishTank",
        joja: Some(JojaProject {
            name: "Panning",
            price: "20,000g",
            mail_flag: "jojaFishTank",
        }),
        bundles: &[
            BundleDef { id: 6, name: "River Fish", slots: 4 },
            BundleDef { id: 7, name: "Lake Fish", slots: 4 },
            BundleDef { id: 8, name: "Ocean Fish", slots: 4 },
            BundleDef { id: 9, name: "Night Fishing", slots: 3 },
            BundleDef { id: 10, name: "Specialty Fish", slots: 4 },
            BundleDef { id: 11, name: "Crab Pot", slots: 5 },
        ],
    },
    RoomDef {
        name: "Boiler Room",
        mail_flag: "ccBoilerRoom",
        joja: Some(JojaProject {
            name: "Minecarts",
            price: "15,000g",
            mail_flag: "jojaBoilerRoom",
        }),
        bundles: &[
            BundleDef { id: 20, name: "Blacksmith's", slots: 3 },
            BundleDef { id: 21, name: "Geologist's", slots: 4 },
            BundleDef { id: 22, name: "Adventurer's", slots: 2 },
        ],
    },
    RoomDef {
        name: "Vault",
        mail_flag: "ccVault",
        joja: Some(JojaProject {
            name: "Bus",
            price: "40,000g",
            mail_flag: "jojaVault",
        }),
        bundles: &[
            BundleDef { id: 23, name: "2,500g", slots: 1 },
            BundleDef { id: 24, name: "5,000g", slots: 1 },
            BundleDef { id: 25, name: "10,000g", slots: 1 },
            BundleDef { id: 26, name: "25,000g", slots: 1 },
        ],
    },
    RoomDef {
        name: "Bulletin Board",
        mail_flag: "ccBulletin",
        joja: None,
        bundles: &[
            BundleDef { id: 31, name: "Chef's", slots: 6 },
            BundleDef { id: 32, name: "Field Research", slots: 4 },
            BundleDef { id: 33, name: "Enchanter's", slots: 4 },
            BundleDef { id: 34, name: "Dye", slots: 6 },
            BundleDef { id: 35, name: "Fodder", slots: 3 },
        ],
    },
];
