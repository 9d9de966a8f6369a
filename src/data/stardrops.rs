use super::CatalogEntry;

/// Stardrops, keyed by the mail flag the save receives when one is eaten.
/// The display name is a hint on where to find it.
pub const STARDROPS: &[CatalogEntry<&str>] = &[
    CatalogEntry { id: "CF_Fair", name: "Purchased at the Stardew Valley Fair for 2000 star tokens." },
    CatalogEntry { id: "CF_Mines", name: "Found in the chest on mine level 100." },
    CatalogEntry { id: "CF_Spouse", name: "Randomly given by spouse at 13/12 hearts." },
    CatalogEntry { id: "CF_Sewer", name: "Purchased from Krobus in the Sewers for 20,000g." },
    CatalogEntry { id: "CF_Statue", name: "Received from the Old Master Cannoli statue in the Secret Woods in exchange for a Sweet Gem Berry." },
    CatalogEntry { id: "CF_Fish", name: "Mailed by Willy after catching all the different fish." },
    CatalogEntry { id: "museumComplete", name: "Reward for completing the Museum collection." },
];
