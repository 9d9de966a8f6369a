//! Spelling fixes between the save's recipe names and catalog names.
//!
//! The save abbreviates or re-capitalises a handful of recipe names. Every
//! name lookup goes through [`NameFixes::canonical`] first; a new mismatch is
//! a new row here, not a code change.

pub struct NameFixes(pub &'static [(&'static str, &'static str)]);

impl NameFixes {
    /// Returns the catalog spelling of `raw`, or `raw` itself when no fix is known.
    pub fn canonical<'a>(&self, raw: &'a str) -> &'a str {
        self.0
            .iter()
            .find(|(from, _)| *from == raw)
            .map(|(_, to)| *to)
            .unwrap_or(raw)
    }
}

pub const COOKING_NAME_FIXES: NameFixes = NameFixes(&[
    ("Cheese Cauli.", "Cheese Cauliflower"),
    ("Cookies", "Cookie"),
    ("Cran. Sauce", "Cranberry Sauce"),
    ("Dish o' The Sea", "Dish O' The Sea"),
    ("Eggplant Parm.", "Eggplant Parmesan"),
    ("Vegetable Stew", "Vegetable Medley"),
]);

pub const CRAFTING_NAME_FIXES: NameFixes = NameFixes(&[
    ("Oil Of Garlic", "Oil of Garlic"),
]);
