//! Category aggregation: bucket raw ids into named categories, sum, and
//! compare each category total against its goal.

use std::collections::BTreeMap;

use crate::data::CategoryGoal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNeed {
    pub category: &'static str,
    pub remaining: u64,
    pub representatives: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregation {
    /// Summed count for every goal category, including those at zero.
    pub per_category: BTreeMap<&'static str, u64>,
    pub completed: usize,
    pub total: usize,
    /// Unmet goals, sorted by category name.
    pub needed: Vec<CategoryNeed>,
}

impl Aggregation {
    pub fn is_complete(&self) -> bool {
        self.completed >= self.total
    }
}

/// Raw ids missing from `category_of` are ignored.
pub fn evaluate(
    raw_counts: &BTreeMap<String, u64>,
    category_of: &[(&'static str, &'static str)],
    goals: &[CategoryGoal],
) -> Aggregation {
    let mut per_category: BTreeMap<&'static str, u64> =
        goals.iter().map(|g| (g.category, 0)).collect();

    for (raw, count) in raw_counts {
        let Some((_, category)) = category_of.iter().find(|(id, _)| *id == raw.as_str()) else {
            continue;
        };
        let total = per_category.entry(*category).or_insert(0);
        *total = total.saturating_add(*count);
    }

    let mut completed = 0;
    let mut needed = Vec::new();
    for goal in goals {
        let have = per_category.get(goal.category).copied().unwrap_or(0);
        if have >= goal.goal {
            completed += 1;
        } else {
            needed.push(CategoryNeed {
                category: goal.category,
                remaining: goal.goal - have,
                representatives: goal.representatives,
            });
        }
    }
    needed.sort_by(|a, b| a.category.cmp(b.category));

    Aggregation {
        per_category,
        completed,
        total: goals.len(),
        needed,
    }
}
