use std::collections::BTreeSet;

use crate::model::Meal;

/// Derives the filter vocabulary from a meal list: every distinct
/// `area` value, deduplicated and sorted ascending.
///
/// Pure and order-independent, so permuting the input never changes
/// the output.
pub fn build_vocabulary(meals: &[Meal]) -> Vec<String> {
    meals
        .iter()
        .map(|meal| meal.area.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
