use crate::models::AggregatedIngredient;

/// Estimated spend for one ingredient.
///
/// Packaged goods are bought whole: with a purchase cost and a number of
/// uses per purchase, the estimate is the cost of enough packages. Otherwise
/// the per-use cost is multiplied out. Unpriced ingredients give `None`.
pub fn estimate_cost(item: &AggregatedIngredient) -> Option<f64> {
    match (item.cost, item.uses_per_purchase, item.unit_cost) {
        (Some(cost), Some(uses), _) if cost > 0.0 && uses > 0 => {
            let purchases = item.total_qty.div_ceil(uses);
            Some(purchases as f64 * cost)
        }
        (_, _, Some(unit_cost)) if unit_cost > 0.0 => Some(unit_cost * item.total_qty as f64),
        _ => None,
    }
}

/// Sum of the known estimates. Ingredients without a price contribute nothing.
pub fn estimate_total<'a, I>(items: I) -> f64
where
    I: IntoIterator<Item = &'a AggregatedIngredient>,
{
    items.into_iter().filter_map(estimate_cost).sum()
}

/// Count of ingredients with no price data.
pub fn unpriced_count<'a, I>(items: I) -> usize
where
    I: IntoIterator<Item = &'a AggregatedIngredient>,
{
    items
        .into_iter()
        .filter(|item| estimate_cost(item).is_none())
        .count()
}
