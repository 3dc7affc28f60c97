use std::path::Path;

use crate::error::Result;
use crate::shopping::{estimate_cost, ShoppingPartition};

/// Write the shopping list to a CSV file, one row per ingredient.
///
/// Ingredients to buy come first, then the ones already on hand.
pub fn write_shopping_csv(split: &ShoppingPartition, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "category",
        "name",
        "store",
        "quantity",
        "already_have",
        "estimated_cost",
    ])?;

    let rows = split
        .need
        .iter()
        .map(|item| (item, false))
        .chain(split.have.iter().map(|item| (item, true)));
    for (item, on_hand) in rows {
        wtr.write_record([
            item.category.clone(),
            item.name.clone(),
            item.store.clone(),
            item.total_qty.to_string(),
            on_hand.to_string(),
            estimate_cost(item)
                .map(|c| format!("{:.2}", c))
                .unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    tracing::info!(
        path = %path.display(),
        need = split.need.len(),
        have = split.have.len(),
        "shopping list exported"
    );
    Ok(())
}
