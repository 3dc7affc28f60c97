use crate::models::{Catalog, MenuItem};
use crate::shopping::constants::FALLBACK_CATEGORY;

/// Where an ingredient sits on the dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Inside,
    OnTop,
}

/// One ingredient line of a recipe card.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeLine {
    pub name: String,
    pub placement: Placement,
    pub category: String,
    pub store: String,
    pub in_catalog: bool,
}

/// A dish with its ingredients resolved against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe<'a> {
    pub item: &'a MenuItem,
    pub lines: Vec<RecipeLine>,
}

impl Recipe<'_> {
    pub fn inside(&self) -> impl Iterator<Item = &RecipeLine> {
        self.lines.iter().filter(|l| l.placement == Placement::Inside)
    }

    pub fn on_top(&self) -> impl Iterator<Item = &RecipeLine> {
        self.lines.iter().filter(|l| l.placement == Placement::OnTop)
    }
}

pub fn recipe<'a>(catalog: &Catalog, item: &'a MenuItem) -> Recipe<'a> {
    let inside = item.ingredients_inside.iter().map(|n| (n, Placement::Inside));
    let on_top = item.ingredients_on_top.iter().map(|n| (n, Placement::OnTop));

    let lines = inside
        .chain(on_top)
        .map(|(name, placement)| (name.trim(), placement))
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, placement)| match catalog.ingredient(name) {
            Some(ing) => RecipeLine {
                name: ing.name.clone(),
                placement,
                category: if ing.category.trim().is_empty() {
                    FALLBACK_CATEGORY.to_string()
                } else {
                    ing.category.clone()
                },
                store: ing.store.clone(),
                in_catalog: true,
            },
            None => RecipeLine {
                name: name.to_string(),
                placement,
                category: FALLBACK_CATEGORY.to_string(),
                store: String::new(),
                in_catalog: false,
            },
        })
        .collect();

    Recipe { item, lines }
}
