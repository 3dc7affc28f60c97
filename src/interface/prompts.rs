use std::io::IsTerminal;

use dialoguer::{Confirm, MultiSelect, Select};

use crate::error::Result;
use crate::models::{MenuItem, ShoppingList};
use crate::shopping::AlreadyHaveSet;

/// True when stdin is a terminal and prompts can be shown.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Ask the user which of the close matches they meant.
///
/// One suggestion is confirmed yes/no; several are offered as a list with a
/// "None of these" escape.
pub fn prompt_menu_item<'a>(typed: &str, suggestions: &[&'a MenuItem]) -> Result<Option<&'a MenuItem>> {
    match suggestions {
        [] => Ok(None),
        [only] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}' ({})?", only.name, only.category))
                .default(true)
                .interact()?;
            Ok(confirm.then_some(*only))
        }
        many => {
            let mut options: Vec<String> = many
                .iter()
                .map(|item| format!("{} ({})", item.name, item.category))
                .collect();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt(format!("Which dish did you mean by '{}'?", typed))
                .items(&options)
                .default(0)
                .interact()?;

            Ok(many.get(selection).copied())
        }
    }
}

/// Let the user tick everything they already have.
///
/// Returns the new already-have set. Marks for ingredients no longer on the
/// list are kept.
pub fn prompt_already_have(list: &ShoppingList, current: &AlreadyHaveSet) -> Result<AlreadyHaveSet> {
    let items: Vec<_> = list.items().collect();
    let labels: Vec<String> = items
        .iter()
        .map(|item| format!("{} x{} ({})", item.name, item.total_qty, item.category))
        .collect();
    let defaults: Vec<bool> = items.iter().map(|item| current.has(item)).collect();

    let chosen = MultiSelect::new()
        .with_prompt("Mark what you already have (space to toggle, enter to confirm)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    let on_list: Vec<String> = items.iter().map(|item| item.already_have_key()).collect();

    let mut updated = AlreadyHaveSet::new();
    for key in current.iter().filter(|key| !on_list.iter().any(|k| k.as_str() == *key)) {
        updated.toggle(key);
    }
    for idx in chosen {
        updated.toggle(on_list[idx].clone());
    }

    Ok(updated)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
