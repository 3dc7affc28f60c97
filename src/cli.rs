use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Sushi Planner: browse the menu, build a cart, and plan the shopping and prep.
#[derive(Parser, Debug)]
#[command(name = "sushi_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the catalog JSON file (overrides config).
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Path to the session JSON file (overrides config).
    #[arg(short, long, global = true)]
    pub session: Option<PathBuf>,

    /// Path to a TOML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List menu items, optionally filtered.
    Menu {
        /// Only show one category, e.g. "Maki Rolls".
        #[arg(long)]
        category: Option<String>,

        /// Match dish names and ingredients.
        #[arg(long)]
        search: Option<String>,

        /// Only dishes without meat or fish.
        #[arg(long)]
        veggie: bool,
    },

    /// Show the recipe card of a dish.
    Recipe {
        name: String,

        /// Disambiguate dishes sharing a name.
        #[arg(long)]
        category: Option<String>,
    },

    /// Show or change the cart.
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },

    /// Show the shopping list derived from the cart.
    Shopping {
        /// Also write the list to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Toggle "already have" marks on shopping list ingredients.
    Have {
        /// Ingredient names to toggle.
        names: Vec<String>,

        /// Pick from the whole list.
        #[arg(short, long)]
        interactive: bool,

        /// Remove every mark.
        #[arg(long, conflicts_with_all = ["names", "interactive"])]
        clear: bool,
    },

    /// Show the preparation timeline.
    Runbook {
        /// Show advanced steps instead of beginner steps.
        #[arg(long)]
        advanced: bool,

        /// Hide completed tasks.
        #[arg(long)]
        pending: bool,
    },

    /// Print a share link for the current cart as an event menu.
    Share {
        /// Event title shown to guests.
        #[arg(long, default_value = "Sushi Night")]
        title: String,
    },

    /// Open a shared event menu link.
    Open {
        /// Share link or bare token.
        link: String,

        /// Replace the cart with the event's dishes.
        #[arg(long)]
        load: bool,
    },
}

#[derive(Subcommand, Debug, Default)]
pub enum CartAction {
    /// List cart contents.
    #[default]
    Show,

    /// Add one of a dish.
    Add {
        name: String,

        #[arg(long)]
        category: Option<String>,
    },

    /// Remove a dish entirely.
    Remove {
        name: String,

        #[arg(long)]
        category: Option<String>,
    },

    /// Set the quantity of a dish already in the cart (below 1 removes it).
    Set {
        name: String,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,

        #[arg(long)]
        category: Option<String>,
    },

    /// Empty the cart.
    Clear,
}

impl Default for Command {
    fn default() -> Self {
        Command::Menu {
            category: None,
            search: None,
            veggie: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cart_set_negative() {
        let cli = Cli::parse_from(["sushi_planner", "cart", "set", "Dragon Roll", "-1"]);
        match cli.command {
            Some(Command::Cart {
                action: Some(CartAction::Set { name, quantity, .. }),
            }) => {
                assert_eq!(name, "Dragon Roll");
                assert_eq!(quantity, -1);
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["sushi_planner", "shopping", "--catalog", "x.json", "-vv"]);
        assert_eq!(cli.catalog, Some(PathBuf::from("x.json")));
        assert_eq!(cli.verbose, 2);
    }
}
