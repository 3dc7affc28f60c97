pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_shopping_csv;
pub use prompts::{is_interactive, prompt_already_have, prompt_menu_item, prompt_yes_no};
pub use render::{
    display_cart, display_event, display_menu, display_recipe, display_runbook,
    display_shopping_list,
};
