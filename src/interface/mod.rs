pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_menu_action, prompt_saved_selection, prompt_search_query, prompt_yes_no,
    suggest_saved_match, MenuAction,
};
pub use render::{display_food_card, display_saved_list};
