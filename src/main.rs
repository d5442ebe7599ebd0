use clap::Parser;
use rand::rngs::ThreadRng;

use nutrisleuth::cli::{Cli, Command};
use nutrisleuth::error::Result;
use nutrisleuth::gi::{GeminiClient, GiProvider};
use nutrisleuth::interface::{
    display_food_card, display_saved_list, prompt_menu_action, prompt_saved_selection,
    prompt_search_query, prompt_yes_no, suggest_saved_match, MenuAction,
};
use nutrisleuth::session::{perform_search, SearchSession};
use nutrisleuth::state::{FileStore, SavedFoods};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Session => cmd_session(&cli.data_dir, cli.model),
        Command::Search { query } => cmd_search(&cli.data_dir, cli.model, &query),
        Command::Saved => cmd_saved(&cli.data_dir),
        Command::Remove { id } => cmd_remove(&cli.data_dir, &id),
    }
}

/// Interactive lookup session: search, view the card, manage the saved list.
fn cmd_session(data_dir: &str, model: Option<String>) -> Result<()> {
    let provider = GeminiClient::from_env(model)?;
    log::debug!("using Gemini model '{}'", provider.model());
    let mut saved = SavedFoods::load(FileStore::new(data_dir));
    let mut session = SearchSession::new();
    let mut rng = rand::thread_rng();

    println!("NutriSleuth ({} saved foods)", saved.len());
    println!();

    loop {
        match prompt_menu_action()? {
            MenuAction::Search => run_search(&provider, &mut rng, &mut session, &mut saved)?,
            MenuAction::ViewSaved => browse_saved(&mut session, &mut saved)?,
            MenuAction::Quit => break,
        }
    }

    Ok(())
}

/// One search round: prompt, look up, display, offer the save toggle.
fn run_search(
    provider: &dyn GiProvider,
    rng: &mut ThreadRng,
    session: &mut SearchSession,
    saved: &mut SavedFoods<FileStore>,
) -> Result<()> {
    let Some(query) = prompt_search_query()? else {
        return Ok(());
    };

    // A close saved match can answer without spending an AI call
    if let Some(hit) = suggest_saved_match(&query, saved.list()) {
        let item = hit.clone();
        let reuse = prompt_yes_no(
            &format!("'{}' is in your saved list. View it instead?", item.name),
            true,
        )?;
        if reuse {
            display_food_card(&item);
            session.set_current(item);
            return Ok(());
        }
    }

    let ticket = session.begin_search();
    println!("Estimating Glycemic Index for '{}'...", query);

    match perform_search(provider, rng, &query) {
        Ok(item) => {
            if session.apply_result(ticket, item.clone()) {
                println!("Search successful. Displaying information for {}.", query);
                display_food_card(&item);
                offer_save_toggle(&item, saved)?;
            }
        }
        Err(e) => {
            log::error!("search for '{}' failed: {}", query, e);
            session.clear_current();
            println!("Search failed: {}", e);
        }
    }

    Ok(())
}

/// Save/unsave toggle on the current result.
fn offer_save_toggle(
    item: &nutrisleuth::FoodItem,
    saved: &mut SavedFoods<FileStore>,
) -> Result<()> {
    if saved.contains(&item.id) {
        let unsave = prompt_yes_no("Remove this food from your saved list?", false)?;
        if unsave && saved.remove(&item.id)? {
            println!("The item has been removed from your saved list.");
        }
    } else {
        let save = prompt_yes_no("Save this food to your list?", true)?;
        if save && saved.add(item.clone())? {
            println!("{} has been added to your saved list.", item.name);
        }
    }
    Ok(())
}

/// Browse the saved list; selecting an item makes it the current result.
fn browse_saved(session: &mut SearchSession, saved: &mut SavedFoods<FileStore>) -> Result<()> {
    display_saved_list(saved.list());

    if saved.is_empty() {
        return Ok(());
    }

    let Some(index) = prompt_saved_selection(saved.list())? else {
        return Ok(());
    };

    let item = saved.list()[index].clone();
    println!("Selected {}. Displaying details for your saved item.", item.name);
    display_food_card(&item);
    session.set_current(item.clone());

    let remove = prompt_yes_no("Remove this food from your saved list?", false)?;
    if remove && saved.remove(&item.id)? {
        println!("The item has been removed from your saved list.");
    }

    Ok(())
}

/// One-shot lookup for a single food.
fn cmd_search(data_dir: &str, model: Option<String>, query: &str) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        eprintln!("Query must not be empty.");
        return Ok(());
    }

    let provider = GeminiClient::from_env(model)?;
    log::debug!("using Gemini model '{}'", provider.model());
    let mut saved = SavedFoods::load(FileStore::new(data_dir));
    let mut rng = rand::thread_rng();

    println!("Estimating Glycemic Index for '{}'...", query);
    let item = perform_search(&provider, &mut rng, query)?;

    display_food_card(&item);
    offer_save_toggle(&item, &mut saved)?;

    Ok(())
}

/// Print the saved list.
fn cmd_saved(data_dir: &str) -> Result<()> {
    let saved = SavedFoods::load(FileStore::new(data_dir));
    display_saved_list(saved.list());
    Ok(())
}

/// Remove a saved food by id.
fn cmd_remove(data_dir: &str, id: &str) -> Result<()> {
    let mut saved = SavedFoods::load(FileStore::new(data_dir));

    if saved.remove(id)? {
        println!("Removed '{}'.", id);
    } else {
        println!("No saved food with id '{}'.", id);
    }

    Ok(())
}
