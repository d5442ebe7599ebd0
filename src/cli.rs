use clap::{Parser, Subcommand};

/// NutriSleuth — look up foods, estimate their Glycemic Index, and keep a
/// saved list.
#[derive(Parser, Debug)]
#[command(name = "nutrisleuth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory where saved foods are persisted.
    #[arg(short, long, default_value = ".nutrisleuth")]
    pub data_dir: String,

    /// Gemini model for GI estimation (overrides GEMINI_MODEL).
    #[arg(short, long)]
    pub model: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive lookup session.
    Session,

    /// Look up a single food and exit.
    Search {
        /// Food name to look up.
        query: String,
    },

    /// List saved foods.
    Saved,

    /// Remove a saved food by id.
    Remove {
        /// Id of the saved food (e.g. "banana-bread").
        id: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Session
    }
}
