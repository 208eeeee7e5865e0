use clap::{Parser, Subcommand};
use enchengeria_types::{LanguageScope, SortMode};

#[derive(Parser, Debug)]
#[command(name = "enchengeria")]
#[command(about = "Ekegusii / Kiswahili / English dictionary")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
    /// Profile to read configuration from
    #[arg(long, short, global = true, default_value = "main")]
    pub profile: String,

    /// Verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Keep favorites, history and word of the day in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Subcommand to execute (interactive if omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search the dictionary
    Search {
        /// Text to look for, empty lists everything
        #[arg(default_value = "")]
        query: String,

        /// all, ekegusii, kiswahili or english
        #[arg(long)]
        scope: Option<LanguageScope>,

        /// Exact part of speech, e.g. "noun"
        #[arg(long)]
        pos: Option<String>,

        /// alphabetical, recent or popular
        #[arg(long)]
        sort: Option<SortMode>,

        /// Count the query and add it to the search history
        #[arg(long)]
        record: bool,
    },
    /// Show a full entry
    Show { headword: String },
    /// Toggle a favorite
    Favorite { headword: String },
    /// List favorites
    Favorites,
    /// Recent searches with their counts
    History,
    /// Today's word
    WordOfDay,
    /// Parts of speech in the dictionary
    Pos,
    /// Copy an entry to the clipboard
    Copy { headword: String },
    /// Line-based interactive session
    Interactive,
    /// Manage configuration profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

/// Profile subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ProfileAction {
    /// Create a profile copied from `main`
    Add { name: String },
}
