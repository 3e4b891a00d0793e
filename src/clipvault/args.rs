use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clipvault")]
#[command(about = "Validate clipper settings and turn web clips into vault notes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file to use instead of the platform default
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the current settings
    Show,

    /// Update and save settings
    Set {
        /// Vault the notes are filed into
        #[arg(long)]
        vault: Option<String>,

        /// Folder template, e.g. "Browser Clippings/{title}"
        #[arg(long)]
        folder: Option<String>,

        /// Enable or disable advanced note content formatting
        #[arg(long)]
        advanced: Option<bool>,

        /// Note content template ({title}, {url}, {date}, {content})
        #[arg(long)]
        template: Option<String>,
    },

    /// Build the sample clip and print its obsidian:// URI
    Test,

    /// Build a clip and print its obsidian:// URI
    Clip {
        /// Note title
        #[arg(long)]
        title: String,

        /// Source page URL
        #[arg(long)]
        url: String,

        /// Clipped content
        #[arg(long, default_value = "")]
        content: String,

        /// Clip date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
}
