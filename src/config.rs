use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "atlas", about = "Annotate a symbol inventory with placed bounding boxes")]
pub struct Cli {
    /// Inventory: JSON array of symbol records.
    #[arg(long, env = "ATLAS_INVENTORY", default_value = "inventory.json")]
    pub inventory: PathBuf,

    /// Attachment layout file.
    #[arg(long, env = "ATLAS_LAYOUT", default_value = "attachments.json")]
    pub layout: PathBuf,

    #[arg(long, env = "ATLAS_VIEWPORT_WIDTH", default_value_t = 800)]
    pub viewport_width: i64,

    #[arg(long, env = "ATLAS_VIEWPORT_HEIGHT", default_value_t = 600)]
    pub viewport_height: i64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the module/leaf tree; attached entities are marked `*`.
    Tree,
    /// Print the detail view of one inventory record.
    Show { id: String },
    /// Replay a JSON-lines event script against the engine.
    Replay {
        script: PathBuf,
        /// Write the resulting layout back to the layout file.
        #[arg(long)]
        save: bool,
    },
    /// Load inventory and layout and report what would be kept.
    Check,
}
