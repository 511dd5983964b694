//! CLI command definitions for the `shoplink` binary.
//!
//! Uses clap derive macros for argument parsing. Each subcommand maps to one
//! shop command of the host (`list`, `add`, `remove`, `modify`).

pub mod shop;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use shoplinker_types::shop::{OwnerId, ShopField};

/// Register, browse, and manage player shops.
#[derive(Parser)]
#[command(name = "shoplink", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Only log errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Act as this player identity (UUID) instead of the local identity.
    #[arg(long = "as", value_name = "UUID", env = "SHOPLINKER_ACTOR", global = true)]
    pub actor: Option<OwnerId>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all registered shops.
    #[command(alias = "ls")]
    List,

    /// Show details of a shop.
    Show {
        /// Shop name (case-insensitive).
        name: String,
    },

    /// Register a new shop owned by you.
    Add {
        /// Unique shop name.
        name: String,

        /// Short description.
        description: String,

        /// Optional http:// or https:// link.
        url: Option<String>,
    },

    /// Remove a shop you own.
    #[command(alias = "rm")]
    Remove {
        /// Shop name (case-insensitive).
        name: String,

        /// Skip confirmation prompt.
        #[arg(long)]
        force: bool,
    },

    /// Change the name, description, or url of a shop you own.
    Modify {
        /// Current shop name (case-insensitive).
        shop: String,

        /// Field to change: name, description, or url.
        field: ShopField,

        /// New value (an empty string clears the url).
        value: String,
    },

    /// Print the identity commands run as.
    Whoami,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
