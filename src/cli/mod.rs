//! Command line surface for the back-office trash.
//!
//! One-shot commands cover a single action; `console` opens the interactive trash view.

pub mod commands;
pub mod console;
pub mod terminal;

use clap::{Args, Parser, Subcommand};

use crate::core::EntityKind;

pub use commands::run;

/// Sevadesk - trash, restore and purge storefront records
#[derive(Parser)]
#[command(name = "sevadesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List entity types and the API routes used for each
    Entities,

    /// List soft-deleted records
    Trash(ListArgs),

    /// List active records
    Active(ListArgs),

    /// Restore soft-deleted records
    Restore(RestoreArgs),

    /// Permanently delete a soft-deleted record
    Purge(PurgeArgs),

    /// Move an active record to the trash
    TrashItem(RecordArgs),

    /// Interactive trash view for one entity
    Console(EntityArgs),
}

#[derive(Args)]
pub struct EntityArgs {
    /// Entity type (blogs, pujas, bookings, categories, bracelets, rudraksha, participation-forms)
    pub entity: EntityKind,
}

#[derive(Args)]
pub struct ListArgs {
    pub entity: EntityKind,

    /// Case-insensitive filter on the entity's display fields
    #[arg(long, short)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct RecordArgs {
    pub entity: EntityKind,
    pub id: String,
}

#[derive(Args)]
pub struct RestoreArgs {
    pub entity: EntityKind,

    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args)]
pub struct PurgeArgs {
    pub entity: EntityKind,
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short)]
    pub yes: bool,
}
