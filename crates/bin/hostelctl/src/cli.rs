//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hostel_domain::id::RecordId;

/// Front-desk client for the hostel API.
#[derive(Debug, Parser)]
#[command(name = "hostelctl", version, about)]
pub struct Cli {
    /// Config file (defaults to `hostelctl.toml` when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// API base address, overriding config and environment.
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage rooms.
    Rooms {
        #[command(subcommand)]
        action: RoomAction,
    },
    /// Manage guests.
    Guests {
        #[command(subcommand)]
        action: CrudAction,
    },
    /// Manage bookings.
    Bookings {
        #[command(subcommand)]
        action: BookingAction,
    },
    /// Resolve a client-side path and print the page's loaded data.
    Open {
        /// Path such as `/rooms/7/edit`.
        path: String,
    },
    /// Print the route table.
    Routes,
}

/// Calls every resource supports.
#[derive(Debug, Subcommand)]
pub enum CrudAction {
    /// List all records.
    List,
    /// Fetch one record.
    Get { id: RecordId },
    /// Create a record from a JSON object.
    Create { json: String },
    /// Replace a record with a JSON object.
    Update { id: RecordId, json: String },
    /// Delete a record.
    Delete { id: RecordId },
}

#[derive(Debug, Subcommand)]
pub enum RoomAction {
    #[command(flatten)]
    Crud(CrudAction),
    /// List rooms currently available.
    Available,
    /// Occupancy counts.
    Stats,
}

#[derive(Debug, Subcommand)]
pub enum BookingAction {
    #[command(flatten)]
    Crud(CrudAction),
    /// Today's check-ins and check-outs.
    Today,
}
