// Command-line argument definitions.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gtasks", version, about = "Command-line interface for Google Tasks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Task list selector shared by commands that target one list.
///
/// Id and title are mutually exclusive; with neither, the configured default
/// task list title is used.
#[derive(Args, Debug)]
pub struct Selector {
    /// Id of the task list to operate on
    #[arg(
        short = 't',
        long = "tasklist-id",
        value_name = "ID",
        conflicts_with = "tasklist_title"
    )]
    pub tasklist_id: Option<String>,

    /// Title of the task list to operate on
    #[arg(short = 'T', long = "tasklist-title", value_name = "TITLE")]
    pub tasklist_title: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all task lists
    Lists {
        /// Maximum number of task lists to display
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Include task list ids in the output
        #[arg(long)]
        show_ids: bool,
    },

    /// List tasks from a task list
    Tasks {
        #[command(flatten)]
        selector: Selector,

        /// Maximum number of tasks to display
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Include task ids in the output
        #[arg(long)]
        show_ids: bool,
    },

    /// Add a new task
    Add {
        /// Title of the task to create
        title: String,

        #[command(flatten)]
        selector: Selector,

        /// Notes for the task
        #[arg(short, long)]
        notes: Option<String>,

        /// Due date for the task (RFC 3339 format)
        #[arg(short, long, value_name = "RFC3339")]
        due: Option<String>,
    },

    /// Delete a task
    Delete {
        /// Id of the task to delete
        task_id: String,

        #[command(flatten)]
        selector: Selector,
    },

    /// Interactively set the default task list
    SetDefault,
}
