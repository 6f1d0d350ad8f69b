use clap::{Parser, Subcommand};
use std::path::PathBuf;
use taskboard_domain::{Status, TaskId};

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "A drag-and-drop task board for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the task file (or set TASKBOARD_DATA_DIR)
    #[arg(long, value_name = "DIR", env = "TASKBOARD_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file to use instead of the platform default
    #[arg(long, value_name = "FILE", env = "TASKBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Without a command the interactive board opens
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// todo, doing or done
        #[arg(long, default_value = "todo")]
        status: Status,
    },
    /// List tasks in board order
    List {
        #[arg(long)]
        status: Option<Status>,
    },
    /// Move a task to another column
    Move {
        #[arg(long)]
        id: TaskId,
        #[arg(long)]
        status: Status,
    },
    /// Delete a task
    Delete {
        #[arg(long)]
        id: TaskId,
    },
    /// Remove every task
    Clear,
}
