//! Command-line front end for the Ticklist core.
//!
//! # Responsibility
//! - Map the task-list gestures (form submit, checkbox toggle, delete
//!   glyph, delete-checked key, drag-drop) onto subcommands.
//! - Bootstrap logging and the database before touching the store.

use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use ticklist_core::{
    core_version, default_log_level, init_logging, open_db, SqliteTaskStore, TaskId, TaskRegistry,
    TaskView,
};

/// Ticklist: a persisted to-do list.
#[derive(Parser)]
#[command(name = "ticklist", version, about)]
struct Cli {
    /// Path to the task database (defaults to the platform data dir).
    #[arg(long)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a task. Both fields are required and must be non-empty.
    Add {
        title: String,
        description: String,
    },
    /// Print every task in collection order.
    List,
    /// Mark a task as completed.
    Check { id: TaskId },
    /// Mark a task as open again.
    Uncheck { id: TaskId },
    /// Delete one task by id.
    Rm { id: TaskId },
    /// Delete every completed task.
    ClearDone,
    /// Delete every task.
    ClearAll,
    /// Re-sequence the list to the given id order. Unknown ids are dropped.
    #[command(name = "move")]
    Move { ids: Vec<TaskId> },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("ticklist: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let data_dir = data_dir()?;
    init_logging(default_log_level(), data_dir.join("logs"))?;

    let db_path = cli.db.unwrap_or_else(|| data_dir.join("ticklist.db"));
    log::info!(
        "event=cli_start module=cli status=ok version={} db={}",
        core_version(),
        db_path.display()
    );
    let conn = open_db(&db_path)?;
    let registry = TaskRegistry::new(SqliteTaskStore::new(&conn));
    let mut view = TaskView::new(registry);

    match cli.command {
        Command::Add { title, description } => {
            view.create_task(&title, &description)?;
            print_rows(&view);
        }
        Command::List => {
            view.render_all()?;
            print_rows(&view);
        }
        Command::Check { id } => {
            view.toggle_checked(id, true)?;
            print_rows(&view);
        }
        Command::Uncheck { id } => {
            view.toggle_checked(id, false)?;
            print_rows(&view);
        }
        Command::Rm { id } => {
            view.delete_task(id)?;
            print_rows(&view);
        }
        Command::ClearDone => {
            view.delete_checked()?;
            print_rows(&view);
        }
        Command::ClearAll => {
            view.delete_all()?;
            print_rows(&view);
        }
        Command::Move { ids } => {
            view.render_all()?;
            view.complete_drop(&ids)?;
            print_rows(&view);
        }
    }

    Ok(())
}

fn data_dir() -> Result<PathBuf, Box<dyn Error>> {
    let base = dirs::data_dir().ok_or("could not determine the platform data directory")?;
    Ok(base.join("ticklist"))
}

fn print_rows<S: ticklist_core::TaskStore>(view: &TaskView<S>) {
    if view.rows().is_empty() {
        println!("(no tasks)");
        return;
    }

    for row in view.rows() {
        let mark = if row.checked { "x" } else { " " };
        println!("[{mark}] {}  {}", row.id, row.title);
        println!("      {}", row.description);
        println!("      {}", row.created_label);
        if let Some(completed) = &row.completed_label {
            println!("      {completed}");
        }
    }
}
