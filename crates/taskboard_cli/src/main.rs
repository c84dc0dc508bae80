//! Terminal host for the task board.
//!
//! # Responsibility
//! - Own one `Board` and drive it with submit and drag gestures read from a
//!   script (file or stdin).
//! - Print both columns after every command that changed the board.

mod render;
mod script;

use clap::{Parser, Subcommand};
use log::{error, info};
use script::{parse_line, Command};
use std::cell::Cell;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use taskboard_core::{
    core_version, init_logging, init_stderr_logging, Board, BoardConfig, MemoryDataTransfer,
    ProjectStatus,
};

#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(about = "Two-column project board driven by scripted gestures", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level override (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a board session from a script file, or stdin when omitted
    Run {
        /// Path to the session script
        script: Option<PathBuf>,
    },
    /// Print the core version
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut config = BoardConfig::from_env();
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Err(err) = start_logging(&config) {
        eprintln!("taskboard: {err}");
        return ExitCode::FAILURE;
    }

    match cli.command.unwrap_or(Commands::Run { script: None }) {
        Commands::Version => {
            println!("taskboard_core version={}", core_version());
            ExitCode::SUCCESS
        }
        Commands::Run { script } => match run(&config, script) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!("event=session_failed module=cli error={err}");
                eprintln!("taskboard: {err}");
                ExitCode::FAILURE
            }
        },
    }
}

fn start_logging(config: &BoardConfig) -> Result<(), String> {
    match &config.log_dir {
        Some(dir) => init_logging(&config.log_level, &dir.to_string_lossy()),
        None => init_stderr_logging(&config.log_level),
    }
}

fn run(config: &BoardConfig, script: Option<PathBuf>) -> Result<(), String> {
    let reader: Box<dyn BufRead> = match &script {
        Some(path) => Box::new(BufReader::new(std::fs::File::open(path).map_err(
            |err| format!("cannot open script `{}`: {err}", path.display()),
        )?)),
        None => Box::new(BufReader::new(std::io::stdin())),
    };

    let mut board = Board::new(config.rules);
    let notified = Rc::new(Cell::new(0usize));
    {
        let notified = Rc::clone(&notified);
        board
            .state_mut()
            .add_listener(move |_| notified.set(notified.get() + 1));
    }
    info!("event=session_start module=cli rules={:?}", config.rules);

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| format!("failed to read script: {err}"))?;
        let command = match parse_line(index + 1, &line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        let before = notified.get();
        apply(&mut board, command);
        if notified.get() != before {
            print_board(&board);
        }
    }

    info!(
        "event=session_end module=cli projects={} notifications={}",
        board.state().len(),
        notified.get()
    );
    Ok(())
}

fn apply(board: &mut Board, command: Command) {
    match command {
        Command::Add {
            title,
            description,
            people,
        } => {
            if let Err(err) = board.submit(&title, &description, &people) {
                eprintln!("Invalid input, try again: {err}");
            }
        }
        Command::Drag { project, target } => drag(board, &project, target),
        Command::Show => print_board(board),
    }
}

/// Simulates a full gesture: drag-start, drag-over, drop, drag-end.
fn drag(board: &mut Board, project: &str, target: ProjectStatus) {
    let id = resolve_project(board, project);
    let Some(card) = board.card(&id) else {
        eprintln!("no project `{project}`");
        return;
    };

    let mut transfer = MemoryDataTransfer::new();
    board.drag_start(&card, &mut transfer);
    if board.drag_over(target, &transfer).prevents_default() {
        board.drop_on(target, &transfer);
    }
    board.drag_end(&card, &transfer);
}

/// Treats an in-range 1-based number as a position, anything else as an id.
fn resolve_project(board: &Board, token: &str) -> String {
    let projects = board.state().projects();
    match token.parse::<usize>() {
        Ok(position) if (1..=projects.len()).contains(&position) => {
            projects[position - 1].id().to_string()
        }
        _ => token.to_string(),
    }
}

fn print_board(board: &Board) {
    for status in ProjectStatus::ALL {
        print!("{}", render::render_list(&board.column(status).rendered()));
    }
    println!();
}
