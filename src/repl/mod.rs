//! REPL (Read-Eval-Print Loop) for variation detection

use crate::commands::{create_registry, CommandContext, CommandRegistry, CommandResult};
use crate::repl::watcher::FileWatcher;
use crate::session::Session;
use anyhow::{Context, Result};
use colored::*;
use crossbeam_channel::{unbounded, Receiver, Sender};
use notify::{Event, EventKind};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RustylineResult};
use std::path::Path;
use std::thread;
use tracing::{debug, info};

pub mod watcher;

/// Types of events the REPL loop handles
enum ReplEvent {
    Input(Result<String, ReadlineError>),
}

/// Interactive REPL over a [`Session`]
pub struct Repl {
    editor: Option<DefaultEditor>,
    registry: CommandRegistry,
    ctx: CommandContext,

    // Event channels
    tx_input: Sender<ReplEvent>,
    rx_input: Receiver<ReplEvent>,
    tx_watcher: Sender<notify::Result<Event>>,
    rx_watcher: Receiver<notify::Result<Event>>,

    // File watcher
    watcher: Option<FileWatcher>,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new() -> RustylineResult<Self> {
        let editor = DefaultEditor::new()?;
        let (tx_input, rx_input) = unbounded();
        let (tx_watcher, rx_watcher) = unbounded();

        Ok(Repl {
            editor: Some(editor),
            registry: create_registry(),
            ctx: CommandContext::new(),
            tx_input,
            rx_input,
            tx_watcher,
            rx_watcher,
            watcher: None,
        })
    }

    /// Start the REPL loop
    pub fn run(&mut self) -> Result<()> {
        println!(
            "{}",
            "Motif: structured variation detection".bright_cyan().bold()
        );
        println!(
            "Try: {}, {}, {}",
            "pattern 60 62 64".cyan(),
            "seq 62 64 66 60 62 64".cyan(),
            "detect all".cyan()
        );
        println!(
            "Type '{}' for more information, '{}' or {} to exit.\n",
            "help".bright_green(),
            "quit".bright_red(),
            "Ctrl+C".bright_red()
        );

        // Move editor to thread
        let mut editor = self
            .editor
            .take()
            .context("REPL editor already in use")?;
        let tx_input = self.tx_input.clone();

        thread::spawn(move || loop {
            let prompt = format!("{} ", "motif>".bright_magenta().bold());
            let readline = editor.readline(&prompt);

            match readline {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if !line.is_empty() {
                        let _ = editor.add_history_entry(&line);
                    }
                    if tx_input.send(ReplEvent::Input(Ok(line))).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    let _ = tx_input.send(ReplEvent::Input(Err(err)));
                    break;
                }
            }
        });

        loop {
            crossbeam_channel::select! {
                recv(self.rx_input) -> msg => match msg {
                    Ok(ReplEvent::Input(Ok(line))) => {
                        if line.is_empty() {
                            continue;
                        }
                        let result = execute_line(&self.registry, &mut self.ctx, &line);
                        if !self.handle_result(result) {
                            break;
                        }
                    }
                    Ok(ReplEvent::Input(Err(ReadlineError::Interrupted)))
                    | Ok(ReplEvent::Input(Err(ReadlineError::Eof))) => {
                        println!("{}", "Goodbye!".bright_cyan());
                        break;
                    }
                    Ok(ReplEvent::Input(Err(err))) => {
                        println!(
                            "{} {}",
                            "Error reading input:".bright_red().bold(),
                            err.to_string().red()
                        );
                    }
                    Err(_) => break, // Channel closed
                },

                recv(self.rx_watcher) -> msg => match msg {
                    Ok(Ok(event)) => {
                        if matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                            for path in event.paths {
                                self.reload(&path);
                            }
                        }
                    }
                    Ok(Err(e)) => println!("{} Watch error: {}", "Error:".red(), e),
                    Err(_) => break, // Channel closed
                }
            }
        }

        Ok(())
    }

    /// Print a command's outcome; false means the REPL should exit
    fn handle_result(&mut self, result: CommandResult) -> bool {
        match result {
            CommandResult::Success | CommandResult::NotACommand => {}
            CommandResult::Message(msg) => println!("{}", msg),
            CommandResult::Exit => {
                println!("{}", "Goodbye!".bright_cyan());
                return false;
            }
            CommandResult::Error(e) => {
                println!("{} {}", "Error:".bright_red().bold(), e.red());
            }
            CommandResult::Watch(path) => self.watch(&path),
        }
        true
    }

    /// Run a script once, then re-run it on every change
    fn watch(&mut self, path: &str) {
        if self.watcher.is_none() {
            match FileWatcher::new(self.tx_watcher.clone()) {
                Ok(w) => self.watcher = Some(w),
                Err(e) => {
                    println!("{} Failed to create watcher: {}", "Error:".red(), e);
                    return;
                }
            }
        }

        if let Some(w) = &mut self.watcher {
            if let Err(e) = w.watch(path) {
                println!("{} Failed to watch {}: {}", "Error:".red(), path, e);
                return;
            }
            println!("Watching {} for changes...", path.bright_green());
        }
        self.reload(Path::new(path));
    }

    fn reload(&mut self, path: &Path) {
        info!("running script {}", path.display());
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                println!("{} Failed to read {}: {}", "Error:".red(), path.display(), e);
                return;
            }
        };

        println!("{} {}", "Running".bright_yellow(), path.display());
        for result in run_script(&self.registry, &mut self.ctx, &contents) {
            match result {
                // A script cannot end the session or start more watches
                CommandResult::Exit | CommandResult::Watch(_) => {
                    debug!("ignoring {:?} from script", result);
                }
                other => {
                    self.handle_result(other);
                }
            }
        }
    }
}

/// Execute one line, reporting input that matches no command as an error
pub fn execute_line(
    registry: &CommandRegistry,
    ctx: &mut CommandContext,
    line: &str,
) -> CommandResult {
    match registry.execute(line, ctx) {
        CommandResult::NotACommand => CommandResult::Error(format!(
            "Unknown command '{}' (type 'help')",
            line.split_whitespace().next().unwrap_or(line)
        )),
        other => other,
    }
}

/// Execute every command line of a script in order
pub fn run_script(
    registry: &CommandRegistry,
    ctx: &mut CommandContext,
    contents: &str,
) -> Vec<CommandResult> {
    Session::script_lines(contents)
        .map(|line| execute_line(registry, ctx, line))
        .collect()
}

/// Convenience function to start the REPL
pub fn start() -> Result<()> {
    let mut repl = Repl::new().map_err(|e| anyhow::anyhow!("Failed to initialize REPL: {}", e))?;
    repl.run()
}
