//! REPL commands and the registry that dispatches them

pub mod general;
pub mod variation;

use crate::session::Session;

/// Result of executing a command
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// Command executed successfully, continue REPL
    Success,
    /// Command executed, show this message
    Message(String),
    /// Exit the REPL
    Exit,
    /// No registered command matches the input
    NotACommand,
    /// Error occurred
    Error(String),
    /// Watch a script file for changes
    Watch(String),
}

/// Context passed to command handlers
#[derive(Debug, Default)]
pub struct CommandContext {
    pub session: Session,
}

impl CommandContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A command handler function
pub type CommandHandler = fn(&str, &mut CommandContext) -> CommandResult;

/// Registry of available commands, matched by their leading word(s)
#[derive(Default)]
pub struct CommandRegistry {
    /// Kept longest name first so `sequence` is tried before `seq`
    commands: Vec<(&'static str, CommandHandler)>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under one or more names
    pub fn register(&mut self, names: &[&'static str], handler: CommandHandler) {
        self.commands
            .extend(names.iter().map(|name| (*name, handler)));
        self.commands.sort_by_key(|(name, _)| std::cmp::Reverse(name.len()));
    }

    /// Run the handler whose name starts `input`, passing the trimmed rest
    pub fn execute(&self, input: &str, ctx: &mut CommandContext) -> CommandResult {
        let found = self.commands.iter().find_map(|(name, handler)| {
            let rest = input.strip_prefix(*name)?;
            let at_boundary = rest.is_empty() || rest.starts_with(char::is_whitespace);
            at_boundary.then(|| (rest.trim(), handler))
        });
        match found {
            Some((args, handler)) => handler(args, ctx),
            None => CommandResult::NotACommand,
        }
    }

    /// Every registered command name
    pub fn list_commands(&self) -> Vec<&str> {
        self.commands.iter().map(|(name, _)| *name).collect()
    }
}

/// Registry holding every REPL command
pub fn create_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    registry.register(&["pattern"], variation::cmd_pattern);
    registry.register(&["seq", "sequence"], variation::cmd_sequence);
    registry.register(&["show"], variation::cmd_show);
    registry.register(&["detect"], variation::cmd_detect);

    registry.register(&["set"], variation::cmd_set);
    registry.register(&["config"], variation::cmd_config);
    registry.register(&["reset"], variation::cmd_reset);

    registry.register(&["help"], general::cmd_help);
    registry.register(&["quit", "exit"], general::cmd_quit);
    registry.register(&["watch"], general::cmd_watch);

    registry
}
