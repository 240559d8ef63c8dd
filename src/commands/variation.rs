//! Pattern, sequence, detection and settings commands

use crate::commands::{CommandContext, CommandResult};
use colored::*;

/// Handle `pattern <items>`
pub fn cmd_pattern(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Error(
            "Usage: pattern <items>  (e.g. pattern 60:1 62:1/2 64)".to_string(),
        );
    }
    match ctx.session.set_pattern(args) {
        Ok(len) => CommandResult::Message(
            format!("Pattern set ({} items)", len)
                .bright_green()
                .to_string(),
        ),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `seq <items>` / `sequence <items>`
pub fn cmd_sequence(args: &str, ctx: &mut CommandContext) -> CommandResult {
    match ctx.session.set_sequence(args) {
        Ok(len) => CommandResult::Message(
            format!("Sequence set ({} items)", len)
                .bright_green()
                .to_string(),
        ),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `show`
pub fn cmd_show(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Message(ctx.session.show())
}

/// Handle `detect [name|all]`
pub fn cmd_detect(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let which = if args.is_empty() { "all" } else { args };
    let report = match ctx.session.detect(which) {
        Ok(report) => report,
        Err(e) => return CommandResult::Error(format!("{:#}", e)),
    };

    if which == "all" {
        return CommandResult::Message(report.to_string().trim_end().to_string());
    }

    let entries = motif_core::DETECTORS
        .iter()
        .filter_map(|name| report.entries(name).map(|entries| (name, entries)))
        .find(|(name, _)| name.starts_with(which));
    match entries {
        Some((name, entries)) if entries.is_empty() => {
            CommandResult::Message(format!(
                "{}: {}",
                name.cyan().bold(),
                "no matches".bright_black()
            ))
        }
        Some((name, entries)) => CommandResult::Message(format!(
            "{}: {}",
            name.cyan().bold(),
            entries.join("  ").yellow()
        )),
        None => CommandResult::Success,
    }
}

/// Handle `set <key> <value>`
pub fn cmd_set(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let mut parts = args.split_whitespace();
    let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
        return CommandResult::Error("Usage: set <key> <value>".to_string());
    };
    match ctx.session.set(key, value) {
        Ok(()) => CommandResult::Message(format!("{} = {}", key.cyan(), value.bright_green())),
        Err(e) => CommandResult::Error(format!("{:#}", e)),
    }
}

/// Handle `config`
pub fn cmd_config(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Message(ctx.session.config().to_string())
}

/// Handle `reset`
pub fn cmd_reset(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    ctx.session.reset();
    CommandResult::Message("Settings restored to defaults".bright_green().to_string())
}
