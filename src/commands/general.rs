//! General REPL commands (help, quit, watch)

use crate::commands::{CommandContext, CommandResult};
use colored::*;

/// Handle `help` command
pub fn cmd_help(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    print_help();
    CommandResult::Success
}

/// Handle `quit` or `exit` command
pub fn cmd_quit(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Exit
}

/// Handle `watch [file]` command
pub fn cmd_watch(args: &str, _ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Error("Usage: watch <file>".to_string());
    }
    CommandResult::Watch(args.to_string())
}

/// Print help information
fn print_help() {
    println!("{}", "Motif Help".bold());
    println!("{}", "==========".bold());
    println!();
    println!("{}", "Items:".green());
    println!("  {}            - Bare value (integer, ratio, decimal or label)", "60".cyan());
    println!("  {}        - Value with an aux attribute", "62:1/2".cyan());
    println!();
    println!("{}", "Input:".green());
    println!("  {}  - Set the pattern", "pattern 60:1 62:1/2 64:1/2".cyan());
    println!("  {}      - Set the sequence", "seq 62:1 64:1/2 66:1/2".cyan());
    println!("  {}                       - Show pattern and sequence", "show".cyan());
    println!();
    println!("{}", "Detection:".green());
    println!("  {}                 - Run every detector", "detect all".cyan());
    println!("  {}               - Run one detector (prefixes work)", "detect <name>".cyan());
    for name in motif_core::DETECTORS {
        println!("      {}", name.bright_black());
    }
    println!();
    println!("{}", "Settings:".green());
    println!("  {}         - Change a setting", "set <key> <value>".cyan());
    println!(
        "      {}",
        "epsilon, max_delta, max_changes, max_window, min_fragment (auto clears), same_aux on|off"
            .bright_black()
    );
    println!("  {}                     - Show settings", "config".cyan());
    println!("  {}                      - Restore default settings", "reset".cyan());
    println!();
    println!("{}", "Other Commands:".green());
    println!(
        "  {}              - Re-run a command script whenever it changes",
        "watch <file>".bright_green()
    );
    println!("  {}                      - Show this help", "help".bright_green());
    println!("  {}                      - Exit the REPL", "quit".bright_red());
}
