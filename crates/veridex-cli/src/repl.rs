//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::cli::{AnalyzeArgs, ScoreArgs, SearchArgs};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use veridex_pipeline::Pipeline;

/// Run the interactive REPL.
pub fn run_repl(pipeline: &Pipeline, config: &Config, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Veridex REPL - Type 'help' for commands, 'exit' to quit")
    );
    println!();

    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::other(format!(
            "Failed to initialize editor: {}",
            e
        )))
    })?;

    let history_path = Config::history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("veridex> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => print_help(formatter),
                    Ok(ReplCommand::Analyze(text)) => {
                        let args = AnalyzeArgs {
                            file: None,
                            text: Some(text),
                            situation_type: None,
                            jurisdiction: None,
                            output: None,
                        };
                        if let Err(e) = commands::execute_analyze(args, pipeline, config, formatter)
                        {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Ok(ReplCommand::Search(query)) => {
                        let args = SearchArgs {
                            query: vec![query],
                        };
                        if let Err(e) = commands::execute_search(args, pipeline, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Ok(ReplCommand::Score(text)) => {
                        let args = ScoreArgs { text: vec![text] };
                        if let Err(e) = commands::execute_score(args, pipeline, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}", formatter.error(&format!("Readline error: {}", e)));
                break;
            }
        }
    }

    let _ = editor.save_history(&history_path);
    Ok(())
}

enum ReplCommand {
    Analyze(String),
    Search(String),
    Score(String),
    Help,
    Exit,
}

fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_lowercase().as_str() {
        "exit" | "quit" => Ok(ReplCommand::Exit),
        "help" => Ok(ReplCommand::Help),
        "analyze" => require_arg(rest, "analyze <text>").map(ReplCommand::Analyze),
        "search" => require_arg(rest, "search <query>").map(ReplCommand::Search),
        "score" => require_arg(rest, "score <text>").map(ReplCommand::Score),
        other => Err(CliError::InvalidInput(format!(
            "unknown command '{}'; type 'help'",
            other
        ))),
    }
}

fn require_arg(rest: &str, usage: &str) -> Result<String> {
    if rest.is_empty() {
        Err(CliError::InvalidInput(format!("usage: {}", usage)))
    } else {
        Ok(rest.to_string())
    }
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Commands:"));
    println!("  analyze <text>  Run the full analysis pipeline over <text>");
    println!("  search <query>  Search the legal-authority corpus");
    println!("  score <text>    Sovereignty-score <text>");
    println!("  help            Show this help");
    println!("  exit            Leave the REPL");
}
