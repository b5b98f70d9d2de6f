//! Command table and handlers for the budget tracker shell.

use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;
use thiserror::Error;

use crate::config::Config;
use crate::errors::LedgerError;
use crate::ledger::BudgetTracker;
use crate::reports::{FilterReport, MaxMinReport};
use crate::sink::ConsoleSink;

use super::output;

pub type CommandResult = Result<LoopControl, CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    Usage(String),
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// One entry in the command table.
pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "add",
        usage: "add AMOUNT DESCRIPTION",
        summary: "Record a new most-recent transaction",
    },
    CommandSpec {
        name: "insert",
        usage: "insert INDEX AMOUNT DESCRIPTION",
        summary: "Insert a transaction at the given index",
    },
    CommandSpec {
        name: "modify",
        usage: "modify INDEX AMOUNT DESCRIPTION",
        summary: "Replace the transaction at the given index",
    },
    CommandSpec {
        name: "remove",
        usage: "remove [INDEX]",
        summary: "Remove the most recent transaction, or the one at INDEX",
    },
    CommandSpec {
        name: "move",
        usage: "move FROM TO",
        summary: "Move a transaction to a new index",
    },
    CommandSpec {
        name: "print",
        usage: "print [COUNT]",
        summary: "Print the COUNT most recent transactions (default: all)",
    },
    CommandSpec {
        name: "balance",
        usage: "balance",
        summary: "Show the current balance",
    },
    CommandSpec {
        name: "filter",
        usage: "filter KEYWORD",
        summary: "List transactions whose description contains KEYWORD",
    },
    CommandSpec {
        name: "report",
        usage: "report",
        summary: "Show the largest/smallest income and expense",
    },
    CommandSpec {
        name: "name",
        usage: "name [NEW_NAME]",
        summary: "Show or rename the account",
    },
    CommandSpec {
        name: "clear",
        usage: "clear",
        summary: "Reset the tracker to its default empty state",
    },
    CommandSpec {
        name: "demo",
        usage: "demo",
        summary: "Run a scripted walkthrough of the editing operations",
    },
    CommandSpec {
        name: "help",
        usage: "help",
        summary: "Show this command list",
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        summary: "Leave the shell",
    },
];

pub fn command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|spec| spec.name).collect()
}

/// State threaded through every command handler.
pub struct ShellContext {
    pub tracker: BudgetTracker,
    pub config: Config,
    pub interactive: bool,
}

impl ShellContext {
    pub fn new(config: Config, interactive: bool) -> Self {
        let tracker = BudgetTracker::named(config.default_account_name.clone());
        Self {
            tracker,
            config,
            interactive,
        }
    }
}

pub fn dispatch(context: &mut ShellContext, command: &str, args: &[&str]) -> CommandResult {
    match command {
        "add" => add(context, args),
        "insert" => insert(context, args),
        "modify" => modify(context, args),
        "remove" => remove(context, args),
        "move" => move_record(context, args),
        "print" => print_records(context, args),
        "balance" => balance(context),
        "filter" => filter(context, args),
        "report" => report(context),
        "name" => name(context, args),
        "clear" => clear(context),
        "demo" => demo(context),
        "help" => help(),
        "exit" | "quit" => Ok(LoopControl::Exit),
        other => {
            let mut message = format!("Unknown command `{other}`.");
            if let Some(suggestion) = suggest(other) {
                message.push_str(&format!(" Did you mean `{suggestion}`?"));
            }
            output::warning(message);
            Ok(LoopControl::Continue)
        }
    }
}

fn suggest(input: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .map(|spec| spec.name)
        .min_by_key(|candidate| levenshtein(input, candidate))
        .filter(|candidate| levenshtein(input, candidate) <= 2)
}

fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 2 {
        return Err(usage("add AMOUNT DESCRIPTION"));
    }
    let amount = parse_amount(args[0])?;
    let description = args[1..].join(" ");
    context.tracker.add(amount, description.clone());
    output::success(format!(
        "Recorded {amount:.2}{} {description}",
        context.config.currency_symbol
    ));
    print_balance(context);
    Ok(LoopControl::Continue)
}

fn insert(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 3 {
        return Err(usage("insert INDEX AMOUNT DESCRIPTION"));
    }
    let index = parse_index(args[0])?;
    let amount = parse_amount(args[1])?;
    let description = args[2..].join(" ");
    context.tracker.insert_at(index, amount, description.clone())?;
    output::success(format!(
        "Inserted {amount:.2}{} {description} at index {index}",
        context.config.currency_symbol
    ));
    print_balance(context);
    Ok(LoopControl::Continue)
}

fn modify(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 3 {
        return Err(usage("modify INDEX AMOUNT DESCRIPTION"));
    }
    let index = parse_index(args[0])?;
    let amount = parse_amount(args[1])?;
    let description = args[2..].join(" ");
    let replaced = context.tracker.modify_at(index, amount, description)?;
    output::success(format!("Replaced {replaced}"));
    print_balance(context);
    Ok(LoopControl::Continue)
}

fn remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let removed = match args {
        [] => context.tracker.remove()?,
        [raw] => context.tracker.remove_at(parse_index(raw)?)?,
        _ => return Err(usage("remove [INDEX]")),
    };
    output::success(format!("Removed {removed}"));
    print_balance(context);
    Ok(LoopControl::Continue)
}

fn move_record(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [from, to] = args else {
        return Err(usage("move FROM TO"));
    };
    let cur_index = parse_index(from)?;
    let new_index = parse_index(to)?;
    context.tracker.move_record(cur_index, new_index)?;
    output::success(format!("Moved index {cur_index} to {new_index}"));
    Ok(LoopControl::Continue)
}

fn print_records(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let count = match args {
        [] => context.tracker.len(),
        [raw] => parse_index(raw)?,
        _ => return Err(usage("print [COUNT]")),
    };
    let mut sink = ConsoleSink::new();
    context.tracker.print_recent(count, &mut sink)?;
    Ok(LoopControl::Continue)
}

fn balance(context: &ShellContext) -> CommandResult {
    print_balance(context);
    Ok(LoopControl::Continue)
}

fn filter(context: &ShellContext, args: &[&str]) -> CommandResult {
    let [keyword] = args else {
        return Err(usage("filter KEYWORD"));
    };
    let mut sink = ConsoleSink::new();
    let total = FilterReport::keyword_total(&context.tracker, keyword, &mut sink)?;
    output::info(format!(
        "Total for `{keyword}`: {total:.2}{}",
        context.config.currency_symbol
    ));
    Ok(LoopControl::Continue)
}

fn report(context: &ShellContext) -> CommandResult {
    let tracker = &context.tracker;
    let rows = [
        ("Largest income", MaxMinReport::max_income_index(tracker)?),
        ("Smallest income", MaxMinReport::min_income_index(tracker)?),
        ("Largest expense", MaxMinReport::max_expense_index(tracker)?),
        ("Smallest expense", MaxMinReport::min_expense_index(tracker)?),
    ];
    output::section(format!("Extremes for {}", tracker.account_name()));
    for (label, index) in rows {
        let record = tracker
            .iter()
            .nth(index)
            .expect("report index is within range");
        output::info(format!("{label:<17} index {index}  ({record})"));
    }
    Ok(LoopControl::Continue)
}

fn name(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        output::info(context.tracker.to_string());
    } else {
        let new_name = args.join(" ");
        context.tracker.set_account_name(new_name.clone())?;
        output::success(format!("Account renamed to `{new_name}`"));
    }
    Ok(LoopControl::Continue)
}

fn clear(context: &mut ShellContext) -> CommandResult {
    if context.interactive {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Discard every record and reset the account?")
            .default(false)
            .interact()?;
        if !confirmed {
            output::info("Clear cancelled.");
            return Ok(LoopControl::Continue);
        }
    }
    context.tracker.clear();
    output::success("Tracker reset to its default state.");
    Ok(LoopControl::Continue)
}

/// Scripted walkthrough of the editing operations on a throwaway tracker,
/// exercising insert, remove, modify, and move end to end.
fn demo(context: &ShellContext) -> CommandResult {
    const BREAKFAST_COST: f64 = -5.5;
    const LUNCH_COST: f64 = -10.1;
    const DINNER_COST: f64 = -15.2;

    let mut tracker = BudgetTracker::named("Demo Account");
    let mut sink = ConsoleSink::new();

    tracker.insert_at(0, 100.0, "Initial balance 02/17")?;
    tracker.insert_at(0, BREAKFAST_COST, "Breakfast 02/17")?;
    tracker.insert_at(0, LUNCH_COST, "Lunch 02/17")?;
    tracker.insert_at(0, DINNER_COST, "Dinner 02/17")?;
    demo_step(&mut tracker, &mut sink, &context.config, "Initial records")?;

    tracker.insert_at(1, BREAKFAST_COST, "Snack 02/17")?;
    demo_step(&mut tracker, &mut sink, &context.config, "After inserting")?;

    tracker.remove_at(2)?;
    demo_step(&mut tracker, &mut sink, &context.config, "After removing")?;

    tracker.modify_at(1, LUNCH_COST, "Late lunch 02/17")?;
    demo_step(&mut tracker, &mut sink, &context.config, "After modifying")?;

    tracker.move_record(0, 2)?;
    demo_step(&mut tracker, &mut sink, &context.config, "After moving down")?;

    tracker.move_record(2, 0)?;
    demo_step(&mut tracker, &mut sink, &context.config, "After moving back up")?;

    Ok(LoopControl::Continue)
}

fn demo_step(
    tracker: &mut BudgetTracker,
    sink: &mut ConsoleSink,
    config: &Config,
    title: &str,
) -> Result<(), CommandError> {
    output::section(title);
    tracker.print_recent(tracker.len(), sink)?;
    output::info(format!(
        "Balance: {:.2}{}",
        tracker.balance(),
        config.currency_symbol
    ));
    Ok(())
}

fn help() -> CommandResult {
    output::section("Commands");
    let width = COMMANDS
        .iter()
        .map(|spec| spec.usage.len())
        .max()
        .unwrap_or(0);
    for spec in COMMANDS {
        output::info(format!(
            "  {:<width$}  {}",
            spec.usage,
            spec.summary,
            width = width
        ));
    }
    Ok(LoopControl::Continue)
}

fn print_balance(context: &ShellContext) {
    output::info(format!(
        "Balance: {:.2}{}",
        context.tracker.balance(),
        context.config.currency_symbol
    ));
}

fn parse_amount(raw: &str) -> Result<f64, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::Usage(format!("`{raw}` is not a valid amount")))
}

fn parse_index(raw: &str) -> Result<usize, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::Usage(format!("`{raw}` is not a valid index")))
}

fn usage(text: &str) -> CommandError {
    CommandError::Usage(format!("usage: {text}"))
}
