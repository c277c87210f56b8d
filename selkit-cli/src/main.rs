//! Selkit CLI
//!
//! Inspect, validate and combine selectors from the command line.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use selkit_common::warning::{take_warnings, warn_once};
use selkit_selector::{
    ComplexSelector, RenameOutcome, SimpleSelector, creation_suggestions, rename_selector,
    suggest, validate,
};

#[derive(Parser)]
#[command(name = "selkit", version, about = "Parse, validate and merge CSS selectors")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a selector and show its structure, CSS and specificity.
    Parse {
        /// Selector text, e.g. `#app > .card:hover`.
        selector: String,
        /// At-rule the selector applies under, e.g. `@media (min-width: 768px)`.
        #[arg(long)]
        at_rule: Option<String>,
        /// Print the parsed selector as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Normalize typed text into a simple selector.
    Validate {
        /// Text as typed into the selector input.
        text: String,
    },
    /// Rank candidate selectors against a filter.
    Suggest {
        /// Filter text as typed into the selector input.
        filter: String,
        /// Known selector to rank (repeatable).
        #[arg(long = "candidate", value_name = "SELECTOR")]
        candidates: Vec<String>,
    },
    /// Rename a simple selector, keeping its type.
    Rename {
        /// The selector being edited, e.g. `.card`.
        selector: String,
        /// The new text as typed.
        text: String,
    },
    /// Merge an edited selector into a stored one.
    Merge {
        /// The stored selector.
        base: String,
        /// The edited selector.
        incoming: String,
    },
    /// Align activation flags of a selector with another.
    Activate {
        /// The selector whose flags change.
        selector: String,
        /// The selector providing the flags.
        other: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Parse {
            selector,
            at_rule,
            json,
        } => run_parse(&selector, at_rule.as_deref(), json),
        Command::Validate { text } => {
            run_validate(&text);
            Ok(())
        }
        Command::Suggest { filter, candidates } => run_suggest(&filter, &candidates),
        Command::Rename { selector, text } => run_rename(&selector, &text),
        Command::Merge { base, incoming } => {
            let merged = parse_complex(&base)?.merge(&parse_complex(&incoming)?);
            print_complex(&merged)
        }
        Command::Activate { selector, other } => {
            let activated = parse_complex(&selector)?.activate_selectors(&parse_complex(&other)?);
            print_complex(&activated)
        }
    };

    for warning in take_warnings() {
        eprintln!("{} {warning}", "warning:".yellow());
    }

    result
}

fn parse_complex(text: &str) -> Result<ComplexSelector> {
    text.parse()
        .with_context(|| format!("failed to parse selector `{text}`"))
}

fn run_parse(text: &str, at_rule: Option<&str>, json: bool) -> Result<()> {
    let selector = ComplexSelector::parse(text, at_rule)
        .with_context(|| format!("failed to parse selector `{text}`"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&selector)?);
        return Ok(());
    }

    println!("=== Selector ===");
    println!("{}", selector.to_css()?.bold());
    if let Some(at_rule) = &selector.at_rule {
        println!("at-rule:     {at_rule}");
    }
    println!("specificity: {}", selector.specificity());

    println!("\n=== Main ===");
    print_compound_parts(&selector.main_selector.selectors);
    if let Some(pseudo_class) = &selector.main_selector.pseudo_class {
        println!("  pseudo-class {} ({})", pseudo_class, pseudo_class.display_name());
    }

    if let Some(operator) = selector.operator {
        println!("\n=== Operator ===");
        println!("  {} ({})", operator.display_name(), operator.help_link().dimmed());
    }

    if let Some(related) = &selector.related_selector {
        println!("\n=== Related ===");
        print_compound_parts(&related.selectors);
        if let Some(pseudo_class) = &related.pseudo_class {
            println!("  pseudo-class {} ({})", pseudo_class, pseudo_class.display_name());
        }
    }

    Ok(())
}

fn print_compound_parts(selectors: &[SimpleSelector]) {
    for selector in selectors {
        let state = if selector.active { "on " } else { "off" };
        println!(
            "  [{state}] {:<11} {}",
            selector.selector_type(),
            selector.display_name()
        );
    }
}

fn run_validate(text: &str) {
    match validate(text) {
        Some(normalized) if normalized.is_empty() => println!("(empty)"),
        Some(normalized) => println!("{}", normalized.green()),
        None => println!("{}", "invalid".red()),
    }
}

fn run_suggest(filter: &str, candidates: &[String]) -> Result<()> {
    let candidates = candidates
        .iter()
        .map(|text| {
            text.parse::<SimpleSelector>()
                .with_context(|| format!("invalid candidate `{text}`"))
        })
        .collect::<Result<Vec<_>>>()?;

    let ranked = suggest(filter, &candidates);
    let created = creation_suggestions(filter);
    if ranked.is_empty() && created.is_empty() {
        bail!("no suggestions for `{filter}`");
    }

    for suggestion in ranked.iter().chain(&created) {
        println!(
            "{:>4}  {}",
            suggestion.selector_type().display_glyph().dimmed(),
            suggestion.display_name()
        );
    }
    Ok(())
}

fn run_rename(selector: &str, text: &str) -> Result<()> {
    let selector = selector
        .parse::<SimpleSelector>()
        .with_context(|| format!("invalid selector `{selector}`"))?;

    match rename_selector(&selector, text) {
        RenameOutcome::Renamed { selector } => println!("{}", selector.to_string().green()),
        RenameOutcome::Rejected { reason } => {
            warn_once("Selector", &reason);
            println!("{selector}");
        }
    }
    Ok(())
}

fn print_complex(selector: &ComplexSelector) -> Result<()> {
    println!("{}", selector.to_css()?);
    println!("{}", serde_json::to_string_pretty(selector)?);
    Ok(())
}
