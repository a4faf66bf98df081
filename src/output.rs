//! Terminal rendering for verification runs.
//!
//! Stateless formatting only: every function takes the data it renders as
//! input and holds no process-wide state.

use colored::Colorize;

use crate::layers::LAYER_COUNT;
use crate::models::outcome::{LayerCheck, LayerOutcome, ValidationReport, Verdict};

/// Announce a stage of the run.
pub fn print_banner(text: &str) {
    println!("{} {}", "→".cyan().bold(), text);
}

/// Report one completed step of the submission flow.
pub fn print_step(message: &str) {
    println!("{} {message}", "✓".green());
}

fn print_check(check: &LayerCheck) {
    let status = if check.passed {
        "✓".green()
    } else {
        "✗".red()
    };
    println!("    {status} {}", check.description);
}

/// Render one layer outcome with its recorded checks.
pub fn print_outcome(outcome: &LayerOutcome) {
    let status = if outcome.passed {
        "✓".green()
    } else {
        "✗".red()
    };
    println!("  {status} Layer {}: {}", outcome.layer, outcome.name);
    for check in &outcome.checks {
        print_check(check);
    }
}

/// Render the full validation report: every layer, the passed count, and
/// the verdict line.
pub fn print_report(report: &ValidationReport) {
    println!("\n{}", "Validation Report:".bold());
    for outcome in &report.outcomes {
        print_outcome(outcome);
    }

    println!(
        "\n{} {}/{} layers passed",
        "Summary:".bold(),
        report.passed_count,
        LAYER_COUNT
    );

    match report.verdict {
        Verdict::Full => {
            println!("{}", "✓ full coverage: every layer verified".green().bold());
        }
        Verdict::Degraded => {
            println!(
                "{}",
                "⚠ degraded coverage: optional integrations missing, still acceptable"
                    .yellow()
                    .bold()
            );
        }
        Verdict::Failed => {
            println!("{}", "✗ validation failed".red().bold());
        }
    }
}
