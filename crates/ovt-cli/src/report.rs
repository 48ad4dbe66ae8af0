//! # Validation Report Output

use std::io::{self, BufRead, Write};

use ovt_validate::{CheckStatus, ValidationReport};

use crate::console::Console;

/// Print each check that ran: its heading, then one line per finding.
/// Skipped checks are omitted.
pub fn print_report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    report: &ValidationReport,
) -> io::Result<()> {
    for result in report.results() {
        if result.status == CheckStatus::Skipped {
            continue;
        }
        console.line(result.description)?;
        for finding in &result.findings {
            console.finding(finding.level, finding.message.clone())?;
        }
    }
    if !report.passed() {
        console.line("  Cannot continue")?;
    }
    Ok(())
}
