//! # Generate Command
//!
//! Validate → (stop if `--test-only`) → write `specification.md` →
//! (promote if `--promote`).
//!
//! Returns exit code: 0 on success, 1 on validation or promotion failure.
//! Operational errors (I/O, unreadable header) are returned as `Err` and
//! mapped to exit code 2 by `main`.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use ovt_core::{parse_document, BuildVersion, SpecLayout};
use ovt_publish::{
    build_specification, promote, write_specification, AlwaysOverwrite, PublishError,
    WriteOutcome,
};
use ovt_validate::Validator;

use crate::config::ToolConfig;
use crate::console::Console;
use crate::report::print_report;

/// Options of the `ovt` command.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Version to build, e.g. 1.1. Prompted for when omitted.
    #[arg(short = 'b', long, value_name = "VERSION")]
    pub build_version: Option<String>,

    /// Copy the generated files to the current specification after building.
    #[arg(short, long)]
    pub promote: bool,

    /// Run the validation checks only.
    #[arg(short, long)]
    pub test_only: bool,

    /// Overwrite an existing specification.md without asking.
    #[arg(short, long)]
    pub yes: bool,

    /// Specification root directory (default: nearest `specification/` above
    /// the current directory).
    #[arg(long, value_name = "DIR")]
    pub spec_dir: Option<PathBuf>,
}

/// Execute the command.
pub fn run_generate<R: BufRead, W: Write>(
    args: &GenerateArgs,
    config: &ToolConfig,
    cwd: &Path,
    console: &mut Console<R, W>,
) -> Result<u8> {
    let raw_version = match &args.build_version {
        Some(v) => v.clone(),
        None => console
            .ask("Which Version to Build?")
            .context("failed to read build version")?,
    };
    let version = BuildVersion::new(raw_version)?;
    let layout = SpecLayout::new(config.resolve_spec_dir(args.spec_dir.as_deref(), cwd));
    tracing::debug!(spec_dir = %layout.spec_dir().display(), %version, "resolved specification layout");

    console.banner(&[
        "OpenOOH Documentation Generator",
        &format!("Generating for Version {version}"),
    ])?;

    let report = Validator::standard(config.validation_options()).run(&layout, &version);
    print_report(console, &report)?;
    if !report.passed() {
        return Ok(1);
    }
    if args.test_only {
        return Ok(0);
    }

    let json_path = layout.json_path(&version);
    let value = report
        .into_document()
        .context("validated specification document is unavailable")?;
    let document = parse_document(value, &json_path)?;

    console.line("Generating Spec Markup")?;
    let contents = build_specification(&layout, &version, &document)
        .context("failed to generate specification markdown")?;
    let outcome = if args.yes || config.assume_yes {
        write_specification(&layout, &version, &contents, &mut AlwaysOverwrite)
    } else {
        write_specification(&layout, &version, &contents, &mut *console)
    }
    .context("failed to write specification markdown")?;
    match outcome {
        WriteOutcome::Written(path) => {
            console.ok(format!("Spec Markup Written to {}", path.display()))?;
        }
        WriteOutcome::Declined(path) => {
            console.warn(format!("Kept existing {}", path.display()))?;
        }
    }
    console.ok("Spec Markup Complete")?;

    if args.promote {
        console.line(format!("Promoting {version} to current"))?;
        match promote(&layout, &version) {
            Ok(copied) => {
                console.ok("Json status is accepted and is promotable")?;
                for path in copied {
                    console.ok(format!("Copied {}", path.display()))?;
                }
            }
            Err(e @ (PublishError::NotAccepted { .. } | PublishError::VersionMismatch { .. })) => {
                console.fail(format!("Cannot promote spec: {e}"))?;
                return Ok(1);
            }
            Err(e) => return Err(e).context("promotion failed"),
        }
    }

    console.banner(&["Spec documents updated.  Commit your changes"])?;
    Ok(0)
}
