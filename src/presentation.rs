// src/presentation.rs
use crate::app::{FilePatch, PatchSummary, RunReport};
use std::fmt::Write;
use version_patch_domain::PatchOutcome;
use version_patch_shared_kernel::VersionTag;

pub fn announce(tag: &VersionTag) {
    println!("Patching version: {tag}");
}

pub fn print_report(report: &RunReport) {
    let text = render_report(report);
    if !text.is_empty() {
        print!("{text}");
    }
}

/// Status lines for a finished run, one per line, connector first.
pub fn render_report(report: &RunReport) -> String {
    let mut out = String::new();
    match report {
        RunReport::NoTag => {}
        RunReport::Applied(summary) => render_applied(&mut out, summary),
        RunReport::DryRun(summary) => render_dry_run(&mut out, summary),
    }
    out
}

fn render_applied(out: &mut String, summary: &PatchSummary) {
    if summary.connector.outcome.is_changed() {
        let _ = writeln!(
            out,
            "Patched connector version number in {}",
            summary.connector.path.display()
        );
    }
    if summary.installer.outcome.is_changed() {
        let _ = writeln!(out, "Patched installer with connector v{}", summary.tag);
    }
}

fn render_dry_run(out: &mut String, summary: &PatchSummary) {
    for (label, patch) in [("connector", &summary.connector), ("installer", &summary.installer)] {
        let _ = writeln!(out, "Would patch {label} {}", describe(patch));
    }
    let _ = writeln!(out, "Dry run: no files were written");
}

fn describe(patch: &FilePatch) -> String {
    let path = patch.path.display();
    match &patch.outcome {
        PatchOutcome::Replaced { line_index, .. } => format!("{path} (replace line {})", line_index + 1),
        PatchOutcome::Inserted { line_index } => format!("{path} (insert at line {})", line_index + 1),
        PatchOutcome::Unchanged => format!("{path} (no change)"),
    }
}
