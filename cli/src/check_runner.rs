use std::path::Path;

use ckscript::ScanError;
use schema::{CheckOutcome, SchemaReport};

/// How many names of each gap list to print before eliding the rest.
const MAX_LISTED: usize = 12;

fn ok_label(no_color: bool) -> &'static str {
    if no_color { "OK  " } else { "\x1b[32mOK\x1b[0m  " }
}

fn gap_label(no_color: bool) -> &'static str {
    if no_color { "GAPS" } else { "\x1b[33mGAPS\x1b[0m" }
}

fn bold(s: &str, no_color: bool) -> String {
    if no_color {
        s.to_string()
    } else {
        format!("\x1b[1m{}\x1b[0m", s)
    }
}

fn list_names(label: &str, names: &[String]) {
    if names.is_empty() {
        return;
    }
    let shown: Vec<&str> = names.iter().take(MAX_LISTED).map(String::as_str).collect();
    let more = names.len().saturating_sub(MAX_LISTED);
    if more > 0 {
        eprintln!("        {}: {} (+{} more)", label, shown.join(", "), more);
    } else {
        eprintln!("        {}: {}", label, shown.join(", "));
    }
}

fn print_schema(report: &SchemaReport, no_color: bool) {
    let label = if report.is_covered() {
        ok_label(no_color)
    } else {
        gap_label(no_color)
    };
    eprintln!(
        "  {}  {} ({} declared, {} observed)",
        label,
        report.name,
        report.declared.len(),
        report.observed.len()
    );
    list_names("missing", &report.missing);
    list_names("undeclared", &report.undeclared);
}

fn print_scan_errors(errors: &[ScanError]) {
    if errors.is_empty() {
        return;
    }
    eprintln!();
    eprintln!("scan problems:");
    for error in errors {
        eprintln!("  {}", error);
    }
}

/// Print a per-schema summary of a check run to stderr.
pub fn print_summary(config_path: &Path, outcome: &CheckOutcome, no_color: bool) {
    eprintln!();
    eprintln!("{}", bold(&config_path.display().to_string(), no_color));
    for report in &outcome.report.schemas {
        print_schema(report, no_color);
    }
    print_scan_errors(&outcome.errors);

    let total = outcome.report.schemas.len();
    let gaps = outcome.report.gaps().count();
    eprintln!();
    if gaps == 0 {
        if no_color {
            eprintln!("check result: ok. {} schemas covered", total);
        } else {
            eprintln!("check result: \x1b[32mok\x1b[0m. {} schemas covered", total);
        }
    } else if no_color {
        eprintln!(
            "check result: gaps. {} covered, {} with gaps (of {})",
            total - gaps,
            gaps,
            total
        );
    } else {
        eprintln!(
            "check result: \x1b[33mgaps\x1b[0m. {} covered, {} with gaps (of {})",
            total - gaps,
            gaps,
            total
        );
    }
}
