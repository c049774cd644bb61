//! Validation for maps.
//!
//! Reports broken door records and layouts the engine format cannot carry
//! faithfully. Run by the `validate` command and before saves.

mod checks;
mod diagnostic;

pub use diagnostic::{Diagnostic, Severity, ValidationResult};

use crate::output::{plural, Printer};
use crate::types::Map;

/// Run all validation checks against the map.
pub fn validate_map(map: &Map) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_door_tiles(map));
    result.merge(checks::check_door_destinations(map));
    result.merge(checks::check_orphan_door_tiles(map));
    result.merge(checks::check_ambiguous_doors(map));
    result.merge(checks::check_skull_tiles(map));
    result.merge(checks::check_unreachable_rooms(map));

    result
}

/// A diagnostic line with the severity label coloured by `printer`.
pub fn format_diagnostic(d: &Diagnostic, printer: &Printer) -> String {
    let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
    format!("{}{}", label, d.headline())
}

/// Print diagnostics and a summary line.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        printer.detail(&format_diagnostic(d, printer));
        if let Some(help) = &d.help {
            printer.detail(&printer.dim(&format!("  help: {}", help)));
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();
    let summary = format!(
        "{}, {}",
        plural(errors, "error", "errors"),
        plural(warnings, "warning", "warnings")
    );

    if errors > 0 {
        printer.error("Invalid", &summary);
    } else if warnings > 0 {
        printer.warning("Checked", &summary);
    } else {
        printer.status("Checked", "no problems found");
    }
}
