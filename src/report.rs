//! Plain-text summary of a project walk. Formatting is cosmetic; all
//! numbers come straight from the [`ProjectSummary`].

use crate::dict::DictStore;
use crate::walker::ProjectSummary;

const RULE: &str = "======================================================================";
const MAX_DETAIL_LINES: usize = 10;
const MAX_ERROR_LINES: usize = 5;

pub fn generate_report(
    store: &DictStore,
    summary: &ProjectSummary,
    preview_mode: bool,
) -> String {
    let mut lines = Vec::new();

    lines.push("hanbridge - simplified-to-traditional conversion".to_owned());
    lines.push(RULE.to_owned());
    lines.push(format!(
        "Mode: {}",
        if preview_mode { "preview" } else { "apply" }
    ));
    lines.push(format!(
        "Dictionary: {} mappings ({} built-in, {} custom)",
        store.len(),
        store.builtin_len(),
        store.custom_len()
    ));
    let categories = store.category_stats();
    lines.push(format!(
        "  single-character: {}, two-character: {}, longer terms: {}",
        categories.single_char, categories.two_char, categories.longer
    ));

    lines.push(String::new());
    lines.push(format!("Files scanned: {}", summary.total_files));
    if preview_mode {
        lines.push(format!(
            "Files containing simplified text: {}",
            summary.processed_files
        ));
        lines.push(format!(
            "Occurrences that would convert: {}",
            summary.total_conversions
        ));
    } else {
        lines.push(format!("Files converted: {}", summary.processed_files));
        lines.push(format!(
            "Occurrences converted: {}",
            summary.total_conversions
        ));
    }

    if !summary.file_details.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "Top files ({} shown):",
            summary.file_details.len().min(MAX_DETAIL_LINES)
        ));
        let mut details: Vec<_> = summary.file_details.iter().collect();
        details.sort_by(|a, b| b.conversions.cmp(&a.conversions));
        for detail in details.into_iter().take(MAX_DETAIL_LINES) {
            let name = detail
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| detail.path.display().to_string());
            lines.push(format!("  {}: {}", name, detail.conversions));
        }
    }

    lines.push(String::new());
    if summary.errors.is_empty() {
        lines.push("No errors.".to_owned());
    } else {
        lines.push(format!("Errors: {}", summary.errors.len()));
        for error in summary.errors.iter().take(MAX_ERROR_LINES) {
            lines.push(format!("  - {error}"));
        }
        if summary.errors.len() > MAX_ERROR_LINES {
            lines.push(format!(
                "  ... and {} more",
                summary.errors.len() - MAX_ERROR_LINES
            ));
        }
    }

    lines.push(RULE.to_owned());
    if summary.processed_files > 0 {
        let average = summary.total_conversions as f64 / summary.processed_files as f64;
        if preview_mode {
            lines.push(format!(
                "Preview complete. Average {average:.1} occurrences per matching file; rerun without --preview to apply."
            ));
        } else {
            lines.push(format!(
                "Conversion complete. Average {average:.1} occurrences per converted file."
            ));
        }
    } else {
        lines.push("No simplified Chinese found.".to_owned());
    }

    lines.join("\n")
}
