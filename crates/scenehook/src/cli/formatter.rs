//! Output formatting for scene hook commands

/// Format one script of a single-event listing: `"name" "body"`
///
/// `body` is expected to be escaped already.
pub fn format_script_record(name: &str, body: &str) -> String {
    format!("\"{}\" \"{}\"", name, body)
}

/// Format one script of the all-events listing: `"label" "name" "body"`
pub fn format_event_script_record(label: &str, name: &str, body: &str) -> String {
    format!("\"{}\" \"{}\" \"{}\"", label, name, body)
}

/// Format a single-event listing
pub fn format_script_records(scripts: &[(String, String)]) -> Vec<String> {
    scripts
        .iter()
        .map(|(name, body)| format_script_record(name, body))
        .collect()
}

/// Format the all-events listing
pub fn format_event_script_records(scripts: &[(String, String, String)]) -> Vec<String> {
    scripts
        .iter()
        .map(|(label, name, body)| format_event_script_record(label, name, body))
        .collect()
}
