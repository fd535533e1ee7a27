/// Format a fatal error for stderr.
pub fn format_error(err: &dyn std::fmt::Display) -> String {
    format!("error: {err}")
}
