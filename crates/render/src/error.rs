//! Failure message composition.

/// Compose the user-facing message for a failed correction attempt:
/// fixed troubleshooting guidance first, the raw detail last. Error
/// renderers split this on newlines, one paragraph per line.
pub fn troubleshooting_message(detail: &str) -> String {
    format!(
        "Could not get a correction from the tutor service.\n\
         Check that the server is running.\n\
         Check that the server URL is correct.\n\
         Check your network connection.\n\
         Detail: {}",
        detail,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guidance_then_detail() {
        let msg = troubleshooting_message("HTTP 500: model not loaded");
        let lines: Vec<&str> = msg.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("Could not get a correction"));
        assert!(lines[1].contains("server is running"));
        assert!(lines[2].contains("URL is correct"));
        assert!(lines[3].contains("network connection"));
        assert_eq!(lines[4], "Detail: HTTP 500: model not loaded");
    }
}
