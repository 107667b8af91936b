//! Host key mapping

/// What a key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKey {
    /// Start a fresh session from any state
    Restart,
    /// Stop the loop and release host subscriptions
    Quit,
    Other,
}

/// Classify a DOM `KeyboardEvent.key` value
pub fn classify(key: &str) -> HostKey {
    match key {
        "r" | "R" => HostKey::Restart,
        "Escape" | "Esc" => HostKey::Quit,
        _ => HostKey::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restart_is_case_insensitive() {
        assert_eq!(classify("r"), HostKey::Restart);
        assert_eq!(classify("R"), HostKey::Restart);
    }

    #[test]
    fn test_quit() {
        assert_eq!(classify("Escape"), HostKey::Quit);
    }

    #[test]
    fn test_other_keys() {
        for key in ["", " ", "Enter", "rr", "q", "ArrowUp"] {
            assert_eq!(classify(key), HostKey::Other, "{key:?}");
        }
    }
}
