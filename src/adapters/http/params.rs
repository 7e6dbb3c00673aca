//! Query-string helpers shared by the listing endpoints.

/// `?status=` with nothing after it means "no filter".
pub fn blank_as_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_dropped() {
        assert_eq!(blank_as_none(Some("  ".to_string())), None);
        assert_eq!(blank_as_none(None), None);
        assert_eq!(
            blank_as_none(Some("active".to_string())),
            Some("active".to_string())
        );
    }
}
