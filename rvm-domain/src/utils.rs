/// Trims a text value; blank input becomes `None`.
pub fn normalize_optional_text(value: Option<String>) -> Option<String> {
    match value {
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        None => None,
    }
}

/// External machine code for the `seq`-th machine, e.g. `M003`.
pub fn machine_code(seq: usize) -> String {
    format!("M{:03}", seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machine_code_is_zero_padded() {
        assert_eq!(machine_code(3), "M003");
        assert_eq!(machine_code(1234), "M1234");
    }

    #[test]
    fn normalize_optional_text_drops_blank() {
        assert_eq!(normalize_optional_text(Some("  ".to_string())), None);
        assert_eq!(
            normalize_optional_text(Some(" a ".to_string())),
            Some("a".to_string())
        );
        assert_eq!(normalize_optional_text(None), None);
    }
}
