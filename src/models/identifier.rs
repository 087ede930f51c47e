//! Service tag / IMEI classification of free-text identifiers

/// Minimum number of digits for an identifier to be treated as an IMEI
pub const IMEI_MIN_DIGITS: usize = 10;

/// The two mutually exclusive identifier slots of an equipment record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identifiers {
    pub service_tag: String,
    pub imei: String,
}

impl Identifiers {
    /// Split a free-text identifier into its service tag or IMEI slot.
    ///
    /// The input is used verbatim (no trimming, no case folding). A string made
    /// only of ASCII digits, at least `IMEI_MIN_DIGITS` long, is an IMEI;
    /// anything else non-empty is a service tag. Empty or absent input leaves
    /// both slots empty.
    pub fn classify(input: Option<&str>) -> Self {
        match input {
            None | Some("") => Self::default(),
            Some(value) if is_imei(value) => Self {
                service_tag: String::new(),
                imei: value.to_string(),
            },
            Some(value) => Self {
                service_tag: value.to_string(),
                imei: String::new(),
            },
        }
    }
}

/// Whether `value` has the shape of an IMEI
pub fn is_imei(value: &str) -> bool {
    value.len() >= IMEI_MIN_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_digit_string_is_imei() {
        let ids = Identifiers::classify(Some("359876543210123"));
        assert_eq!(ids.imei, "359876543210123");
        assert_eq!(ids.service_tag, "");
    }

    #[test]
    fn test_exactly_ten_digits_is_imei() {
        let ids = Identifiers::classify(Some("0123456789"));
        assert_eq!(ids.imei, "0123456789");
        assert!(ids.service_tag.is_empty());
    }

    #[test]
    fn test_short_or_mixed_is_service_tag() {
        for input in ["ABC123", "123456789", "12345678901a", " 1234567890", "１２３４５６７８９０"] {
            let ids = Identifiers::classify(Some(input));
            assert_eq!(ids.service_tag, input, "input {:?}", input);
            assert!(ids.imei.is_empty(), "input {:?}", input);
        }
    }

    #[test]
    fn test_empty_and_absent() {
        assert_eq!(Identifiers::classify(None), Identifiers::default());
        assert_eq!(Identifiers::classify(Some("")), Identifiers::default());
    }

    #[test]
    fn test_input_is_not_normalized() {
        let ids = Identifiers::classify(Some("  abc123 "));
        assert_eq!(ids.service_tag, "  abc123 ");
    }
}
