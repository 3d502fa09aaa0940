//! Phone number display formatting.

/// Characters a backend may already have used to group a number.
const SEPARATORS: &[char] = &[' ', '+', '-', '(', ')', '.', '\u{a0}'];

/// Format a raw phone identifier for display (e.g., "+7 (999) 123-45-67").
///
/// Recognized shapes (digits only, after stripping separators):
/// - 11 digits with country code `7` → `+7 (XXX) XXX-XX-XX`
/// - 11 digits with trunk prefix `8` → `8 (XXX) XXX-XX-XX`
/// - 10 digits → `(XXX) XXX-XX-XX`
///
/// Anything else is returned trimmed but otherwise unchanged. Digits are
/// never added, removed, or reordered.
pub fn format_phone_number(raw: &str) -> String {
    let raw = raw.trim();
    if raw.chars().any(|c| !c.is_ascii_digit() && !SEPARATORS.contains(&c)) {
        return raw.to_string();
    }

    let digits = digits_only(raw);
    match (digits.len(), digits.as_bytes().first()) {
        (11, Some(b'7')) => format!("+7 {}", group_national(&digits[1..])),
        (11, Some(b'8')) => format!("8 {}", group_national(&digits[1..])),
        (10, _) => group_national(&digits),
        _ => raw.to_string(),
    }
}

/// Group a 10-digit national number as `(XXX) XXX-XX-XX`.
fn group_national(d: &str) -> String {
    format!("({}) {}-{}-{}", &d[..3], &d[3..6], &d[6..8], &d[8..10])
}

/// Strip everything but ASCII digits.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_international() {
        let formatted = format_phone_number("79991234567");
        assert_eq!(formatted, "+7 (999) 123-45-67");
        assert_eq!(digits_only(&formatted), "79991234567");
    }

    #[test]
    fn test_format_trunk_prefix() {
        assert_eq!(format_phone_number("89991234567"), "8 (999) 123-45-67");
    }

    #[test]
    fn test_format_national() {
        assert_eq!(format_phone_number("9991234567"), "(999) 123-45-67");
    }

    #[test]
    fn test_format_already_grouped() {
        assert_eq!(format_phone_number("+7 999 123-45-67"), "+7 (999) 123-45-67");
        assert_eq!(format_phone_number(" 8(999)1234567 "), "8 (999) 123-45-67");
    }

    #[test]
    fn test_unexpected_input_passes_through() {
        assert_eq!(format_phone_number(""), "");
        assert_eq!(format_phone_number("   "), "");
        assert_eq!(format_phone_number("12345"), "12345");
        assert_eq!(format_phone_number("19991234567"), "19991234567");
        assert_eq!(format_phone_number("799912345678"), "799912345678");
        assert_eq!(format_phone_number("call me"), "call me");
        assert_eq!(format_phone_number("7999123456x"), "7999123456x");
    }

    #[test]
    fn test_digits_preserved() {
        let inputs = [
            "79991234567",
            "89001112233",
            "4951234567",
            "+7 (495) 000-00-00",
            "123",
            "",
            "00000000000",
        ];
        for raw in inputs {
            let formatted = format_phone_number(raw);
            assert_eq!(digits_only(&formatted), digits_only(raw), "input {raw:?}");
            // Deterministic
            assert_eq!(formatted, format_phone_number(raw));
        }
    }
}
