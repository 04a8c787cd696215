/// Progressive mask for Brazilian phone numbers, applied on every
/// keystroke. Keeps at most 11 digits (2 area code + 9 local) and
/// renders `(DD) DDDDD-DDDD` once 8 or more digits were typed.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(11)
        .collect();

    match digits.len() {
        0..=2 => digits,
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

#[cfg(test)]
mod tests {
    use super::format_phone;

    #[test]
    fn short_inputs_stay_as_typed() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("6"), "6");
        assert_eq!(format_phone("61"), "61");
    }

    #[test]
    fn area_code_opens_after_the_third_digit() {
        assert_eq!(format_phone("619"), "(61) 9");
        assert_eq!(format_phone("61999"), "(61) 999");
        assert_eq!(format_phone("6199998"), "(61) 99998");
    }

    #[test]
    fn eight_or_more_digits_get_the_dash() {
        assert_eq!(format_phone("61999988"), "(61) 99998-8");
        assert_eq!(format_phone("61999988888"), "(61) 99998-8888");
    }

    #[test]
    fn ten_digit_input_splits_five_three() {
        assert_eq!(format_phone("6199998888"), "(61) 99998-888");
    }

    #[test]
    fn extra_digits_are_dropped() {
        assert_eq!(format_phone("619999888884444"), "(61) 99998-8888");
    }

    #[test]
    fn formatting_is_stable_over_its_own_output() {
        let once = format_phone("61 99998-8888");
        assert_eq!(once, "(61) 99998-8888");
        assert_eq!(format_phone(&once), once);
    }

    #[test]
    fn non_digits_are_stripped_first() {
        assert_eq!(format_phone("+55 (61) 9.9998"), "(55) 61999-998");
        assert_eq!(format_phone("abc"), "");
    }
}
