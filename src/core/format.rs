const GROUP_LEN: usize = 4;

/// ASCII digits of `raw`, in order.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

pub fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Group the digits of `raw` as "#### #### ...". Non-digits are dropped and
/// the digit count is not capped.
pub fn format_card_number(raw: &str) -> String {
    let digits = digits_only(raw);
    let mut out = String::with_capacity(digits.len() + digits.len() / GROUP_LEN);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && idx % GROUP_LEN == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
