//! Built-in rule predicates.
//!
//! Each predicate takes the password and the rule threshold and returns `true`
//! when the rule FAILS.

/// Characters counted by `minSpecialChars`.
pub const SPECIAL_CHARS: &str = r"!@#$%^&*()-+\/{}[]";

/// Compare a character count against a possibly negative threshold.
fn below(count: usize, threshold: i64) -> bool {
    i64::try_from(count).is_ok_and(|count| count < threshold)
}

pub fn min_size(password: &str, value: i64) -> bool {
    below(password.chars().count(), value)
}

pub fn min_upper_case(password: &str, value: i64) -> bool {
    below(password.chars().filter(|c| c.is_uppercase()).count(), value)
}

pub fn min_lower_case(password: &str, value: i64) -> bool {
    below(password.chars().filter(|c| c.is_lowercase()).count(), value)
}

pub fn min_digit(password: &str, value: i64) -> bool {
    below(password.chars().filter(char::is_ascii_digit).count(), value)
}

pub fn min_special_chars(password: &str, value: i64) -> bool {
    let count = password
        .chars()
        .filter(|c| SPECIAL_CHARS.contains(*c))
        .count();
    below(count, value)
}

/// Fails on any pair of identical adjacent characters. `value` is ignored.
pub fn no_repeated(password: &str, _value: i64) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(2).any(|pair| pair[0] == pair[1])
}
