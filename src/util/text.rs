//! Character-level text helpers.
//!
//! "Word characters" follow the regex `\w` class: alphanumerics plus `_`.

/// Whether `c` belongs to the `\w` class.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Title-case test: at least one cased character, every uppercase
/// character starts a cased run and every lowercase character continues one.
///
/// `"Their"` and `"New York"` are title case; `"THEIR"`, `"their"` and
/// `"McDonald"` are not.
pub fn is_title_case(s: &str) -> bool {
    let mut cased_seen = false;
    let mut previous_cased = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            cased_seen = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            cased_seen = true;
        } else {
            previous_cased = false;
        }
    }

    cased_seen
}

/// Whether every character of `s` is ASCII punctuation. True for `""`.
pub fn is_punctuation_only(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_punctuation())
}

/// Strip ASCII punctuation from both ends.
pub fn strip_punctuation(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_ascii_punctuation())
}

/// Remove every non-word character that is not flanked by word characters
/// on both sides.
///
/// Interior separators survive (`"a-b"`), leading, trailing and doubled ones
/// do not (`"a..bc!"` becomes `"abc"`).
pub fn remove_extra_characters(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());

    for (i, &c) in chars.iter().enumerate() {
        if is_word_char(c) {
            out.push(c);
            continue;
        }
        let before = i > 0 && is_word_char(chars[i - 1]);
        let after = chars.get(i + 1).is_some_and(|&n| is_word_char(n));
        if before && after {
            out.push(c);
        }
    }

    out
}

/// Cut trailing garbage after the last alphabetic character.
///
/// If a non-word character follows the last letter, or the last digit sits
/// after the last letter, everything after that letter is dropped. A string
/// without letters is cut to nothing under the same conditions.
pub fn remove_extra_characters_and_digits(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let last_alpha = chars.iter().rposition(|c| c.is_alphabetic());
    let tail_start = last_alpha.map_or(0, |i| i + 1);

    let non_word_in_tail = chars[tail_start..].iter().any(|&c| !is_word_char(c));
    let last_digit = chars.iter().rposition(|c| c.is_numeric());
    let digit_after_alpha = match (last_digit, last_alpha) {
        (Some(d), Some(a)) => d > a,
        (Some(_), None) => true,
        _ => false,
    };

    if non_word_in_tail || digit_after_alpha {
        chars[..tail_start].iter().collect()
    } else {
        s.to_string()
    }
}
