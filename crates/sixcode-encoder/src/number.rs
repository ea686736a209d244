//! Unsigned integers as numeric expressions.

use std::sync::LazyLock;

/// `0` through `9`. Each digit past 2 adds one more `true` to the previous.
static DIGITS: LazyLock<[String; 10]> = LazyLock::new(|| {
    let mut digits: [String; 10] = Default::default();
    digits[0] = "+[]".to_string();
    digits[1] = "+!![]".to_string();
    digits[2] = "!![]+!![]".to_string();
    for i in 3..10 {
        digits[i] = format!("!![]+{}", digits[i - 1]);
    }
    digits
});

/// Expression for a single decimal digit. Panics above 9.
pub fn digit(d: usize) -> &'static str {
    &DIGITS[d]
}

/// Expression evaluating to `n`.
///
/// Below 10 this is a number. From 10 on it is the decimal string built by
/// concatenating the leading digit with single-element arrays holding the
/// remaining digits, e.g. `123` is `1+[2]+[3]`.
pub fn uint(n: usize) -> String {
    if n < 10 {
        return digit(n).to_string();
    }

    let mut result = format!("[{}]", digit(n % 10));
    let mut n = n / 10;
    while n >= 10 {
        result = format!("[{}]+{}", digit(n % 10), result);
        n /= 10;
    }
    format!("{}+{}", digit(n), result)
}

/// `n` as an expression that is always a string, suitable as the first
/// operand of a concatenation.
pub fn uint_string(n: usize) -> String {
    if n < 10 {
        format!("{}+[]", digit(n))
    } else {
        uint(n)
    }
}
