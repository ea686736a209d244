//! `String(RegExp(pattern))` for flagless patterns.
//!
//! Follows the runtime's non-unicode (Annex B) pattern grammar closely
//! enough to classify every value the bootstrap feeds it. Constructs it
//! does not model (lookarounds, named groups, escapes inside class ranges,
//! escaped line terminators) are rejected rather than guessed at: a
//! rejected pattern only loses a table entry, an accepted invalid one
//! would emit a program that throws.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("nothing to repeat at offset {0}")]
    NothingToRepeat(usize),
    #[error("unmatched ')' at offset {0}")]
    UnmatchedParen(usize),
    #[error("unterminated group")]
    UnterminatedGroup,
    #[error("unterminated character class at offset {0}")]
    UnterminatedClass(usize),
    #[error("range out of order in character class at offset {0}")]
    RangeOutOfOrder(usize),
    #[error("numbers out of order in {{}} quantifier at offset {0}")]
    QuantifierOutOfOrder(usize),
    #[error("\\ at end of pattern")]
    TrailingBackslash,
    #[error("unsupported construct at offset {0}")]
    Unsupported(usize),
}

/// Stringified regular expression, `/source/`.
pub fn regexp_string(pattern: &str) -> Result<String, PatternError> {
    Ok(format!("/{}/", pattern_source(pattern)?))
}

/// The `source` property of `RegExp(pattern)`, or the reason construction throws.
pub fn pattern_source(pattern: &str) -> Result<String, PatternError> {
    if pattern.is_empty() {
        return Ok("(?:)".to_string());
    }

    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 2);
    let mut depth = 0usize;
    let mut quantifiable = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\\' => {
                let next = *chars.get(i + 1).ok_or(PatternError::TrailingBackslash)?;
                if is_line_terminator(next) {
                    return Err(PatternError::Unsupported(i));
                }
                out.push('\\');
                out.push(next);
                // \b and \B are assertions
                quantifiable = !matches!(next, 'b' | 'B');
                i += 2;
            }
            '(' => {
                if chars.get(i + 1) == Some(&'?') {
                    if chars.get(i + 2) != Some(&':') {
                        return Err(PatternError::Unsupported(i));
                    }
                    out.push_str("(?:");
                    i += 3;
                } else {
                    out.push('(');
                    i += 1;
                }
                depth += 1;
                quantifiable = false;
            }
            ')' => {
                if depth == 0 {
                    return Err(PatternError::UnmatchedParen(i));
                }
                depth -= 1;
                out.push(')');
                quantifiable = true;
                i += 1;
            }
            '[' => {
                let end = class_end(&chars, i)?;
                for &member in &chars[i..=end] {
                    push_escaped(&mut out, member, true);
                }
                quantifiable = true;
                i = end + 1;
            }
            '*' | '+' | '?' => {
                if !quantifiable {
                    return Err(PatternError::NothingToRepeat(i));
                }
                out.push(c);
                i += 1;
                i = push_lazy_marker(&mut out, &chars, i);
                quantifiable = false;
            }
            '{' => match braced_quantifier(&chars[i..]) {
                Some((len, min, max)) => {
                    if !quantifiable {
                        return Err(PatternError::NothingToRepeat(i));
                    }
                    if max.is_some_and(|max| max < min) {
                        return Err(PatternError::QuantifierOutOfOrder(i));
                    }
                    out.extend(&chars[i..i + len]);
                    i = push_lazy_marker(&mut out, &chars, i + len);
                    quantifiable = false;
                }
                // Annex B: a brace that does not start a quantifier is literal
                None => {
                    out.push('{');
                    quantifiable = true;
                    i += 1;
                }
            },
            '^' | '$' | '|' => {
                out.push(c);
                quantifiable = false;
                i += 1;
            }
            _ => {
                push_escaped(&mut out, c, false);
                quantifiable = true;
                i += 1;
            }
        }
    }

    if depth != 0 {
        return Err(PatternError::UnterminatedGroup);
    }
    Ok(out)
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn push_escaped(out: &mut String, c: char, in_class: bool) {
    match c {
        '/' if !in_class => out.push_str("\\/"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\u{2028}' => out.push_str("\\u2028"),
        '\u{2029}' => out.push_str("\\u2029"),
        _ => out.push(c),
    }
}

fn push_lazy_marker(out: &mut String, chars: &[char], i: usize) -> usize {
    if chars.get(i) == Some(&'?') {
        out.push('?');
        i + 1
    } else {
        i
    }
}

/// Index of the `]` closing the class opened at `start`.
fn class_end(chars: &[char], start: usize) -> Result<usize, PatternError> {
    let mut i = start + 1;
    if chars.get(i) == Some(&'^') {
        i += 1;
    }

    // None marks an escape
    let mut members: Vec<Option<char>> = Vec::new();
    loop {
        match chars.get(i) {
            None => return Err(PatternError::UnterminatedClass(start)),
            Some(']') => break,
            Some('\\') => {
                let next = *chars.get(i + 1).ok_or(PatternError::TrailingBackslash)?;
                if is_line_terminator(next) {
                    return Err(PatternError::Unsupported(i));
                }
                members.push(None);
                i += 2;
            }
            Some(&c) => {
                members.push(Some(c));
                i += 1;
            }
        }
    }

    let mut k = 0;
    while k < members.len() {
        if k + 2 < members.len() && members[k + 1] == Some('-') {
            match (members[k], members[k + 2]) {
                (Some(lo), Some(hi)) if lo > hi => return Err(PatternError::RangeOutOfOrder(start)),
                (Some(_), Some(_)) => {}
                _ => return Err(PatternError::Unsupported(start)),
            }
            k += 3;
        } else {
            k += 1;
        }
    }

    Ok(i)
}

/// `{n}`, `{n,}` or `{n,m}` at the start of `rest`: (length, n, m).
fn braced_quantifier(rest: &[char]) -> Option<(usize, u64, Option<u64>)> {
    let mut i = 1;
    let min = read_number(rest, &mut i)?;
    match rest.get(i)? {
        '}' => Some((i + 1, min, Some(min))),
        ',' => {
            i += 1;
            let max = read_number(rest, &mut i);
            (rest.get(i)? == &'}').then_some((i + 1, min, max))
        }
        _ => None,
    }
}

fn read_number(chars: &[char], i: &mut usize) -> Option<u64> {
    let start = *i;
    let mut value: u64 = 0;
    while let Some(digit) = chars.get(*i).and_then(|c| c.to_digit(10)) {
        value = value.saturating_mul(10).saturating_add(u64::from(digit));
        *i += 1;
    }
    (*i > start).then_some(value)
}
