//! Electric charge suffixes on chemical formulas.
//!
//! Recognized forms, all equivalent for calcium:
//! - repeated signs: `Ca++`
//! - sign then magnitude: `Ca+2`
//! - parenthesized: `Ca(2+)`, `Ca(+2)`, `Ca(++)`
//!
//! Digits directly before a single trailing sign belong to the preceding
//! symbol, so `NO3-` carries charge -1 and three oxygens.

use crate::aggregate::split_state_suffix;
use crate::error::{FormulaError, FormulaResult};

/// Parse the electric charge of a formula; zero when no suffix is present.
pub fn parse_charge(formula: &str) -> FormulaResult<i32> {
    let trimmed = formula.trim();
    let (body, _) = split_state_suffix(trimmed);
    let chars: Vec<char> = body.chars().collect();
    let (_, charge) = split_charge(&chars, trimmed)?;
    Ok(charge)
}

/// Split `chars` into the stoichiometric body and its charge.
///
/// Returns the length of the body (in chars) and the charge.
pub(crate) fn split_charge(chars: &[char], formula: &str) -> FormulaResult<(usize, i32)> {
    let n = chars.len();
    let Some(&last) = chars.last() else {
        return Ok((0, 0));
    };

    match last {
        '+' | '-' => {
            let run = chars.iter().rev().take_while(|&&c| c == last).count();
            let magnitude = i32::try_from(run).map_err(|_| malformed(formula, n - run))?;
            Ok((n - run, sign_of(last) * magnitude))
        }
        ')' => {
            let Some(open) = chars.iter().rposition(|&c| c == '(') else {
                return Ok((n, 0));
            };
            match parenthesized_charge(&chars[open + 1..n - 1], formula, open)? {
                Some(charge) => Ok((open, charge)),
                None => Ok((n, 0)),
            }
        }
        c if c.is_ascii_digit() => {
            let digits = chars.iter().rev().take_while(|c| c.is_ascii_digit()).count();
            let start = n - digits;
            match start.checked_sub(1).map(|i| chars[i]) {
                Some(sign @ ('+' | '-')) => {
                    let magnitude = parse_magnitude(&chars[start..], formula, start - 1)?;
                    Ok((start - 1, sign_of(sign) * magnitude))
                }
                _ => Ok((n, 0)),
            }
        }
        _ => Ok((n, 0)),
    }
}

/// Charge inside a trailing group such as `(2-)`, or `None` when the group
/// is ordinary stoichiometry like `(OH)`.
fn parenthesized_charge(inner: &[char], formula: &str, pos: usize) -> FormulaResult<Option<i32>> {
    let (Some(&first), Some(&last)) = (inner.first(), inner.last()) else {
        return Ok(None);
    };
    let is_sign = |c: char| c == '+' || c == '-';

    if is_sign(first) && inner.iter().all(|&c| c == first) {
        let magnitude = i32::try_from(inner.len()).map_err(|_| malformed(formula, pos))?;
        return Ok(Some(sign_of(first) * magnitude));
    }
    if is_sign(first) && inner[1..].iter().all(char::is_ascii_digit) {
        return Ok(Some(sign_of(first) * parse_magnitude(&inner[1..], formula, pos)?));
    }
    if is_sign(last) && inner[..inner.len() - 1].iter().all(char::is_ascii_digit) {
        let digits = &inner[..inner.len() - 1];
        return Ok(Some(sign_of(last) * parse_magnitude(digits, formula, pos)?));
    }
    Ok(None)
}

fn parse_magnitude(digits: &[char], formula: &str, pos: usize) -> FormulaResult<i32> {
    let magnitude = digits.iter().try_fold(0_i32, |acc, c| {
        let d = c.to_digit(10)? as i32;
        acc.checked_mul(10)?.checked_add(d)
    });
    match magnitude {
        Some(m) if m > 0 => Ok(m),
        _ => Err(malformed(formula, pos)),
    }
}

fn sign_of(c: char) -> i32 {
    if c == '-' { -1 } else { 1 }
}

fn malformed(formula: &str, pos: usize) -> FormulaError {
    FormulaError::MalformedCharge {
        formula: formula.to_string(),
        pos,
    }
}
