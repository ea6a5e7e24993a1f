//! Chemical formula decomposition.
//!
//! A formula is a run of `<Symbol><Count>` tokens where a symbol is an
//! uppercase letter followed by lowercase letters or `_` (so site tags like
//! `Hfo_w` work) and a missing count means 1. On top of that:
//! - parenthesized groups take a multiplier: `Ca(NO3)2`
//! - hydrate parts follow `*`, `:` or `·` with an optional leading
//!   multiplier: `CaSO4*2H2O`
//! - a trailing aggregate-state tag is ignored: `NaX(ex)`
//! - a trailing charge suffix is split off (see [`crate::charge`])
//!
//! Repeated symbols are summed and keep the position of their first
//! occurrence.

use std::fmt;
use std::str::FromStr;

use crate::aggregate::split_state_suffix;
use crate::charge::split_charge;
use crate::error::{FormulaError, FormulaResult};

/// A parsed chemical formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    /// The formula as written (trimmed).
    text: String,
    /// Symbols and their total coefficients, in first-occurrence order.
    symbols: Vec<(String, i64)>,
    /// Net electric charge.
    charge: i32,
}

/// Parse a formula string into its symbols, coefficients and charge.
pub fn parse_formula(formula: &str) -> FormulaResult<Formula> {
    let text = formula.trim();
    let (body, _) = split_state_suffix(text);
    let chars: Vec<char> = body.chars().collect();
    let (end, charge) = split_charge(&chars, text)?;

    if end == 0 {
        return Err(FormulaError::Empty {
            formula: text.to_string(),
        });
    }

    let parser = Parser {
        formula: text,
        chars: &chars,
        end,
        pos: 0,
    };
    let symbols = parser.parse()?;

    Ok(Formula {
        text: text.to_string(),
        symbols,
        charge,
    })
}

impl Formula {
    /// Parse a formula string. Same as [`parse_formula`].
    pub fn parse(formula: &str) -> FormulaResult<Self> {
        parse_formula(formula)
    }

    /// The formula as given (trimmed).
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Symbols with their coefficients, in first-occurrence order.
    pub fn symbols(&self) -> &[(String, i64)] {
        &self.symbols
    }

    /// Coefficient of `symbol`, or 0 if the formula doesn't contain it.
    pub fn coefficient(&self, symbol: &str) -> i64 {
        self.symbols
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|(s, _)| s == symbol)
    }

    pub fn charge(&self) -> i32 {
        self.charge
    }

    pub fn is_neutral(&self) -> bool {
        self.charge == 0
    }

    /// Same formula with its charge replaced.
    pub fn with_charge(self, charge: i32) -> Self {
        Self { charge, ..self }
    }

    /// True when both formulas hold the same symbols with the same
    /// coefficients and the same charge, in any order.
    ///
    /// `"HCO3-"`, `"HCOOO-"` and `"HCO3(-)(aq)"` are all equivalent.
    pub fn equivalent(&self, other: &Formula) -> bool {
        self.charge == other.charge
            && self.symbols.len() == other.symbols.len()
            && self
                .symbols
                .iter()
                .all(|(s, c)| other.coefficient(s) == *c)
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_formula(s)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Largest coefficient a symbol may reach, explicit or summed.
const MAX_COUNT: i64 = u32::MAX as i64;

fn is_hydrate_separator(c: char) -> bool {
    matches!(c, '*' | ':' | '·')
}

fn is_symbol_tail(c: char) -> bool {
    c.is_ascii_lowercase() || c == '_'
}

struct Parser<'a> {
    formula: &'a str,
    chars: &'a [char],
    /// Length of the stoichiometric body; the charge suffix starts here.
    end: usize,
    pos: usize,
}

impl Parser<'_> {
    fn parse(mut self) -> FormulaResult<Vec<(String, i64)>> {
        let mut symbols = Vec::new();
        let mut multiplier = 1_i64;
        let mut part_start = 0;

        loop {
            let part = self.parse_sequence(0)?;
            if part.is_empty() {
                return Err(self.error_empty_group(part_start));
            }
            self.merge_scaled(&mut symbols, part, multiplier, part_start)?;

            match self.peek() {
                None => break,
                Some(c) if is_hydrate_separator(c) => {
                    part_start = self.pos;
                    self.pos += 1;
                    multiplier = self.parse_count()?.unwrap_or(1);
                }
                Some(c) => return Err(self.error_unexpected(c)),
            }
        }

        Ok(symbols)
    }

    /// Parse symbols and groups until the end, a closing parenthesis or a
    /// hydrate separator.
    fn parse_sequence(&mut self, depth: usize) -> FormulaResult<Vec<(String, i64)>> {
        let mut out = Vec::new();

        while let Some(c) = self.peek() {
            match c {
                'A'..='Z' => {
                    let at = self.pos;
                    let symbol = self.parse_symbol();
                    let count = self.parse_count()?.unwrap_or(1);
                    self.accumulate(&mut out, &symbol, count, at)?;
                }
                '(' => {
                    let open = self.pos;
                    self.pos += 1;
                    let inner = self.parse_sequence(depth + 1)?;
                    if self.peek() != Some(')') {
                        return Err(FormulaError::UnmatchedParen {
                            formula: self.formula.to_string(),
                            pos: open,
                        });
                    }
                    if inner.is_empty() {
                        return Err(self.error_empty_group(open));
                    }
                    self.pos += 1;
                    let count = self.parse_count()?.unwrap_or(1);
                    self.merge_scaled(&mut out, inner, count, open)?;
                }
                ')' if depth > 0 => break,
                ')' => {
                    return Err(FormulaError::UnmatchedParen {
                        formula: self.formula.to_string(),
                        pos: self.pos,
                    });
                }
                c if is_hydrate_separator(c) && depth == 0 => break,
                c => return Err(self.error_unexpected(c)),
            }
        }

        Ok(out)
    }

    fn parse_symbol(&mut self) -> String {
        let start = self.pos;
        self.pos += 1;
        while self.peek().is_some_and(is_symbol_tail) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    /// Parse an optional explicit count. Explicit counts must be positive
    /// integers.
    fn parse_count(&mut self) -> FormulaResult<Option<i64>> {
        let start = self.pos;
        let mut value = 0_i64;

        while let Some(d) = self.peek().and_then(|c| c.to_digit(10)) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i64::from(d)))
                .filter(|v| *v <= MAX_COUNT)
                .ok_or_else(|| self.error_overflow(start))?;
            self.pos += 1;
        }

        if self.pos == start {
            return Ok(None);
        }
        if self.peek() == Some('.') && self.peek_at(self.pos + 1).is_some_and(|c| c.is_ascii_digit()) {
            return Err(FormulaError::FractionalCount {
                formula: self.formula.to_string(),
                pos: start,
            });
        }
        if value == 0 {
            return Err(FormulaError::ZeroCount {
                formula: self.formula.to_string(),
                pos: start,
            });
        }
        Ok(Some(value))
    }

    fn accumulate(
        &self,
        out: &mut Vec<(String, i64)>,
        symbol: &str,
        count: i64,
        pos: usize,
    ) -> FormulaResult<()> {
        let within = |v: i64| (v <= MAX_COUNT).then_some(v);
        match out.iter_mut().find(|(s, _)| s == symbol) {
            Some((_, total)) => {
                *total = total
                    .checked_add(count)
                    .and_then(within)
                    .ok_or_else(|| self.error_overflow(pos))?;
            }
            None => {
                let count = within(count).ok_or_else(|| self.error_overflow(pos))?;
                out.push((symbol.to_string(), count));
            }
        }
        Ok(())
    }

    fn merge_scaled(
        &self,
        out: &mut Vec<(String, i64)>,
        part: Vec<(String, i64)>,
        multiplier: i64,
        pos: usize,
    ) -> FormulaResult<()> {
        for (symbol, count) in part {
            let scaled = count
                .checked_mul(multiplier)
                .ok_or_else(|| self.error_overflow(pos))?;
            self.accumulate(out, &symbol, scaled, pos)?;
        }
        Ok(())
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(self.pos)
    }

    fn peek_at(&self, i: usize) -> Option<char> {
        (i < self.end).then(|| self.chars[i])
    }

    fn error_unexpected(&self, ch: char) -> FormulaError {
        FormulaError::UnexpectedChar {
            formula: self.formula.to_string(),
            pos: self.pos,
            ch,
        }
    }

    fn error_empty_group(&self, pos: usize) -> FormulaError {
        FormulaError::EmptyGroup {
            formula: self.formula.to_string(),
            pos,
        }
    }

    fn error_overflow(&self, pos: usize) -> FormulaError {
        FormulaError::CountOverflow {
            formula: self.formula.to_string(),
            pos,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const SYMBOLS: [&str; 6] = ["Na", "K", "Ca", "X", "O", "H"];

    proptest! {
        #[test]
        fn coefficients_sum_over_tokens(
            tokens in prop::collection::vec((0..SYMBOLS.len(), 1_i64..50), 1..12)
        ) {
            let text: String = tokens
                .iter()
                .map(|(i, n)| if *n == 1 { SYMBOLS[*i].to_string() } else { format!("{}{}", SYMBOLS[*i], n) })
                .collect();
            let formula = parse_formula(&text).unwrap();

            for (i, symbol) in SYMBOLS.iter().enumerate() {
                let expected: i64 = tokens.iter().filter(|(j, _)| *j == i).map(|(_, n)| n).sum();
                prop_assert_eq!(formula.coefficient(symbol), expected);
            }
            prop_assert_eq!(formula.charge(), 0);
        }

        #[test]
        fn charge_suffix_forms_agree(symbol in 0..SYMBOLS.len(), z in 1_i32..6, negative in any::<bool>()) {
            let sign = if negative { '-' } else { '+' };
            let base = SYMBOLS[symbol];
            let expected = if negative { -z } else { z };

            let repeated = format!("{base}{}", sign.to_string().repeat(z as usize));
            let trailing = format!("{base}{sign}{z}");
            let grouped = format!("{base}({z}{sign})");

            for text in [repeated, trailing, grouped] {
                let formula = parse_formula(&text).unwrap();
                prop_assert_eq!(formula.charge(), expected);
                prop_assert_eq!(formula.coefficient(base), 1);
                prop_assert_eq!(formula.symbols().len(), 1);
            }
        }
    }
}
