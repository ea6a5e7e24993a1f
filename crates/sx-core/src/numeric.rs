use crate::SxError;

/// Floating point type used for amounts and fractions.
pub type Real = f64;

/// Absolute/relative tolerance pair.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, SxError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SxError::NonFinite { what, value: v })
    }
}

/// Accept a finite, non-negative amount (mole fraction, moles, ...).
pub fn ensure_amount(v: Real, what: &'static str) -> Result<Real, SxError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(SxError::InvalidArg {
            what: format!("negative {what}: {v}"),
        });
    }
    Ok(v)
}
