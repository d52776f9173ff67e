use serde::Serialize;

/// Why a calculator fell back to its neutral value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NeutralReason {
    /// A required record was absent.
    MissingInput,
    /// The reward or incentive period has ended.
    Expired,
    /// Emission rate or a stake figure is zero, so no boost mechanism applies.
    Inactive,
    /// A divisor was exactly zero.
    ZeroDenominator,
    /// The arithmetic produced NaN or an infinity.
    NonFinite,
}

/// A calculator result before the neutral-value policy is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Estimate {
    Value(f64),
    Neutral(NeutralReason),
}

impl Estimate {
    /// Wrap a computed value, turning NaN and infinities into `Neutral`.
    pub fn checked(value: f64) -> Self {
        if value.is_finite() {
            Estimate::Value(value)
        } else {
            Estimate::Neutral(NeutralReason::NonFinite)
        }
    }

    /// The computed value, or `neutral` if there is none.
    pub fn resolve(self, neutral: f64) -> f64 {
        match self {
            Estimate::Value(v) => v,
            Estimate::Neutral(_) => neutral,
        }
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, Estimate::Neutral(_))
    }

    pub fn reason(&self) -> Option<NeutralReason> {
        match self {
            Estimate::Value(_) => None,
            Estimate::Neutral(r) => Some(*r),
        }
    }
}

/// `Math.min` semantics: NaN in, NaN out.
pub(crate) fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_values_become_neutral() {
        assert_eq!(
            Estimate::checked(f64::NAN),
            Estimate::Neutral(NeutralReason::NonFinite)
        );
        assert_eq!(Estimate::checked(f64::INFINITY).resolve(1.0), 1.0);
        assert_eq!(Estimate::checked(2.5).resolve(1.0), 2.5);
    }

    #[test]
    fn nan_min_propagates_nan() {
        assert!(nan_min(f64::NAN, 1.0).is_nan());
        assert!(nan_min(1.0, f64::NAN).is_nan());
        assert_eq!(nan_min(f64::INFINITY, 3.0), 3.0);
    }
}
