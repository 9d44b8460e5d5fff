use crate::{SpError, SpResult};

/// Edge weight and path distance type.
pub type Weight = f64;

/// Distance of a node that has not been reached.
pub const UNREACHED: Weight = Weight::INFINITY;

/// Accept a weight only if it is finite and non-negative.
///
/// A single finite weight can still overflow once summed along a path; the
/// graph checks that its total edge weight stays finite.
pub fn ensure_weight(v: Weight, what: &'static str) -> SpResult<Weight> {
    if !v.is_finite() {
        Err(SpError::NonFinite { what, value: v })
    } else if v < 0.0 {
        Err(SpError::Negative { what, value: v })
    } else {
        Ok(v)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn finite_non_negative_weights_pass_through(w in 0.0_f64..1.0e12) {
            prop_assert_eq!(ensure_weight(w, "w").unwrap(), w);
        }

        #[test]
        fn negative_weights_rejected(w in -1.0e12_f64..-1.0e-12) {
            prop_assert!(ensure_weight(w, "w").is_err());
        }
    }
}
