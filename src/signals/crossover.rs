// =============================================================================
// Crossover predicates
// =============================================================================
//
// A series crosses above another when it was at-or-below on the previous bar
// and strictly above on the current one. Every operand must be defined for
// the predicate to hold — an undefined value can never participate in a
// crossing.

/// `a` crossed above `b` between the previous and current bar.
pub fn crossed_above(
    prev_a: Option<f64>,
    prev_b: Option<f64>,
    curr_a: Option<f64>,
    curr_b: Option<f64>,
) -> bool {
    match (prev_a, prev_b, curr_a, curr_b) {
        (Some(pa), Some(pb), Some(ca), Some(cb)) => pa <= pb && ca > cb,
        _ => false,
    }
}

/// `a` crossed below `b` between the previous and current bar.
pub fn crossed_below(
    prev_a: Option<f64>,
    prev_b: Option<f64>,
    curr_a: Option<f64>,
    curr_b: Option<f64>,
) -> bool {
    match (prev_a, prev_b, curr_a, curr_b) {
        (Some(pa), Some(pb), Some(ca), Some(cb)) => pa >= pb && ca < cb,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crosses_from_below() {
        assert!(crossed_above(Some(1.0), Some(2.0), Some(3.0), Some(2.0)));
        assert!(!crossed_above(Some(3.0), Some(2.0), Some(4.0), Some(2.0))); // already above
        assert!(!crossed_above(Some(1.0), Some(2.0), Some(2.0), Some(2.0))); // touch, not cross
    }

    #[test]
    fn equality_on_previous_bar_counts() {
        // prev at-or-below, curr strictly above.
        assert!(crossed_above(Some(2.0), Some(2.0), Some(2.5), Some(2.0)));
        assert!(crossed_below(Some(2.0), Some(2.0), Some(1.5), Some(2.0)));
    }

    #[test]
    fn crosses_from_above() {
        assert!(crossed_below(Some(3.0), Some(2.0), Some(1.0), Some(2.0)));
        assert!(!crossed_below(Some(1.0), Some(2.0), Some(0.5), Some(2.0))); // already below
    }

    #[test]
    fn undefined_operand_never_crosses() {
        assert!(!crossed_above(None, Some(2.0), Some(3.0), Some(2.0)));
        assert!(!crossed_above(Some(1.0), Some(2.0), None, Some(2.0)));
        assert!(!crossed_below(Some(3.0), None, Some(1.0), Some(2.0)));
        assert!(!crossed_below(Some(3.0), Some(2.0), Some(1.0), None));
    }
}
