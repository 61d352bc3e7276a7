//! Odd-index truncated series summation.

use super::error::DuctError;

/// Number of leading series terms retained before the remainder is dropped.
///
/// Only odd indices contribute to the rectangular-duct series: the analytic
/// coefficient of every even index is structurally zero for this geometry and
/// boundary-condition combination, so even indices are skipped outright
/// rather than summed as zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TruncationOrder(u32);

impl TruncationOrder {
    /// The conventional default order, accurate to well below 1e-4 relative
    /// for the discharge of moderate aspect ratios.
    pub const DEFAULT: Self = Self(30);

    /// Creates a truncation order from the highest index to retain.
    ///
    /// If `imax` is even, the last contributing index is `imax - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`DuctError::InvalidTruncationOrder`] if `imax < 1`. A zero
    /// order would silently produce an empty (zero-valued) sum, which is
    /// indistinguishable from a legitimate result and masks caller bugs.
    pub fn new(imax: u32) -> Result<Self, DuctError> {
        if imax < 1 {
            return Err(DuctError::InvalidTruncationOrder(imax));
        }
        Ok(Self(imax))
    }

    /// The highest retained index.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// The contributing indices `1, 3, 5, …` up to the order.
    pub(crate) fn odd_indices(self) -> impl Iterator<Item = u32> {
        (1..=self.0).step_by(2)
    }
}

impl Default for TruncationOrder {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Sums `term(i)` over the odd indices of `order`, in increasing order.
///
/// Pure in its inputs; no convergence check is performed, so the truncation
/// error is the caller's responsibility via `order`.
pub(crate) fn sum_over_odd_indices<F>(order: TruncationOrder, term: F) -> f64
where
    F: Fn(u32) -> f64,
{
    order.odd_indices().map(term).sum()
}

/// The alternating sign `(-1)^((i-1)/2)` shared by the field kernels.
///
/// `i` must be odd, so the exponent is integral: `+1, -1, +1, …` for
/// `i = 1, 3, 5, …`.
pub(crate) fn alternating_sign(i: u32) -> f64 {
    if ((i - 1) / 2) % 2 == 0 { 1.0 } else { -1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_order_includes_its_own_index() {
        let order = TruncationOrder::new(7).unwrap();
        assert_eq!(order.odd_indices().collect::<Vec<_>>(), vec![1, 3, 5, 7]);
    }

    #[test]
    fn even_order_stops_one_short() {
        let order = TruncationOrder::new(8).unwrap();
        assert_eq!(order.odd_indices().collect::<Vec<_>>(), vec![1, 3, 5, 7]);
    }

    #[test]
    fn single_term_order_is_legal() {
        let order = TruncationOrder::new(1).unwrap();
        assert_eq!(order.odd_indices().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn zero_order_is_rejected() {
        assert!(matches!(
            TruncationOrder::new(0),
            Err(DuctError::InvalidTruncationOrder(0))
        ));
    }

    #[test]
    fn default_order_is_thirty() {
        assert_eq!(TruncationOrder::default().get(), 30);
    }

    #[test]
    fn sign_alternates_over_odd_indices() {
        let signs: Vec<f64> = [1, 3, 5, 7, 9].iter().map(|&i| alternating_sign(i)).collect();
        assert_eq!(signs, vec![1.0, -1.0, 1.0, -1.0, 1.0]);
    }

    #[test]
    fn summation_folds_terms_in_index_order() {
        let order = TruncationOrder::new(5).unwrap();
        let sum = sum_over_odd_indices(order, |i| f64::from(i));
        assert_eq!(sum, 9.0);
    }
}
