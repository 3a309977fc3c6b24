use crate::SortContext;
use crate::engine;

/// Splits a signed sequence so the engine only ever sees non-negative
/// values. Negatives travel through it as `u64` magnitudes and are
/// re-negated on the way out; `unsigned_abs` / `wrapping_neg` round-trips
/// `i64::MIN`, whose magnitude has no `i64` representation.
pub(crate) fn sort(elements: &[i64], ctx: &mut SortContext) -> Vec<i64> {
    if elements.is_empty() {
        return Vec::new();
    }

    let mut min = elements[0];
    let mut max = elements[0];
    let mut negatives = 0_usize;
    for &value in elements {
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
        if value < 0 {
            negatives += 1;
        }
    }

    if negatives == 0 {
        let values: Vec<u64> = elements.iter().map(|&v| v as u64).collect();
        let sorted = engine::sort_bounded(&values, max as u64, 0, ctx);
        return sorted.into_iter().map(|v| v as i64).collect();
    }

    if negatives == elements.len() {
        let magnitudes: Vec<u64> = elements.iter().map(|&v| v.unsigned_abs()).collect();
        let sorted = engine::sort_bounded(&magnitudes, min.unsigned_abs(), 0, ctx);
        return sorted
            .iter()
            .rev()
            .map(|&m| (m as i64).wrapping_neg())
            .collect();
    }

    let mut negative_magnitudes = Vec::with_capacity(negatives);
    let mut non_negatives = Vec::with_capacity(elements.len() - negatives);
    for &value in elements {
        if value < 0 {
            negative_magnitudes.push(value.unsigned_abs());
        } else {
            non_negatives.push(value as u64);
        }
    }

    let sorted_negatives = engine::sort_bounded(&negative_magnitudes, min.unsigned_abs(), 0, ctx);
    let sorted_non_negatives = engine::sort_bounded(&non_negatives, max as u64, 0, ctx);

    // Largest magnitude first: the most negative value leads the output.
    let mut sorted = Vec::with_capacity(elements.len());
    sorted.extend(
        sorted_negatives
            .iter()
            .rev()
            .map(|&m| (m as i64).wrapping_neg()),
    );
    sorted.extend(sorted_non_negatives.iter().map(|&m| m as i64));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i64_min_round_trips() {
        let mut ctx = SortContext::default();
        let sorted = sort(&[0, i64::MIN, -1, i64::MAX], &mut ctx);
        assert_eq!(sorted, vec![i64::MIN, -1, 0, i64::MAX]);
    }

    #[test]
    fn all_negative_reverses_magnitudes() {
        let mut ctx = SortContext::default();
        let sorted = sort(&[-7, -3_000, -1, -7], &mut ctx);
        assert_eq!(sorted, vec![-3_000, -7, -7, -1]);
    }

    #[test]
    fn all_non_negative_passes_straight_through() {
        let mut ctx = SortContext::default();
        let sorted = sort(&[3, 0, 2, 2, 1], &mut ctx);
        assert_eq!(sorted, vec![0, 1, 2, 2, 3]);
    }
}
