pub(crate) mod plan;

mod counting;
mod dense_table;
mod sparse;

use crate::SortContext;

use self::plan::BucketPlan;

const NARROW_TABLE_MAX_SCALE: u64 = 50;
const NARROW_TABLE_MIN_SIZE: usize = 15;
const WIDE_TABLE_MAX_SCALE: u64 = 15_000;
const WIDE_TABLE_MAX_CELLS: u64 = 250_000;
const WIDE_TABLE_MIN_FILL: f64 = 0.22;

/// Sorts a bounded sequence into a freshly allocated buffer. `max_value`
/// must be the exact maximum of `elements` whenever `elements` is non-empty;
/// callers establish this either by scanning the input or by tracking the
/// largest remainder placed into a bucket.
pub(crate) fn sort_bounded(
    elements: &[u64],
    max_value: u64,
    level: usize,
    ctx: &mut SortContext,
) -> Vec<u64> {
    ctx.observe_level(level);

    let size = elements.len();
    if size == 0 || max_value == 0 {
        // A zero bound means every element is zero.
        return vec![0; size];
    }
    if size == 1 {
        return vec![elements[0]];
    }
    if size == 2 {
        let (a, b) = (elements[0], elements[1]);
        return if a <= b { vec![a, b] } else { vec![b, a] };
    }

    let BucketPlan {
        buckets,
        scale_factor,
    } = plan::plan_for(size, max_value);

    if scale_factor == 1 {
        return counting::distribute(elements, buckets);
    }

    let cells = buckets as u64 * scale_factor;
    let narrow = scale_factor < NARROW_TABLE_MAX_SCALE && size > NARROW_TABLE_MIN_SIZE;
    let wide = size > 1
        && scale_factor < WIDE_TABLE_MAX_SCALE
        && cells < WIDE_TABLE_MAX_CELLS
        && size as f64 > cells as f64 * WIDE_TABLE_MIN_FILL;

    if narrow || wide {
        return dense_table::distribute(elements, buckets, scale_factor);
    }

    sparse::distribute(elements, buckets, scale_factor, level, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bound_yields_zeros() {
        let mut ctx = SortContext::default();
        assert_eq!(sort_bounded(&[0, 0, 0], 0, 0, &mut ctx), vec![0, 0, 0]);
        assert!(sort_bounded(&[], 7, 0, &mut ctx).is_empty());
    }

    #[test]
    fn two_element_base_case() {
        let mut ctx = SortContext::default();
        assert_eq!(sort_bounded(&[9, 4], 9, 0, &mut ctx), vec![4, 9]);
        assert_eq!(sort_bounded(&[4, 9], 9, 0, &mut ctx), vec![4, 9]);
        assert_eq!(sort_bounded(&[9, 9], 9, 0, &mut ctx), vec![9, 9]);
    }

    #[test]
    fn clustered_sparse_input_recurses() {
        // Pairs that land in the same bucket with distinct remainders force
        // a recursive refinement pass.
        let mut elements = Vec::new();
        for i in 0..10_u64 {
            elements.push(i * 1_000_000_000_000 + 3);
            elements.push(i * 1_000_000_000_000 + 700_000);
        }
        let max = *elements.iter().max().unwrap();

        let mut ctx = SortContext::default();
        let sorted = sort_bounded(&elements, max, 0, &mut ctx);

        let mut expected = elements.clone();
        expected.sort_unstable();
        assert_eq!(sorted, expected);
        assert!(ctx.max_recursion_level() >= 1);
    }

    #[test]
    fn output_is_fresh_and_input_untouched() {
        let elements = vec![5_u64, 1, 4, 1, 5, 9, 2, 6];
        let before = elements.clone();
        let mut ctx = SortContext::default();
        let sorted = sort_bounded(&elements, 9, 0, &mut ctx);
        assert_eq!(elements, before);
        assert_eq!(sorted, vec![1, 1, 2, 4, 5, 5, 6, 9]);
    }
}
