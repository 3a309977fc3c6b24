use crate::SortContext;

/// Per-bucket remainder lists for large, sparse value ranges. A bucket whose
/// remainders still differ is refined by re-entering the engine with that
/// bucket's maximum remainder as the new, strictly smaller bound.
pub(super) fn distribute(
    elements: &[u64],
    buckets: usize,
    scale_factor: u64,
    level: usize,
    ctx: &mut SortContext,
) -> Vec<u64> {
    let size = elements.len();
    let mut bucket_counts = vec![0_usize; buckets];
    let mut representatives = vec![0_u64; buckets];
    let mut bucket_of = Vec::with_capacity(size);

    for &value in elements {
        let bucket = (value / scale_factor) as usize;
        bucket_of.push(bucket);
        representatives[bucket] = value;
        bucket_counts[bucket] += 1;
    }

    // Remainder lists sized to their exact counts; empty buckets stay
    // unallocated.
    let mut remainders: Vec<Vec<u64>> = bucket_counts
        .iter()
        .map(|&count| Vec::with_capacity(count))
        .collect();
    let mut max_remainders = vec![0_u64; buckets];

    for (i, &value) in elements.iter().enumerate() {
        let bucket = bucket_of[i];
        let remainder = value % scale_factor;
        if remainder > max_remainders[bucket] {
            max_remainders[bucket] = remainder;
        }
        remainders[bucket].push(remainder);
    }

    let mut sorted = Vec::with_capacity(size);
    for bucket in 0..buckets {
        let count = bucket_counts[bucket];
        if count == 0 {
            continue;
        }
        if count > 1 && max_remainders[bucket] > 0 {
            let refined =
                super::sort_bounded(&remainders[bucket], max_remainders[bucket], level + 1, ctx);
            let base = bucket as u64 * scale_factor;
            sorted.extend(refined.iter().map(|&remainder| base + remainder));
        } else {
            // Either a single element, or every element in the bucket
            // collapsed to the same value.
            let value = representatives[bucket];
            sorted.resize(sorted.len() + count, value);
        }
    }
    sorted
}
