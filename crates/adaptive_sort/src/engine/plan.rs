/// Bucket layout for one level of the sort: `buckets` contiguous value
/// ranges, each `scale_factor` wide. `scale_factor == 1` degenerates to one
/// discrete value per bucket.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct BucketPlan {
    pub buckets: usize,
    pub scale_factor: u64,
}

const TINY_RANGE: u64 = 35;
const SMALL_RANGE: u64 = 3_000;
const SMALL_RANGE_MIN_FILL: f64 = 0.5;
const MEDIUM_RANGE: u64 = 300_000;
const MEDIUM_RANGE_MIN_FILL: f64 = 0.85;
const MIN_BUCKETS: usize = 25;
const BUCKET_COUNT_FACTOR: f64 = 8.0;
const BUCKET_COUNT_BASE: usize = 100;

/// Picks a bucket count and width for a non-empty sequence whose exact
/// maximum is `max_value`. Value ranges that are dense relative to the input
/// size collapse to one value per bucket; for wide ranges the bucket count
/// grows sub-linearly with size and logarithmically with the range.
pub(crate) fn plan_for(size: usize, max_value: u64) -> BucketPlan {
    if max_value < TINY_RANGE {
        return one_value_per_bucket(max_value);
    }
    if max_value < SMALL_RANGE && size as f64 > max_value as f64 * SMALL_RANGE_MIN_FILL {
        return one_value_per_bucket(max_value);
    }
    if max_value < MEDIUM_RANGE && size as f64 > max_value as f64 * MEDIUM_RANGE_MIN_FILL {
        return one_value_per_bucket(max_value);
    }

    let buckets = if size < MIN_BUCKETS {
        MIN_BUCKETS
    } else {
        let estimate = (size as f64).powf(0.25) * (max_value as f64).ln() * BUCKET_COUNT_FACTOR;
        estimate as usize + BUCKET_COUNT_BASE
    };

    // Widened so `max_value + 1` cannot wrap at the top of the u64 range.
    let scale_factor = ((max_value as u128 + 1) / buckets as u128 + 1) as u64;
    if scale_factor <= 1 {
        return one_value_per_bucket(max_value);
    }

    BucketPlan {
        buckets,
        scale_factor,
    }
}

#[inline]
fn one_value_per_bucket(max_value: u64) -> BucketPlan {
    BucketPlan {
        buckets: (max_value + 1) as usize,
        scale_factor: 1,
    }
}
