/// One discrete value per bucket: a plain counting pass over `0..buckets`
/// followed by an ascending expansion of each run.
pub(super) fn distribute(elements: &[u64], buckets: usize) -> Vec<u64> {
    let mut counts = vec![0_usize; buckets];
    for &value in elements {
        counts[value as usize] += 1;
    }

    let mut sorted = vec![0_u64; elements.len()];
    let mut out = 0_usize;
    for (value, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        sorted[out..(out + count)].fill(value as u64);
        out += count;
    }
    sorted
}
