use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

const DENSE_MAGNITUDE: i64 = 100;
const MEDIUM_MAGNITUDE: i64 = 5_000_200;
const HUGE_MAGNITUDE: i64 = 1_000_000_000_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DataCase {
    UniformPositive,
    UniformSigned,
    UniformNegative,
    DenseDuplicates,
    SparseHuge,
    AllEqual,
    AllZero,
    NearlySorted,
}

impl DataCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::UniformPositive => "uniform_positive",
            Self::UniformSigned => "uniform_signed",
            Self::UniformNegative => "uniform_negative",
            Self::DenseDuplicates => "dense_duplicates",
            Self::SparseHuge => "sparse_huge",
            Self::AllEqual => "all_equal",
            Self::AllZero => "all_zero",
            Self::NearlySorted => "nearly_sorted",
        }
    }
}

pub const ALL_CASES: [DataCase; 8] = [
    DataCase::UniformPositive,
    DataCase::UniformSigned,
    DataCase::UniformNegative,
    DataCase::DenseDuplicates,
    DataCase::SparseHuge,
    DataCase::AllEqual,
    DataCase::AllZero,
    DataCase::NearlySorted,
];

pub fn generate_case(case: DataCase, size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    match case {
        DataCase::UniformPositive => uniform_case(&mut rng, size, 0, MEDIUM_MAGNITUDE),
        DataCase::UniformSigned => uniform_case(&mut rng, size, -MEDIUM_MAGNITUDE, MEDIUM_MAGNITUDE),
        DataCase::UniformNegative => uniform_case(&mut rng, size, -MEDIUM_MAGNITUDE, -1),
        DataCase::DenseDuplicates => uniform_case(&mut rng, size, 0, DENSE_MAGNITUDE),
        DataCase::SparseHuge => uniform_case(&mut rng, size, 0, HUGE_MAGNITUDE),
        DataCase::AllEqual => vec![7; size],
        DataCase::AllZero => vec![0; size],
        DataCase::NearlySorted => nearly_sorted_case(&mut rng, size),
    }
}

fn uniform_case(rng: &mut StdRng, size: usize, low: i64, high: i64) -> Vec<i64> {
    let mut data = Vec::with_capacity(size);
    for _ in 0..size {
        data.push(rng.random_range(low..=high));
    }
    data
}

fn nearly_sorted_case(rng: &mut StdRng, size: usize) -> Vec<i64> {
    let mut data: Vec<i64> = (0..size as i64).collect();
    if size < 2 {
        return data;
    }

    let swaps = (size / 100).max(1);
    for _ in 0..swaps {
        let a = rng.random_range(0..size);
        let b = rng.random_range(0..size);
        data.swap(a, b);
    }
    data
}
