mod engine;
mod sign_split;

pub mod generator;

/// Tracks the deepest engine recursion level reached so far. The counter is
/// monotonic for the lifetime of the context: it never resets between sorts
/// that share it.
#[derive(Clone, Copy, Debug, Default)]
pub struct SortContext {
    max_recursion_level: usize,
}

impl SortContext {
    pub fn max_recursion_level(&self) -> usize {
        self.max_recursion_level
    }

    #[inline]
    pub(crate) fn observe_level(&mut self, level: usize) {
        if level > self.max_recursion_level {
            self.max_recursion_level = level;
        }
    }
}

pub fn sort_i64(data: &[i64]) -> Vec<i64> {
    let mut ctx = SortContext::default();
    sort_i64_with_ctx(data, &mut ctx)
}

pub fn sort_i64_with_ctx(data: &[i64], ctx: &mut SortContext) -> Vec<i64> {
    sign_split::sort(data, ctx)
}

/// Buffer-holding front end: load a sequence, sort it, read the result back.
#[derive(Clone, Debug, Default)]
pub struct AdaptiveSort {
    elements: Vec<i64>,
    sorted: Vec<i64>,
    ctx: SortContext,
}

impl AdaptiveSort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_elements(&mut self, elements: Vec<i64>) {
        self.elements = elements;
        self.sorted.clear();
    }

    pub fn elements(&self) -> &[i64] {
        &self.elements
    }

    /// Empty until the first successful `sort`.
    pub fn sorted_elements(&self) -> &[i64] {
        &self.sorted
    }

    /// Sorts the stored buffer. Returns false when there is nothing to sort.
    pub fn sort(&mut self) -> bool {
        if self.elements.is_empty() {
            return false;
        }
        self.sorted = sort_i64_with_ctx(&self.elements, &mut self.ctx);
        true
    }

    /// True iff a sorted buffer exists and every adjacent pair is
    /// non-decreasing.
    pub fn verify(&self) -> bool {
        if self.sorted.is_empty() {
            return false;
        }
        for i in 1..self.sorted.len() {
            if self.sorted[i - 1] > self.sorted[i] {
                return false;
            }
        }
        true
    }

    pub fn max_recursion_level(&self) -> usize {
        self.ctx.max_recursion_level()
    }
}
