/// Occurrence counts for every dictionary index. Sized to the dictionary capacity, so
/// most entries stay at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqTable {
    counts: Vec<u64>,
}

impl FreqTable {
    /// Create an all-zero table for a dictionary of `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            counts: vec![0; capacity],
        }
    }

    /// Count one more occurrence of `idx`.
    #[inline(always)]
    pub fn record(&mut self, idx: u16) {
        self.counts[idx as usize] += 1;
    }

    /// Count for `idx`, zero when the index is outside the table.
    pub fn get(&self, idx: u16) -> u64 {
        self.counts.get(idx as usize).copied().unwrap_or(0)
    }

    /// Size of the table (the dictionary capacity it was built for).
    pub fn capacity(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts. Equals the number of indices the coder emitted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Iterate (index, count) over the nonzero entries in ascending index order.
    pub fn used(&self) -> impl Iterator<Item = (u16, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &f)| f > 0)
            .map(|(i, &f)| (i as u16, f))
    }

    /// Number of distinct indices with a nonzero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&f| f > 0).count()
    }
}

/// Returns a frequency count of an index sequence over a dictionary of `capacity` entries.
pub fn freqs(indices: &[u16], capacity: usize) -> FreqTable {
    let mut table = FreqTable::new(capacity);
    indices.iter().for_each(|&idx| table.record(idx));
    table
}
