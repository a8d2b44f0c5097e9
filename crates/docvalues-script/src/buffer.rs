//! Reusable storage for one document's numeric values

/// Growable `i64` buffer holding the values of the current document.
///
/// The backing storage only ever grows; `resize` adjusts the logical count so
/// the same allocation serves every document of a scan. A read cursor supports
/// sequential access through `next_value`.
#[derive(Debug, Clone, Default)]
pub struct SortingNumericBuffer {
    values: Vec<i64>,
    count: usize,
    cursor: usize,
}

impl SortingNumericBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            count: 0,
            cursor: 0,
        }
    }

    /// Set the number of values for the current document.
    ///
    /// Entries past the previous count hold stale data until written.
    pub fn resize(&mut self, count: usize) {
        if self.values.len() < count {
            self.values.resize(count, 0);
        }
        self.count = count;
        self.cursor = 0;
    }

    /// Drop all values for the current document
    pub fn clear(&mut self) {
        self.resize(0);
    }

    /// Shrink the logical count, keeping the first `count` values
    pub fn truncate(&mut self, count: usize) {
        if count < self.count {
            self.count = count;
        }
        self.cursor = 0;
    }

    /// Ensure storage for at least `count` values without changing the current count
    pub fn reserve(&mut self, count: usize) {
        if count > self.values.len() {
            self.values.reserve(count - self.values.len());
        }
    }

    /// Append a value after the current ones, growing storage if needed
    pub fn push(&mut self, value: i64) {
        if self.count < self.values.len() {
            self.values[self.count] = value;
        } else {
            self.values.push(value);
        }
        self.count += 1;
    }

    /// Write the value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the current count.
    pub fn set(&mut self, index: usize, value: i64) {
        assert!(index < self.count, "index {index} out of bounds for {} values", self.count);
        self.values[index] = value;
    }

    /// Mutable view of the current document's values
    pub fn values_mut(&mut self) -> &mut [i64] {
        &mut self.values[..self.count]
    }

    /// Sort the current document's values in ascending order
    pub fn sort(&mut self) {
        self.values[..self.count].sort_unstable();
    }

    /// Number of values for the current document
    pub fn doc_value_count(&self) -> usize {
        self.count
    }

    /// Value at `index`, if within the current count
    pub fn value_at(&self, index: usize) -> Option<i64> {
        self.as_slice().get(index).copied()
    }

    /// The current document's values
    pub fn as_slice(&self) -> &[i64] {
        &self.values[..self.count]
    }

    /// Iterate the current document's values
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.as_slice().iter().copied()
    }

    /// Read the next value, or `None` once all values were read
    pub fn next_value(&mut self) -> Option<i64> {
        let value = self.value_at(self.cursor)?;
        self.cursor += 1;
        Some(value)
    }

    /// Reserved storage, in values
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }
}
