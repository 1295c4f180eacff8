/// Physical placement of a run of cells inside the ring storage.
///
/// A run starting at `start` occupies `first` cells up to the physical end of
/// the storage and continues with `second` cells from index 0. `second` is
/// zero unless the run crosses the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    start: usize,
    first: usize,
    second: usize,
    end: usize,
}

impl Span {
    /// Places `len` cells at `start` in a ring of `capacity` cells.
    ///
    /// # Contract
    ///
    /// The caller guarantees `len <= capacity` and `start < capacity` (or
    /// `start == 0` for an empty ring). Both are enforced by `CellRing`
    /// before any span is built.
    pub fn new(start: usize, len: usize, capacity: usize) -> Self {
        let space = capacity - start;
        if len > space {
            let second = len - space;
            Self {
                start,
                first: space,
                second,
                end: second,
            }
        } else {
            let end = start + len;
            Self {
                start,
                first: len,
                second: 0,
                end: if end >= capacity { 0 } else { end },
            }
        }
    }

    /// Index following the last cell of the run, wrapped to the ring.
    pub fn end(&self) -> usize {
        self.end
    }

    #[cfg(test)]
    pub fn is_split(&self) -> bool {
        self.second > 0
    }

    /// Copies `src` into `storage` along the span.
    #[allow(clippy::indexing_slicing)] // Span bounds validated by the contract of `new`
    pub fn write<T: Copy>(&self, storage: &mut [T], src: &[T]) {
        let (front, back) = src.split_at(self.first);
        storage[self.start..self.start + self.first].copy_from_slice(front);
        storage[..self.second].copy_from_slice(back);
    }

    /// Copies the cells under the span from `storage` into `dst`.
    #[allow(clippy::indexing_slicing)] // Span bounds validated by the contract of `new`
    pub fn read<T: Copy>(&self, storage: &[T], dst: &mut [T]) {
        let (front, back) = dst.split_at_mut(self.first);
        front.copy_from_slice(&storage[self.start..self.start + self.first]);
        back.copy_from_slice(&storage[..self.second]);
    }
}
