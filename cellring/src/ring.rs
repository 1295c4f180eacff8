use core::mem::size_of;
use core::slice;

use log::trace;

use crate::error::{Result, RingError};
use crate::mode::Mode;
use crate::span::Span;

const UNBOUND: RingError = RingError::Param {
    reason: "ring is not bound to storage",
};

/// A zero-allocation circular buffer of `T` cells over client-provided storage
#[derive(Debug)]
pub struct CellRing<'a, T> {
    storage: Option<&'a mut [T]>,
    capacity: usize,
    head: usize,
    tail: usize,
    mode: Mode,
}

impl<T: Copy> Default for CellRing<'_, T> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<'a, T: Copy> CellRing<'a, T> {
    /// Creates a ring that is not bound to any storage yet.
    ///
    /// Every operation on it fails with `RingError::Param` until
    /// [`init`](Self::init) succeeds.
    #[must_use]
    pub const fn unbound() -> Self {
        Self {
            storage: None,
            capacity: 0,
            head: 0,
            tail: 0,
            mode: Mode::Legacy,
        }
    }

    /// Creates a ring using the whole `storage` slice.
    #[must_use]
    pub fn new(storage: &'a mut [T]) -> Self {
        let capacity = storage.len();
        let mut ring = Self::unbound();
        ring.bind(storage, capacity);
        ring
    }

    /// Creates a ring using the first `capacity` cells of `storage`.
    ///
    /// # Errors
    ///
    /// Returns `RingError::Param` if `capacity` exceeds `storage.len()`.
    pub fn with_capacity(storage: &'a mut [T], capacity: usize) -> Result<Self> {
        let mut ring = Self::unbound();
        ring.init(Some(storage), capacity)?;
        Ok(ring)
    }

    /// Binds the ring to `storage` with the given capacity and clears it.
    ///
    /// Any previous binding is dropped first, so on error the ring is left
    /// unbound. The mode is kept.
    ///
    /// # Errors
    ///
    /// Returns `RingError::Param` if:
    /// - `storage` is `None`
    /// - `capacity` exceeds `storage.len()`
    pub fn init(&mut self, storage: Option<&'a mut [T]>, capacity: usize) -> Result<()> {
        self.unbind();
        let storage = storage.ok_or(RingError::Param {
            reason: "storage is absent",
        })?;
        if capacity > storage.len() {
            return Err(RingError::Param {
                reason: "capacity exceeds storage length",
            });
        }
        self.bind(storage, capacity);
        Ok(())
    }

    fn bind(&mut self, storage: &'a mut [T], capacity: usize) {
        self.storage = Some(storage);
        self.capacity = capacity;
        self.head = 0;
        self.tail = 0;
        trace!(
            "ring bound: {} cells of {} bytes, {:?} mode",
            capacity,
            size_of::<T>(),
            self.mode
        );
    }

    fn unbind(&mut self) -> Option<&'a mut [T]> {
        self.capacity = 0;
        self.head = 0;
        self.tail = 0;
        self.storage.take()
    }

    /// Unbinds the ring and returns the storage borrow to the caller.
    pub fn release(&mut self) -> Option<&'a mut [T]> {
        let storage = self.unbind();
        if storage.is_some() {
            trace!("ring released");
        }
        storage
    }

    /// Resets both indices to zero. Storage contents are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `RingError::Param` if the ring is unbound.
    pub fn clear(&mut self) -> Result<()> {
        self.ensure_bound()?;
        self.head = 0;
        self.tail = 0;
        trace!("ring cleared");
        Ok(())
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.storage.is_some()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Size of one cell in bytes.
    #[must_use]
    pub const fn cell_size(&self) -> usize {
        size_of::<T>()
    }

    /// Index of the next cell to be written.
    #[must_use]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Index of the next cell to be read.
    #[must_use]
    pub fn tail(&self) -> usize {
        self.tail
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            trace!("ring mode: {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// `head == tail`. An unbound ring is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Number of cells written and not yet read.
    ///
    /// # Errors
    ///
    /// Returns `RingError::Param` if the ring is unbound.
    pub fn available(&self) -> Result<usize> {
        self.ensure_bound()?;
        Ok(self.unread())
    }

    /// Number of cells a `Checked` put accepts: one slot always stays free.
    ///
    /// # Errors
    ///
    /// Returns `RingError::Param` if the ring is unbound.
    pub fn free(&self) -> Result<usize> {
        self.ensure_bound()?;
        Ok(self.vacant())
    }

    fn unread(&self) -> usize {
        if self.head < self.tail {
            self.capacity - self.tail + self.head
        } else {
            self.head - self.tail
        }
    }

    fn vacant(&self) -> usize {
        self.capacity.saturating_sub(1).saturating_sub(self.unread())
    }

    fn ensure_bound(&self) -> Result<()> {
        if self.storage.is_some() {
            Ok(())
        } else {
            Err(UNBOUND)
        }
    }

    #[allow(clippy::indexing_slicing)] // capacity <= storage.len() enforced by bind
    fn storage(&self) -> Result<&[T]> {
        let capacity = self.capacity;
        self.storage
            .as_deref()
            .map(|storage| &storage[..capacity])
            .ok_or(UNBOUND)
    }

    #[allow(clippy::indexing_slicing)] // capacity <= storage.len() enforced by bind
    fn storage_mut(&mut self) -> Result<&mut [T]> {
        let capacity = self.capacity;
        self.storage
            .as_deref_mut()
            .map(|storage| &mut storage[..capacity])
            .ok_or(UNBOUND)
    }

    /// Validates a put of `len` cells and places it at `head`.
    fn write_span(&self, len: usize) -> Result<Span> {
        self.ensure_bound()?;
        let limit = match self.mode {
            Mode::Legacy => self.capacity,
            Mode::Checked => self.vacant(),
        };
        if len > limit {
            return Err(RingError::Overflow {
                requested: len,
                limit,
            });
        }
        Ok(Span::new(self.head, len, self.capacity))
    }

    /// Validates a watch of `len` cells and places it at `tail`.
    fn read_span(&self, len: usize) -> Result<Span> {
        self.ensure_bound()?;
        if len > self.capacity {
            return Err(RingError::Overflow {
                requested: len,
                limit: self.capacity,
            });
        }
        if self.mode.is_checked() {
            let available = self.unread();
            if len > available {
                return Err(RingError::Underflow {
                    requested: len,
                    available,
                });
            }
        }
        Ok(Span::new(self.tail, len, self.capacity))
    }

    /// Writes one cell at `head`.
    ///
    /// # Errors
    ///
    /// See [`put_run`](Self::put_run).
    pub fn put_cell(&mut self, value: T) -> Result<()> {
        self.put_run(slice::from_ref(&value))
    }

    /// Writes `values` starting at `head`, wrapping past the physical end of
    /// the storage to index 0.
    ///
    /// In `Legacy` mode only the capacity is checked: unread cells may be
    /// overwritten, and a run that brings `head` onto `tail` leaves the ring
    /// reading as empty.
    ///
    /// # Errors
    ///
    /// Returns `RingError::Param` if the ring is unbound.
    ///
    /// Returns `RingError::Overflow` if `values` is longer than the capacity
    /// (`Legacy`) or than the free space (`Checked`). The ring is unchanged.
    pub fn put_run(&mut self, values: &[T]) -> Result<()> {
        let span = self.write_span(values.len())?;
        span.write(self.storage_mut()?, values);
        self.head = span.end();
        Ok(())
    }

    /// Returns the cell at `tail` without consuming it.
    ///
    /// # Errors
    ///
    /// See [`watch_run`](Self::watch_run).
    #[allow(clippy::indexing_slicing)] // tail < capacity once read_span accepts one cell
    pub fn watch_cell(&self) -> Result<T> {
        self.read_span(1)?;
        Ok(self.storage()?[self.tail])
    }

    /// Fills `out` with the cells starting at `tail` without consuming them.
    ///
    /// In `Legacy` mode there is no availability check: cells past the
    /// written data are returned as they are in storage.
    ///
    /// # Errors
    ///
    /// Returns `RingError::Param` if the ring is unbound.
    ///
    /// Returns `RingError::Overflow` if `out` is longer than the capacity.
    ///
    /// Returns `RingError::Underflow` in `Checked` mode if `out` is longer
    /// than the available cells.
    pub fn watch_run(&self, out: &mut [T]) -> Result<()> {
        let span = self.read_span(out.len())?;
        span.read(self.storage()?, out);
        Ok(())
    }

    /// Removes and returns the cell at `tail`.
    ///
    /// # Errors
    ///
    /// See [`watch_run`](Self::watch_run). On error `tail` does not move.
    pub fn read_cell(&mut self) -> Result<T> {
        let value = self.watch_cell()?;
        self.tail = Span::new(self.tail, 1, self.capacity).end();
        Ok(value)
    }

    /// Fills `out` with the cells starting at `tail` and consumes them.
    ///
    /// # Errors
    ///
    /// See [`watch_run`](Self::watch_run). On error `tail` does not move.
    pub fn read_run(&mut self, out: &mut [T]) -> Result<()> {
        let span = self.read_span(out.len())?;
        span.read(self.storage()?, out);
        self.tail = span.end();
        Ok(())
    }
}

impl CellRing<'_, u8> {
    /// Writes one byte at `head`.
    ///
    /// # Errors
    ///
    /// See [`put_run`](Self::put_run).
    pub fn put_byte(&mut self, value: u8) -> Result<()> {
        self.put_cell(value)
    }

    /// Returns the byte at `tail` without consuming it.
    ///
    /// # Errors
    ///
    /// See [`watch_run`](Self::watch_run).
    pub fn watch_byte(&self) -> Result<u8> {
        self.watch_cell()
    }

    /// Removes and returns the byte at `tail`.
    ///
    /// # Errors
    ///
    /// See [`watch_run`](Self::watch_run).
    pub fn read_byte(&mut self) -> Result<u8> {
        self.read_cell()
    }
}
