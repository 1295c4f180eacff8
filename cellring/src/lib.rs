#![no_std]

//! `CellRing`: a zero-allocation circular buffer over client-provided storage.
//!
//! `CellRing` stores fixed-size cells in a slice owned by the caller and
//! offers put, read (consume) and watch (peek) operations on single cells,
//! single bytes, and runs of cells. Runs that cross the physical end of the
//! storage are split and continue at index 0.
//!
//! This crate is `no_std` compatible and performs no allocation. Enable the
//! optional `std` feature to build `thiserror` and `log` against `std`:
//! ```toml
//! [dependencies]
//! cellring = { version = "0.1", features = ["std"] }
//! ```
//!
//! # Byte Streams
//!
//! ```
//! # use cellring::CellRing;
//! let mut storage = [0u8; 10];
//! let mut ring = CellRing::new(&mut storage);
//!
//! let input = [10u8, 15, 24, 255, 8];
//! ring.put_byte(input[0]).unwrap();
//! assert_eq!(ring.available().unwrap(), 1);
//!
//! ring.put_run(&input[2..]).unwrap();
//! assert_eq!(ring.available().unwrap(), 4);
//!
//! assert_eq!(ring.read_byte().unwrap(), 10);
//! assert_eq!(ring.available().unwrap(), 3);
//!
//! // Watching does not consume
//! assert_eq!(ring.watch_byte().unwrap(), 24);
//! assert_eq!(ring.available().unwrap(), 3);
//!
//! let mut out = [0u8; 5];
//! let n = ring.available().unwrap();
//! ring.read_run(&mut out[..n]).unwrap();
//! assert_eq!(out, [24, 255, 8, 0, 0]);
//! assert_eq!(ring.available().unwrap(), 0);
//! ```
//!
//! # Wider Cells
//!
//! The cell type is any `Copy` type. Index arithmetic is in cells, not bytes:
//!
//! ```
//! # use cellring::CellRing;
//! let mut storage = [0u16; 10];
//! let mut ring = CellRing::new(&mut storage);
//! assert_eq!(ring.cell_size(), 2);
//!
//! ring.put_cell(3443).unwrap();
//! ring.put_run(&[1337, 2281, 1234]).unwrap();
//! assert_eq!(ring.available().unwrap(), 4);
//!
//! assert_eq!(ring.read_cell().unwrap(), 3443);
//! assert_eq!(ring.watch_cell().unwrap(), 1337);
//!
//! let mut out = [0u16; 3];
//! ring.read_run(&mut out).unwrap();
//! assert_eq!(out, [1337, 2281, 1234]);
//! ```
//!
//! # Wrap-Around
//!
//! ```
//! # use cellring::CellRing;
//! let mut storage = [0u32; 3];
//! let mut ring = CellRing::new(&mut storage);
//!
//! ring.put_cell(66890).unwrap();
//! ring.read_cell().unwrap();
//! assert_eq!((ring.head(), ring.tail()), (1, 1));
//!
//! // Only two cells remain before the physical end: the run is split
//! ring.put_run(&[727270, 917020, 812734]).unwrap();
//!
//! let mut out = [0u32; 3];
//! ring.read_run(&mut out).unwrap();
//! assert_eq!(out, [727270, 917020, 812734]);
//! ```
//!
//! # Modes
//!
//! By default (`Mode::Legacy`) the ring only rejects runs longer than its
//! capacity. It never compares a put against unread data or a read against
//! written data, and `head == tail` always reads as empty, even right after a
//! put of `capacity` cells:
//!
//! ```
//! # use cellring::CellRing;
//! let mut storage = [0u8; 4];
//! let mut ring = CellRing::new(&mut storage);
//!
//! ring.put_run(b"abcd").unwrap();
//! assert_eq!(ring.available().unwrap(), 0);
//! ```
//!
//! `Mode::Checked` keeps one slot free so the ring never aliases full with
//! empty, and rejects transfers that do not fit the current contents:
//!
//! ```
//! # use cellring::{CellRing, Mode, RingError};
//! let mut storage = [0u8; 4];
//! let mut ring = CellRing::new(&mut storage);
//! ring.set_mode(Mode::Checked);
//!
//! assert_eq!(
//!     ring.put_run(b"abcd"),
//!     Err(RingError::Overflow { requested: 4, limit: 3 })
//! );
//! ring.put_run(b"abc").unwrap();
//! assert_eq!(ring.free().unwrap(), 0);
//!
//! let mut out = [0u8; 4];
//! assert_eq!(
//!     ring.read_run(&mut out),
//!     Err(RingError::Underflow { requested: 4, available: 3 })
//! );
//! ```
//!
//! # Deferred Binding
//!
//! A ring can start unbound and get its storage later. Until it is bound,
//! every operation fails with `RingError::Param`:
//!
//! ```
//! # use cellring::{CellRing, RingError};
//! let mut storage = [0u8; 8];
//! let mut ring: CellRing<'_, u8> = CellRing::unbound();
//! assert!(matches!(ring.put_byte(1), Err(RingError::Param { .. })));
//!
//! ring.init(Some(&mut storage), 8).unwrap();
//! ring.put_byte(1).unwrap();
//! ```

mod error;
mod mode;
mod ring;
mod span;

// Re-export public types
pub use error::{Result, RingError};
pub use mode::Mode;
pub use ring::CellRing;
