use cellring::{CellRing, Mode, RingError};

fn is_param_error<T>(result: Result<T, RingError>) -> bool {
    matches!(result, Err(RingError::Param { .. }))
}

#[test]
fn test_new_ring_is_empty() {
    let mut storage = [0u8; 10];
    let ring = CellRing::new(&mut storage);

    assert!(ring.is_bound());
    assert!(ring.is_empty());
    assert_eq!(ring.capacity(), 10);
    assert_eq!(ring.cell_size(), 1);
    assert_eq!(ring.available().unwrap(), 0);
    assert_eq!(ring.mode(), Mode::Legacy);
}

#[test]
fn test_clear_after_init_reports_nothing_available() {
    for capacity in 1..=16 {
        let mut storage = [0u32; 16];
        let mut ring = CellRing::with_capacity(&mut storage, capacity).unwrap();
        ring.clear().unwrap();
        assert_eq!(ring.available().unwrap(), 0);
    }
}

#[test]
fn test_clear_resets_indices_but_not_storage() {
    let mut storage = [0u8; 4];
    {
        let mut ring = CellRing::new(&mut storage);
        ring.put_run(b"xyz").unwrap();
        ring.read_byte().unwrap();

        ring.clear().unwrap();

        assert_eq!(ring.head(), 0);
        assert_eq!(ring.tail(), 0);
        assert_eq!(ring.available().unwrap(), 0);
        // Stale contents are still visible through an unchecked watch
        assert_eq!(ring.watch_byte().unwrap(), b'x');
    }
    assert_eq!(&storage[..3], b"xyz");
}

#[test]
fn test_with_capacity_uses_storage_prefix() {
    let mut storage = [0u16; 8];
    let mut ring = CellRing::with_capacity(&mut storage, 3).unwrap();

    assert_eq!(ring.capacity(), 3);
    ring.put_run(&[1, 2, 3]).unwrap();
    assert_eq!(ring.head(), 0);
    assert_eq!(
        ring.put_run(&[1, 2, 3, 4]),
        Err(RingError::Overflow {
            requested: 4,
            limit: 3
        })
    );
}

#[test]
fn test_with_capacity_larger_than_storage() {
    let mut storage = [0u8; 4];
    assert_eq!(
        CellRing::with_capacity(&mut storage, 5).unwrap_err(),
        RingError::Param {
            reason: "capacity exceeds storage length"
        }
    );
}

#[test]
fn test_init_without_storage() {
    let mut ring: CellRing<'_, u8> = CellRing::unbound();
    assert_eq!(
        ring.init(None, 10),
        Err(RingError::Param {
            reason: "storage is absent"
        })
    );
    assert!(!ring.is_bound());
}

#[test]
fn test_unbound_ring_rejects_every_operation() {
    let mut ring: CellRing<'_, u8> = CellRing::default();
    let mut out = [0u8; 2];

    assert!(is_param_error(ring.clear()));
    assert!(is_param_error(ring.available()));
    assert!(is_param_error(ring.free()));
    assert!(is_param_error(ring.put_byte(1)));
    assert!(is_param_error(ring.put_cell(1)));
    assert!(is_param_error(ring.put_run(&[1, 2])));
    assert!(is_param_error(ring.watch_byte()));
    assert!(is_param_error(ring.watch_cell()));
    assert!(is_param_error(ring.watch_run(&mut out)));
    assert!(is_param_error(ring.read_byte()));
    assert!(is_param_error(ring.read_cell()));
    assert!(is_param_error(ring.read_run(&mut out)));

    // Zero-length runs still need storage
    assert!(is_param_error(ring.put_run(&[])));
    assert!(is_param_error(ring.read_run(&mut [])));
}

#[test]
fn test_unbound_ring_rejects_every_operation_in_checked_mode() {
    let mut ring: CellRing<'_, u16> = CellRing::unbound();
    ring.set_mode(Mode::Checked);
    let mut out = [0u16; 1];

    assert!(is_param_error(ring.put_cell(1)));
    assert!(is_param_error(ring.watch_run(&mut out)));
    assert!(is_param_error(ring.read_cell()));
}

#[test]
fn test_deferred_init() {
    let mut storage = [0u8; 6];
    let mut ring = CellRing::unbound();
    ring.init(Some(&mut storage), 6).unwrap();

    ring.put_run(b"hi").unwrap();
    assert_eq!(ring.available().unwrap(), 2);
    assert_eq!(ring.read_byte().unwrap(), b'h');
}

#[test]
fn test_reinit_resets_indices() {
    let mut first = [0u8; 4];
    let mut second = [0u8; 8];
    let mut ring = CellRing::new(&mut first);
    ring.put_run(b"abc").unwrap();

    ring.init(Some(&mut second), 5).unwrap();

    assert_eq!(ring.capacity(), 5);
    assert_eq!(ring.head(), 0);
    assert_eq!(ring.available().unwrap(), 0);
}

#[test]
fn test_release_returns_storage() {
    let mut storage = [0u8; 4];
    let mut ring = CellRing::new(&mut storage);
    ring.put_run(b"ab").unwrap();

    let released = ring.release().unwrap();
    assert_eq!(&released[..2], b"ab");

    assert!(!ring.is_bound());
    assert!(ring.release().is_none());
    assert!(is_param_error(ring.available()));
}

#[test]
fn test_zero_capacity_ring() {
    let mut storage: [u8; 0] = [];
    let mut ring = CellRing::new(&mut storage);
    let mut out = [0u8; 1];

    assert_eq!(ring.available().unwrap(), 0);
    assert_eq!(ring.free().unwrap(), 0);
    ring.put_run(&[]).unwrap();
    ring.read_run(&mut []).unwrap();
    assert_eq!(
        ring.put_byte(1),
        Err(RingError::Overflow {
            requested: 1,
            limit: 0
        })
    );
    assert_eq!(
        ring.read_run(&mut out),
        Err(RingError::Overflow {
            requested: 1,
            limit: 0
        })
    );
    assert_eq!(ring.head(), 0);
    assert_eq!(ring.tail(), 0);
}

#[test]
fn test_zero_sized_cells() {
    let mut storage = [(); 4];
    let mut ring = CellRing::new(&mut storage);

    assert_eq!(ring.cell_size(), 0);
    ring.put_run(&[(), ()]).unwrap();
    assert_eq!(ring.available().unwrap(), 2);
    ring.read_cell().unwrap();
    assert_eq!(ring.available().unwrap(), 1);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        RingError::Overflow {
            requested: 5,
            limit: 3
        }
        .to_string(),
        "Ring overflow: requested 5 cells, but the limit is 3 cells"
    );
    assert_eq!(
        RingError::Underflow {
            requested: 2,
            available: 1
        }
        .to_string(),
        "Ring underflow: requested 2 cells, but only 1 cells available"
    );
    assert_eq!(
        RingError::Param {
            reason: "storage is absent"
        }
        .to_string(),
        "Invalid ring parameter: storage is absent"
    );
}
