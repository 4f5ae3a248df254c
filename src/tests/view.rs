use crate::{ByteView, ByteViewMut, Error};

#[test]
fn default_view_is_empty() {
    let view = ByteView::default();
    assert_eq!(view.len(), 0);
    assert!(view.is_empty());
}

#[test]
fn view_reports_data_and_length() {
    let data = [1u8, 2, 3, 4, 5];
    let view = ByteView::new(&data);

    assert_eq!(view.data(), data.as_ptr());
    assert_eq!(view.len(), 5);
    assert!(!view.is_empty());
    assert_eq!(view.as_slice(), &data);
}

#[test]
fn copies_share_the_memory() {
    let data = [1u8, 2, 3];
    let view = ByteView::new(&data);
    let copy = view;

    assert_eq!(copy.data(), view.data());
    assert_eq!(copy.len(), view.len());
}

#[test]
fn indexing_and_checked_access() {
    let data = [10u8, 20, 30];
    let view = ByteView::new(&data);

    assert_eq!(view[0], 10);
    assert_eq!(view[2], 30);

    assert_eq!(view.at(1).unwrap(), 20);
    assert!(matches!(
        view.at(3),
        Err(Error::OutOfBounds { offset: 3, length: 3 })
    ));
}

#[test]
fn subview_shares_memory_at_offset() {
    let data = [1u8, 2, 3, 4, 5, 6, 7, 8];
    let view = ByteView::new(&data);

    let sub = view.subview(2, 4).unwrap();
    assert_eq!(sub.data(), unsafe { data.as_ptr().add(2) });
    assert_eq!(sub.len(), 4);
    assert_eq!(sub.as_slice(), &[3, 4, 5, 6]);

    // Zero-length subviews are legal anywhere in [0, len].
    assert_eq!(view.subview(8, 0).unwrap().len(), 0);

    assert!(matches!(view.subview(9, 0), Err(Error::OutOfBounds { .. })));
    assert!(matches!(view.subview(6, 3), Err(Error::OutOfBounds { .. })));
}

#[test]
fn first_last_equivalences() {
    let data = [1u8, 2, 3, 4, 5, 6];
    let view = ByteView::new(&data);

    assert_eq!(
        view.first(3).unwrap().as_slice(),
        view.subview(0, 3).unwrap().as_slice()
    );
    assert_eq!(
        view.last(2).unwrap().as_slice(),
        view.subview(4, 2).unwrap().as_slice()
    );
    assert_eq!(
        view.last_from(4).unwrap().as_slice(),
        view.subview(4, 2).unwrap().as_slice()
    );

    assert!(matches!(view.first(7), Err(Error::OutOfBounds { .. })));
    assert!(matches!(view.last(7), Err(Error::OutOfBounds { .. })));
    assert!(matches!(view.last_from(7), Err(Error::OutOfBounds { .. })));
}

#[test]
fn overwrite_from_the_start() {
    let mut data = [1u8, 2, 3, 4, 5];
    let mut view = ByteViewMut::new(&mut data);

    let end = view.overwrite(&[9, 8], 0).unwrap();
    assert_eq!(end, 2);
    assert_eq!(view.as_slice(), &[9, 8, 3, 4, 5]);
}

#[test]
fn overwrite_in_the_middle_returns_end_offset() {
    let mut data = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    let mut view = ByteViewMut::new(&mut data);

    let end = view.overwrite(&[21, 22, 23], 4).unwrap();
    assert_eq!(end, 7);
    assert_eq!(view.as_slice(), &[1, 2, 3, 4, 21, 22, 23, 8, 9, 10]);
}

#[test]
fn overwrite_rejects_bad_arguments() {
    let mut data = [0u8; 4];
    let mut view = ByteViewMut::new(&mut data);

    assert!(matches!(
        view.overwrite(&[1], 5),
        Err(Error::OutOfBounds { offset: 5, length: 4 })
    ));
    assert!(matches!(
        view.overwrite(&[1, 2, 3], 2),
        Err(Error::CapacityExceeded {
            required: 5,
            capacity: 4,
        })
    ));
    // Nothing was touched by the failed calls.
    assert_eq!(view.as_slice(), &[0; 4]);
}

#[test]
fn insert_shifts_right_and_discards_the_tail() {
    let mut data = [1u8, 2, 3, 4, 5];
    let mut view = ByteViewMut::new(&mut data);

    let end = view.insert(&[8, 9], 1).unwrap();
    assert_eq!(end, 3);
    // 4 and 5 were pushed out past the fixed end.
    assert_eq!(view.as_slice(), &[1, 8, 9, 2, 3]);
}

#[test]
fn insert_at_the_end_behaves_like_overwrite() {
    let mut data = [1u8, 2, 3, 4, 5];
    let mut view = ByteViewMut::new(&mut data);

    let end = view.insert(&[7, 8], 3).unwrap();
    assert_eq!(end, 5);
    assert_eq!(view.as_slice(), &[1, 2, 3, 7, 8]);
}

#[test]
fn insert_rejects_oversized_sources() {
    let mut data = [0u8; 3];
    let mut view = ByteViewMut::new(&mut data);

    assert!(matches!(
        view.insert(&[1, 2], 2),
        Err(Error::CapacityExceeded { .. })
    ));
    assert!(matches!(view.insert(&[1], 4), Err(Error::OutOfBounds { .. })));
}

#[test]
fn mutable_view_reborrows() {
    let mut data = [1u8, 2, 3, 4];
    let mut view = ByteViewMut::new(&mut data);

    {
        let mut inner = view.reborrow();
        inner.overwrite(&[9], 0).unwrap();
    }

    // The outer view is still usable after the reborrow ends.
    assert_eq!(view.as_slice(), &[9, 2, 3, 4]);
    view[3] = 0;
    assert_eq!(view.as_slice(), &[9, 2, 3, 0]);
}

#[test]
fn checked_mutable_access() {
    let mut data = [1u8, 2, 3];
    let mut view = ByteViewMut::new(&mut data);

    *view.at_mut(1).unwrap() = 9;
    assert_eq!(view.as_slice(), &[1, 9, 3]);
    assert!(matches!(view.at_mut(3), Err(Error::OutOfBounds { .. })));
}

#[test]
fn subview_mut_windows_mutations() {
    let mut data = [1u8, 2, 3, 4, 5, 6];
    let mut view = ByteViewMut::new(&mut data);

    let mut window = view.subview_mut(2, 3).unwrap();
    window.overwrite(&[7, 8, 9], 0).unwrap();

    assert_eq!(data, [1, 2, 7, 8, 9, 6]);
}
