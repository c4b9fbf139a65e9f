use std::{ffi::CStr, ptr};
use v9::assert_fuzzy_eq;
use v9_ffi::*;

fn diagonal() -> *mut v9_path {
    let segs = [
        v9_path_seg::new(V9_SEG_MOVE, &[v9_point::new(0.0, 0.0)]),
        v9_path_seg::new(V9_SEG_LINE, &[v9_point::new(24.0, 24.0)]),
    ];
    let mut result = ptr::null();
    let err = unsafe { v9_path_create(segs.as_ptr(), segs.len() as u32, &mut result) };
    assert_eq!(err, 0);
    result as *mut _
}

fn last_error() -> String {
    let mut msg = ptr::null();
    unsafe {
        assert_eq!(v9_last_error_msg(&mut msg), 0);
        assert!(!msg.is_null());
        CStr::from_ptr(msg).to_string_lossy().into_owned()
    }
}

#[test]
fn slices_create() {
    let vertical = [v9_slice::new(15.0, 9.0)];
    let horizontal = [v9_slice::new(7.0, 13.0)];
    let mut slices = ptr::null();
    unsafe {
        assert_eq!(
            v9_slices_create(vertical.as_ptr(), 1, horizontal.as_ptr(), 1, &mut slices),
            1
        );
        assert!(last_error().contains("start"));

        assert_eq!(
            v9_slices_create(ptr::null(), 0, horizontal.as_ptr(), 1, &mut slices),
            2
        );

        let vertical = [v9_slice::new(9.0, 15.0), v9_slice::new(3.0, 3.0)];
        assert_eq!(
            v9_slices_create(vertical.as_ptr(), 2, horizontal.as_ptr(), 1, &mut slices),
            0
        );
        assert_eq!((*slices).0.vertical().len(), 1);
        v9_slices_f(slices as *mut _);

        assert_eq!(
            v9_slices_create_from_rect(9.0, 7.0, 3.0, 13.0, &mut slices),
            1
        );
    }
}

#[test]
fn resize_diagonal() {
    let path = diagonal();
    let mut slices = ptr::null();
    let mut resizer = ptr::null();
    unsafe {
        assert_eq!(
            v9_slices_create_from_rect(9.0, 7.0, 15.0, 13.0, &mut slices),
            0
        );
        assert_eq!(v9_path_resizer_create(path, slices, &mut resizer), 0);
        // resizer owns copies
        v9_path_f(path);
        v9_slices_f(slices as *mut _);

        let mut bounds = v9_aabb::default();
        assert_eq!(v9_path_resizer_get_bounds(resizer, &mut bounds), 0);
        assert_fuzzy_eq!(bounds.max_x, 24.0);
        assert_fuzzy_eq!(bounds.max_y, 24.0);

        let mut resized = ptr::null();
        assert_eq!(v9_path_resizer_resize(resizer, 30.0, 36.0, &mut resized), 0);
        let mut data = [v9_path_seg::new(V9_SEG_CLOSE, &[]); 2];
        assert_eq!(v9_path_get_seg_data(resized, data.as_mut_ptr()), 0);
        assert_eq!(data[0].kind, V9_SEG_MOVE);
        assert_fuzzy_eq!(data[0].points[0].x, 0.0);
        assert_fuzzy_eq!(data[0].points[0].y, 0.0);
        assert_eq!(data[1].kind, V9_SEG_LINE);
        assert_fuzzy_eq!(data[1].points[0].x, 30.0);
        assert_fuzzy_eq!(data[1].points[0].y, 36.0);
        v9_path_f(resized as *mut _);

        assert_eq!(v9_path_resizer_resize(resizer, 20.0, 36.0, &mut resized), 2);
        assert!(last_error().contains("width"));

        assert_eq!(
            v9_path_resizer_resize(ptr::null(), 30.0, 36.0, &mut resized),
            1
        );
        v9_path_resizer_f(resizer as *mut _);
    }
}

#[test]
fn resize_without_stretchable_region() {
    let path = diagonal();
    let vertical = [v9_slice::new(4.0, 4.0)];
    let horizontal = [v9_slice::new(7.0, 13.0)];
    let mut slices = ptr::null();
    let mut resizer = ptr::null();
    let mut resized = ptr::null();
    unsafe {
        assert_eq!(
            v9_slices_create(vertical.as_ptr(), 1, horizontal.as_ptr(), 1, &mut slices),
            0
        );
        assert_eq!(v9_path_resizer_create(path, slices, &mut resizer), 0);
        assert_eq!(v9_path_resizer_resize(resizer, 30.0, 30.0, &mut resized), 3);
        assert_eq!(v9_path_resizer_resize(resizer, 24.0, 30.0, &mut resized), 0);
        v9_path_f(resized as *mut _);

        assert_eq!(v9_path_resizer_create(ptr::null(), slices, &mut resizer), 1);

        v9_path_resizer_f(resizer as *mut _);
        v9_slices_f(slices as *mut _);
        v9_path_f(path);
    }
}

#[test]
fn clear_last_error() {
    let mut msg = ptr::null();
    unsafe {
        let mut slices = ptr::null();
        assert_eq!(
            v9_slices_create_from_rect(5.0, 0.0, 1.0, 1.0, &mut slices),
            1
        );
        v9_clear_last_error();
        assert_eq!(v9_last_error_msg(&mut msg), 0);
        assert!(msg.is_null());
    }
}
