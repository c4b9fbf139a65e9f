//! This module contains the C foreign function interface for v9.
//!
//! All functions return an `i32` error code: 0 for success, -1 if a panic was caught, and function
//! specific positive codes otherwise. When a function fails because the core library rejected its
//! input the message is available through [v9_last_error_msg].
#![allow(non_camel_case_types)]
pub mod error_handling;

use core::slice;
use error_handling::{clear_last_error, report_error, LAST_ERROR};
use std::{ffi::c_char, panic};
use v9::{
    core::math::{Vector2, AABB},
    path::{Path, PathSeg, PathSource},
    slices::{Slice, Slices},
    Error, PathResizer,
};

/// Helper macro to catch unwind and return -1 if panic was caught otherwise returns whatever the
/// expression returned.
macro_rules! ffi_catch_unwind {
    ($body: expr) => {
        match panic::catch_unwind(move || $body) {
            Ok(r) => r,
            Err(_) => -1,
        }
    };
}

/// Represents a simple 2D point with x and y coordinate values.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct v9_point {
    pub x: f64,
    pub y: f64,
}

impl v9_point {
    pub fn new(x: f64, y: f64) -> Self {
        v9_point { x, y }
    }

    pub fn from_internal(v: Vector2<f64>) -> Self {
        v9_point::new(v.x, v.y)
    }

    pub fn to_internal(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

/// Represents a stretchable interval on one axis.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct v9_slice {
    pub start: f64,
    pub end: f64,
}

impl v9_slice {
    pub fn new(start: f64, end: f64) -> Self {
        v9_slice { start, end }
    }
}

/// Represents an axis aligned bounding box.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct v9_aabb {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl v9_aabb {
    pub fn from_internal(bb: &AABB<f64>) -> Self {
        v9_aabb {
            min_x: bb.min_x,
            min_y: bb.min_y,
            max_x: bb.max_x,
            max_y: bb.max_y,
        }
    }
}

/// Segment kind values used by [v9_path_seg].
pub const V9_SEG_MOVE: u32 = 0;
pub const V9_SEG_LINE: u32 = 1;
pub const V9_SEG_QUAD: u32 = 2;
pub const V9_SEG_CUBIC: u32 = 3;
pub const V9_SEG_CLOSE: u32 = 4;

/// Represents one path drawing command.
///
/// `kind` is one of the `V9_SEG_*` values. Only the first 0 to 3 `points` are used depending on
/// the kind, control points first and end point last, unused points are zeroed.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct v9_path_seg {
    pub kind: u32,
    pub points: [v9_point; 3],
}

impl v9_path_seg {
    pub fn new(kind: u32, points: &[v9_point]) -> Self {
        let mut all = [v9_point::default(); 3];
        for (dst, src) in all.iter_mut().zip(points) {
            *dst = *src;
        }
        v9_path_seg { kind, points: all }
    }

    pub fn from_internal(seg: &PathSeg<f64>) -> Self {
        let p = v9_point::from_internal;
        match *seg {
            PathSeg::MoveTo(a) => v9_path_seg::new(V9_SEG_MOVE, &[p(a)]),
            PathSeg::LineTo(a) => v9_path_seg::new(V9_SEG_LINE, &[p(a)]),
            PathSeg::QuadTo(c, a) => v9_path_seg::new(V9_SEG_QUAD, &[p(c), p(a)]),
            PathSeg::CubicTo(c1, c2, a) => {
                v9_path_seg::new(V9_SEG_CUBIC, &[p(c1), p(c2), p(a)])
            }
            PathSeg::Close => v9_path_seg::new(V9_SEG_CLOSE, &[]),
        }
    }

    /// Convert to the internal segment type, `None` if `kind` is unrecognized.
    pub fn to_internal(&self) -> Option<PathSeg<f64>> {
        let [a, b, c] = self.points;
        match self.kind {
            V9_SEG_MOVE => Some(PathSeg::MoveTo(a.to_internal())),
            V9_SEG_LINE => Some(PathSeg::LineTo(a.to_internal())),
            V9_SEG_QUAD => Some(PathSeg::QuadTo(a.to_internal(), b.to_internal())),
            V9_SEG_CUBIC => Some(PathSeg::CubicTo(
                a.to_internal(),
                b.to_internal(),
                c.to_internal(),
            )),
            V9_SEG_CLOSE => Some(PathSeg::Close),
            _ => None,
        }
    }
}

/// Opaque type that wraps a [Path].
///
/// Note the internal member is only public for composing in other Rust libraries wanting to use the
/// FFI opaque type as part of their FFI API.
#[derive(Debug, Clone)]
pub struct v9_path(pub Path<f64>);

/// Opaque type that wraps [Slices].
///
/// Note the internal member is only public for composing in other Rust libraries wanting to use the
/// FFI opaque type as part of their FFI API.
#[derive(Debug, Clone)]
pub struct v9_slices(pub Slices<f64>);

/// Opaque type that wraps a [PathResizer].
///
/// Note the internal member is only public for composing in other Rust libraries wanting to use the
/// FFI opaque type as part of their FFI API.
#[derive(Debug, Clone)]
pub struct v9_path_resizer(pub PathResizer<f64>);

/// Create a new path object.
///
/// `segs` is an array of [v9_path_seg] to create the path with (may be null if `n_segs` is 0).
/// `n_segs` contains the number of segments in the array.
/// `path` is an out parameter to hold the created path.
///
/// ## Specific Error Codes
/// * 1 = a segment `kind` is unrecognized.
///
/// # Safety
///
/// `segs` may be null if `n_segs` is 0 or must point to a valid contiguous buffer of
/// [v9_path_seg] with length of at least `n_segs`.
/// `path` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn v9_path_create(
    segs: *const v9_path_seg,
    n_segs: u32,
    path: *mut *const v9_path,
) -> i32 {
    ffi_catch_unwind!({
        let mut result = Path::new();
        if !segs.is_null() && n_segs != 0 {
            let data = slice::from_raw_parts(segs, n_segs as usize);
            result.reserve(data.len());
            for s in data {
                match s.to_internal() {
                    Some(seg) => {
                        result.push(seg);
                    }
                    None => return 1,
                }
            }
        }

        path.write(Box::into_raw(Box::new(v9_path(result))));
        0
    })
}

/// Free an existing [v9_path] object.
///
/// Nothing happens if `path` is null.
///
/// # Safety
///
/// `path` must be null or a valid v9_path object that was created with [v9_path_create] (or
/// returned by [v9_path_resizer_resize]) and has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn v9_path_f(path: *mut v9_path) {
    if !path.is_null() {
        drop(Box::from_raw(path))
    }
}

/// Append a move command to the path.
///
/// ## Specific Error Codes
/// * 1 = `path` is null.
///
/// # Safety
///
/// `path` must be null or a valid v9_path object that has not been freed.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn v9_path_move_to(path: *mut v9_path, x: f64, y: f64) -> i32 {
    ffi_catch_unwind!({
        if path.is_null() {
            return 1;
        }

        (*path).0.move_to(x, y);
        0
    })
}

/// Append a line command to the path.
///
/// ## Specific Error Codes
/// * 1 = `path` is null.
///
/// # Safety
///
/// `path` must be null or a valid v9_path object that has not been freed.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn v9_path_line_to(path: *mut v9_path, x: f64, y: f64) -> i32 {
    ffi_catch_unwind!({
        if path.is_null() {
            return 1;
        }

        (*path).0.line_to(x, y);
        0
    })
}

/// Append a quadratic bezier command to the path.
///
/// ## Specific Error Codes
/// * 1 = `path` is null.
///
/// # Safety
///
/// `path` must be null or a valid v9_path object that has not been freed.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn v9_path_quad_to(
    path: *mut v9_path,
    cx: f64,
    cy: f64,
    x: f64,
    y: f64,
) -> i32 {
    ffi_catch_unwind!({
        if path.is_null() {
            return 1;
        }

        (*path).0.quad_to(cx, cy, x, y);
        0
    })
}

/// Append a cubic bezier command to the path.
///
/// ## Specific Error Codes
/// * 1 = `path` is null.
///
/// # Safety
///
/// `path` must be null or a valid v9_path object that has not been freed.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn v9_path_cubic_to(
    path: *mut v9_path,
    c1x: f64,
    c1y: f64,
    c2x: f64,
    c2y: f64,
    x: f64,
    y: f64,
) -> i32 {
    ffi_catch_unwind!({
        if path.is_null() {
            return 1;
        }

        (*path).0.cubic_to(c1x, c1y, c2x, c2y, x, y);
        0
    })
}

/// Append a close command to the path.
///
/// ## Specific Error Codes
/// * 1 = `path` is null.
///
/// # Safety
///
/// `path` must be null or a valid v9_path object that has not been freed.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn v9_path_close(path: *mut v9_path) -> i32 {
    ffi_catch_unwind!({
        if path.is_null() {
            return 1;
        }

        (*path).0.close();
        0
    })
}

/// Get the number of segments in a path.
///
/// `count` used as out parameter to hold the segment count.
///
/// ## Specific Error Codes
/// * 1 = `path` is null.
///
/// # Safety
///
/// `path` must be null or a valid v9_path object that has not been freed.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn v9_path_get_seg_count(path: *const v9_path, count: *mut u32) -> i32 {
    ffi_catch_unwind!({
        if path.is_null() {
            return 1;
        }

        // using try_from to catch odd case of segment count greater than u32::MAX to prevent
        // memory corruption/access errors but just panic as internal error if it does occur
        count.write(u32::try_from((*path).0.len()).unwrap());
        0
    })
}

/// Fills the buffer given with the segment data of a path.
///
/// You must use [v9_path_get_seg_count] to ensure the buffer given has adequate length to be
/// filled with all segments!
///
/// ## Specific Error Codes
/// * 1 = `path` is null.
///
/// # Safety
///
/// `path` must be null or a valid v9_path object that has not been freed.
/// `seg_data` must point to a buffer that is large enough to hold all the segments or a buffer
/// overrun will happen.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn v9_path_get_seg_data(
    path: *const v9_path,
    seg_data: *mut v9_path_seg,
) -> i32 {
    ffi_catch_unwind!({
        if path.is_null() {
            return 1;
        }

        let buffer = slice::from_raw_parts_mut(seg_data, (*path).0.len());
        for (dst, seg) in buffer.iter_mut().zip((*path).0.iter()) {
            *dst = v9_path_seg::from_internal(seg);
        }
        0
    })
}

/// Get the tight bounds (curve extrema included) of a path.
///
/// `bounds` is an out parameter to hold the bounding box.
///
/// ## Specific Error Codes
/// * 1 = `path` is null.
/// * 2 = `path` has no geometry (bounds not written).
///
/// # Safety
///
/// `path` must be null or a valid v9_path object that has not been freed.
/// `bounds` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn v9_path_get_tight_bounds(
    path: *const v9_path,
    bounds: *mut v9_aabb,
) -> i32 {
    ffi_catch_unwind!({
        if path.is_null() {
            return 1;
        }

        match (*path).0.tight_bounds() {
            Some(bb) => {
                bounds.write(v9_aabb::from_internal(&bb));
                0
            }
            None => 2,
        }
    })
}

unsafe fn slices_from_raw(data: *const v9_slice, n: u32) -> Result<Vec<Slice<f64>>, Error> {
    if data.is_null() || n == 0 {
        return Ok(Vec::new());
    }

    slice::from_raw_parts(data, n as usize)
        .iter()
        .map(|s| Slice::new(s.start, s.end))
        .collect()
}

fn slices_error_code(err: &Error) -> i32 {
    match err {
        Error::EmptySliceList { .. } => report_error(err, 2),
        _ => report_error(err, 1),
    }
}

/// Create a new slices object from vertical (X) and horizontal (Y) slice arrays.
///
/// Zero size slices are dropped and the rest sorted by start.
///
/// ## Specific Error Codes
/// * 1 = a slice has `start > end`.
/// * 2 = `vertical` or `horizontal` is empty.
///
/// # Safety
///
/// `vertical` and `horizontal` may be null if their count is 0 or must point to a valid
/// contiguous buffer of [v9_slice] with length of at least their count.
/// `slices` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn v9_slices_create(
    vertical: *const v9_slice,
    n_vertical: u32,
    horizontal: *const v9_slice,
    n_horizontal: u32,
    slices: *mut *const v9_slices,
) -> i32 {
    ffi_catch_unwind!({
        let result = slices_from_raw(vertical, n_vertical).and_then(|v| {
            slices_from_raw(horizontal, n_horizontal).and_then(|h| Slices::new(v, h))
        });

        match result {
            Ok(s) => {
                slices.write(Box::into_raw(Box::new(v9_slices(s))));
                0
            }
            Err(err) => slices_error_code(&err),
        }
    })
}

/// Create a new slices object holding a single stretch region `left`, `top`, `right`, `bottom`.
///
/// ## Specific Error Codes
/// * 1 = `left > right` or `top > bottom`.
///
/// # Safety
///
/// `slices` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn v9_slices_create_from_rect(
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
    slices: *mut *const v9_slices,
) -> i32 {
    ffi_catch_unwind!({
        match Slices::from_rect(left, top, right, bottom) {
            Ok(s) => {
                slices.write(Box::into_raw(Box::new(v9_slices(s))));
                0
            }
            Err(err) => slices_error_code(&err),
        }
    })
}

/// Free an existing [v9_slices] object.
///
/// Nothing happens if `slices` is null.
///
/// # Safety
///
/// `slices` must be null or a valid v9_slices object that was created with [v9_slices_create] or
/// [v9_slices_create_from_rect] and has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn v9_slices_f(slices: *mut v9_slices) {
    if !slices.is_null() {
        drop(Box::from_raw(slices))
    }
}

/// Create a new path resizer for `path` stretched according to `slices`.
///
/// The resizer keeps its own copy of both, `path` and `slices` may be freed afterwards.
///
/// ## Specific Error Codes
/// * 1 = `path` and/or `slices` is null.
///
/// # Safety
///
/// `path` and `slices` must each be null or a valid object that has not been freed.
/// `resizer` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn v9_path_resizer_create(
    path: *const v9_path,
    slices: *const v9_slices,
    resizer: *mut *const v9_path_resizer,
) -> i32 {
    ffi_catch_unwind!({
        if path.is_null() || slices.is_null() {
            return 1;
        }

        let r = PathResizer::new(&(*path).0, (*slices).0.clone());
        resizer.write(Box::into_raw(Box::new(v9_path_resizer(r))));
        0
    })
}

/// Free an existing [v9_path_resizer] object.
///
/// Nothing happens if `resizer` is null.
///
/// # Safety
///
/// `resizer` must be null or a valid v9_path_resizer object that was created with
/// [v9_path_resizer_create] and has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn v9_path_resizer_f(resizer: *mut v9_path_resizer) {
    if !resizer.is_null() {
        drop(Box::from_raw(resizer))
    }
}

/// Get the tight bounds of the source path of a resizer, its width and height are the minimum
/// resize size.
///
/// ## Specific Error Codes
/// * 1 = `resizer` is null.
///
/// # Safety
///
/// `resizer` must be null or a valid v9_path_resizer object that has not been freed.
/// `bounds` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn v9_path_resizer_get_bounds(
    resizer: *const v9_path_resizer,
    bounds: *mut v9_aabb,
) -> i32 {
    ffi_catch_unwind!({
        if resizer.is_null() {
            return 1;
        }

        bounds.write(v9_aabb::from_internal((*resizer).0.bounds()));
        0
    })
}

/// Wraps [PathResizer::resize].
///
/// `result` is an out parameter to hold the new resized path, it must be freed with [v9_path_f].
///
/// ## Specific Error Codes
/// * 1 = `resizer` is null.
/// * 2 = `width` or `height` is smaller than the source path.
/// * 3 = a dimension must grow but all of its slices have zero size.
///
/// # Safety
///
/// `resizer` must be null or a valid v9_path_resizer object that has not been freed.
/// `result` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn v9_path_resizer_resize(
    resizer: *const v9_path_resizer,
    width: f64,
    height: f64,
    result: *mut *const v9_path,
) -> i32 {
    ffi_catch_unwind!({
        if resizer.is_null() {
            return 1;
        }

        match (*resizer).0.resize(width, height) {
            Ok(path) => {
                result.write(Box::into_raw(Box::new(v9_path(path))));
                0
            }
            Err(err @ Error::NoStretchableRegion { .. }) => report_error(&err, 3),
            Err(err) => report_error(&err, 2),
        }
    })
}

/// Get the message of the last error reported by a function of this library on the calling
/// thread.
///
/// `msg` is an out parameter receiving a null terminated string, it stays valid until the next
/// error is reported on this thread or [v9_clear_last_error] is called. It is set to null if no
/// error was reported.
///
/// # Safety
///
/// `msg` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn v9_last_error_msg(msg: *mut *const c_char) -> i32 {
    ffi_catch_unwind!({
        let ptr = LAST_ERROR.with(|last| match &*last.borrow() {
            Some(data) => data.error_msg.as_ptr(),
            None => std::ptr::null(),
        });
        msg.write(ptr);
        0
    })
}

/// Clear the last error reported on the calling thread.
#[no_mangle]
pub extern "C" fn v9_clear_last_error() {
    clear_last_error();
}
