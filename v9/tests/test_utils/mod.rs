#![allow(dead_code)]
use v9::{
    core::math::Vector2,
    path,
    path::{Path, PathSeg},
};

// positions equal epsilon
pub const POS_EQ_EPS: f64 = 1e-9;

/// Speech bubble icon, 24 x 24 viewport with the drawn area spanning 2..22 on both axes.
pub fn bubble() -> Path<f64> {
    path![
        move_to(20.0, 2.0),
        line_to(4.0, 2.0),
        rel_cubic_to(-1.1, 0.0, -2.0, 0.9, -2.0, 2.0),
        rel_line_to(0.0, 18.0),
        rel_line_to(4.0, -4.0),
        rel_line_to(14.0, 0.0),
        rel_cubic_to(1.1, 0.0, 2.0, -0.9, 2.0, -2.0),
        line_to(22.0, 4.0),
        rel_cubic_to(0.0, -1.1, -0.9, -2.0, -2.0, -2.0),
        close(),
    ]
}

/// Bar chart icon, rounded frame spanning 3..21 on both axes with three bars inside.
pub fn assessment() -> Path<f64> {
    path![
        move_to(19.0, 3.0),
        line_to(5.0, 3.0),
        rel_cubic_to(-1.1, 0.0, -2.0, 0.9, -2.0, 2.0),
        rel_line_to(0.0, 14.0),
        rel_cubic_to(0.0, 1.1, 0.9, 2.0, 2.0, 2.0),
        rel_line_to(14.0, 0.0),
        rel_cubic_to(1.1, 0.0, 2.0, -0.9, 2.0, -2.0),
        line_to(21.0, 5.0),
        rel_cubic_to(0.0, -1.1, -0.9, -2.0, -2.0, -2.0),
        close(),
        move_to(9.0, 17.0),
        line_to(7.0, 17.0),
        rel_line_to(0.0, -7.0),
        rel_line_to(2.0, 0.0),
        rel_line_to(0.0, 7.0),
        close(),
        move_to(13.0, 17.0),
        rel_line_to(-2.0, 0.0),
        line_to(11.0, 7.0),
        rel_line_to(2.0, 0.0),
        rel_line_to(0.0, 10.0),
        close(),
        move_to(17.0, 17.0),
        rel_line_to(-2.0, 0.0),
        rel_line_to(0.0, -4.0),
        rel_line_to(2.0, 0.0),
        rel_line_to(0.0, 4.0),
        close(),
    ]
}

/// Collect every point of a path (control points included) in segment order.
pub fn all_points(path: &Path<f64>) -> Vec<Vector2<f64>> {
    let mut result = Vec::new();
    for seg in path.iter() {
        seg.visit_points(|p| result.push(p));
    }
    result
}

/// Assert two segments are the same command with fuzzy equal points.
pub fn assert_seg_fuzzy_eq(actual: &PathSeg<f64>, expected: &PathSeg<f64>) {
    assert_eq!(
        std::mem::discriminant(actual),
        std::mem::discriminant(expected),
        "segment kind mismatch: {:?} != {:?}",
        actual,
        expected
    );

    let mut a = Vec::new();
    let mut e = Vec::new();
    actual.visit_points(|p| a.push(p));
    expected.visit_points(|p| e.push(p));
    for (pa, pe) in a.iter().zip(&e) {
        assert!(
            pa.fuzzy_eq_eps(*pe, POS_EQ_EPS),
            "segment points mismatch: {:?} != {:?}",
            actual,
            expected
        );
    }
}
