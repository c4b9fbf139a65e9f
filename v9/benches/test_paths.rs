use v9::{path, path::Path};

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

/// Closed wave of `segment_count` alternating cubic and quadratic segments spanning 0..24 on X.
pub fn wave(segment_count: usize) -> Path<f64> {
    let mut result = Path::with_capacity(segment_count + 3);
    let step = 24.0 / segment_count as f64;
    result.move_to(0.0, 12.0);
    for i in 0..segment_count {
        let x0 = i as f64 * step;
        let x1 = x0 + step;
        if i % 2 == 0 {
            result.cubic_to(x0 + step / 3.0, 2.0, x1 - step / 3.0, 22.0, x1, 12.0);
        } else {
            result.quad_to(x0 + step / 2.0, 0.0, x1, 12.0);
        }
    }
    result.line_to(24.0, 24.0).line_to(0.0, 24.0).close();
    result
}
