/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                #[allow(unused_imports)]
                use $crate::core::traits::FuzzyEq;
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                #[allow(unused_imports)]
                use $crate::core::traits::FuzzyEq;
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Construct a [Path](crate::path::Path) from a list of drawing commands.
///
/// Each command is written as the name of a [Path](crate::path::Path) builder method followed by
/// its coordinates in parentheses.
///
/// # Examples
///
/// ```
/// # use v9::path;
/// # use v9::path::*;
/// let square = path![
///     move_to(0.0, 0.0),
///     line_to(4.0, 0.0),
///     line_to(4.0, 4.0),
///     line_to(0.0, 4.0),
///     close(),
/// ];
/// assert_eq!(square.len(), 5);
/// assert_eq!(square[4], PathSeg::Close);
/// ```
#[macro_export]
macro_rules! path {
    ($( $cmd:ident ( $($arg:expr),* $(,)? ) ),* $(,)?) => {
        {
            let mut p = $crate::path::Path::new();
            $(
                p.$cmd($($arg),*);
            )*
            p
        }
    };
}
