/*!

  Utils for testing translator output.

*/

/// Compare emitted text line by line, ignoring indentation and surrounding blank lines.
#[macro_export]
macro_rules! assert_lines_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                let left_lines: Vec<&str> = left_val.trim().lines().map(str::trim).collect();
                let right_lines: Vec<&str> = right_val.trim().lines().map(str::trim).collect();
                assert_eq!(left_lines, right_lines);
            }
        }
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                let left_lines: Vec<&str> = left_val.trim().lines().map(str::trim).collect();
                let right_lines: Vec<&str> = right_val.trim().lines().map(str::trim).collect();
                assert_eq!(left_lines, right_lines, std::format_args!($($arg)+));
            }
        }
    };
}
