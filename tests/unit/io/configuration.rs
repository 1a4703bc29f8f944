//! Tests for configuration defaults and grid limits

#[cfg(test)]
mod tests {
    use grassfire::io::configuration::{DEFAULT_MIN_COLUMNS, DEFAULT_MIN_ROWS, GridLimits};

    #[test]
    fn test_default_limits() {
        let limits = GridLimits::default();
        assert_eq!(limits.min_rows, DEFAULT_MIN_ROWS);
        assert_eq!(limits.min_cols, DEFAULT_MIN_COLUMNS);
        assert_eq!((limits.min_rows, limits.min_cols), (8, 8));
    }

    // Tests both dimensions must meet their minimum
    // Verified by checking only the rows
    #[test]
    fn test_limits_accept() {
        let limits = GridLimits::default();
        assert!(limits.accepts(8, 8));
        assert!(limits.accepts(100, 9));
        assert!(!limits.accepts(7, 8));
        assert!(!limits.accepts(8, 7));
        assert!(!limits.accepts(-8, 8));
    }
}
