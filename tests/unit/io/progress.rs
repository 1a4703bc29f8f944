//! Tests for run progress tracking

#[cfg(test)]
mod tests {
    use grassfire::io::progress::RunProgress;

    // Tests counters track completed and reachable runs
    // Verified by counting every run as reachable
    #[test]
    fn test_counts_runs() {
        let mut progress = RunProgress::new(3, false);
        progress.complete_run(true);
        progress.complete_run(false);
        progress.complete_run(true);
        progress.finish();

        assert_eq!(progress.completed(), 3);
        assert_eq!(progress.reachable(), 2);
    }

    // Tests a drawn bar counts the same way as a hidden one
    // Verified by skipping the counters when a bar is drawn
    #[test]
    fn test_visible_batch_counts_runs() {
        let mut progress = RunProgress::new(2, true);
        progress.complete_run(false);
        progress.complete_run(false);
        progress.finish();

        assert_eq!(progress.completed(), 2);
        assert_eq!(progress.reachable(), 0);
    }
}
