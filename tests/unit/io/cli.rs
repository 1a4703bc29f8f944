//! Tests for command-line parsing and the run pipeline

#[cfg(test)]
mod tests {
    use clap::Parser;
    use grassfire::PathfindingError;
    use grassfire::io::cli::{Cli, RunProcessor};
    use grassfire::io::configuration::{DEFAULT_OBSTACLE_PERCENTAGE, DEFAULT_RUNS, GridLimits};
    use grassfire::io::prompt::NOT_AN_INTEGER_MESSAGE;
    use std::path::{Path, PathBuf};

    fn output_arg(dir: &Path, name: &str) -> String {
        dir.join(name).to_string_lossy().into_owned()
    }

    // Tests defaults when no arguments are given
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["grassfire"]);

        assert_eq!(cli.rows, None);
        assert_eq!(cli.cols, None);
        assert_eq!(cli.runs, DEFAULT_RUNS);
        assert!((cli.obstacle_percentage - DEFAULT_OBSTACLE_PERCENTAGE).abs() < f64::EPSILON);
        assert_eq!(cli.output, PathBuf::from("grassfire.png"));
        assert_eq!(cli.seed, None);
        assert!(!cli.animate && !cli.text && !cli.quiet);
        assert_eq!(cli.limits().expect("default limits"), GridLimits::default());
        assert_eq!(cli.log_filter(), "info");
    }

    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "grassfire",
            "-r",
            "12",
            "-c",
            "20",
            "--obstacles",
            "25",
            "--seed",
            "99",
            "-n",
            "3",
            "-o",
            "out/grid.png",
            "--animate",
            "--text",
            "--quiet",
        ]);

        assert_eq!(cli.rows, Some(12));
        assert_eq!(cli.cols, Some(20));
        assert_eq!(cli.seed, Some(99));
        assert_eq!(cli.runs, 3);
        assert!(cli.animate && cli.text && cli.quiet);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.log_filter(), "warn");

        let shape = cli
            .shape_from_args(cli.limits().expect("valid limits"))
            .expect("large enough")
            .expect("both dimensions given");
        assert_eq!(shape.dim(), (12, 20));
    }

    #[test]
    fn test_shape_from_args_needs_both_dimensions() {
        let cli = Cli::parse_from(["grassfire", "--rows", "10"]);
        assert_eq!(cli.shape_from_args(GridLimits::default()).expect("valid"), None);
    }

    // Tests sizes below the minimum are rejected instead of prompted for
    // Verified by clamping to the minimum
    #[test]
    fn test_shape_from_args_enforces_minimum() {
        let cli = Cli::parse_from(["grassfire", "--rows", "7", "--cols", "10"]);
        assert!(matches!(
            cli.shape_from_args(GridLimits::default()),
            Err(PathfindingError::InvalidParameter {
                parameter: "rows",
                ..
            })
        ));

        let custom = Cli::parse_from(["grassfire", "-r", "4", "-c", "4", "--min-rows", "4"]);
        let limits = custom.limits().expect("valid limits");
        assert!(custom.shape_from_args(limits).is_err());
    }

    #[test]
    fn test_limits_reject_regionless_minimums() {
        let cli = Cli::parse_from(["grassfire", "--min-rows", "2"]);
        assert!(cli.limits().is_err());
        let cli = Cli::parse_from(["grassfire", "--min-cols", "1"]);
        assert!(cli.limits().is_err());
    }

    // Tests output naming for single and multiple runs
    // Verified by numbering runs from zero
    #[test]
    fn test_output_paths() {
        let single = Cli::parse_from(["grassfire", "-o", "out/grid.png"]);
        assert_eq!(single.image_path(0), PathBuf::from("out/grid.png"));
        assert_eq!(
            single.animation_path(0),
            PathBuf::from("out/grid_wavefront.gif")
        );

        let batch = Cli::parse_from(["grassfire", "-o", "grid.png", "-n", "3"]);
        assert_eq!(batch.image_path(0), PathBuf::from("grid_1.png"));
        assert_eq!(batch.image_path(2), PathBuf::from("grid_3.png"));
        assert_eq!(batch.animation_path(1), PathBuf::from("grid_2_wavefront.gif"));
    }

    // Tests a full run writes the image, the animation and the text grid
    // Verified by skipping the export step
    #[test]
    fn test_process_single_run_exports_files() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output = output_arg(temp_dir.path(), "nested/run.png");
        let cli = Cli::parse_from([
            "grassfire", "-r", "8", "-c", "10", "-s", "11", "-o", &output, "-a", "-t", "-q",
        ]);

        let mut terminal = Vec::new();
        let summaries = RunProcessor::new(cli)
            .process_with(&b""[..], &mut terminal)
            .expect("run succeeds");

        assert_eq!(summaries.len(), 1);
        let summary = summaries.first().expect("one summary");
        assert_eq!(summary.index, 0);
        assert_eq!(summary.scenario.shape.dim(), (8, 10));
        assert!(summary.image_path.exists());
        assert!(
            summary
                .animation_path
                .as_ref()
                .is_some_and(|path| path.exists())
        );

        let text = String::from_utf8(terminal).expect("utf-8 output");
        assert_eq!(text.lines().filter(|line| line.len() == 10).count(), 8);
        assert!(text.contains('S'));
        assert!(text.contains('E'));
        // distance table: ten right-aligned columns of width 3
        let field_lines: Vec<_> = text.lines().filter(|line| line.len() == 39).collect();
        assert_eq!(field_lines.len(), 8);
        assert!(field_lines.iter().any(|line| line.split_whitespace().any(|v| v == "0")));
    }

    // Tests a grid whose cell count overflows fails instead of panicking
    // Verified by computing the cell count unchecked
    #[test]
    fn test_process_rejects_oversized_grid() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output = output_arg(temp_dir.path(), "huge.png");
        let cli = Cli::parse_from([
            "grassfire", "-r", "2305843009213693952", "-c", "8", "-o", &output, "-q",
        ]);

        let result = RunProcessor::new(cli).process_with(&b""[..], Vec::new());
        assert!(matches!(
            result,
            Err(PathfindingError::InvalidParameter {
                parameter: "shape",
                ..
            })
        ));
    }

    // Tests a grid too large to draw fails before any scenario is generated
    // Verified by rendering without checking the image size
    #[test]
    fn test_process_rejects_unrenderable_grid() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output = output_arg(temp_dir.path(), "wide.png");
        let cli = Cli::parse_from([
            "grassfire", "-r", "8", "-c", "200000000", "-o", &output, "-q",
        ]);

        let result = RunProcessor::new(cli).process_with(&b""[..], Vec::new());
        assert!(matches!(
            result,
            Err(PathfindingError::InvalidParameter {
                parameter: "shape",
                ..
            })
        ));
        assert!(!temp_dir.path().join("wide.png").exists());
    }

    // Tests a fixed seed reproduces the same batch
    // Verified by reseeding per run
    #[test]
    fn test_process_batch_is_reproducible() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let run = |name: &str| {
            let output = output_arg(temp_dir.path(), name);
            let cli = Cli::parse_from([
                "grassfire", "-r", "9", "-c", "9", "-s", "2024", "-n", "3", "-o", &output, "-q",
            ]);
            RunProcessor::new(cli)
                .process_with(&b""[..], Vec::new())
                .expect("run succeeds")
        };

        let first = run("a.png");
        let second = run("b.png");
        assert_eq!(first.len(), 3);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.scenario, b.scenario);
            assert_eq!(a.plan.path, b.plan.path);
            assert!(a.image_path.exists());
        }
        assert_eq!(
            first.get(2).map(|summary| summary.image_path.clone()),
            Some(temp_dir.path().join("a_3.png"))
        );
    }

    // Tests missing dimensions fall back to the prompt
    // Verified by failing when dimensions are absent
    #[test]
    fn test_process_prompts_for_missing_size() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output = output_arg(temp_dir.path(), "prompted.png");
        let cli = Cli::parse_from(["grassfire", "-s", "5", "-o", &output, "-q"]);

        let mut terminal = Vec::new();
        let summaries = RunProcessor::new(cli)
            .process_with(&b"lots\n9\n11\n"[..], &mut terminal)
            .expect("run succeeds");

        assert_eq!(
            summaries.first().map(|summary| summary.scenario.shape.dim()),
            Some((9, 11))
        );
        let text = String::from_utf8(terminal).expect("utf-8 output");
        assert!(text.contains(NOT_AN_INTEGER_MESSAGE));
    }

    #[test]
    fn test_process_fails_when_prompt_closes() {
        let cli = Cli::parse_from(["grassfire", "-q"]);
        let result = RunProcessor::new(cli).process_with(&b"8\n"[..], Vec::new());
        assert!(matches!(
            result,
            Err(PathfindingError::PromptClosed { prompt: "columns" })
        ));
    }
}
