//! Tests for argument parsing and session replay

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use clap::Parser;
    use wangtile::EditorError;
    use wangtile::io::cli::{Cli, SessionRunner, SessionSummary, init_logging};

    const SESSION: &str = "\
# A fits at the corner, B clashes with it, C sits below it
pick A
move 25 25
release
pick B
move 75 25
release
pick C
move 25 75
release
tap 30 30
pick Z
clear
";

    fn write_session(dir: &Path) -> std::io::Result<PathBuf> {
        let script = dir.join("session.txt");
        std::fs::write(&script, SESSION)?;
        Ok(script)
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["wangtile", "session.txt"]);

        assert_eq!((cli.cols, cli.rows), (10, 10));
        assert!((cli.cell_size - 50.0).abs() < f64::EPSILON);
        assert!(!cli.preview && !cli.strict && !cli.empty_catalog && !cli.quiet);
        assert_eq!(cli.log_level(), "info");
        assert_eq!(cli.output_path(), PathBuf::from("session_board.png"));
    }

    #[test]
    fn test_flags_and_output_path() {
        let cli = Cli::parse_from([
            "wangtile", "runs/demo.txt", "-c", "12", "-r", "6", "--strict", "--quiet",
        ]);
        assert_eq!((cli.cols, cli.rows), (12, 6));
        assert!(cli.strict);
        assert_eq!(cli.log_level(), "warn");
        assert_eq!(cli.output_path(), PathBuf::from("runs/demo_board.png"));

        let cli = Cli::parse_from(["wangtile", "demo.txt", "-o", "out/final.png"]);
        assert_eq!(cli.output_path(), PathBuf::from("out/final.png"));
    }

    // Tests a replayed session tallies every outcome and renders the board
    #[test]
    fn test_session_replay_summary() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let script = write_session(dir.path())?;
        let output = dir.path().join("out").join("board.png");
        let cli = Cli::parse_from([
            Path::new("wangtile"),
            script.as_path(),
            Path::new("-o"),
            output.as_path(),
        ]);

        let summary = SessionRunner::new(cli).run()?;

        assert_eq!(
            summary,
            SessionSummary {
                intents: 12,
                placed: 2,
                discarded: 1,
                removed: 2,
                refused: 1,
            }
        );
        assert!(output.exists());
        Ok(())
    }

    // Tests strict mode stops at the first discarded drag
    // Verified by ignoring the strict flag on discards
    #[test]
    fn test_strict_mode_aborts() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let script = write_session(dir.path())?;
        let output = dir.path().join("board.png");
        let cli = Cli::parse_from([
            Path::new("wangtile"),
            script.as_path(),
            Path::new("-o"),
            output.as_path(),
            Path::new("--strict"),
        ]);

        let result = SessionRunner::new(cli).run();

        assert!(matches!(result, Err(EditorError::EdgeMismatch { .. })));
        assert!(!output.exists());
        Ok(())
    }

    #[test]
    fn test_invalid_grid_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let script = write_session(dir.path())?;
        let cli = Cli::parse_from([
            Path::new("wangtile"),
            script.as_path(),
            Path::new("--cols"),
            Path::new("25"),
        ]);

        let result = SessionRunner::new(cli).run();

        assert!(matches!(
            result,
            Err(EditorError::InvalidParameter { parameter: "cols", .. })
        ));
        Ok(())
    }

    #[test]
    fn test_empty_catalog_refuses_default_ids() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let script = write_session(dir.path())?;
        let output = dir.path().join("board.png");
        let cli = Cli::parse_from([
            Path::new("wangtile"),
            script.as_path(),
            Path::new("-o"),
            output.as_path(),
            Path::new("--empty-catalog"),
        ]);

        let summary = SessionRunner::new(cli).run()?;

        assert_eq!(summary.placed, 0);
        assert_eq!(summary.refused, 4);
        Ok(())
    }

    #[test]
    fn test_oversized_cell_size_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let script = write_session(dir.path())?;
        let output = dir.path().join("board.png");
        let cli = Cli::parse_from([
            Path::new("wangtile"),
            script.as_path(),
            Path::new("-o"),
            output.as_path(),
            Path::new("--cell-size"),
            Path::new("10000000"),
        ]);

        let result = SessionRunner::new(cli).run();

        assert!(matches!(
            result,
            Err(EditorError::InvalidParameter {
                parameter: "cell_size",
                ..
            })
        ));
        assert!(!output.exists());
        Ok(())
    }

    // Tests a second logging setup keeps the first subscriber instead of failing
    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging("warn");
        init_logging("debug");
        tracing::debug!("still logging after a repeated setup");
    }
}
