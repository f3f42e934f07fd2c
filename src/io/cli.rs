//! Command-line interface for replaying editing sessions

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::catalog::definitions::TileCatalog;
use crate::interaction::editor::{Editor, IntentOutcome, ReleaseOutcome};
use crate::interaction::subscription::PointerSubscription;
use crate::io::configuration::{CELL_SIZE, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, OUTPUT_SUFFIX};
use crate::io::error::Result;
use crate::io::image::export_board_as_png;
use crate::io::script::{ScriptStep, load_script};
use crate::spatial::grid::GridConfig;

#[derive(Parser)]
#[command(name = "wangtile")]
#[command(
    author,
    version,
    about = "Replay Wang tile editing sessions and render the resulting board"
)]
/// Command-line arguments for the session replay tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Session script to replay
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Where to write the rendered board (defaults to <SCRIPT>_board.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Initial number of grid columns
    #[arg(short, long, default_value_t = DEFAULT_GRID_COLS)]
    pub cols: usize,

    /// Initial number of grid rows
    #[arg(short, long, default_value_t = DEFAULT_GRID_ROWS)]
    pub rows: usize,

    /// Side length of one cell in pixels (at most 200)
    #[arg(long, default_value_t = CELL_SIZE)]
    pub cell_size: f64,

    /// Draw the pending drag preview if the script ends mid-drag
    #[arg(short, long)]
    pub preview: bool,

    /// Abort on the first rejected intent instead of logging it
    #[arg(short, long)]
    pub strict: bool,

    /// Start without the built-in tiles A to D
    #[arg(short, long)]
    pub empty_catalog: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Default log level for this invocation
    pub const fn log_level(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }

    /// Path of the rendered board
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| Self::default_output_path(&self.script))
    }

    fn default_output_path(script: &Path) -> PathBuf {
        let stem = script.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.png", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = script.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Install the stderr log subscriber; `RUST_LOG` overrides `default_level`
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(error) = installed {
        debug!(%error, "keeping the existing log subscriber");
    }
}

/// Tally of what a replayed session did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Intents applied
    pub intents: usize,
    /// Drags that ended in a placement
    pub placed: usize,
    /// Drags that were discarded
    pub discarded: usize,
    /// Tiles removed by clicks or clears
    pub removed: usize,
    /// Intents refused with an error
    pub refused: usize,
}

/// Replays a session script against a fresh editor
pub struct SessionRunner {
    cli: Cli,
}

impl SessionRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the script, replay it and render the final board
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be loaded, the initial grid or
    /// cell size is invalid, an intent is refused in strict mode, or the board
    /// cannot be exported
    pub fn run(&self) -> Result<SessionSummary> {
        let steps = load_script(&self.cli.script)?;
        let mut editor = self.build_editor()?;
        let output_path = self.cli.output_path();

        let summary = {
            let mut session = editor.subscribe();
            let summary = self.replay(&mut session, steps)?;
            export_board_as_png(session.editor(), &output_path, self.cli.preview)?;
            summary
        };

        info!(
            intents = summary.intents,
            placed = summary.placed,
            discarded = summary.discarded,
            removed = summary.removed,
            refused = summary.refused,
            board = editor.engine().len(),
            output = %output_path.display(),
            "session replayed"
        );
        Ok(summary)
    }

    fn build_editor(&self) -> Result<Editor> {
        let catalog = if self.cli.empty_catalog {
            TileCatalog::new()
        } else {
            TileCatalog::with_default_tiles()?
        };
        let grid = GridConfig::new(self.cli.cols, self.cli.rows)?;
        Editor::new(catalog, grid, self.cli.cell_size)
    }

    fn replay(
        &self,
        session: &mut PointerSubscription<'_>,
        steps: Vec<ScriptStep>,
    ) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        for ScriptStep { line, intent } in steps {
            summary.intents += 1;
            match session.apply(intent) {
                Ok(IntentOutcome::Released(ReleaseOutcome::Placed(placed))) => {
                    summary.placed += 1;
                    info!(line, tile = placed.tile().id(), cell = %placed.cell(), "placed");
                }
                Ok(IntentOutcome::Released(ReleaseOutcome::Discarded { candidate, reason })) => {
                    summary.discarded += 1;
                    info!(line, tile = candidate.id(), %reason, "discarded");
                    if self.cli.strict {
                        return Err(reason);
                    }
                }
                Ok(IntentOutcome::Clicked(Some(removed))) => {
                    summary.removed += 1;
                    info!(line, tile = removed.tile().id(), cell = %removed.cell(), "removed");
                }
                Ok(IntentOutcome::Cleared(count)) => {
                    summary.removed += count;
                    info!(line, count, "cleared");
                }
                Ok(_) => {}
                Err(error) => {
                    summary.refused += 1;
                    warn!(line, %error, "intent refused");
                    if self.cli.strict {
                        return Err(error);
                    }
                }
            }
        }

        Ok(summary)
    }
}
