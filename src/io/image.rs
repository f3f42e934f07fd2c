//! Board rendering and PNG export
//!
//! Draws the same picture as the interactive canvas: grid lines, placed tiles
//! with a colored stripe along each edge, and a translucent drag preview.
//! Rendering only reads editor state.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::catalog::edges::{Direction, EdgeSet};
use crate::interaction::editor::Editor;
use crate::io::configuration::{
    EDGE_CLASS_COLORS, GRID_LINE_COLOR, PREVIEW_ALPHA, PREVIEW_OUTLINE_COLOR, STRIPE_WIDTH,
    TILE_FILL_COLOR, TILE_OUTLINE_COLOR,
};
use crate::io::error::{EditorError, Result};
use crate::spatial::grid::GridCell;
use crate::spatial::mapper::CoordinateMapper;

// Axis-aligned rectangle in canvas units
#[derive(Debug, Clone, Copy)]
struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// Render the current board onto a square transparent canvas
///
/// With `include_preview`, a dragged tile hovering over a cell inside the
/// grid is drawn at reduced opacity, whether or not it would fit.
pub fn render_board(editor: &Editor, include_preview: bool) -> RgbaImage {
    let mapper = editor.mapper();
    let side = mapper.canvas_size().round().max(1.0) as u32;
    let mut img = RgbaImage::new(side, side);

    draw_grid_lines(&mut img, editor);

    for placed in editor.engine().placements() {
        draw_tile(
            &mut img,
            mapper,
            placed.cell(),
            placed.tile().edges(),
            TILE_OUTLINE_COLOR,
            1.0,
        );
    }

    if include_preview {
        if let Some(preview) = editor.hover().filter(|preview| preview.is_visible()) {
            draw_tile(
                &mut img,
                mapper,
                preview.cell,
                preview.candidate.edges(),
                PREVIEW_OUTLINE_COLOR,
                PREVIEW_ALPHA,
            );
        }
    }

    img
}

/// Render the board and save it as a PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(editor: &Editor, output_path: &Path, include_preview: bool) -> Result<()> {
    let img = render_board(editor, include_preview);

    if let Some(parent) = output_path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| EditorError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| EditorError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

fn draw_grid_lines(img: &mut RgbaImage, editor: &Editor) {
    let mapper = editor.mapper();
    let grid = editor.grid();
    let cell = mapper.cell_size();
    let width = grid.cols() as f64 * cell;
    let height = grid.rows() as f64 * cell;

    for col in 0..=grid.cols() {
        let x = (mapper.offset_x() + col as f64 * cell).min(mapper.canvas_size() - 1.0);
        fill_rect(
            img,
            Rect { x, y: mapper.offset_y(), width: 1.0, height },
            GRID_LINE_COLOR,
            1.0,
        );
    }
    for row in 0..=grid.rows() {
        let y = (mapper.offset_y() + row as f64 * cell).min(mapper.canvas_size() - 1.0);
        fill_rect(
            img,
            Rect { x: mapper.offset_x(), y, width, height: 1.0 },
            GRID_LINE_COLOR,
            1.0,
        );
    }
}

fn draw_tile(
    img: &mut RgbaImage,
    mapper: &CoordinateMapper,
    cell: GridCell,
    edges: &EdgeSet,
    outline: [u8; 4],
    alpha: f64,
) {
    let (x, y) = mapper.cell_origin(cell);
    let size = mapper.cell_size();
    let tile = Rect { x, y, width: size, height: size };

    fill_rect(img, tile, TILE_FILL_COLOR, alpha);
    stroke_rect(img, tile, outline, alpha);

    for direction in Direction::ALL {
        let color = EDGE_CLASS_COLORS
            .get(edges.get(direction).index())
            .copied()
            .unwrap_or([0, 0, 0, 255]);
        fill_rect(img, stripe(tile, direction), color, alpha);
    }
}

// Band of STRIPE_WIDTH along one side of a tile
fn stripe(tile: Rect, direction: Direction) -> Rect {
    let band = STRIPE_WIDTH.min(tile.width);
    match direction {
        Direction::North => Rect { height: band, ..tile },
        Direction::South => Rect {
            y: tile.y + tile.height - band,
            height: band,
            ..tile
        },
        Direction::West => Rect { width: band, ..tile },
        Direction::East => Rect {
            x: tile.x + tile.width - band,
            width: band,
            ..tile
        },
    }
}

fn stroke_rect(img: &mut RgbaImage, rect: Rect, color: [u8; 4], alpha: f64) {
    let right = rect.x + rect.width - 1.0;
    let bottom = rect.y + rect.height - 1.0;
    fill_rect(img, Rect { height: 1.0, ..rect }, color, alpha);
    fill_rect(img, Rect { y: bottom, height: 1.0, ..rect }, color, alpha);
    fill_rect(img, Rect { width: 1.0, ..rect }, color, alpha);
    fill_rect(img, Rect { x: right, width: 1.0, ..rect }, color, alpha);
}

// Fills whole pixels covered by the rectangle, clipped to the canvas
fn fill_rect(img: &mut RgbaImage, rect: Rect, color: [u8; 4], alpha: f64) {
    let clamp = |value: f64, limit: u32| value.round().clamp(0.0, f64::from(limit)) as u32;
    let x0 = clamp(rect.x, img.width());
    let y0 = clamp(rect.y, img.height());
    let x1 = clamp(rect.x + rect.width, img.width());
    let y1 = clamp(rect.y + rect.height, img.height());

    for py in y0..y1 {
        for px in x0..x1 {
            let Some(pixel) = img.get_pixel_mut_checked(px, py) else {
                continue;
            };
            *pixel = blend(*pixel, color, alpha);
        }
    }
}

// Source-over compositing with an extra opacity factor
fn blend(dst: Rgba<u8>, src: [u8; 4], alpha: f64) -> Rgba<u8> {
    let src_alpha = f64::from(src[3]) / 255.0 * alpha.clamp(0.0, 1.0);
    let dst_alpha = f64::from(dst.0[3]) / 255.0;
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
    if out_alpha <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |s: u8, d: u8| {
        let value = (f64::from(s) * src_alpha + f64::from(d) * dst_alpha * (1.0 - src_alpha))
            / out_alpha;
        value.round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        channel(src[0], dst.0[0]),
        channel(src[1], dst.0[1]),
        channel(src[2], dst.0[2]),
        (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}
