use anyhow::{Context, Result};
use clap::Parser;
use glam::{Mat4, Vec2};
use log::{error, info};

use grid_layer::cli::Cli;
use grid_layer::config::RendererConfig;
use grid_layer::{CanvasRenderer, DrawOutcome, Grid, GridRenderer, RenderContext};

/// Two-colour checkerboard so cell boundaries are visible
fn checkerboard(cols: u32, rows: u32) -> Grid {
    let mut grid = Grid::new(cols, rows);
    for y in 0..rows {
        for x in 0..cols {
            let color = if (x + y) % 2 == 0 {
                [230, 230, 230, 255]
            } else {
                [40, 90, 200, 255]
            };
            grid.set_cell(x, y, color);
        }
    }
    grid
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RendererConfig::load(path)
            .with_context(|| format!("loading renderer config {}", path.display()))?,
        None => RendererConfig::default(),
    };
    let mut renderer = CanvasRenderer::from_config(&config);
    info!("renderer ready with {} target(s)", renderer.target_count());

    let ctx = RenderContext::new(checkerboard(cli.cols, cli.rows))
        .with_idx(cli.idx)
        .with_view_size(Vec2::new(cli.width, cli.height))
        .with_transform(Mat4::IDENTITY);

    let mut contexts = Vec::new();
    if cli.warmup {
        contexts.push(RenderContext::default().with_idx(cli.idx));
    }
    contexts.push(ctx);

    renderer.begin_frame();
    let report = renderer.render_frame(&contexts);

    for (i, result) in report.results.iter().enumerate() {
        match result {
            Ok(DrawOutcome::Drawn(call)) => info!(
                "context {i}: drew {} cells into target {}",
                call.cells, call.target
            ),
            Ok(DrawOutcome::Skipped(reason)) => info!("context {i}: skipped ({reason:?})"),
            Err(err) => error!("context {i}: {err}"),
        }
    }

    if cli.report {
        let json = serde_json::to_string_pretty(&report.to_json())
            .context("serializing frame report")?;
        println!("{json}");
    } else {
        println!(
            "frame: {} drawn, {} skipped, {} failed",
            report.drawn(),
            report.skipped(),
            report.failed()
        );
    }

    Ok(())
}
