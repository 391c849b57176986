//! The capture -> recognize -> solve -> dispatch loop.

use std::path::Path;

use arrowbot_device::{batch_tap_command, Adb};
use arrowbot_solver::solve;
use arrowbot_vision as vision;
use arrowbot_vision::{BoardLayout, VisionError};
use image::RgbaImage;
use tokio::time::sleep;

use crate::config::BotConfig;

type BoxError = Box<dyn std::error::Error>;

fn layout_for(config: &BotConfig, frame: &RgbaImage) -> BoardLayout {
    let origin_x = config
        .position_x
        .unwrap_or_else(|| (frame.width() / 2) as i32);
    BoardLayout {
        circle_radius: config.circle_radius,
        origin_x,
        origin_y: config.position_y,
        sample_dx: config.sample_x,
        sample_dy: config.sample_y,
    }
}

fn advance_button(config: &BotConfig, frame: &RgbaImage) -> (i32, i32) {
    let x = config.next_x.unwrap_or_else(|| (frame.width() / 2) as i32);
    (x, config.next_y)
}

/// Capture one frame and write the calibration image.
pub async fn render_calibration(config: &BotConfig, path: &Path) -> Result<(), BoxError> {
    let adb = Adb::new(&config.adb_path, config.adb_args.clone());

    let png = adb.screencap().await?;
    let mut frame = vision::decode_frame(&png)?;
    vision::expect_frame_size(&frame, config.expect_width, config.expect_height)?;

    let layout = layout_for(config, &frame);
    let button = advance_button(config, &frame);
    vision::render_debug(&mut frame, &layout, Some(button));

    frame.save(path)?;
    tracing::info!(path = %path.display(), "wrote calibration image");
    Ok(())
}

/// Solve puzzles until interrupted.
pub async fn run(config: &BotConfig) -> Result<(), BoxError> {
    let adb = Adb::new(&config.adb_path, config.adb_args.clone());

    loop {
        let png = adb.screencap().await?;
        let frame = vision::decode_frame(&png)?;
        vision::expect_frame_size(&frame, config.expect_width, config.expect_height)?;
        let layout = layout_for(config, &frame);

        let board = match vision::read_board(&frame, &layout) {
            Ok(board) => board,
            Err(err @ VisionError::UnrecognizedColor { .. }) => {
                // capture caught a cell mid-animation; take a fresh one
                tracing::warn!(%err, "recognition failed, retrying");
                sleep(config.reset_delay).await;
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        let plan = solve(&board);
        let taps = plan.iter().map(|click| {
            let (px, py) = layout.cell_to_image(click.x, click.y);
            (px, py, click.count)
        });

        let Some(command) = batch_tap_command(taps) else {
            // board already at rest: we screenshotted before the next
            // level appeared
            sleep(config.reset_delay).await;
            continue;
        };

        tracing::info!(taps = plan.total_taps() + 1, "dispatching");
        adb.shell(&command).await?;

        sleep(config.next_delay).await;
        let (next_x, next_y) = advance_button(config, &frame);
        adb.tap(next_x, next_y).await?;
        sleep(config.reset_delay).await;
    }
}
