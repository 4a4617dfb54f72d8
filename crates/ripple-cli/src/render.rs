//! Rendering of a worker's final energy field: a plain-text dump of
//! `(row_frac, col_frac, value)` triples and a grayscale PNG.

use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::{GrayImage, Luma};
use ripple_core::{Partition, WorkerRank};
use ripple_field::Field;

/// Display range mapped onto the 8-bit grayscale ramp.
pub const DISPLAY_MIN: f32 = -0.1;
/// Upper end of the display range.
pub const DISPLAY_MAX: f32 = 0.1;

/// Write `lake.dat` and `lake.png` (or `lake_<rank>.*` for a
/// partitioned run) for the worker's n×n physical window.
pub fn write_outputs(
    dir: &Path,
    rank: Option<WorkerRank>,
    field: &Field,
    partition: &Partition,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    std::fs::create_dir_all(dir)?;
    let stem = match rank {
        Some(rank) => format!("lake_{rank}"),
        None => "lake".to_string(),
    };
    let window = field.energy_rows(partition.physical.clone());
    let n = partition.side;

    let file = std::fs::File::create(dir.join(format!("{stem}.dat")))?;
    write_dat(BufWriter::new(file), window, n)?;
    write_image(&dir.join(format!("{stem}.png")), window, n)?;
    Ok(())
}

/// Dump one `row/n col/n value` line per cell, row-major, `%.4f`.
pub fn write_dat<W: Write>(mut out: W, window: &[f32], n: usize) -> io::Result<()> {
    let step = 1.0 / n as f32;
    for i in 0..n {
        for j in 0..n {
            writeln!(
                out,
                "{:.4} {:.4} {:.4}",
                i as f32 * step,
                j as f32 * step,
                window[i * n + j]
            )?;
        }
    }
    out.flush()
}

/// Save the window as an 8-bit grayscale PNG, values linearly rescaled
/// from `[DISPLAY_MIN, DISPLAY_MAX]` to `[0, 255]` and clipped.
pub fn write_image(path: &Path, window: &[f32], n: usize) -> Result<(), image::ImageError> {
    let img = GrayImage::from_fn(n as u32, n as u32, |x, y| {
        Luma([to_gray(window[y as usize * n + x as usize])])
    });
    img.save(path)
}

fn to_gray(value: f32) -> u8 {
    let scaled = (value - DISPLAY_MIN) / (DISPLAY_MAX - DISPLAY_MIN) * 255.0;
    scaled.clamp(0.0, 255.0) as u8
}
