//! Rasterizes the extension's SVG icon into the fixed PNG sizes the manifest
//! expects. Any failure aborts the whole run with the error printed.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use resvg::{tiny_skia, usvg};
use tracing::info;

const SIZES: [u32; 3] = [16, 48, 128];
const DEFAULT_INPUT: &str = "public/icons/icon.svg";

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let input = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    generate_icons(&input)
}

fn generate_icons(input: &Path) -> Result<()> {
    let svg_data =
        std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let tree = usvg::Tree::from_data(&svg_data, &usvg::Options::default())
        .map_err(|err| anyhow!("parsing {}: {err}", input.display()))?;

    let output_dir = input.parent().unwrap_or_else(|| Path::new("."));
    for size in SIZES {
        let output = output_dir.join(format!("icon{size}.png"));
        render_png(&tree, size, &output)?;
        info!("generated {size}x{size} icon at {}", output.display());
    }

    Ok(())
}

fn render_png(tree: &usvg::Tree, size: u32, output: &Path) -> Result<()> {
    let tree_size = tree.size();
    let scale = size as f32 / tree_size.width().max(tree_size.height());

    let mut pixmap = tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| anyhow!("failed to create {size}x{size} pixmap"))?;
    pixmap.fill(tiny_skia::Color::TRANSPARENT);

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(tree, transform, &mut pixmap.as_mut());

    pixmap
        .save_png(output)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}
