// Generates the sample tile atlas used by the demo binary: a 192×192 sheet of
// 16×16 tiles, 12 per row. Every tile gets a flat fill derived from its index
// and a darker one-pixel border so misattributed tiles are easy to spot.

use image::{Rgba, RgbaImage};
use std::path::Path;

const ATLAS_SIZE: u32 = 192;
const TILE_SIZE: u32 = 16;

fn tile_color(index: u32) -> [u8; 4] {
    // Tile 49 is the background fill in the sample maze; keep it black.
    if index == 49 {
        return [0x00, 0x00, 0x00, 0xFF];
    }
    let r = (index * 37 % 200 + 40) as u8;
    let g = (index * 73 % 200 + 40) as u8;
    let b = (index * 151 % 200 + 40) as u8;
    [r, g, b, 0xFF]
}

fn draw_atlas() -> RgbaImage {
    let per_row = ATLAS_SIZE / TILE_SIZE;
    let mut img = RgbaImage::new(ATLAS_SIZE, ATLAS_SIZE);
    for y in 0..ATLAS_SIZE {
        for x in 0..ATLAS_SIZE {
            let (col, row) = (x / TILE_SIZE, y / TILE_SIZE);
            let (lx, ly) = (x % TILE_SIZE, y % TILE_SIZE);
            let fill = tile_color(row * per_row + col);
            let on_border = lx == 0 || ly == 0 || lx == TILE_SIZE - 1 || ly == TILE_SIZE - 1;
            let px = if on_border && fill != [0, 0, 0, 0xFF] {
                [fill[0] / 2, fill[1] / 2, fill[2] / 2, 0xFF]
            } else {
                fill
            };
            img.put_pixel(x, y, Rgba(px));
        }
    }
    img
}

fn main() {
    let out_dir = std::env::var("OUT_DIR").expect("build: OUT_DIR not set");
    let path = Path::new(&out_dir).join("tiles.png");
    draw_atlas()
        .save(&path)
        .unwrap_or_else(|e| panic!("build: could not save {}: {e}", path.display()));

    println!("cargo:rerun-if-changed=build.rs");
}
