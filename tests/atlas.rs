use tiledmap::geometry::Rect;
use tiledmap::tilemap::{TileAtlas, TileMapError};

fn atlas(w: u32, h: u32, tile: u32) -> TileAtlas {
    TileAtlas::new(Rect::sized(w, h), Rect::sized(tile, tile)).unwrap()
}

// ── Partitioning ──────────────────────────────────────────────────────────

#[test]
fn counts_follow_atlas_dimensions() {
    for (w, h, t) in [(192u32, 192u32, 16u32), (64, 32, 16), (48, 96, 8), (16, 16, 16), (0, 0, 4)] {
        let a = atlas(w, h, t);
        assert_eq!(a.tiles_per_row(), w / t, "{w}x{h}/{t}");
        assert_eq!(a.tiles_per_column(), h / t, "{w}x{h}/{t}");
        assert_eq!(a.tiles_on_atlas(), ((w / t) * (h / t)) as usize, "{w}x{h}/{t}");
        assert_eq!(a.source_rects().len(), a.tiles_on_atlas());
    }
}

#[test]
fn sample_atlas_has_144_tiles() {
    let a = atlas(192, 192, 16);
    assert_eq!(a.tiles_per_row(), 12);
    assert_eq!(a.tiles_per_column(), 12);
    assert_eq!(a.tiles_on_atlas(), 144);
    assert_eq!(a.tile_size(), 16);
}

#[test]
fn grass_tile_49_resolves_to_column_1_row_4() {
    let a = atlas(192, 192, 16);
    assert_eq!(a.source_rect(49), Some(Rect::new((49 % 12) * 16, (49 / 12) * 16, 16, 16)));
    assert_eq!(a.source_rect(49), Some(Rect::new(16, 64, 16, 16)));
}

#[test]
fn every_source_rect_is_a_full_tile_inside_the_atlas() {
    for (w, h, t) in [(192u32, 192u32, 16u32), (64, 32, 16), (40, 120, 20)] {
        let a = atlas(w, h, t);
        let bounds = Rect::sized(w, h);
        for (i, r) in a.source_rects().iter().enumerate() {
            assert_eq!((r.w, r.h), (t, t), "tile {i}");
            assert!(bounds.contains_rect(r), "tile {i} = {r:?} outside {w}x{h}");
        }
    }
}

#[test]
fn source_rects_are_distinct() {
    let a = atlas(64, 32, 16);
    let rects = a.source_rects();
    for (i, r) in rects.iter().enumerate() {
        assert!(rects[i + 1..].iter().all(|o| o != r), "tile {i} duplicated");
    }
}

#[test]
fn non_square_atlas_uses_row_stride() {
    // 4 tiles across, 2 down.
    let a = atlas(64, 32, 16);
    assert_eq!(a.source_rect(3), Some(Rect::new(48, 0, 16, 16)));
    assert_eq!(a.source_rect(4), Some(Rect::new(0, 16, 16, 16)));
    assert_eq!(a.source_rect(5), Some(Rect::new(16, 16, 16, 16)));
    assert_eq!(a.source_rect(7), Some(Rect::new(48, 16, 16, 16)));
}

#[test]
fn tall_atlas_uses_row_stride() {
    // 2 tiles across, 4 down.
    let a = atlas(32, 64, 16);
    assert_eq!(a.source_rect(2), Some(Rect::new(0, 16, 16, 16)));
    assert_eq!(a.source_rect(7), Some(Rect::new(16, 48, 16, 16)));
}

#[test]
fn index_past_end_has_no_source() {
    let a = atlas(192, 192, 16);
    assert_eq!(a.source_rect(143), Some(Rect::new(176, 176, 16, 16)));
    assert_eq!(a.source_rect(144), None);
    assert_eq!(a.source_rect(u16::MAX), None);
}

#[test]
fn sub_region_atlas_offsets_sources() {
    let a = TileAtlas::new(Rect::new(32, 8, 32, 16), Rect::sized(16, 16)).unwrap();
    assert_eq!(a.source_rect(0), Some(Rect::new(32, 8, 16, 16)));
    assert_eq!(a.source_rect(1), Some(Rect::new(48, 8, 16, 16)));
    assert_eq!(a.bounds(), Rect::new(32, 8, 32, 16));
}

// ── Validation ────────────────────────────────────────────────────────────

#[test]
fn height_not_divisible_fails() {
    let err = TileAtlas::new(Rect::sized(192, 190), Rect::sized(16, 16)).unwrap_err();
    assert_eq!(
        err,
        TileMapError::InvalidAtlasGeometry { atlas_w: 192, atlas_h: 190, tile_w: 16, tile_h: 16 }
    );
}

#[test]
fn atlas_past_i32_range_fails() {
    let err = TileAtlas::new(Rect::new(i32::MAX - 15, 0, 32, 16), Rect::sized(16, 16)).unwrap_err();
    assert!(matches!(err, TileMapError::InvalidAtlasGeometry { atlas_w: 32, .. }));

    let err = TileAtlas::new(Rect::sized(16, 1 << 31), Rect::sized(16, 16)).unwrap_err();
    assert!(matches!(err, TileMapError::InvalidAtlasGeometry { .. }));
}

#[test]
fn atlas_ending_at_i32_max_keeps_exact_origins() {
    let a = TileAtlas::new(Rect::new(i32::MAX - 32, 0, 32, 16), Rect::sized(16, 16)).unwrap();
    assert_eq!(a.source_rect(1), Some(Rect::new(i32::MAX - 16, 0, 16, 16)));
}

#[test]
fn tile_rect_origin_is_ignored() {
    let a = TileAtlas::new(Rect::sized(32, 32), Rect::new(5, 9, 16, 16)).unwrap();
    assert_eq!(a.source_rect(0), Some(Rect::new(0, 0, 16, 16)));
}

#[test]
fn texture_size_must_match_atlas() {
    let a = atlas(192, 192, 16);
    assert_eq!(a.verify_texture_size(192, 192), Ok(()));
    assert_eq!(
        a.verify_texture_size(256, 192),
        Err(TileMapError::TextureSizeMismatch {
            expected_w: 192,
            expected_h: 192,
            actual_w: 256,
            actual_h: 192,
        })
    );
}

#[test]
fn errors_render_readable_messages() {
    let err = TileMapError::IndexCountMismatch { expected: 1008, actual: 1007 };
    assert_eq!(err.to_string(), "expected 1008 tile indices, got 1007");
    let err = TileMapError::ViewportTooSmall { needed_w: 448, needed_h: 576, viewport_w: 400, viewport_h: 300 };
    assert_eq!(err.to_string(), "map needs 448x576 px but viewport is 400x300");
}
