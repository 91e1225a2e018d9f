use glam::DVec2;

// The camera keeps the car centered and never clamps, so the city map has to
// be tiled endlessly in every direction underneath it.

/// Map-space point drawn at the top-left corner of the viewport.
pub fn camera_offset(focus: DVec2, viewport: DVec2) -> DVec2 {
    focus - (viewport / 2.0).floor()
}

/// Screen position of the first map tile to draw; tiles then repeat every
/// `tile_size` until the viewport is covered.
pub fn tile_origin(offset: DVec2, tile_size: DVec2) -> DVec2 {
    let x = (-offset.x.trunc()).rem_euclid(tile_size.x) - tile_size.x;
    let y = (-offset.y.trunc()).rem_euclid(tile_size.y) - tile_size.y;
    DVec2::new(x, y)
}

/// Every tile position needed to cover the viewport, row by row.
pub fn visible_tiles(offset: DVec2, tile_size: DVec2, viewport: DVec2) -> Vec<DVec2> {
    let origin = tile_origin(offset, tile_size);
    let mut tiles = Vec::new();
    let mut x = origin.x;
    while x < viewport.x + tile_size.x {
        let mut y = origin.y;
        while y < viewport.y + tile_size.y {
            tiles.push(DVec2::new(x, y));
            y += tile_size.y;
        }
        x += tile_size.x;
    }
    tiles
}
