use fractalforge_core::PixelRect;

/// Number of column blocks a raster is partitioned into for rendering.
pub const BLOCK_COUNT: u32 = 100;

/// Partition a raster into `count` column-wise blocks of full height.
///
/// Block `i` spans columns `[i * width / count, (i + 1) * width / count)`.
/// Integer division makes neighboring blocks uneven by up to one column,
/// and rasters narrower than `count` produce empty blocks; both are
/// intentional. Together the blocks cover every column exactly once.
pub fn column_blocks(width: u32, height: u32, count: u32) -> Vec<PixelRect> {
    (0..count as u64)
        .map(|i| {
            let start = (i * width as u64 / count as u64) as u32;
            let end = ((i + 1) * width as u64 / count as u64) as u32;
            PixelRect::new(start, 0, end - start, height)
        })
        .collect()
}
