use log::debug;

/// One rectangular window of the raster, addressed in pixel coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDescriptor {
    pub x_off: usize,
    pub y_off: usize,
    pub width: usize,
    pub height: usize,
}

/// Tiling plan for a raster: full-size blocks everywhere except the trailing
/// block in each axis, which shrinks to the remainder. The descriptors tile
/// the raster exactly, with no gaps or overlaps.
pub struct BlockGrid {
    raster_width: usize,
    raster_height: usize,
    block_width: usize,
    block_height: usize,
    pub num_blocks_x: usize,
    pub num_blocks_y: usize,
    pub total_blocks: usize,
}

impl BlockGrid {
    pub fn new(
        raster_width: usize,
        raster_height: usize,
        block_width: usize,
        block_height: usize,
    ) -> Self {
        // Ceiling division along each axis
        let num_blocks_x = (raster_width + block_width - 1) / block_width;
        let num_blocks_y = (raster_height + block_height - 1) / block_height;
        let total_blocks = num_blocks_x * num_blocks_y;

        debug!(
            "BlockGrid: {}x{} raster, block size {}x{} → {}x{} blocks ({} total)",
            raster_width,
            raster_height,
            block_width,
            block_height,
            num_blocks_x,
            num_blocks_y,
            total_blocks
        );

        Self {
            raster_width,
            raster_height,
            block_width,
            block_height,
            num_blocks_x,
            num_blocks_y,
            total_blocks,
        }
    }

    pub fn iter(&self) -> BlockIterator<'_> {
        BlockIterator::new(self)
    }

    /// Descriptor for the block at a row-major linear index.
    pub fn get_block(&self, block_idx: usize) -> BlockDescriptor {
        let block_y = block_idx / self.num_blocks_x;
        let block_x = block_idx % self.num_blocks_x;

        let x_off = block_x * self.block_width;
        let y_off = block_y * self.block_height;

        // Trailing blocks shrink to the remainder; never zero for a
        // raster at least 1 pixel in each axis.
        let width = self.block_width.min(self.raster_width - x_off);
        let height = self.block_height.min(self.raster_height - y_off);

        BlockDescriptor {
            x_off,
            y_off,
            width,
            height,
        }
    }
}

pub struct BlockIterator<'a> {
    grid: &'a BlockGrid,
    current_idx: usize,
}

impl<'a> BlockIterator<'a> {
    fn new(grid: &'a BlockGrid) -> Self {
        Self {
            grid,
            current_idx: 0,
        }
    }
}

impl<'a> Iterator for BlockIterator<'a> {
    type Item = (usize, BlockDescriptor);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_idx < self.grid.total_blocks {
            let block = self.grid.get_block(self.current_idx);
            let idx = self.current_idx;
            self.current_idx += 1;
            Some((idx, block))
        } else {
            None
        }
    }
}
