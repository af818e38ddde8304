//! Bounded enumeration over a 2D chunk coordinate space.
//!
//! A provider walks a fixed-size (x, z) domain one position per call and
//! raises an unload signal every `block_size` positions so the caller can
//! release per-block state before continuing. The requested block size is
//! normalized to the smallest perfect square at or above it, keeping block
//! boundaries aligned with square sub-regions of the world.
//!
//! Providers are not thread-safe; drive each instance from a single scanning
//! loop. For parallel scans, construct one provider per disjoint sub-domain.

use anyhow::Result;

/// Per-position callback. An error aborts the scan; the position still
/// counts as visited.
pub type ChunkConsumer<'a> = dyn FnMut(i32, i32) -> Result<()> + 'a;

/// One-directional enumerator over chunk positions.
///
/// Traversal order is strategy-specific; every implementation advances by
/// exactly one position per `next` call and visits no position twice before
/// exhaustion.
pub trait ChunkPosProvider {
    /// True while positions remain.
    fn has_next(&self) -> bool;

    /// Advances by exactly one position and feeds it to `consumer`.
    /// A safe no-op once the domain is exhausted.
    fn next(&mut self, consumer: &mut ChunkConsumer) -> Result<()>;

    /// True iff the visit count sits on a block boundary.
    fn now_unload(&self) -> bool;

    fn count(&self) -> u32;
    fn total(&self) -> u32;
    fn block_size(&self) -> u32;
}

/// Shared advance state for provider implementations.
#[derive(Debug, Clone)]
pub struct ChunkProgress {
    count: u32,
    total: u32,
    block_size: u32,
}

impl ChunkProgress {
    /// `block_size` is normalized to the smallest perfect square >= the
    /// requested value; a requested size of 0 is treated as 1.
    pub fn new(total: u32, block_size: u32) -> Self {
        let side = (f64::from(block_size).sqrt().ceil() as u32).max(1);
        Self {
            count: 0,
            total,
            block_size: side * side,
        }
    }

    pub fn has_next(&self) -> bool {
        self.count < self.total
    }

    /// Claims the next position index, or `None` once exhausted. The index
    /// is claimed before the caller runs its consumer and is never given
    /// back, so a failed consumer still counts as a visit.
    pub fn advance(&mut self) -> Option<u32> {
        if self.count >= self.total {
            return None;
        }
        let index = self.count;
        self.count += 1;
        Some(index)
    }

    pub fn now_unload(&self) -> bool {
        self.count % self.block_size == 0
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }
}

/// Scans a `width x height` rectangle row by row, x fastest, anchored at an
/// origin corner.
pub struct RowMajorChunks {
    progress: ChunkProgress,
    width: u32,
    origin_x: i32,
    origin_z: i32,
}

impl RowMajorChunks {
    pub fn new(width: u32, height: u32, block_size: u32) -> Self {
        Self::with_origin(width, height, block_size, 0, 0)
    }

    pub fn with_origin(
        width: u32,
        height: u32,
        block_size: u32,
        origin_x: i32,
        origin_z: i32,
    ) -> Self {
        Self {
            progress: ChunkProgress::new(width * height, block_size),
            width,
            origin_x,
            origin_z,
        }
    }
}

impl ChunkPosProvider for RowMajorChunks {
    fn has_next(&self) -> bool {
        self.progress.has_next()
    }

    fn next(&mut self, consumer: &mut ChunkConsumer) -> Result<()> {
        let Some(index) = self.progress.advance() else {
            return Ok(());
        };
        let x = self.origin_x + (index % self.width) as i32;
        let z = self.origin_z + (index / self.width) as i32;
        consumer(x, z)
    }

    fn now_unload(&self) -> bool {
        self.progress.now_unload()
    }

    fn count(&self) -> u32 {
        self.progress.count()
    }

    fn total(&self) -> u32 {
        self.progress.total()
    }

    fn block_size(&self) -> u32 {
        self.progress.block_size()
    }
}

/// Walks an outward square spiral from a center chunk, for scans where the
/// most interesting terrain is near the origin.
pub struct SpiralChunks {
    progress: ChunkProgress,
    x: i32,
    z: i32,
    dx: i32,
    dz: i32,
    leg_len: u32,
    leg_left: u32,
    legs_done: u8,
}

impl SpiralChunks {
    pub fn new(total: u32, block_size: u32) -> Self {
        Self::centered_on(total, block_size, 0, 0)
    }

    pub fn centered_on(total: u32, block_size: u32, center_x: i32, center_z: i32) -> Self {
        Self {
            progress: ChunkProgress::new(total, block_size),
            x: center_x,
            z: center_z,
            dx: 1,
            dz: 0,
            leg_len: 1,
            leg_left: 1,
            legs_done: 0,
        }
    }

    // Spiral legs grow by one every second turn: 1, 1, 2, 2, 3, 3, ...
    fn step(&mut self) {
        self.x += self.dx;
        self.z += self.dz;
        self.leg_left -= 1;
        if self.leg_left == 0 {
            let (dx, dz) = (self.dx, self.dz);
            self.dx = -dz;
            self.dz = dx;
            self.legs_done += 1;
            if self.legs_done == 2 {
                self.legs_done = 0;
                self.leg_len += 1;
            }
            self.leg_left = self.leg_len;
        }
    }
}

impl ChunkPosProvider for SpiralChunks {
    fn has_next(&self) -> bool {
        self.progress.has_next()
    }

    fn next(&mut self, consumer: &mut ChunkConsumer) -> Result<()> {
        if self.progress.advance().is_none() {
            return Ok(());
        }
        let (x, z) = (self.x, self.z);
        self.step();
        consumer(x, z)
    }

    fn now_unload(&self) -> bool {
        self.progress.now_unload()
    }

    fn count(&self) -> u32 {
        self.progress.count()
    }

    fn total(&self) -> u32 {
        self.progress.total()
    }

    fn block_size(&self) -> u32 {
        self.progress.block_size()
    }
}
