//! Drives a chunk position provider to exhaustion.

use crate::chunk::ChunkPosProvider;
use crate::config::PROGRESS_INTERVAL;
use crate::stats::ScanStats;
use anyhow::Result;
use indicatif::ProgressBar;
use tracing::info;

/// Per-block scanning callbacks.
///
/// `visit` runs once per chunk position. `flush` runs whenever the provider
/// raises its unload signal, and once more at the end of the scan if the
/// final block is partial, so accumulated state is never stranded. Errors
/// from either abort the scan.
pub trait ChunkVisitor {
    fn visit(&mut self, x: i32, z: i32) -> Result<()>;

    /// Release per-block accumulated state.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Runs `provider` to exhaustion, feeding every position to `visitor` and
/// flushing on block boundaries.
pub fn run_scan(
    provider: &mut dyn ChunkPosProvider,
    visitor: &mut dyn ChunkVisitor,
    stats: &ScanStats,
) -> Result<()> {
    let pb = ProgressBar::new(u64::from(provider.total()));

    while provider.has_next() {
        provider.next(&mut |x, z| visitor.visit(x, z))?;
        stats.inc_chunks();

        if provider.count() % PROGRESS_INTERVAL == 0 {
            pb.set_position(u64::from(provider.count()));
        }

        if provider.now_unload() {
            visitor.flush()?;
            stats.inc_blocks();
        }
    }

    // The last block may be partial; flush whatever accumulated after the
    // final boundary.
    if provider.count() % provider.block_size() != 0 {
        visitor.flush()?;
        stats.inc_blocks();
    }

    pb.finish_and_clear();

    info!(
        chunks = provider.count(),
        blocks = stats.blocks_flushed(),
        "Chunk scan complete"
    );

    Ok(())
}
