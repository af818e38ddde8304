use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics collected while scanning chunks and publishing tables
#[derive(Default)]
pub struct ScanStats {
    pub chunks_visited: AtomicU64,
    pub blocks_flushed: AtomicU64,
    pub tables_written: AtomicU64,
    pub rows_written: AtomicU64,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc_chunks(&self) {
        self.chunks_visited.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_blocks(&self) {
        self.blocks_flushed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_tables(&self) {
        self.tables_written.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_rows(&self, count: u64) {
        self.rows_written.fetch_add(count, Ordering::Relaxed);
    }

    pub fn chunks_visited(&self) -> u64 {
        self.chunks_visited.load(Ordering::Relaxed)
    }

    pub fn blocks_flushed(&self) -> u64 {
        self.blocks_flushed.load(Ordering::Relaxed)
    }

    pub fn tables_written(&self) -> u64 {
        self.tables_written.load(Ordering::Relaxed)
    }

    pub fn rows_written(&self) -> u64 {
        self.rows_written.load(Ordering::Relaxed)
    }
}
