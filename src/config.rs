/// Table format version stamped into manifests; bump when the layout changes
pub const FORMAT_VERSION: u32 = 1;

/// Progress bar update interval (update every N chunk positions)
pub const PROGRESS_INTERVAL: u32 = 1000;

/// Default requested block size for world scans (chunks per unload block)
pub const DEFAULT_BLOCK_SIZE: u32 = 256;

/// File name of the table manifest within an output directory
pub const MANIFEST_FILE: &str = "manifest.json";
