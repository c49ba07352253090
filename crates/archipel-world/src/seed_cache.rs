//! Seed chunk cache: a one-time snapshot of the template island.
//!
//! [`build_cache`] captures every chunk in `[-spacing, spacing)` on both axes
//! and returns the finished cache. Nothing is handed out until every chunk has
//! been captured, so a failed build never leaves a partial cache behind.

use std::sync::Arc;

use archipel_config::MAX_ISLAND_DISTANCE;
use rustc_hash::FxHashMap;

use crate::chunk::{ChunkPos, ChunkSnapshot};
use crate::template::{CaptureError, TemplateWorld};

/// Fatal errors raised while building the seed cache.
#[derive(Debug, thiserror::Error)]
pub enum CacheBuildError {
    /// The cache region size is outside `1..=MAX_ISLAND_DISTANCE`.
    #[error("seed cache spacing must be in 1..={max}, got {0}", max = MAX_ISLAND_DISTANCE)]
    InvalidSpacing(i32),
    /// A template chunk could not be captured; the build was abandoned.
    #[error("failed to capture seed chunk ({x}, {z})")]
    Capture {
        /// Chunk X.
        x: i32,
        /// Chunk Z.
        z: i32,
        /// Underlying capture failure.
        #[source]
        source: CaptureError,
    },
}

/// Progress of a cache build at one notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheProgress {
    /// Whole percent complete, rounded down.
    pub percent: u32,
    /// Chunks captured so far.
    pub stored: u64,
    /// Chunks in the whole region.
    pub total: u64,
}

/// Receives throttled cache-build progress.
pub trait ProgressSink {
    /// Called at most once per completed tenth of the build.
    fn report(&mut self, progress: CacheProgress);
}

impl<F: FnMut(CacheProgress)> ProgressSink for F {
    fn report(&mut self, progress: CacheProgress) {
        self(progress)
    }
}

/// Logs progress at `info` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn report(&mut self, progress: CacheProgress) {
        tracing::info!(
            stored = progress.stored,
            total = progress.total,
            "Storing seed chunks. {}% done",
            progress.percent
        );
    }
}

/// Decides which chunk counts deserve a progress notification.
///
/// `percent = floor(stored * 100 / total)`; a notification fires when the
/// percent is a non-zero multiple of ten that has not been reported yet.
#[derive(Clone, Debug)]
pub struct ProgressThrottle {
    total: u64,
    last_reported: Option<u32>,
}

impl ProgressThrottle {
    /// Throttle for a build of `total` chunks.
    pub fn new(total: u64) -> Self {
        Self {
            total,
            last_reported: None,
        }
    }

    /// Records that `stored` chunks are done. Returns the progress to report, if any.
    pub fn record(&mut self, stored: u64) -> Option<CacheProgress> {
        if self.total == 0 {
            return None;
        }
        let percent = (stored.saturating_mul(100) / self.total) as u32;
        if percent == 0 || percent % 10 != 0 || self.last_reported == Some(percent) {
            return None;
        }
        self.last_reported = Some(percent);
        Some(CacheProgress {
            percent,
            stored,
            total: self.total,
        })
    }
}

/// Immutable set of template chunks keyed by chunk position.
#[derive(Debug)]
pub struct SeedChunkCache {
    spacing: i32,
    chunks: FxHashMap<ChunkPos, Arc<ChunkSnapshot>>,
}

impl SeedChunkCache {
    /// Half-width of the cached region, in chunks.
    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    /// Number of cached chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Snapshot for template chunk `pos`.
    pub fn get(&self, pos: ChunkPos) -> Option<&Arc<ChunkSnapshot>> {
        self.chunks.get(&pos)
    }

    /// Returns `true` if `pos` lies in `[-spacing, spacing)` on both axes.
    pub fn covers(&self, pos: ChunkPos) -> bool {
        let range = -self.spacing..self.spacing;
        range.contains(&pos.x) && range.contains(&pos.z)
    }

    /// Iterates over cached positions in no particular order.
    pub fn positions(&self) -> impl Iterator<Item = ChunkPos> + '_ {
        self.chunks.keys().copied()
    }
}

/// Snapshots `[-spacing, spacing)²` chunks of `template` into a new cache.
///
/// Must run to completion before any chunk generation starts.
///
/// # Errors
///
/// - [`CacheBuildError::InvalidSpacing`] unless `1 <= spacing <= MAX_ISLAND_DISTANCE`.
/// - [`CacheBuildError::Capture`] on the first chunk the template fails to
///   provide. Already captured chunks are dropped.
pub fn build_cache<T, P>(
    template: &T,
    spacing: i32,
    progress: &mut P,
) -> Result<SeedChunkCache, CacheBuildError>
where
    T: TemplateWorld + ?Sized,
    P: ProgressSink + ?Sized,
{
    if !(1..=MAX_ISLAND_DISTANCE).contains(&spacing) {
        return Err(CacheBuildError::InvalidSpacing(spacing));
    }

    let side = 2 * spacing.unsigned_abs() as usize;
    let total = side * side;
    let mut throttle = ProgressThrottle::new(total as u64);
    let mut chunks = FxHashMap::with_capacity_and_hasher(total, Default::default());

    tracing::info!(
        template = template.name(),
        spacing,
        total,
        "Storing seed chunks"
    );

    let mut stored = 0_u64;
    for x in -spacing..spacing {
        for z in -spacing..spacing {
            let pos = ChunkPos::new(x, z);
            let snapshot = capture(template, pos).map_err(|source| {
                tracing::error!(x, z, %source, "Seed chunk capture failed; island generation disabled");
                CacheBuildError::Capture { x, z, source }
            })?;
            chunks.insert(pos, Arc::new(snapshot));

            stored += 1;
            if let Some(p) = throttle.record(stored) {
                progress.report(p);
            }
        }
    }

    Ok(SeedChunkCache { spacing, chunks })
}

fn capture<T: TemplateWorld + ?Sized>(
    template: &T,
    pos: ChunkPos,
) -> Result<ChunkSnapshot, CaptureError> {
    let snapshot = template.capture_chunk(pos)?;
    if snapshot.pos() != pos {
        return Err(CaptureError::PositionMismatch {
            requested: pos,
            returned: snapshot.pos(),
        });
    }
    Ok(snapshot)
}
