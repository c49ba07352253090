//! Background chunk generation on a pool of worker threads.
//!
//! Workers share one [`IslandChunkGenerator`] read-only. Completed chunks are
//! delivered through a bounded channel and drained by the caller; pending
//! tasks can be cancelled.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use archipel_config::GenerationConfig;
use crossbeam_channel::{Receiver, Sender, bounded};
use dashmap::DashMap;

use crate::chunk::ChunkPos;
use crate::error::WorldError;
use crate::generator::{GeneratedChunk, IslandChunkGenerator};

/// A finished generation task.
#[derive(Debug)]
pub struct GeneratedChunkResult {
    /// Chunk position the task was submitted for.
    pub pos: ChunkPos,
    /// The chunk, or why it could not be produced.
    pub chunk: Result<GeneratedChunk, WorldError>,
    /// Generation time in microseconds.
    pub generation_time_us: u64,
}

struct PendingTask {
    pos: ChunkPos,
    cancelled: Arc<AtomicBool>,
}

/// Generates world chunks across a thread pool.
pub struct GenerationPool {
    task_sender: Sender<PendingTask>,
    result_receiver: Receiver<GeneratedChunkResult>,
    active_tasks: Arc<DashMap<ChunkPos, Arc<AtomicBool>>>,
    in_flight: Arc<AtomicU64>,
}

impl GenerationPool {
    /// Starts `thread_count` workers over `generator`.
    ///
    /// # Errors
    ///
    /// - [`WorldError::CacheNotBuilt`] if `generator` has no seed cache yet.
    /// - [`WorldError::WorkerSpawn`] if a worker thread cannot be started.
    pub fn new(
        generator: Arc<IslandChunkGenerator>,
        thread_count: usize,
        max_concurrent: usize,
        result_capacity: usize,
    ) -> Result<Self, WorldError> {
        if !generator.has_cache() {
            return Err(WorldError::CacheNotBuilt);
        }

        let (task_sender, task_receiver) = bounded::<PendingTask>(max_concurrent.max(1));
        let (result_sender, result_receiver) =
            bounded::<GeneratedChunkResult>(result_capacity.max(1));
        let in_flight = Arc::new(AtomicU64::new(0));

        for index in 0..thread_count.max(1) {
            let receiver = task_receiver.clone();
            let sender = result_sender.clone();
            let in_flight = Arc::clone(&in_flight);
            let generator = Arc::clone(&generator);

            std::thread::Builder::new()
                .name(format!("chunk-gen-{index}"))
                .spawn(move || {
                    while let Ok(task) = receiver.recv() {
                        if task.cancelled.load(Ordering::Relaxed) {
                            in_flight.fetch_sub(1, Ordering::Relaxed);
                            continue;
                        }

                        let start = std::time::Instant::now();
                        let chunk = generator.generate(task.pos);
                        let elapsed = start.elapsed().as_micros() as u64;

                        if let Err(err) = &chunk {
                            tracing::warn!(x = task.pos.x, z = task.pos.z, %err, "Chunk generation failed");
                        }

                        let delivered = task.cancelled.load(Ordering::Relaxed)
                            || sender
                                .send(GeneratedChunkResult {
                                    pos: task.pos,
                                    chunk,
                                    generation_time_us: elapsed,
                                })
                                .is_ok();

                        in_flight.fetch_sub(1, Ordering::Relaxed);

                        if !delivered {
                            tracing::debug!(
                                x = task.pos.x,
                                z = task.pos.z,
                                "Generation pool dropped; worker exiting"
                            );
                            break;
                        }
                    }
                })
                .map_err(WorldError::WorkerSpawn)?;
        }

        tracing::debug!(threads = thread_count.max(1), "Chunk generation pool started");

        Ok(Self {
            task_sender,
            result_receiver,
            active_tasks: Arc::new(DashMap::new()),
            in_flight,
        })
    }

    /// Starts a pool sized by `config`; zero worker threads means one per
    /// core, leaving two cores for the host.
    pub fn from_config(
        generator: Arc<IslandChunkGenerator>,
        config: &GenerationConfig,
    ) -> Result<Self, WorldError> {
        let threads = if config.worker_threads == 0 {
            num_cpus::get().saturating_sub(2).max(1)
        } else {
            config.worker_threads
        };
        Self::new(
            generator,
            threads,
            config.max_in_flight,
            config.result_capacity,
        )
    }

    /// Queues chunk `pos` for generation.
    ///
    /// Returns `Err(pos)` if the queue is full.
    pub fn submit(&self, pos: ChunkPos) -> Result<(), ChunkPos> {
        let cancelled = Arc::new(AtomicBool::new(false));
        self.active_tasks.insert(pos, Arc::clone(&cancelled));
        self.in_flight.fetch_add(1, Ordering::Relaxed);

        self.task_sender
            .try_send(PendingTask { pos, cancelled })
            .map_err(|e| {
                self.in_flight.fetch_sub(1, Ordering::Relaxed);
                let pos = e.into_inner().pos;
                self.active_tasks.remove(&pos);
                pos
            })
    }

    /// Cancel a pending or in-progress task. No-op if it already completed.
    pub fn cancel(&self, pos: &ChunkPos) {
        if let Some((_, cancelled)) = self.active_tasks.remove(pos) {
            cancelled.store(true, Ordering::Relaxed);
        }
    }

    /// Drain all completed chunks from the result channel.
    pub fn drain_results(&self) -> Vec<GeneratedChunkResult> {
        let mut results = Vec::new();
        while let Ok(result) = self.result_receiver.try_recv() {
            self.active_tasks.remove(&result.pos);
            results.push(result);
        }
        results
    }

    /// Number of tasks currently queued or executing.
    pub fn in_flight_count(&self) -> u64 {
        self.in_flight.load(Ordering::Relaxed)
    }

    /// Returns `true` if a task for `pos` is pending.
    pub fn is_pending(&self, pos: &ChunkPos) -> bool {
        self.active_tasks.contains_key(pos)
    }
}
