//! A fixed-size work-stealing thread pool over `usize` work-item indices.
//!
//! Each worker owns a [`GhostChaseLevDeque`] and drains it LIFO; an idle worker steals
//! FIFO from a randomly chosen victim. Work items are indices into a caller-owned
//! buffer (e.g. node ids awaiting relaxation), never the payload itself, which keeps
//! the deque generic-free and matches [`GhostChaseLevDeque`]'s index-only contract.
//!
//! Termination is detected with a shared signed counter of outstanding work: every
//! push increments it, every successfully processed item decrements it. The pool is
//! drained once the counter reaches zero and every worker has failed to steal.

use std::fmt;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::concurrency::atomic::GhostAtomicI64;
use crate::concurrency::cache_padded::CachePadded;
use crate::concurrency::scoped::with_read_scope;
use crate::concurrency::worklist::chase_lev_deque::GhostChaseLevDeque;
use crate::token::GhostToken;

/// Errors raised while running a pool of workers to completion.
#[derive(Debug)]
pub enum PoolError {
    /// No worker could make progress (steal or pop) for longer than the configured
    /// real-time budget while outstanding work remained — almost always a sign of a
    /// lost wakeup or a work item that was dropped without decrementing the counter.
    Deadlock {
        /// Work items still outstanding when the budget expired.
        outstanding: i64,
        /// How long the pool sat idle before giving up.
        waited: Duration,
    },
    /// The pool was constructed with zero worker threads.
    EmptyPool,
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::Deadlock { outstanding, waited } => write!(
                f,
                "work-stealing pool made no progress for {waited:?} with {outstanding} item(s) outstanding"
            ),
            PoolError::EmptyPool => write!(f, "work-stealing pool requires at least one worker"),
        }
    }
}

impl std::error::Error for PoolError {}

/// A fixed-size work-stealing pool of `usize` work-item indices.
///
/// `P` deques are allocated up front, one per worker. [`WorkStealingPool::run`] spawns
/// `P` scoped threads sharing `&GhostToken<'brand>` and runs `process` on every index
/// until all deques are empty and the outstanding counter reaches zero.
pub struct WorkStealingPool<'brand> {
    deques: Vec<GhostChaseLevDeque<'brand>>,
    /// Cache-line padded: every worker touches this on every pop/steal, so sharing a
    /// line with `idle_budget` or the `deques` vec's header would serialize otherwise
    /// independent workers on false-sharing traffic alone.
    outstanding: CachePadded<GhostAtomicI64<'brand>>,
    /// Real-time budget a worker may sit idle (no pop, no successful steal) before the
    /// pool declares a deadlock. Reset whenever any worker makes progress.
    idle_budget: Duration,
}

impl<'brand> WorkStealingPool<'brand> {
    /// Creates a pool with `workers` deques of `deque_capacity` slots each.
    ///
    /// `deque_capacity` must be a power of two (see [`GhostChaseLevDeque::new`]).
    pub fn new(workers: usize, deque_capacity: usize, idle_budget: Duration) -> Self {
        let deques = (0..workers)
            .map(|_| GhostChaseLevDeque::new(deque_capacity))
            .collect();
        Self {
            deques,
            outstanding: CachePadded::new(GhostAtomicI64::new(0)),
            idle_budget,
        }
    }

    /// Number of workers (and deques) in the pool.
    pub fn worker_count(&self) -> usize {
        self.deques.len()
    }

    /// Seeds the pool with an initial contiguous range `0..count`, distributed round
    /// robin across workers' deques.
    pub fn seed_range(&self, token: &GhostToken<'brand>, count: usize) {
        for i in 0..count {
            let worker = i % self.deques.len().max(1);
            self.deques[worker].push_bottom(token, i);
            self.outstanding.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Pushes a single work item onto `worker`'s own deque.
    ///
    /// Intended to be called by the worker that owns `worker`'s deque (e.g. to requeue
    /// a neighbor discovered while processing another item).
    pub fn push(&self, token: &GhostToken<'brand>, worker: usize, item: usize) -> bool {
        if self.deques[worker].push_bottom(token, item) {
            self.outstanding.fetch_add(1, Ordering::SeqCst);
            true
        } else {
            false
        }
    }

    /// Runs `process` over every queued work item using `&GhostToken<'brand>` shared
    /// read-only across all workers, returning once the pool has drained or the idle
    /// budget is exceeded.
    ///
    /// `process` receives the worker id and the work-item index; it may call
    /// [`WorkStealingPool::push`] on the same worker id to enqueue follow-up work
    /// (e.g. newly relaxed neighbors) before returning.
    pub fn run<F>(&self, token: &GhostToken<'brand>, process: F) -> Result<(), PoolError>
    where
        F: Fn(usize, usize) + Sync,
    {
        if self.deques.is_empty() {
            return Err(PoolError::EmptyPool);
        }

        with_read_scope(token, |scope| {
            let result: std::sync::Mutex<Result<(), PoolError>> = std::sync::Mutex::new(Ok(()));
            let handles: Vec<_> = (0..self.deques.len())
                .map(|worker| {
                    let process = &process;
                    let result = &result;
                    scope.spawn(move |token| {
                        if let Err(e) = self.run_worker(token, worker, process) {
                            *result.lock().unwrap() = Err(e);
                        }
                    })
                })
                .collect();
            for h in handles {
                h.join().unwrap();
            }
            std::mem::replace(&mut *result.lock().unwrap(), Ok(()))
        })
    }

    fn run_worker<F>(
        &self,
        token: &GhostToken<'brand>,
        worker: usize,
        process: &F,
    ) -> Result<(), PoolError>
    where
        F: Fn(usize, usize) + Sync,
    {
        let mut idle_since: Option<Instant> = None;
        let mut rng = rand::thread_rng();

        loop {
            if let Some(item) = self.deques[worker].pop_bottom(token) {
                idle_since = None;
                process(worker, item);
                self.outstanding.fetch_sub(1, Ordering::SeqCst);
                continue;
            }

            if let Some(item) = self.steal_from_random(token, worker, &mut rng) {
                idle_since = None;
                process(worker, item);
                self.outstanding.fetch_sub(1, Ordering::SeqCst);
                continue;
            }

            if self.outstanding.load(Ordering::SeqCst) <= 0 {
                return Ok(());
            }

            let since = idle_since.get_or_insert_with(Instant::now);
            if since.elapsed() >= self.idle_budget {
                return Err(PoolError::Deadlock {
                    outstanding: self.outstanding.load(Ordering::SeqCst),
                    waited: since.elapsed(),
                });
            }
            std::thread::yield_now();
        }
    }

    fn steal_from_random(
        &self,
        token: &GhostToken<'brand>,
        own: usize,
        rng: &mut impl Rng,
    ) -> Option<usize> {
        let n = self.deques.len();
        if n <= 1 {
            return None;
        }
        let start = rng.gen_range(0..n);
        let (immutable, _) = token.split_immutable();
        for offset in 0..n {
            let victim = (start + offset) % n;
            if victim == own {
                continue;
            }
            if let Some(item) = self.deques[victim].steal(&immutable) {
                return Some(item);
            }
        }
        None
    }
}
