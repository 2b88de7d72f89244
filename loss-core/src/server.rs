//! Admission-control server with a fixed channel pool
//!
//! The server owns `capacity` identical service channels and makes an atomic
//! accept-or-reject decision for every submitted request. There is no waiting
//! room: a request that finds every channel busy is rejected immediately and
//! permanently.
//!
//! All mutable state (the channel flags and the three counters) lives behind
//! one mutex. The scan for a free channel and the claim of that channel happen
//! under a single lock acquisition, so two concurrent submissions can never
//! claim the same channel, and occupancy reads always take the same lock as
//! writers rather than peeking at an unsynchronized field.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Result of one admission decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionOutcome {
    /// The request claimed the channel with this index.
    Accepted { channel: usize },
    /// Every channel was busy; the request is dropped.
    Rejected,
}

impl AdmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, AdmissionOutcome::Accepted { .. })
    }
}

/// Snapshot of the server's request counters.
///
/// Taken under the pool lock, so `requests == processed + rejected` holds in
/// every snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Counters {
    /// Requests submitted
    pub requests: u64,
    /// Requests accepted onto a channel
    pub processed: u64,
    /// Requests dropped because no channel was free
    pub rejected: u64,
}

/// The shared mutable aggregate: channel flags plus counters.
#[derive(Debug)]
struct ChannelPool {
    busy: Vec<bool>,
    active: usize,
    counters: Counters,
}

impl ChannelPool {
    fn new(capacity: usize) -> Self {
        Self {
            busy: vec![false; capacity],
            active: 0,
            counters: Counters::default(),
        }
    }

    /// Claim the lowest-indexed free channel, if any.
    fn claim_lowest_free(&mut self) -> Option<usize> {
        let index = self.busy.iter().position(|b| !b)?;
        self.busy[index] = true;
        self.active += 1;
        Some(index)
    }

    fn release(&mut self, index: usize) {
        debug_assert!(self.busy[index], "releasing a channel that is not busy");
        self.busy[index] = false;
        self.active -= 1;
    }
}

/// Loss-system server: `capacity` channels, fixed service time, no queue.
///
/// Cloning yields another handle to the same channel pool, in the spirit of a
/// scheduler handle: submissions and reads through any clone observe one
/// shared state.
#[derive(Debug, Clone)]
pub struct Server {
    pool: Arc<Mutex<ChannelPool>>,
    capacity: usize,
    service_time: Duration,
}

impl Server {
    /// Create a server with `capacity` channels and a fixed per-request
    /// service time.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, service_time: Duration) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        Self {
            pool: Arc::new(Mutex::new(ChannelPool::new(capacity))),
            capacity,
            service_time,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn service_time(&self) -> Duration {
        self.service_time
    }

    /// Submit one request for admission.
    ///
    /// On acceptance the lowest-indexed free channel is claimed and a worker
    /// is spawned that holds the channel for the service time and then
    /// releases it under the same lock. Service is not cancellable: a claim
    /// is always followed by exactly one release. A zero service time
    /// completes inline, so strictly sequential submissions see the channel
    /// free again immediately.
    ///
    /// Rejection is final; the server never retries on behalf of a request.
    pub fn submit(&self, request_id: u64) -> AdmissionOutcome {
        let claimed = {
            let mut pool = self.pool.lock().unwrap();
            pool.counters.requests += 1;
            match pool.claim_lowest_free() {
                Some(index) => {
                    pool.counters.processed += 1;
                    Some(index)
                }
                None => {
                    pool.counters.rejected += 1;
                    None
                }
            }
        };

        match claimed {
            Some(channel) => {
                debug!(request_id, channel, "request accepted");
                if self.service_time.is_zero() {
                    self.pool.lock().unwrap().release(channel);
                    trace!(request_id, channel, "channel released");
                } else {
                    let pool = Arc::clone(&self.pool);
                    let service_time = self.service_time;
                    thread::spawn(move || {
                        thread::sleep(service_time);
                        pool.lock().unwrap().release(channel);
                        trace!(request_id, channel, "channel released");
                    });
                }
                AdmissionOutcome::Accepted { channel }
            }
            None => {
                debug!(request_id, "request rejected, all channels busy");
                AdmissionOutcome::Rejected
            }
        }
    }

    /// Current number of busy channels, read under the pool lock.
    pub fn active_channels(&self) -> usize {
        self.pool.lock().unwrap().active
    }

    /// Counter snapshot, taken atomically under the pool lock.
    pub fn counters(&self) -> Counters {
        self.pool.lock().unwrap().counters
    }

    /// Poll until every channel is free or `timeout` elapses.
    ///
    /// Returns `true` if the pool drained. Intended for the driver's final
    /// drain window and for tests; each poll takes the pool lock like any
    /// other reader.
    pub fn wait_idle(&self, poll_interval: Duration, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            if self.active_channels() == 0 {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            thread::sleep(poll_interval);
        }
    }
}
