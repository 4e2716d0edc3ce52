//! Bounded rolling history of sweep frames.
//!
//! The history is the only state shared between the reader thread and the UI
//! thread. A single mutex guards it; the lock is held only for the duration
//! of a push or a snapshot copy, never across a redraw. Snapshots clone the
//! `Arc`-backed frames, so they are independent of later pushes.

use crate::types::Frame;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Default number of sweeps retained for display.
pub const DEFAULT_HISTORY_DEPTH: usize = 100;

/// Clonable handle to the shared frame history.
///
/// One clone belongs to the stream worker (the only writer), one to the
/// frontend (the only reader).
#[derive(Debug, Clone)]
pub struct SweepHistory {
    frames: Arc<Mutex<VecDeque<Frame>>>,
    capacity: usize,
}

impl SweepHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            tracing::warn!("History depth 0 is not usable, clamping to 1");
            1
        } else {
            capacity
        };
        Self {
            frames: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a finalized frame, evicting the oldest frame when full.
    pub fn push(&self, frame: Frame) {
        let mut frames = self.frames.lock().unwrap_or_else(|e| e.into_inner());
        if frames.len() == self.capacity {
            frames.pop_front();
        }
        frames.push_back(frame);
    }

    /// Copy the current frames, oldest to newest.
    ///
    /// The copy shares sample storage with the history (frames are
    /// `Arc`-backed) but is otherwise independent: concurrent pushes after
    /// the copy do not affect it.
    pub fn snapshot(&self) -> Vec<Frame> {
        let frames = self.frames.lock().unwrap_or_else(|e| e.into_inner());
        frames.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.frames.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SweepHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}
