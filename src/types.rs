//! Core data types shared between the backend and frontend.

use std::sync::Arc;

/// One complete sweep of the monitored spectrum.
///
/// A frame is an ordered sequence of linear power-domain magnitudes, one per
/// frequency bucket, finalized by the parser when the scanner emits its
/// end-of-sweep delimiter. Frames are immutable after finalization: the
/// sample storage is shared (`Arc<[f64]>`), so cloning a frame for a history
/// snapshot is cheap and cannot alias a mutable view.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    samples: Arc<[f64]>,
}

impl Frame {
    pub fn new(samples: Vec<f64>) -> Self {
        Self {
            samples: samples.into(),
        }
    }

    /// The magnitudes of this sweep, in frequency-bucket order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl From<Vec<f64>> for Frame {
    fn from(samples: Vec<f64>) -> Self {
        Self::new(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_accessors() {
        let frame = Frame::new(vec![1.0, 10.0, 100.0]);
        assert_eq!(frame.len(), 3);
        assert!(!frame.is_empty());
        assert_eq!(frame.samples(), &[1.0, 10.0, 100.0]);
    }

    #[test]
    fn test_empty_frame() {
        let frame = Frame::new(Vec::new());
        assert_eq!(frame.len(), 0);
        assert!(frame.is_empty());
    }

    #[test]
    fn test_clones_share_storage() {
        let frame = Frame::new(vec![0.5; 79]);
        let copy = frame.clone();
        assert!(Arc::ptr_eq(&frame.samples, &copy.samples));
    }
}
