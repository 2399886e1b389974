//! Bounded per-body position history for trail rendering
//!
//! Purely observational: appending here has no effect on the physics.
//! Each trail is a fixed-capacity ring with O(1) append and automatic
//! eviction of the oldest position.

use std::collections::VecDeque;

use super::states::{NVec2, System};

#[derive(Debug, Clone)]
pub struct TrajectoryBuffer {
    trails: Vec<VecDeque<NVec2>>,
    capacity: usize,
}

impl TrajectoryBuffer {
    pub fn new(n_bodies: usize, capacity: usize) -> Self {
        Self {
            trails: vec![VecDeque::with_capacity(capacity); n_bodies],
            capacity,
        }
    }

    /// Append every body's current position, evicting the oldest entry of
    /// any trail already at capacity.
    pub fn record(&mut self, sys: &System) {
        for (trail, body) in self.trails.iter_mut().zip(sys.bodies.iter()) {
            if trail.len() == self.capacity {
                trail.pop_front();
            }
            trail.push_back(body.x);
        }
    }

    /// Retained positions of one body, oldest first.
    pub fn trail(&self, body: usize) -> impl Iterator<Item = &NVec2> {
        self.trails[body].iter()
    }

    /// Deep copy of all trails for external consumers.
    pub fn trails(&self) -> Vec<Vec<NVec2>> {
        self.trails
            .iter()
            .map(|t| t.iter().copied().collect())
            .collect()
    }

    pub fn len(&self, body: usize) -> usize {
        self.trails[body].len()
    }

    pub fn is_empty(&self) -> bool {
        self.trails.iter().all(|t| t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::Body;

    #[test]
    fn capacity_evicts_oldest() {
        let mut sys = System {
            bodies: vec![Body {
                x: NVec2::zeros(),
                v: NVec2::zeros(),
                m: 1.0,
            }],
            t: 0.0,
        };
        let mut buf = TrajectoryBuffer::new(1, 5);
        for step in 0..8 {
            sys.bodies[0].x = NVec2::new(step as f64, 0.0);
            buf.record(&sys);
        }
        assert_eq!(buf.len(0), 5);
        // Oldest retained position is from step 3
        let trail: Vec<_> = buf.trail(0).collect();
        assert_eq!(trail[0].x, 3.0);
        assert_eq!(trail[4].x, 7.0);
    }
}
