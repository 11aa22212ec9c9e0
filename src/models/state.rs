use nalgebra as na;

/// Inertial-frame position and velocity of the orbiting body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    pub position: na::Vector3<f64>,
    pub velocity: na::Vector3<f64>,
}

impl StateVector {
    pub fn new(position: na::Vector3<f64>, velocity: na::Vector3<f64>) -> Self {
        StateVector { position, velocity }
    }

    /// Returns (x, y, z, vx, vy, vz)
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.velocity.x,
            self.velocity.y,
            self.velocity.z,
        ]
    }

    pub fn radius(&self) -> f64 {
        self.position.magnitude()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }
}

impl From<StateVector> for [f64; 6] {
    fn from(state: StateVector) -> Self {
        state.to_array()
    }
}

/// State vectors in sample-time order, as handed to a renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    times: Vec<f64>,
    states: Vec<StateVector>,
}

impl Trajectory {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Trajectory {
            times: Vec::with_capacity(capacity),
            states: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, t: f64, state: StateVector) {
        self.times.push(t);
        self.states.push(state);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn states(&self) -> &[StateVector] {
        &self.states
    }

    /// Iterates over (t, state) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &StateVector)> + '_ {
        self.times.iter().copied().zip(self.states.iter())
    }

    pub fn positions(&self) -> impl Iterator<Item = na::Vector3<f64>> + '_ {
        self.states.iter().map(|s| s.position)
    }

    /// Smallest axis-aligned cube around every position: (centre, half-width).
    /// Used to frame the point cloud with equal scale on all three axes.
    pub fn bounding_cube(&self) -> Option<(na::Vector3<f64>, f64)> {
        let first = self.states.first()?.position;
        let (min, max) = self
            .positions()
            .fold((first, first), |(lo, hi), p| (lo.inf(&p), hi.sup(&p)));

        let centre = (min + max) * 0.5;
        let half_width = 0.5 * (max - min).max();
        Some((centre, half_width))
    }
}
