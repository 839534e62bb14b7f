//! Street segment weights with per-trial speed sampling

use std::cmp::Ordering;

use rand::Rng;
use rand::seq::SliceRandom;

use super::weight::EdgeWeight;

/// How the assumed speed of a trial is drawn from a street's records.
///
/// A per-run value handed to [`Street::resolve`]; there is no process-wide
/// switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedSampling {
    /// Draw uniformly among the recorded speeds; fall back to the maximum
    /// speed when nothing was recorded
    #[default]
    Recorded,
    /// Draw uniformly among the recorded speeds plus the maximum speed
    RecordedWithMax,
}

/// Template of one road segment: distance, speed limit and the recently
/// observed speeds.
///
/// The template never carries an assumed speed of its own. Each simulation
/// trial derives one with [`Street::resolve`], so independent trials get
/// independent draws.
#[derive(Debug, Clone)]
pub struct Street {
    distance: f64,
    max_speed: f64,
    latest_speeds: Vec<f64>,
}

impl Street {
    pub fn new(distance: f64, max_speed: f64) -> Self {
        Street {
            distance,
            max_speed,
            latest_speeds: Vec::new(),
        }
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Appends observed current speeds for this segment
    pub fn register_speeds(&mut self, speeds: impl IntoIterator<Item = f64>) {
        self.latest_speeds.extend(speeds);
    }

    /// Draws the assumed speed for one trial and fixes it in the returned
    /// cost. Called exactly once per edge per trial.
    pub fn resolve<R: Rng + ?Sized>(&self, sampling: SpeedSampling, rng: &mut R) -> StreetCost {
        let speed = match sampling {
            SpeedSampling::RecordedWithMax => {
                let index = rng.gen_range(0..=self.latest_speeds.len());
                if index == self.latest_speeds.len() {
                    self.max_speed
                } else {
                    self.latest_speeds[index]
                }
            }
            SpeedSampling::Recorded => match self.latest_speeds.choose(rng) {
                Some(&speed) => speed,
                None => self.max_speed,
            },
        };
        StreetCost::new(self.distance, speed)
    }
}

/// Resolved cost of a segment for a single trial.
///
/// Ordering and equality depend on [`StreetCost::time`] alone; two costs
/// with equal times are equal regardless of how distance and speed
/// decompose.
#[derive(Debug, Clone, Copy)]
pub struct StreetCost {
    distance: f64,
    speed: f64,
}

impl StreetCost {
    pub fn new(distance: f64, speed: f64) -> Self {
        StreetCost { distance, speed }
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Travel time over the segment, infinite when the speed is zero
    pub fn time(&self) -> f64 {
        if self.speed == 0.0 {
            f64::INFINITY
        } else {
            self.distance / self.speed
        }
    }
}

impl PartialEq for StreetCost {
    fn eq(&self, other: &Self) -> bool {
        self.time().total_cmp(&other.time()) == Ordering::Equal
    }
}

impl Eq for StreetCost {}

impl PartialOrd for StreetCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StreetCost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time().total_cmp(&other.time())
    }
}

impl EdgeWeight for StreetCost {
    /// Joins two segments into one whose time is exactly the sum of both.
    ///
    /// The combined speed is the harmonic composition
    /// `(d1 + d2) * s1 * s2 / (d1 * s2 + d2 * s1)`; if either speed is
    /// zero the combined segment is unreachable as well.
    fn combine(&self, other: &Self) -> Self {
        let distance = self.distance + other.distance;
        let speed = if self.speed == 0.0 || other.speed == 0.0 {
            0.0
        } else {
            (distance * self.speed * other.speed)
                / (self.distance * other.speed + other.distance * self.speed)
        };
        StreetCost { distance, speed }
    }

    fn is_unreachable(&self) -> bool {
        self.speed == 0.0
    }
}
