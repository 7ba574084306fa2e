//! Ring layout: assigns each word a seed latitude/longitude
//!
//! Words are split row-major into rings of `labels_per_ring`. Rings are
//! spaced evenly between the poles, labels evenly around each ring. Both
//! angles are accumulated as running sums (step added, then wrapped) rather
//! than recomputed from the index; a wrapped value carries into the next
//! column and shifts where the gap of a partial last ring appears.

use serde::Serialize;

use super::Label;
use crate::spatial::spherical::{normalize_degrees, LATITUDE_SPAN, LONGITUDE_SPAN};

/// Ring partitioning for a word count
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingPlan {
    pub labels_per_ring: usize,
    /// `ceil(word_count / labels_per_ring)`
    pub ring_count: usize,
    /// Degrees between neighbouring rings
    pub latitude_step: f64,
    /// Degrees between neighbouring labels in a ring
    pub longitude_step: f64,
}

impl RingPlan {
    /// Plan rings for `word_count` words.
    ///
    /// A zero `labels_per_ring` yields an empty plan; configuration validation
    /// keeps that value from ever reaching here.
    pub fn new(word_count: usize, labels_per_ring: usize) -> Self {
        if labels_per_ring == 0 {
            return Self {
                labels_per_ring,
                ring_count: 0,
                latitude_step: 0.0,
                longitude_step: 0.0,
            };
        }

        let ring_count = word_count.div_ceil(labels_per_ring);
        Self {
            labels_per_ring,
            ring_count,
            latitude_step: LATITUDE_SPAN / (ring_count + 1) as f64,
            longitude_step: LONGITUDE_SPAN / labels_per_ring as f64,
        }
    }

    /// Seed `(latitude, longitude)` for each of `word_count` words, in order
    pub fn seeds(&self, word_count: usize) -> Vec<(f64, f64)> {
        let mut seeds = Vec::with_capacity(word_count);
        if self.labels_per_ring == 0 {
            return seeds;
        }

        let mut latitude = 0.0;
        for ring in 0..self.ring_count {
            latitude = normalize_degrees(latitude + self.latitude_step, LATITUDE_SPAN);

            let mut longitude = 0.0;
            let start = ring * self.labels_per_ring;
            let end = (start + self.labels_per_ring).min(word_count);
            for _ in start..end {
                longitude = normalize_degrees(longitude + self.longitude_step, LONGITUDE_SPAN);
                seeds.push((latitude, longitude));
            }
        }

        seeds
    }
}

/// Lay out `words` on a sphere, projecting each seed once
pub fn layout<S: AsRef<str>>(
    words: &[S],
    labels_per_ring: usize,
    radius: f64,
    min_factor: f64,
) -> Vec<Label> {
    let plan = RingPlan::new(words.len(), labels_per_ring);
    plan.seeds(words.len())
        .into_iter()
        .zip(words)
        .map(|((latitude, longitude), word)| {
            let text: &str = word.as_ref();
            Label::new(text, radius, latitude, longitude, min_factor)
        })
        .collect()
}
