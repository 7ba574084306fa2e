//! The word cloud: configuration, labels and rotation in one place

use crate::animation::{AnimationDriver, RotationStep};
use crate::config::CloudConfig;
use crate::error::Result;
use crate::layout::{layout, Label, RingPlan};
use crate::measure::MeasureSpec;
use crate::renderer::{DrawCommand, RenderBackend};

/// A rotating sphere of labels
///
/// The host sets words and configuration, then calls [`WordCloud::tick`] and
/// [`WordCloud::render`] once per frame on its own schedule.
#[derive(Debug, Clone)]
pub struct WordCloud {
    config: CloudConfig,
    words: Vec<String>,
    labels: Vec<Label>,
    driver: AnimationDriver,
}

impl WordCloud {
    /// Create an empty cloud, validating `config`
    pub fn new(config: CloudConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            words: Vec::new(),
            labels: Vec::new(),
            driver: AnimationDriver::default(),
        })
    }

    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_words(words);
        self
    }

    pub fn with_rotation(mut self, step: RotationStep) -> Self {
        self.driver.step = step;
        self
    }

    pub fn config(&self) -> &CloudConfig {
        &self.config
    }

    /// Current labels, in word order
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn ring_plan(&self) -> RingPlan {
        RingPlan::new(self.words.len(), self.config.labels_per_ring as usize)
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut AnimationDriver {
        &mut self.driver
    }

    /// Replace the word list and lay it out from scratch
    pub fn set_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = words.into_iter().map(Into::into).collect();
        self.relayout();
    }

    /// Swap in a new configuration and lay out again.
    ///
    /// On error the previous configuration and labels stay in place.
    pub fn reconfigure(&mut self, config: CloudConfig) -> Result<()> {
        config.validate()?;
        tracing::debug!(
            radius = config.radius,
            labels_per_ring = config.labels_per_ring,
            min_factor = config.min_factor,
            "reconfiguring cloud"
        );
        self.config = config;
        self.relayout();
        Ok(())
    }

    fn relayout(&mut self) {
        // Built aside, then swapped in whole
        let labels = layout(
            &self.words,
            self.config.labels_per_ring as usize,
            self.config.radius,
            self.config.min_factor,
        );
        tracing::debug!(
            words = self.words.len(),
            rings = self.ring_plan().ring_count,
            "laid out cloud"
        );
        self.labels = labels;
    }

    /// Advance the rotation by one step
    pub fn tick(&mut self) {
        self.driver
            .tick(&mut self.labels, self.config.radius, self.config.min_factor);
    }

    /// Draw commands for a surface of the given size, in label order
    pub fn draw_commands(&self, width: f64, height: f64) -> Vec<DrawCommand> {
        self.commands_around(width / 2.0, height / 2.0)
    }

    fn commands_around(&self, cx: f64, cy: f64) -> Vec<DrawCommand> {
        let style = self.config.style;

        self.labels
            .iter()
            .map(|label| DrawCommand {
                text: label.text.clone(),
                x: cx + label.position.x,
                y: cy + label.position.y,
                size: label.factor * self.config.max_text_size,
                opacity: label.factor.max(self.config.min_opacity),
                color: style.color,
                shadow: style.shadow,
            })
            .collect()
    }

    /// Draw the current frame onto `backend`
    pub fn render(&self, backend: &mut dyn RenderBackend) {
        let (cx, cy) = backend.capabilities().center();
        for command in self.commands_around(cx, cy) {
            backend.draw_text(&command);
        }
    }

    /// Width and height the cloud wants under the host's constraints
    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> (f64, f64) {
        let preferred = self.config.preferred_extent();
        (width.resolve(preferred), height.resolve(preferred))
    }
}
