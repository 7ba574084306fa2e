//! wordsphere: a rotating spherical word cloud
//!
//! This crate provides the engine behind a word cloud drawn on a sphere:
//! - Spherical projection with a longitude-driven depth factor
//! - Deterministic ring layout of labels between the poles
//! - Tick-driven rotation the host advances on its own schedule
//! - Self-contained draw commands for any render backend
//! - A crossterm terminal backend and runner for interactive display
//!
//! ```
//! use wordsphere::{CloudConfig, RecordingBackend, RenderBackend, WordCloud};
//!
//! let mut cloud = WordCloud::new(CloudConfig::default())?
//!     .with_words(["rust", "sphere", "cloud"]);
//! cloud.tick();
//!
//! let mut backend = RecordingBackend::new(520.0, 520.0);
//! backend.begin_frame()?;
//! cloud.render(&mut backend);
//! backend.end_frame()?;
//! assert_eq!(backend.placed().len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod animation;
pub mod app;
pub mod cloud;
pub mod config;
pub mod error;
pub mod layout;
pub mod measure;
pub mod renderer;
pub mod spatial;

// Re-export commonly used types
pub use animation::{AnimationDriver, DriverState, RotationStep};
pub use cloud::WordCloud;
pub use config::{CloudConfig, TextShadow, TextStyle};
pub use error::CloudError;
pub use layout::{Label, RingPlan};
pub use measure::MeasureSpec;
pub use renderer::{Color, DrawCommand, RecordingBackend, RenderBackend, RenderError};
pub use spatial::{Point3D, Projection};
