//! Interactive terminal host for a word cloud

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::cloud::WordCloud;
use crate::renderer::terminal::{CellMetrics, TerminalBackend};
use crate::renderer::{Color, RenderBackend};

/// What a key press asks the runner to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerCommand {
    Quit,
    TogglePause,
    Ignore,
}

impl RunnerCommand {
    /// Map a key press to a runner command
    pub fn from_key(key: KeyEvent) -> Self {
        if key.kind != KeyEventKind::Press {
            return RunnerCommand::Ignore;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                RunnerCommand::Quit
            }
            KeyCode::Char('q') | KeyCode::Esc => RunnerCommand::Quit,
            KeyCode::Char(' ') => RunnerCommand::TogglePause,
            _ => RunnerCommand::Ignore,
        }
    }
}

/// Drives one tick and one frame per interval until the user quits
pub struct CloudRunner<B: RenderBackend = TerminalBackend> {
    cloud: WordCloud,
    backend: B,
    tick_rate: Duration,
    background: Color,
    running: bool,
}

impl CloudRunner<TerminalBackend> {
    /// Create a runner on the current terminal
    pub fn new(cloud: WordCloud, metrics: CellMetrics) -> io::Result<Self> {
        let backend = TerminalBackend::new(metrics).map_err(|e| io::Error::other(e.to_string()))?;
        Ok(Self::with_backend(cloud, backend))
    }

    /// Run until quit, restoring the terminal even when a frame fails
    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;

        let result = self.event_loop();

        let restored = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen)
            .and_then(|_| terminal::disable_raw_mode());

        result.and(restored)
    }

    fn event_loop(&mut self) -> io::Result<()> {
        let mut last_tick = Instant::now();
        tracing::info!(
            labels = self.cloud.labels().len(),
            tick_ms = self.tick_rate.as_millis() as u64,
            "starting word cloud"
        );

        while self.running {
            let timeout = self
                .tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_default();

            let event = if event::poll(timeout)? {
                Some(event::read()?)
            } else {
                None
            };

            if self.pump(event, last_tick.elapsed())? {
                last_tick = Instant::now();
            }
        }

        tracing::info!(ticks = self.cloud.driver().ticks(), "word cloud stopped");
        Ok(())
    }
}

impl<B: RenderBackend> CloudRunner<B> {
    /// Create a runner drawing onto `backend`
    pub fn with_backend(cloud: WordCloud, backend: B) -> Self {
        let surface = backend.capabilities();
        let extent = cloud.config().preferred_extent();
        if extent > surface.width || extent > surface.height {
            tracing::warn!(
                extent,
                width = surface.width,
                height = surface.height,
                "surface is smaller than the cloud; outer labels will be clipped"
            );
        }

        Self {
            cloud,
            backend,
            tick_rate: Duration::from_millis(16),
            background: Color::Rgb(5, 7, 12),
            running: true,
        }
    }

    /// Set tick rate
    pub fn with_tick_rate(mut self, rate: Duration) -> Self {
        self.tick_rate = rate;
        self
    }

    /// Set the background color
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// One loop iteration: handle `event`, then tick and draw if a frame is
    /// due. Returns whether a frame was drawn.
    pub fn pump(&mut self, event: Option<CrosstermEvent>, since_tick: Duration) -> io::Result<bool> {
        if let Some(CrosstermEvent::Key(key)) = event {
            self.apply(RunnerCommand::from_key(key));
        }

        if !self.running || since_tick < self.tick_rate {
            return Ok(false);
        }

        self.cloud.tick();
        self.draw_frame()?;
        Ok(true)
    }

    fn apply(&mut self, command: RunnerCommand) {
        match command {
            RunnerCommand::Quit => self.running = false,
            RunnerCommand::TogglePause => {
                self.cloud.driver_mut().toggle();
                tracing::debug!(state = ?self.cloud.driver().state(), "toggled rotation");
            }
            RunnerCommand::Ignore => {}
        }
    }

    fn draw_frame(&mut self) -> io::Result<()> {
        let to_io = |e: crate::renderer::RenderError| io::Error::other(e.to_string());

        self.backend.begin_frame().map_err(to_io)?;
        self.backend.clear(self.background);
        self.cloud.render(&mut self.backend);
        self.backend.end_frame().map_err(to_io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CloudConfig;
    use crate::renderer::RecordingBackend;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            RunnerCommand::from_key(press(KeyCode::Char('q'), KeyModifiers::NONE)),
            RunnerCommand::Quit
        );
        assert_eq!(
            RunnerCommand::from_key(press(KeyCode::Esc, KeyModifiers::NONE)),
            RunnerCommand::Quit
        );
        assert_eq!(
            RunnerCommand::from_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            RunnerCommand::Quit
        );
    }

    #[test]
    fn test_space_toggles_pause() {
        assert_eq!(
            RunnerCommand::from_key(press(KeyCode::Char(' '), KeyModifiers::NONE)),
            RunnerCommand::TogglePause
        );
    }

    #[test]
    fn test_other_keys_and_releases_ignored() {
        assert_eq!(
            RunnerCommand::from_key(press(KeyCode::Char('c'), KeyModifiers::NONE)),
            RunnerCommand::Ignore
        );
        let mut release = press(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(RunnerCommand::from_key(release), RunnerCommand::Ignore);
    }

    fn runner() -> CloudRunner<RecordingBackend> {
        let cloud = WordCloud::new(CloudConfig::default())
            .unwrap()
            .with_words(["a", "b", "c"]);
        CloudRunner::with_backend(cloud, RecordingBackend::new(520.0, 520.0))
            .with_tick_rate(Duration::from_millis(16))
    }

    fn key(code: KeyCode) -> Option<CrosstermEvent> {
        Some(CrosstermEvent::Key(press(code, KeyModifiers::NONE)))
    }

    #[test]
    fn test_key_events_do_not_starve_frames() {
        let mut runner = runner();
        let due = Duration::from_millis(20);
        for _ in 0..5 {
            assert!(runner.pump(key(KeyCode::Char('x')), due).unwrap());
        }
        assert_eq!(runner.cloud.driver().ticks(), 5);
        assert_eq!(runner.backend.frames_presented(), 5);
        assert_eq!(runner.backend.placed().len(), 3);
    }

    #[test]
    fn test_no_frame_before_tick_rate() {
        let mut runner = runner();
        assert!(!runner.pump(None, Duration::from_millis(3)).unwrap());
        assert_eq!(runner.backend.frames_presented(), 0);
    }

    #[test]
    fn test_pause_still_draws_frames() {
        let mut runner = runner();
        let due = Duration::from_millis(16);
        assert!(runner.pump(key(KeyCode::Char(' ')), due).unwrap());
        assert!(!runner.cloud.driver().is_running());
        assert_eq!(runner.cloud.driver().ticks(), 0);
        assert_eq!(runner.backend.frames_presented(), 1);
    }

    #[test]
    fn test_quit_stops_without_drawing() {
        let mut runner = runner();
        assert!(!runner.pump(key(KeyCode::Char('q')), Duration::from_secs(1)).unwrap());
        assert!(!runner.is_running());
        assert_eq!(runner.backend.frames_presented(), 0);
    }
}
