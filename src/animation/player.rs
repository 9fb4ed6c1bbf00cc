//! Playback controller that paces a recorded frame list.

use std::ops::Range;
use std::time::Duration;

use super::frame::{Comparing, Frame, FrameList};
use super::recorder::{RecordError, record};
use crate::compute::ArraySource;
use crate::schema::{Algorithm, ConfigError, VisualizerConfig, pace_for_speed};

/// Coarse playback status exposed to the presentation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackStatus {
    Idle,
    Running,
    Paused,
    Finished,
}

/// One playback of a frame list.
#[derive(Debug, Clone)]
struct Session {
    frames: FrameList,
    cursor: usize,
}

impl Session {
    fn frame(&self) -> &Frame {
        &self.frames[self.cursor]
    }

    fn at_end(&self) -> bool {
        self.cursor + 1 >= self.frames.len()
    }
}

/// Run state. Only non-idle variants own a session, so a cursor without
/// frames cannot exist.
#[derive(Debug, Clone)]
enum RunState {
    Idle,
    Running(Session),
    Paused(Session),
    Finished(Session),
}

impl RunState {
    fn status(&self) -> PlaybackStatus {
        match self {
            RunState::Idle => PlaybackStatus::Idle,
            RunState::Running(_) => PlaybackStatus::Running,
            RunState::Paused(_) => PlaybackStatus::Paused,
            RunState::Finished(_) => PlaybackStatus::Finished,
        }
    }

    fn session(&self) -> Option<&Session> {
        match self {
            RunState::Idle => None,
            RunState::Running(s) | RunState::Paused(s) | RunState::Finished(s) => Some(s),
        }
    }
}

/// What the shell renders after every publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameView<'a> {
    pub values: &'a [u32],
    pub comparing: Comparing,
    pub sorted: &'a Range<usize>,
    pub status: PlaybackStatus,
    /// Index of the displayed frame (0 while idle).
    pub cursor: usize,
    /// Frames in the current session (0 while idle).
    pub frame_count: usize,
}

/// Which shell controls accept input in the current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub start: bool,
    pub pause_resume: bool,
    pub array_size: bool,
    pub algorithm: bool,
    pub generate: bool,
}

impl Controls {
    pub fn for_status(status: PlaybackStatus) -> Self {
        let running = status == PlaybackStatus::Running;
        let active = matches!(status, PlaybackStatus::Running | PlaybackStatus::Paused);
        Self {
            start: !running,
            pause_resume: active,
            array_size: !running,
            algorithm: !running,
            generate: !running,
        }
    }
}

type Observer = Box<dyn FnMut(&FrameView<'_>) + Send>;

/// State machine sequencing frame display.
///
/// The controller is synchronous: it never sleeps. Something else decides
/// when a pace has elapsed, either by calling [`advance`](Self::advance)
/// directly, by feeding wall-clock deltas to [`tick`](Self::tick), or by
/// running a [`PlaybackDriver`](super::PlaybackDriver). Every call re-reads
/// the current status, so a pause takes effect before the next step.
///
/// Invalid commands are ignored and return `false`.
pub struct PlaybackController {
    config: VisualizerConfig,
    source: ArraySource,
    /// Displayed array while no session exists.
    array: Vec<u32>,
    state: RunState,
    pace: Duration,
    /// Time accumulated towards the next advance in `tick`.
    pending: Duration,
    /// Bumped whenever a session is started or abandoned.
    epoch: u64,
    observers: Vec<Observer>,
}

impl PlaybackController {
    /// Create an idle controller with a freshly generated array.
    pub fn new(config: VisualizerConfig) -> Result<Self, ConfigError> {
        let source = ArraySource::from_config(&config)?;
        Self::with_source(config, source)
    }

    /// Create an idle controller drawing arrays from `source`.
    ///
    /// The source's own value range is kept.
    pub fn with_source(
        config: VisualizerConfig,
        mut source: ArraySource,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let array = source.generate(config.array_size);
        let pace = config.pace();
        Ok(Self {
            config,
            source,
            array,
            state: RunState::Idle,
            pace,
            pending: Duration::ZERO,
            epoch: 0,
            observers: Vec::new(),
        })
    }

    /// Register a callback invoked on every publish.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&FrameView<'_>) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn status(&self) -> PlaybackStatus {
        self.state.status()
    }

    pub fn controls(&self) -> Controls {
        Controls::for_status(self.status())
    }

    /// Delay between advances.
    pub fn pace(&self) -> Duration {
        self.pace
    }

    /// Session counter used to detect abandoned runs.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn cursor(&self) -> Option<usize> {
        self.state.session().map(|s| s.cursor)
    }

    /// Frames of the current session, if any.
    pub fn frames(&self) -> Option<&FrameList> {
        self.state.session().map(|s| &s.frames)
    }

    /// Values currently on screen.
    pub fn values(&self) -> &[u32] {
        match self.state.session() {
            Some(session) => &session.frame().values,
            None => &self.array,
        }
    }

    /// Snapshot of what is currently on screen.
    pub fn current(&self) -> FrameView<'_> {
        const NOTHING_SORTED: &Range<usize> = &(0..0);
        let status = self.status();
        match self.state.session() {
            Some(session) => {
                let frame = session.frame();
                FrameView {
                    values: &frame.values,
                    comparing: frame.comparing,
                    sorted: &frame.sorted,
                    status,
                    cursor: session.cursor,
                    frame_count: session.frames.len(),
                }
            }
            None => FrameView {
                values: &self.array,
                comparing: Comparing::None,
                sorted: NOTHING_SORTED,
                status,
                cursor: 0,
                frame_count: 0,
            },
        }
    }

    /// Begin playing `frames` at `pace`.
    ///
    /// Only valid from Idle or Finished. An empty frame list is ignored.
    pub fn start(&mut self, frames: FrameList, pace: Duration) -> bool {
        if !matches!(self.state, RunState::Idle | RunState::Finished(_)) {
            log::debug!("Ignoring start while {:?}", self.status());
            return false;
        }
        if frames.is_empty() {
            log::debug!("Ignoring start with an empty frame list");
            return false;
        }

        log::info!(
            "Starting {} playback: {} frames at {:?}",
            frames.algorithm(),
            frames.len(),
            pace
        );
        self.epoch += 1;
        self.pace = pace;
        self.pending = Duration::ZERO;
        let session = Session { frames, cursor: 0 };
        self.state = if session.at_end() {
            RunState::Finished(session)
        } else {
            RunState::Running(session)
        };
        self.publish();
        true
    }

    /// Record the displayed array with the configured algorithm and play it.
    pub fn start_sorting(&mut self) -> Result<bool, RecordError> {
        if matches!(self.state, RunState::Running(_) | RunState::Paused(_)) {
            log::debug!("Ignoring start while {:?}", self.status());
            return Ok(false);
        }
        let frames = record(self.config.algorithm, self.values())?;
        let pace = self.pace;
        Ok(self.start(frames, pace))
    }

    /// Step to the next frame.
    ///
    /// Returns true if a frame was published. Reaching the last frame moves
    /// the controller to Finished.
    pub fn advance(&mut self) -> bool {
        let RunState::Running(session) = &mut self.state else {
            return false;
        };
        if session.at_end() {
            self.finish();
            return false;
        }

        session.cursor += 1;
        log::trace!("Advanced to frame {}/{}", session.cursor + 1, session.frames.len());
        if session.at_end() {
            self.finish();
        }
        self.publish();
        true
    }

    /// Feed elapsed wall-clock time; advances once per full pace.
    ///
    /// Returns the number of frames published.
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        if self.status() != PlaybackStatus::Running {
            return 0;
        }
        self.pending += elapsed;
        let mut published = 0;
        while self.status() == PlaybackStatus::Running && self.pending >= self.pace {
            self.pending -= self.pace;
            if self.advance() {
                published += 1;
            }
        }
        if self.status() != PlaybackStatus::Running {
            self.pending = Duration::ZERO;
        }
        published
    }

    /// Freeze the cursor. Only valid while Running.
    pub fn pause(&mut self) -> bool {
        match std::mem::replace(&mut self.state, RunState::Idle) {
            RunState::Running(session) => {
                log::debug!("Paused at frame {}", session.cursor);
                self.state = RunState::Paused(session);
                self.publish();
                true
            }
            other => {
                log::debug!("Ignoring pause while {:?}", other.status());
                self.state = other;
                false
            }
        }
    }

    /// Continue from the frozen cursor. Only valid while Paused.
    pub fn resume(&mut self) -> bool {
        match std::mem::replace(&mut self.state, RunState::Idle) {
            RunState::Paused(session) => {
                log::debug!("Resumed at frame {}", session.cursor);
                self.state = RunState::Running(session);
                self.pending = Duration::ZERO;
                self.publish();
                true
            }
            other => {
                log::debug!("Ignoring resume while {:?}", other.status());
                self.state = other;
                false
            }
        }
    }

    /// Pause if running, resume if paused.
    pub fn toggle_pause(&mut self) -> bool {
        match self.status() {
            PlaybackStatus::Running => self.pause(),
            PlaybackStatus::Paused => self.resume(),
            status => {
                log::debug!("Ignoring pause toggle while {:?}", status);
                false
            }
        }
    }

    /// Drop any session and show a freshly generated array. Valid from any
    /// state.
    pub fn reset(&mut self) {
        log::info!("Reset from {:?}", self.status());
        self.abandon_session();
        self.regenerate();
        self.publish();
    }

    /// Replace the displayed array. Refused while Running; a paused session
    /// is abandoned.
    pub fn generate_new_array(&mut self) -> bool {
        if self.status() == PlaybackStatus::Running {
            log::debug!("Ignoring new array request while running");
            return false;
        }
        self.abandon_session();
        self.regenerate();
        self.publish();
        true
    }

    /// Change the array size and regenerate. Same rules as
    /// [`generate_new_array`](Self::generate_new_array).
    pub fn set_array_size(&mut self, array_size: usize) -> bool {
        if array_size == 0 || self.status() == PlaybackStatus::Running {
            log::debug!("Ignoring array size {} while {:?}", array_size, self.status());
            return false;
        }
        self.config.array_size = array_size;
        self.generate_new_array()
    }

    /// Choose the algorithm for the next start. Refused while Running.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> bool {
        if self.status() == PlaybackStatus::Running {
            log::debug!("Ignoring algorithm change while running");
            return false;
        }
        self.config.algorithm = algorithm;
        true
    }

    /// Change the speed (1-100). The wait in progress restarts at the new
    /// pace; recorded frames are untouched.
    pub fn set_speed(&mut self, speed: u32) {
        self.config.speed = speed.clamp(1, 100);
        self.pace = pace_for_speed(self.config.speed);
        self.pending = Duration::ZERO;
        log::debug!("Speed {} -> pace {:?}", self.config.speed, self.pace);
    }

    fn finish(&mut self) {
        if let RunState::Running(session) = std::mem::replace(&mut self.state, RunState::Idle) {
            log::info!("Playback finished after {} frames", session.frames.len());
            self.state = RunState::Finished(session);
        }
        self.pending = Duration::ZERO;
    }

    fn abandon_session(&mut self) {
        self.epoch += 1;
        self.pending = Duration::ZERO;
        self.state = RunState::Idle;
    }

    fn regenerate(&mut self) {
        self.array = self.source.generate(self.config.array_size);
    }

    fn publish(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let mut observers = std::mem::take(&mut self.observers);
        let view = self.current();
        for observer in &mut observers {
            observer(&view);
        }
        self.observers = observers;
    }
}
