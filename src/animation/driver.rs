//! Background driver running the paced advance loop.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use super::player::{PlaybackController, PlaybackStatus};
use super::recorder::RecordError;
use crate::schema::Algorithm;

struct Shared {
    controller: Mutex<PlaybackController>,
    /// Signalled on every command that changes status or session.
    wake: Condvar,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, PlaybackController> {
        self.controller.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Owns a [`PlaybackController`] and advances it on a worker thread.
///
/// The worker waits one pace, re-checks status and session epoch under the
/// lock, then advances. Commands take the same lock and wake the worker, so
/// a pause stops the cursor before the next frame and a reset invalidates a
/// pending advance before it can publish. At most one worker exists.
///
/// Observers run on the worker thread while the lock is held and must not
/// call back into the driver.
///
/// Playback should be started with [`start`](Self::start). A session started
/// directly on the controller through [`with_controller`](Self::with_controller)
/// has no worker until the next `start`, which adopts it.
///
/// Usage:
/// ```ignore
/// let mut driver = PlaybackDriver::new(PlaybackController::new(config)?);
/// driver.with_controller(|c| c.subscribe(|view| render(view)));
/// driver.start()?;
/// driver.wait();
/// ```
pub struct PlaybackDriver {
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
    /// Session the current worker advances.
    worker_epoch: u64,
}

impl PlaybackDriver {
    pub fn new(controller: PlaybackController) -> Self {
        Self {
            shared: Arc::new(Shared {
                controller: Mutex::new(controller),
                wake: Condvar::new(),
            }),
            worker: None,
            worker_epoch: 0,
        }
    }

    /// Run `f` with exclusive access to the controller.
    ///
    /// Wakes the worker afterwards in case `f` changed status.
    pub fn with_controller<R>(&self, f: impl FnOnce(&mut PlaybackController) -> R) -> R {
        let mut controller = self.shared.lock();
        let result = f(&mut *controller);
        drop(controller);
        self.shared.wake.notify_all();
        result
    }

    pub fn status(&self) -> PlaybackStatus {
        self.shared.lock().status()
    }

    /// Record the displayed array and start playing it.
    ///
    /// No-op while a run this driver is advancing is active. An active
    /// session without a worker is adopted instead. The previous worker is
    /// joined first.
    pub fn start(&mut self) -> Result<bool, RecordError> {
        let (status, epoch) = {
            let controller = self.shared.lock();
            (controller.status(), controller.epoch())
        };
        if matches!(status, PlaybackStatus::Running | PlaybackStatus::Paused) {
            if self.worker.is_some() && self.worker_epoch == epoch {
                log::debug!("Ignoring start: run already active");
                return Ok(false);
            }
            log::debug!("Adopting session {} started outside the driver", epoch);
            self.join_worker();
            self.spawn_worker(epoch);
            return Ok(true);
        }
        self.join_worker();

        let epoch = {
            let mut controller = self.shared.lock();
            if !controller.start_sorting()? {
                return Ok(false);
            }
            controller.epoch()
        };
        self.spawn_worker(epoch);
        Ok(true)
    }

    fn spawn_worker(&mut self, epoch: u64) {
        let shared = Arc::clone(&self.shared);
        self.worker_epoch = epoch;
        self.worker = Some(thread::spawn(move || advance_loop(&shared, epoch)));
    }

    pub fn pause(&self) -> bool {
        self.with_controller(PlaybackController::pause)
    }

    pub fn resume(&self) -> bool {
        self.with_controller(PlaybackController::resume)
    }

    pub fn toggle_pause(&self) -> bool {
        self.with_controller(PlaybackController::toggle_pause)
    }

    pub fn set_speed(&self, speed: u32) {
        self.with_controller(|c| c.set_speed(speed));
    }

    pub fn set_algorithm(&self, algorithm: Algorithm) -> bool {
        self.with_controller(|c| c.set_algorithm(algorithm))
    }

    pub fn set_array_size(&mut self, array_size: usize) -> bool {
        let changed = self.with_controller(|c| c.set_array_size(array_size));
        if changed {
            self.join_worker();
        }
        changed
    }

    pub fn generate_new_array(&mut self) -> bool {
        let changed = self.with_controller(PlaybackController::generate_new_array);
        if changed {
            self.join_worker();
        }
        changed
    }

    /// Stop any run and show a fresh array. Returns once the worker exited.
    pub fn reset(&mut self) {
        self.with_controller(PlaybackController::reset);
        self.join_worker();
    }

    /// Block until the current run finishes or is abandoned.
    ///
    /// A paused run blocks until resumed or reset from another thread, so
    /// only call this when nothing else drives the session.
    pub fn wait(&mut self) {
        self.join_worker();
    }

    fn join_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::warn!("Playback worker panicked");
            }
        }
    }
}

impl Drop for PlaybackDriver {
    fn drop(&mut self) {
        if self.worker.is_some() {
            self.reset();
        }
    }
}

fn advance_loop(shared: &Shared, epoch: u64) {
    let mut controller = shared.lock();
    loop {
        controller = shared
            .wake
            .wait_while(controller, |c| {
                c.epoch() == epoch && c.status() == PlaybackStatus::Paused
            })
            .unwrap_or_else(PoisonError::into_inner);
        if controller.epoch() != epoch || controller.status() != PlaybackStatus::Running {
            break;
        }

        let pace = controller.pace();
        let (guard, timeout) = shared
            .wake
            .wait_timeout_while(controller, pace, |c| {
                c.epoch() == epoch && c.status() == PlaybackStatus::Running && c.pace() == pace
            })
            .unwrap_or_else(PoisonError::into_inner);
        controller = guard;

        // Woken early by a pause, reset, speed change or new session:
        // re-evaluate.
        if timeout.timed_out() && controller.epoch() == epoch {
            controller.advance();
        }
    }
    log::debug!("Advance loop for session {} exited", epoch);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::VisualizerConfig;
    use std::sync::mpsc;
    use std::time::Duration;

    fn driver(speed: u32) -> PlaybackDriver {
        let config = VisualizerConfig {
            array_size: 10,
            speed,
            random_seed: Some(3),
            ..Default::default()
        };
        PlaybackDriver::new(PlaybackController::new(config).unwrap())
    }

    fn cursor(driver: &PlaybackDriver) -> Option<usize> {
        driver.with_controller(|c| c.cursor())
    }

    #[test]
    fn test_runs_to_completion() {
        let mut driver = driver(100);
        let (tx, rx) = mpsc::channel();
        driver.with_controller(|c| {
            c.subscribe(move |view| {
                if view.frame_count > 0 {
                    let _ = tx.send(view.cursor);
                }
            })
        });

        assert_eq!(driver.start(), Ok(true));
        driver.wait();

        assert_eq!(driver.status(), PlaybackStatus::Finished);
        let total = driver.with_controller(|c| c.frames().unwrap().len());
        let cursors: Vec<usize> = rx.try_iter().collect();
        assert_eq!(cursors, (0..total).collect::<Vec<_>>());

        let values = driver.with_controller(|c| c.values().to_vec());
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_pause_stops_advancing() {
        let mut driver = driver(90);
        driver.start().unwrap();
        thread::sleep(Duration::from_millis(40));

        assert!(driver.pause());
        let frozen = cursor(&driver);
        thread::sleep(Duration::from_millis(60));
        assert_eq!(cursor(&driver), frozen);
        assert_eq!(driver.status(), PlaybackStatus::Paused);

        assert!(driver.resume());
        thread::sleep(Duration::from_millis(60));
        assert!(cursor(&driver) > frozen);
        driver.reset();
    }

    #[test]
    fn test_reset_stops_worker() {
        let mut driver = driver(50);
        let before = driver.with_controller(|c| c.values().to_vec());
        driver.start().unwrap();
        thread::sleep(Duration::from_millis(20));

        driver.reset();
        assert!(driver.worker.is_none());
        assert_eq!(driver.status(), PlaybackStatus::Idle);
        assert_ne!(driver.with_controller(|c| c.values().to_vec()), before);

        thread::sleep(Duration::from_millis(80));
        assert_eq!(cursor(&driver), None);
    }

    #[test]
    fn test_start_ignored_while_running() {
        let mut driver = driver(1);
        assert_eq!(driver.start(), Ok(true));
        let epoch = driver.with_controller(|c| c.epoch());
        assert_eq!(driver.start(), Ok(false));
        assert_eq!(driver.with_controller(|c| c.epoch()), epoch);
        assert!(!driver.generate_new_array());
        driver.reset();
    }

    #[test]
    fn test_speed_change_applies_to_current_wait() {
        let mut driver = driver(1);
        driver.start().unwrap();
        thread::sleep(Duration::from_millis(30));
        assert_eq!(cursor(&driver), Some(0));

        driver.set_speed(100);
        thread::sleep(Duration::from_millis(100));
        let finished = driver.status() == PlaybackStatus::Finished;
        assert!(finished || cursor(&driver) > Some(5));
        driver.reset();
    }

    #[test]
    fn test_adopts_session_started_on_controller() {
        let mut driver = driver(100);
        assert_eq!(driver.with_controller(|c| c.start_sorting()), Ok(true));
        assert!(driver.worker.is_none());

        assert_eq!(driver.start(), Ok(true));
        assert_eq!(driver.start(), Ok(false));
        driver.wait();
        assert_eq!(driver.status(), PlaybackStatus::Finished);
    }

    #[test]
    fn test_restart_after_finish_replaces_worker() {
        let mut driver = driver(100);
        driver.start().unwrap();
        driver.wait();
        assert_eq!(driver.status(), PlaybackStatus::Finished);

        assert_eq!(driver.start(), Ok(true));
        driver.wait();
        assert_eq!(driver.status(), PlaybackStatus::Finished);
    }
}
