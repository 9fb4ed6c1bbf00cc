//! Frame recording and paced playback of sorting runs.
//!
//! A run happens in two phases:
//!
//! 1. **Recording** (`recorder`): a sorting strategy runs to completion on a
//!    copy of the input and every comparison, swap and finished pass is
//!    captured as an immutable [`Frame`]. Nothing sleeps here.
//! 2. **Playback** (`player`, `driver`): the [`PlaybackController`] walks the
//!    recorded [`FrameList`] one frame per pace, and the [`PlaybackDriver`]
//!    supplies the pacing from a worker thread.
//!
//! ```text
//!              start            pause
//!   Idle ─────────────▶ Running ◀────▶ Paused
//!    ▲                     │    resume
//!    │ reset (any state)   │ last frame
//!    └──────────────── Finished
//! ```

mod driver;
mod frame;
mod player;
mod recorder;

pub use driver::PlaybackDriver;
pub use frame::{Comparing, Frame, FrameList, RecordStats};
pub use player::{Controls, FrameView, PlaybackController, PlaybackStatus};
pub use recorder::{FrameRecorder, RecordError, record};
