// perf/ - Adaptive performance control
//
// The monitor grades the device from measured frame times; the selector
// turns that grade (or a manual pick) into a generator density.

mod density;
mod frame_loop;
mod level;
mod monitor;
mod zone;

pub use density::{DensitySelector, MOBILE_MAX_WIDTH};
pub use frame_loop::{AnimationFrames, FrameLoop, FrameScheduler};
pub use level::{PerformanceLevel, fps_color};
pub use monitor::{DEBOUNCE_MS, DETECT_SAMPLES, LevelChange, PerformanceMonitor, WINDOW};
pub use zone::{CROSSFADE_MS, SlideZone, ZoneTracker};

#[cfg(test)]
pub(crate) use frame_loop::testing;
