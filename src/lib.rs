//! PWM control for the BeagleBone Black over sysfs.
//!
//! The 3.8.x BeagleBone kernels expose PWM through text files under
//! `/sys/devices`, in directories whose names carry boot-dependent
//! allocation counters (`bone_capemgr.9`, `ocp.3`, `pwm_test_P8_13.12`).
//! This crate discovers those directories, loads the required device-tree
//! overlays through the capemgr slots file and hands out one [`Pwm`] handle
//! per pin.
//!
//! Nothing here panics or returns `Result` at the API surface: constructors
//! always produce a handle, failed operations return sentinel values
//! ([`config::FILE_COULD_NOT_OPEN`], [`config::FILE_COULD_NOT_OPEN_INT`])
//! and record what went wrong in per-operation flags. Sentinels are ordinary
//! strings and integers, so the flags are the only way to tell them from
//! real file content. The intended pattern is operate first, then poll
//! [`Pwm::fail`] or [`Pwm::fail_flag`]:
//!
//! ```no_run
//! use bonepwm_rs::{Flag, Platform, Pwm, PwmPin, RunState, TimeUnit};
//!
//! let platform = Platform::discover();
//! let mut pwm = Pwm::new(PwmPin::P9_14, &platform);
//!
//! pwm.set_period_time(500, TimeUnit::Microsecond);
//! pwm.set_duty_percent(75.0);
//! pwm.set_run_state(RunState::Run);
//!
//! if pwm.fail() {
//!     if pwm.fail_flag(Flag::DeviceTree) {
//!         eprintln!("overlays did not load; control files will be missing");
//!     }
//! }
//! ```
//!
//! Everything is single-threaded, synchronous and blocking: each operation
//! opens one file, uses it and closes it, and no handle survives across
//! calls. Multi-step operations are not atomic — [`Pwm::set_duty_percent`]
//! reads the period and writes the duty as two separate file operations, so
//! a concurrent period change lands between them. Two handles on the same
//! pin interleave at file granularity with only OS guarantees. A hung sysfs
//! write blocks indefinitely; there are no timeouts.

pub mod config;
pub mod error;
pub mod pin;
pub mod platform;
pub mod pwm;
pub mod units;

mod overlay;
mod sysfs;

// Re-export commonly used types
pub use error::{ErrorFlags, Flag, SysfsError};
pub use pin::PwmPin;
pub use platform::{OcpTarget, Platform};
pub use pwm::{Polarity, Pwm, RunState};
pub use units::TimeUnit;

#[cfg(test)]
pub(crate) mod mocks;
