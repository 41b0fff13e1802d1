use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// I/O failure against a sysfs entry, carrying the path that failed.
///
/// These never escape the crate API directly; the control types swallow
/// them into [`ErrorFlags`] and log them. They are public so the log
/// output and the flag state can be cross-checked.
#[derive(Error, Debug)]
pub enum SysfsError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type SysfsResult<T> = Result<T, SysfsError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Selector for querying a single flag via [`ErrorFlags::get`].
pub enum Flag {
    /// No `bone_capemgr.*` directory was found; the fallback name is in use.
    CapeMgr,
    /// No `ocp.*` directory was found; the fallback name is in use.
    Ocp,
    /// The most recent overlay load did not complete.
    DeviceTree,
    /// The PWM subsystem overlay itself could not be written.
    PwmSubsystem,
    /// The pin's `pwm_test_*` directory was not found after overlay load.
    PwmTest,
    /// Last access to the period file failed.
    PeriodFile,
    /// Last access to the duty file failed.
    DutyFile,
    /// Last access to the run file failed.
    RunFile,
    /// Last access to the polarity file failed.
    PolarityFile,
    /// Last requested value was outside the accepted range.
    OutOfRange,
}

/// Per-operation error record kept by every PWM handle.
///
/// Each flag reflects the most recent operation that touches it; operations
/// that do not touch a flag leave it unchanged. A `true` flag means the
/// paired return value may be a sentinel rather than device state.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct ErrorFlags {
    pub(crate) cape_mgr: bool,
    pub(crate) ocp: bool,
    pub(crate) device_tree: bool,
    pub(crate) pwm_subsystem: bool,
    pub(crate) pwm_test: bool,
    pub(crate) period_file: bool,
    pub(crate) duty_file: bool,
    pub(crate) run_file: bool,
    pub(crate) polarity_file: bool,
    pub(crate) out_of_range: bool,
}

impl ErrorFlags {
    /// Returns the current value of one flag.
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::CapeMgr => self.cape_mgr,
            Flag::Ocp => self.ocp,
            Flag::DeviceTree => self.device_tree,
            Flag::PwmSubsystem => self.pwm_subsystem,
            Flag::PwmTest => self.pwm_test,
            Flag::PeriodFile => self.period_file,
            Flag::DutyFile => self.duty_file,
            Flag::RunFile => self.run_file,
            Flag::PolarityFile => self.polarity_file,
            Flag::OutOfRange => self.out_of_range,
        }
    }

    /// True if any flag is raised.
    pub fn any(&self) -> bool {
        self.cape_mgr
            || self.ocp
            || self.device_tree
            || self.pwm_subsystem
            || self.pwm_test
            || self.period_file
            || self.duty_file
            || self.run_file
            || self.polarity_file
            || self.out_of_range
    }
}
