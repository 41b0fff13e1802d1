use std::path::{Path, PathBuf};

use log::debug;

use crate::config;
use crate::error::{ErrorFlags, Flag};
use crate::overlay::OverlayLocator;
use crate::pin::PwmPin;
use crate::platform::Platform;
use crate::units::{self, TimeUnit};

// Use the real sysfs tree in production
#[cfg(not(test))]
use crate::sysfs;

// Mock filesystem for testing
#[cfg(test)]
use crate::mocks::mock_sysfs as sysfs;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Output polarity. `Straight` drives the pin high for the load portion
/// of each cycle, `Reverse` inverts the waveform.
pub enum Polarity {
    Straight = 0,
    Reverse = 1,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Run state of the PWM output.
pub enum RunState {
    Stop = 0,
    Run = 1,
}

/// Control handle for one PWM output pin.
///
/// Construction loads the device-tree overlays, resolves the pin's
/// `pwm_test` directory and derives the four control-file paths. It never
/// fails: a handle built against a broken platform is degraded, not absent,
/// and every operation on it raises flags instead of panicking. Poll
/// [`fail`](Pwm::fail) / [`fail_flag`](Pwm::fail_flag) after the calls you
/// care about; sentinel returns ([`FILE_COULD_NOT_OPEN`](config::FILE_COULD_NOT_OPEN),
/// [`FILE_COULD_NOT_OPEN_INT`](config::FILE_COULD_NOT_OPEN_INT)) are
/// indistinguishable from file content without them.
///
/// The duty file stores *space* time, so a larger stored value means a
/// smaller duty percentage. [`set_duty_percent`](Pwm::set_duty_percent) and
/// [`duty_percent`](Pwm::duty_percent) handle the inversion.
///
/// # Example
/// ```no_run
/// use bonepwm_rs::{Platform, Pwm, PwmPin, RunState, TimeUnit};
///
/// let platform = Platform::discover();
/// let mut pwm = Pwm::new(PwmPin::P8_13, &platform);
///
/// pwm.set_period_time(500_000, TimeUnit::Nanosecond);
/// pwm.set_duty_percent(25.0);
/// pwm.set_run_state(RunState::Run);
///
/// if pwm.fail() {
///     eprintln!("pwm setup incomplete, check fail_flag() for the cause");
/// }
/// ```
pub struct Pwm {
    locator: OverlayLocator,
    period_path: PathBuf,
    duty_path: PathBuf,
    run_path: PathBuf,
    polarity_path: PathBuf,
    flags: ErrorFlags,
}

impl Pwm {
    /// Binds `pin`, loading its overlays and resolving its control files.
    ///
    /// Discovery state is copied out of `platform`; one discovered
    /// [`Platform`] serves any number of handles.
    pub fn new(pin: PwmPin, platform: &Platform) -> Pwm {
        let mut flags = ErrorFlags {
            cape_mgr: platform.capemgr_failed(),
            ocp: platform.ocp_failed(),
            ..ErrorFlags::default()
        };

        let locator = OverlayLocator::new(platform.clone(), pin, &mut flags);
        let test_dir = locator.locate_test_dir(&mut flags);

        debug!("pwm {} bound to {}", pin, test_dir.display());

        Pwm {
            period_path: test_dir.join(config::PERIOD_FILE),
            duty_path: test_dir.join(config::DUTY_FILE),
            run_path: test_dir.join(config::RUN_FILE),
            polarity_path: test_dir.join(config::POLARITY_FILE),
            locator,
            flags,
        }
    }

    /// Reads the period file as text.
    ///
    /// Returns [`FILE_COULD_NOT_OPEN`](config::FILE_COULD_NOT_OPEN) and sets
    /// the period flag when the file cannot be read; otherwise clears it.
    pub fn read_period(&mut self) -> String {
        Self::read_text(&self.period_path, &mut self.flags.period_file)
    }

    /// Reads the duty file as text. The stored value is space time.
    pub fn read_duty(&mut self) -> String {
        Self::read_text(&self.duty_path, &mut self.flags.duty_file)
    }

    /// Reads the run file as text (`"0"` stopped, `"1"` running).
    pub fn read_run(&mut self) -> String {
        Self::read_text(&self.run_path, &mut self.flags.run_file)
    }

    /// Reads the polarity file as text (`"0"` straight, `"1"` reverse).
    pub fn read_polarity(&mut self) -> String {
        Self::read_text(&self.polarity_path, &mut self.flags.polarity_file)
    }

    /// Reads the period in nanoseconds.
    ///
    /// Returns [`FILE_COULD_NOT_OPEN_INT`](config::FILE_COULD_NOT_OPEN_INT)
    /// when the file cannot be read (flag set) or its content does not parse
    /// as an integer (flag stays clear; the read itself worked).
    pub fn read_period_ns(&mut self) -> i64 {
        Self::read_number(&self.period_path, &mut self.flags.period_file)
    }

    /// Reads the stored space time in nanoseconds.
    pub fn read_duty_ns(&mut self) -> i64 {
        Self::read_number(&self.duty_path, &mut self.flags.duty_file)
    }

    /// Current duty percentage, computed as `(1 - duty/period) * 100`.
    ///
    /// Both numeric reads feed the arithmetic unchecked, so sentinel or zero
    /// periods propagate into the result; check the flags before trusting
    /// the value.
    pub fn duty_percent(&mut self) -> f32 {
        let period = self.read_period_ns() as f64;
        let duty = self.read_duty_ns() as f64;

        ((1.0 - duty / period) * 100.0) as f32
    }

    /// Current duty percentage as text.
    pub fn duty_percent_text(&mut self) -> String {
        self.duty_percent().to_string()
    }

    /// Sets the duty cycle as a percentage of the current period.
    ///
    /// A percent outside `[0.0, 100.0]` sets the out-of-range flag plus both
    /// file flags and performs no I/O. Otherwise the current period is read
    /// and `round(period * (1 - percent/100))` is written as space time.
    /// Period read and duty write are two separate file operations; a period
    /// change in between goes unnoticed.
    pub fn set_duty_percent(&mut self, percent: f32) -> bool {
        if !(0.0..=100.0).contains(&percent) {
            self.flags.out_of_range = true;
            self.flags.duty_file = true;
            self.flags.period_file = true;
            return false;
        }
        self.flags.out_of_range = false;

        let period = self.read_period_ns() as f64;
        let ratio = 1.0 - f64::from(percent / 100.0);
        let space = (period * ratio).round() as i64;

        Self::write_value(
            &self.duty_path,
            &space.to_string(),
            &mut self.flags.duty_file,
        )
    }

    /// Sets the period, converting `period` from `unit` to nanoseconds.
    ///
    /// Results above one second set the out-of-range flag and write nothing;
    /// otherwise the flag is cleared and the period file written.
    ///
    /// The driver rejects a period smaller than the stored duty value. Set
    /// the duty to 100% first (stored space time 0) when shrinking the
    /// period, then restore the duty.
    pub fn set_period_time(&mut self, period: u64, unit: TimeUnit) -> bool {
        let write_this = units::to_nanoseconds(period, unit);

        if write_this > config::MAX_PERIOD_NS {
            self.flags.out_of_range = true;
            return false;
        }
        self.flags.out_of_range = false;

        Self::write_value(
            &self.period_path,
            &write_this.to_string(),
            &mut self.flags.period_file,
        )
    }

    /// Writes the space portion of the cycle directly to the duty file.
    ///
    /// Same conversion and range check as [`set_period_time`](Pwm::set_period_time),
    /// but a successful write leaves the out-of-range flag as it was; only
    /// the rejecting branch touches it.
    pub fn set_space_time(&mut self, space: u64, unit: TimeUnit) -> bool {
        let write_this = units::to_nanoseconds(space, unit);

        if write_this > config::MAX_PERIOD_NS {
            self.flags.out_of_range = true;
            return false;
        }

        Self::write_value(
            &self.duty_path,
            &write_this.to_string(),
            &mut self.flags.duty_file,
        )
    }

    /// Sets the load portion of the cycle: writes `period - load` as space
    /// time.
    ///
    /// The subtraction is signed and the result is reinterpreted unsigned,
    /// so a load exceeding the current period wraps to a huge value and
    /// trips the range check (out-of-range flag, no write, `false`). As with
    /// [`set_space_time`](Pwm::set_space_time), success does not clear the
    /// out-of-range flag.
    pub fn set_load_time(&mut self, load: u64, unit: TimeUnit) -> bool {
        let load_ns = units::to_nanoseconds(load, unit) as i64;
        let write_this = self.read_period_ns().wrapping_sub(load_ns) as u64;

        if write_this > config::MAX_PERIOD_NS {
            self.flags.out_of_range = true;
            return false;
        }

        Self::write_value(
            &self.duty_path,
            &write_this.to_string(),
            &mut self.flags.duty_file,
        )
    }

    /// Writes the polarity file.
    pub fn set_polarity(&mut self, polarity: Polarity) -> bool {
        Self::write_value(
            &self.polarity_path,
            &(polarity as u8).to_string(),
            &mut self.flags.polarity_file,
        )
    }

    /// Writes the run file.
    pub fn set_run_state(&mut self, state: RunState) -> bool {
        Self::write_value(
            &self.run_path,
            &(state as u8).to_string(),
            &mut self.flags.run_file,
        )
    }

    /// Reads the run file and writes the opposite state back.
    ///
    /// Unreadable run files read as not-`"1"` and therefore start the
    /// output; the flags record what happened.
    pub fn toggle_run_state(&mut self) {
        if self.read_run() == "1" {
            self.set_run_state(RunState::Stop);
        } else {
            self.set_run_state(RunState::Run);
        }
    }

    /// Reads the polarity file and writes the opposite polarity back.
    pub fn toggle_polarity(&mut self) {
        if self.read_polarity() == "0" {
            self.set_polarity(Polarity::Reverse);
        } else {
            self.set_polarity(Polarity::Straight);
        }
    }

    /// True if the run file reads `"1"`.
    pub fn is_running(&mut self) -> bool {
        self.read_run() == "1"
    }

    /// True unless the polarity file reads `"1"`, sentinel reads included.
    pub fn is_polarity_straight(&mut self) -> bool {
        self.read_polarity() != "1"
    }

    /// True if the polarity file reads `"1"`.
    pub fn is_polarity_reverse(&mut self) -> bool {
        self.read_polarity() == "1"
    }

    /// True if any flag is raised, discovery and overlay flags included.
    pub fn fail(&self) -> bool {
        self.flags.any()
    }

    /// Looks up a single flag.
    pub fn fail_flag(&self, flag: Flag) -> bool {
        self.flags.get(flag)
    }

    pub fn pin(&self) -> PwmPin {
        self.locator.pin()
    }

    pub fn platform(&self) -> &Platform {
        self.locator.platform()
    }

    fn read_text(path: &Path, flag: &mut bool) -> String {
        match sysfs::read_first_token(path) {
            Ok(token) => {
                *flag = false;
                token
            }
            Err(err) => {
                debug!("{err}");
                *flag = true;
                config::FILE_COULD_NOT_OPEN.to_string()
            }
        }
    }

    fn read_number(path: &Path, flag: &mut bool) -> i64 {
        match sysfs::read_first_token(path) {
            Ok(token) => {
                *flag = false;
                token.parse().unwrap_or(config::FILE_COULD_NOT_OPEN_INT)
            }
            Err(err) => {
                debug!("{err}");
                *flag = true;
                config::FILE_COULD_NOT_OPEN_INT
            }
        }
    }

    fn write_value(path: &Path, value: &str, flag: &mut bool) -> bool {
        match sysfs::write_text(path, value) {
            Ok(()) => {
                *flag = false;
                true
            }
            Err(err) => {
                debug!("{err}");
                *flag = true;
                false
            }
        }
    }
}
