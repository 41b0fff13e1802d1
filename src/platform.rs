use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config;
use crate::pin::PwmPin;

// Use the real sysfs tree in production
#[cfg(not(test))]
use crate::sysfs;

// Mock filesystem for testing
#[cfg(test)]
use crate::mocks::mock_sysfs as sysfs;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Entry searched for below the ocp directory.
///
/// The SPI selectors descend into the fixed `<pinmux>.spi/spi_master/`
/// subtree first; everything else is matched directly under the ocp
/// directory.
pub enum OcpTarget {
    AdcHelper,
    Pwm(PwmPin),
    Spi0,
    Spi1,
}

/// Kernel-allocated platform directory names, resolved once per process.
///
/// The capemgr and ocp directories carry an allocation counter in their
/// names (`bone_capemgr.9`, `ocp.3`) that varies between boots, so both are
/// discovered by scanning `/sys/devices`. Discovery failure substitutes the
/// stock-image name and raises the matching flag; the platform is still
/// usable, every later file operation will just fail visibly.
///
/// Resolve one `Platform` and pass it to each [`Pwm`](crate::pwm::Pwm)
/// constructor instead of re-scanning per pin.
#[derive(Debug, Clone)]
pub struct Platform {
    capemgr_name: String,
    ocp_name: String,
    slots_path: PathBuf,
    capemgr_err: bool,
    ocp_err: bool,
}

impl Platform {
    /// Scans `/sys/devices` for the capemgr and ocp directories.
    pub fn discover() -> Platform {
        let root = Path::new(config::DEVICES_ROOT);

        let (capemgr_name, capemgr_err) = match sysfs::find_entry(root, config::CAPEMGR_PREFIX) {
            Some(name) => (name, false),
            None => {
                let fallback =
                    format!("{}{}", config::CAPEMGR_PREFIX, config::DEFAULT_CAPEMGR_SUFFIX);
                warn!(
                    "no capemgr entry under {}, assuming {}",
                    config::DEVICES_ROOT,
                    fallback
                );
                (fallback, true)
            }
        };

        let (ocp_name, ocp_err) = match sysfs::find_entry(root, config::OCP_PREFIX) {
            Some(name) => (name, false),
            None => {
                let fallback = format!("{}{}", config::OCP_PREFIX, config::DEFAULT_OCP_SUFFIX);
                warn!(
                    "no ocp entry under {}, assuming {}",
                    config::DEVICES_ROOT,
                    fallback
                );
                (fallback, true)
            }
        };

        debug!("platform resolved: capemgr={capemgr_name} ocp={ocp_name}");

        let slots_path = root.join(&capemgr_name).join(config::SLOTS_FILE);

        Platform {
            capemgr_name,
            ocp_name,
            slots_path,
            capemgr_err,
            ocp_err,
        }
    }

    pub fn capemgr_name(&self) -> &str {
        &self.capemgr_name
    }

    pub fn ocp_name(&self) -> &str {
        &self.ocp_name
    }

    /// Path of the overlay control file under the capemgr directory.
    pub fn slots_path(&self) -> &Path {
        &self.slots_path
    }

    /// True if the capemgr name is the fallback rather than a discovery.
    pub fn capemgr_failed(&self) -> bool {
        self.capemgr_err
    }

    /// True if the ocp name is the fallback rather than a discovery.
    pub fn ocp_failed(&self) -> bool {
        self.ocp_err
    }

    /// True if either platform directory had to fall back.
    pub fn fail(&self) -> bool {
        self.capemgr_err || self.ocp_err
    }

    pub(crate) fn ocp_path(&self) -> PathBuf {
        Path::new(config::DEVICES_ROOT).join(&self.ocp_name)
    }

    /// Searches the ocp subtree for `target` and returns the entry name,
    /// or [`SEARCH_DIR_NOT_FOUND`](config::SEARCH_DIR_NOT_FOUND) on a miss.
    ///
    /// The PWM pattern carries a trailing dot (`pwm_test_P8_13.`) so a pin
    /// name that prefixes another pin name cannot match the wrong entry.
    pub fn find_in_ocp(&self, target: OcpTarget) -> String {
        let (dir, pattern) = match target {
            OcpTarget::AdcHelper => (self.ocp_path(), config::ADC_HELPER_PATTERN.to_string()),
            OcpTarget::Pwm(pin) => (
                self.ocp_path(),
                format!("{}{}.", config::PWM_TEST_PREFIX, pin.name()),
            ),
            OcpTarget::Spi0 => (
                self.spi_master_path(config::SPI0_PINMUX),
                config::SPI_PATTERN.to_string(),
            ),
            OcpTarget::Spi1 => (
                self.spi_master_path(config::SPI1_PINMUX),
                config::SPI_PATTERN.to_string(),
            ),
        };

        match sysfs::find_entry(&dir, &pattern) {
            Some(name) => name,
            None => config::SEARCH_DIR_NOT_FOUND.to_string(),
        }
    }

    fn spi_master_path(&self, pinmux: &str) -> PathBuf {
        self.ocp_path()
            .join(format!("{pinmux}.spi"))
            .join(config::SPI_MASTER_SUBDIR)
    }
}
