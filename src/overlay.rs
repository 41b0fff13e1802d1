use std::path::PathBuf;

use log::{debug, warn};

use crate::config;
use crate::error::ErrorFlags;
use crate::pin::PwmPin;
use crate::platform::{OcpTarget, Platform};

// Use the real sysfs tree in production
#[cfg(not(test))]
use crate::sysfs;

// Mock filesystem for testing
#[cfg(test)]
use crate::mocks::mock_sysfs as sysfs;

/// Loads the PWM overlays for one pin and resolves its pwm_test directory.
#[derive(Debug, Clone)]
pub(crate) struct OverlayLocator {
    platform: Platform,
    pin: PwmPin,
}

impl OverlayLocator {
    /// Requests the subsystem and pin overlays through the slots file.
    ///
    /// Construction always succeeds; failed writes are recorded in `flags`
    /// and the locator stays usable in its degraded form.
    pub(crate) fn new(platform: Platform, pin: PwmPin, flags: &mut ErrorFlags) -> OverlayLocator {
        let locator = OverlayLocator { platform, pin };
        locator.load_overlays(flags);
        locator
    }

    /// Kernel loads are idempotent, so requesting an already-loaded overlay
    /// is harmless. The pin overlay is only attempted once the subsystem
    /// overlay went through.
    fn load_overlays(&self, flags: &mut ErrorFlags) {
        let slots = self.platform.slots_path();

        debug!(
            "requesting overlay {} via {}",
            config::PWM_SUBSYSTEM_OVERLAY,
            slots.display()
        );
        if let Err(err) = sysfs::write_text(slots, config::PWM_SUBSYSTEM_OVERLAY) {
            warn!("pwm subsystem overlay failed: {err}");
            flags.pwm_subsystem = true;
            flags.device_tree = true;
            return;
        }
        flags.pwm_subsystem = false;

        let pin_overlay = format!("{}{}", config::PIN_OVERLAY_PREFIX, self.pin.name());
        debug!("requesting overlay {} via {}", pin_overlay, slots.display());
        match sysfs::write_text(slots, &pin_overlay) {
            Err(err) => {
                warn!("pin overlay {pin_overlay} failed: {err}");
                flags.device_tree = true;
            }
            Ok(()) => {
                flags.device_tree = false;
            }
        }
    }

    /// Resolves `/sys/devices/<ocp>/pwm_test_<pin>.<N>`.
    ///
    /// On a miss the `PwmTestNotFound` segment is joined in anyway; the
    /// resulting path fails at every file operation, which keeps a degraded
    /// handle observable through the per-file flags.
    pub(crate) fn locate_test_dir(&self, flags: &mut ErrorFlags) -> PathBuf {
        let found = self.platform.find_in_ocp(OcpTarget::Pwm(self.pin));
        let segment = if found == config::SEARCH_DIR_NOT_FOUND {
            warn!(
                "no {}{}.* under {}",
                config::PWM_TEST_PREFIX,
                self.pin.name(),
                self.platform.ocp_path().display()
            );
            flags.pwm_test = true;
            config::PWM_TEST_NOT_FOUND.to_string()
        } else {
            flags.pwm_test = false;
            found
        };
        self.platform.ocp_path().join(segment)
    }

    pub(crate) fn platform(&self) -> &Platform {
        &self.platform
    }

    pub(crate) fn pin(&self) -> PwmPin {
        self.pin
    }
}
