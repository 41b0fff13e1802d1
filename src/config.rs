// ** DISCOVERY CONFIGURATION ** //

/// Root directory scanned for the volatile platform directories.
pub const DEVICES_ROOT: &str = "/sys/devices";
/// Directory-name prefix of the cape manager (kernel appends an allocation counter).
pub const CAPEMGR_PREFIX: &str = "bone_capemgr.";
/// Directory-name prefix of the on-chip-peripheral bus subtree.
pub const OCP_PREFIX: &str = "ocp.";
/// Suffix substituted when no `bone_capemgr.*` entry is found.
/// Stock 3.8.x images allocate `bone_capemgr.9`.
pub const DEFAULT_CAPEMGR_SUFFIX: &str = "9";
/// Suffix substituted when no `ocp.*` entry is found (`ocp.3` on stock images).
pub const DEFAULT_OCP_SUFFIX: &str = "3";

// ** OVERLAY CONFIGURATION ** //

/// Control file under the capemgr directory that accepts overlay identifiers.
pub const SLOTS_FILE: &str = "slots";
/// Overlay token that enables the PWM subsystem.
pub const PWM_SUBSYSTEM_OVERLAY: &str = "am33xx_pwm";
/// Prefix of the per-pin overlay token; the pin name (`P8_13`, ...) is appended.
pub const PIN_OVERLAY_PREFIX: &str = "bone_pwm_";

// ** OCP SEARCH PATTERNS ** //

/// Directory-name prefix of a pin's PWM driver instance under the ocp subtree.
pub const PWM_TEST_PREFIX: &str = "pwm_test_";
/// Directory-name pattern of the ADC helper under the ocp subtree.
pub const ADC_HELPER_PATTERN: &str = "helper.";
/// Pattern matched inside a SPI bus master directory.
pub const SPI_PATTERN: &str = "spi";
/// Fixed pinmux identifier of the SPI0 bus (am335x base address).
pub const SPI0_PINMUX: &str = "48030000";
/// Fixed pinmux identifier of the SPI1 bus.
pub const SPI1_PINMUX: &str = "481a0000";
/// Subdirectory below `<pinmux>.spi/` that holds the bus master entry.
pub const SPI_MASTER_SUBDIR: &str = "spi_master";

// ** CONTROL FILES ** //

pub const PERIOD_FILE: &str = "period";
pub const DUTY_FILE: &str = "duty";
pub const RUN_FILE: &str = "run";
pub const POLARITY_FILE: &str = "polarity";
/// Longest period the driver accepts, in nanoseconds (one second).
pub const MAX_PERIOD_NS: u64 = 1_000_000_000;

// ** SENTINELS ** //
//
// Sentinel returns are indistinguishable from legitimate file content unless
// the caller also checks the error flags. They are single tokens so a text
// read can surface them unmangled.

/// Returned by directory searches when no entry matches or the directory
/// cannot be opened.
pub const SEARCH_DIR_NOT_FOUND: &str = "SearchDirectoryNotFound";
/// Path segment substituted when the pin's `pwm_test_*` directory is missing.
pub const PWM_TEST_NOT_FOUND: &str = "PwmTestNotFound";
/// Returned by text reads when the control file cannot be opened.
pub const FILE_COULD_NOT_OPEN: &str = "FileCouldNotOpen";
/// Returned by numeric reads when the control file cannot be opened
/// (also substituted when the content does not parse as an integer).
pub const FILE_COULD_NOT_OPEN_INT: i64 = -1;
