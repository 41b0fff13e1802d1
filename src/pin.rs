use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
/// PWM-capable header pin of the BeagleBone Black.
///
/// Variant names follow the header silkscreen (`P<header>_<pin>`); the
/// associated constants give the same pins their am335x subsystem names.
#[allow(non_camel_case_types)]
pub enum PwmPin {
    P8_13,
    P8_19,
    P9_14,
    P9_16,
    P9_21,
    P9_22,
    P9_42,
}

impl PwmPin {
    /// Subsystem aliases for the header pins.
    pub const EHRPWM2B: PwmPin = PwmPin::P8_13;
    pub const EHRPWM2A: PwmPin = PwmPin::P8_19;
    pub const EHRPWM1A: PwmPin = PwmPin::P9_14;
    pub const EHRPWM1B: PwmPin = PwmPin::P9_16;
    pub const EHRPWM0B: PwmPin = PwmPin::P9_21;
    pub const EHRPWM0A: PwmPin = PwmPin::P9_22;
    pub const ECAP0: PwmPin = PwmPin::P9_42;

    /// Every PWM-capable pin, in header order.
    pub const ALL: [PwmPin; 7] = [
        PwmPin::P8_13,
        PwmPin::P8_19,
        PwmPin::P9_14,
        PwmPin::P9_16,
        PwmPin::P9_21,
        PwmPin::P9_22,
        PwmPin::P9_42,
    ];

    /// Header name as it appears in overlay tokens and sysfs entries.
    pub fn name(&self) -> &'static str {
        match self {
            PwmPin::P8_13 => "P8_13",
            PwmPin::P8_19 => "P8_19",
            PwmPin::P9_14 => "P9_14",
            PwmPin::P9_16 => "P9_16",
            PwmPin::P9_21 => "P9_21",
            PwmPin::P9_22 => "P9_22",
            PwmPin::P9_42 => "P9_42",
        }
    }
}

impl fmt::Display for PwmPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_header_labels() {
        assert_eq!(PwmPin::P8_13.name(), "P8_13");
        assert_eq!(PwmPin::P9_42.name(), "P9_42");
        assert_eq!(PwmPin::P9_21.to_string(), "P9_21");
    }

    #[test]
    fn test_subsystem_aliases_resolve_to_header_pins() {
        assert_eq!(PwmPin::EHRPWM2B, PwmPin::P8_13);
        assert_eq!(PwmPin::EHRPWM2A, PwmPin::P8_19);
        assert_eq!(PwmPin::EHRPWM1A, PwmPin::P9_14);
        assert_eq!(PwmPin::EHRPWM1B, PwmPin::P9_16);
        assert_eq!(PwmPin::EHRPWM0B, PwmPin::P9_21);
        assert_eq!(PwmPin::EHRPWM0A, PwmPin::P9_22);
        assert_eq!(PwmPin::ECAP0, PwmPin::P9_42);
    }

    #[test]
    fn test_all_lists_each_pin_once() {
        assert_eq!(PwmPin::ALL.len(), 7);
        for (i, a) in PwmPin::ALL.iter().enumerate() {
            for b in PwmPin::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
