#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Unit of a time argument passed to the period and ratio setters.
///
/// The discriminant is the decimal exponent of the unit relative to one
/// second, so the nanosecond scale factor is `10^(unit + 9)`.
#[repr(i32)]
pub enum TimeUnit {
    Picosecond = -12,
    Nanosecond = -9,
    Microsecond = -6,
    Millisecond = -3,
    Second = 0,
}

/// Scales `value` from `unit` into nanoseconds.
///
/// The scaling runs through `f64`, matching the driver interface which
/// takes whole nanoseconds; sub-nanosecond remainders truncate.
pub(crate) fn to_nanoseconds(value: u64, unit: TimeUnit) -> u64 {
    (value as f64 * 10f64.powi(unit as i32 + 9)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nanoseconds_pass_through() {
        assert_eq!(to_nanoseconds(42, TimeUnit::Nanosecond), 42);
        assert_eq!(to_nanoseconds(0, TimeUnit::Nanosecond), 0);
    }

    #[test]
    fn test_scaling_up_to_nanoseconds() {
        assert_eq!(to_nanoseconds(67, TimeUnit::Microsecond), 67_000);
        assert_eq!(to_nanoseconds(5, TimeUnit::Millisecond), 5_000_000);
        assert_eq!(to_nanoseconds(1, TimeUnit::Second), 1_000_000_000);
    }

    #[test]
    fn test_picoseconds_scale_down() {
        assert_eq!(to_nanoseconds(300_000_000, TimeUnit::Picosecond), 300_000);
    }

    #[test]
    fn test_sub_nanosecond_truncates() {
        assert_eq!(to_nanoseconds(1, TimeUnit::Picosecond), 0);
        assert_eq!(to_nanoseconds(999, TimeUnit::Picosecond), 0);
    }
}
