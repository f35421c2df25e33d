use std::fmt;

pub const METERS_PER_KM: f64 = 1000.0;

/// A great-circle distance in kilometers.
#[derive(Clone, Copy, PartialEq, PartialOrd, Default, Debug)]
pub struct Distance {
    kilometers: f64,
}

impl Distance {
    pub fn from_kilometers(kilometers: f64) -> Self {
        Distance { kilometers }
    }

    pub fn kilometers(&self) -> f64 {
        self.kilometers
    }

    pub fn meters(&self) -> f64 {
        self.kilometers * METERS_PER_KM
    }
}

/// Whole meters below 1 km, kilometers with two decimals from 1 km on.
impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kilometers < 1.0 {
            write!(f, "{} m", self.meters().round())
        } else {
            write!(f, "{:.2} km", round_ties_up(self.kilometers))
        }
    }
}

/// `{:.2}` rounds exact ties to even, display rounds them up instead.
///
/// A binary value sits exactly halfway between two hundredths only when it is an odd multiple of 1/8,
/// every other value is already formatted to the nearest hundredth.
fn round_ties_up(kilometers: f64) -> f64 {
    let eighths = kilometers * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        (kilometers * 100.0).round() / 100.0
    } else {
        kilometers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "0 m")]
    #[case(0.0004, "0 m")]
    #[case(0.0006, "1 m")]
    #[case(0.25, "250 m")]
    #[case(0.9994, "999 m")]
    #[case(1.0, "1.00 km")]
    #[case(1.11195, "1.11 km")]
    #[case(12.3456, "12.35 km")]
    #[case(1.125, "1.13 km")]
    #[case(2.125, "2.13 km")]
    #[case(10.125, "10.13 km")]
    #[case(1.375, "1.38 km")]
    #[case(1.005, "1.00 km")]
    #[case(2.675, "2.67 km")]
    #[case(20015.086796, "20015.09 km")]
    fn display_switches_units_at_one_kilometer(#[case] kilometers: f64, #[case] expected: &str) {
        assert_eq!(Distance::from_kilometers(kilometers).to_string(), expected);
    }

    #[test]
    fn display_renders_nan_as_kilometers() {
        assert_eq!(Distance::from_kilometers(f64::NAN).to_string(), "NaN km");
    }

    #[test]
    fn meters_converts_from_kilometers() {
        assert_eq!(Distance::from_kilometers(1.5).meters(), 1500.0);
    }
}
