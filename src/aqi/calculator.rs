//! Piecewise-linear index interpolation.

use super::{breakpoints, OutOfRangeError, Pollutant};

// ---

/// Compute the AQI sub-index for one pollutant concentration in µg/m³.
///
/// The concentration is first truncated to the pollutant's published reporting
/// precision (0.1 µg/m³ for PM2.5, 1 µg/m³ for PM10), which is what keeps
/// every finite value out of the gaps between adjacent breakpoint rows. The
/// enclosing row `(Clow, Chigh, Ilow, Ihigh)` then interpolates:
///
/// `index = round((Ihigh - Ilow) / (Chigh - Clow) * (C - Clow) + Ilow)`
///
/// with round-half-up, per the EPA convention. Pure function; the only failure
/// is an out-of-table concentration propagated from the table lookup.
pub fn compute_index(pollutant: Pollutant, concentration: f64) -> Result<i64, OutOfRangeError> {
    // ---
    let concentration = truncate_to_precision(pollutant, concentration);
    let row = breakpoints::lookup(pollutant, concentration)?;

    let index_span = (row.index_high - row.index_low) as f64;
    let fraction = (concentration - row.concentration_low)
        / (row.concentration_high - row.concentration_low);

    // f64::round is half-away-from-zero, which is half-up for the
    // non-negative values the table admits.
    Ok((index_span * fraction + row.index_low as f64).round() as i64)
}

/// Truncate to the precision the breakpoint table is published in.
///
/// Truncation, not rounding: EPA reporting drops the excess digits, so e.g.
/// PM2.5 12.05 belongs to the 0.0–12.0 row, not 12.1–35.4.
fn truncate_to_precision(pollutant: Pollutant, concentration: f64) -> f64 {
    match pollutant {
        Pollutant::Pm25 => (concentration * 10.0).trunc() / 10.0,
        Pollutant::Pm10 => concentration.trunc(),
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    // Reference values verified against the AirNow concentration calculator.
    #[test]
    fn pm25_reference_values() {
        // ---
        assert_eq!(compute_index(Pollutant::Pm25, 0.0), Ok(0));
        assert_eq!(compute_index(Pollutant::Pm25, 9.0), Ok(38));
        assert_eq!(compute_index(Pollutant::Pm25, 12.0), Ok(50));
        assert_eq!(compute_index(Pollutant::Pm25, 12.1), Ok(51));
        assert_eq!(compute_index(Pollutant::Pm25, 35.4), Ok(100));
        assert_eq!(compute_index(Pollutant::Pm25, 35.5), Ok(101));
        assert_eq!(compute_index(Pollutant::Pm25, 55.4), Ok(150));
        assert_eq!(compute_index(Pollutant::Pm25, 150.4), Ok(200));
        assert_eq!(compute_index(Pollutant::Pm25, 250.5), Ok(301));
        assert_eq!(compute_index(Pollutant::Pm25, 500.4), Ok(500));
    }

    #[test]
    fn pm10_reference_values() {
        // ---
        assert_eq!(compute_index(Pollutant::Pm10, 0.0), Ok(0));
        assert_eq!(compute_index(Pollutant::Pm10, 54.0), Ok(50));
        assert_eq!(compute_index(Pollutant::Pm10, 55.0), Ok(51));
        assert_eq!(compute_index(Pollutant::Pm10, 150.0), Ok(98));
        assert_eq!(compute_index(Pollutant::Pm10, 154.0), Ok(100));
        assert_eq!(compute_index(Pollutant::Pm10, 155.0), Ok(101));
        assert_eq!(compute_index(Pollutant::Pm10, 604.0), Ok(500));
    }

    #[test]
    fn concentrations_truncate_to_reporting_precision() {
        // ---
        // 12.05 truncates to 12.0 (top of Good), not up to 12.1 (Moderate).
        assert_eq!(compute_index(Pollutant::Pm25, 12.05), Ok(50));
        // 54.9 truncates to 54 (top of Good).
        assert_eq!(compute_index(Pollutant::Pm10, 54.9), Ok(50));
    }

    #[test]
    fn index_is_monotonic_within_each_row() {
        // ---
        for pollutant in [Pollutant::Pm25, Pollutant::Pm10] {
            for row in breakpoints::table(pollutant) {
                let mut previous = row.index_low;
                let steps = 40;
                for i in 0..=steps {
                    let c = row.concentration_low
                        + (row.concentration_high - row.concentration_low) * i as f64
                            / steps as f64;
                    let index = compute_index(pollutant, c).unwrap();
                    assert!(
                        index >= previous,
                        "{pollutant} index decreased at {c} ug/m3"
                    );
                    previous = index;
                }
            }
        }
    }

    #[test]
    fn indices_are_consecutive_across_row_joins() {
        // ---
        for pollutant in [Pollutant::Pm25, Pollutant::Pm10] {
            for pair in breakpoints::table(pollutant).windows(2) {
                let below = compute_index(pollutant, pair[0].concentration_high).unwrap();
                let above = compute_index(pollutant, pair[1].concentration_low).unwrap();
                assert_eq!(above, below + 1, "{pollutant} join is discontinuous");
            }
        }
    }

    #[test]
    fn out_of_table_concentrations_fail() {
        // ---
        assert!(compute_index(Pollutant::Pm25, -1.0).is_err());
        assert!(compute_index(Pollutant::Pm25, 600.0).is_err());
        assert!(compute_index(Pollutant::Pm10, 2000.0).is_err());
    }
}
