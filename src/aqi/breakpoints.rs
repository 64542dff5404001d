//! Static EPA breakpoint tables for PM2.5 and PM10.
//!
//! The numeric boundaries are the published EPA 24-hour breakpoints, encoded
//! here as fixed reference data rather than derived logic. Each table
//! partitions its pollutant's covered concentration span into contiguous,
//! ascending rows; the tables are never mutated at runtime.

use super::{OutOfRangeError, Pollutant};

// ---

/// One row of a pollutant's breakpoint table: a concentration range and the
/// index range it interpolates into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub concentration_low: f64,
    pub concentration_high: f64,
    pub index_low: i64,
    pub index_high: i64,
}

const fn bp(
    concentration_low: f64,
    concentration_high: f64,
    index_low: i64,
    index_high: i64,
) -> Breakpoint {
    Breakpoint {
        concentration_low,
        concentration_high,
        index_low,
        index_high,
    }
}

/// PM2.5 breakpoints in µg/m³, reported to one decimal place.
static PM25_BREAKPOINTS: [Breakpoint; 7] = [
    bp(0.0, 12.0, 0, 50),      // Good
    bp(12.1, 35.4, 51, 100),   // Moderate
    bp(35.5, 55.4, 101, 150),  // Unhealthy for Sensitive Groups
    bp(55.5, 150.4, 151, 200), // Unhealthy
    bp(150.5, 250.4, 201, 300), // Very Unhealthy
    bp(250.5, 350.4, 301, 400), // Hazardous
    bp(350.5, 500.4, 401, 500), // Hazardous
];

/// PM10 breakpoints in µg/m³, reported as whole numbers.
static PM10_BREAKPOINTS: [Breakpoint; 7] = [
    bp(0.0, 54.0, 0, 50),
    bp(55.0, 154.0, 51, 100),
    bp(155.0, 254.0, 101, 150),
    bp(255.0, 354.0, 151, 200),
    bp(355.0, 424.0, 201, 300),
    bp(425.0, 504.0, 301, 400),
    bp(505.0, 604.0, 401, 500),
];

// ---

/// Table for one pollutant.
pub fn table(pollutant: Pollutant) -> &'static [Breakpoint] {
    match pollutant {
        Pollutant::Pm25 => &PM25_BREAKPOINTS,
        Pollutant::Pm10 => &PM10_BREAKPOINTS,
    }
}

/// Find the breakpoint row enclosing `concentration`.
///
/// The concentration must already be truncated to the pollutant's reporting
/// precision; see [`super::compute_index`]. Negative values and values above
/// the table's top row fail with [`OutOfRangeError`] rather than clamping, so
/// out-of-table sensor data is surfaced instead of silently capped.
pub fn lookup(
    pollutant: Pollutant,
    concentration: f64,
) -> Result<&'static Breakpoint, OutOfRangeError> {
    // ---
    table(pollutant)
        .iter()
        .find(|row| {
            concentration >= row.concentration_low && concentration <= row.concentration_high
        })
        .ok_or(OutOfRangeError::Concentration {
            pollutant,
            ug_per_m3: concentration,
        })
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn tables_are_contiguous_and_ascending() {
        // ---
        for pollutant in [Pollutant::Pm25, Pollutant::Pm10] {
            for pair in table(pollutant).windows(2) {
                let (lower, upper) = (&pair[0], &pair[1]);

                assert!(lower.concentration_high < upper.concentration_low);
                assert_eq!(
                    upper.index_low,
                    lower.index_high + 1,
                    "{pollutant} index ranges must join without gaps"
                );
            }
        }
    }

    #[test]
    fn lookup_finds_enclosing_row() {
        // ---
        let row = lookup(Pollutant::Pm25, 20.0).unwrap();
        assert_eq!(row.index_low, 51);
        assert_eq!(row.index_high, 100);

        let row = lookup(Pollutant::Pm10, 400.0).unwrap();
        assert_eq!(row.index_low, 201);
    }

    #[test]
    fn lookup_accepts_boundary_values() {
        // ---
        assert_eq!(lookup(Pollutant::Pm25, 0.0).unwrap().index_low, 0);
        assert_eq!(lookup(Pollutant::Pm25, 12.0).unwrap().index_high, 50);
        assert_eq!(lookup(Pollutant::Pm25, 12.1).unwrap().index_low, 51);
        assert_eq!(lookup(Pollutant::Pm25, 500.4).unwrap().index_high, 500);
        assert_eq!(lookup(Pollutant::Pm10, 604.0).unwrap().index_high, 500);
    }

    #[test]
    fn lookup_rejects_out_of_table_concentrations() {
        // ---
        for (pollutant, concentration) in [
            (Pollutant::Pm25, -0.1),
            (Pollutant::Pm25, 600.0),
            (Pollutant::Pm10, -5.0),
            (Pollutant::Pm10, 605.0),
        ] {
            assert_eq!(
                lookup(pollutant, concentration),
                Err(OutOfRangeError::Concentration {
                    pollutant,
                    ug_per_m3: concentration,
                })
            );
        }
    }
}
