//! Primary pollutant selection.

use super::Pollutant;

// ---

/// Pick the pollutant with the highest sub-index.
///
/// Ties break by the fixed priority encoded in [`Pollutant`]'s declaration
/// order (PM2.5 before PM10), never by input order, so the order pollutants
/// were queried in cannot change the reported primary. Returns `None` only for
/// an empty input.
pub fn primary_pollutant(
    indices: impl IntoIterator<Item = (Pollutant, i64)>,
) -> Option<(Pollutant, i64)> {
    // ---
    let mut best: Option<(Pollutant, i64)> = None;
    for (pollutant, index) in indices {
        best = match best {
            Some((_, top)) if index < top => best,
            Some((leader, top)) if index == top && leader < pollutant => best,
            _ => Some((pollutant, index)),
        };
    }
    best
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::aqi::Pollutant::{Pm10, Pm25};

    #[test]
    fn highest_index_wins() {
        // ---
        assert_eq!(
            primary_pollutant([(Pm25, 80), (Pm10, 45)]),
            Some((Pm25, 80))
        );
        assert_eq!(
            primary_pollutant([(Pm25, 12), (Pm10, 130)]),
            Some((Pm10, 130))
        );
    }

    #[test]
    fn ties_resolve_to_pm25_regardless_of_order() {
        // ---
        assert_eq!(
            primary_pollutant([(Pm25, 75), (Pm10, 75)]),
            Some((Pm25, 75))
        );
        assert_eq!(
            primary_pollutant([(Pm10, 75), (Pm25, 75)]),
            Some((Pm25, 75))
        );
    }

    #[test]
    fn empty_input_has_no_primary() {
        // ---
        assert_eq!(primary_pollutant([]), None);
    }
}
