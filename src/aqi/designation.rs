//! Health designations for index ranges.

use std::fmt;

use super::OutOfRangeError;

// ---

/// EPA health category. Ranges partition the non-negative indices with no
/// gaps; Hazardous is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Designation {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl Designation {
    /// Label as published by the EPA and reported in the API's `level` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Designation::Good => "Good",
            Designation::Moderate => "Moderate",
            Designation::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Designation::Unhealthy => "Unhealthy",
            Designation::VeryUnhealthy => "Very Unhealthy",
            Designation::Hazardous => "Hazardous",
        }
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an index to its health category.
///
/// A negative index cannot come out of the calculator, but indices may arrive
/// from any caller, so the boundary is checked here rather than assumed.
pub fn designate(index: i64) -> Result<Designation, OutOfRangeError> {
    // ---
    match index {
        i64::MIN..=-1 => Err(OutOfRangeError::Index(index)),
        0..=50 => Ok(Designation::Good),
        51..=100 => Ok(Designation::Moderate),
        101..=150 => Ok(Designation::UnhealthyForSensitiveGroups),
        151..=200 => Ok(Designation::Unhealthy),
        201..=300 => Ok(Designation::VeryUnhealthy),
        _ => Ok(Designation::Hazardous),
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn range_boundaries() {
        // ---
        let boundaries = [
            (0, Designation::Good),
            (50, Designation::Good),
            (51, Designation::Moderate),
            (100, Designation::Moderate),
            (101, Designation::UnhealthyForSensitiveGroups),
            (150, Designation::UnhealthyForSensitiveGroups),
            (151, Designation::Unhealthy),
            (200, Designation::Unhealthy),
            (201, Designation::VeryUnhealthy),
            (300, Designation::VeryUnhealthy),
            (301, Designation::Hazardous),
            (500, Designation::Hazardous),
        ];
        for (index, expected) in boundaries {
            assert_eq!(designate(index), Ok(expected), "index {index}");
        }
    }

    #[test]
    fn top_range_is_unbounded() {
        // ---
        assert_eq!(designate(501), Ok(Designation::Hazardous));
        assert_eq!(designate(10_000), Ok(Designation::Hazardous));
    }

    #[test]
    fn every_non_negative_index_has_exactly_one_category() {
        // ---
        let mut previous = designate(0).unwrap();
        let mut transitions = 0;
        for index in 1..=600 {
            let current = designate(index).unwrap();
            if current != previous {
                transitions += 1;
                previous = current;
            }
        }
        // Five category changes across 0..=600: one per boundary.
        assert_eq!(transitions, 5);
    }

    #[test]
    fn negative_index_is_rejected() {
        // ---
        assert_eq!(designate(-1), Err(OutOfRangeError::Index(-1)));
        assert_eq!(designate(i64::MIN), Err(OutOfRangeError::Index(i64::MIN)));
    }
}
