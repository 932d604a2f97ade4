//! Half-open time-interval intersection.

use chrono::NaiveTime;

/// Returns true when the half-open intervals `[start_a, end_a)` and
/// `[start_b, end_b)` intersect.
///
/// Both intervals are wall-clock times on a common day. Touching endpoints
/// never count as overlap: a shift ending at 10:00 does not conflict with a
/// class starting at 10:00.
///
/// Callers guarantee `start < end` for each interval.
#[must_use]
pub fn overlaps(
    start_a: NaiveTime,
    end_a: NaiveTime,
    start_b: NaiveTime,
    end_b: NaiveTime,
) -> bool {
    start_a < end_b && start_b < end_a
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn partial_overlap_is_detected() {
        assert!(overlaps(time(9, 0), time(11, 0), time(10, 30), time(12, 0)));
    }

    #[test]
    fn containment_is_overlap() {
        assert!(overlaps(time(9, 0), time(12, 0), time(10, 0), time(11, 0)));
        assert!(overlaps(time(10, 0), time(11, 0), time(9, 0), time(12, 0)));
    }

    #[test]
    fn identical_intervals_overlap() {
        assert!(overlaps(time(9, 0), time(10, 0), time(9, 0), time(10, 0)));
    }

    #[test]
    fn touching_endpoints_do_not_overlap() {
        assert!(!overlaps(time(9, 0), time(10, 0), time(10, 0), time(11, 0)));
        assert!(!overlaps(time(10, 0), time(11, 0), time(9, 0), time(10, 0)));
    }

    #[test]
    fn disjoint_intervals_do_not_overlap() {
        assert!(!overlaps(time(9, 0), time(10, 0), time(13, 0), time(14, 0)));
    }

    #[test]
    fn overlap_is_symmetric() {
        let samples = [
            (time(9, 0), time(11, 0), time(10, 30), time(12, 0)),
            (time(9, 0), time(10, 0), time(10, 0), time(11, 0)),
            (time(8, 0), time(9, 0), time(20, 0), time(21, 0)),
            (time(0, 0), time(23, 59), time(12, 0), time(12, 1)),
        ];
        for (a, b, c, d) in samples {
            assert_eq!(overlaps(a, b, c, d), overlaps(c, d, a, b));
        }
    }
}
