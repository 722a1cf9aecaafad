//! Wildcard expansion over the Calendar Round cycle.

use tracing::debug;

use crate::calendar_round::CalendarRound;
use crate::iter::cycle;

/// Expands a partial Calendar Round into every concrete position
/// consistent with it.
///
/// Scans the full 18,980-day cycle and retains the positions that
/// [`CalendarRound::matches`] the pattern, in ordinal order from the
/// origin. A fully concrete pattern yields exactly one result; a fully
/// wildcard pattern yields the whole cycle.
pub fn expand_calendar_round(pattern: CalendarRound) -> Vec<CalendarRound> {
    let matches: Vec<CalendarRound> = cycle().filter(|cr| pattern.matches(*cr)).collect();
    debug!(pattern = %pattern, count = matches.len(), "expanded calendar round pattern");
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(s: &str) -> CalendarRound {
        s.parse().unwrap()
    }

    #[test]
    fn concrete_pattern_yields_itself() {
        let cr = round("4 Ajaw 8 Kumk'u");
        assert_eq!(expand_calendar_round(cr), vec![cr]);
    }

    #[test]
    fn coefficient_wildcard_cardinality() {
        // "* Ajaw 8 Kumk'u": Ajaw recurs every 20 days, 8 Kumk'u every
        // 365; lcm(20, 365) = 1460, so the cycle holds 18980/1460 = 13
        // such days, one per tzolkin coefficient.
        let hits = expand_calendar_round(round("* Ajaw 8 Kumk'u"));
        assert_eq!(hits.len(), 13);
        for cr in &hits {
            assert!(!cr.is_partial());
            assert_eq!(cr.haab().to_string(), "8 Kumk'u");
        }
    }

    #[test]
    fn day_wildcard_cardinality() {
        // "4 * 8 Kumk'u": fixing the tzolkin coefficient (13-cycle) and
        // the haab day (365-cycle) leaves lcm(13, 365) = 4745, so
        // 18980/4745 = 4 matches.
        let hits = expand_calendar_round(round("4 * 8 Kumk'u"));
        assert_eq!(hits.len(), 4);
        assert!(hits.contains(&round("4 Ajaw 8 Kumk'u")));
    }

    #[test]
    fn fully_wildcard_pattern_yields_whole_cycle() {
        let hits = expand_calendar_round(round("* * * *"));
        assert_eq!(hits.len(), 18_980);
    }

    #[test]
    fn results_are_in_ordinal_order() {
        let hits = expand_calendar_round(round("* Ajaw * Kumk'u"));
        assert!(!hits.is_empty());
        for w in hits.windows(2) {
            assert!(w[0].ordinal().unwrap() < w[1].ordinal().unwrap());
        }
    }

    #[test]
    fn wayeb_pattern_narrows_to_single_day() {
        // Ajaw forces haab coefficient 3 (mod 5); within Wayeb only
        // coefficient 3 qualifies, and 13 Ajaw 3 Wayeb occurs once per
        // supercycle.
        let hits = expand_calendar_round(round("13 Ajaw * Wayeb"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].to_string(), "13 Ajaw 3 Wayeb");
    }
}
