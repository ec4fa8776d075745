//! Editable date/time fields and their entry limits.

/// One editable field of the picker, in display order.
///
/// `None` is the "nothing focused" sentinel used before editing starts and
/// for the final render after the prompt has been answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Component {
    #[default]
    None,
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// Largest value and number of digits accepted for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
    pub max_value: u32,
    pub max_digits: usize,
}

impl Component {
    /// The six editable fields, left to right.
    pub const FIELDS: [Component; 6] = [
        Component::Year,
        Component::Month,
        Component::Day,
        Component::Hour,
        Component::Minute,
        Component::Second,
    ];

    /// Entry limits for the field, or None for the sentinel.
    ///
    /// Day is a plain 1..31 range; month length is not consulted.
    pub fn limits(self) -> Option<FieldLimits> {
        let (max_value, max_digits) = match self {
            Component::None => return None,
            Component::Year => (9999, 4),
            Component::Month => (12, 2),
            Component::Day => (31, 2),
            Component::Hour => (24, 2),
            Component::Minute | Component::Second => (59, 2),
        };
        Some(FieldLimits {
            max_value,
            max_digits,
        })
    }

    /// Rendered width of the field
    pub fn width(self) -> usize {
        match self {
            Component::Year => 4,
            Component::None => 0,
            _ => 2,
        }
    }

    /// Field to the right, stopping at `Second`.
    pub fn next(self) -> Self {
        match self {
            Component::None => Component::None,
            Component::Year => Component::Month,
            Component::Month => Component::Day,
            Component::Day => Component::Hour,
            Component::Hour => Component::Minute,
            Component::Minute | Component::Second => Component::Second,
        }
    }

    /// Field to the left, stopping at `Year`.
    pub fn prev(self) -> Self {
        match self {
            Component::None => Component::None,
            Component::Year | Component::Month => Component::Year,
            Component::Day => Component::Month,
            Component::Hour => Component::Day,
            Component::Minute => Component::Hour,
            Component::Second => Component::Minute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_stops_at_edges() {
        assert_eq!(Component::Year.prev(), Component::Year);
        assert_eq!(Component::Second.next(), Component::Second);
        assert_eq!(Component::Hour.next(), Component::Minute);
        assert_eq!(Component::Hour.prev(), Component::Day);
    }

    #[test]
    fn test_walk_right_visits_every_field() {
        let mut c = Component::Year;
        let mut seen = vec![c];
        while c != Component::Second {
            c = c.next();
            seen.push(c);
        }
        assert_eq!(seen, Component::FIELDS.to_vec());
    }

    #[test]
    fn test_limits() {
        assert_eq!(
            Component::Year.limits(),
            Some(FieldLimits { max_value: 9999, max_digits: 4 })
        );
        assert_eq!(Component::Hour.limits().map(|l| l.max_value), Some(24));
        assert_eq!(Component::Day.limits().map(|l| l.max_value), Some(31));
        assert!(Component::None.limits().is_none());
    }

    #[test]
    fn test_ordering_matches_display_order() {
        assert!(Component::None < Component::Year);
        assert!(Component::Year < Component::Second);
        assert_eq!(Component::default(), Component::None);
    }
}
