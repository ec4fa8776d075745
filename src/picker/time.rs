//! Calendar arithmetic on picker values.
//!
//! Values are whole-second `DateTime<FixedOffset>`s. Setting a field goes
//! through the same normalization a "date from components" constructor
//! applies, so out-of-range combinations roll over instead of failing:
//! month 0 is December of the previous year, Feb 31 lands in early March,
//! hour 24 is midnight of the following day.

use chrono::{
    DateTime, Datelike, Days, FixedOffset, NaiveDate, SubsecRound, TimeDelta, TimeZone,
    Timelike,
};

use super::Component;

/// A picker value: a timestamp with a fixed UTC offset.
pub type PickerValue = DateTime<FixedOffset>;

/// Drop sub-second precision.
pub fn truncate_to_seconds(t: PickerValue) -> PickerValue {
    t.trunc_subsecs(0)
}

/// Inclusive bounds; a missing side is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    min: Option<PickerValue>,
    max: Option<PickerValue>,
}

impl Bounds {
    /// Create bounds, truncating both sides to whole seconds.
    pub fn new(min: Option<PickerValue>, max: Option<PickerValue>) -> Self {
        Self {
            min: min.map(truncate_to_seconds),
            max: max.map(truncate_to_seconds),
        }
    }

    pub fn min(&self) -> Option<PickerValue> {
        self.min
    }

    pub fn max(&self) -> Option<PickerValue> {
        self.max
    }

    /// Constrain `t` into the bounds. The lower bound is checked first.
    pub fn clamp(&self, t: PickerValue) -> PickerValue {
        match (self.min, self.max) {
            (Some(min), _) if t < min => min,
            (_, Some(max)) if t > max => max,
            _ => t,
        }
    }
}

/// Add `n` calendar units of `component` to `t`.
///
/// Months and years keep the day of month and roll over when the target
/// month is shorter (Jan 31 + 1 month is Mar 2 in a leap year). A result
/// outside chrono's representable range leaves `t` unchanged.
pub fn add_component(t: PickerValue, component: Component, n: i32) -> PickerValue {
    let magnitude = n.unsigned_abs();
    let result = match component {
        Component::None => Some(t),
        Component::Year => step_calendar(t, i64::from(n), 0),
        Component::Month => step_calendar(t, 0, i64::from(n)),
        Component::Day => {
            let days = Days::new(u64::from(magnitude));
            if n >= 0 {
                t.checked_add_days(days)
            } else {
                t.checked_sub_days(days)
            }
        }
        Component::Hour => t.checked_add_signed(TimeDelta::hours(i64::from(n))),
        Component::Minute => t.checked_add_signed(TimeDelta::minutes(i64::from(n))),
        Component::Second => t.checked_add_signed(TimeDelta::seconds(i64::from(n))),
    };
    result.unwrap_or(t)
}

fn step_calendar(t: PickerValue, years: i64, months: i64) -> Option<PickerValue> {
    from_components(
        *t.offset(),
        i64::from(t.year()) + years,
        i64::from(t.month()) + months,
        i64::from(t.day()),
        i64::from(t.hour()),
        i64::from(t.minute()),
        i64::from(t.second()),
    )
}

/// Overwrite one field of `t` with `value`, normalizing the result.
pub fn set_component(t: PickerValue, component: Component, value: u32) -> PickerValue {
    let value = i64::from(value);
    let mut year = i64::from(t.year());
    let mut month = i64::from(t.month());
    let mut day = i64::from(t.day());
    let mut hour = i64::from(t.hour());
    let mut minute = i64::from(t.minute());
    let mut second = i64::from(t.second());

    match component {
        Component::None => {}
        Component::Year => year = value,
        Component::Month => month = value,
        Component::Day => day = value,
        Component::Hour => hour = value,
        Component::Minute => minute = value,
        Component::Second => second = value,
    }

    from_components(*t.offset(), year, month, day, hour, minute, second).unwrap_or(t)
}

fn from_components(
    offset: FixedOffset,
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
) -> Option<PickerValue> {
    let months = year.checked_mul(12)?.checked_add(month - 1)?;
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    let month = u32::try_from(months.rem_euclid(12)).ok()? + 1;

    let offset_secs = (day - 1) * 86_400 + hour * 3_600 + minute * 60 + second;
    let naive = NaiveDate::from_ymd_opt(year, month, 1)?
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(TimeDelta::try_seconds(offset_secs)?)?;

    offset.from_local_datetime(&naive).single()
}

/// Numeric value of a field, for display.
pub fn component_value(t: &PickerValue, component: Component) -> i64 {
    match component {
        Component::None => 0,
        Component::Year => i64::from(t.year()),
        Component::Month => i64::from(t.month()),
        Component::Day => i64::from(t.day()),
        Component::Hour => i64::from(t.hour()),
        Component::Minute => i64::from(t.minute()),
        Component::Second => i64::from(t.second()),
    }
}
