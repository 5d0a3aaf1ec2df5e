//! Relative "time ago" rendering in Brazilian Portuguese.

use chrono::{DateTime, Datelike, Months, Utc};

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;

#[derive(Debug, Clone, Copy)]
enum Unit {
    FewSeconds,
    Minute,
    Minutes,
    Hour,
    Hours,
    Day,
    Days,
    Month,
    Months,
    Year,
    Years,
}

struct Threshold {
    unit: Unit,
    /// Largest rounded amount still rendered with this unit
    max: Option<f64>,
    measure: Measure,
}

#[derive(Debug, Clone, Copy)]
enum Measure {
    /// Elapsed seconds divided by this many seconds
    Seconds(f64),
    /// Calendar months divided by this many months
    Months(f64),
    /// Reuse the previous amount
    Previous,
}

#[rustfmt::skip]
const THRESHOLDS: [Threshold; 11] = [
    Threshold { unit: Unit::FewSeconds, max: Some(44.0), measure: Measure::Seconds(1.0) },
    Threshold { unit: Unit::Minute, max: Some(89.0), measure: Measure::Previous },
    Threshold { unit: Unit::Minutes, max: Some(44.0), measure: Measure::Seconds(MINUTE) },
    Threshold { unit: Unit::Hour, max: Some(89.0), measure: Measure::Previous },
    Threshold { unit: Unit::Hours, max: Some(21.0), measure: Measure::Seconds(HOUR) },
    Threshold { unit: Unit::Day, max: Some(35.0), measure: Measure::Previous },
    Threshold { unit: Unit::Days, max: Some(25.0), measure: Measure::Seconds(DAY) },
    Threshold { unit: Unit::Month, max: Some(45.0), measure: Measure::Previous },
    Threshold { unit: Unit::Months, max: Some(10.0), measure: Measure::Months(1.0) },
    Threshold { unit: Unit::Year, max: Some(17.0), measure: Measure::Previous },
    Threshold { unit: Unit::Years, max: None, measure: Measure::Months(12.0) },
];

impl Unit {
    fn render(self, amount: u64) -> String {
        match self {
            Unit::FewSeconds => "poucos segundos".to_string(),
            Unit::Minute => "um minuto".to_string(),
            Unit::Minutes => format!("{amount} minutos"),
            Unit::Hour => "uma hora".to_string(),
            Unit::Hours => format!("{amount} horas"),
            Unit::Day => "um dia".to_string(),
            Unit::Days => format!("{amount} dias"),
            Unit::Month => "um mês".to_string(),
            Unit::Months => format!("{amount} meses"),
            Unit::Year => "um ano".to_string(),
            Unit::Years => format!("{amount} anos"),
        }
    }
}

/// Distance from `now` to `instant`, e.g. "há 3 dias" or "em uma hora".
///
/// Months and years count calendar months, so a month spans 28 to 31 days
/// depending on where the interval falls.
pub fn time_ago(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = millis(instant - now) / 1000.0;
    let months = month_diff(instant, now);
    let mut delta = seconds;

    for (i, threshold) in THRESHOLDS.iter().enumerate() {
        match threshold.measure {
            Measure::Seconds(scale) => delta = seconds / scale,
            Measure::Months(scale) => delta = months / scale,
            Measure::Previous => {}
        }
        let amount = delta.abs().round();

        if threshold.max.map_or(true, |max| amount <= max) {
            // "1 minutos" reads as "um minuto"
            let unit = if amount <= 1.0 && i > 0 {
                THRESHOLDS[i - 1].unit
            } else {
                threshold.unit
            };
            let phrase = unit.render(amount as u64);
            return if delta > 0.0 {
                format!("em {phrase}")
            } else {
                format!("há {phrase}")
            };
        }
    }

    unreachable!("the last threshold has no upper bound")
}

/// Fractional calendar months from `now` to `instant`, negative for the past.
/// Whole months are counted from `instant`'s day of month (clamped to the
/// month's length); the remainder is a fraction of the neighbouring month.
fn month_diff(instant: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    if instant.day() < now.day() {
        return -month_diff(now, instant);
    }

    let whole = (now.year() - instant.year()) * 12 + now.month() as i32 - instant.month() as i32;
    let anchor = add_months(instant, whole);
    let before_anchor = now < anchor;
    let neighbour = add_months(instant, if before_anchor { whole - 1 } else { whole + 1 });
    let span = if before_anchor {
        anchor - neighbour
    } else {
        neighbour - anchor
    };

    let fraction = millis(now - anchor) / millis(span);
    -(whole as f64 + fraction)
}

fn add_months(instant: DateTime<Utc>, months: i32) -> DateTime<Utc> {
    let shifted = if months >= 0 {
        instant.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        instant.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(instant)
}

fn millis(duration: chrono::Duration) -> f64 {
    duration.num_milliseconds() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn ago(duration: Duration) -> String {
        time_ago(now() - duration, now())
    }

    #[test]
    fn test_seconds_and_minutes() {
        assert_eq!(ago(Duration::zero()), "há poucos segundos");
        assert_eq!(ago(Duration::seconds(30)), "há poucos segundos");
        assert_eq!(ago(Duration::seconds(45)), "há um minuto");
        assert_eq!(ago(Duration::seconds(89)), "há um minuto");
        assert_eq!(ago(Duration::seconds(90)), "há 2 minutos");
        assert_eq!(ago(Duration::minutes(5)), "há 5 minutos");
        assert_eq!(ago(Duration::minutes(44)), "há 44 minutos");
    }

    #[test]
    fn test_hours_and_days() {
        assert_eq!(ago(Duration::minutes(45)), "há uma hora");
        assert_eq!(ago(Duration::hours(1)), "há uma hora");
        assert_eq!(ago(Duration::hours(3)), "há 3 horas");
        assert_eq!(ago(Duration::hours(21)), "há 21 horas");
        assert_eq!(ago(Duration::hours(24)), "há um dia");
        assert_eq!(ago(Duration::days(3)), "há 3 dias");
        assert_eq!(ago(Duration::days(25)), "há 25 dias");
    }

    #[test]
    fn test_months_and_years() {
        assert_eq!(ago(Duration::days(30)), "há um mês");
        assert_eq!(ago(Duration::days(90)), "há 3 meses");
        assert_eq!(ago(Duration::days(400)), "há um ano");
        assert_eq!(ago(Duration::days(800)), "há 2 anos");
    }

    #[test]
    fn test_months_follow_the_calendar() {
        // 45.5 days, but across a 29-day February: one and a half calendar months
        let instant = Utc.with_ymd_and_hms(2023, 12, 31, 12, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 2, 15, 0, 0, 0).unwrap();
        assert_eq!(time_ago(instant, now), "há 2 meses");
        assert_eq!(time_ago(now, instant), "em 2 meses");
    }

    #[test]
    fn test_month_diff_counts_whole_calendar_months() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 4, 15, 0, 0, 0).unwrap();
        assert_eq!(month_diff(instant, now), -3.0);
        assert_eq!(month_diff(now, instant), 3.0);
    }

    #[test]
    fn test_future_instants_use_em() {
        assert_eq!(time_ago(now() + Duration::hours(2), now()), "em 2 horas");
        assert_eq!(time_ago(now() + Duration::days(1), now()), "em um dia");
    }
}
