use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Timelike};

use crate::{Locale, Time};

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

/// Coarse distance between two instants, as shown to humans
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distance {
    LessThanAMinute,
    Minutes(i64),
    AboutHours(i64),
    Days(i64),
    AboutMonths(i64),
    Months(i64),
    AboutYears(i64),
    OverYears(i64),
    AlmostYears(i64),
}

/// Machine-readable form used in `<time datetime=...>`
pub fn format_iso(t: Time) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `5 de maio às 20:00h` in pt-BR, `May 5 at 20:00` in en-US
pub fn format_absolute(t: Time, locale: Locale, tz: chrono_tz::Tz) -> String {
    let local = t.with_timezone(&tz);
    let month = locale.month_name(local.month());
    match locale {
        Locale::PtBr => format!(
            "{} de {} às {:02}:{:02}h",
            local.day(),
            month,
            local.hour(),
            local.minute()
        ),
        Locale::EnUs => format!(
            "{} {} at {:02}:{:02}",
            month,
            local.day(),
            local.hour(),
            local.minute()
        ),
    }
}

/// Distance from `now` to `t`, with a suffix telling whether `t` is in the past or the future
///
/// Month and year distances are counted on the calendar of `tz`.
pub fn format_relative(t: Time, now: Time, locale: Locale, tz: chrono_tz::Tz) -> String {
    let phrase = phrase(distance(t, now, tz), locale);
    match (locale, t > now) {
        (Locale::PtBr, true) => format!("em {phrase}"),
        (Locale::PtBr, false) => format!("há {phrase}"),
        (Locale::EnUs, true) => format!("in {phrase}"),
        (Locale::EnUs, false) => format!("{phrase} ago"),
    }
}

// Rounds half up, like the date libraries do; both operands are non-negative here
fn round_div(a: i64, b: i64) -> i64 {
    (a + b / 2) / b
}

// Builds a date, letting out-of-range months and days spill over into the following ones
fn overflowing_date(year: i32, month0: i64, day: u32, time: NaiveTime) -> Option<NaiveDateTime> {
    let total = year as i64 * 12 + month0;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let first = NaiveDate::from_ymd_opt(year, total.rem_euclid(12) as u32 + 1, 1)?;
    Some((first + chrono::Duration::days(day as i64 - 1)).and_time(time))
}

// Full months between two instants, counted on the calendar of `tz`
fn full_months_between(earlier: Time, later: Time, tz: chrono_tz::Tz) -> i64 {
    let earlier = earlier.with_timezone(&tz).naive_local();
    let later = later.with_timezone(&tz).naive_local();
    let months = (later.year() as i64 - earlier.year() as i64) * 12 + later.month() as i64
        - earlier.month() as i64;
    if months < 1 {
        return 0;
    }

    // End of February is moved to the start of March before stepping back
    let anchor = match later.month() == 2 && later.day() > 27 {
        true => overflowing_date(later.year(), 1, 30, later.time()),
        false => Some(later),
    };
    let stepped_back = anchor.and_then(|a| {
        overflowing_date(a.year(), a.month0() as i64 - months, a.day(), a.time())
    });
    match stepped_back {
        Some(d) if d < earlier => months - 1,
        _ => months,
    }
}

pub fn distance(a: Time, b: Time, tz: chrono_tz::Tz) -> Distance {
    let (earlier, later) = match a < b {
        true => (a, b),
        false => (b, a),
    };
    let seconds = (later - earlier).num_seconds();
    let minutes = round_div(seconds, 60);

    if minutes == 0 {
        Distance::LessThanAMinute
    } else if minutes < 2 {
        Distance::Minutes(1)
    } else if minutes < 45 {
        Distance::Minutes(minutes)
    } else if minutes < 90 {
        Distance::AboutHours(1)
    } else if minutes < MINUTES_IN_DAY {
        Distance::AboutHours(round_div(minutes, 60))
    } else if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        Distance::Days(1)
    } else if minutes < MINUTES_IN_MONTH {
        Distance::Days(round_div(minutes, MINUTES_IN_DAY))
    } else if minutes < MINUTES_IN_TWO_MONTHS {
        Distance::AboutMonths(round_div(minutes, MINUTES_IN_MONTH))
    } else {
        let months = full_months_between(earlier, later, tz);
        if months < 12 {
            Distance::Months(round_div(minutes, MINUTES_IN_MONTH))
        } else {
            let years = months / 12;
            match months % 12 {
                0..=2 => Distance::AboutYears(years),
                3..=8 => Distance::OverYears(years),
                _ => Distance::AlmostYears(years + 1),
            }
        }
    }
}

fn phrase(d: Distance, locale: Locale) -> String {
    macro_rules! count {
        ($n:expr, $one:literal, $many:literal) => {
            match $n {
                1 => String::from($one),
                n => format!($many, n),
            }
        };
    }
    use Distance::*;
    match locale {
        Locale::PtBr => match d {
            LessThanAMinute => String::from("menos de um minuto"),
            Minutes(n) => count!(n, "1 minuto", "{} minutos"),
            AboutHours(n) => count!(n, "cerca de 1 hora", "cerca de {} horas"),
            Days(n) => count!(n, "1 dia", "{} dias"),
            AboutMonths(n) => count!(n, "cerca de 1 mês", "cerca de {} meses"),
            Months(n) => count!(n, "1 mês", "{} meses"),
            AboutYears(n) => count!(n, "cerca de 1 ano", "cerca de {} anos"),
            OverYears(n) => count!(n, "mais de 1 ano", "mais de {} anos"),
            AlmostYears(n) => count!(n, "quase 1 ano", "quase {} anos"),
        },
        Locale::EnUs => match d {
            LessThanAMinute => String::from("less than a minute"),
            Minutes(n) => count!(n, "1 minute", "{} minutes"),
            AboutHours(n) => count!(n, "about 1 hour", "about {} hours"),
            Days(n) => count!(n, "1 day", "{} days"),
            AboutMonths(n) => count!(n, "about 1 month", "about {} months"),
            Months(n) => count!(n, "1 month", "{} months"),
            AboutYears(n) => count!(n, "about 1 year", "about {} years"),
            OverYears(n) => count!(n, "over 1 year", "over {} years"),
            AlmostYears(n) => count!(n, "almost 1 year", "almost {} years"),
        },
    }
}
