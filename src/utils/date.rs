use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// First and last day covered by `YYYY-MM-DD`, `YYYY-MM` or `YYYY`.
pub fn bounds_from_period(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let p = p.trim();

    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Some(first) = parse_date(&format!("{p}-01")) {
        return Ok((first, last_day_of_month(first.year(), first.month())));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(format!("Invalid period: {}", p))
}

/// `START:END` where each side is any period accepted by `bounds_from_period`.
pub fn bounds_from_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let (from, _) = bounds_from_period(start)?;
    let (_, to) = bounds_from_period(end)?;

    if from > to {
        return Err(format!("Invalid range: {} is after {}", start, end));
    }
    Ok((from, to))
}

/// Resolve a `--period` argument, falling back to the month of `reference`.
pub fn resolve_period(
    period: Option<&str>,
    reference: NaiveDate,
) -> Result<(NaiveDate, NaiveDate), String> {
    match period {
        Some(p) if p.contains(':') => {
            let parts: Vec<&str> = p.split(':').collect();
            if parts.len() != 2 {
                return Err(format!("Invalid range: {}", p));
            }
            bounds_from_range(parts[0], parts[1])
        }
        Some(p) => bounds_from_period(p),
        None => Ok(month_bounds(reference)),
    }
}

pub fn first_day_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

pub fn month_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    (first_day_of_month(d), last_day_of_month(d.year(), d.month()))
}

/// Monday of the ISO week containing `d`.
pub fn week_start(d: NaiveDate) -> NaiveDate {
    d - Duration::days(d.weekday().num_days_from_monday() as i64)
}
