//! Display formatting shared by tables, cards and overlays.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Colour family of a status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Pending,
    Caution,
    Negative,
    Neutral,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Positive => "badge badge--positive",
            Self::Pending => "badge badge--pending",
            Self::Caution => "badge badge--caution",
            Self::Negative => "badge badge--negative",
            Self::Neutral => "badge badge--neutral",
        }
    }
}

pub fn captain_tone(status: &str) -> Tone {
    match status {
        "Active" => Tone::Positive,
        "Pending" => Tone::Pending,
        "OnHold" => Tone::Caution,
        "Deactivated" => Tone::Negative,
        _ => Tone::Neutral,
    }
}

pub fn user_tone(status: &str) -> Tone {
    match status {
        "Active" => Tone::Positive,
        "Deactivated" => Tone::Caution,
        "Blocked" => Tone::Negative,
        _ => Tone::Neutral,
    }
}

pub fn booking_tone(status: &str) -> Tone {
    match status {
        "Completed" => Tone::Positive,
        "Pending" | "Accepted" | "EnRoute" | "Arrived" => Tone::Pending,
        "Disputed" => Tone::Caution,
        "Cancelled" => Tone::Negative,
        _ => Tone::Neutral,
    }
}

/// Activity feed badges only distinguish done, waiting and everything else.
pub fn activity_tone(status: &str) -> Tone {
    match status {
        "Active" | "Completed" => Tone::Positive,
        "Pending" => Tone::Pending,
        _ => Tone::Neutral,
    }
}

/// `1234.5` becomes `1,234.50 EGP`.
pub fn egp(amount: f64) -> String {
    format!("{} EGP", money(amount))
}

/// Two-decimal amount with thousands separators.
pub fn money(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{}.{frac}", group_thousands(whole))
}

pub fn count(value: u64) -> String {
    group_thousands(&value.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn percent(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{value:.2}%")
}

/// Rating with one decimal, `N/A` when unrated.
pub fn rating(value: f64) -> String {
    if value > 0.0 { format!("{value:.1}") } else { "N/A".to_owned() }
}

/// ISO-8601 timestamp as `YYYY-MM-DD HH:MM`; other input passes through.
pub fn timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return "-".to_owned();
    };
    let bytes = raw.as_bytes();
    let iso = bytes.len() >= 16 && bytes[4] == b'-' && bytes[7] == b'-' && matches!(bytes[10], b'T' | b' ') && bytes[13] == b':';
    match (iso, raw.get(..10), raw.get(11..16)) {
        (true, Some(date), Some(time)) => format!("{date} {time}"),
        _ => raw.to_owned(),
    }
}

/// Chart axis label: `2024-05-01` becomes `05-01`.
pub fn short_date(date: &str) -> String {
    match date.get(5..10) {
        Some(md) if date.len() >= 10 && date.as_bytes()[4] == b'-' => md.to_owned(),
        _ => date.to_owned(),
    }
}

/// Cell text for an optional string column.
pub fn or_dash(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map_or_else(|| "-".to_owned(), str::to_owned)
}
