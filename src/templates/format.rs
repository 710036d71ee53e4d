// Display formatting for listing values (es-PE conventions).

pub const MISSING: &str = "—";

/// Rounds and groups thousands with commas: `1234567.4` -> `1,234,567`.
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{}", rounded.abs() as u64);

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn soles(value: f64) -> String {
    format!("S/ {}", group_thousands(value))
}

pub fn price(value: Option<f64>) -> String {
    value.map(soles).unwrap_or_else(|| MISSING.to_string())
}

pub fn area(value: Option<f64>) -> String {
    value
        .map(|a| format!("{} m²", group_thousands(a)))
        .unwrap_or_else(|| MISSING.to_string())
}

pub fn score(value: f64) -> String {
    format!("{value:.1}")
}

/// Room counts: whole numbers without decimals, absent or zero as a dash.
pub fn count(value: Option<f64>) -> String {
    match value {
        Some(n) if n != 0.0 && n.fract() == 0.0 => format!("{n:.0}"),
        Some(n) if n != 0.0 => format!("{n}"),
        _ => MISSING.to_string(),
    }
}

/// Cuts `text` to `max_chars` characters and appends "..." when it was longer.
pub fn shorten(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
