//! ISO-8601 style duration handling (`PT1H2M3S`)

use std::time::Duration;

/// Hour, minute and second components as written in the source string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Components {
    hours: u64,
    minutes: u64,
    seconds: u64,
}

/// Parse the `PT[nH][nM][nS]` designators in order.
///
/// Parsing stops at the first unexpected character; whatever was read up to
/// that point is kept. Returns `None` when the `PT` marker is missing.
fn parse_components(input: &str) -> Option<Components> {
    let rest = input.trim().strip_prefix("PT")?;

    let mut parts = Components::default();
    // 0 = expecting H, 1 = M, 2 = S
    let mut next_slot = 0;
    let mut digits = String::new();

    for c in rest.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        let slot = match c {
            'H' => 0,
            'M' => 1,
            'S' => 2,
            _ => break,
        };
        if slot < next_slot || digits.is_empty() {
            break;
        }
        let Ok(value) = digits.parse::<u64>() else {
            break;
        };
        match slot {
            0 => parts.hours = value,
            1 => parts.minutes = value,
            _ => parts.seconds = value,
        }
        digits.clear();
        next_slot = slot + 1;
    }

    Some(parts)
}

/// Total length of a `PT#H#M#S` duration, or `None` if the marker is missing.
pub fn parse_duration(input: &str) -> Option<Duration> {
    let parts = parse_components(input)?;
    let total = parts
        .hours
        .saturating_mul(3600)
        .saturating_add(parts.minutes.saturating_mul(60))
        .saturating_add(parts.seconds);
    Some(Duration::from_secs(total))
}

/// Render a duration as `H:MM:SS` when hours are present, `M:SS` otherwise.
///
/// Malformed input renders as `0:00`.
pub fn format_duration(input: &str) -> String {
    let parts = parse_components(input).unwrap_or_default();

    if parts.hours > 0 {
        format!("{}:{:02}:{:02}", parts.hours, parts.minutes, parts.seconds)
    } else {
        format!("{}:{:02}", parts.minutes, parts.seconds)
    }
}
