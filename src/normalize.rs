//! Per-field normalization of the raw ING export values.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::errors::ConvertError;
use crate::types::Direction;

/// ING embeds the booking moment in the memo as `DD-MM-YY HH:MM` or
/// `DD-MM-20YY HH:MM`. Only the clock part is captured.
static MEMO_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{2}-\d{2}-(?:20)?\d{2} ([0-9]{2}):([0-9]{2})").expect("valid time pattern")
});

/// Parse the comma-decimal ING amount and apply the booking direction.
///
/// The export carries unsigned magnitudes; the sign lives in the `Af Bij`
/// column. Debits come out negative. Scale is preserved, so `10,00`
/// renders back as `10.00`.
pub fn signed_amount(raw: &str, direction: Direction) -> Result<Decimal, ConvertError> {
    let magnitude: Decimal = raw
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| ConvertError::InvalidAmount(raw.to_string()))?;

    Ok(match direction {
        Direction::Debit => -magnitude.abs(),
        Direction::Credit => magnitude.abs(),
    })
}

/// Collapse runs of spaces, trim, then escape `&`, `>` and `<`.
///
/// Escaping runs after the whitespace collapse and leaves the entities it
/// produces alone, so sanitizing already-sanitized text is a no-op.
pub fn sanitize_text(raw: &str) -> String {
    let mut collapsed = String::with_capacity(raw.len());
    let mut last_was_space = false;
    for c in raw.chars() {
        if c == ' ' {
            if !last_was_space {
                collapsed.push(c);
            }
            last_was_space = true;
        } else {
            collapsed.push(c);
            last_was_space = false;
        }
    }

    escape_markup(collapsed.trim())
}

/// Escape `&`, `>` and `<`, skipping any `&` that already starts one of the
/// entities this function emits.
fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => {
                let rest = &text[i..];
                if rest.starts_with("&amp;")
                    || rest.starts_with("&lt;")
                    || rest.starts_with("&gt;")
                {
                    out.push('&');
                } else {
                    out.push_str("&amp;");
                }
            }
            c => out.push(c),
        }
    }
    out
}

/// Pull the `HHMM` clock out of a memo, if it mentions a booking moment.
///
/// Only the first match counts. The result feeds the FITID fingerprint and
/// has no field of its own on the transaction.
pub fn extract_time(memo: &str) -> Option<String> {
    let caps = MEMO_TIME.captures(memo)?;
    Some(format!("{}{}", &caps[1], &caps[2]))
}
