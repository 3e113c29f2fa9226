//! Inclusive message-id intervals and carrier range parsing (panic-free).
//!
//! Carrier range text is a comma-separated list such as `"4352-4354,4356"`.
//! Each element is a singleton `N` or an interval `N-M`, split at the first
//! `-`. Numbers use integer-literal rules: decimal, `0x`/`0X`/`#` hex, or
//! octal with a leading `0`.

use serde::Serialize;

use crate::error::{CbError, Result};

/// Broadcast message identifier (GSM message id or CDMA service category).
pub type MessageId = u32;

/// Largest value accepted by the literal decoder (signed 32-bit, as carrier
/// properties are written).
const MAX_LITERAL: MessageId = i32::MAX as MessageId;

/// Closed interval `[start, end]` of message ids. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ChannelRange {
    start: MessageId,
    end: MessageId,
}

impl ChannelRange {
    /// Build an interval, rejecting `start > end`.
    pub fn new(start: MessageId, end: MessageId) -> Result<Self> {
        if start > end {
            return Err(CbError::InvalidRange(format!(
                "inverted range {start}-{end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Interval covering exactly one id.
    pub const fn single(id: MessageId) -> Self {
        Self { start: id, end: id }
    }

    /// Compile-time interval for the fixed id tables.
    pub(crate) const fn fixed(start: MessageId, end: MessageId) -> Self {
        assert!(start <= end, "fixed channel range must be ordered");
        Self { start, end }
    }

    pub fn start(&self) -> MessageId {
        self.start
    }

    pub fn end(&self) -> MessageId {
        self.end
    }

    pub fn contains(&self, id: MessageId) -> bool {
        self.start <= id && id <= self.end
    }
}

impl std::fmt::Display for ChannelRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Decode an integer literal (`42`, `0x2A`, `#2A`, `052`, `+42`).
///
/// The input must already be trimmed. Negative values are rejected since
/// message ids are unsigned; `-0` decodes to 0.
pub fn decode_int(raw: &str) -> Result<MessageId> {
    let bad = || CbError::InvalidRange(format!("not an integer literal: {raw:?}"));

    let (negative, body) = if let Some(rest) = raw.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = raw.strip_prefix('+') {
        (false, rest)
    } else {
        (false, raw)
    };

    let (radix, digits) = if let Some(rest) = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
        .or_else(|| body.strip_prefix('#'))
    {
        (16, rest)
    } else if body.len() > 1 && body.starts_with('0') {
        (8, body.strip_prefix('0').unwrap_or(body))
    } else {
        (10, body)
    };

    // from_str_radix tolerates a leading sign; the literal format does not.
    if digits.starts_with('+') || digits.starts_with('-') {
        return Err(bad());
    }

    let value = MessageId::from_str_radix(digits, radix).map_err(|_| bad())?;
    if value > MAX_LITERAL {
        return Err(bad());
    }
    if negative && value != 0 {
        return Err(CbError::InvalidRange(format!("negative message id: {raw:?}")));
    }
    Ok(value)
}

/// Parse one element of carrier range text (strict).
pub fn parse_range_element(element: &str) -> Result<ChannelRange> {
    match element.split_once('-') {
        Some((lo, hi)) => {
            let start = decode_int(lo.trim())?;
            let end = decode_int(hi.trim())?;
            ChannelRange::new(start, end)
        }
        None => Ok(ChannelRange::single(decode_int(element.trim())?)),
    }
}

/// Parse carrier range text (lenient).
///
/// Malformed elements are logged and skipped; blank elements are ignored.
/// Exact duplicates collapse, otherwise first-appearance order is kept.
pub fn parse_carrier_ranges(text: &str) -> Vec<ChannelRange> {
    let mut out: Vec<ChannelRange> = Vec::new();
    if text.trim().is_empty() {
        return out;
    }

    for element in text.split(',') {
        if element.trim().is_empty() {
            continue;
        }
        match parse_range_element(element) {
            Ok(range) => {
                if !out.contains(&range) {
                    out.push(range);
                }
            }
            Err(e) => {
                tracing::warn!(element = %element, error = %e, "skipping malformed carrier range element");
            }
        }
    }
    out
}
