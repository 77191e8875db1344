//! Consist parsing — the lenient batch boundary in front of the yard.

use tracing::debug;

use crate::wagon::Wagon;

/// Parse a consist from raw input lines.
///
/// Each line is trimmed; lines that are blank after trimming are
/// skipped, and lines that fail token validation are dropped without
/// surfacing an error. Wagons come back in input order. The drop is
/// deliberate: a noisy consist list still sorts, and rejected lines are
/// visible only at debug level. Callers that must account for every
/// line validate with [`Wagon::from_token`] themselves.
pub fn parse_consist<I, S>(lines: I) -> Vec<Wagon>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut wagons = Vec::new();
    for line in lines {
        let token = line.as_ref().trim();
        if token.is_empty() {
            continue;
        }
        match Wagon::from_token(token) {
            Ok(wagon) => wagons.push(wagon),
            Err(reason) => debug!(%token, %reason, "Dropping rejected consist line"),
        }
    }
    wagons
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
