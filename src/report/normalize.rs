//! Byte-level line cleanup
//!
//! Turn reports are hand-edited documents: smart punctuation pasted from
//! word processors, stray dashes, game-master shorthand. The normaliser
//! repairs one line at a time so the grammar above it only ever sees a
//! small ASCII alphabet. It is idempotent and never folds newlines.

/// Characters the grammar accepts. Everything else becomes a space.
/// `#`, `:` and `=` are grammar-bearing (obscured hexes, line heads,
/// location assignments) and must survive the scrub.
fn is_allowed(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b' ' | b'-' | b',' | b'.' | b'\'' | b'/' | b'\\' | b'(' | b')' | b'#' | b':' | b'='
        )
}

/// Fold the known smart-punctuation offenders to ASCII
fn fold_char(c: char) -> char {
    match c {
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{02BC}' => '\'',
        '\u{201C}' | '\u{201D}' | '\u{201E}' => '"',
        '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}'
        | '\u{2212}' => '-',
        '\u{00A0}' => ' ',
        _ => c,
    }
}

/// Length of a unit id starting at `at`, if one is there.
///
/// A unit id is four digits, optionally a kind letter and one more digit,
/// and must end at a word boundary.
fn unit_id_len(bytes: &[u8], at: usize) -> Option<usize> {
    let rest = &bytes[at..];
    if rest.len() < 4 || !rest[..4].iter().all(u8::is_ascii_digit) {
        return None;
    }
    let len = if rest.len() >= 6
        && matches!(rest[4].to_ascii_lowercase(), b'c' | b'e' | b'f' | b'g')
        && rest[5].is_ascii_digit()
    {
        6
    } else {
        4
    };
    match rest.get(len) {
        Some(next) if next.is_ascii_alphanumeric() => None,
        _ => Some(len),
    }
}

/// Length of a direction code starting at `at`, if one is there.
/// Two-letter codes are tried before one-letter so `NE` never reads as `N`.
fn direction_len(bytes: &[u8], at: usize) -> Option<usize> {
    let rest = &bytes[at..];
    for code in [b"NE".as_slice(), b"NW", b"SE", b"SW"] {
        if rest.starts_with(code) {
            return Some(2);
        }
    }
    if rest.first().is_some_and(|b| matches!(b, b'N' | b'S')) {
        Some(1)
    } else {
        None
    }
}

fn skip_spaces(bytes: &[u8], mut at: usize) -> usize {
    while bytes.get(at) == Some(&b' ') {
        at += 1;
    }
    at
}

/// Normalise one raw report line
pub fn normalize_line(raw: &str) -> String {
    // Fold smart punctuation, then scrub to the allowed alphabet.
    let scrubbed: Vec<u8> = raw
        .chars()
        .map(fold_char)
        .map(|c| {
            if c.is_ascii() && is_allowed(c as u8) {
                c as u8
            } else {
                b' '
            }
        })
        .collect();

    // Collapse the game-master shorthand into the comma-separated forms
    // the grammar expects.
    let mut out = Vec::with_capacity(scrubbed.len());
    let mut i = 0;
    while i < scrubbed.len() {
        let byte = scrubbed[i];

        if byte == b'\\' {
            let mut j = i;
            while scrubbed.get(j) == Some(&b'\\') {
                j += 1;
            }
            // Backslashes then dashes collapse to a clause separator.
            if scrubbed.get(j) == Some(&b'-') {
                while scrubbed.get(j) == Some(&b'-') {
                    j += 1;
                }
                j = skip_spaces(&scrubbed, j);
                out.extend_from_slice(b", ");
                i = j;
                continue;
            }
            // Backslashes before a unit id are encounter-list noise.
            let k = skip_spaces(&scrubbed, j);
            if let Some(len) = unit_id_len(&scrubbed, k) {
                out.extend_from_slice(b", ");
                out.extend_from_slice(&scrubbed[k..k + len]);
                i = k + len;
                continue;
            }
            out.extend_from_slice(&scrubbed[i..j]);
            i = j;
            continue;
        }

        if byte == b'-' {
            let j = skip_spaces(&scrubbed, i + 1);
            if let Some(len) = unit_id_len(&scrubbed, j) {
                out.extend_from_slice(b", ");
                out.extend_from_slice(&scrubbed[j..j + len]);
                i = j + len;
                continue;
            }
            out.push(b'-');
            i += 1;
            continue;
        }

        if matches!(byte, b'N' | b'S') {
            let boundary = out.last().map_or(true, |b| !b.is_ascii_alphanumeric());
            if boundary {
                if let Some(dir_len) = direction_len(&scrubbed, i) {
                    let j = i + dir_len;
                    if scrubbed.get(j) == Some(&b' ') {
                        let k = skip_spaces(&scrubbed, j);
                        if let Some(len) = unit_id_len(&scrubbed, k) {
                            out.extend_from_slice(&scrubbed[i..j]);
                            out.extend_from_slice(b", ");
                            out.extend_from_slice(&scrubbed[k..k + len]);
                            i = k + len;
                            continue;
                        }
                    }
                }
            }
        }

        out.push(byte);
        i += 1;
    }

    let mut line = String::from_utf8(out).expect("normaliser emits ASCII");
    line.truncate(line.trim_end().len());
    line
}
