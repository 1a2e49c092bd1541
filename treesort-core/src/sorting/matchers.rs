//! Name matching for the name-based group kinds, plus the capture
//! normalizers that make derived text compare sensibly.

use treesort_model::regex::Captures;
use treesort_model::{CaptureNormalizer, NameMatcher, RegexMatcher};

/// Width numbers are zero-padded to.
const NUMBER_WIDTH: usize = 20;

/// Which part of the name a matcher must cover.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Anchor {
    Whole,
    Head,
    Tail,
}

/// A successful match.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NameMatch {
    /// Bytes of the name consumed by the matcher
    pub len: usize,
    pub derived: Option<String>,
}

pub fn match_name(matcher: &NameMatcher, name: &str, anchor: Anchor) -> Option<NameMatch> {
    match matcher {
        NameMatcher::Literal(text) => {
            let hit = match anchor {
                Anchor::Whole => name == text,
                Anchor::Head => name.starts_with(text.as_str()),
                Anchor::Tail => name.ends_with(text.as_str()),
            };
            hit.then(|| NameMatch {
                len: text.len(),
                derived: None,
            })
        }
        NameMatcher::Regex(regex) => match_regex(regex, name, anchor),
    }
}

/// A whole-name regex accepts any hit; the pattern decides how much of the
/// name it needs. Head hits must start the name and tail hits must end it.
fn match_regex(matcher: &RegexMatcher, name: &str, anchor: Anchor) -> Option<NameMatch> {
    let captures = match anchor {
        Anchor::Whole => matcher.pattern.captures(name)?,
        Anchor::Head => matcher
            .pattern
            .captures(name)
            .filter(|caps| caps.get(0).is_some_and(|full| full.start() == 0))?,
        Anchor::Tail => tail_captures(matcher, name)?,
    };
    let full = captures.get(0)?;
    let derived = captures
        .get(1)
        .map(|capture| capture.as_str())
        .filter(|text| !text.is_empty())
        .map(|text| normalize(text, matcher.normalizer));
    Some(NameMatch {
        len: full.len(),
        derived,
    })
}

/// First hit, scanning left to right, that ends exactly at the end of `name`.
fn tail_captures<'n>(matcher: &RegexMatcher, name: &'n str) -> Option<Captures<'n>> {
    let mut start = 0;
    loop {
        let captures = matcher.pattern.captures_at(name, start)?;
        let full = captures.get(0)?;
        if full.end() == name.len() {
            return Some(captures);
        }
        start = name[full.start()..]
            .chars()
            .next()
            .map_or(name.len() + 1, |c| full.start() + c.len_utf8());
        if start > name.len() {
            return None;
        }
    }
}

/// Head and tail must both match without sharing any part of the name.
pub fn match_head_and_tail(
    head: &NameMatcher,
    tail: &NameMatcher,
    name: &str,
) -> Option<NameMatch> {
    let left = match_name(head, name, Anchor::Head)?;
    let right = match_name(tail, name, Anchor::Tail)?;
    let len = left.len + right.len;
    if len > name.len() {
        return None;
    }
    let derived = match (left.derived, right.derived) {
        (None, None) => None,
        (l, r) => Some(format!("{}{}", l.unwrap_or_default(), r.unwrap_or_default())),
    };
    Some(NameMatch { len, derived })
}

/// Applies `normalizer` to captured text; text it cannot parse is kept as is.
pub fn normalize(text: &str, normalizer: Option<CaptureNormalizer>) -> String {
    let normalized = match normalizer {
        None => None,
        Some(CaptureNormalizer::Number) => pad_number(text),
        Some(CaptureNormalizer::CompoundNumber { separator }) => {
            compound(text, separator, pad_number)
        }
        Some(CaptureNormalizer::RomanNumber) => pad_roman(text),
        Some(CaptureNormalizer::CompoundRomanNumber { separator }) => {
            compound(text, separator, pad_roman)
        }
    };
    normalized.unwrap_or_else(|| text.to_string())
}

fn compound(text: &str, separator: char, part: fn(&str) -> Option<String>) -> Option<String> {
    text.split(separator)
        .map(part)
        .collect::<Option<Vec<_>>>()
        .map(|parts| parts.join(&separator.to_string()))
}

/// `42` becomes twenty digits; a fractional part is kept unpadded.
fn pad_number(text: &str) -> Option<String> {
    let text = text.trim();
    let (int, frac) = match text.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (text, None),
    };
    if int.is_empty() || !int.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if frac.is_some_and(|f| !f.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }
    let padded = format!("{int:0>NUMBER_WIDTH$}");
    Some(match frac {
        Some(frac) => format!("{padded}.{frac}"),
        None => padded,
    })
}

fn pad_roman(text: &str) -> Option<String> {
    roman_to_int(text.trim()).map(|value| format!("{value:0>NUMBER_WIDTH$}"))
}

fn roman_to_int(text: &str) -> Option<u64> {
    if text.is_empty() {
        return None;
    }
    let digits = text
        .chars()
        .map(|c| match c.to_ascii_uppercase() {
            'I' => Some(1),
            'V' => Some(5),
            'X' => Some(10),
            'L' => Some(50),
            'C' => Some(100),
            'D' => Some(500),
            'M' => Some(1000),
            _ => None,
        })
        .collect::<Option<Vec<i64>>>()?;

    // a digit followed by a larger one is subtracted, as in IV
    let mut total = 0i64;
    for (idx, &value) in digits.iter().enumerate() {
        match digits.get(idx + 1) {
            Some(&next) if next > value => total -= value,
            _ => total += value,
        }
    }
    u64::try_from(total).ok()
}
