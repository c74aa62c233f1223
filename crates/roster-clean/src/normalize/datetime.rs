//! Loose date parsing and ISO formatting.
//!
//! The feed mixes several date layouts ("November 23rd, 2023", "16/04/2023",
//! "16.04.23"). Parsing walks a fixed format list after stripping English
//! ordinal suffixes; ambiguous slash dates resolve US-style (month first),
//! matching the feed's dominant convention. Output is always `YYYY-MM-DD`
//! so cleaned dates sort lexicographically.

use chrono::NaiveDate;

/// Date-only formats tried in order for four-digit-year inputs. US layouts
/// come before European ones, so "04/06/2023" reads as April 6.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%d-%b-%Y",
    "%Y/%m/%d",
    "%d.%m.%Y",
    "%Y%m%d",
];

/// Formats tried for `##/##/##` inputs, where chrono's `%Y` would otherwise
/// swallow a two-digit year as year 23 AD.
const SHORT_YEAR_FORMATS: &[&str] = &["%m/%d/%y", "%d/%m/%y"];

/// True when `value` has exactly the shape of `layout`, where `#` stands for
/// one ASCII digit and every other byte must match literally.
pub fn matches_layout(value: &str, layout: &str) -> bool {
    value.len() == layout.len()
        && value
            .bytes()
            .zip(layout.bytes())
            .all(|(v, l)| if l == b'#' { v.is_ascii_digit() } else { v == l })
}

/// Swaps the first two groups of a positional `DD/MM/YYYY` string, yielding
/// the month-first layout the loose parser prefers. Returns `None` when the
/// string has any other shape.
pub fn swap_slash_day_month(value: &str) -> Option<String> {
    if !matches_layout(value, "##/##/####") {
        return None;
    }
    Some(format!("{}/{}/{}", &value[3..5], &value[0..2], &value[6..10]))
}

/// Rewrites a positional `DD.MM.YY` string to `MM/DD/YY`. Returns `None`
/// when the string has any other shape (a four-digit year does not match).
pub fn dotted_short_date_to_us(value: &str) -> Option<String> {
    if !matches_layout(value, "##.##.##") {
        return None;
    }
    Some(format!("{}/{}/{}", &value[3..5], &value[0..2], &value[6..8]))
}

/// Best-effort parse of a date in any of the feed's observed layouts.
pub fn parse_loose_date(value: &str) -> Option<NaiveDate> {
    let cleaned = strip_ordinal_suffixes(value.trim());
    let formats = if matches_layout(&cleaned, "##/##/##") {
        SHORT_YEAR_FORMATS
    } else {
        DATE_FORMATS
    };
    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&cleaned, format).ok())
}

/// Formats a date as zero-padded `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Removes English ordinal suffixes that follow a digit ("23rd" -> "23"),
/// leaving everything else untouched.
fn strip_ordinal_suffixes(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len());
    let mut i = 0;
    while i < chars.len() {
        if i > 0 && i + 1 < chars.len() && chars[i - 1].is_ascii_digit() {
            let pair = [
                chars[i].to_ascii_lowercase(),
                chars[i + 1].to_ascii_lowercase(),
            ];
            let at_boundary = i + 2 >= chars.len() || !chars[i + 2].is_ascii_alphanumeric();
            if at_boundary && matches!(pair, ['s', 't'] | ['n', 'd'] | ['r', 'd'] | ['t', 'h']) {
                i += 2;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}
