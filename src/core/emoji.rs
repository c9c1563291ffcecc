//! Emoji frequency ranking.
//!
//! Bodies are scanned one code point at a time. Multi-code-point sequences
//! (flags, ZWJ families) therefore count as their parts; joiners, variation
//! selectors and skin-tone modifiers are not counted.

use crate::core::counter::Counter;
use crate::table::{MessageTable, Selector};

/// Returns `true` if `c` lies in one of the emoji blocks.
pub fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F600..=0x1F64F // emoticons
            | 0x1F300..=0x1F3FA // misc symbols and pictographs, before skin tones
            | 0x1F400..=0x1F5FF
            | 0x1F680..=0x1F6FF // transport and map
            | 0x1F7E0..=0x1F7EB // geometric shapes extended, coloured circles and squares
            | 0x1F900..=0x1F9FF // supplemental symbols and pictographs
            | 0x1FA70..=0x1FAFF // symbols and pictographs extended-A
            | 0x1F1E6..=0x1F1FF // regional indicators
            | 0x1F004
            | 0x1F0CF
            | 0x1F170..=0x1F171
            | 0x1F17E..=0x1F17F
            | 0x1F18E
            | 0x1F191..=0x1F19A
            | 0x1F201..=0x1F202
            | 0x1F21A
            | 0x1F22F
            | 0x1F232..=0x1F23A
            | 0x1F250..=0x1F251
            | 0x2600..=0x26FF // misc symbols
            | 0x2700..=0x27BF // dingbats
            | 0x00A9
            | 0x00AE
            | 0x203C
            | 0x2049
            | 0x2122
            | 0x2139
            | 0x2194..=0x2199
            | 0x21A9..=0x21AA
            | 0x231A..=0x231B
            | 0x2328
            | 0x23CF
            | 0x23E9..=0x23F3
            | 0x23F8..=0x23FA
            | 0x24C2
            | 0x25AA..=0x25AB
            | 0x25B6
            | 0x25C0
            | 0x25FB..=0x25FE
            | 0x2934..=0x2935
            | 0x2B05..=0x2B07
            | 0x2B1B..=0x2B1C
            | 0x2B50
            | 0x2B55
            | 0x3030
            | 0x303D
            | 0x3297
            | 0x3299
    )
}

/// Emoji used by `selector`, most frequent first.
///
/// Notification rows are skipped. Equal counts keep first-use order.
///
/// # Example
///
/// ```rust
/// use chatstat::core::emoji_helper;
/// use chatstat::parser::preprocess;
/// use chatstat::table::Selector;
///
/// let table = preprocess("1/1/23, 10:00 - A: 😂😂 ok 👍\n1/1/23, 10:01 - B: 👍😂");
/// let emoji = emoji_helper(&Selector::Overall, &table);
///
/// assert_eq!(emoji, vec![("😂".to_string(), 3), ("👍".to_string(), 2)]);
/// ```
pub fn emoji_helper(selector: &Selector, table: &MessageTable) -> Vec<(String, usize)> {
    let counter: Counter<char> = table
        .view(selector)
        .filter(|msg| !msg.is_notification())
        .flat_map(|msg| msg.body.chars())
        .filter(|&c| is_emoji(c))
        .collect();

    counter
        .into_ranked()
        .into_iter()
        .map(|(c, count)| (c.to_string(), count))
        .collect()
}
