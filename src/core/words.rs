//! Word frequency ranking.

use crate::config::AnalysisConfig;
use crate::core::counter::Counter;
use crate::table::{MessageTable, Selector};

/// The `config.top_words` most frequent words for `selector`.
///
/// Words are lower-cased whitespace tokens. Notification rows, media
/// placeholders and stop words are skipped. Equal counts keep the order in
/// which the words first appeared.
///
/// # Example
///
/// ```rust
/// use chatstat::config::{AnalysisConfig, StopWords};
/// use chatstat::core::most_common_words;
/// use chatstat::parser::preprocess;
/// use chatstat::table::Selector;
///
/// let table = preprocess("1/1/23, 10:00 - A: Pizza the pizza\n1/1/23, 10:01 - B: the PIZZA");
/// let config = AnalysisConfig::new().with_stop_words(StopWords::parse("the"));
///
/// let words = most_common_words(&Selector::Overall, &table, &config);
/// assert_eq!(words, vec![("pizza".to_string(), 3)]);
/// ```
pub fn most_common_words(
    selector: &Selector,
    table: &MessageTable,
    config: &AnalysisConfig,
) -> Vec<(String, usize)> {
    let mut counter: Counter<String> = Counter::new();

    for msg in table.view(selector) {
        if msg.is_notification() || config.is_media(&msg.body) {
            continue;
        }
        for word in msg.body.to_lowercase().split_whitespace() {
            if config.stop_words.contains(word) {
                continue;
            }
            counter.add(word.to_string());
        }
    }

    let mut ranked = counter.into_ranked();
    ranked.truncate(config.top_words);
    ranked
}
