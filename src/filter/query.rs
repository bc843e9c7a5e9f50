//! Query string encoding of filter selections.
//!
//! Selections are written as `themes=build,research&status=active`:
//! categories appear in declaration order, values in declaration order and
//! comma-joined, and categories without selections are omitted. Decoding also
//! accepts repeated keys, a leading `?`, `+` as space and percent-encoding.
//! Anything it does not recognise is skipped.

use super::facet::{FilterCategory, FilterValue};
use super::selection::ActiveFilters;
use log::*;

const PAIR_SEPARATOR: char = '&';
const VALUE_SEPARATOR: char = ',';

/// Encode the selections into a canonical query string without leading `?`.
///
pub fn encode(filters: &ActiveFilters) -> String {
    filters
        .by_category()
        .into_iter()
        .map(|(category, values)| {
            let joined = values
                .iter()
                .map(|v| urlencoding::encode(v.key()).into_owned())
                .collect::<Vec<_>>()
                .join(&VALUE_SEPARATOR.to_string());
            format!("{}={}", urlencoding::encode(category.key()), joined)
        })
        .collect::<Vec<_>>()
        .join(&PAIR_SEPARATOR.to_string())
}

/// Decode a query string into selections, ignoring malformed or unknown
/// parameters and values.
///
pub fn decode(query: &str) -> ActiveFilters {
    let mut filters = ActiveFilters::new();
    let query = query.strip_prefix('?').unwrap_or(query);

    for pair in query.split(PAIR_SEPARATOR).filter(|p| !p.is_empty()) {
        let (raw_key, raw_values) = match pair.split_once('=') {
            Some(kv) => kv,
            None => {
                debug!("Ignoring query parameter without value '{}'", pair);
                continue;
            }
        };
        let category = match decode_component(raw_key)
            .as_deref()
            .and_then(FilterCategory::from_key)
        {
            Some(category) => category,
            None => {
                debug!("Ignoring unknown query parameter '{}'", raw_key);
                continue;
            }
        };
        let values = match decode_component(raw_values) {
            Some(values) => values,
            None => {
                debug!("Ignoring undecodable values for '{}'", category);
                continue;
            }
        };
        for key in values
            .split(VALUE_SEPARATOR)
            .map(str::trim)
            .filter(|k| !k.is_empty())
        {
            match FilterValue::parse(category, key) {
                Some(value) => {
                    filters.insert(value);
                }
                None => debug!("Ignoring unknown {} value '{}'", category, key),
            }
        }
    }
    filters
}

fn decode_component(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .ok()
        .map(|s| s.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{ProjectType, Status, Theme};

    fn selection(values: &[FilterValue]) -> ActiveFilters {
        values.iter().copied().collect()
    }

    #[test]
    fn empty_selection_encodes_to_empty_string() {
        assert_eq!(encode(&ActiveFilters::new()), "");
        assert_eq!(decode(""), ActiveFilters::new());
    }

    #[test]
    fn encode_is_ordered_by_declaration() {
        let filters = selection(&[
            FilterValue::Type(ProjectType::Application),
            FilterValue::Theme(Theme::Research),
            FilterValue::Status(Status::Active),
            FilterValue::Theme(Theme::Build),
        ]);
        assert_eq!(
            encode(&filters),
            "themes=build,research&status=active&types=application"
        );
    }

    #[test]
    fn decode_inverts_encode() {
        let filters = selection(&[
            FilterValue::Theme(Theme::Play),
            FilterValue::Status(Status::Archived),
            FilterValue::Status(Status::Inactive),
            FilterValue::Type(ProjectType::Research),
        ]);
        let encoded = encode(&filters);
        assert_eq!(decode(&encoded), filters);
        assert_eq!(encode(&decode(&encoded)), encoded);
    }

    #[test]
    fn decode_inverts_encode_for_every_selection() {
        let values = FilterValue::all();
        for mask in 0u32..(1 << values.len()) {
            let filters: ActiveFilters = values
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, v)| *v)
                .collect();
            let encoded = encode(&filters);
            assert_eq!(decode(&encoded), filters, "mask {:#b}", mask);
            assert_eq!(encode(&decode(&encoded)), encoded);
        }
    }

    #[test]
    fn decode_accepts_repeated_keys_and_leading_question_mark() {
        let decoded = decode("?themes=research&themes=build&status=active");
        assert_eq!(encode(&decoded), "themes=build,research&status=active");
    }

    #[test]
    fn decode_ignores_unknown_and_malformed_input() {
        let decoded = decode("themes=build,party&keywords=zk&status&=active&&types=%FF");
        assert_eq!(decoded, selection(&[FilterValue::Theme(Theme::Build)]));
    }

    #[test]
    fn decode_handles_percent_encoding() {
        let decoded = decode("themes=build%2Cplay&status=%20active");
        assert_eq!(
            decoded,
            selection(&[
                FilterValue::Theme(Theme::Build),
                FilterValue::Theme(Theme::Play),
                FilterValue::Status(Status::Active),
            ])
        );
    }

    #[test]
    fn decode_is_case_insensitive() {
        let decoded = decode("Themes=Research");
        assert_eq!(decoded, selection(&[FilterValue::Theme(Theme::Research)]));
    }
}
