//! # Listing Query Helper
//!
//! Ordering and pagination for collection responses, applied as a pure
//! function over an already-filtered snapshot. Role scoping happens *before*
//! this layer (in the filter handed to the actor); query params can narrow a
//! page but never widen what the caller is allowed to see.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Sort key extracted from an entity for one ordering field.
///
/// Entities expose their sortable fields through a `key_fn` closure returning
/// one of these; a single field always yields a single variant, so the
/// cross-variant ordering the derive produces is never exercised.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Key {
    Text(String),
    Number(Decimal),
    Stamp(DateTime<Utc>),
}

/// Parsed listing parameters.
///
/// `ordering` is a field name, with a leading `-` for descending. Absent or
/// unparseable values fall back to defaults rather than erroring: a bad
/// `page=abc` gets you page 1, not a 400.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub ordering: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl QueryParams {
    /// Reads `ordering`, `page`, and `perpage` from a raw param bag.
    pub fn from_map(params: &HashMap<String, String>) -> Self {
        Self {
            ordering: params.get("ordering").cloned(),
            page: params.get("page").and_then(|v| v.parse().ok()),
            per_page: params.get("perpage").and_then(|v| v.parse().ok()),
        }
    }
}

/// Applies ordering then pagination to a snapshot.
///
/// `key_fn` maps an entity and a field name to a sort [`Key`]; an unknown
/// field yields no key for any entity, so the sort is a stable no-op and the
/// relative order survives. Without `ordering` the creation order from the
/// actor is preserved. Pagination is 1-based and runs last; a page past the
/// end is an empty listing, which is success.
pub fn apply<T>(
    mut items: Vec<T>,
    params: &QueryParams,
    key_fn: impl Fn(&T, &str) -> Option<Key>,
) -> Vec<T> {
    if let Some(ordering) = &params.ordering {
        let (field, descending) = match ordering.strip_prefix('-') {
            Some(field) => (field, true),
            None => (ordering.as_str(), false),
        };
        items.sort_by(|a, b| {
            let ord = key_fn(a, field).cmp(&key_fn(b, field));
            if descending {
                ord.reverse()
            } else {
                ord
            }
        });
    }

    if let Some(per_page) = params.per_page {
        // Saturate so absurd page numbers fall off the end instead of
        // overflowing the skip count.
        let page = params.page.unwrap_or(1).max(1);
        items = items
            .into_iter()
            .skip(page.saturating_sub(1).saturating_mul(per_page))
            .take(per_page)
            .collect();
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    struct Dish {
        title: &'static str,
        price: Decimal,
    }

    fn dishes() -> Vec<Dish> {
        vec![
            Dish { title: "pasta", price: dec!(9.50) },
            Dish { title: "salad", price: dec!(4.00) },
            Dish { title: "pizza", price: dec!(7.25) },
        ]
    }

    fn key(dish: &Dish, field: &str) -> Option<Key> {
        match field {
            "title" => Some(Key::Text(dish.title.to_string())),
            "price" => Some(Key::Number(dish.price)),
            _ => None,
        }
    }

    #[test]
    fn no_params_preserves_input_order() {
        let out = apply(dishes(), &QueryParams::default(), key);
        let titles: Vec<_> = out.iter().map(|d| d.title).collect();
        assert_eq!(titles, ["pasta", "salad", "pizza"]);
    }

    #[test]
    fn orders_ascending_and_descending() {
        let asc = QueryParams { ordering: Some("price".into()), ..Default::default() };
        let out = apply(dishes(), &asc, key);
        let titles: Vec<_> = out.iter().map(|d| d.title).collect();
        assert_eq!(titles, ["salad", "pizza", "pasta"]);

        let desc = QueryParams { ordering: Some("-price".into()), ..Default::default() };
        let out = apply(dishes(), &desc, key);
        let titles: Vec<_> = out.iter().map(|d| d.title).collect();
        assert_eq!(titles, ["pasta", "pizza", "salad"]);
    }

    #[test]
    fn unknown_ordering_field_is_a_no_op() {
        let params = QueryParams { ordering: Some("spiciness".into()), ..Default::default() };
        let out = apply(dishes(), &params, key);
        let titles: Vec<_> = out.iter().map(|d| d.title).collect();
        assert_eq!(titles, ["pasta", "salad", "pizza"]);
    }

    #[test]
    fn paginates_after_ordering() {
        let params = QueryParams {
            ordering: Some("title".into()),
            page: Some(2),
            per_page: Some(2),
        };
        let out = apply(dishes(), &params, key);
        let titles: Vec<_> = out.iter().map(|d| d.title).collect();
        assert_eq!(titles, ["salad"]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let params = QueryParams {
            page: Some(9),
            per_page: Some(5),
            ..Default::default()
        };
        assert!(apply(dishes(), &params, key).is_empty());
    }

    #[test]
    fn huge_page_numbers_saturate_instead_of_overflowing() {
        let params = QueryParams {
            page: Some(usize::MAX),
            per_page: Some(usize::MAX),
            ..Default::default()
        };
        assert!(apply(dishes(), &params, key).is_empty());
    }

    #[test]
    fn from_map_ignores_unparseable_numbers() {
        let mut raw = HashMap::new();
        raw.insert("ordering".to_string(), "-price".to_string());
        raw.insert("page".to_string(), "abc".to_string());
        raw.insert("perpage".to_string(), "2".to_string());
        let params = QueryParams::from_map(&raw);
        assert_eq!(params.ordering.as_deref(), Some("-price"));
        assert_eq!(params.page, None);
        assert_eq!(params.per_page, Some(2));
    }
}
