//! Dynamic multi-key ordering for in-memory collections
//!
//! List endpoints accept an `order` string such as `"category asc, price desc"`.
//! Each clause names a field and an optional direction. Entities expose the
//! fields they can be ordered by through [`Sortable`]; names they do not
//! recognize produce [`SortKey::Null`] for every record, which leaves the
//! relative order untouched for that clause.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

static DIRECTION_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i) (asc|desc)$").unwrap()
});

/// Sort order for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Asc
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
        }
    }
}

/// One `field [asc|desc]` clause of an order string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortClause {
    /// Field name, lower-cased
    pub field: String,

    #[serde(default)]
    pub order: SortOrder,
}

impl SortClause {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into().to_lowercase(),
            order,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortOrder::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortOrder::Desc)
    }

    pub fn is_descending(&self) -> bool {
        self.order == SortOrder::Desc
    }

    /// Parse a single clause; the direction suffix is case-insensitive
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match DIRECTION_SUFFIX.captures(trimmed) {
            Some(caps) => {
                let order = if caps[1].eq_ignore_ascii_case("desc") {
                    SortOrder::Desc
                } else {
                    SortOrder::Asc
                };
                let end = caps.get(0).map_or(trimmed.len(), |m| m.start());
                Self::new(trimmed[..end].trim(), order)
            }
            None => Self::asc(trimmed),
        }
    }
}

/// Parse a comma separated order string
///
/// Blank input yields no clauses.
pub fn parse_order(raw: &str) -> Vec<SortClause> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(SortClause::parse).collect()
}

/// Comparable value extracted from a record for one sort clause
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// Unknown field or absent value; sorts lowest
    Null,
    Integer(i64),
    Decimal(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Null => 0,
            SortKey::Integer(_) => 1,
            SortKey::Decimal(_) => 2,
            SortKey::Text(_) => 3,
            SortKey::Timestamp(_) => 4,
        }
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Null, SortKey::Null) => Ordering::Equal,
            (SortKey::Integer(a), SortKey::Integer(b)) => a.cmp(b),
            (SortKey::Decimal(a), SortKey::Decimal(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Timestamp(a), SortKey::Timestamp(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl From<i64> for SortKey {
    fn from(value: i64) -> Self {
        SortKey::Integer(value)
    }
}

impl From<i32> for SortKey {
    fn from(value: i32) -> Self {
        SortKey::Integer(i64::from(value))
    }
}

impl From<f64> for SortKey {
    fn from(value: f64) -> Self {
        SortKey::Decimal(value)
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        SortKey::Text(value.to_string())
    }
}

impl From<DateTime<Utc>> for SortKey {
    fn from(value: DateTime<Utc>) -> Self {
        SortKey::Timestamp(value)
    }
}

impl<T: Into<SortKey>> From<Option<T>> for SortKey {
    fn from(value: Option<T>) -> Self {
        value.map_or(SortKey::Null, Into::into)
    }
}

/// Records that can be ordered by name
pub trait Sortable {
    /// Value of `field` (already lower-cased) for this record
    ///
    /// Unknown names must return [`SortKey::Null`].
    fn sort_key(&self, field: &str) -> SortKey;
}

/// Order `items` according to a raw order string
///
/// Clauses are applied as a composite key: the first clause is the primary
/// key and every following clause only breaks ties left by the previous ones.
/// The sort is stable, so records equal on every key keep their input order.
/// A blank order string returns the input untouched.
pub fn apply_order<T: Sortable>(items: Vec<T>, order: Option<&str>) -> Vec<T> {
    let clauses = match order {
        Some(raw) => parse_order(raw),
        None => return items,
    };
    if clauses.is_empty() {
        return items;
    }

    let mut keyed: Vec<(Vec<SortKey>, usize)> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let keys = clauses.iter().map(|c| item.sort_key(&c.field)).collect();
            (keys, index)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        clauses
            .iter()
            .zip(a.iter().zip(b.iter()))
            .fold(Ordering::Equal, |acc, (clause, (ka, kb))| {
                acc.then_with(|| {
                    let ord = ka.cmp(kb);
                    if clause.is_descending() {
                        ord.reverse()
                    } else {
                        ord
                    }
                })
            })
    });

    // An empty ordering falls back to the unsorted input. Only reachable for
    // empty input, where both are the same; kept as observed behavior.
    if keyed.is_empty() {
        return items;
    }

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    keyed
        .into_iter()
        .filter_map(|(_, index)| slots[index].take())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        category: &'static str,
        price: i64,
    }

    impl Sortable for Item {
        fn sort_key(&self, field: &str) -> SortKey {
            match field {
                "name" => SortKey::from(self.name),
                "category" => SortKey::from(self.category),
                "price" => SortKey::from(self.price),
                _ => SortKey::Null,
            }
        }
    }

    fn item(name: &'static str, category: &'static str, price: i64) -> Item {
        Item { name, category, price }
    }

    fn names(items: &[Item]) -> Vec<&'static str> {
        items.iter().map(|i| i.name).collect()
    }

    fn prices(items: &[Item]) -> Vec<i64> {
        items.iter().map(|i| i.price).collect()
    }

    fn sample() -> Vec<Item> {
        vec![item("a", "tools", 30), item("b", "books", 10), item("c", "tools", 20)]
    }

    #[test]
    fn test_parse_clause_directions() {
        assert_eq!(SortClause::parse("price desc"), SortClause::desc("price"));
        assert_eq!(SortClause::parse("  Price DESC "), SortClause::desc("price"));
        assert_eq!(SortClause::parse("title asc"), SortClause::asc("title"));
        assert_eq!(SortClause::parse("title"), SortClause::asc("title"));
        assert_eq!(SortClause::parse("category   Asc"), SortClause::asc("category"));
    }

    #[test]
    fn test_direction_needs_a_space_separator() {
        assert_eq!(SortClause::parse("price\tdesc"), SortClause::asc("price\tdesc"));
        assert_eq!(SortClause::parse("pricedesc"), SortClause::asc("pricedesc"));

        let ordered = apply_order(sample(), Some("price\tdesc"));
        assert_eq!(prices(&ordered), vec![30, 10, 20]);
    }

    #[test]
    fn test_parse_order_blank() {
        assert!(parse_order("").is_empty());
        assert!(parse_order("   ").is_empty());
        assert_eq!(parse_order("a, b desc").len(), 2);
    }

    #[test]
    fn test_price_ascending_and_descending() {
        let asc = apply_order(sample(), Some("price asc"));
        assert_eq!(prices(&asc), vec![10, 20, 30]);

        let desc = apply_order(sample(), Some("price desc"));
        assert_eq!(prices(&desc), vec![30, 20, 10]);
    }

    #[test]
    fn test_multi_key_ordering() {
        let items = vec![
            item("a", "tools", 10),
            item("b", "books", 5),
            item("c", "tools", 40),
            item("d", "books", 15),
            item("e", "tools", 25),
        ];
        let ordered = apply_order(items, Some("category asc, price desc"));
        assert_eq!(names(&ordered), vec!["d", "b", "c", "e", "a"]);
    }

    #[test]
    fn test_unknown_field_keeps_relative_order() {
        let ordered = apply_order(sample(), Some("nonexistent"));
        assert_eq!(names(&ordered), vec!["a", "b", "c"]);

        let ordered = apply_order(sample(), Some("nonexistent desc"));
        assert_eq!(names(&ordered), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unknown_field_falls_through_to_next_clause() {
        let ordered = apply_order(sample(), Some("bogus, price"));
        assert_eq!(prices(&ordered), vec![10, 20, 30]);
    }

    #[test]
    fn test_field_names_are_case_insensitive() {
        let ordered = apply_order(sample(), Some("PRICE Desc"));
        assert_eq!(prices(&ordered), vec![30, 20, 10]);
    }

    #[test]
    fn test_blank_or_missing_order_is_identity() {
        assert_eq!(apply_order(sample(), None), sample());
        assert_eq!(apply_order(sample(), Some("  ")), sample());
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<Item> = Vec::new();
        assert!(apply_order(empty, Some("price")).is_empty());
    }

    #[test]
    fn test_null_sorts_lowest() {
        assert!(SortKey::Null < SortKey::Integer(i64::MIN));
        assert!(SortKey::Null < SortKey::Text(String::new()));
        assert_eq!(SortKey::from(None::<i32>), SortKey::Null);
        assert!(SortKey::Decimal(1.5) < SortKey::Decimal(2.0));
    }
}
