use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::value::Value;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableSortDirection {
    #[default]
    Asc,
    Desc,
}

impl TableSortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Active sort key and direction. A table with no `TableSort` keeps record
/// order untouched.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TableSort {
    pub key: String,
    pub direction: TableSortDirection,
}

impl TableSort {
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: TableSortDirection::Asc,
        }
    }

    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: TableSortDirection::Desc,
        }
    }

    /// Sort that results from clicking the `key` header: a new key starts
    /// ascending, the current key flips direction. There is no unsorted step.
    pub fn toggled(current: Option<&TableSort>, key: &str) -> Self {
        match current {
            Some(sort) if sort.key == key => Self {
                key: sort.key.clone(),
                direction: sort.direction.flipped(),
            },
            _ => Self::asc(key),
        }
    }

    pub fn indicator_for(current: Option<&TableSort>, field: &str) -> SortIndicator {
        match current {
            Some(sort) if sort.key == field => match sort.direction {
                TableSortDirection::Asc => SortIndicator::Ascending,
                TableSortDirection::Desc => SortIndicator::Descending,
            },
            _ => SortIndicator::Unsorted,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Unsorted => "⇅",
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// Orders two field values. Null sorts after every present value in both
/// directions; the direction only reverses comparisons between present values.
pub fn compare_values(left: &Value, right: &Value, direction: TableSortDirection) -> Ordering {
    match (left.is_null(), right.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = left.natural_cmp(right);
            match direction {
                TableSortDirection::Asc => ordering,
                TableSortDirection::Desc => ordering.reverse(),
            }
        }
    }
}

/// Stable sort of `rows` by `sort`. Without a sort the input order is kept.
pub fn sort_records<'r>(mut rows: Vec<&'r Record>, sort: Option<&TableSort>) -> Vec<&'r Record> {
    if let Some(sort) = sort {
        rows.sort_by(|left, right| {
            compare_values(left.value(&sort.key), right.value(&sort.key), sort.direction)
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(rows: &[&Record]) -> Vec<String> {
        rows.iter()
            .map(|record| record.value("name").display_text())
            .collect()
    }

    fn people() -> Vec<Record> {
        vec![
            Record::new().set("name", "Bob").set("age", 30).set("team", "red"),
            Record::new().set("name", "Ann").set("age", 25).set("team", "blue"),
            Record::new().set("name", "Cid").set("age", 40).set("team", "red"),
            Record::new().set("name", "Dee").set("team", "blue"),
            Record::new().set("name", "Eve").set("age", 25).set("team", "red"),
        ]
    }

    #[test]
    fn unsorted_keeps_input_order() {
        let records = people();
        let rows = sort_records(records.iter().collect(), None);
        assert_eq!(names(&rows), ["Bob", "Ann", "Cid", "Dee", "Eve"]);
    }

    #[test]
    fn ascending_is_stable_and_puts_missing_last() {
        let records = people();
        let rows = sort_records(records.iter().collect(), Some(&TableSort::asc("age")));
        assert_eq!(names(&rows), ["Ann", "Eve", "Bob", "Cid", "Dee"]);
    }

    #[test]
    fn descending_keeps_ties_in_input_order_and_missing_last() {
        let records = people();
        let rows = sort_records(records.iter().collect(), Some(&TableSort::desc("age")));
        assert_eq!(names(&rows), ["Cid", "Bob", "Ann", "Eve", "Dee"]);

        let rows = sort_records(records.iter().collect(), Some(&TableSort::desc("team")));
        assert_eq!(names(&rows), ["Bob", "Cid", "Eve", "Ann", "Dee"]);
    }

    #[test]
    fn sorting_twice_gives_the_same_order() {
        let records = people();
        let sort = TableSort::desc("team");
        let once = sort_records(records.iter().collect(), Some(&sort));
        let twice = sort_records(once.clone(), Some(&sort));
        assert_eq!(once, twice);
    }

    fn mixed_column() -> Vec<Record> {
        let values = [
            Value::from("5"),
            Value::from(10),
            Value::from(true),
            Value::from(9_007_199_254_740_993_i64),
            Value::from(2.5),
            Value::Null,
            Value::from("10"),
            Value::from(9),
            Value::from(9_007_199_254_740_992.0),
            Value::from(f64::NAN),
            Value::from(rust_decimal::Decimal::new(25, 1)),
            Value::from(false),
            Value::from(-3),
            Value::from("Ann"),
        ];
        // Repeat with a stride so equal values are spread through the input.
        (0..values.len() * 3)
            .map(|index| {
                Record::new()
                    .set("name", index.to_string())
                    .set("value", values[(index * 5) % values.len()].clone())
            })
            .collect()
    }

    #[test]
    fn mixed_columns_sort_into_non_decreasing_order() {
        let records = mixed_column();
        for sort in [TableSort::asc("value"), TableSort::desc("value")] {
            let rows = sort_records(records.iter().collect(), Some(&sort));
            assert_eq!(rows.len(), records.len());
            for pair in rows.windows(2) {
                let ordering =
                    compare_values(pair[0].value("value"), pair[1].value("value"), sort.direction);
                assert_ne!(ordering, Ordering::Greater, "{sort:?} {:?}", pair);
            }
        }
    }

    #[test]
    fn mixed_column_groups_numbers_before_text() {
        let records = [
            Record::new().set("name", "a").set("value", 9),
            Record::new().set("name", "b").set("value", 10),
            Record::new().set("name", "c").set("value", "5"),
        ];
        let rows = sort_records(records.iter().collect(), Some(&TableSort::asc("value")));
        assert_eq!(names(&rows), ["a", "b", "c"]);
        let rows = sort_records(records.iter().collect(), Some(&TableSort::desc("value")));
        assert_eq!(names(&rows), ["c", "b", "a"]);
    }

    #[test]
    fn header_clicks_start_ascending_then_flip() {
        let first = TableSort::toggled(None, "age");
        assert_eq!(first, TableSort::asc("age"));

        let second = TableSort::toggled(Some(&first), "age");
        assert_eq!(second, TableSort::desc("age"));

        let third = TableSort::toggled(Some(&second), "age");
        assert_eq!(third, TableSort::asc("age"));

        let other = TableSort::toggled(Some(&second), "name");
        assert_eq!(other, TableSort::asc("name"));
    }

    #[test]
    fn indicator_tracks_the_active_key() {
        let sort = TableSort::desc("age");
        assert_eq!(TableSort::indicator_for(Some(&sort), "age").symbol(), "↓");
        assert_eq!(TableSort::indicator_for(Some(&sort), "name").symbol(), "⇅");
        assert_eq!(TableSort::indicator_for(None, "age"), SortIndicator::Unsorted);
    }
}
