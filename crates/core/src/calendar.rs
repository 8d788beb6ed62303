//! Month grouping for calendar-style listings.

use chrono::{Datelike, NaiveDate};

/// A record that falls on a calendar date.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// Records that share a calendar month, sorted by date ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup<'a, T> {
    /// Human-readable "Month Year" label, e.g. "February 2026".
    pub label: String,
    pub items: Vec<&'a T>,
}

impl<T> MonthGroup<'_, T> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Label used for a month group.
#[must_use]
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Partition records into month groups.
///
/// Groups appear in the order their month is first seen in `items`, which is
/// neither alphabetical nor necessarily chronological. Within a group records
/// are sorted by date; the sort is stable, so same-day records keep their
/// input order.
pub fn group_by_month<T: Dated>(items: &[T]) -> Vec<MonthGroup<'_, T>> {
    let mut keys: Vec<(i32, u32)> = Vec::new();
    let mut groups: Vec<MonthGroup<'_, T>> = Vec::new();

    for item in items {
        let date = item.date();
        let key = (date.year(), date.month());
        match keys.iter().position(|k| *k == key) {
            Some(i) => {
                if let Some(group) = groups.get_mut(i) {
                    group.items.push(item);
                }
            }
            None => {
                keys.push(key);
                groups.push(MonthGroup {
                    label: month_label(date),
                    items: vec![item],
                });
            }
        }
    }

    for group in &mut groups {
        group.items.sort_by_key(|item| item.date());
    }
    groups
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    struct Entry {
        name: &'static str,
        date: NaiveDate,
    }

    impl Dated for Entry {
        fn date(&self) -> NaiveDate {
            self.date
        }
    }

    fn entry(name: &'static str, iso: &str) -> Entry {
        Entry {
            name,
            date: iso.parse().unwrap(),
        }
    }

    fn names<'a>(group: &MonthGroup<'a, Entry>) -> Vec<&'a str> {
        group.items.iter().map(|e| e.name).collect()
    }

    #[test]
    fn test_groups_february_and_march() {
        let items = [
            entry("a", "2026-02-06"),
            entry("b", "2026-02-13"),
            entry("c", "2026-03-05"),
        ];
        let groups = group_by_month(&items);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "February 2026");
        assert_eq!(names(&groups[0]), ["a", "b"]);
        assert_eq!(groups[1].label, "March 2026");
        assert_eq!(names(&groups[1]), ["c"]);
    }

    #[test]
    fn test_empty_input() {
        let items: [Entry; 0] = [];
        assert!(group_by_month(&items).is_empty());
    }

    #[test]
    fn test_group_order_follows_first_appearance() {
        let items = [
            entry("apr", "2026-04-02"),
            entry("jan", "2026-01-20"),
            entry("apr-early", "2026-04-01"),
        ];
        let groups = group_by_month(&items);

        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, ["April 2026", "January 2026"]);
        assert_eq!(names(&groups[0]), ["apr-early", "apr"]);
    }

    #[test]
    fn test_same_month_different_years_are_separate() {
        let items = [entry("old", "2025-02-01"), entry("new", "2026-02-01")];
        let groups = group_by_month(&items);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "February 2025");
        assert_eq!(groups[1].label, "February 2026");
    }

    #[test]
    fn test_same_day_keeps_input_order() {
        let items = [
            entry("second", "2026-02-13"),
            entry("first", "2026-02-10"),
            entry("third", "2026-02-13"),
        ];
        let groups = group_by_month(&items);
        assert_eq!(names(&groups[0]), ["first", "second", "third"]);
    }
}
