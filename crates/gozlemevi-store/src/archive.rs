use std::cmp::Ordering;
use std::collections::HashSet;

use indexmap::IndexMap;

use crate::clock::parse_display_date;
use crate::wish::Wish;

/// Wishes that share one display date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup<'a> {
    pub date: &'a str,
    pub wishes: Vec<&'a Wish>,
}

/// Groups wishes by their `date` string, most recent day first.
///
/// Wishes keep their collection order inside a group. Dates that do not parse
/// as `dd.mm.yyyy` sort after every parseable day.
pub fn group_by_day(wishes: &[Wish]) -> Vec<DayGroup<'_>> {
    let mut by_date: IndexMap<&str, Vec<&Wish>> = IndexMap::new();
    for wish in wishes {
        by_date.entry(wish.date.as_str()).or_default().push(wish);
    }
    let mut groups: Vec<DayGroup<'_>> = by_date
        .into_iter()
        .map(|(date, wishes)| DayGroup { date, wishes })
        .collect();
    groups.sort_by(|a, b| newest_day_first(a.date, b.date));
    groups
}

fn newest_day_first(a: &str, b: &str) -> Ordering {
    match (parse_display_date(a), parse_display_date(b)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.cmp(a),
    }
}

/// Totals shown on the home view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WishStats {
    pub total: usize,
    pub with_image: usize,
    pub active_days: usize,
}

impl WishStats {
    pub fn from_wishes(wishes: &[Wish]) -> Self {
        let days: HashSet<&str> = wishes.iter().map(|wish| wish.date.as_str()).collect();
        Self {
            total: wishes.len(),
            with_image: wishes.iter().filter(|wish| wish.has_image()).count(),
            active_days: days.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn wish(id: &str, date: &str, image: bool) -> Wish {
        Wish {
            id: id.into(),
            name: format!("name-{id}"),
            message: format!("message-{id}"),
            image: image.then(|| "data:image/png;base64,AA==".to_string()),
            date: date.into(),
            timestamp: 0,
        }
    }

    fn ids(group: &DayGroup<'_>) -> Vec<String> {
        group.wishes.iter().map(|wish| wish.id.clone()).collect()
    }

    #[test]
    fn groups_sort_by_calendar_not_by_string() {
        let wishes = vec![
            wish("a", "31.01.2026", false),
            wish("b", "01.02.2026", false),
            wish("c", "15.12.2025", false),
        ];
        let dates: Vec<&str> = group_by_day(&wishes).iter().map(|g| g.date).collect();
        assert_eq!(dates, vec!["01.02.2026", "31.01.2026", "15.12.2025"]);
    }

    #[test]
    fn members_keep_collection_order() {
        let wishes = vec![
            wish("5", "02.03.2026", false),
            wish("4", "01.03.2026", false),
            wish("3", "02.03.2026", false),
            wish("2", "01.03.2026", false),
            wish("1", "02.03.2026", false),
        ];
        let groups = group_by_day(&wishes);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].date, "02.03.2026");
        assert_eq!(ids(&groups[0]), vec!["5", "3", "1"]);
        assert_eq!(ids(&groups[1]), vec!["4", "2"]);
    }

    #[test]
    fn unparseable_dates_sort_last() {
        let wishes = vec![
            wish("a", "3/7/2026", false),
            wish("b", "01.01.2020", false),
            wish("c", "garbage", false),
        ];
        let dates: Vec<&str> = group_by_day(&wishes).iter().map(|g| g.date).collect();
        assert_eq!(dates, vec!["01.01.2020", "garbage", "3/7/2026"]);
    }

    #[test]
    fn empty_collection_has_no_groups() {
        assert!(group_by_day(&[]).is_empty());
        assert_eq!(WishStats::from_wishes(&[]), WishStats::default());
    }

    #[test]
    fn stats_count_images_and_distinct_days() {
        let wishes = vec![
            wish("a", "01.01.2026", true),
            wish("b", "01.01.2026", false),
            wish("c", "02.01.2026", true),
        ];
        assert_eq!(
            WishStats::from_wishes(&wishes),
            WishStats {
                total: 3,
                with_image: 2,
                active_days: 2,
            }
        );
    }
}
