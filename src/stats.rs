use crate::models::{DayCounts, MovieTable};
use crate::vocabulary::DayKey;
use chrono::Weekday;

/// Number of movies released on `day`. Zero when nothing matches.
pub fn count_for_day(table: &MovieTable, day: DayKey) -> u64 {
    let target = day.weekday();
    table
        .records()
        .iter()
        .filter(|record| record.weekday() == Some(target))
        .count() as u64
}

/// Counts for all seven days, in vocabulary order.
pub fn count_all_days(table: &MovieTable) -> DayCounts {
    let mut histogram = [0u64; 7];
    for weekday in table.records().iter().filter_map(|record| record.weekday()) {
        let slot = &mut histogram[slot(weekday)];
        *slot = slot.saturating_add(1);
    }

    DayCounts(
        DayKey::all()
            .map(|day| (day, histogram[slot(day.weekday())]))
            .collect(),
    )
}

fn slot(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovieRecord;
    use crate::vocabulary::normalize;

    fn table(days: &[&str]) -> MovieTable {
        MovieTable::new(
            days.iter()
                .enumerate()
                .map(|(i, day)| MovieRecord::new(format!("movie {i}"), *day))
                .collect(),
        )
    }

    #[test]
    fn counts_matching_rows() {
        let table = table(&["Monday", "Monday", "Friday"]);
        assert_eq!(count_for_day(&table, normalize("lunes").unwrap()), 2);
        assert_eq!(count_for_day(&table, normalize("viernes").unwrap()), 1);
    }

    #[test]
    fn missing_day_counts_zero() {
        let table = table(&["Monday", "Monday", "Friday"]);
        assert_eq!(count_for_day(&table, normalize("domingo").unwrap()), 0);
    }

    #[test]
    fn table_values_match_case_insensitively() {
        let table = table(&["TUESDAY", "tuesday", "Tuesday", "Tues"]);
        assert_eq!(count_for_day(&table, normalize("Martes").unwrap()), 3);
    }

    #[test]
    fn count_is_idempotent() {
        let table = table(&["Saturday", "Sunday", "saturday"]);
        let day = normalize("sabado").unwrap();
        let first = count_for_day(&table, day);
        assert_eq!(first, 2);
        assert_eq!(count_for_day(&table, day), first);
    }

    #[test]
    fn empty_table_reports_all_days_as_zero() {
        let counts = count_all_days(&MovieTable::default());
        assert!(!counts.is_empty());
        assert_eq!(counts.len(), 7);
        assert!(counts.0.iter().all(|&(_, count)| count == 0));
        let keys: Vec<_> = counts.0.iter().map(|(day, _)| *day).collect();
        assert_eq!(keys, DayKey::all().collect::<Vec<_>>());
    }

    #[test]
    fn full_report_agrees_with_single_day_counts() {
        let table = table(&["Monday", "Wednesday", "wednesday", "Sunday", "Funday", ""]);
        let counts = count_all_days(&table);
        for day in DayKey::all() {
            assert_eq!(counts.get(day), Some(count_for_day(&table, day)));
        }
        let total: u64 = counts.0.iter().map(|&(_, count)| count).sum();
        assert_eq!(total, 4);
        assert_eq!(table.len(), 6);
    }
}
