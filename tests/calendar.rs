#[cfg(test)]
mod tests {
    use frond::libs::calendar::month_grid;
    use frond::libs::care_date::CareDate;
    use std::collections::BTreeSet;

    fn date(y: i32, m: u32, d: u32) -> CareDate {
        CareDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_leading_blanks_match_weekday_of_the_first() {
        // 2024-02-01 was a Thursday, four days after Sunday
        let grid = month_grid(2024, 2, &BTreeSet::new()).unwrap();
        assert_eq!(grid.leading_blanks, 4);

        // 2023-10-01 was a Sunday
        let grid = month_grid(2023, 10, &BTreeSet::new()).unwrap();
        assert_eq!(grid.leading_blanks, 0);
    }

    #[test]
    fn test_leap_year_february_has_29_cells() {
        let grid = month_grid(2024, 2, &BTreeSet::new()).unwrap();
        assert_eq!(grid.days.len(), 29);
        assert_eq!(grid.days.last().unwrap().date, date(2024, 2, 29));
    }

    #[test]
    fn test_non_leap_february_has_28_cells() {
        let grid = month_grid(2023, 2, &BTreeSet::new()).unwrap();
        assert_eq!(grid.days.len(), 28);
    }

    #[test]
    fn test_month_lengths() {
        assert_eq!(month_grid(2024, 1, &BTreeSet::new()).unwrap().days.len(), 31);
        assert_eq!(month_grid(2024, 4, &BTreeSet::new()).unwrap().days.len(), 30);
        assert_eq!(month_grid(2024, 12, &BTreeSet::new()).unwrap().days.len(), 31);
    }

    #[test]
    fn test_cells_carry_their_dates() {
        let grid = month_grid(2024, 5, &BTreeSet::new()).unwrap();
        assert_eq!(grid.days[0].day, 1);
        assert_eq!(grid.days[0].date, date(2024, 5, 1));
        assert_eq!(grid.days[23].date, date(2024, 5, 24));
    }

    #[test]
    fn test_days_with_tasks_are_flagged() {
        let due_dates: BTreeSet<CareDate> = [date(2024, 5, 24), date(2024, 5, 25)].into_iter().collect();
        let grid = month_grid(2024, 5, &due_dates).unwrap();

        let flagged: Vec<u32> = grid.days.iter().filter(|c| c.has_task).map(|c| c.day).collect();
        assert_eq!(flagged, vec![24, 25]);
    }

    #[test]
    fn test_tasks_in_other_months_do_not_leak() {
        let due_dates: BTreeSet<CareDate> = [date(2024, 4, 24), date(2024, 6, 24)].into_iter().collect();
        let grid = month_grid(2024, 5, &due_dates).unwrap();
        assert!(grid.days.iter().all(|c| !c.has_task));
    }

    #[test]
    fn test_invalid_month_yields_no_grid() {
        assert!(month_grid(2024, 0, &BTreeSet::new()).is_none());
        assert!(month_grid(2024, 13, &BTreeSet::new()).is_none());
    }

    #[test]
    fn test_weeks_are_padded_to_seven() {
        let grid = month_grid(2024, 2, &BTreeSet::new()).unwrap();
        let weeks = grid.weeks();
        assert!(weeks.iter().all(|week| week.len() == 7));

        // 4 blanks + 29 days = 33 cells over 5 weeks
        assert_eq!(weeks.len(), 5);
        assert!(weeks[0][..4].iter().all(|cell| cell.is_none()));
        assert_eq!(weeks[0][4].unwrap().day, 1);
        // 33 cells fill 4 full weeks and 5 cells of the last
        assert_eq!(weeks[4][4].unwrap().day, 29);
        assert!(weeks[4][5].is_none());
        assert!(weeks[4][6].is_none());
    }

    #[test]
    fn test_grid_is_deterministic() {
        let due_dates: BTreeSet<CareDate> = [date(2024, 5, 24)].into_iter().collect();
        let first = month_grid(2024, 5, &due_dates).unwrap();
        let second = month_grid(2024, 5, &due_dates).unwrap();
        assert_eq!(first.days, second.days);
        assert_eq!(first.leading_blanks, second.leading_blanks);
    }
}
