#[path = "common/mod.rs"]
mod common;

use common::*;
use tdprofile::{iter_months, Month, MonthError};

/// Independent reference: months since year 0, shifted and split back.
fn shifted(m: Month, delta: i32) -> Month {
    let total = m.year() * 12 + (m.month() as i32 - 1) + delta;
    ym(total.div_euclid(12), total.rem_euclid(12) + 1)
}

#[test]
fn add_and_subtract_within_year() {
    assert_eq!(ym(2018, 1).add(1).unwrap(), ym(2018, 2));
    assert_eq!(ym(2018, 2).subtract(1).unwrap(), ym(2018, 1));
}

#[test]
fn add_and_subtract_across_year_boundary() {
    assert_eq!(ym(2018, 10).add(3).unwrap(), ym(2019, 1));
    assert_eq!(ym(2019, 1).subtract(3).unwrap(), ym(2018, 10));
    assert_eq!(ym(2018, 12).add(12).unwrap(), ym(2019, 12));
    assert_eq!(ym(2018, 12).add(13).unwrap(), ym(2020, 1));
}

/// Offset residue equal to the current month lands on the previous December.
#[test]
fn subtract_onto_previous_december() {
    assert_eq!(ym(2018, 7).subtract(7).unwrap(), ym(2017, 12));
    assert_eq!(ym(2018, 7).subtract(19).unwrap(), ym(2016, 12));
    assert_eq!(ym(2018, 1).subtract(1).unwrap(), ym(2017, 12));
    // residue smaller than the month stays in the same year
    assert_eq!(ym(2017, 12).subtract(7).unwrap(), ym(2017, 5));
    assert_eq!(ym(2018, 3).subtract(12).unwrap(), ym(2017, 3));
}

/// Every month, every offset residue, several whole-year offsets: the
/// case-split subtraction and the zero-based addition agree with plain
/// month counting, and undo each other.
#[test]
fn offsets_agree_with_month_counting() {
    for year in [1999, 2000, 2018] {
        for month in 1..=12 {
            let m = ym(year, month);
            for n in 1..=60 {
                let back = m.subtract(n).unwrap();
                let fwd = m.add(n).unwrap();
                assert_eq!(back, shifted(m, -n), "{m} - {n}");
                assert_eq!(fwd, shifted(m, n), "{m} + {n}");
                assert_eq!(back.add(n).unwrap(), m, "({m} - {n}) + {n}");
                assert_eq!(fwd.subtract(n).unwrap(), m, "({m} + {n}) - {n}");
            }
        }
    }
}

#[test]
fn offsets_must_be_positive() {
    let m = ym(2018, 1);
    assert!(matches!(m.add(0), Err(MonthError::InvalidArgument(_))));
    assert!(matches!(m.add(-3), Err(MonthError::InvalidArgument(_))));
    assert!(matches!(m.subtract(-1), Err(MonthError::InvalidArgument(_))));
    assert!(matches!(m.subtract(0), Err(MonthError::InvalidArgument(_))));
}

#[test]
fn offsets_stay_within_year_range() {
    assert!(matches!(ym(9999, 12).add(1), Err(MonthError::InvalidArgument(_))));
    assert!(matches!(ym(888, 1).subtract(1), Err(MonthError::InvalidArgument(_))));
    assert!(ym(2018, 1).add(i32::MAX).is_err());
    assert!(ym(2018, 1).subtract(i32::MAX).is_err());
    assert_eq!(ym(9999, 11).add(1).unwrap(), ym(9999, 12));
}

#[test]
fn fiscal_year_relabels_from_october() {
    assert_eq!(ym(2016, 10).as_fiscal_year().unwrap(), ym(2017, 10));
    assert_eq!(ym(2017, 10).as_fiscal_year().unwrap(), ym(2018, 10));
    assert_eq!(ym(2017, 12).as_fiscal_year().unwrap(), ym(2018, 12));
    assert_eq!(ym(2017, 3).as_fiscal_year().unwrap(), ym(2017, 3));
    assert_eq!(ym(2017, 9).as_fiscal_year().unwrap(), ym(2017, 9));
}

#[test]
fn calendar_year_relabels_from_october() {
    assert_eq!(ym(2018, 10).as_calendar_year().unwrap(), ym(2017, 10));
    assert_eq!(ym(2017, 3).as_calendar_year().unwrap(), ym(2017, 3));
}

/// Conversions return new values; the receiver is untouched.
#[test]
fn conversions_do_not_change_the_original() {
    let m = ym(2018, 10);
    let alias = m;
    let _ = m.as_calendar_year().unwrap();
    let _ = m.as_fiscal_year().unwrap();
    assert_eq!(m, ym(2018, 10));
    assert_eq!(alias, m);
}

#[test]
fn fiscal_then_calendar_is_identity() {
    for start in 1..=12u8 {
        for month in 1..=12 {
            let m = ym(2017, month);
            let fy = m.as_fiscal_year_from(start).unwrap();
            assert_eq!(fy.as_calendar_year_from(start).unwrap(), m, "{m} start {start}");
        }
    }
    // a January start moves every month to the next label
    assert_eq!(ym(2017, 1).as_fiscal_year_from(1).unwrap(), ym(2018, 1));
    assert_eq!(ym(2017, 7).as_fiscal_year_from(7).unwrap(), ym(2018, 7));
    assert_eq!(ym(2017, 6).as_fiscal_year_from(7).unwrap(), ym(2017, 6));
}

#[test]
fn fiscal_start_month_is_validated() {
    assert!(matches!(ym(2017, 3).as_fiscal_year_from(0), Err(MonthError::InvalidArgument(_))));
    assert!(matches!(ym(2017, 3).as_calendar_year_from(13), Err(MonthError::InvalidArgument(_))));
    assert!(ym(9999, 11).as_fiscal_year().is_err());
    assert!(ym(888, 11).as_calendar_year().is_err());
}

#[test]
fn next_and_prev_stop_at_range_edges() {
    assert_eq!(ym(2018, 12).next(), Some(ym(2019, 1)));
    assert_eq!(ym(2019, 1).prev(), Some(ym(2018, 12)));
    assert_eq!(ym(9999, 12).next(), None);
    assert_eq!(ym(888, 1).prev(), None);
}

#[test]
fn iter_months_is_inclusive() {
    let keys: Vec<String> = iter_months(ym(2017, 11), ym(2018, 2)).map(|m| m.to_key()).collect();
    assert_eq!(keys, vec!["201711", "201712", "201801", "201802"]);

    assert_eq!(iter_months(ym(2018, 5), ym(2018, 5)).count(), 1);
    assert_eq!(iter_months(ym(2018, 6), ym(2018, 5)).count(), 0);
    assert_eq!(iter_months(ym(9999, 11), ym(9999, 12)).count(), 2);
}

/// Relabelling is checked like any other arithmetic at the ends of the year range.
#[test]
fn relabelling_fails_at_range_edges() {
    assert!(matches!(ym(9999, 10).as_fiscal_year(), Err(MonthError::InvalidArgument(_))));
    assert_eq!(ym(9999, 9).as_fiscal_year().unwrap(), ym(9999, 9));
    assert!(matches!(ym(888, 12).as_calendar_year(), Err(MonthError::InvalidArgument(_))));
    assert_eq!(ym(888, 3).as_calendar_year().unwrap(), ym(888, 3));
}
