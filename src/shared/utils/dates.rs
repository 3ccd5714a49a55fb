use chrono::{Datelike, NaiveDate, Utc};

/// Return calculated age by using given birth date and/or death date.
pub fn calculate_age(birth_date: NaiveDate, death_date: Option<NaiveDate>) -> i32 {
    let end = death_date.unwrap_or_else(|| Utc::now().date_naive());
    let days = (end - birth_date).num_days();
    (days / 365) as i32
}

pub fn current_year() -> i16 {
    Utc::now().year() as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_between_fixed_dates() {
        let birth = NaiveDate::from_ymd_opt(1956, 7, 9).unwrap();
        let death = NaiveDate::from_ymd_opt(2022, 7, 9).unwrap();
        // 66 years incl. leap days: floor(days / 365) lands on 66
        assert_eq!(calculate_age(birth, Some(death)), 66);
    }

    #[test]
    fn age_is_negative_for_future_birth_date() {
        let birth = NaiveDate::from_ymd_opt(9999, 1, 1).unwrap();
        assert!(calculate_age(birth, None) < 0);
    }
}
