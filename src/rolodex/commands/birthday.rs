use super::helpers::find_record;
use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BIRTHDAY_FORMAT;
use chrono::NaiveDate;

/// Days from `today` until the contact's next birthday. A contact without a
/// birthday gets an info message, not an error.
pub fn run(book: &AddressBook, name: &str, today: NaiveDate) -> Result<CmdResult> {
    let record = find_record(book, name)?;
    let mut result = CmdResult::default();

    match record.days_to_birthday(today) {
        Some(countdown) => {
            result.add_message(CmdMessage::info(format!(
                "Contact: {}, nearest birthday: {}, days until birthday: {}",
                record.name(),
                countdown.next.format(BIRTHDAY_FORMAT),
                countdown.days
            )));
            result.countdown = Some(countdown);
        }
        None => {
            result.add_message(CmdMessage::info(format!(
                "Contact {} has no birthday on record",
                record.name()
            )));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reports_countdown() {
        let book = BookFixture::new().with_birthday("Al", "1985.12.25").build();
        let result = run(&book, "Al", date(2024, 12, 20)).unwrap();

        let countdown = result.countdown.unwrap();
        assert_eq!(countdown.days, 5);
        assert_eq!(
            result.message_texts(),
            vec!["Contact: Al, nearest birthday: 2024.12.25, days until birthday: 5"]
        );
    }

    #[test]
    fn upcoming_and_passed_birthdays_both_return_a_count() {
        let book = BookFixture::new().with_birthday("Al", "1985.06.01").build();
        assert_eq!(run(&book, "Al", date(2024, 5, 1)).unwrap().countdown.unwrap().days, 31);
        assert_eq!(
            run(&book, "Al", date(2024, 6, 2)).unwrap().countdown.unwrap().next,
            date(2025, 6, 1)
        );
    }

    #[test]
    fn missing_birthday_is_not_an_error() {
        let book = BookFixture::new().with_contact("Bo", &[]).build();
        let result = run(&book, "Bo", date(2024, 1, 1)).unwrap();
        assert!(result.countdown.is_none());
        assert_eq!(
            result.message_texts(),
            vec!["Contact Bo has no birthday on record"]
        );
    }

    #[test]
    fn unknown_contact_fails() {
        assert!(run(&AddressBook::new(), "Al", date(2024, 1, 1)).is_err());
    }
}
