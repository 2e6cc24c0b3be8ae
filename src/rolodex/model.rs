//! # Contact Model
//!
//! A contact is a [`Record`]: one [`Name`], an ordered list of [`Phone`]s and an
//! optional [`Birthday`]. Every piece of contact data is a [`Field`], a single
//! value holder whose type decides what a valid write looks like:
//!
//! - `Name`: any non-empty string (trimmed). Immutable once built.
//! - `Phone`: exactly ten ASCII digits. Invalid writes never replace a stored
//!   value; they come back as [`PhoneUpdate::Rejected`] so callers can report
//!   them without the model printing anything.
//! - `Birthday`: a date written as `YYYY.MM.DD`.
//!
//! Phones are compared by their exact string value. Duplicates are allowed and
//! list order is insertion order.

use crate::error::{Result, RolodexError};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Input/display format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%Y.%m.%d";

const PHONE_DIGITS: usize = 10;

/// A single validated value holder.
pub trait Field {
    type Value;

    fn value(&self) -> &Self::Value;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(RolodexError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Name {
    type Value = String;

    fn value(&self) -> &String {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of writing a value into a [`Phone`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneUpdate {
    Accepted {
        previous: Option<String>,
        value: String,
    },
    Rejected {
        value: String,
        reason: String,
    },
}

impl PhoneUpdate {
    pub fn is_accepted(&self) -> bool {
        matches!(self, PhoneUpdate::Accepted { .. })
    }

    fn rejected(value: &str) -> Self {
        PhoneUpdate::Rejected {
            value: value.to_string(),
            reason: RolodexError::InvalidPhone {
                value: value.to_string(),
            }
            .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn is_valid(value: &str) -> bool {
        value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn parse(value: &str) -> Result<Self> {
        if Self::is_valid(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(RolodexError::InvalidPhone {
                value: value.to_string(),
            })
        }
    }

    /// Replaces the number if `value` is valid; otherwise the stored number
    /// stays as it was.
    pub fn set(&mut self, value: &str) -> PhoneUpdate {
        if !Self::is_valid(value) {
            return PhoneUpdate::rejected(value);
        }
        let previous = std::mem::replace(&mut self.0, value.to_string());
        PhoneUpdate::Accepted {
            previous: Some(previous),
            value: value.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Phone {
    type Value = String;

    fn value(&self) -> &String {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(value: &str) -> Result<Self> {
        NaiveDate::parse_from_str(value.trim(), BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|source| RolodexError::InvalidBirthday {
                value: value.to_string(),
                source,
            })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday's month/day in `year`. Feb 29 lands on Mar 1 when `year`
    /// is not a leap year.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }
}

impl Field for Birthday {
    type Value = NaiveDate;

    fn value(&self) -> &NaiveDate {
        &self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

/// Next birthday relative to some reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayCountdown {
    pub next: NaiveDate,
    pub days: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str, birthday: Option<&str>) -> Result<Self> {
        let name = Name::new(name)?;
        let birthday = birthday.map(Birthday::parse).transpose()?;
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday,
        })
    }

    /// Rebuilds a record from already validated parts (used when loading).
    pub fn from_parts(name: Name, phones: Vec<Phone>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones,
            birthday,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Appends `phone` when it is valid. Rejected numbers are not stored.
    pub fn add_phone(&mut self, phone: &str) -> PhoneUpdate {
        match Phone::parse(phone) {
            Ok(parsed) => {
                self.phones.push(parsed);
                PhoneUpdate::Accepted {
                    previous: None,
                    value: phone.to_string(),
                }
            }
            Err(_) => PhoneUpdate::rejected(phone),
        }
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Removes the first phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> Result<Phone> {
        let pos = self.position_of(phone)?;
        Ok(self.phones.remove(pos))
    }

    pub fn edit_phone(&mut self, phone: &str, new_phone: &str) -> Result<PhoneUpdate> {
        let pos = self.position_of(phone)?;
        Ok(self.phones[pos].set(new_phone))
    }

    /// Days until the next birthday on or after `today`, or `None` when the
    /// contact has no birthday.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<BirthdayCountdown> {
        let birthday = self.birthday.as_ref()?;
        let this_year = birthday.occurrence_in(today.year())?;
        let next = if this_year < today {
            birthday.occurrence_in(today.year() + 1)?
        } else {
            this_year
        };
        Some(BirthdayCountdown {
            next,
            days: (next - today).num_days(),
        })
    }

    fn position_of(&self, phone: &str) -> Result<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| RolodexError::PhoneNotFound {
                name: self.name.to_string(),
                phone: phone.to_string(),
            })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
