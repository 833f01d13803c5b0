//! Address book: the keyed collection of all contact records.

use super::record::Record;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Length of the upcoming-birthdays window, counted from today inclusive.
pub const BIRTHDAY_WINDOW_DAYS: u64 = 7;

/// Display format of congratulation dates (sorts chronologically as text).
pub const CONGRATULATION_DATE_FORMAT: &str = "%Y.%m.%d";

/// A contact whose birthday falls inside the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// Day the greeting should be sent, moved off weekends
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `YYYY.MM.DD`.
    pub fn formatted_date(&self) -> String {
        self.congratulation_date
            .format(CONGRATULATION_DATE_FORMAT)
            .to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}

/// All contacts of one user, keyed by contact name.
///
/// Names are unique: adding a record under an existing name replaces the
/// old record entirely. Records are kept ordered by name so listings are
/// stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().to_string(), record);
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record by name, returning it if it was present.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    /// Iterate over all records, ordered by name.
    pub fn all_records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose next birthday falls within `BIRTHDAY_WINDOW_DAYS` of
    /// `today` (both ends inclusive), sorted by congratulation date.
    ///
    /// Weekday birthdays are congratulated on the day. Birthdays on a
    /// Saturday or Sunday are moved to the Monday of the week that contains
    /// the window's last day, not the Monday after the birthday itself.
    /// Ties keep name order.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let Some(window_end) = today.checked_add_days(Days::new(BIRTHDAY_WINDOW_DAYS)) else {
            return Vec::new();
        };
        let back_to_monday = u64::from(window_end.weekday().num_days_from_monday());
        let Some(weekend_greeting_day) = window_end.checked_sub_days(Days::new(back_to_monday))
        else {
            return Vec::new();
        };

        let mut upcoming: Vec<UpcomingBirthday> = self
            .records
            .values()
            .filter_map(|record| {
                let next = record.birthday()?.next_occurrence(today)?;
                if next < today || next > window_end {
                    return None;
                }

                let congratulation_date = match next.weekday() {
                    Weekday::Sat | Weekday::Sun => weekend_greeting_day,
                    _ => next,
                };

                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date,
                })
            })
            .collect();

        upcoming.sort_by_key(|entry| entry.congratulation_date);
        upcoming
    }
}

/// On-disk shape of the book: a flat list of records. The map key is
/// rebuilt from each record's own name on load.
#[derive(Serialize, Deserialize)]
struct BookSnapshot<R> {
    records: Vec<R>,
}

impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        BookSnapshot {
            records: self.records.values().collect(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let snapshot = BookSnapshot::<Record>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in snapshot.records {
            book.add_record(record);
        }
        Ok(book)
    }
}
