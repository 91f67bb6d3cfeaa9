//! [`HistoricalDate`]

use std::fmt::{self, Display, Formatter};

use chrono::NaiveDate;

/// The day of a [historical rates](crate::Fixerio::historical_rates) request.
///
/// Raw strings are not validated and end up in the URL path as given.
///
/// # Examples
/// ```
/// # use fixerio::HistoricalDate;
/// # use chrono::NaiveDate;
/// let date = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
/// assert_eq!(HistoricalDate::from(date).as_path(), "2020-03-15");
/// assert_eq!(HistoricalDate::from("2020-03-15").as_path(), "2020-03-15");
/// ```
#[derive(Debug, Hash, Clone, PartialEq, Eq)]
pub enum HistoricalDate {
	/// A calendar date, formatted as ISO 8601 (`YYYY-MM-DD`).
	Date(NaiveDate),
	/// A pre-formatted path segment.
	Raw(String),
}

impl HistoricalDate {
	/// Renders the URL path segment.
	pub fn as_path(&self) -> String {
		match self {
			HistoricalDate::Date(date) => date.format("%Y-%m-%d").to_string(),
			HistoricalDate::Raw(raw) => raw.clone(),
		}
	}
}

impl From<NaiveDate> for HistoricalDate {
	#[inline] fn from(date: NaiveDate) -> Self { HistoricalDate::Date(date) }
}

impl From<String> for HistoricalDate {
	#[inline] fn from(raw: String) -> Self { HistoricalDate::Raw(raw) }
}

impl<'a> From<&'a str> for HistoricalDate {
	#[inline] fn from(raw: &'a str) -> Self { HistoricalDate::Raw(raw.to_owned()) }
}

impl Display for HistoricalDate {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			HistoricalDate::Date(date) => date.format("%Y-%m-%d").fmt(f),
			HistoricalDate::Raw(raw) => raw.fmt(f),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_date_and_string_agree() {
		let date = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
		assert_eq!(HistoricalDate::from(date).as_path(), "2020-03-15");
		assert_eq!(HistoricalDate::from("2020-03-15").as_path(), "2020-03-15");
		assert_eq!(HistoricalDate::from(date).to_string(), "2020-03-15");
	}

	#[test]
	fn test_date_is_zero_padded() {
		let date = NaiveDate::from_ymd_opt(999, 1, 2).unwrap();
		assert_eq!(HistoricalDate::from(date).as_path(), "0999-01-02");
	}

	#[test]
	fn test_raw_is_verbatim() {
		assert_eq!(HistoricalDate::from(String::from("15/03/2020")).as_path(), "15/03/2020");
	}
}
