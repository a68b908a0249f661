// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use chrono::{Datelike, Local, NaiveDateTime};
use error::Error;
use std::fmt::Debug;

/// `YYYY-MM-DDTHH:MM:SS`, the format the air-temperature API expects.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub const MIN_YEAR: i32 = 0;
pub const MAX_YEAR: i32 = 9999;

/// Where "now" comes from. Wall-clock time, no timezone attached.
pub trait TimeSource: Send + Sync + Debug {
  fn now(&self) -> NaiveDateTime;
}

/// The local clock of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
  fn now(&self) -> NaiveDateTime {
    Local::now().naive_local()
  }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
  pub fn new(time: NaiveDateTime) -> Self {
    Self(time)
  }
}

impl TimeSource for FixedClock {
  fn now(&self) -> NaiveDateTime {
    self.0
  }
}

/// Years outside `0..=9999` are rendered by chrono with a sign and more
/// digits (`+10000-01-01T00:00:00`); [`parse`] refuses them.
pub fn format(time: &NaiveDateTime) -> String {
  time.format(TIMESTAMP_FORMAT).to_string()
}

pub fn format_now() -> String {
  format(&LocalClock.now())
}

/// Inverse of [`format`]. Only the exact zero-padded form is accepted.
pub fn parse(text: &str) -> Result<NaiveDateTime, Error> {
  let time = NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
    .map_err(|e| Error::InvalidArgument(format!("Invalid timestamp '{}': {}", text, e)))?;

  if !(MIN_YEAR..=MAX_YEAR).contains(&time.year()) {
    return Err(Error::InvalidArgument(format!(
      "Timestamp '{}' is outside years {}..={}",
      text, MIN_YEAR, MAX_YEAR
    )));
  }

  if format(&time) != text {
    return Err(Error::InvalidArgument(format!(
      "Timestamp '{}' is not in YYYY-MM-DDTHH:MM:SS form",
      text
    )));
  }

  Ok(time)
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;

  fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
      .and_then(|date| date.and_hms_opt(h, mi, s))
      .unwrap()
  }

  fn has_timestamp_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 19
      && bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        10 => *b == b'T',
        13 | 16 => *b == b':',
        _ => b.is_ascii_digit(),
      })
  }

  #[test]
  fn formats_workshop_example() {
    assert_eq!(format(&at(2021, 3, 5, 8, 0, 0)), "2021-03-05T08:00:00");
  }

  #[test]
  fn format_is_deterministic_and_zero_padded() {
    let time = at(7, 1, 2, 3, 4, 5);
    let first = format(&time);
    assert_eq!(first, format(&time));
    assert_eq!(first, "0007-01-02T03:04:05");
    assert!(has_timestamp_shape(&first));
  }

  #[test]
  fn format_now_has_timestamp_shape() {
    assert!(has_timestamp_shape(&format_now()));
  }

  #[test]
  fn fixed_clock_always_returns_its_time() {
    let time = at(2024, 12, 31, 23, 59, 59);
    let clock = FixedClock::new(time);
    assert_eq!(clock.now(), time);
    assert_eq!(clock.now(), time);
  }

  #[test]
  fn parse_reverses_format() {
    let time = at(2021, 3, 5, 8, 0, 0);
    assert_eq!(parse(&format(&time)).unwrap(), time);
  }

  #[test]
  fn year_bounds_stay_four_digits() {
    assert_eq!(format(&at(0, 1, 1, 0, 0, 0)), "0000-01-01T00:00:00");
    assert_eq!(format(&at(9999, 12, 31, 23, 59, 59)), "9999-12-31T23:59:59");
    assert!(has_timestamp_shape(&format(&at(9999, 12, 31, 23, 59, 59))));
  }

  #[test]
  fn parse_rejects_five_digit_years() {
    let text = format(&at(10000, 1, 1, 0, 0, 0));
    assert_eq!(text, "+10000-01-01T00:00:00");
    assert!(parse(&text).unwrap_err().is_invalid_argument());
  }

  #[test]
  fn parse_rejects_malformed_text() {
    for text in ["", "2021-03-05 08:00:00", "2021-3-5T8:00:00", "2021-02-30T00:00:00"] {
      let err = parse(text).unwrap_err();
      assert!(err.is_invalid_argument(), "{text:?} gave {err:?}");
    }
  }
}
