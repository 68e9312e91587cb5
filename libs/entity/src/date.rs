use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

/// Display format used across the blog, e.g. `March 15, 2023`.
pub const DISPLAY_FORMAT: &str = "%B %d, %Y";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DateError {
    #[error("'{input}' is not a 'Month day, year' date: {source}")]
    Parse {
        input: String,
        source: chrono::ParseError,
    },

    #[error("'{input}' does not carry a four digit year")]
    Year { input: String },
}

/// A date as written by the author, kept alongside its calendar value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDate {
    display: String,
    date: NaiveDate,
}

impl PostDate {
    pub fn parse(input: &str) -> Result<Self, DateError> {
        let date = NaiveDate::parse_from_str(input.trim(), DISPLAY_FORMAT)
            .map_err(|source| DateError::Parse {
                input: input.to_string(),
                source,
            })?;

        // chrono happily reads "July 16, 3" as the year 3
        if !(1000..=9999).contains(&date.year()) {
            return Err(DateError::Year {
                input: input.to_string(),
            });
        }

        Ok(Self {
            display: input.trim().to_string(),
            date,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }

    pub fn naive(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl Serialize for PostDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_display_date() {
        // Act
        let date = PostDate::parse("March 15, 2023").unwrap();

        // Assert
        assert_eq!(date.as_str(), "March 15, 2023");
        assert_eq!(date.naive(), NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());
    }

    #[test]
    fn test_parse_single_digit_day() {
        // Act
        let date = PostDate::parse("August 3, 2023").unwrap();

        // Assert
        assert_eq!(date.naive(), NaiveDate::from_ymd_opt(2023, 8, 3).unwrap());
    }

    #[test]
    fn test_reject_truncated_year() {
        // Act
        let result = PostDate::parse("July 16, 3");

        // Assert
        assert!(matches!(result, Err(DateError::Year { .. })));
    }

    #[test]
    fn test_reject_garbage() {
        // Act
        let result = PostDate::parse("sometime last summer");

        // Assert
        assert!(matches!(result, Err(DateError::Parse { .. })));
    }

    #[test]
    fn test_order_follows_calendar() {
        // Arrange
        let february = PostDate::parse("February 18, 2023").unwrap();
        let december = PostDate::parse("December 24, 2023").unwrap();

        // Assert
        assert!(february.naive() < december.naive());
    }

    #[test]
    fn test_serialize_as_display_string() {
        // Arrange
        let date = PostDate::parse("June 5, 2023").unwrap();

        // Act
        let json = serde_json::to_string(&date).unwrap();

        // Assert
        assert_eq!(json, "\"June 5, 2023\"");
    }
}
