//! Free-form date input ("2025-03-20", "tomorrow", "next fri").

use anyhow::Result;
use chrono::NaiveDate;

/// Expand common abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    input
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            abbrevs
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map(|(_, full)| full.to_string())
                .unwrap_or_else(|| word.to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a day. ISO dates are taken as-is, anything else goes through fuzzydate.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    let expanded = expand_abbreviations(trimmed);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;
    Ok(dt.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_day_abbreviations() {
        assert_eq!(expand_abbreviations("next fri"), "next friday");
        assert_eq!(expand_abbreviations("Thurs"), "thursday");
    }

    #[test]
    fn expand_month_abbreviations() {
        assert_eq!(expand_abbreviations("sept 5"), "september 5");
        assert_eq!(expand_abbreviations("Jan   20"), "january 20");
    }

    #[test]
    fn expand_preserves_other_words() {
        assert_eq!(expand_abbreviations("tomorrow"), "tomorrow");
        assert_eq!(expand_abbreviations("in 3 days"), "in 3 days");
    }

    #[test]
    fn iso_dates_parse_directly() {
        assert_eq!(
            parse_date(" 2025-03-20 ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()
        );
    }

    #[test]
    fn gibberish_is_an_error() {
        assert!(parse_date("when pigs fly").is_err());
    }
}
