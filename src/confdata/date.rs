//! Calendar date tokens in the `YYYY/MM/DD` form used by confdata files.

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::FormatError;

const DATE_TOKEN: &[BorrowedFormatItem<'static>] = format_description!("[year]/[month]/[day]");
const DATE_TOKEN_LEN: usize = 10;

/// Parse an exact `YYYY/MM/DD` token.
///
/// # Errors
///
/// Returns [`FormatError::BadDate`] when the token is not ten characters long
/// or does not name a real calendar day.
pub fn parse_date(text: &str) -> Result<Date, FormatError> {
    if text.len() != DATE_TOKEN_LEN {
        return Err(FormatError::BadDate { text: text.to_owned() });
    }
    Date::parse(text, DATE_TOKEN).map_err(|_| FormatError::BadDate { text: text.to_owned() })
}
