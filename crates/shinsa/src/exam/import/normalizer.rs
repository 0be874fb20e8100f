use chrono::NaiveDate;

/// Normalize a spreadsheet header for keyword matching: strip the BOM some
/// exports prepend, trim, and lowercase.
pub(crate) fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Parse a birth date in ISO form or the DD/MM/YYYY variants common on
/// federation spreadsheets.
pub(crate) fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    None
}

/// Leading integer of a cell like "12 anos"; `None` when it starts with
/// anything else.
pub(crate) fn leading_u32(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
pub(crate) fn parse_birth_date_for_tests(raw: &str) -> Option<NaiveDate> {
    parse_birth_date(raw)
}
