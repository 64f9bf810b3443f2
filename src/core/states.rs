//! GST state and union territory codes.
//!
//! Provides lookups over the 2-digit state codes notified for GST
//! registration — the same codes that form the first two characters
//! of a GSTIN and identify the place of supply on invoices.

/// Check whether `code` is a notified GST state/UT code.
pub fn is_known_state_code(code: &str) -> bool {
    GST_STATES.binary_search_by_key(&code, |(c, _)| c).is_ok()
}

/// Look up the state name for a 2-digit GST state code.
pub fn state_for_code(code: &str) -> Option<&'static str> {
    GST_STATES
        .binary_search_by_key(&code, |(c, _)| c)
        .ok()
        .map(|i| GST_STATES[i].1)
}

/// Look up the GST state code for a state name (case-insensitive).
pub fn code_for_state(name: &str) -> Option<&'static str> {
    let name = name.trim();
    GST_STATES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name))
        .map(|(c, _)| *c)
}

/// Check whether `name` is a known state/UT name (case-insensitive).
pub fn is_known_state(name: &str) -> bool {
    code_for_state(name).is_some()
}

/// The GST state code `value` denotes, whether it holds a 2-digit code or
/// a state name. Unknown values yield `None`.
pub fn canonical_state_code(value: &str) -> Option<&'static str> {
    let value = value.trim();
    if let Ok(i) = GST_STATES.binary_search_by_key(&value, |(c, _)| c) {
        return Some(GST_STATES[i].0);
    }
    code_for_state(value)
}

/// Notified GST state/UT codes with state names.
/// Sorted by code for binary search.
static GST_STATES: &[(&str, &str)] = &[
    ("01", "Jammu and Kashmir"),
    ("02", "Himachal Pradesh"),
    ("03", "Punjab"),
    ("04", "Chandigarh"),
    ("05", "Uttarakhand"),
    ("06", "Haryana"),
    ("07", "Delhi"),
    ("08", "Rajasthan"),
    ("09", "Uttar Pradesh"),
    ("10", "Bihar"),
    ("11", "Sikkim"),
    ("12", "Arunachal Pradesh"),
    ("13", "Nagaland"),
    ("14", "Manipur"),
    ("15", "Mizoram"),
    ("16", "Tripura"),
    ("17", "Meghalaya"),
    ("18", "Assam"),
    ("19", "West Bengal"),
    ("20", "Jharkhand"),
    ("21", "Odisha"),
    ("22", "Chhattisgarh"),
    ("23", "Madhya Pradesh"),
    ("24", "Gujarat"),
    ("26", "Dadra and Nagar Haveli and Daman and Diu"),
    ("27", "Maharashtra"),
    ("28", "Andhra Pradesh (pre-division)"),
    ("29", "Karnataka"),
    ("30", "Goa"),
    ("31", "Lakshadweep"),
    ("32", "Kerala"),
    ("33", "Tamil Nadu"),
    ("34", "Puducherry"),
    ("35", "Andaman and Nicobar Islands"),
    ("36", "Telangana"),
    ("37", "Andhra Pradesh"),
    ("38", "Ladakh"),
    ("97", "Other Territory"),
    ("99", "Centre Jurisdiction"),
];
