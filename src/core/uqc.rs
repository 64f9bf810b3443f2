//! Unit Quantity Codes (UQC).
//!
//! Provides a lookup of the unit codes notified for GST documents
//! (Rule 46(h) asks for quantity "and unit or Unique Quantity Code
//! thereof"). This covers the codes in common use on invoices.

/// Check whether `code` is a known UQC.
pub fn is_known_uqc(code: &str) -> bool {
    UQC_CODES.binary_search_by_key(&code, |(c, _)| c).is_ok()
}

/// Expand a UQC to its unit name.
pub fn uqc_name(code: &str) -> Option<&'static str> {
    UQC_CODES
        .binary_search_by_key(&code, |(c, _)| c)
        .ok()
        .map(|i| UQC_CODES[i].1)
}

/// Common UQC codes with unit names.
/// Sorted by code for binary search.
static UQC_CODES: &[(&str, &str)] = &[
    ("BAG", "Bags"),
    ("BAL", "Bale"),
    ("BDL", "Bundles"),
    ("BKL", "Buckles"),
    ("BOU", "Billion of units"),
    ("BOX", "Box"),
    ("BTL", "Bottles"),
    ("BUN", "Bunches"),
    ("CAN", "Cans"),
    ("CBM", "Cubic metres"),
    ("CCM", "Cubic centimetres"),
    ("CMS", "Centimetres"),
    ("CTN", "Cartons"),
    ("DOZ", "Dozens"),
    ("DRM", "Drums"),
    ("GMS", "Grammes"),
    ("GRS", "Gross"),
    ("GYD", "Gross yards"),
    ("KGS", "Kilograms"),
    ("KLR", "Kilolitre"),
    ("KME", "Kilometre"),
    ("LTR", "Litres"),
    ("MLT", "Millilitre"),
    ("MTR", "Metres"),
    ("MTS", "Metric tonnes"),
    ("NOS", "Numbers"),
    ("OTH", "Others"),
    ("PAC", "Packs"),
    ("PCS", "Pieces"),
    ("PRS", "Pairs"),
    ("QTL", "Quintal"),
    ("ROL", "Rolls"),
    ("SET", "Sets"),
    ("SQF", "Square feet"),
    ("SQM", "Square metres"),
    ("SQY", "Square yards"),
    ("TBS", "Tablets"),
    ("TGM", "Ten gross"),
    ("THD", "Thousands"),
    ("TON", "Tonnes"),
    ("TUB", "Tubes"),
    ("UGS", "US gallons"),
    ("UNT", "Units"),
    ("YDS", "Yards"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert!(is_known_uqc("NOS"));
        assert!(is_known_uqc("KGS"));
        assert!(is_known_uqc("MTR"));
    }

    #[test]
    fn unknown_codes() {
        assert!(!is_known_uqc("XYZ"));
        assert!(!is_known_uqc("nos"));
        assert!(!is_known_uqc(""));
    }

    #[test]
    fn names() {
        assert_eq!(uqc_name("NOS"), Some("Numbers"));
        assert_eq!(uqc_name("QTL"), Some("Quintal"));
        assert_eq!(uqc_name("ZZZ"), None);
    }

    #[test]
    fn list_is_sorted() {
        let mut sorted: Vec<&str> = UQC_CODES.iter().map(|(c, _)| *c).collect();
        sorted.sort_unstable();
        let original: Vec<&str> = UQC_CODES.iter().map(|(c, _)| *c).collect();
        assert_eq!(original, sorted);
    }
}
