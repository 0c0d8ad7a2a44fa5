//! JSON word tables: only the three literal constants

use super::LanguageData;

const LITERALS: &[&str] = &["false", "null", "true"];

pub(super) fn data() -> LanguageData {
    LanguageData::new(&[], &[], &[], LITERALS, &[])
}
