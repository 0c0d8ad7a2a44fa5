//! YAML word tables: boolean-like scalars in their usual spellings

use super::LanguageData;

const LITERALS: &[&str] = &[
    "False", "No", "Null", "Off", "On", "True", "Yes", "false", "no",
    "null", "off", "on", "true", "yes",
];

pub(super) fn data() -> LanguageData {
    LanguageData::new(&[], &[], &[], LITERALS, &[])
}
