//! Static language catalog for the translator.

/// Display name and translation code, in menu order.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("English", "en"),
    ("Spanish", "es"),
    ("French", "fr"),
    ("German", "de"),
    ("Italian", "it"),
    ("Portuguese", "pt"),
    ("Russian", "ru"),
    ("Japanese", "ja"),
    ("Korean", "ko"),
    ("Chinese (Simplified)", "zh-CN"),
    ("Chinese (Traditional)", "zh-TW"),
    ("Arabic", "ar"),
    ("Dutch", "nl"),
    ("Swedish", "sv"),
    // Languages of India
    ("Hindi", "hi"),
    ("Bengali", "bn"),
    ("Telugu", "te"),
    ("Marathi", "mr"),
    ("Tamil", "ta"),
    ("Urdu", "ur"),
    ("Gujarati", "gu"),
    ("Kannada", "kn"),
    ("Odia (Oriya)", "or"),
    ("Malayalam", "ml"),
    ("Punjabi", "pa"),
    ("Assamese", "as"),
    ("Maithili", "mai"),
    ("Sanskrit", "sa"),
    ("Nepali", "ne"),
    ("Konkani", "kok"),
    ("Sindhi", "sd"),
    ("Dogri", "doi"),
    ("Manipuri (Meitei)", "mni"),
];

/// Extra entry at the top of the source menu.
pub const AUTO_DETECT: &str = "Auto Detect";

pub fn code_for(name: &str) -> Option<&'static str> {
    LANGUAGES.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
}

pub fn name_for(code: &str) -> Option<&'static str> {
    LANGUAGES.iter().find(|(_, c)| *c == code).map(|(n, _)| *n)
}

pub fn is_supported(code: &str) -> bool {
    name_for(code).is_some()
}

/// Source side of a translation: a fixed catalog code or auto-detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLanguage {
    Auto,
    Fixed(&'static str),
}

impl SourceLanguage {
    pub fn code(self) -> Option<&'static str> {
        match self {
            SourceLanguage::Auto => None,
            SourceLanguage::Fixed(c) => Some(c),
        }
    }
}

/// Resolve a source-menu display name. `None` if the name is not on the menu.
pub fn source_from_name(name: &str) -> Option<SourceLanguage> {
    if name == AUTO_DETECT {
        return Some(SourceLanguage::Auto);
    }
    code_for(name).map(SourceLanguage::Fixed)
}

/// Resolve a target-menu display name. Auto Detect is not a valid target.
pub fn target_from_name(name: &str) -> Option<&'static str> {
    code_for(name)
}

/// Options for the source `<select>`, Auto Detect first.
pub fn source_options() -> impl Iterator<Item = &'static str> {
    std::iter::once(AUTO_DETECT).chain(LANGUAGES.iter().map(|(n, _)| *n))
}

pub fn target_options() -> impl Iterator<Item = &'static str> {
    LANGUAGES.iter().map(|(n, _)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_unique_names_and_codes() {
        let names: HashSet<_> = LANGUAGES.iter().map(|(n, _)| n).collect();
        let codes: HashSet<_> = LANGUAGES.iter().map(|(_, c)| c).collect();
        assert_eq!(names.len(), LANGUAGES.len());
        assert_eq!(codes.len(), LANGUAGES.len());
        assert_eq!(LANGUAGES.len(), 33);
    }

    #[test]
    fn lookups() {
        assert_eq!(code_for("French"), Some("fr"));
        assert_eq!(name_for("zh-TW"), Some("Chinese (Traditional)"));
        assert!(is_supported("mni"));
        assert!(!is_supported("xx"));
    }

    #[test]
    fn auto_detect_is_source_only() {
        assert_eq!(source_from_name("Auto Detect"), Some(SourceLanguage::Auto));
        assert_eq!(source_from_name("Hindi"), Some(SourceLanguage::Fixed("hi")));
        assert_eq!(target_from_name("Auto Detect"), None);
        assert_eq!(source_options().next(), Some(AUTO_DETECT));
        assert_eq!(target_options().next(), Some("English"));
    }
}
