//! Classification lookup tables
//!
//! Maps raw class and category codes from the API to display labels and
//! badge colors. Tables are built once at startup and shared read-only;
//! tests inject their own fixture tables.

use crate::constants::ALL_LABEL;
use redlist_rs::{ALL, CategoryEntry, ClassEntry, RedlistConfig};
use serde::{Deserialize, Serialize};

/// UI-agnostic badge color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Black,
    Violet,
    Red,
    Orange,
    Yellow,
    Lime,
    Green,
    Blue,
    /// Neutral color, also used for unknown categories
    #[default]
    Gray,
}

impl BadgeColor {
    /// Parse a color name, falling back to [`BadgeColor::Gray`]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "black" | "dark" => BadgeColor::Black,
            "violet" | "grape" | "purple" => BadgeColor::Violet,
            "red" => BadgeColor::Red,
            "orange" => BadgeColor::Orange,
            "yellow" => BadgeColor::Yellow,
            "lime" => BadgeColor::Lime,
            "green" => BadgeColor::Green,
            "blue" => BadgeColor::Blue,
            _ => BadgeColor::Gray,
        }
    }
}

/// Display label and color for a category code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInfo {
    pub label: String,
    pub color: BadgeColor,
}

/// Resolved category badge for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBadge {
    pub label: String,
    pub color: BadgeColor,
    /// Whether the code was found in the table
    pub known: bool,
}

/// A selector entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The synthetic ("all", "All") entry
    pub fn all() -> Self {
        Self::new(ALL, ALL_LABEL)
    }
}

/// Ordered class-code to label table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassTable {
    entries: Vec<(String, String)>,
}

impl ClassTable {
    pub fn new<C, L>(entries: impl IntoIterator<Item = (C, L)>) -> Self
    where
        C: Into<String>,
        L: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(code, label)| (code.into(), label.into()))
                .collect(),
        }
    }

    pub fn label(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, label)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(c, l)| (c.as_str(), l.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered category-code to label/color table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTable {
    entries: Vec<(String, CategoryInfo)>,
}

impl CategoryTable {
    pub fn new<C, L>(entries: impl IntoIterator<Item = (C, L, BadgeColor)>) -> Self
    where
        C: Into<String>,
        L: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(code, label, color)| {
                    (
                        code.into(),
                        CategoryInfo {
                            label: label.into(),
                            color,
                        },
                    )
                })
                .collect(),
        }
    }

    pub fn info(&self, code: &str) -> Option<&CategoryInfo> {
        self.entries
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, info)| info)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryInfo)> {
        self.entries.iter().map(|(c, info)| (c.as_str(), info))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Both lookup tables
///
/// # Examples
///
/// ```
/// use redlist_explorer_core::classification::{BadgeColor, Classifications};
///
/// let tables = Classifications::builtin();
/// assert_eq!(tables.class_display("AVES"), "Birds AVES");
/// assert_eq!(tables.class_display("XENO"), "XENO");
///
/// let badge = tables.category_badge("ZZ");
/// assert_eq!(badge.label, "ZZ");
/// assert_eq!(badge.color, BadgeColor::Gray);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifications {
    pub classes: ClassTable,
    pub categories: CategoryTable,
}

impl Default for Classifications {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Classifications {
    pub fn new(classes: ClassTable, categories: CategoryTable) -> Self {
        Self {
            classes,
            categories,
        }
    }

    /// Built-in Red List classes and categories
    pub fn builtin() -> Self {
        Self::new(builtin_classes(), builtin_categories())
    }

    /// Built-in tables, each replaced by the config's override when one is given
    pub fn from_config(config: &RedlistConfig) -> Self {
        let classes = if config.classes.is_empty() {
            builtin_classes()
        } else {
            class_table_from_entries(&config.classes)
        };
        let categories = if config.categories.is_empty() {
            builtin_categories()
        } else {
            category_table_from_entries(&config.categories)
        };
        Self::new(classes, categories)
    }

    /// Class cell text: "{label} {code}", or the raw code when unknown
    pub fn class_display(&self, code: &str) -> String {
        match self.classes.label(code) {
            Some(label) => format!("{} {}", label, code),
            None => code.to_string(),
        }
    }

    /// Category badge, falling back to the raw code in the default color
    pub fn category_badge(&self, code: &str) -> CategoryBadge {
        match self.categories.info(code) {
            Some(info) => CategoryBadge {
                label: info.label.clone(),
                color: info.color,
                known: true,
            },
            None => CategoryBadge {
                label: code.to_string(),
                color: BadgeColor::default(),
                known: false,
            },
        }
    }

    /// Category selector entries, "All" first, then table order
    pub fn category_options(&self) -> Vec<SelectOption> {
        std::iter::once(SelectOption::all())
            .chain(
                self.categories
                    .iter()
                    .map(|(code, info)| SelectOption::new(code, info.label.as_str())),
            )
            .collect()
    }

    /// Class selector entries, "All" first, then table order
    pub fn class_options(&self) -> Vec<SelectOption> {
        std::iter::once(SelectOption::all())
            .chain(
                self.classes
                    .iter()
                    .map(|(code, label)| SelectOption::new(code, format!("{}  {}", label, code))),
            )
            .collect()
    }

    /// Label of a selected category value, "All" for the sentinel
    pub fn category_selection_label(&self, value: &str) -> String {
        if value == ALL {
            return ALL_LABEL.to_string();
        }
        self.category_badge(value).label
    }

    /// Label of a selected class value, "All" for the sentinel
    pub fn class_selection_label(&self, value: &str) -> String {
        if value == ALL {
            return ALL_LABEL.to_string();
        }
        self.class_display(value)
    }
}

fn class_table_from_entries(entries: &[ClassEntry]) -> ClassTable {
    ClassTable::new(entries.iter().map(|e| (e.code.as_str(), e.label.as_str())))
}

fn category_table_from_entries(entries: &[CategoryEntry]) -> CategoryTable {
    CategoryTable::new(
        entries
            .iter()
            .map(|e| (e.code.as_str(), e.label.as_str(), BadgeColor::from_name(&e.color))),
    )
}

fn builtin_classes() -> ClassTable {
    ClassTable::new([
        ("AVES", "Birds"),
        ("MAMMALIA", "Mammals"),
        ("REPTILIA", "Reptiles"),
        ("AMPHIBIA", "Amphibians"),
        ("ACTINOPTERYGII", "Ray-finned fishes"),
        ("CHONDRICHTHYES", "Sharks and rays"),
        ("SARCOPTERYGII", "Lobe-finned fishes"),
        ("MYXINI", "Hagfishes"),
        ("CEPHALASPIDOMORPHI", "Lampreys"),
        ("INSECTA", "Insects"),
        ("ARACHNIDA", "Arachnids"),
        ("MALACOSTRACA", "Crustaceans"),
        ("GASTROPODA", "Snails and slugs"),
        ("BIVALVIA", "Bivalves"),
        ("CEPHALOPODA", "Cephalopods"),
        ("ANTHOZOA", "Corals"),
        ("MAGNOLIOPSIDA", "Flowering plants"),
        ("LILIOPSIDA", "Monocots"),
        ("PINOPSIDA", "Conifers"),
        ("POLYPODIOPSIDA", "Ferns"),
    ])
}

fn builtin_categories() -> CategoryTable {
    CategoryTable::new([
        ("EX", "Extinct", BadgeColor::Black),
        ("EW", "Extinct in the Wild", BadgeColor::Violet),
        ("CR", "Critically Endangered", BadgeColor::Red),
        ("EN", "Endangered", BadgeColor::Orange),
        ("VU", "Vulnerable", BadgeColor::Yellow),
        ("NT", "Near Threatened", BadgeColor::Lime),
        ("LC", "Least Concern", BadgeColor::Green),
        ("DD", "Data Deficient", BadgeColor::Blue),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Classifications {
        Classifications::new(
            ClassTable::new([("AVES", "Birds"), ("MAMMALIA", "Mammals")]),
            CategoryTable::new([
                ("EN", "Endangered", BadgeColor::Orange),
                ("LC", "Least Concern", BadgeColor::Green),
            ]),
        )
    }

    #[test]
    fn test_class_display() {
        let tables = fixture();
        assert_eq!(tables.class_display("AVES"), "Birds AVES");
        assert_eq!(tables.class_display("INSECTA"), "INSECTA");
        assert!(!tables.class_display("INSECTA").contains("undefined"));
    }

    #[test]
    fn test_category_badge_known() {
        let badge = fixture().category_badge("LC");
        assert_eq!(badge.label, "Least Concern");
        assert_eq!(badge.color, BadgeColor::Green);
        assert!(badge.known);
    }

    #[test]
    fn test_category_badge_fallback() {
        for code in ["XX", "", "lc", "NE"] {
            let badge = fixture().category_badge(code);
            assert_eq!(badge.label, code);
            assert_eq!(badge.color, BadgeColor::Gray);
            assert!(!badge.known);
        }
    }

    #[test]
    fn test_category_options() {
        let options = fixture().category_options();
        assert_eq!(
            options,
            vec![
                SelectOption::new("all", "All"),
                SelectOption::new("EN", "Endangered"),
                SelectOption::new("LC", "Least Concern"),
            ]
        );
    }

    #[test]
    fn test_class_options() {
        let options = fixture().class_options();
        assert_eq!(options[0], SelectOption::all());
        assert_eq!(options[1], SelectOption::new("AVES", "Birds  AVES"));
        assert_eq!(options[2], SelectOption::new("MAMMALIA", "Mammals  MAMMALIA"));
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn test_builtin_tables() {
        let tables = Classifications::builtin();
        assert_eq!(tables.category_options().len(), tables.categories.len() + 1);
        assert_eq!(tables.class_options().len(), tables.classes.len() + 1);
        assert_eq!(tables.category_badge("LC").label, "Least Concern");
        assert_eq!(tables.category_badge("EN").label, "Endangered");
    }

    #[test]
    fn test_from_config_overrides() {
        let mut config = RedlistConfig::with_base_url("http://localhost");
        assert_eq!(Classifications::from_config(&config), Classifications::builtin());

        config.categories = vec![CategoryEntry {
            code: "LC".to_string(),
            label: "Safe".to_string(),
            color: "teal".to_string(),
        }];
        let tables = Classifications::from_config(&config);
        assert_eq!(tables.categories.len(), 1);
        assert_eq!(tables.category_badge("LC").label, "Safe");
        assert_eq!(tables.category_badge("LC").color, BadgeColor::Gray);
        // Class table untouched
        assert_eq!(tables.classes, Classifications::builtin().classes);
    }

    #[test]
    fn test_badge_color_names() {
        assert_eq!(BadgeColor::from_name("Red"), BadgeColor::Red);
        assert_eq!(BadgeColor::from_name("grape"), BadgeColor::Violet);
        assert_eq!(BadgeColor::from_name(""), BadgeColor::Gray);
    }

    #[test]
    fn test_selection_labels() {
        let tables = fixture();
        assert_eq!(tables.category_selection_label("all"), "All");
        assert_eq!(tables.category_selection_label("EN"), "Endangered");
        assert_eq!(tables.class_selection_label("AVES"), "Birds AVES");
    }
}
