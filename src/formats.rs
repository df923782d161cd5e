use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BookStatus {
    #[serde(rename = "EXPOSED")]
    Exposed,
    #[serde(rename = "COMING SOON")]
    ComingSoon,
}

impl BookStatus {
    pub const ALL: [BookStatus; 2] = [BookStatus::Exposed, BookStatus::ComingSoon];

    pub fn label(self) -> &'static str {
        match self {
            BookStatus::Exposed => "EXPOSED",
            BookStatus::ComingSoon => "COMING SOON",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub status: BookStatus,
    pub description: String,
    pub tactics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insider_quote: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ScriptCategory {
    PainDiscovery,
    ObjectionHandling,
    FalseUrgency,
    AssumptiveClose,
}

impl ScriptCategory {
    pub const ALL: [ScriptCategory; 4] = [
        ScriptCategory::PainDiscovery,
        ScriptCategory::ObjectionHandling,
        ScriptCategory::FalseUrgency,
        ScriptCategory::AssumptiveClose,
    ];

    /// Machine name, as used in the catalog and the JSON API.
    pub fn name(self) -> &'static str {
        match self {
            ScriptCategory::PainDiscovery => "pain_discovery",
            ScriptCategory::ObjectionHandling => "objection_handling",
            ScriptCategory::FalseUrgency => "false_urgency",
            ScriptCategory::AssumptiveClose => "assumptive_close",
        }
    }

    /// Display title: underscores become spaces and each word is capitalized.
    pub fn title(self) -> String {
        self.name()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ScriptCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptGroup {
    pub category: ScriptCategory,
    pub phrases: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub books: Vec<Book>,
    pub scripts: Vec<ScriptGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Editorial {
    pub site: SiteCopy,
    pub overview: OverviewCopy,
    pub expose: ExposeCopy,
    pub pipeline: SectionCopy,
    pub scripts: SectionCopy,
    pub intel: IntelCopy,
    pub techniques: TechniquesCopy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteCopy {
    pub title: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionCopy {
    pub heading: String,
    pub intro: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewCopy {
    pub hero_subtitle: String,
    pub motto: String,
    pub library_heading: String,
    pub library_intro: String,
    pub training_facts: Vec<String>,
    pub advantage_heading: String,
    pub features: Vec<Feature>,
    pub quick_actions: Vec<QuickAction>,
    pub stats: Vec<Stat>,
    pub featured_book: String,
    pub footer: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickAction {
    pub label: String,
    /// View slug the button navigates to.
    pub target: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub delta: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExposeCopy {
    pub book_id: String,
    pub quote_attribution: String,
    pub intro: String,
    pub tactic_tabs: Vec<TacticTab>,
    pub chapter_tabs: Vec<ChapterTab>,
    pub counter_intelligence: Vec<PointList>,
    pub remember: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TacticTab {
    pub key: String,
    pub label: String,
    pub teach: String,
    pub reality: String,
    pub category: ScriptCategory,
    pub defense: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterTab {
    pub key: String,
    pub label: String,
    pub body: String,
    /// Completion percentage shown as a progress bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointList {
    pub heading: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntelCopy {
    pub heading: String,
    pub intro: String,
    pub stats: Vec<Stat>,
    pub matters: PointList,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechniquesCopy {
    pub heading: String,
    pub intro: String,
    pub tabs: Vec<TabLabel>,
    pub framework_intro: String,
    pub stages: Vec<Stage>,
    pub psychological: Vec<Technique>,
    pub warning_signs: Vec<PointList>,
    pub defense: Vec<PointList>,
    pub remember: PointList,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabLabel {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub stage: String,
    pub title: String,
    pub description: String,
    pub tactics: Vec<String>,
    pub red_flags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technique {
    pub name: String,
    pub description: String,
    pub examples: Vec<String>,
    pub defense: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_title_capitalizes_each_word() {
        assert_eq!(ScriptCategory::PainDiscovery.title(), "Pain Discovery");
        assert_eq!(ScriptCategory::AssumptiveClose.title(), "Assumptive Close");
    }

    #[test]
    fn status_serializes_with_display_label() -> anyhow::Result<()> {
        let json = serde_json::to_string(&BookStatus::ComingSoon)?;
        assert_eq!(json, "\"COMING SOON\"");
        let parsed: BookStatus = serde_yaml::from_str("EXPOSED")?;
        assert_eq!(parsed, BookStatus::Exposed);
        Ok(())
    }
}
