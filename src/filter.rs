use std::str::FromStr;

use serde::Serialize;

use crate::classifier::{Classification, classify};
use crate::content::ContentStore;
use crate::error::Error;
use crate::formats::{Book, BookStatus, ScriptCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ScriptCategory),
}

impl CategoryFilter {
    /// Select-control options, in display order.
    pub fn options() -> Vec<(String, CategoryFilter)> {
        std::iter::once(("All".to_owned(), CategoryFilter::All))
            .chain(
                ScriptCategory::ALL
                    .into_iter()
                    .map(|c| (c.title(), CategoryFilter::Only(c))),
            )
            .collect()
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    /// Accepts "All", display titles ("Pain Discovery") and machine names
    /// ("pain_discovery"), ignoring case.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = normalize(raw);
        if key == "all" {
            return Ok(CategoryFilter::All);
        }
        ScriptCategory::ALL
            .into_iter()
            .find(|c| c.name() == key)
            .map(CategoryFilter::Only)
            .ok_or_else(|| Error::UnknownScriptCategory(raw.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(BookStatus),
}

impl StatusFilter {
    pub fn options() -> Vec<(String, StatusFilter)> {
        std::iter::once(("All".to_owned(), StatusFilter::All))
            .chain(
                BookStatus::ALL
                    .into_iter()
                    .map(|s| (s.label().to_owned(), StatusFilter::Only(s))),
            )
            .collect()
    }

    fn as_option(self) -> Option<BookStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Only(status) => Some(status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = normalize(raw);
        if key == "all" {
            return Ok(StatusFilter::All);
        }
        BookStatus::ALL
            .into_iter()
            .find(|s| normalize(s.label()) == key)
            .map(StatusFilter::Only)
            .ok_or_else(|| Error::UnknownBookStatus(raw.to_owned()))
    }
}

fn normalize(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace([' ', '-'], "_")
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScriptMatches<'a> {
    pub category: ScriptCategory,
    pub title: String,
    pub scripts: Vec<&'a str>,
}

/// Scripts grouped by category, in catalog order.
///
/// Every selected category appears in the result even when no script in it
/// matches the query, so headers stay stable while searching.
pub fn filter_scripts<'a>(
    store: &'a ContentStore,
    category: CategoryFilter,
    query: Option<&str>,
) -> Vec<ScriptMatches<'a>> {
    let needle = query.filter(|q| !q.is_empty()).map(str::to_lowercase);

    store
        .list_script_categories()
        .into_iter()
        .filter(|c| match category {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => only == *c,
        })
        .map(|c| ScriptMatches {
            category: c,
            title: c.title(),
            scripts: store
                .get_scripts(c)
                .iter()
                .map(String::as_str)
                .filter(|script| {
                    needle
                        .as_deref()
                        .is_none_or(|needle| script.to_lowercase().contains(needle))
                })
                .collect(),
        })
        .collect()
}

pub fn filter_books(store: &ContentStore, status: StatusFilter) -> Vec<&Book> {
    store.list_books(status.as_option())
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedScript<'a> {
    pub script: &'a str,
    #[serde(flatten)]
    pub classification: Classification,
}

impl<'a> ScriptMatches<'a> {
    pub fn annotated(&self) -> Vec<AnnotatedScript<'a>> {
        self.scripts
            .iter()
            .copied()
            .map(|script| AnnotatedScript {
                script,
                classification: classify(script),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ContentStore {
        ContentStore::embedded().expect("embedded content parses")
    }

    #[test]
    fn no_query_keeps_everything() {
        let store = store();
        let got = filter_scripts(&store, CategoryFilter::All, None);
        assert_eq!(got.len(), 4);
        assert!(got.iter().all(|m| m.scripts.len() == 4));

        let empty = filter_scripts(&store, CategoryFilter::All, Some(""));
        assert_eq!(empty, got);
    }

    #[test]
    fn whitespace_in_query_is_significant() {
        let store = store();
        let assumptive = CategoryFilter::Only(ScriptCategory::AssumptiveClose);
        assert_eq!(filter_scripts(&store, assumptive, Some("you"))[0].scripts.len(), 4);
        assert!(filter_scripts(&store, assumptive, Some("you "))[0].scripts.is_empty());

        let pain = filter_scripts(
            &store,
            CategoryFilter::Only(ScriptCategory::PainDiscovery),
            Some("YOU "),
        );
        assert_eq!(
            pain[0].scripts,
            [
                "What keeps you up at night about your retirement?",
                "How would you feel if you outlived your money?",
                "What would happen if you couldn't work tomorrow?",
            ]
        );

        let spaces = filter_scripts(&store, CategoryFilter::All, Some("   "));
        assert!(spaces.iter().all(|m| m.scripts.is_empty()));
    }

    #[test]
    fn query_keeps_empty_categories() {
        let store = store();
        let got = filter_scripts(&store, CategoryFilter::All, Some("think"));
        let categories: Vec<_> = got.iter().map(|m| m.category).collect();
        assert_eq!(categories, ScriptCategory::ALL);

        for matches in &got {
            if matches.category == ScriptCategory::ObjectionHandling {
                assert_eq!(
                    matches.scripts,
                    ["I hear you saying you want to think about it. What specifically do you need to think about?"]
                );
            } else {
                assert!(matches.scripts.is_empty(), "{:?}", matches.category);
            }
        }
    }

    #[test]
    fn query_is_case_insensitive() {
        let store = store();
        let got = filter_scripts(&store, CategoryFilter::All, Some("TODAY"));
        let urgency = &got[2];
        assert_eq!(urgency.category, ScriptCategory::FalseUrgency);
        assert_eq!(urgency.scripts.len(), 2);
        let objections = &got[1];
        assert_eq!(objections.scripts.len(), 1);
    }

    #[test]
    fn single_category() {
        let store = store();
        let got = filter_scripts(
            &store,
            CategoryFilter::Only(ScriptCategory::AssumptiveClose),
            None,
        );
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].title, "Assumptive Close");

        let none = filter_scripts(
            &store,
            CategoryFilter::Only(ScriptCategory::PainDiscovery),
            Some("signature"),
        );
        assert_eq!(none.len(), 1);
        assert!(none[0].scripts.is_empty());
    }

    #[test]
    fn parses_labels_and_names() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Objection Handling".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(ScriptCategory::ObjectionHandling)
        );
        assert_eq!(
            "false_urgency".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(ScriptCategory::FalseUrgency)
        );
        assert!(matches!(
            "closing".parse::<CategoryFilter>(),
            Err(Error::UnknownScriptCategory(_))
        ));

        assert_eq!(
            "COMING SOON".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(BookStatus::ComingSoon)
        );
        assert_eq!(
            "coming-soon".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(BookStatus::ComingSoon)
        );
        assert!("retired".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn filter_books_all_equals_unfiltered() {
        let store = store();
        assert_eq!(filter_books(&store, StatusFilter::All), store.list_books(None));
        let exposed = filter_books(&store, StatusFilter::Only(BookStatus::Exposed));
        assert_eq!(exposed.len(), 1);
        assert_eq!(exposed[0].id, "customer_centered_selling");
    }

    #[test]
    fn annotated_scripts_carry_classification() {
        let store = store();
        let got = filter_scripts(
            &store,
            CategoryFilter::Only(ScriptCategory::PainDiscovery),
            Some("outlived"),
        );
        let annotated = got[0].annotated();
        assert_eq!(annotated.len(), 1);
        assert_eq!(annotated[0].classification.purpose, "Fear-based motivation");
    }
}
