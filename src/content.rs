use std::collections::HashSet;

use anyhow::Context as _;

use crate::error::{Error, Result};
use crate::formats::{Book, BookStatus, Catalog, Editorial, ScriptCategory};
use crate::router::View;

const CATALOG_YAML: &str = include_str!("../content/catalog.yaml");
const EDITORIAL_YAML: &str = include_str!("../content/editorial.yaml");

#[derive(Debug, Clone)]
pub struct ContentStore {
    books: Vec<Book>,
    scripts: Vec<(ScriptCategory, Vec<String>)>,
    editorial: Editorial,
}

impl ContentStore {
    /// Loads the content compiled into the binary.
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_yaml(CATALOG_YAML, EDITORIAL_YAML)
    }

    pub fn from_yaml(catalog_yaml: &str, editorial_yaml: &str) -> anyhow::Result<Self> {
        let catalog: Catalog =
            serde_yaml::from_str(catalog_yaml).context("deserialize content catalog")?;
        let editorial: Editorial =
            serde_yaml::from_str(editorial_yaml).context("deserialize editorial content")?;

        let mut seen = HashSet::new();
        for book in &catalog.books {
            if book.id.trim().is_empty() {
                anyhow::bail!("book id must not be empty (title: {:?})", book.title);
            }
            if !seen.insert(book.id.as_str()) {
                anyhow::bail!("duplicate book id: {}", book.id);
            }
            if book.tactics.is_empty() {
                anyhow::bail!("book {} must list at least one tactic", book.id);
            }
        }

        // Categories are keyed by the enum, so the catalog must list each one exactly once.
        let mut scripts = Vec::with_capacity(ScriptCategory::ALL.len());
        for category in ScriptCategory::ALL {
            let mut groups = catalog.scripts.iter().filter(|g| g.category == category);
            let group = groups
                .next()
                .ok_or_else(|| anyhow::anyhow!("script category missing: {category}"))?;
            if groups.next().is_some() {
                anyhow::bail!("script category listed more than once: {category}");
            }
            scripts.push((category, group.phrases.clone()));
        }

        for id in [&editorial.overview.featured_book, &editorial.expose.book_id] {
            if !seen.contains(id.as_str()) {
                anyhow::bail!("editorial content references unknown book: {id}");
            }
        }
        for action in &editorial.overview.quick_actions {
            if action.target.parse::<View>().is_err() {
                anyhow::bail!(
                    "quick action {:?} targets unknown view: {}",
                    action.label,
                    action.target
                );
            }
        }

        tracing::debug!(
            books = catalog.books.len(),
            scripts = scripts.iter().map(|(_, s)| s.len()).sum::<usize>(),
            "loaded content"
        );

        Ok(Self {
            books: catalog.books,
            scripts,
            editorial,
        })
    }

    pub fn get_book(&self, id: &str) -> Result<&Book> {
        self.books
            .iter()
            .find(|book| book.id == id)
            .ok_or_else(|| Error::BookNotFound(id.to_owned()))
    }

    /// Books in catalog order, optionally restricted to one status.
    pub fn list_books(&self, status: Option<BookStatus>) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| status.is_none_or(|status| book.status == status))
            .collect()
    }

    pub fn list_script_categories(&self) -> Vec<ScriptCategory> {
        self.scripts.iter().map(|(category, _)| *category).collect()
    }

    pub fn get_scripts(&self, category: ScriptCategory) -> &[String] {
        self.scripts
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, scripts)| scripts.as_slice())
            .unwrap_or_default()
    }

    pub fn editorial(&self) -> &Editorial {
        &self.editorial
    }
}
