use anyhow::Context as _;
use serde_json::json;

use crate::classifier::classify;
use crate::cli::{BookArgs, BooksArgs, ClassifyArgs, OutputArgs, ScriptsArgs};
use crate::content::ContentStore;
use crate::filter::{CategoryFilter, StatusFilter, filter_books, filter_scripts};
use crate::formats::Book;
use crate::router::View;

pub fn books(store: &ContentStore, args: &BooksArgs) -> anyhow::Result<String> {
    let status: StatusFilter = args.status.parse().context("parse --status")?;
    let books = filter_books(store, status);
    if args.output.json {
        return to_json(&books);
    }

    let mut out = String::new();
    for book in books {
        out.push_str(&format!(
            "{}\t[{}]\t{} ({})\n",
            book.id, book.status, book.title, book.author
        ));
    }
    Ok(out)
}

pub fn book(store: &ContentStore, args: &BookArgs) -> anyhow::Result<String> {
    let book = store.get_book(&args.id)?;
    if args.output.json {
        return to_json(book);
    }
    Ok(book_text(book))
}

fn book_text(book: &Book) -> String {
    let mut out = format!(
        "{}\nby {}\nstatus: {}\n\n{}\n\nTactics:\n",
        book.title, book.author, book.status, book.description
    );
    for tactic in &book.tactics {
        out.push_str(&format!("  - {tactic}\n"));
    }
    if let Some(quote) = &book.insider_quote {
        out.push_str(&format!("\nInsider: \"{quote}\"\n"));
    }
    out
}

pub fn scripts(store: &ContentStore, args: &ScriptsArgs) -> anyhow::Result<String> {
    let category: CategoryFilter = args.category.parse().context("parse --category")?;
    let groups = filter_scripts(store, category, args.query.as_deref());

    if args.output.json {
        let value: Vec<_> = groups
            .iter()
            .map(|group| {
                json!({
                    "category": group.category,
                    "title": group.title,
                    "scripts": group.annotated(),
                })
            })
            .collect();
        return to_json(&value);
    }

    let mut out = String::new();
    for group in &groups {
        out.push_str(&format!("{}\n", group.title));
        if group.scripts.is_empty() {
            out.push_str("  (no matching scripts)\n");
        }
        for annotated in group.annotated() {
            out.push_str(&format!(
                "  \"{}\"\n    purpose:  {}\n    response: \"{}\"\n",
                annotated.script, annotated.classification.purpose, annotated.classification.counter
            ));
        }
    }
    Ok(out)
}

pub fn classification(args: &ClassifyArgs) -> anyhow::Result<String> {
    let got = classify(&args.script);
    if args.output.json {
        return to_json(&got);
    }
    Ok(format!(
        "purpose:  {}\nresponse: \"{}\"\n",
        got.purpose, got.counter
    ))
}

pub fn views(args: &OutputArgs) -> anyhow::Result<String> {
    if args.json {
        let value: Vec<_> = View::ALL
            .into_iter()
            .map(|view| json!({ "slug": view.slug(), "label": view.label() }))
            .collect();
        return to_json(&value);
    }
    Ok(View::ALL
        .into_iter()
        .map(|view| format!("{}\t{}\n", view.slug(), view.label()))
        .collect())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(value).context("serialize json")?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ContentStore {
        ContentStore::embedded().expect("embedded content parses")
    }

    fn output(json: bool) -> OutputArgs {
        OutputArgs { json }
    }

    #[test]
    fn books_text_lists_one_line_per_book() -> anyhow::Result<()> {
        let out = books(
            &store(),
            &BooksArgs {
                status: "coming soon".to_owned(),
                output: output(false),
            },
        )?;
        assert_eq!(out.lines().count(), 3);
        assert!(out.starts_with("spin_selling\t[COMING SOON]\tSPIN Selling"));
        Ok(())
    }

    #[test]
    fn unknown_status_is_an_error() {
        let err = books(
            &store(),
            &BooksArgs {
                status: "archived".to_owned(),
                output: output(false),
            },
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("unknown book status"));
    }

    #[test]
    fn book_json_round_trips() -> anyhow::Result<()> {
        let store = store();
        let out = book(
            &store,
            &BookArgs {
                id: "influence".to_owned(),
                output: output(true),
            },
        )?;
        let parsed: Book = serde_json::from_str(&out)?;
        assert_eq!(&parsed, store.get_book("influence")?);
        Ok(())
    }

    #[test]
    fn scripts_text_marks_empty_categories() -> anyhow::Result<()> {
        let out = scripts(
            &store(),
            &ScriptsArgs {
                category: "All".to_owned(),
                query: Some("think".to_owned()),
                output: output(false),
            },
        )?;
        assert_eq!(out.matches("(no matching scripts)").count(), 3);
        assert!(out.contains("purpose:  Prevent delay tactics"));
        Ok(())
    }

    #[test]
    fn classification_text() -> anyhow::Result<()> {
        let out = classification(&ClassifyArgs {
            script: "When we set up your account next week...".to_owned(),
            output: output(false),
        })?;
        assert_eq!(
            out,
            "purpose:  Assume the sale is done\nresponse: \"Stop. I haven't agreed to anything yet.\"\n"
        );
        Ok(())
    }
}
