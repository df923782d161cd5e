use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::router::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    Text,
    TextArea,
    Choice(&'static [&'static str]),
    Number { min: i64, max: i64, default: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub widget: Widget,
}

const fn field(name: &'static str, label: &'static str, widget: Widget) -> FieldSpec {
    FieldSpec {
        name,
        label,
        widget,
    }
}

const BOOK_INDUSTRIES: &[&str] = &[
    "Financial Services",
    "Insurance",
    "Real Estate",
    "Automotive",
    "Other",
];

const INTEL_INDUSTRIES: &[&str] = &[
    "Financial Services",
    "Insurance",
    "Real Estate",
    "Automotive",
    "Retail",
    "Other",
];

const SUGGEST_BOOK_FIELDS: &[FieldSpec] = &[
    field("title", "Book Title", Widget::Text),
    field("author", "Author", Widget::Text),
    field("industry", "Industry", Widget::Choice(BOOK_INDUSTRIES)),
    field(
        "priority",
        "Priority Level",
        Widget::Choice(&["High - Widely Used", "Medium - Common", "Low - Niche"]),
    ),
    field(
        "why_important",
        "Why should this book be analyzed?",
        Widget::TextArea,
    ),
];

const SUBMIT_SCRIPT_FIELDS: &[FieldSpec] = &[
    field("script", "What exact phrase did you hear?", Widget::TextArea),
    field(
        "context",
        "When did they use this?",
        Widget::Choice(&[
            "First meeting",
            "When I objected",
            "During close",
            "Follow-up call",
            "Other",
        ]),
    ),
    field(
        "effect",
        "How did it make you feel? What was their goal?",
        Widget::TextArea,
    ),
];

const BOOK_INTEL_FIELDS: &[FieldSpec] = &[
    field("title", "Book/Material Title", Widget::Text),
    field("author_company", "Author/Company", Widget::Text),
    field("industry", "Industry", Widget::Choice(INTEL_INDUSTRIES)),
    field("role", "Your Role/Experience (optional)", Widget::Text),
    field("company_used", "Company That Used This (optional)", Widget::Text),
    field(
        "year",
        "Year Encountered",
        Widget::Number {
            min: 2000,
            max: 2025,
            default: 2024,
        },
    ),
    field(
        "tactics",
        "What specific tactics or techniques were taught?",
        Widget::TextArea,
    ),
    field(
        "red_flags",
        "What red flags should consumers watch for?",
        Widget::TextArea,
    ),
    field(
        "context",
        "Additional context or insider information",
        Widget::TextArea,
    ),
];

const SCRIPT_INTEL_FIELDS: &[FieldSpec] = &[
    field("script", "What was the exact phrase or script?", Widget::TextArea),
    field(
        "situation",
        "When was this used?",
        Widget::Choice(&[
            "First meeting",
            "When I said no",
            "During sales pitch",
            "Follow-up call",
            "Closing attempt",
        ]),
    ),
    field(
        "salesperson",
        "Type of salesperson",
        Widget::Choice(&[
            "Financial Advisor",
            "Insurance Agent",
            "Car Salesman",
            "Real Estate Agent",
            "Other",
        ]),
    ),
    field("company", "Company (optional)", Widget::Text),
    field(
        "effectiveness",
        "How effective was it?",
        Widget::Choice(&[
            "Very manipulative",
            "Somewhat effective",
            "I saw through it",
            "Backfired",
        ]),
    ),
    field("response", "How did you respond?", Widget::TextArea),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormId {
    SuggestBook,
    SubmitScript,
    BookIntel,
    ScriptIntel,
}

impl FormId {
    pub const ALL: [FormId; 4] = [
        FormId::SuggestBook,
        FormId::SubmitScript,
        FormId::BookIntel,
        FormId::ScriptIntel,
    ];

    pub fn id(self) -> &'static str {
        match self {
            FormId::SuggestBook => "suggest_book",
            FormId::SubmitScript => "submit_script",
            FormId::BookIntel => "book_intel",
            FormId::ScriptIntel => "script_intel",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FormId::SuggestBook => "📖 Suggest a Book for Analysis",
            FormId::SubmitScript => "🎯 Submit a Script You've Heard",
            FormId::BookIntel => "📖 Training Material Intelligence",
            FormId::ScriptIntel => "🎭 Script Intelligence",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormId::SuggestBook => "📚 Submit Book Suggestion",
            FormId::SubmitScript => "🎭 Submit Script",
            FormId::BookIntel => "🎯 Submit Training Material Intel",
            FormId::ScriptIntel => "🎭 Submit Script Intel",
        }
    }

    /// The view that hosts this form.
    pub fn view(self) -> View {
        match self {
            FormId::SuggestBook => View::BookPipeline,
            FormId::SubmitScript => View::ScriptDatabase,
            FormId::BookIntel | FormId::ScriptIntel => View::SubmitIntel,
        }
    }

    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            FormId::SuggestBook => SUGGEST_BOOK_FIELDS,
            FormId::SubmitScript => SUBMIT_SCRIPT_FIELDS,
            FormId::BookIntel => BOOK_INTEL_FIELDS,
            FormId::ScriptIntel => SCRIPT_INTEL_FIELDS,
        }
    }

    pub fn acknowledgement(self) -> &'static str {
        match self {
            FormId::SuggestBook => {
                "Book suggestion received! Thank you for helping build the intelligence database."
            }
            FormId::SubmitScript => {
                "Script submitted! This will help other consumers recognize these tactics."
            }
            FormId::BookIntel => {
                "Intelligence received! This will help expose these tactics to protect other consumers."
            }
            FormId::ScriptIntel => {
                "Script intelligence received! This helps build our defense database."
            }
        }
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FormId {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        FormId::ALL
            .into_iter()
            .find(|form| form.id() == raw.trim())
            .ok_or_else(|| Error::UnknownForm(raw.to_owned()))
    }
}

/// Kind of intel on the Submit Intel view. Only some kinds have a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntelKind {
    #[default]
    TrainingMaterial,
    ActualScript,
    TrainingProgram,
    CompanyPolicy,
    Other,
}

impl IntelKind {
    pub const ALL: [IntelKind; 5] = [
        IntelKind::TrainingMaterial,
        IntelKind::ActualScript,
        IntelKind::TrainingProgram,
        IntelKind::CompanyPolicy,
        IntelKind::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IntelKind::TrainingMaterial => "Sales Training Book/Material",
            IntelKind::ActualScript => "Actual Script Used",
            IntelKind::TrainingProgram => "Training Program Info",
            IntelKind::CompanyPolicy => "Company Policy",
            IntelKind::Other => "Other",
        }
    }

    pub fn form(self) -> Option<FormId> {
        match self {
            IntelKind::TrainingMaterial => Some(FormId::BookIntel),
            IntelKind::ActualScript => Some(FormId::ScriptIntel),
            IntelKind::TrainingProgram | IntelKind::CompanyPolicy | IntelKind::Other => None,
        }
    }

    /// Unknown labels select the first kind, like an untouched select box.
    pub fn from_label(raw: Option<&str>) -> Self {
        raw.and_then(|raw| IntelKind::ALL.into_iter().find(|k| k.label() == raw.trim()))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice(&'static str),
    Number(i64),
}

/// A checked payload. Lives only until [`submit`] returns.
#[derive(Debug)]
pub struct Submission {
    pub form: FormId,
    pub values: BTreeMap<&'static str, FieldValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub form: FormId,
    pub message: &'static str,
}

/// Checks raw form fields against the widgets declared for `form`.
///
/// Text fields accept anything, choices must name one of their options and
/// numbers must fall in range. Absent fields take the widget default. Fields
/// the form does not declare are ignored.
pub fn validate(form: FormId, raw: &HashMap<String, String>) -> Result<Submission> {
    let mut values = BTreeMap::new();
    for spec in form.fields() {
        let input = raw.get(spec.name).map(|v| v.trim());
        let value = match spec.widget {
            Widget::Text | Widget::TextArea => FieldValue::Text(input.unwrap_or("").to_owned()),
            Widget::Choice(options) => match input {
                None | Some("") => FieldValue::Choice(options[0]),
                Some(input) => options
                    .iter()
                    .copied()
                    .find(|option| *option == input)
                    .map(FieldValue::Choice)
                    .ok_or_else(|| Error::InvalidField {
                        field: spec.label.to_owned(),
                        reason: format!("{input:?} is not one of the offered choices"),
                    })?,
            },
            Widget::Number { min, max, default } => match input {
                None | Some("") => FieldValue::Number(default),
                Some(input) => {
                    let n = input.parse::<i64>().map_err(|_| Error::InvalidField {
                        field: spec.label.to_owned(),
                        reason: format!("{input:?} is not a whole number"),
                    })?;
                    if !(min..=max).contains(&n) {
                        return Err(Error::InvalidField {
                            field: spec.label.to_owned(),
                            reason: format!("must be between {min} and {max}"),
                        });
                    }
                    FieldValue::Number(n)
                }
            },
        };
        values.insert(spec.name, value);
    }
    Ok(Submission { form, values })
}

/// Validates and acknowledges a submission. The payload is consumed and
/// dropped here; nothing about it outlives the call.
pub fn submit(form: FormId, raw: HashMap<String, String>) -> Result<Acknowledgement> {
    let submission = validate(form, &raw)?;
    drop(raw);

    let filled = submission
        .values
        .values()
        .filter(|v| !matches!(v, FieldValue::Text(t) if t.is_empty()))
        .count();
    tracing::info!(
        form = %submission.form,
        receipt = %uuid::Uuid::new_v4(),
        fields = submission.values.len(),
        filled,
        "submission acknowledged and discarded"
    );

    Ok(Acknowledgement {
        form: submission.form,
        message: submission.form.acknowledgement(),
    })
}
