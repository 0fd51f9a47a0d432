//! Named bindings between the request form and the template's content.xml.
//!
//! Each binding is an anchor in the XML (a label text, a row or cell style).
//! A template is accepted only when every anchor is present, so a changed
//! layout fails at load time instead of producing a half-filled sheet.

use crate::errors::{AppError, AppResult};
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Department,
    Rank,
    Name,
    Birthdate,
    Period,
    DataRows,
    Totals,
    ApplicationDate,
}

impl Binding {
    pub const ALL: [Binding; 8] = [
        Binding::Department,
        Binding::Rank,
        Binding::Name,
        Binding::Birthdate,
        Binding::Period,
        Binding::DataRows,
        Binding::Totals,
        Binding::ApplicationDate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Binding::Department => "department",
            Binding::Rank => "rank",
            Binding::Name => "name",
            Binding::Birthdate => "birthdate",
            Binding::Period => "period",
            Binding::DataRows => "data_rows",
            Binding::Totals => "totals",
            Binding::ApplicationDate => "application_date",
        }
    }

    /// Label text preceding the input cell, for header fields.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Binding::Department => Some("신청부서"),
            Binding::Rank => Some(r#"직 <text:s text:c="4"/>급"#),
            Binding::Name => Some(r#"성 <text:s text:c="5"/>명"#),
            Binding::Birthdate => Some("생년월일"),
            Binding::Period => Some("발생년월"),
            _ => None,
        }
    }

    fn pattern(&self) -> String {
        match self {
            Binding::Department
            | Binding::Rank
            | Binding::Name
            | Binding::Birthdate
            | Binding::Period => field_cell(self.label().unwrap_or_default()),
            // column header row (ro3) ... totals row (ro5)
            Binding::DataRows => concat!(
                r#"(?s)(<table:table-row table:style-name="ro3">.*?</table:table-row>)"#,
                r#"(.*?)"#,
                r#"(<table:table-row table:style-name="ro5">)"#,
            )
            .to_string(),
            Binding::Totals => format!(
                r#"(?s)<table:table-cell table:style-name="ce5"/>{}{}"#,
                styled_cell("ce6"),
                styled_cell("ce7"),
            ),
            Binding::ApplicationDate => concat!(
                r#"신청일 : \d{4} 년 <text:s text:c="\d+"/?>\s*\d{1,2} 월 "#,
                r#"<text:s text:c="\d+"/?>\s*\d{1,2} 일"#,
            )
            .to_string(),
        }
    }
}

/// Label cell, then the empty input cell right after it.
fn field_cell(label: &str) -> String {
    format!(
        r#"(<text:p>{}</text:p></table:table-cell>)<table:table-cell ([^>]*?)/>"#,
        regex::escape(label)
    )
}

/// A cell with the given style, either self-closing or with content.
fn styled_cell(style: &str) -> String {
    format!(
        r#"<table:table-cell[^>]*?table:style-name="{}"[^>]*?(?:/>|>.*?</table:table-cell>)"#,
        style
    )
}

/// Compiled anchors of the request form, indexed by `Binding`.
#[derive(Debug)]
pub struct TemplateSchema {
    anchors: Vec<(Binding, Regex)>,
}

impl TemplateSchema {
    pub fn standard() -> AppResult<Self> {
        let anchors = Binding::ALL
            .iter()
            .map(|b| {
                Regex::new(&b.pattern())
                    .map(|re| (*b, re))
                    .map_err(|e| AppError::Other(format!("binding {}: {e}", b.name())))
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self { anchors })
    }

    pub fn anchor(&self, binding: Binding) -> &Regex {
        &self.anchors[binding as usize].1
    }

    /// Bindings whose anchor is not found in `xml`.
    pub fn missing(&self, xml: &str) -> Vec<Binding> {
        self.anchors
            .iter()
            .filter(|(_, re)| !re.is_match(xml))
            .map(|(b, _)| *b)
            .collect()
    }

    /// Fail on the first binding whose anchor is absent.
    pub fn validate(&self, xml: &str) -> AppResult<()> {
        match self.missing(xml).first() {
            Some(b) => Err(AppError::TemplateSchema(b.name().to_string())),
            None => Ok(()),
        }
    }
}
