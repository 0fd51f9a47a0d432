//! Monthly overtime request form, filled into an ODS template.
//!
//! The template is an opaque OpenDocument spreadsheet. Only its
//! `content.xml` is rewritten, through the anchors of [`schema`]; every other
//! part of the package is copied as is.

pub mod package;
pub mod render;
pub mod schema;

use crate::core::ledger::totals_of;
use crate::errors::{AppError, AppResult};
use crate::models::{UserInfo, WorkEntry};
use crate::utils::formatting::year_month_ko;
use chrono::NaiveDate;
use package::{PackagePart, read_package, write_package};
use regex::Captures;
use schema::{Binding, TemplateSchema};
use std::fs;
use std::path::Path;

pub const ODS_MIME: &str = "application/vnd.oasis.opendocument.spreadsheet";
pub const CONTENT_PART: &str = "content.xml";

/// Everything printed on one monthly form.
#[derive(Debug, Clone)]
pub struct MonthlySheet {
    pub year: i32,
    pub month: u32,
    pub applicant: UserInfo,
    /// Chronological; only the first `render::DATA_ROWS` are printed, the
    /// totals row sums all of them
    pub entries: Vec<WorkEntry>,
}

impl MonthlySheet {
    /// `overtime_202503.ods`
    pub fn file_name(&self) -> String {
        format!("overtime_{}{:02}.ods", self.year, self.month)
    }
}

/// A template whose content.xml passed schema validation.
#[derive(Debug)]
pub struct OdsTemplate {
    parts: Vec<PackagePart>,
    content: String,
    schema: TemplateSchema,
}

impl OdsTemplate {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let bytes = fs::read(path).map_err(|e| {
            AppError::Export(format!("cannot read template {}: {e}", path.display()))
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> AppResult<Self> {
        let parts = read_package(bytes)?;

        let content_part = parts
            .iter()
            .find(|p| p.name == CONTENT_PART)
            .ok_or_else(|| AppError::TemplateSchema(CONTENT_PART.to_string()))?;

        let content = String::from_utf8(content_part.data.clone())
            .map_err(|_| AppError::Export(format!("{CONTENT_PART} is not valid UTF-8")))?;

        let schema = TemplateSchema::standard()?;
        schema.validate(&content)?;

        Ok(Self {
            parts,
            content,
            schema,
        })
    }

    /// The patched content.xml for `sheet`, stamped with `applied_on`.
    pub fn render_content(&self, sheet: &MonthlySheet, applied_on: NaiveDate) -> String {
        let mut xml = self.content.clone();

        let fields = [
            (Binding::Department, sheet.applicant.department.clone()),
            (Binding::Rank, sheet.applicant.rank.clone()),
            (Binding::Name, sheet.applicant.name.clone()),
            (Binding::Birthdate, sheet.applicant.birthdate.clone()),
            (Binding::Period, year_month_ko(sheet.year, sheet.month)),
        ];

        for (binding, value) in &fields {
            xml = self
                .schema
                .anchor(*binding)
                .replacen(&xml, 1, |caps: &Captures| {
                    format!("{}{}", &caps[1], render::field_cell(&caps[2], value))
                })
                .into_owned();
        }

        let rows = render::data_rows(&sheet.entries);
        xml = self
            .schema
            .anchor(Binding::DataRows)
            .replacen(&xml, 1, |caps: &Captures| {
                format!("{}{}{}", &caps[1], rows, &caps[3])
            })
            .into_owned();

        let totals = render::totals_cells(&totals_of(&sheet.entries));
        xml = self
            .schema
            .anchor(Binding::Totals)
            .replacen(&xml, 1, |_: &Captures| totals.clone())
            .into_owned();

        let stamp = render::application_date(applied_on);
        xml = self
            .schema
            .anchor(Binding::ApplicationDate)
            .replacen(&xml, 1, |_: &Captures| stamp.clone())
            .into_owned();

        xml
    }

    /// Full .ods document for `sheet`.
    pub fn render(&self, sheet: &MonthlySheet, applied_on: NaiveDate) -> AppResult<Vec<u8>> {
        let content = self.render_content(sheet, applied_on);

        let parts: Vec<PackagePart> = self
            .parts
            .iter()
            .map(|p| {
                if p.name == CONTENT_PART {
                    PackagePart {
                        name: p.name.clone(),
                        data: content.as_bytes().to_vec(),
                        is_dir: false,
                    }
                } else {
                    p.clone()
                }
            })
            .collect();

        write_package(&parts, ODS_MIME)
    }
}
