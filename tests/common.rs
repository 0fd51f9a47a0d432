#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use rovertime::core::holiday::HolidayCalendar;
use rovertime::core::logic::Core;
use rovertime::models::{EntryDraft, HolidayMark, WorkEntry, WorkSpan};
use std::env;
use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::PathBuf;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

pub fn rot() -> Command {
    cargo_bin_cmd!("rovertime")
}

/// Unique session path inside the system temp dir, removed if present
pub fn setup_session(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rovertime_session.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Temporary output file path inside tempdir, removed if present
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rovertime_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid time")
}

/// Classified entry built through the library, as `add` would.
pub fn entry(id: i64, date: &str, start: &str, end_date: &str, end: &str) -> WorkEntry {
    let draft = EntryDraft {
        span: WorkSpan::new(d(date), t(start), d(end_date), t(end)),
        reason: format!("reason {id}"),
        holiday: HolidayMark::Auto,
    };
    Core::build_entry(id, draft, &HolidayCalendar::builtin()).expect("valid entry")
}

const LABEL: &str = r#"table:style-name="ce8" office:value-type="string""#;

fn label_row(style: &str, cells: &[(&str, u32)]) -> String {
    let mut row = format!(r#"<table:table-row table:style-name="{style}">"#);
    for (label, span) in cells {
        row.push_str(&format!(
            r#"<table:table-cell {LABEL}><text:p>{label}</text:p></table:table-cell><table:table-cell table:number-columns-spanned="{span}" table:number-rows-spanned="1" table:style-name="ce10"/>"#
        ));
    }
    row.push_str("</table:table-row>");
    row
}

/// content.xml of the monthly request form, reduced to the anchored parts.
pub fn template_content() -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?><office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" office:version="1.3"><office:body><office:spreadsheet><table:table table:name="시간외근무">"#,
    );
    xml.push_str(r#"<table:table-row table:style-name="ro1"><table:table-cell table:number-columns-spanned="10" table:style-name="ce9" office:value-type="string"><text:p>시간외근무 신청서</text:p></table:table-cell></table:table-row>"#);
    xml.push_str(&label_row(
        "ro2",
        &[("신청부서", 4), (r#"직 <text:s text:c="4"/>급"#, 2)],
    ));
    xml.push_str(&label_row(
        "ro2",
        &[(r#"성 <text:s text:c="5"/>명"#, 4), ("생년월일", 2)],
    ));
    xml.push_str(&label_row("ro2", &[("발생년월", 7)]));

    xml.push_str(r#"<table:table-row table:style-name="ro3">"#);
    for h in [
        "일자", "요일", "공휴일", "시작", "종료일", "종료", "사유", "휴일초과", "연장", "야간",
    ] {
        xml.push_str(&format!(
            r#"<table:table-cell table:style-name="ce4" office:value-type="string"><text:p>{h}</text:p></table:table-cell>"#
        ));
    }
    xml.push_str("</table:table-row>");

    // the printed form ships with a few placeholder rows
    for _ in 0..3 {
        xml.push_str(r#"<table:table-row table:style-name="ro4"><table:table-cell table:number-columns-repeated="10" table:style-name="ce3"/></table:table-row>"#);
    }

    xml.push_str(r#"<table:table-row table:style-name="ro5"><table:table-cell table:number-columns-spanned="7" table:style-name="ce4" office:value-type="string"><text:p>합 계</text:p></table:table-cell><table:table-cell table:style-name="ce5"/><table:table-cell table:style-name="ce6"/><table:table-cell table:style-name="ce7"/></table:table-row>"#);
    xml.push_str(r#"<table:table-row table:style-name="ro6"><table:table-cell table:number-columns-spanned="10" table:style-name="ce11" office:value-type="string"><text:p>신청일 : 2025 년 <text:s text:c="3"/> 1 월 <text:s text:c="5"/> 1 일</text:p></table:table-cell></table:table-row>"#);
    xml.push_str("</table:table></office:spreadsheet></office:body></office:document-content>");
    xml
}

/// Zip an ODS package around the given content.xml.
pub fn template_bytes_with(content: &str) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let stored: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Stored);
    let deflated: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("mimetype", stored).unwrap();
    zip.write_all(b"application/vnd.oasis.opendocument.spreadsheet")
        .unwrap();
    zip.start_file("content.xml", deflated).unwrap();
    zip.write_all(content.as_bytes()).unwrap();
    zip.start_file("styles.xml", deflated).unwrap();
    zip.write_all(b"<office:document-styles/>").unwrap();
    zip.add_directory("META-INF/", deflated).unwrap();
    zip.start_file("META-INF/manifest.xml", deflated).unwrap();
    zip.write_all(b"<manifest:manifest/>").unwrap();

    zip.finish().unwrap().into_inner()
}

pub fn template_bytes() -> Vec<u8> {
    template_bytes_with(&template_content())
}

/// Write the test template to a temp file and return its path.
pub fn write_template(name: &str) -> String {
    let path = temp_out(&format!("{name}_template"), "ods");
    fs::write(&path, template_bytes()).expect("write template");
    path
}

/// Read one part of a zip package.
pub fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
    let mut file = archive.by_name(name).expect("part present");
    let mut s = String::new();
    file.read_to_string(&mut s).expect("utf-8 part");
    s
}

pub fn part_names(bytes: &[u8]) -> Vec<String> {
    let archive = ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
    archive.file_names().map(|n| n.to_string()).collect()
}
