//! Reading and writing the zip container of an OpenDocument file.

use crate::errors::AppResult;
use std::io::{Cursor, Read, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

pub const MIMETYPE_PART: &str = "mimetype";

/// One file (or folder) inside the package.
#[derive(Debug, Clone)]
pub struct PackagePart {
    pub name: String,
    pub data: Vec<u8>,
    pub is_dir: bool,
}

/// Unpack every part of the archive into memory, keeping their order.
pub fn read_package(bytes: &[u8]) -> AppResult<Vec<PackagePart>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut parts = Vec::with_capacity(archive.len());

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let name = file.name().to_string();
        let is_dir = file.is_dir();

        let mut data = Vec::new();
        if !is_dir {
            file.read_to_end(&mut data)?;
        }

        parts.push(PackagePart { name, data, is_dir });
    }

    Ok(parts)
}

/// Pack the parts back into a zip buffer.
///
/// `mimetype` must be the first entry and stored uncompressed for readers to
/// recognise the document type; it is created from `mime` when missing.
pub fn write_package(parts: &[PackagePart], mime: &str) -> AppResult<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let stored: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Stored);
    let deflated: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mimetype = parts
        .iter()
        .find(|p| p.name == MIMETYPE_PART)
        .map(|p| p.data.clone())
        .unwrap_or_else(|| mime.as_bytes().to_vec());

    zip.start_file(MIMETYPE_PART, stored)?;
    zip.write_all(&mimetype)?;

    for part in parts.iter().filter(|p| p.name != MIMETYPE_PART) {
        if part.is_dir {
            zip.add_directory(part.name.as_str(), deflated)?;
        } else {
            zip.start_file(part.name.as_str(), deflated)?;
            zip.write_all(&part.data)?;
        }
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}
