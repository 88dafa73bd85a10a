//! Shared fixtures: lopdf-built intake forms and folder trees.
//!
//! Each shown string gets its own text object, so it becomes one extracted
//! line.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use lopdf::{Object, Stream, dictionary};

/// Create a single-page PDF showing each entry of `lines` on its own line.
pub fn pdf_with_lines(lines: &[&str]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut content = String::new();
    for (i, line) in lines.iter().enumerate() {
        let y = 740 - 16 * i;
        content.push_str(&format!("BT /F1 11 Tf 72 {y} Td ({line}) Tj ET\n"));
    }
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(612),
            Object::Integer(792),
        ],
        "Contents" => Object::Reference(content_id),
        "Resources" => dictionary! {
            "Font" => dictionary! { "F1" => Object::Reference(font_id) },
        },
    });
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => vec![Object::Reference(page_id)],
        "Count" => Object::Integer(1),
    });

    if let Ok(page_obj) = doc.get_object_mut(page_id) {
        if let Ok(dict) = page_obj.as_dict_mut() {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Intake form with three header lines above the name, street and city.
pub fn intake_form(name_line: &str, street: &str, city_line: &str) -> Vec<u8> {
    pdf_with_lines(&[
        "Acme Clinic Intake",
        "Page 1 of 1",
        "Patient Record",
        name_line,
        street,
        city_line,
    ])
}

/// Write `bytes` to `dir/rel`, creating parent folders.
pub fn write_file(dir: &Path, rel: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, bytes).unwrap();
    path
}
