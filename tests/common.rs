#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use pdf_writer::{Content, Name, Pdf, Rect, Ref};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rbp() -> Command {
    cargo_bin_cmd!("rbuonipasto")
}

/// Create a unique fixture path inside the system temp dir and remove any
/// stale file from a previous run
pub fn fixture_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbuonipasto.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a single-page PDF carrying one text line per entry
pub fn write_timesheet_pdf(path: &str, lines: &[&str]) {
    write_timesheet_pdf_pages(path, &[lines]);
}

/// Multi-page variant: one slice of text lines per page
pub fn write_timesheet_pdf_pages(path: &str, page_texts: &[&[&str]]) {
    let mut pdf = Pdf::new();

    // ID gestiti a mano
    let catalog_id = Ref::new(1);
    let pages_id = Ref::new(2);
    let font_id = Ref::new(3);
    let mut next_id = 4;

    pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

    let mut page_refs = Vec::new();
    for lines in page_texts {
        let page_id = Ref::new(next_id);
        let content_id = Ref::new(next_id + 1);
        next_id += 2;
        page_refs.push(page_id);

        {
            let mut page = pdf.page(page_id);
            page.parent(pages_id)
                .media_box(Rect::new(0.0, 0.0, 595.0, 842.0))
                .contents(content_id);
            page.resources().fonts().pair(Name(b"F1"), font_id);
        }

        let mut content = Content::new();
        let mut y = 800.0;
        for line in lines.iter() {
            content.begin_text();
            content.set_font(Name(b"F1"), 10.0);
            content.set_text_matrix([1.0, 0.0, 0.0, 1.0, 50.0, y]);
            content.show(pdf_writer::Str(line.as_bytes()));
            content.end_text();
            y -= 14.0;
        }
        pdf.stream(content_id, &content.finish());
    }

    pdf.catalog(catalog_id).pages(pages_id);
    {
        let mut pages = pdf.pages(pages_id);
        pages.count(page_refs.len() as i32);
        pages.kids(page_refs);
    }

    fs::write(path, pdf.finish()).expect("write fixture pdf");
}

/// Timesheet text shaped like the vendor layout: column labels plus enough
/// day lines to clear the default minimum. The third token on a day line is
/// the worked-hours column, the causale comes after it.
pub fn sample_lines() -> Vec<&'static str> {
    vec![
        "Foglio presenze marzo 2024",
        "Giorno Ora Ing. Ora Usc. Ore Causale",
        "01/03/2024 07:30 21:00 13.30",
        "02/03/2024 08:00 16:00 8.00",
        "04/03/2024 08:00 21:00 13.00",
        "05/03/2024 08:00 15:30 7.30",
        "06/03/2024 00:00 00:00",
        "07/03/2024 08:00 20:30 12.30",
        "08/03/2024 07:30 21:00 13.30 RECUPERO COMPENSATIVO",
    ]
}

/// Write the canned valid timesheet and return its path
pub fn make_sample_pdf(name: &str) -> String {
    let path = fixture_path(name, "pdf");
    write_timesheet_pdf(&path, &sample_lines());
    path
}
