use ansi_term::Colour::{Red, Yellow};
use std::fmt;

/// Icons
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Yellow.bold().paint(ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Red.bold().paint(ICON_ERR), msg);
}
