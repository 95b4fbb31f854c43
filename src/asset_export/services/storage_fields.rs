//! Parsers for the storage-related report fields.
//!
//! The disposition tool packs per-disk metadata into comma-separated lists
//! whose entries look like `Storage 2 / <value>`. Each list is meant to line
//! up with the "Storage N" descriptor slots, but nothing enforces that, so
//! every lookup here can fail with a [`SlotFieldError`].

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::asset_export::domain::NOT_AVAILABLE;

const SOURCE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const EXPORT_TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";
/// Trailing characters the tool appends to each timestamp (e.g. ".000").
const TIMESTAMP_SUFFIX_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotFieldError {
    #[error("field is missing")]
    Missing,
    #[error("no entry for slot {slot} (field has {entries} entries)")]
    ArityMismatch { slot: u8, entries: usize },
    #[error("entry '{entry}' has no value")]
    Malformed { entry: String },
    #[error("timestamp '{value}' is not in year-month-day hour:minute:second form")]
    Timestamp { value: String },
}

/// One comma-separated, slot-aligned list field.
#[derive(Debug)]
pub struct SlotList<'a> {
    entries: Vec<&'a str>,
}

impl<'a> SlotList<'a> {
    pub fn parse(field: Option<&'a str>) -> Result<Self, SlotFieldError> {
        let field = field.ok_or(SlotFieldError::Missing)?;
        Ok(Self {
            entries: field.split(',').map(str::trim).collect(),
        })
    }

    /// Finds the entry for `slot`: by its "Storage N /" label when present,
    /// otherwise by position. An entry labelled for another slot never
    /// stands in for this one.
    pub fn entry(&self, slot: u8) -> Result<&'a str, SlotFieldError> {
        let label = slot_label(slot);
        if let Some(entry) = self.entries.iter().find(|e| e.starts_with(&label)) {
            return Ok(*entry);
        }
        usize::from(slot)
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .copied()
            .filter(|entry| !has_slot_label(entry))
            .ok_or(SlotFieldError::ArityMismatch {
                slot,
                entries: self.entries.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn slot_label(slot: u8) -> String {
    format!("Storage {} /", slot)
}

/// True for entries of the form "Storage K / ...", whatever K is.
fn has_slot_label(entry: &str) -> bool {
    let Some(rest) = entry.strip_prefix("Storage ") else {
        return false;
    };
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    digits > 0 && rest[digits..].trim_start().starts_with('/')
}

/// Value of an entry with its "Storage N /" label removed.
fn labelled_value(entry: &str, slot: u8) -> String {
    entry
        .strip_prefix(&slot_label(slot))
        .unwrap_or(entry)
        .trim()
        .to_string()
}

/// Second "/"-separated segment of an entry.
fn second_segment(entry: &str) -> Result<String, SlotFieldError> {
    entry
        .split('/')
        .nth(1)
        .map(|segment| segment.trim().to_string())
        .ok_or_else(|| SlotFieldError::Malformed {
            entry: entry.to_string(),
        })
}

/// "Storage Serial" entry for a slot.
pub fn storage_serial(field: Option<&str>, slot: u8) -> Result<String, SlotFieldError> {
    let list = SlotList::parse(field)?;
    Ok(labelled_value(list.entry(slot)?, slot))
}

/// "Data Wipe Employee" entry for a slot.
pub fn wipe_operator(field: Option<&str>, slot: u8) -> Result<String, SlotFieldError> {
    let list = SlotList::parse(field)?;
    Ok(labelled_value(list.entry(slot)?, slot))
}

/// Raw "Data Wipe" outcome text for a slot (e.g. "Successful").
pub fn wipe_outcome(field: Option<&str>, slot: u8) -> Result<String, SlotFieldError> {
    let list = SlotList::parse(field)?;
    second_segment(list.entry(slot)?)
}

/// "Data Wipe Method" for a slot; empty when the whole field is "N/A".
pub fn wipe_method(field: Option<&str>, slot: u8) -> Result<String, SlotFieldError> {
    if field.map(str::trim) == Some(NOT_AVAILABLE) {
        return Ok(String::new());
    }
    let list = SlotList::parse(field)?;
    second_segment(list.entry(slot)?)
}

/// Start and finish of the wipe for a slot, re-emitted as day-month-year.
///
/// Both values are empty when either side has no timestamp; a missing field
/// counts as no timestamp.
pub fn wipe_window(
    started: Option<&str>,
    finished: Option<&str>,
    slot: u8,
) -> Result<(String, String), SlotFieldError> {
    let raw_started = raw_timestamp(started, slot)?;
    let raw_finished = raw_timestamp(finished, slot)?;
    if raw_started.is_empty() || raw_finished.is_empty() {
        return Ok((String::new(), String::new()));
    }
    Ok((
        reformat_timestamp(&raw_started)?,
        reformat_timestamp(&raw_finished)?,
    ))
}

fn raw_timestamp(field: Option<&str>, slot: u8) -> Result<String, SlotFieldError> {
    let list = match SlotList::parse(field) {
        Ok(list) => list,
        Err(SlotFieldError::Missing) => return Ok(String::new()),
        Err(e) => return Err(e),
    };
    let value = labelled_value(list.entry(slot)?, slot);
    let keep = value.chars().count().saturating_sub(TIMESTAMP_SUFFIX_LEN);
    Ok(value.chars().take(keep).collect::<String>().trim().to_string())
}

fn reformat_timestamp(raw: &str) -> Result<String, SlotFieldError> {
    NaiveDateTime::parse_from_str(raw, SOURCE_TIMESTAMP_FORMAT)
        .map(|parsed| parsed.format(EXPORT_TIMESTAMP_FORMAT).to_string())
        .map_err(|_| SlotFieldError::Timestamp {
            value: raw.to_string(),
        })
}

/// Parsed "Storage N" descriptor: `Type:&nbsp;SSD, Model: <model>, Size: <size>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StorageDescriptor {
    pub storage_type: String,
    pub model: String,
    pub size: String,
}

impl StorageDescriptor {
    /// Returns None when the descriptor has fewer than three comma-separated parts.
    pub fn parse(descriptor: &str) -> Option<Self> {
        let normalized = descriptor.replace("&nbsp;", " ");
        let parts: Vec<&str> = normalized.split(',').collect();
        if parts.len() < 3 {
            return None;
        }
        let last = parts.len() - 1;
        let model = parts[1..last].join(",");

        Some(Self {
            storage_type: strip_label(parts[0], "Type:").to_uppercase(),
            model: strip_label(&model, "Model:"),
            size: strip_label(parts[last], "Size:"),
        })
    }
}

fn strip_label(part: &str, label: &str) -> String {
    let part = part.trim();
    part.strip_prefix(label).unwrap_or(part).trim().to_string()
}
