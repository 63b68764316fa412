//! MIL-HDBK-217 section table.
//!
//! Only a lookup: chapters and section titles, plus the chapter that covers
//! each classified part type. No failure-rate models live here.

use bom_model::PartType;
use serde::Deserialize;

use crate::embedded::MIL_HDBK_217_SECTIONS;
use crate::error::{Result, StandardsError};

const SECTIONS_FILE: &str = "mil_hdbk_217_sections.csv";

#[derive(Debug, Deserialize)]
struct SectionRecord {
    chapter: u32,
    section: String,
    title: String,
}

/// A numbered section inside a chapter (e.g. `10.12`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub title: String,
}

/// A handbook chapter (e.g. `9 RESISTORS`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub number: u32,
    pub title: String,
    pub sections: Vec<Section>,
}

/// A search hit: the chapter and, when the match was on a section, that section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMatch<'a> {
    pub chapter: &'a Chapter,
    pub section: Option<&'a Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTable {
    chapters: Vec<Chapter>,
}

impl SectionTable {
    /// Loads the embedded table.
    pub fn load_default() -> Result<Self> {
        Self::from_csv(SECTIONS_FILE, MIL_HDBK_217_SECTIONS)
    }

    fn from_csv(name: &'static str, content: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());
        let mut chapters: Vec<Chapter> = Vec::new();
        for record in reader.deserialize::<SectionRecord>() {
            let record = record.map_err(|source| StandardsError::CsvRead { name, source })?;
            if record.section.is_empty() {
                chapters.push(Chapter {
                    number: record.chapter,
                    title: record.title,
                    sections: Vec::new(),
                });
                continue;
            }
            let Some(chapter) = chapters.iter_mut().find(|c| c.number == record.chapter) else {
                return Err(StandardsError::InvalidValue {
                    field: "chapter",
                    value: record.chapter.to_string(),
                    file: name,
                });
            };
            chapter.sections.push(Section {
                id: record.section,
                title: record.title,
            });
        }
        Ok(Self { chapters })
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|chapter| chapter.number == number)
    }

    /// Chapter covering a classified part type.
    pub fn chapter_for(&self, part_type: PartType) -> Option<&Chapter> {
        let number = match part_type {
            PartType::Ic => 5,
            PartType::Resistor => 9,
            PartType::Capacitor => 10,
            PartType::Inductor => 11,
            PartType::Connector => 15,
            PartType::Other | PartType::Unknown => return None,
        };
        self.chapter(number)
    }

    /// Case-insensitive substring search over chapter and section titles.
    pub fn search(&self, text: &str) -> Vec<SectionMatch<'_>> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let mut matches = Vec::new();
        for chapter in &self.chapters {
            if chapter.title.to_lowercase().contains(&needle) {
                matches.push(SectionMatch {
                    chapter,
                    section: None,
                });
            }
            for section in &chapter.sections {
                if section.title.to_lowercase().contains(&needle) {
                    matches.push(SectionMatch {
                        chapter,
                        section: Some(section),
                    });
                }
            }
        }
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_loads_all_chapters() {
        let table = SectionTable::load_default().unwrap();
        let numbers: Vec<u32> = table.chapters().iter().map(|c| c.number).collect();
        assert_eq!(numbers, (5..=23).collect::<Vec<_>>());
        let capacitors = table.chapter(10).unwrap();
        assert_eq!(capacitors.title, "CAPACITORS");
        assert_eq!(capacitors.sections.len(), 19);
    }

    #[test]
    fn part_types_resolve_to_chapters() {
        let table = SectionTable::load_default().unwrap();
        assert_eq!(table.chapter_for(PartType::Resistor).unwrap().number, 9);
        assert_eq!(table.chapter_for(PartType::Ic).unwrap().title, "MICROCIRCUITS");
        assert!(table.chapter_for(PartType::Other).is_none());
        assert!(table.chapter_for(PartType::Unknown).is_none());
    }

    #[test]
    fn search_finds_sections_case_insensitively() {
        let table = SectionTable::load_default().unwrap();
        let hits = table.search("tantalum");
        let ids: Vec<&str> = hits
            .iter()
            .filter_map(|hit| hit.section.map(|s| s.id.as_str()))
            .collect();
        assert_eq!(ids, vec!["10.12", "10.13"]);
        assert!(table.search("   ").is_empty());
    }

    #[test]
    fn section_before_its_chapter_is_rejected() {
        let result = SectionTable::from_csv("bad.csv", "chapter,section,title\n9,9.1,Fixed\n");
        assert!(matches!(result, Err(StandardsError::InvalidValue { .. })));
    }
}
