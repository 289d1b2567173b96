//! Ranking report: the JSON document produced for one ranking task.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{HeadingLevel, SectionRecord};

/// Marker splitting the persona description from the task statement.
const JOB_MARKER: &str = "Job-to-be-done:";

/// Task metadata recorded alongside the ranked sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// PDF file names that contributed sections
    pub input_documents: Vec<String>,
    /// Full persona text as read from persona.txt
    pub persona: String,
    /// Text after the last "Job-to-be-done:" marker, empty if absent
    pub job_to_be_done: String,
    /// UTC timestamp of report creation, RFC 3339 with microseconds
    pub processing_timestamp: String,
}

/// One ranked section in the report body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSection {
    pub document: String,
    pub page: u32,
    pub section_title: String,
    pub level: HeadingLevel,
    pub language: String,
    pub bold: bool,
    pub boosted_score: f32,
    pub importance_rank: u32,
}

/// Per-section text excerpt accompanying the ranked list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsectionEntry {
    pub document: String,
    pub page: u32,
    pub refined_text: String,
    pub page_number: u32,
}

/// The complete output of one ranking task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    pub metadata: ReportMetadata,
    pub extracted_sections: Vec<RankedSection>,
    pub subsection_analysis: Vec<SubsectionEntry>,
}

impl RankingReport {
    /// Assemble a report from ranked sections. `ranked` must already carry
    /// final scores and 1-indexed ranks.
    pub fn new(input_documents: Vec<String>, persona: &str, ranked: &[SectionRecord]) -> Self {
        let extracted_sections = ranked
            .iter()
            .map(|rec| RankedSection {
                document: rec.document.clone(),
                page: rec.page,
                section_title: rec.title.clone(),
                level: rec.level,
                language: rec.language.clone(),
                bold: rec.bold,
                boosted_score: rec.score,
                importance_rank: rec.rank,
            })
            .collect();

        let subsection_analysis = ranked
            .iter()
            .map(|rec| SubsectionEntry {
                document: rec.document.clone(),
                page: rec.page,
                refined_text: rec.body.clone(),
                page_number: rec.page,
            })
            .collect();

        RankingReport {
            metadata: ReportMetadata {
                input_documents,
                persona: persona.to_string(),
                job_to_be_done: job_from_persona(persona),
                processing_timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            },
            extracted_sections,
            subsection_analysis,
        }
    }
}

/// Extract the job statement from a persona text. The marker may appear
/// anywhere; the portion after its last occurrence is taken, trimmed.
fn job_from_persona(persona: &str) -> String {
    match persona.rsplit_once(JOB_MARKER) {
        Some((_, job)) => job.trim().to_string(),
        None => String::new(),
    }
}
