mod export;
mod parser;

pub use export::{recommendations_to_csv, write_recommendations};

use crate::workflows::progression::MemberProfile;
use serde::Serialize;
use std::fmt;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Input columns, case-sensitive. Any other column is ignored.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "Name",
    "CurrentRole",
    "YearsExperience",
    "TechSkillRating",
    "SoftSkillRating",
    "PerformanceRating",
    "LeadershipInterest",
    "DomainInterest",
    "CareerGoal",
];

/// Columns appended by the export after the input columns.
pub const OUTPUT_COLUMNS: [&str; 4] = [
    "ReadinessScore",
    "SuggestedNextRole",
    "RecommendedActions",
    "Narrative",
];

#[derive(Debug)]
pub enum RosterError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::Io(err) => write!(f, "failed to read roster: {}", err),
            RosterError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::Io(err) => Some(err),
            RosterError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Recoverable input problem. The affected value falls back to 0 or empty text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RosterIssue {
    MissingColumn {
        column: String,
    },
    /// Later copies of a repeated header are ignored.
    DuplicateColumn {
        column: String,
    },
    /// Bytes that are not UTF-8 were replaced with U+FFFD.
    InvalidText {
        line: u64,
        column: String,
    },
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },
}

impl fmt::Display for RosterIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterIssue::MissingColumn { column } => {
                write!(f, "column '{column}' is missing; values default to 0 or empty")
            }
            RosterIssue::DuplicateColumn { column } => {
                write!(f, "column '{column}' appears more than once; using the first")
            }
            RosterIssue::InvalidText { line, column } => write!(
                f,
                "line {line}: column '{column}' is not valid UTF-8; invalid bytes replaced"
            ),
            RosterIssue::InvalidNumber {
                line,
                column,
                value,
            } => write!(
                f,
                "line {line}: '{value}' in column '{column}' is not a number; using 0"
            ),
        }
    }
}

/// Parsed roster rows in file order, plus anything that had to be defaulted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterImport {
    pub profiles: Vec<MemberProfile>,
    pub issues: Vec<RosterIssue>,
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<RosterImport, RosterError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<RosterImport, RosterError> {
        let parsed = parser::parse_roster(reader)?;

        for issue in &parsed.issues {
            warn!(%issue, "roster input defaulted");
        }
        info!(
            members = parsed.profiles.len(),
            issues = parsed.issues.len(),
            "roster imported"
        );

        Ok(RosterImport {
            profiles: parsed.profiles,
            issues: parsed.issues,
        })
    }
}
