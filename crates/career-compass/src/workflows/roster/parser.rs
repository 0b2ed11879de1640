use super::{RosterIssue, REQUIRED_COLUMNS};
use crate::workflows::progression::MemberProfile;
use csv::{ByteRecord, StringRecord};
use std::io::Read;

const NAME: usize = 0;
const CURRENT_ROLE: usize = 1;
const YEARS_EXPERIENCE: usize = 2;
const TECH_SKILL_RATING: usize = 3;
const SOFT_SKILL_RATING: usize = 4;
const PERFORMANCE_RATING: usize = 5;
const LEADERSHIP_INTEREST: usize = 6;
const DOMAIN_INTEREST: usize = 7;
const CAREER_GOAL: usize = 8;

pub(crate) struct ParsedRoster {
    pub(crate) profiles: Vec<MemberProfile>,
    pub(crate) issues: Vec<RosterIssue>,
}

/// Only header and I/O failures are fatal; every data row yields a profile.
pub(crate) fn parse_roster<R: Read>(reader: R) -> Result<ParsedRoster, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut issues = Vec::new();
    let layout = ColumnLayout::from_headers(&headers, &mut issues);

    let mut profiles = Vec::new();
    for record in csv_reader.byte_records() {
        let record = record?;
        let line = record.position().map(|position| position.line()).unwrap_or(0);
        let row = RosterRow {
            record: &record,
            layout: &layout,
            line,
        };
        profiles.push(row.into_profile(&mut issues));
    }

    Ok(ParsedRoster { profiles, issues })
}

/// Field index of each required column, first occurrence wins.
struct ColumnLayout {
    positions: [Option<usize>; REQUIRED_COLUMNS.len()],
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord, issues: &mut Vec<RosterIssue>) -> Self {
        let mut positions = [None; REQUIRED_COLUMNS.len()];
        for (slot, column) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
            let mut matches = headers
                .iter()
                .enumerate()
                .filter(|(_, header)| *header == column)
                .map(|(index, _)| index);

            *slot = matches.next();
            match slot {
                None => issues.push(RosterIssue::MissingColumn {
                    column: column.to_string(),
                }),
                Some(_) if matches.next().is_some() => {
                    issues.push(RosterIssue::DuplicateColumn {
                        column: column.to_string(),
                    })
                }
                Some(_) => {}
            }
        }
        Self { positions }
    }
}

struct RosterRow<'a> {
    record: &'a ByteRecord,
    layout: &'a ColumnLayout,
    line: u64,
}

impl RosterRow<'_> {
    /// Trimmed text of a column; blank, absent, or short-row values are `None`.
    fn text(&self, column: usize, issues: &mut Vec<RosterIssue>) -> Option<String> {
        let raw = self.layout.positions[column].and_then(|index| self.record.get(index))?;
        let value = match std::str::from_utf8(raw) {
            Ok(value) => value.to_string(),
            Err(_) => {
                issues.push(RosterIssue::InvalidText {
                    line: self.line,
                    column: REQUIRED_COLUMNS[column].to_string(),
                });
                String::from_utf8_lossy(raw).into_owned()
            }
        };
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    fn number(&self, column: usize, issues: &mut Vec<RosterIssue>) -> f64 {
        match self.text(column, issues) {
            None => 0.0,
            Some(value) => parse_number(&value).unwrap_or_else(|| {
                issues.push(RosterIssue::InvalidNumber {
                    line: self.line,
                    column: REQUIRED_COLUMNS[column].to_string(),
                    value,
                });
                0.0
            }),
        }
    }

    fn into_profile(self, issues: &mut Vec<RosterIssue>) -> MemberProfile {
        MemberProfile {
            name: self.text(NAME, issues).unwrap_or_default(),
            current_role: self.text(CURRENT_ROLE, issues),
            years_experience: self.number(YEARS_EXPERIENCE, issues),
            tech_skill_rating: self.number(TECH_SKILL_RATING, issues),
            soft_skill_rating: self.number(SOFT_SKILL_RATING, issues),
            performance_rating: self.number(PERFORMANCE_RATING, issues),
            leadership_interest: self.text(LEADERSHIP_INTEREST, issues).unwrap_or_default(),
            domain_interest: self.text(DOMAIN_INTEREST, issues).unwrap_or_default(),
            career_goal: self.text(CAREER_GOAL, issues).unwrap_or_default(),
        }
    }
}

fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

#[cfg(test)]
pub(crate) fn parse_number_for_tests(value: &str) -> Option<f64> {
    parse_number(value)
}
