use rebarc_base::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::csv;

const HEADER: [&str; 3] = ["grade", "yield", "gamma_3"];

// ASTM A615 grades: designator, yield strength (ksi), AASHTO gamma_3.
const STANDARD_GRADES: [(&str, f64, f64); 4] = [
    ("40", 40.0, 0.67),
    ("60", 60.0, 0.67),
    ("75", 75.0, 0.75),
    ("80", 80.0, 0.75),
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    pub grade: String,
    pub yield_strength: f64,
    pub gamma_3: f64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GradeTable {
    rows: BTreeMap<String, GradeRecord>,
}

impl GradeTable {
    pub fn standard() -> Self {
        let rows = STANDARD_GRADES
            .iter()
            .map(|&(grade, yield_strength, gamma_3)| {
                (
                    grade.to_string(),
                    GradeRecord {
                        grade: grade.to_string(),
                        yield_strength,
                        gamma_3,
                    },
                )
            })
            .collect();
        Self { rows }
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_csv_str(&text)
    }

    pub fn from_csv_str(text: &str) -> Result<Self> {
        let mut rows = BTreeMap::new();
        for (line, cells) in csv::parse_table(text, &HEADER)? {
            let record = GradeRecord {
                grade: cells[0].clone(),
                yield_strength: csv::parse_number(&cells[1], line, "yield")?,
                gamma_3: csv::parse_number(&cells[2], line, "gamma_3")?,
            };
            if rows.insert(record.grade.clone(), record).is_some() {
                return Err(Error::DuplicateEntry {
                    kind: "grade",
                    key: cells[0].clone(),
                });
            }
        }
        Ok(Self { rows })
    }

    pub fn lookup(&self, grade: &str) -> Result<&GradeRecord> {
        self.rows.get(grade).ok_or_else(|| Error::NotFound {
            kind: "grade",
            key: grade.to_string(),
        })
    }

    pub fn grades(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Immutable snapshot of one grade record's numeric fields.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradeProperties {
    yield_strength: f64,
    gamma_3: f64,
}

impl GradeProperties {
    pub fn resolve(table: &GradeTable, grade: &str) -> Result<Self> {
        let record = table.lookup(grade)?;
        Ok(Self {
            yield_strength: record.yield_strength,
            gamma_3: record.gamma_3,
        })
    }

    pub fn from_csv(grade: &str, path: impl AsRef<Path>) -> Result<Self> {
        let table = GradeTable::from_csv_path(path)?;
        Self::resolve(&table, grade)
    }

    pub fn yield_strength(&self) -> f64 {
        self.yield_strength
    }

    pub fn gamma_3(&self) -> f64 {
        self.gamma_3
    }
}
