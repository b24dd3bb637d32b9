use rebarc_base::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::csv;

pub const LABEL_DIAMETER: &str = "Bar Diameter (in)";
pub const LABEL_AREA: &str = "Bar Area (in²)";
pub const LABEL_WEIGHT: &str = "Bar Weight (plf)";
pub const LABEL_PERIMETER: &str = "Bar Perimeter (in)";

const HEADER: [&str; 5] = [
    "bar_size",
    "bar_diameter",
    "bar_area",
    "bar_weight",
    "bar_perimeter",
];

// ASTM A615 nominal dimensions: designator, diameter (in), area (in²),
// weight (plf), perimeter (in).
const STANDARD_BARS: [(&str, f64, f64, f64, f64); 11] = [
    ("#3", 0.375, 0.11, 0.376, 1.178),
    ("#4", 0.500, 0.20, 0.668, 1.571),
    ("#5", 0.625, 0.31, 1.043, 1.963),
    ("#6", 0.750, 0.44, 1.502, 2.356),
    ("#7", 0.875, 0.60, 2.044, 2.749),
    ("#8", 1.000, 0.79, 2.670, 3.142),
    ("#9", 1.128, 1.00, 3.400, 3.544),
    ("#10", 1.270, 1.27, 4.303, 3.990),
    ("#11", 1.410, 1.56, 5.313, 4.430),
    ("#14", 1.693, 2.25, 7.650, 5.320),
    ("#18", 2.257, 4.00, 13.600, 7.090),
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarRecord {
    pub size: String,
    pub diameter: f64,
    pub area: f64,
    pub weight: f64,
    pub perimeter: f64,
}

/// Reference table of standard bar designators. Loaded once; lookups
/// resolve to exactly one record or fail.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BarTable {
    rows: BTreeMap<String, BarRecord>,
}

impl BarTable {
    pub fn standard() -> Self {
        let rows = STANDARD_BARS
            .iter()
            .map(|&(size, diameter, area, weight, perimeter)| {
                (
                    size.to_string(),
                    BarRecord {
                        size: size.to_string(),
                        diameter,
                        area,
                        weight,
                        perimeter,
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
            let record = BarRecord {
                size: cells[0].clone(),
                diameter: csv::parse_number(&cells[1], line, "bar_diameter")?,
                area: csv::parse_number(&cells[2], line, "bar_area")?,
                weight: csv::parse_number(&cells[3], line, "bar_weight")?,
                perimeter: csv::parse_number(&cells[4], line, "bar_perimeter")?,
            };
            if rows.insert(record.size.clone(), record).is_some() {
                return Err(Error::DuplicateEntry {
                    kind: "bar size",
                    key: cells[0].clone(),
                });
            }
        }
        Ok(Self { rows })
    }

    pub fn lookup(&self, size: &str) -> Result<&BarRecord> {
        self.rows.get(size).ok_or_else(|| Error::NotFound {
            kind: "bar size",
            key: size.to_string(),
        })
    }

    pub fn sizes(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Immutable snapshot of one bar record's numeric fields.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarProperties {
    diameter: f64,
    area: f64,
    weight: f64,
    perimeter: f64,
}

impl BarProperties {
    pub fn resolve(table: &BarTable, size: &str) -> Result<Self> {
        let record = table.lookup(size)?;
        Ok(Self {
            diameter: record.diameter,
            area: record.area,
            weight: record.weight,
            perimeter: record.perimeter,
        })
    }

    pub fn from_csv(size: &str, path: impl AsRef<Path>) -> Result<Self> {
        let table = BarTable::from_csv_path(path)?;
        Self::resolve(&table, size)
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    /// Display-friendly label to value, for downstream reporting.
    pub fn labeled(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            (LABEL_DIAMETER, self.diameter),
            (LABEL_AREA, self.area),
            (LABEL_WEIGHT, self.weight),
            (LABEL_PERIMETER, self.perimeter),
        ])
    }
}
