use anyhow::Result;
use rebarc_props::{BarProperties, BarTable, GradeTable};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(file_name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let stamp = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(duration) => duration.as_millis(),
        Err(_) => 0,
    };
    path.push(format!("rebarc_{stamp}_{file_name}"));
    path
}

const PROPS_CSV: &str = "\
bar_size,bar_diameter,bar_area,bar_weight,bar_perimeter
#4,0.500,0.20,0.668,1.571
#5,0.625,0.31,1.043,1.963
";

#[test]
fn loads_bar_table_from_csv_path() -> Result<()> {
    let path = temp_path("props.csv");
    fs::write(&path, PROPS_CSV)?;

    let props = BarProperties::from_csv("#4", &path)?;
    assert_eq!(props.diameter(), 0.500);
    assert_eq!(props.area(), 0.20);
    assert_eq!(props.weight(), 0.668);
    assert_eq!(props.perimeter(), 1.571);

    let _ = fs::remove_file(&path);
    Ok(())
}

#[test]
fn missing_designator_in_csv_is_not_found() -> Result<()> {
    let path = temp_path("props_missing.csv");
    fs::write(&path, PROPS_CSV)?;

    let err = BarProperties::from_csv("#9", &path).unwrap_err();
    assert!(err.to_string().contains("#9"));

    let _ = fs::remove_file(&path);
    Ok(())
}

#[test]
fn duplicate_designator_is_rejected() {
    let text = "\
bar_size,bar_diameter,bar_area,bar_weight,bar_perimeter
#4,0.500,0.20,0.668,1.571
#4,0.500,0.20,0.668,1.571
";
    let err = BarTable::from_csv_str(text).unwrap_err();
    assert!(err.to_string().contains("duplicate"));
    assert!(err.to_string().contains("#4"));
}

#[test]
fn wrong_header_is_a_parse_error() {
    let text = "size,diameter,area,weight,perimeter\n#4,0.500,0.20,0.668,1.571\n";
    let err = BarTable::from_csv_str(text).unwrap_err();
    assert!(err.to_string().contains("line 1"));
}

#[test]
fn non_numeric_cell_names_line_and_column() {
    let text = "\
bar_size,bar_diameter,bar_area,bar_weight,bar_perimeter
#4,half an inch,0.20,0.668,1.571
";
    let err = BarTable::from_csv_str(text).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("line 2"));
    assert!(message.contains("bar_diameter"));
}

#[test]
fn grade_table_round_trips_through_csv() -> Result<()> {
    let text = "grade,yield,gamma_3\n60,60.0,0.67\n75,75.0,0.75\n";
    let table = GradeTable::from_csv_str(text)?;
    assert_eq!(table.lookup("75")?.yield_strength, 75.0);
    Ok(())
}
