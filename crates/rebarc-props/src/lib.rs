pub mod bar;
pub mod grade;
mod csv;

pub use bar::{
    BarProperties, BarRecord, BarTable, LABEL_AREA, LABEL_DIAMETER, LABEL_PERIMETER, LABEL_WEIGHT,
};
pub use grade::{GradeProperties, GradeRecord, GradeTable};
