pub mod interactions;
pub mod picker;
pub mod rendering;
pub mod styling;

pub use picker::MonthRangePicker;
