pub mod sheet;
pub use sheet::write_rgba_sheet;
