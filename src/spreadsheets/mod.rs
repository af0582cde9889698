pub mod export_xlsx;

pub use export_xlsx::transactions_workbook;
