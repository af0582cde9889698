use crate::domain::format::format_date;
use crate::domain::{PriceType, Transaction};
use crate::errors::ServerError;
use rust_xlsxwriter::{Format, Workbook};

const HEADERS: [&str; 6] = [
    "Date",
    "Type",
    "Area",
    "Property Type",
    "Size (sqft)",
    "Price",
];

fn xlsx_err(what: &str) -> impl Fn(rust_xlsxwriter::XlsxError) -> ServerError + '_ {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

/// Build the workbook bytes for a set of transaction rows.
pub fn transactions_workbook(rows: &[&Transaction]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(xlsx_err(header))?;
    }

    for (i, t) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        let kind = match t.transaction_type {
            PriceType::Sale => "Sale",
            PriceType::Rent => "Rent",
        };

        worksheet
            .write_string(r, 0, format_date(t.date))
            .map_err(xlsx_err("date"))?;
        worksheet.write_string(r, 1, kind).map_err(xlsx_err("type"))?;
        worksheet.write_string(r, 2, &t.area).map_err(xlsx_err("area"))?;
        worksheet
            .write_string(r, 3, &t.property_type)
            .map_err(xlsx_err("property type"))?;
        worksheet.write_number(r, 4, t.size).map_err(xlsx_err("size"))?;
        worksheet
            .write_number(r, 5, t.price as f64)
            .map_err(xlsx_err("price"))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn workbook_is_a_zip_archive() {
        let cat = Catalog::load().unwrap();
        let rows: Vec<&Transaction> = cat.transactions.iter().collect();
        let bytes = transactions_workbook(&rows).unwrap();
        // xlsx is a zip container
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn empty_export_still_has_headers() {
        let bytes = transactions_workbook(&[]).unwrap();
        assert!(!bytes.is_empty());
    }
}
