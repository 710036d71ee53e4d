use crate::domain::Record;
use crate::errors::ServerError;
use crate::responses::{attachment_response, ResultResp, XLSX};
use rust_xlsxwriter::{Workbook, Worksheet};

const HEADERS: [&str; 13] = [
    "District",
    "Location",
    "Title",
    "Price (S/)",
    "Area (m²)",
    "Bedrooms",
    "Bathrooms",
    "Final score",
    "Cost score",
    "Safety score",
    "Services score",
    "Published",
    "URL",
];

pub fn export_properties_xlsx(records: &[&Record]) -> ResultResp {
    let buffer = properties_workbook(records)?;
    attachment_response(buffer, XLSX, "lima_properties.xlsx")
}

/// One row per record, in the given order. Absent numbers are left blank.
pub fn properties_workbook(records: &[&Record]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Headers
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).map_err(|e| {
            ServerError::XlsxError(format!("Failed to write header '{header}': {e}"))
        })?;
    }

    // Rows
    for (i, record) in records.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet.write_string(r, 0, &record.district)?;
        worksheet.write_string(r, 1, &record.location)?;
        worksheet.write_string(r, 2, &record.title)?;

        let numbers = [
            record.price_clean,
            record.area_clean,
            record.bedroom_clean,
            record.bathroom_clean,
            record.final_score,
            record.cost_score,
            record.safety_score,
            record.services_score,
        ];
        for (offset, value) in numbers.into_iter().enumerate() {
            write_optional(worksheet, r, 3 + offset as u16, value)?;
        }

        worksheet.write_string(r, 11, &record.date_published)?;
        worksheet.write_string(r, 12, &record.url)?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

fn write_optional(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<f64>,
) -> Result<(), ServerError> {
    if let Some(value) = value {
        worksheet.write_number(row, col, value)?;
    }
    Ok(())
}
