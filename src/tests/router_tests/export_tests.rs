use crate::router::handle;
use crate::spreadsheets::export_xlsx::properties_workbook;
use crate::tests::utils::{body_bytes, get, test_state, two_district_records};

#[test]
fn export_downloads_filtered_view_as_xlsx() {
    let state = test_state(two_district_records());

    let resp = handle(get("/export?district=A"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("lima_properties.xlsx"));

    // xlsx files are zip archives
    let bytes = body_bytes(resp);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn workbook_accepts_records_with_missing_numbers() {
    let mut records = two_district_records();
    records[0].price_clean = None;
    records[1].area_clean = None;
    let refs: Vec<_> = records.iter().collect();

    let buffer = properties_workbook(&refs).unwrap();

    assert!(!buffer.is_empty());
}
