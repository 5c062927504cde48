use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{add_entry, pay, setup_test_data, temp_out, write_blank_data};

#[test]
fn test_export_csv_document_layout() {
    let data = setup_test_data("export_csv_layout");
    let out = temp_out("export_csv_layout", "csv");

    // seed dataset (missing file), scheduleDate 2025-11-11
    pay()
        .args(["--data", &data, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "GMC PAYMENT SCHEDULE");
    assert_eq!(lines[1], "AS AT 11 November 2025");
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "UNPRESENTED CHEQUES");
    assert_eq!(lines[4], "NAME,DETAILS,DATE,AMOUNT");

    assert!(content.contains("OPTIVEN LIMITED,LOAN REPAYMENT,2025-11-01,500000.00"));
    assert!(content.contains("TOTAL UNPRESENTED CHEQUES,,,1297122.00"));
    assert!(content.contains("CHEQUES/PAYMENTS FOR APPROVAL"));
    assert!(content.contains("TOTAL CHEQUES/PAYMENTS FOR APPROVAL,,,414876.00"));
    assert!(content.contains("WEEKLY REQUISITION"));
    assert!(content.contains("TOTAL WEEKLY REQUISITIONS,,,225160.00"));

    assert!(content.contains("SUMMARY"));
    assert!(content.contains("GRAND TOTAL,1937158.00"));
    assert!(content.contains("EQUITY ACCOUNT BALANCE,1495664.00"));
    assert!(content.contains("DEFICIT/SURPLUS,-441494.00"));
    assert!(content.contains("TILL BALANCE,0.00"));
    assert!(content.contains("PESAPAL BALANCE,0.00"));
    assert!(content.contains("TOTAL CLOSING ACCOUNT BALANCES,-441494.00"));
}

#[test]
fn test_export_csv_escapes_fields_with_commas() {
    let data = setup_test_data("export_csv_escaping");
    let out = temp_out("export_csv_escaping", "csv");
    write_blank_data(&data);

    pay()
        .args([
            "--data",
            &data,
            "add",
            "unpresented",
            "WAJI WATER COMPANY",
            "--details",
            "SUPPLY, BOTTLED WATER",
            "--amount",
            "35000",
            "--date",
            "2025-11-05",
        ])
        .assert()
        .success();

    pay()
        .args(["--data", &data, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("WAJI WATER COMPANY,\"SUPPLY, BOTTLED WATER\",2025-11-05,35000.00"));
}

#[test]
fn test_export_csv_honors_requested_sort_order() {
    let data = setup_test_data("export_csv_sorted");
    let out = temp_out("export_csv_sorted", "csv");
    write_blank_data(&data);

    add_entry(&data, "unpresented", "SMALL", "100", "2025-11-01");
    add_entry(&data, "unpresented", "BIG", "900", "2025-11-02");

    pay()
        .args([
            "--data", &data, "export", "--format", "csv", "--file", &out, "--sort", "amount",
            "--desc",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let big = content.find("BIG").expect("BIG exported");
    let small = content.find("SMALL").expect("SMALL exported");
    assert!(big < small);
}

#[test]
fn test_export_json_carries_the_full_report() {
    let data = setup_test_data("export_json_report");
    let out = temp_out("export_json_report", "json");

    pay()
        .args(["--data", &data, "export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"as_at\": \"2025-11-11\""));
    assert!(content.contains("\"grand_total\""));
    assert!(content.contains("\"deficit_or_surplus\""));
    assert!(content.contains("OPTIVEN LIMITED"));
    assert!(content.contains("\"total\""));
}

#[test]
fn test_export_pdf_produces_a_document() {
    let data = setup_test_data("export_pdf_doc");
    let out = temp_out("export_pdf_doc", "pdf");

    pay()
        .args(["--data", &data, "export", "--format", "pdf", "--file", &out])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF-"));

    // content streams are uncompressed, so the section titles are visible
    let haystack = String::from_utf8_lossy(&bytes).to_string();
    assert!(haystack.contains("GMC PAYMENT SCHEDULE"));
    assert!(haystack.contains("UNPRESENTED CHEQUES"));
    assert!(haystack.contains("Helvetica"));
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let data = setup_test_data("export_no_force");
    let out = temp_out("export_no_force", "csv");
    fs::write(&out, "existing").expect("pre-create output file");

    pay()
        .args(["--data", &data, "export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));

    // untouched without confirmation
    assert_eq!(fs::read_to_string(&out).expect("read file"), "existing");

    pay()
        .args([
            "--data", &data, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("GMC PAYMENT SCHEDULE"));
}

#[test]
fn test_export_csv_of_an_empty_schedule() {
    let data = setup_test_data("export_csv_empty");
    let out = temp_out("export_csv_empty", "csv");
    write_blank_data(&data);

    pay()
        .args(["--data", &data, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        // empty sections are not an error
        .stdout(contains("Error").not());

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("TOTAL UNPRESENTED CHEQUES,,,0.00"));
    assert!(content.contains("GRAND TOTAL,0.00"));
    assert!(content.contains("TOTAL CLOSING ACCOUNT BALANCES,0.00"));
}
