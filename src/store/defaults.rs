//! Bundled seed dataset used on first run and as the fail-closed fallback
//! when the persisted blob cannot be trusted.

use crate::core::money::Money;
use crate::models::PaymentEntry;

pub const DEFAULT_SCHEDULE_DATE: &str = "2025-11-11";

fn seed(name: &str, details: &str, cents: i64, date: &str) -> PaymentEntry {
    PaymentEntry::new(
        name.to_string(),
        details.to_string(),
        Money::from_cents(cents),
        date.to_string(),
    )
}

pub fn unpresented() -> Vec<PaymentEntry> {
    vec![
        seed("OPTIVEN LIMITED", "LOAN REPAYMENT", 500_000_00, "2025-11-01"),
        seed("AWINJA", "MARKETING", 250_000_00, "2025-11-02"),
        seed(
            "WAJI WATER COMPANY",
            "SUPPLY OF BOTTLED WATER",
            35_000_00,
            "2025-11-05",
        ),
        seed(
            "AIRDROP WATER COMPANY",
            "SUPPLY OF BOTTLED WATER & ICE CUBES",
            37_300_00,
            "2025-11-06",
        ),
        seed("HORECA HOSPITALITY", "SUPPLY OF HONEY", 20_000_00, "2025-11-08"),
        seed(
            "LIQUID TELECOMMUNICATIONS",
            "INTERNET",
            36_018_00,
            "2025-11-09",
        ),
        seed("THINK PINK HYGIENE", "BIN SERVICE", 26_573_00, "2025-11-10"),
        seed("KPLC", "ELECTRICITY", 392_231_00, "2025-11-11"),
    ]
}

pub fn approval() -> Vec<PaymentEntry> {
    vec![
        seed(
            "EBENEZER MEAT SUPPLY",
            "SUPPLY OF MEAT ITEMS",
            263_900_00,
            "2025-11-04",
        ),
        seed(
            "DAVIES AND SHIRTLIFF",
            "SWIMMING POOL CHEMICALS",
            150_976_00,
            "2025-11-07",
        ),
    ]
}

pub fn weekly_requisition() -> Vec<PaymentEntry> {
    vec![seed(
        "CASUALS (APPROXIMATE)",
        "Weekly casual worker payments",
        225_160_00,
        "2025-11-10",
    )]
}

pub fn equity() -> Money {
    Money::from_cents(1_495_664_00)
}

pub fn till() -> Money {
    Money::ZERO
}

pub fn pesapal() -> Money {
    Money::ZERO
}

pub fn schedule_date() -> String {
    DEFAULT_SCHEDULE_DATE.to_string()
}
