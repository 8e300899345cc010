//! Reference code sets
//!
//! Static lookup tables consumed by identifier elements. Currency codes
//! fold case on decode; every other set matches the wire token exactly.

use x12_schema::CodeSet;

/// ISO 4217 currency codes (working subset).
pub const CURRENCY: CodeSet = CodeSet::case_folding(
    "currency",
    &[
        "AUD", "BRL", "CAD", "CHF", "CNY", "CZK", "DKK", "EUR", "GBP", "HKD", "HUF", "INR", "JPY",
        "KRW", "MXN", "NOK", "NZD", "PLN", "SEK", "SGD", "THB", "TRY", "USD", "ZAR",
    ],
);

/// Transaction Set Identifier Codes (ST01).
pub const TRANSACTION_SET_ID: CodeSet = CodeSet::new(
    "transaction set identifier",
    &[
        "104", "110", "204", "210", "211", "214", "810", "820", "824", "830", "850", "855", "856",
        "940", "945", "990", "997",
    ],
);

/// Transaction Set Purpose Codes (B2A01).
pub const TRANSACTION_PURPOSE: CodeSet =
    CodeSet::new("transaction set purpose", &["00", "01", "04", "05", "49"]);

/// Application Type (B2A02).
pub const APPLICATION_TYPE: CodeSet =
    CodeSet::new("application type", &["ED", "LT", "RB", "RN"]);

/// Shipment Method of Payment (B206, B304).
pub const PAYMENT_METHOD: CodeSet = CodeSet::new(
    "shipment method of payment",
    &["CC", "CD", "DE", "HP", "NC", "NR", "PB", "PO", "PP", "PS", "TP", "WC"],
);

/// Reference Identification Qualifier (L1102).
pub const REFERENCE_QUALIFIER: CodeSet = CodeSet::new(
    "reference identification qualifier",
    &["BM", "CN", "CR", "OW", "PO", "SI"],
);

/// Date Qualifier (G6201).
pub const DATE_QUALIFIER: CodeSet = CodeSet::new(
    "date qualifier",
    &["02", "04", "10", "12", "17", "64", "68", "69", "70"],
);

/// Time Qualifier (G6203).
pub const TIME_QUALIFIER: CodeSet = CodeSet::new(
    "time qualifier",
    &["1", "2", "5", "G", "I", "K", "L", "W", "X", "Y", "Z"],
);

/// Routing Sequence Code (MS302).
pub const ROUTING_SEQUENCE: CodeSet = CodeSet::new(
    "routing sequence",
    &["1", "2", "3", "4", "A", "B", "O", "S"],
);

/// Transportation Method/Type Code (MS304).
pub const TRANSPORT_METHOD: CodeSet = CodeSet::new(
    "transportation method",
    &["A", "E", "M", "R", "S", "T", "U", "X"],
);

/// Entity Identifier Code (N101).
pub const ENTITY_ID: CodeSet =
    CodeSet::new("entity identifier", &["BT", "CA", "CN", "SF", "SH", "ST"]);

/// Identification Code Qualifier (N103).
pub const ID_CODE_QUALIFIER: CodeSet = CodeSet::new(
    "identification code qualifier",
    &["1", "2", "9", "25", "93", "94"],
);

/// Stop Reason Code (S502).
pub const STOP_REASON: CodeSet = CodeSet::new(
    "stop reason",
    &["AL", "CL", "CN", "CU", "DT", "LD", "PL", "UL"],
);

/// Weight Unit Code (S504, B305).
pub const WEIGHT_UNIT: CodeSet = CodeSet::new("weight unit", &["E", "G", "K", "L", "M"]);

/// Weight Qualifier (L302).
pub const WEIGHT_QUALIFIER: CodeSet = CodeSet::new("weight qualifier", &["G", "N"]);
