//! Segment declarations
//!
//! Each function builds the descriptor for one segment type. Positions
//! follow the published element layout; undeclared positions are gaps the
//! codec refuses to populate.

use crate::codes;
use x12_ir::Version;
use x12_schema::{ElementDescriptor, ElementKind, SegmentDescriptor};

/// ST - Transaction Set Header.
pub fn st() -> SegmentDescriptor {
    SegmentDescriptor::new(
        "ST",
        "Transaction Set Header",
        vec![
            ElementDescriptor::mandatory(
                1,
                "Transaction Set Identifier Code",
                ElementKind::Identifier(codes::TRANSACTION_SET_ID),
                3,
                3,
            ),
            ElementDescriptor::mandatory(
                2,
                "Transaction Set Control Number",
                ElementKind::Alphanumeric,
                4,
                9,
            ),
            ElementDescriptor::optional(
                3,
                "Implementation Convention Reference",
                ElementKind::Alphanumeric,
                1,
                35,
            )
            .since(Version::V4010),
        ],
    )
}

/// SE - Transaction Set Trailer.
pub fn se() -> SegmentDescriptor {
    SegmentDescriptor::new(
        "SE",
        "Transaction Set Trailer",
        vec![
            ElementDescriptor::mandatory(
                1,
                "Number of Included Segments",
                ElementKind::Numeric { decimals: 0 },
                1,
                10,
            ),
            ElementDescriptor::mandatory(
                2,
                "Transaction Set Control Number",
                ElementKind::Alphanumeric,
                4,
                9,
            ),
        ],
    )
}

/// B2 - Beginning Segment for Shipment Information Transaction.
pub fn b2() -> SegmentDescriptor {
    SegmentDescriptor::new(
        "B2",
        "Beginning Segment for Shipment Information Transaction",
        vec![
            ElementDescriptor::optional(
                2,
                "Standard Carrier Alpha Code",
                ElementKind::Alphanumeric,
                2,
                4,
            ),
            ElementDescriptor::optional(
                4,
                "Shipment Identification Number",
                ElementKind::Alphanumeric,
                1,
                30,
            ),
            ElementDescriptor::mandatory(
                6,
                "Shipment Method of Payment",
                ElementKind::Identifier(codes::PAYMENT_METHOD),
                2,
                2,
            ),
        ],
    )
}

/// B2A - Set Purpose.
pub fn b2a() -> SegmentDescriptor {
    SegmentDescriptor::new(
        "B2A",
        "Set Purpose",
        vec![
            ElementDescriptor::mandatory(
                1,
                "Transaction Set Purpose Code",
                ElementKind::Identifier(codes::TRANSACTION_PURPOSE),
                2,
                2,
            ),
            ElementDescriptor::optional(
                2,
                "Application Type",
                ElementKind::Identifier(codes::APPLICATION_TYPE),
                2,
                2,
            )
            .since(Version::V4010),
        ],
    )
}

/// C3 - Currency Identifier.
pub fn c3() -> SegmentDescriptor {
    SegmentDescriptor::new(
        "C3",
        "Currency Identifier",
        vec![
            ElementDescriptor::mandatory(
                1,
                "Billing Currency",
                ElementKind::Identifier(codes::CURRENCY),
                3,
                3,
            ),
            ElementDescriptor::optional(2, "Exchange Rate", ElementKind::Decimal, 4, 10),
            ElementDescriptor::optional(
                3,
                "Payment Currency",
                ElementKind::Identifier(codes::CURRENCY),
                3,
                3,
            ),
            ElementDescriptor::optional(
                4,
                "Rated Currency",
                ElementKind::Identifier(codes::CURRENCY),
                3,
                3,
            ),
        ],
    )
}

/// L11 - Business Instructions and Reference Number.
pub fn l11() -> SegmentDescriptor {
    SegmentDescriptor::new(
        "L11",
        "Business Instructions and Reference Number",
        vec![
            ElementDescriptor::optional(
                1,
                "Reference Identification",
                ElementKind::Alphanumeric,
                1,
                30,
            ),
            ElementDescriptor::optional(
                2,
                "Reference Identification Qualifier",
                ElementKind::Identifier(codes::REFERENCE_QUALIFIER),
                2,
                3,
            ),
            ElementDescriptor::optional(3, "Description", ElementKind::Alphanumeric, 1, 80),
        ],
    )
}

/// G62 - Date/Time.
pub fn g62() -> SegmentDescriptor {
    SegmentDescriptor::new(
        "G62",
        "Date/Time",
        vec![
            ElementDescriptor::optional(
                1,
                "Date Qualifier",
                ElementKind::Identifier(codes::DATE_QUALIFIER),
                2,
                2,
            ),
            ElementDescriptor::optional(2, "Date", ElementKind::Date, 8, 8),
            ElementDescriptor::optional(
                3,
                "Time Qualifier",
                ElementKind::Identifier(codes::TIME_QUALIFIER),
                1,
                2,
            ),
            ElementDescriptor::optional(4, "Time", ElementKind::Time, 4, 4),
        ],
    )
}

/// MS3 - Interline Information.
pub fn ms3() -> SegmentDescriptor {
    SegmentDescriptor::new(
        "MS3",
        "Interline Information",
        vec![
            ElementDescriptor::mandatory(
                1,
                "Standard Carrier Alpha Code",
                ElementKind::Alphanumeric,
                2,
                4,
            ),
            ElementDescriptor::mandatory(
                2,
                "Routing Sequence Code",
                ElementKind::Identifier(codes::ROUTING_SEQUENCE),
                1,
                2,
            ),
            ElementDescriptor::optional(3, "City Name", ElementKind::Alphanumeric, 2, 30),
            ElementDescriptor::optional(
                4,
                "Transportation Method/Type Code",
                ElementKind::Identifier(codes::TRANSPORT_METHOD),
                1,
                2,
            ),
        ],
    )
}

/// N1 - Party Identification.
pub fn n1() -> SegmentDescriptor {
    SegmentDescriptor::new(
        "N1",
        "Party Identification",
        vec![
            ElementDescriptor::mandatory(
                1,
                "Entity Identifier Code",
                ElementKind::Identifier(codes::ENTITY_ID),
                2,
                3,
            ),
            ElementDescriptor::optional(2, "Name", ElementKind::Alphanumeric, 1, 60),
            ElementDescriptor::optional(
                3,
                "Identification Code Qualifier",
                ElementKind::Identifier(codes::ID_CODE_QUALIFIER),
                1,
                2,
            ),
            ElementDescriptor::optional(4, "Identification Code", ElementKind::Alphanumeric, 2, 80),
        ],
    )
}

/// N3 - Party Location (street address).
pub fn n3() -> SegmentDescriptor {
    SegmentDescriptor::new(
        "N3",
        "Party Location",
        vec![
            ElementDescriptor::mandatory(1, "Address Information", ElementKind::Alphanumeric, 1, 55),
            ElementDescriptor::optional(2, "Address Information", ElementKind::Alphanumeric, 1, 55),
        ],
    )
}

/// N4 - Geographic Location.
pub fn n4() -> SegmentDescriptor {
    SegmentDescriptor::new(
        "N4",
        "Geographic Location",
        vec![
            ElementDescriptor::optional(1, "City Name", ElementKind::Alphanumeric, 2, 30),
            ElementDescriptor::optional(
                2,
                "State or Province Code",
                ElementKind::Alphanumeric,
                2,
                2,
            ),
            ElementDescriptor::optional(3, "Postal Code", ElementKind::Alphanumeric, 3, 15),
            ElementDescriptor::optional(4, "Country Code", ElementKind::Alphanumeric, 2, 3),
        ],
    )
}

/// S5 - Stop-off Details.
pub fn s5() -> SegmentDescriptor {
    SegmentDescriptor::new(
        "S5",
        "Stop-off Details",
        vec![
            ElementDescriptor::mandatory(
                1,
                "Stop Sequence Number",
                ElementKind::Numeric { decimals: 0 },
                1,
                3,
            ),
            ElementDescriptor::mandatory(
                2,
                "Stop Reason Code",
                ElementKind::Identifier(codes::STOP_REASON),
                2,
                2,
            ),
            ElementDescriptor::optional(3, "Weight", ElementKind::Numeric { decimals: 0 }, 1, 10),
            ElementDescriptor::optional(
                4,
                "Weight Unit Code",
                ElementKind::Identifier(codes::WEIGHT_UNIT),
                1,
                1,
            ),
        ],
    )
}

/// AT5 - Bill of Lading Handling Requirements.
pub fn at5() -> SegmentDescriptor {
    SegmentDescriptor::new(
        "AT5",
        "Bill of Lading Handling Requirements",
        vec![
            ElementDescriptor::optional(
                1,
                "Special Handling Code",
                ElementKind::Alphanumeric,
                2,
                3,
            ),
            // Position 2 (Special Services Code) is intentionally not
            // declared in this subset; the codec treats it as a gap.
            ElementDescriptor::optional(
                3,
                "Special Handling Description",
                ElementKind::Alphanumeric,
                2,
                60,
            ),
        ],
    )
}

/// B3 - Beginning Segment for Carrier's Invoice.
pub fn b3() -> SegmentDescriptor {
    SegmentDescriptor::new(
        "B3",
        "Beginning Segment for Carrier's Invoice",
        vec![
            ElementDescriptor::optional(1, "Shipment Qualifier", ElementKind::Alphanumeric, 1, 1),
            ElementDescriptor::mandatory(2, "Invoice Number", ElementKind::Alphanumeric, 1, 22),
            ElementDescriptor::optional(
                3,
                "Shipment Identification Number",
                ElementKind::Alphanumeric,
                1,
                30,
            ),
            ElementDescriptor::mandatory(
                4,
                "Shipment Method of Payment",
                ElementKind::Identifier(codes::PAYMENT_METHOD),
                2,
                2,
            ),
            ElementDescriptor::mandatory(6, "Invoice Date", ElementKind::Date, 8, 8),
            ElementDescriptor::mandatory(
                7,
                "Net Amount Due",
                ElementKind::Numeric { decimals: 2 },
                1,
                12,
            ),
        ],
    )
}

/// LX - Transaction Set Line Number.
pub fn lx() -> SegmentDescriptor {
    SegmentDescriptor::new(
        "LX",
        "Transaction Set Line Number",
        vec![ElementDescriptor::mandatory(
            1,
            "Assigned Number",
            ElementKind::Numeric { decimals: 0 },
            1,
            6,
        )],
    )
}

/// L3 - Total Weight and Charges.
pub fn l3() -> SegmentDescriptor {
    SegmentDescriptor::new(
        "L3",
        "Total Weight and Charges",
        vec![
            ElementDescriptor::optional(1, "Weight", ElementKind::Numeric { decimals: 0 }, 1, 10),
            ElementDescriptor::optional(
                2,
                "Weight Qualifier",
                ElementKind::Identifier(codes::WEIGHT_QUALIFIER),
                1,
                2,
            ),
            ElementDescriptor::optional(5, "Charge", ElementKind::Numeric { decimals: 2 }, 1, 12),
        ],
    )
}
