//! Transaction-set declarations
//!
//! Full document shapes for the supported sets: ordered members with
//! loop nesting, requiredness, and availability windows. `install`
//! registers every (set, version) pairing this catalog ships.

use crate::segments;
use x12_ir::{EdiFormat, Version};
use x12_schema::{
    DescriptorRegistry, LoopDescriptor, MemberDescriptor, Result, TransactionSetDescriptor,
};

/// 204 Motor Carrier Load Tender.
pub fn load_tender(version: Version) -> TransactionSetDescriptor {
    let party_loop = LoopDescriptor::new(
        "0100",
        Some(5),
        vec![
            MemberDescriptor::mandatory_segment(10, segments::n1()),
            MemberDescriptor::optional_segment(20, segments::n3()),
            MemberDescriptor::optional_segment(30, segments::n4()),
        ],
    );
    let stop_party_loop = LoopDescriptor::new(
        "0310",
        Some(2),
        vec![
            MemberDescriptor::mandatory_segment(10, segments::n1()),
            MemberDescriptor::optional_segment(20, segments::n4()),
        ],
    );
    let stop_loop = LoopDescriptor::new(
        "0300",
        Some(999),
        vec![
            MemberDescriptor::mandatory_segment(10, segments::s5()),
            MemberDescriptor::optional_segment(20, segments::g62()),
            MemberDescriptor::optional_segment(30, segments::at5()),
            MemberDescriptor::optional_loop(40, stop_party_loop),
        ],
    );

    TransactionSetDescriptor::new(
        EdiFormat::X12,
        version,
        "204",
        "Motor Carrier Load Tender",
        vec![
            MemberDescriptor::mandatory_segment(100, segments::st()),
            MemberDescriptor::mandatory_segment(200, segments::b2()),
            MemberDescriptor::mandatory_segment(300, segments::b2a()),
            MemberDescriptor::optional_segment(400, segments::c3()),
            MemberDescriptor::optional_segment(800, segments::l11()),
            MemberDescriptor::optional_segment(900, segments::g62()),
            MemberDescriptor::optional_segment(1000, segments::ms3()).since(Version::V4010),
            MemberDescriptor::optional_loop(1100, party_loop),
            MemberDescriptor::mandatory_loop(1200, stop_loop),
            MemberDescriptor::mandatory_segment(9000, segments::se()),
        ],
    )
}

/// 210 Motor Carrier Freight Details and Invoice.
pub fn freight_invoice(version: Version) -> TransactionSetDescriptor {
    let party_loop = LoopDescriptor::new(
        "0100",
        Some(10),
        vec![
            MemberDescriptor::mandatory_segment(10, segments::n1()),
            MemberDescriptor::optional_segment(20, segments::n3()),
            MemberDescriptor::optional_segment(30, segments::n4()),
        ],
    );
    let detail_loop = LoopDescriptor::new(
        "0400",
        Some(999),
        vec![
            MemberDescriptor::mandatory_segment(10, segments::lx()),
            MemberDescriptor::optional_segment(20, segments::l11()),
        ],
    );

    TransactionSetDescriptor::new(
        EdiFormat::X12,
        version,
        "210",
        "Motor Carrier Freight Details and Invoice",
        vec![
            MemberDescriptor::mandatory_segment(100, segments::st()),
            MemberDescriptor::mandatory_segment(200, segments::b3()),
            MemberDescriptor::optional_segment(300, segments::c3()),
            MemberDescriptor::optional_loop(600, party_loop),
            MemberDescriptor::optional_loop(700, detail_loop),
            MemberDescriptor::optional_segment(800, segments::l3()),
            MemberDescriptor::mandatory_segment(9000, segments::se()),
        ],
    )
}

/// Register every declared (set, version) pairing.
pub fn install(registry: &DescriptorRegistry) -> Result<()> {
    for version in [Version::V3010, Version::V4010, Version::V8010] {
        registry.register(load_tender(version))?;
    }
    for version in [Version::V4010, Version::V8010] {
        registry.register(freight_invoice(version))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use x12_ir::DocumentKey;

    #[test]
    fn test_declared_sets_validate() {
        for version in [Version::V3010, Version::V4010, Version::V8010] {
            load_tender(version).validate().unwrap();
            freight_invoice(version).validate().unwrap();
        }
    }

    #[test]
    fn test_install_registers_all_pairings() {
        let registry = DescriptorRegistry::new();
        install(&registry).unwrap();
        assert_eq!(registry.len(), 5);
        assert!(registry.contains(&DocumentKey::x12(Version::V3010, "204")));
        assert!(registry.contains(&DocumentKey::x12(Version::V8010, "210")));
        assert!(!registry.contains(&DocumentKey::x12(Version::V3010, "210")));
    }

    #[test]
    fn test_stop_loop_is_mandatory() {
        let ts = load_tender(Version::V4010);
        let stop = ts
            .members
            .iter()
            .find(|m| m.position == 1200)
            .expect("stop loop declared");
        assert_eq!(stop.requirement, x12_schema::Requirement::Mandatory);
    }
}
