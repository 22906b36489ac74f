//! Mocked service detail table
//!
//! Four well-known services have a detail record; every other name gets the
//! placeholder record.

use crate::core::types::ServiceDetail;

fn detail(description: &str, documents: &[&str], processing_time: &str, fees: &str) -> ServiceDetail {
    ServiceDetail {
        description: description.to_string(),
        documents: documents.iter().map(|d| d.to_string()).collect(),
        processing_time: processing_time.to_string(),
        fees: fees.to_string(),
    }
}

/// Looks up the detail record for a service
///
/// The name must match exactly (titles are copied verbatim from the
/// catalog). Unknown names fall back to [`placeholder_detail`].
pub fn service_detail(service_name: &str) -> ServiceDetail {
    match service_name {
        "Aadhaar Services" => detail(
            "Aadhaar is a 12-digit unique identity number that can be obtained by residents of India, based on their biometric and demographic data.",
            &["Proof of Identity", "Proof of Address", "Proof of Date of Birth"],
            "90 days from enrollment",
            "Free for first time enrollment",
        ),
        "Passport Services" => detail(
            "Indian passport is issued by the Ministry of External Affairs and serves as an official travel document.",
            &["Birth Certificate", "Address Proof", "Identity Proof", "Photographs"],
            "30-45 days for normal processing",
            "₹1,500 for 36 pages, ₹2,000 for 60 pages",
        ),
        "Driving License" => detail(
            "A driving license is an official document permitting a specific individual to operate motorized vehicles.",
            &["Age Proof", "Address Proof", "Medical Certificate", "Photographs"],
            "7-15 days after test",
            "₹200 for Learning License, ₹500 for Permanent License",
        ),
        "Income Tax Services" => detail(
            "Online platform for filing income tax returns and managing tax-related services.",
            &["PAN Card", "Form 16", "Bank Statements", "Investment Proofs"],
            "Immediate for e-filing",
            "Free for income up to ₹5 lakhs",
        ),
        _ => placeholder_detail(),
    }
}

/// Returns the record used for services without details
pub fn placeholder_detail() -> ServiceDetail {
    detail(
        "Service information not available.",
        &["Contact service provider for details"],
        "Varies",
        "Contact service provider",
    )
}

/// Returns true if the service has a real (non-placeholder) record
pub fn has_detail(service_name: &str) -> bool {
    service_detail(service_name) != placeholder_detail()
}
