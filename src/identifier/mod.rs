//! Checksums and format checks for Iranian identifiers: national ID, legal-entity ID and postal code.

mod issuance_place;
mod legal_entity_id;
mod national_id;
mod postal_code;

pub use issuance_place::get_issuance_place;
pub use legal_entity_id::{is_legal_entity_id_valid, LegalEntityIdChecksum};
pub use national_id::{
    generate_random_national_id, generate_random_national_id_with, is_national_id_valid,
    NationalIdChecksum,
};
pub use postal_code::{is_postal_code_valid, PostalCodeChecker};
