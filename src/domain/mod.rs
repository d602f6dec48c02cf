use uuid::Uuid;

pub mod brand;
pub mod image;
pub mod product;
pub mod user;

/// Generates a fresh opaque identifier for records and images.
///
/// Identifiers are unique within the process and carry no ordering
/// semantics; callers must treat them as opaque strings.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}
