//! Identifier generation for documents saved without an id.

use uuid::Uuid;

/// Produces identifiers for newly stored documents.
///
/// Implementations must return non-empty strings that are unique for the lifetime
/// of the store they are attached to.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Default generator producing random (v4) UUID strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn generate(&self) -> String {
        self()
    }
}
