//! Stable type token for signal types.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Signal, SignalCategory};

/// Identifier for a signal type: the key into the bus's dispatch table.
///
/// Equality and hashing are identity-based (the underlying [`TypeId`] only);
/// the name and category ride along as metadata for logs and validation
/// collaborators.
#[derive(Clone, Copy)]
pub struct SignalId {
    type_id: TypeId,
    name: &'static str,
    category: SignalCategory,
}

impl SignalId {
    /// Returns the token for signal type `S`.
    pub fn of<S: Signal>() -> Self {
        Self {
            type_id: TypeId::of::<S>(),
            name: std::any::type_name::<S>(),
            category: S::CATEGORY,
        }
    }

    pub(crate) fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Full type name, including the module path.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name with the module path stripped.
    ///
    /// Best-effort for display purposes; generic signal types keep their
    /// full argument paths.
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }

    /// Declared intent of the signal type.
    pub fn category(&self) -> SignalCategory {
        self.category
    }
}

impl PartialEq for SignalId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for SignalId {}

impl Hash for SignalId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for SignalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalId")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish()
    }
}
