use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::KeyError;

// -----------------------------------------------------------------------------
// KeyId

/// The last path element's identifier.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum KeyId {
    /// Not yet allocated.
    #[default]
    Incomplete,
    Id(i64),
    Name(String),
}

// -----------------------------------------------------------------------------
// Key

/// A reference to a record: a kind and id, under an optional parent.
///
/// # Examples
///
/// ```
/// use vc_record::{Key, KeyId};
///
/// let parent = Key::new("Shop", KeyId::Name("north".into()));
/// let key = Key::new("Order", KeyId::Id(7)).with_parent(parent);
///
/// assert_eq!(key.to_string(), "/Shop,\"north\"/Order,7");
/// assert!(key.validate().is_ok());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    kind: String,
    id: KeyId,
    parent: Option<Box<Key>>,
    project: String,
    namespace: String,
}

impl Key {
    pub fn new(kind: impl Into<String>, id: KeyId) -> Self {
        Self {
            kind: kind.into(),
            id,
            ..Self::default()
        }
    }

    /// Sets the parent, and adopts its project and namespace.
    pub fn with_parent(mut self, parent: Key) -> Self {
        self.project.clone_from(&parent.project);
        self.namespace.clone_from(&parent.namespace);
        self.parent = Some(Box::new(parent));
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[inline]
    pub fn id(&self) -> &KeyId {
        &self.id
    }

    #[inline]
    pub fn parent(&self) -> Option<&Key> {
        self.parent.as_deref()
    }

    #[inline]
    pub fn project(&self) -> &str {
        &self.project
    }

    #[inline]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[inline]
    pub fn is_incomplete(&self) -> bool {
        self.id == KeyId::Incomplete
    }

    /// Iterates from this key up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = &Key> {
        core::iter::successors(Some(self), |key| key.parent())
    }

    /// Checks that every kind is set and only this key may be incomplete.
    pub fn validate(&self) -> Result<(), KeyError> {
        let depth = self.ancestors().count();
        for (position, key) in self.ancestors().enumerate() {
            if key.kind.is_empty() {
                return Err(KeyError::EmptyKind {
                    position: depth - 1 - position,
                });
            }
            if position > 0 && key.is_incomplete() {
                return Err(KeyError::IncompleteAncestor {
                    kind: key.kind.clone(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = &self.parent {
            fmt::Display::fmt(parent, f)?;
        }
        match &self.id {
            KeyId::Incomplete => write!(f, "/{},0", self.kind),
            KeyId::Id(id) => write!(f, "/{},{id}", self.kind),
            KeyId::Name(name) => write!(f, "/{},{name:?}", self.kind),
        }
    }
}

vc_reflect::impl_reflect_opaque!(Key);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn parent_partition() {
        let root = Key::new("A", KeyId::Id(1))
            .with_project("p")
            .with_namespace("ns");
        let child = Key::new("B", KeyId::Incomplete).with_parent(root);

        assert_eq!(child.project(), "p");
        assert_eq!(child.namespace(), "ns");
        assert_eq!(child.ancestors().count(), 2);
        assert_eq!(child.to_string(), "/A,1/B,0");
    }

    #[test]
    fn validation() {
        let incomplete_parent =
            Key::new("B", KeyId::Id(2)).with_parent(Key::new("A", KeyId::Incomplete));
        assert_eq!(
            incomplete_parent.validate(),
            Err(KeyError::IncompleteAncestor { kind: "A".into() }),
        );

        let empty_kind = Key::new("", KeyId::Id(2)).with_parent(Key::new("A", KeyId::Id(1)));
        assert_eq!(empty_kind.validate(), Err(KeyError::EmptyKind { position: 1 }));

        assert!(Key::new("A", KeyId::Incomplete).validate().is_ok());
    }
}
