use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// ShortName

/// A type path with module prefixes removed, used for diagnostics.
///
/// Generic arguments are shortened too.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::ShortName;
///
/// let name = ShortName("core::option::Option<alloc::string::String>");
/// assert_eq!(name.to_string(), "Option<String>");
///
/// let name = ShortName("(i32, alloc::vec::Vec<u8>)");
/// assert_eq!(name.to_string(), "(i32, Vec<u8>)");
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ShortName<'a>(pub &'a str);

impl ShortName<'_> {
    #[inline]
    fn is_delimiter(c: char) -> bool {
        matches!(c, '<' | '>' | '(' | ')' | '[' | ']' | ',' | ';' | ' ' | '&')
    }

    #[inline]
    fn last_segment(path: &str) -> &str {
        path.rsplit("::").next().unwrap_or(path)
    }
}

impl fmt::Display for ShortName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        // Delimiters are ASCII, so slicing around them stays on char boundaries.
        while let Some(pos) = rest.find(Self::is_delimiter) {
            f.write_str(Self::last_segment(&rest[..pos]))?;
            f.write_str(&rest[pos..=pos])?;
            rest = &rest[pos + 1..];
        }
        f.write_str(Self::last_segment(rest))
    }
}

impl fmt::Debug for ShortName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

// -----------------------------------------------------------------------------
// Type

/// The base representation of a Rust type.
///
/// Includes a [`TypeId`] and the full type path.
///
/// # Examples
///
/// ```
/// # use core::any::TypeId;
/// use vc_reflect::info::Type;
///
/// let ty = Type::of::<String>();
///
/// assert!(ty.is::<String>());
/// assert_eq!(ty.path(), "alloc::string::String");
/// assert_eq!(ty.name().to_string(), "String");
/// assert_eq!(ty.id(), TypeId::of::<String>());
/// ```
#[derive(Copy, Clone)]
pub struct Type {
    type_id: TypeId,
    type_path: &'static str,
}

impl Type {
    /// Creates a new [`Type`] for `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_path: core::any::type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`] of the type.
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    /// Check if the given type matches this one.
    ///
    /// This only compares the [`TypeId`] of the types.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.type_id
    }

    /// Returns the full type path, e.g. `alloc::string::String`.
    #[inline(always)]
    pub const fn path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the type path without module prefixes, e.g. `String`.
    #[inline]
    pub const fn name(&self) -> ShortName<'static> {
        ShortName(self.type_path)
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_path)
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{ShortName, Type};

    #[test]
    fn short_names() {
        assert_eq!(ShortName("u8").to_string(), "u8");
        assert_eq!(ShortName("a::b::C<d::E, [f::G; 3]>").to_string(), "C<E, [G; 3]>");
        assert_eq!(ShortName("&mut a::B").to_string(), "&mut B");
    }

    #[test]
    fn type_of() {
        let ty = Type::of::<alloc::vec::Vec<i64>>();
        assert_eq!(ty.name().to_string(), "Vec<i64>");
        assert_eq!(ty, Type::of::<alloc::vec::Vec<i64>>());
        assert_ne!(ty, Type::of::<alloc::vec::Vec<i32>>());
    }
}
