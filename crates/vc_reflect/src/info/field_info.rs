use core::any::{Any, TypeId};

use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// FieldFlags

/// Options declared on a field with `#[reflect(..)]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldFlags {
    embedded: bool,
    no_index: bool,
}

impl FieldFlags {
    /// No options set.
    pub const EMPTY: Self = Self {
        embedded: false,
        no_index: false,
    };

    /// Marks the field as embedded (`#[reflect(embed)]`).
    ///
    /// An embedded struct field without a renamed property name has its
    /// fields promoted into the parent.
    #[inline]
    pub const fn with_embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    /// Marks the field as excluded from indexes (`#[reflect(noindex)]`).
    #[inline]
    pub const fn with_no_index(mut self) -> Self {
        self.no_index = true;
        self
    }

    /// Returns `true` if the field is embedded.
    #[inline]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Returns `true` if the field is excluded from indexes.
    #[inline]
    pub const fn is_no_index(&self) -> bool {
        self.no_index
    }
}

// -----------------------------------------------------------------------------
// NamedField

/// Information for a named (struct) field.
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Foo {
///     #[reflect(name = "a", noindex)]
///     field_a: f32,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
/// let field_info = info.field_at(0).unwrap();
///
/// assert!(field_info.type_is::<f32>());
/// assert_eq!(field_info.name(), "field_a");
/// assert_eq!(field_info.property_name(), "a");
/// assert!(field_info.flags().is_no_index());
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    rename: Option<&'static str>,
    flags: FieldFlags,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
}

impl NamedField {
    /// Creates a new [`NamedField`] for the given field `name` and type `T`.
    #[inline]
    pub fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            name,
            rename: None,
            flags: FieldFlags::EMPTY,
            type_info: T::type_info,
        }
    }

    /// Sets the property name that replaces the declared name.
    #[inline]
    pub fn with_rename(mut self, rename: &'static str) -> Self {
        self.rename = Some(rename);
        self
    }

    /// Sets the field options.
    #[inline]
    pub fn with_flags(mut self, flags: FieldFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the declared field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the renamed property name, if one was declared.
    #[inline]
    pub const fn rename(&self) -> Option<&'static str> {
        self.rename
    }

    /// Returns the property name: the rename if present, else the declared name.
    #[inline]
    pub const fn property_name(&self) -> &'static str {
        match self.rename {
            Some(rename) => rename,
            None => self.name,
        }
    }

    /// Returns the field options.
    #[inline]
    pub const fn flags(&self) -> FieldFlags {
        self.flags
    }

    /// Returns the field's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}
