use alloc::string::String;
use core::any::TypeId;
use core::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use xc_utils::TypeIdMap;
use xc_utils::hash::{FixedHashState, HashMap, HashSet};

use crate::info::TypeInfo;
use crate::registry::{GetTypeMeta, TypeMeta};

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of convertible types.
///
/// This is the allow-list consulted when a `Type` attribute is read: a tag
/// resolves to a type only if that type was [registered] here.
/// [Registering] a type uses its [`GetTypeMeta`] implementation, which
/// [`#[derive(XmlConvert)]`](crate::derive::XmlConvert) generates.
///
/// # Example
///
/// ```
/// use xc_convert::registry::TypeRegistry;
///
/// let registry = TypeRegistry::new();
///
/// let meta = registry.get_with_type_path("alloc::string::String").unwrap();
/// let s = meta.new_default().take::<String>().unwrap();
/// assert_eq!(s, "");
///
/// assert!(registry.get_with_type_path("std::process::Command").is_none());
/// ```
///
/// [registered]: TypeRegistry::register
/// [Registering]: TypeRegistry::register
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
    pub(crate) auto_registered: bool,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create an empty [`TypeRegistry`].
    #[inline]
    pub const fn empty() -> Self {
        Self {
            type_meta_table: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(FixedHashState),
            type_name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
            auto_registered: false,
        }
    }

    /// Create a type registry with the scalar types registered.
    ///
    /// - `String` `char` `bool`
    /// - `i8 - i64` `u8 - u64`
    /// - `f32` `f64`
    /// - `rust_decimal::Decimal` `chrono::NaiveDateTime`
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<String>();
        registry.register::<char>();
        registry.register::<bool>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<Decimal>();
        registry.register::<NaiveDateTime>();
        registry
    }

    // # Validity
    // The type must **not** already exist.
    fn add_new_type_indices(
        type_meta: &TypeMeta,
        type_path_to_id: &mut HashMap<&'static str, TypeId>,
        type_name_to_id: &mut HashMap<&'static str, TypeId>,
        ambiguous_names: &mut HashSet<&'static str>,
    ) {
        let ty = type_meta.ty();
        let type_name = ty.name();

        // Check for duplicate names.
        if !ambiguous_names.contains(type_name) {
            if type_name_to_id.contains_key(type_name) {
                type_name_to_id.remove(type_name);
                ambiguous_names.insert(type_name);
            } else {
                type_name_to_id.insert(type_name, ty.id());
            }
        }

        // For new type, assuming that the full path cannot be duplicated.
        type_path_to_id.insert(ty.path(), ty.id());
    }

    // - If key [`TypeId`] has already exist, the function will do nothing and return `false`.
    // - If the key [`TypeId`] does not exist, the function will insert value and return `true`.
    fn register_internal(
        &mut self,
        type_id: TypeId,
        get_type_meta: impl FnOnce() -> TypeMeta,
    ) -> bool {
        self.type_meta_table.try_insert(type_id, || {
            let meta = get_type_meta();
            Self::add_new_type_indices(
                &meta,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
            meta
        })
    }

    /// Attempts to register the type `T` if it has not yet been registered already.
    ///
    /// This will also recursively register any type dependencies as specified by
    /// [`GetTypeMeta::register_dependencies`]. When deriving `XmlConvert`, this is
    /// the declared type of every member; for containers it is the item, key and
    /// value types. No type is registered more than once.
    ///
    /// # Example
    ///
    /// ```
    /// # use core::any::TypeId;
    /// # use xc_convert::{derive::XmlConvert, registry::TypeRegistry};
    /// #[derive(XmlConvert, Default)]
    /// struct Foo {
    ///     name: Option<String>,
    ///     tags: Vec<u16>,
    /// }
    ///
    /// let mut type_registry = TypeRegistry::empty();
    ///
    /// type_registry.register::<Foo>();
    ///
    /// // The main type
    /// assert!(type_registry.contains(TypeId::of::<Foo>()));
    ///
    /// // Its type dependencies
    /// assert!(type_registry.contains(TypeId::of::<String>()));
    /// assert!(type_registry.contains(TypeId::of::<Vec<u16>>()));
    /// assert!(type_registry.contains(TypeId::of::<u16>()));
    /// ```
    pub fn register<T: GetTypeMeta>(&mut self) {
        if self.register_internal(TypeId::of::<T>(), T::get_type_meta) {
            T::register_dependencies(self);
        }
    }

    /// Automatically registers all non-generic types annotated with
    /// `#[xml(auto_register)]`.
    ///
    /// This method is equivalent to calling [`register`](Self::register) for each qualifying type.
    /// Repeated calls are cheap and will not insert duplicates.
    ///
    /// ## Return Value
    ///
    /// Returns `true` if automatic registration succeeded on the current platform; otherwise, `false`.
    ///
    /// ## Feature Dependency
    ///
    /// This method requires the `auto_register` feature. When disabled, it always does nothing and
    /// returns `false`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use core::any::TypeId;
    /// # use xc_convert::{derive::XmlConvert, registry::TypeRegistry};
    /// #[derive(XmlConvert, Default)]
    /// #[xml(auto_register)]
    /// struct Foo {
    ///     value: i32,
    /// }
    ///
    /// let mut type_registry = TypeRegistry::empty();
    /// assert!(type_registry.auto_register());
    /// assert!(type_registry.contains(TypeId::of::<Foo>()));
    /// assert!(type_registry.contains(TypeId::of::<i32>()));
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            // Reduce the cost of duplicate registrations.
            if self.auto_registered {
                return true;
            }
            crate::__macro_exports::auto_register::__register_types(self);
            self.auto_registered
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    /// Whether the type with given [`TypeId`] has been registered in this registry.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    /// Returns a reference to the [`TypeMeta`] of the type with
    /// the given [`TypeId`].
    ///
    /// If the specified type has not been registered, returns `None`.
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    /// Returns a reference to the [`TypeMeta`] of the type with
    /// the given [type path].
    ///
    /// If no type with the given type path has been registered, returns `None`.
    ///
    /// [type path]: crate::info::TypePath::type_path
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        // Manual inline
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns a reference to the [`TypeMeta`] of the type with the given [type name].
    ///
    /// If the type name is ambiguous, or if no type with the given path
    /// has been registered, returns `None`.
    ///
    /// [type name]: crate::info::TypePath::type_name
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&TypeMeta> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns `true` if the given [type name] is ambiguous, that is, it matches multiple registered types.
    ///
    /// # Example
    /// ```
    /// # use xc_convert::registry::TypeRegistry;
    /// # mod foo {
    /// #     use xc_convert::derive::XmlConvert;
    /// #     #[derive(XmlConvert, Default)]
    /// #     pub struct MyType { pub id: u8 }
    /// # }
    /// # mod bar {
    /// #     use xc_convert::derive::XmlConvert;
    /// #     #[derive(XmlConvert, Default)]
    /// #     pub struct MyType { pub id: u8 }
    /// # }
    /// let mut type_registry = TypeRegistry::default();
    /// type_registry.register::<foo::MyType>();
    /// type_registry.register::<bar::MyType>();
    /// assert_eq!(type_registry.is_ambiguous("MyType"), true);
    /// ```
    ///
    /// [type name]: crate::info::TypePath::type_name
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Returns the [`TypeInfo`] associated with the given [`TypeId`].
    ///
    /// If the specified type has not been registered, returns `None`.
    pub fn get_type_info(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.get(type_id).map(TypeMeta::type_info)
    }

    /// Returns an iterator over the [`TypeMeta`]s of the registered types.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_meta_table.is_empty()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.type_path_to_id.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::any::TypeId;

    use super::TypeRegistry;
    use crate::info::TypeKind;

    #[test]
    fn new_registers_scalars() {
        let registry = TypeRegistry::new();
        assert_eq!(registry.len(), 15);
        assert!(registry.iter().all(|meta| meta.type_info().kind() == TypeKind::Scalar));
        assert!(registry.get_with_type_path("i64").is_some());
        assert!(registry.get_with_type_name("NaiveDateTime").is_some());
    }

    #[test]
    fn register_is_idempotent_and_recursive() {
        let mut registry = TypeRegistry::empty();
        registry.register::<BTreeMap<String, Vec<u8>>>();
        registry.register::<BTreeMap<String, Vec<u8>>>();

        assert_eq!(registry.len(), 4);
        assert!(registry.contains(TypeId::of::<Vec<u8>>()));
        assert!(
            registry
                .get_with_type_path("alloc::vec::Vec<u8>")
                .unwrap()
                .type_is::<Vec<u8>>()
        );
    }

    #[test]
    fn empty_knows_nothing() {
        let registry = TypeRegistry::empty();
        assert!(registry.is_empty());
        assert!(registry.get_with_type_path("u8").is_none());
    }
}
