//! See [`XmlConvert`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static XML_ATTRIBUTE_NAME: &str = "xml";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Composite Derivation
///
/// `#[derive(XmlConvert)]` turns a struct with named fields into a composite
/// and implements the following traits:
///
/// - `TypePath`
/// - `Typed`
/// - `XmlValue`
/// - `Composite`
/// - `Member`
/// - `GetTypeMeta`
///
/// The struct must implement `Default`: deserialization starts from the
/// default value and assigns every member it finds. Every field type must be
/// a `Member`, which covers the builtin scalars, sequences, mappings,
/// `Option<T>` and other derived structs.
///
/// Tuple structs, unit structs, enums and unions are rejected.
///
/// ## Type Attributes
///
/// ### Element Name
///
/// By default the element of a composite is named after its type ident.
///
/// ```rust, ignore
/// #[derive(XmlConvert, Default)]
/// #[xml(name = "Customer")]
/// struct Client { /* ... */ }
/// ```
///
/// ### Runtime Identity
///
/// `identity` makes `Composite::identifier` return
/// `XmlIdentity::xml_identifier(self)`, which outranks `name`.
/// The type must implement `XmlIdentity`.
///
/// ```rust, ignore
/// #[derive(XmlConvert, Default)]
/// #[xml(identity)]
/// struct Node { kind: String }
///
/// impl XmlIdentity for Node {
///     fn xml_identifier(&self) -> Cow<'_, str> {
///         Cow::Borrowed(&self.kind)
///     }
/// }
/// ```
///
/// ### Custom Type Path
///
/// The type path is what the `Type` attribute carries. It defaults to
/// `module_path!()` plus the ident and can be pinned:
///
/// ```rust, ignore
/// #[derive(XmlConvert, Default)]
/// #[xml(type_path = "shop::Order")]
/// struct Order { /* ... */ }
/// ```
///
/// The path does not include generics, they are appended.
///
/// ### Auto Register
///
/// `auto_register` submits the type to `TypeRegistry::auto_register`.
/// It needs the `auto_register` feature and is ignored for generic types.
///
/// ## Field Attributes
///
/// - `ignore`: the member is neither written nor read, and its type does not
///   need to be a `Member`.
/// - `name = "..."`: the element name of the member, instead of the field name.
/// - `element_name = "..."`: the element name of each item of a sequence
///   member, or each pair of a mapping member.
/// - `key_name = "..."` / `value_name = "..."`: the element names of the key
///   and the value in each pair of a mapping member.
///
/// ```rust, ignore
/// #[derive(XmlConvert, Default)]
/// struct Library {
///     #[xml(name = "Title")]
///     title: String,
///     #[xml(element_name = "Book")]
///     books: Vec<Book>,
///     #[xml(element_name = "Loan", key_name = "Reader", value_name = "Due")]
///     loans: BTreeMap<String, NaiveDateTime>,
///     #[xml(ignore)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// Unknown keys are compile errors.
#[proc_macro_derive(XmlConvert, attributes(xml))]
pub fn derive_xml_convert(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::XmlStruct::from_input(&ast) {
        Ok(info) => impls::impl_struct(&info).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
