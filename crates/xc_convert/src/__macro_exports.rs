//! Items used by the code that `#[derive(XmlConvert)]` generates.
//!
//! Not public API.

pub use alloc::borrow::{Cow, ToOwned};
pub use alloc::boxed::Box;
pub use alloc::string::ToString;

pub use crate::impls::concat as __concat;

// -----------------------------------------------------------------------------
// auto_register

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::registry::{GetTypeMeta, TypeRegistry};

    /// A registration function submitted to `inventory`.
    pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry));

    inventory::collect!(__AutoRegisterFunc);

    /// Adapts [`TypeRegistry::register`] to a plain function pointer.
    pub trait __RegisterType {
        fn __register(registry: &mut TypeRegistry);
    }

    impl<T: GetTypeMeta> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut TypeRegistry) {
            registry.register::<T>();
        }
    }

    // Only runs when `inventory` works on this platform.
    fn __mark_available(registry: &mut TypeRegistry) {
        registry.auto_registered = true;
    }

    inventory::submit! { __AutoRegisterFunc(__mark_available) }

    /// Runs every submitted registration function.
    pub fn __register_types(registry: &mut TypeRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }
}
