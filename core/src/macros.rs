/// Implements a basic `Debug` trait for types using their type name.
///
/// Useful for capability trait objects whose internals are closures or
/// otherwise opaque.
#[macro_export]
macro_rules! impl_debug {
    ($ty:ty) => {
        impl core::fmt::Debug for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(core::any::type_name::<Self>())
            }
        }
    };
}
