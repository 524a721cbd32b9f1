extern crate proc_macro;

use proc_macro::TokenStream;

/// Implements `rowmap::Entity` for a struct with named fields.
///
/// The struct must have an `id: Option<i64>` field and implement `Default`.
/// Every other field is a property named after the field; its type must
/// implement `Primitive`. Mark a field `#[entity(skip)]` to leave it out of
/// statement parameters and hydration.
#[proc_macro_derive(Entity, attributes(entity))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    match rowmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
