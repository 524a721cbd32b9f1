use crate::schema::Entity;

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn entity(entity: &Entity) -> TokenStream {
    let rowmap = quote!(_rowmap::codegen_support);
    let ident = &entity.ident;
    let (impl_generics, ty_generics, where_clause) = entity.generics.split_for_impl();

    let to_params = entity.fields.iter().map(|field| {
        let field_ident = &field.ident;
        let property = &field.property;
        quote! {
            params.insert(#property, #rowmap::Primitive::to_value(&self.#field_ident));
        }
    });

    let set_property = entity.fields.iter().map(|field| {
        let field_ident = &field.ident;
        let property = &field.property;
        let ty = &field.ty;
        quote! {
            #property => self.#field_ident = <#ty as #rowmap::Primitive>::load(value)?,
        }
    });

    wrap_in_const(quote! {
        impl #impl_generics #rowmap::Entity for #ident #ty_generics #where_clause {
            fn id(&self) -> #rowmap::Option<i64> {
                self.id
            }

            fn set_id(&mut self, id: #rowmap::Option<i64>) {
                self.id = id;
            }

            fn to_params(&self) -> #rowmap::Params {
                let mut params = #rowmap::Params::new();
                #( #to_params )*
                params
            }

            fn set_property(
                &mut self,
                property: &str,
                value: #rowmap::Value,
            ) -> #rowmap::Result<()> {
                match property {
                    #( #set_property )*
                    _ => {}
                }
                Ok(())
            }
        }
    })
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowmap as _rowmap;
            #code
        };
    }
}
