use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Entity {
    /// Struct identifier
    pub(crate) ident: syn::Ident,

    /// Struct generics, forwarded to the generated impl
    pub(crate) generics: syn::Generics,

    /// Fields that take part in parameters and hydration
    pub(crate) fields: Vec<Field>,
}

impl Entity {
    pub(crate) fn from_ast(item: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(named) = &item.fields else {
            return Err(syn::Error::new_spanned(
                &item.fields,
                "entity fields must be named",
            ));
        };

        let mut errs = ErrorSet::new();
        let mut fields = vec![];
        let mut has_id = false;

        for node in &named.named {
            match Field::from_ast(node) {
                Ok(field) if field.is_id() && field.skip => {
                    errs.push(syn::Error::new_spanned(
                        node,
                        "the `id` field cannot be skipped",
                    ));
                }
                Ok(field) => {
                    has_id |= field.is_id();
                    if !field.skip {
                        fields.push(field);
                    }
                }
                Err(err) => errs.push(err),
            }
        }

        errs.finish()?;

        if !has_id {
            return Err(syn::Error::new_spanned(
                &item.ident,
                "entity must have an `id: Option<i64>` field",
            ));
        }

        Ok(Self {
            ident: item.ident.clone(),
            generics: item.generics.clone(),
            fields,
        })
    }
}
