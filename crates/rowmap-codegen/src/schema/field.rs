use super::ErrorSet;

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Property name, as used in schemes and statement placeholders
    pub(crate) property: String,

    /// Field type
    pub(crate) ty: syn::Type,

    /// True if the field is annotated with `#[entity(skip)]`
    pub(crate) skip: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "entity fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut skip = false;

        for attr in &field.attrs {
            if !attr.path().is_ident("entity") {
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    if skip {
                        return Err(meta.error("duplicate `skip` attribute"));
                    }
                    skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown entity attribute; expected `skip`"))
                }
            });

            if let Err(err) = res {
                errs.push(err);
            }
        }

        errs.finish()?;

        Ok(Self {
            ident: ident.clone(),
            property: ident.unraw().to_string(),
            ty: field.ty.clone(),
            skip,
        })
    }

    pub(crate) fn is_id(&self) -> bool {
        self.property == "id"
    }
}
