use darling::{Error, FromAttributes, Result};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Ident, ItemTrait, TraitItem};

use crate::attrs::{MemberAttr, SubstituteAttr};
use crate::member;

pub(crate) fn transform(attr: SubstituteAttr, mut input: ItemTrait) -> Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(Error::custom("generic contracts are not supported").with_span(&input.generics));
    }

    let trait_ident = &input.ident;
    let substitute_ident = match &attr.name {
        Some(name) => syn::parse_str::<Ident>(name).map_err(|_| {
            Error::custom(format!("`{name}` is not a valid type name")).with_span(trait_ident)
        })?,
        None => format_ident!("Substitute{}", trait_ident),
    };
    let contract_name = trait_ident.to_string();
    let mut errors = Error::accumulator();
    let mut members = Vec::new();
    for item in &mut input.items {
        let TraitItem::Fn(method) = item else {
            errors.push(Error::custom("only methods are supported in contracts").with_span(&*item));
            continue;
        };
        let member_attr = errors
            .handle(MemberAttr::from_attributes(&method.attrs))
            .unwrap_or_default();
        method.attrs.retain(|attr| !attr.path().is_ident("substitute"));
        if attr.should_skip_method(&method.sig.ident) {
            if method.default.is_none() {
                errors.push(
                    Error::custom("skipped methods need a default body").with_span(&method.sig.ident),
                );
            }
            continue;
        }
        if let Some(member) = errors.handle(member::transform(&member_attr, &method.sig)) {
            members.push(member);
        }
    }
    errors.finish()?;

    let vis = &input.vis;
    let tokens = quote! {
        #input

        #[derive(Debug)]
        #vis struct #substitute_ident {
            pub substitute: subst::Substitute,
        }

        impl #substitute_ident {
            #vis fn new() -> Self {
                Self {
                    substitute: subst::Substitute::new(#contract_name),
                }
            }
        }

        impl ::std::default::Default for #substitute_ident {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::std::ops::Deref for #substitute_ident {
            type Target = subst::Substitute;

            fn deref(&self) -> &Self::Target {
                &self.substitute
            }
        }

        impl ::std::ops::DerefMut for #substitute_ident {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.substitute
            }
        }

        impl #trait_ident for #substitute_ident {
            #(#members)*
        }
    };
    if attr.debug.is_present() {
        println!("{tokens}");
    }
    Ok(tokens)
}
