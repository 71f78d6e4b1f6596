use darling::{Error, Result};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::{
    FnArg, GenericArgument, Ident, Pat, PatIdent, PathArguments, ReturnType, Signature, Type,
};

use crate::attrs::MemberAttr;

/// Builds the forwarding implementation of one contract method.
pub(crate) fn transform(attr: &MemberAttr, sig: &Signature) -> Result<TokenStream> {
    if !matches!(sig.inputs.first(), Some(FnArg::Receiver(_))) {
        return Err(Error::custom("substitute members need a `self` receiver").with_span(&sig.ident));
    }
    if let Some(asyncness) = &sig.asyncness {
        return Err(Error::custom("async members are not supported").with_span(asyncness));
    }
    if sig.generics.type_params().next().is_some() || sig.generics.const_params().next().is_some()
    {
        return Err(Error::custom("generic members are not supported").with_span(&sig.generics));
    }

    let mut sig = sig.clone();
    let mut arguments = Vec::new();
    for (index, input) in sig.inputs.iter_mut().skip(1).enumerate() {
        let FnArg::Typed(typed) = input else {
            return Err(Error::custom("multiple receivers?").with_span(&*input));
        };
        let ident = match &*typed.pat {
            Pat::Ident(pat) => pat.ident.clone(),
            _ => {
                let ident = Ident::new(&format!("arg{index}"), Span::call_site());
                typed.pat = Box::new(Pat::Ident(PatIdent {
                    attrs: Default::default(),
                    by_ref: Default::default(),
                    mutability: Default::default(),
                    ident: ident.clone(),
                    subpat: Default::default(),
                }));
                ident
            }
        };
        let value = value_of(&ident, &typed.ty);
        arguments.push((ident.unraw().to_string(), value));
    }

    let name = attr
        .name
        .clone()
        .unwrap_or_else(|| sig.ident.unraw().to_string());
    let output = match &sig.output {
        ReturnType::Type(_, ty) if !is_unit(ty) => Some(&**ty),
        _ => None,
    };

    let (body, tracks_caller) = if attr.property.is_present() {
        if attr.setter.is_some() || attr.optional.is_present() {
            return Err(Error::custom("a property getter cannot also be a setter or optional")
                .with_span(&sig.ident));
        }
        if !arguments.is_empty() {
            return Err(Error::custom("property getters take no arguments").with_span(&sig.inputs));
        }
        let Some(ty) = output else {
            return Err(Error::custom("property getters must return a value").with_span(&sig.ident));
        };
        (quote!(self.substitute.get_property::<#ty>(#name)), true)
    } else if let Some(property) = &attr.setter {
        if attr.optional.is_present() {
            return Err(Error::custom("a property setter cannot be optional").with_span(&sig.ident));
        }
        if attr.name.is_some() {
            return Err(Error::custom(
                "property setters are recorded as `set_<property>` and cannot be renamed",
            )
            .with_span(&sig.ident));
        }
        if output.is_some() {
            return Err(Error::custom("property setters must return `()`").with_span(&sig.output));
        }
        let [(_, value)] = arguments.as_slice() else {
            return Err(Error::custom("property setters take exactly one argument")
                .with_span(&sig.inputs));
        };
        (quote!(self.substitute.set_property(#property, #value)), false)
    } else {
        let (names, values): (Vec<_>, Vec<_>) = arguments.into_iter().unzip();
        let snapshot = quote!(subst::Arguments::new() #(.with(#names, #values))*);
        if attr.optional.is_present() {
            let Some(ty) = output.and_then(option_inner) else {
                return Err(Error::custom("optional members must return `Option<T>`")
                    .with_span(&sig.output));
            };
            (quote!(self.substitute.call_optional::<#ty>(#name, #snapshot)), true)
        } else if let Some(ty) = output {
            (quote!(self.substitute.call::<#ty>(#name, #snapshot)), true)
        } else {
            (quote!(self.substitute.call_void(#name, #snapshot)), false)
        }
    };

    let track_caller = if tracks_caller {
        quote!(#[track_caller])
    } else {
        TokenStream::default()
    };
    Ok(quote! {
        #track_caller
        #sig {
            #body
        }
    })
}

/// Expression converting an argument into a `subst::Value` without consuming borrowed data.
fn value_of(ident: &Ident, ty: &Type) -> TokenStream {
    match ty {
        Type::Reference(reference) => match &*reference.elem {
            Type::Path(path) if path.path.is_ident("str") => quote!(subst::Value::from(&*#ident)),
            Type::Slice(_) => quote!(subst::Value::from(#ident.to_vec())),
            _ => quote!(subst::Value::from(::std::clone::Clone::clone(&*#ident))),
        },
        _ => quote!(subst::Value::from(#ident)),
    }
}

fn is_unit(ty: &Type) -> bool {
    matches!(ty, Type::Tuple(tuple) if tuple.elems.is_empty())
}

fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return None;
    };
    match arguments.args.first()? {
        GenericArgument::Type(ty) if arguments.args.len() == 1 => Some(ty),
        _ => None,
    }
}
