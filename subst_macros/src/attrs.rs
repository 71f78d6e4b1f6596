use darling::{ast::NestedMeta, FromAttributes, FromMeta};
use syn::Meta;

/// Options of `#[substitute(...)]` on a trait.
#[derive(FromMeta, Default)]
pub(crate) struct SubstituteAttr {
    /// Name of the generated type, `Substitute<Trait>` by default.
    pub name: Option<String>,
    /// Prints the generated code at expansion time.
    pub debug: darling::util::Flag,
    /// Methods that keep their default body instead of forwarding.
    pub skip_fns: Option<Skip>,
}

pub(crate) struct Skip(pub Vec<syn::Path>);

impl FromMeta for Skip {
    fn from_list(list: &[NestedMeta]) -> darling::Result<Self> {
        list.iter()
            .map(|meta| match meta {
                NestedMeta::Meta(Meta::Path(path)) => Ok(path.clone()),
                _ => Err(darling::Error::custom(
                    "expected a list of methods like skip_fns(a, b)",
                )),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Skip)
    }
}

impl SubstituteAttr {
    pub fn should_skip_method(&self, method_name: &syn::Ident) -> bool {
        self.skip_fns
            .as_ref()
            .is_some_and(|skip| skip.0.iter().any(|path| path.is_ident(method_name)))
    }
}

/// Options of `#[substitute(...)]` on a trait method.
#[derive(FromAttributes, Default)]
#[darling(attributes(substitute))]
pub(crate) struct MemberAttr {
    /// Recorded name, the method name by default.
    pub name: Option<String>,
    /// Reads a property instead of a return value.
    pub property: darling::util::Flag,
    /// Writes the named property.
    pub setter: Option<String>,
    /// Does not require a stub; the method returns `Option<T>`.
    pub optional: darling::util::Flag,
}
