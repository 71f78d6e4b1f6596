mod attrs;
mod item_trait;
mod member;

use attrs::SubstituteAttr;
use darling::{ast::NestedMeta, FromMeta};
use syn::{parse_macro_input, ItemTrait};

/// Generates a substitute type implementing the annotated trait.
///
/// Every method of the trait forwards to `subst::Substitute` with its name and a snapshot of its
/// arguments. Methods returning `()` never need a stub, methods marked
/// `#[substitute(optional)]` return `None` without one, every other method panics when called
/// without a configured value.
///
/// ```ignore
/// #[subst::substitute]
/// pub trait Cat {
///     #[substitute(property)]
///     fn age(&self) -> u8;
///     #[substitute(setter = "age")]
///     fn set_age(&mut self, age: u8);
///     fn meow(&self, count: usize) -> String;
///     fn sleep(&self);
/// }
///
/// let mut cat = SubstituteCat::new();
/// cat.set_return_value("meow", "meowmeow");
/// assert_eq!(cat.meow(2), "meowmeow");
/// assert!(cat.called("meow", subst::args![2usize], 1));
/// ```
#[proc_macro_attribute]
pub fn substitute(
    attribute: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let attribute = match NestedMeta::parse_meta_list(attribute.into()) {
        Ok(list) => list,
        Err(err) => return darling::Error::from(err).write_errors().into(),
    };
    let attribute = match SubstituteAttr::from_list(&attribute) {
        Ok(attribute) => attribute,
        Err(err) => return err.write_errors().into(),
    };
    let input = parse_macro_input!(input as ItemTrait);
    item_trait::transform(attribute, input)
        .unwrap_or_else(darling::Error::write_errors)
        .into()
}
