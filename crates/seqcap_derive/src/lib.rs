use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Data, DataStruct, DeriveInput, Fields, Generics, Type, WherePredicate, parse_macro_input,
    parse_quote,
};

/// Forwards `seqcap::Size` to the inner field.
///
/// Every derive in this crate needs a single-field tuple struct:
///
/// ```compile_fail
/// use seqcap::Size;
///
/// #[derive(Size)]
/// struct Named {
///     items: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Size)]
pub fn derive_size(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input, "Size", quote! { ::seqcap::Size }, |_| {
        quote! {
            #[inline]
            fn size(&self) -> usize {
                ::seqcap::Size::size(&self.0)
            }
        }
    })
}

/// Forwards `seqcap::ConstIterable` to the inner field, reusing its cursor type.
#[proc_macro_derive(ConstIterable)]
pub fn derive_const_iterable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(
        &input,
        "ConstIterable",
        quote! { ::seqcap::ConstIterable },
        |inner| {
            quote! {
                type Item = <#inner as ::seqcap::ConstIterable>::Item;
                type Cursor<'__seqcap> = <#inner as ::seqcap::ConstIterable>::Cursor<'__seqcap>
                where
                    Self: '__seqcap;

                #[inline]
                fn iter(&self) -> Self::Cursor<'_> {
                    ::seqcap::ConstIterable::iter(&self.0)
                }
            }
        },
    )
}

/// Forwards `seqcap::MutIterable` to the inner field, reusing its cursor type.
#[proc_macro_derive(MutIterable)]
pub fn derive_mut_iterable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(
        &input,
        "MutIterable",
        quote! { ::seqcap::MutIterable },
        |inner| {
            quote! {
                type Item = <#inner as ::seqcap::MutIterable>::Item;
                type CursorMut<'__seqcap> = <#inner as ::seqcap::MutIterable>::CursorMut<'__seqcap>
                where
                    Self: '__seqcap;

                #[inline]
                fn iter_mut(&mut self) -> Self::CursorMut<'_> {
                    ::seqcap::MutIterable::iter_mut(&mut self.0)
                }
            }
        },
    )
}

/// Forwards `seqcap::RandomAccess` to the inner field.
#[proc_macro_derive(RandomAccess)]
pub fn derive_random_access(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(
        &input,
        "RandomAccess",
        quote! { ::seqcap::RandomAccess },
        |inner| {
            quote! {
                type Item = <#inner as ::seqcap::RandomAccess>::Item;

                #[inline]
                fn at(&self, index: usize) -> &Self::Item {
                    ::seqcap::RandomAccess::at(&self.0, index)
                }
            }
        },
    )
}

/// Declares `seqcap::Sequence` for a newtype.
///
/// `Size`, `ConstIterable` and `RandomAccess` must be derived (or implemented)
/// as well. The lookups are forwarded so overrides on the inner type are kept.
#[proc_macro_derive(Sequence)]
pub fn derive_sequence(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input, "Sequence", quote! { ::seqcap::Sequence }, |_| {
        quote! {
            #[inline]
            fn contains(&self, value: &::seqcap::Element<Self>) -> bool {
                ::seqcap::Sequence::contains(&self.0, value)
            }

            #[inline]
            fn position(&self, value: &::seqcap::Element<Self>) -> ::core::option::Option<usize> {
                ::seqcap::Sequence::position(&self.0, value)
            }

            #[inline]
            fn index(&self, value: &::seqcap::Element<Self>) -> isize {
                ::seqcap::Sequence::index(&self.0, value)
            }

            #[inline]
            fn count(&self, value: &::seqcap::Element<Self>) -> usize {
                ::seqcap::Sequence::count(&self.0, value)
            }

            #[inline]
            fn index_between(
                &self,
                value: &::seqcap::Element<Self>,
                from: usize,
                to: usize,
            ) -> ::seqcap::Result<usize> {
                ::seqcap::Sequence::index_between(&self.0, value, from, to)
            }

            #[inline]
            fn checked_at(&self, index: usize) -> ::seqcap::Result<&::seqcap::Element<Self>> {
                ::seqcap::Sequence::checked_at(&self.0, index)
            }
        }
    })
}

fn expand(
    input: &DeriveInput,
    derive: &str,
    bound: TokenStream2,
    items: impl FnOnce(&Type) -> TokenStream2,
) -> TokenStream {
    let inner_type = match single_field_type(input, derive) {
        Ok(ty) => ty,
        Err(e) => return e.to_compile_error().into(),
    };

    let struct_name = &input.ident;
    let generics = bounded_generics(&input.generics, inner_type, &bound);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let items = items(inner_type);

    let expanded = quote! {
        impl #impl_generics #bound for #struct_name #ty_generics #where_clause {
            #items
        }
    };

    TokenStream::from(expanded)
}

fn single_field_type<'a>(input: &'a DeriveInput, derive: &str) -> syn::Result<&'a Type> {
    match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Unnamed(fields),
            ..
        }) if fields.unnamed.len() == 1 => Ok(&fields.unnamed[0].ty),
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            format!("{derive} can only be derived for single-field tuple structs"),
        )),
    }
}

// Only generic structs get a where clause; on a concrete inner type it would be
// a trivial bound.
fn bounded_generics(generics: &Generics, inner_type: &Type, bound: &TokenStream2) -> Generics {
    let mut generics = generics.clone();
    if !generics.params.is_empty() {
        let predicate: WherePredicate = parse_quote! { #inner_type: #bound };
        generics.make_where_clause().predicates.push(predicate);
    }
    generics
}
