use proc_macro::TokenStream;

use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derives `courier::correlation::response_variants::ResponseVariants`.
///
/// A struct accepts exactly its own type. An enum with one unnamed payload field per variant
/// accepts each payload type and wraps it into the matching variant.
#[proc_macro_derive(ResponseVariants)]
pub fn derive_response_variants(input: TokenStream) -> TokenStream {
    let derive_input = parse_macro_input!(input as DeriveInput);
    let name = &derive_input.ident;

    return match &derive_input.data {
        Data::Struct(_) => {
            quote! {
                impl courier::correlation::response_variants::ResponseVariants for #name {
                    fn accepted_types() -> ::std::vec::Vec<::std::any::TypeId> {
                        return vec![::std::any::TypeId::of::<#name>()];
                    }

                    fn from_payload(payload: courier::bus::envelope::AnyPayload) -> ::std::option::Option<Self> {
                        return payload.downcast::<#name>().ok().map(|response| *response);
                    }
                }
            }
            .into()
        }
        Data::Enum(data_enum) => {
            let mut payload_types = Vec::new();
            let mut downcast_arms = Vec::new();

            for variant in &data_enum.variants {
                let variant_name = &variant.ident;
                let payload_type = match &variant.fields {
                    Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed.first().unwrap().ty,
                    _ => {
                        return syn::Error::new_spanned(
                            variant,
                            "ResponseVariants variants must carry exactly one unnamed payload field",
                        )
                        .to_compile_error()
                        .into();
                    }
                };

                payload_types.push(quote! { ::std::any::TypeId::of::<#payload_type>() });
                downcast_arms.push(quote! {
                    let payload = match payload.downcast::<#payload_type>() {
                        ::std::result::Result::Ok(response) => {
                            return ::std::option::Option::Some(#name::#variant_name(*response));
                        }
                        ::std::result::Result::Err(payload) => payload,
                    };
                });
            }

            quote! {
                impl courier::correlation::response_variants::ResponseVariants for #name {
                    fn accepted_types() -> ::std::vec::Vec<::std::any::TypeId> {
                        return vec![#(#payload_types),*];
                    }

                    fn from_payload(payload: courier::bus::envelope::AnyPayload) -> ::std::option::Option<Self> {
                        #(#downcast_arms)*
                        let _ = payload;
                        return ::std::option::Option::None;
                    }
                }
            }
            .into()
        }
        Data::Union(_) => syn::Error::new_spanned(&derive_input.ident, "ResponseVariants cannot be derived for unions")
            .to_compile_error()
            .into(),
    };
}
