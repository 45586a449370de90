use proc_macro::TokenStream;
use quote::quote;

/// Generate an integer color model from a struct declaration.
///
/// Every field is made public and must share one type. The macro adds the
/// common derives, a positional `new` constructor, `to_array` and a
/// `From<[T; N]>` conversion.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !matches!(input.fields, syn::Fields::Named(_)) || input.fields.is_empty() {
        return quote! {
            compile_error!("Models must have named fields, one for each channel of the color.")
        }
        .into();
    }

    let field_types = input
        .fields
        .iter()
        .map(|f| f.ty.clone())
        .collect::<Vec<_>>();
    let channel_type = field_types[0].clone();
    if field_types.iter().any(|ty| *ty != channel_type) {
        return quote! {
            compile_error!("All channels of a model must have the same type.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let channel_count = field_names.len();
    let indices = (0..channel_count).map(syn::Index::from).collect::<Vec<_>>();

    // Make sure the channels are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    input.attrs.push(syn::parse_quote! {
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    });

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, where_clause) = input.generics.split_for_impl();

    let new_impl = quote! {
        impl #impl_gen #struct_name #type_gen #where_clause {
            /// Create a new color in this model.
            pub const fn new(#(#field_names: #field_types),*) -> Self {
                Self { #(#field_names),* }
            }

            /// Return the channels of this model in declaration order.
            pub const fn to_array(&self) -> [#channel_type; #channel_count] {
                [#(self.#field_names),*]
            }
        }

        impl #impl_gen From<[#channel_type; #channel_count]> for #struct_name #type_gen #where_clause {
            fn from(value: [#channel_type; #channel_count]) -> Self {
                Self::new(#(value[#indices]),*)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
