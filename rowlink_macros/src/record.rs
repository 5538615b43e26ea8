use darling::{ast::Data, util::Ignored, FromDeriveInput, FromField};
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{DeriveInput, Error, Type};

use crate::field_kind::FieldKind;

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(row))]
struct RecordOpts {
    ident: Ident,
    data: Data<Ignored, RecordStructFieldOpt>,
}

#[derive(Debug, FromField)]
#[darling(attributes(row))]
struct RecordStructFieldOpt {
    ident: Option<Ident>,
    ty: Type,
    #[darling(default)]
    column: Option<String>,
}

struct TaggedField<'a> {
    ident: &'a Ident,
    tag: &'a str,
    kind: FieldKind,
}

pub(crate) fn handle(ast: DeriveInput) -> Result<TokenStream, Error> {
    let record_opts: RecordOpts = RecordOpts::from_derive_input(&ast)?;

    let struct_name = &record_opts.ident;
    let Data::Struct(data_struct) = record_opts.data else {
        return Err(Error::new_spanned(struct_name, "enum is not supported"));
    };

    let mut tagged: Vec<TaggedField<'_>> = Vec::new();
    for field in data_struct.fields.iter() {
        let Some(tag) = field.column.as_deref() else {
            // Untagged fields are never populated by a decode call.
            continue;
        };
        let Some(ident) = field.ident.as_ref() else {
            return Err(Error::new_spanned(
                struct_name,
                "tuple struct is not supported",
            ));
        };
        let kind = field_kind(&field.ty).ok_or_else(|| {
            Error::new_spanned(
                &field.ty,
                "tagged field type is not supported, expected i8, i16, i32, i64 or String",
            )
        })?;
        if let Some(first) = tagged.iter().find(|other| other.tag == tag) {
            return Err(Error::new_spanned(
                ident,
                format!(
                    "duplicate column tag `{}`, already used by field `{}`",
                    tag, first.ident
                ),
            ));
        }
        tagged.push(TaggedField { ident, tag, kind });
    }

    let field_defs = tagged.iter().map(|field| {
        let name = field.ident.to_string();
        let tag = field.tag;
        let variant = field.kind.variant();
        quote! {
            ::rowlink::record::FieldDef {
                name: #name,
                tag: #tag,
                kind: ::rowlink::record::FieldKind::#variant,
            }
        }
    });

    let store_arms = tagged.iter().enumerate().map(|(index, field)| {
        let ident = field.ident;
        let accessor = field.kind.accessor();
        quote! {
            #index => {
                self.#ident = value.#accessor()?;
                ::core::result::Result::Ok(())
            }
        }
    });

    Ok(quote! {
        impl ::rowlink::record::Record for #struct_name {
            fn fields() -> &'static [::rowlink::record::FieldDef] {
                const FIELDS: &[::rowlink::record::FieldDef] = &[
                    #(#field_defs,)*
                ];
                FIELDS
            }

            fn store(
                &mut self,
                index: usize,
                value: ::rowlink::record::Value,
            ) -> ::core::result::Result<(), ::rowlink::record::ValueError> {
                match index {
                    #(#store_arms)*
                    _ => ::core::result::Result::Err(
                        ::rowlink::record::ValueError::InvalidFieldIndex(index),
                    ),
                }
            }
        }
    })
}

fn field_kind(ty: &Type) -> Option<FieldKind> {
    if let Type::Path(type_path) = ty {
        if type_path.qself.is_none() {
            return FieldKind::from_path(&type_path.path);
        }
    }
    None
}
