use proc_macro2::{Ident, Span};

/// Field kinds a tagged record field may declare, mirroring
/// `rowlink::record::FieldKind`.
pub(crate) enum FieldKind {
    Int8,
    Int16,
    Int32,
    Int64,
    Text,
}

impl FieldKind {
    pub(crate) fn from_path(path: &syn::Path) -> Option<Self> {
        if path.is_ident("i8") {
            Some(FieldKind::Int8)
        } else if path.is_ident("i16") {
            Some(FieldKind::Int16)
        } else if path.is_ident("i32") {
            Some(FieldKind::Int32)
        } else if path.is_ident("i64") {
            Some(FieldKind::Int64)
        } else if path.is_ident("String") {
            Some(FieldKind::Text)
        } else {
            None
        }
    }

    /// Variant ident for quoting `FieldKind::<variant>`.
    pub(crate) fn variant(&self) -> Ident {
        let name = match self {
            FieldKind::Int8 => "Int8",
            FieldKind::Int16 => "Int16",
            FieldKind::Int32 => "Int32",
            FieldKind::Int64 => "Int64",
            FieldKind::Text => "Text",
        };
        Ident::new(name, Span::call_site())
    }

    /// The `Value` accessor the generated `store` arm calls.
    pub(crate) fn accessor(&self) -> Ident {
        let name = match self {
            FieldKind::Int8 => "into_i8",
            FieldKind::Int16 => "into_i16",
            FieldKind::Int32 => "into_i32",
            FieldKind::Int64 => "into_i64",
            FieldKind::Text => "into_text",
        };
        Ident::new(name, Span::call_site())
    }
}
