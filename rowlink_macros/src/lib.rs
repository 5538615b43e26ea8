mod field_kind;
mod record;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `rowlink::record::Record` implementation for a named
/// struct, making it a valid decode destination.
///
/// Fields opt in to column assignment with `#[row(column = "...")]`;
/// fields without the attribute are never populated by a decode call.
///
/// # Example
///
/// ```no_rust
/// use rowlink::Record;
///
/// #[derive(Debug, Default, Record)]
/// pub struct User {
///     #[row(column = "id")]
///     pub id: i64,
///     #[row(column = "name")]
///     pub name: String,
///     pub visits: i32,
/// }
/// ```
#[proc_macro_derive(Record, attributes(row))]
pub fn rowlink_record(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let result = record::handle(ast);
    match result {
        Ok(codegen) => codegen.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
