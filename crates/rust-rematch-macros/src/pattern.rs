//! Compile-time validated pattern macro implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Ident, LitStr, Result, Token};

/// Flag names accepted by the macro.
const FLAGS: &[&str] = &[
    "CASE_INSENSITIVE",
    "MULTI_LINE",
    "DOT_MATCHES_NEW_LINE",
    "IGNORE_WHITESPACE",
    "SWAP_GREED",
    "CRLF",
];

/// The pattern! macro input.
pub struct PatternInput {
    /// The pattern source.
    pub source: LitStr,
    /// Flag names, in the order given.
    pub flags: Vec<Ident>,
}

impl Parse for PatternInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let source: LitStr = input.parse()?;
        let mut flags = Vec::new();

        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            if !input.is_empty() {
                let parsed: Punctuated<Ident, Token![|]> =
                    Punctuated::parse_separated_nonempty(input)?;
                flags.extend(parsed);
                if input.peek(Token![,]) {
                    input.parse::<Token![,]>()?;
                }
            }
        }

        Ok(Self { source, flags })
    }
}

/// Generate code for the pattern! macro.
pub fn expand(input: PatternInput) -> TokenStream {
    let source = input.source.value();

    let mut builder = regex::RegexBuilder::new(&source);
    for flag in &input.flags {
        match flag.to_string().as_str() {
            "CASE_INSENSITIVE" => builder.case_insensitive(true),
            "MULTI_LINE" => builder.multi_line(true),
            "DOT_MATCHES_NEW_LINE" => builder.dot_matches_new_line(true),
            "IGNORE_WHITESPACE" => builder.ignore_whitespace(true),
            "SWAP_GREED" => builder.swap_greed(true),
            "CRLF" => builder.crlf(true),
            other => {
                return syn::Error::new(
                    flag.span(),
                    format!("unknown flag `{other}`, expected one of: {}", FLAGS.join(", ")),
                )
                .to_compile_error();
            }
        };
    }

    // Validate the pattern at compile time
    if let Err(e) = builder.build() {
        return syn::Error::new(input.source.span(), format!("invalid pattern: {e}"))
            .to_compile_error();
    }

    let lit = &input.source;
    let flags = &input.flags;

    quote! {
        {
            static PATTERN: ::std::sync::OnceLock<::rust_rematch::Pattern> =
                ::std::sync::OnceLock::new();
            PATTERN.get_or_init(|| {
                ::rust_rematch::Pattern::with_flags(
                    #lit,
                    ::rust_rematch::PatternFlags::empty()
                        #( .union(::rust_rematch::PatternFlags::#flags) )*,
                )
                .expect("pattern was validated at compile time")
            })
        }
    }
}
