use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    MetaNameValue,
    Result,
    Token,
};

/// The tags given to the `error` attribute.
struct ErrorTags {
    message: Expr,
    labels: Expr,
    help: Option<Expr>,
}

impl ErrorTags {
    /// Reads the tags from the `error` attribute of the given struct. `message` and `labels` are
    /// required.
    fn from_struct(item: &ItemStruct) -> Result<Self> {
        let attr = item.attrs
            .iter()
            .find(|attr| attr.path().is_ident("error"))
            .ok_or_else(|| syn::Error::new(item.ident.span(), "missing `error` attribute"))?;

        let (mut message, mut labels, mut help) = (None, None, None);
        let tags = attr.parse_args_with(Punctuated::<MetaNameValue, Token![,]>::parse_terminated)?;
        for tag in tags {
            let slot = if tag.path.is_ident("message") {
                &mut message
            } else if tag.path.is_ident("labels") {
                &mut labels
            } else if tag.path.is_ident("help") {
                &mut help
            } else {
                return Err(syn::Error::new_spanned(
                    tag.path,
                    "unknown tag, expected `message`, `labels` or `help`",
                ));
            };
            *slot = Some(tag.value);
        }

        let missing = |tag: &str| syn::Error::new(attr.span(), format!("missing `{}` tag", tag));
        Ok(Self {
            message: message.ok_or_else(|| missing("message"))?,
            labels: labels.ok_or_else(|| missing("labels"))?,
            help,
        })
    }
}

/// The struct to derive [`ErrorKind`] for.
pub struct ErrorKindTarget {
    pub name: Ident,

    /// Names of the struct's fields, which are in scope in the tag expressions.
    fields: Vec<Ident>,
    tags: ErrorTags,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item = input.parse::<ItemStruct>()?;
        let tags = ErrorTags::from_struct(&item)?;
        let fields = match &item.fields {
            Fields::Named(named) => named.named
                .iter()
                .filter_map(|field| field.ident.clone())
                .collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => return Err(syn::Error::new(
                item.ident.span(),
                "`ErrorKind` can only be derived for unit structs or structs with named fields",
            )),
        };

        Ok(Self {
            name: item.ident,
            fields,
            tags,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let fields = &self.fields;
        let ErrorTags { message, labels, help } = &self.tags;
        let help = help.as_ref().map(|help| quote! { builder.set_help(#help); });

        tokens.extend(quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                let Self { #(#fields),* } = self;

                let start = spans.first().map_or(0, |span| span.start);
                let labels = #labels
                    .into_iter()
                    .zip(spans)
                    .map(|(text, span)| {
                        ariadne::Label::new((src_id, span.clone()))
                            .with_color(eqsat_error::EXPR)
                            .with_message(text)
                    });

                let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, start)
                    .with_message(#message)
                    .with_labels(labels);
                #help
                builder.finish()
            }
        });
    }
}
