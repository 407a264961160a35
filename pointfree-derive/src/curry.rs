//! Expansion of the `curry!` macro.
//!
//! Two call forms are accepted:
//!
//! 1. A closure literal: `curry!(|a, b, c| body)`. The arity is read off the
//!    closure's parameter list.
//! 2. A function path plus an integer literal: `curry!(add, 2)`. A bare
//!    path carries no arity information, so it must be spelled out.
//!
//! The expansion is a chain of `move` closures. Every link clones the shared
//! callee and the arguments collected so far into the next link, so any
//! intermediate application can be called again with different arguments.
//! State is shared through `Arc`, which keeps the chain `Send + Sync` when
//! the callee and the arguments are.
//!
//! For `curry!(|a, b, c| body)` the generated code looks like:
//!
//! ```text
//! {
//!     let __pointfree_callee = Arc::new(|a, b, c| body);
//!     move |__pointfree_argument_0| {
//!         let __pointfree_callee = Arc::clone(&__pointfree_callee);
//!         let __pointfree_argument_0 = Arc::new(__pointfree_argument_0);
//!         move |__pointfree_argument_1| {
//!             let __pointfree_callee = Arc::clone(&__pointfree_callee);
//!             let __pointfree_argument_0 = Arc::clone(&__pointfree_argument_0);
//!             let __pointfree_argument_1 = Arc::new(__pointfree_argument_1);
//!             move |__pointfree_argument_2| {
//!                 __pointfree_callee(
//!                     Arc::unwrap_or_clone(Arc::clone(&__pointfree_argument_0)),
//!                     Arc::unwrap_or_clone(Arc::clone(&__pointfree_argument_1)),
//!                     __pointfree_argument_2,
//!                 )
//!             }
//!         }
//!     }
//! }
//! ```

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, ExprLit, Lit, Token};

const MINIMUM_ARITY: usize = 2;

/// A parsed `curry!` invocation: the expression to call and how many
/// arguments it takes.
struct CurryRequest {
    callee: TokenStream,
    arity: usize,
}

impl Parse for CurryRequest {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let expressions = Punctuated::<Expr, Token![,]>::parse_terminated(input)?;
        let mut expressions = expressions.into_iter();

        match (expressions.next(), expressions.next(), expressions.next()) {
            (Some(Expr::Closure(closure)), None, None) => {
                let arity = closure.inputs.len();
                check_arity(arity, closure.span())?;
                Ok(Self {
                    callee: quote! { #closure },
                    arity,
                })
            }
            (Some(Expr::Path(path)), Some(arity_expression), None) => {
                let arity = parse_arity(&arity_expression)?;
                check_arity(arity, path.span())?;
                Ok(Self {
                    callee: quote! { #path },
                    arity,
                })
            }
            (Some(Expr::Path(path)), None, None) => Err(syn::Error::new(
                path.span(),
                "curry! with a function path needs an explicit arity: curry!(function, 2)",
            )),
            (Some(other), _, _) => Err(syn::Error::new(
                other.span(),
                "curry! expects a closure or a function path followed by its arity",
            )),
            (None, _, _) => Err(syn::Error::new(
                Span::call_site(),
                "curry! expects a closure or a function path followed by its arity",
            )),
        }
    }
}

fn parse_arity(expression: &Expr) -> syn::Result<usize> {
    match expression {
        Expr::Lit(ExprLit {
            lit: Lit::Int(literal),
            ..
        }) => literal.base10_parse::<usize>(),
        other => Err(syn::Error::new(
            other.span(),
            "curry! expects an integer literal for the arity",
        )),
    }
}

fn check_arity(arity: usize, span: Span) -> syn::Result<()> {
    if arity < MINIMUM_ARITY {
        return Err(syn::Error::new(
            span,
            "curry! needs a function of at least 2 arguments",
        ));
    }
    Ok(())
}

/// Expands a `curry!` invocation, turning parse failures into
/// `compile_error!` output.
pub fn expand(input: TokenStream) -> TokenStream {
    match syn::parse2::<CurryRequest>(input) {
        Ok(request) => generate(&request),
        Err(error) => error.to_compile_error(),
    }
}

fn generate(request: &CurryRequest) -> TokenStream {
    let parameters: Vec<Ident> = (0..request.arity)
        .map(|index| format_ident!("__pointfree_argument_{}", index))
        .collect();
    let callee = &request.callee;
    let chain = link(&parameters, 0);

    quote! {
        {
            let __pointfree_callee = ::std::sync::Arc::new(#callee);
            #chain
        }
    }
}

/// Builds the closure that receives `parameters[position]`, recursing until
/// the last parameter, whose closure finally invokes the callee.
fn link(parameters: &[Ident], position: usize) -> TokenStream {
    let current = &parameters[position];
    let collected = &parameters[..position];

    if position + 1 == parameters.len() {
        return quote! {
            move |#current| {
                __pointfree_callee(
                    #(
                        ::std::sync::Arc::unwrap_or_clone(::std::sync::Arc::clone(&#collected)),
                    )*
                    #current
                )
            }
        };
    }

    let next = link(parameters, position + 1);
    quote! {
        move |#current| {
            let __pointfree_callee = ::std::sync::Arc::clone(&__pointfree_callee);
            #( let #collected = ::std::sync::Arc::clone(&#collected); )*
            let #current = ::std::sync::Arc::new(#current);
            #next
        }
    }
}
