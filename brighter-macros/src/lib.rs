use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemFn, parse_macro_input};

/// Multiversions a sample kernel over the SIMD targets brighter ships for.
///
/// Expands to `#[multiversion::multiversion(targets(...))]`, so the crate using
/// it must depend on `multiversion` directly.
///
/// # Example
///
/// ```ignore
/// use brighter_macros::simd_targets;
///
/// #[simd_targets]
/// fn add_offset(samples: &mut [u8], offset: u8) {
///     samples.iter_mut().for_each(|s| *s = s.wrapping_add(offset));
/// }
/// ```
#[proc_macro_attribute]
pub fn simd_targets(_attr: TokenStream, input: TokenStream) -> TokenStream {
    let func = parse_macro_input!(input as ItemFn);

    // debug builds only carry the baselines, compile times add up quickly
    #[cfg(debug_assertions)]
    let expanded = quote! {
        #[multiversion::multiversion(targets(
            "x86_64+sse2",
            "aarch64+neon",
        ))]
        #func
    };

    #[cfg(not(debug_assertions))]
    let expanded = quote! {
        #[multiversion::multiversion(targets(
            // byte lanes: 64 with avx512bw, 32 with avx2, 16 below
            "x86_64+avx512f+avx512bw+avx512vl",
            "x86_64+avx2",
            "x86_64+sse4.1",
            "x86_64+sse2",
            "aarch64+neon",
        ))]
        #func
    };

    TokenStream::from(expanded)
}
