use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Expr, FnArg, Ident, ItemFn, Result as SynResult, Token, parse::Parse, parse::ParseStream,
    parse_macro_input, spanned::Spanned,
};

/// 测试夹具宏
/// - 展开为 `#[test]`，每次运行前创建全新的 `::zkunit_harness::ZkTest`
/// - 函数最多一个参数，接收夹具（`&mut ZkTest` 或 `&ZkTest`）；无参数时夹具在函数体外层存活
/// - 支持参数：`#[zk_test(config = expr)]`，使用 `ZkTest::with_config(expr)`
/// - 其余属性（如 `#[should_panic]`、`#[ignore]`）保留在生成的测试函数上
#[proc_macro_attribute]
pub fn zk_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as ZkTestAttrConfig);
    let func = parse_macro_input!(item as ItemFn);

    expand_zk_test(cfg, func)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_zk_test(cfg: ZkTestAttrConfig, func: ItemFn) -> SynResult<TokenStream2> {
    let sig = &func.sig;

    if let Some(token) = &sig.asyncness {
        return Err(syn::Error::new(token.span(), "#[zk_test] does not support async fn"));
    }
    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new(
            sig.generics.span(),
            "#[zk_test] does not support generic functions",
        ));
    }
    if sig.inputs.len() > 1 {
        return Err(syn::Error::new(
            sig.inputs.span(),
            "#[zk_test] expects at most one parameter: the fixture",
        ));
    }
    if let Some(FnArg::Receiver(recv)) = sig.inputs.first() {
        return Err(syn::Error::new(recv.span(), "#[zk_test] only on free functions"));
    }

    let setup = match cfg.config {
        Some(expr) => quote! { ::zkunit_harness::ZkTest::with_config(#expr) },
        None => quote! { ::zkunit_harness::ZkTest::setup() },
    };

    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = func;
    let name = &sig.ident;
    let output = &sig.output;
    let inputs = &sig.inputs;

    // 原函数体下沉为内部函数，`return` 与 `?` 的语义保持不变
    let call = if inputs.is_empty() {
        quote! {
            let __zk_fixture = #setup;
            __zk_inner()
        }
    } else {
        quote! {
            let mut __zk_fixture = #setup;
            __zk_inner(&mut __zk_fixture)
        }
    };

    Ok(quote! {
        #(#attrs)*
        #[test]
        #vis fn #name() #output {
            fn __zk_inner(#inputs) #output #block
            #call
        }
    })
}

#[derive(Default)]
struct ZkTestAttrConfig {
    config: Option<Expr>,
}

impl Parse for ZkTestAttrConfig {
    fn parse(input: ParseStream) -> SynResult<Self> {
        let mut cfg = ZkTestAttrConfig::default();
        if input.is_empty() {
            return Ok(cfg);
        }

        let key: Ident = input.parse()?;
        if key != "config" {
            return Err(syn::Error::new(
                key.span(),
                "unsupported key, expected `config = <expr>`",
            ));
        }
        input.parse::<Token![=]>()?;
        cfg.config = Some(input.parse()?);

        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after `config = <expr>`"));
        }
        Ok(cfg)
    }
}
