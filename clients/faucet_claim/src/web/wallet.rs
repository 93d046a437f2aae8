use std::str::FromStr;

use anchor_lang::solana_program::pubkey::Pubkey;
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::ClaimError;
use crate::ports::WalletProvider;
use crate::utils::{SignedTransaction, UnsignedTransaction};

use super::fetch::js_error_text;

/// Global the wallet extensions inject
const PROVIDER_GLOBAL: &str = "solana";

/**
 * Phantom-compatible provider found at `window.solana`
 *
 * Looked up on every call: extensions may inject after the page loaded.
 * Signing goes through the provider `request` API only:
 * `request({ method: "signTransaction", params: { message } })` with the
 * base58 message bytes, resolving to `{ signature }` in base58. Phantom and
 * Solflare expose this. Providers that only offer
 * `signTransaction(transaction)` over a web3.js object are not supported and
 * fail at signing with a `SigningRejected` error naming the missing method.
 */
pub(super) struct BrowserWallet;

fn provider() -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(PROVIDER_GLOBAL)).ok()?;
    (!value.is_undefined() && !value.is_null()).then_some(value)
}

fn get(target: &JsValue, key: &str) -> Result<JsValue, String> {
    Reflect::get(target, &JsValue::from_str(key)).map_err(|e| js_error_text(&e))
}

/// Call `target[method](...args)` and await the returned promise
async fn call_async(target: &JsValue, method: &str, args: &[JsValue]) -> Result<JsValue, String> {
    let function: Function = get(target, method)?
        .dyn_into()
        .map_err(|_| format!("provider.{} is not a function", method))?;

    let returned = match args {
        [] => function.call0(target),
        [a] => function.call1(target, a),
        _ => return Err(format!("provider.{}: unsupported arity", method)),
    }
    .map_err(|e| js_error_text(&e))?;

    let promise = Promise::resolve(&returned);
    JsFuture::from(promise).await.map_err(|e| js_error_text(&e))
}

fn public_key_string(value: &JsValue) -> Result<String, String> {
    let key = get(value, "publicKey")?;
    if key.is_undefined() || key.is_null() {
        return Err("provider exposed no publicKey".to_string());
    }
    let to_string: Function = get(&key, "toString")?
        .dyn_into()
        .map_err(|_| "publicKey has no toString".to_string())?;
    to_string
        .call0(&key)
        .map_err(|e| js_error_text(&e))?
        .as_string()
        .ok_or_else(|| "publicKey.toString() returned a non-string".to_string())
}

impl WalletProvider for BrowserWallet {
    fn is_available(&self) -> bool {
        provider().is_some()
    }

    fn is_connected(&self) -> bool {
        provider()
            .and_then(|p| get(&p, "isConnected").ok())
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    async fn connect(&self) -> Result<Pubkey, ClaimError> {
        let provider = provider().ok_or(ClaimError::WalletNotFound)?;
        call_async(&provider, "connect", &[])
            .await
            .map_err(ClaimError::ConnectionRejected)?;

        let address = public_key_string(&provider).map_err(ClaimError::ConnectionRejected)?;
        Pubkey::from_str(&address).map_err(|e| ClaimError::ConnectionRejected(e.to_string()))
    }

    async fn sign_transaction(
        &self,
        transaction: UnsignedTransaction,
    ) -> Result<SignedTransaction, ClaimError> {
        let provider = provider().ok_or(ClaimError::WalletNotFound)?;
        if !get(&provider, "request").map(|f| f.is_function()).unwrap_or(false) {
            return Err(ClaimError::SigningRejected(
                "wallet has no request API for signTransaction".to_string(),
            ));
        }
        let message = bs58::encode(transaction.message_bytes()).into_string();

        let params = Object::new();
        let request = Object::new();
        let set = |target: &Object, key: &str, value: &JsValue| {
            Reflect::set(target, &JsValue::from_str(key), value)
                .map(|_| ())
                .map_err(|e| ClaimError::SigningRejected(js_error_text(&e)))
        };
        set(&params, "message", &JsValue::from_str(&message))?;
        set(&request, "method", &JsValue::from_str("signTransaction"))?;
        set(&request, "params", &params)?;

        let reply = call_async(&provider, "request", &[request.into()])
            .await
            .map_err(ClaimError::SigningRejected)?;
        let signature = get(&reply, "signature")
            .map_err(ClaimError::SigningRejected)?
            .as_string()
            .ok_or_else(|| ClaimError::SigningRejected("wallet returned no signature".to_string()))?;

        SignedTransaction::from_fee_payer_signature(transaction, &signature)
    }
}
