use std::rc::Rc;

use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::config::ClaimConfig;
use crate::ledger::RpcLedger;
use crate::workflow::ClaimWorkflow;

mod backend;
mod console;
mod dom;
mod fetch;
mod probe;
mod rpc;
mod wallet;

use backend::FetchBackend;
use dom::DomUi;
use probe::FetchProbe;
use rpc::FetchTransport;
use wallet::BrowserWallet;

/// Page global holding an optional JSON override of `ClaimConfig`
const CONFIG_GLOBAL: &str = "faucetClaimConfig";

type BrowserWorkflow = ClaimWorkflow<BrowserWallet, RpcLedger<FetchTransport>, FetchBackend, DomUi>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console::init_tracing();

    let config = config_from_page();
    let ui = DomUi::bind()?;
    let button = ui.button().clone();

    let ledger = RpcLedger::new(FetchTransport, &config);
    let workflow: Rc<BrowserWorkflow> =
        Rc::new(ClaimWorkflow::new(config, BrowserWallet, ledger, FetchBackend, ui));

    let on_click = {
        let workflow = workflow.clone();
        Closure::wrap(Box::new(move || {
            let workflow = workflow.clone();
            spawn_local(async move {
                let outcome = workflow.trigger().await;
                info!(?outcome, "trigger settled");
            });
        }) as Box<dyn FnMut()>)
    };
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    spawn_local(async move {
        fetch::sleep(workflow.config().ad_probe_delay_ms).await;
        workflow.run_ad_probe(&FetchProbe).await;
    });

    Ok(())
}

fn config_from_page() -> ClaimConfig {
    let raw = web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str(CONFIG_GLOBAL)).ok())
        .and_then(|v| v.as_string());

    match raw {
        Some(json) => ClaimConfig::from_json(&json).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring invalid page config");
            ClaimConfig::default()
        }),
        None => ClaimConfig::default(),
    }
}
