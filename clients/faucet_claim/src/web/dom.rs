use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlAnchorElement, HtmlButtonElement, HtmlElement, HtmlInputElement};

use crate::constants::*;
use crate::event::Status;
use crate::ports::UiPort;

/// Status link styling, matches the page theme
const LINK_STYLE: &str = "color: var(--neon-end);";

/// `UiPort` over the three page elements
pub(super) struct DomUi {
    document: Document,
    button: HtmlButtonElement,
    input: HtmlInputElement,
    message: HtmlElement,
}

fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("#{} has an unexpected element type", id)))
}

impl DomUi {
    pub(super) fn bind() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        Ok(Self {
            button: element(&document, CLAIM_BUTTON_ID)?,
            input: element(&document, WALLET_ADDRESS_ID)?,
            message: element(&document, MESSAGE_ID)?,
            document,
        })
    }

    pub(super) fn button(&self) -> &HtmlButtonElement {
        &self.button
    }

    fn append_link(&self, href: &str, text: &str) -> Result<(), JsValue> {
        let anchor: HtmlAnchorElement = self.document.create_element("a")?.dyn_into()?;
        anchor.set_href(href);
        anchor.set_target("_blank");
        anchor.set_text_content(Some(text));
        anchor.set_attribute("style", LINK_STYLE)?;

        self.message.append_child(&self.document.create_text_node(" "))?;
        self.message.append_child(&anchor)?;
        Ok(())
    }
}

impl UiPort for DomUi {
    fn recipient_address(&self) -> String {
        self.input.value()
    }

    fn report(&self, status: &Status) {
        self.message.set_text_content(Some(&status.text));
        self.message.set_class_name(status.kind.css_class());
        if let Some(link) = &status.link {
            if let Err(e) = self.append_link(&link.href, &link.text) {
                web_sys::console::error_1(&e);
            }
        }
    }

    fn set_busy(&self, busy: bool) {
        self.button.set_disabled(busy);
        let label = if busy { LABEL_PROCESSING } else { LABEL_CLAIM };
        self.button.set_text_content(Some(label));
    }

    fn show_connected(&self, address: &str) {
        self.input.set_value(address);
        self.input.set_disabled(true);
        self.button.set_text_content(Some(LABEL_CLAIM));
    }

    fn block_claims(&self) {
        self.button.set_disabled(true);
        self.button.set_text_content(Some(LABEL_AD_BLOCKED));
    }
}
