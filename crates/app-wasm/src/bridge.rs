//! JavaScript bridge for the control panel
//!
//! Messages are passed as JSON strings in the `detail` of CustomEvents
//! dispatched on the window object.

use showcase_ipc::{UiToViewer, ViewerToUi, UI_TO_VIEWER_EVENT, VIEWER_TO_UI_EVENT};
use std::cell::RefCell;
use std::collections::VecDeque;
use wasm_bindgen::prelude::*;

thread_local! {
    /// Queue of messages received from the UI
    static MESSAGE_QUEUE: RefCell<VecDeque<UiToViewer>> = RefCell::new(VecDeque::new());
}

/// Install the window event listener for UI -> viewer messages
pub fn init_bridge() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;

    let closure = Closure::wrap(Box::new(move |event: web_sys::CustomEvent| {
        let Some(detail) = event.detail().as_string() else {
            return;
        };
        match showcase_ipc::decode(&detail) {
            Ok(msg) => MESSAGE_QUEUE.with(|queue| queue.borrow_mut().push_back(msg)),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to parse UI message: {}", e).into());
            }
        }
    }) as Box<dyn FnMut(_)>);

    window.add_event_listener_with_callback(UI_TO_VIEWER_EVENT, closure.as_ref().unchecked_ref())?;

    // Keep the closure alive
    closure.forget();

    web_sys::console::log_1(&"Showcase bridge initialized".into());
    Ok(())
}

/// Poll for the next message from the UI (non-blocking)
pub fn poll_ui_message() -> Option<UiToViewer> {
    MESSAGE_QUEUE.with(|queue| queue.borrow_mut().pop_front())
}

/// Send a message to the UI. Failures are logged to the console.
pub fn send_to_ui(msg: &ViewerToUi) {
    if let Err(e) = dispatch(msg) {
        web_sys::console::error_1(&e);
    }
}

fn dispatch(msg: &ViewerToUi) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let json = showcase_ipc::encode(msg)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize viewer message: {}", e)))?;

    let init = web_sys::CustomEventInit::new();
    init.set_detail(&JsValue::from_str(&json));

    let event = web_sys::CustomEvent::new_with_event_init_dict(VIEWER_TO_UI_EVENT, &init)?;
    window.dispatch_event(&event)?;
    Ok(())
}
