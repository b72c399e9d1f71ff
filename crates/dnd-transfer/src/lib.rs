//! DnD Transfer Utilities
//!
//! Typed payloads over the browser's native HTML5 drag-and-drop.
//! Payloads travel as JSON in the `text/plain` transfer slot; decoding
//! fails closed, so a malformed drop is simply ineffective.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::DragEvent;

/// Transfer format used for all payloads
const TRANSFER_FORMAT: &str = "text/plain";

/// Encode a payload for the transfer slot
pub fn encode<T: Serialize>(payload: &T) -> Option<String> {
    serde_json::to_string(payload).ok()
}

/// Decode a transfer string into a payload
///
/// Any failure (empty string, malformed JSON, missing fields) yields `None`.
pub fn decode<T: DeserializeOwned>(data: &str) -> Option<T> {
    if data.is_empty() {
        return None;
    }
    serde_json::from_str(data).ok()
}

/// Write a payload into a drag event's transfer data
///
/// Call from a `dragstart` handler. Failure to encode or to reach the
/// transfer object leaves the drag without a payload, which the drop
/// side treats as a no-op.
pub fn write_payload<T: Serialize>(ev: &DragEvent, payload: &T) {
    let Some(transfer) = ev.data_transfer() else {
        return;
    };
    let Some(data) = encode(payload) else {
        web_sys::console::warn_1(&"[DND] payload encode failed".into());
        return;
    };
    if transfer.set_data(TRANSFER_FORMAT, &data).is_err() {
        web_sys::console::warn_1(&"[DND] set_data failed".into());
    }
}

/// Read a payload back out of a drop event's transfer data
///
/// Call from a `drop` handler. Returns `None` when no transfer data is
/// present or it does not decode to `T`.
pub fn read_payload<T: DeserializeOwned>(ev: &DragEvent) -> Option<T> {
    let transfer = ev.data_transfer()?;
    let data = transfer.get_data(TRANSFER_FORMAT).ok()?;
    decode(&data)
}

/// Passive dragover handler that allows dropping
///
/// The browser rejects drops by default; `prevent_default` on dragover is
/// what makes the subsequent `drop` event fire. No other side effects.
pub fn allow_drop(ev: &DragEvent) {
    ev.prevent_default();
}
