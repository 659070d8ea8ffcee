// Console and storage helpers shared by the engine and the demo shell.

use serde::de::DeserializeOwned;

#[cfg(target_arch = "wasm32")]
pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(target_arch = "wasm32")]
pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(msg));
}

// Off wasm there is no console to talk to (unit tests run natively).
#[cfg(not(target_arch = "wasm32"))]
pub fn clog(msg: &str) {
    let _ = msg;
}

#[cfg(not(target_arch = "wasm32"))]
pub fn cwarn(msg: &str) {
    let _ = msg;
}

fn local_storage() -> Option<web_sys::Storage> {
    if !cfg!(target_arch = "wasm32") {
        return None;
    }
    web_sys::window()?.local_storage().ok().flatten()
}

/// Reads and parses a JSON value from `localStorage`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = local_storage()?.get_item(key).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            cwarn(&format!("bad JSON in {key}: {e}"));
            None
        }
    }
}

pub fn format_clock(ms: f64) -> String {
    let secs = (ms / 1000.0).floor() as u64;
    let h = (secs / 3600) % 24;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_clock_wraps_days() {
        assert_eq!(format_clock(0.0), "00:00:00");
        assert_eq!(format_clock(3_723_000.0), "01:02:03");
        assert_eq!(format_clock(86_400_000.0 + 61_000.0), "00:01:01");
    }

    #[test]
    fn load_json_without_browser() {
        assert_eq!(load_json::<u32>("anything"), None);
    }
}
