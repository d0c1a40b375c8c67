// device.rs - Device capability probe
//
// Read once when a viewer is created and kept for its lifetime. Every
// signal is optional: a missing one is logged and left as None, never an
// error for the caller. Only the viewport width feeds a decision (mobile
// density cap); the rest is shown in the diagnostics panel.

use serde::Serialize;

use crate::perf::MOBILE_MAX_WIDTH;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProfile {
    pub viewport_width: Option<u32>,
    pub cores: Option<u32>,
    pub memory_gb: Option<f64>,
    pub gpu: Option<String>,
}

impl DeviceProfile {
    /// Unknown width counts as desktop
    pub fn is_mobile(&self) -> bool {
        self.viewport_width.is_some_and(|w| w <= MOBILE_MAX_WIDTH)
    }

    pub fn with_viewport(mut self, width: u32) -> Self {
        self.viewport_width = Some(width);
        self
    }
}

fn keep<T>(signal: &str, r: crate::error::Result<T>) -> Option<T> {
    match r {
        Ok(v) => Some(v),
        Err(e) => {
            log::debug!("{} not available: {}", signal, e);
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod host {
    use js_sys::{Array, Function, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    use crate::error::{Result, SmearError};

    fn prop(target: &JsValue, key: &'static str) -> Result<JsValue> {
        match Reflect::get(target, &JsValue::from_str(key)) {
            Ok(v) if !v.is_undefined() && !v.is_null() => Ok(v),
            _ => Err(SmearError::Probe(key)),
        }
    }

    fn call(target: &JsValue, method: &'static str, args: &[JsValue]) -> Result<JsValue> {
        let f: Function = prop(target, method)?.dyn_into().map_err(|_| SmearError::Probe(method))?;
        let list: Array = args.iter().collect();
        match Reflect::apply(&f, target, &list) {
            Ok(v) if !v.is_undefined() && !v.is_null() => Ok(v),
            _ => Err(SmearError::Probe(method)),
        }
    }

    fn number(target: &JsValue, key: &'static str) -> Result<f64> {
        prop(target, key)?.as_f64().ok_or(SmearError::Probe(key))
    }

    pub fn viewport_width() -> Result<u32> {
        number(&js_sys::global(), "innerWidth").map(|w| w as u32)
    }

    pub fn cores() -> Result<u32> {
        let nav = prop(&js_sys::global(), "navigator")?;
        number(&nav, "hardwareConcurrency").map(|c| c as u32)
    }

    pub fn memory_gb() -> Result<f64> {
        let nav = prop(&js_sys::global(), "navigator")?;
        number(&nav, "deviceMemory")
    }

    /// Unmasked renderer string from a throwaway WebGL context
    pub fn gpu() -> Result<String> {
        let document = prop(&js_sys::global(), "document")?;
        let canvas = call(&document, "createElement", &[JsValue::from_str("canvas")])?;
        let gl = call(&canvas, "getContext", &[JsValue::from_str("webgl")])
            .or_else(|_| call(&canvas, "getContext", &[JsValue::from_str("experimental-webgl")]))?;
        let info = call(&gl, "getExtension", &[JsValue::from_str("WEBGL_debug_renderer_info")])?;
        let renderer = prop(&info, "UNMASKED_RENDERER_WEBGL")?;
        call(&gl, "getParameter", &[renderer])?
            .as_string()
            .ok_or(SmearError::Probe("UNMASKED_RENDERER_WEBGL"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use crate::error::{Result, SmearError};

    pub fn viewport_width() -> Result<u32> {
        Err(SmearError::Probe("innerWidth"))
    }

    pub fn cores() -> Result<u32> {
        std::thread::available_parallelism()
            .map(|n| n.get() as u32)
            .map_err(|_| SmearError::Probe("hardwareConcurrency"))
    }

    pub fn memory_gb() -> Result<f64> {
        Err(SmearError::Probe("deviceMemory"))
    }

    pub fn gpu() -> Result<String> {
        Err(SmearError::Probe("UNMASKED_RENDERER_WEBGL"))
    }
}

/// Read whatever the host exposes
pub fn probe() -> DeviceProfile {
    let profile = DeviceProfile {
        viewport_width: keep("viewport width", host::viewport_width()),
        cores: keep("core count", host::cores()),
        memory_gb: keep("device memory", host::memory_gb()),
        gpu: keep("gpu", host::gpu()),
    };
    log::debug!("device profile {:?}", profile);
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SmearError;

    #[test]
    fn mobile_threshold() {
        assert!(DeviceProfile::default().with_viewport(375).is_mobile());
        assert!(DeviceProfile::default().with_viewport(768).is_mobile());
        assert!(!DeviceProfile::default().with_viewport(769).is_mobile());
        assert!(!DeviceProfile::default().is_mobile());
    }

    #[test]
    fn missing_signals_become_none() {
        assert_eq!(keep::<u32>("x", Err(SmearError::Probe("x"))), None);
        assert_eq!(keep("x", Ok(4u32)), Some(4));
    }

    #[test]
    fn native_probe_does_not_fail() {
        let p = probe();
        assert_eq!(p.viewport_width, None);
        assert!(p.cores.is_none_or(|c| c >= 1));
        assert!(!p.is_mobile());
    }
}
