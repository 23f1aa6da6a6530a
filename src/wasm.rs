// WebAssembly bindings for a web or mobile UI shell
use crate::config::Config;
use crate::sync::{NullView, Synchronizer};
use crate::units::{self, Unit};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct CapConvertWasm {
    sync: Synchronizer,
}

fn parse_unit(unit: &str) -> Result<Unit, JsValue> {
    unit.parse::<Unit>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
impl CapConvertWasm {
    /// Create a converter screen for the given locale tag (e.g. navigator.language)
    /// config_content: optional TOML with [locale]/[format] overrides
    #[wasm_bindgen(constructor)]
    pub fn new(locale_tag: &str, config_content: Option<String>) -> Result<CapConvertWasm, JsValue> {
        let config = match config_content {
            Some(content) => Config::load_from_str(&content)
                .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?,
            None => Config::empty(),
        };

        let locale = config
            .resolve_locale(Some(locale_tag))
            .map_err(|e| JsValue::from_str(&format!("Failed to resolve locale: {}", e)))?;

        Ok(Self {
            sync: Synchronizer::new(locale),
        })
    }

    /// Feed a text change from the field of `unit` ("nF", "micro", ...)
    /// Returns JSON: {"status": "updated", "writes": [{"unit", "text", "cursor"}]},
    /// {"status": "ignored"} or {"status": "skipped"}
    /// The shell applies the writes itself, so no view is attached here.
    #[wasm_bindgen]
    pub fn on_text_changed(&self, unit: &str, text: &str) -> Result<String, JsValue> {
        let unit = parse_unit(unit)?;
        let outcome = self.sync.on_text_changed(unit, text, &mut NullView);

        serde_json::to_string(&outcome)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize outcome: {}", e)))
    }

    #[wasm_bindgen]
    pub fn set_focus(&self, unit: Option<String>) -> Result<(), JsValue> {
        let unit = unit.as_deref().map(parse_unit).transpose()?;
        self.sync.set_focus(unit);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_cursor(&self, unit: &str, offset: usize) -> Result<(), JsValue> {
        self.sync.set_cursor(parse_unit(unit)?, offset);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn field_text(&self, unit: &str) -> Result<String, JsValue> {
        Ok(self.sync.field_text(parse_unit(unit)?))
    }

    /// Raw conversion, returns JSON {"nano", "pico", "micro", "milli"}
    #[wasm_bindgen]
    pub fn convert(&self, value: f64, unit: &str) -> Result<String, JsValue> {
        let conversion = units::convert(value, parse_unit(unit)?);
        serde_json::to_string(&conversion)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize conversion: {}", e)))
    }

    #[wasm_bindgen]
    pub fn decimal_separator(&self) -> String {
        self.sync.locale().decimal_separator.to_string()
    }

    #[wasm_bindgen]
    pub fn grouping_separator(&self) -> String {
        self.sync.locale().grouping_separator.to_string()
    }
}
