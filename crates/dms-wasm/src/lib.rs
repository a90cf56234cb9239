// WASM bindings for Daitch-Mokotoff Soundex.
//
// Provides a `WasmDmSoundex` class exported via wasm-bindgen that wraps the
// `DaitchMokotoff` encoder from dms-soundex. Structured results are
// serialized to JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const dm = new WasmDmSoundex();          // folding on
//   dm.encode("Auerbach");                   // => "097400"
//   dm.soundex("Auerbach");                  // => "097400|097500"
//   dm.soundex(null);                        // => null
//   dm.soundex(42);                          // throws: usage error
//   dm.soundexCodes("Auerbach");             // => ["097400", "097500"]
//   dm.analyze("Straßburg");                 // => { cleaned: "strasburg", code: "294795", codes: [...] }
//   WasmDmSoundex.fromRules(text, true);     // custom rule source
//   dm.terminate();                          // optional cleanup

use serde::Serialize;
use wasm_bindgen::prelude::*;

use dms_soundex::{DaitchMokotoff, EncoderOptions, SoundexError};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable view of one name's encoding.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct JsAnalysis {
    cleaned: String,
    code: String,
    codes: Vec<String>,
}

fn build_analysis(dm: &DaitchMokotoff, text: &str) -> JsAnalysis {
    JsAnalysis {
        cleaned: dm.cleanup(text),
        code: dm.encode(text),
        codes: dm.soundex_codes(text),
    }
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn soundex_error_to_js(e: SoundexError) -> JsError {
    JsError::new(&e.to_string())
}

/// Accept a JS string, map null/undefined to `None`, reject everything else.
fn text_arg(value: &JsValue) -> Result<Option<String>, SoundexError> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    value.as_string().map(Some).ok_or_else(|| {
        let kind = value.js_typeof().as_string().unwrap_or_default();
        SoundexError::Usage(format!("expected a string, got {kind}"))
    })
}

// ============================================================================
// WasmDmSoundex
// ============================================================================

/// Daitch-Mokotoff Soundex encoder for WebAssembly.
#[wasm_bindgen]
pub struct WasmDmSoundex {
    dm: DaitchMokotoff,
}

#[wasm_bindgen]
impl WasmDmSoundex {
    /// Create an encoder over the bundled rules.
    ///
    /// - `folding`: fold accented characters during cleanup (default: true)
    #[wasm_bindgen(constructor)]
    pub fn new(folding: Option<bool>) -> WasmDmSoundex {
        WasmDmSoundex {
            dm: DaitchMokotoff::with_folding(folding.unwrap_or(true)),
        }
    }

    /// Create an encoder from a rule source in the line-oriented rule format.
    #[wasm_bindgen(js_name = "fromRules")]
    pub fn from_rules(source: &str, folding: Option<bool>) -> Result<WasmDmSoundex, JsError> {
        let options = EncoderOptions {
            folding: folding.unwrap_or(true),
        };
        let dm = DaitchMokotoff::from_rules_str(source, options).map_err(soundex_error_to_js)?;
        Ok(WasmDmSoundex { dm })
    }

    /// Single code without branching. `null`/`undefined` in, `null` out.
    pub fn encode(&self, value: JsValue) -> Result<Option<String>, JsError> {
        let text = text_arg(&value).map_err(soundex_error_to_js)?;
        Ok(text.map(|t| self.dm.encode(&t)))
    }

    /// All codes joined with `|`. `null`/`undefined` in, `null` out.
    pub fn soundex(&self, value: JsValue) -> Result<Option<String>, JsError> {
        let text = text_arg(&value).map_err(soundex_error_to_js)?;
        Ok(text.map(|t| self.dm.soundex(&t)))
    }

    /// All codes as a JS array.
    #[wasm_bindgen(js_name = "soundexCodes")]
    pub fn soundex_codes(&self, text: &str) -> js_sys::Array {
        self.dm
            .soundex_codes(text)
            .into_iter()
            .map(JsValue::from)
            .collect()
    }

    /// The normalized form the encoder matches rules against.
    pub fn cleanup(&self, text: &str) -> String {
        self.dm.cleanup(text)
    }

    /// Cleaned input, single code and all codes in one object.
    pub fn analyze(&self, text: &str) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&build_analysis(&self.dm, text))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Set whether to fold accented characters during cleanup.
    #[wasm_bindgen(js_name = "setFolding")]
    pub fn set_folding(&mut self, value: bool) {
        self.dm.set_folding(value);
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        DaitchMokotoff::get_version().to_string()
    }

    /// Release resources held by this instance.
    ///
    /// After calling this method, the instance should not be used.
    pub fn terminate(self) {}
}
