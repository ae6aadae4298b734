use wasm_bindgen::prelude::*;

// This allows us to access console.log / console.error from JS
#[wasm_bindgen]
extern "C" {
    // Use `js_namespace` to bind `console.log(..)` instead of just `log(..)`
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    pub fn error(s: &str);
}

// Note: the console_log!/console_error! macros are defined in lib.rs
