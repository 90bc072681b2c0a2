use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/firebase_bridge.js")]
extern "C" {
    /// Returns an opaque `{ auth, db }` handle
    #[wasm_bindgen(js_name = initFirebase, catch)]
    pub fn init_firebase(options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = signInAnonymously, catch)]
    pub async fn sign_in_anonymously(handle: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = signInWithCustomToken, catch)]
    pub async fn sign_in_with_custom_token(handle: &JsValue, token: &str)
        -> Result<JsValue, JsValue>;

    /// Returns the unsubscribe function
    #[wasm_bindgen(js_name = onAuthStateChanged, catch)]
    pub fn on_auth_state_changed(
        handle: &JsValue,
        callback: &Closure<dyn FnMut(JsValue)>,
    ) -> Result<js_sys::Function, JsValue>;

    /// Returns the unsubscribe function
    #[wasm_bindgen(js_name = subscribeCollection, catch)]
    pub fn subscribe_collection(
        handle: &JsValue,
        segments: &js_sys::Array,
        on_next: &Closure<dyn FnMut(JsValue)>,
        on_error: &Closure<dyn FnMut(String)>,
    ) -> Result<js_sys::Function, JsValue>;

    /// Resolves to the id of the new document
    #[wasm_bindgen(js_name = addDocument, catch)]
    pub async fn add_document(
        handle: &JsValue,
        segments: &js_sys::Array,
        fields: JsValue,
        timestamp_fields: js_sys::Array,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = deleteDocument, catch)]
    pub async fn delete_document(handle: &JsValue, segments: &js_sys::Array)
        -> Result<JsValue, JsValue>;
}

pub fn string_array<S: AsRef<str>>(items: &[S]) -> js_sys::Array {
    items
        .iter()
        .map(|s| JsValue::from_str(s.as_ref()))
        .collect()
}

/// Message of a rejected SDK promise (FirebaseError has `message`)
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

/// serde → plain JS objects (not `Map`), as the SDK expects
pub fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}
