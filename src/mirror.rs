use std::sync::Arc;

use parking_lot::Mutex;

/// One-way copy of the serialized drawing into a named external field.
///
/// Host code reads the value through [`FieldMirror::handle`], which may be
/// moved to other threads. On the web the value is also written to the
/// `<input>` or `<textarea>` with the same id.
#[derive(Debug, Clone)]
pub struct FieldMirror {
    field_id: String,
    value: Arc<Mutex<String>>,
}

impl FieldMirror {
    /// Mirror into `field_id`. A leading `#` is stripped.
    pub fn new(field_id: &str) -> Self {
        let field_id = field_id.strip_prefix('#').unwrap_or(field_id);
        Self {
            field_id: field_id.to_owned(),
            value: Arc::new(Mutex::new(String::new())),
        }
    }

    pub fn field_id(&self) -> &str {
        &self.field_id
    }

    pub fn value(&self) -> String {
        self.value.lock().clone()
    }

    /// Shared handle to the mirrored value
    pub fn handle(&self) -> Arc<Mutex<String>> {
        self.value.clone()
    }

    pub fn sync(&self, json: &str) {
        {
            let mut value = self.value.lock();
            value.clear();
            value.push_str(json);
        }

        #[cfg(target_arch = "wasm32")]
        write_dom_field(&self.field_id, json);
    }
}

#[cfg(target_arch = "wasm32")]
fn write_dom_field(field_id: &str, json: &str) {
    use eframe::wasm_bindgen::JsCast as _;

    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(field_id))
    else {
        log::debug!("mirror field #{field_id} not found");
        return;
    };

    match element.dyn_into::<web_sys::HtmlInputElement>() {
        Ok(input) => input.set_value(json),
        Err(element) => match element.dyn_into::<web_sys::HtmlTextAreaElement>() {
            Ok(textarea) => textarea.set_value(json),
            Err(_) => log::warn!("mirror field #{field_id} is not an input or textarea"),
        },
    }
}
