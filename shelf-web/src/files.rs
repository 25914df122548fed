//! Reading picked files out of `<input type="file">` elements

use shelf_common::FileSelection;
use tracing::error;
use wasm_bindgen_futures_x::JsFuture;
use wasm_bindgen_x::JsCast;

fn file_input(input_id: &str) -> Option<web_sys_x::HtmlInputElement> {
    let document = web_sys_x::window()?.document()?;
    document
        .get_element_by_id(input_id)?
        .dyn_into::<web_sys_x::HtmlInputElement>()
        .ok()
}

/// First file picked in the input with this id, read fully into memory.
///
/// Returns `None` when nothing is selected or the read fails.
pub async fn read_selected_file(input_id: &str) -> Option<FileSelection> {
    let file = file_input(input_id)?.files()?.get(0)?;

    let buffer = match JsFuture::from(file.array_buffer()).await {
        Ok(buffer) => buffer,
        Err(e) => {
            error!("Failed to read {}: {e:?}", file.name());
            return None;
        }
    };
    let bytes = js_sys_x::Uint8Array::new(&buffer).to_vec();

    Some(FileSelection::new(file.name(), file.type_(), bytes))
}
