use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// Browser-level save of a same-origin asset: a synthetic anchor with
/// the `download` attribute, clicked once and never attached to the
/// page.
pub fn save_file(path: &str, filename: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let anchor: HtmlAnchorElement = document.create_element("a").unwrap().unchecked_into();
    anchor.set_href(path);
    anchor.set_download(filename);
    anchor.click();
}
