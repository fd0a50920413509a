//! Financial export files offered as browser downloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! The export endpoint returns rows as JSON; the console re-serializes them
//! and hands the browser a Blob URL. Blob/anchor glue is hydrate-only.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use wire::{ExportKind, ExportResponse};

/// Download name for an export, e.g. `commissions_export.json`.
pub fn export_file_name(kind: ExportKind) -> String {
    format!("{}_export.json", kind.as_str())
}

/// Pretty-printed export rows.
///
/// # Errors
///
/// Returns the serializer error message.
pub fn export_contents(export: &ExportResponse) -> Result<String, String> {
    serde_json::to_string_pretty(&export.export_data).map_err(|e| e.to_string())
}

/// Status line shown after an export completes.
pub fn export_summary(kind: ExportKind, export: &ExportResponse) -> String {
    let rows = if export.total_records == 0 { export.export_data.len() as u64 } else { export.total_records };
    format!("Exported {rows} {} records", kind.as_str().trim_end_matches('s'))
}

/// Prompt the browser to save `contents` as `file_name`.
///
/// # Errors
///
/// Returns a message when the document or Blob APIs are unavailable.
pub fn offer_download(file_name: &str, contents: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "document unavailable".to_owned())?;
        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("application/json");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|e| format!("{e:?}"))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;
        let anchor = document
            .create_element("a")
            .map_err(|e| format!("{e:?}"))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor element unavailable".to_owned())?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        let _ = web_sys::Url::revoke_object_url(&url);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (file_name, contents);
        Err("downloads are only available in the browser".to_owned())
    }
}
