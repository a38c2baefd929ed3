//! Browser download of the PDF balance reports

use gloo::file::{Blob, ObjectUrl};
use shared::PartyKind;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

pub const EXPORT_SUCCESS_MESSAGE: &str = "Report exported successfully";
pub const EXPORT_FAILURE_MESSAGE: &str = "Failed to export report";

/// Fetch the report for `kind` and hand it to the browser as `<kind>s_report.pdf`
pub async fn export_report(api_client: &ApiClient, kind: PartyKind) -> Result<(), String> {
    let bytes = api_client.export_pdf(kind).await?;
    Logger::info_with_component("export", &format!("Downloaded {} report, {} bytes", kind.plural(), bytes.len()));
    save_bytes(&bytes, "application/pdf", &kind.report_file_name())
}

/// Offer `bytes` as a file download through a temporary anchor.
///
/// The anchor is detached and the object URL revoked before returning.
pub fn save_bytes(bytes: &[u8], mime_type: &str, file_name: &str) -> Result<(), String> {
    let blob = Blob::new_with_options(bytes, Some(mime_type));
    let url = ObjectUrl::from(blob);

    let document = gloo::utils::document();
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "Failed to create download link".to_string())?
        .dyn_into()
        .map_err(|_| "Download link is not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    gloo::utils::body()
        .append_child(&anchor)
        .map_err(|_| "Failed to attach download link".to_string())?;
    anchor.click();
    anchor.remove();

    // Dropping the ObjectUrl revokes it
    drop(url);
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_no_anchor_left_behind() {
        save_bytes(b"%PDF-1.3", "application/pdf", "customers_report.pdf").unwrap();

        let leftover = gloo::utils::document().query_selector("a[download]").unwrap();
        assert!(leftover.is_none());
    }
}
