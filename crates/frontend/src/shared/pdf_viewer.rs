//! Inline PDF preview with a download link.
//!
//! The document lives behind a `blob:` object URL. The URL is revoked when a new
//! document replaces it and when the viewer is dropped.

use crate::shared::icons::icon;
use leptos::prelude::*;
use web_sys::{Blob, Url};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfDocument {
    pub url: String,
    pub file_name: String,
}

fn revoke(document: Option<PdfDocument>) {
    if let Some(document) = document {
        if let Err(e) = Url::revoke_object_url(&document.url) {
            log::warn!("revoke_object_url failed: {:?}", e);
        }
    }
}

/// Shows `blob` in `slot`, revoking the URL of the document it replaces
pub fn show_pdf(slot: RwSignal<Option<PdfDocument>>, blob: &Blob, file_name: String) -> Result<(), String> {
    let url = Url::create_object_url_with_blob(blob).map_err(|e| format!("{:?}", e))?;
    let previous = slot.get_untracked();
    slot.set(Some(PdfDocument { url, file_name }));
    revoke(previous);
    Ok(())
}

/// Drops the shown document and revokes its URL
pub fn clear_pdf(slot: RwSignal<Option<PdfDocument>>) {
    let previous = slot.get_untracked();
    slot.set(None);
    revoke(previous);
}

#[component]
pub fn PdfViewer(document: RwSignal<Option<PdfDocument>>) -> impl IntoView {
    on_cleanup(move || revoke(document.try_get_untracked().flatten()));

    view! {
        {move || document.get().map(|doc| {
            let href = doc.url.clone();
            view! {
                <div class="pdf-viewer">
                    <div class="pdf-viewer__toolbar">
                        <a class="button button--secondary" href=href download=doc.file_name.clone()>
                            {icon("download")}
                            " Descargar PDF"
                        </a>
                    </div>
                    <iframe class="pdf-viewer__frame" src=doc.url title=doc.file_name></iframe>
                </div>
            }
        })}
    }
}
