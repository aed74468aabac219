use super::*;

// ============================================================================
// Filenames
// ============================================================================

#[test]
fn receipt_filename_embeds_invoice_id() {
    assert_eq!(document_filename("receipt", 42), "receipt-42.pdf");
}

#[test]
fn invoice_filename_embeds_invoice_id() {
    assert_eq!(document_filename("invoice", 7), "invoice-7.pdf");
}

// ============================================================================
// Non-browser behavior
// ============================================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn save_pdf_is_noop_without_browser() {
    save_pdf("receipt-1.pdf", b"%PDF-1.4");
}
