//! PDF text extraction for uploaded résumés.

use tracing::{debug, error};

use crate::errors::AppError;
use crate::models::resume::UploadedFile;

/// Extracts the plain text of every page of an uploaded PDF, in page order.
///
/// `None` means no file was supplied. Parsing runs on the blocking pool; a
/// panic inside the PDF library is reported as a parse failure.
pub async fn extract_pdf_text(file: Option<&UploadedFile>) -> Result<String, AppError> {
    let file = file.ok_or_else(|| AppError::MissingInput("No file uploaded".to_string()))?;

    let name = file.name.clone();
    let bytes = file.bytes.clone();
    let outcome = tokio::task::spawn_blocking(move || extract_text_from_bytes(&bytes)).await;

    let result = match outcome {
        Ok(result) => result,
        Err(join_error) if join_error.is_panic() => {
            Err("the PDF library panicked while reading the document".to_string())
        }
        Err(join_error) => return Err(AppError::Internal(join_error.into())),
    };

    match result {
        Ok(text) => {
            debug!("Extracted {} chars from '{}'", text.len(), name);
            Ok(text)
        }
        Err(reason) => {
            error!("An error occurred while processing the PDF '{name}': {reason}");
            Err(AppError::DocumentParse { file: name, reason })
        }
    }
}

fn extract_text_from_bytes(bytes: &[u8]) -> Result<String, String> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| e.to_string())
}

#[cfg(test)]
pub(crate) mod test_pdf {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Builds an in-memory PDF with one page per entry of `pages`.
    pub fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    fn upload(name: &str, bytes: Vec<u8>) -> UploadedFile {
        UploadedFile {
            name: name.to_string(),
            bytes: Bytes::from(bytes),
        }
    }

    #[tokio::test]
    async fn test_extracts_text_in_page_order() {
        let file = upload("cv.pdf", test_pdf::build_pdf(&["Rustacean", "Kubernetes"]));
        let text = extract_pdf_text(Some(&file)).await.unwrap();

        let first = text.find("Rustacean").expect("first page text");
        let second = text.find("Kubernetes").expect("second page text");
        assert!(first < second, "pages out of order: {text:?}");
    }

    #[tokio::test]
    async fn test_garbage_bytes_are_a_parse_error() {
        let file = upload("broken.pdf", b"this is not a pdf".to_vec());
        let err = extract_pdf_text(Some(&file)).await.unwrap_err();
        match err {
            AppError::DocumentParse { file, .. } => assert_eq!(file, "broken.pdf"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_no_file_is_missing_input() {
        let err = extract_pdf_text(None).await.unwrap_err();
        assert!(matches!(err, AppError::MissingInput(_)));
    }
}
