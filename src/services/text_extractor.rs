//! PDF 文本提取

use lopdf::Document;
use tracing::debug;

use crate::llm::preview;

/// 文本提取错误
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// 无法解析为 PDF
    #[error("Failed to read PDF file: {0}")]
    Parse(String),

    /// 某一页无法提取文本
    #[error("Failed to read PDF file: page {page}: {message}")]
    Page { page: u32, message: String },

    /// 文档不包含任何页面
    #[error("Failed to read PDF file: document has no pages")]
    NoPages,
}

/// 从 PDF 字节中提取文本
///
/// 按页序提取，每页之间以换行分隔，最终去除首尾空白。
/// 只借用输入缓冲区，返回后不持有任何引用。
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractionError::Parse(e.to_string()))?;

    let pages = doc.get_pages();
    if pages.is_empty() {
        return Err(ExtractionError::NoPages);
    }

    let mut page_texts = Vec::with_capacity(pages.len());
    for page in pages.keys().copied() {
        let text = doc.extract_text(&[page]).map_err(|e| ExtractionError::Page {
            page,
            message: e.to_string(),
        })?;
        page_texts.push(text);
    }

    let text = page_texts.join("\n").trim().to_string();
    debug!("Extracted text from PDF: {}", preview(&text, 200));
    Ok(text)
}

/// 测试用：生成单页 PDF
#[cfg(test)]
pub(crate) fn sample_pdf(lines: &[&str]) -> Vec<u8> {
    sample_pdf_pages(&[lines])
}

/// 测试用：生成多页 PDF，每个元素为一页；空页不带 `Contents`
#[cfg(test)]
pub(crate) fn sample_pdf_pages(pages: &[&[&str]]) -> Vec<u8> {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for lines in pages {
        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Resources" => resources_id,
        };

        if !lines.is_empty() {
            let mut operations = Vec::new();
            for (i, line) in lines.iter().enumerate() {
                let y = 700 - 40 * i as i64;
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new("Tf", vec!["F1".into(), 24.into()]));
                operations.push(Operation::new("Td", vec![72.into(), y.into()]));
                operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
                operations.push(Operation::new("ET", vec![]));
            }
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            page.set("Contents", content_id);
        }

        kids.push(doc.add_object(page).into());
    }

    let count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}
