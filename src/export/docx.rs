//! Minimal WordprocessingML writer.
//!
//! Supports exactly what story exports need: an inline picture, headings
//! of level 1 and 2, and plain paragraphs where `\n` becomes a line break.

use super::image::EmbeddedImage;
use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const EMU_PER_INCH: f64 = 914_400.0;
const IMAGE_REL_ID: &str = "rIdImage1";

enum Block {
    Picture { image: EmbeddedImage, width_inches: f32 },
    Heading { text: String, level: u8 },
    Paragraph(String),
}

#[derive(Default)]
pub struct DocxBuilder {
    blocks: Vec<Block>,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the first picture is kept; story exports carry a single logo.
    pub fn add_picture(&mut self, image: EmbeddedImage, width_inches: f32) -> &mut Self {
        if !self.blocks.iter().any(|b| matches!(b, Block::Picture { .. })) {
            self.blocks.push(Block::Picture { image, width_inches });
        }
        self
    }

    /// Levels other than 1 and 2 are clamped into that range.
    pub fn add_heading(&mut self, text: &str, level: u8) -> &mut Self {
        self.blocks.push(Block::Heading {
            text: text.to_string(),
            level: level.clamp(1, 2),
        });
        self
    }

    pub fn add_paragraph(&mut self, text: &str) -> &mut Self {
        self.blocks.push(Block::Paragraph(text.to_string()));
        self
    }

    pub fn finish(self) -> zip::result::ZipResult<Vec<u8>> {
        let picture = self.blocks.iter().find_map(|b| match b {
            Block::Picture { image, .. } => Some(image),
            _ => None,
        });

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(content_types(picture).as_bytes())?;

        zip.start_file("_rels/.rels", options)?;
        zip.write_all(ROOT_RELS.as_bytes())?;

        zip.start_file("word/_rels/document.xml.rels", options)?;
        zip.write_all(document_rels(picture).as_bytes())?;

        zip.start_file("word/styles.xml", options)?;
        zip.write_all(STYLES.as_bytes())?;

        zip.start_file("word/document.xml", options)?;
        zip.write_all(self.document_xml().as_bytes())?;

        if let Some(image) = picture {
            zip.start_file(media_path(image), options)?;
            zip.write_all(&image.bytes)?;
        }

        Ok(zip.finish()?.into_inner())
    }

    fn document_xml(&self) -> String {
        let mut body = String::new();
        for block in &self.blocks {
            match block {
                Block::Picture { image, width_inches } => body.push_str(&picture_xml(image, *width_inches)),
                Block::Heading { text, level } => {
                    body.push_str(&format!(
                        r#"<w:p><w:pPr><w:pStyle w:val="Heading{}"/></w:pPr>{}</w:p>"#,
                        level,
                        runs(text)
                    ));
                }
                Block::Paragraph(text) => body.push_str(&format!("<w:p>{}</w:p>", runs(text))),
            }
        }

        format!(
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
                r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#,
                r#" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships""#,
                r#" xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing""#,
                r#" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main""#,
                r#" xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture">"#,
                r#"<w:body>{}<w:sectPr><w:pgSz w:w="12240" w:h="15840"/>"#,
                r#"<w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/>"#,
                r#"</w:sectPr></w:body></w:document>"#
            ),
            body
        )
    }
}

/// A single run; line breaks inside `text` become `<w:br/>`.
fn runs(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let lines = text
        .split('\n')
        .map(|line| format!(r#"<w:t xml:space="preserve">{}</w:t>"#, escape(line)))
        .collect::<Vec<_>>()
        .join("<w:br/>");
    format!("<w:r>{}</w:r>", lines)
}

fn picture_xml(image: &EmbeddedImage, width_inches: f32) -> String {
    let cx = (f64::from(width_inches) * EMU_PER_INCH).round() as u64;
    let cy = (cx as f64 * f64::from(image.height_px) / f64::from(image.width_px)).round() as u64;
    let name = format!("image1.{}", image.kind.extension());
    format!(
        concat!(
            r#"<w:p><w:r><w:drawing><wp:inline distT="0" distB="0" distL="0" distR="0">"#,
            r#"<wp:extent cx="{cx}" cy="{cy}"/><wp:docPr id="1" name="Picture 1"/>"#,
            r#"<wp:cNvGraphicFramePr><a:graphicFrameLocks noChangeAspect="1"/></wp:cNvGraphicFramePr>"#,
            r#"<a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture">"#,
            r#"<pic:pic><pic:nvPicPr><pic:cNvPr id="0" name="{name}"/><pic:cNvPicPr/></pic:nvPicPr>"#,
            r#"<pic:blipFill><a:blip r:embed="{rel}"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill>"#,
            r#"<pic:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm>"#,
            r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></pic:spPr></pic:pic>"#,
            r#"</a:graphicData></a:graphic></wp:inline></w:drawing></w:r></w:p>"#
        ),
        cx = cx,
        cy = cy,
        name = name,
        rel = IMAGE_REL_ID
    )
}

fn media_path(image: &EmbeddedImage) -> String {
    format!("word/media/image1.{}", image.kind.extension())
}

fn content_types(picture: Option<&EmbeddedImage>) -> String {
    let image_default = picture
        .map(|image| {
            format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                image.kind.extension(),
                image.kind.content_type()
            )
        })
        .unwrap_or_default();
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
            r#"<Default Extension="xml" ContentType="application/xml"/>{}"#,
            r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
            r#"<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>"#,
            r#"</Types>"#
        ),
        image_default
    )
}

fn document_rels(picture: Option<&EmbeddedImage>) -> String {
    let image_rel = picture
        .map(|image| {
            format!(
                r#"<Relationship Id="{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="media/image1.{}"/>"#,
                IMAGE_REL_ID,
                image.kind.extension()
            )
        })
        .unwrap_or_default();
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
            r#"<Relationship Id="rIdStyles" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
            r#"{}</Relationships>"#
        ),
        image_rel
    )
}

const ROOT_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    r#"</Relationships>"#
);

const STYLES: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style>"#,
    r#"<w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/>"#,
    r#"<w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:spacing w:before="480"/><w:outlineLvl w:val="0"/></w:pPr>"#,
    r#"<w:rPr><w:b/><w:sz w:val="28"/></w:rPr></w:style>"#,
    r#"<w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/>"#,
    r#"<w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:spacing w:before="200"/><w:outlineLvl w:val="1"/></w:pPr>"#,
    r#"<w:rPr><w:b/><w:sz w:val="26"/></w:rPr></w:style>"#,
    r#"</w:styles>"#
);

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\r' => {}
            // Control characters other than tab are invalid in XML 1.0.
            c if c.is_control() && c != '\t' => {}
            c => out.push(c),
        }
    }
    out
}
