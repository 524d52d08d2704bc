use super::types::SlideResult;
use crate::Result;
use std::io::{Cursor, Write};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Bundle the successful slides into an in-memory ZIP archive, one entry
/// per populated slot named `slide_<index>.png` (1-based). Image bytes go
/// in verbatim; failed slots are skipped.
pub fn bundle_slides(slides: &[SlideResult]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut bundled = 0usize;
    for slide in slides {
        let Some(image) = &slide.image else {
            continue;
        };
        writer.start_file(format!("slide_{}.png", slide.slide_index), options)?;
        writer.write_all(&image.bytes)?;
        bundled += 1;
    }

    let cursor = writer.finish()?;
    debug!(
        "Bundled {} of {} slides into archive ({} bytes)",
        bundled,
        slides.len(),
        cursor.get_ref().len()
    );

    Ok(cursor.into_inner())
}
