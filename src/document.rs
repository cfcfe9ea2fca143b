use crate::error::{AnalysisError, Result};
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use flate2::read::GzDecoder;
use std::io::Read;
use std::path::Path;

/// Bytes inspected when guessing the encoding
pub const DEFAULT_DETECT_PREFIX: usize = 20_000;

/// Decoded input text, one entry per line
#[derive(Debug, Clone)]
pub struct Document {
    encoding: &'static Encoding,
    lines: Vec<String>,
}

impl Document {
    /// Read and decode a file, gunzipping it first if the name ends in `.gz`
    pub fn load<P: AsRef<Path>>(path: P, detect_prefix: usize) -> Result<Self> {
        let path = path.as_ref();
        let bytes = read_bytes(path).map_err(|source| AnalysisError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input file");

        let document = Self::from_bytes(&bytes, detect_prefix);
        tracing::info!(
            path = %path.display(),
            encoding = document.encoding_name(),
            lines = document.line_count(),
            "loaded document"
        );
        Ok(document)
    }

    /// Decode raw bytes with the encoding guessed from their first `detect_prefix` bytes.
    ///
    /// A byte-order mark wins over the guess. Malformed sequences become
    /// U+FFFD, which the tokenizer later treats as a separator.
    pub fn from_bytes(bytes: &[u8], detect_prefix: usize) -> Self {
        let guessed = detect_encoding(&bytes[..bytes.len().min(detect_prefix)], bytes.len() <= detect_prefix);
        let (text, encoding, had_errors) = guessed.decode(bytes);
        if had_errors {
            tracing::warn!(
                encoding = encoding.name(),
                "input contains byte sequences invalid in the detected encoding"
            );
        }

        Self {
            encoding,
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    /// Wrap text that is already decoded
    pub fn from_text(text: &str) -> Self {
        Self {
            encoding: encoding_rs::UTF_8,
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

fn read_bytes(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = std::fs::File::open(path)?;
    let mut bytes = Vec::new();
    if path.extension().map_or(false, |ext| ext == "gz") {
        GzDecoder::new(file).read_to_end(&mut bytes)?;
    } else {
        std::io::BufReader::new(file).read_to_end(&mut bytes)?;
    }
    Ok(bytes)
}

/// Statistical best guess; never fails
pub fn detect_encoding(prefix: &[u8], is_complete: bool) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(prefix, is_complete);
    detector.guess(None, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PASSAGE: &str = "Алексей Абрамович Негров был богатый помещик, отставной генерал. \
        Он жил в своём имении и редко выезжал в губернский город. \
        Дмитрий Яковлевич Круциферский приехал к нему учителем для сына, \
        и в доме началась новая жизнь, тихая и грустная.\n\
        Любонька сидела у окна и читала книгу, которую привёз учитель.\n";

    #[test]
    fn test_utf8_lines() {
        let doc = Document::from_bytes(PASSAGE.as_bytes(), DEFAULT_DETECT_PREFIX);
        assert_eq!(doc.encoding(), encoding_rs::UTF_8);
        assert_eq!(doc.line_count(), 2);
        assert!(doc.lines()[1].starts_with("Любонька"));
    }

    #[test]
    fn test_detects_windows_1251() {
        let text = PASSAGE.repeat(4);
        let (bytes, _, _) = encoding_rs::WINDOWS_1251.encode(&text);

        let doc = Document::from_bytes(&bytes, DEFAULT_DETECT_PREFIX);
        assert_eq!(doc.encoding(), encoding_rs::WINDOWS_1251);
        assert_eq!(doc.lines().join("\n") + "\n", text);
    }

    #[test]
    fn test_invalid_bytes_are_not_fatal() {
        let mut bytes = "человек ".as_bytes().to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, 0xfd]);
        bytes.extend_from_slice(" человек".as_bytes());

        let doc = Document::from_bytes(&bytes, DEFAULT_DETECT_PREFIX);
        assert_eq!(doc.line_count(), 1);
        assert!(!doc.lines()[0].is_empty());
    }

    #[test]
    fn test_bom_overrides_guess() {
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice(PASSAGE.as_bytes());

        let doc = Document::from_bytes(&bytes, 16);
        assert_eq!(doc.encoding(), encoding_rs::UTF_8);
        assert!(doc.lines()[0].starts_with("Алексей"));
    }

    #[test]
    fn test_load_gzip() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("novel.txt.gz");
        let mut encoder = flate2::write::GzEncoder::new(
            std::fs::File::create(&path).unwrap(),
            flate2::Compression::default(),
        );
        encoder.write_all(PASSAGE.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let doc = Document::load(&path, DEFAULT_DETECT_PREFIX)?;
        assert_eq!(doc.line_count(), 2);
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let err = Document::load("/nonexistent/novel.txt", DEFAULT_DETECT_PREFIX).unwrap_err();
        assert!(matches!(err, AnalysisError::Io { .. }));
    }

    #[test]
    fn test_empty_input() {
        let doc = Document::from_bytes(&[], DEFAULT_DETECT_PREFIX);
        assert_eq!(doc.line_count(), 0);
    }
}
