use std::path::PathBuf;

/// An opaque audio input: either a file on disk or a named in-memory upload.
///
/// The two variants are resolved once at the decoder boundary; every later
/// pipeline stage only ever sees a decoded [`crate::Signal`].
#[derive(Debug, Clone)]
pub enum AudioSource {
    /// A path on the local filesystem.
    Path(PathBuf),
    /// Raw encoded bytes with the uploader-supplied filename.
    Bytes { name: String, data: Vec<u8> },
}

impl AudioSource {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        AudioSource::Path(path.into())
    }

    pub fn bytes(name: impl Into<String>, data: Vec<u8>) -> Self {
        AudioSource::Bytes {
            name: name.into(),
            data,
        }
    }

    /// Display name: the upload's filename, or the final path segment.
    pub fn name(&self) -> String {
        match self {
            AudioSource::Path(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned()),
            AudioSource::Bytes { name, .. } => name.clone(),
        }
    }

    /// Lowercased file extension, used as a decoder format hint.
    pub fn extension(&self) -> Option<String> {
        let name = self.name();
        let (_, ext) = name.rsplit_once('.')?;
        if ext.is_empty() {
            None
        } else {
            Some(ext.to_ascii_lowercase())
        }
    }
}
