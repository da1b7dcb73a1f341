use crate::domain::model::ArchiveEntry;
use crate::utils::error::{InstallerError, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// Base64 text of the EffectGraph starter archive shipped with this build.
pub const EMBEDDED_PAYLOAD: &str = concat!(
    "UEsDBBQAAAAIAGy3Vlu6e82jJQAAAC0AAAAJAAAAUkVBRE1FLm1kU1ZwTUtLTS5xL0osyODiCi5J",
    "LCpJLVIoSi3IV0jLL0KW1eMCAFBLAwQUAAAACABst1Zb83n+8y4AAAAxAAAADAAAAHBhY2thZ2Uu",
    "anNvbqvmUlBQykvMTVWyUlBKTUtLTS5JL0osyFDSAUmUpRYVZ+bngeQM9Iz0DJS4agFQSwMEFAAA",
    "AAgAbLdWW63u55A5AAAARgAAAAwAAABzcmMvaW5kZXgudHNLrSjILypR0FJIK8rPVVDX0y+pLEgt",
    "VrdWSIVIVCskF6UmlqS6pqWlJpco1MLVJecXpeqngkXVrQFQSwMEFAAAAAgAbLdWW2nrMk53AAAA",
    "ygAAAAwAAABzcmMvdHlwZXMudHN1jcEKwjAQRH8lH+AXJAdP3kWP4mG7TGBhkw3pWiql/y4iVRQ8",
    "Dcy8mcHcrHuQ6uiZGOGQM9jPDbygiJ/IsY/1Vgb0VGg+Undhxfg2VTJcyodaA35Ht9bSbBQXq/Hy",
    "gndfck0T1Fj8/i9/nm0/pDIhDmYKqml9AFBLAwQUAAAACABst1Zb1kWUm18AAABrAAAADwAAAGRv",
    "Y3MvaW5kZXguaHRtbCXMzQ5FMBBA4VepWFgSS6q7G89R86OJYZqqRd+eS05ylp+tUCGXSCbkXZz9",
    "vigWc+YiNDWLh21Neh041F3/5EdQ0TTUzNy4HzNBnpOPwSDtaqJ4oKCClGz7h5xtX/UGUEsDBBQA",
    "AAAIAGy3Vlv9jd9yGAAAABYAAAAeAAAALmdpdGh1Yi93b3JrZmxvd3MvZ2gtcGFnZXMueW1sy0vM",
    "TbVScEktyMmv5M3Ps1IoKC3O4AIAUEsBAhQDFAAAAAgAbLdWW7p7zaMlAAAALQAAAAkAAAAAAAAA",
    "AAAAAKSBAAAAAFJFQURNRS5tZFBLAQIUAxQAAAAIAGy3Vlvzef7zLgAAADEAAAAMAAAAAAAAAAAA",
    "AACkgUwAAABwYWNrYWdlLmpzb25QSwECFAMUAAAACABst1Zbre7nkDkAAABGAAAADAAAAAAAAAAA",
    "AAAApIGkAAAAc3JjL2luZGV4LnRzUEsBAhQDFAAAAAgAbLdWW2nrMk53AAAAygAAAAwAAAAAAAAA",
    "AAAAAKSBBwEAAHNyYy90eXBlcy50c1BLAQIUAxQAAAAIAGy3VlvWRZSbXwAAAGsAAAAPAAAAAAAA",
    "AAAAAACkgagBAABkb2NzL2luZGV4Lmh0bWxQSwECFAMUAAAACABst1Zb/Y3fchgAAAAWAAAAHgAA",
    "AAAAAAAAAAAApIE0AgAALmdpdGh1Yi93b3JrZmxvd3MvZ2gtcGFnZXMueW1sUEsFBgAAAAAGAAYA",
    "bgEAAIgCAAAAAA==",
);

/// Decoded archive bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    bytes: Vec<u8>,
}

impl Payload {
    pub fn embedded() -> Result<Self> {
        Self::from_base64(EMBEDDED_PAYLOAD)
    }

    /// Decodes standard-alphabet base64. ASCII whitespace is skipped so that
    /// wrapped text decodes the same as a single line.
    pub fn from_base64(text: &str) -> Result<Self> {
        let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let bytes = STANDARD.decode(compact.as_bytes())?;
        tracing::debug!("Decoded payload: {} bytes", bytes.len());
        Ok(Self { bytes })
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Reads every entry, in archive order.
    ///
    /// Fails on the first entry whose name is absolute or climbs out of the
    /// extraction root, so nothing is returned for a payload that would write
    /// outside the target.
    pub fn entries(&self) -> Result<Vec<ArchiveEntry>> {
        let mut archive = ZipArchive::new(Cursor::new(self.bytes.as_slice()))?;
        let mut entries = Vec::with_capacity(archive.len());

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            let path = file
                .enclosed_name()
                .ok_or_else(|| InstallerError::UnsafeEntryPath {
                    name: file.name().to_string(),
                })?;
            if path.as_os_str().is_empty() {
                continue;
            }

            let is_dir = file.is_dir();
            let mut data = Vec::new();
            if !is_dir {
                // Read errors here are CRC or deflate failures on in-memory data.
                file.read_to_end(&mut data)
                    .map_err(|e| InstallerError::Zip(zip::result::ZipError::Io(e)))?;
            }

            entries.push(ArchiveEntry { path, is_dir, data });
        }

        Ok(entries)
    }
}
