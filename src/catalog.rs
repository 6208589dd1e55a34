//! PO catalog loading and locale guessing

use crate::error::{PoxlsError, PoxlsResult};
use crate::types::MessageKey;
use polib::catalog::Catalog;
use polib::message::MessageView;
use polib::po_file;
use std::path::{Path, PathBuf};

/// A loaded PO catalog together with the locale its column is named after.
///
/// The locale is guessed by looking at the "Language" key in the PO
/// metadata, falling back to the file name. It can also be given manually
/// by prefixing the path with "<locale>:", e.g. "nl:locales/nl/mydomain.po".
#[derive(Debug, Clone)]
pub struct PoCatalog {
    pub path: PathBuf,
    pub locale: String,
    catalog: Catalog,
}

impl PoCatalog {
    /// Load a catalog from a CLI argument, honoring a "<locale>:<path>"
    /// prefix. The prefix only applies when the raw argument does not
    /// itself name an existing file.
    pub fn open(spec: &str) -> PoxlsResult<Self> {
        let direct = Path::new(spec);
        if direct.exists() {
            return Self::open_with_locale(direct, None);
        }

        match spec.split_once(':') {
            Some((locale, path)) if !locale.is_empty() && !path.is_empty() => {
                Self::open_with_locale(Path::new(path), Some(locale.to_string()))
            }
            _ => Self::open_with_locale(direct, None),
        }
    }

    /// Load a catalog from a path, with an optional explicit locale.
    pub fn open_with_locale(path: &Path, locale: Option<String>) -> PoxlsResult<Self> {
        let catalog = po_file::parse(path)?;

        let locale = locale
            .or_else(|| {
                let language = catalog.metadata.language.clone();
                if language.is_empty() {
                    None
                } else {
                    Some(language)
                }
            })
            .or_else(|| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .ok_or_else(|| {
                PoxlsError::Catalog(format!(
                    "Could not determine a locale for {}",
                    path.display()
                ))
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            locale,
            catalog,
        })
    }

    /// Whether any entry in this catalog carries a msgctxt.
    pub fn has_message_context(&self) -> bool {
        self.catalog.messages().any(|m| m.msgctxt().is_some())
    }

    /// Message keys in catalog order, skipping entries without a msgid.
    pub fn keys(&self) -> Vec<MessageKey> {
        self.catalog
            .messages()
            .filter(|m| !m.msgid().is_empty())
            .map(|m| MessageKey::new(m.msgid(), m.msgctxt().map(str::to_string)))
            .collect()
    }

    /// Number of translatable entries.
    pub fn len(&self) -> usize {
        self.catalog
            .messages()
            .filter(|m| !m.msgid().is_empty())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn find(&self, key: &MessageKey) -> Option<&dyn MessageView> {
        self.catalog.find_message(key.ctxt(), &key.msgid, None)
    }

    /// The translation for a key plus its fuzzy flag, if the entry exists.
    ///
    /// Plural entries have no singular msgstr; they surface as an empty
    /// translation.
    pub fn translation(&self, key: &MessageKey) -> Option<(String, bool)> {
        let message = self.find(key)?;
        let msgstr = message.msgstr().unwrap_or_default().to_string();
        Some((msgstr, message.is_fuzzy()))
    }

    /// Extracted ("#.") and translator ("#") comments for a key, merged
    /// into one block with the extracted notes first.
    pub fn comments(&self, key: &MessageKey) -> Option<String> {
        let message = self.find(key)?;
        let merged: Vec<&str> = [message.extracted_comments(), message.translator_comments()]
            .into_iter()
            .filter(|c| !c.is_empty())
            .collect();
        if merged.is_empty() {
            None
        } else {
            Some(merged.join("\n"))
        }
    }

    /// Source references ("#:" lines) for a key.
    pub fn references(&self, key: &MessageKey) -> Option<String> {
        let source = self.find(key)?.source().to_string();
        if source.is_empty() {
            None
        } else {
            Some(source)
        }
    }
}
