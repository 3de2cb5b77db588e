use bytes::Bytes;

/// A file received from the upload form, before text extraction.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Bytes,
}

/// Insertion-ordered name → text mapping.
///
/// Holds extracted résumé text keyed by filename, and model replies keyed by
/// the same names. Inserting an existing name overwrites its text but keeps
/// the position of the first insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedTexts {
    entries: Vec<(String, String)>,
}

/// Résumé filename → extracted plain text.
pub type ResumeSet = NamedTexts;

/// Résumé filename → raw model reply.
pub type EvaluationResults = NamedTexts;

impl NamedTexts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous text when `name` was already present.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) -> Option<String> {
        let name = name.into();
        let text = text.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, text)),
            None => {
                self.entries.push((name, text));
                None
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, t)| (n.as_str(), t.as_str()))
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, T: Into<String>> FromIterator<(N, T)> for NamedTexts {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let mut texts = NamedTexts::new();
        for (name, text) in iter {
            texts.insert(name, text);
        }
        texts
    }
}
