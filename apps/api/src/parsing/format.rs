use serde::{Deserialize, Serialize};

/// Classification label attached to every parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectedFormat {
    Text,
    Pdf,
    Docx,
    Binary,
}

impl DetectedFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            DetectedFormat::Text => "text",
            DetectedFormat::Pdf => "pdf",
            DetectedFormat::Docx => "docx",
            DetectedFormat::Binary => "binary",
        }
    }
}

impl std::fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies input by file name suffix only. Supplied text always wins.
pub fn detect_format(file_name: Option<&str>, has_text: bool) -> DetectedFormat {
    if has_text {
        return DetectedFormat::Text;
    }
    let Some(name) = file_name.filter(|n| !n.is_empty()) else {
        return DetectedFormat::Binary;
    };

    let lowered = name.to_lowercase();
    if lowered.ends_with(".pdf") {
        DetectedFormat::Pdf
    } else if lowered.ends_with(".docx") {
        DetectedFormat::Docx
    } else {
        DetectedFormat::Binary
    }
}
