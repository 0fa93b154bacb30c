//! Recognized source file extensions and the language each maps to.
//!
//! A file must have one of these extensions to be counted in the file
//! total. The mapping is fixed configuration: shell and batch scripts
//! are grouped under AWS-CLI, and `.html` files are counted as
//! JavaScript examples.

/// A language recognized by the cleanup report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    C,
    Cpp,
    CSharp,
    Go,
    Java,
    JavaScript,
    Php,
    Python,
    Ruby,
    TypeScript,
    AwsCli,
}

impl Language {
    /// Look up the language for a file extension (case-insensitive,
    /// without the leading dot). Returns `None` for unrecognized
    /// extensions.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let lang = match ext.to_ascii_lowercase().as_str() {
            "c" => Self::C,
            "cpp" => Self::Cpp,
            "cs" => Self::CSharp,
            "go" => Self::Go,
            "html" => Self::JavaScript,
            "java" => Self::Java,
            "js" => Self::JavaScript,
            "php" => Self::Php,
            "py" => Self::Python,
            "rb" => Self::Ruby,
            "ts" => Self::TypeScript,
            "sh" => Self::AwsCli,
            "cmd" => Self::AwsCli,
            _ => return None,
        };
        Some(lang)
    }

    /// Look up the language for a path or URL by its extension.
    pub fn from_path(path: &str) -> Option<Self> {
        let (stem, ext) = path.rsplit_once('.')?;
        if ext.contains('/') || stem.ends_with('/') {
            return None;
        }
        Self::from_extension(ext)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::C => "C",
            Self::Cpp => "C++",
            Self::CSharp => "C#",
            Self::Go => "Go",
            Self::Java => "Java",
            Self::JavaScript => "JavaScript",
            Self::Php => "PHP",
            Self::Python => "Python",
            Self::Ruby => "Ruby",
            Self::TypeScript => "TypeScript",
            Self::AwsCli => "AWS-CLI",
        };
        write!(f, "{s}")
    }
}
