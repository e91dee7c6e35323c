//! Language detection from file extension, for the language-share statistic.

/// Display name of the language a file extension belongs to.
///
/// Only programming and markup languages are counted; prose (`.md`, `.txt`)
/// and data (`.json`, `.yaml`) files are not.
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    let lang = match ext.to_ascii_lowercase().as_str() {
        "ts" | "tsx" | "mts" | "cts" => "TypeScript",
        "js" | "jsx" | "mjs" | "cjs" => "JavaScript",
        "py" | "pyi" | "ipynb" => "Python",
        "java" => "Java",
        "cs" => "C#",
        "go" => "Go",
        "rs" => "Rust",
        "rb" | "rake" | "gemspec" => "Ruby",
        "php" => "PHP",
        "kt" | "kts" => "Kotlin",
        "cpp" | "cc" | "cxx" | "hpp" | "hxx" | "hh" => "C++",
        "c" | "h" => "C",
        "swift" => "Swift",
        "scala" | "sc" => "Scala",
        "html" | "htm" => "HTML",
        "css" | "scss" => "CSS",
        "sh" | "bash" => "Shell",
        "r" => "R",
        _ => return None,
    };
    Some(lang)
}
