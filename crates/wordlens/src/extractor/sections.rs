//! Label-anchored section extraction

use std::sync::LazyLock;

use regex::Regex;

use crate::models::WordAnalysis;
use crate::prompt::{GUIDE_LABEL, MEANING_LABEL, PHONICS_LABEL, SYLLABLES_LABEL};

/// Sentinel for a missing meaning section
pub const MEANING_NOT_FOUND: &str = "❌ 뜻 정보 없음";

/// Sentinel for a missing IPA section
pub const PHONICS_NOT_FOUND: &str = "❌ 음소 정보 없음";

/// Sentinel for a missing syllable section
pub const SYLLABLES_NOT_FOUND: &str = "❌ 음절 정보 없음";

/// Fallback for a missing pronunciation guide
pub const GUIDE_NOT_FOUND: &[String] = &[];

/// `<label> <value>` on a line of its own; the value is the rest of that line.
///
/// `\s*` may cross a line break, so `뜻:\n사과` still yields `사과`. The value
/// must start with a non-space character; a label followed only by whitespace
/// is treated as missing.
fn single_line_pattern(label: &str) -> Regex {
  let pattern = format!(r"(?m)^[ \t]*{}\s*(\S.*)", regex::escape(label));
  Regex::new(&pattern).expect("section pattern is a valid regex")
}

static MEANING_RE: LazyLock<Regex> = LazyLock::new(|| single_line_pattern(MEANING_LABEL));
static PHONICS_RE: LazyLock<Regex> = LazyLock::new(|| single_line_pattern(PHONICS_LABEL));
static SYLLABLES_RE: LazyLock<Regex> = LazyLock::new(|| single_line_pattern(SYLLABLES_LABEL));

/// Everything after the guide label, up to the end of the text.
static GUIDE_RE: LazyLock<Regex> = LazyLock::new(|| {
  let pattern = format!(r"(?ms)^[ \t]*{}(.*)", regex::escape(GUIDE_LABEL));
  Regex::new(&pattern).expect("guide pattern is a valid regex")
});

fn single_line(re: &Regex, content: &str) -> Option<String> {
  re.captures(content)
    .and_then(|caps| caps.get(1))
    .map(|m| m.as_str().trim().to_string())
}

fn guide_lines(content: &str) -> Option<Vec<String>> {
  let caps = GUIDE_RE.captures(content)?;
  let body = caps.get(1).map_or("", |m| m.as_str());

  Some(
    body
      .lines()
      .map(str::trim)
      .filter(|line| !line.is_empty())
      .map(str::to_string)
      .collect(),
  )
}

/// Extracts the four sections from a completion.
///
/// Each field is searched independently over the whole text, so section order
/// does not matter. When a label appears more than once the first line wins.
///
/// # Examples
/// ```
/// use wordlens::extract;
///
/// let analysis = extract("뜻: 사과\n음소: /ˈæp.əl/");
/// assert_eq!(analysis.meaning, "사과");
/// assert_eq!(analysis.phonics, "/ˈæp.əl/");
/// assert_eq!(analysis.syllables, wordlens::extractor::SYLLABLES_NOT_FOUND);
/// assert!(analysis.pronunciation_guide.is_empty());
/// ```
pub fn extract(content: &str) -> WordAnalysis {
  WordAnalysis {
    meaning: single_line(&MEANING_RE, content).unwrap_or_else(|| MEANING_NOT_FOUND.to_string()),
    phonics: single_line(&PHONICS_RE, content).unwrap_or_else(|| PHONICS_NOT_FOUND.to_string()),
    syllables: single_line(&SYLLABLES_RE, content)
      .unwrap_or_else(|| SYLLABLES_NOT_FOUND.to_string()),
    pronunciation_guide: guide_lines(content).unwrap_or_else(|| GUIDE_NOT_FOUND.to_vec()),
  }
}
