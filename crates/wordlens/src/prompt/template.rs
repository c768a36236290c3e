//! Prompt template

/// Label of the meaning section
pub const MEANING_LABEL: &str = "뜻:";

/// Label of the IPA transcription section
pub const PHONICS_LABEL: &str = "음소:";

/// Label of the syllable breakdown section
pub const SYLLABLES_LABEL: &str = "음절:";

/// Label of the pronunciation guide section (multi-line)
pub const GUIDE_LABEL: &str = "발음 가이드:";

/// Builds the prompt for `word`.
///
/// The caller passes an already trimmed, non-empty word. The output is
/// deterministic: the same word always yields the same prompt.
pub fn build_prompt(word: &str) -> String {
  format!(
    "단어 '{word}'를 6세 아이도 쉽게 이해할 수 있도록 분석해줘.\n\
     반드시 아래 형식대로 출력해줘:\n\
     \n\
     {MEANING_LABEL} <단어의 간단하고 명확한 의미>\n\
     {PHONICS_LABEL} <단어의 IPA 표기>\n\
     {SYLLABLES_LABEL} <단어를 음절 단위로 나누고, 어느 음절에 강세가 있는지 포함>\n\
     {GUIDE_LABEL}\n\
     1. <첫 번째 음절의 영어 발음 및 한글 설명>\n\
     2. <두 번째 음절의 영어 발음 및 한글 설명>\n\
     3. <세 번째 음절의 영어 발음 및 한글 설명>\n"
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn prompt_contains_word() {
    for word in ["apple", "banana", "x", "ice cream", "naïve", "'quoted'"] {
      let prompt = build_prompt(word);
      assert!(prompt.contains(word), "prompt lost word {word:?}");
    }
  }

  #[test]
  fn prompt_is_deterministic() {
    assert_eq!(build_prompt("apple"), build_prompt("apple"));
  }

  #[test]
  fn prompt_lists_every_label_on_its_own_line() {
    let prompt = build_prompt("apple");
    for label in [MEANING_LABEL, PHONICS_LABEL, SYLLABLES_LABEL, GUIDE_LABEL] {
      assert!(
        prompt.lines().any(|line| line.starts_with(label)),
        "missing label line {label:?}"
      );
    }
  }

  #[test]
  fn prompt_asks_for_three_guide_lines() {
    let prompt = build_prompt("apple");
    let guide = prompt.split(GUIDE_LABEL).nth(1).unwrap();
    let numbered = guide.lines().filter(|l| l.trim_start().starts_with(char::is_numeric)).count();
    assert_eq!(numbered, 3);
  }

  #[test]
  fn prompt_lines_are_not_indented() {
    let prompt = build_prompt("apple");
    assert!(prompt.lines().all(|line| !line.starts_with(' ')));
  }
}
