//! Script-based language detection

use sevai_application::domain_services::{LanguageDetector, ScriptCounts, detect};
use sevai_domain::value_objects::Language;

#[test]
fn test_english_sentence_is_english() {
    assert_eq!(
        detect("What are the benefits of Pudhumai Penn scheme?"),
        Language::English
    );
}

#[test]
fn test_tamil_sentence_is_tamil() {
    assert_eq!(
        detect("புதுமைப் பெண் திட்டத்தின் பயன்கள் என்ன?"),
        Language::Tamil
    );
}

#[test]
fn test_empty_and_punctuation_only_default_to_english() {
    assert_eq!(detect(""), Language::English);
    assert_eq!(detect("?? 123 !!"), Language::English);
}

#[test]
fn test_english_sentence_with_one_tamil_word_stays_english() {
    let text = "How do I apply for the மகளிர் scheme online today?";
    let counts = ScriptCounts::of(text);
    assert!(counts.tamil > 0);
    assert!(counts.latin > counts.tamil);
    assert_eq!(detect(text), Language::English);
}

#[test]
fn test_tamil_majority_wins_over_scheme_name_in_latin() {
    assert_eq!(
        detect("Pudhumai Penn திட்டத்திற்கு எப்படி விண்ணப்பிப்பது?"),
        Language::Tamil
    );
    assert_eq!(detect("PM Kisan திட்டம் என்ன?"), Language::Tamil);
}

#[test]
fn test_equal_counts_are_english() {
    let counts = ScriptCounts { tamil: 3, latin: 3 };
    assert_eq!(counts, ScriptCounts::of("abcஅஆஇ"));
    assert_eq!(detect("abcஅஆஇ"), Language::English);
}

#[test]
fn test_detector_delegates_to_detect() {
    let detector = LanguageDetector::new();
    assert_eq!(detector.detect("வணக்கம்"), Language::Tamil);
    assert_eq!(detector.detect("hello"), Language::English);
}
