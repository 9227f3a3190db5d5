// Host-side tests for the hero headline typewriter.

use site_core::{Typewriter, TYPEWRITER_TEXT};

#[test]
fn starts_empty() {
    let tw = Typewriter::new(TYPEWRITER_TEXT);
    assert_eq!(tw.visible(), "");
    assert!(!tw.is_complete());
}

#[test]
fn reveals_one_character_per_step() {
    let mut tw = Typewriter::new(TYPEWRITER_TEXT);
    tw.step();
    tw.step();
    tw.step();
    assert_eq!(tw.visible(), "Far");
}

#[test]
fn every_intermediate_state_is_a_prefix() {
    let mut tw = Typewriter::new(TYPEWRITER_TEXT);
    while tw.step() {
        assert!(TYPEWRITER_TEXT.starts_with(tw.visible()));
    }
    assert_eq!(tw.visible(), TYPEWRITER_TEXT);
}

#[test]
fn completes_after_one_step_per_character() {
    let mut tw = Typewriter::new(TYPEWRITER_TEXT);
    let chars = TYPEWRITER_TEXT.chars().count();
    for _ in 0..chars {
        assert!(tw.step());
    }
    assert!(tw.is_complete());
}

#[test]
fn step_reports_false_once_complete() {
    // The frontend cancels its interval on the first false.
    let mut tw = Typewriter::new("ab");
    assert!(tw.step());
    assert!(tw.step());
    assert!(!tw.step());
    assert!(!tw.step());
    assert_eq!(tw.visible(), "ab");
}

#[test]
fn multibyte_characters_advance_whole() {
    let mut tw = Typewriter::new("héllo ☕");
    let mut seen = Vec::new();
    while tw.step() {
        seen.push(tw.visible().to_string());
    }
    assert_eq!(seen.len(), 7);
    assert_eq!(seen[1], "hé");
    assert_eq!(seen.last().map(String::as_str), Some("héllo ☕"));
}
