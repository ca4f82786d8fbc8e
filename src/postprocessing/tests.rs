use super::*;

#[test]
fn echoed_prompt_is_stripped() {
    let prompt = "Explain the concept of Gravity clearly:\n";
    assert_eq!(strip_echo(&format!("{prompt}X"), prompt), "X");
    assert_eq!(clean(&format!("{prompt}  Mass attracts mass.  \n"), prompt), "Mass attracts mass.");
}

#[test]
fn output_without_echo_is_kept() {
    let prompt = "Explain Gravity in simple words:\n";
    assert_eq!(strip_echo("Things fall down.", prompt), "Things fall down.");
    // Only an exact prefix counts as an echo.
    assert_eq!(strip_echo("Explain Gravity in simple words", prompt), "Explain Gravity in simple words");
}

#[test]
fn normalize_rejects_short_output() {
    let prompt = "Give 3 real-world examples of Rust:\n";
    let err = normalize(&format!("{prompt}  ok \n"), prompt, 20).unwrap_err();
    assert_eq!(err, RejectedOutput::TooShort { length: 2, minimum: 20 });

    let text = normalize(&format!("{prompt}Firefox, Discord and Dropbox use Rust."), prompt, 20).unwrap();
    assert_eq!(text, "Firefox, Discord and Dropbox use Rust.");
}

#[test]
fn length_is_counted_in_characters() {
    assert!(validate("ééééé", 5).is_ok());
    assert!(validate("éééé", 5).is_err());
}

#[test]
fn display_lines_drop_blanks() {
    let lines = display_lines("  First point\n\n   \nSecond point  \r\nThird");
    assert_eq!(lines, vec!["First point", "Second point", "Third"]);
}
