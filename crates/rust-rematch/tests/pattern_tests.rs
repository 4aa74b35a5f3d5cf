//! Pattern matching tests.

use std::borrow::Cow;

use rust_rematch::{Anchor, Pattern, PatternFlags};

const SAMPLE: &str = "This is a sample text";

#[test]
fn substitute_whitespace_with_dash() {
    let pattern = Pattern::new(r"\s").unwrap();
    assert_eq!(pattern.substitute_all(SAMPLE, "-"), "This-is-a-sample-text");
}

#[test]
fn substitute_only_standalone_is() {
    let pattern = Pattern::new(r"\sis").unwrap();
    assert_eq!(pattern.substitute_all(SAMPLE, " was"), "This was a sample text");
}

#[test]
fn uppercase_every_lowercase_letter() {
    let pattern = Pattern::new(r"[a-z]").unwrap();
    let result = pattern.substitute_with(SAMPLE, |m| m.as_str().to_uppercase());
    assert_eq!(result, "THIS IS A SAMPLE TEXT");
}

#[test]
fn trailing_t_offsets() {
    let pattern = Pattern::new(r"t$").unwrap();
    let matches: Vec<_> = pattern
        .find_iter(SAMPLE)
        .map(|m| (m.as_str(), m.start(), m.end()))
        .collect();
    assert_eq!(matches, vec![("t", 20, 21)]);
}

#[test]
fn two_letter_words() {
    let pattern = Pattern::new(r"\b\w{2}\b").unwrap();
    assert_eq!(pattern.find_all(SAMPLE), vec!["is"]);
}

#[test]
fn offsets_slice_back_to_match_text() {
    let subject = "naïve café, déjà vu";
    let pattern = Pattern::new(r"\w+").unwrap();

    let mut previous_end = 0;
    for m in pattern.find_iter(subject) {
        assert_eq!(&subject[m.start()..m.end()], m.as_str());
        assert!(m.start() >= previous_end);
        previous_end = m.end();
    }
}

#[test]
fn byte_and_char_offsets_differ_after_multibyte_text() {
    let subject = "héllo wörld";
    let pattern = Pattern::new(r"w\w+").unwrap();
    let m = pattern.search(subject).unwrap();

    assert_eq!(m.as_str(), "wörld");
    assert_eq!(m.range(), 7..13);
    assert_eq!(m.char_range(), 6..11);
}

#[test]
fn no_match_returns_subject_unchanged() {
    let pattern = Pattern::new(r"\d").unwrap();

    assert!(matches!(pattern.substitute_all(SAMPLE, "#"), Cow::Borrowed(SAMPLE)));
    assert!(pattern.find_all(SAMPLE).is_empty());
    assert_eq!(pattern.find_iter(SAMPLE).count(), 0);
    assert!(pattern.match_at(SAMPLE, Anchor::Unanchored).is_none());
}

#[test]
fn replacement_is_literal() {
    let pattern = Pattern::new(r"(\w+)@(\w+)").unwrap();
    assert_eq!(pattern.substitute_all("me@host", "$2 ${1}"), "$2 ${1}");
    assert_eq!(pattern.substitute_expand("me@host", "$2 ${1}"), "host me");
}

#[test]
fn transform_called_once_per_match_in_order() {
    let pattern = Pattern::new(r"\d+").unwrap();
    let mut seen = Vec::new();

    let result = pattern.substitute_with("a1 b22 c333", |m| {
        seen.push(m.start());
        format!("<{}>", m.len())
    });

    assert_eq!(result, "a<1> b<2> c<3>");
    assert_eq!(seen, vec![1, 4, 8]);
}

#[test]
fn transform_sees_groups() {
    let pattern = Pattern::new(r"(?<key>\w+)=(?<value>\w+)").unwrap();
    let result = pattern.substitute_with("a=1, b=2", |m| {
        format!("{}:{}", m.name("value").unwrap(), m.name("key").unwrap())
    });
    assert_eq!(result, "1:a, 2:b");
}

#[test]
fn counted_substitution() {
    let pattern = Pattern::new(r"o").unwrap();

    let (text, count) = pattern.substitute_counted("foo boo", "0", 3);
    assert_eq!(text, "f00 b0o");
    assert_eq!(count, 3);

    let (text, count) = pattern.substitute_counted("foo boo", "0", 0);
    assert_eq!(text, "f00 b00");
    assert_eq!(count, 4);
}

#[test]
fn empty_matches_advance_one_code_point() {
    let pattern = Pattern::new(r"a*").unwrap();
    let ranges: Vec<_> = pattern.find_iter("baaac").map(|m| m.range()).collect();

    assert_eq!(ranges, vec![0..0, 1..4, 5..5]);
    assert_eq!(pattern.substitute_all("baaac", "-"), "-b-c-");
}

#[test]
fn empty_pattern_matches_between_every_code_point() {
    let pattern = Pattern::new("").unwrap();
    let starts: Vec<_> = pattern.find_iter("aé").map(|m| m.start()).collect();
    assert_eq!(starts, vec![0, 1, 3]);
}

#[test]
fn empty_subject() {
    let pattern = Pattern::new(r"x*").unwrap();
    let matches: Vec<_> = pattern.find_iter("").map(|m| m.range()).collect();
    assert_eq!(matches, vec![0..0]);

    assert!(Pattern::new("x").unwrap().find_all("").is_empty());
}

#[test]
fn anchors_select_position() {
    let pattern = Pattern::new("t").unwrap();

    assert_eq!(pattern.match_at(SAMPLE, Anchor::Unanchored).unwrap().start(), 17);
    assert!(pattern.match_at(SAMPLE, Anchor::Start).is_none());
    assert_eq!(pattern.match_at(SAMPLE, Anchor::End).unwrap().range(), 20..21);
    assert!(pattern.match_at(SAMPLE, Anchor::Full).is_none());

    let folded = Pattern::with_flags("t", PatternFlags::CASE_INSENSITIVE).unwrap();
    assert_eq!(folded.match_at(SAMPLE, Anchor::Start).unwrap().as_str(), "T");
}

#[test]
fn full_match_needs_the_whole_subject() {
    let pattern = Pattern::new(r"a|ab").unwrap();
    assert_eq!(pattern.match_at("ab", Anchor::Unanchored).unwrap().as_str(), "a");
    assert_eq!(pattern.match_at("ab", Anchor::Full).unwrap().as_str(), "ab");
    assert!(pattern.match_at("abc", Anchor::Full).is_none());
}

#[test]
fn dollar_does_not_match_before_trailing_newline() {
    let pattern = Pattern::new(r"t$").unwrap();
    assert!(pattern.find_all("text\n").is_empty());

    let multi = Pattern::with_flags(r"t$", PatternFlags::MULTI_LINE).unwrap();
    assert_eq!(multi.find_all("text\nnext"), vec!["t", "t"]);
}

#[test]
fn verbose_pattern_keeps_anchored_forms() {
    let pattern = Pattern::with_flags(
        r"
        \d+   # number
        ",
        PatternFlags::IGNORE_WHITESPACE,
    )
    .unwrap();

    assert_eq!(pattern.match_at("42 apples", Anchor::Start).unwrap().as_str(), "42");
    assert_eq!(pattern.match_at("apples 7", Anchor::End).unwrap().as_str(), "7");
    assert!(pattern.match_at("42 apples", Anchor::Full).is_none());
}

#[test]
fn anchored_match_keeps_groups() {
    let pattern = Pattern::new(r"(\w+)\s(\w+)").unwrap();
    let m = pattern.match_at("hello big world", Anchor::End).unwrap();

    assert_eq!(m.as_str(), "big world");
    assert_eq!(m.group(1), Some("big"));
    assert_eq!(m.group(2), Some("world"));
    assert_eq!(m.group_range(2), Some(10..15));
    assert_eq!(m.group(3), None);
}

#[test]
fn optional_group_absent() {
    let pattern = Pattern::new(r"(a)(b)?").unwrap();
    let m = pattern.search("a").unwrap();

    assert_eq!(m.group_count(), 2);
    assert_eq!(m.groups().collect::<Vec<_>>(), vec![Some("a"), None]);
}

#[test]
fn split_on_matches() {
    let pattern = Pattern::new(r",\s*").unwrap();
    assert_eq!(pattern.split("a, b,c"), vec!["a", "b", "c"]);
    assert_eq!(pattern.splitn("a, b,c", 2), vec!["a", "b,c"]);
    assert_eq!(pattern.split(""), vec![""]);
}

#[test]
fn pattern_reused_across_subjects() {
    let pattern = Pattern::new(r"\d+").unwrap();
    for (subject, expected) in [("a1", vec!["1"]), ("22 b 3", vec!["22", "3"]), ("", vec![])] {
        assert_eq!(pattern.find_all(subject), expected);
    }
}

#[test]
fn swap_greed_flag() {
    let greedy = Pattern::new(r"<.+>").unwrap();
    let lazy = Pattern::with_flags(r"<.+>", PatternFlags::SWAP_GREED).unwrap();

    assert_eq!(greedy.find_all("<a><b>"), vec!["<a><b>"]);
    assert_eq!(lazy.find_all("<a><b>"), vec!["<a>", "<b>"]);
}

#[test]
fn find_iter_is_single_pass() {
    let pattern = Pattern::new(r"\w+").unwrap();
    let mut matches = pattern.find_iter(SAMPLE);

    let ranges: Vec<_> = matches.by_ref().map(|m| m.range()).collect();
    assert_eq!(ranges, vec![0..4, 5..7, 8..9, 10..16, 17..21]);
    assert!(matches.next().is_none());
    assert!(matches.next().is_none());

    let restarted: Vec<_> = pattern.find_iter(SAMPLE).map(|m| m.range()).collect();
    assert_eq!(restarted, ranges);
}

#[test]
fn find_all_repeats_identically() {
    let pattern = Pattern::new(r"\b\w{2}\b").unwrap();
    let first = pattern.find_all(SAMPLE);
    assert_eq!(pattern.find_all(SAMPLE), first);
    assert_eq!(first, vec!["is"]);
}
