use crate::config::*;
use crate::dialect::{self, Constructor, MARKUP_METHODS};
use crate::error::Error;
use crate::pattern::{self, PatternError};

fn markup(name: &str) -> dialect::MarkupMethod {
    *MARKUP_METHODS.iter().find(|m| m.name == name).unwrap()
}

// ========== Config ==========

#[test]
fn test_config_default() {
    let cfg = EncoderConfig::default();
    assert_eq!(cfg.split_threshold, 65535);
    assert_eq!(cfg.strategies, vec![StrategyKind::CodePoint, StrategyKind::Lookup]);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_config_from_json_partial() {
    let cfg = EncoderConfig::from_json(r#"{"split_threshold": 128}"#).unwrap();
    assert_eq!(cfg.split_threshold, 128);
    assert_eq!(cfg.strategies.len(), 2);
}

#[test]
fn test_config_from_json_strategies() {
    let cfg = EncoderConfig::from_json(r#"{"strategies": ["lookup"]}"#).unwrap();
    assert_eq!(cfg.strategies, vec![StrategyKind::Lookup]);
}

#[test]
fn test_config_rejects_zero_threshold() {
    let err = EncoderConfig::from_json(r#"{"split_threshold": 0}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}

#[test]
fn test_config_rejects_empty_strategies() {
    let cfg = EncoderConfig::default().with_strategies(vec![]);
    assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));
}

#[test]
fn test_config_bad_json() {
    let err = EncoderConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn test_config_roundtrip_json() {
    let cfg = EncoderConfig::default().with_split_threshold(42);
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("\"code_point\""));
    assert_eq!(EncoderConfig::from_json(&json).unwrap(), cfg);
}

#[test]
fn test_strategy_names() {
    assert_eq!(StrategyKind::CodePoint.name(), "code_point");
    assert_eq!(StrategyKind::Lookup.name(), "lookup");
}

// ========== Dialect facts ==========

#[test]
fn test_native_function() {
    assert_eq!(dialect::native_function("at"), "function at() { [native code] }");
}

#[test]
fn test_markup_bare() {
    assert_eq!(markup("bold").render(None), "<b></b>");
    assert_eq!(markup("fixed").render(None), "<tt></tt>");
    assert_eq!(markup("sub").arity(), 0);
}

#[test]
fn test_markup_attribute_undefined() {
    assert_eq!(markup("fontcolor").render(None), "<font color=\"undefined\"></font>");
    assert_eq!(markup("anchor").render(None), "<a name=\"undefined\"></a>");
    assert_eq!(markup("link").arity(), 1);
}

#[test]
fn test_markup_attribute_quote_escaped() {
    assert_eq!(markup("fontcolor").render(Some("\"")), "<font color=\"&quot;\"></font>");
    assert_eq!(markup("fontsize").render(Some("\"")), "<font size=\"&quot;\"></font>");
}

#[test]
fn test_markup_order() {
    let names: Vec<&str> = MARKUP_METHODS.iter().map(|m| m.name).collect();
    assert_eq!(names.first(), Some(&"anchor"));
    assert_eq!(names.last(), Some(&"sup"));
    assert_eq!(names.len(), 13);
}

#[test]
fn test_constructor_facts() {
    assert_eq!(Constructor::ALL.len(), 6);
    assert_eq!(Constructor::RegExp.rendering(), "function RegExp() { [native code] }");
    assert_eq!(Constructor::Array.empty_call(), "");
    assert_eq!(Constructor::Number.empty_call(), "0");
    assert_eq!(Constructor::Function.empty_call(), "function anonymous(\n) {\n\n}");
    assert_eq!(Constructor::RegExp.empty_call(), "/(?:)/");
}

#[test]
fn test_btoa() {
    assert_eq!(dialect::btoa("false").as_deref(), Some("ZmFsc2U="));
    assert_eq!(dialect::btoa("\n").as_deref(), Some("Cg=="));
    assert_eq!(dialect::btoa("").as_deref(), Some(""));
    assert_eq!(dialect::btoa("é").as_deref(), Some("6Q=="));
}

#[test]
fn test_btoa_rejects_wide_chars() {
    assert_eq!(dialect::btoa("中"), None);
}

// ========== Pattern source ==========

#[test]
fn test_pattern_empty() {
    assert_eq!(pattern::regexp_string("").unwrap(), "/(?:)/");
}

#[test]
fn test_pattern_plain() {
    assert_eq!(pattern::regexp_string("false").unwrap(), "/false/");
    assert_eq!(pattern::regexp_string("1.1e+21").unwrap(), "/1.1e+21/");
}

#[test]
fn test_pattern_escapes_slash() {
    assert_eq!(pattern::regexp_string("<b></b>").unwrap(), "/<b><\\/b>/");
    assert_eq!(pattern::regexp_string("/").unwrap(), "/\\//");
    assert_eq!(pattern::regexp_string("/(?:)/").unwrap(), "/\\/(?:)\\//");
}

#[test]
fn test_pattern_keeps_escaped_slash() {
    assert_eq!(pattern::regexp_string("\\/").unwrap(), "/\\//");
}

#[test]
fn test_pattern_slash_in_class() {
    assert_eq!(pattern::regexp_string("[/]").unwrap(), "/[/]/");
}

#[test]
fn test_pattern_line_terminators() {
    assert_eq!(
        pattern::regexp_string("function anonymous(\n) {\n\n}").unwrap(),
        "/function anonymous(\\n) {\\n\\n}/"
    );
    assert_eq!(pattern::regexp_string("\r").unwrap(), "/\\r/");
    assert_eq!(pattern::regexp_string("[\n]").unwrap(), "/[\\n]/");
}

#[test]
fn test_pattern_annex_b_literals() {
    assert_eq!(pattern::regexp_string("]").unwrap(), "/]/");
    assert_eq!(pattern::regexp_string("{").unwrap(), "/{/");
    assert_eq!(pattern::regexp_string("}").unwrap(), "/}/");
    assert_eq!(pattern::regexp_string("a{").unwrap(), "/a{/");
    assert_eq!(
        pattern::regexp_string("function at() { [native code] }").unwrap(),
        "/function at() { [native code] }/"
    );
}

#[test]
fn test_pattern_quantifiers() {
    assert_eq!(pattern::regexp_string("a{2}?").unwrap(), "/a{2}?/");
    assert_eq!(pattern::regexp_string("(a)(?:b)+").unwrap(), "/(a)(?:b)+/");
    assert_eq!(pattern::pattern_source("a{2,1}"), Err(PatternError::QuantifierOutOfOrder(1)));
}

#[test]
fn test_pattern_nothing_to_repeat() {
    for p in ["+", "?", "*", "^*", "a|*", "\\b+", "a{2}{3}"] {
        assert!(
            matches!(pattern::pattern_source(p), Err(PatternError::NothingToRepeat(_))),
            "{p:?} should not compile"
        );
    }
}

#[test]
fn test_pattern_groups() {
    assert_eq!(pattern::pattern_source("("), Err(PatternError::UnterminatedGroup));
    assert_eq!(pattern::pattern_source(")"), Err(PatternError::UnmatchedParen(0)));
    assert!(matches!(pattern::pattern_source("(?=a)"), Err(PatternError::Unsupported(0))));
}

#[test]
fn test_pattern_classes() {
    assert_eq!(pattern::pattern_source("["), Err(PatternError::UnterminatedClass(0)));
    assert_eq!(pattern::pattern_source("[z-a]"), Err(PatternError::RangeOutOfOrder(0)));
    assert_eq!(pattern::pattern_source("[a-z]").unwrap(), "[a-z]");
    assert_eq!(pattern::pattern_source("[a-]").unwrap(), "[a-]");
    assert_eq!(pattern::pattern_source("[]]").unwrap(), "[]]");
}

#[test]
fn test_pattern_trailing_backslash() {
    assert_eq!(pattern::pattern_source("\\"), Err(PatternError::TrailingBackslash));
}
