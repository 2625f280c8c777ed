//! Tests for the five-field line shape matcher

use crate::app::services::feed_parser::line_matcher::LineMatcher;

#[test]
fn test_match_well_formed_line() {
    let matcher = LineMatcher::new();

    let fields = matcher
        .match_line("1,Motor,Yağ Sistemi,Yağ Filtresi,OC90,\"Orijinal yağ filtresi, 5000 km\"")
        .unwrap();

    assert_eq!(fields.group, "Motor");
    assert_eq!(fields.subgroup, "Yağ Sistemi");
    assert_eq!(fields.part, "Yağ Filtresi");
    assert_eq!(fields.stock_code, "OC90");
    assert_eq!(fields.description, "Orijinal yağ filtresi, 5000 km");
}

#[test]
fn test_fields_are_trimmed() {
    let matcher = LineMatcher::new();

    let fields = matcher
        .match_line("7, Motor , Soğutma , Termostat , TH22 ,\" 88 derece \"")
        .unwrap();

    assert_eq!(fields.group, "Motor");
    assert_eq!(fields.subgroup, "Soğutma");
    assert_eq!(fields.part, "Termostat");
    assert_eq!(fields.stock_code, "TH22");
    assert_eq!(fields.description, "88 derece");
}

#[test]
fn test_description_may_contain_delimiters() {
    let matcher = LineMatcher::new();

    let fields = matcher
        .match_line("3,Fren,Disk,Balata,BL4,\"ön aks, 4 adet; sensörlü,\"")
        .unwrap();

    // Commas inside the quotes belong to the description, including a
    // trailing comma right before the closing quote.
    assert_eq!(fields.description, "ön aks, 4 adet; sensörlü,");
}

#[test]
fn test_trailing_carriage_return_tolerated() {
    let matcher = LineMatcher::new();

    let fields = matcher
        .match_line("2,Motor,Yakıt,Enjektör,EN1,\"common rail\"\r")
        .unwrap();
    assert_eq!(fields.description, "common rail");
}

#[test]
fn test_leading_row_token_is_discarded() {
    let matcher = LineMatcher::new();

    // The leading token never reaches the captured fields, whatever it says.
    let fields = matcher
        .match_line("9999,Motor,Yakıt,Pompa,PM5,\"yüksek basınç\"")
        .unwrap();
    assert_eq!(fields.group, "Motor");

    let fields = matcher
        .match_line("x,Motor,Yakıt,Pompa,PM5,\"yüksek basınç\"")
        .unwrap();
    assert_eq!(fields.group, "Motor");
}

#[test]
fn test_rejects_too_few_fields() {
    let matcher = LineMatcher::new();

    assert!(matcher.match_line("1,Motor,Yağ Sistemi").is_none());
    assert!(matcher.match_line("Motor,Yağ,Filtre").is_none());
}

#[test]
fn test_rejects_missing_quoted_description() {
    let matcher = LineMatcher::new();

    assert!(
        matcher
            .match_line("1,Motor,Yağ Sistemi,Yağ Filtresi,OC90,filtre")
            .is_none()
    );
}

#[test]
fn test_rejects_too_many_bare_fields() {
    let matcher = LineMatcher::new();

    assert!(
        matcher
            .match_line("1,Motor,Yağ,Filtre,OC90,extra,\"açıklama\"")
            .is_none()
    );
}

#[test]
fn test_rejects_unterminated_quote() {
    let matcher = LineMatcher::new();

    assert!(
        matcher
            .match_line("1,Motor,Yağ,Filtre,OC90,\"açıklama")
            .is_none()
    );
}

#[test]
fn test_rejects_escaped_quote_in_description() {
    let matcher = LineMatcher::new();

    // Escaped or doubled quotes inside the description are a documented
    // non-feature; such lines are dropped rather than half-parsed.
    assert!(
        matcher
            .match_line("1,Motor,Yağ,Filtre,OC90,\"5\"\" hortum\"")
            .is_none()
    );
}

#[test]
fn test_rejects_quoted_bare_field() {
    let matcher = LineMatcher::new();

    assert!(
        matcher
            .match_line("1,\"Motor\",Yağ,Filtre,OC90,\"açıklama\"")
            .is_none()
    );
}

#[test]
fn test_rejects_trailing_content_after_quote() {
    let matcher = LineMatcher::new();

    assert!(
        matcher
            .match_line("1,Motor,Yağ,Filtre,OC90,\"açıklama\",extra")
            .is_none()
    );
}

#[test]
fn test_empty_description_is_accepted() {
    let matcher = LineMatcher::new();

    let fields = matcher.match_line("1,Motor,Yağ,Filtre,OC90,\"\"").unwrap();
    assert_eq!(fields.description, "");
}
