//! Tests for feed parsing orchestration

use std::io::Write;

use tempfile::NamedTempFile;

use crate::app::services::feed_parser::FeedParser;
use crate::Error;

const SAMPLE_FEED: &str = "\
no,group,subgroup,part,stock_code,description
1,Motor,Yağ Sistemi,Yağ Filtresi,OC90,\"Orijinal yağ filtresi, 5000 km\"
2,Motor,Yağ Sistemi,Yağ Pompası,YP12,\"Değişken debili pompa\"
3,Fren,Disk,Ön Balata,BL4,\"Ön aks, sensörlü\"
4,Fren,Disk,Arka Balata,BL5,\"Arka aks\"
";

#[test]
fn test_parse_sample_feed() {
    let parser = FeedParser::new();
    let result = parser.parse_text(SAMPLE_FEED);

    assert_eq!(result.records.len(), 4);
    assert_eq!(result.stats.total_lines, 5);
    assert_eq!(result.stats.data_lines, 4);
    assert_eq!(result.stats.records_extracted, 4);
    assert_eq!(result.stats.lines_skipped, 0);

    let first = &result.records[0];
    assert_eq!(first.id, 1);
    assert_eq!(first.group, "Motor");
    assert_eq!(first.subgroup, "Yağ Sistemi");
    assert_eq!(first.part, "Yağ Filtresi");
    assert_eq!(first.stock_code, "OC90");
    assert_eq!(first.description, "Orijinal yağ filtresi, 5000 km");
}

#[test]
fn test_header_is_always_excluded() {
    // A header that happens to match the record shape still never produces
    // a record.
    let feed = "0,Motor,Yağ Sistemi,Yağ Filtresi,OC90,\"looks like data\"\n\
                1,Fren,Disk,Balata,BL4,\"gerçek kayıt\"\n";

    let parser = FeedParser::new();
    let result = parser.parse_text(feed);

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].group, "Fren");
}

#[test]
fn test_malformed_lines_are_dropped_silently() {
    let feed = "header\n\
                1,Motor,Yağ Sistemi,Yağ Filtresi,OC90,\"tamam\"\n\
                only,three,fields\n\
                2,Motor,Yakıt,Enjektör,EN1,unquoted description\n\
                3,Fren,Disk,Balata,BL4,\"tamam\"\n";

    let parser = FeedParser::new();
    let result = parser.parse_text(feed);

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.stats.lines_skipped, 2);
    assert_eq!(result.records[0].part, "Yağ Filtresi");
    assert_eq!(result.records[1].part, "Balata");
}

#[test]
fn test_identifiers_are_dense_across_skipped_lines() {
    let feed = "header\n\
                bad line\n\
                1,Motor,Yağ,Filtre,OC90,\"a\"\n\
                another bad line\n\
                2,Motor,Yağ,Pompa,YP1,\"b\"\n\
                \n\
                3,Fren,Disk,Balata,BL4,\"c\"\n";

    let parser = FeedParser::new();
    let result = parser.parse_text(feed);

    let ids: Vec<u32> = result.records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_order_preserves_feed_line_order() {
    let parser = FeedParser::new();
    let result = parser.parse_text(SAMPLE_FEED);

    let parts: Vec<&str> = result.records.iter().map(|r| r.part.as_str()).collect();
    assert_eq!(
        parts,
        vec!["Yağ Filtresi", "Yağ Pompası", "Ön Balata", "Arka Balata"]
    );
}

#[test]
fn test_empty_and_whitespace_lines_are_counted_not_skipped() {
    let feed = "header\n\n   \n1,Motor,Yağ,Filtre,OC90,\"a\"\n";

    let parser = FeedParser::new();
    let result = parser.parse_text(feed);

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.stats.empty_lines, 2);
    assert_eq!(result.stats.lines_skipped, 0);
}

#[test]
fn test_empty_input_yields_empty_result() {
    let parser = FeedParser::new();

    let result = parser.parse_text("");
    assert!(result.is_empty());
    assert_eq!(result.stats.total_lines, 0);

    let result = parser.parse_text("header only\n");
    assert!(result.is_empty());
    assert_eq!(result.stats.total_lines, 1);
    assert_eq!(result.stats.data_lines, 0);
}

#[test]
fn test_parse_is_restartable() {
    let parser = FeedParser::new();

    let first = parser.parse_text(SAMPLE_FEED);
    let second = parser.parse_text(SAMPLE_FEED);

    assert_eq!(first.records, second.records);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_crlf_feed() {
    let feed = "header\r\n1,Motor,Yağ,Filtre,OC90,\"orijinal\"\r\n";

    let parser = FeedParser::new();
    let result = parser.parse_text(feed);

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].description, "orijinal");
}

#[test]
fn test_parse_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_FEED.as_bytes()).unwrap();

    let parser = FeedParser::new();
    let result = parser.parse_file(file.path()).unwrap();

    assert_eq!(result.records.len(), 4);
}

#[test]
fn test_parse_file_missing() {
    let parser = FeedParser::new();
    let result = parser.parse_file(std::path::Path::new("/nonexistent/feed.csv"));

    assert!(matches!(result.unwrap_err(), Error::Io { .. }));
}

#[test]
fn test_parse_file_directory() {
    let dir = tempfile::TempDir::new().unwrap();

    let parser = FeedParser::new();
    let result = parser.parse_file(dir.path());

    assert!(matches!(result.unwrap_err(), Error::Feed { .. }));
}
