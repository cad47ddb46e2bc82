mod common;

use std::time::Duration;

use common::{TWO_HOP_PAYLOAD, UNREACHABLE_PAYLOAD};
use tokio::io::AsyncWriteExt;
use tree_paths::{
    error::Error,
    input::{parse_forest, read_forest, read_payload},
};

#[tokio::test]
async fn reads_whole_payload() {
    let payload = read_payload(TWO_HOP_PAYLOAD.as_bytes(), None).await.unwrap();
    assert_eq!(payload, TWO_HOP_PAYLOAD);
}

#[tokio::test]
async fn reads_payload_written_in_chunks() {
    let (mut writer, reader) = tokio::io::duplex(8);

    let producer = tokio::spawn(async move {
        for chunk in TWO_HOP_PAYLOAD.as_bytes().chunks(5) {
            writer.write_all(chunk).await.unwrap();
        }
    });

    let forest = read_forest(reader, Some(Duration::from_secs(5)))
        .await
        .unwrap();
    producer.await.unwrap();

    let tree = forest.tree("A").unwrap();
    assert_eq!(tree.neighbors("B"), ["A", "C"]);
}

#[tokio::test]
async fn times_out_on_incomplete_payload() {
    let (mut writer, reader) = tokio::io::duplex(64);
    writer.write_all(b"{\"A\": ").await.unwrap();

    let result = read_forest(reader, Some(Duration::from_millis(50))).await;
    assert!(matches!(result, Err(Error::Timeout(_))));

    drop(writer);
}

#[tokio::test]
async fn invalid_utf8_fails_the_read() {
    let result = read_payload(b"\xff\xfe\xfd".as_slice(), None).await;
    assert!(matches!(result, Err(Error::Read(_))));
}

#[test]
fn parses_forest() {
    let forest = parse_forest(UNREACHABLE_PAYLOAD).unwrap();
    assert_eq!(forest.number_of_trees(), 1);

    let tree = forest.tree("A").unwrap();
    assert_eq!(tree.number_of_vertices(), 3);
    assert!(tree.neighbors("C").is_empty());
    assert!(forest.tree("B").is_none());
}

#[test]
fn rejects_malformed_payloads() {
    for payload in [
        "",
        "{\"A\": {\"A\": [\"B\"]}",
        "[\"A\", \"B\"]",
        "{\"A\": [\"B\"]}",
        "{\"A\": {\"A\": [1, 2]}}",
        "{\"A\": {\"A\": \"B\"}}",
    ] {
        let result = parse_forest(payload);
        assert!(
            matches!(result, Err(Error::MalformedPayload(_))),
            "accepted {:?}",
            payload
        );
    }
}
