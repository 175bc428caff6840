//! Integration tests for selection, decoding and rendering over real
//! directories.

use metareader_codec::{CodecError, FailoverEntry};
use metareader_core::{
    render, run_failover, run_snapshot, CoreError, OutputOptions, Outcome, RunConfig,
};
use metareader_testkit::prelude::*;
use proptest::prelude::*;
use std::fs;

fn render_string<R: metareader_core::Record>(
    report: &metareader_core::Report<R>,
    structured: bool,
) -> String {
    let mut out = Vec::new();
    render(report, OutputOptions { structured }, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn scan_mode_reads_every_snapshot() {
    let dir = BackupDir::new();
    dir.write_snapshot(1, 10, 20, 15);
    dir.write_snapshot(12, 100, 200, 150);
    dir.write_raw("notes.txt", b"hello");
    dir.write_raw("snapshot_x.snp", &encode_snapshot(1, 1, 1));

    let report = run_snapshot(&RunConfig::new(dir.path())).unwrap();
    let decoded: Vec<(String, u64)> = report
        .decoded()
        .map(|(vbid, marker)| (vbid.to_string(), marker.start))
        .collect();
    assert_eq!(
        decoded,
        [("1".to_string(), 10), ("12".to_string(), 100)]
    );

    assert_eq!(
        render_string(&report, false),
        "(vBucket 1) start: 10 end: 20 lastSeqNo: 15\n\
         (vBucket 12) start: 100 end: 200 lastSeqNo: 150\n"
    );
}

#[test]
fn filtered_mode_reports_missing_files_and_continues() {
    let dir = BackupDir::new();
    dir.write_failover(2, &[(0, 7), (40, 8)]);
    dir.write_failover(4, &[(3, 1)]);

    let config = RunConfig::new(dir.path()).filter("2-4");
    let report = run_failover(&config).unwrap();
    assert_eq!(report.outcomes.len(), 3);
    assert!(matches!(report.outcomes[1], Outcome::NotFound { .. }));
    assert_eq!(report.failures(), 1);

    assert_eq!(
        render_string(&report, false),
        "Failover log file for vbid (3) could not be found\n\
         (vbid 2) {seq: 0, uuid: 7}, {seq: 40, uuid: 8}\n\
         (vbid 4) {seq: 3, uuid: 1}\n"
    );
}

#[test]
fn filtered_mode_keeps_order_and_duplicates() {
    let dir = BackupDir::new();
    dir.write_snapshot(1, 1, 1, 1);
    dir.write_snapshot(5, 5, 5, 5);

    let report = run_snapshot(&RunConfig::new(dir.path()).filter("5,1,5")).unwrap();
    let ids: Vec<String> = report.decoded().map(|(v, _)| v.to_string()).collect();
    assert_eq!(ids, ["5", "1", "5"]);
}

#[test]
fn decode_failures_do_not_abort_the_batch() {
    let dir = BackupDir::new();
    dir.write_failover(1, &[(5, 1), (3, 2)]);
    dir.write_failover(2, &[(1, 1)]);
    dir.write_raw("failoverlog_3.fol", &[0u8; 17]);

    let report = run_failover(&RunConfig::new(dir.path())).unwrap();
    assert_eq!(report.outcomes.len(), 3);
    assert!(matches!(
        &report.outcomes[0],
        Outcome::DecodeFailed {
            error: CodecError::SequenceRegression { .. },
            ..
        }
    ));
    let lens: Vec<usize> = report.decoded().map(|(_, log)| log.len()).collect();
    assert_eq!(lens, [1, 1]);
}

#[test]
fn short_snapshot_is_a_per_file_error() {
    let dir = BackupDir::new();
    dir.write_raw("snapshot_3.snp", &[0u8; 10]);
    dir.write_snapshot(4, 1, 2, 3);

    let report = run_snapshot(&RunConfig::new(dir.path())).unwrap();
    assert_eq!(report.failures(), 1);
    let text = render_string(&report, false);
    assert!(text.starts_with("Error decoding snapshot_3.snp: could not read end due to:"));
    assert!(text.ends_with("(vBucket 4) start: 1 end: 2 lastSeqNo: 3\n"));
}

#[test]
fn structured_output_omits_missing_and_broken_files() {
    let dir = BackupDir::new();
    dir.write_snapshot(1, 100, 200, 150);
    dir.write_snapshot(2, 5, 6, 7);
    dir.write_raw("snapshot_4.snp", &[1, 2, 3]);

    let config = RunConfig::new(dir.path()).filter("1-4").structured(true);
    let report = run_snapshot(&config).unwrap();
    let text = render_string(&report, config.output.structured);

    let document: serde_json::Value = serde_json::from_str(&text).unwrap();
    let snapshots = document["snapshots"].as_object().unwrap();
    let mut keys: Vec<&str> = snapshots.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["1", "2"]);
    assert_eq!(
        snapshots["1"],
        serde_json::json!({"start": 100, "end": 200, "seqNo": 150})
    );
    assert!(!text.contains("could not be found"));
}

#[test]
fn root_must_be_an_existing_directory() {
    let dir = BackupDir::new();
    let file = dir.write_snapshot(1, 1, 2, 3);

    assert!(matches!(
        run_snapshot(&RunConfig::new(&file)),
        Err(CoreError::NotADirectory { .. })
    ));
    assert!(matches!(
        run_failover(&RunConfig::new(dir.path().join("missing"))),
        Err(CoreError::PathNotFound { .. })
    ));
}

#[test]
fn subdirectories_are_not_scanned() {
    let dir = BackupDir::new();
    dir.create_subdir("snapshot_9.snp");
    fs::write(dir.path().join("snapshot_8.snp"), encode_snapshot(8, 8, 8)).unwrap();

    let report = run_snapshot(&RunConfig::new(dir.path())).unwrap();
    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(report.outcomes[0].vbid().as_str(), "8");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn failover_files_roundtrip(
        vbid in vbid_strategy(),
        entries in failover_entries_strategy(24),
    ) {
        let dir = BackupDir::new();
        dir.write_raw(&format!("failoverlog_{vbid}.fol"), &encode_failover_entries(&entries));

        let config = RunConfig::new(dir.path()).filter(vbid.to_string());
        let report = run_failover(&config).unwrap();
        let decoded: Vec<FailoverEntry> = report
            .decoded()
            .flat_map(|(_, log)| log.entries().to_vec())
            .collect();
        prop_assert_eq!(decoded, entries);
    }
}
