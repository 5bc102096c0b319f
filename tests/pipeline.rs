use anyhow::Result;
use letterbeam::testing::*;
use letterbeam::*;
use std::fs;

#[test]
fn end_to_end_into_directory() -> Result<()> {
    let (dir, sink) = temp_fs_sink()?;
    let source = ScriptedSource::repeating(Page::new(mixed_records()));
    let summary = IngestPipeline::new(&source, &sink).run(5)?;

    assert_eq!(summary.pages, 1);
    assert_eq!(summary.fetched, 5);
    assert_eq!(summary.unique, 4);
    assert_eq!(summary.groups, 4);

    let mut total = 0;
    for doc in &summary.documents {
        let on_disk = fs::read(dir.path().join(&doc.file_name))?;
        assert_eq!(on_disk, doc.bytes);
        let g = decode_group(&on_disk)?;
        assert_eq!(g.index(), doc.key);
        total += g.total_records();
    }
    assert_eq!(total, 4);

    let john = decode_group(&fs::read(dir.path().join("J.json"))?)?;
    assert_eq!(john.total_records(), 1);
    Ok(())
}

#[test]
fn repeated_pages_shrink_unique_count() -> Result<()> {
    let sink = MemorySink::new();
    let source = ScriptedSource::repeating(sample_page());
    let summary = IngestPipeline::new(&source, &sink).run(10)?;
    assert_eq!(summary.fetched, 10);
    assert_eq!(summary.pages, 4);
    assert_eq!(summary.unique, 3);
    assert_eq!(sink.names(), vec!["J.json"]);
    let j = decode_group(&sink.get("J.json").unwrap())?;
    assert_eq!(j.total_records(), 3);
    Ok(())
}

#[test]
fn invalid_target_writes_nothing() {
    let sink = MemorySink::new();
    let source = ScriptedSource::repeating(sample_page());
    let err = IngestPipeline::new(&source, &sink).run(0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(source.calls(), 0);
    assert!(sink.names().is_empty());
}

#[test]
fn malformed_record_stops_before_writing() {
    let mut blank = person("X", "Y");
    blank.first_name = String::new();
    let sink = MemorySink::new();
    let source = ScriptedSource::new(vec![Page::new(vec![person("Ann", "Lee"), blank])]);
    let err = IngestPipeline::new(&source, &sink).run(2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedRecord);
    assert!(sink.names().is_empty());
}

#[test]
fn persist_failure_surfaces_key() {
    let sink = FailingSink::new("M.json");
    let source = ScriptedSource::new(vec![Page::new(mixed_records())]);
    let err = IngestPipeline::new(&source, &sink).run(5).unwrap_err();
    assert!(matches!(err, IngestError::PersistFailed { ref key, .. } if key == "M"));
    assert_eq!(sink.stored().names(), vec!["A.json", "B.json", "J.json"]);
}

#[test]
fn page_limit_applies_to_pipeline() {
    let sink = MemorySink::new();
    let source = ScriptedSource::repeating(Page::default());
    let err = IngestPipeline::new(&source, &sink)
        .with_max_pages(3)
        .run(1)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PageLimitReached);
    assert_eq!(source.calls(), 3);
}

#[test]
fn rerun_is_idempotent_per_key() -> Result<()> {
    let (dir, sink) = temp_fs_sink()?;
    let first = IngestPipeline::new(ScriptedSource::repeating(sample_page()), &sink).run(3)?;
    let second = IngestPipeline::new(ScriptedSource::repeating(sample_page()), &sink).run(3)?;
    assert_eq!(first.groups, second.groups);
    let j = decode_group(&fs::read(dir.path().join("J.json"))?)?;
    assert_eq!(j.total_records(), 3);
    Ok(())
}
