use anyhow::Result;
use letterbeam::testing::*;
use letterbeam::*;

fn page_of(names: &[&str]) -> Page {
    Page::new(names.iter().map(|n| person(n, "Doe")).collect())
}

#[test]
fn zero_target_fails_without_fetching() {
    let source = ScriptedSource::repeating(sample_page());
    let err = Accumulator::new(&source).fetch(0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(source.calls(), 0);
}

#[test]
fn exact_count_from_single_page() -> Result<()> {
    let source = ScriptedSource::new(vec![sample_page()]);
    let out = Accumulator::new(&source).fetch(3)?;
    assert_eq!(out.records, sample_records());
    assert_eq!(out.pages, 1);
    Ok(())
}

#[test]
fn exact_count_across_pages() -> Result<()> {
    for target in 1..=10 {
        let source = ScriptedSource::repeating(page_of(&["Ann", "Ben", "Cid"]));
        let out = Accumulator::new(&source).fetch(target)?;
        assert_eq!(out.records.len(), target, "target {target}");
        assert_eq!(out.pages, target.div_ceil(3));
        assert_eq!(source.calls(), out.pages);
    }
    Ok(())
}

#[test]
fn overflow_keeps_first_records_in_arrival_order() -> Result<()> {
    let source = ScriptedSource::new(vec![
        page_of(&["Ann", "Ben"]),
        page_of(&["Cid", "Dan", "Eve"]),
    ]);
    let out = Accumulator::new(&source).fetch(3)?;
    assert_eq!(out.records, page_of(&["Ann", "Ben", "Cid"]).results);
    Ok(())
}

#[test]
fn identical_pages_still_terminate_with_duplicates() -> Result<()> {
    let source = ScriptedSource::repeating(sample_page());
    let out = Accumulator::new(&source).fetch(7)?;
    assert_eq!(out.records.len(), 7);
    assert_eq!(out.pages, 3);
    assert_eq!(dedupe(out.records).len(), 3);
    Ok(())
}

#[test]
fn empty_pages_stop_at_page_limit() {
    let source = ScriptedSource::repeating(Page::default());
    let err = Accumulator::new(&source)
        .with_max_pages(5)
        .fetch(1)
        .unwrap_err();
    assert!(matches!(
        err,
        IngestError::PageLimitReached {
            pages: 5,
            collected: 0,
            target: 1
        }
    ));
    assert_eq!(source.calls(), 5);
}

#[test]
fn page_limit_not_hit_when_target_reached_on_last_allowed_page() -> Result<()> {
    let source = ScriptedSource::repeating(page_of(&["Ann", "Ben"]));
    let out = Accumulator::new(&source).with_max_pages(2).fetch(4)?;
    assert_eq!(out.records.len(), 4);
    Ok(())
}

#[test]
fn zero_page_limit_is_invalid() {
    let source = ScriptedSource::repeating(sample_page());
    let err = Accumulator::new(&source).with_max_pages(0).fetch(1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(source.calls(), 0);
}

#[test]
fn fetch_error_mid_run_returns_no_partial_result() {
    let source = ScriptedSource::from_responses(vec![
        Ok(sample_page()),
        Err(IngestError::FetchFailed {
            endpoint: "scripted".into(),
            reason: "connection reset".into(),
        }),
        Ok(sample_page()),
    ]);
    let err = Accumulator::new(&source).fetch(5).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FetchFailed);
    assert_eq!(source.calls(), 2);
}

#[test]
fn decode_error_is_fatal() {
    let bad = decode_page(br#"{"results": 3}"#, "scripted");
    assert!(bad.is_err());
    let source = ScriptedSource::from_responses(vec![bad]);
    let err = Accumulator::new(&source).fetch(1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecodeFailed);
}
