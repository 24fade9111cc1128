use std::sync::Arc;

use cleancut::adapters::{FixedDurationSource, PlanRecorderSink};
use cleancut::app::{TrimInteractor, TrimSettings};
use cleancut::domain::model::TrimRequest;
use cleancut::*;

fn iv(start: u64, end: u64) -> Interval {
    Interval { start, end }
}

#[test]
fn test_time_value_conversion() {
    assert_eq!(TimeValue::parse("42").unwrap().seconds, 42);
    assert_eq!(TimeValue::parse("42.9").unwrap().seconds, 42);
    assert_eq!(TimeValue::parse("1:30").unwrap().seconds, 90);
    assert_eq!(TimeValue::parse("1:02:03").unwrap().seconds, 3723);

    for h in [0u64, 1, 12, 99] {
        for m in [0u64, 5, 59, 75] {
            let token = format!("{}:{}:{}.5", h, m, 30);
            assert_eq!(
                TimeValue::parse(&token).unwrap().seconds,
                h * 3600 + m * 60 + 30
            );
        }
    }
}

#[test]
fn test_parse_examples() {
    assert_eq!(parse_intervals("(1:30, 2:30)").unwrap(), vec![iv(90, 150)]);
    assert_eq!(
        parse_intervals("(0 1:0:1)--(1:1:23 1:1:59)").unwrap(),
        vec![iv(0, 3601), iv(3683, 3719)]
    );
    assert_eq!(
        parse_intervals("(1:20-2:0)(3:0 - 3:30)").unwrap(),
        vec![iv(80, 120), iv(180, 210)]
    );
    assert!(parse_intervals("no intervals at all").unwrap().is_empty());
}

#[test]
fn test_parse_start_after_end() {
    let err = parse_intervals("(2:00, 1:00)").unwrap_err();
    assert!(matches!(err, DomainError::StartAfterEnd { .. }));

    let crate_err: CleanCutError = err.into();
    assert!(crate_err.to_string().contains("after its end"));
}

#[test]
fn test_complement_examples() {
    assert_eq!(
        complement_intervals(&[iv(10, 20), iv(30, 40)], 50).unwrap(),
        vec![iv(0, 10), iv(20, 30), iv(40, 50)]
    );
    assert!(complement_intervals(&[iv(0, 10)], 10).unwrap().is_empty());
    assert_eq!(complement_intervals(&[], 100).unwrap(), vec![iv(0, 100)]);

    let gaps = complement_intervals(&[iv(0, 10), iv(10, 10), iv(10, 20)], 20).unwrap();
    assert!(gaps.contains(&iv(10, 10)));
}

#[test]
fn test_cut_then_keep_cover_timeline() {
    let length = 600;
    let cut = parse_intervals("drop (0:30-1:00), (2:00 2:30) and (9:00-10:00)").unwrap();
    let kept = RetainPlanner::retain(&cut, TrimMode::Cut, length).unwrap();

    let covered = RetainPlanner::total_duration(&cut) + RetainPlanner::total_duration(&kept);
    assert_eq!(covered, length);

    // Cut and retained intervals alternate and tile [0, length)
    let mut all: Vec<Interval> = cut.iter().chain(kept.iter()).copied().collect();
    all.sort_by_key(|i| (i.start, i.end));
    assert_eq!(all.first().unwrap().start, 0);
    assert_eq!(all.last().unwrap().end, length);
    for pair in all.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}

#[tokio::test]
async fn test_plan_only_trim() {
    let sink = Arc::new(PlanRecorderSink::new());
    let interactor = TrimInteractor::new(
        Arc::new(FixedDurationSource::new(3600)),
        sink.clone(),
        TrimSettings {
            output_suffix: "_clean".to_string(),
            default_extension: "mp4".to_string(),
        },
    );

    let request = TrimRequest::new("videos/lecture", "(0 1:0)(58:0 1:0:0)", TrimMode::Cut).unwrap();
    let response = interactor.execute(request).await.unwrap();

    assert_eq!(response.retained, vec![iv(60, 3480)]);
    assert_eq!(response.retained_duration, 3420);
    assert_eq!(
        response.output.path,
        std::path::Path::new("videos").join("lecture_clean.mp4")
    );
    assert!(!response.report.written);
    assert_eq!(sink.reports().len(), 1);
}
