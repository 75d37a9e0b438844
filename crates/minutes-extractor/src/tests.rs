//! Integration tests for the pipeline

#[cfg(test)]
mod tests {
    use crate::{Archive, ExtractorError, MeetingRecord, Pipeline, PipelineConfig};
    use minutes_llm::MockProvider;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    const VALID: &str = r#"{
        "date": "2004-01-21",
        "location": "Clubhouse",
        "attendance_members": ["Mike Dunn"],
        "motions": [{"description": "Raise dues", "proposed_by": "Sue", "result": "passed"}],
        "next_meeting_info": null
    }"#;

    fn no_delay() -> PipelineConfig {
        PipelineConfig {
            call_delay_ms: 0,
            error_delay_ms: 0,
            ..PipelineConfig::default()
        }
    }

    struct Workspace {
        _dir: TempDir,
        out: PathBuf,
        errors: PathBuf,
    }

    impl Workspace {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            Self {
                out: dir.path().join("formatted_minutes.jsonl"),
                errors: dir.path().join("errors.log"),
                _dir: dir,
            }
        }

        fn archive(&self) -> Archive {
            Archive::open(&self.out, &self.errors).unwrap()
        }

        fn records(&self) -> Vec<MeetingRecord> {
            fs::read_to_string(&self.out)
                .unwrap()
                .lines()
                .map(|line| serde_json::from_str(line).unwrap())
                .collect()
        }

        fn error_lines(&self) -> Vec<String> {
            fs::read_to_string(&self.errors)
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    #[tokio::test]
    async fn test_all_conformant_segments_are_archived() {
        let ws = Workspace::new();
        let llm = MockProvider::new(VALID);
        let pipeline = Pipeline::new(llm.clone(), no_delay()).unwrap();

        let input = "Meeting one\n***\nMeeting two\n---\nMeeting three";
        let summary = pipeline.run(input, &mut ws.archive()).await.unwrap();

        assert_eq!(summary.segments, 3);
        assert_eq!(summary.archived, 3);
        assert_eq!(summary.rejected, 0);
        assert_eq!(llm.call_count(), 3);

        let records = ws.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].original_text, "Meeting one");
        assert_eq!(records[2].original_text, "Meeting three");
        assert!(ws.error_lines().is_empty());
    }

    #[tokio::test]
    async fn test_missing_date_goes_to_error_log() {
        let ws = Workspace::new();
        let llm = MockProvider::new(r#"{"location": "Clubhouse"}"#);
        let pipeline = Pipeline::new(llm, no_delay()).unwrap();

        let summary = pipeline
            .run("Meeting A text", &mut ws.archive())
            .await
            .unwrap();

        assert_eq!(summary.archived, 0);
        assert_eq!(summary.rejected, 1);
        assert!(ws.records().is_empty());

        let errors = ws.error_lines();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("segment 1/1 failed"));
        assert!(errors[0].contains("missing required field 'date'"));
        assert!(errors[0].contains("Meeting A text"));
    }

    #[tokio::test]
    async fn test_mixed_outcomes_are_logged_and_skipped() {
        let ws = Workspace::new();
        let mut llm = MockProvider::new(VALID);
        llm.add_response("Meeting B", r#"{"date": 7, "location": "Clubhouse"}"#);
        llm.add_error("Meeting C", "HTTP 503: overloaded");
        llm.add_response("Meeting D", "not json at all");
        let pipeline = Pipeline::new(llm, no_delay()).unwrap();

        let input = "Meeting A\n***\nMeeting B\n***\nMeeting C\n***\nMeeting D\n***\nMeeting E";
        let summary = pipeline.run(input, &mut ws.archive()).await.unwrap();

        assert_eq!(summary.segments, 5);
        assert_eq!(summary.archived, 2);
        assert_eq!(summary.rejected, 3);

        let texts: Vec<_> = ws.records().into_iter().map(|r| r.original_text).collect();
        assert_eq!(texts, vec!["Meeting A", "Meeting E"]);

        let errors = ws.error_lines();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("segment 2/5") && errors[0].contains("wrong type"));
        assert!(errors[1].contains("segment 3/5") && errors[1].contains("HTTP 503"));
        assert!(errors[2].contains("segment 4/5") && errors[2].contains("malformed JSON"));
    }

    #[tokio::test]
    async fn test_timed_out_segment_is_logged_and_skipped() {
        let ws = Workspace::new();
        let mut llm = MockProvider::new(VALID);
        llm.add_slow_response("Meeting A", VALID, Duration::from_millis(1_500));
        let config = PipelineConfig {
            extraction_timeout_secs: 1,
            ..no_delay()
        };
        let pipeline = Pipeline::new(llm.clone(), config).unwrap();

        let summary = pipeline
            .run("Meeting A\n***\nMeeting B", &mut ws.archive())
            .await
            .unwrap();

        assert_eq!(summary.archived, 1);
        assert_eq!(summary.rejected, 1);
        assert_eq!(llm.call_count(), 2);

        let texts: Vec<_> = ws.records().into_iter().map(|r| r.original_text).collect();
        assert_eq!(texts, vec!["Meeting B"]);

        let errors = ws.error_lines();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("segment 1/2 failed: Extraction timeout after 1s"));
    }

    #[tokio::test]
    async fn test_pauses_after_every_call() {
        let ws = Workspace::new();
        let mut llm = MockProvider::new(VALID);
        llm.add_error("Meeting B", "HTTP 503");
        let config = PipelineConfig {
            call_delay_ms: 100,
            error_delay_ms: 300,
            ..PipelineConfig::default()
        };
        let pipeline = Pipeline::new(llm, config).unwrap();

        let start = Instant::now();
        let summary = pipeline
            .run("Meeting A\n***\nMeeting B", &mut ws.archive())
            .await
            .unwrap();

        assert_eq!(summary.archived, 1);
        assert_eq!(summary.rejected, 1);
        assert!(start.elapsed() >= Duration::from_millis(400));
    }

    #[tokio::test]
    async fn test_success_pause_is_shorter_than_error_pause() {
        let ws = Workspace::new();
        let config = PipelineConfig {
            call_delay_ms: 50,
            error_delay_ms: 2_000,
            ..PipelineConfig::default()
        };
        let pipeline = Pipeline::new(MockProvider::new(VALID), config).unwrap();

        let start = Instant::now();
        pipeline
            .run("Meeting A\n***\nMeeting B", &mut ws.archive())
            .await
            .unwrap();

        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(100));
        assert!(elapsed < Duration::from_millis(2_000));
    }

    #[tokio::test]
    async fn test_every_archive_line_satisfies_schema() {
        let ws = Workspace::new();
        let mut llm = MockProvider::new(VALID);
        llm.add_response("Broken meeting", r#"{"date": "2004-01-21", "location": ["x"]}"#);
        let pipeline = Pipeline::new(llm, no_delay()).unwrap();

        pipeline
            .run("Good meeting\n***\nBroken meeting\n***\nGood again", &mut ws.archive())
            .await
            .unwrap();

        for line in fs::read_to_string(&ws.out).unwrap().lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(crate::validate(&value).is_ok(), "invalid line: {}", line);
        }
    }

    #[tokio::test]
    async fn test_rerun_appends_duplicates() {
        let ws = Workspace::new();
        let pipeline = Pipeline::new(MockProvider::new(VALID), no_delay()).unwrap();
        let input = "Meeting A text\n***\nMeeting B text";

        pipeline.run(input, &mut ws.archive()).await.unwrap();
        let first = fs::read_to_string(&ws.out).unwrap();

        pipeline.run(input, &mut ws.archive()).await.unwrap();
        let second = fs::read_to_string(&ws.out).unwrap();

        assert!(second.starts_with(&first));
        assert_eq!(second.lines().count(), 4);
    }

    #[tokio::test]
    async fn test_empty_input_still_creates_outputs() {
        let ws = Workspace::new();
        let llm = MockProvider::new(VALID);
        let pipeline = Pipeline::new(llm.clone(), no_delay()).unwrap();

        let summary = pipeline.run("  \n***\n  ", &mut ws.archive()).await.unwrap();

        assert_eq!(summary.segments, 0);
        assert_eq!(llm.call_count(), 0);
        assert!(ws.out.exists());
        assert!(ws.errors.exists());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = PipelineConfig {
            separators: vec![],
            ..no_delay()
        };
        let result = Pipeline::new(MockProvider::new(VALID), config);
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }
}
