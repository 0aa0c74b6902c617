use {crate::extraction::Best, nanoserde::{DeJson, SerJson}};

/// Result of one run, as printed by `--json`.
#[derive(SerJson, DeJson, Debug, PartialEq, Eq)]
pub struct Report {
    pub n: usize,
    pub answer: i64,
    /// 1-based start of the winning rotation, unknown for exhaustive runs.
    pub offset: Option<usize>,
}

impl Report {
    pub fn new(n: usize, best: Best) -> Self {
        Self {
            n,
            answer: best.experience,
            offset: Some(best.offset),
        }
    }

    pub fn naive(n: usize, answer: i64) -> Self {
        Self {
            n,
            answer,
            offset: None,
        }
    }

    /// The answer line: the bare number, or the whole report as JSON.
    pub fn render(&self, json: bool) -> String {
        if json {
            self.serialize_json()
        } else {
            self.answer.to_string()
        }
    }
}

#[test]
fn test_report_json() {
    let report = Report::new(
        3,
        Best {
            offset: 3,
            experience: 24,
        },
    );

    let json = report.serialize_json();
    assert!(json.contains("answer"));

    assert_eq!(Report::deserialize_json(&json).unwrap(), report);
    assert_eq!(report.render(true), json);
    assert_eq!(report.render(false), "24");
}
