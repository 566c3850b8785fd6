mod draw_support;

use std::{sync::Arc, time::Duration};

use draw_support::{fixture, legal_schedule};
use drawgrade::{
    DrawMetrics, Evaluator, GraderConfig, Input, ReferenceData, evaluate::contain_panic,
};

/// Compile tests need a real compiler; skip them where none is installed.
fn has_compiler() -> bool {
    let found = which::which("g++").is_ok();
    if !found {
        eprintln!("g++ not found on PATH, skipping");
    }
    found
}

fn evaluator_with(config: GraderConfig) -> Evaluator {
    Evaluator::new(Arc::new(ReferenceData::champions_league()), config)
}

#[test]
fn grades_captured_output() {
    let output = std::fs::read_to_string(fixture("legal_draw.txt")).unwrap();
    let metrics = Evaluator::default().evaluate_output(&output);

    assert_eq!(metrics.combined_score, 1.0);
    assert_eq!(metrics.error, 0.0);
}

#[test]
fn output_without_draw_is_an_error() {
    let metrics = Evaluator::default().evaluate_output("Drawing...\nDone.\n");

    assert_eq!(metrics.error, 1.0);
    assert_eq!(metrics.combined_score, 0.0);
    assert!(metrics.error_message.unwrap().starts_with("Schedule is empty"));
}

#[test]
fn structured_schedule_matches_parsed_output() {
    let evaluator = Evaluator::default();
    let output = std::fs::read_to_string(fixture("legal_draw.txt")).unwrap();

    assert_eq!(
        evaluator.evaluate_schedule(&legal_schedule()),
        evaluator.evaluate_output(&output)
    );
}

#[test]
fn panicking_check_becomes_error_result() {
    let metrics = contain_panic(|| panic!("lookup table missing"));

    assert_eq!(metrics.error, 1.0);
    assert_eq!(metrics.combined_score, 0.0);
    assert_eq!(
        metrics.error_message.as_deref(),
        Some("Evaluation error: lookup table missing")
    );
}

#[test]
fn formatted_panic_message_is_kept() {
    let team = "Basel";
    let metrics = contain_panic(|| panic!("no seat for {team}"));

    assert_eq!(metrics.error_message.as_deref(), Some("Evaluation error: no seat for Basel"));
}

#[test]
fn finished_check_passes_through() {
    let metrics = contain_panic(DrawMetrics::default);

    assert_eq!(metrics, DrawMetrics::default());
}

#[test]
fn classifies_arguments() {
    let wrapper = fixture("legal_draw_wrapper.py");
    let source = fixture("legal_draw.cpp");

    assert_eq!(Input::classify(wrapper.to_str().unwrap()), Input::Wrapper(wrapper.clone()));
    assert_eq!(Input::classify(source.to_str().unwrap()), Input::CppFile(source.clone()));
    assert_eq!(
        Input::classify("int main() { return 0; }"),
        Input::Code("int main() { return 0; }".into())
    );
    // A missing `.py` path is not a file, so it is treated as code.
    assert_eq!(Input::classify("missing.py"), Input::Code("missing.py".into()));
}

#[tokio::test]
async fn missing_wrapper_is_reported() {
    let metrics = Evaluator::default()
        .evaluate_wrapper_file(fixture("missing_wrapper.py"))
        .await;

    assert_eq!(metrics.error, 1.0);
    assert_eq!(metrics.error_message.as_deref(), Some("Python file not found"));
}

#[tokio::test]
async fn missing_source_is_reported() {
    let metrics = Evaluator::default()
        .evaluate_cpp_file(fixture("missing.cpp"))
        .await;

    assert_eq!(metrics.error_message.as_deref(), Some("File not found"));
}

#[tokio::test]
async fn wrapper_without_code_is_reported() {
    let metrics = Evaluator::default()
        .evaluate_wrapper_file(fixture("no_code_wrapper.py"))
        .await;

    assert_eq!(
        metrics.error_message.as_deref(),
        Some("No valid C++ code found in Python file")
    );
}

#[tokio::test]
async fn missing_compiler_is_reported() {
    let config = GraderConfig::builder()
        .compiler("drawgrade-no-such-compiler")
        .build();
    let metrics = evaluator_with(config)
        .evaluate_code("int main() { return 0; }")
        .await;

    assert_eq!(metrics.error, 1.0);
    assert!(
        metrics
            .error_message
            .unwrap()
            .contains("Cannot find a C++ compiler")
    );
}

#[tokio::test]
async fn grades_cpp_file() {
    if !has_compiler() {
        return;
    }
    let metrics = Evaluator::default()
        .evaluate_cpp_file(fixture("legal_draw.cpp"))
        .await;

    assert_eq!(metrics.error, 0.0, "{:?}", metrics.error_message);
    assert_eq!(metrics.combined_score, 1.0);
}

#[tokio::test]
async fn grades_wrapper_file() {
    if !has_compiler() {
        return;
    }
    let input = Input::classify(fixture("legal_draw_wrapper.py").to_str().unwrap());
    let metrics = Evaluator::default().evaluate_input(&input).await;

    assert_eq!(metrics.error, 0.0, "{:?}", metrics.error_message);
    assert_eq!(metrics.combined_score, 1.0);
}

#[tokio::test]
async fn compile_failure_is_reported() {
    if !has_compiler() {
        return;
    }
    let metrics = Evaluator::default()
        .evaluate_cpp_file(fixture("broken.cpp"))
        .await;

    assert_eq!(metrics.error, 1.0);
    assert!(
        metrics
            .error_message
            .unwrap()
            .starts_with("Compilation failed:")
    );
}

#[tokio::test]
async fn runtime_failure_is_reported() {
    if !has_compiler() {
        return;
    }
    let metrics = Evaluator::default()
        .evaluate_cpp_file(fixture("crash.cpp"))
        .await;
    let message = metrics.error_message.unwrap();

    assert!(message.starts_with("Runtime error:"), "{message}");
    assert!(message.contains("draw failed"), "{message}");
}

#[tokio::test]
async fn slow_program_times_out() {
    if !has_compiler() {
        return;
    }
    let config = GraderConfig::builder()
        .run_timeout(Duration::from_secs(1))
        .build();
    let metrics = evaluator_with(config)
        .evaluate_cpp_file(fixture("sleepy.cpp"))
        .await;

    assert_eq!(
        metrics.error_message.as_deref(),
        Some("Program timed out after 1 seconds")
    );
}
