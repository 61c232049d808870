use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use readiness::{AssessmentResult, Wizard, parse_tokens, questionnaire};
use readiness_dialoguer_wizard::{DialoguerBackend, DialoguerError, results_to_string};
use serde_json::Value;
use tracing::{info, warn};

use crate::cli::{OutputArgs, ScoreArgs, TakeArgs};
use crate::config::AppConfig;
use crate::error::CliError;

const REPORT_TITLE: &str = "Medical Assistant Career Readiness Report";

pub(crate) fn take(args: TakeArgs, config: &AppConfig) -> Result<(), CliError> {
    let backend = if args.plain || config.plain {
        DialoguerBackend::plain()
    } else {
        DialoguerBackend::new()
    };
    let mut wizard = Wizard::new();

    loop {
        let result = match wizard.run(&backend) {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => {
                eprintln!("Assessment cancelled.");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };
        if args.output.json {
            print_json(result)?;
        } else {
            backend.show_results(result);
        }
        if let Some(path) = &args.output.report {
            write_report(result, path)?;
        }

        match backend.offer_retake() {
            Ok(true) => wizard.restart(),
            Ok(false) | Err(DialoguerError::Cancelled) => return Ok(()),
            Err(err) => return Err(err.into()),
        }
    }
}

pub(crate) fn score(args: ScoreArgs) -> Result<(), CliError> {
    let raw = fs::read_to_string(&args.answers).map_err(|source| CliError::ReadAnswers {
        path: args.answers.clone(),
        source,
    })?;
    let tokens = tokens_from_json(&raw).map_err(|source| CliError::ParseAnswers {
        path: args.answers.clone(),
        source,
    })?;

    let bank = questionnaire();
    let answers = parse_tokens(
        &bank,
        tokens.iter().map(|(id, token)| (id.as_str(), token.as_str())),
    );
    info!(
        path = %args.answers.display(),
        answered = answers.len(),
        questions = bank.len(),
        "scoring answers file"
    );

    emit(&readiness::score(&answers), &args.output)
}

pub(crate) fn questions() {
    let bank = questionnaire();
    for (index, question) in bank.questions().iter().enumerate() {
        let source = match question.framework() {
            Some(framework) => format!("{} | {framework}", question.category()),
            None => question.category().to_string(),
        };
        println!("{:>2}. [{}] {source}", index + 1, question.id());
        println!("    {}", question.ask());
        for (option, label) in question.option_labels().iter().enumerate() {
            println!("      {option}) {label}");
        }
    }
}

fn emit(result: &AssessmentResult, output: &OutputArgs) -> Result<(), CliError> {
    if output.json {
        print_json(result)?;
    } else {
        println!("{}", results_to_string(result));
    }
    if let Some(path) = &output.report {
        write_report(result, path)?;
    }
    Ok(())
}

fn print_json(result: &AssessmentResult) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

fn write_report(result: &AssessmentResult, path: &Path) -> Result<(), CliError> {
    let html = readiness_html_report::to_html(result, Some(REPORT_TITLE));
    fs::write(path, html).map_err(|source| CliError::WriteReport {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "report written");
    Ok(())
}

/// Read a JSON object of answer tokens.
///
/// Numbers and booleans are accepted in place of their string form; any
/// other value is logged and skipped.
fn tokens_from_json(raw: &str) -> Result<Vec<(String, String)>, serde_json::Error> {
    let object: BTreeMap<String, Value> = serde_json::from_str(raw)?;
    let tokens = object
        .into_iter()
        .filter_map(|(id, value)| match value {
            Value::String(token) => Some((id, token)),
            Value::Number(number) => Some((id, number.to_string())),
            Value::Bool(flag) => Some((id, flag.to_string())),
            other => {
                warn!(question = %id, value = %other, "ignoring non-scalar answer");
                None
            }
        })
        .collect();
    Ok(tokens)
}
