use dfa_sim::builder::sample_definition;
use dfa_sim::core::diagnose;
use dfa_sim::persistence;
use dfa_sim::report::narrate;
use dfa_sim::session::{Session, SessionConfig, DEFAULT_ENUMERATION_LIMIT};
use dfa_sim::text::{parse_definition, render_definition};

use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use stillwater::validation::Validation;
use tracing::{debug, trace};
use tracing_subscriber::{filter, prelude::*};

fn file_arg() -> Arg {
    Arg::new("file")
        .required(true)
        .help("automaton JSON file")
}

fn cli() -> Command {
    Command::new("dfa-sim")
        .about("Deterministic finite automaton simulator")
        .subcommand_required(true)
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .global(true)
                .num_args(0..=1)
                .require_equals(true)
                .value_parser(["info", "debug", "trace"])
                .default_missing_value("info"),
        )
        .subcommand(
            Command::new("define")
                .about("validates an automaton given in text form and saves it")
                .arg(Arg::new("states").long("states").required(true))
                .arg(Arg::new("alphabet").long("alphabet").required(true))
                .arg(Arg::new("start").long("start").required(true))
                .arg(Arg::new("accepting").long("accepting").default_value(""))
                .arg(
                    Arg::new("transitions")
                        .long("transitions")
                        .default_value("")
                        .help("one 'origin symbol target' per line"),
                )
                .arg(Arg::new("output").short('o').long("output").required(true)),
        )
        .subcommand(
            Command::new("example")
                .about("writes the bundled sample automaton")
                .arg(Arg::new("output").short('o').long("output").required(true)),
        )
        .subcommand(
            Command::new("check")
                .about("lists every problem with an automaton file")
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("evaluate")
                .about("runs a string through the automaton; use '*' for the empty string")
                .arg(file_arg())
                .arg(Arg::new("input").required(true))
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("enumerate")
                .about("lists the shortest accepted strings")
                .arg(file_arg())
                .arg(
                    Arg::new("limit")
                        .short('n')
                        .long("limit")
                        .value_parser(value_parser!(usize))
                        .help("how many strings to list [default: 10]"),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("show")
                .about("prints an automaton file in text form")
                .arg(file_arg()),
        )
}

fn setup_logging(matches: &ArgMatches) {
    let Ok(Some(verbosity)) = matches.try_get_one::<String>("verbosity") else {
        return;
    };

    let level = match verbosity.as_str() {
        "trace" => filter::LevelFilter::TRACE,
        "debug" => filter::LevelFilter::DEBUG,
        _ => filter::LevelFilter::INFO,
    };

    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(level))
        .init();

    trace!("setup {level} logging");
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .unwrap_or_default()
}

/// Load `file` into a fresh session.
fn open(matches: &ArgMatches, config: SessionConfig) -> Result<Session, Box<dyn Error>> {
    let mut session = Session::with_config(config);
    session.load(required(matches, "file"))?;
    Ok(session)
}

/// How a successful command ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Success,
    /// Rejected input or an invalid definition.
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

fn run(matches: &ArgMatches, out: &mut impl Write) -> Result<Status, Box<dyn Error>> {
    match matches.subcommand() {
        Some(("define", sub)) => {
            let definition = parse_definition(
                required(sub, "states"),
                required(sub, "alphabet"),
                required(sub, "start"),
                required(sub, "accepting"),
                required(sub, "transitions"),
            )?;
            let mut session = Session::new();
            session.define(&definition)?;
            session.save(required(sub, "output"))?;
            writeln!(out, "Automaton defined and saved.")?;
        }
        Some(("example", sub)) => {
            let mut session = Session::new();
            session.define(&sample_definition())?;
            session.save(required(sub, "output"))?;
            writeln!(out, "Sample automaton saved.")?;
        }
        Some(("check", sub)) => {
            let definition = persistence::load_definition(required(sub, "file"))?;
            match diagnose(&definition) {
                Validation::Success(_) => writeln!(out, "Automaton is a valid DFA.")?,
                Validation::Failure(errors) => {
                    for error in errors.iter() {
                        writeln!(out, "- {error}")?;
                    }
                    return Ok(Status::Failure);
                }
            }
        }
        Some(("evaluate", sub)) => {
            let session = open(sub, SessionConfig::default())?;
            let input = required(sub, "input").trim();
            let evaluation = session.evaluate(input)?;
            if sub.get_flag("json") {
                writeln!(out, "{}", serde_json::to_string_pretty(&evaluation)?)?;
            } else {
                writeln!(out, "{}", narrate(input, &evaluation))?;
            }
            if !evaluation.is_accepted() {
                return Ok(Status::Failure);
            }
        }
        Some(("enumerate", sub)) => {
            let limit = sub
                .get_one::<usize>("limit")
                .copied()
                .unwrap_or(DEFAULT_ENUMERATION_LIMIT);
            let session = open(sub, SessionConfig::default().with_enumeration_limit(limit))?;
            let enumeration = session.enumerate()?;
            if sub.get_flag("json") {
                writeln!(out, "{}", serde_json::to_string_pretty(enumeration.words())?)?;
            } else {
                writeln!(out, "{enumeration}")?;
            }
        }
        Some(("show", sub)) => {
            let mut session = Session::new();
            let definition = session.load(required(sub, "file"))?;
            writeln!(out, "{}", render_definition(&definition))?;
        }
        _ => unreachable!("clap requires a subcommand"),
    }
    Ok(Status::Success)
}

pub fn main() -> ExitCode {
    let matches = cli().get_matches();

    setup_logging(&matches);
    debug!("running {:?}", matches.subcommand_name());

    match run(&matches, &mut io::stdout().lock()) {
        Ok(status) => status.into(),
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn enumerate_limit_parses_as_number() {
        let matches = cli()
            .try_get_matches_from(["dfa-sim", "enumerate", "a.json", "--limit", "4"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();

        assert_eq!(sub.get_one::<usize>("limit"), Some(&4));
    }

    #[test]
    fn verbosity_is_accepted_after_subcommand() {
        let matches = cli()
            .try_get_matches_from(["dfa-sim", "show", "a.json", "--verbosity=debug"])
            .unwrap();

        assert_eq!(
            matches.get_one::<String>("verbosity").map(String::as_str),
            Some("debug")
        );
    }

    fn execute(args: &[&str]) -> (Result<Status, Box<dyn Error>>, String) {
        let matches = cli()
            .try_get_matches_from(std::iter::once("dfa-sim").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        let result = run(&matches, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn sample_file(dir: &tempfile::TempDir) -> String {
        let path = dir.path().join("sample.json").display().to_string();
        let (result, _) = execute(&["example", "-o", &path]);
        assert_eq!(result.unwrap(), Status::Success);
        path
    }

    #[test]
    fn example_writes_a_loadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = sample_file(&dir);

        let automaton = persistence::load(&path).unwrap();
        assert_eq!(automaton.start_state(), "q0");
        assert_eq!(automaton.transitions().len(), 6);
    }

    #[test]
    fn define_saves_parsed_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toggle.json").display().to_string();

        let (result, output) = execute(&[
            "define",
            "--states",
            "off, on",
            "--alphabet",
            "t",
            "--start",
            "off",
            "--accepting",
            "on",
            "--transitions",
            "off t on\non t off",
            "-o",
            &path,
        ]);

        assert_eq!(result.unwrap(), Status::Success);
        assert!(output.contains("Automaton defined and saved."));
        let automaton = persistence::load(&path).unwrap();
        assert!(automaton.evaluate("t").is_accepted());
        assert!(!automaton.evaluate("tt").is_accepted());
    }

    #[test]
    fn define_rejects_invalid_automaton_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");

        let (result, _) = execute(&[
            "define",
            "--states",
            "q0",
            "--alphabet",
            "a",
            "--start",
            "q9",
            "-o",
            &path.display().to_string(),
        ]);

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn evaluate_exit_status_follows_verdict() {
        let dir = tempfile::tempdir().unwrap();
        let path = sample_file(&dir);

        let (accepted, output) = execute(&["evaluate", &path, "ab"]);
        assert_eq!(accepted.unwrap(), Status::Success);
        assert!(output.contains("is ACCEPTED"));

        let (rejected, output) = execute(&["evaluate", &path, "a"]);
        assert_eq!(rejected.unwrap(), Status::Failure);
        assert!(output.contains("is REJECTED"));
    }

    #[test]
    fn evaluate_json_reports_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let path = sample_file(&dir);

        let (result, output) = execute(&["evaluate", &path, "ac", "--json"]);
        assert_eq!(result.unwrap(), Status::Failure);

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["outcome"]["UnknownSymbol"]["symbol"], "c");
    }

    #[test]
    fn enumerate_limit_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = sample_file(&dir);

        let (result, output) = execute(&["enumerate", &path, "--limit", "3", "--json"]);
        assert_eq!(result.unwrap(), Status::Success);
        let words: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(words, vec!["*", "b", "ab"]);

        let (_, output) = execute(&["enumerate", &path]);
        assert_eq!(
            output.lines().count(),
            DEFAULT_ENUMERATION_LIMIT + 1,
            "{output}"
        );
        assert!(output.starts_with("Accepted strings:\n*\n"));
    }

    #[test]
    fn check_lists_every_violation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(
            &path,
            r#"{
                "states": ["q0"],
                "alphabet": ["a", "*"],
                "start_state": "q7",
                "accepting_states": ["q8"],
                "transitions": {}
            }"#,
        )
        .unwrap();

        let (result, output) = execute(&["check", &path.display().to_string()]);

        assert_eq!(result.unwrap(), Status::Failure);
        assert_eq!(output.lines().count(), 3, "{output}");
        assert!(output.contains("q7"));
        assert!(output.contains("q8"));
    }

    #[test]
    fn check_accepts_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = sample_file(&dir);

        let (result, output) = execute(&["check", &path]);

        assert_eq!(result.unwrap(), Status::Success);
        assert_eq!(output, "Automaton is a valid DFA.\n");
    }

    #[test]
    fn check_reports_missing_file_as_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json").display().to_string();

        let (result, _) = execute(&["check", &path]);

        let error = result.unwrap_err();
        let error = error
            .downcast_ref::<persistence::PersistenceError>()
            .unwrap();
        assert_eq!(error.kind(), persistence::LoadFailure::NotFound);
    }

    #[test]
    fn show_renders_text_form() {
        let dir = tempfile::tempdir().unwrap();
        let path = sample_file(&dir);

        let (result, output) = execute(&["show", &path]);

        assert_eq!(result.unwrap(), Status::Success);
        assert!(output.starts_with("states: q0, q1, q2\n"));
        assert!(output.contains("start state: q0"));
        assert!(output.contains("q1 b q2"));
    }
}
