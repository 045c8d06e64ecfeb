use crawl_archive::aggregator::{build_report, summarize};
use crawl_archive::commands::{execute_report, run_browser, ReportArgs};
use crawl_archive::output::{read_report, write_report, write_report_charts};
use crawl_archive::parser::{load_crawl_log, renormalize};
use crawl_archive::utils::config::AnalysisConfig;
use crawl_archive::utils::error::LoadError;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

const LOG: &str = "\
race,cls,xl,god,killer,place,lvl,ktyp,tmsg,tdam,mhp,name
Mountain Dwarf,Fighter,9.0,Makhleb,orc priest,Orc,2.0,mon,smitten by an orc priest,30.0,70.0,alice
Mountain Dwarf,Fighter,10,Makhleb,orc priest,Orc,2,mon,smitten by an orc priest,80,70,bob
Mountain Dwarf,Fighter,11,Makhleb,Boris,D,10,mon,slain by Boris,20,90,carol
Mountain Dwarf,Fighter,27,Makhleb,winning,Zot,5,winning,Escaped with the Orb!,,,dave
Mountain Dwarf,Fighter,27,Makhleb,,Zot,5,quit,escaped with the Orb,,,erin
Black Draconian,Wizard,3,,adder,D,2,mon,killed by an adder,5,20,frank
";

fn write_log(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_from_disk() {
    let file = write_log(LOG);
    let dataset = load_crawl_log(file.path()).unwrap();

    assert_eq!(dataset.len(), 6);
    assert_eq!(dataset.death_count(), 4);

    let runs = dataset.runs();
    assert_eq!(runs[0].formatted_place.as_deref(), Some("Orc"));
    assert_eq!(runs[2].formatted_place.as_deref(), Some("D:10"));
    assert_eq!(runs[0].level, Some(9));
    assert!(runs[3].is_win);
    // Win detected from the message alone; empty killer is sentinel-filled
    assert!(runs[4].is_win);
    assert_eq!(runs[4].killer, "Unknown");
    assert_eq!(runs[5].god, "No God");
    assert_eq!(runs[5].race_grouped.as_deref(), Some("Draconian"));
}

#[test]
fn test_renormalize_loaded_runs_is_noop() {
    let file = write_log(LOG);
    let dataset = load_crawl_log(file.path()).unwrap();

    let mut runs = dataset.runs().to_vec();
    renormalize(&mut runs);
    assert_eq!(runs, dataset.runs());
}

#[test]
fn test_load_failures_are_typed() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_crawl_log(dir.path().join("crawllog.csv")),
        Err(LoadError::FileNotFound(_))
    ));

    let no_ktyp = write_log("race,cls,place,lvl,tmsg\nHuman,Fighter,D,1,hi\n");
    assert!(matches!(
        load_crawl_log(no_ktyp.path()),
        Err(LoadError::MissingColumn(c)) if c == "ktyp"
    ));

    let mut garbled = NamedTempFile::new().unwrap();
    garbled
        .write_all(b"race,cls,place,lvl,ktyp,tmsg\nHum\xffan,Fighter,D,1,mon,hi\n")
        .unwrap();
    garbled.flush().unwrap();
    assert!(matches!(load_crawl_log(garbled.path()), Err(LoadError::Parse(_))));

    let ragged = write_log("race,cls,place,lvl,ktyp,tmsg\nHuman,Fighter\nElf\n");
    let dataset = load_crawl_log(ragged.path()).unwrap();
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.runs()[1].race.as_deref(), Some("Elf"));
    assert_eq!(dataset.runs()[1].level, None);
}

#[test]
fn test_short_row_is_kept() {
    let mut contents = String::from(LOG);
    contents.push_str("Minotaur,Berserker,27,Trog,winning,Zot,5,winning,escaped with the Orb\n");
    let file = write_log(&contents);

    let dataset = load_crawl_log(file.path()).unwrap();
    assert_eq!(dataset.len(), 7);
    let short = &dataset.runs()[6];
    assert_eq!(short.race.as_deref(), Some("Minotaur"));
    assert_eq!(short.max_hp, None);

    let summary = summarize(&dataset);
    assert_eq!(summary.total_games, 7);
    assert_eq!(summary.total_wins, 3);
}

#[test]
fn test_summary() {
    let file = write_log(LOG);
    let summary = summarize(&load_crawl_log(file.path()).unwrap());

    assert_eq!(summary.total_games, 6);
    assert_eq!(summary.total_wins, 2);
    assert_eq!(summary.top_race.as_deref(), Some("Mountain Dwarf"));
    assert_eq!(summary.top_killer.as_deref(), Some("orc priest"));
}

#[test]
fn test_report_round_trip_with_charts() {
    let file = write_log(LOG);
    let dataset = load_crawl_log(file.path()).unwrap();
    let report = build_report(&dataset, &AnalysisConfig::default(), "crawllog.csv");

    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("report.json");
    write_report(&report, &json_path).unwrap();
    let loaded = read_report(&json_path).unwrap();
    assert_eq!(loaded.summary.total_games, report.summary.total_games);
    assert_eq!(loaded.deaths.levels, report.deaths.levels);
    assert_eq!(loaded.deaths.floors.len(), 3);
    assert_eq!(loaded.generated_at, report.generated_at);

    let charts = write_report_charts(&report, dir.path().join("charts")).unwrap();
    assert_eq!(charts.len(), 9);
    assert!(charts.iter().all(|p| p.exists()));
}

#[test]
fn test_execute_report_command() {
    let file = write_log(LOG);
    let dir = tempfile::tempdir().unwrap();
    let args = ReportArgs {
        log_path: file.path().to_path_buf(),
        output_json: dir.path().join("out/report.json"),
        chart_dir: Some(dir.path().join("charts")),
        config: AnalysisConfig {
            min_samples: 2,
            ..Default::default()
        },
        print_summary: false,
    };

    execute_report(args).unwrap();

    let report = read_report(dir.path().join("out/report.json")).unwrap();
    assert_eq!(report.min_samples, 2);
    assert_eq!(report.win_rates.classes[0].category, "Fighter");
    assert_eq!(report.deaths.one_shots[0].category, "orc priest");
    assert_eq!(report.deaths.one_shots[0].count, 1);
    assert!(dir.path().join("charts/top_killers.svg").exists());
}

#[test]
fn test_scripted_browse_session() {
    colored::control::set_override(false);
    let file = write_log(LOG);
    let dataset = load_crawl_log(file.path()).unwrap();

    let mut out = Vec::new();
    run_browser(
        &dataset,
        &AnalysisConfig::default(),
        "next\n3\nback\n1\nq\n".as_bytes(),
        &mut out,
    )
    .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Expeditions"));
    assert!(out.contains("Laws of Survival"));
    assert!(out.contains("Adventurer Preferences"));
    assert!(out.contains("Fighter"));
}
