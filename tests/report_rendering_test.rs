use footy_scores::app::writers::stdout::{league_header, score_line};
use footy_scores::core::normalizer::parse_result;
use footy_scores::domain::model::{ApiResponse, MatchResult, OutputFormat, Score};
use footy_scores::{Dispatcher, LeagueRegistry, ReportKind, ReportParams};
use serde_json::json;

fn dispatcher() -> Dispatcher {
    Dispatcher::new(LeagueRegistry::builtin(), OutputFormat::Stdout)
}

fn fixture(season: u32, home: &str, home_goals: i64, away: &str, away_goals: i64) -> serde_json::Value {
    json!({
        "_links": {
            "soccerseason": {"href": format!("http://api.football-data.org/alpha/soccerseasons/{}", season)}
        },
        "homeTeamName": home,
        "awayTeamName": away,
        "result": {"goalsHomeTeam": home_goals, "goalsAwayTeam": away_goals}
    })
}

fn render_fixtures(fixtures: Vec<serde_json::Value>) -> String {
    dispatcher().render(
        ReportKind::League,
        &ApiResponse::ok(json!({ "fixtures": fixtures })),
        &ReportParams::default(),
    )
}

#[test]
fn test_empty_live_batch() {
    let output = dispatcher().render(
        ReportKind::Live,
        &ApiResponse::ok(json!({"games": []})),
        &ReportParams::default(),
    );

    assert_eq!(output, "No live action currently.");
}

#[test]
fn test_sentinel_score_normalizes_to_unset() {
    let record = json!({
        "result": {"goalsHomeTeam": -1, "goalsAwayTeam": 2},
        "homeTeamName": "A",
        "awayTeamName": "B"
    });

    let result = parse_result(&record).unwrap();

    assert_eq!(
        result,
        MatchResult::new("A", Score::Unset, "B", Score::Goals(2)).unwrap()
    );
}

#[test]
fn test_sentinel_never_renders_as_number() {
    let output = render_fixtures(vec![fixture(398, "Arsenal FC", -1, "Chelsea FC", -1)]);
    let line = output.lines().nth(1).unwrap();

    assert_eq!(
        line,
        "Arsenal FC                 -  vs  -                Chelsea FC"
    );
    assert!(!line.contains("-1"));
    assert!(!line.contains('0'));
}

#[test]
fn test_standings_goal_difference_is_sign_aligned() {
    let output = dispatcher().render(
        ReportKind::Standings,
        &ApiResponse::ok(json!({
            "standing": [
                {"position": 3, "teamName": "X", "playedGames": 10, "goalDifference": 4, "points": 20}
            ]
        })),
        &ReportParams {
            league: Some("EPL".to_string()),
            ..ReportParams::default()
        },
    );
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 2);
    let gd_col = lines[0].find("GOAL DIFF").unwrap();
    assert_eq!(&lines[1][gd_col - 1..gd_col + 1], " 4");
    assert!(lines[1].starts_with("3       X"));
    assert!(lines[1].ends_with("20"));
}

#[test]
fn test_standings_are_never_resorted() {
    let output = dispatcher().render(
        ReportKind::Standings,
        &ApiResponse::ok(json!({
            "standing": [
                {"position": 1, "teamName": "Low Points", "playedGames": 10, "goalDifference": -5, "points": 3},
                {"position": 2, "teamName": "High Points", "playedGames": 10, "goalDifference": 12, "points": 30},
                {"position": 3, "teamName": "Mid Points", "playedGames": 10, "goalDifference": 0, "points": 15}
            ]
        })),
        &ReportParams {
            league: Some("SA".to_string()),
            ..ReportParams::default()
        },
    );

    let teams: Vec<&str> = output
        .lines()
        .skip(1)
        .map(|line| line[8..38].trim_end())
        .collect();
    assert_eq!(teams, vec!["Low Points", "High Points", "Mid Points"]);
}

#[test]
fn test_unsupported_league_is_excluded() {
    let output = render_fixtures(vec![
        fixture(9999, "Hidden United", 3, "Secret City", 1),
        fixture(398, "Arsenal FC", 2, "Chelsea FC", 0),
    ]);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], league_header("EPL"));
    assert!(lines[1].starts_with("Arsenal FC"));
    assert!(!output.contains("Hidden United"));
    assert!(!output.contains("Secret City"));
}

#[test]
fn test_one_header_per_league_before_its_fixtures() {
    let output = render_fixtures(vec![
        fixture(401, "Juventus", 1, "AS Roma", 1),
        fixture(398, "Arsenal FC", 2, "Chelsea FC", 0),
        fixture(394, "FC Bayern München", 3, "Hamburger SV", 0),
        fixture(401, "SSC Napoli", 2, "Inter", 1),
        fixture(398, "Everton FC", 0, "Stoke City FC", 0),
        json!({"homeTeamName": "Broken", "awayTeamName": "Record"}),
    ]);
    let lines: Vec<&str> = output.lines().collect();

    let headers: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.starts_with('='))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(headers, vec![0, 2, 5]);
    assert_eq!(lines[0], league_header("BL"));
    assert_eq!(lines[2], league_header("EPL"));
    assert_eq!(lines[5], league_header("SA"));

    // feed order is kept inside a league
    assert!(lines[3].starts_with("Arsenal FC"));
    assert!(lines[4].starts_with("Everton FC"));
    assert!(lines[6].starts_with("Juventus"));
    assert!(lines[7].starts_with("SSC Napoli"));
    assert_eq!(lines.len(), 8);
}

#[test]
fn test_rendering_is_idempotent() {
    let fixtures = vec![
        fixture(401, "Juventus", 1, "AS Roma", 1),
        fixture(398, "Arsenal FC", 2, "Chelsea FC", -1),
        fixture(404, "Ajax", 4, "PSV", 2),
    ];

    assert_eq!(render_fixtures(fixtures.clone()), render_fixtures(fixtures));
}

#[test]
fn test_live_scores_grouped_with_time() {
    let output = dispatcher().render(
        ReportKind::Live,
        &ApiResponse::ok(json!({
            "games": [
                {"league": "Serie A", "homeTeamName": "Milan", "goalsHomeTeam": 0,
                 "awayTeamName": "Torino", "goalsAwayTeam": 1, "time": "12'"},
                {"league": "Premier League", "homeTeamName": "Everton", "goalsHomeTeam": 2,
                 "awayTeamName": "Stoke City", "goalsAwayTeam": -1, "time": "HT"}
            ]
        })),
        &ReportParams::default(),
    );
    let lines: Vec<&str> = output.lines().collect();

    let everton = MatchResult::new("Everton", Score::Goals(2), "Stoke City", Score::Unset).unwrap();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], league_header("Premier League"));
    assert_eq!(lines[1], format!("{}   HT", score_line(&everton)));
    assert_eq!(lines[2], league_header("Serie A"));
    assert!(lines[3].starts_with("Milan"));
    assert!(lines[3].ends_with("Torino   12'"));
}

#[test]
fn test_csv_and_json_outputs() {
    let payload = ApiResponse::ok(json!({
        "fixtures": [fixture(398, "Arsenal FC", 2, "Chelsea FC", -1)]
    }));

    let csv = Dispatcher::new(LeagueRegistry::builtin(), OutputFormat::Csv).render(
        ReportKind::League,
        &payload,
        &ReportParams::default(),
    );
    assert!(csv.contains("EPL,Arsenal FC,2,-,Chelsea FC"));

    let json_output = Dispatcher::new(LeagueRegistry::builtin(), OutputFormat::Json).render(
        ReportKind::League,
        &payload,
        &ReportParams::default(),
    );
    let value: serde_json::Value = serde_json::from_str(&json_output).unwrap();
    assert_eq!(value["leagues"][0]["fixtures"][0]["awayScore"], serde_json::Value::Null);
}
