use hq_insight::charts::ChartSpec;
use hq_insight::dashboard::{dispatch, MapKind, Page, Selection, UiState};
use hq_insight::data::{load_table, CleanError, DataError, LoaderError, Metric};
use hq_insight::stats::DatasetSummary;
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample_hq.csv")
}

#[test]
fn loads_and_cleans_fixture() {
    let table = load_table(&fixture()).unwrap();
    assert_eq!(table.len(), 6);
    assert_eq!(table.states(), vec!["AR", "CA", "NE", "TX"]);

    let walmart = table.get(1).unwrap();
    assert_eq!(walmart.name, "Walmart");
    assert_eq!(walmart.expenses, 485873.0 - 13643.0);
    assert_eq!(walmart.employees, 2_300_000);

    assert_eq!(table.get(6).unwrap().name, "At&T");
    assert_eq!(table.get(4).unwrap().name, "Berkshire Hathaway");
}

#[test]
fn missing_file_is_reported() {
    let result = load_table(&PathBuf::from("tests/fixtures/does_not_exist.csv"));
    match result {
        Err(DataError::Load(LoaderError::MissingInputFile(path))) => {
            assert!(path.ends_with("does_not_exist.csv"));
        }
        other => panic!("unexpected {:?}", other.map(|t| t.len())),
    }
}

#[test]
fn empty_revenue_cell_fails_the_load() {
    let dir = std::env::temp_dir().join(format!("hq_insight-pipeline-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("blank_revenue.csv");
    std::fs::write(
        &path,
        "FID,RANK,NAME,STATE,EMPLOYEES,REVENUES,PROFIT,LATITUDE,LONGITUDE\n\
         1,1,WALMART,AR,2300000,485873,13643,36.37,-94.21\n\
         2,2,EXXON MOBIL,TX,72700,,7840,32.87,-96.94\n",
    )
    .unwrap();

    match load_table(&path) {
        Err(DataError::Clean(CleanError::MalformedRow { row, column, .. })) => {
            assert_eq!(column, "REVENUES");
            assert_eq!(row, 1);
        }
        other => panic!("unexpected {:?}", other.map(|t| t.len())),
    }
}

#[test]
fn every_page_renders_from_fixture() {
    let table = load_table(&fixture()).unwrap();
    for page in Page::ALL {
        let state = UiState {
            page,
            ..UiState::default()
        };
        let spec = dispatch(&table, &state.selection());
        assert!(!spec.is_empty(), "{} rendered nothing", page.title());
    }
}

#[test]
fn state_pies_keep_totals() {
    let table = load_table(&fixture()).unwrap();
    match dispatch(&table, &Selection::RevenueCountByState { top_n: 2 }) {
        ChartSpec::PiePair(revenue, count) => {
            let labels: Vec<&str> = revenue.slices.iter().map(|s| s.label.as_str()).collect();
            assert_eq!(labels, vec!["AR", "CA", "Other"]);
            assert_eq!(revenue.slices[1].value, 215639.0 + 198533.0);

            let total: f64 = revenue.slices.iter().map(|s| s.value).sum();
            let expected: f64 = table.iter().map(|c| c.revenue).sum();
            assert!((total - expected).abs() < 1e-6);

            let companies: f64 = count.slices.iter().map(|s| s.value).sum();
            assert_eq!(companies, 6.0);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn top_ten_profit_is_led_by_apple() {
    let table = load_table(&fixture()).unwrap();
    match dispatch(&table, &Selection::TopTen(Metric::Profit)) {
        ChartSpec::Bar(spec) => {
            assert_eq!(spec.bars.len(), 6);
            assert_eq!(spec.bars[0].label, "Apple");
            assert_eq!(spec.bars[5].label, "Mckesson");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn point_map_covers_every_headquarters() {
    let table = load_table(&fixture()).unwrap();
    match dispatch(&table, &Selection::Locations(MapKind::Points)) {
        ChartSpec::ScatterMap(spec) => {
            assert_eq!(spec.points.len(), table.len());
            assert!(spec.points.iter().all(|p| p.latitude > 30.0 && p.longitude < -90.0));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn summary_over_fixture() {
    let table = load_table(&fixture()).unwrap();
    let summary = DatasetSummary::compute(&table);
    assert_eq!(summary.company_count, 6);
    assert_eq!(summary.state_count, 4);
    assert!(summary.total_profit > 0.0);
}
