use fitplot::cli::{self, RunOutcome};
use fitplot::config::{ColorScheme, Preset};
use fitplot::engines::batch::progress::SilentObserver;
use fitplot::engines::batch::{plan_jobs, BatchDriver};
use fitplot::engines::rendering::{ChartRenderer, ChartSpec, SeriesColor};
use fitplot::types::Metric;
use fitplot::FitplotError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// What the driver asked to draw
#[derive(Debug, Clone)]
struct RenderedChart {
    dest: PathBuf,
    metric: Metric,
    title: Option<String>,
    y_label: &'static str,
    y_range: (f64, f64),
    labels: Vec<&'static str>,
    colors: Vec<SeriesColor>,
    points: usize,
}

/// Records each chart and writes a placeholder file at its destination
#[derive(Default)]
struct RecordingRenderer {
    charts: Vec<RenderedChart>,
}

impl ChartRenderer for RecordingRenderer {
    fn render(&mut self, chart: &ChartSpec<'_>, dest: &Path) -> fitplot::Result<()> {
        fs::write(dest, b"chart")?;
        self.charts.push(RenderedChart {
            dest: dest.to_path_buf(),
            metric: chart.metric,
            title: chart.title.clone(),
            y_label: chart.y_label,
            y_range: chart.y_range(),
            labels: chart.series.iter().map(|s| s.label).collect(),
            colors: chart.series.iter().map(|s| s.color).collect(),
            points: chart.len(),
        });
        Ok(())
    }
}

fn stats_csv(rows: usize, scale: f64) -> String {
    let mut contents = String::from("minFitness,maxFitness,avgFitness,minObjective,maxObjective,avgObjective\n");
    for i in 0..rows {
        let g = i as f64;
        contents.push_str(&format!(
            "{},{},{},{},{},{}\n",
            g * scale,
            (g + 2.0) * scale,
            (g + 1.0) * scale,
            500.0 - g,
            900.0 - g,
            700.0 - g
        ));
    }
    contents
}

fn output_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn test_trials_batch_renders_aggregate_then_each_trial() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(data.path().join("stats-average.csv"), stats_csv(10, 1.0)).unwrap();
    for i in 0..3 {
        fs::write(data.path().join(format!("stats-trial-{}.csv", i)), stats_csv(4 + i, 1.0)).unwrap();
    }

    let mut config = Preset::Trials.config();
    config.layout.count = 3;
    let jobs = plan_jobs(&config.layout, &config.style, data.path(), out.path());
    let mut renderer = RecordingRenderer::default();
    let mut driver = BatchDriver::new(&mut renderer, SilentObserver, config.style.color_scheme);

    let report = driver.run(&jobs).unwrap();

    assert_eq!(report.files_processed, 4);
    assert_eq!(report.charts.len(), 8);
    assert_eq!(renderer.charts.len(), 8);

    let first = &renderer.charts[0];
    assert_eq!(first.dest, out.path().join("fitness-average.png"));
    assert_eq!(first.title.as_deref(), Some("Average Fitnesses (over 30 Trials)"));
    assert_eq!(first.points, 10);

    let second = &renderer.charts[1];
    assert_eq!(second.metric, Metric::Objective);
    assert_eq!(second.title.as_deref(), Some("Average Objective Function (over 30 Trials)"));
    assert_eq!(second.y_label, "Objective function value (lower is better)");

    let last = &renderer.charts[7];
    assert_eq!(last.dest, out.path().join("objective-trial-2.png"));
    assert_eq!(last.title.as_deref(), Some("Objective Function for Trial 2"));
    assert_eq!(last.points, 6);
    assert_eq!(last.labels, ["Min objective", "Max objective", "Average objective"]);

    assert_eq!(
        output_files(out.path()),
        [
            "fitness-average.png",
            "fitness-trial-0.png",
            "fitness-trial-1.png",
            "fitness-trial-2.png",
            "objective-average.png",
            "objective-trial-0.png",
            "objective-trial-1.png",
            "objective-trial-2.png",
        ]
    );
}

#[test]
fn test_fitness_axis_fixed_regardless_of_magnitude() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(data.path().join("fitnessStatsGen0.csv"), stats_csv(5, 1000.0)).unwrap();

    let mut config = Preset::Generations.config();
    config.layout.count = 1;
    let jobs = plan_jobs(&config.layout, &config.style, data.path(), out.path());
    let mut renderer = RecordingRenderer::default();
    let mut driver = BatchDriver::new(&mut renderer, SilentObserver, config.style.color_scheme);
    driver.run(&jobs).unwrap();

    let fitness = &renderer.charts[0];
    assert_eq!(fitness.metric, Metric::Fitness);
    assert_eq!(fitness.y_range, (0.0, 100.0));
    assert_eq!(fitness.y_label, "Fitness (higher is better)");
    assert_eq!(fitness.title, None);

    let objective = &renderer.charts[1];
    assert!(objective.y_range.0 < 496.0);
    assert!(objective.y_range.1 > 900.0);
}

#[test]
fn test_runs_preset_uses_library_colors() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(data.path().join("fitnessStatsRun0.csv"), stats_csv(3, 1.0)).unwrap();

    let mut config = Preset::Runs.config();
    config.layout.count = 1;
    let jobs = plan_jobs(&config.layout, &config.style, data.path(), out.path());
    let mut renderer = RecordingRenderer::default();
    let mut driver = BatchDriver::new(&mut renderer, SilentObserver, config.style.color_scheme);
    driver.run(&jobs).unwrap();

    assert_eq!(
        renderer.charts[0].colors,
        [SeriesColor::Palette(0), SeriesColor::Palette(1), SeriesColor::Palette(2)]
    );
    assert_eq!(renderer.charts[1].dest, out.path().join("objectiveRun0.png"));
}

#[test]
fn test_explicit_colors_swap_between_profiles() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(data.path().join("fitnessStatsGen0.csv"), stats_csv(3, 1.0)).unwrap();

    let mut config = Preset::Generations.config();
    config.layout.count = 1;
    let jobs = plan_jobs(&config.layout, &config.style, data.path(), out.path());
    let mut renderer = RecordingRenderer::default();
    let mut driver = BatchDriver::new(&mut renderer, SilentObserver, ColorScheme::Explicit);
    driver.run(&jobs).unwrap();

    let fitness = &renderer.charts[0].colors;
    let objective = &renderer.charts[1].colors;
    assert_eq!(fitness[0], objective[1]);
    assert_eq!(fitness[1], objective[0]);
    assert_eq!(fitness[2], objective[2]);
}

#[test]
fn test_short_row_aborts_before_its_charts() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(data.path().join("fitnessStatsGen0.csv"), stats_csv(3, 1.0)).unwrap();
    fs::write(data.path().join("fitnessStatsGen1.csv"), "h\n1,2,3,4,5,6\n7,8,9,10,11\n").unwrap();
    fs::write(data.path().join("fitnessStatsGen2.csv"), stats_csv(3, 1.0)).unwrap();

    let mut config = Preset::Generations.config();
    config.layout.count = 3;
    let jobs = plan_jobs(&config.layout, &config.style, data.path(), out.path());
    let mut renderer = RecordingRenderer::default();
    let mut driver = BatchDriver::new(&mut renderer, SilentObserver, config.style.color_scheme);

    assert!(driver.run(&jobs).is_err());

    // Charts from earlier files stay; nothing for the bad file or later ones
    assert_eq!(output_files(out.path()), ["fitnessGen0.png", "objectiveGen0.png"]);
}

#[test]
fn test_missing_input_aborts_batch() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(data.path().join("fitnessStatsRun0.csv"), stats_csv(3, 1.0)).unwrap();

    let config = Preset::Runs.config();
    let jobs = plan_jobs(&config.layout, &config.style, data.path(), out.path());
    let mut renderer = RecordingRenderer::default();
    let mut driver = BatchDriver::new(&mut renderer, SilentObserver, config.style.color_scheme);

    let err = driver.run(&jobs).unwrap_err();
    assert!(matches!(err, FitplotError::DataLoading(_)));
    assert!(err.to_string().contains("fitnessStatsRun1.csv"));
    assert_eq!(output_files(out.path()).len(), 2);
}

#[test]
fn test_one_argument_prints_usage_only() {
    let out = TempDir::new().unwrap();
    let outcome = cli::run(["fitplot", out.path().to_str().unwrap()]).unwrap();

    assert!(matches!(outcome, RunOutcome::Usage));
    assert!(output_files(out.path()).is_empty());
}

#[test]
fn test_three_arguments_print_usage_only() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(data.path().join("stats-average.csv"), stats_csv(3, 1.0)).unwrap();

    let outcome = cli::run([
        "fitplot",
        data.path().to_str().unwrap(),
        out.path().to_str().unwrap(),
        "extra",
    ])
    .unwrap();

    assert!(matches!(outcome, RunOutcome::Usage));
    assert!(output_files(out.path()).is_empty());
}

#[test]
fn test_cli_reports_missing_data() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let result = cli::run(["fitplot", data.path().to_str().unwrap(), out.path().to_str().unwrap()]);

    assert!(result.is_err());
    assert!(output_files(out.path()).is_empty());
}

#[test]
fn test_cli_requires_existing_output_dir() {
    let data = TempDir::new().unwrap();
    let missing = data.path().join("charts");

    let result = cli::run(["fitplot", data.path().to_str().unwrap(), missing.to_str().unwrap()]);

    assert!(matches!(result, Err(FitplotError::Io(_))));
    assert!(!missing.exists());
}
