use healia_core::{MoodLog, MoodTier};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

struct CliTestEnv {
    _temp_dir: TempDir,
    home: PathBuf,
    xdg_config: PathBuf,
    xdg_state: PathBuf,
    export_dir: PathBuf,
}

impl CliTestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        let home = base.join("home");
        let xdg_config = base.join("xdg-config");
        let xdg_state = base.join("xdg-state");
        let export_dir = base.join("exports");

        fs::create_dir_all(&home).expect("failed to create HOME");
        fs::create_dir_all(&xdg_config).expect("failed to create XDG_CONFIG_HOME");
        fs::create_dir_all(&xdg_state).expect("failed to create XDG_STATE_HOME");

        Self {
            _temp_dir: temp_dir,
            home,
            xdg_config,
            xdg_state,
            export_dir,
        }
    }

    fn write_config(&self, contents: &str) {
        let dir = self.xdg_config.join("healia");
        fs::create_dir_all(&dir).expect("failed to create config dir");
        fs::write(dir.join("config.toml"), contents).expect("failed to write config");
    }
}

fn run_healia(env: &CliTestEnv, args: &[&str], script: &str) -> Output {
    let bin_path = PathBuf::from(assert_cmd::cargo::cargo_bin!("healia"));

    let mut child = Command::new(bin_path)
        .args(args)
        .env("HOME", &env.home)
        .env("XDG_CONFIG_HOME", &env.xdg_config)
        .env("XDG_STATE_HOME", &env.xdg_state)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("failed to execute healia: {e}"));

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(script.as_bytes())
        .expect("failed to write script");

    child.wait_with_output().expect("failed to wait for healia")
}

fn assert_success(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "healia failed\nstatus: {}\nstdout:\n{}\nstderr:\n{}",
            output.status, stdout, stderr
        );
    }
    stdout
}

#[test]
fn check_in_session_prints_plan_and_exports_csv() {
    let env = CliTestEnv::new();
    let export_dir = env.export_dir.to_string_lossy().into_owned();

    let script = "\
checkin happy I feel happy today
checkin sad I feel sad, really
checkin neutral meh
checkin angry
condition insomnia
herb lemon balm
herb mandrake
stats
export
quit
";
    let output = run_healia(&env, &["--seed", "7", "--export-dir", &export_dir], script);
    let stdout = assert_success(&output);

    assert!(stdout.contains("You seem to be feeling positive today!"));
    assert!(stdout.contains("You may be experiencing some negative emotions."));
    assert!(stdout.contains("https://www.youtube.com/watch?v=inpok4MKVLM"));
    assert!(stdout.contains("Please enter your feelings to continue."));
    assert!(stdout.contains("Suggested remedy for insomnia:"));
    assert!(stdout.contains("🌙 Use lavender essential oil or lemon balm before bed."));
    assert!(stdout.contains("Lemon balm: A calming herb, often used for anxiety and sleep."));
    assert!(stdout.contains("No info found. Try another herb."));
    assert!(stdout.contains("Mood Score Over Time: 5, 2, 3"));
    // four analyze actions (one blank) and one condition selection
    assert!(stdout.contains("You've used Healia for 5 days."));
    assert!(stdout.contains("Session ended after 3 check-in(s)."));

    let csv = fs::read_to_string(env.export_dir.join("mood_log.csv"))
        .expect("export should write mood_log.csv");
    let log = MoodLog::from_csv(&csv).expect("export should parse back");
    let moods: Vec<MoodTier> = log.entries().iter().map(|e| e.mood()).collect();
    assert_eq!(moods, vec![MoodTier::Happy, MoodTier::Sad, MoodTier::Neutral]);
    assert_eq!(log.entries()[1].text(), "I feel sad, really");

    assert!(
        env.xdg_state.join("healia").exists(),
        "log directory should be created under XDG_STATE_HOME"
    );
}

#[test]
fn seeded_runs_are_reproducible() {
    let env = CliTestEnv::new();
    let script = "condition anxiety\ncondition cold\njournal\n";

    let first = assert_success(&run_healia(&env, &["--seed", "11"], script));
    let second = assert_success(&run_healia(&env, &["--seed", "11"], script));
    assert_eq!(first, second);
}

#[test]
fn seed_from_config_file_is_used() {
    let env = CliTestEnv::new();
    env.write_config("[session]\nseed = 3\n");
    let script = "condition headache\njournal\n";

    let from_config = assert_success(&run_healia(&env, &[], script));
    let from_flag = assert_success(&run_healia(&env, &["--seed", "3"], script));
    assert_eq!(from_config, from_flag);
}

#[test]
fn invalid_config_fails_startup() {
    let env = CliTestEnv::new();
    env.write_config("[logging]\nlevel = \"loud\"\n");

    let output = run_healia(&env, &[], "quit\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load configuration"));
}
