use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const MODELS_KT_REL: &str = "android/app/src/main/java/com/jpski/niseko/data/Models.kt";
pub const SHARED_JSON_REL: &str = "scraper/shared-constants.json";
pub const APP_JS_REL: &str = "app.js";

/// Isolated fixture repository with consistent copies of all three artifacts.
pub struct TestEnv {
    _tmp: TempDir,
    pub repo: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let repo = tmp.path().join("repo");

        fs::create_dir_all(repo.join("scraper")).expect("create scraper dir");
        fs::create_dir_all(
            repo.join("android/app/src/main/java/com/jpski/niseko/data"),
        )
        .expect("create android dirs");

        fs::write(repo.join(APP_JS_REL), fixture_app_js()).expect("write app.js");
        fs::write(repo.join(SHARED_JSON_REL), fixture_shared_json())
            .expect("write shared constants");
        fs::write(repo.join(MODELS_KT_REL), fixture_models_kt()).expect("write Models.kt");

        Self { _tmp: tmp, repo }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("slopecheck").expect("binary built");
        cmd.arg("--repo").arg(&self.repo);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// Rewrite one artifact through a string transform.
    pub fn patch(&self, rel: &str, f: impl Fn(&str) -> String) {
        let path = self.repo.join(rel);
        let raw = fs::read_to_string(&path).expect("read artifact");
        fs::write(&path, f(&raw)).expect("write artifact");
    }
}

fn fixture_app_js() -> String {
    // The em dash value is escaped the way app.js authors it; the scraper
    // copy carries the literal character.
    let tail = concat!("'", "\\", "u2014'");
    format!(
        r#"const RESORT_ADAPTERS = {{}};

const SNOWBIRD_STATUS_MAP = {{
  'open': 'OPERATING',
  'expected': 'CLOSED',
  'closed': 'CLOSED',
}};

const NISEKO_STATUS_MAP = {{
  'OPERATION_TEMPORARILY_SUSPENDED': 'ON_HOLD',
  'SUSPENDED_CLOSED': 'CLOSED',
}};

RESORT_ADAPTERS.niseko = {{
  id: 'niseko',
  name: 'Niseko United',
  timezone: 'Asia/Tokyo',
}};

const VAIL_RESORTS = [
  {{ id: 'vail', name: 'Vail', region: 'Colorado', timezone: 'America/Denver' }},
  {{ id: 'heavenly', name: 'Heavenly', region: 'Tahoe', timezone: 'America/Los_Angeles' }},
];

const VAIL_STATUS_MAP = {{
  'Open': 'OPERATING',
  'Scheduled': 'CLOSED',
  'OnHold': 'ON_HOLD',
  'Closed': 'CLOSED',
}};

RESORT_ADAPTERS.snowbird = {{
  id: 'snowbird',
  name: 'Snowbird',
  timezone: 'America/Denver',
}};

const JP_EN = {{
  '吹雪': 'Snow Storm', '雪': 'Snow',
  'なし': {tail},
}};
"#
    )
}

fn fixture_shared_json() -> String {
    serde_json::json!({
        "RESORT_TIMEZONES": {
            "vail": "America/Denver",
            "heavenly": "America/Los_Angeles",
            "snowbird": "America/Denver"
        },
        "JP_EN_WEATHER": {
            "吹雪": "Snow Storm",
            "雪": "Snow",
            "なし": "\u{2014}"
        },
        "VAIL_STATUS_MAP": {
            "Open": "OPERATING",
            "Scheduled": "CLOSED",
            "OnHold": "ON_HOLD",
            "Closed": "CLOSED"
        },
        "SNOWBIRD_STATUS_MAP": {
            "open": "OPERATING",
            "expected": "CLOSED",
            "closed": "CLOSED"
        },
        "NISEKO_STATUS_MAP": {
            "OPERATION_TEMPORARILY_SUSPENDED": "ON_HOLD",
            "SUSPENDED_CLOSED": "CLOSED"
        }
    })
    .to_string()
}

fn fixture_models_kt() -> String {
    r#"package com.jpski.niseko.data

val ALL_RESORTS = listOf(
    ResortConfig("niseko", "Niseko United", "Asia/Tokyo"),
    ResortConfig("vail", "Vail", "America/Denver"),
    ResortConfig("heavenly", "Heavenly", "America/Los_Angeles"),
    ResortConfig("snowbird", "Snowbird", "America/Denver"),
)

enum class LiftStatus {
    OPERATING, CLOSED, ON_HOLD;

    companion object {
        fun fromVailStatus(value: String): LiftStatus = when (value) {
            "Open" -> OPERATING
            "Scheduled" -> CLOSED
            "OnHold" -> ON_HOLD
            "Closed" -> CLOSED
            else -> CLOSED
        }
    }
}
"#
    .to_string()
}
