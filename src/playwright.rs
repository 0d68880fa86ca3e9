//! Playwright browser automation
//!
//! Drives Playwright through a generated Node script: one self-contained
//! script per scenario executes every recorded step in a single browser
//! session and emits one JSON result line, which is parsed back into the
//! suite's error taxonomy. This keeps the crate free of a native browser
//! binding while preserving strict in-order step execution.

use std::process::{Command, Stdio};

use serde::Deserialize;
use tokio::process::Command as TokioCommand;
use tracing::debug;

use crate::config::SuiteConfig;
use crate::error::{E2eError, E2eResult};
use crate::step::Step;

/// Browser engine to launch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
        }
    }

    /// Parses an engine name, falling back to chromium.
    pub fn from_name(name: &str) -> Self {
        match name {
            "firefox" => BrowserKind::Firefox,
            "webkit" => BrowserKind::Webkit,
            _ => BrowserKind::Chromium,
        }
    }
}

/// Executes recorded steps against the hosted page.
pub struct Playwright {
    config: SuiteConfig,
}

/// Result line emitted by the generated script.
#[derive(Debug, Deserialize)]
struct RawOutcome {
    ok: bool,
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    failed_step: Option<String>,
    #[serde(default)]
    selector: Option<String>,
    #[serde(default)]
    expected: Option<String>,
    #[serde(default)]
    actual: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    elapsed_ms: u64,
    /// Wait elapsed on the failing step, not the whole script.
    #[serde(default)]
    step_elapsed_ms: u64,
}

impl RawOutcome {
    fn into_error(self) -> E2eError {
        let selector = self.selector.unwrap_or_default();
        match self.kind.as_deref() {
            Some("mismatch") => E2eError::TextMismatch {
                selector,
                expected: self.expected.unwrap_or_default(),
                actual: self.actual.unwrap_or_default(),
            },
            Some("timeout") => E2eError::ElementTimeout {
                selector,
                elapsed_ms: self.step_elapsed_ms,
            },
            _ => E2eError::StepFailed {
                step: self.failed_step.unwrap_or_else(|| "unknown".to_string()),
                reason: self.error.unwrap_or_else(|| "unknown error".to_string()),
            },
        }
    }
}

impl Playwright {
    pub fn new(config: SuiteConfig) -> E2eResult<Self> {
        Self::check_installed()?;
        Ok(Self { config })
    }

    /// Whether a Playwright installation is reachable via `npx`.
    pub fn available() -> bool {
        Self::check_installed().is_ok()
    }

    fn check_installed() -> E2eResult<()> {
        let status = Command::new("npx")
            .args(["playwright", "--version"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => Ok(()),
            _ => Err(E2eError::PlaywrightNotFound),
        }
    }

    /// Builds the Node script for one scenario's steps.
    pub fn build_script(&self, steps: &[Step]) -> String {
        let mut script = String::new();

        script.push_str(&format!(
            r#"const {{ chromium, firefox, webkit }} = require('playwright');

(async () => {{
  const browser = await {browser}.launch({{ headless: {headless} }});
  const page = await browser.newPage();
  const started = Date.now();
  let current = {{ name: 'launch', selector: '', started: Date.now() }};
  const report = (extra) => {{
    console.log(JSON.stringify(Object.assign({{ elapsed_ms: Date.now() - started }}, extra)));
  }};
  try {{
"#,
            browser = self.config.browser.as_str(),
            headless = self.config.headless,
        ));

        for (i, step) in steps.iter().enumerate() {
            script.push_str(&format!("\n    // Step {}: {}\n", i + 1, step.name()));
            script.push_str(&self.step_to_js(step));
        }

        script.push_str(
            r#"
    report({ ok: true });
  } catch (error) {
    const message = String((error && error.message) || error);
    const timedOut = /timeout/i.test(message);
    report({
      ok: false,
      kind: timedOut ? 'timeout' : 'error',
      failed_step: current.name,
      selector: current.selector,
      step_elapsed_ms: Date.now() - current.started,
      error: message,
    });
    process.exitCode = 1;
  } finally {
    await browser.close();
  }
})();
"#,
        );

        script
    }

    fn step_to_js(&self, step: &Step) -> String {
        let timeout = self.config.timeout_ms();
        let name = js_string(&step.name());

        match step {
            Step::Visit => {
                let url = js_string(&self.config.base_url);
                format!(
                    "    current = {{ name: {name}, selector: '', started: Date.now() }};\n    await page.goto({url}, {{ timeout: {timeout} }});\n"
                )
            }
            Step::Type { target, text } => {
                let sel = js_string(&target.selector());
                let text = js_string(text);
                format!(
                    "    current = {{ name: {name}, selector: {sel}, started: Date.now() }};\n    await page.type({sel}, {text}, {{ timeout: {timeout} }});\n"
                )
            }
            Step::Click { target } => {
                let sel = js_string(&target.selector());
                format!(
                    "    current = {{ name: {name}, selector: {sel}, started: Date.now() }};\n    await page.click({sel}, {{ timeout: {timeout} }});\n"
                )
            }
            Step::ExpectText { target, expected } => {
                let sel = js_string(&target.selector());
                let expected = js_string(expected);
                format!(
                    r#"    current = {{ name: {name}, selector: {sel}, started: Date.now() }};
    {{
      const expected = {expected};
      const actual = await page.innerText({sel}, {{ timeout: {timeout} }});
      if (actual !== expected) {{
        report({{
          ok: false,
          kind: 'mismatch',
          failed_step: current.name,
          selector: current.selector,
          expected: expected,
          actual: actual,
          error: 'text mismatch',
        }});
        process.exitCode = 1;
        return;
      }}
    }}
"#
                )
            }
        }
    }

    /// Runs one scenario's steps in a fresh browser session.
    ///
    /// Returns the elapsed milliseconds reported by the script.
    pub async fn run_steps(&self, steps: &[Step]) -> E2eResult<u64> {
        let script = self.build_script(steps);

        let temp_dir = tempfile::tempdir()?;
        let script_path = temp_dir.path().join("scenario.js");
        std::fs::write(&script_path, &script)?;

        debug!("Running Playwright script: {}", script_path.display());

        let output = TokioCommand::new("node")
            .arg(&script_path)
            .output()
            .await?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        let outcome = parse_outcome(&stdout).ok_or_else(|| {
            E2eError::Playwright(format!(
                "no result line in script output:\nstdout: {stdout}\nstderr: {stderr}"
            ))
        })?;

        if outcome.ok {
            Ok(outcome.elapsed_ms)
        } else {
            Err(outcome.into_error())
        }
    }
}

/// Picks the last parseable result line out of mixed script output.
fn parse_outcome(stdout: &str) -> Option<RawOutcome> {
    stdout
        .lines()
        .rev()
        .map(str::trim)
        .filter(|line| line.starts_with('{'))
        .find_map(|line| serde_json::from_str(line).ok())
}

/// Renders a double-quoted JavaScript string literal.
fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
