//! Scenario orchestration: recording, validation, execution, reporting

use std::path::PathBuf;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::config::SuiteConfig;
use crate::error::{E2eError, E2eResult};
use crate::playwright::Playwright;
use crate::step::{PageDriver, Step, StepRecorder};

/// One independent end-to-end case against the sign-up page.
#[derive(Debug)]
pub struct Scenario {
    pub name: String,
    steps: Vec<Step>,
}

impl Scenario {
    /// Records a scenario: a fresh visit of the target page, then whatever
    /// `build` drives, ending in a single terminal assertion.
    pub fn record(name: &str, build: impl FnOnce(&mut StepRecorder)) -> E2eResult<Self> {
        let mut rec = StepRecorder::new();
        rec.visit();
        build(&mut rec);

        let scenario = Self {
            name: name.to_string(),
            steps: rec.into_steps(),
        };
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Every scenario must end in exactly one observable, asserted outcome.
    fn validate(&self) -> E2eResult<()> {
        let assertions = self.steps.iter().filter(|s| s.is_assertion()).count();
        if assertions != 1 {
            return Err(E2eError::InvalidScenario {
                name: self.name.clone(),
                reason: format!("expected exactly one terminal assertion, found {assertions}"),
            });
        }
        let last_is_assertion = self.steps.last().map(Step::is_assertion).unwrap_or(false);
        if !last_is_assertion {
            return Err(E2eError::InvalidScenario {
                name: self.name.clone(),
                reason: "the assertion must be the final step".to_string(),
            });
        }
        Ok(())
    }
}

/// Outcome of one scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub success: bool,
    pub duration_ms: u64,
    pub error: Option<String>,
}

/// Outcome of the whole suite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub results: Vec<ScenarioResult>,
}

impl SuiteResult {
    pub fn summarize(results: Vec<ScenarioResult>, duration_ms: u64) -> Self {
        let passed = results.iter().filter(|r| r.success).count();
        Self {
            total: results.len(),
            passed,
            failed: results.len() - passed,
            duration_ms,
            results,
        }
    }
}

/// Runs scenarios sequentially; one scenario's failure never aborts siblings.
pub struct ScenarioRunner {
    config: SuiteConfig,
    playwright: Playwright,
}

impl ScenarioRunner {
    pub fn new(config: SuiteConfig) -> E2eResult<Self> {
        let playwright = Playwright::new(config.clone())?;
        Ok(Self { config, playwright })
    }

    /// Runs every scenario in order and aggregates the outcomes.
    pub async fn run_all(&self, scenarios: &[Scenario]) -> SuiteResult {
        let start = Instant::now();
        let mut results = Vec::with_capacity(scenarios.len());

        info!("Running {} scenario(s)...", scenarios.len());

        for scenario in scenarios {
            let result = self.run_scenario(scenario).await;
            if result.success {
                info!("✓ {} ({} ms)", result.name, result.duration_ms);
            } else {
                error!(
                    "✗ {} - {}",
                    result.name,
                    result.error.as_deref().unwrap_or("unknown error")
                );
            }
            results.push(result);
        }

        let suite = SuiteResult::summarize(results, start.elapsed().as_millis() as u64);

        info!("");
        info!(
            "Results: {} passed, {} failed ({} ms)",
            suite.passed, suite.failed, suite.duration_ms
        );

        suite
    }

    /// Runs a single scenario in a fresh browser session.
    pub async fn run_scenario(&self, scenario: &Scenario) -> ScenarioResult {
        debug!("Running scenario: {}", scenario.name);
        let start = Instant::now();

        match self.playwright.run_steps(scenario.steps()).await {
            Ok(_) => ScenarioResult {
                name: scenario.name.clone(),
                success: true,
                duration_ms: start.elapsed().as_millis() as u64,
                error: None,
            },
            Err(e) => ScenarioResult {
                name: scenario.name.clone(),
                success: false,
                duration_ms: start.elapsed().as_millis() as u64,
                error: Some(e.to_string()),
            },
        }
    }

    /// Writes the suite report as JSON under the configured report dir.
    pub fn write_report(&self, suite: &SuiteResult) -> E2eResult<PathBuf> {
        std::fs::create_dir_all(&self.config.report_dir)?;

        let path = self.config.report_dir.join("signup-results.json");
        let json = serde_json::to_string_pretty(suite)?;
        std::fs::write(&path, json)?;

        info!("Report written to: {}", path.display());
        Ok(path)
    }
}
