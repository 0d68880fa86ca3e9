//! Sign-up form E2E suite
//!
//! A Rust-controlled browser test harness for the hosted RotoGrinders
//! sign-up page. Scenarios are recorded as declarative step lists and
//! executed through Playwright, one fresh browser session per scenario.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Scenario Runner (Rust)                    │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ScenarioRunner                                              │
//! │    ├── run_all(&[Scenario]) -> SuiteResult                   │
//! │    └── write_report(&SuiteResult)                            │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Scenario::record(name, |driver| ...)                        │
//! │    ├── SignupPage: fill_username / fill_email /              │
//! │    │               fill_password / submit_form               │
//! │    ├── commands: verify_error_message / verify_success       │
//! │    └── data: random_username / random_email / message table  │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Playwright: build_script(&[Step]) -> Node script -> JSON    │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod locator;
pub mod page;
pub mod playwright;
pub mod runner;
pub mod scenarios;
pub mod step;

pub use commands::SignupAssertions;
pub use config::{Credentials, SuiteConfig};
pub use error::{E2eError, E2eResult};
pub use locator::Locator;
pub use page::SignupPage;
pub use playwright::{BrowserKind, Playwright};
pub use runner::{Scenario, ScenarioResult, ScenarioRunner, SuiteResult};
pub use step::{PageDriver, Step, StepRecorder};
