//! Scenario runner that drives a demo session headless.

use crate::config::DemoConfig;
use crate::headless_assert::{assertion_name, evaluate, AssertionResult, SessionSnapshot};
use crate::headless_report::HeadlessReport;
use crate::headless_runtime::{HeadlessRunConfig, HeadlessRuntime};
use crate::headless_scenario::{HeadlessScenario, ScenarioStep};
use crate::session::DemoSession;
use anyhow::Result;
use starspin_animation::ManualClock;
use std::time::Duration;

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON against a fresh session.
pub fn run_scenario(input: &str, runtime_cfg: HeadlessRunConfig, demo: DemoConfig) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    run_loaded_scenario(&scenario, runtime_cfg, demo)
}

/// Execute a pre-loaded scenario against a fresh session.
pub fn run_loaded_scenario(
    scenario: &HeadlessScenario,
    runtime_cfg: HeadlessRunConfig,
    demo: DemoConfig,
) -> Result<RunOutcome> {
    let clock = ManualClock::default();
    let mut session = DemoSession::new(demo, clock.clone())?;
    let mut elapsed_frames: u64 = 0;
    let mut elapsed_ms: u64 = 0;

    for (step_index, step) in scenario.steps.iter().enumerate() {
        match step {
            ScenarioStep::Wait { ms } => {
                let frames = wait_frames(*ms, runtime_cfg.tick_ms);
                let mut remaining_ms = *ms;
                run_frames(&mut session, &clock, runtime_cfg, frames, &mut elapsed_frames, &mut elapsed_ms, || {
                    let step_ms = remaining_ms.min(runtime_cfg.tick_ms);
                    remaining_ms = remaining_ms.saturating_sub(step_ms);
                    step_ms
                })?;
            }
            ScenarioStep::Tick { frames } => {
                run_frames(&mut session, &clock, runtime_cfg, *frames, &mut elapsed_frames, &mut elapsed_ms, || {
                    runtime_cfg.tick_ms
                })?;
            }
            ScenarioStep::Spin => {
                if !session.request_spin()? {
                    tracing::debug!(step_index, "spin ignored, reels already spinning");
                }
            }
            ScenarioStep::ToggleWarp => session.toggle_warp(),
            assertion => {
                let snapshot = SessionSnapshot {
                    spinning: session.is_spinning(),
                    camera_depth: session.starfield().camera().depth,
                    spins_completed: session.reels().spins_completed(),
                };
                if let AssertionResult::Failed { message, .. } = evaluate(assertion, &snapshot) {
                    let report = HeadlessReport::failed(
                        assertion_name(assertion),
                        step_index,
                        message,
                        elapsed_frames,
                        elapsed_ms,
                        session.stats().clone(),
                    );
                    return Ok(RunOutcome::Failed { report });
                }
            }
        }
    }

    Ok(RunOutcome::Passed {
        report: HeadlessReport::passed(elapsed_frames, elapsed_ms, session.stats().clone()),
    })
}

fn run_frames<A>(
    session: &mut DemoSession<ManualClock>,
    clock: &ManualClock,
    runtime_cfg: HeadlessRunConfig,
    frames: u32,
    elapsed_frames: &mut u64,
    elapsed_ms: &mut u64,
    mut advance_ms: A,
) -> Result<()>
where
    A: FnMut() -> u64,
{
    if frames == 0 {
        return Ok(());
    }

    let mut cfg = runtime_cfg;
    cfg.max_frames = frames;
    HeadlessRuntime::run(cfg, |_| {
        let step = Duration::from_millis(advance_ms());
        clock.advance(step);
        session.frame(step);
        *elapsed_frames = (*elapsed_frames).saturating_add(1);
        *elapsed_ms = (*elapsed_ms).saturating_add(step.as_millis() as u64);
    })
}

fn wait_frames(wait_ms: u64, tick_ms: u64) -> u32 {
    if wait_ms == 0 {
        return 0;
    }
    let tick = tick_ms.max(1);
    let frames = wait_ms.saturating_add(tick.saturating_sub(1)) / tick;
    frames.min(u32::MAX as u64) as u32
}
