//! Spin orchestration and per-frame symbol layout
//!
//! Idle -> Spinning on [`ReelController::start_spin`], back to Idle when the
//! last reel's tween completes.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use starspin_animation::{Easing, Property, Tween, TweenScheduler};

use crate::error::Result;
use crate::plan::{ReelLayout, SpinPlan};
use crate::reel::{Reel, SymbolSlot};
use crate::symbols::{SymbolId, SymbolPool};

/// A symbol that scrolled out of view and now shows new content
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolSwap {
    pub reel: usize,
    pub slot: usize,
    pub symbol: SymbolId,
    pub scale: f64,
    pub x: f64,
}

pub struct ReelController {
    layout: ReelLayout,
    plan: SpinPlan,
    pool: SymbolPool,
    reels: Vec<Reel>,
    spinning: Rc<Cell<bool>>,
    spins_completed: Rc<Cell<u64>>,
    rng: StdRng,
}

impl ReelController {
    pub fn new(layout: ReelLayout, plan: SpinPlan, pool: SymbolPool) -> Result<Self> {
        Self::with_rng(layout, plan, pool, StdRng::from_os_rng())
    }

    /// Deterministic symbol choice for tests and headless runs
    pub fn with_seed(layout: ReelLayout, plan: SpinPlan, pool: SymbolPool, seed: u64) -> Result<Self> {
        Self::with_rng(layout, plan, pool, StdRng::seed_from_u64(seed))
    }

    fn with_rng(layout: ReelLayout, plan: SpinPlan, pool: SymbolPool, mut rng: StdRng) -> Result<Self> {
        layout.validate()?;

        let reels = (0..layout.reel_count)
            .map(|i| {
                let slots = (0..layout.symbols_per_reel)
                    .map(|j| {
                        let symbol = rng.random_range(0..pool.len());
                        let (scale, x) = pool.fit(symbol, layout.symbol_size);
                        SymbolSlot {
                            symbol,
                            y: j as f64 * layout.symbol_size,
                            x,
                            scale,
                        }
                    })
                    .collect();
                Reel::new(layout.column_x(i), slots)
            })
            .collect();

        Ok(Self {
            layout,
            plan,
            pool,
            reels,
            spinning: Rc::new(Cell::new(false)),
            spins_completed: Rc::new(Cell::new(0)),
            rng,
        })
    }

    pub fn layout(&self) -> &ReelLayout {
        &self.layout
    }

    pub fn plan(&self) -> &SpinPlan {
        &self.plan
    }

    pub fn reels(&self) -> &[Reel] {
        &self.reels
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning.get()
    }

    /// Number of spins that ran to completion
    pub fn spins_completed(&self) -> u64 {
        self.spins_completed.get()
    }

    /// Register one staggered tween per reel.
    ///
    /// Returns `Ok(false)` without touching the scheduler if a spin is
    /// already running.
    pub fn start_spin(&mut self, scheduler: &mut TweenScheduler, now: Instant) -> Result<bool> {
        if self.spinning.get() {
            return Ok(false);
        }

        let last = self.reels.len() - 1;
        let mut tweens = Vec::with_capacity(self.reels.len());
        for (i, reel) in self.reels.iter().enumerate() {
            let target = self.plan.target(i, reel.position());
            let tween = Tween::to(
                Property::cell(reel.position_cell()),
                target,
                self.plan.duration(i),
                Easing::back_out(self.plan.backout_amount),
                now,
            )?;

            let tween = if i == last {
                let spinning = self.spinning.clone();
                let completed = self.spins_completed.clone();
                tween.on_complete(move |_| {
                    spinning.set(false);
                    completed.set(completed.get() + 1);
                    tracing::debug!(spins = completed.get(), "reels stopped");
                })
            } else {
                tween
            };
            tweens.push(tween);
        }

        self.spinning.set(true);
        for tween in tweens {
            scheduler.add(tween);
        }
        tracing::debug!(reels = self.reels.len(), "spin started");
        Ok(true)
    }

    /// Layout pass; run after the scheduler has ticked this frame.
    ///
    /// Updates blur and symbol offsets from each reel's position and swaps
    /// symbols that wrapped from the bottom back to the top.
    pub fn tick(&mut self) -> Vec<SymbolSwap> {
        let size = self.layout.symbol_size;
        let mut swaps = Vec::new();

        for (r, reel) in self.reels.iter_mut().enumerate() {
            let position = reel.sample_velocity(self.layout.blur_gain);
            let slots = reel.symbols_mut();
            let count = slots.len() as f64;

            for (j, slot) in slots.iter_mut().enumerate() {
                let previous_y = slot.y;
                slot.y = (position + j as f64).rem_euclid(count) * size - size;

                if slot.y < 0.0 && previous_y > size {
                    slot.symbol = self.rng.random_range(0..self.pool.len());
                    let (scale, x) = self.pool.fit(slot.symbol, size);
                    slot.scale = scale;
                    slot.x = x;
                    swaps.push(SymbolSwap {
                        reel: r,
                        slot: j,
                        symbol: slot.symbol,
                        scale,
                        x,
                    });
                }
            }
        }

        swaps
    }
}

impl std::fmt::Debug for ReelController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReelController")
            .field("layout", &self.layout)
            .field("reels", &self.reels.len())
            .field("spinning", &self.spinning.get())
            .field("spins_completed", &self.spins_completed.get())
            .finish()
    }
}
