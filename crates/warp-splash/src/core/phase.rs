//! Timed scene sequence: Galaxy → WarpTransition → Warp → MainMenu.
//!
//! Every non-terminal phase owns a countdown decremented by the frame's `dt`.
//! When it expires the director moves to the next phase and carries the
//! leftover time into the new countdown, so the sequence is deterministic for
//! any frame pacing.

use crate::core::time::Countdown;

/// One step of the splash sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenePhase {
    /// Rotating galaxy intro.
    Galaxy,
    /// Galaxy rushes towards the viewer while the white overlay fades in.
    WarpTransition,
    /// Warp streaks fly out from the center.
    Warp,
    /// Interactive solar system. Terminal.
    MainMenu,
}

impl ScenePhase {
    /// The phase that follows this one, `None` for the terminal phase.
    pub fn next(self) -> Option<Self> {
        match self {
            ScenePhase::Galaxy => Some(ScenePhase::WarpTransition),
            ScenePhase::WarpTransition => Some(ScenePhase::Warp),
            ScenePhase::Warp => Some(ScenePhase::MainMenu),
            ScenePhase::MainMenu => None,
        }
    }

    /// Gating flags for the updaters and render passes.
    pub fn flags(self) -> PhaseFlags {
        match self {
            ScenePhase::Galaxy | ScenePhase::WarpTransition => PhaseFlags {
                galaxy: true,
                warp: false,
                menu: false,
            },
            ScenePhase::Warp => PhaseFlags {
                galaxy: false,
                warp: true,
                menu: false,
            },
            ScenePhase::MainMenu => PhaseFlags {
                galaxy: false,
                warp: false,
                menu: true,
            },
        }
    }

    /// Stable numeric id used on the wire.
    pub fn id(self) -> u32 {
        match self {
            ScenePhase::Galaxy => 0,
            ScenePhase::WarpTransition => 1,
            ScenePhase::Warp => 2,
            ScenePhase::MainMenu => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScenePhase::Galaxy => "galaxy",
            ScenePhase::WarpTransition => "warp-transition",
            ScenePhase::Warp => "warp",
            ScenePhase::MainMenu => "main-menu",
        }
    }
}

/// Which updaters and renderers run this frame.
/// Derived from a single [`ScenePhase`], so exactly one flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhaseFlags {
    pub galaxy: bool,
    pub warp: bool,
    pub menu: bool,
}

impl PhaseFlags {
    /// Warp streaks keep flying out after the menu appears; only spawning stops.
    pub fn moves_warp(self) -> bool {
        self.warp || self.menu
    }
}

/// Phase durations in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseDurations {
    pub galaxy: f32,
    pub warp_transition: f32,
    pub warp: f32,
}

impl PhaseDurations {
    fn of(&self, phase: ScenePhase) -> Option<f32> {
        match phase {
            ScenePhase::Galaxy => Some(self.galaxy),
            ScenePhase::WarpTransition => Some(self.warp_transition),
            ScenePhase::Warp => Some(self.warp),
            ScenePhase::MainMenu => None,
        }
    }
}

/// Drives the phase sequence forward. Phases are never re-entered.
#[derive(Debug, Clone)]
pub struct PhaseDirector {
    phase: ScenePhase,
    timer: Option<Countdown>,
    durations: PhaseDurations,
    /// Seconds spent in the current phase.
    elapsed: f32,
}

impl PhaseDirector {
    pub fn new(durations: PhaseDurations) -> Self {
        let phase = ScenePhase::Galaxy;
        Self {
            phase,
            timer: durations.of(phase).map(Countdown::new),
            durations,
            elapsed: 0.0,
        }
    }

    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    pub fn flags(&self) -> PhaseFlags {
        self.phase.flags()
    }

    /// Seconds spent in the current phase.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Seconds left before the next transition, `None` in the terminal phase.
    pub fn remaining(&self) -> Option<f32> {
        self.timer.as_ref().map(Countdown::remaining)
    }

    /// Advance by `dt` seconds. Returns every phase entered during this call, in order.
    pub fn advance(&mut self, dt: f32) -> Vec<ScenePhase> {
        let mut entered = Vec::new();
        let mut dt = dt.max(0.0);
        self.elapsed += dt;

        while let Some(timer) = self.timer.as_mut() {
            let Some(leftover) = timer.tick(dt) else {
                break;
            };
            let Some(next) = self.phase.next() else {
                self.timer = None;
                break;
            };
            self.phase = next;
            self.timer = self.durations.of(next).map(Countdown::new);
            self.elapsed = leftover;
            entered.push(next);
            dt = leftover;
        }
        entered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn durations() -> PhaseDurations {
        PhaseDurations {
            galaxy: 1.0,
            warp_transition: 1.2,
            warp: 2.0,
        }
    }

    fn run(director: &mut PhaseDirector, seconds: f32) -> Vec<ScenePhase> {
        let steps = (seconds * 60.0).round() as usize;
        let mut entered = Vec::new();
        for _ in 0..steps {
            entered.extend(director.advance(1.0 / 60.0));
        }
        entered
    }

    #[test]
    fn exactly_one_flag_per_phase() {
        for phase in [
            ScenePhase::Galaxy,
            ScenePhase::WarpTransition,
            ScenePhase::Warp,
            ScenePhase::MainMenu,
        ] {
            let f = phase.flags();
            let count = [f.galaxy, f.warp, f.menu].iter().filter(|b| **b).count();
            assert_eq!(count, 1, "{:?}", phase);
        }
    }

    #[test]
    fn sequence_follows_injected_time() {
        let mut d = PhaseDirector::new(durations());
        assert_eq!(d.phase(), ScenePhase::Galaxy);

        run(&mut d, 1.05);
        assert_eq!(d.phase(), ScenePhase::WarpTransition);
        assert!(d.flags().galaxy && !d.flags().warp);

        run(&mut d, 1.2);
        let f = d.flags();
        assert_eq!(d.phase(), ScenePhase::Warp);
        assert!(f.warp && !f.galaxy && !f.menu);

        run(&mut d, 2.0);
        let f = d.flags();
        assert_eq!(d.phase(), ScenePhase::MainMenu);
        assert!(f.menu && !f.galaxy && !f.warp);
        assert_eq!(d.remaining(), None);
    }

    #[test]
    fn large_step_passes_through_every_phase_once() {
        let mut d = PhaseDirector::new(durations());
        let entered = d.advance(10.0);
        assert_eq!(
            entered,
            vec![ScenePhase::WarpTransition, ScenePhase::Warp, ScenePhase::MainMenu]
        );
        assert!(d.advance(10.0).is_empty());
        assert_eq!(d.phase(), ScenePhase::MainMenu);
    }

    #[test]
    fn leftover_time_carries_into_next_phase() {
        let mut d = PhaseDirector::new(durations());
        d.advance(1.5);
        assert_eq!(d.phase(), ScenePhase::WarpTransition);
        assert!((d.elapsed() - 0.5).abs() < 1e-5);
        assert!((d.remaining().unwrap() - 0.7).abs() < 1e-5);
    }

    #[test]
    fn zero_dt_changes_nothing() {
        let mut d = PhaseDirector::new(durations());
        assert!(d.advance(0.0).is_empty());
        assert_eq!(d.phase(), ScenePhase::Galaxy);
    }
}
