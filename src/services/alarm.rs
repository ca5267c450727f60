use crate::domain::models::{AlarmAnswer, AlarmTrial, Door, Verdict};
use crate::services::scanner::Scanner;
use anyhow::Context;

pub fn parse_alarm_trials(scanner: &mut Scanner<'_>) -> anyhow::Result<Vec<AlarmTrial>> {
    let t = scanner.next_usize("trial count")?;
    let mut trials = Vec::with_capacity(t.min(1024));
    for i in 1..=t {
        let trial = parse_one(scanner).with_context(|| format!("trial {} of {}", i, t))?;
        trials.push(trial);
    }
    Ok(trials)
}

fn parse_one(scanner: &mut Scanner<'_>) -> anyhow::Result<AlarmTrial> {
    let n = scanner.next_usize("door count")?;
    let duration = scanner.next_u32("button duration")?;
    let mut doors = Vec::with_capacity(n.min(1024));
    for _ in 0..n {
        let door = match scanner.next_i64("door state")? {
            0 => Door::Open,
            1 => Door::Closed,
            other => anyhow::bail!("door state must be 0 or 1, got {}", other),
        };
        doors.push(door);
    }
    Ok(AlarmTrial { doors, duration })
}

/// Walks the doors one second each. The button is pressed at the first
/// closed door; every closed door needs at least one second left on it.
pub fn simulate(doors: &[Door], duration: u32) -> Verdict {
    let mut pressed = false;
    let mut remaining = 0u32;

    for door in doors {
        match door {
            Door::Closed => {
                if !pressed {
                    pressed = true;
                    remaining = duration;
                }
                if remaining == 0 {
                    return Verdict::No;
                }
                remaining -= 1;
            }
            Door::Open => {
                if pressed && remaining > 0 {
                    remaining -= 1;
                }
            }
        }
    }
    Verdict::Yes
}

pub fn solve_alarms(trials: &[AlarmTrial]) -> Vec<AlarmAnswer> {
    trials
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let verdict = simulate(&t.doors, t.duration);
            log::debug!(
                "falsealarm trial {}: n={} x={} verdict={}",
                i + 1,
                t.doors.len(),
                t.duration,
                verdict
            );
            AlarmAnswer {
                trial: i + 1,
                verdict,
            }
        })
        .collect()
}
