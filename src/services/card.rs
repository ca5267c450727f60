use crate::domain::models::{CardAnswer, CardTrial};
use crate::services::scanner::Scanner;
use anyhow::Context;

pub const MIN_CARD: u8 = 1;
pub const MAX_CARD: u8 = 10;

pub fn parse_card_trials(scanner: &mut Scanner<'_>) -> anyhow::Result<Vec<CardTrial>> {
    let t = scanner.next_usize("trial count")?;
    let mut trials = Vec::with_capacity(t.min(1024));
    for i in 1..=t {
        let trial = parse_one(scanner).with_context(|| format!("trial {} of {}", i, t))?;
        trials.push(trial);
    }
    Ok(trials)
}

fn parse_one(scanner: &mut Scanner<'_>) -> anyhow::Result<CardTrial> {
    let n = scanner.next_usize("card count")?;
    let mut values = Vec::with_capacity(n.min(1024));
    for _ in 0..n {
        let v = scanner.next_i64("card value")?;
        if !(i64::from(MIN_CARD)..=i64::from(MAX_CARD)).contains(&v) {
            anyhow::bail!(
                "card value {} out of range {}..={}",
                v,
                MIN_CARD,
                MAX_CARD
            );
        }
        values.push(v as u8);
    }
    Ok(CardTrial { values })
}

/// Cards to drop so every remaining card shows the same value.
pub fn min_removals(values: &[u8]) -> usize {
    let mut freq = [0usize; MAX_CARD as usize + 1];
    for &v in values {
        freq[v as usize] += 1;
    }
    let max_freq = freq[MIN_CARD as usize..].iter().copied().max().unwrap_or(0);
    values.len() - max_freq
}

pub fn solve_cards(trials: &[CardTrial]) -> Vec<CardAnswer> {
    trials
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let removals = min_removals(&t.values);
            log::debug!(
                "card trial {}: n={} removals={}",
                i + 1,
                t.values.len(),
                removals
            );
            CardAnswer {
                trial: i + 1,
                removals,
            }
        })
        .collect()
}
