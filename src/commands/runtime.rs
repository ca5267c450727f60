use crate::cli::{Cli, Commands};
use crate::domain::models::Settings;
use crate::services::alarm::{parse_alarm_trials, solve_alarms};
use crate::services::card::{parse_card_trials, solve_cards};
use crate::services::input::read_input;
use crate::services::output::print_out;
use crate::services::scanner::{finish, Scanner};

pub fn handle_runtime_commands(cli: &Cli, settings: Settings) -> anyhow::Result<()> {
    let text = read_input(cli.input_path().as_deref())?;
    let mut scanner = Scanner::new(&text);

    match &cli.command {
        Commands::Card => {
            let trials = parse_card_trials(&mut scanner)?;
            finish(&scanner, settings.strict)?;
            let answers = solve_cards(&trials);
            log::info!("card: solved {} trial(s)", answers.len());
            print_out(settings.json, &answers, |a| a.removals.to_string())?;
        }
        Commands::FalseAlarm => {
            let trials = parse_alarm_trials(&mut scanner)?;
            finish(&scanner, settings.strict)?;
            let answers = solve_alarms(&trials);
            log::info!("falsealarm: solved {} trial(s)", answers.len());
            print_out(settings.json, &answers, |a| a.verdict.to_string())?;
        }
    }
    Ok(())
}
