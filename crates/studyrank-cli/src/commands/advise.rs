//! Schedule advisor command.

use studyrank_core::{Config, ScheduleAdvisor};

use super::{local_now, open_board};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let (_, board) = open_board(local_now())?;
    let advisor = ScheduleAdvisor::from_config(&config.advisor);

    let runtime = tokio::runtime::Runtime::new()?;
    let analysis = runtime.block_on(advisor.analyze(&board.activities()));

    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}
