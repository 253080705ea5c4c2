//! Workload chart command.

use super::{local_now, open_board};

const BAR_WIDTH: u64 = 40;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_, board) = open_board(local_now())?;
    let points = board.chart();

    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }
    if points.is_empty() {
        println!("No activities scheduled.");
        return Ok(());
    }

    let peak = points.iter().map(|p| p.load).max().unwrap_or(1).max(1);
    for point in &points {
        let width = (point.load * BAR_WIDTH).div_ceil(peak);
        println!(
            "{}  {:<width$}  {} min",
            point.label,
            "#".repeat(width as usize),
            point.load,
            width = BAR_WIDTH as usize
        );
    }
    Ok(())
}
