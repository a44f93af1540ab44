//! Draft value command implementation

use std::fmt::Write;

use super::common::{column, to_json, CommandContext};
use crate::{stats::service::DraftReport, LeagueId, Result};

/// Handle the draft value command
pub async fn handle_draft_value(
    league_id: Option<LeagueId>,
    no_cache: bool,
    as_json: bool,
) -> Result<()> {
    let ctx = CommandContext::new(league_id, no_cache)?;
    // tarpaulin::skip - HTTP call, tested via integration tests
    let report = ctx.service.load_draft_values(ctx.league_id).await?;

    if as_json {
        println!("{}", to_json(&report)?);
    } else {
        print!("{}", render_draft_report(&report));
    }
    Ok(())
}

pub fn render_draft_report(report: &DraftReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Draft {} ({}, {})",
        report.draft_id, report.draft_type, report.scoring_format
    );

    for pick in &report.picks {
        let slot = match pick.amount {
            Some(amount) => format!("${}", amount),
            None => format!("{}.{}", pick.round, pick.pick_no),
        };
        let _ = writeln!(
            out,
            "{:>6}  {}  {:<3}  {:<3} {:>5.2} ppg  value {:>5}{}",
            slot,
            column(&pick.name, 24),
            pick.position,
            if pick.position_rank > 0 {
                format!("#{}", pick.position_rank)
            } else {
                "-".to_string()
            },
            pick.season_ppg,
            pick.value_display,
            if pick.is_keeper { "  (keeper)" } else { "" },
        );
    }

    let awards = &report.awards;
    if let Some(best) = &awards.most_valuable_pick {
        let _ = writeln!(out, "Most valuable pick: {} ({})", best.name, best.value_display);
    }
    if let Some(worst) = &awards.least_valuable_early_pick {
        let _ = writeln!(
            out,
            "Least valuable early pick: {} ({})",
            worst.name, worst.value_display
        );
    }
    if let Some(grade) = &awards.most_impressive_draft {
        let _ = writeln!(
            out,
            "Most impressive draft: roster {} (avg {:.2} over {} picks)",
            grade.roster_id, grade.mean_value, grade.picks
        );
    }
    out
}
