//! Award storage commands

use serde_json::Value;
use std::fmt::Write;
use std::path::Path;
use tracing::info;

use super::common::to_json;
use crate::{
    core::authorize_bearer,
    storage::{validate_awards, validate_weekly_bonuses, AwardDatabase, SeasonalAward, WeeklyBonus},
    Result, Season, ADMIN_TOKEN_ENV_VAR,
};

/// Which award table a command reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardKind {
    Seasonal,
    WeeklyBonus,
}

impl AwardKind {
    pub fn from_flag(bonuses: bool) -> Self {
        if bonuses {
            AwardKind::WeeklyBonus
        } else {
            AwardKind::Seasonal
        }
    }
}

/// Handle `awards get`
pub fn handle_awards_get(season: Season, bonuses: bool, as_json: bool) -> Result<()> {
    let mut db = AwardDatabase::new()?;
    let out = match AwardKind::from_flag(bonuses) {
        AwardKind::Seasonal => {
            let awards = db.get_awards(season)?;
            if as_json {
                to_json(&awards)?
            } else {
                render_awards(&awards)
            }
        }
        AwardKind::WeeklyBonus => {
            let bonuses = db.get_weekly_bonuses(season)?;
            if as_json {
                to_json(&bonuses)?
            } else {
                render_weekly_bonuses(&bonuses)
            }
        }
    };
    println!("{}", out.trim_end());
    Ok(())
}

/// Handle `awards put`
pub fn handle_awards_put(
    season: Season,
    file: &Path,
    bonuses: bool,
    authorization: Option<&str>,
) -> Result<()> {
    let admin_token = std::env::var(ADMIN_TOKEN_ENV_VAR).ok();
    // Reject before touching the file or the database.
    authorize_bearer(authorization, admin_token.as_deref())?;

    let payload: Value = serde_json::from_str(&std::fs::read_to_string(file)?)?;
    let mut db = AwardDatabase::new()?;
    let kind = AwardKind::from_flag(bonuses);
    let stored = apply_award_update(&mut db, season, kind, &payload, authorization, admin_token.as_deref())?;

    println!("✓ Stored {} records for {}", stored, season);
    Ok(())
}

/// Authorize, validate, then replace the season's records of `kind`.
///
/// Nothing is written unless the whole payload is valid.
pub fn apply_award_update(
    db: &mut AwardDatabase,
    season: Season,
    kind: AwardKind,
    payload: &Value,
    authorization: Option<&str>,
    admin_token: Option<&str>,
) -> Result<usize> {
    authorize_bearer(authorization, admin_token)?;

    let stored = match kind {
        AwardKind::Seasonal => {
            let awards = validate_awards(payload)?;
            db.put_awards(season, &awards)?;
            awards.len()
        }
        AwardKind::WeeklyBonus => {
            let bonuses = validate_weekly_bonuses(payload)?;
            db.put_weekly_bonuses(season, &bonuses)?;
            bonuses.len()
        }
    };
    info!(%season, ?kind, stored, "award records replaced");
    Ok(stored)
}

fn winner(owner_id: &Option<String>, name_override: &Option<String>) -> String {
    name_override
        .clone()
        .or_else(|| owner_id.clone())
        .unwrap_or_else(|| "TBD".to_string())
}

pub fn render_awards(awards: &[SeasonalAward]) -> String {
    let mut out = String::new();
    for award in awards {
        let _ = writeln!(
            out,
            "{:<28} ${:>7.2}  {}",
            award.title,
            award.amount,
            winner(&award.winner_owner_id, &award.winner_name_override),
        );
        if !award.definition.is_empty() {
            let _ = writeln!(out, "    {}", award.definition);
        }
    }
    out
}

pub fn render_weekly_bonuses(bonuses: &[WeeklyBonus]) -> String {
    let mut out = String::new();
    for bonus in bonuses {
        let _ = writeln!(
            out,
            "Week {:>2}  {:<20} ${:>6.2}  {}",
            bonus.week,
            bonus.label,
            bonus.amount,
            winner(&bonus.winner_owner_id, &bonus.winner_name_override),
        );
    }
    out
}
