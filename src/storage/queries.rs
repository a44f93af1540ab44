//! Award and weekly bonus reads and writes

use super::defaults::{default_awards, default_weekly_bonuses};
use super::{models::*, schema::AwardDatabase};
use crate::Season;
use anyhow::Result;
use rusqlite::{params, Row};
use std::time::{SystemTime, UNIX_EPOCH};

fn now_secs() -> Result<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}

fn award_from_row(row: &Row) -> rusqlite::Result<SeasonalAward> {
    Ok(SeasonalAward {
        id: row.get(0)?,
        title: row.get(1)?,
        definition: row.get(2)?,
        amount: row.get(3)?,
        winner_owner_id: row.get(4)?,
        winner_name_override: row.get(5)?,
    })
}

fn bonus_from_row(row: &Row) -> rusqlite::Result<WeeklyBonus> {
    Ok(WeeklyBonus {
        week: row.get(0)?,
        label: row.get(1)?,
        note: row.get(2)?,
        amount: row.get(3)?,
        winner_owner_id: row.get(4)?,
        winner_name_override: row.get(5)?,
    })
}

impl AwardDatabase {
    /// Awards for a season in stored order; seeds the defaults on first read.
    pub fn get_awards(&mut self, season: Season) -> Result<Vec<SeasonalAward>> {
        let stored = self.select_awards(season)?;
        if !stored.is_empty() {
            return Ok(stored);
        }
        let defaults = default_awards();
        self.put_awards(season, &defaults)?;
        Ok(defaults)
    }

    /// Replace every award for the season in one transaction.
    pub fn put_awards(&mut self, season: Season, awards: &[SeasonalAward]) -> Result<()> {
        let now = now_secs()?;
        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM seasonal_awards WHERE season = ?",
            params![season.as_u16()],
        )?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO seasonal_awards
                 (season, position, id, title, definition, amount,
                  winner_owner_id, winner_name_override, updated_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )?;
            for (position, award) in awards.iter().enumerate() {
                stmt.execute(params![
                    season.as_u16(),
                    position as i64,
                    award.id,
                    award.title,
                    award.definition,
                    award.amount,
                    award.winner_owner_id,
                    award.winner_name_override,
                    now
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Weekly bonuses by week; seeds the defaults on first read.
    pub fn get_weekly_bonuses(&mut self, season: Season) -> Result<Vec<WeeklyBonus>> {
        let stored = self.select_weekly_bonuses(season)?;
        if !stored.is_empty() {
            return Ok(stored);
        }
        let defaults = default_weekly_bonuses();
        self.put_weekly_bonuses(season, &defaults)?;
        Ok(defaults)
    }

    /// Replace every weekly bonus for the season in one transaction.
    pub fn put_weekly_bonuses(&mut self, season: Season, bonuses: &[WeeklyBonus]) -> Result<()> {
        let now = now_secs()?;
        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM weekly_bonuses WHERE season = ?",
            params![season.as_u16()],
        )?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO weekly_bonuses
                 (season, week, label, note, amount,
                  winner_owner_id, winner_name_override, updated_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )?;
            for bonus in bonuses {
                stmt.execute(params![
                    season.as_u16(),
                    bonus.week,
                    bonus.label,
                    bonus.note,
                    bonus.amount,
                    bonus.winner_owner_id,
                    bonus.winner_name_override,
                    now
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Drop everything stored for a season so the next read reseeds it.
    pub fn clear_season(&mut self, season: Season) -> Result<()> {
        self.conn.execute(
            "DELETE FROM seasonal_awards WHERE season = ?",
            params![season.as_u16()],
        )?;
        self.conn.execute(
            "DELETE FROM weekly_bonuses WHERE season = ?",
            params![season.as_u16()],
        )?;
        Ok(())
    }

    fn select_awards(&self, season: Season) -> Result<Vec<SeasonalAward>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, definition, amount, winner_owner_id, winner_name_override
             FROM seasonal_awards WHERE season = ? ORDER BY position",
        )?;
        let rows = stmt.query_map(params![season.as_u16()], award_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn select_weekly_bonuses(&self, season: Season) -> Result<Vec<WeeklyBonus>> {
        let mut stmt = self.conn.prepare(
            "SELECT week, label, note, amount, winner_owner_id, winner_name_override
             FROM weekly_bonuses WHERE season = ? ORDER BY week",
        )?;
        let rows = stmt.query_map(params![season.as_u16()], bonus_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}
