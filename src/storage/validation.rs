//! Payload checks run before any award write.
//!
//! Payloads arrive as raw JSON so missing fields can be reported by name
//! instead of as a generic decode error.

use super::models::{SeasonalAward, WeeklyBonus};
use crate::{Result, SleeperError};
use serde_json::{Map, Value};
use std::collections::HashSet;

fn as_array<'a>(payload: &'a Value, what: &str) -> Result<&'a Vec<Value>> {
    payload
        .as_array()
        .ok_or_else(|| SleeperError::validation(what, "expected a JSON array"))
}

fn as_object<'a>(item: &'a Value, field: &str) -> Result<&'a Map<String, Value>> {
    item.as_object()
        .ok_or_else(|| SleeperError::validation(field, "expected an object"))
}

fn required_text(obj: &Map<String, Value>, field: &str, at: &str) -> Result<()> {
    match obj.get(field).and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(SleeperError::validation(
            format!("{}.{}", at, field),
            "required non-empty string",
        )),
    }
}

fn required_amount(obj: &Map<String, Value>, at: &str) -> Result<()> {
    match obj.get("amount").and_then(Value::as_f64) {
        Some(n) if n.is_finite() => Ok(()),
        _ => Err(SleeperError::validation(
            format!("{}.amount", at),
            "required number",
        )),
    }
}

/// Check and decode a full award set.
pub fn validate_awards(payload: &Value) -> Result<Vec<SeasonalAward>> {
    let items = as_array(payload, "awards")?;
    let mut seen = HashSet::new();

    for (i, item) in items.iter().enumerate() {
        let at = format!("awards[{}]", i);
        let obj = as_object(item, &at)?;
        required_text(obj, "id", &at)?;
        required_text(obj, "title", &at)?;
        required_amount(obj, &at)?;

        let id = obj.get("id").and_then(Value::as_str).unwrap_or_default();
        if !seen.insert(id.to_string()) {
            return Err(SleeperError::validation(
                format!("{}.id", at),
                format!("duplicate id '{}'", id),
            ));
        }
    }

    serde_json::from_value(payload.clone())
        .map_err(|e| SleeperError::validation("awards", e.to_string()))
}

/// Check and decode a full weekly bonus set.
pub fn validate_weekly_bonuses(payload: &Value) -> Result<Vec<WeeklyBonus>> {
    let items = as_array(payload, "weekly_bonuses")?;
    let mut seen = HashSet::new();

    for (i, item) in items.iter().enumerate() {
        let at = format!("weekly_bonuses[{}]", i);
        let obj = as_object(item, &at)?;

        let week = obj
            .get("week")
            .and_then(Value::as_u64)
            .filter(|w| (1..=u64::from(u16::MAX)).contains(w))
            .ok_or_else(|| {
                SleeperError::validation(format!("{}.week", at), "required positive integer")
            })?;
        required_text(obj, "label", &at)?;
        required_amount(obj, &at)?;

        if !seen.insert(week) {
            return Err(SleeperError::validation(
                format!("{}.week", at),
                format!("duplicate week {}", week),
            ));
        }
    }

    serde_json::from_value(payload.clone())
        .map_err(|e| SleeperError::validation("weekly_bonuses", e.to_string()))
}
