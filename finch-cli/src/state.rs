//! Per-user state store: three JSON files under ~/.finch/users/<user>/,
//! loaded wholesale and written back after each command. The core library
//! never touches these; it only sees the in-memory snapshot.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use finch_core::{AIInsight, FinancialGoal, Transaction};

pub fn finch_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("FINCH_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".finch"))
}

fn user_dir(user: &str) -> Result<PathBuf> {
    Ok(finch_home()?.join("users").join(user))
}

/// Everything finch knows about one user
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserState {
    pub transactions: Vec<Transaction>,
    pub goals: Vec<FinancialGoal>,
    pub insights: Vec<AIInsight>,
}

fn read_list<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

fn write_list<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn load_state_from(dir: &Path) -> Result<UserState> {
    Ok(UserState {
        transactions: read_list(&dir.join("transactions.json"))?,
        goals: read_list(&dir.join("goals.json"))?,
        insights: read_list(&dir.join("insights.json"))?,
    })
}

pub fn save_state_to(dir: &Path, state: &UserState) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    write_list(&dir.join("transactions.json"), &state.transactions)?;
    write_list(&dir.join("goals.json"), &state.goals)?;
    write_list(&dir.join("insights.json"), &state.insights)?;
    Ok(())
}

pub fn load_state(user: &str) -> Result<UserState> {
    load_state_from(&user_dir(user)?)
}

pub fn save_state(user: &str, state: &UserState) -> Result<()> {
    save_state_to(&user_dir(user)?, state)
}

/// Fresh id derived from the current timestamp, with a disambiguating
/// offset for ids minted in the same command
pub fn fresh_id(offset: i64) -> String {
    (chrono::Utc::now().timestamp_millis() + offset).to_string()
}
