//! Persistence: one versioned JSON blob holding the whole schedule.
//!
//! Load happens once per command, save after every mutation. A blob that is
//! missing, unreadable or of an unsupported version falls back closed to the
//! bundled defaults; individually missing fields take their serde defaults.
//! Neither path is ever fatal: the CLI must stay usable when the data file
//! is broken.

pub mod defaults;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::money::Money;
use crate::errors::{AppError, AppResult};
use crate::models::{CollectionKind, EntryPatch, PaymentEntry};
use crate::ui::messages::warning;

/// Highest blob version this build understands.
pub const STORE_VERSION: u32 = 1;

fn default_version() -> u32 {
    STORE_VERSION
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Balances {
    #[serde(default = "defaults::equity")]
    pub equity: Money,
    #[serde(default = "defaults::till")]
    pub till: Money,
    #[serde(default = "defaults::pesapal")]
    pub pesapal: Money,
}

impl Default for Balances {
    fn default() -> Self {
        Self {
            equity: defaults::equity(),
            till: defaults::till(),
            pesapal: defaults::pesapal(),
        }
    }
}

/// The persisted record. Field names mirror the on-disk JSON keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleData {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "defaults::unpresented")]
    pub unpresented: Vec<PaymentEntry>,
    #[serde(default = "defaults::approval")]
    pub approval: Vec<PaymentEntry>,
    #[serde(rename = "weeklyRequisition", default = "defaults::weekly_requisition")]
    pub weekly_requisition: Vec<PaymentEntry>,
    #[serde(default)]
    pub balances: Balances,
    #[serde(rename = "scheduleDate", default = "defaults::schedule_date")]
    pub schedule_date: String,
}

impl Default for ScheduleData {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            unpresented: defaults::unpresented(),
            approval: defaults::approval(),
            weekly_requisition: defaults::weekly_requisition(),
            balances: Balances::default(),
            schedule_date: defaults::schedule_date(),
        }
    }
}

impl ScheduleData {
    pub fn entries(&self, kind: CollectionKind) -> &Vec<PaymentEntry> {
        match kind {
            CollectionKind::Unpresented => &self.unpresented,
            CollectionKind::Approval => &self.approval,
            CollectionKind::WeeklyRequisition => &self.weekly_requisition,
        }
    }

    pub fn entries_mut(&mut self, kind: CollectionKind) -> &mut Vec<PaymentEntry> {
        match kind {
            CollectionKind::Unpresented => &mut self.unpresented,
            CollectionKind::Approval => &mut self.approval,
            CollectionKind::WeeklyRequisition => &mut self.weekly_requisition,
        }
    }
}

pub struct Store {
    path: PathBuf,
    pub data: ScheduleData,
}

impl Store {
    /// Opens the data file, never failing: a missing file yields the seed
    /// dataset (first run), a broken or future-versioned one falls back
    /// closed to the defaults with a diagnostic.
    pub fn open(path: &Path) -> Store {
        let data = match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<ScheduleData>(&raw) {
                Ok(data) if data.version <= STORE_VERSION => data,
                Ok(data) => {
                    warning(format!(
                        "Data file {} has version {} (supported: {}); using default data",
                        path.display(),
                        data.version,
                        STORE_VERSION
                    ));
                    ScheduleData::default()
                }
                Err(e) => {
                    warning(format!(
                        "Failed to parse data file {}: {}; using default data",
                        path.display(),
                        e
                    ));
                    ScheduleData::default()
                }
            },
            Err(_) => ScheduleData::default(),
        };

        Store {
            path: path.to_path_buf(),
            data,
        }
    }

    /// Persists the whole record. Write failures are diagnostics, never
    /// user-facing errors: the in-memory state stays authoritative for the
    /// rest of the command.
    pub fn save(&self) {
        if let Err(e) = self.try_save() {
            warning(format!(
                "Failed to save data file {}: {}",
                self.path.display(),
                e
            ));
        }
    }

    fn try_save(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.data)?;

        // Write-then-rename so a crash mid-write cannot corrupt the blob.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn add_entry(&mut self, kind: CollectionKind, entry: PaymentEntry) {
        self.data.entries_mut(kind).push(entry);
    }

    /// Applies a patch to the entry with the given id. Returns false when
    /// the id is not present.
    pub fn edit_entry(&mut self, kind: CollectionKind, id: Uuid, patch: &EntryPatch) -> bool {
        match self.data.entries_mut(kind).iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                patch.apply(entry);
                true
            }
            None => false,
        }
    }

    /// Removes the entry with the given id. Returns false (a no-op) when
    /// the id is not present.
    pub fn delete_entry(&mut self, kind: CollectionKind, id: Uuid) -> bool {
        let entries = self.data.entries_mut(kind);
        let before = entries.len();
        entries.retain(|e| e.id != id);
        entries.len() != before
    }

    /// Resolves a full uuid or a unique hex prefix (as shown by `list`)
    /// into the entry id. `Ok(None)` means no match.
    pub fn resolve_id(&self, kind: CollectionKind, raw: &str) -> AppResult<Option<Uuid>> {
        if let Ok(id) = Uuid::parse_str(raw) {
            return Ok(self
                .data
                .entries(kind)
                .iter()
                .find(|e| e.id == id)
                .map(|e| e.id));
        }

        let needle = raw.to_ascii_lowercase().replace('-', "");
        if needle.is_empty() || !needle.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AppError::InvalidId(raw.to_string()));
        }

        let matches: Vec<Uuid> = self
            .data
            .entries(kind)
            .iter()
            .filter(|e| e.id.simple().to_string().starts_with(&needle))
            .map(|e| e.id)
            .collect();

        match matches.as_slice() {
            [] => Ok(None),
            [only] => Ok(Some(*only)),
            _ => Err(AppError::AmbiguousId(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_store(name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("{name}_paysched.json"));
        fs::remove_file(&path).ok();
        path
    }

    #[test]
    fn missing_file_yields_seed_dataset() {
        let path = temp_store("store_missing");
        let store = Store::open(&path);
        assert_eq!(store.data.unpresented.len(), 8);
        assert_eq!(store.data.approval.len(), 2);
        assert_eq!(store.data.weekly_requisition.len(), 1);
        assert_eq!(store.data.balances.equity.cents(), 1_495_664_00);
        assert_eq!(store.data.schedule_date, "2025-11-11");
    }

    #[test]
    fn save_then_open_reproduces_the_state() {
        let path = temp_store("store_roundtrip");
        let mut store = Store::open(&path);
        store.data.schedule_date = "2025-12-01".to_string();
        store.data.balances.till = Money::from_cents(12_345);
        store.add_entry(
            CollectionKind::Approval,
            PaymentEntry::new(
                "NEW PAYEE".to_string(),
                "SUPPLY, BOTTLED WATER".to_string(),
                Money::from_cents(9_99),
                "2025-11-20".to_string(),
            ),
        );
        store.save();

        let reloaded = Store::open(&path);
        assert_eq!(reloaded.data.schedule_date, "2025-12-01");
        assert_eq!(reloaded.data.balances.till.cents(), 12_345);
        assert_eq!(reloaded.data.approval.len(), 3);
        for (a, b) in store.data.approval.iter().zip(reloaded.data.approval.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.name, b.name);
            assert_eq!(a.details, b.details);
            assert_eq!(a.amount, b.amount);
            assert_eq!(a.date, b.date);
        }
    }

    #[test]
    fn corrupt_blob_falls_back_to_defaults() {
        let path = temp_store("store_corrupt");
        fs::write(&path, "{not json").unwrap();
        let store = Store::open(&path);
        assert_eq!(store.data.unpresented.len(), 8);
    }

    #[test]
    fn future_version_falls_back_closed() {
        let path = temp_store("store_future");
        fs::write(
            &path,
            r#"{"version": 99, "unpresented": [], "approval": [], "weeklyRequisition": []}"#,
        )
        .unwrap();
        let store = Store::open(&path);
        assert_eq!(store.data.version, STORE_VERSION);
        assert_eq!(store.data.unpresented.len(), 8);
    }

    #[test]
    fn missing_fields_take_their_defaults() {
        let path = temp_store("store_partial");
        fs::write(&path, r#"{"unpresented": [], "scheduleDate": "2025-01-01"}"#).unwrap();
        let store = Store::open(&path);
        assert!(store.data.unpresented.is_empty());
        assert_eq!(store.data.approval.len(), 2);
        assert_eq!(store.data.schedule_date, "2025-01-01");
        assert_eq!(store.data.balances.equity.cents(), 1_495_664_00);
    }

    #[test]
    fn delete_unknown_id_is_a_no_op() {
        let path = temp_store("store_del_noop");
        let mut store = Store::open(&path);
        let before = store.data.unpresented.len();
        assert!(!store.delete_entry(CollectionKind::Unpresented, Uuid::new_v4()));
        assert_eq!(store.data.unpresented.len(), before);
    }

    #[test]
    fn id_prefix_resolution() {
        let path = temp_store("store_prefix");
        let store = Store::open(&path);
        let id = store.data.unpresented[0].id;
        let prefix = id.simple().to_string()[..8].to_string();
        assert_eq!(
            store
                .resolve_id(CollectionKind::Unpresented, &prefix)
                .unwrap(),
            Some(id)
        );
        assert_eq!(
            store
                .resolve_id(CollectionKind::Unpresented, "ffffffff")
                .unwrap(),
            None
        );
        assert!(store.resolve_id(CollectionKind::Unpresented, "zzz").is_err());
    }
}
