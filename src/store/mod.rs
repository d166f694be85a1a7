//! In-memory attendance store with write-through persistence.
//!
//! Owned by the application root and passed into every operation: loaded
//! once at startup, mutated only through the methods below, persisted
//! after each mutation. Single-client, last-writer-wins; a multi-client
//! deployment would need external synchronization.

pub mod kv;

use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use crate::models::record::AttendanceRecord;
use crate::models::saved_user::SavedUsers;
use crate::ui::messages::warning;
use crate::utils::date::{local_date_key, today_key};
use chrono::Utc;
use kv::KvStore;

pub const ATTENDANCE_KEY: &str = "attendanceData";
pub const SAVED_USERS_KEY: &str = "savedUsers";

/// Validated field values for a new check-in record.
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub city: City,
    pub name: String,
    pub phone: String,
    pub participant: crate::models::participant::ParticipantType,
    pub opportunity: String,
    pub national_id: String,
}

pub struct AttendanceStore {
    kv: KvStore,
    pub records: Vec<AttendanceRecord>,
    pub saved_users: SavedUsers,
}

impl AttendanceStore {
    /// Opens the storage file and loads both keys. A missing or
    /// unparseable blob falls back to the empty state; it is never fatal.
    /// The user directory is always rebuilt from record history, the
    /// stored `savedUsers` blob is written for legacy readers only.
    pub fn open(path: &str) -> AppResult<Self> {
        let kv = KvStore::open(path)?;

        let records: Vec<AttendanceRecord> = match kv.get(ATTENDANCE_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warning(format!("Stored attendance data is unreadable, starting empty: {e}"));
                Vec::new()
            }),
            None => Vec::new(),
        };

        let saved_users = SavedUsers::rebuild(&records);

        Ok(Self {
            kv,
            records,
            saved_users,
        })
    }

    /// Next record id: max existing + 1, or 1 for an empty store.
    pub fn next_id(&self) -> i64 {
        self.records.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }

    /// Appends a new open session stamped with the current instant.
    /// Multiple open check-ins for the same phone+city+day are permitted;
    /// checkout targets the most recent one.
    pub fn create_record(&mut self, input: NewRecord) -> AppResult<AttendanceRecord> {
        let record = AttendanceRecord {
            id: self.next_id(),
            city: input.city,
            name: input.name,
            phone: input.phone,
            participant: input.participant,
            opportunity: input.opportunity,
            national_id: input.national_id,
            check_in: Utc::now(),
            check_out: None,
            notes: String::new(),
            is_imported: false,
        };
        self.records.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Closes the most recently opened session for phone+city today.
    /// Fails when no such session exists: already checked out, wrong
    /// city, or never checked in today.
    pub fn close_active_session(&mut self, phone: &str, city: City) -> AppResult<AttendanceRecord> {
        let today = today_key();
        let found = self.records.iter_mut().rev().find(|r| {
            r.phone == phone
                && r.city == city
                && r.check_out.is_none()
                && local_date_key(&r.check_in) == today
        });

        match found {
            Some(rec) => {
                rec.check_out = Some(Utc::now());
                let closed = rec.clone();
                self.persist()?;
                Ok(closed)
            }
            None => Err(AppError::NotFound(
                "لا يوجد حضور مسجل لهذا الرقم أو تم تسجيل الخروج مسبقاً".to_string(),
            )),
        }
    }

    /// Inline notes edit. Silent no-op when the id is absent.
    pub fn update_notes(&mut self, id: i64, notes: &str) -> AppResult<()> {
        if let Some(rec) = self.records.iter_mut().find(|r| r.id == id) {
            rec.notes = notes.trim().to_string();
            self.persist()?;
        }
        Ok(())
    }

    /// Removes the record with the given id. Idempotent: a missing id is
    /// a no-op and the store is not rewritten.
    pub fn delete_record(&mut self, id: i64) -> AppResult<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() != before {
            self.persist()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Commits an import staging batch. Ids are assigned here so the
    /// uniqueness invariant stays in one place.
    pub fn append_imported(&mut self, staged: Vec<AttendanceRecord>) -> AppResult<()> {
        if staged.is_empty() {
            return Ok(());
        }
        let mut id = self.next_id();
        for mut rec in staged {
            rec.id = id;
            id += 1;
            self.records.push(rec);
        }
        self.persist()
    }

    /// Writes both storage keys together. On failure the in-memory state
    /// stays correct; only durability is lost.
    pub fn persist(&mut self) -> AppResult<()> {
        let data = serde_json::to_string(&self.records)?;
        let users = serde_json::to_string(&self.saved_users)?;
        self.kv
            .put_all(&[(ATTENDANCE_KEY, data), (SAVED_USERS_KEY, users)])
    }
}
