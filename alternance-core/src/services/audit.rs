// src/services/audit.rs
//
// Per-record action trail. Entries are plain strings pushed onto the record's
// `logs` sequence; nothing here ever removes or reorders prior entries.
// Timestamps are rendered in Europe/Paris civil time because the trail is read
// by French school staff, while `created_at` stays UTC for ordering.

use chrono::{DateTime, Utc};
use chrono_tz::Europe::Paris;

use crate::records::ContractRecord;

/// Append `[DD/MM/YYYY HH:MM] message` to the record's trail, stamped now.
pub fn append(record: &mut ContractRecord, message: &str) {
    append_at(record, Utc::now(), message);
}

/// Same as [`append`] with an explicit instant, so tests can pin the clock.
pub fn append_at(record: &mut ContractRecord, at: DateTime<Utc>, message: &str) {
    let stamp = at.with_timezone(&Paris).format("%d/%m/%Y %H:%M");
    record.logs.push(format!("[{stamp}] {message}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{RecordDraft, Status};
    use chrono::TimeZone;

    fn blank() -> ContractRecord {
        ContractRecord::from_draft(RecordDraft::default(), Status::ATraiter)
    }

    #[test]
    fn entry_is_stamped_in_paris_civil_time() {
        let mut rec = blank();
        // 2025-01-15 09:30 UTC is 10:30 in Paris (CET, no DST).
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();
        append_at(&mut rec, at, "Mail envoyé à a@b.fr");
        assert_eq!(rec.logs, vec!["[15/01/2025 10:30] Mail envoyé à a@b.fr"]);
    }

    #[test]
    fn summer_entries_use_dst_offset() {
        let mut rec = blank();
        // 2025-07-01 09:30 UTC is 11:30 in Paris (CEST).
        let at = Utc.with_ymd_and_hms(2025, 7, 1, 9, 30, 0).unwrap();
        append_at(&mut rec, at, "x");
        assert_eq!(rec.logs[0], "[01/07/2025 11:30] x");
    }

    #[test]
    fn appends_preserve_prior_entries_and_order() {
        let mut rec = blank();
        append(&mut rec, "premier");
        append(&mut rec, "deuxième");
        append(&mut rec, "troisième");
        assert_eq!(rec.logs.len(), 3);
        assert!(rec.logs[0].ends_with("premier"));
        assert!(rec.logs[1].ends_with("deuxième"));
        assert!(rec.logs[2].ends_with("troisième"));
    }
}
