use crate::api::AttendanceRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this record?";

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceGroup {
    pub date: NaiveDate,
    pub records: Vec<AttendanceRecord>,
}

/// One group per calendar date, newest first. Records keep their load order
/// within a group.
pub fn group_by_date(records: Vec<AttendanceRecord>) -> Vec<AttendanceGroup> {
    let mut by_date: BTreeMap<NaiveDate, Vec<AttendanceRecord>> = BTreeMap::new();
    for record in records {
        by_date.entry(record.date).or_default().push(record);
    }
    by_date
        .into_iter()
        .rev()
        .map(|(date, records)| AttendanceGroup { date, records })
        .collect()
}

pub fn flatten(groups: Vec<AttendanceGroup>) -> Vec<AttendanceRecord> {
    groups.into_iter().flat_map(|group| group.records).collect()
}

/// Groups shown for the active filter. The server filters by date already,
/// records for other dates are still dropped here.
pub fn visible_groups(
    records: Vec<AttendanceRecord>,
    filter: Option<NaiveDate>,
) -> Vec<AttendanceGroup> {
    let records = match filter {
        Some(date) => records.into_iter().filter(|r| r.date == date).collect(),
        None => records,
    };
    group_by_date(records)
}

pub fn bulk_create_message(created: usize) -> String {
    format!("Attendance created for {} employees.", created)
}
