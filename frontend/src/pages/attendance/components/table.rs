use crate::{
    api::{AttendanceRecord, AttendanceStatus, AttendanceUpdate},
    pages::attendance::utils::AttendanceGroup,
    utils::time::{format_iso_date, time_input_value},
};
use leptos::*;

const CELL: &str = "py-2 px-2 border";

#[component]
pub fn AttendanceGroups(
    groups: Vec<AttendanceGroup>,
    on_update: Callback<(i64, AttendanceUpdate)>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    groups
        .into_iter()
        .map(|group| {
            view! { <AttendanceGroupTable group=group on_update=on_update on_delete=on_delete /> }
        })
        .collect_view()
}

#[component]
pub fn AttendanceGroupTable(
    group: AttendanceGroup,
    on_update: Callback<(i64, AttendanceUpdate)>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let date = format_iso_date(group.date);
    view! {
        <section class="mb-8" data-date-group=date.clone()>
            <h2 class="text-lg font-semibold mb-2">{date}</h2>
            <table class="w-full table-auto border-collapse border border-gray-300 shadow-md bg-white">
                <thead class="bg-gray-200">
                    <tr>
                        {["ID", "Employee", "Status", "Check In", "Check Out", "Actions"]
                            .into_iter()
                            .map(|label| view! { <th class="py-2 px-4 border">{label}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {group
                        .records
                        .into_iter()
                        .map(|record| view! { <AttendanceRow record=record on_update=on_update on_delete=on_delete /> })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn AttendanceRow(
    record: AttendanceRecord,
    on_update: Callback<(i64, AttendanceUpdate)>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let id = record.id;
    let current = record.status;

    view! {
        <tr class="text-center hover:bg-gray-100" data-attendance-id=id>
            <td class=CELL>{id}</td>
            <td class=CELL>{record.emp_full_name}</td>
            <td class=CELL>
                <select
                    class="border rounded p-1"
                    on:change=move |ev| {
                        if let Some(status) = AttendanceStatus::parse(&event_target_value(&ev)) {
                            on_update.call((id, AttendanceUpdate::status(status)));
                        }
                    }
                >
                    {AttendanceStatus::ALL
                        .into_iter()
                        .map(|status| view! {
                            <option value=status.as_str() selected={status == current}>
                                {status.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </td>
            <td class=CELL>
                <input
                    type="time"
                    class="border rounded p-1"
                    value=time_input_value(record.check_in_time.as_deref())
                    on:change=move |ev| {
                        on_update.call((id, AttendanceUpdate::check_in(&event_target_value(&ev))))
                    }
                />
            </td>
            <td class=CELL>
                <input
                    type="time"
                    class="border rounded p-1"
                    value=time_input_value(record.check_out_time.as_deref())
                    on:change=move |ev| {
                        on_update.call((id, AttendanceUpdate::check_out(&event_target_value(&ev))))
                    }
                />
            </td>
            <td class=CELL>
                <button
                    type="button"
                    class="bg-red-500 text-white px-3 py-1 rounded hover:bg-red-600"
                    on:click=move |_| on_delete.call(id)
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{
        pages::attendance::utils::visible_groups,
        test_support::{helpers::attendance, ssr::render_to_string},
    };
    use chrono::NaiveDate;

    fn noop_update() -> Callback<(i64, AttendanceUpdate)> {
        Callback::new(|_| {})
    }

    #[test]
    fn renders_one_table_per_date_newest_first() {
        let html = render_to_string(move || {
            let groups = visible_groups(
                vec![
                    attendance(1, "2024-05-01"),
                    attendance(2, "2024-05-02"),
                    attendance(3, "2024-05-01"),
                ],
                None,
            );
            view! { <AttendanceGroups groups=groups on_update=noop_update() on_delete=Callback::new(|_| {}) /> }
        });
        assert_eq!(html.matches("data-date-group").count(), 2);
        let newer = html.find("2024-05-02").unwrap_or(usize::MAX);
        let older = html.find("2024-05-01").unwrap_or(0);
        assert!(newer < older);
        assert_eq!(html.matches("data-attendance-id").count(), 3);
    }

    #[test]
    fn filtered_view_renders_a_single_group() {
        let html = render_to_string(move || {
            let groups = visible_groups(
                vec![attendance(1, "2024-05-01"), attendance(2, "2024-05-02")],
                NaiveDate::from_ymd_opt(2024, 5, 1),
            );
            view! { <AttendanceGroups groups=groups on_update=noop_update() on_delete=Callback::new(|_| {}) /> }
        });
        assert_eq!(html.matches("data-date-group").count(), 1);
        assert!(!html.contains("2024-05-02"));
    }

    #[test]
    fn row_shows_times_as_hours_and_minutes() {
        let html = render_to_string(move || {
            let group = AttendanceGroup {
                date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                records: vec![attendance(9, "2024-05-01")],
            };
            view! { <AttendanceGroupTable group=group on_update=noop_update() on_delete=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("value=\"09:00\""));
        assert!(html.contains("Employee 9"));
        assert!(html.contains("Delete"));
    }
}
