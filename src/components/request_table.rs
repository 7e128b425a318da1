//! Shared table of pending verification requests.
//!
//! DESIGN
//! ======
//! Both list pages render the same name/email/actions table; they map their
//! wire records into [`RequestRow`]s and get told by id which record the
//! reviewer opened.

#[cfg(test)]
#[path = "request_table_test.rs"]
mod request_table_test;

use leptos::prelude::*;

/// One table row, already formatted for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub initials: String,
}

impl RequestRow {
    pub fn new(id: &str, first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: format!("{first_name} {last_name}"),
            email: email.to_owned(),
            initials: initials(first_name, last_name),
        }
    }
}

/// Uppercased first letters of both names, used for the avatar circle.
fn initials(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .take(1)
        .chain(last_name.chars().take(1))
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn RequestTable<F>(rows: Vec<RequestRow>, on_show: F) -> impl IntoView
where
    F: Fn(String) + Clone + 'static,
{
    let body = rows
        .into_iter()
        .map(|row| {
            let RequestRow {
                id,
                name,
                email,
                initials,
            } = row;
            let on_show = on_show.clone();
            let show_label = format!("Show request details for {name}");
            view! {
                <tr>
                    <td class="request-table__name">
                        <span class="request-table__avatar" aria-hidden="true">{initials}</span>
                        <span>{name}</span>
                    </td>
                    <td>{email}</td>
                    <td>
                        <button
                            class="request-table__show"
                            aria-label=show_label
                            on:click=move |_| on_show(id.clone())
                        >
                            "Show Request"
                        </button>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="request-table">
            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
