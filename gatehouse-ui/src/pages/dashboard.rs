//! Admin dashboard: user stat cards and the recent-users table

use gatehouse_common::{User, UserRole, UserStatus};
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

use crate::api;
use crate::session::{self, use_session};
use crate::toast::use_toasts;

/// Status counts derived from the loaded user collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub suspended: usize,
}

/// Count users per status bucket. Statuses outside the three known values
/// count toward `total` only.
pub fn summarize(users: &[User]) -> StatusSummary {
    let mut summary = StatusSummary {
        total: users.len(),
        ..Default::default()
    };

    for user in users {
        match user.status {
            UserStatus::Active => summary.active += 1,
            UserStatus::Inactive => summary.inactive += 1,
            UserStatus::Suspended => summary.suspended += 1,
            UserStatus::Other(_) => {}
        }
    }

    summary
}

fn role_badge_class(role: &UserRole) -> &'static str {
    if role.is_admin() {
        "role-badge role-admin"
    } else {
        "role-badge role-user"
    }
}

fn status_badge_class(status: &UserStatus) -> &'static str {
    match status {
        UserStatus::Active => "status-badge status-active",
        UserStatus::Inactive => "status-badge status-inactive",
        // Suspended shares the fallback treatment with unknown values
        _ => "status-badge status-suspended",
    }
}

fn row_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "row-even"
    } else {
        "row-odd"
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();

    let (users, set_users) = create_signal(Vec::<User>::new());
    let (loading, set_loading) = create_signal(true);

    // Credential is captured once at mount; a later session change does not
    // re-trigger the load.
    let token = session::token_untracked(session);

    // Flipped on unmount so a late completion never writes into a dead view
    let cancelled = Rc::new(Cell::new(false));
    {
        let cancelled = cancelled.clone();
        on_cleanup(move || cancelled.set(true));
    }

    // Load users on mount, exactly once
    create_effect(move |_| {
        let token = token.clone();
        let cancelled = cancelled.clone();
        spawn_local(async move {
            let result = api::list_users(token.as_deref()).await;
            if cancelled.get() {
                return;
            }
            match result {
                Ok(list) => set_users.set(list),
                Err(e) => {
                    logging::error!("failed to load users: {}", e);
                    toasts.error("Failed to load users");
                }
            }
            set_loading.set(false);
        });
    });

    let summary = move || users.with(|users| summarize(users));

    view! {
        <div class="dashboard">
            <h1>"Dashboard"</h1>

            <div class="stats-grid">
                <div class="stat-card">
                    <h3>"Total Users"</h3>
                    <div class="stat-value">{move || summary().total}</div>
                </div>

                <div class="stat-card">
                    <h3>"Active"</h3>
                    <div class="stat-value">{move || summary().active}</div>
                </div>

                <div class="stat-card">
                    <h3>"Inactive"</h3>
                    <div class="stat-value">{move || summary().inactive}</div>
                </div>

                <div class="stat-card">
                    <h3>"Suspended"</h3>
                    <div class="stat-value">{move || summary().suspended}</div>
                </div>
            </div>

            <div class="dashboard-section">
                <h2>"Recent Users"</h2>
                {move || if loading.get() {
                    view! {
                        <div class="loading-container">
                            <div class="spinner"></div>
                            <p>"Loading users..."</p>
                        </div>
                    }.into_view()
                } else {
                    let list = users.get();
                    view! {
                        <div class="table-container">
                            <table class="users-table">
                                <thead>
                                    <tr>
                                        <th>"Username"</th>
                                        <th>"Email"</th>
                                        <th>"Role"</th>
                                        <th>"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {if list.is_empty() {
                                        view! {
                                            <tr>
                                                <td colspan="4" class="empty-row">"No users found."</td>
                                            </tr>
                                        }.into_view()
                                    } else {
                                        list.into_iter().enumerate().map(|(index, user)| {
                                            view! {
                                                <tr class=row_class(index)>
                                                    <td>{user.username.clone()}</td>
                                                    <td>{user.email.clone()}</td>
                                                    <td>
                                                        <span class=role_badge_class(&user.role)>
                                                            {user.role.to_string()}
                                                        </span>
                                                    </td>
                                                    <td>
                                                        <span class=status_badge_class(&user.status)>
                                                            {user.status.to_string()}
                                                        </span>
                                                    </td>
                                                </tr>
                                            }
                                        }).collect_view()
                                    }}
                                </tbody>
                            </table>
                        </div>
                    }.into_view()
                }}
            </div>
        </div>
    }
}
