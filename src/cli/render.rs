//! Text rendering of derived views for the shell.

use crate::assistant::Sender;
use crate::currency::format_count;
use crate::domain::{TransactionKind, UserStatus};
use crate::summary::{AdminStats, CashFlow, CategorySpend, GoalsOverview};
use crate::theme::Palette;
use crate::view::{AdminUserView, GoalView, MessageView, Presenter, TransactionView};

use super::output::{self, paint};

const PROGRESS_WIDTH: usize = 20;

pub fn transactions(views: &[TransactionView], total: usize, palette: &Palette) {
    output::section(format!("Transactions ({} of {})", views.len(), total));
    if views.is_empty() {
        output::info("No transactions match the current filters.");
        return;
    }
    for view in views {
        let color = match view.kind {
            TransactionKind::Income => palette.tertiary,
            TransactionKind::Expense => palette.error,
        };
        output::line(format!(
            "  {:<9} {:<20} {:>16}  {}",
            view.icon,
            view.description,
            paint(&view.amount_label, color),
            paint(&view.subtitle, palette.on_surface_variant),
        ));
    }
}

pub fn goals(views: &[GoalView], total: usize, palette: &Palette) {
    output::section(format!("Savings goals ({} of {})", views.len(), total));
    if views.is_empty() {
        output::info("No goals match the current filters.");
        return;
    }
    for view in views {
        let status = if view.completed {
            paint("Completed", palette.tertiary)
        } else if view.days_remaining < 0 {
            paint(format!("{} days overdue", -view.days_remaining), palette.error)
        } else {
            format!("{} days left", view.days_remaining)
        };
        output::line(format!("  {} [{}]  {}", view.title, view.category, status));
        let bar_color = if view.completed {
            palette.tertiary
        } else {
            palette.primary
        };
        output::line(format!(
            "    {} {:>6}  {} / {}  (target {})",
            paint(progress_bar(view.progress_ratio), bar_color),
            view.progress_label,
            view.current_label,
            view.target_label,
            view.target_date_label,
        ));
    }
}

pub fn users(views: &[AdminUserView], total: usize, palette: &Palette) {
    output::section(format!("Users ({} of {})", views.len(), total));
    if views.is_empty() {
        output::info("No users match the current filters.");
        return;
    }
    for view in views {
        let color = if view.status == UserStatus::Active {
            palette.tertiary
        } else {
            palette.on_surface_variant
        };
        output::line(format!(
            "  {:<14} {:<20} {:<9} joined {}",
            view.name,
            view.email,
            paint(&view.status_label, color),
            view.join_date_label,
        ));
    }
}

pub fn cash_flow(flow: &CashFlow, presenter: &Presenter) {
    output::section("Overview");
    output::line(format!("  Income        : {}", presenter.money(flow.income)));
    output::line(format!("  Expenses      : {}", presenter.money(flow.expenses)));
    output::line(format!("  Net           : {}", presenter.money(flow.net)));
    match flow.savings_rate {
        Some(rate) => output::line(format!("  Savings rate  : {:.1}%", rate)),
        None => output::line("  Savings rate  : n/a"),
    }
}

pub fn spending(breakdown: &[CategorySpend], presenter: &Presenter, palette: &Palette) {
    output::section("Spending by category");
    if breakdown.is_empty() {
        output::info("No expenses recorded.");
        return;
    }
    for entry in breakdown {
        output::line(format!(
            "  {:<12} {:>14}  {}",
            entry.category,
            presenter.money(entry.total),
            paint(format!("{:.1}%", entry.share * 100.0), palette.secondary),
        ));
    }
}

pub fn goals_overview(overview: &GoalsOverview, presenter: &Presenter) {
    output::section("Goals");
    output::line(format!(
        "  {} active, {} completed",
        overview.active, overview.completed
    ));
    output::line(format!(
        "  Saved {} of {} ({:.1}%)",
        presenter.money(overview.saved),
        presenter.money(overview.target),
        overview.overall_ratio * 100.0
    ));
}

pub fn admin_stats(stats: &AdminStats, presenter: &Presenter) {
    let locale = presenter.locale();
    output::section("Admin dashboard");
    output::line(format!(
        "  Total Users        : {}",
        format_count(locale, stats.total_users as i64)
    ));
    output::line(format!(
        "  Active Users       : {}",
        format_count(locale, stats.active_users as i64)
    ));
    output::line(format!(
        "  Total Transactions : {}",
        format_count(locale, stats.total_transactions as i64)
    ));
    output::line(format!(
        "  Transaction Volume : {}",
        presenter.money(stats.total_volume)
    ));
}

pub fn message(view: &MessageView, palette: &Palette) {
    let color = match view.sender {
        Sender::Assistant => palette.primary,
        Sender::User => palette.secondary,
    };
    output::line(format!(
        "[{}] {}: {}",
        view.time_label,
        paint(view.author, color),
        view.text
    ));
}

fn progress_bar(ratio: f64) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * PROGRESS_WIDTH as f64).round() as usize;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(PROGRESS_WIDTH - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_has_fixed_width() {
        assert_eq!(progress_bar(0.0).chars().count(), PROGRESS_WIDTH);
        assert_eq!(progress_bar(0.65).chars().filter(|c| *c == '█').count(), 13);
        assert_eq!(progress_bar(1.5).chars().filter(|c| *c == '░').count(), 0);
    }
}
