use jobportal::dashboard::{ApplicationRowView, DashboardView};

/// Render the dashboard the way the portal's card lays it out: a loading
/// line, an empty-state prompt, or one block per application.
pub(crate) fn render_dashboard(view: &DashboardView) {
    println!("\nJob Applications");
    println!("Track the status of your job applications");

    if view.loading {
        println!("  Loading your applications...");
        return;
    }

    if view.rows.is_empty() {
        println!("  No applications yet");
        println!("  You haven't applied to any jobs yet. Start exploring opportunities!");
        println!("  Browse jobs: {}", view.browse_link);
        return;
    }

    for row in &view.rows {
        render_row(row);
    }
}

fn render_row(row: &ApplicationRowView) {
    let mut line = format!(
        "  - {} | {} | Applied on {} | {} {}",
        row.job_title, row.company, row.applied_on, row.status_symbol, row.status_label
    );
    if row.withdrawing {
        line.push_str(" | Withdrawing...");
    } else if row.withdrawable {
        line.push_str(" | withdraw available");
    }
    println!("{line}");
    println!("    View job: {}", row.job_link);
}
