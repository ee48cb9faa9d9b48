use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use tower_sessions::Session;
use crate::charts;
use crate::errors::AppResult;
use crate::models::{PageQuery, Role, TaskRecord};
use crate::state::AppState;
use super::render::{escape_html, html_table, load_template, notice, select_options};
use super::session::current_user;

pub async fn serve_dashboard(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> AppResult<Response> {
    let user = current_user(&session).await?;
    tracing::info!("Rendering {} dashboard for {}", user.role, user.username);

    // Unrecognised roles get the training section only
    let role_section = match &user.role {
        Role::Admin => admin_section(&state)?,
        Role::FarmerClient => farmer_section(),
        Role::MaintenanceWorker => worker_section(&state)?,
        Role::Other(_) => String::new(),
    };

    let dashboard_html = load_template("dashboard.html")?
        .replace("{{username}}", &escape_html(&user.username))
        .replace("{{role}}", &escape_html(user.role.as_str()))
        .replace("{{notice}}", &notice(query.message.as_deref(), query.error.as_deref()))
        .replace("{{role_section}}", &role_section)
        .replace("{{training}}", &training_section(&state));

    Ok(Html(dashboard_html).into_response())
}

pub(crate) fn task_table(tasks: &[TaskRecord]) -> String {
    html_table(
        &["Task", "Due Date", "Assigned Worker", "Status"],
        tasks.iter().map(|t| {
            vec![
                t.task.clone(),
                t.due_date.clone(),
                t.assigned_worker.clone().unwrap_or_default(),
                t.status.to_string(),
            ]
        }),
    )
}

fn admin_section(state: &AppState) -> AppResult<String> {
    let kpis = state
        .catalog
        .kpis()
        .iter()
        .map(|k| {
            format!(
                r#"<div class="kpi"><span class="kpi-label">{}</span><span class="kpi-value">{}</span></div>"#,
                escape_html(&k.label),
                escape_html(&k.value)
            )
        })
        .collect::<String>();

    let tasks = state.tasks.load()?;
    let sales_chart = charts::sales_bar_chart(state.catalog.sales())?;

    Ok(format!(
        r#"<h2>Admin Dashboard</h2>
<h3>Key Performance Indicators (KPIs)</h3>
<div class="kpis">{}</div>
<h3>Upcoming Maintenance</h3>
{}
<h3>Sales &amp; Licensing</h3>
<div class="chart">{}</div>
<p>Total Revenue: RM {}</p>"#,
        kpis,
        task_table(&tasks),
        sales_chart,
        state.catalog.total_revenue()
    ))
}

fn farmer_section() -> String {
    r#"<h2>Sensor Data Monitoring</h2>
<form action="/sensors/upload" method="post" enctype="multipart/form-data">
  <label>Upload Sensor Data (CSV) <input type="file" name="sensor_file" accept=".csv" required></label>
  <button type="submit">Upload</button>
</form>"#
        .to_string()
}

fn worker_section(state: &AppState) -> AppResult<String> {
    let pending = state.tasks.list_pending()?;
    if pending.is_empty() {
        return Ok("<h2>Maintenance Requests</h2>\n<p>No pending jobs available.</p>".to_string());
    }

    Ok(format!(
        r#"<h2>Maintenance Requests</h2>
<p>Available Jobs:</p>
{}
<form action="/jobs/accept" method="post">
  <label>Select a job to accept <select name="task">{}</select></label>
  <button type="submit">Accept Job</button>
</form>
<p><a href="/jobs/pending">Job board as JSON</a></p>"#,
        task_table(&pending),
        select_options(pending.iter().map(|t| t.task.as_str()))
    ))
}

fn training_section(state: &AppState) -> String {
    let sessions = state.catalog.training_sessions();
    format!(
        r#"<h3>Training &amp; Workshop Bookings</h3>
{}
<form action="/training/book" method="post">
  <label>Choose a session <select name="session">{}</select></label>
  <button type="submit">Book Training</button>
</form>"#,
        html_table(
            &["Session", "Date", "Slots Available"],
            sessions.iter().map(|s| {
                vec![s.session.clone(), s.date.clone(), s.slots_available.to_string()]
            }),
        ),
        select_options(sessions.iter().map(|s| s.session.as_str()))
    )
}
