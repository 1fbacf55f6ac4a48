//! Host report.

use std::fmt::Write;

use clap::Args;
use jiff::{Zoned, civil::Date};
use spacelet_app::{
    context::AppContext,
    domain::{
        spaces::SpacesService,
        tenants::{TenantsService, lease::LeaseStanding},
        users::records::UserUuid,
    },
};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct HostReportArgs {
    /// Host user UUID
    #[arg(long)]
    host_uuid: Uuid,

    /// Date the report is computed for (YYYY-MM-DD); defaults to today
    #[arg(long)]
    today: Option<Date>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: HostReportArgs) -> Result<(), String> {
    let app = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| error.to_string())?;

    let today = args.today.unwrap_or_else(|| Zoned::now().date());

    let report = render_host_report(
        app.spaces.as_ref(),
        app.tenants.as_ref(),
        UserUuid::from_uuid(args.host_uuid),
        today,
    )
    .await?;

    print!("{report}");

    Ok(())
}

fn describe_standing(standing: LeaseStanding) -> String {
    match standing {
        LeaseStanding::Current => "current".to_string(),
        LeaseStanding::EndingSoon { days_left } => format!("ending in {days_left}d"),
        LeaseStanding::Expired { days_overdue } => format!("overdue {days_overdue}d"),
        LeaseStanding::Deleted => "deleted".to_string(),
    }
}

pub(crate) async fn render_host_report(
    spaces: &dyn SpacesService,
    tenants: &dyn TenantsService,
    host: UserUuid,
    today: Date,
) -> Result<String, String> {
    let space_metrics = spaces
        .space_metrics(host)
        .await
        .map_err(|error| format!("failed to load space metrics: {error}"))?;

    let tenant_metrics = tenants
        .tenant_metrics(host, today)
        .await
        .map_err(|error| format!("failed to load tenant metrics: {error}"))?;

    let listed = spaces
        .list_spaces(host)
        .await
        .map_err(|error| format!("failed to list spaces: {error}"))?;

    let leases = tenants
        .list_host_tenants(host, today)
        .await
        .map_err(|error| format!("failed to list tenants: {error}"))?;

    let mut out = String::new();

    writeln!(out, "host: {host}").map_err(|e| e.to_string())?;
    writeln!(out, "as of: {today}").map_err(|e| e.to_string())?;
    writeln!(
        out,
        "spaces: {} ({} active)",
        space_metrics.total_spaces, space_metrics.active_spaces
    )
    .map_err(|e| e.to_string())?;
    writeln!(
        out,
        "tenants: {} ({} active)",
        tenant_metrics.total_tenants, tenant_metrics.active_tenants
    )
    .map_err(|e| e.to_string())?;
    writeln!(out, "monthly revenue: {}", space_metrics.monthly_revenue)
        .map_err(|e| e.to_string())?;
    writeln!(
        out,
        "leases ending soon: {}",
        tenant_metrics.leases_ending_soon
    )
    .map_err(|e| e.to_string())?;

    if !listed.is_empty() {
        let mut builder = Builder::default();

        builder.push_record(["Space", "Type", "City", "Active", "Tenants"]);

        for summary in &listed {
            builder.push_record([
                summary.space.title.clone(),
                summary.space.space_type.clone(),
                summary.space.city.clone(),
                if summary.space.is_active { "yes" } else { "no" }.to_string(),
                summary.tenant_count.to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.modify(Columns::new(4..5), Alignment::right());

        writeln!(out, "\n{table}").map_err(|e| e.to_string())?;
    }

    if !leases.is_empty() {
        let mut builder = Builder::default();

        builder.push_record(["Tenant", "Space", "Ends", "Rent", "Standing"]);

        for lease in &leases {
            builder.push_record([
                format!("{} {}", lease.tenant.first_name, lease.tenant.last_name),
                lease.space_title.clone(),
                lease.tenant.end_date.to_string(),
                lease.tenant.rent_amount.to_string(),
                describe_standing(lease.standing),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.modify(Columns::new(3..4), Alignment::right());

        writeln!(out, "\n{table}").map_err(|e| e.to_string())?;
    }

    Ok(out)
}
