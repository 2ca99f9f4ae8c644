//! List command

use colored::Colorize;
use serde::Serialize;

use crate::cli::Entity;
use crate::config::get_config;
use crate::data::{FailType, PcStatus, Section};
use crate::interfaces::cli::CliError;
use crate::pipeline::{
    Choice, CountRange, DateQuery, FailAccountCriteria, Page, PageSize, PcStatusCriteria,
    PlaceCriteria, TextQuery, WorkloadCriteria,
};
use crate::services::DashboardService;

/// Flags of `dotplace list`
#[derive(Debug, Clone, Default)]
pub struct ListArgs {
    pub entity: Option<Entity>,
    pub search: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub section: Option<String>,
    pub account: Option<String>,
    pub status: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub page: usize,
    pub page_size: Option<String>,
    pub json: bool,
}

impl ListArgs {
    fn page_size(&self) -> PageSize {
        let config = get_config();
        PageSize::parse(
            self.page_size.as_deref(),
            config.pagination.default_page_size,
            config.pagination.max_page_size,
        )
    }

    fn search(&self) -> TextQuery {
        TextQuery::from_opt(self.search.as_deref())
    }

    fn workload(&self) -> WorkloadCriteria {
        WorkloadCriteria {
            label: self.search(),
            count: CountRange::parse(self.min.as_deref(), self.max.as_deref()),
        }
    }

    /// `--search` matches the PC name, `--account` the account id
    fn fail_account_criteria(&self) -> Result<FailAccountCriteria, CliError> {
        Ok(FailAccountCriteria {
            pc: self.search(),
            account: TextQuery::from_opt(self.account.as_deref()),
            date: self.days(),
            fail_type: Choice::<FailType>::parse(self.status.as_deref())?,
        })
    }

    fn days(&self) -> DateQuery {
        if self.from.is_none() && self.to.is_none() {
            DateQuery::All
        } else {
            DateQuery::range(self.from.as_deref(), self.to.as_deref())
        }
    }
}

pub fn list_entity(service: &DashboardService, args: ListArgs) -> Result<(), CliError> {
    let Some(entity) = args.entity else {
        return Err(CliError::ParseError("No entity given".to_string()));
    };
    let page = args.page;
    let size = args.page_size();

    match entity {
        Entity::Places => {
            let criteria = PlaceCriteria {
                search: args.search(),
                section: Choice::<Section>::parse(args.section.as_deref())?,
                ..Default::default()
            };
            let result = service.places(&criteria, page, size);
            print_page("Places", &result, args.json, |row| {
                format!(
                    "{} {} {} {}",
                    row.pid.cyan(),
                    format!("[{}]", row.section).yellow(),
                    row.keyword,
                    row.place.dimmed()
                )
            })
        }
        Entity::Pcs => {
            let criteria = PcStatusCriteria {
                name: args.search(),
                checked: args.days(),
                status: Choice::<PcStatus>::parse(args.status.as_deref())?,
            };
            let result = service.pc_status(&criteria, page, size);
            print_page("PC status", &result, args.json, |pc| {
                let status = match pc.status {
                    PcStatus::Normal => pc.status.to_string().green(),
                    PcStatus::Error => pc.status.to_string().red(),
                    PcStatus::Offline => pc.status.to_string().dimmed(),
                };
                format!(
                    "{} {} {} jobs: {}",
                    pc.name.cyan(),
                    status,
                    pc.last_checked_at.to_string().dimmed(),
                    pc.job_count
                )
            })
        }
        Entity::PcWorkload => {
            let view = service.pc_workload(&args.workload(), page, size);
            print_page("PC workload", &view.list, args.json, |pc| {
                format!("{} jobs: {}", pc.name.cyan(), pc.job_count.to_string().green())
            })
        }
        Entity::Accounts => {
            let view = service.account_workload(&args.workload(), page, size);
            print_page("Account workload", &view.list, args.json, |account| {
                format!(
                    "{} jobs: {}",
                    account.account_id.cyan(),
                    account.job_count.to_string().green()
                )
            })
        }
        Entity::PlaceInfos => {
            let result = service.place_infos(&args.workload(), page, size);
            print_page("Place job counts", &result, args.json, |info| {
                format!(
                    "{} {} jobs: {}",
                    info.place_key.cyan(),
                    info.place_name,
                    info.job_count.to_string().green()
                )
            })
        }
        Entity::Keywords => {
            let result = service.keywords(&args.workload(), page, size);
            print_page("Keyword job counts", &result, args.json, |kw| {
                format!("{} jobs: {}", kw.keyword.cyan(), kw.job_count.to_string().green())
            })
        }
        Entity::Blogs => {
            let result = service.blogs(&args.workload(), page, size);
            print_page("Blog usage", &result, args.json, |blog| {
                format!(
                    "{} visits: {}",
                    blog.url.blue().underline(),
                    blog.access_count.to_string().green()
                )
            })
        }
        Entity::FailAccounts => {
            let result = service.fail_accounts(&args.fail_account_criteria()?, page, size);
            print_page("Failed logins", &result, args.json, |item| {
                format!(
                    "{} {} {} {} {}",
                    item.id.dimmed(),
                    item.pc_name.cyan(),
                    item.account_id,
                    format!("[{}]", item.fail_type).yellow(),
                    item.date.to_string().dimmed()
                )
            })
        }
    }
}

fn print_page<T, F>(title: &str, page: &Page<T>, json: bool, row: F) -> Result<(), CliError>
where
    T: Serialize,
    F: Fn(&T) -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(page)?);
        return Ok(());
    }

    if page.items.is_empty() {
        println!("{} No rows on page {}", "ℹ".bold().blue(), page.page);
    } else {
        println!("{}", format!("{}:", title).bold().green());
        println!();
        for item in &page.items {
            println!("  {}", row(item));
        }
    }
    println!();
    println!(
        "{} Page {}/{} · {} rows total",
        "ℹ".bold().blue(),
        page.page.to_string().green(),
        page.total_pages,
        page.total.to_string().green()
    );
    if !page.pages.is_empty() {
        let buttons: Vec<String> = page
            .pages
            .iter()
            .map(|p| {
                if *p == page.page {
                    format!("[{}]", p).bold().to_string()
                } else {
                    p.to_string()
                }
            })
            .collect();
        println!("  {}", buttons.join(" "));
    }
    Ok(())
}
